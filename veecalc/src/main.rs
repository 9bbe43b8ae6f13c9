mod options;

use anyhow::{anyhow, Error as AnyError};
use clap::Parser;
use invee::{BandSearch, Dimensions, InvertedVee, MaxAntenna, WorkableBand};
use log::info;
use options::{Cli, Command as CliCmd, Format};
use serde::Serialize;
use std::io::Write;

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let Cli { format, cmd } = Cli::parse();

    match cmd {
        CliCmd::Antenna {
            freq,
            band,
            elevation,
            apex_angle,
        } => {
            let freq = resolve_freq(freq, band)?;
            let vee = InvertedVee::builder()
                .freq(freq)
                .elevation(elevation)
                .apex_angle(apex_angle)
                .build()?;
            info!("antenna; freq: {freq} MHz, elevation: {elevation} m, apex: {apex_angle}°");
            print_antenna(format, &vee.dimensions())
        }
        CliCmd::Bands {
            ground,
            max_elevation,
        } => {
            let search = BandSearch::with_elevation(ground, max_elevation)?;
            info!("bands; ground: {ground} m, max_elevation: {max_elevation} m");
            print_bands(format, &search.workable_bands()?)
        }
        CliCmd::Longest {
            ground,
            max_elevation,
        } => {
            let search = BandSearch::with_elevation(ground, max_elevation)?;
            info!("longest; ground: {ground} m, max_elevation: {max_elevation} m");
            print_longest(format, &search.longest_antenna()?)
        }
    }
}

/// Returns `freq`, or the center of the band labelled `band`.
fn resolve_freq(freq: Option<f64>, band: Option<u16>) -> Result<f64, AnyError> {
    match (freq, band) {
        (Some(freq), _) => Ok(freq),
        (None, Some(designator)) => invee::band::find(designator)
            .map(|band| band.center_freq())
            .ok_or_else(|| anyhow!("unknown band {designator}m")),
        (None, None) => Err(anyhow!("either --freq or --band is required")),
    }
}

fn print_antenna(format: Format, dims: &Dimensions) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Json => write_json(&mut stdout, dims)?,
        Format::Csv => {
            writeln!(
                stdout,
                "Frequency,Elevation,TotalLength,PoleLength,Height,GroundLength,RopeToAdd"
            )?;
            writeln!(
                stdout,
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2}",
                dims.frequency,
                dims.elevation,
                dims.total_length,
                dims.one_pole_length,
                dims.height,
                dims.ground_length,
                dims.rope_length_to_add
            )?;
        }
        Format::Table => {
            writeln!(stdout, "frequency:      {:>8.3} MHz", dims.frequency)?;
            writeln!(stdout, "elevation:      {:>8.2} m", dims.elevation)?;
            writeln!(stdout, "total length:   {:>8.2} m", dims.total_length)?;
            writeln!(stdout, "pole length:    {:>8.2} m", dims.one_pole_length)?;
            writeln!(stdout, "height:         {:>8.2} m", dims.height)?;
            writeln!(stdout, "ground length:  {:>8.2} m", dims.ground_length)?;
            writeln!(stdout, "rope to add:    {:>8.2} m", dims.rope_length_to_add)?;
        }
    }
    Ok(())
}

fn print_bands(format: Format, bands: &[WorkableBand]) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Json => write_json(&mut stdout, bands)?,
        Format::Csv => {
            writeln!(
                stdout,
                "Band,CenterFrequency,MinFrequency,Elevation,Height,GroundLength,TotalLength,RopeToAdd"
            )?;
            for band in bands {
                writeln!(
                    stdout,
                    "{},{},{},{},{:.2},{:.2},{:.2},{:.2}",
                    band.designator,
                    band.center_freq,
                    band.min_freq,
                    band.elevation,
                    band.height,
                    band.ground_length,
                    band.total_length,
                    band.rope_length_to_add
                )?;
            }
        }
        Format::Table => {
            writeln!(
                stdout,
                "{:>5} {:>9} {:>9} {:>9} {:>8} {:>8} {:>8} {:>8}",
                "band", "center", "min", "elev", "height", "ground", "wire", "rope"
            )?;
            for band in bands {
                writeln!(
                    stdout,
                    "{:>4}m {:>9.4} {:>9.4} {:>9.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
                    band.designator,
                    band.center_freq,
                    band.min_freq,
                    band.elevation,
                    band.height,
                    band.ground_length,
                    band.total_length,
                    band.rope_length_to_add
                )?;
            }
        }
    }
    Ok(())
}

fn print_longest(format: Format, max: &MaxAntenna) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    match format {
        Format::Json => write_json(&mut stdout, max)?,
        Format::Csv => {
            writeln!(stdout, "MinFrequency,TotalLength,Height,GroundLength")?;
            writeln!(
                stdout,
                "{:.4},{:.2},{:.2},{:.2}",
                max.min_freq, max.total_length, max.height, max.ground_length
            )?;
        }
        Format::Table => {
            writeln!(stdout, "min frequency:  {:>8.3} MHz", max.min_freq)?;
            writeln!(stdout, "total length:   {:>8.2} m", max.total_length)?;
            writeln!(stdout, "height:         {:>8.2} m", max.height)?;
            writeln!(stdout, "ground length:  {:>8.2} m", max.ground_length)?;
        }
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), AnyError> {
    let json = serde_json::to_string(value)?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        options::{Cli, Command, Format},
        resolve_freq,
    };
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bands() {
        let cli = Cli::try_parse_from(["veecalc", "--format", "json", "bands", "-g", "26", "-e", "5"])
            .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(matches!(
            cli.cmd,
            Command::Bands {
                ground: 26,
                max_elevation: 5
            }
        ));
    }

    #[test]
    fn test_parse_antenna_defaults() {
        let cli = Cli::try_parse_from(["veecalc", "antenna", "--freq", "7.1"]).unwrap();
        assert_eq!(cli.format, Format::Table);
        match cli.cmd {
            Command::Antenna {
                freq,
                band,
                elevation,
                apex_angle,
            } => {
                assert_eq!(freq, Some(7.1));
                assert_eq!(band, None);
                assert_eq!(elevation, 0.0);
                assert_eq!(apex_angle, 120.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_antenna_by_band() {
        let cli = Cli::try_parse_from(["veecalc", "antenna", "--band", "30"]).unwrap();
        let Command::Antenna { freq, band, .. } = &cli.cmd else {
            panic!("unexpected command {:?}", cli.cmd);
        };
        assert_eq!(resolve_freq(*freq, *band).unwrap(), 10.12);
        assert!(resolve_freq(None, Some(6)).is_err());
        assert!(Cli::try_parse_from(["veecalc", "antenna"]).is_err());
        assert!(
            Cli::try_parse_from(["veecalc", "antenna", "--freq", "7.1", "--band", "40"]).is_err()
        );
    }
}
