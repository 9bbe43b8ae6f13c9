use clap::{Parser, Subcommand, ValueEnum};
use invee::constants::APEX_ANGLE;

/// Size inverted-V dipoles and find which bands fit your ground.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned columns for humans.
    Table,
    Csv,
    Json,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Dimensions of a single antenna.
    Antenna {
        /// Operating frequency, in MHz.
        #[arg(long, required_unless_present = "band", conflicts_with = "band")]
        freq: Option<f64>,

        /// Cut for the center of an amateur band instead, e.g. `40`.
        #[arg(short, long)]
        band: Option<u16>,

        /// Mast foot elevation above the anchor points, in meters.
        #[arg(short, long, default_value_t = 0.0)]
        elevation: f64,

        /// Angle between the two legs, in degrees.
        #[arg(short, long, default_value_t = APEX_ANGLE)]
        apex_angle: f64,
    },

    /// List every amateur band that fits the available ground.
    Bands {
        /// Available ground length, in meters.
        #[arg(short, long)]
        ground: i32,

        /// Highest mast foot elevation to try, in meters.
        #[arg(short = 'e', long, default_value_t = 0)]
        max_elevation: i32,
    },

    /// Find the longest antenna that fits the available ground.
    Longest {
        /// Available ground length, in meters.
        #[arg(short, long)]
        ground: i32,

        /// Highest mast foot elevation used while matching bands, in
        /// meters.
        #[arg(short = 'e', long, default_value_t = 0)]
        max_elevation: i32,
    },
}
