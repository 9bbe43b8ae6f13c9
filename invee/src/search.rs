use crate::{
    band::{Band, HAM_BANDS},
    constants::{
        ELEVATION_STEP, FREQUENCY_STEP, MAX_SEARCH_ELEVATION, MIN_ELEVATION, MIN_FREQUENCY,
        MIN_GROUND_LENGTH,
    },
    error::{Bound, VeeError},
    geometry::InvertedVee,
};
use log::debug;

/// A band whose center frequency fits the available ground.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkableBand {
    pub designator: u16,

    /// Frequency the antenna is cut for (MHz).
    pub center_freq: f64,

    /// Lower band edge (MHz).
    pub min_freq: f64,

    /// Highest tested mast foot elevation that still fits (meters).
    pub elevation: f64,

    /// Apex height above the anchor points (meters).
    pub height: f64,

    /// Distance between the anchor points (meters).
    pub ground_length: f64,

    /// Total wire length (meters).
    pub total_length: f64,

    /// Extra rope per leg at `elevation` (meters).
    pub rope_length_to_add: f64,
}

/// The longest antenna that fits the available ground with the mast
/// foot on the ground.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxAntenna {
    /// Lowest usable frequency (MHz).
    pub min_freq: f64,
    pub total_length: f64,
    pub height: f64,
    pub ground_length: f64,
}

/// Finds which bands fit into a given stretch of ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSearch {
    max_ground_m: i32,
    max_elevation_m: i32,
}

impl BandSearch {
    /// Returns a search over `max_ground_m` meters of ground with the
    /// mast foot kept at ground level.
    pub fn new(max_ground_m: i32) -> Result<Self, VeeError> {
        Self::builder().max_ground(max_ground_m).build()
    }

    /// Returns a search that may raise the mast foot up to
    /// `max_elevation_m` meters.
    pub fn with_elevation(max_ground_m: i32, max_elevation_m: i32) -> Result<Self, VeeError> {
        Self::builder()
            .max_ground(max_ground_m)
            .max_elevation(max_elevation_m)
            .build()
    }

    pub fn builder() -> BandSearchBuilder {
        BandSearchBuilder {
            max_ground_m: None,
            max_elevation_m: 0,
        }
    }

    pub fn max_ground(&self) -> i32 {
        self.max_ground_m
    }

    pub fn max_elevation(&self) -> i32 {
        self.max_elevation_m
    }

    /// Returns every band that fits, highest designator first.
    ///
    /// Each band is tried from the maximum elevation downward in
    /// [`ELEVATION_STEP`] increments and the first elevation that fits
    /// is kept. Ground level is only tried when the maximum elevation
    /// is 0; otherwise the walk ends one step above it.
    pub fn workable_bands(&self) -> Result<Vec<WorkableBand>, VeeError> {
        let mut bands: Vec<&Band> = HAM_BANDS.iter().collect();
        bands.sort_by(|a, b| b.designator.cmp(&a.designator));

        let mut workable = Vec::with_capacity(bands.len());
        for band in bands {
            match self.fit_band(band)? {
                Some(fit) => {
                    debug!(
                        "band {}m; fits at elevation {} m, ground {:.2} m",
                        band.designator, fit.elevation, fit.ground_length
                    );
                    workable.push(fit);
                }
                None => debug!("band {}m; does not fit", band.designator),
            }
        }

        if workable.is_empty() {
            return Err(VeeError::NotEnoughSpace(self.max_ground_m));
        }
        Ok(workable)
    }

    /// Returns the lowest frequency whose antenna still fits the
    /// ground with the mast foot at ground level.
    ///
    /// The sweep starts at the lower edge of the first workable band
    /// and steps down by [`FREQUENCY_STEP`] until the ground span no
    /// longer fits. When the lower edge itself does not fit, the sweep
    /// starts from that band's center frequency instead.
    pub fn longest_antenna(&self) -> Result<MaxAntenna, VeeError> {
        let workable = self.workable_bands()?;
        let first = workable
            .first()
            .ok_or(VeeError::NotEnoughSpace(self.max_ground_m))?;

        let lower_edge = InvertedVee::new(first.min_freq)?;
        let start = if self.fits(&lower_edge) {
            lower_edge
        } else {
            debug!(
                "band {}m; lower edge {} MHz does not fit, sweeping from center",
                first.designator, first.min_freq
            );
            // Fits: span only grows with elevation.
            InvertedVee::new(first.center_freq)?
        };
        let vee = self.sweep_down(start)?;

        Ok(MaxAntenna {
            min_freq: vee.frequency(),
            total_length: vee.total_length(),
            height: vee.height(),
            ground_length: vee.ground_length(),
        })
    }

    fn fits(&self, vee: &InvertedVee) -> bool {
        vee.ground_length() <= f64::from(self.max_ground_m)
    }

    fn fit_band(&self, band: &Band) -> Result<Option<WorkableBand>, VeeError> {
        let center_freq = band.center_freq();
        let max_elevation = f64::from(self.max_elevation_m);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = ((max_elevation / ELEVATION_STEP).round() as u32).max(1);

        for step in 0..steps {
            let elevation = max_elevation - f64::from(step) * ELEVATION_STEP;
            let vee = InvertedVee::with_elevation(center_freq, elevation)?;
            if self.fits(&vee) {
                return Ok(Some(WorkableBand {
                    designator: band.designator,
                    center_freq,
                    min_freq: band.min_freq,
                    elevation,
                    height: vee.height(),
                    ground_length: vee.ground_length(),
                    total_length: vee.total_length(),
                    rope_length_to_add: vee.rope_length_to_add(),
                }));
            }
        }
        Ok(None)
    }

    /// Returns the last fitting vee walking down from `start`, which
    /// must itself fit.
    fn sweep_down(&self, start: InvertedVee) -> Result<InvertedVee, VeeError> {
        let start_mhz = start.frequency();
        let mut last_fit = start;
        let mut steps = 1_u32;
        loop {
            let freq_mhz = start_mhz - f64::from(steps) * FREQUENCY_STEP;
            if freq_mhz < MIN_FREQUENCY {
                break;
            }
            let vee = InvertedVee::new(freq_mhz)?;
            if !self.fits(&vee) {
                break;
            }
            last_fit = vee;
            steps += 1;
        }
        debug!("sweep from {start_mhz} MHz; {steps} fitting steps");
        Ok(last_fit)
    }
}

pub struct BandSearchBuilder {
    /// Available ground length (meters, required).
    max_ground_m: Option<i32>,

    /// Highest mast foot elevation to try (meters, defaults to 0).
    max_elevation_m: i32,
}

impl BandSearchBuilder {
    /// Available ground length (meters, required).
    #[must_use]
    pub fn max_ground(mut self, meters: i32) -> Self {
        self.max_ground_m = Some(meters);
        self
    }

    /// Highest mast foot elevation to try (meters, defaults to 0).
    #[must_use]
    pub fn max_elevation(mut self, meters: i32) -> Self {
        self.max_elevation_m = meters;
        self
    }

    pub fn build(&self) -> Result<BandSearch, VeeError> {
        let max_ground_m = self.max_ground_m.ok_or(VeeError::Builder("max_ground"))?;
        if max_ground_m < MIN_GROUND_LENGTH {
            return Err(VeeError::InvalidArgument(
                "ground length",
                Bound::AtLeast(f64::from(MIN_GROUND_LENGTH)),
            ));
        }
        if f64::from(self.max_elevation_m) < MIN_ELEVATION {
            return Err(VeeError::InvalidArgument(
                "elevation",
                Bound::AtLeast(MIN_ELEVATION),
            ));
        }
        if self.max_elevation_m > MAX_SEARCH_ELEVATION {
            return Err(VeeError::InvalidArgument(
                "elevation",
                Bound::AtMost(f64::from(MAX_SEARCH_ELEVATION)),
            ));
        }
        Ok(BandSearch {
            max_ground_m,
            max_elevation_m: self.max_elevation_m,
        })
    }
}
