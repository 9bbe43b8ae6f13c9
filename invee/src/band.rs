/// An amateur radio frequency allocation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Conventional label, e.g. `40` for the 40 m band.
    pub designator: u16,

    /// Lower edge (MHz).
    pub min_freq: f64,

    /// Upper edge (MHz).
    pub max_freq: f64,
}

impl Band {
    pub const fn new(designator: u16, min_freq: f64, max_freq: f64) -> Self {
        Self {
            designator,
            min_freq,
            max_freq,
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.max_freq - self.min_freq
    }

    /// Middle of the band, rounded to the nearest 10 kHz with ties
    /// going to the even digit.
    pub fn center_freq(&self) -> f64 {
        ((self.min_freq + self.bandwidth() / 2.0) * 100.0).round_ties_even() / 100.0
    }
}

/// Amateur HF/MF/LF allocations, longest wavelength first.
pub const HAM_BANDS: [Band; 12] = [
    Band::new(2200, 0.1357, 0.1378),
    Band::new(630, 0.472, 0.479),
    Band::new(160, 1.810, 1.850),
    Band::new(80, 3.500, 3.800),
    Band::new(60, 5.3515, 5.3665),
    Band::new(40, 7.000, 7.200),
    Band::new(30, 10.100, 10.150),
    Band::new(20, 14.000, 14.350),
    Band::new(17, 18.068, 18.168),
    Band::new(15, 21.000, 21.450),
    Band::new(12, 24.890, 24.990),
    Band::new(10, 28.000, 29.700),
];

/// Returns the band labelled `designator`, if any.
pub fn find(designator: u16) -> Option<&'static Band> {
    HAM_BANDS.iter().find(|band| band.designator == designator)
}
