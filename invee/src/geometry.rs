use crate::{
    constants::{APEX_ANGLE, K, MAX_FREQUENCY, MIN_ELEVATION, MIN_FREQUENCY},
    error::{Bound, VeeError},
};

/// Dimensions of an inverted-V dipole cut for a single frequency.
///
/// Each leg is the hypotenuse of a right triangle dropped from the
/// apex, so mast height and ground span follow from the apex
/// half-angle. Raising the mast foot by `elevation` stretches the
/// ground span by the same ratio as the apex height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvertedVee {
    /// Operating frequency (MHz).
    freq_mhz: f64,

    /// Height of the mast foot above the anchor points (meters).
    elevation_m: f64,

    /// Angle between the two legs (degrees).
    apex_deg: f64,
}

impl InvertedVee {
    /// Returns a vee for `freq_mhz` with the mast foot at ground
    /// level.
    pub fn new(freq_mhz: f64) -> Result<Self, VeeError> {
        Self::builder().freq(freq_mhz).build()
    }

    /// Returns a vee for `freq_mhz` with the mast foot raised by
    /// `elevation_m`.
    pub fn with_elevation(freq_mhz: f64, elevation_m: f64) -> Result<Self, VeeError> {
        Self::builder().freq(freq_mhz).elevation(elevation_m).build()
    }

    pub fn builder() -> InvertedVeeBuilder {
        InvertedVeeBuilder {
            freq_mhz: None,
            elevation_m: MIN_ELEVATION,
            apex_deg: APEX_ANGLE,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.freq_mhz
    }

    pub fn elevation(&self) -> f64 {
        self.elevation_m
    }

    pub fn apex_angle(&self) -> f64 {
        self.apex_deg
    }

    /// Total wire length of the dipole (meters).
    pub fn total_length(&self) -> f64 {
        K / self.freq_mhz
    }

    /// Length of a single leg (meters).
    pub fn one_pole_length(&self) -> f64 {
        self.total_length() / 2.0
    }

    /// Height of the apex above the anchor points (meters).
    pub fn height(&self) -> f64 {
        self.base_height(self.elevation_m)
    }

    /// Horizontal distance between the two anchor points (meters).
    pub fn ground_length(&self) -> f64 {
        let ground_length = self.half_angle().sin() * self.one_pole_length() * 2.0;
        if self.elevation_m > 0.0 {
            ground_length * self.ratio()
        } else {
            ground_length
        }
    }

    /// Rope needed per leg to reach the anchor point once the mast
    /// foot is raised (meters).
    pub fn rope_length_to_add(&self) -> f64 {
        if self.elevation_m > 0.0 {
            self.ratio() * self.one_pole_length() - self.one_pole_length()
        } else {
            0.0
        }
    }

    /// Apex height at the current elevation relative to the apex
    /// height with the mast foot on the ground.
    pub fn ratio(&self) -> f64 {
        self.base_height(self.elevation_m) / self.base_height(0.0)
    }

    /// Returns every derived value in one record.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            frequency: self.freq_mhz,
            elevation: self.elevation_m,
            total_length: self.total_length(),
            one_pole_length: self.one_pole_length(),
            height: self.height(),
            ground_length: self.ground_length(),
            rope_length_to_add: self.rope_length_to_add(),
        }
    }

    fn half_angle(&self) -> f64 {
        (self.apex_deg / 2.0).to_radians()
    }

    fn base_height(&self, elevation_m: f64) -> f64 {
        self.half_angle().cos() * self.one_pole_length() + elevation_m
    }
}

pub struct InvertedVeeBuilder {
    /// Operating frequency (MHz, required).
    freq_mhz: Option<f64>,

    /// Mast foot elevation (meters, defaults to 0).
    elevation_m: f64,

    /// Angle between the legs (degrees, defaults to 120).
    apex_deg: f64,
}

impl InvertedVeeBuilder {
    /// Operating frequency (MHz, required).
    #[must_use]
    pub fn freq(mut self, freq_mhz: f64) -> Self {
        self.freq_mhz = Some(freq_mhz);
        self
    }

    /// Mast foot elevation (meters, defaults to 0).
    #[must_use]
    pub fn elevation(mut self, meters: f64) -> Self {
        self.elevation_m = meters;
        self
    }

    /// Angle between the legs (degrees, defaults to 120).
    #[must_use]
    pub fn apex_angle(mut self, degrees: f64) -> Self {
        self.apex_deg = degrees;
        self
    }

    pub fn build(&self) -> Result<InvertedVee, VeeError> {
        let freq_mhz = self.freq_mhz.ok_or(VeeError::Builder("freq"))?;

        if freq_mhz.is_nan() || freq_mhz < MIN_FREQUENCY {
            return Err(VeeError::InvalidArgument(
                "frequency",
                Bound::AtLeast(MIN_FREQUENCY),
            ));
        }
        if freq_mhz > MAX_FREQUENCY {
            return Err(VeeError::InvalidArgument(
                "frequency",
                Bound::AtMost(MAX_FREQUENCY),
            ));
        }
        if !self.elevation_m.is_finite() || self.elevation_m < MIN_ELEVATION {
            return Err(VeeError::InvalidArgument(
                "elevation",
                Bound::AtLeast(MIN_ELEVATION),
            ));
        }
        if self.apex_deg.is_nan() || self.apex_deg <= 0.0 {
            return Err(VeeError::InvalidArgument("apex angle", Bound::Above(0.0)));
        }
        if self.apex_deg >= 180.0 {
            return Err(VeeError::InvalidArgument("apex angle", Bound::Below(180.0)));
        }

        Ok(InvertedVee {
            freq_mhz,
            elevation_m: self.elevation_m,
            apex_deg: self.apex_deg,
        })
    }
}

/// Snapshot of an [`InvertedVee`]'s derived values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// MHz.
    pub frequency: f64,
    pub elevation: f64,
    pub total_length: f64,
    pub one_pole_length: f64,
    pub height: f64,
    pub ground_length: f64,
    pub rope_length_to_add: f64,
}

#[cfg(test)]
mod tests {
    use super::InvertedVee;
    use crate::error::{Bound, VeeError};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_total_length() {
        let vee = InvertedVee::new(7.1).unwrap();
        assert_abs_diff_eq!(vee.total_length(), 20.0, epsilon = 0.005);
        for freq in [0.1, 1.83, 3.65, 14.18, 28.85, 30.0] {
            let vee = InvertedVee::new(freq).unwrap();
            assert_eq!(vee.total_length(), 142.0 / freq);
        }
    }

    #[test]
    fn test_height() {
        let vee = InvertedVee::new(7.1).unwrap();
        assert_abs_diff_eq!(vee.height(), 5.0, epsilon = 0.005);
    }

    #[test]
    fn test_height_with_elevation() {
        let vee = InvertedVee::with_elevation(7.1, 2.0).unwrap();
        assert_abs_diff_eq!(vee.height(), 7.0, epsilon = 0.005);
    }

    #[test]
    fn test_ground_length() {
        let vee = InvertedVee::new(7.1).unwrap();
        assert_abs_diff_eq!(vee.ground_length(), 17.32, epsilon = 0.005);
    }

    #[test]
    fn test_ground_length_with_elevation() {
        let vee = InvertedVee::with_elevation(7.1, 2.0).unwrap();
        assert_abs_diff_eq!(vee.ground_length(), 24.25, epsilon = 0.005);
    }

    #[test]
    fn test_rope_length_to_add() {
        let vee = InvertedVee::with_elevation(7.1, 2.0).unwrap();
        assert_abs_diff_eq!(vee.rope_length_to_add(), 4.0, epsilon = 0.005);
        assert_eq!(InvertedVee::new(7.1).unwrap().rope_length_to_add(), 0.0);
        assert_eq!(
            InvertedVee::with_elevation(7.1, 0.0)
                .unwrap()
                .rope_length_to_add(),
            0.0
        );
    }

    #[test]
    fn test_zero_elevation_is_unscaled() {
        let vee = InvertedVee::with_elevation(14.18, 0.0).unwrap();
        let unscaled = 2.0 * 60_f64.to_radians().sin() * vee.one_pole_length();
        assert_eq!(vee.ground_length(), unscaled);
        assert_eq!(vee.ratio(), 1.0);
    }

    #[test]
    fn test_elevation_is_monotonic() {
        let mut prev = InvertedVee::new(10.13).unwrap();
        for step in 1..=40 {
            let vee = InvertedVee::with_elevation(10.13, f64::from(step) * 0.25).unwrap();
            assert!(vee.height() > prev.height());
            assert!(vee.ground_length() > prev.ground_length());
            assert!(vee.rope_length_to_add() > 0.0);
            prev = vee;
        }
    }

    #[test]
    fn test_custom_apex_angle() {
        let vee = InvertedVee::builder()
            .freq(7.1)
            .apex_angle(90.0)
            .build()
            .unwrap();
        let leg = 10.0;
        let side = leg * std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(vee.height(), side, epsilon = 1e-9);
        assert_abs_diff_eq!(vee.ground_length(), 2.0 * side, epsilon = 1e-9);
    }

    #[test]
    fn test_dimensions() {
        let dims = InvertedVee::with_elevation(7.1, 2.0).unwrap().dimensions();
        assert_eq!(dims.frequency, 7.1);
        assert_eq!(dims.elevation, 2.0);
        assert_abs_diff_eq!(dims.total_length, 20.0, epsilon = 0.005);
        assert_abs_diff_eq!(dims.one_pole_length, 10.0, epsilon = 0.005);
        assert_abs_diff_eq!(dims.height, 7.0, epsilon = 0.005);
        assert_abs_diff_eq!(dims.ground_length, 24.25, epsilon = 0.005);
        assert_abs_diff_eq!(dims.rope_length_to_add, 4.0, epsilon = 0.005);
    }

    #[test]
    fn test_invalid_frequency() {
        assert_eq!(
            InvertedVee::new(0.0),
            Err(VeeError::InvalidArgument("frequency", Bound::AtLeast(0.1)))
        );
        assert_eq!(
            InvertedVee::new(30.01),
            Err(VeeError::InvalidArgument("frequency", Bound::AtMost(30.0)))
        );
        assert!(InvertedVee::new(f64::NAN).is_err());
        assert!(InvertedVee::new(0.1).is_ok());
        assert!(InvertedVee::new(30.0).is_ok());
    }

    #[test]
    fn test_invalid_elevation() {
        assert_eq!(
            InvertedVee::with_elevation(7.1, -1.0),
            Err(VeeError::InvalidArgument("elevation", Bound::AtLeast(0.0)))
        );
        assert!(InvertedVee::with_elevation(7.1, f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_apex_angle() {
        for apex in [0.0, -10.0, 180.0, 270.0] {
            let res = InvertedVee::builder().freq(7.1).apex_angle(apex).build();
            assert!(matches!(res, Err(VeeError::InvalidArgument("apex angle", _))));
        }
    }

    #[test]
    fn test_missing_freq() {
        assert_eq!(
            InvertedVee::builder().elevation(2.0).build(),
            Err(VeeError::Builder("freq"))
        );
    }
}
