//! Canonical design constants.
//!
//! Frequencies are in MHz, lengths in meters and angles in degrees.

/// Empirical half-wave multiplier: total wire length in meters is
/// `K / f_mhz`.
pub const K: f64 = 142.0;

/// Lowest frequency the calculator accepts.
pub const MIN_FREQUENCY: f64 = 0.1;

/// Highest frequency the calculator accepts.
pub const MAX_FREQUENCY: f64 = 30.0;

/// Lowest mast base elevation.
pub const MIN_ELEVATION: f64 = 0.0;

/// Angle between the two legs at the top of the mast.
pub const APEX_ANGLE: f64 = 120.0;

/// Smallest usable ground length for a band search.
pub const MIN_GROUND_LENGTH: i32 = 1;

/// Elevation decrement used while fitting a band.
pub const ELEVATION_STEP: f64 = 0.25;

/// Frequency decrement used while looking for the longest antenna.
pub const FREQUENCY_STEP: f64 = 0.01;

/// Highest mast foot elevation a band search will walk down from.
pub const MAX_SEARCH_ELEVATION: i32 = 1_000;
