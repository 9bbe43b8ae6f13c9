//! # Inverted-V Dipole Sizing
//!
//! `invee` works out how much mast, wire and ground an inverted-V
//! dipole needs, and which amateur bands fit into a given amount of
//! ground.
//!
//! ```
//! use invee::{BandSearch, InvertedVee};
//!
//! let vee = InvertedVee::new(7.1)?;
//! assert!((vee.ground_length() - 17.32).abs() < 0.005);
//!
//! let bands = BandSearch::new(26)?.workable_bands()?;
//! assert_eq!(bands[0].designator, 60);
//! # Ok::<(), invee::VeeError>(())
//! ```

pub mod band;
pub mod constants;
mod error;
pub mod geometry;
pub mod search;

pub use crate::{
    band::{Band, HAM_BANDS},
    error::{Bound, VeeError},
    geometry::{Dimensions, InvertedVee},
    search::{BandSearch, MaxAntenna, WorkableBand},
};
