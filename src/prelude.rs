//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use afinidad::prelude::*;
//! ```

pub use crate::error::{AfinidadError, Result};
pub use crate::projection::MutualRatings;
pub use crate::ratings::RatingsRepository;
pub use crate::similarity::{pearson, rank_similar};
