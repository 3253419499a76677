//! Afinidad: pairwise taste similarity from shared item ratings.
//!
//! Afinidad computes how similarly two users rate the items they have
//! both rated, using the Pearson product-moment correlation over the
//! mutual item set. Around that core it provides a tabular projection of
//! the mutually-rated items, CSV load/save for ratings data, and a
//! scatter-plot renderer for a user pair.
//!
//! The engine holds no state: the caller owns a [`ratings::RatingsRepository`]
//! value and the engine only reads it. Degenerate comparisons (no mutual
//! items, zero variance, unknown user) resolve to a score of 0.0 rather
//! than an error, so the similarity functions are total.
//!
//! # Quick Start
//!
//! ```
//! use afinidad::prelude::*;
//!
//! let mut repo = RatingsRepository::sample();
//! repo.rate("Ana", "Inception", 4.0);
//! repo.rate("Ana", "Avatar", 2.0);
//!
//! // Score one pair
//! let score = pearson(&repo, "Sam", "William");
//! assert!((-1.0..=1.0).contains(&score));
//!
//! // Inspect what they both rated
//! let proj = MutualRatings::between(&repo, "Sam", "William");
//! assert_eq!(proj.len(), 3);
//! assert!((proj.corr() - score).abs() < 1e-9);
//!
//! // Score everyone against Sam
//! let ranked = rank_similar(&repo, "Sam");
//! assert_eq!(ranked.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`ratings`]: the user → item → rating repository
//! - [`similarity`]: the Pearson engine (`pearson`, `rank_similar`)
//! - [`projection`]: ordered (item, rating, rating) tables for a pair
//! - [`io`]: CSV load/save for repositories and projections
//! - [`plot`]: SVG scatter plots of a projection
//! - [`error`]: error type for the I/O boundary

pub mod error;
pub mod io;
pub mod plot;
pub mod prelude;
pub mod projection;
pub mod ratings;
pub mod similarity;
