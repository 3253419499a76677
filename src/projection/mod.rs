//! Mutual-ratings projection: the tabular view of a user pair.
//!
//! For two users, the projection holds one (item, rating A, rating B)
//! triple per mutually-rated item, in item order. It is derived on
//! demand from the repository and never stored back; reporting, export,
//! and plotting all consume this structure.
//!
//! # Examples
//!
//! ```
//! use afinidad::prelude::*;
//!
//! let repo = RatingsRepository::sample();
//! let proj = MutualRatings::between(&repo, "Sam", "William");
//!
//! assert_eq!(proj.len(), 3);
//! assert_eq!(proj.items(), ["Avatar", "Inception", "Titanic"]);
//! // The mean-centered check agrees with the engine's sum-form score.
//! assert!((proj.corr() - pearson(&repo, "Sam", "William")).abs() < 1e-9);
//! ```

use crate::ratings::RatingsRepository;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered (item, rating A, rating B) triples for a user pair.
///
/// Built over exactly the mutual item set the similarity engine uses, so
/// a correlation computed from these columns matches the engine's score
/// up to floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutualRatings {
    user_a: String,
    user_b: String,
    items: Vec<String>,
    ratings_a: Vec<f64>,
    ratings_b: Vec<f64>,
}

impl MutualRatings {
    /// Projects the items both users rated, in item order.
    ///
    /// Unknown users behave as having no ratings, producing an empty
    /// projection rather than an error.
    #[must_use]
    pub fn between(repo: &RatingsRepository, user_a: &str, user_b: &str) -> Self {
        let items = repo.mutual_items(user_a, user_b);
        let mut ratings_a = Vec::with_capacity(items.len());
        let mut ratings_b = Vec::with_capacity(items.len());

        for item in &items {
            // mutual_items guarantees both ratings exist.
            let ra = repo.rating(user_a, item).unwrap_or_default();
            let rb = repo.rating(user_b, item).unwrap_or_default();
            ratings_a.push(ra);
            ratings_b.push(rb);
        }

        Self {
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            items,
            ratings_a,
            ratings_b,
        }
    }

    /// Builds a projection from already-paired triples.
    ///
    /// Used by the CSV loader; row order is preserved as given.
    #[must_use]
    pub fn from_triples(
        user_a: &str,
        user_b: &str,
        triples: Vec<(String, f64, f64)>,
    ) -> Self {
        let mut items = Vec::with_capacity(triples.len());
        let mut ratings_a = Vec::with_capacity(triples.len());
        let mut ratings_b = Vec::with_capacity(triples.len());
        for (item, ra, rb) in triples {
            items.push(item);
            ratings_a.push(ra);
            ratings_b.push(rb);
        }
        Self {
            user_a: user_a.to_string(),
            user_b: user_b.to_string(),
            items,
            ratings_a,
            ratings_b,
        }
    }

    /// First user's identifier (the left rating column).
    #[must_use]
    pub fn user_a(&self) -> &str {
        &self.user_a
    }

    /// Second user's identifier (the right rating column).
    #[must_use]
    pub fn user_b(&self) -> &str {
        &self.user_b
    }

    /// Item identifiers, in row order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// First user's ratings, aligned with [`items`](Self::items).
    #[must_use]
    pub fn ratings_a(&self) -> &[f64] {
        &self.ratings_a
    }

    /// Second user's ratings, aligned with [`items`](Self::items).
    #[must_use]
    pub fn ratings_b(&self) -> &[f64] {
        &self.ratings_b
    }

    /// Number of mutually-rated items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the users share no rated items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over (item, rating A, rating B) rows.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.items
            .iter()
            .zip(self.ratings_a.iter().zip(self.ratings_b.iter()))
            .map(|(item, (&ra, &rb))| (item.as_str(), ra, rb))
    }

    /// Mean-centered Pearson correlation over the two rating columns.
    ///
    /// This is the independent cross-check on the engine's sum-form
    /// score: both are computed over the same rows, so they agree within
    /// floating-point tolerance. Empty or zero-variance columns yield
    /// 0.0, the same fallback the engine uses.
    #[must_use]
    pub fn corr(&self) -> f64 {
        let n = self.items.len();
        if n == 0 {
            return 0.0;
        }
        let n = n as f64;

        let mean_a = self.ratings_a.iter().sum::<f64>() / n;
        let mean_b = self.ratings_b.iter().sum::<f64>() / n;

        let mut cov_sum = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for (&ra, &rb) in self.ratings_a.iter().zip(self.ratings_b.iter()) {
            let da = ra - mean_a;
            let db = rb - mean_b;
            cov_sum += da * db;
            var_a += da * da;
            var_b += db * db;
        }

        if var_a == 0.0 || var_b == 0.0 {
            return 0.0;
        }

        cov_sum / (var_a.sqrt() * var_b.sqrt())
    }
}

impl fmt::Display for MutualRatings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(
                f,
                "{} and {} share no rated movies",
                self.user_a, self.user_b
            );
        }

        let item_width = self
            .items
            .iter()
            .map(String::len)
            .chain(std::iter::once("movie".len()))
            .max()
            .unwrap_or(5);

        writeln!(
            f,
            "{:<item_width$}  {:>8}  {:>8}",
            "movie", self.user_a, self.user_b
        )?;
        for (item, ra, rb) in self.iter() {
            writeln!(f, "{item:<item_width$}  {ra:>8.1}  {rb:>8.1}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
