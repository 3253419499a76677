//! Ratings repository: user → item → rating.
//!
//! The repository is a plain value owned by the caller. The similarity
//! engine and the I/O collaborators only ever borrow it; nothing in this
//! crate holds ratings state between calls.
//!
//! Iteration order is deterministic: users and items are kept sorted, so
//! projections and exports built from the same repository are always
//! identical.
//!
//! # Examples
//!
//! ```
//! use afinidad::ratings::RatingsRepository;
//!
//! let mut repo = RatingsRepository::new();
//! repo.rate("Sam", "Inception", 5.0);
//! repo.rate("Sam", "Titanic", 4.0);
//! repo.rate("Julia", "Inception", 5.0);
//!
//! assert_eq!(repo.rating("Sam", "Inception"), Some(5.0));
//! assert_eq!(repo.mutual_items("Sam", "Julia"), vec!["Inception"]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-user rating maps, keyed by user identifier.
///
/// A rating, once present, is that user's numeric preference for the
/// item; map key uniqueness guarantees at most one rating per (user,
/// item) pair. Lookups of unknown users are permissive: they behave as
/// an empty rating map rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsRepository {
    users: BTreeMap<String, BTreeMap<String, f64>>,
}

impl RatingsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in seed data: three users rating three movies.
    ///
    /// # Examples
    ///
    /// ```
    /// use afinidad::ratings::RatingsRepository;
    ///
    /// let repo = RatingsRepository::sample();
    /// assert_eq!(repo.n_users(), 3);
    /// assert_eq!(repo.rating("William", "Avatar"), Some(5.0));
    /// ```
    #[must_use]
    pub fn sample() -> Self {
        let mut repo = Self::new();
        for (user, item, rating) in [
            ("Sam", "Inception", 5.0),
            ("Sam", "Titanic", 4.0),
            ("Sam", "Avatar", 3.0),
            ("William", "Inception", 4.0),
            ("William", "Titanic", 4.0),
            ("William", "Avatar", 5.0),
            ("Julia", "Inception", 5.0),
            ("Julia", "Titanic", 5.0),
            ("Julia", "Avatar", 4.0),
        ] {
            repo.rate(user, item, rating);
        }
        repo
    }

    /// Inserts or overwrites one rating, creating the user if needed.
    pub fn rate(&mut self, user: &str, item: &str, rating: f64) {
        self.users
            .entry(user.to_string())
            .or_default()
            .insert(item.to_string(), rating);
    }

    /// Ensures a user exists, with an empty rating map if new.
    pub fn add_user(&mut self, user: &str) {
        self.users.entry(user.to_string()).or_default();
    }

    /// Returns a user's rating map, or `None` for an unknown user.
    ///
    /// Callers that want the permissive empty-map view should treat
    /// `None` as "no ratings"; [`mutual_items`](Self::mutual_items) and
    /// the similarity engine already do.
    #[must_use]
    pub fn ratings_of(&self, user: &str) -> Option<&BTreeMap<String, f64>> {
        self.users.get(user)
    }

    /// Returns one rating, or `None` if the user or item is absent.
    #[must_use]
    pub fn rating(&self, user: &str, item: &str) -> Option<f64> {
        self.users.get(user).and_then(|m| m.get(item)).copied()
    }

    /// Returns true if the user has at least an (possibly empty) entry.
    #[must_use]
    pub fn contains_user(&self, user: &str) -> bool {
        self.users.contains_key(user)
    }

    /// Iterates over user identifiers in sorted order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    /// Returns the number of users.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.users.len()
    }

    /// Returns the number of ratings a user holds (0 for unknown users).
    #[must_use]
    pub fn n_ratings(&self, user: &str) -> usize {
        self.users.get(user).map_or(0, BTreeMap::len)
    }

    /// Returns true if the repository holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns the items rated by *both* users, in sorted order.
    ///
    /// Unknown users contribute an empty item set, so the result is
    /// empty rather than an error. This is an explicit key-set
    /// intersection; no lookup failure is ever swallowed along the way.
    ///
    /// # Examples
    ///
    /// ```
    /// use afinidad::ratings::RatingsRepository;
    ///
    /// let repo = RatingsRepository::sample();
    /// let mutual = repo.mutual_items("Sam", "Julia");
    /// assert_eq!(mutual, vec!["Avatar", "Inception", "Titanic"]);
    /// assert!(repo.mutual_items("Sam", "nobody").is_empty());
    /// ```
    #[must_use]
    pub fn mutual_items(&self, a: &str, b: &str) -> Vec<String> {
        match (self.users.get(a), self.users.get(b)) {
            (Some(ra), Some(rb)) => ra
                .keys()
                .filter(|item| rb.contains_key(*item))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "ratings_tests.rs"]
mod tests;
