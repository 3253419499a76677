//! Pairwise user similarity.
//!
//! This module is the core of the crate: a Pearson product-moment
//! correlation over the items two users have both rated.
//!
//! # Mathematical Background
//!
//! Over the mutual item set S with n = |S|:
//!
//! ```text
//! num = Σ a·b − (Σ a)(Σ b)/n
//! den = √( (Σ a² − (Σ a)²/n) · (Σ b² − (Σ b)²/n) )
//! r   = num / den
//! ```
//!
//! which is the computational form of ρ(A, B) = Cov(A, B) / (σ_A σ_B),
//! with r in [-1, 1].
//!
//! Degenerate inputs never fail: an empty mutual set, a user absent from
//! the repository, or zero variance in either rating series all resolve
//! to a score of 0.0.
//!
//! # Examples
//!
//! ```
//! use afinidad::ratings::RatingsRepository;
//! use afinidad::similarity::pearson;
//!
//! let repo = RatingsRepository::sample();
//!
//! let score = pearson(&repo, "Sam", "Julia");
//! assert!(score > 0.0); // similar taste
//! assert_eq!(pearson(&repo, "Sam", "nobody"), 0.0);
//! ```

use crate::ratings::RatingsRepository;

/// Computes the Pearson correlation between two users' ratings over
/// their mutually-rated items.
///
/// The score is deterministic, symmetric in `a` and `b`, and reads the
/// repository without mutating it. Users missing from the repository are
/// treated as having an empty rating map.
///
/// # Returns
///
/// A score in [-1, 1], or 0.0 when the correlation is undefined (no
/// mutual items, or zero variance in either user's ratings over the
/// mutual set).
///
/// # Examples
///
/// ```
/// use afinidad::ratings::RatingsRepository;
/// use afinidad::similarity::pearson;
///
/// let mut repo = RatingsRepository::new();
/// repo.rate("a", "x", 1.0);
/// repo.rate("a", "y", 2.0);
/// repo.rate("b", "x", 2.0);
/// repo.rate("b", "y", 4.0);
///
/// let score = pearson(&repo, "a", "b");
/// assert!((score - 1.0).abs() < 1e-12); // identical ranking
/// ```
#[must_use]
pub fn pearson(repo: &RatingsRepository, a: &str, b: &str) -> f64 {
    let (ratings_a, ratings_b) = match (repo.ratings_of(a), repo.ratings_of(b)) {
        (Some(ra), Some(rb)) => (ra, rb),
        _ => return 0.0,
    };

    let mut n = 0usize;
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum1_sq = 0.0;
    let mut sum2_sq = 0.0;
    let mut sum_prod = 0.0;

    // One lockstep pass: each mutual item contributes exactly one
    // (rating_a, rating_b) pair to every accumulator.
    for (item, &ra) in ratings_a {
        if let Some(&rb) = ratings_b.get(item) {
            n += 1;
            sum1 += ra;
            sum2 += rb;
            sum1_sq += ra * ra;
            sum2_sq += rb * rb;
            sum_prod += ra * rb;
        }
    }

    if n == 0 {
        return 0.0;
    }

    let n = n as f64;
    let num = sum_prod - sum1 * sum2 / n;
    // Zero variance in either series makes the radicand zero (or, after
    // rounding, fractionally negative); both collapse to the defined
    // fallback rather than a division by zero.
    let den_sq = (sum1_sq - sum1 * sum1 / n) * (sum2_sq - sum2 * sum2 / n);
    if den_sq <= 0.0 {
        return 0.0;
    }

    num / den_sq.sqrt()
}

/// Scores one user against every other user in the repository.
///
/// Returns `(user, score)` pairs sorted by descending score, ties broken
/// by user name. The reference user itself is excluded.
///
/// # Examples
///
/// ```
/// use afinidad::ratings::RatingsRepository;
/// use afinidad::similarity::rank_similar;
///
/// let repo = RatingsRepository::sample();
/// let ranked = rank_similar(&repo, "Sam");
///
/// assert_eq!(ranked.len(), 2);
/// assert!(ranked[0].1 >= ranked[1].1);
/// ```
#[must_use]
pub fn rank_similar(repo: &RatingsRepository, user: &str) -> Vec<(String, f64)> {
    let mut scores: Vec<(String, f64)> = repo
        .users()
        .filter(|other| *other != user)
        .map(|other| (other.to_string(), pearson(repo, user, other)))
        .collect();

    scores.sort_by(|(name_a, score_a), (name_b, score_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| name_a.cmp(name_b))
    });
    scores
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
