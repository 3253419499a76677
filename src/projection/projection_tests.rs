use super::*;
use crate::similarity::pearson;

#[test]
fn test_between_sample_pair() {
    let repo = RatingsRepository::sample();
    let proj = MutualRatings::between(&repo, "Sam", "William");

    assert_eq!(proj.user_a(), "Sam");
    assert_eq!(proj.user_b(), "William");
    assert_eq!(proj.len(), 3);
    assert_eq!(proj.items(), ["Avatar", "Inception", "Titanic"]);
    assert_eq!(proj.ratings_a(), [3.0, 5.0, 4.0]);
    assert_eq!(proj.ratings_b(), [5.0, 4.0, 4.0]);
}

#[test]
fn test_between_empty_for_unknown_user() {
    let repo = RatingsRepository::sample();
    let proj = MutualRatings::between(&repo, "Sam", "nobody");
    assert!(proj.is_empty());
    assert_eq!(proj.len(), 0);
}

#[test]
fn test_iter_rows() {
    let repo = RatingsRepository::sample();
    let proj = MutualRatings::between(&repo, "Sam", "Julia");
    let rows: Vec<(&str, f64, f64)> = proj.iter().collect();
    assert_eq!(
        rows,
        vec![
            ("Avatar", 3.0, 4.0),
            ("Inception", 5.0, 5.0),
            ("Titanic", 4.0, 5.0),
        ]
    );
}

#[test]
fn test_corr_matches_engine() {
    let repo = RatingsRepository::sample();
    for a in ["Sam", "William", "Julia"] {
        for b in ["Sam", "William", "Julia"] {
            let proj = MutualRatings::between(&repo, a, b);
            let engine = pearson(&repo, a, b);
            assert!(
                (proj.corr() - engine).abs() < 1e-9,
                "{a}/{b}: projection {} vs engine {engine}",
                proj.corr()
            );
        }
    }
}

#[test]
fn test_corr_empty_is_zero() {
    let repo = RatingsRepository::new();
    let proj = MutualRatings::between(&repo, "a", "b");
    assert_eq!(proj.corr(), 0.0);
}

#[test]
fn test_corr_zero_variance_is_zero() {
    let mut repo = RatingsRepository::new();
    repo.rate("a", "x", 1.0);
    repo.rate("a", "y", 5.0);
    repo.rate("b", "x", 3.0);
    repo.rate("b", "y", 3.0);
    let proj = MutualRatings::between(&repo, "a", "b");
    assert_eq!(proj.corr(), 0.0);
}

#[test]
fn test_from_triples_preserves_order() {
    let triples = vec![
        ("Titanic".to_string(), 4.0, 4.0),
        ("Avatar".to_string(), 3.0, 5.0),
    ];
    let proj = MutualRatings::from_triples("Sam", "William", triples);
    assert_eq!(proj.items(), ["Titanic", "Avatar"]);
    assert_eq!(proj.ratings_a(), [4.0, 3.0]);
    assert_eq!(proj.ratings_b(), [4.0, 5.0]);
}

#[test]
fn test_display_table() {
    let repo = RatingsRepository::sample();
    let proj = MutualRatings::between(&repo, "Sam", "William");
    let table = proj.to_string();

    let mut lines = table.lines();
    let header = lines.next().expect("header row");
    assert!(header.contains("movie"));
    assert!(header.contains("Sam"));
    assert!(header.contains("William"));
    assert_eq!(lines.count(), 3);
    assert!(table.contains("Inception"));
}

#[test]
fn test_display_empty() {
    let repo = RatingsRepository::new();
    let proj = MutualRatings::between(&repo, "a", "b");
    assert!(proj.to_string().contains("share no rated movies"));
}
