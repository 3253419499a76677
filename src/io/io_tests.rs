use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_repository_wide_format() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,Julia,Sam,William").expect("write header");
    writeln!(file, "Avatar,4,3,5").expect("write row");
    writeln!(file, "Inception,5,5,4").expect("write row");
    writeln!(file, "Titanic,5,4,4").expect("write row");

    let repo = load_repository(file.path()).expect("load CSV");

    assert_eq!(repo.n_users(), 3);
    assert_eq!(repo.rating("Sam", "Avatar"), Some(3.0));
    assert_eq!(repo.rating("William", "Inception"), Some(4.0));
    assert_eq!(repo, crate::ratings::RatingsRepository::sample());
}

#[test]
fn test_load_repository_empty_cell_means_unrated() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,a,b").expect("write header");
    writeln!(file, "x,1.5,").expect("write row");
    writeln!(file, "y,,2.5").expect("write row");

    let repo = load_repository(file.path()).expect("load CSV");

    assert_eq!(repo.rating("a", "x"), Some(1.5));
    assert_eq!(repo.rating("a", "y"), None);
    assert_eq!(repo.rating("b", "x"), None);
    assert_eq!(repo.rating("b", "y"), Some(2.5));
}

#[test]
fn test_load_repository_user_with_no_ratings() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,a,ghost").expect("write header");
    writeln!(file, "x,1,").expect("write row");

    let repo = load_repository(file.path()).expect("load CSV");

    assert!(repo.contains_user("ghost"));
    assert_eq!(repo.n_ratings("ghost"), 0);
}

#[test]
fn test_load_repository_rejects_bad_rating() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,a,b").expect("write header");
    writeln!(file, "x,1,2").expect("write row");
    writeln!(file, "y,five,3").expect("write row");

    let err = load_repository(file.path()).expect_err("must reject");
    let msg = err.to_string();
    assert!(msg.contains("line 3"), "got: {msg}");
    assert!(msg.contains("'five'"), "got: {msg}");
}

#[test]
fn test_load_repository_rejects_missing_movie() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,a").expect("write header");
    writeln!(file, ",3").expect("write row");

    let err = load_repository(file.path()).expect_err("must reject");
    assert!(err.to_string().contains("missing movie identifier"));
}

#[test]
fn test_load_repository_missing_file() {
    let err = load_repository("/nonexistent/ratings.csv").expect_err("must fail");
    assert!(err.to_string().contains("Failed to open"));
}

#[test]
fn test_repository_round_trip() {
    let repo = crate::ratings::RatingsRepository::sample();

    let file = NamedTempFile::new().expect("temp file");
    save_repository(file.path(), &repo).expect("save CSV");
    let back = load_repository(file.path()).expect("reload CSV");

    assert_eq!(repo, back);
}

#[test]
fn test_repository_round_trip_sparse() {
    let mut repo = crate::ratings::RatingsRepository::new();
    repo.rate("a", "x", 1.5);
    repo.rate("b", "y", 2.25);
    repo.add_user("ghost");

    let file = NamedTempFile::new().expect("temp file");
    save_repository(file.path(), &repo).expect("save CSV");
    let back = load_repository(file.path()).expect("reload CSV");

    assert_eq!(repo, back);
}

#[test]
fn test_projection_round_trip() {
    let repo = crate::ratings::RatingsRepository::sample();
    let proj = crate::projection::MutualRatings::between(&repo, "Sam", "William");

    let file = NamedTempFile::new().expect("temp file");
    save_projection(file.path(), &proj).expect("save CSV");
    let back = load_projection(file.path()).expect("reload CSV");

    assert_eq!(proj, back);
    let triples_before: Vec<_> = proj.iter().map(|(i, a, b)| (i.to_string(), a, b)).collect();
    let triples_after: Vec<_> = back.iter().map(|(i, a, b)| (i.to_string(), a, b)).collect();
    assert_eq!(triples_before, triples_after);
}

#[test]
fn test_projection_file_shape() {
    let repo = crate::ratings::RatingsRepository::sample();
    let proj = crate::projection::MutualRatings::between(&repo, "Sam", "William");

    let file = NamedTempFile::new().expect("temp file");
    save_projection(file.path(), &proj).expect("save CSV");

    let contents = std::fs::read_to_string(file.path()).expect("read back");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("movie,Sam,William"));
    assert_eq!(lines.next(), Some("Avatar,3,5"));
    assert_eq!(lines.next(), Some("Inception,5,4"));
    assert_eq!(lines.next(), Some("Titanic,4,4"));
}

#[test]
fn test_load_projection_rejects_wrong_column_count() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,a,b,c").expect("write header");
    writeln!(file, "x,1,2,3").expect("write row");

    let err = load_projection(file.path()).expect_err("must reject");
    assert!(matches!(
        err,
        crate::error::AfinidadError::MissingColumn { .. }
    ));
}

#[test]
fn test_load_projection_rejects_bad_rating() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "movie,a,b").expect("write header");
    writeln!(file, "x,1,bad").expect("write row");

    let err = load_projection(file.path()).expect_err("must reject");
    let msg = err.to_string();
    assert!(msg.contains("line 2"), "got: {msg}");
    assert!(msg.contains("'bad'"), "got: {msg}");
}

#[test]
fn test_format_rating() {
    assert_eq!(format_rating(5.0), "5");
    assert_eq!(format_rating(4.5), "4.5");
    assert_eq!(format_rating(-3.0), "-3");
}
