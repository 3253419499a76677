//! Tabular (CSV) load and save for ratings data.
//!
//! Two shapes are supported:
//!
//! - **Repository files**: wide format, header `movie,<user>,<user>,...`,
//!   one row per movie, an empty cell meaning "unrated". This is how a
//!   whole ratings corpus enters or leaves the system.
//! - **Projection files**: `movie,<userA>,<userB>` with one row per
//!   mutually-rated item, in projection order. Saving and reloading a
//!   projection reproduces the same triples in the same order.
//!
//! Malformed input is rejected here, at the boundary, with the offending
//! line number; nothing is silently skipped or masked before data
//! reaches the engine.

use crate::error::{AfinidadError, Result};
use crate::projection::MutualRatings;
use crate::ratings::RatingsRepository;
use std::path::Path;

/// Loads a ratings repository from a wide-format CSV file.
///
/// Every user column in the header becomes a user, even if all of its
/// cells are empty. Cells must be empty (unrated) or parse as a number.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the header is missing,
/// or any non-empty cell fails to parse as a rating.
///
/// # Examples
///
/// ```no_run
/// use afinidad::io::load_repository;
///
/// let repo = load_repository("ratings.csv").expect("readable ratings file");
/// println!("{} users", repo.n_users());
/// ```
pub fn load_repository<P: AsRef<Path>>(path: P) -> Result<RatingsRepository> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        AfinidadError::Other(format!("Failed to open {}: {e}", path.display()))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| AfinidadError::CsvParse {
            line: 1,
            message: format!("Failed to read header: {e}"),
        })?
        .clone();

    if headers.is_empty() {
        return Err(AfinidadError::CsvParse {
            line: 1,
            message: "empty header row".to_string(),
        });
    }

    let users: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut repo = RatingsRepository::new();
    for user in &users {
        repo.add_user(user);
    }

    let mut line = 2; // 1-based, after the header
    for record in reader.records() {
        let record = record.map_err(|e| AfinidadError::CsvParse {
            line,
            message: format!("Failed to read row: {e}"),
        })?;

        let item = record.get(0).unwrap_or("").trim();
        if item.is_empty() {
            return Err(AfinidadError::CsvParse {
                line,
                message: "missing movie identifier".to_string(),
            });
        }

        for (idx, user) in users.iter().enumerate() {
            let cell = record.get(idx + 1).unwrap_or("").trim();
            if cell.is_empty() {
                continue; // unrated
            }
            let rating = cell.parse::<f64>().map_err(|_| AfinidadError::CsvParse {
                line,
                message: format!("invalid rating '{cell}' for user '{user}'"),
            })?;
            repo.rate(user, item, rating);
        }
        line += 1;
    }

    Ok(repo)
}

/// Saves a ratings repository as a wide-format CSV file.
///
/// Users and movies appear in sorted order; unrated cells are left
/// blank. The output is accepted back by [`load_repository`].
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_repository<P: AsRef<Path>>(path: P, repo: &RatingsRepository) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .map_err(|e| AfinidadError::Other(format!("Failed to create file: {e}")))?;

    let users: Vec<&str> = repo.users().collect();

    // Union of every user's items, sorted via the BTreeMap ordering.
    let mut items: Vec<&str> = Vec::new();
    for user in &users {
        if let Some(ratings) = repo.ratings_of(user) {
            for item in ratings.keys() {
                items.push(item);
            }
        }
    }
    items.sort_unstable();
    items.dedup();

    let mut header = vec!["movie"];
    header.extend(&users);
    writer
        .write_record(&header)
        .map_err(|e| AfinidadError::Other(format!("Failed to write header: {e}")))?;

    for item in items {
        let mut row = vec![item.to_string()];
        for user in &users {
            let cell = repo
                .rating(user, item)
                .map(format_rating)
                .unwrap_or_default();
            row.push(cell);
        }
        writer
            .write_record(&row)
            .map_err(|e| AfinidadError::Other(format!("Failed to write row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AfinidadError::Other(format!("Failed to flush output: {e}")))?;
    Ok(())
}

/// Saves a mutual-ratings projection as `movie,<userA>,<userB>`.
///
/// Rows are written in projection order so [`load_projection`] restores
/// an identical table.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_projection<P: AsRef<Path>>(path: P, proj: &MutualRatings) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .map_err(|e| AfinidadError::Other(format!("Failed to create file: {e}")))?;

    writer
        .write_record(["movie", proj.user_a(), proj.user_b()])
        .map_err(|e| AfinidadError::Other(format!("Failed to write header: {e}")))?;

    for (item, ra, rb) in proj.iter() {
        let ra = format_rating(ra);
        let rb = format_rating(rb);
        writer
            .write_record([item, ra.as_str(), rb.as_str()])
            .map_err(|e| AfinidadError::Other(format!("Failed to write row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AfinidadError::Other(format!("Failed to flush output: {e}")))?;
    Ok(())
}

/// Loads a projection saved by [`save_projection`], preserving row order.
///
/// The two user identifiers are taken from the header.
///
/// # Errors
///
/// Returns an error if the header does not carry exactly
/// `movie,<userA>,<userB>`, or any row is malformed.
pub fn load_projection<P: AsRef<Path>>(path: P) -> Result<MutualRatings> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        AfinidadError::Other(format!("Failed to open {}: {e}", path.display()))
    })?;

    let headers = reader
        .headers()
        .map_err(|e| AfinidadError::CsvParse {
            line: 1,
            message: format!("Failed to read header: {e}"),
        })?
        .clone();

    if headers.len() != 3 {
        return Err(AfinidadError::MissingColumn {
            column: "movie,<userA>,<userB>".to_string(),
            hint: format!(
                "expected 3 columns, found {}: {:?}",
                headers.len(),
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let user_a = headers.get(1).unwrap_or("").to_string();
    let user_b = headers.get(2).unwrap_or("").to_string();

    let mut triples = Vec::new();
    let mut line = 2;
    for record in reader.records() {
        let record = record.map_err(|e| AfinidadError::CsvParse {
            line,
            message: format!("Failed to read row: {e}"),
        })?;

        let item = record.get(0).unwrap_or("").trim();
        if item.is_empty() {
            return Err(AfinidadError::CsvParse {
                line,
                message: "missing movie identifier".to_string(),
            });
        }

        let parse_cell = |idx: usize, user: &str| -> Result<f64> {
            let cell = record.get(idx).unwrap_or("").trim();
            cell.parse::<f64>().map_err(|_| AfinidadError::CsvParse {
                line,
                message: format!("invalid rating '{cell}' for user '{user}'"),
            })
        };

        let ra = parse_cell(1, &user_a)?;
        let rb = parse_cell(2, &user_b)?;
        triples.push((item.to_string(), ra, rb));
        line += 1;
    }

    Ok(MutualRatings::from_triples(&user_a, &user_b, triples))
}

/// Formats a rating without a trailing `.0` noise for whole numbers.
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 && rating.abs() < 1e15 {
        format!("{rating:.0}")
    } else {
        format!("{rating}")
    }
}

#[cfg(test)]
#[path = "io_tests.rs"]
mod tests;
