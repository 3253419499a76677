//! Scatter-plot rendering for a mutual-ratings projection.
//!
//! Renders a labeled SVG scatter plot: one axis per user, one point per
//! mutually-rated item, each point annotated with its item identifier.
//! This is a pure consumer of [`MutualRatings`]; it reads the projection
//! and imposes nothing back on the engine.

use crate::error::Result;
use crate::projection::MutualRatings;
use std::fmt::Write as _;
use std::path::Path;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN: f64 = 60.0;

/// Renders the projection as an SVG scatter plot.
///
/// The x axis carries user A's ratings, the y axis user B's; the title
/// names both users. An empty projection renders the frame and a
/// "no mutual ratings" note instead of points.
///
/// # Examples
///
/// ```
/// use afinidad::prelude::*;
/// use afinidad::plot::scatter_svg;
///
/// let repo = RatingsRepository::sample();
/// let proj = MutualRatings::between(&repo, "Sam", "William");
/// let svg = scatter_svg(&proj);
///
/// assert!(svg.starts_with("<?xml"));
/// assert!(svg.contains("Inception"));
/// ```
#[must_use]
pub fn scatter_svg(proj: &MutualRatings) -> String {
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\">"
    );
    svg.push_str("  <style>\n");
    svg.push_str("    .label { font-family: monospace; font-size: 12px; }\n");
    svg.push_str("    .title { font-family: monospace; font-size: 16px; font-weight: bold; }\n");
    svg.push_str("  </style>\n");
    svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"#f8f8f8\"/>\n");

    let _ = writeln!(
        svg,
        "  <text x=\"{}\" y=\"30\" text-anchor=\"middle\" class=\"title\">{} vs {} ratings</text>",
        WIDTH / 2.0,
        escape(proj.user_a()),
        escape(proj.user_b()),
    );

    // Axes
    let x0 = MARGIN;
    let y0 = HEIGHT - MARGIN;
    let x1 = WIDTH - MARGIN;
    let y1 = MARGIN;
    let _ = writeln!(
        svg,
        "  <line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x1}\" y2=\"{y0}\" stroke=\"#333\"/>"
    );
    let _ = writeln!(
        svg,
        "  <line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x0}\" y2=\"{y1}\" stroke=\"#333\"/>"
    );

    // Axis labels: x = user A, y = user B (rotated)
    let _ = writeln!(
        svg,
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" class=\"label\">{}</text>",
        WIDTH / 2.0,
        HEIGHT - 20.0,
        escape(proj.user_a()),
    );
    let _ = writeln!(
        svg,
        "  <text x=\"20\" y=\"{}\" text-anchor=\"middle\" class=\"label\" transform=\"rotate(-90 20 {})\">{}</text>",
        HEIGHT / 2.0,
        HEIGHT / 2.0,
        escape(proj.user_b()),
    );

    if proj.is_empty() {
        let _ = writeln!(
            svg,
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" class=\"label\">no mutual ratings</text>",
            WIDTH / 2.0,
            HEIGHT / 2.0,
        );
        svg.push_str("</svg>\n");
        return svg;
    }

    let (min_a, max_a) = bounds(proj.ratings_a());
    let (min_b, max_b) = bounds(proj.ratings_b());

    for (item, ra, rb) in proj.iter() {
        let px = project(ra, min_a, max_a, x0, x1);
        let py = project(rb, min_b, max_b, y0, y1);
        let _ = writeln!(
            svg,
            "  <circle cx=\"{px:.1}\" cy=\"{py:.1}\" r=\"4\" fill=\"#2060c0\"/>"
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" class=\"label\">{}</text>",
            px + 6.0,
            py - 6.0,
            escape(item),
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders the scatter plot and writes it to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_scatter_svg<P: AsRef<Path>>(path: P, proj: &MutualRatings) -> Result<()> {
    std::fs::write(path.as_ref(), scatter_svg(proj))?;
    Ok(())
}

/// Maps a rating into pixel space; a degenerate (constant) axis pins to
/// the midpoint instead of dividing by zero.
fn project(value: f64, min: f64, max: f64, lo_px: f64, hi_px: f64) -> f64 {
    if max == min {
        return (lo_px + hi_px) / 2.0;
    }
    lo_px + (value - min) / (max - min) * (hi_px - lo_px)
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
