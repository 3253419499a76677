//! afinidad CLI
//!
//! Compare users by how similarly they rate movies: print the mutual
//! ratings table and correlation for a pair, rank everyone against one
//! user, add ratings interactively, and export projections or scatter
//! plots.

use afinidad::io::{load_repository, save_projection, save_repository};
use afinidad::plot::save_scatter_svg;
use afinidad::prelude::*;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};
use std::result::Result;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "afinidad")]
#[command(about = "Pairwise taste similarity over shared movie ratings")]
#[command(version)]
struct Cli {
    /// Ratings CSV file (wide format). Falls back to the built-in
    /// sample data when omitted.
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Print progress detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two users: mutual ratings table plus correlation score
    Compare {
        /// First user
        user_a: String,

        /// Second user
        user_b: String,

        /// Export the mutual-ratings projection to a CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Render the pair as an SVG scatter plot
        #[arg(short, long)]
        plot: Option<PathBuf>,
    },

    /// Rank every other user by similarity to one user
    Rank {
        /// Reference user
        user: String,
    },

    /// Interactively add a user's ratings
    Add {
        /// Where to save the updated repository (defaults to --data,
        /// or prints a summary only)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List users and their rating counts
    Users,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let repo = load_or_sample(cli.data.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Compare {
            user_a,
            user_b,
            export,
            plot,
        } => run_compare(&repo, &user_a, &user_b, export.as_deref(), plot.as_deref())?,
        Commands::Rank { user } => run_rank(&repo, &user),
        Commands::Users => run_users(&repo),
        Commands::Add { output } => {
            let target = output.or(cli.data);
            run_add(repo, target.as_deref())?;
        }
    }

    Ok(())
}

fn load_or_sample(data: Option<&Path>, verbose: bool) -> Result<RatingsRepository, Box<dyn Error>> {
    match data {
        Some(path) => {
            if verbose {
                println!("Loading ratings from {}...", path.display());
            }
            let repo = load_repository(path)?;
            if verbose {
                println!("Loaded {} users", repo.n_users());
            }
            Ok(repo)
        }
        None => {
            if verbose {
                println!("No data file given, using built-in sample ratings");
            }
            Ok(RatingsRepository::sample())
        }
    }
}

fn run_compare(
    repo: &RatingsRepository,
    user_a: &str,
    user_b: &str,
    export: Option<&Path>,
    plot: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let proj = MutualRatings::between(repo, user_a, user_b);
    let score = pearson(repo, user_a, user_b);

    println!("{proj}");
    if proj.is_empty() {
        println!(
            "Pearson correlation between {user_a} and {user_b}: {} (no mutual ratings)",
            "0.000".yellow()
        );
    } else {
        println!(
            "Pearson correlation between {user_a} and {user_b}: {}",
            format!("{score:.3}").cyan().bold()
        );
    }

    if let Some(path) = export {
        save_projection(path, &proj)?;
        println!("Projection saved to {}", path.display());
    }
    if let Some(path) = plot {
        save_scatter_svg(path, &proj)?;
        println!("Scatter plot saved to {}", path.display());
    }

    Ok(())
}

fn run_rank(repo: &RatingsRepository, user: &str) {
    let ranked = rank_similar(repo, user);
    if ranked.is_empty() {
        println!("No other users to compare {user} against");
        return;
    }

    println!("Similarity to {user}:");
    for (other, score) in ranked {
        println!("  {other:<16} {score:>7.3}");
    }
}

fn run_users(repo: &RatingsRepository) {
    if repo.is_empty() {
        println!("No users");
        return;
    }
    for user in repo.users() {
        let n = repo.n_ratings(user);
        let noun = if n == 1 { "rating" } else { "ratings" };
        println!("{user:<16} {n:>3} {noun}");
    }
}

/// One line of user input. `None` on EOF, trimmed text otherwise.
fn prompt(label: &str) -> Result<Option<String>, Box<dyn Error>> {
    print!("{} ", label.green().bold());
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn run_add(mut repo: RatingsRepository, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let Some(user) = prompt("Name of the new user:")? else {
        return Ok(());
    };
    if user.is_empty() {
        println!("{}", "No user name given, nothing to do".yellow());
        return Ok(());
    }
    repo.add_user(&user);

    loop {
        let Some(movie) = prompt("Movie name (or 'done' to finish):")? else {
            break;
        };
        if movie.is_empty() {
            continue;
        }
        if movie.eq_ignore_ascii_case("done") {
            break;
        }

        // Re-prompt until the rating parses; malformed input is
        // rejected here, before it reaches the repository.
        loop {
            let Some(text) = prompt(&format!("Rating for '{movie}':"))? else {
                return finish_add(&repo, &user, output);
            };
            match text.parse::<f64>() {
                Ok(rating) => {
                    repo.rate(&user, &movie, rating);
                    break;
                }
                Err(_) => {
                    println!("{}", format!("'{text}' is not a number, try again").red());
                }
            }
        }
    }

    finish_add(&repo, &user, output)
}

fn finish_add(
    repo: &RatingsRepository,
    user: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    println!(
        "{} now has {} ratings ({} users total)",
        user,
        repo.n_ratings(user),
        repo.n_users()
    );

    match output {
        Some(path) => {
            save_repository(path, repo)?;
            println!("Ratings saved to {}", path.display());
        }
        None => {
            println!("{}", "No output file given; ratings were not saved".yellow());
        }
    }
    Ok(())
}
