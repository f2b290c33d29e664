//! `layover`: find travelers who share time at the same airport.
//!
//! Loads a JSON directory snapshot (travelers, itineraries, groups,
//! memberships, shares) and reports layover matches.

mod logging;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use layover_engine::{
    find_group_matches, find_matches, validate_all, validate_itinerary, Directory, GroupId, Match,
    TravelDirectory, TravelerId,
};
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "layover",
    version,
    about = "Find overlapping layovers in itineraries shared within travel groups"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List layover matches visible to a traveler
    Matches {
        /// Directory snapshot (JSON)
        #[arg(long)]
        snapshot: PathBuf,

        /// Traveler whose groups are searched
        #[arg(long)]
        traveler: String,

        /// Only report matches found in this group
        #[arg(long)]
        group: Option<String>,

        /// Reject the snapshot if any itinerary is invalid
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Check every itinerary's layover fields
    Validate {
        /// Directory snapshot (JSON)
        #[arg(long)]
        snapshot: PathBuf,
    },

    /// Show a traveler's groups and own itineraries
    Groups {
        /// Directory snapshot (JSON)
        #[arg(long)]
        snapshot: PathBuf,

        #[arg(long)]
        traveler: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Matches {
            snapshot,
            traveler,
            group,
            strict,
            format,
        } => {
            let directory = load(&snapshot)?;
            if strict {
                for itinerary in directory.itineraries() {
                    validate_itinerary(itinerary).context("strict validation failed")?;
                }
            }
            let traveler = TravelerId::new(traveler);
            let matches = match group {
                Some(group) => group_matches(&directory, &traveler, &GroupId::new(group)),
                None => find_matches(&directory, &traveler),
            };
            info!(%traveler, matches = matches.len(), "match search complete");
            print_matches(&directory, &matches, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { snapshot } => {
            let directory = load(&snapshot)?;
            let errors = validate_all(directory.itineraries());
            if errors.is_empty() {
                println!("{} itineraries valid", directory.itineraries().len());
                return Ok(ExitCode::SUCCESS);
            }
            for error in &errors {
                println!("{error}");
            }
            warn!(invalid = errors.len(), "snapshot has invalid itineraries");
            Ok(ExitCode::FAILURE)
        }
        Command::Groups { snapshot, traveler } => {
            let directory = load(&snapshot)?;
            let traveler = TravelerId::new(traveler);
            let Some(profile) = directory.traveler(&traveler) else {
                bail!("unknown traveler '{traveler}'");
            };

            println!("{} <{}>", profile.username, profile.email);
            if let Some(home) = &profile.home_airport {
                println!("Home airport: {home}");
            }
            if let Some(contact) = &profile.contact_info {
                println!("Contact: {contact}");
            }
            println!("Owned groups:");
            for group in directory.owned_groups(&traveler) {
                println!("  {}", output::render_group(&directory, group));
            }
            println!("Member of:");
            for group in directory.groups_of(&traveler) {
                println!("  {}", output::render_group(&directory, group));
            }
            println!("Itineraries:");
            for itinerary in directory.itineraries_of(&traveler) {
                println!("  {}", output::render_itinerary(itinerary));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load(path: &Path) -> Result<Directory> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let directory = Directory::from_json(&json)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    debug!(path = %path.display(), "snapshot loaded");
    Ok(directory)
}

/// Matches of one group, but only if the traveler can see that group.
fn group_matches(directory: &Directory, traveler: &TravelerId, group: &GroupId) -> Vec<Match> {
    let visible = directory
        .groups_of(traveler)
        .iter()
        .any(|g| &g.id == group);
    if !visible {
        warn!(%traveler, %group, "traveler is not a member of group");
        return Vec::new();
    }
    find_group_matches(directory, group)
}

fn print_matches(directory: &Directory, matches: &[Match], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(matches)?),
        Format::Text if matches.is_empty() => println!("No layover matches found."),
        Format::Text => {
            for m in matches {
                println!("{}", output::render_match(directory, m));
            }
        }
    }
    Ok(())
}
