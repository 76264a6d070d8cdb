use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

use pharmacy_locator::evaluator::{evaluate_now, EvaluatedPharmacy, MarkerStatus};
use pharmacy_locator::models::{Location, Pharmacy, Weekday};
use pharmacy_locator::store::PharmacyStore;

#[derive(Debug, Parser)]
#[command(name = "pharmacy_locator")]
#[command(about = "Town pharmacy inventory and nearest-location tool")]
struct Cli {
    /// Path of the flat-file store
    #[arg(long, default_value = "pharmacies_data.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a pharmacy and persist it
    Add {
        /// Pharmacy name
        name: String,
        /// Street address
        address: String,
        /// Latitude in degrees
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long)]
        lon: Option<f64>,
        /// Weekday this pharmacy is on duty
        #[arg(long)]
        duty: Weekday,
        /// Opening time, HH:MM
        #[arg(long, default_value = "08:00")]
        open: String,
        /// Closing time, HH:MM
        #[arg(long, default_value = "22:00")]
        close: String,
    },
    /// Remove every pharmacy with the given name
    Remove { name: String },
    /// List pharmacies by distance from a reference point
    List {
        /// Reference latitude in degrees
        lat: f64,
        /// Reference longitude in degrees
        lon: f64,
    },
    /// Show the nearest pharmacy to a reference point
    Nearest {
        /// Reference latitude in degrees
        lat: f64,
        /// Reference longitude in degrees
        lon: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = PharmacyStore::open(&cli.data_file);

    match cli.command {
        Commands::Add {
            name,
            address,
            lat,
            lon,
            duty,
            open,
            close,
        } => {
            let pharmacy = Pharmacy::new(name.clone(), address, lat, lon, duty, open, close);
            store.add(pharmacy)?;
            println!("Saved pharmacy '{}'", name);
        }
        Commands::Remove { name } => {
            let removed = store.remove(&name)?;
            if removed == 0 {
                bail!("no pharmacy named '{}'", name);
            }
            println!("Removed {} record(s) named '{}'", removed, name);
        }
        Commands::List { lat, lon } => {
            let records = store.load();
            if records.is_empty() {
                println!("No pharmacies saved yet.");
                return Ok(());
            }

            let result = evaluate_now(&records, Location::new(lat, lon));
            for entry in result.sorted_by_distance() {
                print_entry(entry);
            }
            for entry in result.entries.iter().filter(|e| e.distance_km.is_none()) {
                println!(
                    "{} - {} ({} - {}) [no coordinates]",
                    entry.pharmacy.name, entry.pharmacy.location, entry.pharmacy.open, entry.pharmacy.close
                );
            }
            println!("Today: {}", Weekday::today());
        }
        Commands::Nearest { lat, lon } => {
            let records = store.load();
            let result = evaluate_now(&records, Location::new(lat, lon));
            match result.nearest() {
                Some(entry) => print_entry(entry),
                None => println!("No pharmacy with coordinates on record."),
            }
        }
    }

    Ok(())
}

fn print_entry(entry: &EvaluatedPharmacy) {
    let status = if entry.is_open { "open now" } else { "closed now" };
    let marker = match entry.marker {
        Some(MarkerStatus::Nearest) => " <- nearest",
        Some(MarkerStatus::OnDuty) => " (on duty today)",
        _ => "",
    };

    match entry.distance_km {
        Some(distance) => println!(
            "{} - {} ({} - {}) {:.2} km, {}{}",
            entry.pharmacy.name,
            entry.pharmacy.location,
            entry.pharmacy.open,
            entry.pharmacy.close,
            distance,
            status,
            marker
        ),
        None => println!(
            "{} - {} ({} - {}) {}",
            entry.pharmacy.name, entry.pharmacy.location, entry.pharmacy.open, entry.pharmacy.close, status
        ),
    }
}
