//! CLI administration tool for planet-catalog.
//!
//! Manages the catalog directly against the database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List planets, optionally filtered
//! cargo run --bin admin -- planet list --climate arid
//!
//! # Look up a planet
//! cargo run --bin admin -- planet show 1
//! cargo run --bin admin -- planet find Tatooine
//!
//! # Create and remove planets
//! cargo run --bin admin -- planet add --name Hoth --climate frozen --terrain tundra
//! cargo run --bin admin -- planet remove 4
//!
//! # Insert the reference planets
//! cargo run --bin admin -- seed
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*` components).

use planet_catalog::application::services::PlanetService;
use planet_catalog::config;
use planet_catalog::domain::entities::{NewPlanet, Planet};
use planet_catalog::domain::repositories::RepositoryError;
use planet_catalog::infrastructure::persistence::PgPlanetRepository;
use planet_catalog::infrastructure::persistence::db_error::is_duplicate_name;
use planet_catalog::logging;
use planet_catalog::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// Reference planets inserted by `seed`.
const SEED_PLANETS: [(&str, &str, &str); 3] = [
    ("Tatooine", "arid", "desert"),
    ("Alderaan", "temperate", "grasslands, mountains"),
    ("Yavin IV", "temperate, tropical", "jungle, rainforest"),
];

/// CLI tool for managing planet-catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage planets
    Planet {
        #[command(subcommand)]
        action: PlanetAction,
    },

    /// Insert the reference planets, skipping names that already exist
    Seed,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Planet management subcommands.
#[derive(Subcommand)]
enum PlanetAction {
    /// List planets
    List {
        /// Only planets with exactly this climate
        #[arg(long)]
        climate: Option<String>,

        /// Only planets with exactly this terrain
        #[arg(long)]
        terrain: Option<String>,
    },

    /// Show a planet by id
    Show { id: i64 },

    /// Find a planet by exact name
    Find { name: String },

    /// Create a planet
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        climate: String,

        #[arg(short, long)]
        terrain: String,
    },

    /// Remove a planet by id
    Remove {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging::init(if cli.verbose { "debug" } else { "warn" }, false);

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    let repository = Arc::new(PgPlanetRepository::new(Arc::new(pool.clone())));
    let service = PlanetService::new(repository);

    let result = match cli.command {
        Commands::Planet { action } => handle_planet_action(action, &service).await,
        Commands::Seed => seed(&service).await,
        Commands::Db { action } => handle_db_action(action, &service).await,
    };

    pool.close().await;
    result
}

/// Dispatches planet management commands.
async fn handle_planet_action(action: PlanetAction, service: &PlanetService) -> Result<()> {
    match action {
        PlanetAction::List { climate, terrain } => {
            let planets = service
                .list(climate, terrain)
                .await
                .context("Failed to list planets")?;
            print_planets(&planets);
        }
        PlanetAction::Show { id } => {
            let planet = service
                .get_by_id(id)
                .await
                .context("Failed to look up planet")?
                .with_context(|| format!("Planet {} not found", id))?;
            print_planet(&planet);
        }
        PlanetAction::Find { name } => {
            let planet = service
                .get_by_name(&name)
                .await
                .context("Failed to look up planet")?
                .with_context(|| format!("Planet '{}' not found", name))?;
            print_planet(&planet);
        }
        PlanetAction::Add {
            name,
            climate,
            terrain,
        } => {
            let planet = service
                .create(NewPlanet::new(name, climate, terrain))
                .await
                .map_err(describe_create_error)?;

            println!("{}", "✅ Planet created".green().bold());
            print_planet(&planet);
        }
        PlanetAction::Remove { id, yes } => remove_planet(service, id, yes).await?,
    }

    Ok(())
}

/// Removes a planet after showing it and asking for confirmation.
async fn remove_planet(service: &PlanetService, id: i64, skip_confirm: bool) -> Result<()> {
    let planet = service
        .get_by_id(id)
        .await
        .context("Failed to look up planet")?
        .with_context(|| format!("Planet {} not found", id))?;

    print_planet(&planet);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this planet?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match service.remove(id).await {
        Ok(()) => println!("{}", "✅ Planet removed".green().bold()),
        // Removed concurrently between lookup and delete.
        Err(RepositoryError::NotFound { .. }) => {
            println!("{}", "⚠️  Planet was already removed".yellow())
        }
        Err(e) => return Err(e).context("Failed to remove planet"),
    }

    Ok(())
}

/// Inserts the reference planets.
async fn seed(service: &PlanetService) -> Result<()> {
    println!("{}", "🌍 Seeding reference planets".bright_blue().bold());
    println!();

    let mut inserted = 0;
    for (name, climate, terrain) in SEED_PLANETS {
        match service
            .create(NewPlanet::new(name, climate, terrain))
            .await
        {
            Ok(planet) => {
                inserted += 1;
                println!("  {} {} (id {})", "+".green(), planet.name.cyan(), planet.id);
            }
            Err(e) if is_duplicate_name(&e) => {
                println!("  {} {} (already present)", "=".bright_black(), name);
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to insert '{}'", name)),
        }
    }

    println!();
    println!(
        "  Inserted: {}",
        inserted.to_string().bright_white().bold()
    );

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, service: &PlanetService) -> Result<()> {
    match action {
        DbAction::Check => {
            service
                .health_check()
                .await
                .context("Database check failed")?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

fn describe_create_error(e: RepositoryError) -> anyhow::Error {
    if is_duplicate_name(&e) {
        return anyhow::anyhow!("A planet with this name already exists");
    }

    match e {
        RepositoryError::IntegrityViolation { message, .. } => {
            anyhow::anyhow!("Rejected by the database: {}", message)
        }
        other => anyhow::Error::new(other).context("Failed to create planet"),
    }
}

fn print_planet(planet: &Planet) {
    println!("  ID:      {}", planet.id.to_string().bright_black());
    println!("  Name:    {}", planet.name.cyan());
    println!("  Climate: {}", planet.climate);
    println!("  Terrain: {}", planet.terrain);
    println!();
}

fn print_planets(planets: &[Planet]) {
    if planets.is_empty() {
        println!("{}", "  No planets found".yellow());
        return;
    }

    println!(
        "  {:<5} {:<24} {:<24} {:<30}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Climate".bright_white().bold(),
        "Terrain".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for planet in planets {
        println!(
            "  {:<5} {:<24} {:<24} {:<30}",
            planet.id.to_string().bright_black(),
            planet.name.cyan(),
            planet.climate,
            planet.terrain
        );
    }

    println!();
    println!(
        "  Total: {}",
        planets.len().to_string().bright_white().bold()
    );
}
