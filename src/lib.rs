// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::application::{FlipCard, Photobook, UsageMeter};
use crate::cli::args::{Args, Command};
use crate::constants::CONFIG_FILE_NAME;
use crate::domain::NewPostcard;
use crate::infrastructure::{Config, FileSlotStore, FrameDriver};
use crate::ports::ListingPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting wellpal with arguments");

    // Initialize infrastructure
    let data_dir = match args.data_dir {
        Some(path) => {
            debug!(?path, "Using provided data directory");
            path
        }
        None => find_data_dir()?,
    };

    let config = Config::load_or_default(data_dir.join(CONFIG_FILE_NAME))
        .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;

    // A configured data_dir redirects the slots, not the config file itself.
    let slots_dir = if config.storage.data_dir.is_empty() {
        data_dir
    } else {
        PathBuf::from(&config.storage.data_dir)
    };
    let store = FileSlotStore::new(&slots_dir)?;

    // Execute use case
    match args.command {
        Command::Add {
            image,
            note,
            mood,
            location,
        } => {
            let mut photobook = Photobook::new(store);
            let entry = photobook.add(NewPostcard {
                image_data_url: image,
                note,
                mood,
                location,
            });
            info!(id = %entry.id, "Saved postcard");
            println!("Saved postcard {} ({})", entry.id, entry.date_iso);
        }

        Command::List { search, json } => {
            let photobook = Photobook::new(store);
            let mut entries = photobook.load();
            if let Some(query) = search {
                entries.retain(|entry| entry.matches(&query));
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("{}", ListingPresenter::new().render(&entries));
            }
        }

        Command::Delete { id } => {
            let mut photobook = Photobook::new(store);
            if photobook.delete(&id) {
                println!("Deleted postcard {id}");
            } else {
                println!("No postcard with id {id}");
            }
        }

        Command::Quota { consume } => {
            let mut meter = UsageMeter::new(store).with_quota(config.chat.daily_quota);
            if consume {
                match meter.try_consume() {
                    Ok(state) => println!(
                        "Recorded chat request {} of {} for {}",
                        state.count,
                        meter.quota(),
                        state.date
                    ),
                    Err(e) => println!("{e}"),
                }
            }
            println!(
                "Remaining today: {} of {}",
                meter.remaining(),
                meter.quota()
            );
        }

        Command::Flip { deltas } => {
            let deltas = parse_deltas(&deltas)?;
            let mut card = FlipCard::with_tuning(config.flip.sensitivity, config.settle_duration());
            card.on_face_change(|face| println!("Now showing the {face} face"));

            card.begin_drag();
            for delta in deltas {
                card.drag(delta);
            }
            if let Some(ticket) = card.end_drag() {
                FrameDriver::new().drive(&mut card, ticket);
            }

            println!(
                "Settled at {:.0}° showing the {} face",
                card.rotation(),
                card.face()
            );
        }
    }

    Ok(())
}

/// Platform-local data directory for the persisted slots.
pub fn find_data_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not find local data directory")?;
    Ok(base.join("wellpal"))
}

fn parse_deltas(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .with_context(|| format!("Invalid drag delta: {part}"))
        })
        .collect()
}
