use std::io::{stdin, stdout};
use std::process;

use clap::Parser;
use dotenv::dotenv;

mod app;
mod cli;
mod error;
mod models;
mod opt;

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let ranking = args.ranking();

    log::info!("Ratings file: {}", args.ratings.display());
    log::info!("Ids file: {}", args.ids.display());
    log::info!(
        "Sorting on: {}",
        ranking
            .keys
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    );

    let ratings = match app::card_loader::load_rating_table(&args.ratings, &args.ids) {
        Ok(ratings) => ratings,
        Err(e) => {
            log::error!("Failed to load card ratings: {}", e);
            process::exit(1);
        }
    };
    if ratings.is_empty() {
        log::warn!("No rated cards loaded from {}", args.ratings.display());
    } else {
        log::info!("Loaded ratings for {} cards", ratings.len());
    }

    if let Err(e) = app::run(stdin().lock(), &ratings, &ranking, &mut stdout().lock()) {
        log::error!("Failed to process the draft log: {}", e);
        process::exit(1);
    }
}
