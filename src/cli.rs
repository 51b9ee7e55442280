use std::path::PathBuf;

use clap::Parser;

use crate::app::ranker::MissingPolicy;
use crate::app::Ranking;
use crate::models::sort_key::{dedup_keys, SortKey};

/// Reads a 17lands client log on stdin and prints each draft pack ranked by
/// card ratings.
#[derive(Parser, Debug)]
#[command(name = "draft-notifier")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// CSV file with ratings, exported from the 17lands card data page
    #[arg(env = "DRAFT_NOTIFIER_RATINGS")]
    pub ratings: PathBuf,

    /// CSV file with card ids
    #[arg(env = "DRAFT_NOTIFIER_IDS")]
    pub ids: PathBuf,

    /// Column to sort on and display, e.g. "GIH WR". Takes one column per
    /// flag: repeat -r for each column (-r "GIH WR" -r -ALSA), in priority
    /// order. Prefix with '-' to sort ascending.
    #[arg(
        short,
        long = "ratings-column",
        allow_hyphen_values = true,
        default_value = "GIH WR"
    )]
    pub ratings_column: Vec<SortKey>,

    /// How to rank cards that have no data for a column
    #[arg(long, value_enum, default_value_t = MissingPolicy::Zero)]
    pub missing: MissingPolicy,
}

impl Args {
    pub fn ranking(&self) -> Ranking {
        Ranking {
            keys: dedup_keys(self.ratings_column.iter().copied()),
            missing: self.missing,
        }
    }
}
