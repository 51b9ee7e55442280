use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ReferenceError, Result};
use crate::models::card_rating::{CardRating, RawRecord, CARD_ID_COLUMN, NAME_COLUMN};
use crate::opt::*;

const BOM: char = '\u{feff}';

/// Every rated card, keyed by Arena card id. Built once at startup.
#[derive(Debug, Default)]
pub struct RatingTable {
    cards: HashMap<u32, CardRating>,
}

impl RatingTable {
    pub fn get(&self, card_id: u32) -> Option<&CardRating> {
        self.cards.get(&card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn from_ratings(ratings: Vec<CardRating>) -> Self {
        RatingTable {
            cards: ratings.into_iter().map(|r| (r.card_id, r)).collect(),
        }
    }
}

pub fn read_records<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM).to_string())
        .collect::<Vec<String>>();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(
            headers
                .iter()
                .cloned()
                .zip(row.iter().map(str::to_string))
                .collect::<RawRecord>(),
        );
    }

    Ok(records)
}

pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let records = read_records(File::open(path)?)?;
    log::debug!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}

fn record_name(record: &RawRecord) -> Result<&str> {
    record
        .get(NAME_COLUMN)
        .map(|name| name.trim())
        .ok_or(ReferenceError::MissingColumn {
            column: NAME_COLUMN,
        })
}

/// Joins the ids table onto the ratings table by card name.
///
/// Ratings columns win over ids columns of the same name, except `CardID`,
/// which is always taken from the ids table. Every named card in
/// the ratings table must be present in the ids table.
pub fn build(ids: Vec<RawRecord>, ratings: Vec<RawRecord>) -> Result<RatingTable> {
    let mut ids_by_name: HashMap<String, RawRecord> = HashMap::with_capacity(ids.len());
    for record in ids {
        let name = record_name(&record)?.to_string();
        ids_by_name.insert(name, record);
    }

    let mut cards = HashMap::with_capacity(ratings.len());
    for record in ratings {
        let name = record_name(&record)?;
        if name.is_empty() {
            continue;
        }

        let identity = ids_by_name
            .get(name)
            .ok_or_else(|| ReferenceError::UnknownCardName(name.to_string()))?;
        let mut merged = identity.clone();
        merged.extend(record);
        // the card id always comes from the ids table
        if let Some(card_id) = identity.get(CARD_ID_COLUMN) {
            merged.insert(CARD_ID_COLUMN.to_string(), card_id.clone());
        }

        let card = CardRating::from_record(&merged)?;
        card.dbg_if(DbgFlg::Join);
        if let Some(previous) = cards.insert(card.card_id, card) {
            log::warn!(
                "Card id {} is rated more than once, replacing '{}'",
                previous.card_id,
                previous.name
            );
        }
    }

    Ok(RatingTable { cards })
}

pub fn load_rating_table(ratings_path: &Path, ids_path: &Path) -> Result<RatingTable> {
    let ids = load_records(ids_path)?;
    let ratings = load_records(ratings_path)?;
    let table = build(ids, ratings)?;
    log_if(&format!("Joined {} rated cards", table.len()), DbgFlg::Join);
    Ok(table)
}
