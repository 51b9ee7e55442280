use serde::Deserialize;

use crate::app::card_loader::RatingTable;
use crate::error::NotifyError;
use crate::models::card_rating::CardRating;

/// Payload of a `Draft.Notify` log line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftNotify {
    pub draft_id: String,
    pub event_name: String,
    pub pack_number: u32,
    pub pick_number: u32,
    pub method: String,
    pub card_ids: Vec<u32>,
}

impl DraftNotify {
    pub fn from_json(payload: &str) -> Result<Self, NotifyError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// A pack with its card ids resolved against the rating table.
#[derive(Debug, Clone)]
pub struct DraftPack<'a> {
    pub draft_id: String,
    pub event_name: String,
    pub pack_number: u32,
    pub pick_number: u32,
    pub method: String,
    pub card_ids: Vec<u32>,
    pub cards: Vec<&'a CardRating>,
}

impl<'a> DraftPack<'a> {
    pub fn resolve(notify: DraftNotify, ratings: &'a RatingTable) -> Result<Self, NotifyError> {
        let cards = notify
            .card_ids
            .iter()
            .map(|id| ratings.get(*id).ok_or(NotifyError::UnresolvedCardId(*id)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DraftPack {
            draft_id: notify.draft_id,
            event_name: notify.event_name,
            pack_number: notify.pack_number,
            pick_number: notify.pick_number,
            method: notify.method,
            card_ids: notify.card_ids,
            cards,
        })
    }
}
