use std::cmp::Ordering;

use crate::models::card_rating::CardRating;
use crate::models::sort_key::{Direction, SortKey};

/// Where cards without data for a sort key end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MissingPolicy {
    /// Rank as if the card scored zero.
    #[default]
    Zero,
    /// Rank after every card that has a value, in either direction.
    Last,
}

fn compare_key(a: &CardRating, b: &CardRating, key: &SortKey, missing: MissingPolicy) -> Ordering {
    let (a, b) = match missing {
        MissingPolicy::Zero => (
            a.value(key.metric).unwrap_or(0.0),
            b.value(key.metric).unwrap_or(0.0),
        ),
        MissingPolicy::Last => match (a.value(key.metric), b.value(key.metric)) {
            (Some(a), Some(b)) => (a, b),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        },
    };

    let ordering = match key.direction {
        Direction::Descending => b.partial_cmp(&a),
        Direction::Ascending => a.partial_cmp(&b),
    };
    ordering.unwrap_or(Ordering::Equal)
}

/// Orders a pack best-first. Earlier keys dominate, ties keep pack order.
pub fn rank<'a>(
    cards: &[&'a CardRating],
    keys: &[SortKey],
    missing: MissingPolicy,
) -> Vec<&'a CardRating> {
    let mut ranked = cards.to_vec();
    ranked.sort_by(|a, b| {
        keys.iter()
            .map(|key| compare_key(a, b, key, missing))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
