use std::collections::HashMap;

use strum::{EnumCount, IntoEnumIterator};

use crate::error::{ReferenceError, Result};
use crate::models::metric::{Metric, MetricValue};

pub const NAME_COLUMN: &str = "Name";
pub const CARD_ID_COLUMN: &str = "CardID";
pub const COLOR_COLUMN: &str = "Color";
pub const RARITY_COLUMN: &str = "Rarity";

/// One parsed CSV row, keyed by header.
pub type RawRecord = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct CardRating {
    pub name: String,
    pub card_id: u32,
    pub color: String,
    pub rarity: String,
    metrics: Vec<MetricValue>,
}

impl CardRating {
    /// Builds a rating from a merged ids + ratings row.
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let name = record
            .get(NAME_COLUMN)
            .ok_or(ReferenceError::MissingColumn {
                column: NAME_COLUMN,
            })?
            .trim()
            .to_string();

        let raw_id = record.get(CARD_ID_COLUMN).ok_or(ReferenceError::MissingColumn {
            column: CARD_ID_COLUMN,
        })?;
        let card_id = raw_id
            .trim()
            .parse::<u32>()
            .map_err(|_| ReferenceError::MalformedCardId {
                name: name.clone(),
                value: raw_id.to_string(),
            })?;

        let field = |column: &str| record.get(column).cloned().unwrap_or_default();

        let mut metrics = Vec::with_capacity(Metric::COUNT);
        for metric in Metric::iter() {
            let raw = record
                .get(metric.to_string().as_str())
                .map(String::as_str)
                .unwrap_or_default();
            metrics.push(MetricValue::parse(metric, raw)?);
        }

        Ok(CardRating {
            name,
            card_id,
            color: field(COLOR_COLUMN),
            rarity: field(RARITY_COLUMN),
            metrics,
        })
    }

    pub fn metric(&self, metric: Metric) -> &MetricValue {
        &self.metrics[metric as usize]
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.metric(metric).value()
    }

    pub fn display(&self, metric: Metric) -> &str {
        self.metric(metric).display()
    }
}
