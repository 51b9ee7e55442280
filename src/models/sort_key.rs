use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::models::metric::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Descending,
    Ascending,
}

/// One ranking criterion, written on the command line as `GIH WR` or `-ALSA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub metric: Metric,
    pub direction: Direction,
}

impl SortKey {
    pub fn descending(metric: Metric) -> Self {
        SortKey {
            metric,
            direction: Direction::Descending,
        }
    }

    pub fn ascending(metric: Metric) -> Self {
        SortKey {
            metric,
            direction: Direction::Ascending,
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ascending, name) = match s.strip_prefix('-') {
            Some(name) => (true, name),
            None => (false, s),
        };
        let metric =
            Metric::from_str(name.trim()).map_err(|_| format!("unknown column '{}'", name))?;
        Ok(if ascending {
            SortKey::ascending(metric)
        } else {
            SortKey::descending(metric)
        })
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.direction {
            Direction::Descending => write!(f, "{}", self.metric),
            Direction::Ascending => write!(f, "-{}", self.metric),
        }
    }
}

/// Drops repeated metrics, keeping the first occurrence and its direction.
pub fn dedup_keys(keys: impl IntoIterator<Item = SortKey>) -> Vec<SortKey> {
    keys.into_iter().unique_by(|key| key.metric).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(
            "GIH WR".parse::<SortKey>().unwrap(),
            SortKey::descending(Metric::GihWr)
        );
        assert_eq!(
            "-ALSA".parse::<SortKey>().unwrap(),
            SortKey::ascending(Metric::Alsa)
        );
        assert_eq!(
            "# Seen".parse::<SortKey>().unwrap(),
            SortKey::descending(Metric::NumSeen)
        );
        assert!("Power".parse::<SortKey>().is_err());
        assert!("--ALSA".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SortKey::ascending(Metric::Ata).to_string(), "-ATA");
        assert_eq!(SortKey::descending(Metric::GihWr).to_string(), "GIH WR");
    }

    #[test]
    fn test_dedup_keys() {
        let keys = dedup_keys(vec![
            SortKey::ascending(Metric::Alsa),
            SortKey::descending(Metric::GihWr),
            SortKey::descending(Metric::Alsa),
            SortKey::descending(Metric::GihWr),
        ]);
        assert_eq!(
            keys,
            vec![
                SortKey::ascending(Metric::Alsa),
                SortKey::descending(Metric::GihWr)
            ]
        );
    }
}
