use strum_macros::{EnumCount, EnumIter, EnumString};

use crate::error::{ReferenceError, Result};

/// How a metric's column is written in the 17lands card data export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Plain integer, e.g. `1234`.
    Count,
    /// Decimal with a trailing `%`, e.g. `62.50%`.
    Percentage,
    /// Plain decimal, e.g. `2.10`.
    Decimal,
    /// Decimal with a unit suffix, e.g. `4.3pp`.
    Suffixed(char),
}

impl Encoding {
    fn parse(self, raw: &str) -> Option<Option<f64>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Some(None);
        }

        let value = match self {
            Encoding::Count => raw.parse::<i64>().ok()? as f64,
            Encoding::Percentage => raw.trim_end_matches('%').trim_end().parse::<f64>().ok()?,
            Encoding::Decimal => raw.parse::<f64>().ok()?,
            Encoding::Suffixed(suffix) => {
                raw.trim_end_matches(suffix).trim_end().parse::<f64>().ok()?
            }
        };

        value.is_finite().then_some(Some(value))
    }

    fn format(self, value: Option<f64>) -> String {
        match (self, value) {
            (_, None) => String::new(),
            (Encoding::Count, Some(v)) => format!("{}", v as i64),
            (Encoding::Percentage, Some(v)) => format!("{:.2}%", v),
            (Encoding::Decimal | Encoding::Suffixed(_), Some(v)) => format!("{:.2}", v),
        }
    }
}

/// The statistic columns of the 17lands card data export, in export order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    EnumCount,
    strum_macros::Display,
)]
pub enum Metric {
    #[strum(serialize = "# Seen")]
    NumSeen,
    #[strum(serialize = "ALSA")]
    Alsa,
    #[strum(serialize = "# Picked")]
    NumPicked,
    #[strum(serialize = "ATA")]
    Ata,
    #[strum(serialize = "# GP")]
    NumGp,
    #[strum(serialize = "% GP")]
    PctGp,
    #[strum(serialize = "GP WR")]
    GpWr,
    #[strum(serialize = "# OH")]
    NumOh,
    #[strum(serialize = "OH WR")]
    OhWr,
    #[strum(serialize = "# GD")]
    NumGd,
    #[strum(serialize = "GD WR")]
    GdWr,
    #[strum(serialize = "# GIH")]
    NumGih,
    #[strum(serialize = "GIH WR")]
    GihWr,
    #[strum(serialize = "# GNS")]
    NumGns,
    #[strum(serialize = "GNS WR")]
    GnsWr,
    #[strum(serialize = "IWD")]
    Iwd,
}

impl Metric {
    pub fn encoding(self) -> Encoding {
        match self {
            Metric::NumSeen
            | Metric::NumPicked
            | Metric::NumGp
            | Metric::NumOh
            | Metric::NumGd
            | Metric::NumGih
            | Metric::NumGns => Encoding::Count,
            Metric::Alsa | Metric::Ata => Encoding::Decimal,
            Metric::PctGp
            | Metric::GpWr
            | Metric::OhWr
            | Metric::GdWr
            | Metric::GihWr
            | Metric::GnsWr => Encoding::Percentage,
            Metric::Iwd => Encoding::Suffixed('p'),
        }
    }

    /// Column header as printed next to each value, e.g. `GIH_WR`.
    pub fn label(self) -> String {
        self.to_string().replace(' ', "_")
    }

    /// Parses a raw table cell. Blank cells mean the card has no data.
    pub fn parse(self, raw: &str) -> Result<Option<f64>> {
        self.encoding()
            .parse(raw)
            .ok_or_else(|| ReferenceError::MalformedMetricValue {
                metric: self,
                value: raw.to_string(),
            })
    }

    pub fn format(self, value: Option<f64>) -> String {
        self.encoding().format(value)
    }
}

/// One card's value for one metric, together with its rendered form.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricValue {
    value: Option<f64>,
    display: String,
}

impl MetricValue {
    pub fn new(metric: Metric, value: Option<f64>) -> Self {
        MetricValue {
            value,
            display: metric.format(value),
        }
    }

    pub fn parse(metric: Metric, raw: &str) -> Result<Self> {
        Ok(MetricValue::new(metric, metric.parse(raw)?))
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn round_trip(metric: Metric, raw: &str) -> String {
        MetricValue::parse(metric, raw).unwrap().display().to_string()
    }

    #[test]
    fn test_percentage_is_normalized() {
        assert_eq!(Metric::GihWr.parse("62.5%").unwrap(), Some(62.5));
        assert_eq!(round_trip(Metric::GihWr, "62.5%"), "62.50%");
        assert_eq!(round_trip(Metric::PctGp, "7%"), "7.00%");
    }

    #[test]
    fn test_decimal_and_suffixed() {
        assert_eq!(round_trip(Metric::Alsa, "2.1"), "2.10");
        assert_eq!(Metric::Iwd.parse("4.3pp").unwrap(), Some(4.3));
        assert_eq!(round_trip(Metric::Iwd, "-1.25pp"), "-1.25");
        assert_eq!(round_trip(Metric::Iwd, "0.5"), "0.50");
    }

    #[test]
    fn test_count() {
        assert_eq!(Metric::NumSeen.parse("1234").unwrap(), Some(1234.0));
        assert_eq!(round_trip(Metric::NumSeen, "1234"), "1234");
        assert_eq!(round_trip(Metric::NumGih, "0"), "0");
    }

    #[test]
    fn test_blank_is_absent() {
        for metric in Metric::iter() {
            assert_eq!(metric.parse("").unwrap(), None);
            assert_eq!(metric.parse("   ").unwrap(), None);
            assert_eq!(round_trip(metric, ""), "");
        }
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            Metric::NumSeen.parse("12.5"),
            Err(ReferenceError::MalformedMetricValue { metric: Metric::NumSeen, .. })
        ));
        assert!(Metric::NumSeen.parse("1,234").is_err());
        assert!(Metric::GihWr.parse("abc%").is_err());
        assert!(Metric::Alsa.parse("NaN").is_err());
        assert!(Metric::Ata.parse("inf").is_err());
    }

    #[test]
    fn test_names_and_labels() {
        assert_eq!(Metric::from_str("GIH WR").unwrap(), Metric::GihWr);
        assert_eq!(Metric::from_str("# Seen").unwrap(), Metric::NumSeen);
        assert!(Metric::from_str("gih wr").is_err());
        assert_eq!(Metric::GihWr.label(), "GIH_WR");
        assert_eq!(Metric::PctGp.label(), "%_GP");
        assert_eq!(Metric::Iwd.label(), "IWD");
    }
}
