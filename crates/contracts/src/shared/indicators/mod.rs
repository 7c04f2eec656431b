use serde::{Deserialize, Serialize};

use super::number_format::{format_amount, format_number_int, format_number_with_decimals};

/// How a card value is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn euro() -> Self {
        ValueFormat::Money {
            currency: "€".to_string(),
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Money { currency } => format!("{}{}", currency, format_amount(value)),
            ValueFormat::Number { decimals } => {
                format_number_with_decimals(value, *decimals as usize)
            }
            ValueFormat::Percent { decimals } => format!("{:.*}%", *decimals as usize, value),
            ValueFormat::Integer => format_number_int(value),
        }
    }
}

/// Traffic-light status of a metric (drives colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// CSS modifier suffix
    pub fn css_modifier(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "good",
            IndicatorStatus::Bad => "bad",
            IndicatorStatus::Neutral => "neutral",
            IndicatorStatus::Warning => "warning",
        }
    }
}

fn banded(value: f64, bad_below: f64, good_from: f64) -> IndicatorStatus {
    if value <= 0.0 || !value.is_finite() {
        IndicatorStatus::Neutral
    } else if value < bad_below {
        IndicatorStatus::Bad
    } else if value < good_from {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Good
    }
}

/// Organic engagement rate: under 1% is poor, 3.5% and above is healthy
pub fn engagement_status(rate: f64) -> IndicatorStatus {
    banded(rate, 1.0, 3.5)
}

/// Paid click-through rate: under 0.5% is poor, 1.5% and above is healthy
pub fn ctr_status(ctr: f64) -> IndicatorStatus {
    banded(ctr, 0.5, 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_bands() {
        assert_eq!(engagement_status(0.0), IndicatorStatus::Neutral);
        assert_eq!(engagement_status(0.8), IndicatorStatus::Bad);
        assert_eq!(engagement_status(1.0), IndicatorStatus::Warning);
        assert_eq!(engagement_status(3.49), IndicatorStatus::Warning);
        assert_eq!(engagement_status(3.5), IndicatorStatus::Good);
    }

    #[test]
    fn test_ctr_bands() {
        assert_eq!(ctr_status(0.0), IndicatorStatus::Neutral);
        assert_eq!(ctr_status(0.4), IndicatorStatus::Bad);
        assert_eq!(ctr_status(0.5), IndicatorStatus::Warning);
        assert_eq!(ctr_status(1.5), IndicatorStatus::Good);
    }

    #[test]
    fn test_value_format() {
        assert_eq!(ValueFormat::euro().format(12500.0), "€12 500");
        assert_eq!(ValueFormat::Integer.format(48210.0), "48 210");
        assert_eq!(ValueFormat::Percent { decimals: 2 }.format(2.5), "2.50%");
        assert_eq!(ValueFormat::Number { decimals: 1 }.format(1234.56), "1 234.6");
    }
}
