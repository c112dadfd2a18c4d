//! Price ordering for restaurant product listings.

use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Direction in which a restaurant listing is ordered by price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    HighToLow,
    LowToHigh,
}

/// Returned when an order value is outside `high_to_low` / `low_to_high`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort order '{0}'")]
pub struct InvalidSortOrder(pub String);

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighToLow => "high_to_low",
            Self::LowToHigh => "low_to_high",
        }
    }

    /// Compares two prices in this direction.
    pub fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        match self {
            Self::HighToLow => b.cmp(a),
            Self::LowToHigh => a.cmp(b),
        }
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high_to_low" => Ok(Self::HighToLow),
            "low_to_high" => Ok(Self::LowToHigh),
            other => Err(InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("high_to_low".parse(), Ok(SortOrder::HighToLow));
        assert_eq!("low_to_high".parse(), Ok(SortOrder::LowToHigh));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("HIGH_TO_LOW".parse::<SortOrder>().is_err());
        assert!("".parse::<SortOrder>().is_err());
        assert!("asc".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for order in [SortOrder::HighToLow, SortOrder::LowToHigh] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
    }

    #[test]
    fn test_compare_direction() {
        let cheap = Decimal::new(10, 0);
        let pricey = Decimal::new(30, 0);

        assert_eq!(SortOrder::LowToHigh.compare(&cheap, &pricey), Ordering::Less);
        assert_eq!(SortOrder::HighToLow.compare(&cheap, &pricey), Ordering::Greater);
        assert_eq!(SortOrder::HighToLow.compare(&cheap, &cheap), Ordering::Equal);
    }
}
