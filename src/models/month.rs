//! Calendar month labels
//!
//! A closed enumeration of the twelve months using the Spanish display names
//! the registration data is recorded with. Serialized as the label itself so
//! persisted files stay human-readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve fixed calendar-month labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Enero,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Enero,
        Month::Febrero,
        Month::Marzo,
        Month::Abril,
        Month::Mayo,
        Month::Junio,
        Month::Julio,
        Month::Agosto,
        Month::Septiembre,
        Month::Octubre,
        Month::Noviembre,
        Month::Diciembre,
    ];

    /// Get the month for a 1-based calendar month number
    pub fn from_number(n: u32) -> Option<Month> {
        match n {
            1..=12 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            Month::Enero => "Enero",
            Month::Febrero => "Febrero",
            Month::Marzo => "Marzo",
            Month::Abril => "Abril",
            Month::Mayo => "Mayo",
            Month::Junio => "Junio",
            Month::Julio => "Julio",
            Month::Agosto => "Agosto",
            Month::Septiembre => "Septiembre",
            Month::Octubre => "Octubre",
            Month::Noviembre => "Noviembre",
            Month::Diciembre => "Diciembre",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Parse a month from its label (case-insensitive) or a 1-12 number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(n) = s.parse::<u32>() {
            return Month::from_number(n).ok_or_else(|| MonthParseError(s.to_string()));
        }

        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|m| m.label().to_lowercase() == lower)
            .copied()
            .ok_or_else(|| MonthParseError(s.to_string()))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown month: {}", self.0)
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(Month::from_number(1), Some(Month::Enero));
        assert_eq!(Month::from_number(12), Some(Month::Diciembre));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_all_is_in_calendar_order() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(Month::from_number(i as u32 + 1), Some(*month));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::Marzo), "Marzo");
    }

    #[test]
    fn test_parse_label() {
        assert_eq!("Enero".parse::<Month>().unwrap(), Month::Enero);
        assert_eq!("enero".parse::<Month>().unwrap(), Month::Enero);
        assert_eq!("DICIEMBRE".parse::<Month>().unwrap(), Month::Diciembre);
        assert!("Smarch".parse::<Month>().is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!("3".parse::<Month>().unwrap(), Month::Marzo);
        assert!("13".parse::<Month>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Month::Febrero).unwrap();
        assert_eq!(json, "\"Febrero\"");

        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Month::Febrero);
    }
}
