//! Basketball position types and utilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NilError;

/// College basketball positions.
///
/// NBA reference data uses a looser position vocabulary (G, F, G-F, ...),
/// so each college position maps onto a set of compatible NBA labels for
/// comparable matching.
///
/// # Examples
///
/// ```rust
/// use cbb_nil::Position;
///
/// let pg = Position::PG;
/// assert_eq!(pg.to_string(), "PG");
/// assert!(pg.matches_nba_label("G"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// All five positions, in conventional 1-5 order.
    pub fn all() -> [Position; 5] {
        [
            Position::PG,
            Position::SG,
            Position::SF,
            Position::PF,
            Position::C,
        ]
    }

    /// Numeric position slot (1 = PG .. 5 = C).
    pub fn slot(&self) -> u8 {
        match self {
            Position::PG => 1,
            Position::SG => 2,
            Position::SF => 3,
            Position::PF => 4,
            Position::C => 5,
        }
    }

    /// NBA roster labels this position can be compared against.
    ///
    /// Combo labels ("G-F") are handled by [`Position::matches_nba_label`],
    /// which checks each hyphen-separated part.
    pub fn compatible_nba_labels(&self) -> &'static [&'static str] {
        match self {
            Position::PG => &["PG", "G"],
            Position::SG => &["SG", "G"],
            Position::SF => &["SF", "F"],
            Position::PF => &["PF", "F"],
            Position::C => &["C"],
        }
    }

    /// Whether an NBA roster position label is compatible with this position.
    pub fn matches_nba_label(&self, label: &str) -> bool {
        label
            .split('-')
            .map(str::trim)
            .any(|part| {
                self.compatible_nba_labels()
                    .iter()
                    .any(|ok| part.eq_ignore_ascii_case(ok))
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = NilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PG" | "1" => Ok(Position::PG),
            "SG" | "2" => Ok(Position::SG),
            "SF" | "3" => Ok(Position::SF),
            "PF" | "4" => Ok(Position::PF),
            "C" | "5" => Ok(Position::C),
            _ => Err(NilError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_slots_and_order() {
        let slots: Vec<u8> = Position::all().iter().map(|p| p.slot()).collect();
        assert_eq!(slots, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_position_parsing() {
        assert_eq!("pg".parse::<Position>().unwrap(), Position::PG);
        assert_eq!("SF".parse::<Position>().unwrap(), Position::SF);
        assert_eq!("5".parse::<Position>().unwrap(), Position::C);
        assert!("QB".parse::<Position>().is_err());
    }

    #[test]
    fn test_nba_label_compatibility() {
        assert!(Position::PG.matches_nba_label("G"));
        assert!(Position::PG.matches_nba_label("pg"));
        assert!(!Position::PG.matches_nba_label("F"));

        // Combo labels match when either part is compatible
        assert!(Position::SF.matches_nba_label("G-F"));
        assert!(Position::SG.matches_nba_label("G-F"));
        assert!(!Position::C.matches_nba_label("G-F"));
        assert!(Position::C.matches_nba_label("F-C"));
    }
}
