//! Class-year type for college rosters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NilError;

/// Academic class year of a college player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl ClassYear {
    /// Remaining seasons of eligibility after the current one.
    pub fn years_remaining(&self) -> u8 {
        match self {
            ClassYear::Freshman => 3,
            ClassYear::Sophomore => 2,
            ClassYear::Junior => 1,
            ClassYear::Senior => 0,
        }
    }
}

impl fmt::Display for ClassYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClassYear::Freshman => "Fr",
            ClassYear::Sophomore => "So",
            ClassYear::Junior => "Jr",
            ClassYear::Senior => "Sr",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ClassYear {
    type Err = NilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fr" | "freshman" => Ok(ClassYear::Freshman),
            "so" | "sophomore" => Ok(ClassYear::Sophomore),
            "jr" | "junior" => Ok(ClassYear::Junior),
            "sr" | "senior" => Ok(ClassYear::Senior),
            _ => Err(NilError::InvalidClassYear {
                class: s.to_string(),
            }),
        }
    }
}
