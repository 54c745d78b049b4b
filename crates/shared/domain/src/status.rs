use crate::constants::PLENTIFUL_BEDS_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light classification of a hospital's available ER beds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedStatus {
    /// More than five beds.
    Green,
    /// Between one and five beds.
    Orange,
    /// No beds, a negative count, or no report at all.
    Red,
}

impl BedStatus {
    /// Classifies a bed count; an absent count is never treated as available.
    #[must_use]
    pub const fn classify(available_beds: Option<i64>) -> Self {
        match available_beds {
            Some(n) if n > PLENTIFUL_BEDS_THRESHOLD => Self::Green,
            Some(n) if n > 0 => Self::Orange,
            _ => Self::Red,
        }
    }

    /// CSS class used to style a result row.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Green => "status-green",
            Self::Orange => "status-orange",
            Self::Red => "status-red",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for BedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
