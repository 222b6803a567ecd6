//! Card type, identity and effort themes.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier shared by every cell of one placed card.
pub type CardId = Uuid;

/// Kind of effort token a user can place on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Three contiguous working days, one theme per day.
    Effort,
    /// One rest day, no theme.
    Slump,
}

impl CardType {
    /// Both card types in display order.
    pub const ALL: [CardType; 2] = [CardType::Effort, CardType::Slump];

    /// Number of contiguous dated cells one card of this type occupies.
    pub fn run_length(self) -> usize {
        match self {
            Self::Effort => 3,
            Self::Slump => 1,
        }
    }

    /// Whether cells of this card carry a theme index.
    pub fn uses_themes(self) -> bool {
        matches!(self, Self::Effort)
    }

    /// Stable lowercase id used in logs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Effort => "effort",
            Self::Slump => "slump",
        }
    }
}

impl Display for CardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Focus theme cycled across the three days of an effort card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Career,
    Hobby,
    Wellbeing,
}

impl Theme {
    /// Themes in cycle order; position equals the stored theme index.
    pub const CYCLE: [Theme; 3] = [Theme::Career, Theme::Hobby, Theme::Wellbeing];

    /// Resolves a stored theme index (`0..=2`).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::CYCLE.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Career => 0,
            Self::Hobby => 1,
            Self::Wellbeing => 2,
        }
    }

    /// User-facing short label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Career => "Career growth",
            Self::Hobby => "Hobbies",
            Self::Wellbeing => "Body and mind",
        }
    }
}
