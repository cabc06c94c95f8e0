//! Shared domain types.
//!
//! These types are intentionally small and `Copy` so they can be:
//!
//! - passed by value through the parser and the scale mapper
//! - serialized into JSON reports
//! - rendered directly in the TUI

use std::fmt;

use serde::Serialize;

/// Number of players whose ranks are averaged.
pub const TEAM_SIZE: usize = 5;

/// Sub-tiers per ordinary family.
pub const TIERS_PER_FAMILY: u32 = 3;

/// Scale position of Immortal 3, the highest ordinary rank.
pub const MAX_WITHOUT_RADIANT: u32 = 24;

/// Scale position of Radiant when it is part of the scale.
pub const RADIANT_VALUE: u32 = 25;

/// Radiant is treated as its own top position unless told otherwise.
pub const DEFAULT_INCLUDE_RADIANT: bool = true;

/// A named rank group.
///
/// Variants are declared lowest to highest; the eight ordinary families carry
/// sub-tiers 1..=3, `Radiant` has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Ascendant,
    Immortal,
    Radiant,
}

impl Family {
    /// Ordinary families in scale order.
    pub const ORDINARY: [Family; 8] = [
        Family::Iron,
        Family::Bronze,
        Family::Silver,
        Family::Gold,
        Family::Platinum,
        Family::Diamond,
        Family::Ascendant,
        Family::Immortal,
    ];

    /// Every family, including the top one.
    pub const ALL: [Family; 9] = [
        Family::Iron,
        Family::Bronze,
        Family::Silver,
        Family::Gold,
        Family::Platinum,
        Family::Diamond,
        Family::Ascendant,
        Family::Immortal,
        Family::Radiant,
    ];

    /// Stable lowercase key (used in JSON and logs).
    pub fn key(self) -> &'static str {
        match self {
            Family::Iron => "iron",
            Family::Bronze => "bronze",
            Family::Silver => "silver",
            Family::Gold => "gold",
            Family::Platinum => "platinum",
            Family::Diamond => "diamond",
            Family::Ascendant => "ascendant",
            Family::Immortal => "immortal",
            Family::Radiant => "radiant",
        }
    }

    /// Russian label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Family::Iron => "Железо",
            Family::Bronze => "Бронза",
            Family::Silver => "Серебро",
            Family::Gold => "Золото",
            Family::Platinum => "Платина",
            Family::Diamond => "Алмаз",
            Family::Ascendant => "Асцендант",
            Family::Immortal => "Иммортал",
            Family::Radiant => "Радиант",
        }
    }

    /// English label (scale table only).
    pub fn english_name(self) -> &'static str {
        match self {
            Family::Iron => "Iron",
            Family::Bronze => "Bronze",
            Family::Silver => "Silver",
            Family::Gold => "Gold",
            Family::Platinum => "Platinum",
            Family::Diamond => "Diamond",
            Family::Ascendant => "Ascendant",
            Family::Immortal => "Immortal",
            Family::Radiant => "Radiant",
        }
    }

    /// Zero-based position among the ordinary families, `None` for Radiant.
    pub fn index(self) -> Option<usize> {
        Family::ORDINARY.iter().position(|&f| f == self)
    }

    pub fn is_top(self) -> bool {
        self == Family::Radiant
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A structured rank: family plus sub-tier.
///
/// `tier` is `Some(1..=3)` for ordinary families and `None` for Radiant; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rank {
    family: Family,
    tier: Option<u8>,
}

impl Rank {
    /// Ordinary rank. Returns `None` for Radiant or a tier outside 1..=3.
    pub fn tiered(family: Family, tier: u8) -> Option<Self> {
        if family.is_top() || !(1..=3).contains(&tier) {
            return None;
        }
        Some(Self {
            family,
            tier: Some(tier),
        })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Sub-tier 1..=3, `None` for Radiant.
    pub fn tier(&self) -> Option<u8> {
        self.tier
    }

    pub fn radiant() -> Self {
        Self {
            family: Family::Radiant,
            tier: None,
        }
    }

    /// Every valid rank, lowest to highest.
    pub fn all() -> Vec<Rank> {
        let mut out: Vec<Rank> = Family::ORDINARY
            .iter()
            .flat_map(|&family| (1..=3).filter_map(move |tier| Rank::tiered(family, tier)))
            .collect();
        out.push(Rank::radiant());
        out
    }

    /// Russian label: `"Алмаз 2"`, or `"Радиант"` without a numeral.
    pub fn label(&self) -> String {
        match self.tier {
            Some(tier) if !self.family.is_top() => {
                format!("{} {tier}", self.family.display_name())
            }
            _ => self.family.display_name().to_string(),
        }
    }

    /// English label used by the scale table.
    pub fn english_label(&self) -> String {
        match self.tier {
            Some(tier) if !self.family.is_top() => {
                format!("{} {tier}", self.family.english_name())
            }
            _ => self.family.english_name().to_string(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
