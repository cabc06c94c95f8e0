//! Known spellings of each rank family.
//!
//! Keys are stored already normalized (see `normalize_token`), so lookups are
//! plain whole-string matches.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::Family;

/// Russian and English names, common slang and single-letter shorthands.
pub const ALIASES: &[(Family, &[&str])] = &[
    (Family::Iron, &["железо", "iron", "ж"]),
    (Family::Bronze, &["бронза", "bronze", "б"]),
    (Family::Silver, &["серебро", "silver", "с"]),
    (Family::Gold, &["золото", "голда", "gold", "г"]),
    (Family::Platinum, &["платина", "platinum", "п", "плат"]),
    (Family::Diamond, &["алмаз", "даймонд", "diamond", "д"]),
    (
        Family::Ascendant,
        &["асцендант", "аскедант", "асцедант", "ascendant", "а", "аск", "асц", "asc"],
    ),
    (Family::Immortal, &["иммортал", "immortal", "иммо", "им", "и"]),
    (Family::Radiant, &["радиант", "radiant", "рад", "r"]),
];

static ALIAS_INDEX: LazyLock<HashMap<&'static str, Family>> = LazyLock::new(|| {
    ALIASES
        .iter()
        .flat_map(|&(family, names)| names.iter().map(move |&name| (name, family)))
        .collect()
});

/// Resolve a normalized core string to its family.
pub fn lookup_family(core: &str) -> Option<Family> {
    ALIAS_INDEX.get(core).copied()
}
