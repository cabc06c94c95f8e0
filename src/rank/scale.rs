//! Numeric scale mapping.
//!
//! Ordinary ranks occupy the contiguous positions 1..=24 (`index × 3 + tier`).
//! Radiant sits on top at 25 when included, or collapses onto Immortal 3 (24)
//! when excluded. The inverse mapping clamps out-of-range positions silently.

use serde::Serialize;

use crate::domain::{
    DEFAULT_INCLUDE_RADIANT, Family, MAX_WITHOUT_RADIANT, RADIANT_VALUE, Rank, TIERS_PER_FAMILY,
};

/// The scale for one computation, fixed by the Radiant inclusion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub include_radiant: bool,
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(DEFAULT_INCLUDE_RADIANT)
    }
}

impl Scale {
    pub fn new(include_radiant: bool) -> Self {
        Self { include_radiant }
    }

    /// Highest reachable position.
    pub fn ceiling(self) -> u32 {
        if self.include_radiant {
            RADIANT_VALUE
        } else {
            MAX_WITHOUT_RADIANT
        }
    }

    /// Forward mapping: rank → position.
    pub fn position(self, rank: Rank) -> u32 {
        match (rank.family().index(), rank.tier()) {
            (Some(index), Some(tier)) => index as u32 * TIERS_PER_FAMILY + u32::from(tier),
            // Radiant; ordinary ranks always carry a tier.
            _ => self.ceiling(),
        }
    }

    /// Inverse mapping: position → rank, clamped into `[1, ceiling]`.
    pub fn rank_at(self, position: i64) -> Rank {
        let n = position.clamp(1, i64::from(self.ceiling())) as u32;
        if self.include_radiant && n == RADIANT_VALUE {
            return Rank::radiant();
        }

        let index = ((n - 1) / TIERS_PER_FAMILY) as usize;
        let tier = ((n - 1) % TIERS_PER_FAMILY + 1) as u8;
        Rank::tiered(Family::ORDINARY[index], tier).unwrap_or_else(Rank::radiant)
    }

    /// Russian label of the rank at `position`.
    pub fn label_at(self, position: i64) -> String {
        self.rank_at(position).label()
    }

    /// Every position on this scale paired with its rank, lowest first.
    pub fn entries(self) -> Vec<(u32, Rank)> {
        (1..=self.ceiling())
            .map(|n| (n, self.rank_at(i64::from(n))))
            .collect()
    }
}

/// Round to the nearest integer with ties going up (`2.5 → 3`, never to even).
///
/// Scale averages are always positive, so `floor(x + 0.5)` is exact enough.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn rank(family: Family, tier: u8) -> Rank {
        Rank::tiered(family, tier).unwrap()
    }

    #[test]
    fn known_positions() {
        let scale = Scale::default();
        assert_eq!(scale.position(rank(Family::Iron, 1)), 1);
        assert_eq!(scale.position(rank(Family::Gold, 2)), 11);
        assert_eq!(scale.position(rank(Family::Diamond, 1)), 16);
        assert_eq!(scale.position(rank(Family::Immortal, 3)), 24);
        assert_eq!(scale.position(Rank::radiant()), 25);
    }

    #[test]
    fn radiant_collapses_when_excluded() {
        let scale = Scale::new(false);
        assert_eq!(scale.position(Rank::radiant()), 24);
        assert_eq!(scale.ceiling(), 24);
        assert_eq!(scale.rank_at(24), rank(Family::Immortal, 3));
    }

    #[test]
    fn ordinary_positions_are_contiguous_and_increasing() {
        for include_radiant in [true, false] {
            let scale = Scale::new(include_radiant);
            let positions: Vec<u32> = Rank::all().into_iter().map(|r| scale.position(r)).collect();
            let ordinary = &positions[..24];
            assert_eq!(ordinary, (1..=24).collect::<Vec<u32>>().as_slice());
            assert_eq!(positions[24], scale.ceiling());
        }
    }

    #[test]
    fn inverse_clamps_out_of_range() {
        let scale = Scale::default();
        assert_eq!(scale.label_at(0), "Железо 1");
        assert_eq!(scale.label_at(-7), "Железо 1");
        assert_eq!(scale.label_at(25), "Радиант");
        assert_eq!(scale.label_at(99), "Радиант");

        let scale = Scale::new(false);
        assert_eq!(scale.label_at(25), "Иммортал 3");
    }

    #[test]
    fn entries_cover_the_scale() {
        assert_eq!(Scale::new(true).entries().len(), 25);
        assert_eq!(Scale::new(false).entries().len(), 24);
        assert_eq!(Scale::new(true).entries().last(), Some(&(25, Rank::radiant())));
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(round_half_up(11.5), 12);
        assert_eq!(round_half_up(12.5), 13);
        assert_eq!(round_half_up(22.4), 22);
        assert_eq!(round_half_up(22.6), 23);
        assert_eq!(round_half_up(1.0), 1);
    }

    proptest! {
        #[test]
        fn constructible_ranks_stay_on_scale(
            family in proptest::sample::select(Family::ALL.to_vec()),
            tier in any::<u8>(),
            include_radiant in any::<bool>(),
        ) {
            let scale = Scale::new(include_radiant);
            if let Some(rank) = Rank::tiered(family, tier) {
                let position = scale.position(rank);
                prop_assert!((1..=scale.ceiling()).contains(&position));
                prop_assert_eq!(scale.rank_at(i64::from(position)), rank);
            }
        }

        #[test]
        fn forward_then_inverse_is_identity(idx in 0usize..25, include_radiant in any::<bool>()) {
            let scale = Scale::new(include_radiant);
            let rank = Rank::all()[idx];
            // With Radiant excluded its position belongs to Immortal 3.
            prop_assume!(include_radiant || !rank.family().is_top());
            let back = scale.rank_at(i64::from(scale.position(rank)));
            prop_assert_eq!(back, rank);
            prop_assert_eq!(back.label(), rank.label());
        }

        #[test]
        fn half_values_round_to_next_integer(n in 1i64..25) {
            prop_assert_eq!(round_half_up(n as f64 + 0.5), n + 1);
        }
    }
}
