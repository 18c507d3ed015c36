use bitflags::bitflags;

use super::Rank;

bitflags! {
    /// Set of ranks a card can be played from at full efficacy.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct RankSet: u8 {
        const FRONT = 1 << 0;
        const SECOND = 1 << 1;
        const THIRD = 1 << 2;
        const BACK = 1 << 3;
    }
}

impl RankSet {
    /// Set holding exactly `rank`.
    pub const fn of(rank: Rank) -> Self {
        Self::from_bits_retain(1 << (rank.get() - 1))
    }

    pub const fn contains_rank(self, rank: Rank) -> bool {
        self.contains(Self::of(rank))
    }

    /// Member ranks from front to back.
    pub fn ranks(self) -> impl Iterator<Item = Rank> {
        Rank::ALL.into_iter().filter(move |rank| self.contains_rank(*rank))
    }
}

impl FromIterator<Rank> for RankSet {
    fn from_iter<T: IntoIterator<Item = Rank>>(iter: T) -> Self {
        iter.into_iter()
            .fold(RankSet::empty(), |set, rank| set | RankSet::of(rank))
    }
}
