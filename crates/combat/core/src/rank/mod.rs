//! The four-slot front line.
//!
//! Every combatant stands on a rank from 1 (front, melee range) to 4 (back).
//! [`RankSystem`] owns those positions for one battle and is the only place
//! they change. Ranks are per side: an enemy at rank 1 and a player at rank 1
//! face each other across the line.
//!
//! Occupancy is not exclusive; any number of entities may share a rank.

mod set;

pub use set::RankSet;

use crate::config::CombatConfig;
use crate::state::EntityId;

/// A validated position on the line, always within `[1, 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Rank(u8);

impl Rank {
    pub const FRONT: Rank = Rank(CombatConfig::FRONT_RANK);
    pub const BACK: Rank = Rank(CombatConfig::BACK_RANK);

    /// All ranks from front to back.
    pub const ALL: [Rank; 4] = [Rank(1), Rank(2), Rank(3), Rank(4)];

    /// Returns `None` if `value` is outside `[1, 4]`.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= CombatConfig::FRONT_RANK && value <= CombatConfig::BACK_RANK {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Rank shifted by `delta`, clamped into the line.
    fn saturating_offset(self, delta: i16) -> Self {
        let raw = (i16::from(self.0) + delta).clamp(
            i16::from(CombatConfig::FRONT_RANK),
            i16::from(CombatConfig::BACK_RANK),
        );
        Self(raw as u8)
    }

    /// Rank shifted by `delta`, or `None` if that leaves the line.
    fn checked_offset(self, delta: i16) -> Option<Self> {
        let raw = i16::from(self.0) + delta;
        u8::try_from(raw).ok().and_then(Self::new)
    }
}

/// Raised when deserializing or converting a rank outside `[1, 4]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("rank {0} is outside the line (1..=4)")]
pub struct RankOutOfRange(pub u8);

impl TryFrom<u8> for Rank {
    type Error = RankOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RankOutOfRange(value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl core::fmt::Display for Rank {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rank {}", self.0)
    }
}

/// Which side of the line an entity fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub const fn opposing(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Voluntary movement along the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveDirection {
    /// Toward the front (rank decreases).
    Advance,
    /// Toward the back (rank increases).
    Retreat,
}

impl MoveDirection {
    const fn delta(self) -> i16 {
        match self {
            MoveDirection::Advance => -1,
            MoveDirection::Retreat => 1,
        }
    }

    /// Direction that leads from `from` to `to`, if they differ.
    pub fn between(from: Rank, to: Rank) -> Option<Self> {
        match to.cmp(&from) {
            core::cmp::Ordering::Less => Some(MoveDirection::Advance),
            core::cmp::Ordering::Greater => Some(MoveDirection::Retreat),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// One combatant's place on the line. The side never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankEntity {
    id: EntityId,
    rank: Rank,
    side: Side,
}

impl RankEntity {
    pub fn new(id: EntityId, rank: Rank, side: Side) -> Self {
        Self { id, rank, side }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

/// Result of a voluntary move or a pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// `false` when the move would have left the line; nothing changed then.
    pub success: bool,
    pub new_rank: Rank,
}

/// Result of a knockback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnockbackOutcome {
    pub success: bool,
    pub new_rank: Rank,
    /// The push would have carried the entity past rank 4. The caller decides
    /// what a wall slam costs.
    pub wall_slam: bool,
}

/// Positions of every combatant in one battle.
///
/// All operations report failure through their return value and never panic.
/// Operations on an unknown id return `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankSystem {
    entities: Vec<RankEntity>,
}

impl RankSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new entity on the line. Returns `false` if the id is taken.
    pub fn insert(&mut self, entity: RankEntity) -> bool {
        if self.entity(entity.id).is_some() {
            return false;
        }
        self.entities.push(entity);
        true
    }

    pub fn entity(&self, id: EntityId) -> Option<&RankEntity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn entities(&self) -> &[RankEntity] {
        &self.entities
    }

    pub fn rank_of(&self, id: EntityId) -> Option<Rank> {
        self.entity(id).map(RankEntity::rank)
    }

    pub fn side_of(&self, id: EntityId) -> Option<Side> {
        self.entity(id).map(RankEntity::side)
    }

    /// Entities of `side` standing on `rank`, in insertion order.
    pub fn occupants(&self, side: Side, rank: Rank) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .filter(move |entity| entity.side == side && entity.rank == rank)
            .map(RankEntity::id)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut RankEntity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    /// Steps one rank toward the front or back.
    ///
    /// Advancing from rank 1 or retreating from rank 4 fails and leaves the
    /// entity where it was.
    pub fn move_entity(&mut self, id: EntityId, direction: MoveDirection) -> Option<MoveOutcome> {
        let entity = self.entity_mut(id)?;
        match entity.rank.checked_offset(direction.delta()) {
            Some(next) => {
                entity.rank = next;
                Some(MoveOutcome {
                    success: true,
                    new_rank: next,
                })
            }
            None => Some(MoveOutcome {
                success: false,
                new_rank: entity.rank,
            }),
        }
    }

    /// Pushes an entity `force` ranks toward the back, clamping at rank 4.
    pub fn apply_knockback(&mut self, id: EntityId, force: u8) -> Option<KnockbackOutcome> {
        let entity = self.entity_mut(id)?;
        let target = i16::from(entity.rank.get()) + i16::from(force);
        let wall_slam = target > i16::from(CombatConfig::BACK_RANK);
        entity.rank = entity.rank.saturating_offset(i16::from(force));
        Some(KnockbackOutcome {
            success: true,
            new_rank: entity.rank,
            wall_slam,
        })
    }

    /// Drags an entity `force` ranks toward the front, clamping at rank 1.
    pub fn apply_pull(&mut self, id: EntityId, force: u8) -> Option<MoveOutcome> {
        let entity = self.entity_mut(id)?;
        entity.rank = entity.rank.saturating_offset(-i16::from(force));
        Some(MoveOutcome {
            success: true,
            new_rank: entity.rank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with(rank: u8) -> (RankSystem, EntityId) {
        let id = EntityId(7);
        let mut ranks = RankSystem::new();
        assert!(ranks.insert(RankEntity::new(id, Rank::new(rank).unwrap(), Side::Enemy)));
        (ranks, id)
    }

    #[test]
    fn rank_rejects_values_off_the_line() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(5), None);
        assert_eq!(Rank::try_from(4), Ok(Rank::BACK));
        assert_eq!(Rank::try_from(9), Err(RankOutOfRange(9)));
    }

    #[test]
    fn moves_never_leave_the_line() {
        for start in Rank::ALL {
            for direction in [MoveDirection::Advance, MoveDirection::Retreat] {
                let (mut ranks, id) = line_with(start.get());
                let outcome = ranks.move_entity(id, direction).unwrap();
                let rank = ranks.rank_of(id).unwrap();
                assert_eq!(outcome.new_rank, rank);
                assert!((1..=4).contains(&rank.get()));
            }
        }
    }

    #[test]
    fn advance_from_front_and_retreat_from_back_fail() {
        let (mut ranks, id) = line_with(1);
        let outcome = ranks.move_entity(id, MoveDirection::Advance).unwrap();
        assert!(!outcome.success);
        assert_eq!(ranks.rank_of(id), Some(Rank::FRONT));

        let (mut ranks, id) = line_with(4);
        let outcome = ranks.move_entity(id, MoveDirection::Retreat).unwrap();
        assert!(!outcome.success);
        assert_eq!(ranks.rank_of(id), Some(Rank::BACK));
    }

    #[test]
    fn advance_decrements_and_retreat_increments() {
        let (mut ranks, id) = line_with(2);
        let outcome = ranks.move_entity(id, MoveDirection::Advance).unwrap();
        assert_eq!(outcome, MoveOutcome { success: true, new_rank: Rank::FRONT });

        let outcome = ranks.move_entity(id, MoveDirection::Retreat).unwrap();
        assert_eq!(outcome.new_rank.get(), 2);
    }

    #[test]
    fn knockback_past_back_wall_slams() {
        for start in 1..=4u8 {
            for force in 0..=5u8 {
                let (mut ranks, id) = line_with(start);
                let outcome = ranks.apply_knockback(id, force).unwrap();
                if start + force > 4 {
                    assert_eq!(outcome.new_rank, Rank::BACK);
                    assert!(outcome.wall_slam);
                } else {
                    assert_eq!(outcome.new_rank.get(), start + force);
                    assert!(!outcome.wall_slam);
                }
            }
        }
    }

    #[test]
    fn pull_clamps_at_front_without_signal() {
        let (mut ranks, id) = line_with(2);
        let outcome = ranks.apply_pull(id, 3).unwrap();
        assert_eq!(outcome.new_rank, Rank::FRONT);
        assert!(outcome.success);
    }

    #[test]
    fn ranks_may_be_shared() {
        let mut ranks = RankSystem::new();
        assert!(ranks.insert(RankEntity::new(EntityId(1), Rank::FRONT, Side::Enemy)));
        assert!(ranks.insert(RankEntity::new(EntityId(2), Rank::new(2).unwrap(), Side::Enemy)));
        ranks.move_entity(EntityId(2), MoveDirection::Advance);
        let front: Vec<_> = ranks.occupants(Side::Enemy, Rank::FRONT).collect();
        assert_eq!(front, vec![EntityId(1), EntityId(2)]);
    }

    #[test]
    fn unknown_entities_are_reported_not_panicked() {
        let mut ranks = RankSystem::new();
        assert!(ranks.move_entity(EntityId(3), MoveDirection::Advance).is_none());
        assert!(ranks.apply_knockback(EntityId(3), 1).is_none());
        assert!(ranks.apply_pull(EntityId(3), 1).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let (mut ranks, id) = line_with(3);
        assert!(!ranks.insert(RankEntity::new(id, Rank::FRONT, Side::Player)));
        assert_eq!(ranks.side_of(id), Some(Side::Enemy));
        assert_eq!(ranks.rank_of(id).map(Rank::get), Some(3));
    }
}
