use crate::rank::{Rank, RankSystem, Side};
use crate::state::{BattleId, BattleLog, EntityId, NpcInstance, Participant};

/// Lifecycle of a battle. Transitions only ever go `Active -> Finished`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleStatus {
    Active,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Undecided,
    PlayersWin,
    EnemiesWin,
}

/// Whose side currently holds the initiative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnPhase {
    PlayerTurn,
    EnemyTurn,
}

/// Turn order and the pointer into it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub order: Vec<EntityId>,
    pub cursor: usize,
    pub phase: TurnPhase,
}

impl TurnState {
    pub fn new(order: Vec<EntityId>) -> Self {
        Self {
            order,
            cursor: 0,
            phase: TurnPhase::PlayerTurn,
        }
    }

    /// Actor the pointer refers to, if the order is non-empty.
    pub fn current(&self) -> Option<EntityId> {
        self.order.get(self.cursor).copied()
    }

    /// Moves the pointer to the next slot. Returns `true` when it wrapped
    /// back to the start of the order.
    pub fn advance(&mut self) -> bool {
        if self.order.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.order.len();
        self.cursor == 0
    }
}

/// One battle aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    pub id: BattleId,
    /// Base seed for deck shuffles. Fixed at creation.
    pub seed: u64,
    /// Incremented once per resolved request; mixed into shuffle seeds.
    pub nonce: u64,
    status: BattleStatus,
    outcome: BattleOutcome,
    pub round: u32,
    pub turn: TurnState,
    pub participants: Vec<Participant>,
    pub npcs: Vec<NpcInstance>,
    pub ranks: RankSystem,
    pub log: BattleLog,
}

impl Battle {
    pub fn new(
        id: BattleId,
        seed: u64,
        participants: Vec<Participant>,
        npcs: Vec<NpcInstance>,
        ranks: RankSystem,
        turn: TurnState,
    ) -> Self {
        Self {
            id,
            seed,
            nonce: 0,
            status: BattleStatus::Active,
            outcome: BattleOutcome::Undecided,
            round: 1,
            turn,
            participants,
            npcs,
            ranks,
            log: BattleLog::new(),
        }
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        self.status == BattleStatus::Active
    }

    /// Ends the battle with `outcome`. Has no effect once finished.
    pub fn finish(&mut self, outcome: BattleOutcome) -> bool {
        if !self.is_active() {
            return false;
        }
        self.status = BattleStatus::Finished;
        self.outcome = outcome;
        true
    }

    pub fn participant(&self, id: EntityId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participant_mut(&mut self, id: EntityId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    pub fn npc(&self, id: EntityId) -> Option<&NpcInstance> {
        self.npcs.iter().find(|npc| npc.id == id)
    }

    pub fn npc_mut(&mut self, id: EntityId) -> Option<&mut NpcInstance> {
        self.npcs.iter_mut().find(|npc| npc.id == id)
    }

    pub fn rank_of(&self, id: EntityId) -> Option<Rank> {
        self.ranks.rank_of(id)
    }

    /// Living NPCs hostile to the players, in spawn order.
    pub fn living_hostiles(&self) -> impl Iterator<Item = &NpcInstance> {
        self.npcs
            .iter()
            .filter(|npc| npc.side == Side::Enemy && npc.is_alive())
    }

    pub fn all_hostiles_down(&self) -> bool {
        self.living_hostiles().next().is_none()
    }

    pub fn all_participants_down(&self) -> bool {
        self.participants.iter().all(|p| !p.is_alive())
    }
}
