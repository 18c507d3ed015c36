//! Greedy auto-pilot for the participants' side.

use anyhow::{Result, bail};
use combat_core::{
    BattleId, BattleStatus, BattleView, CardId, CombatError, ErrorKind, ParticipantView, PlayCard,
};
use runtime::{BattleRepository, CombatService};
use tracing::{debug, warn};

/// Drives battle `id` until it finishes or passes `max_rounds`.
///
/// Each participant plays their hardest-hitting affordable card until no such
/// card is left, then ends the turn. NPC turns run inside `end_turn`.
pub async fn run<R: BattleRepository>(
    service: &CombatService<R>,
    id: BattleId,
    max_rounds: u32,
) -> Result<BattleView> {
    loop {
        let view = service.view(id).await?;
        if view.status != BattleStatus::Active || view.round > max_rounds {
            return Ok(view);
        }
        let Some(actor) = view.current_actor else {
            return Ok(view);
        };
        let Some(participant) = view.participants.iter().find(|p| p.id == actor) else {
            bail!("current actor {actor} is not a participant");
        };

        if let Some(card) = pick_card(participant) {
            let request = PlayCard {
                participant: actor,
                card: card.clone(),
                target: None,
            };
            match service.play_card(id, request).await {
                Ok(played) => {
                    debug!(%actor, card = %played.card, damage = played.damage, "auto-played");
                    continue;
                }
                Err(err) if err.kind() == ErrorKind::Validation => {
                    warn!(%actor, %card, error = %err, "auto-play rejected, ending turn");
                }
                Err(err) => return Err(err.into()),
            }
        }

        service.end_turn(id, actor).await?;
    }
}

fn pick_card(participant: &ParticipantView) -> Option<&CardId> {
    participant
        .hand
        .iter()
        .filter(|card| card.damage > 0 && card.ap_cost <= participant.energy)
        .max_by_key(|card| card.damage)
        .map(|card| &card.id)
}
