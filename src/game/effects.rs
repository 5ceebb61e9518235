//! Engine primitives: arrows, damage, healing and the action effects.
//!
//! Every primitive that can kill someone leaves the abort decision to the
//! caller, except [`Game::give_arrows`], which has to stop distributing as
//! soon as the turn is over.

use tracing::{debug, trace};

use crate::game::engine::Flow;
use crate::game::{Action, Event, Game, PlayerId};

impl Game {
    /// Hand `n` arrows to a player, one at a time.
    ///
    /// Each arrow may empty the pile and set off an Indian Attack, after
    /// which the remaining arrows are only handed out if the turn goes on.
    pub(super) fn give_arrows(&mut self, player: PlayerId, n: u32) -> Flow {
        for _ in 0..n {
            if self.state.take_arrow(player) == 0 {
                self.indian_attack();
            }
            self.check_alive()?;
        }
        Ok(())
    }

    /// Refill the pile and make everyone pay for their hoard.
    pub(super) fn indian_attack(&mut self) {
        debug!("indian attack");
        self.pending.push_back(Event::IndianAttack);
        self.state.refill_arrows();

        for id in self.state.seating().to_vec() {
            let hoard = self.state.clear_arrows(id);
            self.damage(id, hoard);
        }
    }

    /// Give up to `n` of a player's arrows back to the pile.
    pub(super) fn remove_arrows(&mut self, player: PlayerId, n: u32) {
        self.state.return_arrows(player, n);
    }

    /// Hurt a living player, removing them from the table if they die.
    pub(super) fn damage(&mut self, player: PlayerId, amount: u32) {
        if amount == 0 || !self.state.is_alive(player) {
            return;
        }
        let Some(target) = self.state.player_mut(player) else {
            return;
        };
        target.damage += amount;
        trace!(player, amount, damage = target.damage, "damaged");

        if target.is_dead() {
            debug!(player, "died");
            self.pending.push_back(Event::Died { player });
            self.state.eliminate(player);
        }
    }

    /// Heal one point of damage.
    pub(super) fn heal(&mut self, player: PlayerId) {
        if let Some(target) = self.state.player_mut(player) {
            target.heal_one();
        }
    }

    /// The current player returns their arrows and everyone else takes a hit.
    pub(super) fn gatlings(&mut self) {
        let current = self.state.current();
        self.remove_arrows(current, u32::MAX);

        for id in self.state.seating().to_vec() {
            if id != current {
                self.damage(id, 1);
            }
        }
    }

    /// Players an action must target, or `None` for untargeted actions.
    pub(super) fn targets(&self, action: Action) -> Option<Vec<PlayerId>> {
        match action {
            Action::Beer => Some(self.state.seating().to_vec()),
            Action::Gatlings => None,
            Action::Shoot { distance } => {
                Some(self.state.players_by_distance(usize::from(distance)))
            }
        }
    }

    /// Apply an action's effect once its target, if any, is known.
    pub(super) fn apply_effect(&mut self, action: Action, target: Option<PlayerId>) {
        match (action, target) {
            (Action::Beer, Some(target)) => self.heal(target),
            (Action::Shoot { .. }, Some(target)) => self.damage(target, 1),
            (Action::Gatlings, _) => self.gatlings(),
            (_, None) => {}
        }
    }
}
