//! Console text for events and decisions.
//!
//! Output format:
//! ```text
//! Start
//! Player 0 (Outlaw)
//! Player 1 (Sheriff)
//! Player 1's turn
//! 2× gatling, 2× 1, 1× 2
//! > reroll nothing
//! > Shoot 1
//! > Player 0
//! Dynamites!
//! Indian Attack!
//! Player 0 died
//! ```

use crate::game::{Event, Resume, player_name};

/// Render an event the way the console game prints it.
///
/// `GameStarted` spans one line per seat; every other event is one line.
#[must_use]
pub fn render_event(event: &Event) -> String {
    match event {
        Event::GameStarted { players } => {
            let mut lines = vec!["Start".to_string()];
            lines.extend(
                players
                    .iter()
                    .map(|seat| format!("{} ({})", seat.name, seat.role.name())),
            );
            lines.join("\n")
        }
        Event::TurnStarted { player } => format!("{}'s turn", player_name(*player)),
        Event::DiceRolled { dice } => dice.to_string(),
        Event::Dynamites { .. } => "Dynamites!".to_string(),
        Event::IndianAttack => "Indian Attack!".to_string(),
        Event::Died { player } => format!("{} died", player_name(*player)),
    }
}

/// Render an answer given to the engine.
#[must_use]
pub fn render_decision(decision: &Resume) -> String {
    match decision {
        Resume::Continue => "> continue".to_string(),
        Resume::Dice(dice) if dice.is_empty() => "> reroll nothing".to_string(),
        Resume::Dice(dice) => format!("> reroll {dice}"),
        Resume::Action(action) => format!("> {action}"),
        Resume::Player(player) => format!("> {}", player_name(*player)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, Face, Pool, Role, Seat};

    #[test]
    fn test_render_game_started() {
        let event = Event::GameStarted {
            players: vec![
                Seat {
                    id: 0,
                    name: player_name(0),
                    role: Role::Sheriff,
                },
                Seat {
                    id: 1,
                    name: player_name(1),
                    role: Role::Renegade,
                },
            ],
        };
        assert_eq!(
            render_event(&event),
            "Start\nPlayer 0 (Sheriff)\nPlayer 1 (Renegade)"
        );
    }

    #[test]
    fn test_render_events() {
        assert_eq!(
            render_event(&Event::TurnStarted { player: 2 }),
            "Player 2's turn"
        );
        let dice: Pool = [Face::Arrow, Face::Arrow, Face::Beer].into_iter().collect();
        assert_eq!(
            render_event(&Event::DiceRolled { dice }),
            "2× arrow, 1× beer"
        );
        assert_eq!(render_event(&Event::Dynamites { player: 0 }), "Dynamites!");
        assert_eq!(render_event(&Event::IndianAttack), "Indian Attack!");
        assert_eq!(render_event(&Event::Died { player: 1 }), "Player 1 died");
    }

    #[test]
    fn test_render_decisions() {
        assert_eq!(render_decision(&Resume::Dice(Pool::new())), "> reroll nothing");
        assert_eq!(
            render_decision(&Resume::Action(Action::Shoot { distance: 2 })),
            "> Shoot 2"
        );
        assert_eq!(render_decision(&Resume::Player(3)), "> Player 3");
    }
}
