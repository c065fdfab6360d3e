//! Text front end: render the table, read single-letter commands, loop
//! until the game ends or the user quits.
//!
//! The loop only talks to the engine through its public operations. It is
//! generic over its input and output so tests can script a session.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::controllers::Controller;
use crate::core::{Action, GameState, PlayerId, SEAT_COUNT};
use crate::rules::{GameEngine, GameResult};

const RULE_HEAVY: &str = "==================================================";
const RULE_LIGHT: &str = "--------------------------------------------------";

/// Who sits in a seat.
pub enum Seat {
    /// Reads commands from the session input.
    Human,
    /// An automated controller.
    Auto(Box<dyn Controller>),
}

impl Seat {
    fn describe(&self) -> &str {
        match self {
            Seat::Human => "human",
            Seat::Auto(controller) => controller.name(),
        }
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The game reached a terminal state.
    Finished(GameResult),
    /// A human entered `q`.
    Quit,
    /// Input ran out, or an automated seat stopped choosing.
    Aborted,
}

/// Print the table: turn, who is active and who has priority, life totals,
/// and the stack top first.
pub fn render_state(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE_HEAVY}")?;
    writeln!(out, "Turn {}", state.turn)?;
    writeln!(
        out,
        "Active Player: {} | Priority: {}",
        state.active_player, state.priority_player
    )?;
    writeln!(out, "{RULE_LIGHT}")?;
    for (player, ps) in state.players.iter() {
        writeln!(out, "{player} Life: {}", ps.life)?;
    }
    writeln!(out, "{RULE_LIGHT}")?;

    if state.stack.is_empty() {
        writeln!(out, "Stack: (empty)")?;
    } else {
        writeln!(out, "Stack (top first):")?;
        for line in state.stack.describe() {
            writeln!(out, "  - {line}")?;
        }
    }

    writeln!(out, "{RULE_HEAVY}")
}

/// Print the command menu for the priority holder.
pub fn render_actions(out: &mut impl Write, engine: &GameEngine) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}'s turn to act:", engine.priority_player())?;
    for action in engine.legal_actions() {
        match action.spell() {
            Some(spell) => writeln!(
                out,
                "  [{}] {} ({} damage)",
                action.key(),
                action.label(),
                spell.damage
            )?,
            None => writeln!(out, "  [{}] {} priority", action.key(), action.label())?,
        }
    }
    writeln!(out, "  [q] Quit game")
}

/// An interactive game bound to an input and an output.
pub struct TextGame<R, W> {
    engine: GameEngine,
    seats: [Seat; SEAT_COUNT],
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextGame<R, W> {
    #[must_use]
    pub fn new(engine: GameEngine, seats: [Seat; SEAT_COUNT], input: R, output: W) -> Self {
        Self {
            engine,
            seats,
            input,
            output,
        }
    }

    /// The engine, for inspecting the final state.
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run until the game ends, the user quits, or input runs out.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the input or output.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        info!(
            p0 = self.seats[0].describe(),
            p1 = self.seats[1].describe(),
            life = self.engine.state().life(PlayerId::new(0)),
            "session started"
        );

        while !self.engine.is_over() {
            render_state(&mut self.output, self.engine.state())?;

            let player = self.engine.priority_player();
            let action = match &mut self.seats[player.index()] {
                Seat::Human => {
                    render_actions(&mut self.output, &self.engine)?;
                    match self.prompt()? {
                        Prompt::Action(action) => action,
                        Prompt::Quit => {
                            writeln!(self.output, "Game quit by user.")?;
                            return Ok(SessionOutcome::Quit);
                        }
                        Prompt::Eof => {
                            writeln!(self.output, "\nGame aborted.")?;
                            return Ok(SessionOutcome::Aborted);
                        }
                    }
                }
                Seat::Auto(controller) => match controller.choose_action(&self.engine, player) {
                    Some(action) => action,
                    None => {
                        writeln!(self.output, "\n{player} has no action to take. Game aborted.")?;
                        return Ok(SessionOutcome::Aborted);
                    }
                },
            };

            writeln!(self.output, "{player} -> {}", action.label())?;
            self.engine.apply(action);
        }

        render_state(&mut self.output, self.engine.state())?;
        let result = self.engine.result().unwrap_or(GameResult::Draw);
        match result {
            GameResult::Winner(winner) => {
                writeln!(self.output, "\n*** GAME OVER: Player {} wins! ***\n", winner.0)?
            }
            GameResult::Draw => writeln!(self.output, "\n*** GAME OVER: Draw! ***\n")?,
        }
        info!(?result, turn = self.engine.state().turn, "session finished");
        Ok(SessionOutcome::Finished(result))
    }

    /// Read lines until one parses as an action or `q`, re-prompting on
    /// anything else.
    fn prompt(&mut self) -> io::Result<Prompt> {
        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Prompt::Eof);
            }

            let token = line.trim();
            if token.eq_ignore_ascii_case("q") {
                return Ok(Prompt::Quit);
            }
            match Action::from_input(token) {
                Some(action) => return Ok(Prompt::Action(action)),
                None => writeln!(self.output, "Invalid input '{token}'. Use: a, b, p, or q")?,
            }
        }
    }
}

enum Prompt {
    Action(Action),
    Quit,
    Eof,
}
