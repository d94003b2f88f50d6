//! Game driver: the phase machine around a [`World`].
//!
//! The driver feeds at most one key per [`Game::step`]. It owns the rules the
//! world leaves to its caller: when to stop dispatching moves, which keys quit,
//! and when buffered output is flushed.

use std::io;

use crossterm::event::KeyEvent;
use log::{debug, info};

use crate::core::{MoveOutcome, Terminal, World};
use crate::input::{handle_key_event, is_navigation_key, should_quit};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing drawn yet.
    Init,
    Playing,
    /// Result shown; waiting for a key to exit.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct Game<T> {
    world: World<T>,
    phase: Phase,
}

impl<T: Terminal> Game<T> {
    pub fn new(world: World<T>) -> Self {
        Self {
            world,
            phase: Phase::Init,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn world(&self) -> &World<T> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World<T> {
        &mut self.world
    }

    /// Advance one loop iteration with the key pressed since the last one.
    pub fn step(&mut self, key: Option<KeyEvent>) -> io::Result<Control> {
        match self.phase {
            Phase::Init => {
                self.world.render()?;
                self.set_phase(Phase::Playing);
                Ok(Control::Continue)
            }
            Phase::Playing => {
                let Some(key) = key else {
                    return Ok(Control::Continue);
                };
                if should_quit(key) {
                    info!("player quit");
                    return Ok(Control::Exit);
                }
                if let Some(action) = handle_key_event(key) {
                    self.apply_action(action);
                    self.world.terminal_mut().do_refresh()?;
                }
                if self.world.is_game_over() {
                    self.set_phase(Phase::GameOver);
                }
                Ok(Control::Continue)
            }
            Phase::GameOver => match key {
                Some(key) if !is_navigation_key(key) => Ok(Control::Exit),
                _ => Ok(Control::Continue),
            },
        }
    }

    /// Dispatch one action to the world. Returns the outcome of a commit.
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        debug!("action {}", action.as_str());
        match action {
            GameAction::Select(direction) => {
                self.world.move_selection(direction);
                None
            }
            GameAction::Move => Some(self.world.commit_move()),
            GameAction::ToggleWumpus => {
                self.world.toggle_wumpus();
                None
            }
            GameAction::ToggleUnknown => {
                self.world.toggle_unknown();
                None
            }
        }
    }

    /// Redraw everything, e.g. after the terminal was resized.
    pub fn redraw(&mut self) -> io::Result<()> {
        self.world.render()
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}
