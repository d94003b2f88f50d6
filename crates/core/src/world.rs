//! World - the room grid, the player's cursors and the box renderer.
//!
//! The world owns its [`Terminal`] and draws incrementally: every mutating
//! call re-renders only the rooms it touched. Only [`World::render`] asks the
//! terminal to refresh; drivers flush after dispatching each action.
//!
//! The game-over latch is reported through [`World::is_game_over`] but never
//! consulted here. Stopping input after the game ends is the driver's job.

use std::io;

use log::{debug, info, trace};

use crate::glyphs::{corner_glyph, line_glyph, DrawStyle, LineStyle, Message, Symbol};
use crate::grid::{Grid, LoadError, RawData};
use crate::kernel::{Corner, Kernel};
use crate::maps;
use crate::terminal::Terminal;
use crate::types::{
    Direction, Pos, RoomFlags, MESSAGE_WIDTH, ROOM_COL_STRIDE, ROOM_ROW_STRIDE,
};

/// Result of committing a move, matching the message that was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Selection was not exactly one step away; nothing moved.
    Rejected,
    /// Moved into a quiet room.
    Clear,
    /// Moved next to (but not onto) a wumpus.
    NearWumpus,
    Lost,
    Won,
}

impl MoveOutcome {
    pub fn ends_game(&self) -> bool {
        matches!(self, MoveOutcome::Lost | MoveOutcome::Won)
    }
}

pub struct World<T> {
    terminal: T,
    grid: Grid,
    current: Pos,
    selected: Pos,
    game_over: bool,
    /// Last message shown on each status line, repainted by `render`.
    status: [Option<Message>; 2],
}

impl<T: Terminal> World<T> {
    /// Create a world on the built-in map.
    pub fn new(terminal: T) -> Self {
        match Self::with_map(terminal, &maps::DEFAULT) {
            Ok(world) => world,
            Err(err) => unreachable!("built-in map rejected: {err}"),
        }
    }

    pub fn with_map(terminal: T, raw: &RawData<'_>) -> Result<Self, LoadError> {
        let grid = Grid::load(raw)?;
        let start = raw.start();
        debug!(
            "world loaded: {}x{} start=({}, {})",
            grid.width(),
            grid.height(),
            start.x,
            start.y
        );
        Ok(Self {
            terminal,
            grid,
            current: start,
            selected: start,
            game_over: false,
            status: [None; 2],
        })
    }

    /// Replace the map and reset both cursors to its start.
    ///
    /// On error the world is left exactly as it was.
    pub fn load(&mut self, raw: &RawData<'_>) -> Result<(), LoadError> {
        let grid = Grid::load(raw)?;
        let start = raw.start();
        debug!(
            "world reloaded: {}x{} start=({}, {})",
            grid.width(),
            grid.height(),
            start.x,
            start.y
        );
        self.grid = grid;
        self.current = start;
        self.selected = start;
        self.game_over = false;
        self.status = [None; 2];
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The room the player occupies.
    pub fn current(&self) -> Pos {
        self.current
    }

    /// The room highlighted for the next move.
    pub fn selected(&self) -> Pos {
        self.selected
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Draw every valid room, the selection last, then the status lines, then
    /// refresh.
    pub fn render(&mut self) -> io::Result<()> {
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                if self.grid.is_valid(x, y) {
                    self.render_room(Pos::new(x, y));
                }
            }
        }

        // Again, so no neighbour's single border overdraws the double one.
        self.render_room(self.selected);

        for (line, message) in self.status.into_iter().enumerate() {
            if let Some(message) = message {
                self.display_message(message, line as u16);
            }
        }

        self.terminal.do_refresh()
    }

    /// Draw one room's box. Coordinates off the grid are ignored.
    pub fn render_room(&mut self, pos: Pos) {
        if !self.grid.contains(pos) {
            return;
        }

        let kernel = Kernel::around(&self.grid, pos);
        let style = if pos == self.selected {
            DrawStyle::Double
        } else {
            DrawStyle::Single
        };
        let col = (pos.x as u16).saturating_mul(ROOM_COL_STRIDE);
        let row = (pos.y as u16).saturating_mul(ROOM_ROW_STRIDE);
        let horizontal = line_glyph(LineStyle::Horizontal, style);

        let top = [
            corner_glyph(kernel.corner(Corner::TopLeft), style),
            horizontal,
            corner_glyph(kernel.corner(Corner::TopRight), style),
        ]
        .concat();
        let middle = [
            line_glyph(LineStyle::LeftVert, style),
            self.room_content(pos),
            line_glyph(LineStyle::RightVert, style),
        ]
        .concat();
        let bottom = [
            corner_glyph(kernel.corner(Corner::BottomLeft), style),
            horizontal,
            corner_glyph(kernel.corner(Corner::BottomRight), style),
        ]
        .concat();

        self.terminal.set_cursor_pos(col, row);
        self.terminal.output(&top, false);
        self.terminal.set_cursor_pos(col, row + 1);
        self.terminal.output(&middle, false);
        self.terminal.set_cursor_pos(col, row + 2);
        self.terminal.output(&bottom, false);
    }

    /// Move the selection one room, if that room exists and is valid.
    ///
    /// Returns whether the selection moved.
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let target = self.selected.step(direction);
        if !self.grid.is_valid(target.x, target.y) {
            return false;
        }

        let old = self.selected;
        self.selected = target;
        trace!(
            "selection {} -> ({}, {})",
            direction.as_str(),
            target.x,
            target.y
        );

        self.render_room(old);
        self.render_room(self.selected);
        true
    }

    /// Walk into the selected room if it is exactly one step away.
    pub fn commit_move(&mut self) -> MoveOutcome {
        if self.current.manhattan(self.selected) != 1 {
            self.display_message(Message::BadMove, 0);
            return MoveOutcome::Rejected;
        }

        let old = self.current;
        self.current = self.selected;

        self.render_room(old);
        self.render_room(self.current);

        let outcome = if self.grid.has(self.current, RoomFlags::WUMPUS) {
            self.display_message(Message::Lose, 0);
            self.display_message(Message::Exit, 1);
            self.game_over = true;
            MoveOutcome::Lost
        } else if self.grid.has(self.current, RoomFlags::TREASURE) {
            self.display_message(Message::Win, 0);
            self.display_message(Message::Exit, 1);
            self.game_over = true;
            MoveOutcome::Won
        } else if self.is_near_wumpus() {
            self.display_message(Message::NearWumpus, 0);
            MoveOutcome::NearWumpus
        } else {
            self.display_message(Message::Clear, 0);
            MoveOutcome::Clear
        };

        debug!(
            "moved to ({}, {}): {:?}",
            self.current.x, self.current.y, outcome
        );
        if outcome.ends_game() {
            info!("game over: {:?}", outcome);
        }
        outcome
    }

    pub fn toggle_wumpus(&mut self) {
        self.toggle_mark(RoomFlags::MARK_WUMPUS);
    }

    pub fn toggle_unknown(&mut self) {
        self.toggle_mark(RoomFlags::MARK_UNKNOWN);
    }

    /// Clear the screen and print the raw room values row by row.
    pub fn dump_raw_data(&mut self) {
        self.terminal.clear_screen();
        self.terminal.set_cursor_pos(0, 0);
        for line in self.grid.dump().lines() {
            self.terminal.output(line, true);
        }
    }

    fn toggle_mark(&mut self, mark: RoomFlags) {
        let Some(room) = self.grid.get_mut(self.selected.x, self.selected.y) else {
            return;
        };
        if room.contains(mark) {
            room.remove(mark);
        } else {
            room.remove(RoomFlags::MARKS);
            room.insert(mark);
        }
        self.render_room(self.selected);
    }

    fn room_content(&self, pos: Pos) -> &'static str {
        let room = self.grid.at(pos).unwrap_or_default();
        if pos == self.current {
            Symbol::Face.glyph()
        } else if room.contains(RoomFlags::LOCKED) {
            Symbol::Locked.glyph()
        } else if room.contains(RoomFlags::MARK_WUMPUS) {
            Symbol::Wumpus.glyph()
        } else if room.contains(RoomFlags::MARK_UNKNOWN) {
            Symbol::Unknown.glyph()
        } else {
            " "
        }
    }

    /// Orthogonal neighbours only; a diagonal wumpus stays silent.
    fn is_near_wumpus(&self) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.grid.has(self.current.step(dir), RoomFlags::WUMPUS))
    }

    fn display_message(&mut self, message: Message, line: u16) {
        let row = (self.grid.height() as u16)
            .saturating_mul(ROOM_ROW_STRIDE)
            .saturating_add(1 + line);
        if let Some(slot) = self.status.get_mut(line as usize) {
            *slot = Some(message);
        }
        let text = format!("{:<width$}", message.text(), width = MESSAGE_WIDTH);
        self.terminal.set_cursor_pos(0, row);
        self.terminal.output(&text, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every terminal call for inspection.
    #[derive(Debug, Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Cursor(u16, u16),
        Output(String, bool),
        Clear,
        Refresh,
    }

    impl Terminal for Recorder {
        fn set_cursor_pos(&mut self, col: u16, row: u16) {
            self.ops.push(Op::Cursor(col, row));
        }

        fn output(&mut self, text: &str, newline: bool) {
            self.ops.push(Op::Output(text.to_string(), newline));
        }

        fn clear_screen(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn do_refresh(&mut self) -> io::Result<()> {
            self.ops.push(Op::Refresh);
            Ok(())
        }
    }

    fn world() -> World<Recorder> {
        World::new(Recorder::default())
    }

    fn outputs(world: &World<Recorder>) -> Vec<&str> {
        world
            .terminal()
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Output(text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn render_draws_valid_rooms_then_selection_then_refreshes() {
        let mut w = world();
        w.render().unwrap();

        let ops = &w.terminal().ops;
        let valid_rooms = w.grid().to_raw().iter().filter(|&&r| r & 1 != 0).count();
        let cursor_moves = ops.iter().filter(|op| matches!(op, Op::Cursor(..))).count();
        assert_eq!(cursor_moves, (valid_rooms + 1) * 3);

        assert_eq!(ops.last(), Some(&Op::Refresh));
        // Selection (3, 5) is redrawn last, just before the refresh.
        assert_eq!(ops[ops.len() - 7], Op::Cursor(12, 10));
    }

    #[test]
    fn start_room_shows_face_with_double_border() {
        let mut w = world();
        w.render_room(Pos::new(3, 5));
        let out = outputs(&w);
        assert_eq!(out[1], "║ ʘ ║");
        assert!(out[0].contains("═══"));
    }

    #[test]
    fn render_room_ignores_off_grid_coordinates() {
        let mut w = world();
        w.render_room(Pos::new(-1, 0));
        w.render_room(Pos::new(7, 0));
        assert!(w.terminal().ops.is_empty());
    }

    #[test]
    fn messages_land_below_the_grid() {
        let mut w = world();
        assert_eq!(w.commit_move(), MoveOutcome::Rejected);
        let ops = &w.terminal().ops;
        assert_eq!(ops[0], Op::Cursor(0, 13));
        match &ops[1] {
            Op::Output(text, true) => {
                assert!(text.starts_with(Message::BadMove.text()));
                assert_eq!(text.chars().count(), MESSAGE_WIDTH);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn game_over_writes_exit_prompt_on_second_line() {
        let mut w = world();
        w.move_selection(Direction::Up);
        w.commit_move();
        w.move_selection(Direction::Up);
        w.commit_move();
        w.move_selection(Direction::Up);
        w.commit_move();
        w.move_selection(Direction::Up);
        w.commit_move();
        w.move_selection(Direction::Up);
        w.terminal_mut().ops.clear();

        assert_eq!(w.commit_move(), MoveOutcome::Won);
        assert!(w.is_game_over());
        let ops = &w.terminal().ops;
        assert!(ops.contains(&Op::Cursor(0, 13)));
        assert!(ops.contains(&Op::Cursor(0, 14)));
        assert!(outputs(&w)
            .iter()
            .any(|text| text.starts_with(Message::Exit.text())));
    }

    #[test]
    fn render_repaints_status_lines() {
        let mut w = world();
        w.move_selection(Direction::Up);
        w.move_selection(Direction::Up);
        assert_eq!(w.commit_move(), MoveOutcome::Rejected);
        w.terminal_mut().ops.clear();

        w.render().unwrap();
        let ops = &w.terminal().ops;
        let at = ops.iter().position(|op| *op == Op::Cursor(0, 13)).unwrap();
        match &ops[at + 1] {
            Op::Output(text, true) => assert!(text.starts_with(Message::BadMove.text())),
            other => panic!("unexpected op {other:?}"),
        }
        assert!(!ops.contains(&Op::Cursor(0, 14)));
        assert_eq!(ops.last(), Some(&Op::Refresh));
    }

    #[test]
    fn moves_after_game_over_are_still_applied() {
        let mut w = world();
        for _ in 0..4 {
            w.move_selection(Direction::Up);
            w.commit_move();
        }
        w.move_selection(Direction::Left);
        assert_eq!(w.commit_move(), MoveOutcome::Lost);
        assert!(w.is_game_over());

        w.move_selection(Direction::Down);
        assert_eq!(w.commit_move(), MoveOutcome::NearWumpus);
        assert_eq!(w.current(), Pos::new(2, 2));
        assert!(w.is_game_over());
    }

    #[test]
    fn toggles_redraw_only_the_selection() {
        let mut w = world();
        w.toggle_wumpus();
        let out = outputs(&w);
        assert_eq!(out.len(), 3);
        // The player stands here, so the face still wins over the mark.
        assert_eq!(out[1], "║ ʘ ║");
        assert!(w.grid().has(Pos::new(3, 5), RoomFlags::MARK_WUMPUS));
    }

    #[test]
    fn dump_clears_then_prints_rows() {
        let mut w = world();
        w.dump_raw_data();
        let ops = &w.terminal().ops;
        assert_eq!(ops[0], Op::Clear);
        let out = outputs(&w);
        assert_eq!(out[0], "World data:");
        assert_eq!(out[1], "0,0,1,17,1,0,0");
        assert_eq!(out.len(), 7);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut w = world();
        w.move_selection(Direction::Up);
        let rooms = [1u16; 3];
        let bad = RawData {
            width: 2,
            height: 2,
            start_x: 0,
            start_y: 0,
            rooms: &rooms,
        };
        assert!(w.load(&bad).is_err());
        assert_eq!(w.selected(), Pos::new(3, 4));
        assert_eq!(w.grid().width(), 7);
    }
}
