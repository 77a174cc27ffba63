//! Puzzle session state
//!
//! A [`SessionState`] exists once a puzzle has been selected. Only the
//! handlers in `handler::session` mutate it, always through the transition
//! methods below.

use std::sync::Arc;

use xword_core::{Direction, PuzzleData};

use crate::catalog::PuzzleDescriptor;

/// Whether the solve timer is counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Running,
    Stopped,
}

/// State of the active puzzle
#[derive(Debug, Clone)]
pub struct SessionState {
    pub active_puzzle_id: String,
    pub active_puzzle_data: Arc<PuzzleData>,
    /// Text of the selected clue, e.g. `"4. Single row of source code"`
    pub current_clue: String,
    pub elapsed_seconds: u64,
    pub run_status: RunStatus,
    pub menu_open: bool,
}

impl SessionState {
    /// Fresh session for `puzzle`, resuming from `elapsed_seconds`
    pub fn start(puzzle: &PuzzleDescriptor, elapsed_seconds: u64) -> Self {
        Self {
            active_puzzle_id: puzzle.id.clone(),
            active_puzzle_data: Arc::clone(&puzzle.data),
            current_clue: String::new(),
            elapsed_seconds,
            run_status: RunStatus::Running,
            menu_open: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_status == RunStatus::Running
    }

    /// Advance the timer by one second.
    ///
    /// Returns the new elapsed value, or `None` when stopped.
    pub fn tick(&mut self) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        self.elapsed_seconds += 1;
        Some(self.elapsed_seconds)
    }

    /// Show the clue for `(direction, number)`, or clear the display on a miss
    pub fn select_clue(&mut self, direction: Direction, number: u32) {
        self.current_clue = match self.active_puzzle_data.clue(direction, number) {
            Some(entry) => format!("{}. {}", number, entry.clue),
            None => String::new(),
        };
    }

    pub fn stop(&mut self) {
        self.run_status = RunStatus::Stopped;
    }

    /// Back to zero and counting
    pub fn restart(&mut self) {
        self.elapsed_seconds = 0;
        self.run_status = RunStatus::Running;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn cpu_session() -> SessionState {
        let catalog = Catalog::bundled();
        SessionState::start(catalog.get("cpu").unwrap(), 0)
    }

    #[test]
    fn test_start_is_running_with_no_clue() {
        let session = cpu_session();
        assert_eq!(session.active_puzzle_id, "cpu");
        assert_eq!(session.run_status, RunStatus::Running);
        assert!(session.current_clue.is_empty());
        assert!(!session.menu_open);
    }

    #[test]
    fn test_tick_increments_by_one_while_running() {
        let mut session = cpu_session();
        for expected in 1..=5 {
            assert_eq!(session.tick(), Some(expected));
        }
        assert_eq!(session.elapsed_seconds, 5);
    }

    #[test]
    fn test_tick_is_inert_when_stopped() {
        let mut session = cpu_session();
        session.tick();
        session.stop();
        for _ in 0..10 {
            assert_eq!(session.tick(), None);
        }
        assert_eq!(session.elapsed_seconds, 1);
    }

    #[test]
    fn test_select_clue_formats_number_and_text() {
        let mut session = cpu_session();
        session.select_clue(Direction::Across, 4);
        assert_eq!(session.current_clue, "4. Single row of source code");
    }

    #[test]
    fn test_select_clue_miss_clears() {
        let mut session = cpu_session();
        session.select_clue(Direction::Down, 1);
        assert!(!session.current_clue.is_empty());

        session.select_clue(Direction::Down, 99);
        assert!(session.current_clue.is_empty());
    }

    #[test]
    fn test_restart_resets_and_resumes() {
        let mut session = cpu_session();
        session.tick();
        session.stop();
        session.restart();
        assert_eq!(session.elapsed_seconds, 0);
        assert!(session.is_running());
    }

    #[test]
    fn test_close_menu_is_idempotent() {
        let mut session = cpu_session();
        session.toggle_menu();
        assert!(session.menu_open);

        session.close_menu();
        assert!(!session.menu_open);
        session.close_menu();
        assert!(!session.menu_open);
    }
}
