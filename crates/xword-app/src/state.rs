//! Application state (Model in TEA pattern)

use xword_core::prelude::*;
use xword_core::format_elapsed;

use crate::catalog::{Catalog, PuzzleDescriptor};
use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::grid::{GridView, GridWidget};
use crate::session::SessionState;
use crate::timer::TimerService;

/// Current UI mode/screen
///
/// The puzzle menu is not a mode of its own: it follows
/// [`SessionState::menu_open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Grid has focus
    #[default]
    Normal,

    /// Modal confirmation (reset); only dialog keys are handled
    ConfirmDialog,

    /// Completion notification awaiting dismissal
    Notification,
}

/// Whether the main loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub settings: Settings,

    /// Active puzzle session; `None` until the first puzzle is selected
    pub session: Option<SessionState>,

    pub timer: TimerService,

    /// Grid for the active puzzle; `None` until mounted
    pub grid: Option<Box<dyn GridWidget>>,

    pub ui_mode: UiMode,
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Text of the completion notification while shown
    pub notification: Option<String>,

    /// Highlighted entry in the puzzle menu
    pub menu_index: usize,

    /// Identifies the current tick schedule; bumped whenever it is replaced
    pub timer_generation: u64,

    pub phase: AppPhase,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: Settings, timer: TimerService) -> Self {
        Self {
            catalog,
            settings,
            session: None,
            timer,
            grid: None,
            ui_mode: UiMode::Normal,
            confirm_dialog_state: None,
            notification: None,
            menu_index: 0,
            timer_generation: 0,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Loaded session, or [`Error::SessionNotLoaded`]
    pub fn session(&self) -> Result<&SessionState> {
        self.session.as_ref().ok_or(Error::SessionNotLoaded)
    }

    pub fn session_mut(&mut self) -> Result<&mut SessionState> {
        self.session.as_mut().ok_or(Error::SessionNotLoaded)
    }

    pub fn is_menu_open(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.menu_open)
    }

    /// Catalog entry of the active puzzle
    pub fn active_puzzle(&self) -> Option<&PuzzleDescriptor> {
        let session = self.session.as_ref()?;
        self.catalog.get(&session.active_puzzle_id).ok()
    }

    pub fn active_puzzle_label(&self) -> Option<&str> {
        self.active_puzzle().map(|p| p.label.as_str())
    }

    /// Formatted solve time of the active puzzle
    pub fn elapsed_display(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| format_elapsed(s.elapsed_seconds))
    }

    pub fn grid_view(&self) -> Option<GridView> {
        self.grid.as_ref().map(|grid| grid.view())
    }

    /// Puzzle to open at startup: the configured one when it exists,
    /// otherwise the head of the catalog.
    pub fn initial_puzzle_id(&self) -> Option<String> {
        if let Some(id) = &self.settings.behavior.start_puzzle {
            if self.catalog.get(id).is_ok() {
                return Some(id.clone());
            }
            warn!("Configured start puzzle '{}' is not in the catalog", id);
        }
        self.catalog.first().map(|p| p.id.clone())
    }

    /// Start a new tick schedule, invalidating the previous one
    pub fn next_timer_generation(&mut self) -> u64 {
        self.timer_generation += 1;
        self.timer_generation
    }
}
