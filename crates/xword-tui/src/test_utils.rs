//! Rendering helpers for widget and frame tests

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use xword_app::storage::MemoryStore;
use xword_app::{AppState, Catalog, Message, Settings, TimerService};

/// Wide enough for the clue lists beside the grid
const DEFAULT_SIZE: (u16, u16) = (100, 30);

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(DEFAULT_SIZE.0, DEFAULT_SIZE.1)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Screen text, one line per row
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// AppState over the bundled catalog with an in-memory store
pub fn create_test_state() -> AppState {
    AppState::new(
        Catalog::bundled(),
        Settings::default(),
        TimerService::new(Some(Box::new(MemoryStore::new()))),
    )
}

/// AppState with `id` selected and its follow-up messages applied
pub fn create_loaded_state(id: &str) -> AppState {
    let mut state = create_test_state();
    apply(&mut state, Message::SelectPuzzle { id: id.into() });
    state
}

/// Run a message and its follow-ups, discarding timer actions
pub fn apply(state: &mut AppState, msg: Message) {
    let mut next = Some(msg);
    while let Some(msg) = next {
        next = xword_app::handler::update(state, msg).message;
    }
}
