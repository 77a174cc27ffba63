//! Crossword grid widget
//!
//! The session controller talks to the grid only through [`GridWidget`]:
//! commands go in (`reset`, `fill_all_answers`, `check`, `handle_input`) and
//! [`GridEvent`]s come back out. Rendering reads the declarative [`GridView`]
//! projection, never the grid internals.
//!
//! [`CrosswordGrid`] is the terminal implementation: it lays answers out from
//! the puzzle document, owns the cursor, and decides correctness.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use xword_core::{Direction, PuzzleData, MAX_GRID_SIZE};

/// Notifications raised by the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// The cursor moved into a different clue
    ClueSelected { direction: Direction, number: u32 },
    /// A cell's entry changed (`None` = cleared)
    CellChanged {
        row: usize,
        col: usize,
        guess: Option<char>,
    },
    /// An edit left every cell filled
    CrosswordComplete { is_correct: bool },
}

/// Arrow-key movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// Editing and navigation input for the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridInput {
    Letter(char),
    /// Clear the current cell, or step back and clear when already empty
    Backspace,
    /// Clear the current cell in place
    Delete,
    Move(Arrow),
    NextClue,
    PreviousClue,
    ToggleDirection,
    SelectClue { direction: Direction, number: u32 },
}

/// Visual status of a cell after a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Neutral,
    Correct,
    Incorrect,
}

/// How a cell relates to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellFocus {
    #[default]
    None,
    /// Part of the active clue
    Word,
    Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Block,
    Letter {
        guess: Option<char>,
        number: Option<u32>,
        circled: bool,
        status: CellStatus,
        focus: CellFocus,
    },
}

/// Render-ready projection of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Vec<CellView>>,
    pub direction: Direction,
    pub active_clue: Option<(Direction, u32)>,
}

/// Entered letters, one string per row with `.` for empty cells and blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GridSnapshot {
    pub rows: Vec<String>,
}

impl GridSnapshot {
    pub fn to_json(&self) -> String {
        // A Vec<String> always serializes
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

/// Capabilities the session controller needs from a grid
pub trait GridWidget: std::fmt::Debug {
    /// Clear every entry and check mark
    fn reset(&mut self);

    /// Enter the answer in every cell
    fn fill_all_answers(&mut self) -> Vec<GridEvent>;

    /// Mark the current entries so the view shows them as correct/incorrect
    fn check(&mut self);

    fn handle_input(&mut self, input: GridInput) -> Vec<GridEvent>;

    fn view(&self) -> GridView;

    fn snapshot(&self) -> GridSnapshot;
}

// ─────────────────────────────────────────────────────────────────────────────
// CrosswordGrid
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Cell {
    answer: char,
    guess: Option<char>,
    number: Option<u32>,
    circled: bool,
    checked: bool,
    across: Option<u32>,
    down: Option<u32>,
}

impl Cell {
    fn new(answer: char) -> Self {
        Self {
            answer,
            guess: None,
            number: None,
            circled: false,
            checked: false,
            across: None,
            down: None,
        }
    }

    fn clue(&self, direction: Direction) -> Option<u32> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    fn status(&self) -> CellStatus {
        match self.guess {
            Some(guess) if self.checked => {
                if guess == self.answer {
                    CellStatus::Correct
                } else {
                    CellStatus::Incorrect
                }
            }
            _ => CellStatus::Neutral,
        }
    }
}

type Pos = (usize, usize);

#[derive(Debug, Clone)]
pub struct CrosswordGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<Cell>>>,
    words: HashMap<(Direction, u32), Vec<Pos>>,
    clue_order: Vec<(Direction, u32)>,
    cursor: Pos,
    direction: Direction,
    reported_clue: Option<(Direction, u32)>,
}

impl CrosswordGrid {
    /// Lay out an empty grid for `data`.
    ///
    /// Parsed puzzles are already bounded. Letters of an unvalidated
    /// document that fall past [`MAX_GRID_SIZE`] are dropped.
    pub fn new(data: &PuzzleData) -> Self {
        let (rows, cols) = data.dimensions();
        let (rows, cols) = (rows.min(MAX_GRID_SIZE), cols.min(MAX_GRID_SIZE));
        let mut cells: Vec<Vec<Option<Cell>>> = vec![vec![None; cols]; rows];
        let mut words = HashMap::new();
        let mut clue_order = Vec::new();

        for (direction, number, entry) in data.entries() {
            let (dr, dc) = direction.step();
            let mut positions = Vec::new();

            for (i, answer) in entry.answer.chars().enumerate() {
                let pos = (entry.row.saturating_add(dr * i), entry.col.saturating_add(dc * i));
                let Some(slot) = cells.get_mut(pos.0).and_then(|r| r.get_mut(pos.1)) else {
                    break;
                };
                let cell = slot.get_or_insert_with(|| Cell::new(answer));
                match direction {
                    Direction::Across => cell.across = Some(number),
                    Direction::Down => cell.down = Some(number),
                }
                if i == 0 && cell.number.is_none() {
                    cell.number = Some(number);
                }
                positions.push(pos);
            }

            words.insert((direction, number), positions);
            clue_order.push((direction, number));
        }

        for &(row, col) in &data.circles {
            if let Some(Some(cell)) = cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                cell.circled = true;
            }
        }

        let (cursor, direction) = clue_order
            .first()
            .and_then(|key| words.get(key).and_then(|p| p.first()).map(|p| (*p, key.0)))
            .unwrap_or(((0, 0), Direction::Across));

        Self {
            rows,
            cols,
            cells,
            words,
            clue_order,
            cursor,
            direction,
            reported_clue: None,
        }
    }

    /// Restore saved entries. Letters that land on blocks or outside the grid
    /// are ignored.
    pub fn with_snapshot(mut self, snapshot: &GridSnapshot) -> Self {
        for (row, line) in snapshot.rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                if let Some(cell) = self.cell_mut((row, col)) {
                    cell.guess = Some(ch);
                }
            }
        }
        self
    }

    /// The clue under the cursor in the current direction
    pub fn active_clue(&self) -> Option<(Direction, u32)> {
        let cell = self.cell(self.cursor)?;
        cell.clue(self.direction).map(|n| (self.direction, n))
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn is_filled(&self) -> bool {
        self.letter_cells().all(|cell| cell.guess.is_some())
    }

    pub fn is_correct(&self) -> bool {
        self.letter_cells().all(|cell| cell.guess == Some(cell.answer))
    }

    fn cell(&self, (row, col): Pos) -> Option<&Cell> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    fn cell_mut(&mut self, (row, col): Pos) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)?.as_mut()
    }

    fn letter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten().flatten()
    }

    fn letter_cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten().flatten()
    }

    fn set_guess(&mut self, pos: Pos, guess: Option<char>) -> Option<GridEvent> {
        let cell = self.cell_mut(pos)?;
        if cell.guess == guess {
            return None;
        }
        cell.guess = guess;
        cell.checked = false;
        Some(GridEvent::CellChanged {
            row: pos.0,
            col: pos.1,
            guess,
        })
    }

    /// Step the cursor within the active word; stops at either end
    fn step_in_word(&mut self, forward: bool) {
        let Some(word) = self.active_clue().and_then(|key| self.words.get(&key)) else {
            return;
        };
        let Some(index) = word.iter().position(|p| *p == self.cursor) else {
            return;
        };
        let next = if forward {
            word.get(index + 1)
        } else {
            index.checked_sub(1).and_then(|i| word.get(i))
        };
        if let Some(next) = next.copied() {
            self.cursor = next;
        }
    }

    /// Move to the next letter cell in the arrow's direction, skipping blocks
    fn move_cursor(&mut self, arrow: Arrow) {
        let (dr, dc, preferred): (isize, isize, Direction) = match arrow {
            Arrow::Up => (-1, 0, Direction::Down),
            Arrow::Down => (1, 0, Direction::Down),
            Arrow::Left => (0, -1, Direction::Across),
            Arrow::Right => (0, 1, Direction::Across),
        };

        let (mut row, mut col) = (self.cursor.0 as isize, self.cursor.1 as isize);
        loop {
            row += dr;
            col += dc;
            if row < 0 || col < 0 || row >= self.rows as isize || col >= self.cols as isize {
                break;
            }
            let pos = (row as usize, col as usize);
            if self.cell(pos).is_some() {
                self.cursor = pos;
                break;
            }
        }

        self.prefer_direction(preferred);
    }

    fn prefer_direction(&mut self, direction: Direction) {
        let Some(cell) = self.cell(self.cursor) else {
            return;
        };
        if cell.clue(direction).is_some() {
            self.direction = direction;
        } else if cell.clue(direction.toggled()).is_some() {
            self.direction = direction.toggled();
        }
    }

    fn jump_clue(&mut self, forward: bool) {
        if self.clue_order.is_empty() {
            return;
        }
        let len = self.clue_order.len();
        let next = match self
            .active_clue()
            .and_then(|key| self.clue_order.iter().position(|k| *k == key))
        {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        let (direction, number) = self.clue_order[next];
        self.focus_clue(direction, number);
    }

    fn focus_clue(&mut self, direction: Direction, number: u32) {
        if let Some(start) = self
            .words
            .get(&(direction, number))
            .and_then(|word| word.first())
        {
            self.cursor = *start;
            self.direction = direction;
        }
    }
}

impl GridWidget for CrosswordGrid {
    fn reset(&mut self) {
        for cell in self.letter_cells_mut() {
            cell.guess = None;
            cell.checked = false;
        }
        if let Some((direction, number)) = self.clue_order.first().copied() {
            self.focus_clue(direction, number);
        }
        self.reported_clue = None;
    }

    fn fill_all_answers(&mut self) -> Vec<GridEvent> {
        let mut changed = false;
        for cell in self.letter_cells_mut() {
            if cell.guess != Some(cell.answer) {
                cell.guess = Some(cell.answer);
                changed = true;
            }
            cell.checked = false;
        }

        if changed {
            vec![GridEvent::CrosswordComplete { is_correct: true }]
        } else {
            Vec::new()
        }
    }

    fn check(&mut self) {
        for cell in self.letter_cells_mut() {
            cell.checked = cell.guess.is_some();
        }
    }

    fn handle_input(&mut self, input: GridInput) -> Vec<GridEvent> {
        let mut events = Vec::new();

        match input {
            GridInput::Letter(ch) => {
                let letter = ch.to_uppercase().next().unwrap_or(ch);
                events.extend(self.set_guess(self.cursor, Some(letter)));
                self.step_in_word(true);
            }
            GridInput::Backspace => match self.set_guess(self.cursor, None) {
                Some(event) => events.push(event),
                None => {
                    self.step_in_word(false);
                    events.extend(self.set_guess(self.cursor, None));
                }
            },
            GridInput::Delete => events.extend(self.set_guess(self.cursor, None)),
            GridInput::Move(arrow) => self.move_cursor(arrow),
            GridInput::NextClue => self.jump_clue(true),
            GridInput::PreviousClue => self.jump_clue(false),
            GridInput::ToggleDirection => {
                let other = self.direction.toggled();
                if self.cell(self.cursor).is_some_and(|c| c.clue(other).is_some()) {
                    self.direction = other;
                }
            }
            GridInput::SelectClue { direction, number } => self.focus_clue(direction, number),
        }

        if let Some((direction, number)) = self.active_clue() {
            if self.reported_clue != Some((direction, number)) {
                self.reported_clue = Some((direction, number));
                events.push(GridEvent::ClueSelected { direction, number });
            }
        }

        let edited = events
            .iter()
            .any(|e| matches!(e, GridEvent::CellChanged { .. }));
        if edited && self.is_filled() {
            events.push(GridEvent::CrosswordComplete {
                is_correct: self.is_correct(),
            });
        }

        events
    }

    fn view(&self) -> GridView {
        let active_clue = self.active_clue();
        let word: &[Pos] = active_clue
            .and_then(|key| self.words.get(&key))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        None => CellView::Block,
                        Some(cell) => {
                            let focus = if (row, col) == self.cursor {
                                CellFocus::Cursor
                            } else if word.contains(&(row, col)) {
                                CellFocus::Word
                            } else {
                                CellFocus::None
                            };
                            CellView::Letter {
                                guess: cell.guess,
                                number: cell.number,
                                circled: cell.circled,
                                status: cell.status(),
                                focus,
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        GridView {
            rows: self.rows,
            cols: self.cols,
            cells,
            direction: self.direction,
            active_clue,
        }
    }

    fn snapshot(&self) -> GridSnapshot {
        let rows = self
            .cells
            .iter()
            .map(|line| {
                line.iter()
                    .map(|cell| cell.as_ref().and_then(|c| c.guess).unwrap_or('.'))
                    .collect()
            })
            .collect();
        GridSnapshot { rows }
    }
}
