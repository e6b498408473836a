use std::io;

use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{self, Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Terminal,
};

use crate::board::{cell_rect, Board, Cell};

/// Everything the renderer gets to see for one tick. Owned, so nothing in the
/// simulation is borrowed past the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Head first.
    pub body: Vec<Cell>,
    pub food: Cell,
    /// Cell the tail just left, to be painted over with background.
    pub erase: Option<Cell>,
    /// Wipe everything before drawing this snapshot.
    pub clear: bool,
}

pub trait Render {
    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paint {
    Head,
    Body,
    Food,
}

/// Persistent picture of the board, updated incrementally from snapshots.
#[derive(Clone, Debug)]
pub struct Canvas {
    board: Board,
    cells: Vec<Option<Paint>>,
    length: usize,
}

impl Canvas {
    pub fn new(board: Board) -> Self {
        Canvas {
            board,
            cells: vec![None; board.cell_count()],
            length: 0,
        }
    }

    pub fn apply(&mut self, snapshot: &Snapshot) {
        if snapshot.clear {
            self.cells.fill(None);
        }
        if let Some(cell) = snapshot.erase {
            self.set(cell, None);
        }
        for (i, cell) in snapshot.body.iter().enumerate() {
            let paint = if i == 0 { Paint::Head } else { Paint::Body };
            self.set(*cell, Some(paint));
        }
        self.set(snapshot.food, Some(Paint::Food));
        self.length = snapshot.body.len();
    }

    /// Screen size the board needs, not counting any surrounding block.
    pub fn required_size(board: Board) -> (u16, u16) {
        (board.width_cells.saturating_mul(board.cell_size), board.height_cells)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.board
            .contains(cell)
            .then(|| cell.row as usize * self.board.width_cells as usize + cell.col as usize)
    }

    fn set(&mut self, cell: Cell, paint: Option<Paint>) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = paint;
        }
    }

    fn get(&self, cell: Cell) -> Option<Paint> {
        self.index(cell).and_then(|index| self.cells[index])
    }
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for cell in self.board.cells() {
            let Some(paint) = self.get(cell) else {
                continue;
            };
            let rect = cell_rect(cell, self.board.cell_size, area).intersection(area);
            if rect.is_empty() {
                continue;
            }
            let color = match paint {
                Paint::Head => Color::Yellow,
                Paint::Body => Color::Green,
                Paint::Food => Color::LightRed,
            };
            buf.set_style(rect, Style::default().bg(color));
        }
    }
}

/// Full screen size the terminal renderer needs: the board plus its border and
/// the header.
pub fn required_terminal_size(board: Board) -> (u16, u16) {
    let (width, height) = Canvas::required_size(board);
    (width.saturating_add(2), height.saturating_add(2 + 3))
}

/// Draws the board into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, board: Board) -> Self {
        TerminalRenderer {
            terminal,
            canvas: Canvas::new(board),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Render for TerminalRenderer<B> {
    fn draw(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if snapshot.clear {
            self.terminal.clear()?;
        }
        self.canvas.apply(snapshot);

        let canvas = &self.canvas;
        let (board_width, board_height) = Canvas::required_size(canvas.board);
        self.terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(layout::Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Title + length
                    Constraint::Length(board_height.saturating_add(2)), // Board
                    Constraint::Min(0),
                ])
                .split(frame.area());

            frame.render_widget(
                Paragraph::new(format!(
                    "SNEK    Length: {}    Arrows/WASD to steer, q to quit",
                    canvas.length
                ))
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
                layout[0],
            );

            let board_area = Rect {
                width: board_width.saturating_add(2).min(layout[1].width),
                ..layout[1]
            };
            let block = Block::default().borders(Borders::ALL);
            let inner_area = block.inner(board_area);
            frame.render_widget(block, board_area);
            frame.render_widget(canvas, inner_area);
        })?;
        Ok(())
    }
}
