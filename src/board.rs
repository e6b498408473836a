use ratatui::layout::Rect;

/// Fixed grid geometry shared by everything that needs to know where the edges are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub width_cells: u16,
    pub height_cells: u16,
    /// Terminal columns spanned by one cell. Only the renderer looks at this.
    pub cell_size: u16,
}

impl Board {
    pub fn new(width_cells: u16, height_cells: u16, cell_size: u16) -> Self {
        assert!(
            width_cells > 0 && height_cells > 0,
            "Board must have at least one cell"
        );
        Board {
            width_cells,
            height_cells,
            cell_size,
        }
    }

    pub fn center(&self) -> Cell {
        Cell {
            col: self.width_cells / 2,
            row: self.height_cells / 2,
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width_cells && cell.row < self.height_cells
    }

    pub fn cell_count(&self) -> usize {
        self.width_cells as usize * self.height_cells as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height_cells)
            .flat_map(move |row| (0..self.width_cells).map(move |col| Cell { col, row }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: u16,
    pub row: u16,
}

impl Cell {
    pub const fn new(col: u16, row: u16) -> Self {
        Cell { col, row }
    }

    /// Offsets the cell and wraps both axes around the board, so the result is
    /// always inside it.
    pub fn wrapped_add(&self, delta: CellDelta, board: Board) -> Cell {
        let col = (self.col as i32 + delta.col).rem_euclid(board.width_cells as i32) as u16;
        let row = (self.row as i32 + delta.row).rem_euclid(board.height_cells as i32) as u16;
        Cell { col, row }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDelta {
    pub col: i32,
    pub row: i32,
}

impl From<Direction> for CellDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => CellDelta { col: 0, row: -1 },
            Direction::Down => CellDelta { col: 0, row: 1 },
            Direction::Left => CellDelta { col: -1, row: 0 },
            Direction::Right => CellDelta { col: 1, row: 0 },
        }
    }
}

/// Screen rectangle covered by `cell` when the board is drawn with its top-left
/// corner at `origin`. A cell is `cell_size` columns wide and one row tall.
pub fn cell_rect(cell: Cell, cell_size: u16, origin: Rect) -> Rect {
    Rect {
        x: origin.x + cell.col * cell_size,
        y: origin.y + cell.row,
        width: cell_size,
        height: 1,
    }
}
