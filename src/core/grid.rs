//! Grid geometry and cell contents.
//!
//! ## Position
//!
//! Board coordinate with a top-left origin: `x` is the column, `y` the row.
//!
//! ## Board
//!
//! Square grid of `Cell` values stored row-major in an `im::Vector`, so
//! cloning a board for a functional transition is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, 0 at the left edge.
    pub x: usize,
    /// Row, 0 at the top edge.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Offset by a signed delta, staying within a `size`×`size` grid.
    ///
    /// Returns `None` if the result would leave the grid.
    ///
    /// ```
    /// use bee_grid::core::Position;
    ///
    /// let p = Position::new(0, 4);
    /// assert_eq!(p.offset(0, -1, 5), Some(Position::new(0, 3)));
    /// assert_eq!(p.offset(-1, 0, 5), None);
    /// assert_eq!(p.offset(0, 1, 5), None);
    /// ```
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Self { x, y })
    }

    /// Check whether this position lies on a `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Semantic content of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Collectible honey drop.
    Honey,
    /// The goal.
    Flower,
    /// Where the bee starts.
    Start,
    /// Reserved. Generation never places walls.
    Wall,
}

impl Cell {
    /// Single-character glyph used by text renderings.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Honey => 'h',
            Cell::Flower => 'F',
            Cell::Start => 'S',
            Cell::Wall => '#',
        }
    }
}

/// Square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
}

impl Board {
    /// Create an all-empty board of the given dimension.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
        }
    }

    /// Board dimension N (the board is N×N).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).and_then(|i| self.cells.get(i).copied())
    }

    /// Overwrite the cell at a position.
    ///
    /// Returns false (and leaves the board untouched) if out of bounds.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells.set(i, cell);
                true
            }
            None => false,
        }
    }

    /// Count cells with the given content.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Positions holding the given content, in row-major order.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |&(_, c)| c == cell)
            .map(|(pos, _)| pos)
    }

    /// Iterate all cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::new(i % size, i / size), c))
    }

    /// Copy the cells out as rows (top row first).
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| self.get(Position::new(x, y)).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        pos.in_bounds(self.size).then_some(pos.y * self.size + pos.x)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_within_bounds() {
        let p = Position::new(2, 2);
        assert_eq!(p.offset(1, 0, 5), Some(Position::new(3, 2)));
        assert_eq!(p.offset(0, -2, 5), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        assert_eq!(Position::new(0, 0).offset(0, -1, 5), None);
        assert_eq!(Position::new(4, 0).offset(1, 0, 5), None);
        assert_eq!(Position::new(4, 4).offset(0, 1, 5), None);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.count(Cell::Empty), 25);
        assert_eq!(board.get(Position::new(5, 0)), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::empty(5);
        assert!(board.set(Position::new(4, 0), Cell::Flower));
        assert!(!board.set(Position::new(9, 9), Cell::Honey));

        assert_eq!(board.get(Position::new(4, 0)), Some(Cell::Flower));
        assert_eq!(board.count(Cell::Flower), 1);
        assert_eq!(board.count(Cell::Honey), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::empty(3);
        board.set(Position::new(1, 1), Cell::Honey);

        let mut copy = board.clone();
        copy.set(Position::new(1, 1), Cell::Empty);

        assert_eq!(board.get(Position::new(1, 1)), Some(Cell::Honey));
        assert_eq!(copy.get(Position::new(1, 1)), Some(Cell::Empty));
    }

    #[test]
    fn test_positions_of_row_major() {
        let mut board = Board::empty(3);
        board.set(Position::new(2, 0), Cell::Honey);
        board.set(Position::new(0, 1), Cell::Honey);

        let found: Vec<_> = board.positions_of(Cell::Honey).collect();
        assert_eq!(found, vec![Position::new(2, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty(2);
        board.set(Position::new(1, 0), Cell::Flower);
        board.set(Position::new(0, 1), Cell::Start);

        assert_eq!(board.to_string(), ".F\nS.\n");
    }
}
