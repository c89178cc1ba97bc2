pub mod maker;

use std::fmt;

use glam::Vec2;
use rand::Rng;
use strum::{Display, EnumIter};
use thiserror::Error;

use crate::constants::START_CELL;
use maker::MazeMaker;

pub const WALL_SYMBOL: &str = "██";
pub const SPACE_SYMBOL: &str = "  ";

/// Direction of travel, and the index of the matching wall flag in [`Cell::walls`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// The two sides across the line of travel, lower coordinate first.
    pub fn sides(self) -> (Direction, Direction) {
        if self.is_vertical() {
            (Direction::West, Direction::East)
        } else {
            (Direction::North, Direction::South)
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid direction: {0}")]
pub struct InvalidDirection(pub u8);

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::North),
            1 => Ok(Direction::South),
            2 => Ok(Direction::West),
            3 => Ok(Direction::East),
            _ => {
                eprintln!("Ignoring invalid direction code {}.", code);
                Err(InvalidDirection(code))
            }
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as u8
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub visited: bool,
    pub parent: Option<(usize, usize)>, // The cell that discovered this one during generation.
    pub walls: [bool; 4],               // Indexed by `Direction`.
}

impl Cell {
    // Outward-facing walls start open; the generator closes them once carving is done.
    fn new(x: usize, y: usize, cols: usize, rows: usize) -> Self {
        let mut walls = [true; 4];
        walls[Direction::North as usize] = y != 0;
        walls[Direction::South as usize] = y != rows - 1;
        walls[Direction::West as usize] = x != 0;
        walls[Direction::East as usize] = x != cols - 1;

        Self {
            x,
            y,
            visited: false,
            parent: None,
            walls,
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f32,
}

impl Layout {
    pub fn new(cols: usize, rows: usize, cell_size: f32) -> Self {
        debug_assert!(cols > 0 && rows > 0, "maze needs at least one cell");
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    /// Fits as many whole cells as possible onto a square surface.
    pub fn from_canvas(canvas_size: f32, cell_size: f32) -> Self {
        let cells = (canvas_size / cell_size).floor() as usize;
        Self::new(cells, cells, cell_size)
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }
}

/// A generated maze. Read-only: walls only change while the maker owns the cells.
#[derive(Clone, PartialEq)]
pub struct Maze {
    layout: Layout,
    cells: Vec<Vec<Cell>>, // Row-major: `cells[y][x]`.
}

impl Maze {
    pub fn new(layout: Layout) -> Self {
        Self::generate(layout, START_CELL, &mut rand::rng())
    }

    pub fn generate<R: Rng + ?Sized>(layout: Layout, start: (usize, usize), rng: &mut R) -> Self {
        MazeMaker::new(layout, start, rng).into_maze()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.layout.cell_size
    }

    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y][x]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn neighbor(&self, cell: &Cell, direction: Direction) -> Option<&Cell> {
        let (dx, dy) = direction.offset();
        let x = cell.x.checked_add_signed(dx)?;
        let y = cell.y.checked_add_signed(dy)?;

        if x >= self.cols() || y >= self.rows() {
            return None;
        }

        Some(self.cell(x, y))
    }

    pub fn grid_coordinates_from_position(&self, position: Vec2) -> Option<(usize, usize)> {
        let col = (position.x / self.cell_size()).floor();
        let row = (position.y / self.cell_size()).floor();

        if col < 0.0 || row < 0.0 {
            return None;
        }

        let col = col as usize;
        let row = row as usize;

        if col >= self.cols() || row >= self.rows() {
            return None;
        }

        Some((col, row))
    }

    /// The cell owning a pixel. A position off the grid is a caller bug, so this panics.
    pub fn cell_at(&self, position: Vec2) -> &Cell {
        let (x, y) = self
            .grid_coordinates_from_position(position)
            .unwrap_or_else(|| {
                panic!(
                    "position ({}, {}) is outside the {}x{} maze",
                    position.x,
                    position.y,
                    self.cols(),
                    self.rows()
                )
            });
        self.cell(x, y)
    }

    pub fn west_x(&self, col: usize) -> f32 {
        col as f32 * self.cell_size()
    }

    pub fn east_x(&self, col: usize) -> f32 {
        (col + 1) as f32 * self.cell_size() - 1.0
    }

    pub fn north_y(&self, row: usize) -> f32 {
        row as f32 * self.cell_size()
    }

    pub fn south_y(&self, row: usize) -> f32 {
        (row + 1) as f32 * self.cell_size() - 1.0
    }

    pub fn goal(&self) -> (usize, usize) {
        (self.cols() - 1, self.rows() - 1)
    }

    pub fn log(&self) -> String {
        (0..=2 * self.rows())
            .map(|row| {
                (0..=2 * self.cols())
                    .map(|col| {
                        if self.is_wall_symbol(col, row) {
                            WALL_SYMBOL
                        } else {
                            SPACE_SYMBOL
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    // Even coordinates are wall lines, odd ones cell interiors.
    fn is_wall_symbol(&self, col: usize, row: usize) -> bool {
        match (col % 2, row % 2) {
            (0, 0) => true,
            (1, 1) => false,
            (1, 0) => {
                let x = col / 2;
                if row / 2 == self.rows() {
                    self.cell(x, self.rows() - 1).has_wall(Direction::South)
                } else {
                    self.cell(x, row / 2).has_wall(Direction::North)
                }
            }
            _ => {
                let y = row / 2;
                if col / 2 == self.cols() {
                    self.cell(self.cols() - 1, y).has_wall(Direction::East)
                } else {
                    self.cell(col / 2, y).has_wall(Direction::West)
                }
            }
        }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
