pub mod algorithms;

use rand::{Rng, seq::SliceRandom};

use super::{Cell, Direction, Layout, Maze};
use algorithms::backtrack::Backtrack;

/// Owns the cells while walls are being carved. Only this type mutates them.
pub(crate) struct MazeMaker {
    pub cells: Vec<Vec<Cell>>,
    layout: Layout,
    start: (usize, usize),
}

impl MazeMaker {
    pub fn new<R: Rng + ?Sized>(layout: Layout, start: (usize, usize), rng: &mut R) -> Self {
        let mut maze = Self::blank(layout, start);
        maze.backtrack(rng);
        maze.enclose();
        maze
    }

    /// Every interior wall standing, nothing visited.
    pub fn blank(layout: Layout, start: (usize, usize)) -> Self {
        debug_assert!(
            start.0 < layout.cols && start.1 < layout.rows,
            "start cell is out of bounds"
        );

        let cells = (0..layout.rows)
            .map(|y| {
                (0..layout.cols)
                    .map(|x| Cell::new(x, y, layout.cols, layout.rows))
                    .collect()
            })
            .collect();

        MazeMaker {
            cells,
            layout,
            start,
        }
    }

    pub fn into_maze(self) -> Maze {
        Maze {
            layout: self.layout,
            cells: self.cells,
        }
    }

    fn get_neighbors(&self, (x, y): (usize, usize)) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::with_capacity(4);

        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x < self.layout.cols - 1 {
            neighbors.push((x + 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y < self.layout.rows - 1 {
            neighbors.push((x, y + 1));
        }

        neighbors
    }

    fn shuffled_neighbors<R: Rng + ?Sized>(
        &self,
        cell: (usize, usize),
        rng: &mut R,
    ) -> Vec<(usize, usize)> {
        let mut neighbors = self.get_neighbors(cell);
        neighbors.shuffle(rng);
        neighbors
    }

    fn visit_cell(&mut self, (x, y): (usize, usize)) {
        self.cells[y][x].visited = true;
    }

    fn is_visited(&self, (x, y): (usize, usize)) -> bool {
        self.cells[y][x].visited
    }

    fn parent_of(&self, (x, y): (usize, usize)) -> Option<(usize, usize)> {
        self.cells[y][x].parent
    }

    fn set_parent(&mut self, (x, y): (usize, usize), parent: (usize, usize)) {
        self.cells[y][x].parent = Some(parent);
    }

    /// Clears both flags of the wall pair between two adjacent cells.
    pub fn remove_wall_between(&mut self, from: (usize, usize), to: (usize, usize)) {
        let direction = if to.0 > from.0 {
            Direction::East
        } else if to.0 < from.0 {
            Direction::West
        } else if to.1 > from.1 {
            Direction::South
        } else {
            Direction::North
        };

        debug_assert!(
            from.0.abs_diff(to.0) + from.1.abs_diff(to.1) == 1,
            "cells {:?} and {:?} are not adjacent",
            from,
            to
        );

        self.cells[from.1][from.0].walls[direction as usize] = false;
        self.cells[to.1][to.0].walls[direction.opposite() as usize] = false;
    }

    /// Closes the outer frame so the player can never leave the grid.
    pub fn enclose(&mut self) {
        let last_col = self.layout.cols - 1;
        let last_row = self.layout.rows - 1;

        for cell in self.cells.iter_mut().flatten() {
            if cell.x == 0 {
                cell.walls[Direction::West as usize] = true;
            }
            if cell.y == 0 {
                cell.walls[Direction::North as usize] = true;
            }
            if cell.x == last_col {
                cell.walls[Direction::East as usize] = true;
            }
            if cell.y == last_row {
                cell.walls[Direction::South as usize] = true;
            }
        }
    }
}
