use std::fmt;

use glam::{Vec2, vec2};

use crate::{
    constants::WALL_WIDTH,
    maze::{Direction, Layout},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2, // Top-left corner, in pixels.
    pub width: f32,     // Square, so also the height.
    pub step: f32,      // Distance covered by one key press.
}

impl Player {
    pub fn new(position: Vec2, width: f32, step: f32) -> Self {
        Self {
            position,
            width,
            step,
        }
    }

    /// Sized to leave one wall width of slack in a cell, placed in the top-left cell.
    pub fn spawn(layout: &Layout, step: f32) -> Self {
        let inset = WALL_WIDTH / 2.0;
        Self::new(vec2(inset, inset), layout.cell_size - WALL_WIDTH, step)
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    // `None` means one step, read when the move happens.
    pub fn up(&mut self, distance: Option<f32>) {
        self.position.y -= distance.unwrap_or(self.step);
    }

    pub fn down(&mut self, distance: Option<f32>) {
        self.position.y += distance.unwrap_or(self.step);
    }

    pub fn left(&mut self, distance: Option<f32>) {
        self.position.x -= distance.unwrap_or(self.step);
    }

    pub fn right(&mut self, distance: Option<f32>) {
        self.position.x += distance.unwrap_or(self.step);
    }

    pub fn nudge(&mut self, direction: Direction, distance: Option<f32>) {
        match direction {
            Direction::North => self.up(distance),
            Direction::South => self.down(distance),
            Direction::West => self.left(distance),
            Direction::East => self.right(distance),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {{ x: {}, y: {}, size: {}, step: {} }}",
            self.position.x, self.position.y, self.width, self.step
        )
    }
}
