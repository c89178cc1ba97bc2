use glam::Vec2;

use crate::{
    maze::{Layout, Maze, maker::MazeMaker},
    render::{Color, Surface},
};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillColor(Color),
    StrokeColor(Color),
    FillRect(f32, f32, f32, f32),
    ClearRect(f32, f32, f32, f32),
    Line(Vec2, Vec2, f32),
}

#[derive(Default)]
pub struct MockSurface {
    pub calls: Vec<DrawCall>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Line(from, to, thickness) => Some((*from, *to, *thickness)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for MockSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(DrawCall::StrokeColor(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::FillRect(x, y, width, height));
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::ClearRect(x, y, width, height));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32) {
        self.calls.push(DrawCall::Line(from, to, thickness));
    }
}

/// A fully walled grid of 40-pixel cells with only the listed passages carved.
pub fn maze_with_passages(
    cols: usize,
    rows: usize,
    passages: &[((usize, usize), (usize, usize))],
) -> Maze {
    let mut maker = MazeMaker::blank(Layout::new(cols, rows, 40.0), (0, 0));
    for &(from, to) in passages {
        maker.remove_wall_between(from, to);
    }
    maker.enclose();
    maker.into_maze()
}
