use glam::{Vec2, vec2};

use crate::{
    constants::WALL_WIDTH,
    maze::{Direction, Maze},
    player::Player,
};

pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const WALL_COLOR: Color = Color::BLACK;
pub const PLAYER_COLOR: Color = Color::RED;
pub const GOAL_COLOR: Color = Color::GREEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    WHITE,
    BLACK,
    RED,
    GREEN,
}

/// A canvas that keeps what is drawn on it until it is painted over.
pub trait Surface {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Resets the area to the background.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32);
}

/// Everything, from the background up.
pub fn draw_scene(surface: &mut impl Surface, maze: &Maze, player: &Player) {
    draw_background(surface, maze);
    draw_maze(surface, maze);
    draw_goal(surface, maze);
    draw_player(surface, player);
}

pub fn draw_background(surface: &mut impl Surface, maze: &Maze) {
    let layout = maze.layout();
    surface.set_fill_color(BACKGROUND_COLOR);
    surface.fill_rect(0.0, 0.0, layout.width(), layout.height());
}

/// Draws each physical wall once: the north and west walls of every cell, then
/// the east and south walls along the far edges of the grid.
pub fn draw_maze(surface: &mut impl Surface, maze: &Maze) {
    let size = maze.cell_size();
    let last_col = maze.cols() - 1;
    let last_row = maze.rows() - 1;

    surface.set_stroke_color(WALL_COLOR);

    for cell in maze.cells() {
        let left = maze.west_x(cell.x);
        let top = maze.north_y(cell.y);
        let right = left + size;
        let bottom = top + size;

        if cell.has_wall(Direction::North) {
            draw_wall(surface, vec2(left, top), vec2(right, top));
        }
        if cell.has_wall(Direction::West) {
            draw_wall(surface, vec2(left, top), vec2(left, bottom));
        }
        if cell.x == last_col && cell.has_wall(Direction::East) {
            draw_wall(surface, vec2(right, top), vec2(right, bottom));
        }
        if cell.y == last_row && cell.has_wall(Direction::South) {
            draw_wall(surface, vec2(left, bottom), vec2(right, bottom));
        }
    }
}

// Half a wall width past each end, so corners meet without notches.
fn draw_wall(surface: &mut impl Surface, from: Vec2, to: Vec2) {
    let overhang = (to - from).normalize_or_zero() * (WALL_WIDTH / 2.0);
    surface.draw_line(from - overhang, to + overhang, WALL_WIDTH);
}

pub fn draw_goal(surface: &mut impl Surface, maze: &Maze) {
    let (col, row) = maze.goal();
    let inset = WALL_WIDTH / 2.0;

    surface.set_fill_color(GOAL_COLOR);
    surface.fill_rect(
        maze.west_x(col) + inset,
        maze.north_y(row) + inset,
        maze.cell_size() - WALL_WIDTH,
        maze.cell_size() - WALL_WIDTH,
    );
}

pub fn clear_player(surface: &mut impl Surface, player: &Player) {
    surface.clear_rect(player.x(), player.y(), player.width, player.width);
}

pub fn draw_player(surface: &mut impl Surface, player: &Player) {
    surface.set_fill_color(PLAYER_COLOR);
    surface.fill_rect(player.x(), player.y(), player.width, player.width);
}
