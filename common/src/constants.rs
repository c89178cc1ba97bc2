// Drawing surface:
pub const CANVAS_SIZE: f32 = 400.0; // Square, in pixels.
pub const CELL_SIZE: f32 = 40.0; // 400 / 40 gives a 10 x 10 grid.
pub const WALL_WIDTH: f32 = 2.0; // Line thickness of a wall.

// Maze:
pub const START_CELL: (usize, usize) = (0, 0); // Where the depth-first carve begins.

// Player:
pub const PLAYER_STEP: f32 = 4.0; // Pixels per key press. Must divide `CELL_SIZE`.
