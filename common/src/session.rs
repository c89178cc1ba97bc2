use rand::{SeedableRng, rngs::StdRng};

use crate::{
    config::Config,
    constants::START_CELL,
    input::Key,
    maze::{Direction, InvalidDirection, Maze},
    movement,
    player::Player,
    render::{self, Surface},
};

/// One maze and the player walking it, for the lifetime of a window.
pub struct Session {
    maze: Maze,
    player: Player,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let layout = config.layout();
        let maze = match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Maze::generate(layout, START_CELL, &mut rng)
            }
            None => Maze::new(layout),
        };

        match config.seed {
            Some(seed) => println!("Generated a {}x{} maze from seed {}.", layout.cols, layout.rows, seed),
            None => println!("Generated a {}x{} maze.", layout.cols, layout.rows),
        }

        Self::with_maze(maze, config.player_step)
    }

    pub fn with_maze(maze: Maze, step: f32) -> Self {
        let player = Player::spawn(&maze.layout(), step);
        Self { maze, player }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        render::draw_scene(surface, &self.maze, &self.player);
    }

    /// Returns `false` for keys that do not steer, which leave the surface untouched.
    pub fn handle_key(&mut self, key: Key, surface: &mut impl Surface) -> bool {
        match key.direction() {
            Some(direction) => {
                self.handle_direction(direction, surface);
                true
            }
            None => false,
        }
    }

    pub fn handle_code(
        &mut self,
        code: u8,
        surface: &mut impl Surface,
    ) -> Result<(), InvalidDirection> {
        let direction = Direction::try_from(code)?;
        self.handle_direction(direction, surface);
        Ok(())
    }

    // The goal is repainted because clearing the player may have cut into it.
    pub fn handle_direction(&mut self, direction: Direction, surface: &mut impl Surface) {
        render::clear_player(surface, &self.player);
        movement::attempt_move(&self.maze, &mut self.player, direction);
        render::draw_goal(surface, &self.maze);
        render::draw_player(surface, &self.player);
    }

    /// True once the player's square lies entirely inside the goal cell.
    pub fn reached_goal(&self) -> bool {
        let (col, row) = self.maze.goal();
        let size = self.maze.cell_size();
        let left = self.maze.west_x(col);
        let top = self.maze.north_y(row);
        let player = &self.player;

        player.x() >= left
            && player.y() >= top
            && player.x() + player.width <= left + size
            && player.y() + player.width <= top + size
    }
}
