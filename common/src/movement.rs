use glam::{Vec2, vec2};

use crate::{
    constants::WALL_WIDTH,
    maze::{Cell, Direction, Maze},
    player::Player,
};

/// Moves the player one step, or only as far as the nearest wall in the way.
pub fn attempt_move(maze: &Maze, player: &mut Player, direction: Direction) {
    let clipped = blocking_wall(maze, player, direction)
        .filter(|&wall| would_collide(player, direction, wall))
        .map(|wall| {
            let distance = wall_distance(player, direction, wall);
            debug_assert!(
                distance >= 0.0,
                "{} already overlaps the {} wall at {}",
                player,
                direction,
                wall
            );
            distance
        });

    player.nudge(direction, clipped);
}

/// Position of the wall the player is heading into, if any wall is in the way.
pub fn blocking_wall(maze: &Maze, player: &Player, direction: Direction) -> Option<f32> {
    let (first, second) = leading_corners(player, direction);
    let cell1 = maze.cell_at(first);
    let cell2 = maze.cell_at(second);

    let blocked = cell1.has_wall(direction)
        || cell2.has_wall(direction)
        || (cell1.position() != cell2.position() && straddle_blocked(maze, cell1, cell2, direction));

    blocked.then(|| wall_position(maze, cell1, direction))
}

// Ends of the edge that faces `direction`. For NORTH and WEST the first one is the top-left corner.
fn leading_corners(player: &Player, direction: Direction) -> (Vec2, Vec2) {
    let Vec2 { x, y } = player.position;
    let w = player.width;

    match direction {
        Direction::North => (vec2(x, y), vec2(x + w, y)),
        Direction::South => (vec2(x, y + w), vec2(x + w, y + w)),
        Direction::West => (vec2(x, y), vec2(x, y + w)),
        Direction::East => (vec2(x + w, y), vec2(x + w, y + w)),
    }
}

// `cell2` lies on the high side of `cell1` across the line of travel.
fn straddle_blocked(maze: &Maze, cell1: &Cell, cell2: &Cell, direction: Direction) -> bool {
    let (low, high) = direction.sides();
    if cell1.has_wall(low) || cell2.has_wall(high) {
        return true;
    }

    // Crossing the edge would also run into the wall that splits the two cells ahead.
    maze.neighbor(cell1, direction)
        .is_some_and(|ahead| ahead.has_wall(high))
}

pub fn wall_position(maze: &Maze, cell: &Cell, direction: Direction) -> f32 {
    match direction {
        Direction::North => maze.north_y(cell.y),
        Direction::South => maze.south_y(cell.y) - WALL_WIDTH,
        Direction::West => maze.west_x(cell.x),
        Direction::East => maze.east_x(cell.x) - WALL_WIDTH,
    }
}

/// How far the player can go before its edge sits flush against the wall.
pub fn wall_distance(player: &Player, direction: Direction, wall: f32) -> f32 {
    match direction {
        Direction::North => player.y() - wall - WALL_WIDTH + 1.0,
        Direction::South => wall - player.y() - player.width + WALL_WIDTH,
        Direction::West => player.x() - wall - WALL_WIDTH + 1.0,
        Direction::East => wall - player.x() - player.width + WALL_WIDTH,
    }
}

// A full step would reach past the flush position.
fn would_collide(player: &Player, direction: Direction, wall: f32) -> bool {
    wall_distance(player, direction, wall) < player.step
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        constants::{CANVAS_SIZE, CELL_SIZE, PLAYER_STEP, START_CELL},
        maze::Layout,
        test_helpers::maze_with_passages,
    };

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(vec2(x, y), CELL_SIZE - WALL_WIDTH, PLAYER_STEP)
    }

    // Wall lines are `WALL_WIDTH` thick and centred on cell edges, stretched by half a width at each end.
    fn overlaps_any_wall(maze: &Maze, player: &Player) -> bool {
        let half = WALL_WIDTH / 2.0;
        let size = maze.cell_size();
        let (px0, py0) = (player.x(), player.y());
        let (px1, py1) = (px0 + player.width, py0 + player.width);
        let overlaps = |x0: f32, y0: f32, x1: f32, y1: f32| px0 < x1 && px1 > x0 && py0 < y1 && py1 > y0;

        maze.cells().any(|cell| {
            let west = cell.x as f32 * size;
            let north = cell.y as f32 * size;
            let east = west + size;
            let south = north + size;

            (cell.has_wall(Direction::North)
                && overlaps(west - half, north - half, east + half, north + half))
                || (cell.has_wall(Direction::South)
                    && overlaps(west - half, south - half, east + half, south + half))
                || (cell.has_wall(Direction::West)
                    && overlaps(west - half, north - half, west + half, south + half))
                || (cell.has_wall(Direction::East)
                    && overlaps(east - half, north - half, east + half, south + half))
        })
    }

    #[test]
    fn walls_at_spawn_hold_the_player_in_place() {
        let maze = maze_with_passages(2, 2, &[((0, 0), (1, 0)), ((0, 0), (0, 1))]);
        let mut player = player_at(1.0, 1.0);

        attempt_move(&maze, &mut player, Direction::North);
        attempt_move(&maze, &mut player, Direction::West);

        assert_eq!(player.position, vec2(1.0, 1.0));
    }

    #[test]
    fn clips_west_to_the_remaining_distance() {
        let maze = maze_with_passages(2, 2, &[]);
        let mut player = player_at(3.0, 1.0);

        assert_eq!(blocking_wall(&maze, &player, Direction::West), Some(0.0));
        attempt_move(&maze, &mut player, Direction::West);

        assert_eq!(player.position, vec2(1.0, 1.0));
    }

    #[test]
    fn clips_north_to_the_remaining_distance() {
        let maze = maze_with_passages(2, 2, &[]);
        let mut player = player_at(1.0, 3.0);

        attempt_move(&maze, &mut player, Direction::North);

        assert_eq!(player.position, vec2(1.0, 1.0));
    }

    #[test]
    fn clips_east_against_the_far_cell_wall() {
        let maze = maze_with_passages(2, 1, &[((0, 0), (1, 0))]);
        let mut player = player_at(39.0, 1.0);

        assert_eq!(blocking_wall(&maze, &player, Direction::East), Some(77.0));
        assert_eq!(wall_distance(&player, Direction::East, 77.0), 2.0);
        attempt_move(&maze, &mut player, Direction::East);

        assert_eq!(player.position, vec2(41.0, 1.0));
        assert!(!overlaps_any_wall(&maze, &player));
    }

    #[test]
    fn clips_south_against_the_far_cell_wall() {
        let maze = maze_with_passages(1, 2, &[((0, 0), (0, 1))]);
        let mut player = player_at(1.0, 39.0);

        attempt_move(&maze, &mut player, Direction::South);

        assert_eq!(player.position, vec2(1.0, 41.0));
        assert!(!overlaps_any_wall(&maze, &player));
    }

    #[test]
    fn full_step_when_nothing_is_in_reach() {
        let maze = maze_with_passages(2, 1, &[((0, 0), (1, 0))]);
        let mut player = player_at(1.0, 1.0);

        attempt_move(&maze, &mut player, Direction::East);
        assert_eq!(player.x(), 5.0);

        // The far wall is detected but still 36 pixels away.
        assert_eq!(wall_distance(&player, Direction::East, 77.0), 36.0);
        attempt_move(&maze, &mut player, Direction::East);
        assert_eq!(player.x(), 9.0);
    }

    #[test]
    fn walking_a_corridor_ends_flush_with_its_wall() {
        let maze = maze_with_passages(2, 1, &[((0, 0), (1, 0))]);
        let mut player = player_at(1.0, 1.0);

        for _ in 0..20 {
            attempt_move(&maze, &mut player, Direction::East);
            assert!(!overlaps_any_wall(&maze, &player));
        }
        assert_eq!(player.x(), 41.0);

        for _ in 0..20 {
            attempt_move(&maze, &mut player, Direction::West);
        }
        assert_eq!(player.x(), 1.0);
    }

    #[test]
    fn straddling_player_cannot_turn_past_a_side_wall() {
        let maze = maze_with_passages(
            2,
            2,
            &[((0, 0), (1, 0)), ((0, 0), (0, 1)), ((1, 0), (1, 1))],
        );
        let mut player = player_at(21.0, 1.0);

        assert!(blocking_wall(&maze, &player, Direction::South).is_some());
        attempt_move(&maze, &mut player, Direction::South);

        assert_eq!(player.position, vec2(21.0, 1.0));
    }

    #[test]
    fn straddling_player_cannot_turn_into_the_wall_between_cells_ahead() {
        // Row 0 is one corridor; (1, 1) and (2, 1) hang off it but are walled from each other.
        let maze = maze_with_passages(
            4,
            2,
            &[
                ((0, 0), (1, 0)),
                ((1, 0), (2, 0)),
                ((2, 0), (3, 0)),
                ((1, 0), (1, 1)),
                ((2, 0), (2, 1)),
                ((0, 1), (1, 1)),
                ((2, 1), (3, 1)),
            ],
        );
        let mut player = player_at(61.0, 1.0);

        attempt_move(&maze, &mut player, Direction::South);
        assert_eq!(player.position, vec2(61.0, 1.0));

        // Lined up with a single column, the same move goes through.
        let mut player = player_at(41.0, 1.0);
        attempt_move(&maze, &mut player, Direction::South);
        assert_eq!(player.position, vec2(41.0, 5.0));
    }

    #[test]
    fn random_walks_never_overlap_a_wall() {
        let layout = Layout::from_canvas(CANVAS_SIZE, CELL_SIZE);
        let directions: Vec<Direction> = Direction::iter().collect();

        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = Maze::generate(layout, START_CELL, &mut rng);
            let mut player = Player::spawn(&layout, PLAYER_STEP);

            for _ in 0..2_000 {
                let direction = directions[rng.random_range(0..directions.len())];
                attempt_move(&maze, &mut player, direction);

                assert!(
                    !overlaps_any_wall(&maze, &player),
                    "seed {seed}: {player} overlaps a wall after moving {direction}\n{maze}"
                );
            }
        }
    }

    #[test]
    fn other_accepted_steps_never_overlap_a_wall() {
        let layout = Layout::from_canvas(CANVAS_SIZE, CELL_SIZE);
        let directions: Vec<Direction> = Direction::iter().collect();

        for step in [2.0, 2.5, 5.0, 8.0, 20.0] {
            for seed in 0..8 {
                let mut rng = StdRng::seed_from_u64(seed);
                let maze = Maze::generate(layout, START_CELL, &mut rng);
                let mut player = Player::spawn(&layout, step);

                for _ in 0..2_000 {
                    let direction = directions[rng.random_range(0..directions.len())];
                    attempt_move(&maze, &mut player, direction);

                    assert!(
                        !overlaps_any_wall(&maze, &player),
                        "step {step}, seed {seed}: {player} overlaps a wall after moving {direction}"
                    );
                }
            }
        }
    }
}
