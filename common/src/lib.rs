pub mod config;
pub mod constants;
pub mod input;
pub mod maze;
pub mod movement;
pub mod player;
pub mod render;
pub mod session;

#[cfg(test)]
mod test_helpers;
