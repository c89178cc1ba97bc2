use macroquad::prelude::*;

use common::config::Config;

fn window_conf() -> Conf {
    // Errors are reported once the window is up.
    let config = Config::from_env().unwrap_or_default();

    Conf {
        window_title: "Maze Walk".to_owned(),
        window_width: config.canvas_size as i32,
        window_height: config.canvas_size as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    client::run::run().await;
}
