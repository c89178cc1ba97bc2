use macroquad::prelude::*;

use common::{config::Config, input::Key, session::Session};

use crate::{input::Keyboard, surface::CanvasSurface};

const BANNER_TEXT: &str = "You found the way out! Press Escape to quit.";
const BANNER_FONT_SIZE: f32 = 24.0;
const BANNER_HEIGHT: f32 = 48.0;

pub fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}. Using defaults.", e);
            Config::default()
        }
    }
}

pub async fn run() {
    let config = load_config();
    let mut session = Session::new(&config);
    println!("{}", session.maze());

    let mut canvas = CanvasSurface::new(session.maze().layout());
    canvas.begin();
    session.draw(&mut canvas);
    canvas.end();

    let mut keyboard = Keyboard::new();
    let mut announced = false;

    loop {
        let keys = keyboard.poll();

        if is_quit_requested() || keys.contains(&Key::Escape) {
            break;
        }

        if !keys.is_empty() {
            canvas.begin();
            for key in keys {
                session.handle_key(key, &mut canvas);
            }
            canvas.end();
        }

        if !announced && session.reached_goal() {
            println!("Goal reached at {}.", session.player());
            announced = true;
        }

        clear_background(WHITE);
        canvas.present(0.0, 0.0);
        if announced {
            draw_banner();
        }

        next_frame().await;
    }

    println!("Closing the maze.");
}

fn draw_banner() {
    let top = (screen_height() - BANNER_HEIGHT) / 2.0;
    draw_rectangle(
        0.0,
        top,
        screen_width(),
        BANNER_HEIGHT,
        Color::new(0.0, 0.0, 0.0, 0.75),
    );

    let metrics = measure_text(BANNER_TEXT, None, BANNER_FONT_SIZE as u16, 1.0);
    draw_text(
        BANNER_TEXT,
        (screen_width() - metrics.width) / 2.0,
        top + (BANNER_HEIGHT + metrics.offset_y) / 2.0,
        BANNER_FONT_SIZE,
        WHITE,
    );
}
