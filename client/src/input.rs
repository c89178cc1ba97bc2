use std::time::{Duration, Instant};

use macroquad::prelude::*;

use common::input::Key;

const INITIAL_DELAY: Duration = Duration::from_millis(250); // Hold time before an arrow repeats.
const REPEAT_RATE: Duration = Duration::from_millis(40); // Between repeats.

const ARROWS: [(KeyCode, Key); 4] = [
    (KeyCode::Up, Key::ArrowUp),
    (KeyCode::Down, Key::ArrowDown),
    (KeyCode::Left, Key::ArrowLeft),
    (KeyCode::Right, Key::ArrowRight),
];

/// Turns a held key into a stream of presses, like a keyboard's own auto-repeat.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeldKey {
    last_pressed: Option<Instant>,
}

impl HeldKey {
    /// Whether the key fires this frame.
    pub fn update(&mut self, is_down: bool, now: Instant) -> bool {
        if !is_down {
            self.last_pressed = None;
            return false;
        }

        match self.last_pressed {
            Some(last) => {
                if now.saturating_duration_since(last) >= REPEAT_RATE {
                    self.last_pressed = Some(now);
                    true
                } else {
                    false
                }
            }
            None => {
                // Dated in the future so the first repeat waits for the initial delay.
                self.last_pressed = Some(now + INITIAL_DELAY - REPEAT_RATE);
                true
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Keyboard {
    arrows: [HeldKey; 4],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys pressed since the last frame, arrows first.
    pub fn poll(&mut self) -> Vec<Key> {
        let now = Instant::now();
        let mut keys = Vec::new();

        for ((code, key), held) in ARROWS.iter().zip(self.arrows.iter_mut()) {
            if held.update(is_key_down(*code), now) {
                keys.push(*key);
            }
        }

        if is_key_pressed(KeyCode::Escape) {
            keys.push(Key::Escape);
        }

        while let Some(ch) = get_char_pressed() {
            if !ch.is_control() {
                keys.push(Key::Char(ch));
            }
        }

        keys
    }
}
