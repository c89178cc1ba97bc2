use macroquad::prelude::*;

use common::{
    maze::Layout,
    render::{self, Surface},
};

/// An off-screen texture that keeps its pixels between frames, so only what
/// changes needs drawing.
pub struct CanvasSurface {
    camera: Camera2D,
    texture: Texture2D,
    width: f32,
    height: f32,
    fill: Color,
    stroke: Color,
}

impl CanvasSurface {
    pub fn new(layout: Layout) -> Self {
        let width = layout.width();
        let height = layout.height();

        let target = render_target(width as u32, height as u32);
        target.texture.set_filter(FilterMode::Nearest);
        let texture = target.texture.clone();

        let mut camera = Camera2D {
            render_target: Some(target),
            zoom: vec2(2.0 / width, 2.0 / height),
            target: vec2(width / 2.0, height / 2.0),
            ..Default::default()
        };
        camera.zoom.y *= -1.0;

        Self {
            camera,
            texture,
            width,
            height,
            fill: to_color(render::BACKGROUND_COLOR),
            stroke: to_color(render::WALL_COLOR),
        }
    }

    /// Routes drawing calls into the texture until `end`.
    pub fn begin(&self) {
        set_camera(&self.camera);
    }

    pub fn end(&self) {
        set_default_camera();
    }

    pub fn present(&self, x: f32, y: f32) {
        draw_texture_ex(
            &self.texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(self.width, self.height)),
                flip_y: true,
                ..Default::default()
            },
        );
    }
}

impl Surface for CanvasSurface {
    fn set_fill_color(&mut self, color: render::Color) {
        self.fill = to_color(color);
    }

    fn set_stroke_color(&mut self, color: render::Color) {
        self.stroke = to_color(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, self.fill);
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        draw_rectangle(x, y, width, height, to_color(render::BACKGROUND_COLOR));
    }

    fn draw_line(&mut self, from: glam::Vec2, to: glam::Vec2, thickness: f32) {
        macroquad::prelude::draw_line(from.x, from.y, to.x, to.y, thickness, self.stroke);
    }
}

// Color aliases: https://docs.rs/macroquad/latest/macroquad/color/colors/index.html
fn to_color(color: render::Color) -> Color {
    match color {
        render::Color::WHITE => WHITE,
        render::Color::BLACK => BLACK,
        render::Color::RED => RED,
        render::Color::GREEN => GREEN,
    }
}
