//! SDL2 window that draws each tick's frame.
//!
//! Shapes map onto SDL2_gfx primitives; the optional readout is rendered with
//! SDL2_ttf in the top-left corner.

use kinesim::SimError;
use kinesim::consts::BACKGROUND;
use kinesim::driver::Presenter;
use kinesim::frame::{Frame, Shape};
use sdl2::EventPump;
use sdl2::Sdl;
use sdl2::event::Event;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::Window;
use std::path::Path;

const FONT_SIZE: u16 = 18;
const HUD_MARGIN: i32 = 10;
const HUD_COLOR: Color = Color::WHITE;

fn to_i16(point: [f32; 2]) -> (i16, i16) {
    (point[0] as i16, point[1] as i16)
}

/// Owns the window, canvas, event pump and optional HUD font for one run.
/// Everything is released when it is dropped.
pub struct PresentationContext<'ttf> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    font: Option<Font<'ttf, 'static>>,
}

impl<'ttf> PresentationContext<'ttf> {
    pub fn open(
        sdl: &Sdl,
        ttf: Option<&'ttf Sdl2TtfContext>,
        font_path: Option<&Path>,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<PresentationContext<'ttf>, SimError> {
        let video_subsystem = sdl.video().map_err(SimError::rendering)?;
        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(SimError::rendering)?;
        let mut canvas = window.into_canvas().build().map_err(SimError::rendering)?;
        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        canvas.present();
        let event_pump = sdl.event_pump().map_err(SimError::rendering)?;

        let font = match (ttf, font_path) {
            (Some(ttf), Some(path)) => match ttf.load_font(path, FONT_SIZE) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::warn!("could not load font {}: {err}; readout disabled", path.display());
                    None
                }
            },
            _ => None,
        };

        log::debug!("opened {width}x{height} window \"{title}\"");
        Ok(PresentationContext {
            canvas,
            event_pump,
            font,
        })
    }

    fn draw_shape(&mut self, shape: &Shape) -> Result<(), String> {
        match shape {
            Shape::Polygon { points, color } => {
                let (vx, vy): (Vec<i16>, Vec<i16>) = points.iter().map(|p| to_i16(*p)).unzip();
                self.canvas.filled_polygon(&vx, &vy, *color)
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                let (x, y) = to_i16(*center);
                self.canvas.filled_circle(x, y, *radius as i16, *color)
            }
            Shape::Border {
                x,
                y,
                width,
                height,
                thickness,
                outline,
                fill,
            } => {
                let t = *thickness as i32;
                self.canvas.set_draw_color(*outline);
                self.canvas.fill_rect(Rect::new(
                    x - t,
                    y - t,
                    width + 2 * thickness,
                    height + 2 * thickness,
                ))?;
                self.canvas.set_draw_color(*fill);
                self.canvas.fill_rect(Rect::new(*x, *y, *width, *height))
            }
            Shape::Segment { a, b, color } => {
                let (x1, y1) = to_i16(*a);
                let (x2, y2) = to_i16(*b);
                self.canvas.line(x1, y1, x2, y2, *color)
            }
        }
    }

    fn draw_hud(&mut self, lines: &[String]) -> Result<(), String> {
        let Some(font) = &self.font else {
            return Ok(());
        };
        let texture_creator = self.canvas.texture_creator();
        let mut y = HUD_MARGIN;
        for line in lines {
            let surface = font.render(line).blended(HUD_COLOR).map_err(|e| e.to_string())?;
            let texture = texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| e.to_string())?;
            let query = texture.query();
            self.canvas
                .copy(&texture, None, Some(Rect::new(HUD_MARGIN, y, query.width, query.height)))?;
            y += query.height as i32;
        }
        Ok(())
    }
}

impl Presenter for PresentationContext<'_> {
    fn poll_closed(&mut self) -> bool {
        let mut closed = false;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => closed = true,
                _ => {}
            }
        }
        closed
    }

    fn render(&mut self, frame: &Frame, hud: &[String]) -> Result<(), SimError> {
        self.canvas.set_draw_color(BACKGROUND);
        self.canvas.clear();
        for shape in &frame.shapes {
            // skip primitives SDL rejects; the rest of the frame still draws
            if let Err(err) = self.draw_shape(shape) {
                log::warn!("failed to draw {shape:?}: {err}");
            }
        }
        if let Err(err) = self.draw_hud(hud) {
            log::warn!("failed to draw readout: {err}");
        }
        self.canvas.present();
        Ok(())
    }
}
