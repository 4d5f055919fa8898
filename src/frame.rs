//! Renderer-agnostic description of one tick's drawing.

use sdl2::pixels::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<[f32; 2]>,
        color: Color,
    },
    Circle {
        center: [f32; 2],
        radius: f32,
        color: Color,
    },
    /// Filled rectangle with an outline drawn outside its bounds.
    Border {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        thickness: u32,
        outline: Color,
        fill: Color,
    },
    Segment {
        a: [f32; 2],
        b: [f32; 2],
        color: Color,
    },
}

/// Shapes in back-to-front draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub shapes: Vec<Shape>,
}

impl Frame {
    pub fn new() -> Frame {
        Frame { shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}
