//! Drawing geometry derived from kinematic state.
//!
//! Everything here is a pure function of the current state and the scenario
//! angle, recomputed every tick.

use crate::consts::*;
use crate::frame::{Frame, Shape};
use crate::library::{add, along, midpoint};
use sdl2::pixels::Color;

/// The four force vectors of the block's free-body diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceVectors {
    /// Gravity component parallel to the plane (Fg sin)
    pub gravity: [[f32; 2]; 2],
    /// Normal force (Fn)
    pub normal: [[f32; 2]; 2],
    /// Friction parallel to the plane (Ff cos)
    pub friction: [[f32; 2]; 2],
    /// Full weight (Fg)
    pub weight: [[f32; 2]; 2],
}

impl ForceVectors {
    pub fn colored(&self) -> [([[f32; 2]; 2], Color); 4] {
        [
            (self.gravity, GRAVITY_COLOR),
            (self.normal, NORMAL_COLOR),
            (self.friction, FRICTION_COLOR),
            (self.weight, WEIGHT_COLOR),
        ]
    }
}

/// Vertices of the incline: bottom-left, top-right, bottom-right.
pub fn plane_vertices(angle: f32) -> [[f32; 2]; 3] {
    let run = PLANE_LENGTH * angle.cos();
    [
        [0.0, PLANE_GROUND],
        [run, PLANE_GROUND - PLANE_LENGTH * angle.sin()],
        [run, PLANE_GROUND],
    ]
}

/// Corners of the block resting on the plane with its lower-left corner at
/// `position`, in drawing order.
pub fn block_corners(position: [f32; 2], angle: f32) -> [[f32; 2]; 4] {
    let (sin, cos) = angle.sin_cos();
    let up_slope = along(angle, BLOCK_SIZE);
    let p0 = position;
    let p1 = [p0[0] - BLOCK_SIZE * sin, p0[1] - BLOCK_SIZE * cos];
    let p2 = add(p1, up_slope);
    let p3 = add(p0, up_slope);
    [p0, p1, p2, p3]
}

pub fn force_vectors(corners: &[[f32; 2]; 4], angle: f32) -> ForceVectors {
    let (sin, cos) = angle.sin_cos();
    let [p0, p1, p2, p3] = *corners;
    let segment = |start: [f32; 2], offset: [f32; 2]| [start, add(start, offset)];

    ForceVectors {
        gravity: segment(
            midpoint(p0, p1),
            [-VECTOR_LENGTH * cos, VECTOR_LENGTH * sin],
        ),
        normal: segment(
            midpoint(p1, p2),
            [-VECTOR_LENGTH * sin, -VECTOR_LENGTH * cos],
        ),
        friction: segment(midpoint(p3, p2), along(angle, VECTOR_LENGTH)),
        weight: segment(midpoint(p0, p3), [0.0, VECTOR_LENGTH]),
    }
}

/// Block, plane and force diagram for one tick of the incline scenario.
pub fn incline_frame(position: [f32; 2], angle: f32) -> Frame {
    let corners = block_corners(position, angle);
    let mut frame = Frame::new();
    frame.push(Shape::Polygon {
        points: corners.to_vec(),
        color: BLOCK_COLOR,
    });
    frame.push(Shape::Polygon {
        points: plane_vertices(angle).to_vec(),
        color: PLANE_COLOR,
    });
    for ([a, b], color) in force_vectors(&corners, angle).colored() {
        frame.push(Shape::Segment { a, b, color });
    }
    frame
}

/// Arena border and projectile for one tick of the projectile scenario.
///
/// `position` is the top-left of the projectile's bounding box.
pub fn projectile_frame(position: [f32; 2]) -> Frame {
    let (x, y, width, height) = BORDER;
    let mut frame = Frame::new();
    frame.push(Shape::Border {
        x,
        y,
        width,
        height,
        thickness: BORDER_THICKNESS,
        outline: BORDER_COLOR,
        fill: BACKGROUND,
    });
    frame.push(Shape::Circle {
        center: add(position, [PROJECTILE_RADIUS, PROJECTILE_RADIUS]),
        radius: PROJECTILE_RADIUS,
        color: PROJECTILE_COLOR,
    });
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::find_vector;
    use std::f32::consts::FRAC_PI_6;

    fn length(v: [f32; 2]) -> f32 {
        v[0].hypot(v[1])
    }

    fn segment_colors(frame: &Frame) -> Vec<Color> {
        frame
            .shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Segment { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn close(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-3 && (a[1] - b[1]).abs() < 1e-3
    }

    #[test]
    fn flat_plane_collapses_to_ground_line() {
        let [a, b, c] = plane_vertices(0.0);
        assert_eq!(a, [0.0, 800.0]);
        assert!(close(b, [800.0, 800.0]));
        assert!(close(c, [800.0, 800.0]));
    }

    #[test]
    fn block_is_a_square_of_block_size() {
        let corners = block_corners([300.0, 500.0], FRAC_PI_6);
        for i in 0..4 {
            let side = find_vector(corners[i], corners[(i + 1) % 4]);
            assert!((length(side) - BLOCK_SIZE).abs() < 1e-3);
        }
        let diagonal = find_vector(corners[0], corners[2]);
        assert!((length(diagonal) - BLOCK_SIZE * 2f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn flat_block_is_axis_aligned() {
        let corners = block_corners([100.0, 800.0], 0.0);
        assert!(close(corners[1], [100.0, 750.0]));
        assert!(close(corners[2], [150.0, 750.0]));
        assert!(close(corners[3], [150.0, 800.0]));
    }

    #[test]
    fn force_vectors_have_fixed_length_and_directions() {
        let corners = block_corners([300.0, 500.0], FRAC_PI_6);
        let forces = force_vectors(&corners, FRAC_PI_6);
        for ([a, b], _) in forces.colored() {
            assert!((length(find_vector(a, b)) - VECTOR_LENGTH).abs() < 1e-3);
        }
        // weight points straight down the screen
        assert!(close(find_vector(forces.weight[0], forces.weight[1]), [0.0, 30.0]));
        // gravity along the plane opposes friction
        let g = find_vector(forces.gravity[0], forces.gravity[1]);
        let f = find_vector(forces.friction[0], forces.friction[1]);
        assert!(close(g, [-f[0], -f[1]]));
        assert!(close(forces.gravity[0], midpoint(corners[0], corners[1])));
    }

    #[test]
    fn incline_frame_draws_block_plane_and_four_vectors() {
        let frame = incline_frame([500.0, 400.0], FRAC_PI_6);
        assert_eq!(frame.shapes.len(), 6);
        assert!(matches!(frame.shapes[0], Shape::Polygon { color: BLOCK_COLOR, .. }));
        assert!(matches!(frame.shapes[1], Shape::Polygon { color: PLANE_COLOR, .. }));
        let colors = segment_colors(&frame);
        assert_eq!(
            colors,
            vec![GRAVITY_COLOR, NORMAL_COLOR, FRICTION_COLOR, WEIGHT_COLOR]
        );
    }

    #[test]
    fn projectile_frame_centers_circle_in_its_box() {
        let frame = projectile_frame([70.0, 680.0]);
        assert!(segment_colors(&frame).is_empty());
        match &frame.shapes[1] {
            Shape::Circle { center, radius, .. } => {
                assert_eq!(*center, [80.0, 690.0]);
                assert_eq!(*radius, PROJECTILE_RADIUS);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }
}
