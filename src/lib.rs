//! Kinematics visualizer core.
//!
//! Two single-body scenarios share one fixed-step contract: a block sliding
//! down an inclined plane and a projectile launched over flat ground. The
//! kernels advance a [`state::KinematicState`] once per tick, geometry is
//! derived from that state, and the [`driver`] hands each [`frame::Frame`] to
//! whatever [`driver::Presenter`] is drawing it.

pub mod driver;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod incline;
pub mod intake;
pub mod projectile;
pub mod state;

pub use error::SimError;
pub use incline::{InclineParams, InclinePlaneKernel};
pub use projectile::{GroundPolicy, ProjectileKernel, ProjectileParams};
pub use state::{KinematicState, Simulation, Termination};

/// Layout and physics constants shared by both scenarios.
///
/// Coordinates are screen pixels with y growing downward.
pub mod consts {
    use sdl2::pixels::Color;

    /// Standard gravitational acceleration
    pub const GRAVITY: f32 = 9.8;
    /// Fixed tick size, roughly 60 Hz
    pub const DT: f32 = 0.016;

    /// Length of the incline's hypotenuse and height of its window
    pub const PLANE_LENGTH: f32 = 800.0;
    /// y of the incline's bottom edge
    pub const PLANE_GROUND: f32 = 800.0;
    /// Side of the sliding block
    pub const BLOCK_SIZE: f32 = 50.0;
    /// Drawn length of every force vector
    pub const VECTOR_LENGTH: f32 = 30.0;

    /// y at which the projectile is resting on the ground
    pub const PROJECTILE_GROUND: f32 = 780.0;
    /// x of the launch point
    pub const LAUNCH_X: f32 = 70.0;
    /// Radius of the drawn projectile
    pub const PROJECTILE_RADIUS: f32 = 10.0;
    /// Width and height of the projectile window
    pub const PROJECTILE_WINDOW: (u32, u32) = (1600, 800);
    /// Arena border as (x, y, width, height)
    pub const BORDER: (i32, i32, u32, u32) = (50, 50, 1500, 700);
    /// Outline width drawn outside the arena border
    pub const BORDER_THICKNESS: u32 = 2;

    /// Fill of the inclined plane
    pub const PLANE_COLOR: Color = Color::RGB(141, 141, 141);
    /// Fill of the sliding block
    pub const BLOCK_COLOR: Color = Color::RGB(255, 0, 0);
    /// Fill of the projectile
    pub const PROJECTILE_COLOR: Color = Color::RED;
    /// Gravity component along the plane
    pub const GRAVITY_COLOR: Color = Color::GREEN;
    /// Normal force
    pub const NORMAL_COLOR: Color = Color::BLUE;
    /// Friction along the plane
    pub const FRICTION_COLOR: Color = Color::YELLOW;
    /// Full weight
    pub const WEIGHT_COLOR: Color = Color::RED;
    /// Outline of the projectile arena
    pub const BORDER_COLOR: Color = Color::WHITE;
    /// Clear color of every frame
    pub const BACKGROUND: Color = Color::BLACK;
}

pub mod library {
    pub fn add(vec1: [f32; 2], vec2: [f32; 2]) -> [f32; 2] {
        [vec1[0] + vec2[0], vec1[1] + vec2[1]]
    }

    pub fn scale(vec: [f32; 2], factor: f32) -> [f32; 2] {
        [vec[0] * factor, vec[1] * factor]
    }

    pub fn find_vector(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
        [y[0] - x[0], y[1] - x[1]]
    }

    /// Point halfway along the segment from `x` to `y`.
    pub fn midpoint(x: [f32; 2], y: [f32; 2]) -> [f32; 2] {
        add(x, scale(find_vector(x, y), 0.5))
    }

    /// Offset of `length` in screen space for a direction given by the
    /// incline angle, using the same sign conventions as the plane drawing.
    pub fn along(angle: f32, length: f32) -> [f32; 2] {
        [length * angle.cos(), -length * angle.sin()]
    }

}
