use crate::frame::Frame;
use crate::library::{add, scale};

/// Position and velocity of the single moving body. y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
}

impl KinematicState {
    pub fn new(position: [f32; 2], velocity: [f32; 2]) -> KinematicState {
        KinematicState { position, velocity }
    }

    /// Moves the body by its current velocity over `dt`.
    pub fn advance(&mut self, dt: f32) {
        self.position = add(self.position, scale(self.velocity, dt));
    }

    /// Adds `accel * dt` to the velocity.
    pub fn accelerate(&mut self, accel: [f32; 2], dt: f32) {
        self.velocity = add(self.velocity, scale(accel, dt));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Running,
    /// The body reached the ground line.
    GroundContact,
    /// Friction is at least as strong as gravity along the plane.
    Stalled,
}

impl Termination {
    pub fn is_terminal(self) -> bool {
        self != Termination::Running
    }
}

/// Fixed-step contract shared by both scenario kernels.
///
/// Once `step` returns a terminal value every later call returns the same
/// value and leaves the state untouched.
pub trait Simulation {
    fn step(&mut self, dt: f32) -> Termination;

    fn state(&self) -> &KinematicState;

    fn termination(&self) -> Termination;

    /// Simulated seconds integrated so far.
    fn elapsed(&self) -> f32;

    /// Drawable description of the current state.
    fn frame(&self) -> Frame;

    /// Extra text for the on-screen overlay, one entry per line.
    fn hud(&self) -> Vec<String> {
        vec![format!("t = {:.2} s", self.elapsed())]
    }
}
