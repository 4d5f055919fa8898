//! Point projectile launched over flat ground.

use crate::consts::*;
use crate::error::{SimError, require_finite, require_range};
use crate::frame::Frame;
use crate::geometry::projectile_frame;
use crate::state::{KinematicState, Simulation, Termination};

/// What happens once the projectile touches the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundPolicy {
    /// Stop the run with [`Termination::GroundContact`].
    #[default]
    Halt,
    /// Keep integrating at the clamped height until the window is closed.
    /// Vertical velocity keeps growing while the body sits on the ground.
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileParams {
    pub speed: f32,
    /// Launch height above the ground line
    pub height: f32,
    /// Positive is above the horizontal
    pub angle_degrees: f32,
    pub gravity: f32,
}

impl ProjectileParams {
    pub fn new(speed: f32, height: f32, angle_degrees: f32, gravity: f32) -> Result<ProjectileParams, SimError> {
        let speed = require_finite("launch velocity", speed)?;
        if speed < 0.0 {
            return Err(SimError::invalid("launch velocity", "must not be negative"));
        }
        let height = require_range("height", height, 0.0, PROJECTILE_GROUND)?;
        let angle_degrees = require_finite("angle", angle_degrees)?;
        let gravity = require_finite("gravity", gravity)?;
        if gravity <= 0.0 {
            return Err(SimError::invalid("gravity", "must be positive"));
        }
        Ok(ProjectileParams {
            speed,
            height,
            angle_degrees,
            gravity,
        })
    }

    pub fn initial_state(&self) -> KinematicState {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        KinematicState::new(
            [LAUNCH_X, PROJECTILE_GROUND - self.height],
            [self.speed * cos, -self.speed * sin],
        )
    }
}

#[derive(Debug, Clone)]
pub struct ProjectileKernel {
    params: ProjectileParams,
    policy: GroundPolicy,
    state: KinematicState,
    termination: Termination,
    landed: bool,
    ticks: u64,
    elapsed: f32,
}

impl ProjectileKernel {
    pub fn new(params: ProjectileParams, policy: GroundPolicy) -> ProjectileKernel {
        ProjectileKernel {
            params,
            policy,
            state: params.initial_state(),
            termination: Termination::Running,
            landed: false,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the projectile has touched the ground at least once.
    pub fn landed(&self) -> bool {
        self.landed
    }

    pub fn height_above_ground(&self) -> f32 {
        PROJECTILE_GROUND - self.state.position[1]
    }
}

impl Simulation for ProjectileKernel {
    fn step(&mut self, dt: f32) -> Termination {
        if self.termination.is_terminal() {
            return self.termination;
        }
        self.state.advance(dt);
        self.state.accelerate([0.0, self.params.gravity], dt);
        self.ticks += 1;
        self.elapsed += dt;

        if self.state.position[1] >= PROJECTILE_GROUND {
            self.state.position[1] = PROJECTILE_GROUND;
            self.state.velocity[0] = 0.0;
            if !self.landed {
                log::info!(
                    "projectile landed at x = {:.1} after {:.3} s",
                    self.state.position[0],
                    self.elapsed
                );
                self.landed = true;
            }
            if self.policy == GroundPolicy::Halt {
                self.termination = Termination::GroundContact;
            }
        }
        self.termination
    }

    fn state(&self) -> &KinematicState {
        &self.state
    }

    fn termination(&self) -> Termination {
        self.termination
    }

    fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn frame(&self) -> Frame {
        projectile_frame(self.state.position)
    }

    fn hud(&self) -> Vec<String> {
        vec![
            format!("t = {:.2} s", self.elapsed),
            format!("vertical velocity: {:.2}", -self.state.velocity[1]),
            format!("horizontal velocity: {:.2}", self.state.velocity[0]),
            format!("height: {:.2}", self.height_above_ground()),
        ]
    }
}
