//! Block sliding down an inclined plane.
//!
//! Gravity and friction along the plane are computed once. Each tick the block
//! moves by its previous velocity, then the single net along-plane force is
//! projected onto x and y by the plane angle.

use crate::consts::*;
use crate::error::{SimError, require_finite};
use crate::frame::Frame;
use crate::geometry::{incline_frame, plane_vertices};
use crate::state::{KinematicState, Simulation, Termination};
use std::f32::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclineParams {
    pub angle: f32,
    pub friction: f32,
    pub gravity: f32,
}

impl InclineParams {
    /// Validates an angle given in degrees; the plane may not slope downward
    /// or stand vertical.
    pub fn from_degrees(angle: f32, friction: f32, gravity: f32) -> Result<InclineParams, SimError> {
        let angle = require_finite("angle", angle)?.to_radians();
        InclineParams::new(angle, friction, gravity)
    }

    pub fn new(angle: f32, friction: f32, gravity: f32) -> Result<InclineParams, SimError> {
        let angle = require_finite("angle", angle)?;
        if !(0.0..FRAC_PI_2).contains(&angle) {
            return Err(SimError::invalid(
                "angle",
                format!("{:.3} degrees is outside [0, 90)", angle.to_degrees()),
            ));
        }
        let friction = require_finite("friction coefficient", friction)?;
        if friction < 0.0 {
            return Err(SimError::invalid("friction coefficient", "must not be negative"));
        }
        let gravity = require_finite("gravity", gravity)?;
        if gravity <= 0.0 {
            return Err(SimError::invalid("gravity", "must be positive"));
        }
        Ok(InclineParams {
            angle,
            friction,
            gravity,
        })
    }

    pub fn forces(&self) -> DerivedForces {
        let (sin, cos) = self.angle.sin_cos();
        DerivedForces {
            gravity_accel: self.gravity * sin,
            friction_force: self.friction * self.gravity * cos,
            holds: self.friction * cos >= sin,
        }
    }

    /// Width of a window that fits the whole plane.
    pub fn window_width(&self) -> u32 {
        ((PLANE_LENGTH * self.angle.cos()) as u32).max(1)
    }
}

/// Along-plane magnitudes, constant for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedForces {
    pub gravity_accel: f32,
    pub friction_force: f32,
    /// Friction can hold the block in place (`μ·cos a >= sin a`), decided
    /// without the gravity factor so rounding cannot flip it.
    pub holds: bool,
}

impl DerivedForces {
    /// Net along-plane force; never positive when friction holds.
    pub fn net(&self) -> f32 {
        if self.holds {
            return 0f32.min(self.gravity_accel - self.friction_force);
        }
        self.gravity_accel - self.friction_force
    }
}

#[derive(Debug, Clone)]
pub struct InclinePlaneKernel {
    params: InclineParams,
    forces: DerivedForces,
    state: KinematicState,
    termination: Termination,
    ticks: u64,
    elapsed: f32,
}

impl InclinePlaneKernel {
    /// Places the block one block-length below the top of the plane, at rest.
    pub fn new(params: InclineParams) -> InclinePlaneKernel {
        let [_, top, _] = plane_vertices(params.angle);
        let position = [
            top[0] - BLOCK_SIZE * params.angle.cos(),
            top[1] + BLOCK_SIZE * params.angle.sin(),
        ];
        InclinePlaneKernel {
            params,
            forces: params.forces(),
            state: KinematicState::new(position, [0.0, 0.0]),
            termination: Termination::Running,
            ticks: 0,
            elapsed: 0.0,
        }
    }

    pub fn forces(&self) -> &DerivedForces {
        &self.forces
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn evaluate(&self) -> Termination {
        if self.state.position[1] >= PLANE_GROUND {
            Termination::GroundContact
        } else if self.state.velocity[0] >= 0.0 {
            Termination::Stalled
        } else {
            Termination::Running
        }
    }
}

impl Simulation for InclinePlaneKernel {
    fn step(&mut self, dt: f32) -> Termination {
        if self.termination.is_terminal() {
            return self.termination;
        }
        let (sin, cos) = self.params.angle.sin_cos();
        let net = self.forces.net();

        self.state.advance(dt);
        self.state.accelerate([-net * cos, net * sin], dt);
        self.ticks += 1;
        self.elapsed += dt;

        self.termination = self.evaluate();
        match self.termination {
            Termination::GroundContact => {
                log::info!("block reached the ground after {:.3} s", self.elapsed)
            }
            Termination::Stalled => {
                log::info!("friction exceeds gravity, block will not move")
            }
            Termination::Running => {}
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
        incline_frame(self.state.position, self.params.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kernel(degrees: f32, friction: f32) -> InclinePlaneKernel {
        InclinePlaneKernel::new(InclineParams::from_degrees(degrees, friction, GRAVITY).unwrap())
    }

    fn run(kernel: &mut InclinePlaneKernel, max_ticks: u32) -> Termination {
        for _ in 0..max_ticks {
            let termination = kernel.step(DT);
            if termination.is_terminal() {
                return termination;
            }
        }
        kernel.termination()
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(InclineParams::from_degrees(-1.0, 0.1, GRAVITY).is_err());
        assert!(InclineParams::from_degrees(90.0, 0.1, GRAVITY).is_err());
        assert!(InclineParams::from_degrees(30.0, -0.1, GRAVITY).is_err());
        assert!(InclineParams::from_degrees(30.0, 0.1, 0.0).is_err());
        assert!(InclineParams::from_degrees(f32::NAN, 0.1, GRAVITY).is_err());
        assert!(InclineParams::from_degrees(0.0, 0.0, GRAVITY).is_ok());
    }

    #[test]
    fn starts_at_rest_below_the_top_vertex() {
        let k = kernel(30.0, 0.1);
        let angle = 30f32.to_radians();
        let expected = [
            800.0 * angle.cos() - 50.0 * angle.cos(),
            800.0 - 800.0 * angle.sin() + 50.0 * angle.sin(),
        ];
        assert!((k.state().position[0] - expected[0]).abs() < 1e-3);
        assert!((k.state().position[1] - expected[1]).abs() < 1e-3);
        assert_eq!(k.state().velocity, [0.0, 0.0]);
        assert_eq!(k.termination(), Termination::Running);
    }

    #[test]
    fn first_tick_matches_closed_form() {
        let mut k = kernel(30.0, 0.1);
        let start = k.state().position;
        let angle = 30f32.to_radians();
        let net = 9.8 * angle.sin() - 0.1 * 9.8 * angle.cos();

        assert_eq!(k.step(0.016), Termination::Running);
        assert!((k.state().velocity[0] + net * angle.cos() * 0.016).abs() < 1e-4);
        assert!((k.state().velocity[1] - net * angle.sin() * 0.016).abs() < 1e-4);
        // position moves with the pre-step (zero) velocity
        assert_eq!(k.state().position, start);
        k.step(0.016);
        assert!(k.state().position[0] < start[0]);
        assert!(k.state().position[1] > start[1]);
    }

    #[test]
    fn flat_plane_stalls_on_first_tick() {
        let mut k = kernel(0.0, 0.0);
        assert_eq!(k.step(DT), Termination::Stalled);
        assert_eq!(k.ticks(), 1);
    }

    #[test]
    fn friction_equal_to_tangent_stalls_on_first_tick() {
        let mut holding = 0;
        for tenths in 1..890 {
            let angle = (tenths as f32 / 10.0).to_radians();
            let params = InclineParams::new(angle, angle.tan(), GRAVITY).unwrap();
            if !params.forces().holds {
                continue;
            }
            holding += 1;
            let mut k = InclinePlaneKernel::new(params);
            assert_eq!(k.step(DT), Termination::Stalled, "angle {} tenths of a degree", tenths);
            assert!(k.forces().net() <= 0.0);
        }
        assert!(holding > 0);
    }

    #[test]
    fn shallow_frictionless_plane_keeps_sliding() {
        let mut k = kernel(0.5, 0.0);
        assert_eq!(k.step(DT), Termination::Running);
        assert!(k.state().velocity[0] < 0.0);
    }

    #[test]
    fn steep_plane_reaches_ground_and_freezes() {
        let mut k = kernel(45.0, 0.2);
        assert_eq!(run(&mut k, 10_000), Termination::GroundContact);
        assert!(k.state().position[1] >= PLANE_GROUND);

        let frozen = *k.state();
        let elapsed = k.elapsed();
        assert_eq!(k.step(DT), Termination::GroundContact);
        assert_eq!(*k.state(), frozen);
        assert_eq!(k.elapsed(), elapsed);
    }

    #[test]
    fn ground_contact_wins_over_stall() {
        let mut k = kernel(45.0, 0.0);
        k.state.position[1] = PLANE_GROUND;
        k.state.velocity = [0.0, 0.0];
        assert_eq!(k.evaluate(), Termination::GroundContact);
    }

    proptest! {
        #[test]
        fn friction_at_least_tangent_stalls(degrees in 0.0f32..89.0, excess in 0.001f32..2.0) {
            let angle = degrees.to_radians();
            let friction = angle.tan() + excess;
            let mut k = InclinePlaneKernel::new(InclineParams::new(angle, friction, GRAVITY).unwrap());
            prop_assert_eq!(run(&mut k, 10), Termination::Stalled);
            prop_assert!(k.ticks() <= 1);
        }

        #[test]
        fn identical_inputs_give_identical_runs(degrees in 1.0f32..89.0, friction in 0.0f32..1.0) {
            let mut a = kernel(degrees, friction);
            let mut b = kernel(degrees, friction);
            for _ in 0..200 {
                prop_assert_eq!(a.step(DT), b.step(DT));
                prop_assert_eq!(a.state(), b.state());
            }
        }
    }
}
