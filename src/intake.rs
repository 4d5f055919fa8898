//! Console parameter intake.
//!
//! Values already supplied on the command line are used as-is; anything
//! missing is prompted for in a fixed order, one number per line.

use crate::error::SimError;
use crate::incline::InclineParams;
use crate::projectile::ProjectileParams;
use std::io::{BufRead, Write};

pub const ANGLE_PROMPT: &str = "Enter a value for the angle of the inclined plane (no [-] value): ";
pub const FRICTION_PROMPT: &str = "Enter a value for the coefficient of friction (no [-] value): ";
pub const SPEED_PROMPT: &str = "Enter a value for launch velocity: ";
pub const HEIGHT_PROMPT: &str = "Enter a value for height (Max. Value: 780): ";
pub const LAUNCH_ANGLE_PROMPT: &str =
    "Enter a value for angle [Below (-) or above (+) the horizontal]: ";

pub struct Intake<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Intake<R, W> {
    pub fn new(input: R, output: W) -> Intake<R, W> {
        Intake { input, output }
    }

    /// Returns `given` if present, otherwise prints `prompt` and parses one
    /// line of input.
    pub fn value(&mut self, field: &'static str, prompt: &str, given: Option<f32>) -> Result<f32, SimError> {
        match given {
            Some(value) => Ok(value),
            None => self.prompt_f32(field, prompt),
        }
    }

    pub fn prompt_f32(&mut self, field: &'static str, prompt: &str) -> Result<f32, SimError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SimError::invalid(field, "no input provided"));
        }
        let trimmed = line.trim();
        trimmed
            .parse::<f32>()
            .map_err(|_| SimError::invalid(field, format!("{trimmed:?} is not a number")))
    }

    pub fn incline(&mut self, angle: Option<f32>, friction: Option<f32>, gravity: f32) -> Result<InclineParams, SimError> {
        let angle = self.value("angle", ANGLE_PROMPT, angle)?;
        let friction = self.value("friction coefficient", FRICTION_PROMPT, friction)?;
        InclineParams::from_degrees(angle, friction, gravity)
    }

    pub fn projectile(
        &mut self,
        speed: Option<f32>,
        height: Option<f32>,
        angle: Option<f32>,
        gravity: f32,
    ) -> Result<ProjectileParams, SimError> {
        let speed = self.value("launch velocity", SPEED_PROMPT, speed)?;
        let height = self.value("height", HEIGHT_PROMPT, height)?;
        let angle = self.value("angle", LAUNCH_ANGLE_PROMPT, angle)?;
        ProjectileParams::new(speed, height, angle, gravity)
    }

    /// Blocks until a line (or end of input) is read.
    pub fn pause(&mut self) -> Result<(), SimError> {
        write!(self.output, "Press Enter to continue . . . ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
