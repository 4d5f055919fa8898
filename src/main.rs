//! Kinematics visualizer.
//!
//! Animates either a block sliding down an inclined plane, drawn with its
//! free-body diagram, or a projectile launched over flat ground. Parameters
//! come from the command line or console prompts; the simulation steps at a
//! fixed rate until a terminal condition or until the window is closed.

mod cli;
mod presentation;

use crate::cli::{Cli, Scenario};
use crate::presentation::PresentationContext;
use clap::Parser;
use kinesim::consts::*;
use kinesim::driver::{self, Exit, Headless, LoopConfig, Outcome, StatusLine};
use kinesim::intake::Intake;
use kinesim::{GroundPolicy, InclinePlaneKernel, ProjectileKernel, SimError, Simulation};
use std::io;
use std::process::ExitCode;
use std::time::Duration;

/// Window title for the incline scenario
const INCLINE_TITLE: &str = "Simulated Slide";
/// Window title for the projectile scenario
const PROJECTILE_TITLE: &str = "Projectile Motion";

/// Prints which color stands for which force in the incline drawing.
fn print_legend() {
    println!("Gravity force parallel to the plane. (Fgsin) [green]");
    println!("Normal force perpendicular to the plane. (Fn) [blue]");
    println!("Friction force parallel to the plane. (Ffcos) [yellow]");
    println!("Gravity force. (Fg) [red]");
}

/// Runs `sim` either headless or in a window until the loop exits, then
/// prints the final status.
fn simulate<S: Simulation>(cli: &Cli, sim: &mut S, title: &str, width: u32, height: u32) -> Result<Outcome, SimError> {
    let mut status = StatusLine::new(io::stdout());
    let config = LoopConfig {
        dt: cli.dt,
        sleep: if cli.headless {
            Duration::ZERO
        } else {
            driver::FRAME_SLEEP
        },
        max_ticks: cli.tick_limit(),
    };

    let outcome = if cli.headless {
        driver::run(sim, &mut Headless::default(), &mut status, config)?
    } else {
        let sdl = sdl2::init().map_err(SimError::rendering)?;
        let ttf = match cli.font {
            Some(_) => Some(sdl2::ttf::init().map_err(SimError::rendering)?),
            None => None,
        };
        let mut context =
            PresentationContext::open(&sdl, ttf.as_ref(), cli.font.as_deref(), title, width, height)?;
        driver::run(sim, &mut context, &mut status, config)?
    };

    status.finish(&outcome)?;
    match outcome.exit {
        Exit::Terminal(termination) => log::info!("{termination:?} after {} ticks", outcome.ticks),
        Exit::Closed => log::info!("window closed after {} ticks", outcome.ticks),
        Exit::TickLimit => log::warn!("stopped at the tick limit of {}", outcome.ticks),
    }
    Ok(outcome)
}

fn run(cli: &Cli) -> Result<(), SimError> {
    if !cli.dt.is_finite() || cli.dt <= 0.0 {
        return Err(SimError::invalid("dt", format!("{} must be a positive number", cli.dt)));
    }

    let mut intake = Intake::new(io::stdin().lock(), io::stdout());
    let outcome = match &cli.scenario {
        Scenario::Incline { angle, friction } => {
            let params = intake.incline(*angle, *friction, cli.gravity)?;
            let mut sim = InclinePlaneKernel::new(params);
            let forces = sim.forces();
            log::info!(
                "incline at {:.2} degrees, friction {:.3}: gravity along plane {:.3}, friction {:.3}",
                params.angle.to_degrees(),
                params.friction,
                forces.gravity_accel,
                forces.friction_force
            );
            print_legend();

            simulate(cli, &mut sim, INCLINE_TITLE, params.window_width(), PLANE_LENGTH as u32)?
        }
        Scenario::Projectile {
            speed,
            height,
            angle,
            rest_on_ground,
        } => {
            let params = intake.projectile(*speed, *height, *angle, cli.gravity)?;
            let policy = if *rest_on_ground {
                GroundPolicy::Rest
            } else {
                GroundPolicy::Halt
            };
            log::info!(
                "projectile at {:.2} from height {:.2}, angle {:.2} degrees ({policy:?} on ground)",
                params.speed,
                params.height,
                params.angle_degrees
            );

            let mut sim = ProjectileKernel::new(params, policy);
            let (width, height) = PROJECTILE_WINDOW;
            simulate(cli, &mut sim, PROJECTILE_TITLE, width, height)?
        }
    };

    if matches!(outcome.exit, Exit::Terminal(_)) && !cli.no_pause && !cli.headless {
        intake.pause()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter())).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
