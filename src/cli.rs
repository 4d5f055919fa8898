//! Command-line interface.
//!
//! Every scenario parameter may be given as a flag; any that are missing are
//! asked for on the console.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kinesim::consts::{DT, GRAVITY};

/// Animate a block sliding down an incline or a launched projectile.
#[derive(Parser, Debug, Clone)]
#[command(name = "kinesim", version)]
pub struct Cli {
    #[command(subcommand)]
    pub scenario: Scenario,

    /// Gravitational acceleration
    #[arg(long, global = true, default_value_t = GRAVITY)]
    pub gravity: f32,

    /// Fixed simulation step in seconds
    #[arg(long, global = true, default_value_t = DT, env = "KINESIM_DT")]
    pub dt: f32,

    /// TrueType font for the on-screen readout; no readout without one
    #[arg(long, global = true, env = "KINESIM_FONT")]
    pub font: Option<PathBuf>,

    /// Run the simulation without opening a window
    #[arg(long, global = true)]
    pub headless: bool,

    /// Stop after this many ticks even if nothing terminal happened
    #[arg(long, global = true)]
    pub max_ticks: Option<u64>,

    /// Do not wait for Enter once the simulation ends
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Enable verbose logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Scenario {
    /// Block sliding down an inclined plane
    Incline {
        /// Plane angle in degrees, in [0, 90)
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<f32>,

        /// Coefficient of friction, not negative
        #[arg(long, allow_negative_numbers = true)]
        friction: Option<f32>,
    },
    /// Projectile launched over flat ground
    Projectile {
        /// Launch velocity
        #[arg(long, allow_negative_numbers = true)]
        speed: Option<f32>,

        /// Launch height above the ground, in [0, 780]
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f32>,

        /// Launch angle in degrees, negative is below the horizontal
        #[arg(long, allow_negative_numbers = true)]
        angle: Option<f32>,

        /// Keep running with the projectile resting on the ground instead of
        /// stopping at first contact
        #[arg(long)]
        rest_on_ground: bool,
    },
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Tick limit for this run. Headless runs are always bounded.
    pub fn tick_limit(&self) -> Option<u64> {
        match (self.max_ticks, self.headless) {
            (Some(max), _) => Some(max),
            (None, true) => Some(100_000),
            (None, false) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_projectile_with_negative_angle() {
        let cli = Cli::try_parse_from([
            "kinesim", "projectile", "--speed", "50", "--angle", "-15", "--headless",
        ])
        .unwrap();
        match cli.scenario {
            Scenario::Projectile {
                speed,
                height,
                angle,
                rest_on_ground,
            } => {
                assert_eq!(speed, Some(50.0));
                assert_eq!(height, None);
                assert_eq!(angle, Some(-15.0));
                assert!(!rest_on_ground);
            }
            other => panic!("unexpected scenario {other:?}"),
        }
        assert!(cli.headless);
        assert_eq!(cli.tick_limit(), Some(100_000));
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["kinesim", "incline", "--angle", "30", "--gravity", "3.7", "-vv"])
            .unwrap();
        assert_eq!(cli.gravity, 3.7);
        assert_eq!(cli.log_filter(), "trace");
        assert_eq!(cli.tick_limit(), None);
    }

    #[test]
    fn scenario_is_required() {
        assert!(Cli::try_parse_from(["kinesim"]).is_err());
    }
}
