//! The per-tick loop: drain events, step, derive a frame, render, sleep.

use crate::error::SimError;
use crate::frame::Frame;
use crate::state::{Simulation, Termination};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Target loop rate of the windowed driver.
pub const FRAME_SLEEP: Duration = Duration::from_millis(16);

/// Anything that can show a frame and report a close request.
pub trait Presenter {
    /// Drains every pending event. Returns true once the user asked to quit.
    fn poll_closed(&mut self) -> bool;

    fn render(&mut self, frame: &Frame, hud: &[String]) -> Result<(), SimError>;
}

/// Presenter that draws nothing and never closes.
#[derive(Debug, Default)]
pub struct Headless {
    pub frames: u64,
}

impl Presenter for Headless {
    fn poll_closed(&mut self) -> bool {
        false
    }

    fn render(&mut self, _frame: &Frame, _hud: &[String]) -> Result<(), SimError> {
        self.frames += 1;
        Ok(())
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Terminal(Termination),
    /// The window was closed before any terminal condition.
    Closed,
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub exit: Exit,
    pub ticks: u64,
    pub elapsed: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    pub dt: f32,
    pub sleep: Duration,
    pub max_ticks: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            dt: crate::consts::DT,
            sleep: FRAME_SLEEP,
            max_ticks: None,
        }
    }
}

/// Carriage-return status line that only redraws when the whole-second count
/// changes.
pub struct StatusLine<W> {
    out: W,
    shown: Option<u64>,
}

impl<W: Write> StatusLine<W> {
    pub fn new(out: W) -> StatusLine<W> {
        StatusLine { out, shown: None }
    }

    pub fn update(&mut self, elapsed: f32) -> Result<(), SimError> {
        let seconds = elapsed as u64;
        if self.shown != Some(seconds) {
            write!(self.out, "\rSimulated time: {seconds}s")?;
            self.out.flush()?;
            self.shown = Some(seconds);
        }
        Ok(())
    }

    pub fn finish(&mut self, outcome: &Outcome) -> Result<(), SimError> {
        writeln!(self.out, "\rTime: {:.3}s", outcome.elapsed)?;
        if outcome.exit == Exit::Terminal(Termination::Stalled) {
            writeln!(self.out, "Block will not move (Friction force > Gravity force).")?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Runs `sim` until it reaches a terminal state, the presenter is closed, or
/// the tick limit is hit. The terminal frame is rendered before returning.
pub fn run<S, P, W>(
    sim: &mut S,
    presenter: &mut P,
    status: &mut StatusLine<W>,
    config: LoopConfig,
) -> Result<Outcome, SimError>
where
    S: Simulation,
    P: Presenter,
    W: Write,
{
    let mut ticks: u64 = 0;
    let exit = 'running: loop {
        if presenter.poll_closed() {
            break 'running Exit::Closed;
        }
        if config.max_ticks.is_some_and(|max| ticks >= max) {
            break 'running Exit::TickLimit;
        }

        let termination = sim.step(config.dt);
        ticks += 1;

        presenter.render(&sim.frame(), &sim.hud())?;
        status.update(sim.elapsed())?;

        if termination.is_terminal() {
            break 'running Exit::Terminal(termination);
        }
        if !config.sleep.is_zero() {
            thread::sleep(config.sleep);
        }
    };

    let outcome = Outcome {
        exit,
        ticks,
        elapsed: sim.elapsed(),
    };
    log::debug!("loop finished: {outcome:?}");
    Ok(outcome)
}
