//! Stepper application state and logic.

use crate::binary::{Bit, RippleStep};
use crate::calc::RippleTrace;

/// Stepper application state.
pub struct StepperApp {
    /// The recorded pass being replayed.
    pub trace: RippleTrace,
    /// Number of positions evaluated so far.
    pub applied: usize,
    /// Is the stepper advancing on its own?
    pub running: bool,
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
    /// Step log scroll offset.
    pub log_scroll: usize,
}

impl StepperApp {
    /// Create a stepper positioned before the least significant bit.
    pub fn new(trace: RippleTrace) -> Self {
        Self {
            trace,
            applied: 0,
            running: false,
            should_quit: false,
            status: "Ready. Press 's' to step, 'r' to run, 'q' to quit.".into(),
            log_scroll: 0,
        }
    }

    /// True once every position has been evaluated.
    pub fn is_finished(&self) -> bool {
        self.applied >= self.trace.width()
    }

    /// Evaluate the next position.
    pub fn step(&mut self) {
        if self.is_finished() {
            self.status = format!("Done: {}", self.trace.calculation.result_text());
            self.running = false;
            return;
        }

        let step = self.trace.steps[self.applied];
        self.applied += 1;
        let label = self.trace.state_label();
        self.status = format!(
            "pos {}: {} {} {} with {}={} -> {}, {}={}",
            step.position,
            step.x,
            self.trace.calculation.op,
            step.y,
            label,
            step.state_in,
            step.output,
            label,
            step.state_out,
        );
    }

    /// Advance continuously until the pass is complete.
    pub fn run(&mut self) {
        self.running = true;
        self.status = "Running...".into();
    }

    /// Run one iteration of continuous stepping.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        if self.is_finished() {
            self.running = false;
            self.status = format!("Finished after {} positions", self.applied);
            return;
        }

        self.step();
    }

    /// Rewind to before the first position.
    pub fn reset(&mut self) {
        self.applied = 0;
        self.running = false;
        self.log_scroll = 0;
        self.status = "Reset. Ready.".into();
    }

    /// The last evaluated step, if any.
    pub fn current_step(&self) -> Option<&RippleStep> {
        self.applied.checked_sub(1).and_then(|i| self.trace.steps.get(i))
    }

    /// State bit waiting to enter the next position.
    pub fn pending_state(&self) -> Bit {
        self.current_step().map(|s| s.state_out).unwrap_or(Bit::Zero)
    }

    /// Output bits known so far, most significant first, padded to the full
    /// pass width with `None` for positions not yet evaluated.
    pub fn partial_output(&self) -> Vec<Option<Bit>> {
        (0..self.trace.width())
            .rev()
            .map(|pos| if pos < self.applied { self.trace.output_at(pos) } else { None })
            .collect()
    }

    /// Steps evaluated so far, most recent last.
    pub fn applied_steps(&self) -> &[RippleStep] {
        &self.trace.steps[..self.applied]
    }
}

/// Run the stepper on a recorded pass.
pub fn run_stepper(trace: RippleTrace) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = StepperApp::new(trace);

    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        // Slow enough to watch the chain advance while running
        let timeout = if app.running {
            Duration::from_millis(400)
        } else {
            Duration::from_millis(50)
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('s') => {
                            app.running = false;
                            app.step();
                        }
                        KeyCode::Char('r') => app.run(),
                        KeyCode::Char('p') => {
                            app.running = false;
                            app.status = "Paused.".into();
                        }
                        KeyCode::Char('x') => app.reset(),
                        KeyCode::Up => {
                            app.log_scroll = app.log_scroll.saturating_sub(1);
                        }
                        KeyCode::Down => {
                            if app.log_scroll + 1 < app.applied {
                                app.log_scroll += 1;
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.running {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::BitSequence;
    use crate::calc::Operation;

    fn app(op: Operation, x: &str, y: &str) -> StepperApp {
        let x = BitSequence::parse(x).unwrap();
        let y = BitSequence::parse(y).unwrap();
        StepperApp::new(RippleTrace::run(op, x, y).unwrap())
    }

    #[test]
    fn test_step_through_addition() {
        let mut app = app(Operation::Add, "101", "11");
        assert_eq!(app.partial_output(), vec![None, None, None]);
        assert_eq!(app.pending_state(), Bit::Zero);

        app.step();
        assert_eq!(app.applied, 1);
        assert_eq!(app.partial_output(), vec![None, None, Some(Bit::Zero)]);
        assert_eq!(app.pending_state(), Bit::One);
        assert_eq!(app.status, "pos 0: 1 + 1 with c=0 -> 0, c=1");

        app.step();
        app.step();
        assert!(app.is_finished());
        app.step();
        assert_eq!(app.status, "Done: 1000");
    }

    #[test]
    fn test_run_and_tick() {
        let mut app = app(Operation::Subtract, "1000", "1");
        app.run();
        while app.running {
            app.tick();
        }
        assert!(app.is_finished());
        assert_eq!(app.applied_steps().len(), 4);
        assert_eq!(app.status, "Finished after 4 positions");
    }

    #[test]
    fn test_reset() {
        let mut app = app(Operation::Add, "1", "1");
        app.step();
        app.reset();
        assert_eq!(app.applied, 0);
        assert!(app.current_step().is_none());
        assert!(!app.running);
    }
}
