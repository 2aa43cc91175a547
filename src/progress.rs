//! In-place progress bar drawn through the dispatcher.

use std::time::Instant;

use crate::dispatcher::Dispatcher;

const BAR_WIDTH: usize = 10;

/// State for the single active progress bar.
pub(crate) struct Progress {
    current: usize,
    max: usize,
    started: Instant,
}

impl Progress {
    fn render(&self) -> String {
        let ratio = if self.max > 0 {
            (self.current as f64 / self.max as f64).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let elapsed = self.started.elapsed().as_secs_f64();
        format!(
            "[{}/{}] {}{} {:.1}s",
            self.current,
            self.max,
            "=".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            elapsed
        )
    }
}

impl Dispatcher {
    /// Start drawing a progress bar at `current` out of `max`.
    ///
    /// The bar redraws in place on the colored channel with a carriage
    /// return; it stops automatically once `current` reaches `max`.
    pub fn start_progress(&mut self, current: usize, max: usize) {
        self.progress = Some(Progress {
            current,
            max,
            started: Instant::now(),
        });
        self.draw_progress();
    }

    /// Advance the bar by one. No-op when no bar is active.
    pub fn inc_progress(&mut self) {
        let Some(progress) = self.progress.as_mut() else {
            return;
        };
        progress.current += 1;
        self.draw_progress();
        self.finish_if_done();
    }

    /// Move the bar to an absolute position. No-op when no bar is active.
    pub fn set_progress(&mut self, current: usize) {
        let Some(progress) = self.progress.as_mut() else {
            return;
        };
        progress.current = current;
        self.draw_progress();
        self.finish_if_done();
    }

    /// Stop the active bar and end its line.
    pub fn stop_progress(&mut self) {
        if self.progress.take().is_some() {
            self.emit("\n");
        }
    }

    fn draw_progress(&mut self) {
        let Some(line) = self.progress.as_ref().map(|p| format!("\r{}", p.render())) else {
            return;
        };
        self.emit(&line);
    }

    fn finish_if_done(&mut self) {
        let done = self
            .progress
            .as_ref()
            .is_some_and(|p| p.current >= p.max);
        if done {
            self.stop_progress();
        }
    }
}
