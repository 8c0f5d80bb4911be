use dominant_core::Observer;
use log::{Level, log, log_enabled};

use crate::traits::HasEigenvalue;

/// Observer that logs each event through the `log` facade.
///
/// Events are logged at [`Level::Debug`] by default. The observer never
/// requests an action.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
    every: usize,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            every: 1,
        }
    }
}

impl LogObserver {
    /// Creates an observer that logs every event at debug level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs only every `n`-th iteration; zero is treated as one.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    fn should_log(&self, iter: usize) -> bool {
        iter % self.every == 0
    }
}

impl<E: HasEigenvalue, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.should_log(event.iter()) && log_enabled!(self.level) {
            log!(
                self.level,
                "iter {:>6}: eigenvalue = {:.12}, delta = {:.3e}",
                event.iter(),
                event.eigenvalue(),
                event.delta()
            );
        }
        None
    }
}
