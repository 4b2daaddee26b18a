use std::time::Instant;

/// Wall-clock timer around the transition step.
///
/// The driver reports the elapsed seconds on stderr, keeping stdout free for
/// the encoded image.
pub struct StepTimer {
    start: Instant,
}

impl StepTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn finish(self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
