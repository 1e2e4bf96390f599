use std::time::{Duration, Instant};

/// Reports how much of the move budget is left. Polled before every expansion.
pub trait TimeLeft {
    fn time_left(&self) -> Duration;
}

impl<F> TimeLeft for F
    where F: Fn() -> Duration {
    fn time_left(&self) -> Duration {
        self()
    }
}

/// A wall-clock deadline.
#[derive(Copy, Clone, Debug)]
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self {
            end: Instant::now() + budget,
        }
    }
}

impl TimeLeft for Deadline {
    fn time_left(&self) -> Duration {
        self.end.saturating_duration_since(Instant::now())
    }
}

/// Never runs out; useful when only the depth should bound the search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unlimited;

impl TimeLeft for Unlimited {
    fn time_left(&self) -> Duration {
        Duration::MAX
    }
}
