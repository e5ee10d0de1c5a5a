use std::time::{Duration, Instant};

/// Which periodic signal fired.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickKind {
    Movement,
    Food,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum TimerState {
    Stopped,
    /// Running, first deadline is taken from the next poll.
    Armed,
    Waiting(Instant),
}

/// A stoppable fixed-period timer polled with caller-supplied instants.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: Duration,
    state: TimerState,
}

impl PeriodicTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            state: TimerState::Stopped,
        }
    }

    /// Starts (or restarts) the timer; the first tick is one period after the
    /// next poll.
    pub fn start(&mut self) {
        self.state = TimerState::Armed;
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state != TimerState::Stopped
    }

    /// Returns the instant this timer fires at, once it has been polled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Waiting(due) => Some(due),
            TimerState::Stopped | TimerState::Armed => None,
        }
    }

    /// Returns the deadline that fired, if the timer is due at `now`.
    ///
    /// Fires at most once per call. A timer that fell a whole period behind
    /// re-anchors on `now` instead of replaying the missed ticks.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        match self.state {
            TimerState::Stopped => None,
            TimerState::Armed => {
                self.state = TimerState::Waiting(now + self.period);
                None
            }
            TimerState::Waiting(due) if now >= due => {
                let next = due + self.period;
                self.state = if next <= now {
                    TimerState::Waiting(now + self.period)
                } else {
                    TimerState::Waiting(next)
                };
                Some(due)
            }
            TimerState::Waiting(_) => None,
        }
    }
}

/// Movement and food-spawn timers driven from one event loop.
#[derive(Debug, Clone)]
pub struct Scheduler {
    movement: PeriodicTimer,
    food: PeriodicTimer,
}

impl Scheduler {
    /// Creates a running scheduler.
    #[must_use]
    pub fn new(movement_period: Duration, food_period: Duration) -> Self {
        let mut scheduler = Self {
            movement: PeriodicTimer::new(movement_period),
            food: PeriodicTimer::new(food_period),
        };
        scheduler.start();
        scheduler
    }

    pub fn start(&mut self) {
        self.movement.start();
        self.food.start();
    }

    pub fn stop(&mut self) {
        self.movement.stop();
        self.food.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.movement.is_running() || self.food.is_running()
    }

    /// Collects the ticks due at `now`, oldest deadline first. Movement goes
    /// first on a tie.
    pub fn due(&mut self, now: Instant) -> Vec<TickKind> {
        let movement = self.movement.poll(now);
        let food = self.food.poll(now);

        match (movement, food) {
            (Some(m), Some(f)) if f < m => vec![TickKind::Food, TickKind::Movement],
            (Some(_), Some(_)) => vec![TickKind::Movement, TickKind::Food],
            (Some(_), None) => vec![TickKind::Movement],
            (None, Some(_)) => vec![TickKind::Food],
            (None, None) => Vec::new(),
        }
    }

    /// Returns the earliest pending deadline across both timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.movement.deadline(), self.food.deadline()) {
            (Some(m), Some(f)) => Some(m.min(f)),
            (m, f) => m.or(f),
        }
    }
}
