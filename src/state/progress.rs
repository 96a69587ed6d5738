//! Step progress bar animation

use std::time::{Duration, Instant};

/// Eases the progress bar from its previous fill to a new target
#[derive(Debug, Clone, Copy)]
pub struct ProgressAnimation {
    from: u16,
    to: u16,
    started: Instant,
}

impl ProgressAnimation {
    /// Length of one transition
    pub const DURATION: Duration = Duration::from_millis(800);

    /// Animate from an empty bar to `target`
    pub fn new(target: u16) -> Self {
        Self::starting_at(target, Instant::now())
    }

    pub fn starting_at(target: u16, now: Instant) -> Self {
        Self {
            from: 0,
            to: target.min(100),
            started: now,
        }
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    /// Start a new transition from wherever the bar is right now
    pub fn retarget(&mut self, target: u16) {
        self.retarget_at(target, Instant::now());
    }

    pub fn retarget_at(&mut self, target: u16, now: Instant) {
        let target = target.min(100);
        if target == self.target() {
            return;
        }
        self.from = self.value_at(now);
        self.to = target;
        self.started = now;
    }

    /// Fill percentage at `now`
    pub fn value_at(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= Self::DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round().clamp(0.0, 100.0) as u16
    }

    pub fn value(&self) -> u16 {
        self.value_at(Instant::now())
    }

    pub fn is_animating_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < Self::DURATION
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }
}
