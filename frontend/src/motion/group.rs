use super::easing::{Curve, Easing};
use super::error::MotionError;
use super::state::VisualState;

/// A set of targets animated together from one state to another.
///
/// Built with the consuming builder methods, then handed to the scheduler
/// behind an `Rc`, after which it is never mutated.
#[derive(Clone, Debug)]
pub struct AnimationGroup<T> {
    label: String,
    targets: Vec<T>,
    from: VisualState,
    to: VisualState,
    duration: f64,
    easing: Easing,
    stagger: f64,
    delay: f64,
}

impl<T> AnimationGroup<T> {
    pub fn new(label: impl Into<String>, targets: Vec<T>) -> Self {
        Self {
            label: label.into(),
            targets,
            from: VisualState::hidden(),
            to: VisualState::IDENTITY,
            duration: 0.8,
            easing: Easing::default(),
            stagger: 0.0,
            delay: 0.0,
        }
    }

    pub fn from(mut self, state: VisualState) -> Self {
        self.from = state;
        self
    }

    pub fn to(mut self, state: VisualState) -> Self {
        self.to = state;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Drop the targets `keep` rejects. The survivors are re-indexed, so
    /// their stagger starts from the first one kept.
    pub fn retain_targets(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.targets.retain(keep);
        self
    }

    pub fn start_state(&self) -> VisualState {
        self.from
    }

    pub fn end_state(&self) -> VisualState {
        self.to
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if self.targets.is_empty() {
            return Err(MotionError::MissingTarget(self.label.clone()));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(MotionError::InvalidDuration(self.duration));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(MotionError::InvalidDuration(self.delay));
        }
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(MotionError::InvalidStagger(self.stagger));
        }
        Ok(())
    }

    /// Where target `index` starts on the group timeline. Targets start in
    /// array order.
    pub fn start_offset(&self, index: usize) -> f64 {
        self.delay + index as f64 * self.stagger
    }

    pub fn total_duration(&self) -> f64 {
        match self.targets.len() {
            0 => self.delay + self.duration,
            n => self.start_offset(n - 1) + self.duration,
        }
    }

    /// State of target `index` at `position` seconds into the timeline.
    pub fn sample(&self, index: usize, position: f64) -> VisualState {
        let local = position - self.start_offset(index);
        if local <= 0.0 {
            return self.from;
        }
        if self.duration == 0.0 || local >= self.duration {
            return self.to;
        }
        self.from.interpolate(&self.to, self.easing.apply(local / self.duration))
    }
}

/// An indefinitely looping effect, such as a floating background shape.
#[derive(Clone, Debug)]
pub struct ContinuousEffect<T> {
    label: String,
    targets: Vec<T>,
    from: VisualState,
    to: VisualState,
    period: f64,
    easing: Easing,
    stagger: f64,
    yoyo: bool,
}

impl<T> ContinuousEffect<T> {
    pub fn new(label: impl Into<String>, targets: Vec<T>) -> Self {
        Self {
            label: label.into(),
            targets,
            from: VisualState::IDENTITY,
            to: VisualState::IDENTITY,
            period: 3.0,
            easing: Easing::Sine(Curve::InOut),
            stagger: 0.0,
            yoyo: true,
        }
    }

    pub fn from(mut self, state: VisualState) -> Self {
        self.from = state;
        self
    }

    pub fn to(mut self, state: VisualState) -> Self {
        self.to = state;
        self
    }

    /// Seconds for one pass from `from` to `to`.
    pub fn period(mut self, seconds: f64) -> Self {
        self.period = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Phase delay between consecutive targets.
    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    /// Play back and forth instead of jumping back to `from` each pass.
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if self.targets.is_empty() {
            return Err(MotionError::MissingTarget(self.label.clone()));
        }
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(MotionError::InvalidPeriod(self.period));
        }
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(MotionError::InvalidStagger(self.stagger));
        }
        Ok(())
    }

    pub fn sample(&self, index: usize, elapsed: f64) -> VisualState {
        let local = elapsed - index as f64 * self.stagger;
        if local <= 0.0 {
            return self.from;
        }
        let passes = local / self.period;
        let whole = passes.floor();
        let mut t = passes - whole;
        if self.yoyo && (whole as u64) % 2 == 1 {
            t = 1.0 - t;
        }
        self.from.interpolate(&self.to, self.easing.apply(t))
    }
}
