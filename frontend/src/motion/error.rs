use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("group `{0}` has no targets")]
    MissingTarget(String),
    #[error("group `{0}` has no trigger element to observe")]
    MissingTrigger(String),
    #[error("threshold {0} is outside 0..=100")]
    InvalidThreshold(f64),
    #[error("duration {0} must be a finite, non-negative number of seconds")]
    InvalidDuration(f64),
    #[error("stagger {0} must be a finite, non-negative number of seconds")]
    InvalidStagger(f64),
    #[error("loop period {0} must be a finite, positive number of seconds")]
    InvalidPeriod(f64),
    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
}
