use super::state::VisualState;

/// Something the motion core can measure and write to.
///
/// In the browser this is a DOM element; tests use a recording probe.
pub trait MotionTarget: Clone {
    /// Whether the target is currently part of the document.
    fn is_attached(&self) -> bool;

    /// Top edge relative to the viewport, in CSS pixels. `None` when the
    /// target cannot be measured.
    fn viewport_top(&self) -> Option<f64>;

    fn apply(&self, state: &VisualState);

    /// Whether a play-once reveal has already finished on this target.
    fn is_revealed(&self) -> bool;

    /// Remember that a play-once reveal finished here, so a later bind of
    /// the same element leaves it showing its end state.
    fn mark_revealed(&self);
}
