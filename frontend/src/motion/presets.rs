//! The reveal shapes sections keep reaching for.

use super::easing::{Curve, Easing};
use super::group::{AnimationGroup, ContinuousEffect};
use super::state::VisualState;

pub fn fade_up<T>(label: &str, targets: Vec<T>) -> AnimationGroup<T> {
    AnimationGroup::new(label, targets)
        .from(VisualState::hidden().with_y(50.0))
        .to(VisualState::IDENTITY)
        .duration(0.8)
        .easing(Easing::Power(3, Curve::Out))
}

pub fn fade_in<T>(label: &str, targets: Vec<T>) -> AnimationGroup<T> {
    AnimationGroup::new(label, targets)
        .from(VisualState::hidden())
        .to(VisualState::IDENTITY)
        .duration(1.0)
        .easing(Easing::Power(2, Curve::Out))
}

/// Slide in horizontally; negative `offset` comes from the left.
pub fn slide_in<T>(label: &str, targets: Vec<T>, offset: f64) -> AnimationGroup<T> {
    AnimationGroup::new(label, targets)
        .from(VisualState::hidden().with_x(offset))
        .to(VisualState::IDENTITY)
        .duration(0.9)
        .easing(Easing::Power(3, Curve::Out))
}

pub fn pop_in<T>(label: &str, targets: Vec<T>) -> AnimationGroup<T> {
    AnimationGroup::new(label, targets)
        .from(VisualState::hidden().with_scale(0.8))
        .to(VisualState::IDENTITY)
        .duration(0.6)
        .easing(Easing::BackOut(Easing::DEFAULT_OVERSHOOT))
}

/// Card grids: rise in one after another, left to right.
pub fn stagger_cards<T>(label: &str, targets: Vec<T>) -> AnimationGroup<T> {
    fade_up(label, targets)
        .from(VisualState::hidden().with_y(60.0).with_scale(0.95))
        .duration(0.7)
        .stagger(0.1)
}

pub fn count_up<T>(label: &str, targets: Vec<T>, end: f64) -> AnimationGroup<T> {
    AnimationGroup::new(label, targets)
        .from(VisualState::hidden().with_count(0.0))
        .to(VisualState::IDENTITY.with_count(end))
        .duration(2.0)
        .easing(Easing::Power(1, Curve::Out))
}

/// Gentle bobbing for decorative shapes.
pub fn float<T>(label: &str, targets: Vec<T>) -> ContinuousEffect<T> {
    ContinuousEffect::new(label, targets)
        .from(VisualState::IDENTITY)
        .to(VisualState::IDENTITY.with_y(-20.0).with_rotate(6.0))
        .period(3.0)
        .easing(Easing::Sine(Curve::InOut))
        .stagger(0.6)
        .yoyo(true)
}
