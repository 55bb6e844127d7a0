//! Frame-driven playback of animation groups and looping effects.
//!
//! The scheduler never reads a clock. Every call takes `now` in seconds,
//! which the browser driver feeds from `requestAnimationFrame` and tests
//! feed by hand.

use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

use super::group::{AnimationGroup, ContinuousEffect};
use super::target::MotionTarget;

new_key_type! {
    /// Handle to a playing (or finished, not yet released) group.
    pub struct TweenHandle;
    /// Handle to a running continuous effect.
    pub struct LoopHandle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayDirection {
    #[default]
    Forward,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    /// Reached the end in its current direction. Targets hold the exact
    /// end (or start, when reversed) state.
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayOptions {
    /// Extra wait before the group's own delay, in seconds.
    pub delay: f64,
    pub direction: PlayDirection,
}

struct Tween<T> {
    group: Rc<AnimationGroup<T>>,
    position: f64,
    direction: PlayDirection,
    status: TweenStatus,
    last_tick: f64,
}

struct Loop<T> {
    effect: ContinuousEffect<T>,
    started_at: f64,
}

pub struct Scheduler<T> {
    tweens: SlotMap<TweenHandle, Tween<T>>,
    loops: SlotMap<LoopHandle, Loop<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            loops: SlotMap::with_key(),
        }
    }

    pub fn play(
        &mut self,
        group: Rc<AnimationGroup<T>>,
        options: PlayOptions,
        now: f64,
    ) -> TweenHandle {
        let lead_in = options.delay.max(0.0);
        let position = match options.direction {
            PlayDirection::Forward => -lead_in,
            PlayDirection::Reverse => group.total_duration(),
        };
        self.tweens.insert(Tween {
            group,
            position,
            direction: options.direction,
            status: TweenStatus::Running,
            last_tick: now,
        })
    }

    /// Flip the playback direction from wherever the tween currently is.
    pub fn reverse(&mut self, handle: TweenHandle, now: f64) -> bool {
        let Some(direction) = self.tweens.get(handle).map(|tween| tween.direction) else {
            return false;
        };
        let flipped = match direction {
            PlayDirection::Forward => PlayDirection::Reverse,
            PlayDirection::Reverse => PlayDirection::Forward,
        };
        self.set_direction(handle, flipped, now)
    }

    pub fn set_direction(&mut self, handle: TweenHandle, direction: PlayDirection, now: f64) -> bool {
        let Some(tween) = self.tweens.get_mut(handle) else {
            return false;
        };
        if tween.direction != direction {
            tween.direction = direction;
            tween.status = TweenStatus::Running;
        }
        tween.last_tick = now;
        true
    }

    /// Stop a tween where it is. Targets keep whatever state they last
    /// received. Returns `false` if the handle was already released.
    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        self.tweens.remove(handle).is_some()
    }

    pub fn status(&self, handle: TweenHandle) -> Option<TweenStatus> {
        self.tweens.get(handle).map(|tween| tween.status)
    }

    pub fn direction(&self, handle: TweenHandle) -> Option<PlayDirection> {
        self.tweens.get(handle).map(|tween| tween.direction)
    }

    pub fn start_loop(&mut self, effect: ContinuousEffect<T>, now: f64) -> LoopHandle {
        self.loops.insert(Loop {
            effect,
            started_at: now,
        })
    }

    /// Returns `true` only for the call that actually stopped the loop.
    pub fn cancel_loop(&mut self, handle: LoopHandle) -> bool {
        self.loops.remove(handle).is_some()
    }

    pub fn running_tweens(&self) -> usize {
        self.tweens
            .values()
            .filter(|tween| tween.status == TweenStatus::Running)
            .count()
    }

    pub fn running_loops(&self) -> usize {
        self.loops.len()
    }
}

impl<T: MotionTarget> Scheduler<T> {
    /// Write the start state to every target of `group`.
    pub fn prime(&self, group: &AnimationGroup<T>) {
        let start = group.start_state();
        for target in group.targets() {
            target.apply(&start);
        }
    }

    pub fn tick(&mut self, now: f64) {
        for tween in self.tweens.values_mut() {
            if tween.status != TweenStatus::Running {
                continue;
            }
            let elapsed = (now - tween.last_tick).max(0.0);
            tween.last_tick = now;

            let total = tween.group.total_duration();
            let landed = match tween.direction {
                PlayDirection::Forward => {
                    tween.position = (tween.position + elapsed).min(total);
                    (tween.position >= total).then(|| tween.group.end_state())
                }
                PlayDirection::Reverse => {
                    tween.position = (tween.position - elapsed).max(0.0);
                    (tween.position <= 0.0).then(|| tween.group.start_state())
                }
            };

            match landed {
                Some(state) => {
                    tween.status = TweenStatus::Finished;
                    for target in tween.group.targets() {
                        target.apply(&state);
                    }
                }
                None => {
                    for (index, target) in tween.group.targets().iter().enumerate() {
                        target.apply(&tween.group.sample(index, tween.position));
                    }
                }
            }
        }

        for running in self.loops.values() {
            let elapsed = now - running.started_at;
            for (index, target) in running.effect.targets().iter().enumerate() {
                target.apply(&running.effect.sample(index, elapsed));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::state::VisualState;
    use crate::motion::testing::{probes, Probe};

    fn title(targets: Vec<Probe>) -> Rc<AnimationGroup<Probe>> {
        Rc::new(
            AnimationGroup::new("title", targets)
                .from(VisualState::hidden().with_y(60.0))
                .to(VisualState::IDENTITY)
                .duration(1.0),
        )
    }

    #[test]
    fn completed_play_lands_exactly_on_end_state() {
        let targets = probes(3, 0.0);
        let group = Rc::new(
            AnimationGroup::new("cards", targets.clone())
                .from(VisualState::hidden().with_y(33.3).with_scale(0.7))
                .to(VisualState::IDENTITY.with_count(0.1 + 0.2))
                .duration(0.7)
                .stagger(0.13)
                .easing(crate::motion::easing::Easing::BackOut(1.7)),
        );
        let mut scheduler = Scheduler::new();
        let handle = scheduler.play(group.clone(), PlayOptions::default(), 0.0);

        let mut now = 0.0;
        while scheduler.status(handle) == Some(TweenStatus::Running) {
            now += 1.0 / 60.0;
            scheduler.tick(now);
        }
        for target in &targets {
            assert_eq!(target.last(), Some(group.end_state()));
        }
    }

    #[test]
    fn stagger_start_times_are_deterministic() {
        let targets = probes(4, 0.0);
        let group = Rc::new(AnimationGroup::new("cards", targets.clone()).stagger(0.1));
        let start = group.start_state();
        let mut scheduler = Scheduler::new();
        scheduler.play(group, PlayOptions::default(), 2.5);

        scheduler.tick(2.5);
        assert!(targets.iter().all(|t| t.last() == Some(start)));

        // Target i leaves its start state at 2.5 + i * 0.1, the next one later.
        for i in 0..4 {
            scheduler.tick(2.5 + i as f64 * 0.1 + 0.01);
            assert_ne!(targets[i].last(), Some(start), "target {} did not start", i);
            if let Some(next) = targets.get(i + 1) {
                assert_eq!(next.last(), Some(start), "target {} moved early", i + 1);
            }
        }
    }

    #[test]
    fn staggered_targets_move_in_array_order() {
        let targets = probes(4, 0.0);
        let group = Rc::new(
            AnimationGroup::new("cards", targets.clone())
                .duration(0.5)
                .stagger(0.1),
        );
        let mut scheduler = Scheduler::new();
        scheduler.play(group.clone(), PlayOptions::default(), 0.0);
        scheduler.tick(0.15);

        let start = group.start_state();
        assert_ne!(targets[0].last(), Some(start));
        assert_ne!(targets[1].last(), Some(start));
        assert_eq!(targets[2].last(), Some(start));
        assert_eq!(targets[3].last(), Some(start));
    }

    #[test]
    fn reverse_returns_to_start_state() {
        let targets = probes(1, 0.0);
        let group = title(targets.clone());
        let mut scheduler = Scheduler::new();
        let handle = scheduler.play(group.clone(), PlayOptions::default(), 0.0);

        scheduler.tick(0.6);
        assert!(scheduler.reverse(handle, 0.6));
        assert_eq!(scheduler.direction(handle), Some(PlayDirection::Reverse));
        scheduler.tick(1.0);
        assert_eq!(scheduler.status(handle), Some(TweenStatus::Running));
        scheduler.tick(1.3);
        assert_eq!(scheduler.status(handle), Some(TweenStatus::Finished));
        assert_eq!(targets[0].last(), Some(group.start_state()));
    }

    #[test]
    fn play_delay_holds_start_state() {
        let targets = probes(1, 0.0);
        let group = title(targets.clone());
        let mut scheduler = Scheduler::new();
        let handle = scheduler.play(
            group.clone(),
            PlayOptions {
                delay: 0.5,
                ..PlayOptions::default()
            },
            0.0,
        );
        scheduler.tick(0.4);
        assert_eq!(targets[0].last(), Some(group.start_state()));
        scheduler.tick(0.6);
        assert_ne!(targets[0].last(), Some(group.start_state()));
        scheduler.tick(1.6);
        assert_eq!(scheduler.status(handle), Some(TweenStatus::Finished));
    }

    #[test]
    fn cancel_freezes_targets_and_is_idempotent() {
        let targets = probes(1, 0.0);
        let mut scheduler = Scheduler::new();
        let handle = scheduler.play(title(targets.clone()), PlayOptions::default(), 0.0);
        scheduler.tick(0.2);
        let frozen = targets[0].last();
        let writes = targets[0].write_count();

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(!scheduler.reverse(handle, 0.3));
        scheduler.tick(0.5);
        scheduler.tick(2.0);

        assert_eq!(targets[0].last(), frozen);
        assert_eq!(targets[0].write_count(), writes);
        assert_eq!(scheduler.running_tweens(), 0);
    }

    #[test]
    fn loops_run_until_cancelled_once() {
        let targets = probes(2, 0.0);
        let effect = ContinuousEffect::new("float", targets.clone())
            .to(VisualState::IDENTITY.with_y(-15.0))
            .period(2.0)
            .stagger(0.5);
        let mut scheduler = Scheduler::new();
        let handle = scheduler.start_loop(effect, 0.0);

        scheduler.tick(10.0);
        scheduler.tick(123.4);
        assert_eq!(scheduler.running_loops(), 1);
        let writes = targets[0].write_count();

        assert!(scheduler.cancel_loop(handle));
        assert!(!scheduler.cancel_loop(handle));
        scheduler.tick(200.0);
        assert_eq!(targets[0].write_count(), writes);
        assert_eq!(scheduler.running_loops(), 0);
    }

    #[test]
    fn prime_writes_start_state() {
        let targets = probes(2, 0.0);
        let group = title(targets.clone());
        Scheduler::new().prime(&group);
        for target in &targets {
            assert_eq!(target.last(), Some(group.start_state()));
        }
    }
}
