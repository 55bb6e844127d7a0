//! Per-section wiring of animation groups to viewport triggers.
//!
//! A controller only ever touches handles it created itself. Teardown walks
//! its own slots and loops; nothing is looked up globally.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, warn};

use super::error::MotionError;
use super::group::{AnimationGroup, ContinuousEffect};
use super::scheduler::{LoopHandle, PlayDirection, PlayOptions, Scheduler, TweenHandle, TweenStatus};
use super::target::MotionTarget;
use super::trigger::{Crossing, TriggerSource, WatchHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Play on the first enter, then never again.
    Once,
    /// Play forward on every enter, reverse on every leave.
    Toggle,
}

/// Where one bound group is. A group with no slot in the controller is
/// unbound and has no phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Bound,
    Playing,
    Completed,
    Cancelled,
}

/// How one group of a section gets played.
pub enum MotionSpec<T> {
    OnEnterViewport {
        group: AnimationGroup<T>,
        trigger: Option<T>,
        threshold: f64,
        policy: ReplayPolicy,
    },
    /// Plays as soon as the section mounts (hero content).
    Immediate { group: AnimationGroup<T> },
    ContinuousLoop { effect: ContinuousEffect<T> },
}

impl<T> MotionSpec<T> {
    pub fn on_enter(
        group: AnimationGroup<T>,
        trigger: Option<T>,
        threshold: f64,
        policy: ReplayPolicy,
    ) -> Self {
        MotionSpec::OnEnterViewport {
            group,
            trigger,
            threshold,
            policy,
        }
    }

    pub fn immediate(group: AnimationGroup<T>) -> Self {
        MotionSpec::Immediate { group }
    }

    pub fn looping(effect: ContinuousEffect<T>) -> Self {
        MotionSpec::ContinuousLoop { effect }
    }
}

struct Slot<T> {
    group: Rc<AnimationGroup<T>>,
    policy: ReplayPolicy,
    watch: Option<WatchHandle>,
    tween: Option<TweenHandle>,
    phase: Phase,
}

type Inbox = Rc<RefCell<VecDeque<(usize, Crossing)>>>;

pub struct SectionController<T> {
    name: String,
    slots: Vec<Slot<T>>,
    loops: Vec<LoopHandle>,
    inbox: Inbox,
    bound: bool,
}

impl<T: MotionTarget + 'static> SectionController<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
            loops: Vec::new(),
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            bound: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Register every `MotionSpec`. Returns how many bound; the rest were logged
    /// and skipped.
    pub fn bind(
        &mut self,
        specs: Vec<MotionSpec<T>>,
        source: &mut TriggerSource<T>,
        scheduler: &mut Scheduler<T>,
        now: f64,
    ) -> usize {
        if self.is_bound() {
            debug!("section {}: rebinding, dropping previous triggers", self.name);
            self.unbind(source, scheduler);
        }
        self.slots.clear();
        self.loops.clear();
        self.inbox.borrow_mut().clear();

        let mut bound = 0;
        for spec in specs {
            match self.bind_one(spec, source, scheduler, now) {
                Ok(()) => bound += 1,
                Err(e) => warn!("section {}: skipping animation: {}", self.name, e),
            }
        }
        self.bound = true;
        bound
    }

    fn bind_one(
        &mut self,
        spec: MotionSpec<T>,
        source: &mut TriggerSource<T>,
        scheduler: &mut Scheduler<T>,
        now: f64,
    ) -> Result<(), MotionError> {
        match spec {
            MotionSpec::OnEnterViewport {
                group,
                trigger,
                threshold,
                policy,
            } => {
                group.validate()?;
                let group = match policy {
                    ReplayPolicy::Once => group.retain_targets(|target| !target.is_revealed()),
                    ReplayPolicy::Toggle => group,
                };
                if group.targets().is_empty() {
                    self.settle_revealed(group);
                    return Ok(());
                }
                let index = self.slots.len();
                let inbox = self.inbox.clone();
                let watch = source.observe(trigger.as_ref(), threshold, move |crossing| {
                    inbox.borrow_mut().push_back((index, crossing));
                })?;
                let Some(watch) = watch else {
                    // Never leave content hidden behind a trigger that can't fire.
                    let end = group.end_state();
                    for target in group.targets() {
                        target.apply(&end);
                        if policy == ReplayPolicy::Once {
                            target.mark_revealed();
                        }
                    }
                    return Err(MotionError::MissingTrigger(group.label().to_string()));
                };
                scheduler.prime(&group);
                self.slots.push(Slot {
                    group: Rc::new(group),
                    policy,
                    watch: Some(watch),
                    tween: None,
                    phase: Phase::Bound,
                });
            }
            MotionSpec::Immediate { group } => {
                group.validate()?;
                let group = group.retain_targets(|target| !target.is_revealed());
                if group.targets().is_empty() {
                    self.settle_revealed(group);
                    return Ok(());
                }
                scheduler.prime(&group);
                let group = Rc::new(group);
                let tween = scheduler.play(group.clone(), PlayOptions::default(), now);
                self.slots.push(Slot {
                    group,
                    policy: ReplayPolicy::Once,
                    watch: None,
                    tween: Some(tween),
                    phase: Phase::Playing,
                });
            }
            MotionSpec::ContinuousLoop { effect } => {
                effect.validate()?;
                debug!("section {}: looping {}", self.name, effect.label());
                self.loops.push(scheduler.start_loop(effect, now));
            }
        }
        Ok(())
    }

    /// Every target of a play-once group already finished revealing in an
    /// earlier bind. Leave them untouched and record the group as done.
    fn settle_revealed(&mut self, group: AnimationGroup<T>) {
        debug!("section {}: {} already revealed", self.name, group.label());
        self.slots.push(Slot {
            group: Rc::new(group),
            policy: ReplayPolicy::Once,
            watch: None,
            tween: None,
            phase: Phase::Completed,
        });
    }

    /// Settle finished tweens, then act on queued threshold crossings.
    pub fn pump(&mut self, source: &mut TriggerSource<T>, scheduler: &mut Scheduler<T>, now: f64) {
        if !self.bound {
            return;
        }

        for slot in &mut self.slots {
            if slot.phase != Phase::Playing {
                continue;
            }
            let Some(tween) = slot.tween else { continue };
            if scheduler.status(tween) != Some(TweenStatus::Finished) {
                continue;
            }
            match slot.policy {
                ReplayPolicy::Once => {
                    for target in slot.group.targets() {
                        target.mark_revealed();
                    }
                    scheduler.cancel(tween);
                    slot.tween = None;
                    if let Some(watch) = slot.watch.take() {
                        source.unobserve(watch);
                    }
                    slot.phase = Phase::Completed;
                }
                ReplayPolicy::Toggle => slot.phase = Phase::Bound,
            }
        }

        let crossings: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
        for (index, crossing) in crossings {
            let Some(slot) = self.slots.get_mut(index) else { continue };
            match (crossing, slot.policy, slot.phase) {
                (_, _, Phase::Completed | Phase::Cancelled) => {}
                (Crossing::Entering, ReplayPolicy::Once, Phase::Playing) => {}
                (Crossing::Entering, _, _) => {
                    Self::drive(slot, scheduler, PlayDirection::Forward, now);
                }
                (Crossing::Leaving, ReplayPolicy::Toggle, _) => {
                    Self::drive(slot, scheduler, PlayDirection::Reverse, now);
                }
                (Crossing::Leaving, ReplayPolicy::Once, _) => {}
            }
        }
    }

    fn drive(slot: &mut Slot<T>, scheduler: &mut Scheduler<T>, direction: PlayDirection, now: f64) {
        let current = slot
            .tween
            .and_then(|tween| scheduler.direction(tween).map(|current| (tween, current)));
        let resumed = match current {
            Some((tween, current)) if current != direction => scheduler.reverse(tween, now),
            Some(_) => true,
            None => false,
        };
        if !resumed {
            if direction == PlayDirection::Reverse {
                // Nothing has played yet, so there is nothing to rewind.
                return;
            }
            slot.tween = Some(scheduler.play(slot.group.clone(), PlayOptions::default(), now));
        }
        slot.phase = Phase::Playing;
    }

    /// Release every watch, tween and loop this section created.
    pub fn unbind(&mut self, source: &mut TriggerSource<T>, scheduler: &mut Scheduler<T>) {
        for slot in &mut self.slots {
            if let Some(watch) = slot.watch.take() {
                source.unobserve(watch);
            }
            if let Some(tween) = slot.tween.take() {
                scheduler.cancel(tween);
            }
            if slot.phase != Phase::Completed {
                slot.phase = Phase::Cancelled;
            }
        }
        for effect in self.loops.drain(..) {
            scheduler.cancel_loop(effect);
        }
        self.inbox.borrow_mut().clear();
        self.bound = false;
    }

    #[cfg(test)]
    pub fn phase(&self, label: &str) -> Option<Phase> {
        self.slots
            .iter()
            .find(|slot| slot.group.label() == label)
            .map(|slot| slot.phase)
    }

    /// Watches still registered on behalf of this section.
    pub fn active_bindings(&self) -> usize {
        self.slots.iter().filter(|slot| slot.watch.is_some()).count()
    }

    pub fn active_loops(&self) -> usize {
        self.loops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::state::VisualState;
    use crate::motion::testing::{probes, Probe};

    const VIEWPORT: f64 = 1000.0;

    struct Rig {
        source: TriggerSource<Probe>,
        scheduler: Scheduler<Probe>,
        controller: SectionController<Probe>,
    }

    impl Rig {
        fn new() -> Self {
            Rig {
                source: TriggerSource::new(),
                scheduler: Scheduler::new(),
                controller: SectionController::new("services"),
            }
        }

        fn bind(&mut self, specs: Vec<MotionSpec<Probe>>, now: f64) -> usize {
            self.controller
                .bind(specs, &mut self.source, &mut self.scheduler, now)
        }

        fn frame(&mut self, now: f64) {
            self.source.refresh(VIEWPORT);
            self.controller
                .pump(&mut self.source, &mut self.scheduler, now);
            self.scheduler.tick(now);
        }

        fn unbind(&mut self) {
            self.controller.unbind(&mut self.source, &mut self.scheduler);
        }
    }

    fn reveal(label: &str, targets: Vec<Probe>) -> AnimationGroup<Probe> {
        AnimationGroup::new(label, targets)
            .from(VisualState::hidden().with_y(50.0))
            .to(VisualState::IDENTITY)
            .duration(0.5)
    }

    #[test]
    fn once_group_plays_exactly_once() {
        let mut rig = Rig::new();
        let card = Probe::at(1200.0);
        rig.bind(
            vec![MotionSpec::on_enter(
                reveal("cards", vec![card.clone()]),
                Some(card.clone()),
                80.0,
                ReplayPolicy::Once,
            )],
            0.0,
        );
        assert_eq!(rig.controller.phase("cards"), Some(Phase::Bound));
        assert_eq!(card.last(), Some(VisualState::hidden().with_y(50.0)));

        card.scroll_to(500.0);
        rig.frame(1.0);
        assert_eq!(rig.controller.phase("cards"), Some(Phase::Playing));
        rig.frame(2.0);
        rig.frame(2.1);
        assert_eq!(rig.controller.phase("cards"), Some(Phase::Completed));
        assert_eq!(card.last(), Some(VisualState::IDENTITY));
        let writes = card.write_count();

        card.scroll_to(1200.0);
        rig.frame(3.0);
        card.scroll_to(400.0);
        rig.frame(4.0);
        rig.frame(5.0);

        assert_eq!(card.write_count(), writes);
        assert_eq!(rig.controller.phase("cards"), Some(Phase::Completed));
        assert_eq!(rig.controller.active_bindings(), 0);
    }

    #[test]
    fn once_group_ignores_reentry_while_playing() {
        let mut rig = Rig::new();
        let card = Probe::at(100.0);
        rig.bind(
            vec![MotionSpec::on_enter(
                reveal("cards", vec![card.clone()]),
                Some(card.clone()),
                80.0,
                ReplayPolicy::Once,
            )],
            0.0,
        );
        rig.frame(0.0);
        rig.frame(0.2);
        card.scroll_to(900.0);
        rig.frame(0.25);
        card.scroll_to(100.0);
        rig.frame(0.3);
        assert_eq!(rig.scheduler.running_tweens(), 1);
        rig.frame(0.8);
        rig.frame(0.81);
        assert_eq!(rig.controller.phase("cards"), Some(Phase::Completed));
    }

    #[test]
    fn toggle_group_reverses_on_leave() {
        let mut rig = Rig::new();
        let title = Probe::at(100.0);
        rig.bind(
            vec![MotionSpec::on_enter(
                reveal("title", vec![title.clone()]),
                Some(title.clone()),
                80.0,
                ReplayPolicy::Toggle,
            )],
            0.0,
        );
        rig.frame(0.0);
        rig.frame(1.0);
        rig.frame(1.01);
        assert_eq!(rig.controller.phase("title"), Some(Phase::Bound));
        assert_eq!(title.last(), Some(VisualState::IDENTITY));

        title.scroll_to(950.0);
        rig.frame(1.1);
        assert_eq!(rig.controller.phase("title"), Some(Phase::Playing));
        rig.frame(2.0);
        assert_eq!(title.last(), Some(VisualState::hidden().with_y(50.0)));

        title.scroll_to(10.0);
        rig.frame(2.1);
        rig.frame(3.0);
        assert_eq!(title.last(), Some(VisualState::IDENTITY));
        assert_eq!(rig.controller.active_bindings(), 1);
    }

    #[test]
    fn toggle_leave_mid_flight_rewinds_from_where_it_was() {
        let mut rig = Rig::new();
        let title = Probe::at(100.0);
        let hidden = VisualState::hidden().with_y(50.0);
        rig.bind(
            vec![MotionSpec::on_enter(
                reveal("title", vec![title.clone()]),
                Some(title.clone()),
                80.0,
                ReplayPolicy::Toggle,
            )],
            0.0,
        );
        rig.frame(0.0);
        rig.frame(0.25);
        let mid = title.last().map(|s| s.opacity).unwrap_or_default();
        assert!(mid > 0.0 && mid < 1.0);
        let before_leave = title.write_count();

        title.scroll_to(950.0);
        rig.frame(0.3);
        rig.frame(0.4);
        let rewound = title.last().map(|s| s.opacity).unwrap_or_default();
        assert!(rewound > 0.0 && rewound < mid);

        // Coming back resumes forward from the rewound position.
        title.scroll_to(100.0);
        rig.frame(0.45);
        rig.frame(0.55);
        let resumed = title.last().map(|s| s.opacity).unwrap_or_default();
        assert!((resumed - mid).abs() < 1e-6);
        assert_eq!(rig.controller.phase("title"), Some(Phase::Playing));

        title.scroll_to(950.0);
        rig.frame(0.6);
        rig.frame(1.0);
        rig.frame(1.01);
        assert_eq!(title.last(), Some(hidden));
        assert_eq!(rig.controller.phase("title"), Some(Phase::Bound));

        // Never snapped to the end state along the way.
        for state in &title.writes()[before_leave..] {
            assert!(state.opacity <= mid + 1e-6);
            assert!(state.opacity >= hidden.opacity);
        }
    }

    #[test]
    fn empty_group_is_skipped_without_breaking_siblings() {
        let mut rig = Rig::new();
        let title = Probe::at(100.0);
        let bound = rig.bind(
            vec![
                MotionSpec::on_enter(reveal("cards", vec![]), Some(title.clone()), 80.0, ReplayPolicy::Once),
                MotionSpec::on_enter(
                    reveal("title", vec![title.clone()]),
                    Some(title.clone()),
                    80.0,
                    ReplayPolicy::Once,
                ),
            ],
            0.0,
        );
        assert_eq!(bound, 1);
        assert_eq!(rig.controller.phase("cards"), None);
        assert_eq!(rig.controller.phase("title"), Some(Phase::Bound));
        assert_eq!(rig.controller.active_bindings(), 1);
    }

    #[test]
    fn unobservable_trigger_shows_content_instead() {
        let mut rig = Rig::new();
        let card = Probe::at(100.0);
        let bound = rig.bind(
            vec![MotionSpec::on_enter(
                reveal("cards", vec![card.clone()]),
                None,
                80.0,
                ReplayPolicy::Once,
            )],
            0.0,
        );
        assert_eq!(bound, 0);
        assert_eq!(card.last(), Some(VisualState::IDENTITY));
        assert_eq!(rig.source.len(), 0);
    }

    #[test]
    fn bad_threshold_skips_group() {
        let mut rig = Rig::new();
        let card = Probe::at(100.0);
        let bound = rig.bind(
            vec![MotionSpec::on_enter(
                reveal("cards", vec![card.clone()]),
                Some(card.clone()),
                140.0,
                ReplayPolicy::Once,
            )],
            0.0,
        );
        assert_eq!(bound, 0);
        assert_eq!(rig.controller.active_bindings(), 0);
    }

    #[test]
    fn unbind_releases_every_trigger_and_loop() {
        let mut rig = Rig::new();
        let cards = probes(3, 2000.0);
        let shapes = probes(2, 0.0);
        rig.bind(
            vec![
                MotionSpec::on_enter(
                    reveal("cards", cards.clone()).stagger(0.1),
                    cards.first().cloned(),
                    85.0,
                    ReplayPolicy::Once,
                ),
                MotionSpec::on_enter(
                    reveal("title", cards.clone()),
                    cards.first().cloned(),
                    90.0,
                    ReplayPolicy::Toggle,
                ),
                MotionSpec::looping(ContinuousEffect::new("float", shapes.clone()).period(3.0)),
            ],
            0.0,
        );
        assert_eq!(rig.controller.active_bindings(), 2);
        assert_eq!(rig.source.len(), 2);
        assert_eq!(rig.scheduler.running_loops(), 1);

        rig.unbind();
        assert_eq!(rig.controller.active_bindings(), 0);
        assert_eq!(rig.source.len(), 0);
        assert_eq!(rig.scheduler.running_loops(), 0);
        assert_eq!(rig.controller.phase("cards"), Some(Phase::Cancelled));

        rig.unbind();
        assert!(!rig.controller.is_bound());
    }

    #[test]
    fn rebinding_replaces_previous_triggers() {
        let mut rig = Rig::new();
        let card = Probe::at(100.0);
        let specs = || {
            vec![MotionSpec::on_enter(
                reveal("cards", vec![card.clone()]),
                Some(card.clone()),
                80.0,
                ReplayPolicy::Once,
            )]
        };
        rig.bind(specs(), 0.0);
        rig.bind(specs(), 0.0);
        assert_eq!(rig.source.len(), 1);

        rig.frame(0.1);
        assert_eq!(rig.scheduler.running_tweens(), 1);
    }

    #[test]
    fn immediate_group_completes_without_trigger() {
        let mut rig = Rig::new();
        let heading = Probe::at(0.0);
        rig.bind(vec![MotionSpec::immediate(reveal("hero", vec![heading.clone()]))], 0.0);
        assert_eq!(rig.controller.phase("hero"), Some(Phase::Playing));
        rig.frame(0.3);
        rig.frame(0.6);
        rig.frame(0.7);
        assert_eq!(rig.controller.phase("hero"), Some(Phase::Completed));
        assert_eq!(heading.last(), Some(VisualState::IDENTITY));
    }
}
