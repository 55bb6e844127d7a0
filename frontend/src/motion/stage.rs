use slotmap::{new_key_type, SlotMap};

use super::controller::{MotionSpec, SectionController};
use super::scheduler::Scheduler;
use super::target::MotionTarget;
use super::trigger::TriggerSource;

new_key_type! {
    pub struct SectionKey;
}

/// Everything the mounted sections of a page share: one trigger source,
/// one scheduler, and the controllers that own handles in both.
pub struct Stage<T> {
    source: TriggerSource<T>,
    scheduler: Scheduler<T>,
    sections: SlotMap<SectionKey, SectionController<T>>,
}

impl<T: MotionTarget + 'static> Default for Stage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MotionTarget + 'static> Stage<T> {
    pub fn new() -> Self {
        Self {
            source: TriggerSource::new(),
            scheduler: Scheduler::new(),
            sections: SlotMap::with_key(),
        }
    }

    pub fn mount(&mut self, name: &str, specs: Vec<MotionSpec<T>>, now: f64) -> SectionKey {
        let mut controller = SectionController::new(name);
        let bound = controller.bind(specs, &mut self.source, &mut self.scheduler, now);
        log::debug!(
            "section {} mounted with {} animation(s), {} watch(es), {} loop(s)",
            name,
            bound,
            controller.active_bindings(),
            controller.active_loops()
        );
        self.sections.insert(controller)
    }

    pub fn unmount(&mut self, key: SectionKey) -> bool {
        let Some(mut controller) = self.sections.remove(key) else {
            return false;
        };
        controller.unbind(&mut self.source, &mut self.scheduler);
        log::debug!("section {} unmounted", controller.name());
        true
    }

    /// One animation frame: measure triggers, let each section react, then
    /// advance playback.
    pub fn frame(&mut self, now: f64, viewport_height: f64) {
        self.source.refresh(viewport_height);
        for controller in self.sections.values_mut() {
            controller.pump(&mut self.source, &mut self.scheduler, now);
        }
        self.scheduler.tick(now);
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    #[cfg(test)]
    pub fn section(&self, key: SectionKey) -> Option<&SectionController<T>> {
        self.sections.get(key)
    }

    pub fn active_bindings(&self) -> usize {
        self.source.len()
    }

    pub fn running_tweens(&self) -> usize {
        self.scheduler.running_tweens()
    }

    pub fn running_loops(&self) -> usize {
        self.scheduler.running_loops()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::controller::{Phase, ReplayPolicy};
    use crate::motion::group::{AnimationGroup, ContinuousEffect};
    use crate::motion::presets;
    use crate::motion::state::VisualState;
    use crate::motion::testing::{probes, Probe};

    #[test]
    fn unmount_mid_flight_stops_all_mutation() {
        let mut stage = Stage::new();
        let title = Probe::at(0.0);
        let key = stage.mount(
            "hero",
            vec![MotionSpec::immediate(
                AnimationGroup::new("title", vec![title.clone()])
                    .from(VisualState::hidden())
                    .to(VisualState::IDENTITY)
                    .duration(1.0),
            )],
            0.0,
        );
        stage.frame(0.1, 800.0);
        stage.frame(0.2, 800.0);
        let reached = title.last().unwrap().opacity;
        let writes = title.write_count();
        assert!(reached > 0.0 && reached < 1.0);

        assert!(stage.unmount(key));
        assert!(!stage.unmount(key));
        stage.frame(0.5, 800.0);
        stage.frame(2.0, 800.0);

        assert_eq!(title.write_count(), writes);
        assert_eq!(title.last().unwrap().opacity, reached);
        assert_eq!(stage.running_tweens(), 0);
    }

    #[test]
    fn sections_tear_down_independently() {
        let mut stage = Stage::new();
        let services = probes(4, 600.0);
        let shapes = probes(3, 0.0);

        let grid = stage.mount(
            "services",
            vec![MotionSpec::on_enter(
                AnimationGroup::new("cards", services.clone()).stagger(0.1),
                services.first().cloned(),
                80.0,
                ReplayPolicy::Once,
            )],
            0.0,
        );
        let decor = stage.mount(
            "decor",
            vec![MotionSpec::looping(
                ContinuousEffect::new("float", shapes.clone())
                    .to(VisualState::IDENTITY.with_y(-20.0))
                    .stagger(0.4),
            )],
            0.0,
        );
        assert_eq!(stage.active_bindings(), 1);
        assert_eq!(stage.running_loops(), 1);

        stage.frame(0.016, 1000.0);
        assert_eq!(stage.section(grid).and_then(|s| s.phase("cards")), Some(Phase::Playing));

        assert!(stage.unmount(decor));
        assert_eq!(stage.running_loops(), 0);
        assert_eq!(stage.running_tweens(), 1);

        for i in 1..120 {
            stage.frame(0.016 + i as f64 / 60.0, 1000.0);
        }
        assert_eq!(stage.section(grid).and_then(|s| s.phase("cards")), Some(Phase::Completed));
        for card in &services {
            assert_eq!(card.last(), Some(VisualState::IDENTITY));
        }

        assert!(stage.unmount(grid));
        assert!(!stage.has_sections());
        assert_eq!(stage.active_bindings(), 0);
    }

    #[test]
    fn remount_leaves_revealed_once_targets_alone() {
        let mut stage = Stage::new();
        let heading = Probe::at(100.0);
        let first_card = Probe::at(300.0);
        let specs = |cards: Vec<Probe>| {
            vec![
                MotionSpec::on_enter(
                    presets::fade_up("heading", vec![heading.clone()]),
                    Some(heading.clone()),
                    80.0,
                    ReplayPolicy::Once,
                ),
                MotionSpec::on_enter(
                    presets::stagger_cards("cards", cards.clone()),
                    cards.first().cloned(),
                    80.0,
                    ReplayPolicy::Once,
                ),
            ]
        };

        let key = stage.mount("services", specs(vec![first_card.clone()]), 0.0);
        for i in 0..=150 {
            stage.frame(i as f64 / 60.0, 1000.0);
        }
        assert_eq!(stage.section(key).and_then(|s| s.phase("heading")), Some(Phase::Completed));
        assert_eq!(stage.section(key).and_then(|s| s.phase("cards")), Some(Phase::Completed));
        assert_eq!(heading.last(), Some(VisualState::IDENTITY));
        let heading_writes = heading.write_count();
        let card_writes = first_card.write_count();

        // A filter change re-renders the grid: same heading and first card,
        // one new card.
        assert!(stage.unmount(key));
        let new_card = Probe::at(400.0);
        let key = stage.mount("services", specs(vec![first_card.clone(), new_card.clone()]), 3.0);

        assert_eq!(heading.write_count(), heading_writes);
        assert_eq!(first_card.write_count(), card_writes);
        assert_eq!(heading.last(), Some(VisualState::IDENTITY));
        let hidden = presets::stagger_cards::<Probe>("cards", vec![]).start_state();
        assert_eq!(new_card.last(), Some(hidden));
        assert_eq!(stage.section(key).and_then(|s| s.phase("heading")), Some(Phase::Completed));

        for i in 0..=120 {
            stage.frame(3.0 + i as f64 / 60.0, 1000.0);
        }
        assert_eq!(heading.write_count(), heading_writes);
        assert_eq!(first_card.write_count(), card_writes);
        assert_eq!(first_card.last(), Some(VisualState::IDENTITY));
        assert_eq!(new_card.last(), Some(VisualState::IDENTITY));
        assert_eq!(stage.section(key).and_then(|s| s.phase("cards")), Some(Phase::Completed));
        assert_eq!(stage.active_bindings(), 0);
    }
}
