use log::warn;
use yew::prelude::*;

use crate::config;
use crate::motion::controller::{MotionSpec, ReplayPolicy};
use crate::motion::dom::{self, DomTarget};
use crate::motion::easing::Easing;
use crate::motion::group::AnimationGroup;
use crate::motion::hooks::use_section_motion;
use crate::motion::presets;

/// How the `.reveal-card` children of a section come in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardReveal {
    #[default]
    Rise,
    Fade,
    /// From the left, for vertical lists such as timelines.
    Slide,
    Pop,
}

impl CardReveal {
    fn group(self, targets: Vec<DomTarget>) -> AnimationGroup<DomTarget> {
        match self {
            CardReveal::Rise => presets::stagger_cards("cards", targets),
            CardReveal::Fade => presets::fade_in("cards", targets).stagger(0.1),
            CardReveal::Slide => presets::slide_in("cards", targets, -80.0).stagger(0.15),
            CardReveal::Pop => presets::pop_in("cards", targets).stagger(0.05),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(ReplayPolicy::Once)]
    pub policy: ReplayPolicy,
    #[prop_or_default]
    pub reveal: CardReveal,
    /// Easing override for the cards, e.g. `"back.out(1.4)"`.
    #[prop_or_default]
    pub ease: Option<AttrValue>,
    /// Change this when the rendered cards change so the new ones get
    /// bound too.
    #[prop_or_default]
    pub motion_key: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Everything the card binding reads from props. Any change rebinds the cards.
type CardDeps = (AttrValue, f64, ReplayPolicy, CardReveal, Option<AttrValue>);

fn card_deps(props: &RevealSectionProps) -> CardDeps {
    (
        props.motion_key.clone(),
        props.threshold,
        props.policy,
        props.reveal,
        props.ease.clone(),
    )
}

/// A titled page section whose heading rises in, followed by every
/// `.reveal-card` inside it, once the section scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let threshold = props.threshold;
    let policy = props.policy;

    // Bound on its own so a new `motion_key` only rebinds the cards.
    use_section_motion("section-heading", node.clone(), (threshold, policy), move |root| {
        vec![MotionSpec::on_enter(
            presets::fade_up("heading", dom::select(root, ".section-header > [data-reveal]"))
                .stagger(0.15),
            dom::first(root, ".section-header"),
            threshold,
            policy,
        )]
    });

    {
        let reveal = props.reveal;
        let ease = props.ease.clone();
        use_section_motion("section-cards", node.clone(), card_deps(props), move |root| {
            let mut cards = reveal.group(dom::select(root, ".reveal-card"));
            if let Some(name) = ease {
                match name.parse::<Easing>() {
                    Ok(easing) => cards = cards.easing(easing),
                    Err(e) => warn!("section: keeping default card easing: {}", e),
                }
            }
            vec![MotionSpec::on_enter(
                cards,
                dom::first(root, ".section-body"),
                threshold,
                policy,
            )]
        });
    }

    html! {
        <section
            class={classes!("reveal-section", props.class.clone())}
            id={props.id.clone()}
            ref={node}
        >
            <style>
                {r#"
                    .reveal-section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 3.5rem;
                    }
                    .section-title {
                        font-size: clamp(1.8rem, 4vw, 2.8rem);
                        margin: 0 0 1rem;
                    }
                    .section-subtitle {
                        color: rgba(230, 237, 243, 0.7);
                        font-size: 1.1rem;
                        max-width: 680px;
                        margin: 0 auto;
                        line-height: 1.6;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .card {
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 14px;
                        padding: 2rem;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease, background 0.3s ease;
                    }
                    .card:hover {
                        border-color: rgba(255, 166, 0, 0.5);
                        background: rgba(255, 166, 0, 0.04);
                        box-shadow: 0 16px 40px rgba(0, 0, 0, 0.35);
                    }
                    .card h3 {
                        margin: 0.8rem 0 0.6rem;
                        font-size: 1.25rem;
                    }
                    .card p {
                        margin: 0;
                        color: rgba(230, 237, 243, 0.7);
                        line-height: 1.6;
                    }
                    .card-icon {
                        font-size: 2rem;
                        display: inline-block;
                        transition: transform 0.3s ease;
                    }
                    .card:hover .card-icon {
                        transform: scale(1.15) rotate(-6deg);
                    }
                    .card-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.4rem;
                        margin-top: 1.2rem;
                    }
                    .card-tags span {
                        font-size: 0.75rem;
                        padding: 0.25rem 0.6rem;
                        border-radius: 999px;
                        background: rgba(255, 166, 0, 0.12);
                        color: #ffc04d;
                    }
                    .empty-state {
                        text-align: center;
                        color: rgba(230, 237, 243, 0.6);
                        padding: 2rem;
                    }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-title" data-reveal="true">{&props.title}</h2>
                {
                    if let Some(subtitle) = &props.subtitle {
                        html! { <p class="section-subtitle" data-reveal="true">{subtitle}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="section-body">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> RevealSectionProps {
        RevealSectionProps {
            title: AttrValue::from("Find a service"),
            subtitle: None,
            id: None,
            class: Classes::new(),
            threshold: config::REVEAL_THRESHOLD,
            policy: ReplayPolicy::Once,
            reveal: CardReveal::Rise,
            ease: None,
            motion_key: AttrValue::from("all|"),
            children: Children::default(),
        }
    }

    #[test]
    fn every_card_setting_changes_the_binding_key() {
        let base = card_deps(&props());
        assert_eq!(card_deps(&props()), base);

        let changed = [
            RevealSectionProps { motion_key: AttrValue::from("all|hvac"), ..props() },
            RevealSectionProps { threshold: 60.0, ..props() },
            RevealSectionProps { policy: ReplayPolicy::Toggle, ..props() },
            RevealSectionProps { reveal: CardReveal::Pop, ..props() },
            RevealSectionProps { ease: Some(AttrValue::from("back.out(1.4)")), ..props() },
        ];
        for props in &changed {
            assert_ne!(card_deps(props), base);
        }
    }
}
