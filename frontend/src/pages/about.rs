use yew::prelude::*;

use crate::components::faq::FaqAccordion;
use crate::components::hero::PageHero;
use crate::components::section::{CardReveal, RevealSection};
use crate::components::stats::StatCounters;
use crate::content::FAQS;
use crate::motion::controller::ReplayPolicy;

const VALUES: &[(&str, &str, &str)] = &[
    ("🦺", "Safety first", "Permit-to-work, lockout/tagout and toolbox talks on every site, every day."),
    ("📐", "Engineered, not improvised", "Every installation starts from drawings and load calculations, not guesswork."),
    ("🤝", "One team, start to finish", "The engineers who design the job are on site when it is commissioned."),
    ("⏱️", "Downtime is the enemy", "We plan around your production schedule, not ours."),
];

const MILESTONES: &[(&str, &str)] = &[
    ("1999", "Founded as a two-person electrical repair shop"),
    ("2006", "Mechanical division opens with HVAC and piping crews"),
    ("2013", "Automation team formed for PLC and SCADA work"),
    ("2019", "New 4,000 m² fabrication workshop at Riverside"),
    ("2024", "850th project handed over"),
];

#[function_component(About)]
pub fn about() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="about-page">
            <style>
                {r#"
                    .timeline {
                        max-width: 760px;
                        margin: 0 auto;
                        border-left: 2px solid rgba(255, 166, 0, 0.35);
                        padding-left: 2rem;
                    }
                    .milestone {
                        position: relative;
                        margin-bottom: 2rem;
                    }
                    .milestone::before {
                        content: "";
                        position: absolute;
                        left: calc(-2rem - 7px);
                        top: 0.35rem;
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: #ffa600;
                    }
                    .milestone strong {
                        color: #ffa600;
                        display: block;
                        font-size: 1.2rem;
                    }
                "#}
            </style>
            <PageHero
                compact=true
                eyebrow="About us"
                title="Twenty-five years of keeping machines turning"
                subtitle="From a two-person repair shop to a 120-strong team of electricians, fitters and controls engineers."
            />

            <RevealSection title="What we stand for">
                <div class="card-grid">
                    {
                        VALUES.iter().map(|(icon, title, text)| html! {
                            <article class="card reveal-card" data-reveal="true">
                                <span class="card-icon">{*icon}</span>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <StatCounters />

            <RevealSection title="How we got here" policy={ReplayPolicy::Toggle} reveal={CardReveal::Slide}>
                <div class="timeline">
                    {
                        MILESTONES.iter().map(|(year, text)| html! {
                            <div class="milestone reveal-card" data-reveal="true">
                                <strong>{*year}</strong>
                                <span>{*text}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection title="Frequently asked questions" reveal={CardReveal::Fade}>
                <FaqAccordion items={FAQS} />
            </RevealSection>
        </div>
    }
}
