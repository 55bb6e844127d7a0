use yew::prelude::*;

use crate::config;
use crate::content::STATS;
use crate::motion::controller::{MotionSpec, ReplayPolicy};
use crate::motion::dom::{self, DomTarget};
use crate::motion::hooks::use_section_motion;
use crate::motion::presets;

#[function_component(StatCounters)]
pub fn stat_counters() -> Html {
    let node = use_node_ref();
    use_section_motion("stats", node.clone(), (), |root| {
        let trigger = dom::root(root);
        dom::select(root, ".stat-value")
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let element = value.element();
                let end = element
                    .get_attribute("data-count")
                    .and_then(|count| count.parse::<f64>().ok())
                    .unwrap_or_default();
                let suffix = element.get_attribute("data-suffix").unwrap_or_default();
                let counter = DomTarget::counter(element.clone(), &suffix);
                MotionSpec::on_enter(
                    presets::count_up(&format!("stat-{}", i), vec![counter], end).delay(i as f64 * 0.15),
                    trigger.clone(),
                    config::REVEAL_THRESHOLD,
                    ReplayPolicy::Once,
                )
            })
            .collect()
    });

    html! {
        <section class="stats-band" ref={node}>
            <style>
                {r#"
                    .stats-band {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .stat {
                        text-align: center;
                    }
                    .stat-value {
                        display: block;
                        font-size: 3rem;
                        font-weight: 700;
                        color: #ffa600;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        color: rgba(230, 237, 243, 0.7);
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
            {
                STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <span
                            class="stat-value"
                            data-reveal="true"
                            data-count={stat.value.to_string()}
                            data-suffix={stat.suffix}
                        >
                            {format!("0{}", stat.suffix)}
                        </span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }).collect::<Html>()
            }
        </section>
    }
}
