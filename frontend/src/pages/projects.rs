use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::PageHero;
use crate::components::section::RevealSection;
use crate::components::stats::StatCounters;
use crate::content::{projects_in, ServiceCategory};
use crate::pages::services::CategoryTabs;
use crate::Route;

#[function_component(Projects)]
pub fn projects() -> Html {
    let category = use_state(|| None::<ServiceCategory>);

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

    let on_category = {
        let category = category.clone();
        Callback::from(move |selected: Option<ServiceCategory>| category.set(selected))
    };

    let shown = projects_in(*category);
    let motion_key = category.map_or("all", |c| c.label());

    html! {
        <div class="projects-page">
            <style>
                {r#"
                    .project-meta {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.85rem;
                        color: rgba(230, 237, 243, 0.55);
                        margin-bottom: 0.8rem;
                    }
                    .project-client {
                        color: #ffa600;
                        font-weight: 600;
                    }
                "#}
            </style>
            <PageHero
                compact=true
                eyebrow="Projects"
                title="Work we are proud to sign off"
                subtitle="A selection of recent jobs across industry, healthcare, utilities and retail."
            />

            <RevealSection title="Recent projects" motion_key={motion_key}>
                <CategoryTabs active={*category} on_select={on_category} />
                if shown.is_empty() {
                    <p class="empty-state">{"No projects in this category yet."}</p>
                } else {
                    <div class="card-grid">
                        {
                            shown.iter().map(|project| html! {
                                <article class="card reveal-card" data-reveal="true" key={project.title}>
                                    <div class="project-meta">
                                        <span>{project.location}</span>
                                        <span>{project.year}</span>
                                    </div>
                                    <h3>{project.title}</h3>
                                    <p class="project-client">{project.client}</p>
                                    <p>{project.summary}</p>
                                    <div class="card-tags">
                                        <span>{project.category.label()}</span>
                                    </div>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </RevealSection>

            <StatCounters />

            <div style="text-align: center; margin: 2rem 0 6rem;">
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Start your project"}</Link<Route>>
            </div>
        </div>
    }
}
