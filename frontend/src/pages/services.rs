use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::FaqAccordion;
use crate::components::hero::PageHero;
use crate::components::section::{CardReveal, RevealSection};
use crate::content::{search_services, ServiceCategory, FAQS};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub active: Option<ServiceCategory>,
    pub on_select: Callback<Option<ServiceCategory>>,
}

/// "All" followed by one tab per category.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    let tab = |category: Option<ServiceCategory>, label: &'static str| {
        let on_select = props.on_select.clone();
        html! {
            <button
                class={classes!("tab-button", (props.active == category).then(|| "active"))}
                onclick={Callback::from(move |_| on_select.emit(category))}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="category-tabs">
            <style>
                {r#"
                    .category-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.6rem;
                        justify-content: center;
                        margin-bottom: 2.5rem;
                    }
                    .tab-button {
                        padding: 0.55rem 1.3rem;
                        border-radius: 999px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: transparent;
                        color: inherit;
                        cursor: pointer;
                        transition: background 0.25s ease, border-color 0.25s ease, color 0.25s ease;
                    }
                    .tab-button:hover {
                        border-color: rgba(255, 166, 0, 0.6);
                    }
                    .tab-button.active {
                        background: #ffa600;
                        border-color: #ffa600;
                        color: #0d1117;
                    }
                "#}
            </style>
            { tab(None, "All") }
            { for ServiceCategory::ALL.iter().map(|category| tab(Some(*category), category.label())) }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let query = use_state(String::new);
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

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_category = {
        let category = category.clone();
        Callback::from(move |selected: Option<ServiceCategory>| category.set(selected))
    };

    let results = search_services(&query, *category);
    let motion_key = format!(
        "{}|{}",
        category.map_or("all", |c| c.label()),
        query.trim().to_lowercase()
    );

    html! {
        <div class="services-page">
            <style>
                {r#"
                    .service-search {
                        display: block;
                        width: 100%;
                        max-width: 520px;
                        margin: 0 auto 1.5rem;
                        padding: 0.9rem 1.2rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(13, 17, 23, 0.8);
                        color: inherit;
                        font: inherit;
                    }
                    .service-search:focus {
                        outline: none;
                        border-color: #ffa600;
                    }
                "#}
            </style>
            <PageHero
                compact=true
                eyebrow="Services"
                title="Everything between the meter and the machine"
                subtitle="Electrical distribution, mechanical systems, automation and the maintenance that keeps them healthy."
            />

            <RevealSection title="Find a service" motion_key={motion_key}>
                <input
                    class="service-search"
                    type="search"
                    placeholder="Search e.g. chillers, VFD, switchgear"
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <CategoryTabs active={*category} on_select={on_category} />
                if results.is_empty() {
                    <p class="empty-state">{"Nothing matches that search. Try a broader term, or just ask us."}</p>
                } else {
                    <div class="card-grid">
                        {
                            results.iter().map(|service| html! {
                                <article class="card reveal-card" data-reveal="true" key={service.slug}>
                                    <span class="card-icon">{service.icon}</span>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                    <div class="card-tags">
                                        { for service.highlights.iter().map(|h| html! { <span>{*h}</span> }) }
                                    </div>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </RevealSection>

            <RevealSection title="Questions we hear a lot" reveal={CardReveal::Fade}>
                <FaqAccordion items={FAQS} />
                <div style="text-align: center; margin-top: 2.5rem;">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Ask us something else"}</Link<Route>>
                </div>
            </RevealSection>
        </div>
    }
}
