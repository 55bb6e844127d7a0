use yew::prelude::*;

use crate::components::floating_shapes::FloatingShapes;
use crate::motion::controller::MotionSpec;
use crate::motion::dom;
use crate::motion::hooks::use_section_motion;
use crate::motion::presets;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Top-of-page banner. Its copy plays in on mount, no scrolling needed.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let node = use_node_ref();
    use_section_motion("hero", node.clone(), (), |root| {
        vec![MotionSpec::immediate(
            presets::fade_up("hero-copy", dom::select(root, ".page-hero-content > [data-reveal]"))
                .stagger(0.15)
                .delay(0.1),
        )]
    });

    html! {
        <header class={classes!("page-hero", props.compact.then(|| "compact"))} ref={node}>
            <style>
                {r#"
                    .page-hero {
                        position: relative;
                        min-height: 88vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 2rem 4rem;
                        background:
                            radial-gradient(circle at 20% 20%, rgba(255, 166, 0, 0.12), transparent 45%),
                            linear-gradient(160deg, #0d1117 0%, #141b26 60%, #1b2433 100%);
                        overflow: hidden;
                    }
                    .page-hero.compact {
                        min-height: 52vh;
                    }
                    .page-hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 860px;
                        text-align: center;
                    }
                    .hero-eyebrow {
                        display: inline-block;
                        margin-bottom: 1.2rem;
                        padding: 0.35rem 1rem;
                        border: 1px solid rgba(255, 166, 0, 0.4);
                        border-radius: 999px;
                        color: #ffa600;
                        font-size: 0.85rem;
                        letter-spacing: 0.12em;
                        text-transform: uppercase;
                    }
                    .hero-title {
                        font-size: clamp(2.4rem, 6vw, 4.4rem);
                        line-height: 1.05;
                        margin: 0 0 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        line-height: 1.6;
                        color: rgba(230, 237, 243, 0.75);
                        margin: 0 auto 2.5rem;
                        max-width: 640px;
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .btn-primary, .btn-secondary {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 8px;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.25s ease, box-shadow 0.25s ease, background 0.25s ease;
                        cursor: pointer;
                        border: none;
                        font-size: 1rem;
                    }
                    .btn-primary {
                        background: #ffa600;
                        color: #0d1117;
                    }
                    .btn-primary:hover {
                        transform: translateY(-3px);
                        box-shadow: 0 12px 24px rgba(255, 166, 0, 0.3);
                    }
                    .btn-secondary {
                        background: transparent;
                        color: #e6edf3;
                        border: 1px solid rgba(230, 237, 243, 0.3);
                    }
                    .btn-secondary:hover {
                        background: rgba(230, 237, 243, 0.08);
                        transform: translateY(-3px);
                    }
                "#}
            </style>
            <FloatingShapes />
            <div class="page-hero-content">
                {
                    if let Some(eyebrow) = &props.eyebrow {
                        html! { <span class="hero-eyebrow" data-reveal="true">{eyebrow}</span> }
                    } else {
                        html! {}
                    }
                }
                <h1 class="hero-title" data-reveal="true">{&props.title}</h1>
                <p class="hero-subtitle" data-reveal="true">{&props.subtitle}</p>
                if !props.children.is_empty() {
                    <div class="hero-actions" data-reveal="true">
                        { for props.children.iter() }
                    </div>
                }
            </div>
        </header>
    }
}
