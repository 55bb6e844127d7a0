use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod motion {
    pub mod controller;
    pub mod dom;
    pub mod easing;
    pub mod error;
    pub mod group;
    pub mod hooks;
    pub mod presets;
    pub mod scheduler;
    pub mod stage;
    pub mod state;
    pub mod target;
    pub mod trigger;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod clients;
    pub mod contact_form;
    pub mod faq;
    pub mod floating_shapes;
    pub mod footer;
    pub mod hero;
    pub mod section;
    pub mod stats;
    pub mod testimonials;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod projects;
    pub mod services;
}

use components::footer::Footer;
use pages::{
    about::About, contact::Contact, home::Home, not_found::NotFound, projects::Projects,
    services::Services,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Pixels scrolled before the nav bar gets its solid background.
const NAV_SOLID_AFTER: i32 = 40;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top())
                        .unwrap_or_default();
                    is_scrolled.set(scroll_top > NAV_SOLID_AFTER);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not attach nav scroll listener");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let link = |to: Route, label: &'static str| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={to} classes="nav-link">{label}</Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(13, 17, 23, 0.92);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.35);
                        backdrop-filter: blur(8px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1.1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.4rem;
                        font-weight: 800;
                        text-decoration: none;
                        letter-spacing: 0.02em;
                    }
                    .nav-logo span {
                        color: #ffa600;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.8rem;
                    }
                    .nav-link {
                        text-decoration: none;
                        color: rgba(230, 237, 243, 0.8);
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #ffa600;
                    }
                    .nav-cta {
                        padding: 0.55rem 1.3rem;
                        border-radius: 8px;
                        background: #ffa600;
                        color: #0d1117;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.3rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #e6edf3;
                    }
                    @media (max-width: 800px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem 2rem;
                            background: rgba(13, 17, 23, 0.97);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span>{"Ferro"}</span>{"volt"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { link(Route::About, "About") }
                    { link(Route::Services, "Services") }
                    { link(Route::Projects, "Projects") }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Get a quote"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
