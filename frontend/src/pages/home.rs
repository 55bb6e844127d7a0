use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::clients::ClientGrid;
use crate::components::hero::PageHero;
use crate::components::section::{CardReveal, RevealSection};
use crate::components::stats::StatCounters;
use crate::components::testimonials::Testimonials;
use crate::content::SERVICES;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
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
        <div class="home-page">
            <PageHero
                eyebrow="Electrical · Mechanical · Automation"
                title="Power, motion and control, engineered to keep you running"
                subtitle="Ferrovolt designs, installs and maintains the electro-mechanical systems behind factories, hospitals and commercial buildings."
            >
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Request a quote"}</Link<Route>>
                <Link<Route> to={Route::Projects} classes="btn-secondary">{"See our work"}</Link<Route>>
            </PageHero>

            <StatCounters />

            <RevealSection
                title="What we do"
                subtitle="One contractor for the wiring, the machinery and the controls that tie them together."
                ease="back.out(1.4)"
            >
                <div class="card-grid">
                    {
                        SERVICES.iter().take(6).map(|service| html! {
                            <article class="card reveal-card" data-reveal="true">
                                <span class="card-icon">{service.icon}</span>
                                <h3>{service.title}</h3>
                                <p>{service.summary}</p>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
                <div style="text-align: center; margin-top: 2.5rem;">
                    <Link<Route> to={Route::Services} classes="btn-secondary">{"All services"}</Link<Route>>
                </div>
            </RevealSection>

            <RevealSection
                title="Why clients call us back"
                subtitle="Planned shutdowns that finish on time, and breakdowns fixed before the shift ends."
            >
                <Testimonials />
            </RevealSection>

            <RevealSection title="Trusted by" reveal={CardReveal::Pop}>
                <ClientGrid />
            </RevealSection>

            <section class="cta-band">
                <style>
                    {r#"
                        .cta-band {
                            margin: 2rem auto 6rem;
                            max-width: 1100px;
                            padding: 3.5rem 2rem;
                            border-radius: 18px;
                            text-align: center;
                            background: linear-gradient(120deg, rgba(255, 166, 0, 0.18), rgba(255, 166, 0, 0.04));
                            border: 1px solid rgba(255, 166, 0, 0.3);
                        }
                        .cta-band h2 {
                            margin: 0 0 1rem;
                            font-size: 2rem;
                        }
                        .cta-band p {
                            margin: 0 0 2rem;
                            color: rgba(230, 237, 243, 0.75);
                        }
                    "#}
                </style>
                <h2>{"Plant down right now?"}</h2>
                <p>{"Our emergency crew is on call around the clock."}</p>
                <a class="btn-primary" href={format!("tel:{}", crate::config::CONTACT_PHONE)}>
                    {format!("Call {}", crate::config::CONTACT_PHONE)}
                </a>
            </section>
        </div>
    }
}
