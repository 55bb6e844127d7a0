use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero::PageHero;
use crate::components::section::RevealSection;
use crate::config;

#[function_component(Contact)]
pub fn contact() -> Html {
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

    let details = [
        ("📞", "Call", html! { <a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE}</a> }),
        ("✉️", "Email", html! { <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a> }),
        ("📍", "Visit", html! { <span>{config::CONTACT_ADDRESS}</span> }),
        ("🕒", "Hours", html! { <span>{config::OFFICE_HOURS}</span> }),
    ];

    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 2rem;
                        align-items: start;
                    }
                    .contact-details {
                        display: grid;
                        gap: 1rem;
                    }
                    .contact-details .card a {
                        color: #ffa600;
                        text-decoration: none;
                    }
                    @media (max-width: 900px) {
                        .contact-layout {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <PageHero
                compact=true
                eyebrow="Contact"
                title="Tell us what needs fixing, building or automating"
                subtitle="Send a few details and an engineer, not a salesperson, will get back to you."
            />

            <RevealSection title="Get in touch">
                <div class="contact-layout">
                    <div class="contact-details">
                        {
                            details.into_iter().map(|(icon, label, body)| html! {
                                <div class="card reveal-card" data-reveal="true">
                                    <span class="card-icon">{icon}</span>
                                    <h3>{label}</h3>
                                    {body}
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="reveal-card" data-reveal="true">
                        <ContactForm />
                    </div>
                </div>
            </RevealSection>
        </div>
    }
}
