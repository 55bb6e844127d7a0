use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        padding: 3rem 2rem 2rem;
                        background: #0a0d12;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                    }
                    .footer-grid h4 {
                        margin: 0 0 1rem;
                        color: #ffa600;
                    }
                    .footer-grid p, .footer-grid a {
                        display: block;
                        margin: 0 0 0.5rem;
                        color: rgba(230, 237, 243, 0.65);
                        text-decoration: none;
                    }
                    .footer-grid a:hover {
                        color: #e6edf3;
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 2rem auto 0;
                        font-size: 0.85rem;
                        color: rgba(230, 237, 243, 0.45);
                    }
                    @media (max-width: 800px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h4>{config::COMPANY_NAME}</h4>
                    <p>{"Electrical, mechanical and automation work for plants, hospitals and commercial buildings."}</p>
                    <p>{config::CONTACT_ADDRESS}</p>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Projects}>{"Projects"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div>
                    <h4>{"Reach us"}</h4>
                    <a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE}</a>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    <p>{config::OFFICE_HOURS}</p>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {} {}. All rights reserved.", year, config::COMPANY_NAME, config::COMPANY_TAGLINE)}
            </div>
        </footer>
    }
}
