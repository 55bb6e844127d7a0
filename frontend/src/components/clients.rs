use yew::prelude::*;

use crate::content::CLIENTS;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[function_component(ClientGrid)]
pub fn client_grid() -> Html {
    html! {
        <div class="client-grid">
            <style>
                {r#"
                    .client-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
                        gap: 1rem;
                    }
                    .client-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.8rem;
                        padding: 1.2rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.06);
                        filter: grayscale(1);
                        opacity: 0.75;
                        transition: filter 0.3s ease, border-color 0.3s ease;
                    }
                    .client-logo:hover {
                        filter: none;
                        border-color: rgba(255, 166, 0, 0.4);
                    }
                    .client-mark {
                        width: 40px;
                        height: 40px;
                        display: grid;
                        place-items: center;
                        border-radius: 8px;
                        background: #ffa600;
                        color: #0d1117;
                        font-weight: 700;
                    }
                "#}
            </style>
            {
                CLIENTS.iter().map(|client| html! {
                    <div class="client-logo reveal-card" data-reveal="true">
                        <span class="client-mark">{initials(client)}</span>
                        <span>{*client}</span>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
