use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Faq;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: &'static [Faq],
}

/// One answer open at a time; clicking the open question closes it.
#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let open = use_state(|| Some(0usize));

    html! {
        <div class="faq-list">
            <style>
                {r#"
                    .faq-list {
                        max-width: 820px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .faq-item {
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.02);
                        overflow: hidden;
                        transition: border-color 0.3s ease;
                    }
                    .faq-item.open {
                        border-color: rgba(255, 166, 0, 0.45);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.25rem 1.5rem;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.05rem;
                        font-weight: 600;
                        text-align: left;
                        cursor: pointer;
                    }
                    .faq-question .toggle-icon {
                        color: #ffa600;
                        font-size: 1.4rem;
                        transition: transform 0.3s ease;
                    }
                    .faq-item.open .toggle-icon {
                        transform: rotate(45deg);
                    }
                    .faq-answer {
                        max-height: 0;
                        padding: 0 1.5rem;
                        color: rgba(230, 237, 243, 0.7);
                        line-height: 1.7;
                        transition: max-height 0.4s ease, padding 0.4s ease;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 320px;
                        padding: 0 1.5rem 1.5rem;
                    }
                "#}
            </style>
            {
                props.items.iter().enumerate().map(|(index, item)| {
                    let is_open = *open == Some(index);
                    let toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(if is_open { None } else { Some(index) });
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", "reveal-card", is_open.then(|| "open"))} data-reveal="true">
                            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                                <span class="question-text">{item.question}</span>
                                <span class="toggle-icon">{"+"}</span>
                            </button>
                            <div class="faq-answer">
                                <p>{item.answer}</p>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
