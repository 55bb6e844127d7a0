use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{self, ContactFields, SubmitState};
use crate::content::SERVICES;

fn update(fields: &UseStateHandle<ContactFields>, edit: impl Fn(&mut ContactFields, String) + 'static) -> impl Fn(String) {
    let fields = fields.clone();
    move |value| {
        let mut next = (*fields).clone();
        edit(&mut next, value);
        fields.set(next);
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);
    let state = use_state(|| SubmitState::Idle);

    let on_name = {
        let set = update(&fields, |f, v| f.name = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_email = {
        let set = update(&fields, |f, v| f.email = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_phone = {
        let set = update(&fields, |f, v| f.phone = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_service = {
        let set = update(&fields, |f, v| f.service = v);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let on_message = {
        let set = update(&fields, |f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SubmitState::Sending || !fields.is_ready() {
                return;
            }
            state.set(SubmitState::Sending);
            let payload = (*fields).clone();
            let fields = fields.clone();
            let state = state.clone();
            spawn_local(async move {
                contact::submit(payload).await;
                fields.set(ContactFields::default());
                state.set(SubmitState::Sent);
            });
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(SubmitState::Idle))
    };

    let sending = *state == SubmitState::Sending;

    html! {
        <div class="contact-form-wrapper">
            <style>
                {r#"
                    .contact-form-wrapper {
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 16px;
                        padding: 2.5rem;
                    }
                    .contact-form {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.2rem;
                    }
                    .contact-form .full {
                        grid-column: 1 / -1;
                    }
                    .contact-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        font-size: 0.9rem;
                        color: rgba(230, 237, 243, 0.8);
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        padding: 0.8rem 1rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(13, 17, 23, 0.8);
                        color: inherit;
                        font: inherit;
                        transition: border-color 0.2s ease;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #ffa600;
                    }
                    .contact-form textarea {
                        min-height: 140px;
                        resize: vertical;
                    }
                    .contact-form button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                        transform: none;
                        box-shadow: none;
                    }
                    .form-sent {
                        text-align: center;
                    }
                    .form-sent h3 {
                        color: #ffa600;
                    }
                    @media (max-width: 700px) {
                        .contact-form {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            {
                if *state == SubmitState::Sent {
                    html! {
                        <div class="form-sent">
                            <h3>{"Thanks, we have your request."}</h3>
                            <p>{"An engineer will call you back within one working day."}</p>
                            <button class="btn-secondary" onclick={reset}>{"Send another request"}</button>
                        </div>
                    }
                } else {
                    html! {
                        <form class="contact-form" onsubmit={onsubmit}>
                            <label>
                                {"Name"}
                                <input type="text" required=true value={fields.name.clone()} oninput={on_name} disabled={sending} />
                            </label>
                            <label>
                                {"Email"}
                                <input type="email" required=true value={fields.email.clone()} oninput={on_email} disabled={sending} />
                            </label>
                            <label>
                                {"Phone"}
                                <input type="tel" value={fields.phone.clone()} oninput={on_phone} disabled={sending} />
                            </label>
                            <label>
                                {"Service"}
                                <select onchange={on_service} disabled={sending}>
                                    <option value="" selected={fields.service.is_empty()}>{"Not sure yet"}</option>
                                    {
                                        SERVICES.iter().map(|service| html! {
                                            <option value={service.title} selected={fields.service == service.title}>
                                                {service.title}
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>
                            </label>
                            <label class="full">
                                {"Tell us about the job"}
                                <textarea required=true value={fields.message.clone()} oninput={on_message} disabled={sending} />
                            </label>
                            <div class="full">
                                <button type="submit" class="btn-primary" disabled={sending || !fields.is_ready()}>
                                    { if sending { "Sending..." } else { "Request a quote" } }
                                </button>
                            </div>
                        </form>
                    }
                }
            }
        </div>
    }
}
