use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class="card-grid testimonials">
            <style>
                {r#"
                    .testimonial {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }
                    .testimonial blockquote {
                        margin: 0;
                        font-size: 1.05rem;
                        line-height: 1.7;
                        font-style: italic;
                    }
                    .testimonial blockquote::before {
                        content: "\201C";
                        display: block;
                        font-size: 3rem;
                        line-height: 1;
                        color: #ffa600;
                    }
                    .testimonial-author strong {
                        display: block;
                    }
                    .testimonial-author span {
                        color: rgba(230, 237, 243, 0.6);
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            {
                TESTIMONIALS.iter().map(|testimonial| html! {
                    <figure class="card testimonial reveal-card" data-reveal="true">
                        <blockquote>{testimonial.quote}</blockquote>
                        <figcaption class="testimonial-author">
                            <strong>{testimonial.name}</strong>
                            <span>{testimonial.role}</span>
                        </figcaption>
                    </figure>
                }).collect::<Html>()
            }
        </div>
    }
}
