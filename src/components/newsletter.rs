use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::forms::validation::email_error;
use crate::forms::{use_submission, SubmissionState};

const BENEFITS: [(&str, &str, &str); 3] = [
    ("🎁", "Exclusive Offers", "Get first access to sales and member-only discounts"),
    ("☕", "New Releases", "Be the first to try our latest coffee discoveries"),
    ("📚", "Brewing Tips", "Expert advice to perfect your coffee brewing skills"),
];

#[function_component(NewsletterSection)]
pub fn newsletter_section() -> Html {
    let (node, visible) = use_reveal(config::REVEAL_LATE);
    let email = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let submission = use_submission(config::NEWSLETTER_SUBMISSION);

    {
        let email = email.clone();
        use_effect_with_deps(
            move |state| {
                if *state == SubmissionState::Succeeded {
                    email.set(String::new());
                }
                || ()
            },
            submission.state,
        );
    }

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let submit = submission.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match email_error(&email) {
                Some(message) => error.set(Some(message)),
                None => submit.emit(()),
            }
        })
    };

    let pending = submission.state.is_pending();

    html! {
        <section ref={node} class="section newsletter">
            <style>
                {r#"
                    .newsletter {
                        background: linear-gradient(135deg, #111827, #78350f, #111827);
                    }
                    .newsletter-card {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        text-align: center;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(217, 119, 6, 0.3);
                        background: linear-gradient(90deg, rgba(146, 64, 14, 0.3), rgba(180, 83, 9, 0.3));
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                    }
                    .newsletter-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #fbbf24, #d97706);
                        font-size: 1.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .newsletter .section-title {
                        color: white;
                    }
                    .newsletter .section-subtitle {
                        color: #fde68a;
                    }
                    .newsletter-benefits {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .newsletter-benefit h4 {
                        color: #fde68a;
                        font-weight: 600;
                        margin: 0.75rem 0 0.5rem;
                    }
                    .newsletter-benefit p {
                        color: #fcd34d;
                        font-size: 0.875rem;
                    }
                    .newsletter-form {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        max-width: 28rem;
                        margin: 0 auto;
                    }
                    .newsletter-form input {
                        flex: 1;
                        min-width: 14rem;
                    }
                    .newsletter-note {
                        margin-top: 1rem;
                        color: #fcd34d;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("newsletter-card", reveal_class(visible))}>
                    <div class="newsletter-icon">{"📧"}</div>
                    <h2 class="section-title">{"Stay in the Loop"}</h2>
                    <p class="section-subtitle">
                        {"Get exclusive access to new coffee releases, brewing tips, and special offers. \
                          Join our community of coffee enthusiasts and never miss a beat."}
                    </p>
                    <div class="newsletter-benefits">
                        {
                            BENEFITS.iter().map(|(icon, title, text)| html! {
                                <div class="newsletter-benefit">
                                    <span style="font-size: 1.25rem;">{*icon}</span>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    {
                        if submission.state == SubmissionState::Succeeded {
                            html! {
                                <div class="banner banner-success">
                                    {"🎉 Welcome aboard! Check your inbox to confirm your subscription."}
                                </div>
                            }
                        } else {
                            html! {
                                <form class="newsletter-form" {onsubmit}>
                                    <input
                                        class="input"
                                        type="email"
                                        placeholder="Enter your email address"
                                        value={(*email).clone()}
                                        {oninput}
                                        disabled={pending}
                                    />
                                    <button class="btn btn-primary" type="submit" disabled={pending}>
                                        { if pending { "Subscribing..." } else { "Subscribe" } }
                                    </button>
                                </form>
                            }
                        }
                    }
                    {
                        if let Some(message) = *error {
                            html! { <p class="field-error">{message}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <p class="newsletter-note">{"No spam, unsubscribe at any time."}</p>
                </div>
            </div>
        </section>
    }
}
