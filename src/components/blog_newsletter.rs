use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::use_catalog;
use crate::forms::validation::BlogSignup;
use crate::forms::{use_submission, SubmissionState};

const PERKS: [(&str, &str, &str); 3] = [
    ("📚", "Weekly Guides", "Expert brewing tips and coffee knowledge"),
    ("🎁", "Exclusive Content", "Subscriber-only articles and early access"),
    ("🌍", "Origin Stories", "Behind-the-scenes farm visits and stories"),
];

#[function_component(BlogNewsletterSection)]
pub fn blog_newsletter_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_LATE);
    let signup = use_state(BlogSignup::default);
    let submission = use_submission(config::BLOG_NEWSLETTER_SUBMISSION);

    {
        let signup = signup.clone();
        use_effect_with_deps(
            move |state| {
                if *state == SubmissionState::Succeeded {
                    signup.set(BlogSignup::default());
                }
                || ()
            },
            submission.state,
        );
    }

    if submission.state == SubmissionState::Succeeded {
        let continue_reading = {
            let reset = submission.reset.clone();
            Callback::from(move |_: MouseEvent| reset.emit(()))
        };
        return html! {
            <section class="section blog-newsletter">
                <div class="container blog-newsletter-narrow">
                    <div class="blog-newsletter-card blog-newsletter-thanks">
                        <div class="blog-newsletter-icon">{"✓"}</div>
                        <h3>{"Welcome to Our Coffee Community!"}</h3>
                        <p>
                            {"Thank you for subscribing to our blog newsletter! You'll receive your first update \
                              within the next few days, packed with the latest coffee stories, brewing tips, and \
                              exclusive content."}
                        </p>
                        <button class="btn btn-primary" onclick={continue_reading}>{"Continue Reading"}</button>
                    </div>
                </div>
            </section>
        };
    }

    let on_name = {
        let signup = signup.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*signup).clone();
            next.name = input.value();
            signup.set(next);
        })
    };

    let on_email = {
        let signup = signup.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*signup).clone();
            next.email = input.value();
            signup.set(next);
        })
    };

    let onsubmit = {
        let signup = signup.clone();
        let submit = submission.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if signup.is_complete() {
                submit.emit(());
            }
        })
    };

    let pending = submission.state.is_pending();

    let interests = catalog.blog.interests.iter().map(|interest| {
        let onclick = {
            let signup = signup.clone();
            let id = interest.id.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*signup).clone();
                next.toggle_interest(&id);
                signup.set(next);
            })
        };
        html! {
            <button
                key={interest.id.clone()}
                type="button"
                class={classes!(
                    "interest",
                    signup.has_interest(&interest.id).then(|| "interest-active")
                )}
                disabled={pending}
                {onclick}
            >
                <span class="interest-icon">{&interest.icon}</span>
                {&interest.label}
            </button>
        }
    }).collect::<Html>();

    let perks = PERKS.iter().map(|(icon, title, text)| html! {
        <div key={*title} class="blog-newsletter-perk">
            <span class="blog-newsletter-perk-icon">{*icon}</span>
            <h4>{*title}</h4>
            <p>{*text}</p>
        </div>
    }).collect::<Html>();

    html! {
        <section ref={node} class="section blog-newsletter">
            <style>
                {r#"
                    .blog-newsletter {
                        background: linear-gradient(135deg, #111827, #78350f, #111827);
                        color: white;
                    }
                    .blog-newsletter-narrow {
                        max-width: 64rem;
                    }
                    .blog-newsletter-card {
                        padding: 4rem 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(217, 119, 6, 0.3);
                        background: linear-gradient(90deg, rgba(146, 64, 14, 0.3), rgba(180, 83, 9, 0.3));
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
                        text-align: center;
                    }
                    .blog-newsletter-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #fbbf24, #d97706);
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .blog-newsletter-card h2 {
                        font-size: 2.75rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .blog-newsletter-card p {
                        color: #fde68a;
                    }
                    .blog-newsletter-form {
                        max-width: 42rem;
                        margin: 2rem auto 0;
                        text-align: left;
                        transition-delay: 800ms;
                    }
                    .blog-newsletter-fields {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .blog-newsletter-form label {
                        display: block;
                        color: #fde68a;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .interests {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                    }
                    .interest {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 2px solid rgba(217, 119, 6, 0.5);
                        background: rgba(255, 255, 255, 0.2);
                        color: #fde68a;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }
                    .interest:hover {
                        transform: scale(1.05);
                    }
                    .interest-active {
                        background: #f59e0b;
                        border-color: #fbbf24;
                        color: white;
                    }
                    .interest-icon {
                        margin-right: 0.5rem;
                    }
                    .blog-newsletter-submit {
                        width: 100%;
                        font-size: 1.125rem;
                    }
                    .blog-newsletter-privacy {
                        margin-top: 1rem;
                        text-align: center;
                        font-size: 0.875rem;
                    }
                    .blog-newsletter-perks {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        margin-top: 3rem;
                        transition-delay: 1000ms;
                    }
                    .blog-newsletter-perk-icon {
                        font-size: 2rem;
                    }
                "#}
            </style>
            <div class="container blog-newsletter-narrow">
                <div class={classes!("blog-newsletter-card", reveal_class(visible))}>
                    <div class="blog-newsletter-icon">{"📧"}</div>
                    <h2>{"Never Miss a Story"}</h2>
                    <p>
                        {"Subscribe to our weekly newsletter and get the latest coffee stories, brewing guides, \
                          and exclusive content delivered straight to your inbox."}
                    </p>
                    <form class={classes!("blog-newsletter-form", reveal_class(visible))} {onsubmit}>
                        <div class="blog-newsletter-fields">
                            <div>
                                <label for="blog-newsletter-name">{"Your Name"}</label>
                                <input
                                    id="blog-newsletter-name"
                                    type="text"
                                    class="input"
                                    placeholder="Enter your name"
                                    required={true}
                                    value={signup.name.clone()}
                                    oninput={on_name}
                                    disabled={pending}
                                />
                            </div>
                            <div>
                                <label for="blog-newsletter-email">{"Email Address"}</label>
                                <input
                                    id="blog-newsletter-email"
                                    type="email"
                                    class="input"
                                    placeholder="Enter your email"
                                    required={true}
                                    value={signup.email.clone()}
                                    oninput={on_email}
                                    disabled={pending}
                                />
                            </div>
                        </div>
                        <label>{"What interests you most? (Optional)"}</label>
                        <div class="interests">
                            { interests }
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary blog-newsletter-submit"
                            disabled={pending || !signup.is_complete()}
                        >
                            { if pending { "Subscribing..." } else { "Subscribe to Newsletter" } }
                        </button>
                        <p class="blog-newsletter-privacy">
                            {"We respect your privacy. Unsubscribe at any time. No spam, just great coffee content."}
                        </p>
                    </form>
                    <div class={classes!("blog-newsletter-perks", reveal_class(visible))}>
                        { perks }
                    </div>
                </div>
            </div>
        </section>
    }
}
