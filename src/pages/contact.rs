use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::page_hero::PageHero;
use crate::config;
use crate::forms::validation::{ContactDraft, ContactErrors, ContactField};
use crate::forms::{use_submission, SubmissionState};

const HERO_PARALLAX: f64 = 0.3;

const HOURS: [&str; 3] = [
    "Mon - Fri: 6:00 AM - 8:00 PM",
    "Saturday: 7:00 AM - 9:00 PM",
    "Sunday: 7:00 AM - 7:00 PM",
];

fn field_error(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_state(ContactDraft::default);
    let errors = use_state(ContactErrors::default);
    let submission = use_submission(config::CONTACT_SUBMISSION);

    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |state| {
                if *state == SubmissionState::Succeeded {
                    draft.set(ContactDraft::default());
                }
                || ()
            },
            submission.state,
        );
    }

    let on_field = |field: ContactField| {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);
            let mut cleared = (*errors).clone();
            cleared.clear(field);
            errors.set(cleared);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submit = submission.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = draft.validate();
            let valid = found.is_empty();
            errors.set(found);
            if valid {
                submit.emit(());
            }
        })
    };

    let pending = submission.state.is_pending();
    let banner = match submission.state {
        SubmissionState::Succeeded => html! {
            <div class="banner banner-success">
                {"✅ Message sent successfully! We'll get back to you soon."}
            </div>
        },
        SubmissionState::Failed => html! {
            <div class="banner banner-error">
                {"❌ Something went wrong. Please try again."}
            </div>
        },
        _ => html! {},
    };

    html! {
        <main>
            <style>
                {r#"
                    .contact-layout {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 3rem;
                    }
                    .contact-form-card,
                    .contact-info-card {
                        padding: 2.5rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        font-weight: 600;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .contact-info-item {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-info-icon {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #f59e0b, #d97706);
                        font-size: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .contact-info-item h3 {
                        font-weight: 700;
                        color: #111827;
                    }
                    .contact-info-item a {
                        color: #b45309;
                    }
                    @media (max-width: 900px) {
                        .contact-layout {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <PageHero
                title="Get in"
                accent="Touch"
                subtitle="We'd love to hear from you. Visit us, call us, or send us a message."
                parallax={Some(HERO_PARALLAX)}
            />
            <section class="section">
                <div class="container contact-layout">
                    <div class="card contact-form-card">
                        <h2 class="section-title">{"Send us a Message"}</h2>
                        <p class="body-text">{"Have a question or want to make a reservation? We're here to help!"}</p>
                        <form class="contact-form" {onsubmit}>
                            <div class="contact-row">
                                <div>
                                    <label for="contact-name">{"Full Name *"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        class="input"
                                        placeholder="Your full name"
                                        value={draft.name.clone()}
                                        oninput={on_field(ContactField::Name)}
                                        disabled={pending}
                                    />
                                    { field_error(errors.name) }
                                </div>
                                <div>
                                    <label for="contact-phone">{"Phone Number"}</label>
                                    <input
                                        id="contact-phone"
                                        type="tel"
                                        class="input"
                                        placeholder="(555) 123-4567"
                                        value={draft.phone.clone()}
                                        oninput={on_field(ContactField::Phone)}
                                        disabled={pending}
                                    />
                                </div>
                            </div>
                            <div>
                                <label for="contact-email">{"Email Address *"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    class="input"
                                    placeholder="your.email@example.com"
                                    value={draft.email.clone()}
                                    oninput={on_field(ContactField::Email)}
                                    disabled={pending}
                                />
                                { field_error(errors.email) }
                            </div>
                            <div>
                                <label for="contact-message">{"Message *"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="6"
                                    class="input"
                                    placeholder="Tell us about your inquiry, reservation request, or just say hello!"
                                    value={draft.message.clone()}
                                    oninput={on_field(ContactField::Message)}
                                    disabled={pending}
                                />
                                { field_error(errors.message) }
                            </div>
                            { banner }
                            <button type="submit" class="btn btn-primary" disabled={pending}>
                                { if pending { "Sending Message..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                    <div class="card contact-info-card">
                        <h2 class="section-title">{"Visit Our Coffee Shop"}</h2>
                        <div class="contact-info-item">
                            <div class="contact-info-icon">{"📍"}</div>
                            <div>
                                <h3>{"Address"}</h3>
                                <p class="body-text">
                                    {"123 Coffee Street"}<br />
                                    {"Downtown District"}<br />
                                    {"Coffee City, CC 12345"}
                                </p>
                            </div>
                        </div>
                        <div class="contact-info-item">
                            <div class="contact-info-icon">{"📞"}</div>
                            <div>
                                <h3>{"Phone"}</h3>
                                <a href="tel:+15551234567">{"(555) 123-4567"}</a>
                            </div>
                        </div>
                        <div class="contact-info-item">
                            <div class="contact-info-icon">{"✉️"}</div>
                            <div>
                                <h3>{"Email"}</h3>
                                <a href="mailto:hello@coffeemaster.com">{"hello@coffeemaster.com"}</a>
                            </div>
                        </div>
                        <div class="contact-info-item">
                            <div class="contact-info-icon">{"🕒"}</div>
                            <div>
                                <h3>{"Hours"}</h3>
                                { for HOURS.iter().map(|line| html! { <p class="body-text">{*line}</p> }) }
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </main>
    }
}
