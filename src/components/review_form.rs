use log::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::animation::scroll::scroll_to;
use crate::config;
use crate::data::use_catalog;
use crate::forms::validation::{
    rating_label, ReviewDraft, ReviewErrors, ReviewField, TESTIMONIAL_MAX_CHARS,
};
use crate::forms::{use_submission, SubmissionState};

fn with_text(draft: &ReviewDraft, field: ReviewField, value: String) -> ReviewDraft {
    let mut next = draft.clone();
    match field {
        ReviewField::Name => next.name = value,
        ReviewField::Email => next.email = value,
        ReviewField::CoffeeType => next.coffee_type = value,
        ReviewField::Testimonial => next.testimonial = value,
        ReviewField::Rating => {}
    }
    next
}

fn apply_edit(
    draft: &UseStateHandle<ReviewDraft>,
    errors: &UseStateHandle<ReviewErrors>,
    field: ReviewField,
    value: String,
) {
    draft.set(with_text(draft, field, value));
    let mut cleared = (**errors).clone();
    cleared.clear(field);
    errors.set(cleared);
}

fn field_error(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{"⚠ "}{message}</p> },
        None => html! {},
    }
}

#[function_component(ReviewForm)]
pub fn review_form() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_DEFAULT);
    let draft = use_state(ReviewDraft::default);
    let errors = use_state(ReviewErrors::default);
    let hovered_star = use_state(|| 0u8);
    let submission = use_submission(config::REVIEW_SUBMISSION);

    {
        let draft = draft.clone();
        let errors = errors.clone();
        use_effect_with_deps(
            move |state| {
                if *state == SubmissionState::Succeeded {
                    draft.set(ReviewDraft::default());
                    errors.set(ReviewErrors::default());
                }
                || ()
            },
            submission.state,
        );
    }

    let on_text = |field: ReviewField| {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ReviewField::Testimonial => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            apply_edit(&draft, &errors, field, value);
        })
    };

    let on_coffee_type = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            apply_edit(&draft, &errors, ReviewField::CoffeeType, select.value());
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

    if submission.state == SubmissionState::Succeeded {
        let write_another = {
            let reset = submission.reset.clone();
            Callback::from(move |_: MouseEvent| reset.emit(()))
        };
        let view_all = Callback::from(|_: MouseEvent| {
            if let Err(e) = scroll_to(".reviews-grid") {
                warn!("could not scroll to reviews: {}", e);
            }
        });
        return html! {
            <section class="section review-form">
                <div class="container review-form-narrow">
                    <div class="card review-thanks">
                        <div class="review-thanks-icon">{"✓"}</div>
                        <h3>{"Thank You for Your Review!"}</h3>
                        <p class="body-text">
                            {"Your review has been submitted successfully and will be published after our team \
                              reviews it. We truly appreciate your feedback and are delighted you enjoyed your \
                              CoffeeMaster experience!"}
                        </p>
                        <div class="review-thanks-actions">
                            <button class="btn btn-primary" onclick={write_another}>{"Write Another Review"}</button>
                            <button class="btn" onclick={view_all}>{"View All Reviews"}</button>
                        </div>
                    </div>
                </div>
            </section>
        };
    }

    let pending = submission.state.is_pending();
    let shown_rating = if *hovered_star > 0 { *hovered_star } else { draft.rating };

    let star_buttons = (1..=5u8).map(|value| {
        let onclick = {
            let draft = draft.clone();
            let errors = errors.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*draft).clone();
                next.rating = value;
                draft.set(next);
                let mut cleared = (*errors).clone();
                cleared.clear(ReviewField::Rating);
                errors.set(cleared);
            })
        };
        let onmouseenter = {
            let hovered_star = hovered_star.clone();
            Callback::from(move |_: MouseEvent| hovered_star.set(value))
        };
        let onmouseleave = {
            let hovered_star = hovered_star.clone();
            Callback::from(move |_: MouseEvent| hovered_star.set(0))
        };
        let label = if value == 1 { "Rate 1 star".to_string() } else { format!("Rate {} stars", value) };
        html! {
            <button
                key={value as usize}
                type="button"
                class={classes!("star-pick", (value <= shown_rating).then(|| "star-pick-active"))}
                aria-label={label}
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                {"★"}
            </button>
        }
    }).collect::<Html>();

    let coffee_options = catalog.reviews.coffee_types.iter().map(|kind| html! {
        <option key={kind.clone()} value={kind.clone()} selected={draft.coffee_type == *kind}>
            {kind}
        </option>
    }).collect::<Html>();

    let input_class = |error: Option<&'static str>| {
        classes!("input", error.map(|_| "input-invalid"))
    };

    html! {
        <section ref={node} class="section review-form">
            <style>
                {r#"
                    .review-form {
                        background: linear-gradient(135deg, #fffbeb, #ffffff, #fff7ed);
                    }
                    .review-form-narrow {
                        max-width: 56rem;
                    }
                    .review-form-card {
                        padding: 3rem;
                        transition-delay: 200ms;
                    }
                    .review-form-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .review-form-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .review-form-block {
                        margin-bottom: 2rem;
                    }
                    .review-form label {
                        display: block;
                        font-weight: 600;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .input-invalid {
                        border-color: #fca5a5;
                        background: #fef2f2;
                    }
                    .star-pick {
                        background: none;
                        border: none;
                        font-size: 2rem;
                        color: #d1d5db;
                        cursor: pointer;
                        transition: transform 0.2s ease, color 0.2s ease;
                    }
                    .star-pick:hover {
                        transform: scale(1.1);
                    }
                    .star-pick-active {
                        color: #fbbf24;
                    }
                    .review-counter-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .review-submit {
                        width: 100%;
                        font-size: 1.125rem;
                    }
                    .review-thanks {
                        text-align: center;
                        padding: 3rem;
                    }
                    .review-thanks-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 9999px;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .review-thanks-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        margin-top: 2rem;
                        flex-wrap: wrap;
                    }
                "#}
            </style>
            <div class="container review-form-narrow">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"Share Your Experience"}</h2>
                    <p class="section-subtitle">
                        {"Help fellow coffee lovers discover their perfect cup by sharing your honest review. \
                          Your feedback helps us continue delivering exceptional coffee experiences."}
                    </p>
                </div>
                <div class={classes!("card", "review-form-card", reveal_class(visible))}>
                    <form {onsubmit}>
                        <div class="review-form-block">
                            <h3>{"Personal Information"}</h3>
                            <div class="review-form-grid">
                                <div>
                                    <label for="review-name">{"Full Name *"}</label>
                                    <input
                                        id="review-name"
                                        type="text"
                                        class={input_class(errors.name)}
                                        placeholder="Enter your full name"
                                        value={draft.name.clone()}
                                        oninput={on_text(ReviewField::Name)}
                                        disabled={pending}
                                    />
                                    { field_error(errors.name) }
                                </div>
                                <div>
                                    <label for="review-email">{"Email Address *"}</label>
                                    <input
                                        id="review-email"
                                        type="email"
                                        class={input_class(errors.email)}
                                        placeholder="Enter your email address"
                                        value={draft.email.clone()}
                                        oninput={on_text(ReviewField::Email)}
                                        disabled={pending}
                                    />
                                    { field_error(errors.email) }
                                </div>
                            </div>
                        </div>
                        <div class="review-form-block">
                            <h3>{"Your Rating"}</h3>
                            <label>{"Overall Rating *"}</label>
                            <div>{ star_buttons }</div>
                            <p class="body-text">{rating_label(draft.rating)}</p>
                            { field_error(errors.rating) }
                        </div>
                        <div class="review-form-block">
                            <label for="review-coffee">{"Coffee Type (Optional)"}</label>
                            <select
                                id="review-coffee"
                                class="input"
                                onchange={on_coffee_type}
                                disabled={pending}
                            >
                                <option value="" selected={draft.coffee_type.is_empty()}>
                                    {"Select the coffee you're reviewing"}
                                </option>
                                { coffee_options }
                            </select>
                        </div>
                        <div class="review-form-block">
                            <label for="review-text">{"Your Review *"}</label>
                            <textarea
                                id="review-text"
                                rows="6"
                                maxlength={TESTIMONIAL_MAX_CHARS.to_string()}
                                class={input_class(errors.testimonial)}
                                placeholder="Share your experience with our coffee. What did you love most about it? \
                                             How was the taste, aroma, and overall quality?"
                                value={draft.testimonial.clone()}
                                oninput={on_text(ReviewField::Testimonial)}
                                disabled={pending}
                            />
                            <div class="review-counter-row">
                                <div>{ field_error(errors.testimonial) }</div>
                                <span>
                                    {format!("{}/{}", draft.testimonial.chars().count(), TESTIMONIAL_MAX_CHARS)}
                                </span>
                            </div>
                        </div>
                        <button type="submit" class="btn btn-primary review-submit" disabled={pending}>
                            { if pending { "Submitting Your Review..." } else { "Submit Review" } }
                        </button>
                        {
                            if submission.state == SubmissionState::Failed {
                                html! {
                                    <div class="banner banner-error">
                                        {"Something went wrong submitting your review. Please try again."}
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_edits_touch_only_their_field() {
        let draft = ReviewDraft {
            rating: 4,
            ..ReviewDraft::default()
        };
        let next = with_text(&draft, ReviewField::Email, "a@b.co".into());
        assert_eq!(next.email, "a@b.co");
        assert_eq!(next.rating, 4);
        assert!(next.name.is_empty());

        // rating is set through the star picker, not as text
        let unchanged = with_text(&next, ReviewField::Rating, "5".into());
        assert_eq!(unchanged, next);
    }
}
