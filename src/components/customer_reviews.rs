use yew::prelude::*;
use yew_hooks::use_interval;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::format::{relative_age, stars};
use crate::data::use_catalog;

pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + delta) % len + len) as usize % len as usize
}

#[function_component(CustomerReviewsSection)]
pub fn customer_reviews_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_DEFAULT);
    let current = use_state(|| 0usize);
    let autoplay = use_state(|| true);

    let reviews = &catalog.coffee.carousel;
    let len = reviews.len();

    {
        let current = current.clone();
        let millis = if *autoplay { config::CAROUSEL_INTERVAL_MS } else { 0 };
        use_interval(move || current.set(wrap_index(*current, 1, len)), millis);
    }

    let step = |delta: isize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(wrap_index(*current, delta, len)))
    };
    let set_autoplay = |on: bool| {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(on))
    };

    let slide = match reviews.get(*current) {
        Some(review) => html! {
            <div class="carousel-card">
                <div class="carousel-quote">{"\u{201C}"}</div>
                <div class="carousel-customer">
                    <div class="carousel-avatar">{&review.avatar}</div>
                    <div>
                        <h4 class="carousel-name">{&review.name}</h4>
                        <p class="carousel-location">{&review.location}</p>
                        <div class="stars">{stars(review.rating)}</div>
                    </div>
                </div>
                <blockquote class="carousel-text">{format!("\"{}\"", review.comment)}</blockquote>
                <div class="carousel-meta">
                    <span>{"Coffee: "}<strong class="accent-text">{&review.coffee_type}</strong></span>
                    <span>{relative_age(review.days_ago)}</span>
                </div>
                <button class="carousel-arrow carousel-prev" onclick={step(-1)}>{"‹"}</button>
                <button class="carousel-arrow carousel-next" onclick={step(1)}>{"›"}</button>
            </div>
        },
        None => html! {},
    };

    let dots = (0..len).map(|index| {
        let onclick = {
            let current = current.clone();
            Callback::from(move |_: MouseEvent| current.set(index))
        };
        html! {
            <button key={index} class={classes!("dot", (*current == index).then(|| "dot-active"))} {onclick} />
        }
    }).collect::<Html>();

    html! {
        <section ref={node} class="section customer-reviews">
            <style>
                {r#"
                    .customer-reviews {
                        background: linear-gradient(135deg, #ffffff, #fffbeb, #ffffff);
                    }
                    .carousel-card {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem 4.5rem;
                        border-radius: 1.5rem;
                        background: white;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }
                    .carousel-quote {
                        position: absolute;
                        top: -1.5rem;
                        left: 2rem;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f59e0b, #d97706);
                        color: white;
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .carousel-customer {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .carousel-avatar {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #fde68a, #fbbf24);
                        font-size: 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .carousel-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .carousel-location {
                        color: #4b5563;
                    }
                    .carousel-text {
                        font-size: 1.375rem;
                        font-style: italic;
                        color: #374151;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }
                    .carousel-meta {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 0.5rem;
                        color: #6b7280;
                    }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        background: white;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                        color: #4b5563;
                        font-size: 1.75rem;
                        cursor: pointer;
                    }
                    .carousel-arrow:hover {
                        color: #d97706;
                        background: #fffbeb;
                    }
                    .carousel-prev {
                        left: 1rem;
                    }
                    .carousel-next {
                        right: 1rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"What Our Coffee Lovers Say"}</h2>
                    <p class="section-subtitle">
                        {"Join thousands of satisfied customers who have discovered their perfect cup. \
                          Read authentic reviews from fellow coffee enthusiasts."}
                    </p>
                </div>
                <div
                    class={reveal_class(visible)}
                    style="transition-delay: 300ms;"
                    onmouseenter={set_autoplay(false)}
                    onmouseleave={set_autoplay(true)}
                >
                    { slide }
                    <div class="dot-row">{ dots }</div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        assert_eq!(wrap_index(5, 1, 6), 0);
        assert_eq!(wrap_index(0, -1, 6), 5);
        assert_eq!(wrap_index(2, 1, 6), 3);
        assert_eq!(wrap_index(3, -7, 6), 2);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(wrap_index(0, 1, 0), 0);
        assert_eq!(wrap_index(4, -1, 0), 0);
    }
}
