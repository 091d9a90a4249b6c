use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::components::pagination::Pagination;
use crate::config;
use crate::data::catalog::{filter_reviews, ReviewFilter};
use crate::data::format::{relative_age, stars};
use crate::data::paging::{page_count, page_slice};
use crate::data::use_catalog;

#[function_component(ReviewsGridSection)]
pub fn reviews_grid_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_SUBTLE);
    let filter = use_state(|| ReviewFilter::All);
    let page = use_state(|| 0usize);

    let filtered = filter_reviews(&catalog.reviews.reviews, *filter);
    let total_pages = page_count(filtered.len(), config::REVIEWS_PER_PAGE);
    let shown = page_slice(&filtered, *page, config::REVIEWS_PER_PAGE);

    let tabs = ReviewFilter::ALL.iter().map(|option| {
        let option = *option;
        let onclick = {
            let filter = filter.clone();
            let page = page.clone();
            Callback::from(move |_: MouseEvent| {
                filter.set(option);
                page.set(0);
            })
        };
        html! {
            <button
                key={option.label()}
                class={classes!("chip", (*filter == option).then(|| "chip-active"))}
                {onclick}
            >
                {option.label()}
            </button>
        }
    }).collect::<Html>();

    let cards = shown.iter().enumerate().map(|(index, review)| html! {
        <div
            key={review.id}
            class={classes!("card", "review-card", reveal_class(visible))}
            style={format!("transition-delay: {}ms;", 400 + index * 100)}
        >
            <div class="review-head">
                <div class="review-avatar">{&review.avatar}</div>
                <div>
                    <h4 class="review-name">
                        {&review.name}
                        {
                            if review.verified {
                                html! { <span class="review-verified">{"✓ Verified"}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </h4>
                    <p class="review-location">{&review.location}</p>
                </div>
            </div>
            <div class="review-meta">
                <span>
                    <span class="stars">{stars(review.rating)}</span>
                    <strong>{format!(" {}.0", review.rating)}</strong>
                </span>
                <span>{relative_age(review.days_ago)}</span>
            </div>
            <span class="review-coffee">{&review.coffee_type}</span>
            <blockquote class="review-text">{format!("\"{}\"", review.testimonial)}</blockquote>
            <div class="review-actions">
                <span>{format!("👍 Helpful ({})", review.helpful)}</span>
            </div>
        </div>
    }).collect::<Html>();

    let on_page = {
        let page = page.clone();
        Callback::from(move |target: usize| page.set(target))
    };

    html! {
        <section ref={node} class="section reviews-grid">
            <style>
                {r#"
                    .reviews-grid {
                        background: linear-gradient(135deg, #f9fafb, #ffffff, #fffbeb);
                    }
                    .review-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .review-card {
                        padding: 1.5rem;
                        transition: transform 0.5s ease, box-shadow 0.5s ease, opacity 1s ease;
                    }
                    .review-card:hover {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }
                    .review-head {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .review-avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #fde68a, #fbbf24);
                        font-size: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .review-name {
                        font-weight: 700;
                        color: #111827;
                    }
                    .review-verified {
                        margin-left: 0.5rem;
                        padding: 0.125rem 0.5rem;
                        border-radius: 9999px;
                        background: #dcfce7;
                        color: #166534;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                    .review-location {
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    .review-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .review-coffee {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .review-text {
                        margin: 1rem 0;
                        color: #374151;
                        line-height: 1.6;
                    }
                    .review-actions {
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"What Our Customers Say"}</h2>
                    <p class="section-subtitle">
                        {"Authentic reviews from real coffee lovers. Every testimonial represents a genuine \
                          experience with our carefully crafted coffee blends and exceptional service."}
                    </p>
                </div>
                <div class={classes!("chip-row", reveal_class(visible))} style="transition-delay: 200ms;">
                    { tabs }
                </div>
                <div class="review-cards">
                    { cards }
                </div>
                <Pagination page={*page} {total_pages} on_change={on_page} />
            </div>
        </section>
    }
}
