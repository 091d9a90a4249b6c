use yew::prelude::*;

use crate::animation::easing::{use_counter_ticks, CounterAnimation};
use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::format::stat_display;
use crate::data::{use_catalog, StatFormat};

const RATING_DISTRIBUTION: [(u8, u32); 5] = [(5, 78), (4, 18), (3, 3), (2, 1), (1, 0)];

const TRUST_INDICATORS: [(&str, &str, &str); 3] = [
    ("🔒", "Verified Reviews", "Every review comes from a confirmed purchase"),
    ("🌍", "Global Community", "Coffee lovers from over 40 countries"),
    ("💬", "Honest Feedback", "We publish every review, good or bad"),
];

#[function_component(ReviewsStatsSection)]
pub fn reviews_stats_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_LATE);
    let tick = use_counter_ticks(config::REVIEW_COUNTERS, visible);
    let animation = CounterAnimation::new(config::REVIEW_COUNTERS.duration_ms);
    let counting = tick > 0;

    let stats = &catalog.reviews.stats;
    let cards = stats.iter().enumerate().map(|(index, stat)| {
        let value = match stat.format {
            StatFormat::Rating => animation.rating_at(tick, stat.value),
            _ => animation.value_at(tick, stat.value),
        };
        html! {
            <div
                key={stat.label.clone()}
                class={classes!("review-stat", reveal_class(visible))}
                style={format!("transition-delay: {}ms;", 300 + index * 200)}
            >
                <div class="review-stat-icon">{&stat.icon}</div>
                <div class={classes!("review-stat-value", counting.then(|| "pulse"))}>
                    {stat_display(value, stat.format, &stat.suffix)}
                </div>
                <p class="review-stat-label">{&stat.label}</p>
            </div>
        }
    }).collect::<Html>();

    // The first stat is the total review count.
    let review_total = stats
        .first()
        .map(|stat| animation.value_at(tick, stat.value))
        .unwrap_or_default();

    let bars = RATING_DISTRIBUTION.iter().map(|(rating, percentage)| {
        let width = if visible { *percentage } else { 0 };
        html! {
            <div key={*rating as usize} class="rating-bar-row">
                <span class="rating-bar-label">{format!("{}★", rating)}</span>
                <div class="rating-bar">
                    <div class="rating-bar-fill" style={format!("width: {}%;", width)}></div>
                </div>
                <span class="rating-bar-percent">{format!("{}%", percentage)}</span>
            </div>
        }
    }).collect::<Html>();

    let trust = TRUST_INDICATORS.iter().map(|(icon, title, text)| html! {
        <div key={*title} class="trust-item">
            <span class="trust-icon">{*icon}</span>
            <h4>{*title}</h4>
            <p>{*text}</p>
        </div>
    }).collect::<Html>();

    html! {
        <section ref={node} class="section reviews-stats">
            <style>
                {r#"
                    .reviews-stats {
                        background: linear-gradient(135deg, #78350f, #92400e, #451a03);
                        color: white;
                    }
                    .reviews-stats .section-title,
                    .reviews-stats .section-subtitle {
                        color: white;
                    }
                    .review-stat-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .review-stat {
                        text-align: center;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .review-stat-icon {
                        font-size: 2rem;
                        margin-bottom: 1.5rem;
                    }
                    .review-stat-value {
                        font-size: 2.75rem;
                        font-weight: 700;
                    }
                    .review-stat-label {
                        color: #fde68a;
                        font-weight: 500;
                    }
                    .rating-breakdown {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 2rem;
                        align-items: center;
                        padding: 2.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        transition-delay: 1000ms;
                    }
                    .rating-overall {
                        text-align: center;
                    }
                    .rating-overall-value {
                        font-size: 4rem;
                        font-weight: 700;
                        color: #fcd34d;
                    }
                    .rating-bar-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 0.75rem;
                    }
                    .rating-bar {
                        flex: 1;
                        height: 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        overflow: hidden;
                    }
                    .rating-bar-fill {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #fbbf24, #f59e0b);
                        transition: width 1s ease 1.2s;
                    }
                    .rating-bar-percent {
                        width: 3rem;
                        text-align: right;
                    }
                    .trust-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .trust-icon {
                        font-size: 2rem;
                    }
                    .trust-item p {
                        color: #fde68a;
                    }
                    @media (max-width: 768px) {
                        .rating-breakdown {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">
                        {"Trusted by Coffee Lovers "}
                        <span class="accent-light">{"Worldwide"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Our numbers speak for themselves. Join thousands of satisfied customers who've \
                          discovered their perfect cup and shared their experiences with our community."}
                    </p>
                </div>
                <div class="review-stat-grid">
                    { cards }
                </div>
                <div class={classes!("rating-breakdown", reveal_class(visible))}>
                    <div class="rating-overall">
                        <h3>{"Rating Distribution"}</h3>
                        <div class="rating-overall-value">{"4.9"}</div>
                        <div class="stars">{"★★★★★"}</div>
                        <p>{format!("Based on {}+ reviews", review_total.round() as i64)}</p>
                    </div>
                    <div>
                        { bars }
                    </div>
                </div>
                <div class={classes!("trust-row", reveal_class(visible))}>
                    { trust }
                </div>
            </div>
        </section>
    }
}
