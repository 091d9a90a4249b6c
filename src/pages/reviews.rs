use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::{jump_to, PageHero};
use crate::components::review_form::ReviewForm;
use crate::components::reviews_grid::ReviewsGridSection;
use crate::components::reviews_stats::ReviewsStatsSection;
use crate::Route;

const QUICK_STATS: [(&str, &str); 3] = [
    ("4.9 ★★★★★", "Average Rating"),
    ("12K+", "Happy Customers"),
    ("98%", "Would Recommend"),
];

#[function_component(ReviewsPage)]
pub fn reviews_page() -> Html {
    html! {
        <main id="main-content">
            <PageHero
                badge="Trusted by Coffee Lovers"
                title="Customer"
                accent="Reviews"
                subtitle="Discover what fellow coffee enthusiasts are saying about their CoffeeMaster experience. \
                          Join thousands of satisfied customers who've found their perfect cup."
            >
                <div class="quick-stats">
                    {
                        QUICK_STATS.iter().map(|(value, label)| html! {
                            <div key={*label} class="quick-stat">
                                <div class="quick-stat-value">{*value}</div>
                                <p>{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <button class="btn btn-primary" onclick={jump_to(".reviews-grid")}>{"Read Reviews ↓"}</button>
                <button class="btn" onclick={jump_to(".review-form")}>{"Write a Review ✎"}</button>
            </PageHero>
            <ReviewsGridSection />
            <ReviewsStatsSection />
            <ReviewForm />
            <section class="section closing-cta">
                <div class="container">
                    <h2 class="section-title">{"Ready to Experience CoffeeMaster?"}</h2>
                    <p class="section-subtitle">
                        {"Join thousands of satisfied customers and discover your perfect cup today. \
                          Taste the difference that quality and passion make."}
                    </p>
                    <div class="closing-cta-actions">
                        <Link<Route> to={Route::Coffee} classes="btn btn-primary">{"Shop Coffee Now"}</Link<Route>>
                        <Link<Route> to={Route::About} classes="btn">{"Learn Our Story"}</Link<Route>>
                    </div>
                </div>
            </section>
        </main>
    }
}
