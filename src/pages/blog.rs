use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog_newsletter::BlogNewsletterSection;
use crate::components::blog_posts_grid::BlogPostsGrid;
use crate::components::page_hero::{jump_to, PageHero};
use crate::components::popular_posts::PopularPostsSidebar;
use crate::Route;

const QUICK_LINKS: [&str; 4] = ["Latest Posts", "Coffee Tips", "Recipes", "Sustainability"];

const BLOG_FACTS: [(&str, &str); 3] = [
    ("150+", "Articles Published"),
    ("25K+", "Monthly Readers"),
    ("Weekly", "New Content"),
];

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <main id="main-content">
            <PageHero
                badge="Coffee Culture & Stories"
                title="Our"
                accent="Blog"
                subtitle="Explore the rich world of coffee culture, from brewing techniques and origin stories \
                          to sustainability practices and the latest industry insights. Your journey to coffee \
                          mastery starts here."
            >
                <div class="chip-row">
                    {
                        QUICK_LINKS.iter().map(|label| html! {
                            <button key={*label} class="chip" onclick={jump_to(".blog-posts")}>{*label}</button>
                        }).collect::<Html>()
                    }
                </div>
                <button class="btn btn-primary" onclick={jump_to(".blog-posts")}>{"Explore Articles ↓"}</button>
                <button class="btn" onclick={jump_to(".blog-newsletter")}>{"Subscribe to Updates"}</button>
                <div class="quick-stats">
                    {
                        BLOG_FACTS.iter().map(|(value, label)| html! {
                            <div key={*label} class="quick-stat">
                                <div class="quick-stat-value">{*value}</div>
                                <p>{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </PageHero>
            <BlogPostsGrid />
            <PopularPostsSidebar />
            <BlogNewsletterSection />
            <section class="section closing-cta">
                <div class="container">
                    <h2 class="section-title">{"Ready to Begin Your Coffee Journey?"}</h2>
                    <p class="section-subtitle">
                        {"From bean to cup, every story matters. Explore our coffee collection and discover \
                          the perfect blend that matches your taste and values."}
                    </p>
                    <div class="closing-cta-actions">
                        <Link<Route> to={Route::Coffee} classes="btn btn-primary">{"Explore Our Coffee"}</Link<Route>>
                        <Link<Route> to={Route::About} classes="btn">{"Learn Our Story"}</Link<Route>>
                    </div>
                </div>
            </section>
        </main>
    }
}
