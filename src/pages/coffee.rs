use yew::prelude::*;

use crate::components::brewing_experience::BrewingExperienceSection;
use crate::components::coffee_menu_section::CoffeeMenuSection;
use crate::components::customer_reviews::CustomerReviewsSection;
use crate::components::newsletter::NewsletterSection;
use crate::components::page_hero::{jump_to, PageHero};

const HERO_PARALLAX: f64 = 0.5;

#[function_component(CoffeePage)]
pub fn coffee_page() -> Html {
    html! {
        <main>
            <PageHero
                badge="Premium Coffee Collection"
                title="Discover"
                accent="Extraordinary Coffee"
                subtitle="From single-origin masterpieces to artisanal blends, explore our curated collection \
                          of the world's finest coffee beans, roasted to perfection."
                parallax={Some(HERO_PARALLAX)}
            >
                <button class="btn btn-primary" onclick={jump_to(".coffee-collection")}>
                    {"Explore Our Coffee"}
                </button>
                <button class="btn" onclick={jump_to(".brewing")}>
                    {"View Brewing Guide →"}
                </button>
            </PageHero>
            <CoffeeMenuSection />
            <BrewingExperienceSection />
            <CustomerReviewsSection />
            <NewsletterSection />
        </main>
    }
}
