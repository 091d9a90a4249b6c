use yew::prelude::*;

use crate::components::blog_section::BlogSection;
use crate::components::coffee_menu::CoffeeMenu;
use crate::components::hero::HeroSection;
use crate::components::stats::StatsSection;
use crate::components::streaming::StreamingSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <HeroSection />
            <StreamingSection />
            <CoffeeMenu />
            <StatsSection />
            <BlogSection />
        </main>
    }
}
