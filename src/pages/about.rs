use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::components::logo::Logo;
use crate::components::page_hero::PageHero;
use crate::config;
use crate::Route;

const STORY: [&str; 3] = [
    "Our journey began in the misty highlands of Guatemala, where our founder first tasted coffee that \
     changed everything. This wasn't just another morning beverage. It was liquid poetry, each sip telling \
     the story of volcanic soil, careful cultivation, and generations of farming wisdom. That moment sparked \
     a mission to bring these extraordinary flavors directly to coffee lovers everywhere.",
    "Today, we work hand-in-hand with small-scale farmers across Latin America and East Africa, ensuring \
     they receive fair compensation for their exceptional beans. Our master roasters bring over 40 years of \
     combined experience, using precision timing and temperature control to unlock each origin's unique \
     character. Every batch is roasted in small quantities and shipped within 48 hours.",
    "What drives us isn't just creating remarkable coffee. It's building a community where sustainability \
     meets satisfaction. From our carbon-neutral roasting facility to our biodegradable packaging, we're \
     proving that exceptional quality and environmental responsibility go hand in hand.",
];

const VALUES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Quality Excellence",
        "Precision roasting techniques and rigorous quality control ensure every cup delivers the complex \
         flavors and aromatic richness that specialty coffee deserves.",
    ),
    (
        "🌱",
        "Sustainable Impact",
        "Direct trade partnerships and eco-friendly practices support farming communities while protecting \
         the delicate ecosystems where our coffee grows.",
    ),
    (
        "❤️",
        "Customer Devotion",
        "From personalized brewing guidance to responsive customer service, we're dedicated to making your \
         coffee experience exceptional every single day.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let (node, visible) = use_reveal(config::REVEAL_SUBTLE);

    let values = VALUES.iter().enumerate().map(|(index, (icon, title, text))| html! {
        <div
            key={*title}
            class={classes!("card", "about-value", reveal_class(visible))}
            style={format!("transition-delay: {}ms;", 100 + index * 200)}
        >
            <div class="about-value-icon">{*icon}</div>
            <h3>{*title}</h3>
            <p class="body-text">{*text}</p>
        </div>
    }).collect::<Html>();

    html! {
        <main>
            <style>
                {r#"
                    .about-story {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-story-text p {
                        margin-bottom: 1.25rem;
                    }
                    .about-est {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-weight: 600;
                    }
                    .about-visual {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                        transition-delay: 300ms;
                    }
                    .about-icons {
                        display: grid;
                        grid-template-columns: repeat(2, 4rem);
                        gap: 1rem;
                        font-size: 2rem;
                        text-align: center;
                    }
                    .about-values {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .about-value {
                        padding: 2rem;
                        text-align: center;
                    }
                    .about-value-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    @media (max-width: 900px) {
                        .about-story {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <PageHero
                title="Our"
                accent="Coffee Story"
                subtitle="From bean to cup, every step is crafted with intention, passion, and respect for the craft"
            />
            <section ref={node} class="section">
                <div class="container about-story">
                    <div class={classes!("about-story-text", reveal_class(visible))}>
                        <span class="about-est">{"Est. 2020"}</span>
                        <h2 class="section-title">
                            {"Rooted in Tradition, "}
                            <span class="accent">{"Driven by Innovation"}</span>
                        </h2>
                        { for STORY.iter().map(|paragraph| html! { <p class="body-text">{*paragraph}</p> }) }
                    </div>
                    <div class={classes!("about-visual", reveal_class(visible))}>
                        <Logo size={8.0} />
                        <div class="about-icons">
                            <span>{"🌱"}</span>
                            <span>{"☕"}</span>
                            <span>{"🏔️"}</span>
                            <span>{"🤝"}</span>
                        </div>
                    </div>
                </div>
            </section>
            <section class="section">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{"Our Core Values"}</h2>
                        <p class="section-subtitle">
                            {"Every decision we make is guided by these fundamental principles"}
                        </p>
                    </div>
                    <div class="about-values">
                        { values }
                    </div>
                </div>
            </section>
            <section class="section closing-cta">
                <div class="container">
                    <h2 class="section-title">{"Ready to Taste the Difference?"}</h2>
                    <p class="section-subtitle">
                        {"Join thousands of coffee enthusiasts who've discovered what happens when passion meets \
                          precision. Your perfect cup is waiting."}
                    </p>
                    <div class="closing-cta-actions">
                        <Link<Route> to={Route::Coffee} classes="btn btn-primary">{"Explore Our Coffee"}</Link<Route>>
                        <Link<Route> to={Route::Contact} classes="btn">{"Visit Our Roastery"}</Link<Route>>
                    </div>
                </div>
            </section>
        </main>
    }
}
