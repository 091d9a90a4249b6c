use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::format::long_date;
use crate::data::use_catalog;
use crate::Route;

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_DEFAULT);

    html! {
        <section ref={node} class="section blog-teasers">
            <style>
                {r#"
                    .blog-teasers {
                        background: linear-gradient(135deg, #ffffff, #fffbeb, #ffffff);
                    }
                    .teaser-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                    }
                    .teaser-card {
                        padding: 2rem;
                    }
                    .teaser-meta {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .teaser-category {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-weight: 600;
                    }
                    .teaser-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 0.75rem;
                    }
                    .teaser-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-top: 1.5rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .teaser-link {
                        color: #b45309;
                        font-weight: 600;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"Latest from the Blog"}</h2>
                    <p class="section-subtitle">{"Stories from the roastery, the farms and the cup."}</p>
                </div>
                <div class="teaser-grid">
                    {
                        catalog.home.teasers.iter().enumerate().map(|(index, post)| html! {
                            <article
                                class={classes!("card", "teaser-card", reveal_class(visible))}
                                style={format!("transition-delay: {}ms;", 200 + index * 200)}
                            >
                                <div class="teaser-meta">
                                    <span class="teaser-category">{&post.category}</span>
                                    <span>{long_date(post.date)}</span>
                                </div>
                                <h3 class="teaser-title">{&post.title}</h3>
                                <p class="body-text">{&post.excerpt}</p>
                                <div class="teaser-footer">
                                    <span>{&post.read_time}</span>
                                    <Link<Route> to={Route::Blog} classes="teaser-link">
                                        {"Read More →"}
                                    </Link<Route>>
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
