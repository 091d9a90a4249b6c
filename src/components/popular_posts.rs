use log::warn;
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::animation::scroll::scroll_to;
use crate::config;
use crate::data::format::{compact_count, initials, short_date};
use crate::data::use_catalog;

const RECENT_IN_SIDEBAR: usize = 3;

#[function_component(PopularPostsSidebar)]
pub fn popular_posts_sidebar() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_DEFAULT);
    let blog = &catalog.blog;

    let popular = blog.popular.iter().enumerate().map(|(index, post)| html! {
        <article
            key={post.id}
            class={classes!("card", "popular-post", reveal_class(visible))}
            style={format!("transition-delay: {}ms;", 200 + index * 100)}
        >
            <div class="popular-rank">{index + 1}</div>
            <div class="popular-image">{&post.image}</div>
            <div class="popular-body">
                <div class="popular-meta">
                    <span class="popular-category">{post.category.label()}</span>
                    <span>{short_date(post.date)}</span>
                </div>
                <h3 class="popular-title">{&post.title}</h3>
                <div class="popular-meta">
                    <span class="popular-author">
                        <span class="popular-initials">{initials(&post.author)}</span>
                        {&post.author}
                    </span>
                    <span>
                        {&post.read_time}
                        {" · 👁 "}
                        {compact_count(post.views as f64)}
                    </span>
                </div>
            </div>
        </article>
    }).collect::<Html>();

    let categories = blog.categories.iter().map(|entry| html! {
        <button key={entry.category.label()} class="sidebar-category">
            <span>
                <span class="sidebar-category-icon">{&entry.icon}</span>
                {entry.category.label()}
            </span>
            <span class="sidebar-category-count">{entry.count}</span>
        </button>
    }).collect::<Html>();

    let recent = blog.popular.iter().take(RECENT_IN_SIDEBAR).map(|post| html! {
        <div key={post.id} class="sidebar-recent">
            <span class="sidebar-recent-image">{&post.image}</span>
            <div>
                <h4>{&post.title}</h4>
                <div class="sidebar-recent-meta">
                    {format!("{} • {}", short_date(post.date), post.read_time)}
                </div>
            </div>
        </div>
    }).collect::<Html>();

    let subscribe = Callback::from(|_: MouseEvent| {
        if let Err(e) = scroll_to(".blog-newsletter") {
            warn!("could not scroll to newsletter: {}", e);
        }
    });

    html! {
        <aside ref={node} class="section popular-posts">
            <style>
                {r#"
                    .popular-posts {
                        background: #f9fafb;
                    }
                    .popular-layout {
                        display: grid;
                        grid-template-columns: 2fr 1fr;
                        gap: 3rem;
                    }
                    .popular-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .popular-post {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.5rem;
                        cursor: pointer;
                        transition: transform 0.5s ease, opacity 0.7s ease;
                    }
                    .popular-post:hover {
                        transform: translateX(0.5rem);
                    }
                    .popular-rank {
                        flex-shrink: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f59e0b, #d97706);
                        color: white;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .popular-image {
                        font-size: 2.5rem;
                    }
                    .popular-body {
                        flex: 1;
                    }
                    .popular-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .popular-category {
                        padding: 0.125rem 0.5rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-weight: 600;
                    }
                    .popular-title {
                        margin: 0.5rem 0;
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .popular-author {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .popular-initials {
                        width: 1.75rem;
                        height: 1.75rem;
                        border-radius: 9999px;
                        background: #e5e7eb;
                        font-size: 0.625rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .sidebar {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                        transition-delay: 300ms;
                    }
                    .sidebar-box {
                        padding: 1.5rem;
                    }
                    .sidebar-box h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .sidebar-category {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: none;
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .sidebar-category:hover {
                        background: #fffbeb;
                    }
                    .sidebar-category-icon {
                        margin-right: 0.75rem;
                    }
                    .sidebar-category-count {
                        padding: 0.125rem 0.5rem;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    .sidebar-recent {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .sidebar-recent-image {
                        font-size: 1.5rem;
                    }
                    .sidebar-recent h4 {
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .sidebar-recent-meta {
                        color: #6b7280;
                        font-size: 0.75rem;
                    }
                    .sidebar-subscribe {
                        background: linear-gradient(135deg, #f59e0b, #b45309);
                        color: white;
                    }
                    @media (max-width: 1024px) {
                        .popular-layout {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container popular-layout">
                <div class={reveal_class(visible)}>
                    <div class="section-header">
                        <h2 class="section-title">{"Most Popular Articles"}</h2>
                        <p class="section-subtitle">{"Discover our readers' favorite coffee stories and guides"}</p>
                    </div>
                    <div class="popular-list">
                        { popular }
                    </div>
                </div>
                <div class={classes!("sidebar", reveal_class(visible))}>
                    <div class="card sidebar-box">
                        <h3>{"📂 Categories"}</h3>
                        { categories }
                    </div>
                    <div class="card sidebar-box">
                        <h3>{"🕒 Recent Posts"}</h3>
                        { recent }
                    </div>
                    <div class="card sidebar-box sidebar-subscribe">
                        <h3>{"📧 Stay Updated"}</h3>
                        <p>{"Get the latest coffee stories and brewing tips delivered to your inbox weekly."}</p>
                        <button class="btn" onclick={subscribe}>{"Subscribe Now"}</button>
                    </div>
                </div>
            </div>
        </aside>
    }
}
