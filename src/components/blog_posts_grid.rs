use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::components::pagination::Pagination;
use crate::config;
use crate::data::catalog::filter_posts;
use crate::data::format::{initials, long_date};
use crate::data::paging::{page_count, page_slice};
use crate::data::{use_catalog, BlogCategory};

#[function_component(BlogPostsGrid)]
pub fn blog_posts_grid() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_SUBTLE);
    let category = use_state(|| None::<BlogCategory>);
    let page = use_state(|| 0usize);

    let filtered = filter_posts(&catalog.blog.posts, *category);
    let total_pages = page_count(filtered.len(), config::POSTS_PER_PAGE);
    let shown = page_slice(&filtered, *page, config::POSTS_PER_PAGE);

    let choose = |choice: Option<BlogCategory>| {
        let category = category.clone();
        let page = page.clone();
        Callback::from(move |_: MouseEvent| {
            category.set(choice);
            page.set(0);
        })
    };

    let filters = std::iter::once(None)
        .chain(BlogCategory::ALL.iter().copied().map(Some))
        .map(|choice| {
            let label = choice.map_or("All Posts", |c| c.label());
            html! {
                <button
                    key={label}
                    class={classes!("chip", (*category == choice).then(|| "chip-active"))}
                    onclick={choose(choice)}
                >
                    {label}
                </button>
            }
        })
        .collect::<Html>();

    let posts = shown.iter().enumerate().map(|(index, post)| html! {
        <article
            key={post.id}
            class={classes!(
                "card",
                "blog-post",
                post.featured.then(|| "blog-post-featured"),
                reveal_class(visible)
            )}
            style={format!("transition-delay: {}ms;", 400 + index * 100)}
        >
            {
                if post.featured {
                    html! { <div class="blog-post-badge">{"Featured"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="blog-post-cover">
                <span class="blog-post-image">{&post.image}</span>
                <span class="blog-post-category">{post.category.label()}</span>
                <span class="blog-post-read">{&post.read_time}</span>
            </div>
            <div class="blog-post-body">
                <div class="blog-post-meta">
                    <span class="blog-post-author">
                        <span class="blog-post-initials">{initials(&post.author)}</span>
                        {&post.author}
                    </span>
                    <span>{long_date(post.date)}</span>
                </div>
                <h3 class="blog-post-title">{&post.title}</h3>
                <p class="body-text">{&post.excerpt}</p>
                <div class="blog-post-tags">
                    {
                        post.tags.iter().take(3).map(|tag| html! {
                            <span key={tag.clone()} class="blog-post-tag">{format!("#{}", tag)}</span>
                        }).collect::<Html>()
                    }
                </div>
                <button class="blog-post-read-more">{"Read Article →"}</button>
            </div>
        </article>
    }).collect::<Html>();

    let on_page = {
        let page = page.clone();
        Callback::from(move |target: usize| page.set(target))
    };

    html! {
        <section ref={node} class="section blog-posts">
            <style>
                {r#"
                    .blog-posts {
                        background: linear-gradient(135deg, #ffffff, #fffbeb);
                    }
                    .blog-post-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .blog-post {
                        position: relative;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.5s ease, box-shadow 0.5s ease, opacity 0.7s ease;
                    }
                    .blog-post:hover {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    }
                    @media (min-width: 1024px) {
                        .blog-post-featured {
                            grid-column: span 2;
                        }
                    }
                    .blog-post-badge {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 2;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f59e0b, #d97706);
                        color: white;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                    .blog-post-cover {
                        position: relative;
                        height: 12rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #fde68a, #f59e0b);
                    }
                    .blog-post-image {
                        font-size: 4rem;
                    }
                    .blog-post-category,
                    .blog-post-read {
                        position: absolute;
                        bottom: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.9);
                        color: #92400e;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .blog-post-category {
                        left: 1rem;
                    }
                    .blog-post-read {
                        right: 1rem;
                    }
                    .blog-post-body {
                        padding: 1.5rem;
                    }
                    .blog-post-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #6b7280;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .blog-post-author {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .blog-post-initials {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-size: 0.75rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .blog-post-title {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 0.75rem;
                    }
                    .blog-post:hover .blog-post-title {
                        color: #b45309;
                    }
                    .blog-post-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin: 1rem 0;
                    }
                    .blog-post-tag {
                        padding: 0.125rem 0.5rem;
                        border-radius: 0.375rem;
                        background: #f3f4f6;
                        color: #4b5563;
                        font-size: 0.75rem;
                    }
                    .blog-post-read-more {
                        background: none;
                        border: none;
                        padding: 0;
                        color: #d97706;
                        font-weight: 600;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"Latest Coffee Stories"}</h2>
                    <p class="section-subtitle">
                        {"Dive into our collection of carefully crafted articles about coffee culture, brewing \
                          techniques, sustainability practices, and the stories behind every cup."}
                    </p>
                </div>
                <div class={classes!("chip-row", reveal_class(visible))} style="transition-delay: 200ms;">
                    { filters }
                </div>
                <div class="blog-post-grid">
                    { posts }
                </div>
                <Pagination page={*page} {total_pages} on_change={on_page} />
            </div>
        </section>
    }
}
