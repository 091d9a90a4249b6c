use log::warn;
use yew::prelude::*;

use crate::animation::scroll::{parallax_offset, scroll_to, ScrollListener};

pub fn jump_to(selector: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(e) = scroll_to(selector) {
            warn!("could not scroll to {}: {}", selector, e);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    pub title: AttrValue,
    pub accent: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub parallax: Option<f64>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    let entered = use_state(|| false);
    let offset = use_state(|| 0.0f64);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                entered.set(true);
                || ()
            },
            (),
        );
    }

    {
        let offset = offset.setter();
        use_effect_with_deps(
            move |rate| {
                let listener = (*rate).and_then(|rate| {
                    ScrollListener::subscribe(move |scroll_y| {
                        offset.set(parallax_offset(scroll_y, rate));
                    })
                    .map_err(|e| warn!("parallax disabled: {}", e))
                    .ok()
                });
                move || drop(listener)
            },
            props.parallax,
        );
    }

    let enter = |delay_ms: u32| {
        (
            classes!("page-hero-enter", entered.then(|| "page-hero-entered")),
            format!("transition-delay: {}ms;", delay_ms),
        )
    };
    let (badge_class, badge_style) = enter(300);
    let (title_class, title_style) = enter(500);
    let (subtitle_class, subtitle_style) = enter(700);
    let (extra_class, extra_style) = enter(1000);

    html! {
        <section class="page-hero">
            <style>
                {r#"
                    .page-hero {
                        position: relative;
                        min-height: 70vh;
                        padding: 8rem 1.5rem 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        text-align: center;
                        background: linear-gradient(135deg, #1c0f0a 0%, #2d1b16 50%, #1c0f0a 100%);
                    }
                    .page-hero-backdrop {
                        position: absolute;
                        inset: -20% 0 0 0;
                        pointer-events: none;
                        background:
                            radial-gradient(circle at 25% 25%, rgba(217, 119, 6, 0.25), transparent 40%),
                            radial-gradient(circle at 75% 60%, rgba(180, 83, 9, 0.2), transparent 45%);
                    }
                    .page-hero-content {
                        position: relative;
                        max-width: 64rem;
                    }
                    .page-hero-enter {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 1s ease;
                    }
                    .page-hero-entered {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .page-hero-badge {
                        display: inline-block;
                        padding: 0.75rem 1.5rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(251, 191, 36, 0.3);
                        background: rgba(217, 119, 6, 0.2);
                        color: #fde68a;
                    }
                    .page-hero-title {
                        color: white;
                        font-size: clamp(3rem, 7vw, 5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .page-hero-subtitle {
                        color: #fef3c7;
                        font-size: 1.25rem;
                        line-height: 1.7;
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                    }
                    .page-hero-extra {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                "#}
            </style>
            <div
                class="page-hero-backdrop"
                style={format!("transform: translateY({:.1}px);", *offset)}
            ></div>
            <div class="page-hero-content">
                {
                    match &props.badge {
                        Some(badge) => html! {
                            <div class={badge_class} style={badge_style}>
                                <span class="page-hero-badge">{badge.clone()}</span>
                            </div>
                        },
                        None => html! {},
                    }
                }
                <h1 class={classes!("page-hero-title", title_class)} style={title_style}>
                    {props.title.clone()}
                    {" "}
                    <span class="accent-text">{props.accent.clone()}</span>
                </h1>
                <p class={classes!("page-hero-subtitle", subtitle_class)} style={subtitle_style}>
                    {props.subtitle.clone()}
                </p>
                <div class={classes!("page-hero-extra", extra_class)} style={extra_style}>
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
