use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::frames::{FramePlayer, FrameSequence, FrameSwap, Settled};
use crate::animation::scroll::ScrollListener;
use crate::error::window;

type SharedPlayer = Rc<RefCell<Option<FramePlayer>>>;

fn set_opacity(node: Option<&NodeRef>, value: &str) {
    let Some(element) = node.and_then(|n| n.cast::<HtmlElement>()) else {
        return;
    };
    if let Err(e) = element.style().set_property("opacity", value) {
        warn!("could not set frame opacity: {:?}", e);
    }
}

fn apply_swap(nodes: &[NodeRef], swap: FrameSwap) {
    set_opacity(nodes.get(swap.hide), "0");
    set_opacity(nodes.get(swap.show), "1");
}

fn current_scroll() -> f64 {
    window()
        .and_then(|w| w.scroll_y().map_err(Into::into))
        .unwrap_or(0.0)
}

fn settle(player: &SharedPlayer, nodes: &[NodeRef], position: usize, loaded: bool) {
    let mut guard = player.borrow_mut();
    let Some(player) = guard.as_mut() else {
        return;
    };
    if !loaded {
        warn!("hero frame failed to load: {}", player.sequence().path_at(position));
    }
    if let Settled::Ready(swap) = player.settle(position, loaded, current_scroll) {
        info!(
            "Hero frames ready ({} of {} failed)",
            player.failed_count(),
            player.sequence().total_frames()
        );
        if let Some(swap) = swap {
            apply_swap(nodes, swap);
        }
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let entered = use_state(|| false);
    let sequence = use_memo(
        |_| match FrameSequence::hero() {
            Ok(sequence) => Some(sequence),
            Err(e) => {
                error!("hero animation disabled: {}", e);
                None
            }
        },
        (),
    );
    let player: SharedPlayer = {
        let sequence = *sequence;
        use_mut_ref(move || sequence.map(FramePlayer::new))
    };
    let nodes = {
        let sequence = *sequence;
        use_memo(
            move |_| {
                sequence
                    .map(|s| {
                        (0..s.total_frames())
                            .map(|_| NodeRef::default())
                            .collect::<Vec<NodeRef>>()
                    })
                    .unwrap_or_default()
            },
            (),
        )
    };

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
        let player = player.clone();
        let nodes = nodes.clone();
        use_effect_with_deps(
            move |has_frames| {
                let listener = if *has_frames {
                    ScrollListener::coalesced(move |scroll_y| {
                        let swap = player.borrow_mut().as_mut().and_then(|p| p.seek(scroll_y));
                        if let Some(swap) = swap {
                            apply_swap(&nodes, swap);
                        }
                    })
                    .map_err(|e| warn!("hero scroll listener unavailable: {}", e))
                    .ok()
                } else {
                    None
                };
                move || drop(listener)
            },
            sequence.is_some(),
        );
    }

    let frames = match *sequence {
        Some(sequence) => (0..sequence.total_frames())
            .map(|position| {
                let onload = {
                    let player = player.clone();
                    let nodes = nodes.clone();
                    Callback::from(move |_: Event| settle(&player, &nodes, position, true))
                };
                let onerror = {
                    let player = player.clone();
                    let nodes = nodes.clone();
                    Callback::from(move |_: Event| settle(&player, &nodes, position, false))
                };
                let opacity = player
                    .borrow()
                    .as_ref()
                    .map_or("0", |p| p.opacity(position));
                html! {
                    <img
                        key={position}
                        ref={nodes.get(position).cloned().unwrap_or_default()}
                        class="hero-frame"
                        src={sequence.path_at(position)}
                        alt=""
                        style={format!("opacity: {};", opacity)}
                        {onload}
                        {onerror}
                    />
                }
            })
            .collect::<Html>(),
        None => html! {},
    };

    let enter = |delay: &str| {
        (
            classes!("hero-enter", entered.then(|| "hero-entered")),
            format!("transition-delay: {};", delay),
        )
    };
    let (subtitle_class, subtitle_style) = enter("300ms");
    let (title_class, title_style) = enter("500ms");
    let (cta_class, cta_style) = enter("700ms");
    let (scroll_class, scroll_style) = enter("1000ms");

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #1c0f0a;
                    }
                    .hero-frames {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .hero-frame {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(120, 53, 15, 0.8), transparent);
                        z-index: 10;
                    }
                    .hero-beans span {
                        position: absolute;
                        color: #fcd34d;
                        font-size: 1.5rem;
                        animation: bounce 2s infinite;
                        z-index: 10;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 20;
                        text-align: center;
                        padding: 0 1.5rem;
                        max-width: 56rem;
                    }
                    .hero-enter {
                        opacity: 0;
                        transform: translateY(2.5rem);
                        transition: all 1s ease;
                    }
                    .hero-entered {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .hero-subtitle {
                        display: inline-block;
                        padding: 0.75rem 1.5rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(251, 191, 36, 0.3);
                        background: rgba(217, 119, 6, 0.2);
                        backdrop-filter: blur(4px);
                        color: #fde68a;
                        font-size: 1.125rem;
                    }
                    .hero-title {
                        color: white;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        margin-bottom: 2rem;
                    }
                    .hero-highlight {
                        background: linear-gradient(90deg, #fcd34d, #f59e0b);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #f59e0b, #d97706);
                        color: white;
                        font-size: 1.125rem;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                        transition: transform 0.3s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-scroll {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        margin-left: -2.5rem;
                        width: 5rem;
                        text-align: center;
                        color: #fde68a;
                        font-size: 0.875rem;
                        z-index: 20;
                    }
                    .hero-scroll-arrow {
                        display: block;
                        font-size: 1.5rem;
                        animation: bounce 2s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-25%); }
                    }
                "#}
            </style>
            <div class="hero-frames">
                { frames }
            </div>
            <div class="hero-overlay"></div>
            <div class="hero-beans">
                <span style="top: 5rem; left: 5rem;">{"☕"}</span>
                <span style="top: 10rem; right: 8rem; animation-delay: 1s;">{"☕"}</span>
                <span style="bottom: 8rem; left: 8rem; animation-delay: 1.5s;">{"☕"}</span>
                <span style="bottom: 5rem; right: 5rem; animation-delay: 2s;">{"☕"}</span>
            </div>
            <div class="hero-content">
                <div class={subtitle_class} style={subtitle_style}>
                    <span class="hero-subtitle">{"Now you can feel the energy"}</span>
                </div>
                <h1 class={classes!("hero-title", title_class)} style={title_style}>
                    {"Start your day with a "}
                    <span class="hero-highlight">{"black coffee"}</span>
                </h1>
                <div class={cta_class} style={cta_style}>
                    <button class="hero-cta">{"Buy Now"}</button>
                </div>
            </div>
            <div class={classes!("hero-scroll", scroll_class)} style={scroll_style}>
                {"Scroll down"}
                <span class="hero-scroll-arrow">{"↓"}</span>
            </div>
        </section>
    }
}
