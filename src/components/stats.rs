use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::use_catalog;

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_LATE);
    let pulsing = use_state(|| false);
    let selected = use_state(|| None::<String>);

    {
        let pulsing = pulsing.clone();
        use_effect_with_deps(
            move |visible| {
                let timeout = visible
                    .then(|| Timeout::new(config::STATS_PULSE_DELAY_MS, move || pulsing.set(true)));
                move || drop(timeout)
            },
            visible,
        );
    }

    let close_modal = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let stats = catalog.home.stats.iter().enumerate().map(|(index, stat)| html! {
        <div
            class={classes!("stat-item", reveal_class(visible))}
            style={format!("transition-delay: {}ms;", index * 200)}
        >
            <div class="stat-icon">{&stat.icon}</div>
            <div class={classes!("stat-number", pulsing.then(|| "pulse"))}>{stat.number}</div>
            <p class="stat-label">{&stat.label}</p>
        </div>
    }).collect::<Html>();

    let gallery = catalog.home.gallery.iter().map(|img| {
        let onclick = {
            let selected = selected.clone();
            let img = img.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(img.clone())))
        };
        html! {
            <div class="gallery-tile" style={format!("background-image: url('{}');", img)} {onclick}>
                <span class="gallery-zoom">{"🔍"}</span>
            </div>
        }
    }).collect::<Html>();

    html! {
        <section ref={node} class="section stats">
            <style>
                {r#"
                    .stats {
                        position: relative;
                        overflow: hidden;
                        background: linear-gradient(135deg, #78350f, #92400e, #78350f);
                    }
                    .stats .section-title {
                        color: white;
                    }
                    .stats .section-subtitle {
                        color: #fde68a;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 3rem;
                        text-align: center;
                    }
                    .stat-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(217, 119, 6, 0.3);
                        background: rgba(180, 83, 9, 0.5);
                        font-size: 1.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.3s ease;
                    }
                    .stat-item:hover .stat-icon {
                        transform: scale(1.1);
                    }
                    .stat-number {
                        color: white;
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .stat-label {
                        color: #fde68a;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }
                    .gallery {
                        margin-top: 5rem;
                    }
                    .gallery-title {
                        color: white;
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
                        gap: 1rem;
                        margin-top: 3rem;
                    }
                    .gallery-tile {
                        position: relative;
                        aspect-ratio: 1;
                        border-radius: 0.75rem;
                        background-color: #92400e;
                        background-size: cover;
                        background-position: center;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .gallery-tile:hover {
                        transform: scale(1.05);
                    }
                    .gallery-zoom {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        opacity: 0;
                        background: rgba(0, 0, 0, 0.35);
                        border-radius: 0.75rem;
                        transition: opacity 0.3s ease;
                    }
                    .gallery-tile:hover .gallery-zoom {
                        opacity: 1;
                    }
                    .gallery-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .gallery-modal img {
                        max-width: 100%;
                        max-height: 90vh;
                        border-radius: 0.75rem;
                    }
                    .gallery-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        background: none;
                        border: none;
                        color: white;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"What kind of Coffee we serve for you"}</h2>
                    <p class="section-subtitle">{"Who are in extremely love with eco friendly system."}</p>
                </div>
                <div class="stats-grid">
                    { stats }
                </div>
                <div class={classes!("gallery", reveal_class(visible))} style="transition-delay: 700ms;">
                    <h3 class="gallery-title">{"Coffee Gallery"}</h3>
                    <p class="section-subtitle">{"Discover our beautiful coffee moments and artistry"}</p>
                    <div class="gallery-grid">
                        { gallery }
                    </div>
                </div>
            </div>
            {
                if let Some(img) = (*selected).clone() {
                    html! {
                        <div class="gallery-modal" onclick={close_modal.clone()}>
                            <button class="gallery-close" onclick={close_modal}>{"×"}</button>
                            <img
                                src={img}
                                alt="Gallery"
                                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
