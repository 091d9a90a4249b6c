use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::catalog::filter_coffees;
use crate::data::format::price;
use crate::data::{use_catalog, CoffeeKind};

#[function_component(CoffeeMenuSection)]
pub fn coffee_menu_section() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_SUBTLE);
    let filter = use_state(|| None::<CoffeeKind>);
    let hovered = use_state(|| None::<u32>);

    let filter_button = |kind: Option<CoffeeKind>| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(kind))
        };
        let label = kind.map_or("All", |k| k.label());
        html! {
            <button
                key={label}
                class={classes!("chip", (*filter == kind).then(|| "chip-active"))}
                {onclick}
            >
                {label}
            </button>
        }
    };

    let items = filter_coffees(&catalog.coffee.items, *filter);
    let cards = items.iter().enumerate().map(|(index, coffee)| {
        let id = coffee.id;
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let show_tips = *hovered == Some(id);

        html! {
            <div
                key={coffee.id}
                class={classes!("coffee-item", reveal_class(visible))}
                style={format!("transition-delay: {}ms;", 300 + index * 100)}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="card coffee-card">
                    <div class="coffee-card-head" style={format!("background-image: url('{}');", coffee.img)}>
                        <div class="coffee-badge">{&coffee.badge}</div>
                        {
                            if coffee.popular {
                                html! { <span class="coffee-popular">{"Popular"}</span> }
                            } else {
                                html! {}
                            }
                        }
                        <div class="coffee-rating">{format!("★ {:.1}", coffee.rating)}</div>
                        <h3 class="coffee-name">{&coffee.name}</h3>
                        <div class="coffee-price">{price(coffee.price)}</div>
                    </div>
                    <div class="coffee-card-body">
                        <div class="coffee-details">
                            <span class="coffee-kind">{coffee.kind.label()}</span>
                            <span class="coffee-roast">{format!("{} Roast", coffee.roast_level)}</span>
                        </div>
                        <p class="body-text">{&coffee.description}</p>
                        <p class="coffee-origin">{format!("📍 {}", coffee.origin)}</p>
                        <div class={classes!("coffee-tips", show_tips.then(|| "coffee-tips-open"))}>
                            <strong>{"Brewing Tips: "}</strong>{&coffee.brewing_tips}
                        </div>
                        <button class="btn btn-primary coffee-cart">{"Add to Cart"}</button>
                    </div>
                </div>
            </div>
        }
    }).collect::<Html>();

    html! {
        <section ref={node} class="section coffee-collection">
            <style>
                {r#"
                    .coffee-collection {
                        background: linear-gradient(135deg, #fffbeb, #ffffff, #fffbeb);
                    }
                    .coffee-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .coffee-card {
                        transition: transform 0.5s ease, box-shadow 0.5s ease;
                    }
                    .coffee-item:hover .coffee-card {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2);
                    }
                    .coffee-card-head {
                        position: relative;
                        padding: 2rem;
                        text-align: center;
                        background-color: #fef3c7;
                        background-size: cover;
                        background-position: center;
                    }
                    .coffee-badge {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1.5rem;
                        border-radius: 9999px;
                        background: white;
                        font-size: 1.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                    }
                    .coffee-popular {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #ef4444, #dc2626);
                        color: white;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                    .coffee-rating {
                        color: #374151;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }
                    .coffee-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #111827;
                    }
                    .coffee-price {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #d97706;
                    }
                    .coffee-card-body {
                        padding: 1.5rem 2rem 2rem;
                    }
                    .coffee-details {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                    }
                    .coffee-kind {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-weight: 500;
                    }
                    .coffee-roast, .coffee-origin {
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    .coffee-tips {
                        max-height: 0;
                        overflow: hidden;
                        opacity: 0;
                        font-size: 0.875rem;
                        color: #78350f;
                        background: #fffbeb;
                        border-radius: 0.5rem;
                        transition: all 0.5s ease;
                    }
                    .coffee-tips-open {
                        max-height: 10rem;
                        opacity: 1;
                        padding: 0.75rem;
                        margin-top: 1rem;
                    }
                    .coffee-cart {
                        width: 100%;
                        margin-top: 1.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"Our Coffee Collection"}</h2>
                    <p class="section-subtitle">
                        {"Carefully curated from the world's finest coffee regions, each blend tells \
                          a unique story of flavor, tradition, and craftsmanship."}
                    </p>
                </div>
                <div class={classes!("chip-row", reveal_class(visible))} style="transition-delay: 200ms;">
                    { filter_button(None) }
                    { CoffeeKind::ALL.iter().map(|kind| filter_button(Some(*kind))).collect::<Html>() }
                </div>
                <div class="coffee-grid">
                    { cards }
                </div>
            </div>
        </section>
    }
}
