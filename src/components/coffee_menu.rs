use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal};
use crate::config;
use crate::data::use_catalog;

#[function_component(CoffeeMenu)]
pub fn coffee_menu() -> Html {
    let catalog = use_catalog();
    let (node, visible) = use_reveal(config::REVEAL_SUBTLE);
    let hovered = use_state(|| None::<usize>);

    let items = catalog.home.menu.iter().enumerate().map(|(index, item)| {
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        let is_hovered = *hovered == Some(index);

        html! {
            <div
                class={classes!("menu-item", reveal_class(visible))}
                style={format!("transition-delay: {}ms;", index * 100)}
                {onmouseenter}
                {onmouseleave}
            >
                <div class={classes!("card", "menu-card", is_hovered.then(|| "menu-card-active"))}>
                    <div class="menu-card-head" style={format!("background-image: url('{}');", item.img)}>
                        <span class="menu-icon">{&item.icon}</span>
                        <h3 class="menu-name">{&item.name}</h3>
                        <span class="menu-price">{format!("${}", item.price)}</span>
                    </div>
                    <p class="menu-description">{&item.description}</p>
                </div>
            </div>
        }
    }).collect::<Html>();

    html! {
        <section ref={node} class="section coffee-menu">
            <style>
                {r#"
                    .coffee-menu {
                        background: linear-gradient(135deg, #f9fafb, #ffffff, #fffbeb);
                    }
                    .menu-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .menu-card {
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .menu-card-active {
                        transform: translateY(-0.5rem);
                        box-shadow: 0 25px 50px rgba(120, 53, 15, 0.25);
                    }
                    .menu-card-head {
                        position: relative;
                        height: 11rem;
                        padding: 1.25rem;
                        background-size: cover;
                        background-position: center;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        color: white;
                        text-shadow: 0 2px 6px rgba(0, 0, 0, 0.6);
                    }
                    .menu-icon {
                        font-size: 1.5rem;
                    }
                    .menu-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .menu-price {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #d97706;
                        font-weight: 700;
                        text-shadow: none;
                    }
                    .menu-description {
                        padding: 1.25rem;
                        color: #4b5563;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <div class="container">
                <div class={classes!("section-header", reveal_class(visible))}>
                    <h2 class="section-title">{"What kind of Coffee we serve for you"}</h2>
                    <p class="section-subtitle">{"Who are in extremely love with eco friendly system."}</p>
                </div>
                <div class="menu-grid">
                    { items }
                </div>
            </div>
        </section>
    }
}
