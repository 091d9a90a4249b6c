use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const FACTS: [(&str, &str, &str); 3] = [
    ("🌱", "Eco-Friendly", "Sustainably sourced beans"),
    ("⚡", "Fresh Roasted", "Daily roasting process"),
    ("❤️", "Made with Love", "Crafted by experts"),
];

fn page_name(path: &str) -> &str {
    match path.trim_start_matches('/') {
        "" => "home",
        name => name,
    }
}

fn history_back() -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .history()?
        .back()
}

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    #[prop_or(AttrValue::Static("Coming Soon"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("This page is under construction. Please check back soon!"))]
    pub description: AttrValue,
}

#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderProps) -> Html {
    let location = use_location();
    let path = location.as_ref().map(|l| l.path().to_string()).unwrap_or_default();

    let go_back = Callback::from(|_: MouseEvent| {
        if let Err(e) = history_back() {
            gloo_console::error!("history.back failed:", e);
        }
    });

    let facts = FACTS.iter().map(|(icon, title, text)| html! {
        <div key={*title} class="card placeholder-fact">
            <div class="placeholder-fact-icon">{*icon}</div>
            <h4>{*title}</h4>
            <p class="body-text">{*text}</p>
        </div>
    }).collect::<Html>();

    html! {
        <main class="placeholder">
            <style>
                {r#"
                    .placeholder {
                        min-height: 100vh;
                        padding: 8rem 1.5rem 5rem;
                        background: linear-gradient(135deg, #fffbeb, #ffffff, #fff7ed);
                        text-align: center;
                    }
                    .placeholder-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .placeholder-cup {
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 2rem;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #fbbf24, #d97706);
                        font-size: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .placeholder-title {
                        font-size: clamp(2.5rem, 6vw, 3.75rem);
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .placeholder-badge {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1.5rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        color: #92400e;
                        font-weight: 600;
                        text-transform: capitalize;
                    }
                    .placeholder-actions {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin: 2rem 0 3rem;
                        flex-wrap: wrap;
                    }
                    .placeholder-note {
                        padding: 2rem;
                        margin-bottom: 3rem;
                    }
                    .placeholder-facts {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 1.5rem;
                    }
                    .placeholder-fact {
                        padding: 1.5rem;
                    }
                    .placeholder-fact-icon {
                        font-size: 2rem;
                        margin-bottom: 0.5rem;
                    }
                "#}
            </style>
            <div class="placeholder-inner">
                <div class="placeholder-cup pulse">{"☕"}</div>
                <h1 class="placeholder-title">{props.title.clone()}</h1>
                <span class="placeholder-badge">{format!("{} Page", page_name(&path))}</span>
                <p class="section-subtitle">{props.description.clone()}</p>
                <div class="placeholder-actions">
                    <button class="btn btn-primary" onclick={go_back}>{"Go Back"}</button>
                    <Link<Route> to={Route::Home} classes="btn">{"Back to Home"}</Link<Route>>
                </div>
                <div class="card placeholder-note">
                    <h3>{"Actions! 🚀"}</h3>
                    <p class="body-text">{"You can design it as an additional page or delete it if you want."}</p>
                </div>
                <div class="placeholder-facts">
                    { facts }
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_strips_leading_slash() {
        assert_eq!(page_name("/generic"), "generic");
        assert_eq!(page_name("/elements"), "elements");
        assert_eq!(page_name("/"), "home");
        assert_eq!(page_name(""), "home");
    }
}
