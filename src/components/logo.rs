use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or(2.5)]
    pub size: f64,
    #[prop_or(true)]
    pub with_background: bool,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let icon_style = format!("width: {0}rem; height: {0}rem;", props.size);
    let icon_class = classes!("logo-icon", props.with_background.then(|| "logo-icon-bg"));

    html! {
        <div class="logo">
            <style>
                {r#"
                    .logo-link {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                    }
                    .logo-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 0.5rem;
                        transition: transform 0.3s ease;
                    }
                    .logo-icon-bg {
                        background: linear-gradient(135deg, #fbbf24, #d97706);
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                    }
                    .logo-link:hover .logo-icon {
                        transform: scale(1.1);
                    }
                    .logo-icon img {
                        width: 100%;
                        height: 100%;
                    }
                    .logo-text {
                        color: white;
                        font-weight: 700;
                        font-size: 1.5rem;
                        letter-spacing: -0.02em;
                    }
                "#}
            </style>
            <Link<Route> to={Route::Home} classes="logo-link">
                <div class={icon_class} style={icon_style}>
                    <img src={format!("{}/coffee-master-logo.png", config::ASSET_BASE)} alt="Logo" />
                </div>
                {
                    if let Some(text) = &props.text {
                        html! { <span class="logo-text">{text.clone()}</span> }
                    } else {
                        html! {}
                    }
                }
            </Link<Route>>
        </div>
    }
}
