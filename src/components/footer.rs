use yew::prelude::*;

use crate::components::logo::Logo;
use crate::data::format::copyright_year;

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Twitter", "𝕏"),
    ("LinkedIn", "in"),
    ("Pinterest", "P"),
    ("Instagram", "◎"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: linear-gradient(135deg, #1c0f0a, #2d1b16);
                        color: #fde68a;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 3rem;
                    }
                    .footer-heading {
                        color: white;
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-text {
                        color: #d6d3d1;
                        line-height: 1.7;
                        font-size: 0.95rem;
                    }
                    .footer-copy {
                        margin-top: 1.5rem;
                        font-size: 0.85rem;
                        color: #a8a29e;
                    }
                    .footer-social {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .footer-social a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: rgba(217, 119, 6, 0.2);
                        color: #fbbf24;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .footer-social a:hover {
                        background: #d97706;
                        color: white;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <Logo size={4.0} with_background={false} />
                </div>
                <div>
                    <h3 class="footer-heading">{"About Us"}</h3>
                    <p class="footer-text">
                        {"Small-batch roasters sourcing directly from farms we know by name. \
                          Every bag is roasted to order and shipped within two days."}
                    </p>
                    <p class="footer-copy">
                        {format!("Copyright © {} All rights reserved | CoffeeMaster", copyright_year())}
                    </p>
                </div>
                <div>
                    <h3 class="footer-heading">{"Follow Us"}</h3>
                    <p class="footer-text" style="margin-bottom: 1rem;">{"Let us be social"}</p>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|(name, glyph)| html! {
                                <a href="#" title={*name} aria-label={*name}>{*glyph}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </footer>
    }
}
