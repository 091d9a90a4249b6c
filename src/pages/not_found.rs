use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let popular = [
        (Route::About, "🏪", "About Us"),
        (Route::Coffee, "☕", "Coffee Menu"),
        (Route::Reviews, "⭐", "Reviews"),
        (Route::Blog, "📝", "Blog"),
    ];

    html! {
        <main class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        padding: 8rem 1.5rem 5rem;
                        text-align: center;
                        background: linear-gradient(135deg, #fffbeb, #ffffff, #fff7ed);
                    }
                    .not-found-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .not-found-code {
                        font-size: clamp(6rem, 18vw, 10rem);
                        font-weight: 800;
                        color: #d97706;
                        line-height: 1;
                    }
                    .not-found-break {
                        padding: 2rem;
                        margin: 2rem 0;
                    }
                    .not-found-actions {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                        margin-bottom: 3rem;
                    }
                    .not-found-links {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                        gap: 1rem;
                    }
                    .not-found-link {
                        padding: 1.5rem;
                        text-decoration: none;
                        color: #374151;
                        font-weight: 600;
                    }
                    .not-found-link div {
                        font-size: 2rem;
                        margin-bottom: 0.5rem;
                    }
                "#}
            </style>
            <div class="not-found-inner">
                <div class="not-found-code">{"4"}<span class="pulse">{"☕"}</span>{"4"}</div>
                <h1 class="section-title">{"Oops! Page Not Found"}</h1>
                <p class="section-subtitle">
                    {"Looks like this page got lost in the coffee grinder! The page you're looking for doesn't \
                      exist, but our coffee is still brewing strong."}
                </p>
                <div class="card not-found-break">
                    <h3>{"☕ Need a Coffee Break?"}</h3>
                    <p class="body-text">
                        {"While you're here, why not explore our amazing coffee collection or head back to our \
                          homepage for the full CoffeeMaster experience?"}
                    </p>
                </div>
                <div class="not-found-actions">
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
                    <Link<Route> to={Route::Coffee} classes="btn">{"View Coffee Menu"}</Link<Route>>
                </div>
                <h4>{"Popular Pages"}</h4>
                <div class="not-found-links">
                    {
                        popular.into_iter().map(|(route, icon, label)| html! {
                            <Link<Route> to={route} classes="card not-found-link">
                                <div>{icon}</div>
                                <span>{label}</span>
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </main>
    }
}
