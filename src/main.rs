use std::rc::Rc;

use log::{error, info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod data;
mod error;
mod forms;
mod components {
    pub mod blog_newsletter;
    pub mod blog_posts_grid;
    pub mod blog_section;
    pub mod brewing_experience;
    pub mod coffee_menu;
    pub mod coffee_menu_section;
    pub mod customer_reviews;
    pub mod footer;
    pub mod hero;
    pub mod logo;
    pub mod newsletter;
    pub mod page_hero;
    pub mod pagination;
    pub mod placeholder;
    pub mod popular_posts;
    pub mod review_form;
    pub mod reviews_grid;
    pub mod reviews_stats;
    pub mod stats;
    pub mod streaming;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod coffee;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod reviews;
}

use animation::scroll::ScrollListener;
use components::{footer::Footer, logo::Logo, placeholder::PlaceholderPage};
use data::{Catalog, CatalogProvider, EmbeddedCatalog};
use pages::{
    about::About, blog::Blog, coffee::CoffeePage, contact::Contact, home::Home,
    not_found::NotFound, reviews::ReviewsPage,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/coffee")]
    Coffee,
    #[at("/reviews")]
    Reviews,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/generic")]
    Generic,
    #[at("/elements")]
    Elements,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Coffee => {
            info!("Rendering Coffee page");
            html! { <CoffeePage /> }
        }
        Route::Reviews => {
            info!("Rendering Reviews page");
            html! { <ReviewsPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::Generic => {
            info!("Rendering Generic page");
            html! {
                <PlaceholderPage
                    title="Generic Page"
                    description="This is a generic page template that can be customized for any content you \
                                 need. Perfect for additional information, policies, or special announcements."
                />
            }
        }
        Route::Elements => {
            info!("Rendering Elements page");
            html! {
                <PlaceholderPage
                    title="UI Elements"
                    description="Explore the various UI components and design elements used throughout the \
                                 CoffeeMaster website. A showcase of modern web design principles."
                />
            }
        }
        Route::NotFound => {
            warn!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

const NAV_LINKS: [(Route, &str); 6] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Coffee, "Coffee"),
    (Route::Reviews, "Reviews"),
    (Route::Blog, "Blog"),
    (Route::Contact, "Contact"),
];

const EXTRA_PAGES: [(Route, &str); 2] = [(Route::Generic, "Generic"), (Route::Elements, "Elements")];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.setter();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::subscribe(move |scroll_y| {
                    is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD);
                })
                .map_err(|e| warn!("nav scroll listener unavailable: {}", e))
                .ok();
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |entries: &[(Route, &'static str)], class: &'static str| {
        entries
            .iter()
            .map(|(route, label)| html! {
                <div key={*label} onclick={close_menu.clone()}>
                    <Link<Route> to={route.clone()} classes={classes!(class)}>{*label}</Link<Route>>
                </div>
            })
            .collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                        background: transparent;
                    }
                    .top-nav.scrolled {
                        background: rgba(120, 53, 15, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: white;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #fcd34d;
                    }
                    .nav-dropdown {
                        position: relative;
                    }
                    .nav-dropdown-button {
                        background: none;
                        border: none;
                        color: white;
                        font: inherit;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .nav-dropdown-menu {
                        position: absolute;
                        top: 100%;
                        right: 0;
                        min-width: 10rem;
                        padding: 0.5rem 0;
                        border-radius: 0.5rem;
                        background: white;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.2s ease;
                    }
                    .nav-dropdown:hover .nav-dropdown-menu {
                        opacity: 1;
                        visibility: visible;
                    }
                    .nav-dropdown-link {
                        display: block;
                        padding: 0.5rem 1rem;
                        color: #374151;
                        text-decoration: none;
                    }
                    .nav-dropdown-link:hover {
                        background: #fffbeb;
                        color: #b45309;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: white;
                    }
                    @media (max-width: 1024px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: flex-start;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 1.5rem;
                            background: rgba(120, 53, 15, 0.97);
                        }
                        .nav-dropdown-menu {
                            position: static;
                            opacity: 1;
                            visibility: visible;
                            background: none;
                            box-shadow: none;
                        }
                        .nav-dropdown-link {
                            color: white;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Logo text="CoffeeMaster" />
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { links(&NAV_LINKS, "nav-link") }
                    <div class="nav-dropdown">
                        <button class="nav-dropdown-button">{"Pages ▾"}</button>
                        <div class="nav-dropdown-menu">
                            { links(&EXTRA_PAGES, "nav-dropdown-link") }
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

fn load_catalog(provider: &dyn CatalogProvider) -> Catalog {
    match provider.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            Catalog::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let catalog = use_memo(|_| Rc::new(load_catalog(&EmbeddedCatalog)), ());

    html! {
        <ContextProvider<Rc<Catalog>> context={(*catalog).clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
        </ContextProvider<Rc<Catalog>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting CoffeeMaster");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Coffee.to_path(), "/coffee");
        assert_eq!(Route::Generic.to_path(), "/generic");
        assert_eq!(Route::Elements.to_path(), "/elements");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/reviews"), Some(Route::Reviews));
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn embedded_catalog_is_not_empty() {
        let catalog = load_catalog(&EmbeddedCatalog);
        assert!(!catalog.home.menu.is_empty());
        assert!(!catalog.blog.posts.is_empty());
    }
}
