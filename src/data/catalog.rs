use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use yew::prelude::*;

use super::records::*;
use crate::error::SiteError;

const HOME_JSON: &str = include_str!("../../data/home.json");
const COFFEE_JSON: &str = include_str!("../../data/coffee.json");
const REVIEWS_JSON: &str = include_str!("../../data/reviews.json");
const BLOG_JSON: &str = include_str!("../../data/blog.json");

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HomeContent {
    pub menu: Vec<MenuItem>,
    pub stats: Vec<HomeStat>,
    pub gallery: Vec<String>,
    pub teasers: Vec<BlogTeaser>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeContent {
    pub items: Vec<CoffeeItem>,
    pub brewing_steps: Vec<BrewingStep>,
    pub brewing_counters: Vec<CounterStat>,
    pub carousel: Vec<CarouselReview>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewContent {
    pub reviews: Vec<CustomerReview>,
    pub stats: Vec<CounterStat>,
    pub coffee_types: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BlogContent {
    pub posts: Vec<BlogPost>,
    pub popular: Vec<PopularPost>,
    pub categories: Vec<CategoryCount>,
    pub interests: Vec<Interest>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub home: HomeContent,
    pub coffee: CoffeeContent,
    pub reviews: ReviewContent,
    pub blog: BlogContent,
}

pub trait CatalogProvider {
    fn load(&self) -> Result<Catalog, SiteError>;
}

pub struct EmbeddedCatalog;

impl CatalogProvider for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, SiteError> {
        Ok(Catalog {
            home: parse("home", HOME_JSON)?,
            coffee: parse("coffee", COFFEE_JSON)?,
            reviews: parse("reviews", REVIEWS_JSON)?,
            blog: parse("blog", BLOG_JSON)?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, SiteError> {
    serde_json::from_str(raw).map_err(|source| SiteError::Catalog { name, source })
}

#[hook]
pub fn use_catalog() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>().unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewFilter {
    All,
    FiveStar,
    FourStar,
    Verified,
    Recent,
}

impl ReviewFilter {
    pub const ALL: [ReviewFilter; 5] = [
        ReviewFilter::All,
        ReviewFilter::FiveStar,
        ReviewFilter::FourStar,
        ReviewFilter::Verified,
        ReviewFilter::Recent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReviewFilter::All => "All Reviews",
            ReviewFilter::FiveStar => "5 Star Reviews",
            ReviewFilter::FourStar => "4 Star Reviews",
            ReviewFilter::Verified => "Verified Only",
            ReviewFilter::Recent => "Recent Reviews",
        }
    }

    pub fn matches(&self, review: &CustomerReview) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::FiveStar => review.rating == 5,
            ReviewFilter::FourStar => review.rating == 4,
            ReviewFilter::Verified => review.verified,
            ReviewFilter::Recent => review.days_ago < 7,
        }
    }
}

pub fn filter_reviews(reviews: &[CustomerReview], filter: ReviewFilter) -> Vec<CustomerReview> {
    reviews.iter().filter(|r| filter.matches(r)).cloned().collect()
}

pub fn filter_coffees(items: &[CoffeeItem], kind: Option<CoffeeKind>) -> Vec<CoffeeItem> {
    items
        .iter()
        .filter(|item| kind.map_or(true, |k| item.kind == k))
        .cloned()
        .collect()
}

pub fn filter_posts(posts: &[BlogPost], category: Option<BlogCategory>) -> Vec<BlogPost> {
    posts
        .iter()
        .filter(|post| category.map_or(true, |c| post.category == c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        EmbeddedCatalog.load().expect("embedded catalog parses")
    }

    #[test]
    fn embedded_records_load() {
        let catalog = catalog();
        assert_eq!(catalog.home.menu.len(), 9);
        assert_eq!(catalog.home.gallery.len(), 9);
        assert_eq!(catalog.home.stats.len(), 4);
        assert_eq!(catalog.coffee.items.len(), 9);
        assert_eq!(catalog.coffee.brewing_steps.len(), 4);
        assert_eq!(catalog.coffee.carousel.len(), 6);
        assert_eq!(catalog.reviews.reviews.len(), 9);
        assert_eq!(catalog.blog.posts.len(), 9);
        assert_eq!(catalog.blog.popular.len(), 5);
    }

    #[test]
    fn malformed_data_names_its_source() {
        let err = parse::<HomeContent>("home", "{\"menu\": 3}").unwrap_err();
        assert!(matches!(err, SiteError::Catalog { name: "home", .. }));
        assert!(err.to_string().contains("home"));
    }

    #[test]
    fn review_filters_select_expected_rows() {
        let reviews = catalog().reviews.reviews;
        assert_eq!(filter_reviews(&reviews, ReviewFilter::All).len(), 9);
        assert_eq!(filter_reviews(&reviews, ReviewFilter::FiveStar).len(), 7);
        assert_eq!(filter_reviews(&reviews, ReviewFilter::FourStar).len(), 2);
        assert_eq!(filter_reviews(&reviews, ReviewFilter::Verified).len(), 9);
        // 2, 3, 4, 5 and 6 days old
        assert_eq!(filter_reviews(&reviews, ReviewFilter::Recent).len(), 5);
    }

    #[test]
    fn coffee_filter_by_kind() {
        let items = catalog().coffee.items;
        assert_eq!(filter_coffees(&items, None).len(), 9);
        assert_eq!(filter_coffees(&items, Some(CoffeeKind::SingleOrigin)).len(), 4);
        assert_eq!(filter_coffees(&items, Some(CoffeeKind::Espresso)).len(), 2);
        assert!(filter_coffees(&items, Some(CoffeeKind::Decaf))
            .iter()
            .all(|c| c.kind == CoffeeKind::Decaf));
    }

    #[test]
    fn blog_filter_by_category() {
        let posts = catalog().blog.posts;
        assert_eq!(filter_posts(&posts, None).len(), 9);
        assert_eq!(filter_posts(&posts, Some(BlogCategory::CoffeeTips)).len(), 3);
        assert_eq!(filter_posts(&posts, Some(BlogCategory::News)).len(), 1);
    }
}
