use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: u32,
    pub description: String,
    pub icon: String,
    pub img: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum CoffeeKind {
    Espresso,
    #[serde(rename = "Single Origin")]
    SingleOrigin,
    Blend,
    Decaf,
    #[serde(rename = "Cold Brew")]
    ColdBrew,
}

impl CoffeeKind {
    pub const ALL: [CoffeeKind; 5] = [
        CoffeeKind::Espresso,
        CoffeeKind::SingleOrigin,
        CoffeeKind::Blend,
        CoffeeKind::Decaf,
        CoffeeKind::ColdBrew,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CoffeeKind::Espresso => "Espresso",
            CoffeeKind::SingleOrigin => "Single Origin",
            CoffeeKind::Blend => "Blend",
            CoffeeKind::Decaf => "Decaf",
            CoffeeKind::ColdBrew => "Cold Brew",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeItem {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CoffeeKind,
    pub price: f64,
    pub description: String,
    pub origin: String,
    pub roast_level: String,
    pub brewing_tips: String,
    pub badge: String,
    pub rating: f32,
    pub popular: bool,
    pub img: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BrewingStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselReview {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub comment: String,
    pub avatar: String,
    pub days_ago: u32,
    pub coffee_type: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReview {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub location: String,
    pub rating: u8,
    pub days_ago: u32,
    pub testimonial: String,
    pub coffee_type: String,
    pub verified: bool,
    pub helpful: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlogCategory {
    CoffeeTips,
    Recipes,
    Sustainability,
    News,
    OriginStories,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 5] = [
        BlogCategory::CoffeeTips,
        BlogCategory::Recipes,
        BlogCategory::Sustainability,
        BlogCategory::News,
        BlogCategory::OriginStories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlogCategory::CoffeeTips => "Coffee Tips",
            BlogCategory::Recipes => "Recipes",
            BlogCategory::Sustainability => "Sustainability",
            BlogCategory::News => "News",
            BlogCategory::OriginStories => "Origin Stories",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: BlogCategory,
    pub featured: bool,
    pub image: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogTeaser {
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub category: String,
    pub read_time: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularPost {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: BlogCategory,
    pub image: String,
    pub views: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryCount {
    pub category: BlogCategory,
    pub count: u32,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Interest {
    pub id: String,
    pub label: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HomeStat {
    pub number: u32,
    pub label: String,
    pub icon: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatFormat {
    #[default]
    Plain,
    Compact,
    Rating,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CounterStat {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub format: StatFormat,
}
