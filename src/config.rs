use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const ASSET_BASE: &str = "/images";

// Hero frame sequence: frame_000.png .. frame_084.png played over the hero height.
pub const HERO_TOTAL_FRAMES: usize = 85;
pub const HERO_MAX_SCROLL: u32 = 680;

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const REVIEWS_PER_PAGE: usize = 6;
pub const POSTS_PER_PAGE: usize = 6;

pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const BREWING_STEP_INTERVAL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTiming {
    pub start_delay_ms: u32,
    pub duration_ms: u32,
}

pub const BREWING_COUNTERS: CounterTiming = CounterTiming {
    start_delay_ms: 800,
    duration_ms: 2000,
};

pub const REVIEW_COUNTERS: CounterTiming = CounterTiming {
    start_delay_ms: 500,
    duration_ms: 2500,
};

pub const STATS_PULSE_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubmissionConfig {
    pub delay_ms: u32,
    pub success_ratio: f64,
    pub reset_after_ms: u32,
}

pub const NEWSLETTER_SUBMISSION: SubmissionConfig = SubmissionConfig {
    delay_ms: 1500,
    success_ratio: 1.0,
    reset_after_ms: 3000,
};

pub const BLOG_NEWSLETTER_SUBMISSION: SubmissionConfig = SubmissionConfig {
    delay_ms: 1500,
    success_ratio: 1.0,
    reset_after_ms: 4000,
};

pub const REVIEW_SUBMISSION: SubmissionConfig = SubmissionConfig {
    delay_ms: 2000,
    success_ratio: 1.0,
    reset_after_ms: 5000,
};

pub const CONTACT_SUBMISSION: SubmissionConfig = SubmissionConfig {
    delay_ms: 2000,
    success_ratio: 0.9,
    reset_after_ms: 5000,
};

// IntersectionObserver thresholds used by the reveal animations.
pub const REVEAL_SUBTLE: f64 = 0.1;
pub const REVEAL_DEFAULT: f64 = 0.2;
pub const REVEAL_LATE: f64 = 0.3;
