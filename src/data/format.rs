use chrono::{Datelike, NaiveDate, Utc};

use super::records::StatFormat;

// `12500` -> `12.5K`
pub fn compact_count(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}K", value / 1000.0)
    } else {
        format!("{}", value.round() as i64)
    }
}

pub fn stat_display(value: f64, format: StatFormat, suffix: &str) -> String {
    let number = match format {
        StatFormat::Plain => format!("{}", value.round() as i64),
        StatFormat::Compact => compact_count(value),
        StatFormat::Rating => format!("{:.1}", value),
    };
    format!("{}{}", number, suffix)
}

pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn relative_age(days_ago: u32) -> String {
    match days_ago {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{} days ago", days_ago),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days_ago / 7),
        30..=59 => "1 month ago".to_string(),
        _ => format!("{} months ago", days_ago / 30),
    }
}

pub fn price(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn copyright_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_counts_use_one_decimal_k() {
        assert_eq!(compact_count(12500.0), "12.5K");
        assert_eq!(compact_count(2847.0), "2.8K");
        assert_eq!(compact_count(1000.0), "1.0K");
        assert_eq!(compact_count(999.0), "999");
    }

    #[test]
    fn stat_display_per_format() {
        assert_eq!(stat_display(98.0, StatFormat::Plain, "%"), "98%");
        assert_eq!(stat_display(12453.0, StatFormat::Compact, "+"), "12.5K+");
        assert_eq!(stat_display(4.9, StatFormat::Rating, "/5"), "4.9/5");
        assert_eq!(stat_display(0.0, StatFormat::Rating, "/5"), "0.0/5");
    }

    #[test]
    fn dates_render_without_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(long_date(date), "January 5, 2025");
        assert_eq!(short_date(date), "Jan 5");
    }

    #[test]
    fn ages_read_naturally() {
        assert_eq!(relative_age(0), "Today");
        assert_eq!(relative_age(1), "1 day ago");
        assert_eq!(relative_age(3), "3 days ago");
        assert_eq!(relative_age(7), "1 week ago");
        assert_eq!(relative_age(14), "2 weeks ago");
        assert_eq!(relative_age(30), "1 month ago");
        assert_eq!(relative_age(60), "2 months ago");
    }

    #[test]
    fn prices_and_stars() {
        assert_eq!(price(24.99), "$24.99");
        assert_eq!(price(19.0), "$19.00");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn initials_take_each_word() {
        assert_eq!(initials("Maria Santos"), "MS");
        assert_eq!(initials("Dr. Sarah Kim"), "DSK");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn copyright_year_is_plausible() {
        assert!(copyright_year() >= 2024);
    }
}
