use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const TESTIMONIAL_MIN_CHARS: usize = 10;
pub const TESTIMONIAL_MAX_CHARS: usize = 500;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn email_error(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email.trim()) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewField {
    Name,
    Email,
    Rating,
    CoffeeType,
    Testimonial,
}

// `rating == 0` means no star picked yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewDraft {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub coffee_type: String,
    pub testimonial: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub rating: Option<&'static str>,
    pub testimonial: Option<&'static str>,
}

impl ReviewErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.rating.is_none()
            && self.testimonial.is_none()
    }

    pub fn clear(&mut self, field: ReviewField) {
        match field {
            ReviewField::Name => self.name = None,
            ReviewField::Email => self.email = None,
            ReviewField::Rating => self.rating = None,
            ReviewField::Testimonial => self.testimonial = None,
            ReviewField::CoffeeType => {}
        }
    }
}

impl ReviewDraft {
    pub fn validate(&self) -> ReviewErrors {
        let name = self.name.trim();
        let testimonial_len = self.testimonial.trim().chars().count();

        ReviewErrors {
            name: if name.is_empty() {
                Some("Name is required")
            } else if name.chars().count() < 2 {
                Some("Name must be at least 2 characters")
            } else {
                None
            },
            email: email_error(&self.email),
            rating: if (1..=5).contains(&self.rating) {
                None
            } else {
                Some("Please select a rating")
            },
            testimonial: if testimonial_len == 0 {
                Some("Review text is required")
            } else if testimonial_len < TESTIMONIAL_MIN_CHARS {
                Some("Review must be at least 10 characters")
            } else if testimonial_len > TESTIMONIAL_MAX_CHARS {
                Some("Review must be less than 500 characters")
            } else {
                None
            },
        }
    }
}

pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        0 => "Click to rate your experience",
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        _ => "Excellent",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
            ContactField::Phone => {}
        }
    }
}

impl ContactDraft {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> ContactErrors {
        ContactErrors {
            name: self
                .name
                .trim()
                .is_empty()
                .then_some("Name is required"),
            email: email_error(&self.email),
            message: self
                .message
                .trim()
                .is_empty()
                .then_some("Message is required"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogSignup {
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
}

impl BlogSignup {
    pub fn toggle_interest(&mut self, id: &str) {
        if let Some(pos) = self.interests.iter().position(|i| i == id) {
            self.interests.remove(pos);
        } else {
            self.interests.push(id.to_string());
        }
    }

    pub fn has_interest(&self, id: &str) -> bool {
        self.interests.iter().any(|i| i == id)
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && email_error(&self.email).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_review() -> ReviewDraft {
        ReviewDraft {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            rating: 5,
            coffee_type: "Kenya AA".into(),
            testimonial: "Bright and juicy cup.".into(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@c.de"));
        assert_eq!(email_error("  "), Some("Email is required"));
        assert_eq!(email_error("nope"), Some("Please enter a valid email address"));
        assert_eq!(email_error(" ana@example.com "), None);
    }

    #[test]
    fn complete_review_passes() {
        assert!(valid_review().validate().is_empty());
    }

    #[test]
    fn empty_review_reports_every_required_field() {
        let errors = ReviewDraft::default().validate();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.rating, Some("Please select a rating"));
        assert_eq!(errors.testimonial, Some("Review text is required"));
    }

    #[test]
    fn review_length_limits_use_trimmed_text() {
        let mut draft = valid_review();
        draft.name = " A ".into();
        draft.testimonial = "   too short   ".into();
        let errors = draft.validate();
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.testimonial, Some("Review must be at least 10 characters"));

        draft.name = "Al".into();
        draft.testimonial = "x".repeat(TESTIMONIAL_MAX_CHARS);
        assert!(draft.validate().is_empty());

        draft.testimonial = "x".repeat(TESTIMONIAL_MAX_CHARS + 1);
        assert_eq!(
            draft.validate().testimonial,
            Some("Review must be less than 500 characters")
        );
    }

    #[test]
    fn rating_must_be_one_to_five() {
        let mut draft = valid_review();
        draft.rating = 6;
        assert!(draft.validate().rating.is_some());
        draft.rating = 1;
        assert!(draft.validate().rating.is_none());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut errors = ReviewDraft::default().validate();
        errors.clear(ReviewField::Email);
        assert!(errors.email.is_none());
        assert!(errors.name.is_some());
        errors.clear(ReviewField::CoffeeType);
        assert!(errors.rating.is_some());
    }

    #[test]
    fn rating_captions() {
        assert_eq!(rating_label(0), "Click to rate your experience");
        assert_eq!(rating_label(3), "Good");
        assert_eq!(rating_label(5), "Excellent");
    }

    #[test]
    fn contact_phone_is_optional() {
        let draft = ContactDraft {
            name: "Sam".into(),
            email: "sam@example.org".into(),
            phone: String::new(),
            message: "Table for four on Friday?".into(),
        };
        assert!(draft.validate().is_empty());

        let errors = ContactDraft::default().validate();
        assert!(errors.name.is_some() && errors.email.is_some() && errors.message.is_some());
    }

    #[test]
    fn contact_edits_clear_their_own_error() {
        let mut draft = ContactDraft::default();
        let mut errors = draft.validate();
        draft.set(ContactField::Message, "Hello".into());
        errors.clear(ContactField::Message);
        assert_eq!(draft.message, "Hello");
        assert!(errors.message.is_none());
        assert!(errors.name.is_some());

        errors.clear(ContactField::Phone);
        assert!(errors.email.is_some());
    }

    #[test]
    fn interests_toggle_on_and_off() {
        let mut signup = BlogSignup::default();
        signup.toggle_interest("recipes");
        signup.toggle_interest("news");
        assert!(signup.has_interest("recipes"));
        signup.toggle_interest("recipes");
        assert!(!signup.has_interest("recipes"));
        assert_eq!(signup.interests, vec!["news".to_string()]);
    }

    #[test]
    fn blog_signup_needs_name_and_email() {
        let mut signup = BlogSignup::default();
        assert!(!signup.is_complete());
        signup.name = "Kim".into();
        assert!(!signup.is_complete());
        signup.email = "kim@example.com".into();
        assert!(signup.is_complete());
    }
}
