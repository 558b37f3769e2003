use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    util::DateTimeUtils,
};

pub type ReviewId = i64;

const MAX_NAME_CHARS: usize = 100;
const MAX_COMMENT_CHARS: usize = 1000;
const REQUIRED_FIELDS: &str = "name, rating, and comment are required";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Creation time in Unix milliseconds
    pub id: ReviewId,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: String,
}

/// Review as submitted by the "rate us" form, nothing checked yet
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct NewReview {
    pub name: Option<serde_json::Value>,
    pub rating: Option<serde_json::Value>,
    pub comment: Option<serde_json::Value>,
}

// Trimmed text of a string or number field; None when blank, zero or of any other type.
fn non_blank(field: &Option<serde_json::Value>) -> Option<String> {
    let text = match field {
        Some(serde_json::Value::String(s)) => s.trim().to_string(),
        Some(serde_json::Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        _ => return None,
    };

    Some(text).filter(|text| !text.is_empty())
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

// Accepts 4, 4.0 and "4"; None for anything blank or zero.
fn rating_value(rating: &Option<serde_json::Value>) -> Option<f64> {
    let value = match rating {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };

    value.filter(|value| *value != 0.0)
}

impl NewReview {
    pub fn new(name: &str, rating: u8, comment: &str) -> Self {
        Self {
            name: Some(serde_json::Value::from(name)),
            rating: Some(serde_json::Value::from(rating)),
            comment: Some(serde_json::Value::from(comment)),
        }
    }

    pub fn into_review(self, now: DateTime<Utc>) -> Result<Review> {
        let (name, rating, comment) = match (
            non_blank(&self.name),
            rating_value(&self.rating),
            non_blank(&self.comment),
        ) {
            (Some(name), Some(rating), Some(comment)) => (name, rating, comment),
            _ => return Err(Error::Validation(REQUIRED_FIELDS.to_string())),
        };

        if rating.fract() != 0.0 || !(1.0..=5.0).contains(&rating) {
            return Err(Error::Validation(
                "rating must be a whole number between 1 and 5".to_string(),
            ));
        }

        Ok(Review {
            id: DateTimeUtils::to_millis(&now),
            name: truncate(&name, MAX_NAME_CHARS),
            rating: rating as u8,
            comment: truncate(&comment, MAX_COMMENT_CHARS),
            created_at: DateTimeUtils::to_iso(&now),
        })
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StarBucket {
    pub stars: u8,
    pub count: usize,
    /// Share of all reviews, whole percent
    pub percent: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ReviewSummary {
    /// Mean rating to one decimal, 0.0 without reviews
    pub average: f64,
    pub count: usize,
    /// Five stars first
    pub breakdown: Vec<StarBucket>,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self {
                average: 0.0,
                count: 0,
                breakdown: Vec::new(),
            };
        }

        let count = reviews.len();
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        let average = (f64::from(total) / count as f64 * 10.0).round() / 10.0;

        let breakdown = (1..=5u8)
            .rev()
            .map(|stars| {
                let matching = reviews.iter().filter(|r| r.rating == stars).count();
                StarBucket {
                    stars,
                    count: matching,
                    percent: (matching as f64 / count as f64 * 100.0).round() as u32,
                }
            })
            .collect();

        Self {
            average,
            count,
            breakdown,
        }
    }
}
