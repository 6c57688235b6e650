use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawReview – one row of the persisted store, before derivation
// ---------------------------------------------------------------------------

/// A review row as read from the store. All fields arrive as free-form text;
/// `created` is validated during derivation so a bad row can be skipped
/// instead of aborting the whole load. Columns not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default, rename = "type")]
    pub post_type: String,
}

// ---------------------------------------------------------------------------
// Sentiment – predicted label, closed enum with explicit unknown
// ---------------------------------------------------------------------------

/// Predicted sentiment of a review. Anything other than the exact strings
/// `positive` / `negative` is kept as `Unknown` and takes the non-negative
/// branch everywhere a two-way decision is made (colors, counts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown(String),
}

impl Sentiment {
    pub fn parse(s: &str) -> Self {
        match s {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            other => Sentiment::Unknown(other.to_string()),
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Sentiment::Negative)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Unknown(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// PostType – post category, closed enum with explicit unknown
// ---------------------------------------------------------------------------

/// Category of the post a review came from. The selector in the UI offers
/// the four known categories; anything else read from the store is kept
/// verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PostType {
    Article,
    Discussion,
    News,
    Recommendation,
    Other(String),
}

impl PostType {
    pub fn parse(s: &str) -> Self {
        match s {
            "Article" => PostType::Article,
            "Discussion" => PostType::Discussion,
            "News" => PostType::News,
            "Recommendation" => PostType::Recommendation,
            other => PostType::Other(other.to_string()),
        }
    }

    /// The fixed category list offered by the type selector.
    pub fn known() -> [PostType; 4] {
        [
            PostType::Discussion,
            PostType::Recommendation,
            PostType::Article,
            PostType::News,
        ]
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostType::Article => write!(f, "Article"),
            PostType::Discussion => write!(f, "Discussion"),
            PostType::News => write!(f, "News"),
            PostType::Recommendation => write!(f, "Recommendation"),
            PostType::Other(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Review – one derived record
// ---------------------------------------------------------------------------

/// A review with its derived display columns. Derivations are pure functions
/// of the raw row and are never written back to the store.
#[derive(Debug, Clone)]
pub struct Review {
    /// Unix epoch seconds of post creation.
    pub created: i64,
    pub title: String,
    pub comment: String,
    pub sentiment: Sentiment,
    pub post_type: PostType,

    /// Abbreviated month + zero-padded day, e.g. "Jan 05", in local time.
    pub date_label: String,
    /// Local hour component of `created`, 0–23.
    pub hour_of_day: u32,
    /// Character count of title plus character count of comment.
    pub text_length: usize,
    /// "orange" for negative reviews, "skyblue" for everything else.
    pub display_color: &'static str,
}

// ---------------------------------------------------------------------------
// ReviewDataset – the complete derived dataset
// ---------------------------------------------------------------------------

/// The full derived dataset with the distinct `date_label` index used by the
/// date-range selector.
#[derive(Debug, Clone, Default)]
pub struct ReviewDataset {
    /// All derived reviews, in store order.
    pub reviews: Vec<Review>,
    /// Distinct `date_label` values, ascending in string order.
    pub date_labels: Vec<String>,
}

impl ReviewDataset {
    /// Build the date-label index from the derived reviews.
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let labels: BTreeSet<String> =
            reviews.iter().map(|r| r.date_label.clone()).collect();
        ReviewDataset {
            reviews,
            date_labels: labels.into_iter().collect(),
        }
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Default date-range bounds: min and max of the distinct label set.
    pub fn date_bounds(&self) -> Option<(&str, &str)> {
        match (self.date_labels.first(), self.date_labels.last()) {
            (Some(min), Some(max)) => Some((min.as_str(), max.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PostType, Sentiment};

    #[test]
    fn sentiment_parse_is_exact() {
        assert_eq!(Sentiment::parse("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::parse("negative"), Sentiment::Negative);
        // Case differences and novel labels are kept, not coerced.
        assert_eq!(
            Sentiment::parse("Negative"),
            Sentiment::Unknown("Negative".to_string())
        );
        assert_eq!(
            Sentiment::parse("neutral"),
            Sentiment::Unknown("neutral".to_string())
        );
    }

    #[test]
    fn post_type_round_trips_through_display() {
        for t in PostType::known() {
            assert_eq!(PostType::parse(&t.to_string()), t);
        }
        let other = PostType::parse("Meme");
        assert_eq!(other, PostType::Other("Meme".to_string()));
        assert_eq!(other.to_string(), "Meme");
    }
}
