/// Data layer: the review preparation pipeline.
///
/// Architecture:
/// ```text
///  reviews.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read store → Vec<RawReview>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  date_label, hour_of_day, text_length, display_color
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ ReviewDataset  │  Vec<Review>, distinct date-label index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐  ┌───────────┐
///   │  filter   │ ──▶ │ aggregate │ │  sample    │
///   └──────────┘     └──────────┘  └───────────┘
/// ```

pub mod aggregate;
pub mod derive;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
