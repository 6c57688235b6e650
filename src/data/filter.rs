use super::model::{PostType, ReviewDataset};

// ---------------------------------------------------------------------------
// Filter state
// ---------------------------------------------------------------------------

/// How date-range bounds are compared against a record's `date_label`.
///
/// `Lexical` is the legacy behavior: plain string comparison of the
/// "Jan 05"-style labels. It only matches chronological order within a span
/// where the month abbreviations happen to sort correctly (single-month data,
/// or e.g. Apr→Aug runs). `Chronological` parses the labels back to
/// (month, day) and compares those instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateOrder {
    #[default]
    Lexical,
    Chronological,
}

/// Post-type selection: `All` leaves the set unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PostType),
}

/// The active filter selections driving the Home view.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Inclusive `[start, end]` bounds over `date_label`, both drawn from the
    /// dataset's distinct label set. `None` means no date constraint.
    pub date_range: Option<(String, String)>,
    pub post_type: TypeFilter,
    pub date_order: DateOrder,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of reviews passing the active filters, in store order.
///
/// A specific type selection applies to the full dataset and ignores the date
/// range entirely; the two filters do not compose. `All` keeps the date-range
/// subset unchanged.
pub fn filtered_indices(dataset: &ReviewDataset, filters: &FilterState) -> Vec<usize> {
    if let TypeFilter::Only(wanted) = &filters.post_type {
        return dataset
            .reviews
            .iter()
            .enumerate()
            .filter(|(_, r)| &r.post_type == wanted)
            .map(|(i, _)| i)
            .collect();
    }

    let Some((start, end)) = &filters.date_range else {
        return (0..dataset.len()).collect();
    };

    dataset
        .reviews
        .iter()
        .enumerate()
        .filter(|(_, r)| label_in_range(&r.date_label, start, end, filters.date_order))
        .map(|(i, _)| i)
        .collect()
}

/// Inclusive range check on a date label under the chosen ordering. Labels
/// that fail to parse in chronological mode fall back to string comparison.
pub fn label_in_range(label: &str, start: &str, end: &str, order: DateOrder) -> bool {
    match order {
        DateOrder::Lexical => start <= label && label <= end,
        DateOrder::Chronological => {
            match (label_ord(label), label_ord(start), label_ord(end)) {
                (Some(l), Some(s), Some(e)) => s <= l && l <= e,
                _ => start <= label && label <= end,
            }
        }
    }
}

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a "%b %d" label into an orderable (month, day) key, e.g.
/// "Feb 03" → 203. Returns `None` for anything that isn't a known label.
fn label_ord(label: &str) -> Option<u32> {
    let mut parts = label.split_whitespace();
    let month = parts.next()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(1..=31).contains(&day) {
        return None;
    }
    let month_no = MONTH_ABBREVS.iter().position(|m| *m == month)? as u32 + 1;
    Some(month_no * 100 + day)
}
