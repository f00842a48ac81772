// 🕰️ Provenance Sequencer - Deterministic timeline ordering
// Events arrive with an explicit sequence number, a usable date, free text,
// or nothing at all. The output order must be total and reproducible anyway.

use std::cmp::Ordering;

use crate::dates::extract_year;
use crate::entities::ProvenanceEvent;

// ============================================================================
// COMPARATOR
// ============================================================================

/// Pairwise comparison, first rule that discriminates wins:
///
/// 1. Both carry an explicit `order` → numeric ascending
/// 2. Exactly one carries `order` → it sorts first
/// 3. Neither has `order`, both have `date` → extracted year ascending;
///    an unextractable year loses to an extractable one; two unextractable
///    dates compare lexicographically on the raw text
/// 4. A dated event outranks an undated one; two undated events are equal
///
/// A strict weak ordering, safe for any stable sort. Ties stay in input
/// order on purpose: upstream order reflects ingestion order.
pub fn compare_events(a: &ProvenanceEvent, b: &ProvenanceEvent) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_by_date(a.date.as_deref(), b.date.as_deref()),
    }
}

fn compare_by_date(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(da), Some(db)) => match (extract_year(da), extract_year(db)) {
            (Some(ya), Some(yb)) => ya.cmp(&yb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            // Degraded but defined: raw text keeps the order total
            (None, None) => da.cmp(db),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// ORDERING
// ============================================================================

/// Produce the display sequence for a set of provenance events.
///
/// Input is never mutated; the result is a fresh, stably sorted copy.
pub fn order_events(events: &[ProvenanceEvent]) -> Vec<ProvenanceEvent> {
    let mut ordered = events.to_vec();
    // Vec::sort_by is stable; same-rank events keep ingestion order
    ordered.sort_by(compare_events);
    ordered
}

// ============================================================================
// TESTS
// ============================================================================
