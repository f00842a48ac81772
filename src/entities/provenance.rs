// 📜 Provenance Model - Ownership and transfer history
// One artwork owns an ordered list of these; ordering is the sequence module's job.

use serde::{Deserialize, Serialize};

// ============================================================================
// EVENT KIND
// ============================================================================

/// EventKind - the known provenance vocabulary
///
/// The `event` field on a record stays free text (source datasets are not
/// clean); this enum is a lenient classifier over it, used for structured-data
/// typing. Unknown labels simply don't classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Creation,
    Sale,
    Gift,
    Bequest,
    Theft,
    Recovery,
    Loan,
    Return,
    Acquisition,
}

impl EventKind {
    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Creation => "Creation",
            EventKind::Sale => "Sale",
            EventKind::Gift => "Gift",
            EventKind::Bequest => "Bequest",
            EventKind::Theft => "Theft",
            EventKind::Recovery => "Recovery",
            EventKind::Loan => "Loan",
            EventKind::Return => "Return",
            EventKind::Acquisition => "Acquisition",
        }
    }

    /// Lenient parse from a free-text event label
    pub fn parse(label: &str) -> Option<EventKind> {
        match label.trim().to_ascii_lowercase().as_str() {
            "creation" => Some(EventKind::Creation),
            "sale" => Some(EventKind::Sale),
            "gift" => Some(EventKind::Gift),
            "bequest" => Some(EventKind::Bequest),
            "theft" => Some(EventKind::Theft),
            "recovery" => Some(EventKind::Recovery),
            "loan" => Some(EventKind::Loan),
            "return" => Some(EventKind::Return),
            "acquisition" => Some(EventKind::Acquisition),
            _ => None,
        }
    }
}

// ============================================================================
// PROVENANCE EVENT
// ============================================================================

/// ProvenanceEvent - a discrete historical fact about ownership or location
///
/// Upstream data is unreliable: `order` may be missing, non-unique, or
/// non-contiguous; `date` may be ISO, free text, or missing. Only the event
/// label is guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Explicit sequence number from the source dataset, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,

    /// ISO or free-text date ("1891", "c. 1800", "1911-08-21")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Event label ("Sale", "Theft", ...)
    pub event: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}

impl ProvenanceEvent {
    /// Create an event with the label only
    pub fn new(event: impl Into<String>) -> Self {
        ProvenanceEvent {
            id: None,
            order: None,
            date: None,
            event: event.into(),
            owner: None,
            location: None,
            description: None,
            source_uri: None,
        }
    }

    /// Builder: explicit sequence number
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Builder: event date (any format)
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Builder: owner at the time of the event
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Builder: location at the time of the event
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Classify the free-text label against the known vocabulary
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::parse(&self.event)
    }
}

// ============================================================================
// TESTS
// ============================================================================
