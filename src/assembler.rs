// 🧩 Enrichment Assembler - One reconciled record per artwork
// Pure function of its inputs: the same artwork, enrichment view, and event
// list always produce the same record. Partial enrichment is the common case.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::format_date;
use crate::entities::{Artwork, EnrichmentView, ProvenanceEvent, Source, SourceFact};
use crate::links::{collect_links, ExternalLink};
use crate::merge;
use crate::policy::MergePolicy;
use crate::sequence::order_events;

// ============================================================================
// RECONCILED OUTPUT
// ============================================================================

/// Artist-level facts after the merge, each tagged with its winning source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<SourceFact<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<SourceFact<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<SourceFact<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<SourceFact<String>>,
}

/// ReconciledRecord - the canonical per-artwork aggregate for display
///
/// Derived and transient: rebuilt on every invocation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledRecord {
    pub artwork_id: String,
    pub title: String,

    /// `dateCreated` formatted for humans (free text passes through)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,

    pub artist: ArtistFacts,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ExternalLink>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provenance: Vec<ProvenanceEvent>,
}

// ============================================================================
// ENRICHMENT ASSEMBLER
// ============================================================================

pub struct EnrichmentAssembler {
    /// Per-field source precedence (see policy module)
    pub policy: MergePolicy,
}

impl EnrichmentAssembler {
    pub fn new() -> Self {
        EnrichmentAssembler {
            policy: MergePolicy::default(),
        }
    }

    pub fn with_policy(policy: MergePolicy) -> Self {
        EnrichmentAssembler { policy }
    }

    /// Merge artwork-level and artist-level facts; provenance stays empty
    /// (callers that have the raw events use `reconcile`).
    pub fn assemble(&self, artwork: &Artwork, view: &EnrichmentView) -> ReconciledRecord {
        ReconciledRecord {
            artwork_id: artwork.id.clone(),
            title: artwork.title.clone(),
            display_date: artwork.date_created.as_deref().map(format_date),
            artist: self.artist_facts(view),
            links: collect_links(artwork, view),
            provenance: Vec::new(),
        }
    }

    /// Full reconciliation: merged facts plus the ordered provenance timeline
    pub fn reconcile(
        &self,
        artwork: &Artwork,
        view: &EnrichmentView,
        events: &[ProvenanceEvent],
    ) -> ReconciledRecord {
        let mut record = self.assemble(artwork, view);
        record.provenance = order_events(events);
        record
    }

    fn artist_facts(&self, view: &EnrichmentView) -> ArtistFacts {
        ArtistFacts {
            biography: self.pick_field(view, "biography", &self.policy.biography, biography_value),
            birth_date: self.pick_field(view, "birth_date", &self.policy.birth_date, birth_value),
            death_date: self.pick_field(view, "death_date", &self.policy.death_date, death_value),
            nationality: self.pick_field(
                view,
                "nationality",
                &self.policy.nationality,
                nationality_value,
            ),
        }
    }

    /// Precedence pick for one field, with a visibility log for values that
    /// exist in sources the field's policy never consults.
    fn pick_field(
        &self,
        view: &EnrichmentView,
        field: &'static str,
        precedence: &[Source],
        value_of: fn(&EnrichmentView, Source) -> Option<String>,
    ) -> Option<SourceFact<String>> {
        for source in Source::ALL {
            if !precedence.contains(&source) {
                if let Some(ignored) = value_of(view, source) {
                    if !ignored.trim().is_empty() {
                        debug!(
                            field,
                            source = source.code(),
                            "unconsulted source carries a value for this field"
                        );
                    }
                }
            }
        }

        merge::pick_text(
            precedence
                .iter()
                .map(|&source| value_of(view, source).map(|v| SourceFact::new(source, v))),
        )
    }
}

impl Default for EnrichmentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FIELD GETTERS
// ============================================================================

fn biography_value(view: &EnrichmentView, source: Source) -> Option<String> {
    match source {
        Source::Dbpedia => view
            .artist_dbpedia
            .as_ref()
            .and_then(|a| a.abstract_text.clone()),
        Source::Wikidata => view
            .artist_wikidata
            .as_ref()
            .and_then(|a| a.description.clone()),
        Source::Local => view
            .artist_local
            .as_ref()
            .and_then(|a| a.description.clone()),
        Source::Getty => None,
    }
}

fn birth_value(view: &EnrichmentView, source: Source) -> Option<String> {
    match source {
        Source::Dbpedia => view
            .artist_dbpedia
            .as_ref()
            .and_then(|a| a.birth_date.clone()),
        Source::Wikidata => view
            .artist_wikidata
            .as_ref()
            .and_then(|a| a.birth_date.clone()),
        Source::Local => view.artist_local.as_ref().and_then(|a| a.birth_date.clone()),
        Source::Getty => None,
    }
}

fn death_value(view: &EnrichmentView, source: Source) -> Option<String> {
    match source {
        Source::Dbpedia => view
            .artist_dbpedia
            .as_ref()
            .and_then(|a| a.death_date.clone()),
        Source::Wikidata => view
            .artist_wikidata
            .as_ref()
            .and_then(|a| a.death_date.clone()),
        Source::Local => view.artist_local.as_ref().and_then(|a| a.death_date.clone()),
        Source::Getty => None,
    }
}

fn nationality_value(view: &EnrichmentView, source: Source) -> Option<String> {
    match source {
        Source::Dbpedia => view
            .artist_dbpedia
            .as_ref()
            .and_then(|a| a.nationality.clone()),
        Source::Wikidata => view
            .artist_wikidata
            .as_ref()
            .and_then(|a| a.nationality.as_ref())
            .and_then(|n| n.label.clone()),
        Source::Local => view
            .artist_local
            .as_ref()
            .and_then(|a| a.nationality.clone()),
        Source::Getty => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
