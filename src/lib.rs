// Artwork Provenance Reconciliation - Core Library
// Exposes the reconciliation and ordering engines for the CLI, the API layer,
// and tests. Everything here is pure computation over already-fetched inputs:
// no I/O, no shared state, no network.

pub mod entities;
pub mod dates;
pub mod merge;
pub mod policy;
pub mod assembler;
pub mod sequence;
pub mod links;
pub mod jsonld;

// Re-export commonly used types
pub use entities::{
    Artwork, DbpediaArtistRecord, DbpediaArtworkRecord, EnrichmentView, EventKind,
    ExternalLinks, GettyTermRecord, LinkedEntity, LocalArtistRecord, ProvenanceEvent,
    Source, SourceFact, WikidataArtistRecord, WikidataArtworkRecord,
};
pub use dates::{extract_year, format_date};
pub use merge::{pick, pick_text, wikidata_page_url};
pub use policy::MergePolicy;
pub use assembler::{ArtistFacts, EnrichmentAssembler, ReconciledRecord};
pub use sequence::{compare_events, order_events};
pub use links::{collect_links, ExternalLink};
pub use jsonld::{artwork_jsonld, provenance_actions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
