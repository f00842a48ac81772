// Entity Models - catalog and enrichment shapes
//
// Everything here is input or derived data:
// - Artwork and ProvenanceEvent come from the catalog (read-only)
// - Enrichment records come from external knowledge bases, any may be absent
// - SourceFact tags a value with the source that supplied it

pub mod artwork;
pub mod provenance;
pub mod enrichment;

pub use artwork::{Artwork, ExternalLinks};
pub use provenance::{EventKind, ProvenanceEvent};
pub use enrichment::{
    ArtworkDimensions, DbpediaArtistRecord, DbpediaArtworkRecord, EnrichmentView,
    GettyTermRecord, LinkedEntity, LocalArtistRecord, Source, SourceFact,
    WikidataArtistRecord, WikidataArtworkRecord,
};
