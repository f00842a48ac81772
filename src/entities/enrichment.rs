// 🌐 Enrichment Model - Facts fetched from external knowledge bases
// Each source payload is independently optional: a failed or timed-out fetch
// arrives here as absence, never as an error.

use serde::{Deserialize, Serialize};

// ============================================================================
// SOURCE
// ============================================================================

/// Source - where a fact came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local,
    Dbpedia,
    Wikidata,
    Getty,
}

impl Source {
    /// Every source, in no particular authority order (precedence is per-field)
    pub const ALL: [Source; 4] = [
        Source::Local,
        Source::Dbpedia,
        Source::Wikidata,
        Source::Getty,
    ];

    /// Short code matching the wire `source` tag
    pub fn code(&self) -> &'static str {
        match self {
            Source::Local => "local",
            Source::Dbpedia => "dbpedia",
            Source::Wikidata => "wikidata",
            Source::Getty => "getty",
        }
    }

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            Source::Local => "Local record",
            Source::Dbpedia => "DBpedia",
            Source::Wikidata => "Wikidata",
            Source::Getty => "Getty AAT",
        }
    }
}

// ============================================================================
// SOURCE FACT
// ============================================================================

/// SourceFact - a value attributed to the source that supplied it
///
/// A plain wrapper, not a subtype hierarchy: "any of four sources, any may
/// be absent" is `Option<SourceFact<T>>` everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFact<T> {
    pub source: Source,
    pub value: T,
}

impl<T> SourceFact<T> {
    pub fn new(source: Source, value: T) -> Self {
        SourceFact { source, value }
    }
}

// ============================================================================
// SHARED SHAPES
// ============================================================================

/// A linked entity with URI and label.
///
/// DBpedia payloads say `name` where Wikidata says `label`; both land here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LinkedEntity {
    pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
        LinkedEntity {
            uri: Some(uri.into()),
            label: Some(label.into()),
        }
    }
}

/// Width/height strings as DBpedia reports them (units vary upstream)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

// ============================================================================
// PER-SOURCE RECORDS
// ============================================================================

/// DBpedia artwork payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbpediaArtworkRecord {
    pub uri: String,

    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub museum: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ArtworkDimensions>,

    // Upstream emits this one in snake_case
    #[serde(default, rename = "wikidata_uri", skip_serializing_if = "Option::is_none")]
    pub wikidata_uri: Option<String>,
}

impl DbpediaArtworkRecord {
    pub fn new(uri: impl Into<String>) -> Self {
        DbpediaArtworkRecord {
            uri: uri.into(),
            abstract_text: None,
            thumbnail: None,
            artist: None,
            museum: None,
            year: None,
            dimensions: None,
            wikidata_uri: None,
        }
    }
}

/// DBpedia artist payload (biographical)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbpediaArtistRecord {
    pub uri: String,

    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<LinkedEntity>,

    #[serde(default, rename = "wikidata_uri", skip_serializing_if = "Option::is_none")]
    pub wikidata_uri: Option<String>,
}

impl DbpediaArtistRecord {
    pub fn new(uri: impl Into<String>) -> Self {
        DbpediaArtistRecord {
            uri: uri.into(),
            abstract_text: None,
            thumbnail: None,
            birth_date: None,
            death_date: None,
            birth_place: None,
            nationality: None,
            movement: None,
            wikidata_uri: None,
        }
    }
}

/// Wikidata artwork payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikidataArtworkRecord {
    /// Full entity URI (http://www.wikidata.org/entity/Q12418)
    pub uri: String,

    pub qid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inception: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<LinkedEntity>,
}

impl WikidataArtworkRecord {
    pub fn new(uri: impl Into<String>, qid: impl Into<String>) -> Self {
        WikidataArtworkRecord {
            uri: uri.into(),
            qid: qid.into(),
            image: None,
            inception: None,
            creator: None,
            location: None,
            material: None,
            genre: None,
            movement: None,
        }
    }
}

/// Wikidata artist payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikidataArtistRecord {
    pub uri: String,

    pub qid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Short entity description (the second biography tier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<LinkedEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement: Option<LinkedEntity>,
}

impl WikidataArtistRecord {
    pub fn new(uri: impl Into<String>, qid: impl Into<String>) -> Self {
        WikidataArtistRecord {
            uri: uri.into(),
            qid: qid.into(),
            image: None,
            description: None,
            birth_date: None,
            death_date: None,
            birth_place: None,
            nationality: None,
            occupation: None,
            movement: None,
        }
    }
}

/// Getty AAT term payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GettyTermRecord {
    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pref_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broader: Option<LinkedEntity>,
}

impl GettyTermRecord {
    pub fn new(uri: impl Into<String>) -> Self {
        GettyTermRecord {
            uri: uri.into(),
            pref_label: None,
            scope_note: None,
            broader: None,
        }
    }
}

/// Artist record from the local triplestore
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalArtistRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// ENRICHMENT VIEW
// ============================================================================

/// EnrichmentView - every external payload fetched for one artwork
///
/// Built fresh per request and never persisted. Any subset of sources may be
/// absent; that is the common case, not an exception.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentView {
    pub artwork_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbpedia: Option<DbpediaArtworkRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<WikidataArtworkRecord>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub getty: Vec<GettyTermRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_dbpedia: Option<DbpediaArtistRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_wikidata: Option<WikidataArtistRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_local: Option<LocalArtistRecord>,
}

impl EnrichmentView {
    /// Empty view for an artwork (every fetch failed or was skipped)
    pub fn new(artwork_id: impl Into<String>) -> Self {
        EnrichmentView {
            artwork_id: artwork_id.into(),
            ..Default::default()
        }
    }

    /// Builder: DBpedia artwork payload
    pub fn with_dbpedia(mut self, record: DbpediaArtworkRecord) -> Self {
        self.dbpedia = Some(record);
        self
    }

    /// Builder: Wikidata artwork payload
    pub fn with_wikidata(mut self, record: WikidataArtworkRecord) -> Self {
        self.wikidata = Some(record);
        self
    }

    /// Builder: Getty term payloads
    pub fn with_getty(mut self, terms: Vec<GettyTermRecord>) -> Self {
        self.getty = terms;
        self
    }

    /// Builder: DBpedia artist payload
    pub fn with_artist_dbpedia(mut self, record: DbpediaArtistRecord) -> Self {
        self.artist_dbpedia = Some(record);
        self
    }

    /// Builder: Wikidata artist payload
    pub fn with_artist_wikidata(mut self, record: WikidataArtistRecord) -> Self {
        self.artist_wikidata = Some(record);
        self
    }

    /// Builder: local artist record
    pub fn with_artist_local(mut self, record: LocalArtistRecord) -> Self {
        self.artist_local = Some(record);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
