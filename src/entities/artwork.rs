// 🖼️ Artwork Model - Catalog record for a single work
// Read-only input: the catalog owns these records, this engine never mutates them.

use serde::{Deserialize, Serialize};

// ============================================================================
// EXTERNAL LINKS
// ============================================================================

/// Identity URIs recorded on the local artwork record itself.
///
/// These are the curator-entered `sameAs` assertions. They act as the
/// fallback tier when live enrichment lacks a provider (see links module).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalLinks {
    /// DBpedia resource URI (e.g., http://dbpedia.org/resource/Mona_Lisa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbpedia: Option<String>,

    /// Wikidata entity URI (e.g., http://www.wikidata.org/entity/Q12418)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<String>,

    /// Getty AAT URIs (a work can carry several material terms)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub getty: Vec<String>,
}

impl ExternalLinks {
    pub fn is_empty(&self) -> bool {
        self.dbpedia.is_none() && self.wikidata.is_none() && self.getty.is_empty()
    }
}

// ============================================================================
// ARTWORK
// ============================================================================

/// Artwork - the catalog record this engine reconciles around
///
/// Wire shape mirrors the catalog JSON (camelCase: `dateCreated`, `imageUrl`).
/// Only `id` and `title` are guaranteed; everything else is best-effort
/// curator data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Free text: "1503", "c. 1503", "1503/1519" all occur in the corpus
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_links: Option<ExternalLinks>,
}

impl Artwork {
    /// Create an artwork with required fields only
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Artwork {
            id: id.into(),
            title: title.into(),
            artist: None,
            date_created: None,
            medium: None,
            dimensions: None,
            description: None,
            image_url: None,
            current_location: None,
            period: None,
            style: None,
            external_links: None,
        }
    }

    /// Builder: set artist name
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Builder: set creation date (free text)
    pub fn with_date_created(mut self, date: impl Into<String>) -> Self {
        self.date_created = Some(date.into());
        self
    }

    /// Builder: set recorded identity links
    pub fn with_external_links(mut self, links: ExternalLinks) -> Self {
        self.external_links = Some(links);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_wire_shape_is_camel_case() {
        let artwork = Artwork::new("artwork_mona_lisa", "Mona Lisa")
            .with_artist("Leonardo da Vinci")
            .with_date_created("c. 1503");

        let json = serde_json::to_value(&artwork).unwrap();
        assert_eq!(json["dateCreated"], "c. 1503");
        assert!(json.get("date_created").is_none());
        // Absent optionals are omitted, not null
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_artwork_deserializes_with_minimal_fields() {
        let artwork: Artwork =
            serde_json::from_str(r#"{"id": "artwork_x", "title": "Untitled"}"#).unwrap();

        assert_eq!(artwork.title, "Untitled");
        assert!(artwork.artist.is_none());
        assert!(artwork.external_links.is_none());
    }

    #[test]
    fn test_external_links_getty_defaults_to_empty() {
        let links: ExternalLinks =
            serde_json::from_str(r#"{"wikidata": "http://www.wikidata.org/entity/Q12418"}"#)
                .unwrap();

        assert!(links.getty.is_empty());
        assert!(!links.is_empty());
    }
}
