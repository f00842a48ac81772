// 🔗 External Link Collector - Canonical sameAs links, one per provider
// Display contract: DBpedia, then Wikidata, then Getty AAT. Not alphabetical,
// not insertion order.

use serde::{Deserialize, Serialize};

use crate::entities::{Artwork, EnrichmentView, Source, SourceFact};
use crate::merge;

// ============================================================================
// EXTERNAL LINK
// ============================================================================

/// A named outbound identity link, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub name: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        ExternalLink {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Provider display names, in output order
pub const PROVIDER_DBPEDIA: &str = "DBpedia";
pub const PROVIDER_WIKIDATA: &str = "Wikidata";
pub const PROVIDER_GETTY: &str = "Getty AAT";

// ============================================================================
// COLLECTION
// ============================================================================

/// Assemble the ordered identity-link list for an artwork.
///
/// Per provider: prefer the enrichment-derived URI, fall back to the URI
/// recorded on the artwork itself, omit the provider when neither is usable.
/// The Wikidata winner (from either tier) is normalized to a wiki page URL.
pub fn collect_links(artwork: &Artwork, view: &EnrichmentView) -> Vec<ExternalLink> {
    let recorded = artwork.external_links.as_ref();
    let mut links = Vec::with_capacity(3);

    let dbpedia = merge::pick_text([
        view.dbpedia
            .as_ref()
            .map(|r| SourceFact::new(Source::Dbpedia, r.uri.clone())),
        recorded
            .and_then(|l| l.dbpedia.clone())
            .map(|uri| SourceFact::new(Source::Local, uri)),
    ]);
    if let Some(winner) = dbpedia {
        links.push(ExternalLink::new(PROVIDER_DBPEDIA, winner.value));
    }

    let wikidata = merge::pick_text([
        view.wikidata
            .as_ref()
            .map(|r| SourceFact::new(Source::Wikidata, r.uri.clone())),
        recorded
            .and_then(|l| l.wikidata.clone())
            .map(|uri| SourceFact::new(Source::Local, uri)),
    ]);
    if let Some(winner) = wikidata {
        // Entity URI → wiki page URL; malformed values may drop out here
        if let Some(url) = merge::wikidata_page_url(&winner.value) {
            links.push(ExternalLink::new(PROVIDER_WIKIDATA, url));
        }
    }

    let getty = merge::pick_text([
        view.getty
            .first()
            .map(|term| SourceFact::new(Source::Getty, term.uri.clone())),
        recorded
            .and_then(|l| l.getty.first().cloned())
            .map(|uri| SourceFact::new(Source::Local, uri)),
    ]);
    if let Some(winner) = getty {
        links.push(ExternalLink::new(PROVIDER_GETTY, winner.value));
    }

    links
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        DbpediaArtworkRecord, ExternalLinks, GettyTermRecord, WikidataArtworkRecord,
    };

    fn artwork_with_links() -> Artwork {
        Artwork::new("artwork_x", "X").with_external_links(ExternalLinks {
            dbpedia: Some("http://dbpedia.org/resource/X_recorded".to_string()),
            wikidata: Some("http://www.wikidata.org/entity/Q100".to_string()),
            getty: vec!["http://vocab.getty.edu/aat/300015050".to_string()],
        })
    }

    #[test]
    fn test_enrichment_uri_wins_over_recorded() {
        let view = EnrichmentView::new("artwork_x")
            .with_dbpedia(DbpediaArtworkRecord::new("http://dbpedia.org/resource/X_live"));

        let links = collect_links(&artwork_with_links(), &view);

        assert_eq!(links[0].name, PROVIDER_DBPEDIA);
        assert_eq!(links[0].url, "http://dbpedia.org/resource/X_live");
    }

    #[test]
    fn test_recorded_uri_fills_missing_provider() {
        let links = collect_links(&artwork_with_links(), &EnrichmentView::new("artwork_x"));

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].url, "http://dbpedia.org/resource/X_recorded");
        // Recorded Wikidata entity URI still gets normalized
        assert_eq!(links[1].url, "https://www.wikidata.org/wiki/Q100");
        assert_eq!(links[2].url, "http://vocab.getty.edu/aat/300015050");
    }

    #[test]
    fn test_output_order_is_fixed_regardless_of_input() {
        // Only Getty and Wikidata available, Getty listed "first" upstream
        let view = EnrichmentView::new("artwork_x")
            .with_getty(vec![GettyTermRecord::new("http://vocab.getty.edu/aat/300033618")])
            .with_wikidata(WikidataArtworkRecord::new(
                "http://www.wikidata.org/entity/Q45585",
                "Q45585",
            ));

        let links = collect_links(&Artwork::new("artwork_x", "X"), &view);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, PROVIDER_WIKIDATA);
        assert_eq!(links[0].url, "https://www.wikidata.org/wiki/Q45585");
        assert_eq!(links[1].name, PROVIDER_GETTY);
    }

    #[test]
    fn test_provider_omitted_when_nothing_usable() {
        let links = collect_links(
            &Artwork::new("artwork_x", "X"),
            &EnrichmentView::new("artwork_x"),
        );

        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_wikidata_value_drops_provider() {
        let artwork = Artwork::new("artwork_x", "X").with_external_links(ExternalLinks {
            dbpedia: None,
            wikidata: Some("entity/not-an-id".to_string()),
            getty: vec![],
        });

        let links = collect_links(&artwork, &EnrichmentView::new("artwork_x"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_blank_recorded_uri_does_not_count() {
        let artwork = Artwork::new("artwork_x", "X").with_external_links(ExternalLinks {
            dbpedia: Some("   ".to_string()),
            wikidata: None,
            getty: vec![],
        });

        let links = collect_links(&artwork, &EnrichmentView::new("artwork_x"));
        assert!(links.is_empty());
    }
}
