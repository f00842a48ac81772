// 🪪 JSON-LD Export - structured data for the reconciled record
// Maps the merged record onto schema.org: the artwork as a VisualArtwork,
// identity links as sameAs, each provenance event as a transfer-action record.

use serde_json::{json, Map, Value};

use crate::assembler::ReconciledRecord;
use crate::entities::{Artwork, EventKind, ProvenanceEvent};

// ============================================================================
// CONTEXT
// ============================================================================

/// Namespaces used by the exported documents
pub fn jsonld_context() -> Value {
    json!({
        "@vocab": "http://arp.example.org/ontology#",
        "dc": "http://purl.org/dc/elements/1.1/",
        "prov": "http://www.w3.org/ns/prov#",
        "schema": "http://schema.org/",
        "title": "dc:title",
        "artist": "dc:creator",
        "description": "dc:description",
        "dateCreated": "dc:date",
        "sameAs": "schema:sameAs"
    })
}

/// schema.org action type for a classified provenance event.
///
/// Unclassified labels stay a generic TransferAction rather than dropping
/// out of the export.
fn action_type(kind: Option<EventKind>) -> &'static str {
    match kind {
        Some(EventKind::Creation) => "schema:CreateAction",
        Some(EventKind::Sale) => "schema:SellAction",
        Some(EventKind::Gift) | Some(EventKind::Bequest) => "schema:DonateAction",
        Some(EventKind::Theft) => "schema:TakeAction",
        Some(EventKind::Recovery) | Some(EventKind::Acquisition) => "schema:ReceiveAction",
        Some(EventKind::Loan) => "schema:LendAction",
        Some(EventKind::Return) => "schema:ReturnAction",
        None => "schema:TransferAction",
    }
}

// ============================================================================
// EXPORT
// ============================================================================

/// One transfer-action record per provenance event, in the order given
/// (callers pass the already-sequenced list).
pub fn provenance_actions(events: &[ProvenanceEvent]) -> Vec<Value> {
    events.iter().map(event_action).collect()
}

fn event_action(event: &ProvenanceEvent) -> Value {
    let mut action = Map::new();
    action.insert("@type".to_string(), json!(action_type(event.kind())));
    action.insert("label".to_string(), json!(event.event));

    if let Some(id) = &event.id {
        action.insert("@id".to_string(), json!(id));
    }
    if let Some(date) = &event.date {
        action.insert("prov:atTime".to_string(), json!(date));
    }
    if let Some(owner) = &event.owner {
        action.insert(
            "schema:agent".to_string(),
            json!({"@type": "schema:Person", "schema:name": owner}),
        );
    }
    if let Some(location) = &event.location {
        action.insert(
            "schema:location".to_string(),
            json!({"@type": "schema:Place", "schema:name": location}),
        );
    }
    if let Some(description) = &event.description {
        action.insert("description".to_string(), json!(description));
    }
    if let Some(source_uri) = &event.source_uri {
        action.insert("prov:wasDerivedFrom".to_string(), json!(source_uri));
    }

    Value::Object(action)
}

/// Full JSON-LD document for one reconciled artwork.
///
/// Absent fields are omitted, never emitted as null.
pub fn artwork_jsonld(artwork: &Artwork, record: &ReconciledRecord) -> Value {
    let mut doc = Map::new();
    doc.insert("@context".to_string(), jsonld_context());
    doc.insert("@type".to_string(), json!("schema:VisualArtwork"));
    doc.insert("@id".to_string(), json!(record.artwork_id));
    doc.insert("title".to_string(), json!(record.title));

    if let Some(artist) = &artwork.artist {
        let mut person = Map::new();
        person.insert("@type".to_string(), json!("schema:Person"));
        person.insert("schema:name".to_string(), json!(artist));

        if let Some(biography) = &record.artist.biography {
            person.insert("description".to_string(), json!(biography.value));
        }
        if let Some(birth) = &record.artist.birth_date {
            person.insert("schema:birthDate".to_string(), json!(birth.value));
        }
        if let Some(death) = &record.artist.death_date {
            person.insert("schema:deathDate".to_string(), json!(death.value));
        }
        if let Some(nationality) = &record.artist.nationality {
            person.insert("schema:nationality".to_string(), json!(nationality.value));
        }

        doc.insert("artist".to_string(), Value::Object(person));
    }

    if let Some(display_date) = &record.display_date {
        doc.insert("dateCreated".to_string(), json!(display_date));
    }
    if let Some(medium) = &artwork.medium {
        doc.insert("schema:artMedium".to_string(), json!(medium));
    }
    if let Some(description) = &artwork.description {
        doc.insert("description".to_string(), json!(description));
    }
    if let Some(image_url) = &artwork.image_url {
        doc.insert("schema:image".to_string(), json!(image_url));
    }
    if let Some(location) = &artwork.current_location {
        doc.insert(
            "schema:contentLocation".to_string(),
            json!({"@type": "schema:Place", "schema:name": location}),
        );
    }

    if !record.links.is_empty() {
        let urls: Vec<&str> = record.links.iter().map(|l| l.url.as_str()).collect();
        doc.insert("sameAs".to_string(), json!(urls));
    }

    if !record.provenance.is_empty() {
        doc.insert(
            "hasProvenance".to_string(),
            Value::Array(provenance_actions(&record.provenance)),
        );
    }

    Value::Object(doc)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::EnrichmentAssembler;
    use crate::entities::{EnrichmentView, ExternalLinks, WikidataArtworkRecord};

    #[test]
    fn test_sale_event_maps_to_sell_action() {
        let events = vec![ProvenanceEvent::new("Sale")
            .with_date("1891")
            .with_owner("Durand-Ruel")];

        let actions = provenance_actions(&events);
        assert_eq!(actions[0]["@type"], "schema:SellAction");
        assert_eq!(actions[0]["prov:atTime"], "1891");
        assert_eq!(actions[0]["schema:agent"]["schema:name"], "Durand-Ruel");
    }

    #[test]
    fn test_unknown_event_label_maps_to_transfer_action() {
        let events = vec![ProvenanceEvent::new("Restoration")];

        let actions = provenance_actions(&events);
        assert_eq!(actions[0]["@type"], "schema:TransferAction");
        assert_eq!(actions[0]["label"], "Restoration");
        // No fabricated fields for absent data
        assert!(actions[0].get("prov:atTime").is_none());
    }

    #[test]
    fn test_artwork_document_same_as_matches_links() {
        let artwork = Artwork::new("artwork_night_watch", "The Night Watch")
            .with_artist("Rembrandt")
            .with_external_links(ExternalLinks {
                dbpedia: Some("http://dbpedia.org/resource/The_Night_Watch".to_string()),
                wikidata: None,
                getty: vec![],
            });
        let view = EnrichmentView::new("artwork_night_watch").with_wikidata(
            WikidataArtworkRecord::new("http://www.wikidata.org/entity/Q219831", "Q219831"),
        );

        let assembler = EnrichmentAssembler::new();
        let record = assembler.assemble(&artwork, &view);
        let doc = artwork_jsonld(&artwork, &record);

        assert_eq!(doc["@type"], "schema:VisualArtwork");
        assert_eq!(
            doc["sameAs"],
            json!([
                "http://dbpedia.org/resource/The_Night_Watch",
                "https://www.wikidata.org/wiki/Q219831"
            ])
        );
        assert_eq!(doc["artist"]["schema:name"], "Rembrandt");
    }

    #[test]
    fn test_provenance_rides_in_sequenced_order() {
        let artwork = Artwork::new("artwork_x", "X");
        let events = vec![
            ProvenanceEvent::new("Sale").with_date("1891"),
            ProvenanceEvent::new("Creation").with_order(1),
        ];

        let assembler = EnrichmentAssembler::new();
        let record = assembler.reconcile(&artwork, &EnrichmentView::new("artwork_x"), &events);
        let doc = artwork_jsonld(&artwork, &record);

        let actions = doc["hasProvenance"].as_array().unwrap();
        assert_eq!(actions[0]["@type"], "schema:CreateAction");
        assert_eq!(actions[1]["@type"], "schema:SellAction");
    }

    #[test]
    fn test_minimal_artwork_document_omits_absent_fields() {
        let artwork = Artwork::new("artwork_x", "X");
        let assembler = EnrichmentAssembler::new();
        let record = assembler.assemble(&artwork, &EnrichmentView::new("artwork_x"));

        let doc = artwork_jsonld(&artwork, &record);
        assert!(doc.get("artist").is_none());
        assert!(doc.get("sameAs").is_none());
        assert!(doc.get("hasProvenance").is_none());
        assert!(doc.get("dateCreated").is_none());
    }
}
