// Artwork Provenance Reconciliation - CLI
// Loads a fixture bundle (artwork + raw provenance + enrichment payloads),
// runs the full reconciliation, and prints the result. The bundle stands in
// for whatever the data-access layer fetched; absent sources are normal.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use artwork_provenance::{
    artwork_jsonld, format_date, Artwork, EnrichmentAssembler, EnrichmentView,
    ProvenanceEvent, SourceFact,
};

const DEFAULT_BUNDLE: &str = "demos/mona_lisa.json";

/// Everything the engine needs for one artwork, as fetched upstream
#[derive(Debug, Deserialize)]
struct FixtureBundle {
    artwork: Artwork,

    #[serde(default)]
    provenance: Vec<ProvenanceEvent>,

    #[serde(default)]
    enrichment: Option<EnrichmentView>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_BUNDLE);

    println!("🎨 Artwork Provenance - Reconciliation");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let bundle = load_bundle(Path::new(path))?;
    println!("✓ Loaded bundle: {}", path);

    let enrichment = bundle
        .enrichment
        .unwrap_or_else(|| EnrichmentView::new(bundle.artwork.id.clone()));

    let assembler = EnrichmentAssembler::new();
    let record = assembler.reconcile(&bundle.artwork, &enrichment, &bundle.provenance);

    println!("\n📋 {} ({})", record.title, record.artwork_id);
    if let Some(date) = &record.display_date {
        println!("   Created: {}", date);
    }

    if let Some(artist) = &bundle.artwork.artist {
        println!("\n👤 {}", artist);
        print_fact("Born", record.artist.birth_date.as_ref(), true);
        print_fact("Died", record.artist.death_date.as_ref(), true);
        print_fact("Nationality", record.artist.nationality.as_ref(), false);
        print_fact("Biography", record.artist.biography.as_ref(), false);
    }

    if !record.links.is_empty() {
        println!("\n🔗 Identity links:");
        for link in &record.links {
            println!("   {} → {}", link.name, link.url);
        }
    }

    if !record.provenance.is_empty() {
        println!("\n📜 Provenance ({} events):", record.provenance.len());
        for (index, event) in record.provenance.iter().enumerate() {
            println!("   {}. {}", index + 1, describe_event(event));
        }
    }

    let document = artwork_jsonld(&bundle.artwork, &record);
    println!("\n🪪 JSON-LD:");
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}

fn load_bundle(path: &Path) -> Result<FixtureBundle> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read bundle {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse bundle {:?}", path))
}

fn print_fact(label: &str, fact: Option<&SourceFact<String>>, format_as_date: bool) {
    if let Some(fact) = fact {
        let value = if format_as_date {
            format_date(&fact.value)
        } else {
            fact.value.clone()
        };
        println!("   {}: {} [{}]", label, value, fact.source.name());
    }
}

fn describe_event(event: &ProvenanceEvent) -> String {
    let mut line = event.event.clone();
    if let Some(date) = &event.date {
        line.push_str(&format!(" ({})", format_date(date)));
    }
    if let Some(owner) = &event.owner {
        line.push_str(&format!(" - {}", owner));
    }
    if let Some(location) = &event.location {
        line.push_str(&format!(", {}", location));
    }
    line
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_bundle_parses_and_reconciles() {
        let bundle: FixtureBundle =
            serde_json::from_str(include_str!("../demos/mona_lisa.json")).unwrap();

        assert_eq!(bundle.artwork.id, "artwork_mona_lisa");
        assert_eq!(bundle.provenance.len(), 5);

        let enrichment = bundle.enrichment.unwrap();
        let assembler = EnrichmentAssembler::new();
        let record = assembler.reconcile(&bundle.artwork, &enrichment, &bundle.provenance);

        // Ordered events first, then dated ones chronologically, bare last
        let labels: Vec<&str> = record.provenance.iter().map(|e| e.event.as_str()).collect();
        assert_eq!(labels, vec!["Creation", "Sale", "Theft", "Recovery", "Acquisition"]);

        // All three providers resolve, in the fixed display order
        let names: Vec<&str> = record.links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["DBpedia", "Wikidata", "Getty AAT"]);
        assert_eq!(record.links[1].url, "https://www.wikidata.org/wiki/Q12418");
    }

    #[test]
    fn test_bundle_without_enrichment_still_reconciles() {
        let bundle: FixtureBundle = serde_json::from_str(
            r#"{"artwork": {"id": "artwork_x", "title": "X"}}"#,
        )
        .unwrap();

        let enrichment = bundle
            .enrichment
            .unwrap_or_else(|| EnrichmentView::new(bundle.artwork.id.clone()));
        let record =
            EnrichmentAssembler::new().reconcile(&bundle.artwork, &enrichment, &bundle.provenance);

        assert!(record.links.is_empty());
        assert!(record.provenance.is_empty());
    }
}
