// 🎛️ Merge Policy - Per-field source precedence as data
// Precedence differs by field and is a deployment decision, not a code path.

use serde::{Deserialize, Serialize};

use crate::entities::Source;

// ============================================================================
// MERGE POLICY
// ============================================================================

/// MergePolicy - which sources a field consults, in order.
///
/// The defaults encode the catalog's observed policy. A deployment can
/// override any field from configuration; sources left out of a field's list
/// are never consulted for it (the assembler logs when they had a value
/// anyway, so ignored data stays visible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergePolicy {
    pub biography: Vec<Source>,
    pub birth_date: Vec<Source>,
    pub death_date: Vec<Source>,
    pub nationality: Vec<Source>,
}

impl Default for MergePolicy {
    fn default() -> Self {
        MergePolicy {
            biography: vec![Source::Dbpedia, Source::Wikidata, Source::Local],
            birth_date: vec![Source::Dbpedia, Source::Wikidata, Source::Local],
            death_date: vec![Source::Dbpedia, Source::Wikidata, Source::Local],
            // Nationality is curated locally. External claims exist upstream
            // but are not consulted under this default (see DESIGN.md).
            nationality: vec![Source::Local],
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_biography_order() {
        let policy = MergePolicy::default();
        assert_eq!(
            policy.biography,
            vec![Source::Dbpedia, Source::Wikidata, Source::Local]
        );
        assert_eq!(policy.nationality, vec![Source::Local]);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        // A deployment overriding one field should not lose the rest
        let policy: MergePolicy =
            serde_json::from_str(r#"{"nationality": ["local", "wikidata"]}"#).unwrap();

        assert_eq!(policy.nationality, vec![Source::Local, Source::Wikidata]);
        assert_eq!(
            policy.biography,
            vec![Source::Dbpedia, Source::Wikidata, Source::Local]
        );
    }
}
