// ⚖️ Field Merger - Pick one value for a field across competing sources
// Precedence is supplied by the caller per field; no source has implicit
// authority. Absence is the universal default, never an error.

use tracing::warn;

use crate::entities::SourceFact;

// ============================================================================
// PRECEDENCE PICK
// ============================================================================

/// First present candidate wins, in the order the caller supplies.
///
/// Returns None when every candidate is absent.
pub fn pick<T>(
    candidates: impl IntoIterator<Item = Option<SourceFact<T>>>,
) -> Option<SourceFact<T>> {
    candidates.into_iter().flatten().next()
}

/// Like `pick`, but an empty or whitespace-only string does not count as
/// present: blank upstream values fall through to the next candidate.
pub fn pick_text(
    candidates: impl IntoIterator<Item = Option<SourceFact<String>>>,
) -> Option<SourceFact<String>> {
    candidates
        .into_iter()
        .flatten()
        .find(|fact| !fact.value.trim().is_empty())
}

// ============================================================================
// WIKIDATA IDENTITY LINK
// ============================================================================

/// Convert a raw Wikidata entity URI into a user-facing wiki page URL.
///
/// The trailing path segment must match `Q<digits>`; anything else is treated
/// as malformed upstream data. A malformed value that is still an absolute
/// URL passes through raw; otherwise the field is absent.
pub fn wikidata_page_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);

    if is_qid(segment) {
        return Some(format!("https://www.wikidata.org/wiki/{}", segment));
    }

    warn!(uri = raw, "wikidata identifier does not match Q<digits>");

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(raw.trim().to_string())
    } else {
        None
    }
}

/// `Q` followed by one or more digits, nothing else
fn is_qid(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next() == Some('Q') && {
        let rest = chars.as_str();
        !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Source;

    fn fact(source: Source, value: &str) -> Option<SourceFact<String>> {
        Some(SourceFact::new(source, value.to_string()))
    }

    #[test]
    fn test_pick_first_present_wins() {
        let winner = pick_text([None, fact(Source::Wikidata, "B"), fact(Source::Local, "C")]);

        let winner = winner.unwrap();
        assert_eq!(winner.value, "B");
        assert_eq!(winner.source, Source::Wikidata);
    }

    #[test]
    fn test_pick_all_absent() {
        let winner = pick_text([None, None, None]);
        assert!(winner.is_none());
    }

    #[test]
    fn test_pick_text_skips_blank_values() {
        let winner = pick_text([
            fact(Source::Dbpedia, "   "),
            fact(Source::Wikidata, ""),
            fact(Source::Local, "Dutch"),
        ]);

        let winner = winner.unwrap();
        assert_eq!(winner.value, "Dutch");
        assert_eq!(winner.source, Source::Local);
    }

    #[test]
    fn test_pick_generic_keeps_first_some() {
        let winner = pick([None, Some(SourceFact::new(Source::Getty, 7)), None]);
        assert_eq!(winner.unwrap().value, 7);
    }

    #[test]
    fn test_wikidata_page_url_valid_entity_uri() {
        assert_eq!(
            wikidata_page_url("http://www.wikidata.org/entity/Q45585").as_deref(),
            Some("https://www.wikidata.org/wiki/Q45585")
        );
        // Trailing slash tolerated
        assert_eq!(
            wikidata_page_url("http://www.wikidata.org/entity/Q45585/").as_deref(),
            Some("https://www.wikidata.org/wiki/Q45585")
        );
        // Bare Q-ID tolerated
        assert_eq!(
            wikidata_page_url("Q12418").as_deref(),
            Some("https://www.wikidata.org/wiki/Q12418")
        );
    }

    #[test]
    fn test_wikidata_page_url_malformed_absolute_url_passes_through() {
        assert_eq!(
            wikidata_page_url("https://www.wikidata.org/entity/not-an-id").as_deref(),
            Some("https://www.wikidata.org/entity/not-an-id")
        );
    }

    #[test]
    fn test_wikidata_page_url_malformed_non_url_is_absent() {
        assert!(wikidata_page_url("entity/not-an-id").is_none());
        assert!(wikidata_page_url("Q").is_none());
        assert!(wikidata_page_url("Q12a418").is_none());
        assert!(wikidata_page_url("").is_none());
    }
}
