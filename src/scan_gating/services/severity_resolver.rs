use std::str::FromStr;

use anyhow::Context;

use crate::scan_gating::domain::{Severity, Vulnerability};
use crate::shared::error::GateError;
use crate::shared::Result;

/// Rating provider trusted over all others when present.
const AUTHORITATIVE_SOURCE: &str = "NVD";

/// Scoring-method prefix required for a rating to count as
/// authoritative. Matches both `CVSSv3` and `CVSSv31` wire spellings.
const AUTHORITATIVE_METHOD_PREFIX: &str = "CVSSv3";

/// Picks the single governing severity from a vulnerability's ratings.
///
/// The first rating whose source is the authoritative provider and
/// whose method carries the authoritative prefix wins immediately.
/// When no rating qualifies, the first rating in document order is
/// taken as the best available signal - deliberately not the maximum
/// across sources, since cross-source averaging is not meaningful and
/// changing the rule would change pass/fail outcomes.
pub fn resolve_severity(vulnerability: &Vulnerability) -> Result<Severity> {
    for rating in &vulnerability.ratings {
        let source_matches = rating.source_name() == Some(AUTHORITATIVE_SOURCE);
        let method_matches = rating
            .method
            .as_deref()
            .is_some_and(|m| m.starts_with(AUTHORITATIVE_METHOD_PREFIX));

        if source_matches && method_matches {
            return parse_rating(&rating.severity, &vulnerability.id);
        }
    }

    let first = vulnerability.ratings.first().ok_or_else(|| {
        GateError::MissingRatings {
            vulnerability_id: vulnerability.id.clone(),
        }
    })?;

    parse_rating(&first.severity, &vulnerability.id)
}

fn parse_rating(text: &str, vulnerability_id: &str) -> Result<Severity> {
    Severity::from_str(text)
        .with_context(|| format!("while resolving severity of {}", vulnerability_id))
}
