//! Organization numbers and registry page addresses

use crate::error::{RegistryError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W").expect("Failed to compile non-word regex"));

/// Reject an empty or blank organization number. Anything else passes,
/// however it is formatted.
pub fn require_orgnr(orgnr: &str) -> Result<&str> {
    if orgnr.trim().is_empty() {
        return Err(RegistryError::MissingInput(
            "Org.nr for a company is not specified".to_string(),
        ));
    }
    Ok(orgnr)
}

/// Strip separators and other non-word characters, "556608-0155" -> "5566080155"
pub fn normalize_orgnr(orgnr: &str) -> String {
    NON_WORD.replace_all(orgnr, "").into_owned()
}

/// Page URL of a company on the registry
pub fn registry_url(base_url: &str, orgnr: &str) -> Result<String> {
    let orgnr = require_orgnr(orgnr)?;
    Ok(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        normalize_orgnr(orgnr)
    ))
}
