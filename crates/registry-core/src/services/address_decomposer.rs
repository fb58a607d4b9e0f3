//! Address block decomposition
//!
//! Address cells on the registry page are a fixed-width rendering of several
//! columns collapsed into one string. Long whitespace runs mark the column
//! breaks; the first column is a caption and, for visit addresses, the last
//! column is page furniture as well.

use crate::constants::DEFAULT_COLUMN_SEPARATOR_WIDTH;
use crate::error::{RegistryError, Result};
use crate::services::field_extractor::non_empty;
use once_cell::sync::Lazy;
use regex::Regex;
use registry_types::PostalUnit;

/// Swedish postal code, "123 45"
static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{3}\s[0-9]{2}").expect("Failed to compile postal code regex"));

static CITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zåäöA-ZÅÄÖ]+").expect("Failed to compile city regex"));

/// Which non-address tokens surround the columns of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    /// Caption first, furniture last (visit address layout)
    BothEnds,
    /// Caption first only (mail address layout)
    LeadingOnly,
}

/// Column tokens of one address cell, in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBlock {
    tokens: Vec<String>,
}

impl AddressBlock {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Remove the caption (and trailer) tokens for the given layout
    pub fn trimmed(mut self, mode: TrimMode) -> Self {
        let drop_tail = match mode {
            TrimMode::BothEnds => 1,
            TrimMode::LeadingOnly => 0,
        };
        if self.tokens.len() < 1 + drop_tail {
            self.tokens.clear();
            return self;
        }
        self.tokens.truncate(self.tokens.len() - drop_tail);
        self.tokens.remove(0);
        self
    }

    /// Positional assignment: street, postal code + city, service region
    pub fn assign(&self) -> PostalUnit {
        assign(self.tokens.iter().map(|t| Some(t.as_str())))
    }
}

impl<S: Into<String>> FromIterator<S> for AddressBlock {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddressDecomposer {
    column_separator: Regex,
}

impl AddressDecomposer {
    /// Decomposer breaking columns on `width` or more whitespace characters
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(RegistryError::Config(
                "column separator width must be greater than zero".to_string(),
            ));
        }
        let column_separator = Regex::new(&format!(r"\s{{{},}}", width)).map_err(|e| {
            RegistryError::Config(format!("Invalid column separator width {}: {}", width, e))
        })?;

        Ok(Self { column_separator })
    }

    /// Split a blob into its non-empty column tokens, untrimmed by layout
    pub fn split(&self, blob: &str) -> AddressBlock {
        self.column_separator
            .split(blob)
            .filter(|token| !token.trim().is_empty())
            .collect()
    }

    /// Split a blob and strip the layout's caption tokens. An absent blob
    /// gives an empty block.
    pub fn decompose(&self, blob: Option<&str>, mode: TrimMode) -> AddressBlock {
        match blob {
            Some(blob) => self.split(blob).trimmed(mode),
            None => AddressBlock::default(),
        }
    }

    pub fn decompose_unit(&self, blob: Option<&str>, mode: TrimMode) -> PostalUnit {
        self.decompose(blob, mode).assign()
    }
}

impl Default for AddressDecomposer {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMN_SEPARATOR_WIDTH)
            .expect("Failed to compile default column separator regex")
    }
}

/// Assign positional tokens to a PostalUnit. A missing or blank token
/// leaves its part absent.
pub fn assign<'a, I>(tokens: I) -> PostalUnit
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut tokens = tokens.into_iter();
    let street = tokens.next().flatten();
    let postal = tokens.next().flatten();
    let service_region = tokens.next().flatten();

    PostalUnit {
        street: street.and_then(non_empty),
        postal_code: postal.and_then(extract_postal_code),
        city: postal.and_then(extract_city),
        service_region: service_region.and_then(non_empty),
    }
}

pub fn extract_postal_code(token: &str) -> Option<String> {
    POSTAL_CODE.find(token).map(|m| m.as_str().to_string())
}

/// First letter run of the token, Swedish letters included
pub fn extract_city(token: &str) -> Option<String> {
    CITY.find(token).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep() -> String {
        " ".repeat(DEFAULT_COLUMN_SEPARATOR_WIDTH)
    }

    fn visit_blob() -> String {
        [
            "Besöksadress",
            "Storgatan 1",
            "123 45 Stockholm",
            "Stockholm kommun",
            "Karta",
        ]
        .join(&sep())
    }

    #[test]
    fn split_on_long_whitespace_runs_only() {
        let blob = format!("a b{}c  d{}e", sep(), " ".repeat(80));
        let block = AddressDecomposer::default().split(&blob);
        assert_eq!(block.tokens(), &["a b", "c  d", "e"]);
    }

    #[test]
    fn shorter_runs_do_not_split() {
        let blob = format!("a{}b", " ".repeat(DEFAULT_COLUMN_SEPARATOR_WIDTH - 1));
        assert_eq!(AddressDecomposer::default().split(&blob).len(), 1);
    }

    #[test]
    fn newlines_and_tabs_count_as_whitespace() {
        let blob = format!("a\n{}\tb", " ".repeat(34));
        assert_eq!(AddressDecomposer::default().split(&blob).tokens(), &["a", "b"]);
    }

    #[test]
    fn blank_tokens_are_dropped() {
        let blob = format!("{}a{}   {}b{}", sep(), sep(), sep(), sep());
        assert_eq!(AddressDecomposer::default().split(&blob).tokens(), &["a", "b"]);
    }

    #[test]
    fn both_ends_drops_caption_and_trailer() {
        let unit = AddressDecomposer::default()
            .decompose_unit(Some(&visit_blob()), TrimMode::BothEnds);

        assert_eq!(
            unit,
            PostalUnit {
                street: Some("Storgatan 1".to_string()),
                postal_code: Some("123 45".to_string()),
                city: Some("Stockholm".to_string()),
                service_region: Some("Stockholm kommun".to_string()),
            }
        );
    }

    #[test]
    fn leading_only_keeps_trailer_in_working_set() {
        let decomposer = AddressDecomposer::default();
        let blob = visit_blob();

        let both = decomposer.decompose(Some(&blob), TrimMode::BothEnds);
        let leading = decomposer.decompose(Some(&blob), TrimMode::LeadingOnly);

        assert_eq!(both.len(), 3);
        assert_eq!(leading.len(), 4);
        assert_eq!(leading.tokens()[3], "Karta");
        assert_eq!(leading.assign().street.as_deref(), Some("Storgatan 1"));
    }

    #[test]
    fn trim_modes_assign_differently_on_short_blocks() {
        let decomposer = AddressDecomposer::default();
        let blob = ["Postadress", "Box 12", "123 45 Solna"].join(&sep());

        let visit = decomposer.decompose_unit(Some(&blob), TrimMode::BothEnds);
        let mail = decomposer.decompose_unit(Some(&blob), TrimMode::LeadingOnly);

        assert_eq!(visit.street.as_deref(), Some("Box 12"));
        assert_eq!(visit.postal_code, None);
        assert_eq!(visit.city, None);

        assert_eq!(mail.street.as_deref(), Some("Box 12"));
        assert_eq!(mail.postal_code.as_deref(), Some("123 45"));
        assert_eq!(mail.city.as_deref(), Some("Solna"));
        assert_eq!(mail.service_region, None);
    }

    #[test]
    fn trimming_short_blocks_never_panics() {
        let one: AddressBlock = ["only"].into_iter().collect();
        assert!(one.clone().trimmed(TrimMode::BothEnds).is_empty());
        assert!(one.trimmed(TrimMode::LeadingOnly).is_empty());
        assert!(AddressBlock::default().trimmed(TrimMode::BothEnds).is_empty());

        let two: AddressBlock = ["caption", "trailer"].into_iter().collect();
        assert!(two.trimmed(TrimMode::BothEnds).is_empty());
    }

    #[test]
    fn absent_blob_gives_empty_unit() {
        let decomposer = AddressDecomposer::default();
        assert!(decomposer.decompose_unit(None, TrimMode::BothEnds).is_empty());
        assert!(decomposer.decompose_unit(None, TrimMode::LeadingOnly).is_empty());
        assert!(decomposer.decompose_unit(Some(""), TrimMode::LeadingOnly).is_empty());
    }

    #[test]
    fn postal_code_and_city_are_independent() {
        let unit = assign([Some("Storgatan 1"), Some("Göteborg")]);
        assert_eq!(unit.postal_code, None);
        assert_eq!(unit.city.as_deref(), Some("Göteborg"));

        let unit = assign([Some("Storgatan 1"), Some("123 45")]);
        assert_eq!(unit.postal_code.as_deref(), Some("123 45"));
        assert_eq!(unit.city, None);
    }

    #[test]
    fn postal_extraction_is_idempotent_and_order_free() {
        let token = "  411 06 Göteborg ";

        let code_first = (extract_postal_code(token), extract_city(token));
        let city = extract_city(token);
        let code = extract_postal_code(token);

        assert_eq!(code_first, (code.clone(), city.clone()));
        assert_eq!(extract_postal_code(token), code);
        assert_eq!(code.as_deref(), Some("411 06"));
        assert_eq!(city.as_deref(), Some("Göteborg"));
    }

    #[test]
    fn city_keeps_swedish_letters() {
        assert_eq!(extract_city("981 33 Kiruna").as_deref(), Some("Kiruna"));
        assert_eq!(extract_city("702 10 Örebro").as_deref(), Some("Örebro"));
        assert_eq!(extract_city("123 45").as_deref(), None);
    }

    #[test]
    fn custom_width_changes_column_breaks() {
        let decomposer = AddressDecomposer::new(4).unwrap();
        let block = decomposer.split("Besöksadress    Storgatan 1    123 45 Täby");
        assert_eq!(block.tokens(), &["Besöksadress", "Storgatan 1", "123 45 Täby"]);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(matches!(
            AddressDecomposer::new(0),
            Err(RegistryError::Config(_))
        ));
    }
}
