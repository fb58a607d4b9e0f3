//! Per-field extraction from raw registry blobs

use once_cell::sync::Lazy;
use regex::Regex;
use registry_types::{PersonName, RawField, RawRecord};

/// Leading "Label:" token in front of a value, e.g. "Ägare:" or "Telefon:"
static LABEL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\w+:").expect("Failed to compile label regex"));

/// Top-level address blobs used as fallback for the visit address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericAddressBlobs<'a> {
    pub street: Option<&'a str>,
    pub postal: Option<&'a str>,
    pub service_region: Option<&'a str>,
}

impl<'a> GenericAddressBlobs<'a> {
    /// Blobs in positional order: street, postal, service region
    pub fn tokens(&self) -> [Option<&'a str>; 3] {
        [self.street, self.postal, self.service_region]
    }
}

/// Atomic values pulled out of a RawRecord, address blobs still unparsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialCompanyFields<'a> {
    pub name: Option<String>,
    pub owner: PersonName,
    pub phone: Option<String>,
    pub visit_blob: Option<&'a str>,
    pub mail_blob: Option<&'a str>,
    pub generic: GenericAddressBlobs<'a>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldExtractor;

impl FieldExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract<'a>(&self, raw: &'a RawRecord) -> PartialCompanyFields<'a> {
        let name = raw.get(RawField::Name).and_then(non_empty);
        let owner = raw
            .get(RawField::RegisteredOwner)
            .map(parse_owner)
            .unwrap_or_default();
        let phone = raw
            .get(RawField::Phone)
            .and_then(|blob| non_empty(strip_label(blob)));

        if name.is_none() {
            log::debug!("No company name in record");
        }
        if phone.is_none() {
            log::debug!("No phone number in record");
        }

        PartialCompanyFields {
            name,
            owner,
            phone,
            visit_blob: raw.get(RawField::VisitAddress),
            mail_blob: raw.get(RawField::MailAddress),
            generic: GenericAddressBlobs {
                street: raw.get(RawField::StreetAddress),
                postal: raw.get(RawField::PostalAddress),
                service_region: raw.get(RawField::PostalServiceRegion),
            },
        }
    }
}

/// Drop a leading "Label:" token if there is one
pub fn strip_label(blob: &str) -> &str {
    match LABEL_PREFIX.find(blob) {
        Some(m) => &blob[m.end()..],
        None => blob,
    }
}

/// Parse "Label: Last, First" into a name. Without a comma the whole
/// value is taken as the last name.
pub fn parse_owner(blob: &str) -> PersonName {
    let value = strip_label(blob);
    match value.split_once(',') {
        Some((last, first)) => PersonName {
            first_name: non_empty(first),
            last_name: non_empty(last),
        },
        None => PersonName {
            first_name: None,
            last_name: non_empty(value),
        },
    }
}

/// Trimmed copy, or None when nothing is left
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_with_label_and_comma() {
        let owner = parse_owner("Ägare: Svensson, Erik");
        assert_eq!(owner.last_name.as_deref(), Some("Svensson"));
        assert_eq!(owner.first_name.as_deref(), Some("Erik"));
    }

    #[test]
    fn owner_without_comma_is_last_name_only() {
        let owner = parse_owner("Innehavare: Svensson");
        assert_eq!(owner.last_name.as_deref(), Some("Svensson"));
        assert_eq!(owner.first_name, None);
    }

    #[test]
    fn owner_splits_on_first_comma_only() {
        let owner = parse_owner("Svensson, Erik, Johan");
        assert_eq!(owner.last_name.as_deref(), Some("Svensson"));
        assert_eq!(owner.first_name.as_deref(), Some("Erik, Johan"));
    }

    #[test]
    fn owner_label_only_is_absent() {
        assert_eq!(parse_owner("Ägare:   "), PersonName::default());
    }

    #[test]
    fn label_is_only_stripped_at_start() {
        assert_eq!(strip_label("Telefon: 08-123 45"), " 08-123 45");
        assert_eq!(strip_label("08-123 45 ext:12"), "08-123 45 ext:12");
    }

    #[test]
    fn extract_reads_every_field() {
        let raw = RawRecord::new()
            .with(RawField::Name, "  Acme Handel AB \n")
            .with(RawField::RegisteredOwner, "Ägare: Svensson, Erik")
            .with(RawField::Phone, "Telefon:  08-123 456 ")
            .with(RawField::VisitAddress, "visit")
            .with(RawField::PostalAddress, "123 45 Stockholm");

        let fields = FieldExtractor::new().extract(&raw);

        assert_eq!(fields.name.as_deref(), Some("Acme Handel AB"));
        assert_eq!(fields.owner.first_name.as_deref(), Some("Erik"));
        assert_eq!(fields.phone.as_deref(), Some("08-123 456"));
        assert_eq!(fields.visit_blob, Some("visit"));
        assert_eq!(fields.mail_blob, None);
        assert_eq!(fields.generic.postal, Some("123 45 Stockholm"));
        assert_eq!(fields.generic.street, None);
    }

    #[test]
    fn extract_empty_record_is_all_absent() {
        let raw = RawRecord::new();
        let fields = FieldExtractor::new().extract(&raw);
        assert_eq!(fields, PartialCompanyFields::default());
    }

    #[test]
    fn blank_name_is_absent() {
        let raw = RawRecord::new().with(RawField::Name, " \t\n ");
        assert_eq!(FieldExtractor::new().extract(&raw).name, None);
    }
}
