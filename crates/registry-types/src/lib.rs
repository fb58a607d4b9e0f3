//! Shared types for the company registry extractor

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Logical regions of the registry report table, one blob each
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawField {
    Name,
    RegisteredOwner,
    Phone,
    VisitAddress,
    MailAddress,
    StreetAddress,
    PostalAddress,
    PostalServiceRegion,
}

impl RawField {
    pub const ALL: [RawField; 8] = [
        RawField::Name,
        RawField::RegisteredOwner,
        RawField::Phone,
        RawField::VisitAddress,
        RawField::MailAddress,
        RawField::StreetAddress,
        RawField::PostalAddress,
        RawField::PostalServiceRegion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RawField::Name => "name",
            RawField::RegisteredOwner => "registered_owner",
            RawField::Phone => "phone",
            RawField::VisitAddress => "visit_address",
            RawField::MailAddress => "mail_address",
            RawField::StreetAddress => "street_address",
            RawField::PostalAddress => "postal_address",
            RawField::PostalServiceRegion => "postal_service_region",
        }
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text blobs scraped from one registry page, keyed by table region.
///
/// A region that could not be located is simply missing from the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    blobs: BTreeMap<RawField, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used by locators and test fixtures
    pub fn with(mut self, field: RawField, blob: impl Into<String>) -> Self {
        self.blobs.insert(field, blob.into());
        self
    }

    pub fn get(&self, field: RawField) -> Option<&str> {
        self.blobs.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl FromIterator<(RawField, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (RawField, String)>>(iter: I) -> Self {
        Self {
            blobs: iter.into_iter().collect(),
        }
    }
}

/// Postal address split into its parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalUnit {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub service_region: Option<String>,
}

impl PostalUnit {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.postal_code.is_none()
            && self.city.is_none()
            && self.service_region.is_none()
    }

    /// "<postal code> <city>", skipping whichever part is absent
    pub fn postal_address(&self) -> Option<String> {
        match (&self.postal_code, &self.city) {
            (Some(code), Some(city)) => Some(format!("{} {}", code, city)),
            (Some(code), None) => Some(code.clone()),
            (None, Some(city)) => Some(city.clone()),
            (None, None) => None,
        }
    }

    /// Fill every absent part from `fallback`
    pub fn or_else(self, fallback: &PostalUnit) -> Self {
        Self {
            street: self.street.or_else(|| fallback.street.clone()),
            postal_code: self.postal_code.or_else(|| fallback.postal_code.clone()),
            city: self.city.or_else(|| fallback.city.clone()),
            service_region: self.service_region.or_else(|| fallback.service_region.clone()),
        }
    }
}

/// Person name as registered, "Last, First" on the source page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Company data extracted from one registry record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: Option<String>,
    /// Organization number exactly as the caller supplied it
    pub orgnr: String,
    pub owner: PersonName,
    pub visit_address: PostalUnit,
    pub mail_address: PostalUnit,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}
