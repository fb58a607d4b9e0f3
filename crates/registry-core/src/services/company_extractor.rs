//! Company record assembly from a raw registry record

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::registry::require_orgnr;
use crate::services::address_decomposer::{assign, AddressDecomposer, TrimMode};
use crate::services::field_extractor::{FieldExtractor, GenericAddressBlobs};
use registry_types::{CompanyRecord, PostalUnit, RawRecord};

/// Runs field extraction, both address decompositions and the visit
/// address fallback. Holds only compiled patterns, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct CompanyExtractor {
    fields: FieldExtractor,
    addresses: AddressDecomposer,
}

impl CompanyExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            fields: FieldExtractor::new(),
            addresses: AddressDecomposer::new(config.column_separator_width)?,
        })
    }

    /// Build the company record for `orgnr` from its scraped blobs.
    ///
    /// Fails only when `orgnr` is empty or blank. Anything the record does
    /// not carry comes back as an absent field.
    pub fn extract(&self, orgnr: &str, raw: &RawRecord) -> Result<CompanyRecord> {
        require_orgnr(orgnr)?;

        let fields = self.fields.extract(raw);

        let visit = self
            .addresses
            .decompose_unit(fields.visit_blob, TrimMode::BothEnds);
        let mail = self
            .addresses
            .decompose_unit(fields.mail_blob, TrimMode::LeadingOnly);
        let generic = generic_unit(&fields.generic);

        let (visit_address, mail_address) = merge_fallback(visit, mail, &generic);

        log::debug!(
            "Extracted {}: name={}, visit={}, mail={}",
            orgnr,
            fields.name.is_some(),
            !visit_address.is_empty(),
            !mail_address.is_empty()
        );

        Ok(CompanyRecord {
            name: fields.name,
            orgnr: orgnr.to_string(),
            owner: fields.owner,
            visit_address,
            mail_address,
            phone: fields.phone,
            email: None,
            website: None,
        })
    }
}

/// Address from the top-level street/postal/region rows, assigned with the
/// same positional rules as a decomposed block
pub fn generic_unit(blobs: &GenericAddressBlobs<'_>) -> PostalUnit {
    assign(blobs.tokens())
}

/// Fill gaps in the visit address from the generic address.
///
/// The mail address is returned untouched even when parts are missing.
/// Whether it was meant to get the same fallback is unknown, so it is
/// kept as the registry record has always been read.
pub fn merge_fallback(
    visit: PostalUnit,
    mail: PostalUnit,
    generic: &PostalUnit,
) -> (PostalUnit, PostalUnit) {
    (visit.or_else(generic), mail)
}
