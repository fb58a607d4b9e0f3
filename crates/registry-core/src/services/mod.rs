//! Extraction services

pub mod address_decomposer;
pub mod company_extractor;
pub mod field_extractor;

// Re-export service types
pub use address_decomposer::{AddressBlock, AddressDecomposer, TrimMode};
pub use company_extractor::CompanyExtractor;
pub use field_extractor::{FieldExtractor, PartialCompanyFields};
