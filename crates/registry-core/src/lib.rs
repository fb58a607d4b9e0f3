//! Registry Core Library
//!
//! Extraction and normalization of Swedish company registry records: raw
//! text blobs scraped from a registry page go in, a typed company record
//! comes out. Nothing in here touches the network.

pub mod config;
pub mod constants;
pub mod error;
pub mod locator;
pub mod registry;
pub mod services;

// Re-export main types for easy access
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};

pub use locator::locate_report_table;
pub use registry::{normalize_orgnr, registry_url, require_orgnr};

// Re-export service types
pub use services::{
    AddressBlock,
    AddressDecomposer,
    CompanyExtractor,
    FieldExtractor,
    TrimMode,
};

pub use registry_types::{CompanyRecord, PersonName, PostalUnit, RawField, RawRecord};
