//! Console rendering of extracted company records

use registry_types::{CompanyRecord, PostalUnit};
use std::fmt::Write;

const RULE: &str = "=========================================";

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn write_address(out: &mut String, title: &str, unit: &PostalUnit) {
    let _ = writeln!(out, "\n{}:", title);
    let _ = writeln!(out, "  Street: {}", or_dash(&unit.street));
    let _ = writeln!(out, "  Postal Code: {}", or_dash(&unit.postal_code));
    let _ = writeln!(out, "  City: {}", or_dash(&unit.city));
    let _ = writeln!(out, "  Service Region: {}", or_dash(&unit.service_region));
}

/// Block layout report, absent values shown as "-"
pub fn render_text(company: &CompanyRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n=== COMPANY INFO ========================");
    let _ = writeln!(out, "\nOrg.nr:\n  {}", company.orgnr);
    let _ = writeln!(out, "\nName:\n  {}", or_dash(&company.name));
    let _ = writeln!(out, "\nPhone:\n  {}", or_dash(&company.phone));
    let _ = writeln!(out, "\nRegistered Owner:");
    let _ = writeln!(out, "  First Name: {}", or_dash(&company.owner.first_name));
    let _ = writeln!(out, "  Last Name: {}", or_dash(&company.owner.last_name));
    write_address(&mut out, "Mail address", &company.mail_address);
    write_address(&mut out, "Visit address", &company.visit_address);
    let _ = writeln!(out, "\n{}", RULE);

    out
}

pub fn render_json(company: &CompanyRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(company)
}
