//! Locates the registry report table in a fetched page and captures its
//! regions as raw text blobs.
//!
//! Layout of `table.reportTable` (rows and cells are 1-based):
//!
//! | field                   | location                         |
//! |-------------------------|----------------------------------|
//! | `name`                  | row 2, cell 2                    |
//! | `registered_owner`      | row 7, nested row 1, cell 1      |
//! | `phone`                 | row 7, nested row 7, cell 1      |
//! | `visit_address`         | row 8, cell 2                    |
//! | `mail_address`          | row 8, cell 3                    |
//! | `street_address`        | row 7, nested row 10             |
//! | `postal_address`        | row 7, nested row 11             |
//! | `postal_service_region` | row 7, nested row 12             |
//!
//! Rows are the table's own rows. Nested rows are every `tr` inside that
//! row in document order. Blob text is the concatenated text of the element,
//! whitespace untouched, since column breaks live in that whitespace.

use crate::constants::REPORT_TABLE_SELECTOR;
use once_cell::sync::Lazy;
use registry_types::{RawField, RawRecord};
use scraper::{ElementRef, Html, Selector};

static REPORT_TABLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(REPORT_TABLE_SELECTOR).expect("Failed to parse report table selector")
});

static ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to parse row selector"));

/// Where a field lives inside the report table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Cell { row: usize, cell: usize },
    NestedCell { row: usize, nested_row: usize, cell: usize },
    NestedRow { row: usize, nested_row: usize },
}

fn region(field: RawField) -> Region {
    match field {
        RawField::Name => Region::Cell { row: 2, cell: 2 },
        RawField::RegisteredOwner => Region::NestedCell { row: 7, nested_row: 1, cell: 1 },
        RawField::Phone => Region::NestedCell { row: 7, nested_row: 7, cell: 1 },
        RawField::VisitAddress => Region::Cell { row: 8, cell: 2 },
        RawField::MailAddress => Region::Cell { row: 8, cell: 3 },
        RawField::StreetAddress => Region::NestedRow { row: 7, nested_row: 10 },
        RawField::PostalAddress => Region::NestedRow { row: 7, nested_row: 11 },
        RawField::PostalServiceRegion => Region::NestedRow { row: 7, nested_row: 12 },
    }
}

/// Parse a registry page and capture every region that exists.
///
/// A page without a report table gives an empty record.
pub fn locate_report_table(html: &str) -> RawRecord {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&REPORT_TABLE).next() else {
        log::warn!("No report table found on registry page");
        return RawRecord::new();
    };

    let rows = direct_rows(table);
    RawField::ALL
        .into_iter()
        .filter_map(|field| {
            let blob = capture(&rows, region(field));
            if blob.is_none() {
                log::debug!("Report table has no {} region", field);
            }
            blob.map(|blob| (field, blob))
        })
        .collect()
}

fn capture(rows: &[ElementRef<'_>], region: Region) -> Option<String> {
    let element = match region {
        Region::Cell { row, cell } => nth(rows, row).and_then(|row| nth_cell(row, cell)),
        Region::NestedCell { row, nested_row, cell } => nth(rows, row)
            .and_then(|row| nth_nested_row(row, nested_row))
            .and_then(|row| nth_cell(row, cell)),
        Region::NestedRow { row, nested_row } => {
            nth(rows, row).and_then(|row| nth_nested_row(row, nested_row))
        }
    }?;

    Some(element.text().collect())
}

/// Rows belonging to the table itself, looking through row groups
fn direct_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|e| e.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

fn nth<'a>(elements: &[ElementRef<'a>], position: usize) -> Option<ElementRef<'a>> {
    position.checked_sub(1).and_then(|i| elements.get(i)).copied()
}

fn nth_cell(row: ElementRef<'_>, position: usize) -> Option<ElementRef<'_>> {
    let cells: Vec<_> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
        .collect();
    nth(&cells, position)
}

fn nth_nested_row(row: ElementRef<'_>, position: usize) -> Option<ElementRef<'_>> {
    let nested: Vec<_> = row.select(&ROW).filter(|e| e.id() != row.id()).collect();
    nth(&nested, position)
}
