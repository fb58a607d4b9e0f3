/// Extraction constants

/// Whitespace run length that separates columns in the fixed-width
/// address cells of the registry report table
pub const DEFAULT_COLUMN_SEPARATOR_WIDTH: usize = 36;

/// Registry host the page fetcher talks to
pub const DEFAULT_REGISTRY_BASE_URL: &str = "http://allabolag.se";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// CSS selector of the table holding one company record
pub const REPORT_TABLE_SELECTOR: &str = "table.reportTable";
