use serde::Serialize;

mod text;

pub use text::{company_key, is_normalized, looks_japanese, normalize_text};

/// Header row shared by every emitted file.
pub const HEADER: [&str; 2] = ["Name", "Address"];

/// One company row: a display label and the query handed to the geocoder.
///
/// `address_query` is a search string, not a postal address. It is whatever
/// resolves best in the mapping tool's search box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Address")]
    pub address_query: &'a str,
}

impl<'a> Record<'a> {
    pub const fn new(name: &'a str, address_query: &'a str) -> Self {
        Record {
            name,
            address_query,
        }
    }

    pub fn key(&self) -> String {
        company_key(self.name)
    }
}
