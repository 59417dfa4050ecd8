pub mod html;


pub use html::extract_disclosure_links;

/// Marker word for legal disclosure pages, matched case-insensitively
pub const DISCLOSURE_KEYWORD: &str = "impressum";

/// Whether a piece of text mentions the disclosure keyword anywhere
pub fn mentions_disclosure(text: &str) -> bool {
    text.to_lowercase().contains(DISCLOSURE_KEYWORD)
}
