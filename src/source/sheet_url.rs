//! Spreadsheet share link handling
//! Translates Google Sheets share links into their CSV export form.

use crate::source::SourceError;
use regex::Regex;

/// Builds the CSV export URL for a spreadsheet share link.
///
/// The document identifier is the path segment after `/d/`; everything
/// after it (view suffixes, fragments, query strings) is ignored. Links
/// without an identifier are rejected without touching the network.
pub fn to_export_url(url: &str) -> Result<String, SourceError> {
    let regex = Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("Hardcode regex pattern");
    let id = regex
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|matcher| matcher.as_str())
        .ok_or_else(|| SourceError::InvalidSheetUrlError(url.to_owned()))?;
    Ok(format!("https://docs.google.com/spreadsheets/d/{id}/export?format=csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_export_url() {
        assert_eq!(
            to_export_url("https://docs.google.com/spreadsheets/d/ABC123/edit#gid=0").unwrap(),
            "https://docs.google.com/spreadsheets/d/ABC123/export?format=csv"
        );
        assert_eq!(
            to_export_url("https://docs.google.com/spreadsheets/d/a-b_c9/view").unwrap(),
            "https://docs.google.com/spreadsheets/d/a-b_c9/export?format=csv"
        );
    }

    #[test]
    fn test_to_export_url_is_idempotent() {
        let exported = to_export_url("https://docs.google.com/spreadsheets/d/ABC123/edit").unwrap();
        assert_eq!(to_export_url(&exported).unwrap(), exported);
    }

    #[test]
    fn test_to_export_url_rejects_links_without_identifier() {
        assert!(to_export_url("https://docs.google.com/spreadsheets/").is_err());
        assert!(to_export_url("https://example.com/data.csv").is_err());
        assert!(to_export_url("not a url").is_err());
    }
}
