use crate::error::{Error, Result};
use crate::model::{sample_listing, Listing};
use std::fs;
use std::path::Path;

/// Read the listing catalog: a JSON array of listing documents.
///
/// Documents that do not parse are logged and skipped.
pub fn read_catalog(path: &Path) -> Result<Vec<Listing>> {
    if !path.exists() {
        return Err(Error::CatalogNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    let documents: Vec<serde_json::Value> = serde_json::from_str(&contents)?;
    let total = documents.len();
    let listings: Vec<Listing> = documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match serde_json::from_value(document) {
            Ok(listing) => Some(listing),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping listing");
                None
            }
        })
        .collect();
    if listings.len() < total {
        tracing::warn!(kept = listings.len(), total, "catalog partially loaded");
    }
    Ok(listings)
}

/// Like `read_catalog`, but a missing file yields the built-in sample.
pub fn load_catalog(path: &Path) -> Result<Vec<Listing>> {
    match read_catalog(path) {
        Err(Error::CatalogNotFound(_)) => {
            tracing::info!(path = %path.display(), "no catalog file, using sample listing");
            Ok(vec![sample_listing()])
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalog_falls_back_to_sample() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("listings.json");
        assert!(matches!(read_catalog(&path), Err(Error::CatalogNotFound(_))));

        let listings = load_catalog(&path).expect("sample");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].key(), "dummy-1");
    }

    #[test]
    fn test_reads_listing_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("listings.json");
        fs::write(
            &path,
            r#"[{"_id": "a", "title": "Loft", "status": "sold"},
                {"_id": "b", "title": "Cottage", "image": "images/cottage.jpg"}]"#,
        )
        .expect("write");

        let listings = load_catalog(&path).expect("catalog");
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].gallery(), vec!["images/cottage.jpg".to_string()]);
    }

    #[test]
    fn test_bad_documents_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("listings.json");
        fs::write(
            &path,
            r#"[{"_id": "a", "price": 899000},
                {"_id": "b", "price": 1250000.5, "totalBedrooms": 3},
                {"_id": "c", "price": "899000"},
                {"_id": "d", "images": "not-a-list"},
                "stray"]"#,
        )
        .expect("write");

        let listings = load_catalog(&path).expect("catalog");
        let keys: Vec<&str> = listings.iter().map(Listing::key).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(listings[1].bedrooms(), Some(3.0));
        assert_eq!(listings[2].formatted_price(), "899,000");
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("listings.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(matches!(load_catalog(&path), Err(Error::Json(_))));
    }
}
