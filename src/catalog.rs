//! The catalog of artifact cards shown on the canvas.
//!
//! The built-in catalog ships as a JSON document embedded in the binary. Any
//! catalog, built-in or supplied by a caller, is validated on load: ids must be
//! unique and accent colours must be `#rrggbb`.

use crate::types::*;
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Reasons a catalog cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not a JSON array of work items
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Two entries share an id
    #[error("duplicate work id {0}")]
    DuplicateId(WorkId),
    /// An accent colour is not of the form `#rrggbb`
    #[error("work {id} has invalid colour {color:?}")]
    InvalidColor {
        /// Offending entry
        id: WorkId,
        /// The rejected colour string
        color: String,
    },
}

/// Ordered, read-only list of work items with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    works: Vec<WorkItem>,
}

impl Catalog {
    /// Builds a catalog from items, checking ids and colours.
    pub fn new(works: Vec<WorkItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(works.len());
        for work in &works {
            if !seen.insert(work.id) {
                return Err(CatalogError::DuplicateId(work.id));
            }
            if parse_hex_color(&work.color).is_none() {
                return Err(CatalogError::InvalidColor {
                    id: work.id,
                    color: work.color.clone(),
                });
            }
        }
        Ok(Self { works })
    }

    /// Parses a catalog from a JSON array of work items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let works: Vec<WorkItem> = serde_json::from_str(json)?;
        Self::new(works)
    }

    /// The catalog bundled with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Items in display order.
    pub fn works(&self) -> &[WorkItem] {
        &self.works
    }

    /// Item at `index` in display order.
    pub fn get(&self, index: usize) -> Option<&WorkItem> {
        self.works.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.works.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}

/// Parses `#rrggbb` into its channels.
pub fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_twenty_four_unique_items() {
        let catalog = Catalog::builtin().expect("bundled catalog must be valid");
        assert_eq!(catalog.len(), 24);
        let ids: HashSet<_> = catalog.works().iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), 24);
        assert_eq!(catalog.get(0).map(|w| w.id), Some(1));
        assert!(catalog.works().iter().all(|w| w.image.is_some()));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r##"[
            {"id": 1, "title": "a", "category": "c", "description": "d", "color": "#000000"},
            {"id": 1, "title": "b", "category": "c", "description": "d", "color": "#ffffff"}
        ]"##;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(1))
        ));
    }

    #[test]
    fn bad_colours_are_rejected() {
        let json = r#"[{"id": 3, "title": "a", "category": "c", "description": "d", "color": "bg-red-100"}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "work 3 has invalid colour \"bg-red-100\"");
    }

    #[test]
    fn missing_image_is_allowed() {
        let json = r##"[{"id": 9, "title": "a", "category": "c", "description": "d", "color": "#abcdef"}]"##;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.works()[0].image, None);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn hex_colours_parse() {
        assert_eq!(parse_hex_color("#fee2e2"), Some([0xfe, 0xe2, 0xe2]));
        assert_eq!(parse_hex_color("fee2e2"), None);
        assert_eq!(parse_hex_color("#fee2e"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
