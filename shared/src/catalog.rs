use std::collections::HashSet;
use std::num::NonZeroUsize;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_SIPS, SIPS_RATING_DIVISOR};

/// A single entry on the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub rating: f64,
    pub image: String,
}

impl Item {
    pub fn new(id: u32, name: &str, description: &str, rating: f64, image: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            rating,
            image: image.to_string(),
        }
    }

    pub fn sips(&self) -> u32 {
        calculate_sips(self.rating)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one item")]
    Empty,
    #[error("duplicate item id {0}")]
    DuplicateId(u32),
    #[error("item {id} has a non-finite rating")]
    InvalidRating { id: u32 },
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, non-empty list of wheel items with unique ids.
///
/// Index `i` in the catalog is segment `i` on the wheel, so the order is
/// part of the contract and never changes after construction.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if !item.rating.is_finite() {
                return Err(CatalogError::InvalidRating { id: item.id });
            }
        }

        Ok(Self { items })
    }

    /// Parses a JSON array of items and validates it.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn segment_count(&self) -> NonZeroUsize {
        // Construction rejects empty catalogs.
        NonZeroUsize::new(self.items.len()).unwrap_or(NonZeroUsize::MIN)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

pub static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    items: vec![
        Item::new(
            1,
            "Corset Combat Chaos",
            "A bizarre fusion of Victorian corsetry and modern boots",
            8.7,
            "/shoes/corset-boot.jpg",
        ),
        Item::new(
            2,
            "Curved Catastrophe",
            "When your shoes decide to take a wrong turn",
            7.9,
            "/shoes/curved-shoe.jpg",
        ),
        Item::new(
            3,
            "Brooklyn Boot Blunder",
            "Balenciaga's interpretation of confusion",
            9.2,
            "/shoes/brooklyn-boot.jpg",
        ),
        Item::new(
            4,
            "Pointy Pilgrim Disaster",
            "When elf shoes meet corporate disappointment",
            8.5,
            "/shoes/pointy-shoe.jpg",
        ),
        Item::new(
            5,
            "Pants-Shoe Paradox",
            "When pants and shoes have an identity crisis",
            9.8,
            "/shoes/pants-shoes.jpg",
        ),
    ],
});

/// Sips to drink for a rating: one per started block of 4, capped at 3.
/// Ratings at or below zero (and NaN) give no sips.
pub fn calculate_sips(rating: f64) -> u32 {
    let sips = (rating / SIPS_RATING_DIVISOR).ceil();
    if sips.is_nan() || sips <= 0.0 {
        return 0;
    }
    (sips as u32).min(MAX_SIPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sips_boundaries() {
        assert_eq!(calculate_sips(4.0), 1);
        assert_eq!(calculate_sips(4.1), 2);
        assert_eq!(calculate_sips(8.0), 2);
        assert_eq!(calculate_sips(8.1), 3);
        assert_eq!(calculate_sips(12.0), 3);
        assert_eq!(calculate_sips(100.0), 3);
    }

    #[test]
    fn test_sips_non_positive_rating() {
        assert_eq!(calculate_sips(0.0), 0);
        assert_eq!(calculate_sips(-5.0), 0);
        assert_eq!(calculate_sips(f64::NAN), 0);
        assert_eq!(calculate_sips(0.5), 1);
    }

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.segment_count().get(), 5);
        let ids: Vec<u32> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.get(2).map(|item| item.name.as_str()), Some("Brooklyn Boot Blunder"));
        // Every default shoe is ugly enough for the full three sips except Curved Catastrophe.
        assert_eq!(catalog.get(1).map(Item::sips), Some(2));
        assert_eq!(catalog.get(4).map(Item::sips), Some(3));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let items = vec![
            Item::new(7, "A", "a", 1.0, "/a.jpg"),
            Item::new(7, "B", "b", 2.0, "/b.jpg"),
        ];
        assert!(matches!(Catalog::new(items), Err(CatalogError::DuplicateId(7))));
    }

    #[test]
    fn test_rejects_infinite_rating() {
        let items = vec![Item::new(1, "A", "a", f64::INFINITY, "/a.jpg")];
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::InvalidRating { id: 1 })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "name": "Crocs", "description": "Foam", "rating": 6.5, "image": "/shoes/crocs.jpg"},
            {"id": 11, "name": "Toe Shoes", "description": "Fingers for feet", "rating": 11.0, "image": "/shoes/toes.jpg"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.segment_count().get(), 2);
        assert_eq!(catalog.get(0).map(|item| item.id), Some(10));
        assert_eq!(catalog.get(1).map(Item::sips), Some(3));

        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
