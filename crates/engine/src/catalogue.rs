//! Static, read-only registry of categories and items.
//!
//! The catalogue is constructed once at process start and never mutated, so
//! it is shared across sessions without synchronization. Category iteration
//! order is insertion order; it determines button order on every screen.

use indexmap::IndexMap;

use bonbon_core::{CategoryKey, ItemId, Price};

/// A single item that can be purchased in the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Globally unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price, always positive.
    pub price: Price,
    /// Short description shown on the item card.
    pub description: String,
}

/// An ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique category key, used in button payloads.
    pub key: CategoryKey,
    /// Display title.
    pub title: String,
    /// Items in display order.
    pub items: Vec<Item>,
}

/// Errors detected while building a [`Catalogue`].
///
/// These are construction-time bugs in the catalogue data, not runtime
/// conditions; a running shop never produces them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// Two categories share a key.
    #[error("duplicate category key: {0}")]
    DuplicateCategory(CategoryKey),
    /// Two items (possibly in different categories) share an id.
    #[error("duplicate item id: {0}")]
    DuplicateItemId(ItemId),
    /// An item carries a zero price.
    #[error("item {0} has zero price")]
    ZeroPrice(ItemId),
}

/// Immutable registry of categories and items.
#[derive(Debug, Clone)]
pub struct Catalogue {
    categories: IndexMap<CategoryKey, Category>,
}

impl Catalogue {
    /// Build a catalogue, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogueError`] if a category key repeats, an item id
    /// repeats anywhere across categories, or an item has a zero price.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogueError> {
        let mut map = IndexMap::with_capacity(categories.len());
        let mut seen_items = std::collections::HashSet::new();
        for category in categories {
            for item in &category.items {
                if item.price.is_zero() {
                    return Err(CatalogueError::ZeroPrice(item.id.clone()));
                }
                if !seen_items.insert(item.id.clone()) {
                    return Err(CatalogueError::DuplicateItemId(item.id.clone()));
                }
            }
            let key = category.key.clone();
            if map.insert(key.clone(), category).is_some() {
                return Err(CatalogueError::DuplicateCategory(key));
            }
        }
        Ok(Self { categories: map })
    }

    /// The built-in sweets assortment.
    #[must_use]
    pub fn sweet_shop() -> Self {
        let categories = vec![
            Category {
                key: key("chocolate"),
                title: "Шоколад".to_owned(),
                items: vec![
                    item(
                        "milk_chocolate",
                        "Молочный шоколад",
                        220,
                        "Классическая плитка молочного шоколада с легкой карамельной ноткой.",
                    ),
                    item(
                        "dark_truffle",
                        "Трюфель 72%",
                        280,
                        "Темный шоколад с насыщенным вкусом какао и хрустящими какао-крупками.",
                    ),
                ],
            },
            Category {
                key: key("caramel"),
                title: "Карамель".to_owned(),
                items: vec![
                    item(
                        "salted_caramel",
                        "Соленая карамель",
                        150,
                        "Нежная тянучка на сливках с легкой ноткой морской соли.",
                    ),
                    item(
                        "hazelnut_caramel",
                        "Карамель с фундуком",
                        190,
                        "Мягкая карамель, украшенная дробленым фундуком.",
                    ),
                ],
            },
            Category {
                key: key("cookies"),
                title: "Печенье".to_owned(),
                items: vec![
                    item(
                        "choco_chip_cookie",
                        "Печенье с шоколадной крошкой",
                        120,
                        "Домашнее печенье из сливочного теста, щедро посыпанное шоколадом.",
                    ),
                    item(
                        "red_velvet_cookie",
                        "Печенье «Красный бархат»",
                        130,
                        "Мягкое печенье с нежным кремовым послевкусием.",
                    ),
                ],
            },
        ];
        Self::new(categories).expect("built-in catalogue is valid")
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Look up a category by key.
    ///
    /// Returns `None` for an unknown key, which callers must distinguish from
    /// a known-but-empty category themselves.
    #[must_use]
    pub fn category(&self, key: &CategoryKey) -> Option<&Category> {
        self.categories.get(key)
    }

    /// Look up an item by id across all categories.
    #[must_use]
    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.categories
            .values()
            .flat_map(|category| category.items.iter())
            .find(|item| &item.id == id)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalogue has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::sweet_shop()
    }
}

fn key(s: &str) -> CategoryKey {
    CategoryKey::parse(s).expect("static category key is valid")
}

fn item(id: &str, name: &str, price: u64, description: &str) -> Item {
    Item {
        id: ItemId::parse(id).expect("static item id is valid"),
        name: name.to_owned(),
        price: Price::rub(price),
        description: description.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sweet_shop_category_order() {
        let catalogue = Catalogue::sweet_shop();
        let keys: Vec<&str> = catalogue
            .categories()
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(keys, ["chocolate", "caramel", "cookies"]);
    }

    #[test]
    fn test_item_order_within_category() {
        let catalogue = Catalogue::sweet_shop();
        let chocolate = catalogue
            .category(&CategoryKey::parse("chocolate").unwrap())
            .unwrap();
        let ids: Vec<&str> = chocolate.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["milk_chocolate", "dark_truffle"]);
    }

    #[test]
    fn test_find_item_scans_all_categories() {
        let catalogue = Catalogue::sweet_shop();
        let cookie = catalogue
            .find_item(&ItemId::parse("red_velvet_cookie").unwrap())
            .unwrap();
        assert_eq!(cookie.price, Price::rub(130));
        assert!(
            catalogue
                .find_item(&ItemId::parse("nonexistent").unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_unknown_category_is_none() {
        let catalogue = Catalogue::sweet_shop();
        assert!(
            catalogue
                .category(&CategoryKey::parse("ice-cream").unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_duplicate_item_id_rejected() {
        let duplicate = vec![
            Category {
                key: key("a"),
                title: "A".to_owned(),
                items: vec![item("twin", "Twin", 100, "")],
            },
            Category {
                key: key("b"),
                title: "B".to_owned(),
                items: vec![item("twin", "Twin again", 200, "")],
            },
        ];
        assert_eq!(
            Catalogue::new(duplicate).unwrap_err(),
            CatalogueError::DuplicateItemId(ItemId::parse("twin").unwrap())
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let duplicate = vec![
            Category {
                key: key("a"),
                title: "A".to_owned(),
                items: vec![],
            },
            Category {
                key: key("a"),
                title: "A again".to_owned(),
                items: vec![],
            },
        ];
        assert!(matches!(
            Catalogue::new(duplicate),
            Err(CatalogueError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn test_zero_price_rejected() {
        let free = vec![Category {
            key: key("freebies"),
            title: "Freebies".to_owned(),
            items: vec![item("gift", "Gift", 0, "")],
        }];
        assert_eq!(
            Catalogue::new(free).unwrap_err(),
            CatalogueError::ZeroPrice(ItemId::parse("gift").unwrap())
        );
    }

    #[test]
    fn test_item_ids_globally_unique_in_sweet_shop() {
        let catalogue = Catalogue::sweet_shop();
        let mut seen = std::collections::HashSet::new();
        for category in catalogue.categories() {
            for item in &category.items {
                assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
            }
        }
    }
}
