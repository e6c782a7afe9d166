//! # Menu Catalog
//!
//! The fixed set of orderable items for a session.
//!
//! ## Label Resolution
//! ```text
//! display_labels() ──► ["Pasta Carbonara - Rs 1299", "Kheer - Rs 799"]
//!                                   │
//!                      customer picks one
//!                                   │
//!                                   ▼
//! find_by_display_label("Kheer - Rs 799") ──► Some(&MenuItem { Kheer, 799 })
//! find_by_display_label("Kheer")          ──► None
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;
use crate::DEFAULT_CATEGORY;

/// A menu seed record, as stored in a menu file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        MenuEntry {
            name: name.into(),
            price,
            description: String::new(),
            category: None,
            available: true,
        }
    }
}

/// Insertion-ordered menu with unique item names.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog filled through [`MenuCatalog::seed`].
    pub fn seeded(entries: &[(&str, i64)]) -> CoreResult<Self> {
        let mut catalog = Self::new();
        catalog.seed(entries)?;
        Ok(catalog)
    }

    /// Creates a catalog from full seed records (menu file, built-in menu).
    pub fn from_entries(entries: impl IntoIterator<Item = MenuEntry>) -> CoreResult<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            let category = entry
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            let mut item = MenuItem::new(
                entry.name,
                entry.description,
                Money::from_rupees(entry.price),
                category,
            )?;
            item.available = entry.available;
            catalog.add_item(item)?;
        }
        Ok(catalog)
    }

    /// Appends an item.
    ///
    /// ## Errors
    /// `CoreError::DuplicateItem` when an item with the same name exists.
    pub fn add_item(&mut self, item: MenuItem) -> CoreResult<()> {
        if self.find_by_name(&item.name).is_some() {
            return Err(CoreError::DuplicateItem { name: item.name });
        }

        tracing::trace!(name = %item.name, price = %item.price, "menu item added");
        self.items.push(item);
        Ok(())
    }

    /// Bulk-adds `(name, price)` pairs with an empty description, the
    /// default category and availability set.
    ///
    /// Stops at the first invalid or duplicate entry; entries before it stay.
    pub fn seed(&mut self, entries: &[(&str, i64)]) -> CoreResult<()> {
        for (name, price) in entries {
            let item = MenuItem::new(*name, "", Money::from_rupees(*price), DEFAULT_CATEGORY)?;
            self.add_item(item)?;
        }
        Ok(())
    }

    /// Resolves a rendered `"<name> - Rs <price>"` label back to its item.
    ///
    /// Only available items resolve, matching what [`Self::display_labels`]
    /// offers.
    pub fn find_by_display_label(&self, label: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.available)
            .find(|item| item.display_label() == label)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Labels of available items, in menu order.
    pub fn display_labels(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.available)
            .map(MenuItem::display_label)
            .collect()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
