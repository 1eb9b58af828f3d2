use anyhow::{bail, Result};
use log::debug;

/// A named list of items with validated insertion.
#[derive(Debug)]
pub struct Inventory {
    name: String,
    items: Vec<String>,
}

impl Inventory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Appends an item to the list.
    ///
    /// Empty items are rejected; the list never holds an empty string.
    pub fn add_item(&mut self, item: &str) -> Result<()> {
        if item.is_empty() {
            bail!("item cannot be empty");
        }
        debug!("Added item: {}", item);
        self.items.push(item.to_string());
        Ok(())
    }

    /// Formats the inventory name together with the item count.
    pub fn get_info(&self) -> String {
        format!("Name: {}, Items: {}", self.name, self.items.len())
    }

    /// Returns the items satisfying `filter`, in insertion order.
    pub fn filtered_items(&self, filter: impl Fn(&str) -> bool) -> Vec<&str> {
        self.items
            .iter()
            .map(String::as_str)
            .filter(|item| filter(item))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
