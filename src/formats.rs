use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical book record. Every ingestion path converges on this shape; the
/// JSON field names match the `books-data.json` layout the site script reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub title: String,
    pub category: String,
    pub language: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Book {
    /// Display author: "first last", trimmed so a missing half leaves no
    /// stray space.
    pub fn author(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Everything the rendering layer needs: the ordered record list plus the
/// derived aggregates. Maps are BTree-ordered so two builds over the same
/// input produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub categories: Vec<String>,
    pub types: Vec<String>,
    pub locations: Vec<String>,
    pub category_counts: BTreeMap<String, usize>,
    pub author_counts: BTreeMap<String, usize>,
    /// Rows that matched no layout or failed the title/category gate.
    pub discarded_rows: usize,
}
