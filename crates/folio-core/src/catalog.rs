//! Gallery catalog: load-time constant list of projects, sorted by id.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::constants::ALL_FILTER;

pub type ItemId = u32;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(alias = "thumbnailRef")]
    pub thumbnail: String,
    #[serde(alias = "fullImageRef")]
    pub image: String,
    #[serde(default, alias = "viewLive")]
    pub live_demo_url: Option<String>,
    #[serde(default, alias = "technologyTags", deserialize_with = "tags")]
    pub technologies: Vec<String>,
}

/// Accepts `["HTML", "CSS"]` as well as the older `"HTML, CSS"` form.
fn tags<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
    }
    Ok(match Tags::deserialize(de)? {
        Tags::List(v) => v
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Tags::Joined(s) => split_tags(&s),
    })
}

pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    pub fn new(mut items: Vec<GalleryItem>) -> Result<Self, CatalogError> {
        items.sort_by_key(|i| i.id);
        if let Some(w) = items.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(CatalogError::DuplicateId(w[0].id));
        }
        Ok(Self { items })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<GalleryItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.binary_search_by_key(&id, |i| i.id).ok()
    }

    pub fn by_id(&self, id: ItemId) -> Option<&GalleryItem> {
        self.index_of(id).map(|i| &self.items[i])
    }

    /// Catalog indices matching `category` ("all" matches everything), in
    /// catalog order.
    pub fn filter(&self, category: &str) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| category == ALL_FILTER || item.category == category)
            .map(|(i, _)| i)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.category.as_str()) {
                out.push(&item.category);
            }
        }
        out
    }

    /// Circular neighbour over the full catalog.
    pub fn next_index(&self, index: usize) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        (index + 1) % self.items.len()
    }

    pub fn prev_index(&self, index: usize) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        if index == 0 {
            self.items.len() - 1
        } else {
            index - 1
        }
    }
}
