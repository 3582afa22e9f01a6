use crate::flow::NodeId;
use crate::style::Category;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub mod writer;

pub use writer::{DGML_NAMESPACE, write_dgml};

/// The diagram output document: three ordered, append-only collections.
///
/// A document is created fresh per projection run, populated strictly by
/// appends during traversal, and handed back by value; it is never reused or
/// updated incrementally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagramDocument {
    #[serde(rename = "Nodes")]
    pub nodes: Vec<DiagramNode>,
    #[serde(rename = "Links")]
    pub links: Vec<DiagramLink>,
    #[serde(rename = "Categories")]
    pub categories: Vec<CategoryDeclaration>,
}

/// A single diagram node. Extra key/value properties carry variant-specific
/// metadata (for example an activity's concrete type name) without widening
/// the schema; their order is preserved as appended.
#[derive(Debug, Clone)]
pub struct DiagramNode {
    pub id: NodeId,
    pub label: String,
    pub category: Option<Category>,
    pub properties: Vec<(String, String)>,
}

/// A directed edge between two diagram nodes.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramLink {
    #[serde(rename = "Source")]
    pub source: NodeId,
    #[serde(rename = "Target")]
    pub target: NodeId,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "Label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Declares the background color of one category tag.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDeclaration {
    #[serde(rename = "Id")]
    pub id: Category,
    #[serde(rename = "Background")]
    pub background: String,
}

impl DiagramDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node record. An absent label defaults to the empty string.
    /// No deduplication is performed; callers must not add the same id twice.
    pub fn add_node(
        &mut self,
        id: &NodeId,
        label: Option<&str>,
        category: Option<Category>,
        properties: Vec<(String, String)>,
    ) {
        self.nodes.push(DiagramNode {
            id: id.clone(),
            label: label.unwrap_or("").to_string(),
            category,
            properties,
        });
    }

    /// Appends a link record, or does nothing if either endpoint is absent.
    /// An absent endpoint models an unconfigured continuation, not an error.
    /// Duplicate links between the same pair are legal and preserved.
    pub fn add_link(
        &mut self,
        source: Option<&NodeId>,
        target: Option<&NodeId>,
        category: Option<Category>,
        label: Option<&str>,
    ) {
        let (Some(source), Some(target)) = (source, target) else {
            return;
        };
        self.links.push(DiagramLink {
            source: source.clone(),
            target: target.clone(),
            category,
            label: label.map(str::to_string),
        });
    }

    /// Appends a category declaration record.
    pub fn declare_category(&mut self, category: Category, background: impl Into<String>) {
        self.categories.push(CategoryDeclaration {
            id: category,
            background: background.into(),
        });
    }

    /// Renders the document as DGML XML text.
    pub fn to_dgml(&self) -> String {
        writer::write_dgml(self)
    }
}

impl DiagramNode {
    /// Looks up an extra property by name.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

// Manual impl so extra properties flatten onto the node object with their
// insertion order intact, matching the DGML attribute layout.
impl Serialize for DiagramNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + self.properties.len() + usize::from(self.category.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("Id", &self.id)?;
        map.serialize_entry("Label", &self.label)?;
        for (key, value) in &self.properties {
            map.serialize_entry(key, value)?;
        }
        if let Some(category) = self.category {
            map.serialize_entry("Category", category.as_str())?;
        }
        map.end()
    }
}
