use crate::error::StyleError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of semantic tags attached to diagram nodes and links.
///
/// The first five tags style nodes by variant, the rest style links by the
/// control-flow meaning of the edge. `Contains` is a pure nesting marker and
/// is the only tag excluded from the declared set of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Activity,
    Switch,
    Condition,
    Fork,
    Block,
    NormalFlow,
    FaultFlow,
    CancellationFlow,
    ParallelFlow,
    Contains,
    Default,
}

impl Category {
    /// The fixed set of categories declared in every document, in emission
    /// order, regardless of which node variants actually appear.
    pub const DECLARED: [Category; 10] = [
        Category::Activity,
        Category::Switch,
        Category::Condition,
        Category::Fork,
        Category::Block,
        Category::NormalFlow,
        Category::FaultFlow,
        Category::CancellationFlow,
        Category::ParallelFlow,
        Category::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Activity => "Activity",
            Category::Switch => "Switch",
            Category::Condition => "Condition",
            Category::Fork => "Fork",
            Category::Block => "Block",
            Category::NormalFlow => "NormalFlow",
            Category::FaultFlow => "FaultFlow",
            Category::CancellationFlow => "CancellationFlow",
            Category::ParallelFlow => "ParallelFlow",
            Category::Contains => "Contains",
            Category::Default => "Default",
        }
    }

    /// Built-in ARGB background color for the tag.
    pub fn default_background(self) -> &'static str {
        match self {
            Category::Activity => "#FF90EE90",
            Category::Switch => "#FFFFD700",
            Category::Condition => "#FF87CEEB",
            Category::Fork => "#FFDDA0DD",
            Category::Block => "#FFD3D3D3",
            Category::NormalFlow => "#FF32CD32",
            Category::FaultFlow => "#FFDC143C",
            Category::CancellationFlow => "#FFFF8C00",
            Category::ParallelFlow => "#FF9370DB",
            Category::Contains => "#FF808080",
            Category::Default => "#FF708090",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category style table: `category tag -> background color`.
///
/// The default palette covers every tag with its built-in color. Individual
/// colors can be overridden, or a fully custom table can be supplied; a
/// custom table that leaves any declared tag without a color is rejected at
/// construction time, never during traversal.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    backgrounds: AHashMap<Category, String>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from a complete custom table. Every tag in
    /// [`Category::DECLARED`] must be present.
    pub fn from_backgrounds(backgrounds: AHashMap<Category, String>) -> Result<Self, StyleError> {
        for tag in Category::DECLARED {
            if !backgrounds.contains_key(&tag) {
                return Err(StyleError::MissingBackground(tag));
            }
        }
        Ok(Self { backgrounds })
    }

    pub fn set_background(&mut self, category: Category, color: impl Into<String>) {
        self.backgrounds.insert(category, color.into());
    }

    pub fn background(&self, category: Category) -> &str {
        self.backgrounds
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.default_background())
    }
}
