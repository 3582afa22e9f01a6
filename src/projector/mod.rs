use crate::dgml::DiagramDocument;
use crate::flow::FlowDescription;
use crate::style::{Category, Palette};

mod visit;

/// The graph projection engine: converts a workflow flow description into a
/// diagram document, one node variant at a time.
///
/// Projection is a pure function of the flow description and the palette:
/// the same input collection yields a structurally identical document on
/// every call, and a failed caller can simply re-invoke. The projector never
/// executes, validates, or mutates the workflow.
#[derive(Debug, Clone, Default)]
pub struct GraphProjector {
    palette: Palette,
}

/// Builder for a `GraphProjector`, used to override category styling.
#[derive(Debug, Clone, Default)]
pub struct GraphProjectorBuilder {
    palette: Palette,
}

impl GraphProjectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole style table.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Overrides the background color of a single category tag.
    pub fn with_background(mut self, category: Category, color: impl Into<String>) -> Self {
        self.palette.set_background(category, color);
        self
    }

    pub fn build(self) -> GraphProjector {
        GraphProjector {
            palette: self.palette,
        }
    }
}

impl GraphProjector {
    /// Creates a projector with the built-in palette.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> GraphProjectorBuilder {
        GraphProjectorBuilder::new()
    }

    /// Projects the flow description into a fresh diagram document.
    ///
    /// The document is pre-seeded with every declared category, then each
    /// node of the collection is visited exactly once, in the order given.
    /// Continuations without a target produce no link.
    pub fn project(&self, flow: &FlowDescription) -> DiagramDocument {
        let mut document = DiagramDocument::new();

        for tag in Category::DECLARED {
            document.declare_category(tag, self.palette.background(tag));
        }

        for node in &flow.nodes {
            visit::visit(node, &mut document);
        }

        document
    }
}
