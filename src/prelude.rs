//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! keizu crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keizu::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let flow: FlowDescription = serde_json::from_str(&json)?;
//!
//! let document = GraphProjector::new().project(&flow);
//! std::fs::write("flow.dgml", document.to_dgml())?;
//! # Ok(())
//! # }
//! ```

// Projection engine
pub use crate::projector::{GraphProjector, GraphProjectorBuilder};

// Workflow description types
pub use crate::flow::{
    ActivityNode, BlockNode, ConditionNode, FlowDescription, FlowNode, ForkActivity,
    ForkJoinNode, IntoFlowDescription, NodeId, SwitchCase, SwitchNode,
};

// Diagram document types
pub use crate::dgml::{CategoryDeclaration, DiagramDocument, DiagramLink, DiagramNode};

// Styling
pub use crate::style::{Category, Palette};

// Error types
pub use crate::error::{FlowConversionError, StyleError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
