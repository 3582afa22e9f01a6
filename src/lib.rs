//! # Keizu - Workflow Flow-Graph Projection Engine
//!
//! **Keizu** renders an in-memory workflow-graph description as a DGML
//! diagram document consumable by graph-visualization tooling. The workflow
//! model is a control-flow program built from a closed set of node variants
//! (activity, conditional branch, multi-way switch, parallel fork/join,
//! nested block); the projection engine converts each node and its declared
//! continuations into diagram nodes, links, and style categories while
//! preserving the control-flow semantics of every edge.
//!
//! The projection is one-way and side-effect-free: keizu never executes,
//! validates, or mutates the workflow it renders.
//!
//! ## Core Workflow
//!
//! 1.  **Describe Your Flow**: Build a [`FlowDescription`](flow::FlowDescription)
//!     directly, or implement [`IntoFlowDescription`](flow::IntoFlowDescription)
//!     on your own workflow structs to translate a custom format.
//! 2.  **Project**: Create a [`GraphProjector`](projector::GraphProjector)
//!     (optionally overriding category colors through its builder) and call
//!     `project` to obtain a [`DiagramDocument`](dgml::DiagramDocument).
//! 3.  **Render**: Serialize the document as DGML XML with
//!     [`DiagramDocument::to_dgml`](dgml::DiagramDocument::to_dgml), or as
//!     JSON through serde.
//!
//! ## Quick Start
//!
//! ```rust
//! use keizu::prelude::*;
//!
//! fn main() {
//!     let flow = FlowDescription {
//!         nodes: vec![
//!             FlowNode::Activity(ActivityNode {
//!                 id: "fetch".to_string(),
//!                 name: Some("Fetch order".to_string()),
//!                 activity_type: "HttpActivity".to_string(),
//!                 points_to: Some("check".to_string()),
//!                 fault_handler: Some("report".to_string()),
//!                 cancellation_handler: None,
//!             }),
//!             FlowNode::Condition(ConditionNode {
//!                 id: "check".to_string(),
//!                 name: Some("In stock?".to_string()),
//!                 when_true: Some("report".to_string()),
//!                 when_false: None,
//!             }),
//!             FlowNode::Activity(ActivityNode {
//!                 id: "report".to_string(),
//!                 name: None,
//!                 activity_type: "ReportActivity".to_string(),
//!                 points_to: None,
//!                 fault_handler: None,
//!                 cancellation_handler: None,
//!             }),
//!         ],
//!     };
//!
//!     let projector = GraphProjector::new();
//!     let document = projector.project(&flow);
//!
//!     println!("{}", document.to_dgml());
//! }
//! ```

pub mod dgml;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod projector;
pub mod style;
