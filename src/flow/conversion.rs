use super::definition::FlowDescription;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a keizu
/// `FlowDescription`.
///
/// This is the primary extension point for making keizu format-agnostic. By
/// implementing this trait on your own workflow structs, you provide a
/// translation layer that allows the projection engine to render your custom
/// workflow format.
///
/// # Example
///
/// ```rust,no_run
/// use keizu::error::FlowConversionError;
/// use keizu::flow::{ActivityNode, FlowDescription, FlowNode, IntoFlowDescription};
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, next: Option<String> }
/// struct MyWorkflow { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoFlowDescription` for your top-level struct.
/// impl IntoFlowDescription for MyWorkflow {
///     fn into_flow(self) -> Result<FlowDescription, FlowConversionError> {
///         let mut nodes = Vec::new();
///         for step in self.steps {
///             nodes.push(FlowNode::Activity(ActivityNode {
///                 id: step.id,
///                 name: None,
///                 activity_type: "MyStep".to_string(),
///                 points_to: step.next,
///                 fault_handler: None,
///                 cancellation_handler: None,
///             }));
///         }
///         Ok(FlowDescription { nodes })
///     }
/// }
/// ```
pub trait IntoFlowDescription {
    /// Consumes the object and converts it into a projectable flow description.
    fn into_flow(self) -> Result<FlowDescription, FlowConversionError>;
}
