use crate::style::Category;
use serde::{Deserialize, Serialize};

/// Process-unique identifier of a workflow node, used as the diagram-node key.
pub type NodeId = String;

/// The complete, canonical description of a workflow control-flow graph,
/// ready for projection. This is the target structure for any custom data
/// model conversion.
///
/// The node collection is expected to be deduplicated by the caller: the
/// projection engine visits each entry exactly once, in the order given, and
/// performs no reachability or cycle analysis of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowDescription {
    pub nodes: Vec<FlowNode>,
}

/// One step of the control-flow graph. The variant set is closed; the
/// projection engine matches over it exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum FlowNode {
    Activity(ActivityNode),
    Switch(SwitchNode),
    Condition(ConditionNode),
    ForkJoin(ForkJoinNode),
    Block(BlockNode),
}

/// A single unit of work with up to three outgoing continuations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityNode {
    pub id: NodeId,
    pub name: Option<String>,
    /// Concrete type name of the activity, used as the label fallback and
    /// recorded on the diagram node as the `ActivityType` property.
    pub activity_type: String,
    pub points_to: Option<NodeId>,
    pub fault_handler: Option<NodeId>,
    pub cancellation_handler: Option<NodeId>,
}

/// A multi-way branch over a discriminant value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchNode {
    pub id: NodeId,
    pub name: Option<String>,
    /// Case order is preserved as given; it has no semantic weight but keeps
    /// the emitted document deterministic.
    pub cases: Vec<SwitchCase>,
    pub default_case: Option<NodeId>,
}

/// One case arm of a switch. An absent `value` renders as an empty edge
/// label; an absent `target` skips the edge entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchCase {
    pub value: Option<serde_json::Value>,
    pub target: Option<NodeId>,
}

/// A two-way branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub when_true: Option<NodeId>,
    pub when_false: Option<NodeId>,
}

/// A parallel fork/join point. Every fork runs concurrently with its
/// siblings and rejoins through the continuations owned by this node; the
/// three slots are deliberately not duplicated per fork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForkJoinNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub forks: Vec<ForkActivity>,
    pub points_to: Option<NodeId>,
    pub fault_handler: Option<NodeId>,
    pub cancellation_handler: Option<NodeId>,
}

/// Descriptor of one parallel branch rooted at a fork/join node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForkActivity {
    pub id: NodeId,
    pub name: String,
    pub activity_type: String,
}

/// A nested group of workflow nodes. Inner nodes are referenced by id and
/// stay members of the top-level collection, so they still receive their own
/// projection; containment edges are purely display decoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockNode {
    pub id: NodeId,
    pub name: Option<String>,
    pub inner_nodes: Vec<NodeId>,
    pub points_to: Option<NodeId>,
}

impl FlowNode {
    pub fn id(&self) -> &NodeId {
        match self {
            FlowNode::Activity(n) => &n.id,
            FlowNode::Switch(n) => &n.id,
            FlowNode::Condition(n) => &n.id,
            FlowNode::ForkJoin(n) => &n.id,
            FlowNode::Block(n) => &n.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            FlowNode::Activity(n) => n.name.as_deref(),
            FlowNode::Switch(n) => n.name.as_deref(),
            FlowNode::Condition(n) => n.name.as_deref(),
            FlowNode::ForkJoin(n) => n.name.as_deref(),
            FlowNode::Block(n) => n.name.as_deref(),
        }
    }

    /// Maps the variant to its diagram node category.
    pub fn category(&self) -> Category {
        match self {
            FlowNode::Activity(_) => Category::Activity,
            FlowNode::Switch(_) => Category::Switch,
            FlowNode::Condition(_) => Category::Condition,
            FlowNode::ForkJoin(_) => Category::Fork,
            FlowNode::Block(_) => Category::Block,
        }
    }
}
