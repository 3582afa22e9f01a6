//! Per-variant projection rules.
//!
//! Each workflow node translates into zero-or-more node records and
//! zero-or-more link records. The dispatch is an exhaustive match over the
//! closed variant set, so an unhandled variant cannot reach emission.

use crate::dgml::DiagramDocument;
use crate::flow::{
    ActivityNode, BlockNode, ConditionNode, FlowNode, ForkJoinNode, SwitchNode,
};
use crate::style::Category;

pub(super) fn visit(node: &FlowNode, document: &mut DiagramDocument) {
    match node {
        FlowNode::Activity(activity) => visit_activity(activity, document),
        FlowNode::Switch(switch) => visit_switch(switch, document),
        FlowNode::Condition(condition) => visit_condition(condition, document),
        FlowNode::ForkJoin(fork_join) => visit_fork_join(fork_join, document),
        FlowNode::Block(block) => visit_block(block, document),
    }
}

/// One node labeled with the explicit name or the activity's type name, and
/// up to three outgoing links, one per configured continuation.
fn visit_activity(activity: &ActivityNode, document: &mut DiagramDocument) {
    document.add_node(
        &activity.id,
        Some(activity.name.as_deref().unwrap_or(&activity.activity_type)),
        Some(Category::Activity),
        vec![("ActivityType".to_string(), activity.activity_type.clone())],
    );

    document.add_link(
        Some(&activity.id),
        activity.points_to.as_ref(),
        Some(Category::NormalFlow),
        None,
    );
    document.add_link(
        Some(&activity.id),
        activity.fault_handler.as_ref(),
        Some(Category::FaultFlow),
        None,
    );
    document.add_link(
        Some(&activity.id),
        activity.cancellation_handler.as_ref(),
        Some(Category::CancellationFlow),
        None,
    );
}

/// One node, an unlabeled default-case link, and one labeled link per case.
/// Two cases may legally point at the same target.
fn visit_switch(switch: &SwitchNode, document: &mut DiagramDocument) {
    document.add_node(&switch.id, switch.name.as_deref(), Some(Category::Switch), vec![]);

    document.add_link(
        Some(&switch.id),
        switch.default_case.as_ref(),
        Some(Category::Default),
        None,
    );

    for case in &switch.cases {
        let label = render_discriminant(case.value.as_ref());
        document.add_link(
            Some(&switch.id),
            case.target.as_ref(),
            Some(Category::NormalFlow),
            Some(label.as_str()),
        );
    }
}

/// One node and two normal-flow links labeled "False" and "True".
fn visit_condition(condition: &ConditionNode, document: &mut DiagramDocument) {
    document.add_node(
        &condition.id,
        condition.name.as_deref(),
        Some(Category::Condition),
        vec![],
    );

    document.add_link(
        Some(&condition.id),
        condition.when_false.as_ref(),
        Some(Category::NormalFlow),
        Some("False"),
    );
    document.add_link(
        Some(&condition.id),
        condition.when_true.as_ref(),
        Some(Category::NormalFlow),
        Some("True"),
    );
}

/// One node for the join point, plus per fork: a synthetic fork node, a
/// parallel link join->fork, and up to three rejoin links from the fork to
/// the continuations owned by the join node.
fn visit_fork_join(fork_join: &ForkJoinNode, document: &mut DiagramDocument) {
    document.add_node(
        &fork_join.id,
        fork_join.name.as_deref(),
        Some(Category::Fork),
        vec![],
    );

    for fork in &fork_join.forks {
        document.add_node(
            &fork.id,
            Some(&fork.name),
            Some(Category::Fork),
            vec![("ActivityType".to_string(), fork.activity_type.clone())],
        );

        document.add_link(
            Some(&fork_join.id),
            Some(&fork.id),
            Some(Category::ParallelFlow),
            None,
        );

        document.add_link(
            Some(&fork.id),
            fork_join.points_to.as_ref(),
            Some(Category::NormalFlow),
            None,
        );
        document.add_link(
            Some(&fork.id),
            fork_join.fault_handler.as_ref(),
            Some(Category::FaultFlow),
            None,
        );
        document.add_link(
            Some(&fork.id),
            fork_join.cancellation_handler.as_ref(),
            Some(Category::CancellationFlow),
            None,
        );
    }
}

/// One expandable group node, a containment link per inner node, and a
/// normal-flow link to the block's own continuation. Inner nodes still get
/// their own records from the top-level traversal; containment links only
/// declare nesting.
fn visit_block(block: &BlockNode, document: &mut DiagramDocument) {
    document.add_node(
        &block.id,
        block.name.as_deref(),
        Some(Category::Block),
        vec![("Group".to_string(), "Expanded".to_string())],
    );

    for inner in &block.inner_nodes {
        document.add_link(
            Some(&block.id),
            Some(inner),
            Some(Category::Contains),
            None,
        );
    }

    document.add_link(
        Some(&block.id),
        block.points_to.as_ref(),
        Some(Category::NormalFlow),
        None,
    );
}

/// Renders a switch-case discriminant as edge-label text. Absent and JSON
/// null values render as the empty string; strings render without quotes.
fn render_discriminant(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
