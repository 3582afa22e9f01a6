//! Common test utilities for building workflow flow descriptions.
use keizu::prelude::*;

/// Creates an activity with the given id and no continuations.
#[allow(dead_code)]
pub fn bare_activity(id: &str) -> ActivityNode {
    ActivityNode {
        id: id.to_string(),
        name: None,
        activity_type: "TestActivity".to_string(),
        points_to: None,
        fault_handler: None,
        cancellation_handler: None,
    }
}

/// A single activity with all three continuations wired to sink activities.
///
/// Shape: `work -> done` (normal), `work -> fail` (fault), `work -> stop`
/// (cancellation).
#[allow(dead_code)]
pub fn create_full_activity_flow() -> FlowDescription {
    FlowDescription {
        nodes: vec![
            FlowNode::Activity(ActivityNode {
                id: "work".to_string(),
                name: Some("Do work".to_string()),
                activity_type: "WorkActivity".to_string(),
                points_to: Some("done".to_string()),
                fault_handler: Some("fail".to_string()),
                cancellation_handler: Some("stop".to_string()),
            }),
            FlowNode::Activity(bare_activity("done")),
            FlowNode::Activity(bare_activity("fail")),
            FlowNode::Activity(bare_activity("stop")),
        ],
    }
}

/// A switch with three cases (number, string, and null discriminant) plus a
/// default case.
#[allow(dead_code)]
pub fn create_switch_flow() -> FlowDescription {
    FlowDescription {
        nodes: vec![
            FlowNode::Switch(SwitchNode {
                id: "route".to_string(),
                name: Some("Route order".to_string()),
                cases: vec![
                    SwitchCase {
                        value: Some(serde_json::json!(1)),
                        target: Some("express".to_string()),
                    },
                    SwitchCase {
                        value: Some(serde_json::json!("bulk")),
                        target: Some("standard".to_string()),
                    },
                    SwitchCase {
                        value: Some(serde_json::Value::Null),
                        target: Some("standard".to_string()),
                    },
                ],
                default_case: Some("fallback".to_string()),
            }),
            FlowNode::Activity(bare_activity("express")),
            FlowNode::Activity(bare_activity("standard")),
            FlowNode::Activity(bare_activity("fallback")),
        ],
    }
}

/// A condition with both branches wired.
#[allow(dead_code)]
pub fn create_condition_flow() -> FlowDescription {
    FlowDescription {
        nodes: vec![
            FlowNode::Condition(ConditionNode {
                id: "check".to_string(),
                name: Some("In stock?".to_string()),
                when_true: Some("ship".to_string()),
                when_false: Some("reorder".to_string()),
            }),
            FlowNode::Activity(bare_activity("ship")),
            FlowNode::Activity(bare_activity("reorder")),
        ],
    }
}

/// A fork/join with two parallel branches and all three rejoin continuations.
#[allow(dead_code)]
pub fn create_fork_join_flow() -> FlowDescription {
    FlowDescription {
        nodes: vec![
            FlowNode::ForkJoin(ForkJoinNode {
                id: "join".to_string(),
                name: Some("Gather quotes".to_string()),
                forks: vec![
                    ForkActivity {
                        id: "fork-a".to_string(),
                        name: "Quote A".to_string(),
                        activity_type: "QuoteActivity".to_string(),
                    },
                    ForkActivity {
                        id: "fork-b".to_string(),
                        name: "Quote B".to_string(),
                        activity_type: "QuoteActivity".to_string(),
                    },
                ],
                points_to: Some("compare".to_string()),
                fault_handler: Some("fail".to_string()),
                cancellation_handler: Some("stop".to_string()),
            }),
            FlowNode::Activity(bare_activity("compare")),
            FlowNode::Activity(bare_activity("fail")),
            FlowNode::Activity(bare_activity("stop")),
        ],
    }
}

/// A block containing two inner activities, with its own continuation.
#[allow(dead_code)]
pub fn create_block_flow() -> FlowDescription {
    FlowDescription {
        nodes: vec![
            FlowNode::Block(BlockNode {
                id: "batch".to_string(),
                name: Some("Batch step".to_string()),
                inner_nodes: vec!["first".to_string(), "second".to_string()],
                points_to: Some("after".to_string()),
            }),
            FlowNode::Activity(bare_activity("first")),
            FlowNode::Activity(bare_activity("second")),
            FlowNode::Activity(bare_activity("after")),
        ],
    }
}

/// A flow exercising every variant at once.
#[allow(dead_code)]
pub fn create_full_workflow() -> FlowDescription {
    let mut nodes = vec![
        FlowNode::Activity(ActivityNode {
            id: "start".to_string(),
            name: Some("Start".to_string()),
            activity_type: "StartActivity".to_string(),
            points_to: Some("check".to_string()),
            fault_handler: None,
            cancellation_handler: None,
        }),
        FlowNode::Condition(ConditionNode {
            id: "check".to_string(),
            name: None,
            when_true: Some("route".to_string()),
            when_false: Some("batch".to_string()),
        }),
        FlowNode::Switch(SwitchNode {
            id: "route".to_string(),
            name: None,
            cases: vec![SwitchCase {
                value: Some(serde_json::json!("fast")),
                target: Some("join".to_string()),
            }],
            default_case: Some("batch".to_string()),
        }),
        FlowNode::ForkJoin(ForkJoinNode {
            id: "join".to_string(),
            name: None,
            forks: vec![ForkActivity {
                id: "fork-1".to_string(),
                name: "Branch".to_string(),
                activity_type: "BranchActivity".to_string(),
            }],
            points_to: Some("finish".to_string()),
            fault_handler: None,
            cancellation_handler: None,
        }),
        FlowNode::Block(BlockNode {
            id: "batch".to_string(),
            name: None,
            inner_nodes: vec!["inner".to_string()],
            points_to: Some("finish".to_string()),
        }),
    ];
    nodes.push(FlowNode::Activity(bare_activity("inner")));
    nodes.push(FlowNode::Activity(bare_activity("finish")));
    FlowDescription { nodes }
}
