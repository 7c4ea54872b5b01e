use serde::{Deserialize, Serialize};
use crate::models::{SynergisticContact, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Operator,
    Target,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Hover text: "You", the target role, or the contact's position
    pub title: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Connection,
    DirectTitleMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
}

/// Relationship graph from the operator towards a target role at a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathGraph {
    pub operator: String,
    pub target: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl PathGraph {
    /// Build the graph over retained contacts working at `target_company`
    ///
    /// Contacts sharing a display name collapse into a single node.
    pub fn build(
        profile: &UserProfile,
        retained: &[SynergisticContact],
        target_company: &str,
        target_role: &str,
    ) -> Self {
        let operator = format!("{} (You)", profile.title);
        let target = format!("{} at {}", target_role, target_company);
        let role_lower = target_role.to_lowercase();

        let mut graph = Self {
            operator: operator.clone(),
            target: target.clone(),
            nodes: vec![
                GraphNode {
                    id: operator.clone(),
                    title: "You".to_string(),
                    kind: NodeKind::Operator,
                },
                GraphNode {
                    id: target.clone(),
                    title: target_role.to_string(),
                    kind: NodeKind::Target,
                },
            ],
            edges: Vec::new(),
        };

        for entry in retained.iter().filter(|r| r.contact.company == target_company) {
            let contact = &entry.contact;
            let name = contact.display_name();

            graph.upsert_node(GraphNode {
                id: name.clone(),
                title: contact.position.clone(),
                kind: NodeKind::Contact,
            });
            graph.add_edge(&operator, &name, EdgeKind::Connection);

            if contact.position.to_lowercase().contains(&role_lower) {
                graph.add_edge(&name, &target, EdgeKind::DirectTitleMatch);
            }
        }

        graph
    }

    /// Contact nodes only
    pub fn contacts(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Contact)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    fn upsert_node(&mut self, node: GraphNode) {
        match self.nodes.iter_mut().find(|n| n.id == node.id) {
            // Later attributes win, the node keeps its original kind
            Some(existing) => existing.title = node.title,
            None => self.nodes.push(node),
        }
    }

    fn add_edge(&mut self, from: &str, to: &str, kind: EdgeKind) {
        match self.edges.iter_mut().find(|e| e.from == from && e.to == to) {
            Some(existing) => existing.kind = kind,
            None => self.edges.push(GraphEdge {
                from: from.to_string(),
                to: to.to_string(),
                kind,
            }),
        }
    }
}
