//! Dialog tree types.
//!
//! A pack is an ordered list of [`DialogNode`]s. A node with a `children`
//! field (even an empty one) is a category; a node without it is a message
//! that gets copied when its key is pressed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNode {
    pub id: String,
    /// Single-keystroke label, unique among siblings
    pub key: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DialogNode>>,
}

impl DialogNode {
    /// Creates a message leaf.
    pub fn message(id: impl Into<String>, key: impl Into<String>, text: impl Into<String>) -> Self {
        DialogNode {
            id: id.into(),
            key: key.into(),
            text: text.into(),
            children: None,
        }
    }

    /// Creates a category holding `children`.
    pub fn category(
        id: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
        children: Vec<DialogNode>,
    ) -> Self {
        DialogNode {
            id: id.into(),
            key: key.into(),
            text: text.into(),
            children: Some(children),
        }
    }

    pub fn is_category(&self) -> bool {
        self.children.is_some()
    }

    /// Number of message leaves at or below this node.
    pub fn count_messages(&self) -> usize {
        match &self.children {
            Some(children) => children.iter().map(DialogNode::count_messages).sum(),
            None => 1,
        }
    }

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&DialogNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .as_deref()
            .and_then(|children| find_node(children, id))
    }
}

/// Depth-first lookup by id across a sibling list.
pub fn find_node<'a>(nodes: &'a [DialogNode], id: &str) -> Option<&'a DialogNode> {
    nodes.iter().find_map(|node| node.find(id))
}

/// Total message leaves in a pack.
pub fn count_messages(nodes: &[DialogNode]) -> usize {
    nodes.iter().map(DialogNode::count_messages).sum()
}

/// A named dialog pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub dialogs: Vec<DialogNode>,
}

impl Preset {
    /// Creates a preset with a fresh random id.
    pub fn new(name: impl Into<String>, dialogs: Vec<DialogNode>) -> Self {
        Preset {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            dialogs,
        }
    }
}
