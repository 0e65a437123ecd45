//! Parsed RTF document tree
//!
//! The tree is produced by an external tokenizer and is read-only for the
//! renderer. Four node kinds exist: groups, control words, control symbols
//! and plain text runs. Every node records the names of its ancestor groups
//! (`parents`, root first); [`Group::assign_ancestry`] fills these in for
//! trees built by hand or loaded from JSON.

use crate::data::UNKNOWN_GROUP;

#[cfg(feature = "data-loading")]
use crate::utils::error::LoadError;

/// A node of the parsed document tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "data-loading",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum Entity {
    Group(Group),
    ControlWord(ControlWord),
    ControlSymbol(ControlSymbol),
    PlainText(PlainText),
}

impl Entity {
    /// Ancestor group names, root first
    pub fn parents(&self) -> &[String] {
        match self {
            Entity::Group(g) => &g.parents,
            Entity::ControlWord(w) => &w.parents,
            Entity::ControlSymbol(s) => &s.parents,
            Entity::PlainText(t) => &t.parents,
        }
    }

    fn parents_mut(&mut self) -> &mut Vec<String> {
        match self {
            Entity::Group(g) => &mut g.parents,
            Entity::ControlWord(w) => &mut w.parents,
            Entity::ControlSymbol(s) => &mut s.parents,
            Entity::PlainText(t) => &mut t.parents,
        }
    }

    /// Group name, if this node is a group
    pub fn group_name(&self) -> Option<&str> {
        match self {
            Entity::Group(g) => Some(&g.name),
            _ => None,
        }
    }

    pub fn word(name: &str) -> Self {
        Entity::ControlWord(ControlWord::new(name))
    }

    pub fn word_with(name: &str, parameter: i32) -> Self {
        Entity::ControlWord(ControlWord::with_parameter(name, parameter))
    }

    pub fn symbol(c: char) -> Self {
        Entity::ControlSymbol(ControlSymbol::new(c))
    }

    pub fn text(text: &str) -> Self {
        Entity::PlainText(PlainText::new(text))
    }
}

/// A named container of nodes
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub name: String,
    /// Children in document order
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub structure: Vec<Entity>,
    #[cfg_attr(feature = "data-loading", serde(default, skip_serializing))]
    pub parents: Vec<String>,
}

impl Group {
    /// Create an empty group with an explicit name
    pub fn new(name: impl Into<String>) -> Self {
        Group {
            name: name.into(),
            structure: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Create a group named the way the tokenizer names groups: after its
    /// first control word if it starts with one, `unknown` otherwise.
    pub fn from_structure(structure: Vec<Entity>) -> Self {
        let name = match structure.first() {
            Some(Entity::ControlWord(w)) => w.control_name.clone(),
            _ => UNKNOWN_GROUP.to_string(),
        };
        Group {
            name,
            structure,
            parents: Vec::new(),
        }
    }

    /// Replace the children
    pub fn with_children(mut self, structure: Vec<Entity>) -> Self {
        self.structure = structure;
        self
    }

    /// Recompute the ancestor chain of every descendant from this group's
    /// own `parents`. Returns the group for chaining.
    pub fn assign_ancestry(mut self) -> Self {
        self.fill_ancestry();
        self
    }

    fn fill_ancestry(&mut self) {
        let mut chain = self.parents.clone();
        chain.push(self.name.clone());
        for child in &mut self.structure {
            *child.parents_mut() = chain.clone();
            if let Entity::Group(g) = child {
                g.fill_ancestry();
            }
        }
    }
}

/// A control word: `\name` with an optional integer parameter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlWord {
    pub control_name: String,
    #[cfg_attr(feature = "data-loading", serde(default))]
    pub parameter: Option<i32>,
    #[cfg_attr(feature = "data-loading", serde(default, skip_serializing))]
    pub parents: Vec<String>,
}

impl ControlWord {
    pub fn new(name: impl Into<String>) -> Self {
        ControlWord {
            control_name: name.into(),
            parameter: None,
            parents: Vec::new(),
        }
    }

    pub fn with_parameter(name: impl Into<String>, parameter: i32) -> Self {
        ControlWord {
            control_name: name.into(),
            parameter: Some(parameter),
            parents: Vec::new(),
        }
    }
}

/// A control symbol: backslash followed by one non-letter character
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlSymbol {
    pub text: char,
    #[cfg_attr(feature = "data-loading", serde(default, skip_serializing))]
    pub parents: Vec<String>,
}

impl ControlSymbol {
    pub fn new(text: char) -> Self {
        ControlSymbol {
            text,
            parents: Vec::new(),
        }
    }
}

/// A run of literal text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainText {
    pub text: String,
    #[cfg_attr(feature = "data-loading", serde(default, skip_serializing))]
    pub parents: Vec<String>,
}

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self {
        PlainText {
            text: text.into(),
            parents: Vec::new(),
        }
    }
}

/// Load a tree from JSON and assign ancestor chains.
///
/// Nodes are internally tagged by `type`:
///
/// ```rust
/// # #[cfg(feature = "data-loading")]
/// # {
/// let root = rtftab::load_tree_json(r#"{
///     "name": "rtf1",
///     "structure": [
///         {"type": "control_word", "control_name": "trowd"},
///         {"type": "plain_text", "text": "Hi"}
///     ]
/// }"#).unwrap();
/// assert_eq!(root.structure[1].parents(), ["rtf1".to_string()]);
/// # }
/// ```
#[cfg(feature = "data-loading")]
pub fn load_tree_json(input: &str) -> Result<Group, LoadError> {
    let root: Group = serde_json::from_str(input)?;
    if root.name.is_empty() {
        return Err(LoadError::invalid("root group has no name"));
    }
    Ok(root.assign_ancestry())
}
