//! Scoped traversal of the document tree
//!
//! Children are visited in document order. Control words go through
//! [`Directive::from_control_word`], symbols and text go to the engine.
//! Only structurally relevant groups are entered (see
//! [`crate::data::STRUCTURAL_GROUPS`]); font tables, stylesheets and the like
//! are skipped with their whole subtree.

use log::trace;

use super::directive::Directive;
use super::sink::FragmentSink;
use super::table::TableEngine;
use crate::core::entities::{Entity, Group};
use crate::data::is_structural_group;

/// Restriction of a traversal to the subtrees of groups with a given name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    target: Option<&'a str>,
    /// A group named `target` encloses the nodes being visited
    inside: bool,
}

impl<'a> Scope<'a> {
    /// Visit everything
    pub fn unscoped() -> Self {
        Scope {
            target: None,
            inside: false,
        }
    }

    /// Visit only groups named `target` and what they contain
    pub fn named(target: &'a str) -> Self {
        Scope {
            target: Some(target),
            inside: false,
        }
    }

    /// Scope for the children of `root`, taking the root's own name and
    /// ancestry into account
    pub fn for_root(target: Option<&'a str>, root: &Group) -> Self {
        let inside = match target {
            Some(t) => root.name == t || root.parents.iter().any(|p| p == t),
            None => false,
        };
        Scope { target, inside }
    }

    pub fn target(&self) -> Option<&'a str> {
        self.target
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Whether a child node is visited at all
    pub fn admits(&self, child: &Entity) -> bool {
        match self.target {
            None => true,
            Some(t) => self.inside || child.group_name() == Some(t),
        }
    }

    /// Whether a group with this name is descended into
    pub fn descends_into(&self, name: &str) -> bool {
        is_structural_group(name) || self.target == Some(name)
    }

    /// Scope for the children of a group named `name`
    pub fn enter(&self, name: &str) -> Self {
        Scope {
            target: self.target,
            inside: self.inside || self.target == Some(name),
        }
    }
}

/// Visit the children of `group` in order, feeding the engine
pub fn walk<S: FragmentSink>(group: &Group, scope: Scope<'_>, engine: &mut TableEngine<S>) {
    for child in &group.structure {
        if !scope.admits(child) {
            continue;
        }
        match child {
            Entity::Group(inner) => {
                if scope.descends_into(&inner.name) {
                    walk(inner, scope.enter(&inner.name), engine);
                } else {
                    trace!("skipping group {}", inner.name);
                }
            }
            Entity::ControlWord(word) => match Directive::from_control_word(word) {
                Some(directive) => engine.apply(directive),
                None => trace!("ignoring control word {}", word.control_name),
            },
            Entity::ControlSymbol(symbol) => engine.symbol(symbol.text),
            Entity::PlainText(text) => engine.text(&text.text),
        }
    }
}
