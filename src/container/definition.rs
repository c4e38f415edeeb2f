//! Service definitions

use std::collections::BTreeSet;

use serde_json::Value;

use crate::domain::entities::RoleTag;
use crate::domain::value_objects::{Capability, Contract, Implementation};

/// How to build one service: its class, the contracts that class satisfies,
/// its constructor arguments and its role tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Definition {
    class: String,
    capabilities: BTreeSet<Capability>,
    arguments: Vec<Value>,
    tags: Vec<RoleTag>,
}

impl Definition {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn implementing(mut self, capability: impl Into<Capability>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Declare that the class implements the Rust contract `C`.
    pub fn implements<C: Contract + ?Sized>(self) -> Self {
        self.implementing(Capability::of::<C>())
    }

    pub fn with_argument(mut self, argument: impl Into<Value>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn with_tag(mut self, tag: RoleTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn add_tag(&mut self, tag: RoleTag) {
        self.tags.push(tag);
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter()
    }

    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    pub fn argument(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index)
    }

    /// Replace the argument at `index`, returning the previous value.
    ///
    /// Out-of-range indexes leave the definition untouched and return `None`.
    pub fn replace_argument(&mut self, index: usize, argument: Value) -> Option<Value> {
        self.arguments
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, argument))
    }

    pub fn push_argument(&mut self, argument: Value) {
        self.arguments.push(argument);
    }

    /// All tag instances, in the order they were added
    pub fn tags(&self) -> &[RoleTag] {
        &self.tags
    }

    pub fn tag<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RoleTag> + 'a {
        self.tags.iter().filter(move |tag| tag.name() == name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name() == name)
    }
}

impl Implementation for Definition {
    fn class(&self) -> &str {
        &self.class
    }

    fn satisfies(&self, capability: &Capability) -> bool {
        self.capabilities.contains(capability)
    }
}
