use std::collections::BTreeMap;

use crate::{
    foundation::error::{MaskforgeError, MaskforgeResult},
    node::nodes::{FadeMaskNode, FloatArrayToListNode, FloatArrayToPointStringNode},
    node::schema::{InputSpec, OutputSpec},
    node::value::{Inputs, Value},
};

/// Declarative description of one plugin node: identity plus I/O schema.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NodeDescriptor {
    /// Unique node identifier the host dispatches on.
    pub identifier: String,
    /// Human-readable name shown in the host UI.
    pub display_name: String,
    /// UI grouping category.
    pub category: String,
    /// Declared inputs, in UI order.
    pub inputs: Vec<InputSpec>,
    /// Declared outputs, in order.
    pub outputs: Vec<OutputSpec>,
}

/// A plugin node the host can introspect and invoke.
///
/// Dispatch is a capability lookup: the host resolves an identifier to a
/// node through [`NodeRegistry::get`] and calls [`PluginNode::invoke`];
/// there is no reflection over entry-point names.
pub trait PluginNode: Send + Sync {
    /// The node's identity and I/O schema.
    fn descriptor(&self) -> NodeDescriptor;

    /// Run the node against one set of host-supplied inputs.
    ///
    /// Returns output values in the order declared by
    /// [`NodeDescriptor::outputs`].
    fn invoke(&self, inputs: &Inputs) -> MaskforgeResult<Vec<Value>>;
}

/// Identifier-keyed table of plugin nodes.
///
/// Built explicitly at startup (see [`builtin_nodes`]) and passed by
/// reference to the host adapter; there is no process-wide registry state.
#[derive(Default)]
pub struct NodeRegistry {
    nodes: BTreeMap<String, Box<dyn PluginNode>>,
}

impl NodeRegistry {
    /// Build an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node under its descriptor identifier.
    ///
    /// Re-registering an identifier replaces the earlier node.
    pub fn register(&mut self, node: Box<dyn PluginNode>) {
        self.nodes.insert(node.descriptor().identifier, node);
    }

    /// Look up a node by identifier.
    pub fn get(&self, identifier: &str) -> Option<&dyn PluginNode> {
        self.nodes.get(identifier).map(|n| n.as_ref())
    }

    /// Resolve `identifier` and invoke the node against `inputs`.
    #[tracing::instrument(skip(self, inputs))]
    pub fn invoke(&self, identifier: &str, inputs: &Inputs) -> MaskforgeResult<Vec<Value>> {
        let node = self.get(identifier).ok_or_else(|| {
            MaskforgeError::configuration(format!("unknown node identifier '{identifier}'"))
        })?;
        node.invoke(inputs)
    }

    /// Descriptors of every registered node, ordered by identifier.
    pub fn descriptors(&self) -> Vec<NodeDescriptor> {
        self.nodes.values().map(|n| n.descriptor()).collect()
    }

    /// Identifier → display-name table for the host UI.
    pub fn display_names(&self) -> BTreeMap<String, String> {
        self.nodes
            .values()
            .map(|n| {
                let d = n.descriptor();
                (d.identifier, d.display_name)
            })
            .collect()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the registry of built-in Maskforge nodes.
pub fn builtin_nodes() -> NodeRegistry {
    let mut registry = NodeRegistry::new();
    registry.register(Box::new(FadeMaskNode));
    registry.register(Box::new(FloatArrayToPointStringNode));
    registry.register(Box::new(FloatArrayToListNode));
    registry
}

#[cfg(test)]
#[path = "../../tests/unit/node/registry.rs"]
mod tests;
