//! Allocation ledger for AST nodes.
//!
//! An [`Arena`] hands out node ids, records every node built through it and
//! keeps the informational parent links between them. Nothing here is global:
//! each compilation unit owns its arena, and [`Arena::release_all`] drops the
//! whole ledger in one step.
//!
//! Ids are dense and assigned in allocation order, starting at 1 for a new
//! arena. Id 0 is never handed out and marks a node that could not be
//! recorded. Ids are not reused after [`Arena::release_all`]: the next ledger
//! continues from the last id granted, so a handle kept from a released tree
//! can be told apart from the nodes built after it.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::errors::AstError;
use crate::nodes::{AstNode, ModuleDeclaration, SourceText, UdpDeclaration};

/// Tunables for an [`Arena`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Ledger capacity reserved when the arena is created.
    pub initial_capacity: usize,
    /// Maximum number of live nodes. `None` means unbounded.
    pub node_limit: Option<usize>,
}

impl ArenaConfig {
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[must_use]
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = Some(node_limit);
        self
    }
}

#[derive(Clone)]
pub struct Arena {
    pub(crate) nodes: FxHashMap<u32, AstNode>,
    pub(crate) node_routes: Vec<NodeRoute>,
    /// Ids below this were granted before the last release.
    first_id: u32,
    config: ArenaConfig,
}

impl Default for Arena {
    fn default() -> Self {
        Self::with_config(ArenaConfig::default())
    }
}

impl Arena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ArenaConfig) -> Self {
        let capacity = config.initial_capacity;
        let mut nodes = FxHashMap::default();
        nodes.reserve(capacity);
        Self {
            nodes,
            node_routes: Vec::with_capacity(capacity),
            first_id: 1,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Number of nodes currently recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node_routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_routes.is_empty()
    }

    /// Grants the id for the next node and opens its ledger entry.
    ///
    /// The node itself is handed over with [`Arena::insert`].
    ///
    /// # Errors
    ///
    /// Returns [`AstError::NodeLimitExceeded`] when the configured node limit is
    /// reached and [`AstError::AllocationFailed`] when the ledger cannot grow.
    pub fn allocate(&mut self) -> Result<u32, AstError> {
        let len = self.node_routes.len();
        if let Some(limit) = self.config.node_limit {
            if len >= limit {
                return Err(AstError::NodeLimitExceeded { limit });
            }
        }
        let Some(id) = u32::try_from(len)
            .ok()
            .and_then(|offset| self.first_id.checked_add(offset))
        else {
            return Err(AstError::NodeLimitExceeded {
                limit: u32::MAX as usize,
            });
        };
        self.node_routes
            .try_reserve(1)
            .map_err(|source| AstError::AllocationFailed {
                requested: 1,
                source,
            })?;
        self.nodes
            .try_reserve(1)
            .map_err(|source| AstError::AllocationFailed {
                requested: 1,
                source,
            })?;
        self.node_routes.push(NodeRoute {
            id,
            parent: None,
            children: vec![],
        });
        Ok(id)
    }

    /// Records a node under the id previously granted by [`Arena::allocate`].
    ///
    /// # Panics
    ///
    /// Panics if `node.id()` is zero, was not granted by this arena, or is already recorded.
    pub fn insert(&mut self, node: AstNode) {
        let id = node.id();
        assert!(id != 0, "Node ID must be non-zero");
        assert!(
            self.route(id).is_some(),
            "Node ID {id} was not allocated by this arena"
        );
        assert!(
            !self.nodes.contains_key(&id),
            "Node with ID {id} already exists in the arena"
        );
        trace!(id, kind = node.kind_name(), "recorded node");
        self.nodes.insert(id, node);
    }

    /// Records `parent` as the parent of `child`.
    ///
    /// The link is informational and never owns anything. A child that already
    /// has a parent is moved under the new one. Unknown ids are ignored.
    ///
    /// # Panics
    ///
    /// Panics if either id belongs to a tree dropped by [`Arena::release_all`].
    pub fn set_parent(&mut self, child: u32, parent: u32) {
        assert!(
            !self.is_released(child) && !self.is_released(parent),
            "cannot link node {child} to node {parent}: a node of a released tree was passed in"
        );
        if child == parent || self.route(parent).is_none() {
            return;
        }
        let previous = match self.route_mut(child) {
            Some(route) => route.parent.replace(parent),
            None => return,
        };
        if let Some(previous) = previous {
            if let Some(route) = self.route_mut(previous) {
                route.children.retain(|id| *id != child);
            }
        }
        if let Some(route) = self.route_mut(parent) {
            route.children.push(child);
        }
    }

    /// Frees every recorded node.
    ///
    /// Releasing an empty arena does nothing. The configuration is kept, and id
    /// assignment carries on after the last id granted.
    pub fn release_all(&mut self) {
        if self.is_empty() {
            return;
        }
        debug!(released = self.node_routes.len(), "releasing arena");
        let granted = u32::try_from(self.node_routes.len()).unwrap_or(u32::MAX);
        self.first_id = self.first_id.saturating_add(granted);
        self.nodes.clear();
        self.node_routes.clear();
    }

    /// Whether `id` was granted to a tree that has since been released.
    #[must_use]
    pub fn is_released(&self, id: u32) -> bool {
        id != 0 && id < self.first_id
    }

    #[must_use]
    pub fn find_node(&self, id: u32) -> Option<AstNode> {
        self.nodes.get(&id).cloned()
    }

    #[must_use]
    pub fn find_parent_node(&self, id: u32) -> Option<u32> {
        self.route(id).and_then(|route| route.parent)
    }

    /// Direct children of `id`, in the order they were linked.
    #[must_use]
    pub fn children(&self, id: u32) -> Vec<AstNode> {
        self.route(id)
            .map(|route| {
                route
                    .children
                    .iter()
                    .filter_map(|child_id| self.nodes.get(child_id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every recorded node, in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = &AstNode> + '_ {
        self.node_routes
            .iter()
            .filter_map(|route| self.nodes.get(&route.id))
    }

    pub fn filter_nodes<T: Fn(&AstNode) -> bool>(&self, fn_predicate: T) -> Vec<AstNode> {
        self.nodes().filter(|&node| fn_predicate(node)).cloned().collect()
    }

    #[must_use]
    pub fn source_texts(&self) -> Vec<Rc<SourceText>> {
        self.list_nodes_cmp(|node| {
            if let AstNode::SourceText(source_text) = node {
                Some(source_text.clone())
            } else {
                None
            }
        })
        .collect()
    }

    #[must_use]
    pub fn modules(&self) -> Vec<Rc<ModuleDeclaration>> {
        self.list_nodes_cmp(|node| {
            if let AstNode::ModuleDeclaration(module) = node {
                Some(module.clone())
            } else {
                None
            }
        })
        .collect()
    }

    #[must_use]
    pub fn udps(&self) -> Vec<Rc<UdpDeclaration>> {
        self.list_nodes_cmp(|node| {
            if let AstNode::UdpDeclaration(udp) = node {
                Some(udp.clone())
            } else {
                None
            }
        })
        .collect()
    }

    fn list_nodes_cmp<'a, T, F>(&'a self, cmp: F) -> impl Iterator<Item = T> + 'a
    where
        F: Fn(&AstNode) -> Option<T> + 'a,
        T: Clone + 'static,
    {
        self.nodes().filter_map(move |node| cmp(node))
    }

    fn route_index(&self, id: u32) -> Option<usize> {
        usize::try_from(id.checked_sub(self.first_id)?).ok()
    }

    fn route(&self, id: u32) -> Option<&NodeRoute> {
        self.node_routes.get(self.route_index(id)?)
    }

    fn route_mut(&mut self, id: u32) -> Option<&mut NodeRoute> {
        let index = self.route_index(id)?;
        self.node_routes.get_mut(index)
    }
}

#[derive(Clone, Default, Debug)]
pub struct NodeRoute {
    pub id: u32,
    parent: Option<u32>,
    children: Vec<u32>,
}
