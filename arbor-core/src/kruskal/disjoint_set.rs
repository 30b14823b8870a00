//! Union-find (disjoint set union) backing Kruskal's algorithm.
//!
//! `find` uses recursive path compression and charges one operation per
//! call, recursive hops included. `union` charges one operation on top of
//! its two internal `find`s and re-parents `b`'s root under `a`'s root
//! without union-by-rank; the asymmetry is deliberate and must not be
//! "improved", since the counting granularity feeds the reported operation
//! totals.

use std::collections::HashMap;

use crate::{
    error::{MstError, Result},
    graph::VertexId,
};

/// Union-find over vertex identifiers with an owned operation counter.
///
/// Instances are created fresh per Kruskal invocation and discarded after
/// use; there is no cross-call state.
///
/// # Examples
/// ```
/// use arbor_core::{VertexId, kruskal::DisjointSet};
///
/// let a = VertexId::from("A");
/// let b = VertexId::from("B");
/// let mut set = DisjointSet::new([a.clone(), b.clone()]);
/// set.union(&a, &b)?;
/// assert_eq!(set.find(&b)?, a);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: HashMap<VertexId, VertexId>,
    operations: u64,
}

impl DisjointSet {
    /// Initialises every given vertex as its own singleton set.
    #[must_use]
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let parent = vertices
            .into_iter()
            .map(|vertex| (vertex.clone(), vertex))
            .collect();
        Self {
            parent,
            operations: 0,
        }
    }

    /// Returns the representative of the set containing `v`, re-parenting
    /// every vertex on the walked path directly to the root.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when `v` was never registered.
    pub fn find(&mut self, v: &VertexId) -> Result<VertexId> {
        self.operations += 1;
        let parent = self
            .parent
            .get(v)
            .cloned()
            .ok_or_else(|| MstError::UnknownVertex { vertex: v.clone() })?;
        if parent == *v {
            return Ok(parent);
        }
        let root = self.find(&parent)?;
        self.parent.insert(v.clone(), root.clone());
        Ok(root)
    }

    /// Merges the sets containing `a` and `b` by re-parenting `b`'s root
    /// under `a`'s root. No-op when both are already in the same set.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when either vertex was never
    /// registered.
    pub fn union(&mut self, a: &VertexId, b: &VertexId) -> Result<()> {
        self.operations += 1;
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a != root_b {
            self.parent.insert(root_b, root_a);
        }
        Ok(())
    }

    /// Returns the number of operations charged so far.
    #[rustfmt::skip]
    #[must_use]
    pub const fn operations(&self) -> u64 { self.operations }
}
