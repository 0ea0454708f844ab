//! Visitor pattern for oct-tree traversal.
//!
//! Visitors let consumers process nodes during a traversal without
//! coupling traversal logic to specific use cases, such as rendering node
//! bounds or snapshotting entries.

use crate::Entry;

use super::node::OctreeNode;

/// Visitor for processing nodes during oct-tree traversal.
///
/// [`Octree::traverse`](super::Octree::traverse) calls `visit` once per
/// node, parents before children. The node argument gives access to the
/// region, the directly stored entries, and the children, so a visitor can
/// inspect as much or as little of the structure as it needs.
pub trait OctreeVisitor<T> {
    /// Called for each node during traversal.
    fn visit(&mut self, node: &OctreeNode<T>);
}

/// A visitor that collects a copy of every entry it sees.
#[derive(Debug)]
pub struct CollectingVisitor<T> {
    collected: Vec<Entry<T>>,
}

impl<T> CollectingVisitor<T> {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self {
            collected: Vec::new(),
        }
    }

    /// Returns the collected entries.
    pub fn into_entries(self) -> Vec<Entry<T>> {
        self.collected
    }

    /// Returns a reference to the collected entries.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.collected
    }
}

impl<T> Default for CollectingVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> OctreeVisitor<T> for CollectingVisitor<T> {
    fn visit(&mut self, node: &OctreeNode<T>) {
        self.collected.extend(node.entries().iter().cloned());
    }
}

/// A visitor that calls a closure for each node.
pub struct FnVisitor<F> {
    func: F,
}

impl<F> FnVisitor<F> {
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<T, F> OctreeVisitor<T> for FnVisitor<F>
where
    F: FnMut(&OctreeNode<T>),
{
    fn visit(&mut self, node: &OctreeNode<T>) {
        (self.func)(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Octree;
    use nalgebra::Point3;

    #[test]
    fn collecting_visitor_starts_empty() {
        let visitor: CollectingVisitor<u32> = CollectingVisitor::new();
        assert!(visitor.entries().is_empty());
    }

    #[test]
    fn collecting_visitor_gathers_across_nodes() {
        let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), 100.0, 2, 1.0);
        for (i, c) in [-30.0f32, -10.0, 10.0, 30.0].iter().enumerate() {
            assert!(tree.insert(Point3::new(*c, *c, *c), i as u32));
        }

        let mut visitor = CollectingVisitor::new();
        tree.traverse(&mut visitor);

        let mut payloads: Vec<u32> = visitor
            .into_entries()
            .into_iter()
            .map(Entry::into_payload)
            .collect();
        payloads.sort_unstable();
        assert_eq!(payloads, vec![0, 1, 2, 3]);
    }

    #[test]
    fn fn_visitor_counts_entries() {
        let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), 100.0, 2, 1.0);
        for c in [-30.0f32, -10.0, 10.0, 30.0] {
            assert!(tree.insert(Point3::new(c, c, c), 0u32));
        }

        let mut seen = 0usize;
        {
            let mut visitor = FnVisitor::new(|node: &OctreeNode<u32>| {
                seen += node.entries().len();
            });
            tree.traverse(&mut visitor);
        }
        assert_eq!(seen, tree.entry_count());
    }
}
