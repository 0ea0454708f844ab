//! Oct-tree container and insertion API.

use nalgebra::Point3;

use crate::{Cube, Entry};

use super::node::OctreeNode;
use super::visitor::{CollectingVisitor, OctreeVisitor};

/// Default edge length of a root region.
pub const DEFAULT_SIZE: f32 = 1000.0;

/// Default number of entries a node holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 100;

/// Default minimum edge length; nodes at or below it never subdivide.
pub const DEFAULT_MIN_SIZE: f32 = 1.0;

/// An oct-tree spatial index over point-like entries.
///
/// The tree owns a cubic region of space and adaptively partitions it:
/// each node splits into eight octants once it holds more than `capacity`
/// entries, down to a `min_size` edge-length floor. Dense clusters end up
/// finely subdivided while empty space stays coarse, so a later traversal
/// can skip whole regions at once.
///
/// # Construction and insertion
///
/// ```ignore
/// use oct_tree::Octree;
/// use nalgebra::Point3;
///
/// let mut tree = Octree::new(Point3::origin(), 1000.0, 4, 1.0);
/// assert!(tree.insert(Point3::new(1.0, 2.0, 3.0), entity_id));
/// assert!(!tree.insert(Point3::new(2000.0, 0.0, 0.0), other_id)); // outside
/// ```
///
/// A failed insert means the position lies outside the root region; the
/// caller decides whether to clamp, drop, or rebuild with larger bounds.
///
/// # Lifecycle
///
/// Entries are immutable once inserted and the tree has no remove or
/// reposition operation; consumers that track moving data rebuild the tree
/// (or [`clear`](Octree::clear) and re-insert) each frame. Dropping the
/// tree releases every node and entry transitively: children are owned by
/// exactly one parent, so teardown is a plain post-order drop.
///
/// # Concurrency
///
/// The tree is single-threaded by design: all mutation goes through
/// `&mut self`, shared `&self` reads are safe together, and any
/// cross-thread sharing needs external synchronization.
#[derive(Debug, Clone)]
pub struct Octree<T> {
    root: OctreeNode<T>,
}

impl<T> Octree<T> {
    /// Creates a tree over the cube centered at `center` with edge length
    /// `size`.
    ///
    /// `capacity` is the per-node entry count that triggers subdivision;
    /// `min_size` is the edge-length floor below which nodes accumulate
    /// entries instead of splitting. Both propagate unchanged to every
    /// node of the tree.
    pub fn new(center: Point3<f32>, size: f32, capacity: usize, min_size: f32) -> Self {
        Self {
            root: OctreeNode::new(Cube::new(center, size), capacity, min_size, 0),
        }
    }

    /// Creates a tree over the given region with the default capacity and
    /// minimum size.
    pub fn with_bounds(center: Point3<f32>, size: f32) -> Self {
        Self::new(center, size, DEFAULT_CAPACITY, DEFAULT_MIN_SIZE)
    }

    /// Inserts a payload at the given position.
    ///
    /// Returns `false` if the position lies outside the tree's bounding
    /// region, leaving the tree unchanged. Inside the region, insertion
    /// always succeeds.
    pub fn insert(&mut self, position: Point3<f32>, payload: T) -> bool {
        self.insert_entry(Entry::new(position, payload))
    }

    /// Inserts a pre-built entry. Same contract as [`insert`](Octree::insert).
    pub fn insert_entry(&mut self, entry: Entry<T>) -> bool {
        self.root.insert(entry).is_ok()
    }

    /// Returns a reference to the root node.
    #[inline]
    pub fn root(&self) -> &OctreeNode<T> {
        &self.root
    }

    /// Returns the tree's bounding region.
    #[inline]
    pub fn bounds(&self) -> Cube {
        self.root.cube()
    }

    /// Returns the per-node subdivision capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.root.capacity()
    }

    /// Returns the minimum node edge length.
    #[inline]
    pub fn min_size(&self) -> f32 {
        self.root.min_size()
    }

    /// Returns `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Returns the total number of entries in the tree.
    pub fn entry_count(&self) -> usize {
        self.root.entry_count()
    }

    /// Returns the total number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Returns the depth of the deepest node (0 for an unsplit root).
    pub fn depth(&self) -> usize {
        self.root.max_depth()
    }

    /// Removes every entry and child node, keeping the bounding region and
    /// the capacity/min-size policy.
    ///
    /// This is the rebuild-per-frame reset: consumers that re-index moving
    /// data call `clear` and re-insert instead of allocating a fresh tree.
    pub fn clear(&mut self) {
        self.root = OctreeNode::new(self.bounds(), self.capacity(), self.min_size(), 0);
    }

    /// Walks every node in the tree, parents before children, children in
    /// [`Octant::ALL`](crate::Octant::ALL) order.
    ///
    /// The walk is structural: it visits regions regardless of where a
    /// position might fall. Query-style traversals (range, nearest, ray)
    /// are out of scope for the tree itself and belong to the visitor.
    pub fn traverse<V: OctreeVisitor<T>>(&self, visitor: &mut V) {
        traverse_node(&self.root, visitor);
    }

    /// Collects a flat snapshot of every entry in the tree.
    ///
    /// The order of entries is unspecified.
    pub fn collect_entries(&self) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        let mut visitor = CollectingVisitor::new();
        self.traverse(&mut visitor);
        visitor.into_entries()
    }
}

impl<T> Default for Octree<T> {
    /// An origin-centered tree with the default region and policy.
    fn default() -> Self {
        Self::new(
            Point3::origin(),
            DEFAULT_SIZE,
            DEFAULT_CAPACITY,
            DEFAULT_MIN_SIZE,
        )
    }
}

/// Recursively visits a node and then its children.
fn traverse_node<T, V: OctreeVisitor<T>>(node: &OctreeNode<T>, visitor: &mut V) {
    visitor.visit(node);
    if let Some(children) = node.children() {
        for child in children {
            traverse_node(child, visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnVisitor, Octant};
    use nalgebra::Point3;

    fn small_tree() -> Octree<u32> {
        Octree::new(Point3::new(0.0, 0.0, 0.0), 1000.0, 4, 1.0)
    }

    #[test]
    fn new_tree_is_an_empty_leaf() {
        let tree = small_tree();

        assert!(tree.is_empty());
        assert_eq!(tree.entry_count(), 0);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert!(!tree.root().is_subdivided());
    }

    #[test]
    fn default_matches_the_stock_root() {
        let tree: Octree<u32> = Octree::default();

        assert_eq!(tree.bounds().center(), Point3::origin());
        assert_eq!(tree.bounds().size(), DEFAULT_SIZE);
        assert_eq!(tree.capacity(), DEFAULT_CAPACITY);
        assert_eq!(tree.min_size(), DEFAULT_MIN_SIZE);
    }

    #[test]
    fn insert_inside_bounds_succeeds() {
        let mut tree = small_tree();

        assert!(tree.insert(Point3::new(1.0, 2.0, 3.0), 7));
        assert_eq!(tree.entry_count(), 1);
        assert!(!tree.is_empty());
    }

    #[test]
    fn insert_outside_bounds_is_rejected_without_change() {
        let mut tree = small_tree();
        assert!(tree.insert(Point3::new(1.0, 1.0, 1.0), 0));

        assert!(!tree.insert(Point3::new(2000.0, 0.0, 0.0), 1));

        assert_eq!(tree.entry_count(), 1);
        assert_eq!(tree.root().entries().len(), 1);
        assert!(!tree.root().is_subdivided());
    }

    #[test]
    fn boundary_positions_are_accepted() {
        let mut tree = small_tree();

        // Exactly on the +x face and on a corner.
        assert!(tree.insert(Point3::new(500.0, 0.0, 0.0), 0));
        assert!(tree.insert(Point3::new(-500.0, -500.0, -500.0), 1));
        assert_eq!(tree.entry_count(), 2);
    }

    #[test]
    fn overflow_across_octants_subdivides_once() {
        let mut tree = small_tree();

        let positions = [
            Point3::new(100.0, 100.0, 100.0),
            Point3::new(-100.0, 100.0, 100.0),
            Point3::new(100.0, -100.0, 100.0),
            Point3::new(-100.0, -100.0, 100.0),
            Point3::new(100.0, 100.0, -100.0),
        ];
        for (i, p) in positions.iter().enumerate() {
            assert!(tree.insert(*p, i as u32));
        }

        assert!(tree.root().is_subdivided());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.node_count(), 9);
        assert_eq!(tree.entry_count(), 5);

        // Every entry sits in the child whose region contains its position.
        for p in positions {
            let holder = Octant::ALL
                .iter()
                .filter_map(|&o| tree.root().child(o))
                .find(|child| child.entries().iter().any(|e| e.position() == p))
                .expect("entry should live in some child");
            assert!(holder.contains(p));
        }
    }

    #[test]
    fn clustered_inserts_fill_a_single_octant() {
        let mut tree = small_tree();

        for i in 1..=5 {
            let c = i as f32;
            assert!(tree.insert(Point3::new(c, c, c), i as u32));
        }

        assert!(tree.root().is_subdivided());

        // All five entries live under the +x+y+z child; the other seven
        // children are untouched leaves.
        for octant in Octant::ALL {
            let child = tree.root().child(octant).expect("root has eight children");
            if octant == Octant::FrontNorthEast {
                assert_eq!(child.entry_count(), 5);
            } else {
                assert_eq!(child.entry_count(), 0);
                assert!(!child.is_subdivided());
            }
        }
        assert!(tree.root().entries().is_empty());
        assert_eq!(tree.entry_count(), 5);
    }

    #[test]
    fn minimum_size_floor_accumulates_past_capacity() {
        let mut tree = Octree::new(Point3::new(0.0, 0.0, 0.0), 1.0, 4, 1.0);

        for i in 0..100 {
            assert!(tree.insert(Point3::new(0.2, -0.2, 0.0), i));
        }

        assert!(!tree.root().is_subdivided());
        assert_eq!(tree.root().entries().len(), 100);
    }

    #[test]
    fn clear_keeps_geometry_and_policy() {
        let mut tree = small_tree();
        for i in 0..50 {
            let c = (i % 9) as f32 * 10.0 - 40.0;
            tree.insert(Point3::new(c, c * 0.5, -c), i);
        }
        assert!(tree.root().is_subdivided());

        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert!(!tree.root().is_subdivided());
        assert_eq!(tree.bounds().size(), 1000.0);
        assert_eq!(tree.capacity(), 4);
        assert_eq!(tree.min_size(), 1.0);
    }

    #[test]
    fn traverse_visits_every_node_once() {
        let mut tree = small_tree();
        let positions = [
            Point3::new(100.0, 100.0, 100.0),
            Point3::new(-100.0, 100.0, 100.0),
            Point3::new(100.0, -100.0, 100.0),
            Point3::new(-100.0, -100.0, 100.0),
            Point3::new(100.0, 100.0, -100.0),
        ];
        for (i, p) in positions.iter().enumerate() {
            tree.insert(*p, i as u32);
        }

        let mut visited = 0usize;
        let mut visitor = FnVisitor::new(|_node: &OctreeNode<u32>| visited += 1);
        tree.traverse(&mut visitor);
        drop(visitor);

        assert_eq!(visited, tree.node_count());
    }

    #[test]
    fn collect_entries_returns_everything_inserted() {
        let mut tree = small_tree();
        for i in 0..12 {
            let c = i as f32 * 30.0 - 150.0;
            assert!(tree.insert(Point3::new(c, -c, c * 2.0), i));
        }

        let mut payloads: Vec<u32> = tree
            .collect_entries()
            .into_iter()
            .map(Entry::into_payload)
            .collect();
        payloads.sort_unstable();

        assert_eq!(payloads, (0..12).collect::<Vec<_>>());
    }
}
