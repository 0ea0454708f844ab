//! Adaptive oct-tree over point-like entries in 3D space.
//!
//! The tree recursively partitions a cubic region into eight octants,
//! splitting a node only once it holds more entries than its capacity and
//! never below a minimum edge length. The result is an index whose
//! resolution follows entry density:
//!
//! - Insert-only: entries are immutable once stored, and consumers rebuild
//!   the tree (or [`Octree::clear`] it) when positions change
//! - Bounded: depth is capped by the minimum node size, so insertion and
//!   traversal always terminate
//! - Walkable: a [`OctreeVisitor`] sees every node in a fixed order, the
//!   hook for culling, broad-phase, and debug-rendering consumers
//!
//! # Example
//!
//! ```ignore
//! use oct_tree::{CollectingVisitor, Octree};
//! use nalgebra::Point3;
//!
//! let mut tree = Octree::new(Point3::origin(), 1000.0, 4, 1.0);
//! for (id, position) in positions {
//!     if !tree.insert(position, id) {
//!         // position outside the indexed region; caller's call
//!     }
//! }
//!
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse(&mut visitor);
//! ```
//!
//! # Architecture
//!
//! - [`Octree`]: the owning container holding the root node
//! - [`OctreeNode`]: a cubic region, its entries, and (once split) its
//!   eight children
//! - [`OctreeVisitor`]: visitor trait for custom traversal behavior

mod node;
mod tree;
mod visitor;

// Re-export main types
pub use node::OctreeNode;
pub use tree::{DEFAULT_CAPACITY, DEFAULT_MIN_SIZE, DEFAULT_SIZE, Octree};
pub use visitor::{CollectingVisitor, FnVisitor, OctreeVisitor};
