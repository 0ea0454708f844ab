//! Oct-tree spatial index for point-like data in 3D space.

mod cube;
mod entry;
mod octant;
pub mod octree;

pub use cube::Cube;
pub use entry::Entry;
pub use octant::Octant;
pub use octree::{
    CollectingVisitor, DEFAULT_CAPACITY, DEFAULT_MIN_SIZE, DEFAULT_SIZE, FnVisitor, Octree,
    OctreeNode, OctreeVisitor,
};
