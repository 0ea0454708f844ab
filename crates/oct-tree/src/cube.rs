//! Axis-aligned cubic regions for oct-tree nodes.

use nalgebra::Point3;

use crate::Octant;

/// An axis-aligned cube in 3D space, defined by its center and edge length.
///
/// `size` is the full edge length, not the half-extent. Containment is
/// inclusive on all six faces, so a point lying exactly on a face (or an
/// edge or corner) counts as inside. Neighboring cubes that share a face
/// therefore both contain points on that face; callers that partition space
/// resolve the tie by asking the cubes in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    center: Point3<f32>,
    size: f32,
}

impl Cube {
    /// Creates a new cube from a center point and an edge length.
    ///
    /// # Panics (debug builds only)
    /// Panics if `size` is not strictly positive.
    pub fn new(center: Point3<f32>, size: f32) -> Self {
        debug_assert!(size > 0.0, "Cube edge length must be positive");
        Self { center, size }
    }

    /// Returns the center of the cube.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        self.center
    }

    /// Returns the edge length of the cube.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns half the edge length (the distance from the center to each face).
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size * 0.5
    }

    /// Returns the corner with the smallest coordinates on every axis.
    pub fn min(&self) -> Point3<f32> {
        let half = self.half_size();
        Point3::new(
            self.center.x - half,
            self.center.y - half,
            self.center.z - half,
        )
    }

    /// Returns the corner with the largest coordinates on every axis.
    pub fn max(&self) -> Point3<f32> {
        let half = self.half_size();
        Point3::new(
            self.center.x + half,
            self.center.y + half,
            self.center.z + half,
        )
    }

    /// Returns `true` if `point` lies within the closed cube.
    ///
    /// Bounds are inclusive on all six faces: a point exactly on a face is
    /// contained. This is a pure predicate with no side effects.
    pub fn contains(&self, point: Point3<f32>) -> bool {
        let half = self.half_size();
        point.x <= self.center.x + half
            && point.x >= self.center.x - half
            && point.y <= self.center.y + half
            && point.y >= self.center.y - half
            && point.z <= self.center.z + half
            && point.z >= self.center.z - half
    }

    /// Returns the child cube occupying the given octant.
    ///
    /// The child's edge is half this cube's edge, and its center is offset
    /// from this cube's center by a quarter edge along each axis, in the
    /// octant's sign direction. The result is a deterministic function of
    /// `(center, size)`: equal cubes produce bit-identical children.
    pub fn octant(&self, octant: Octant) -> Cube {
        let quarter = self.size * 0.25;
        Cube::new(self.center + octant.direction() * quarter, self.size * 0.5)
    }

    /// Returns all eight child cubes, in [`Octant::ALL`] order.
    pub fn octants(&self) -> [Cube; 8] {
        Octant::ALL.map(|octant| self.octant(octant))
    }
}
