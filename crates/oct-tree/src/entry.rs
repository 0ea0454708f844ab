//! Entries stored by the oct-tree.

use nalgebra::Point3;

/// A payload anchored to a position in world space.
///
/// The tree files entries by `position` and never looks at `payload`; the
/// payload is typically a handle into an external table (an entity id, an
/// index into a particle buffer). Entries are immutable once inserted;
/// the tree has no remove or reposition operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    position: Point3<f32>,
    payload: T,
}

impl<T> Entry<T> {
    /// Creates an entry from a world-space position and a payload.
    pub fn new(position: Point3<f32>, payload: T) -> Self {
        Self { position, payload }
    }

    /// Returns the entry's position.
    #[inline]
    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    /// Returns a reference to the payload.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the entry and returns the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip() {
        let entry = Entry::new(Point3::new(1.0, 2.0, 3.0), 42u32);

        assert_eq!(entry.position(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(*entry.payload(), 42);
        assert_eq!(entry.into_payload(), 42);
    }
}
