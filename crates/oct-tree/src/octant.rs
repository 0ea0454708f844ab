//! The eight octants of a subdivided cube.

use nalgebra::Vector3;

/// One of the eight sub-cubes produced by bisecting a cube along all three
/// axes at once.
///
/// Naming follows the compass-and-depth convention: front/back is ±z,
/// north/south is ±y, east/west is ±x. `FrontNorthEast` is the all-positive
/// octant.
///
/// The declaration order is the canonical order: child arrays are laid out
/// in it, and subdivision and insertion walk children in it. Discriminants
/// double as child-array indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    /// +x, +y, +z
    FrontNorthEast,
    /// -x, +y, +z
    FrontNorthWest,
    /// +x, -y, +z
    FrontSouthEast,
    /// -x, -y, +z
    FrontSouthWest,
    /// +x, +y, -z
    BackNorthEast,
    /// -x, +y, -z
    BackNorthWest,
    /// +x, -y, -z
    BackSouthEast,
    /// -x, -y, -z
    BackSouthWest,
}

impl Octant {
    /// All eight octants, in canonical order.
    pub const ALL: [Octant; 8] = [
        Octant::FrontNorthEast,
        Octant::FrontNorthWest,
        Octant::FrontSouthEast,
        Octant::FrontSouthWest,
        Octant::BackNorthEast,
        Octant::BackNorthWest,
        Octant::BackSouthEast,
        Octant::BackSouthWest,
    ];

    /// Returns the sign vector pointing from a cube's center into this
    /// octant, with components of exactly ±1.
    pub fn direction(self) -> Vector3<f32> {
        let (x, y, z) = match self {
            Octant::FrontNorthEast => (1.0, 1.0, 1.0),
            Octant::FrontNorthWest => (-1.0, 1.0, 1.0),
            Octant::FrontSouthEast => (1.0, -1.0, 1.0),
            Octant::FrontSouthWest => (-1.0, -1.0, 1.0),
            Octant::BackNorthEast => (1.0, 1.0, -1.0),
            Octant::BackNorthWest => (-1.0, 1.0, -1.0),
            Octant::BackSouthEast => (1.0, -1.0, -1.0),
            Octant::BackSouthWest => (-1.0, -1.0, -1.0),
        };
        Vector3::new(x, y, z)
    }

    /// Returns a three-letter label ("FNE" through "BSW"), for overlays and
    /// debug output.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Octant::FrontNorthEast => "FNE",
            Octant::FrontNorthWest => "FNW",
            Octant::FrontSouthEast => "FSE",
            Octant::FrontSouthWest => "FSW",
            Octant::BackNorthEast => "BNE",
            Octant::BackNorthWest => "BNW",
            Octant::BackSouthEast => "BSE",
            Octant::BackSouthWest => "BSW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_octant_once() {
        for (i, octant) in Octant::ALL.iter().enumerate() {
            assert_eq!(*octant as usize, i);
        }
    }

    #[test]
    fn directions_are_sign_vectors() {
        for octant in Octant::ALL {
            let dir = octant.direction();
            assert_eq!(dir.x.abs(), 1.0);
            assert_eq!(dir.y.abs(), 1.0);
            assert_eq!(dir.z.abs(), 1.0);
        }
    }

    #[test]
    fn directions_are_distinct() {
        for a in Octant::ALL {
            for b in Octant::ALL {
                if a != b {
                    assert_ne!(a.direction(), b.direction());
                }
            }
        }
    }

    #[test]
    fn front_north_east_is_all_positive() {
        assert_eq!(
            Octant::FrontNorthEast.direction(),
            Vector3::new(1.0, 1.0, 1.0)
        );
        assert_eq!(
            Octant::BackSouthWest.direction(),
            Vector3::new(-1.0, -1.0, -1.0)
        );
    }
}
