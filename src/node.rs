use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// An integer point on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    pub x: i64,
    pub y: i64,
}

impl Node {
    pub fn new(x: i64, y: i64) -> Node {
        Node { x, y }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Square region spanning `[0, size]` on both axes, bounds inclusive.
///
/// A negative size is kept as given and describes an empty region.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    size: i64,
}

impl Boundary {
    pub fn new(size: i64) -> Boundary {
        Boundary { size }
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of distinct nodes that fit, `(size + 1)^2`.
    pub fn capacity(&self) -> u128 {
        match u128::try_from(self.size) {
            Ok(size) => (size + 1) * (size + 1),
            Err(_) => 0,
        }
    }

    pub fn contains(&self, node: Node) -> bool {
        (0..=self.size).contains(&node.x) && (0..=self.size).contains(&node.y)
    }
}

// Min and max corners, the header line of a node file.
impl Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0 0 {} {}", self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_counts_inclusive_bounds() {
        assert_eq!(Boundary::new(0).capacity(), 1);
        assert_eq!(Boundary::new(10).capacity(), 121);
        assert_eq!(Boundary::new(-5).capacity(), 0);
        assert_eq!(Boundary::new(i64::MAX).capacity(), 1u128 << 126);
    }

    #[test]
    fn contains_is_inclusive() {
        let boundary = Boundary::new(5);
        assert!(boundary.contains(Node::new(0, 0)));
        assert!(boundary.contains(Node::new(5, 5)));
        assert!(!boundary.contains(Node::new(6, 0)));
        assert!(!boundary.contains(Node::new(0, -1)));
        assert!(!Boundary::new(-1).contains(Node::new(0, 0)));
    }

    #[test]
    fn display_matches_file_layout() {
        assert_eq!(Boundary::new(10).to_string(), "0 0 10 10");
        assert_eq!(Boundary::new(-5).to_string(), "0 0 -5 -5");
        assert_eq!(Node::new(3, 4).to_string(), "3 4");
    }
}
