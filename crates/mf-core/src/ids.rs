use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used for graph positions.
///
/// - `u32` keeps predecessor tables small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        let raw = index.checked_add(1).and_then(NonZeroU32::new);
        Self(raw.expect("index below u32::MAX"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a matrix position.
    #[inline]
    pub fn pos(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Position of a node in the original network (insertion order).
pub type NodeId = Id;
/// Vertex of the split graph; node `i` owns vertices `2i` (in) and `2i+1` (out).
pub type VertexId = Id;

/// In-vertex of an original node: every incoming edge lands here.
#[inline]
pub fn in_vertex(node: NodeId) -> VertexId {
    Id::from_index(2 * node.index())
}

/// Out-vertex of an original node: every outgoing edge leaves from here.
#[inline]
pub fn out_vertex(node: NodeId) -> VertexId {
    Id::from_index(2 * node.index() + 1)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn split_vertices_round_trip(i in 0_u32..1_000_000) {
            let node = NodeId::from_index(i);
            let (vin, vout) = (in_vertex(node), out_vertex(node));
            prop_assert_eq!(vin.index() % 2, 0);
            prop_assert_eq!(vout.index(), vin.index() + 1);
            prop_assert_eq!(vin.index() / 2, i);
        }
    }
}
