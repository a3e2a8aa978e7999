//! Marching squares case table.
//!
//! Corner membership bits: top-left = 1, top-right = 2, bottom-right = 4,
//! bottom-left = 8. Rows grow downward, so "top" is the smaller row index.

/// A cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// top-left → top-right
    Top,
    /// top-right → bottom-right
    Right,
    /// bottom-left → bottom-right
    Bottom,
    /// top-left → bottom-left
    Left,
}

/// Pair of edges joined by one segment.
pub type EdgePair = (Edge, Edge);

/// Segment topology for one membership mask.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellCase {
    /// All corners on the same side of the band boundary.
    Empty,
    Single(EdgePair),
    /// Two diagonal corners inside. `joined` keeps the inside corners
    /// connected through the cell centre; `split` separates them.
    Saddle {
        joined: [EdgePair; 2],
        split: [EdgePair; 2],
    },
}

use Edge::{Bottom, Left, Right, Top};

/// Cutting off top-left and bottom-right corners.
const CUT_TL_BR: [EdgePair; 2] = [(Left, Top), (Right, Bottom)];
/// Cutting off top-right and bottom-left corners.
const CUT_TR_BL: [EdgePair; 2] = [(Top, Right), (Bottom, Left)];

pub static CASES: [CellCase; 16] = [
    CellCase::Empty,                 // 0
    CellCase::Single((Left, Top)),   // 1: tl
    CellCase::Single((Top, Right)),  // 2: tr
    CellCase::Single((Left, Right)), // 3: tl tr
    CellCase::Single((Right, Bottom)), // 4: br
    CellCase::Saddle {
        joined: CUT_TR_BL,
        split: CUT_TL_BR,
    }, // 5: tl br
    CellCase::Single((Top, Bottom)),   // 6: tr br
    CellCase::Single((Left, Bottom)),  // 7: tl tr br
    CellCase::Single((Bottom, Left)),  // 8: bl
    CellCase::Single((Top, Bottom)),   // 9: tl bl
    CellCase::Saddle {
        joined: CUT_TL_BR,
        split: CUT_TR_BL,
    }, // 10: tr bl
    CellCase::Single((Right, Bottom)), // 11: tl tr bl
    CellCase::Single((Left, Right)),   // 12: br bl
    CellCase::Single((Top, Right)),    // 13: tl br bl
    CellCase::Single((Left, Top)),     // 14: tr br bl
    CellCase::Empty,                   // 15
];

/// Membership mask for the four corners of a cell.
#[inline]
pub fn mask(tl: bool, tr: bool, br: bool, bl: bool) -> usize {
    (tl as usize) | ((tr as usize) << 1) | ((br as usize) << 2) | ((bl as usize) << 3)
}

/// Edge pairs for a mask, resolving saddles with `centre_inside`.
///
/// A saddle joins its inside corners whenever the cell mean lies in the
/// band, regardless of whether the outside corners sit below `lower` or
/// above `upper`.
pub fn segments_for(mask: usize, centre_inside: bool) -> &'static [EdgePair] {
    match &CASES[mask & 0xF] {
        CellCase::Empty => &[],
        CellCase::Single(pair) => std::slice::from_ref(pair),
        CellCase::Saddle { joined, split } => {
            if centre_inside {
                joined
            } else {
                split
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(edge: Edge) -> [usize; 2] {
        // corner bit indices joined by each edge
        match edge {
            Top => [0, 1],
            Right => [1, 2],
            Bottom => [3, 2],
            Left => [0, 3],
        }
    }

    /// Every segment must join two edges whose corners straddle the boundary.
    #[test]
    fn test_case_edges_straddle_boundary() {
        for m in 0..16usize {
            for centre in [false, true] {
                for &(a, b) in segments_for(m, centre) {
                    for edge in [a, b] {
                        let [c0, c1] = corners(edge);
                        let in0 = (m >> c0) & 1;
                        let in1 = (m >> c1) & 1;
                        assert_ne!(in0, in1, "mask {} edge {:?} does not cross", m, edge);
                    }
                }
            }
        }
    }

    #[test]
    fn test_each_crossed_edge_used_once() {
        for m in 0..16usize {
            for centre in [false, true] {
                let mut used = Vec::new();
                for &(a, b) in segments_for(m, centre) {
                    used.push(a);
                    used.push(b);
                }
                let crossed = [Top, Right, Bottom, Left]
                    .into_iter()
                    .filter(|e| {
                        let [c0, c1] = corners(*e);
                        ((m >> c0) & 1) != ((m >> c1) & 1)
                    })
                    .count();
                assert_eq!(used.len(), crossed, "mask {}", m);
            }
        }
    }

    #[test]
    fn test_saddle_choice() {
        assert_eq!(segments_for(5, true), &CUT_TR_BL);
        assert_eq!(segments_for(5, false), &CUT_TL_BR);
        assert_eq!(segments_for(10, true), &CUT_TL_BR);
        assert_eq!(segments_for(10, false), &CUT_TR_BL);
    }

    #[test]
    fn test_mask_bits() {
        assert_eq!(mask(true, false, false, false), 1);
        assert_eq!(mask(false, false, true, false), 4);
        assert_eq!(mask(true, true, true, true), 15);
    }
}
