//! Per-hole adjacency ("jump") tables for every geometry/connection pair.

use crate::bitboard::BitBoard;
use crate::params::{Connection, Geometry, Params};

/// Precomputed `hole -> reachable holes` map for a validated [`Params`].
///
/// Built once per run and never mutated. Indexing is by hole number
/// (`0..holes`); `jump(h)` never contains `h` itself.
#[derive(Debug, Clone)]
pub struct Topology {
    jumps: Vec<BitBoard>,
}

impl Topology {
    /// Build the adjacency table for `params`, reproducing the puzzle's
    /// original per-geometry neighbor rules exactly (including Grid's
    /// row-parity-dependent Hexagonal diagonals and Triangle's boundary
    /// clipping).
    pub fn build(params: &Params) -> Topology {
        let holes = params.holes() as usize;
        let mut jumps = vec![BitBoard::NONE; holes];

        match params.geometry() {
            Geometry::Circle => Self::fill_circle(params, &mut jumps),
            Geometry::Grid => Self::fill_grid(params, &mut jumps),
            Geometry::Triangle => Self::fill_triangle(params, &mut jumps),
        }

        Topology { jumps }
    }

    /// Reachable holes from `hole`.
    pub fn jump(&self, hole: u8) -> BitBoard {
        self.jumps[hole as usize]
    }

    pub fn len(&self) -> usize {
        self.jumps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty()
    }

    fn fill_circle(p: &Params, jumps: &mut [BitBoard]) {
        let (xlen, ylen) = (p.xlen() as i32, p.ylen() as i32);
        for y in 0..ylen {
            for x in 0..xlen {
                let here = p.wrap_index(x, y) as usize;
                let mut j = BitBoard::NONE;
                match p.connection() {
                    Connection::Hexagonal => {
                        j = j.with(p.wrap_index(x - 1, y));
                        j = j.with(p.wrap_index(x + 1, y));
                        if y > 0 {
                            j = j.with(p.wrap_index(x + (y & 1) - 1, y - 1));
                            j = j.with(p.wrap_index(x + (y & 1), y - 1));
                        }
                        if y < ylen - 1 {
                            j = j.with(p.wrap_index(x + (y & 1) - 1, y + 1));
                            j = j.with(p.wrap_index(x + (y & 1), y + 1));
                        }
                    }
                    Connection::Rectangular => {
                        j = j.with(p.wrap_index(x - 1, y));
                        j = j.with(p.wrap_index(x + 1, y));
                        if y > 0 {
                            j = j.with(p.wrap_index(x, y - 1));
                        }
                        if y < ylen - 1 {
                            j = j.with(p.wrap_index(x, y + 1));
                        }
                    }
                    Connection::Octagonal => {
                        j = j.with(p.wrap_index(x - 1, y));
                        j = j.with(p.wrap_index(x + 1, y));
                        if y > 0 {
                            j = j.with(p.wrap_index(x - 1, y - 1));
                            j = j.with(p.wrap_index(x, y - 1));
                            j = j.with(p.wrap_index(x + 1, y - 1));
                        }
                        if y < ylen - 1 {
                            j = j.with(p.wrap_index(x - 1, y + 1));
                            j = j.with(p.wrap_index(x, y + 1));
                            j = j.with(p.wrap_index(x + 1, y + 1));
                        }
                    }
                }
                jumps[here] = j;
            }
        }
    }

    fn fill_grid(p: &Params, jumps: &mut [BitBoard]) {
        let (xlen, ylen) = (p.xlen() as i32, p.ylen() as i32);
        for y in 0..ylen {
            for x in 0..xlen {
                let here = p.index(x, y) as usize;
                let mut j = BitBoard::NONE;
                match p.connection() {
                    Connection::Hexagonal => {
                        if x > 0 {
                            j = j.with(p.index(x - 1, y));
                        }
                        if x < xlen - 1 {
                            j = j.with(p.index(x + 1, y));
                        }
                        if y > 0 {
                            if y & 1 != 0 {
                                j = j.with(p.index(x, y - 1));
                                if x < xlen - 1 {
                                    j = j.with(p.index(x + 1, y - 1));
                                }
                            } else {
                                if x > 0 {
                                    j = j.with(p.index(x - 1, y - 1));
                                }
                                j = j.with(p.index(x, y - 1));
                            }
                        }
                        if y < ylen - 1 {
                            if y & 1 != 0 {
                                j = j.with(p.index(x, y + 1));
                                if x < xlen - 1 {
                                    j = j.with(p.index(x + 1, y + 1));
                                }
                            } else {
                                if x > 0 {
                                    j = j.with(p.index(x - 1, y + 1));
                                }
                                j = j.with(p.index(x, y + 1));
                            }
                        }
                    }
                    Connection::Rectangular => {
                        if x > 0 {
                            j = j.with(p.index(x - 1, y));
                        }
                        if x < xlen - 1 {
                            j = j.with(p.index(x + 1, y));
                        }
                        if y > 0 {
                            j = j.with(p.index(x, y - 1));
                        }
                        if y < ylen - 1 {
                            j = j.with(p.index(x, y + 1));
                        }
                    }
                    Connection::Octagonal => {
                        if x > 0 {
                            if y > 0 {
                                j = j.with(p.index(x - 1, y - 1));
                            }
                            j = j.with(p.index(x - 1, y));
                            if y < ylen - 1 {
                                j = j.with(p.index(x - 1, y + 1));
                            }
                        }
                        if y > 0 {
                            j = j.with(p.index(x, y - 1));
                        }
                        if y < ylen - 1 {
                            j = j.with(p.index(x, y + 1));
                        }
                        if x < xlen - 1 {
                            if y > 0 {
                                j = j.with(p.index(x + 1, y - 1));
                            }
                            j = j.with(p.index(x + 1, y));
                            if y < ylen - 1 {
                                j = j.with(p.index(x + 1, y + 1));
                            }
                        }
                    }
                }
                jumps[here] = j;
            }
        }
    }

    fn fill_triangle(p: &Params, jumps: &mut [BitBoard]) {
        let xlen = p.xlen() as i32;
        let ylen = p.ylen() as i32;
        for y in 0..xlen {
            for x in 0..=y {
                let here = p.triangle_index(x, y) as usize;
                let mut j = BitBoard::NONE;
                match p.connection() {
                    Connection::Hexagonal => {
                        if x > 0 {
                            j = j.with(p.triangle_index(x - 1, y));
                        }
                        if x < y {
                            j = j.with(p.triangle_index(x + 1, y));
                        }
                        if y > 0 {
                            if x > 0 {
                                j = j.with(p.triangle_index(x - 1, y - 1));
                            }
                            if x < y {
                                j = j.with(p.triangle_index(x, y - 1));
                            }
                        }
                        if y < xlen - 1 {
                            j = j.with(p.triangle_index(x, y + 1));
                            j = j.with(p.triangle_index(x + 1, y + 1));
                        }
                    }
                    Connection::Rectangular => {
                        if x > 0 {
                            j = j.with(p.triangle_index(x - 1, y));
                        }
                        if x < y {
                            j = j.with(p.triangle_index(x + 1, y));
                            j = j.with(p.triangle_index(x, y - 1));
                        }
                        if y < ylen - 1 {
                            j = j.with(p.triangle_index(x, y + 1));
                        }
                    }
                    Connection::Octagonal => {
                        if x > 0 {
                            j = j.with(p.triangle_index(x - 1, y));
                            if y > 0 {
                                j = j.with(p.triangle_index(x - 1, y - 1));
                            }
                            if y < ylen - 1 {
                                j = j.with(p.triangle_index(x - 1, y + 1));
                            }
                        }
                        if x < y {
                            j = j.with(p.triangle_index(x + 1, y));
                            j = j.with(p.triangle_index(x, y - 1));
                            if x < y - 1 {
                                j = j.with(p.triangle_index(x + 1, y - 1));
                            }
                        }
                        if y < ylen - 1 {
                            j = j.with(p.triangle_index(x, y + 1));
                            j = j.with(p.triangle_index(x + 1, y + 1));
                        }
                    }
                }
                jumps[here] = j;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParams;

    fn build(geometry: Geometry, connection: Connection, xlen: u32, ylen: u32) -> (Params, Topology) {
        let params = Params::resolve(RawParams {
            xlen,
            ylen,
            geometry,
            connection,
            ..RawParams::default()
        })
        .unwrap();
        let topo = Topology::build(&params);
        (params, topo)
    }

    #[test]
    fn no_self_loops_and_stays_in_bounds() {
        for geometry in [Geometry::Circle, Geometry::Grid, Geometry::Triangle] {
            for connection in [Connection::Rectangular, Connection::Hexagonal, Connection::Octagonal] {
                let (params, topo) = build(geometry, connection, 5, 3);
                let universe = BitBoard::universe(params.holes());
                for h in 0..topo.len() as u8 {
                    let j = topo.jump(h);
                    assert!(!j.contains(h), "{geometry:?}/{connection:?} hole {h} jumps to itself");
                    assert_eq!(j & !universe, BitBoard::NONE);
                }
            }
        }
    }

    #[test]
    fn circle_rectangular_wraps_x() {
        let (params, topo) = build(Geometry::Circle, Connection::Rectangular, 5, 1);
        // Single row: hole 0's left wraps to hole 4, right is hole 1.
        let j = topo.jump(0);
        assert!(j.contains(params.index(4, 0)));
        assert!(j.contains(params.index(1, 0)));
        assert_eq!(j.count(), 2);
    }

    #[test]
    fn grid_rectangular_corner_has_two_neighbors() {
        let (_, topo) = build(Geometry::Grid, Connection::Rectangular, 3, 3);
        assert_eq!(topo.jump(0).count(), 2);
    }

    #[test]
    fn triangle_apex_has_no_left_or_above() {
        let (_, topo) = build(Geometry::Triangle, Connection::Rectangular, 4, 4);
        // hole 0 is (x=0, y=0): the apex, only a "below" neighbor.
        assert_eq!(topo.jump(0).count(), 1);
    }
}
