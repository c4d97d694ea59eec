//! Human-readable board rendering, for the non-JSON output path.
//!
//! Mirrors the original solver's `showBits`: an `xlen` by `ylen` grid of
//! `X`/` ` cells, with the Triangle geometry additionally blanking cells
//! above the diagonal.

use foxhole_core::{BitBoard, Geometry, Params};

/// Render `bits` as one line per row, `X` for a present hole and a blank
/// otherwise.
pub fn render_board(params: &Params, bits: BitBoard) -> String {
    let mut out = String::new();
    for y in 0..params.ylen() {
        for x in 0..params.xlen() {
            let cell = if params.geometry() == Geometry::Triangle && x > y {
                ' '
            } else {
                let hole = params.index(x as i32, y as i32);
                if bits.contains(hole) { 'X' } else { ' ' }
            };
            out.push(cell);
            out.push('|');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use foxhole_core::RawParams;

    #[test]
    fn circle_row_has_xlen_cells() {
        let params = Params::resolve(RawParams { xlen: 5, ylen: 1, ..RawParams::default() }).unwrap();
        let board = render_board(&params, BitBoard::universe(5));
        assert_eq!(board.lines().next().unwrap().chars().filter(|&c| c == '|').count(), 5);
    }

    #[test]
    fn triangle_blanks_cells_above_the_diagonal() {
        let params = Params::resolve(RawParams { xlen: 4, ylen: 4, geometry: foxhole_core::Geometry::Triangle, ..RawParams::default() }).unwrap();
        let board = render_board(&params, BitBoard::universe(params.holes()));
        let first_row: Vec<char> = board.lines().next().unwrap().chars().collect();
        // row y=0: only x=0 is in-triangle, the rest must render blank.
        assert_eq!(first_row[0], 'X');
        assert_eq!(first_row[2], ' ');
    }
}
