//! Hand-written JSON result emission.
//!
//! Mirrors the original solver's `jsonOut`: field-by-field `write!` calls in
//! a fixed key order, no trailing comma on the last key. No `serde_json`
//! dependency — the shape is small and fixed, and writing it out directly
//! keeps every emitted byte traceable to the line that produced it, the same
//! tradeoff the original makes with raw `fprintf`.

use std::fmt::Write as _;

use foxhole_core::{BitBoard, Connection, Geometry, Params};
use foxhole_engine::SearchResult;

fn geometry_name(g: Geometry) -> &'static str {
    match g {
        Geometry::Circle => "circle",
        Geometry::Grid => "grid",
        Geometry::Triangle => "triangle",
    }
}

fn connection_name(c: Connection) -> &'static str {
    match c {
        Connection::Rectangular => "rectangular",
        Connection::Hexagonal => "hexagonal",
        Connection::Octagonal => "octagonal",
    }
}

fn move_to_json(mv: BitBoard) -> String {
    let holes: Vec<String> = mv.into_iter().map(|h| h.to_string()).collect();
    format!("[{}]", holes.join(","))
}

/// Render `result` for `params` as a single JSON object, matching the
/// original's key order and "solved": false short-circuit.
pub fn render(params: &Params, result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = write!(out, "{{");
    let _ = write!(out, "\"length\":{},", params.xlen());
    let _ = write!(out, "\"width\":{},", params.ylen());
    let _ = write!(out, "\"visits\":{},", params.visits());
    let _ = write!(out, "\"poison_days\":{},", params.poison());
    let _ = write!(out, "\"connection\":\"{}\",", connection_name(params.connection()));
    let _ = write!(out, "\"geometry\":\"{}\",", geometry_name(params.geometry()));

    if result.solved {
        let days = result.days.expect("solved implies a day count");
        let _ = write!(out, "\"days\":{},", days);
        let _ = write!(out, "\"moves\":[");
        for (i, mv) in result.moves.iter().enumerate() {
            if i > 0 {
                let _ = write!(out, ",");
            }
            let _ = write!(out, "{}", move_to_json(*mv));
        }
        let _ = write!(out, "],");
        let _ = write!(out, "\"solved\":true");
    } else {
        let _ = write!(out, "\"solved\":false");
    }

    let _ = write!(out, "}}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use foxhole_core::{Geometry as G, RawParams};

    #[test]
    fn unsolved_result_has_no_days_or_moves_keys() {
        let params = Params::resolve(RawParams { xlen: 4, ylen: 1, geometry: G::Circle, ..RawParams::default() }).unwrap();
        let result = SearchResult { solved: false, days: None, moves: Vec::new() };
        let json = render(&params, &result);
        assert!(json.ends_with("\"solved\":false}"));
        assert!(!json.contains("\"days\""));
        assert!(!json.contains("\"moves\""));
    }

    #[test]
    fn solved_result_lists_each_move_as_a_hole_array() {
        let params = Params::resolve(RawParams { xlen: 5, ylen: 1, geometry: G::Circle, ..RawParams::default() }).unwrap();
        let result = SearchResult {
            solved: true,
            days: Some(2),
            moves: vec![BitBoard::NONE.with(0).with(1), BitBoard::NONE.with(2)],
        };
        let json = render(&params, &result);
        assert!(json.contains("\"days\":2"));
        assert!(json.contains("\"moves\":[[0,1],[2]]"));
        assert!(json.ends_with("\"solved\":true}"));
    }

    #[test]
    fn last_key_has_no_trailing_comma() {
        let params = Params::resolve(RawParams::default()).unwrap();
        let result = SearchResult { solved: false, days: None, moves: Vec::new() };
        let json = render(&params, &result);
        assert!(!json.contains(",}"));
    }
}
