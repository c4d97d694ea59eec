//! Move application: computes the next day's game state from the current
//! game, the hunter's chosen visit pattern, and the still-active poison
//! history.

use foxhole_core::{BitBoard, Topology};

/// Apply one day's hunt.
///
/// `today` is the visit pattern chosen for this day; `poison_window` holds
/// the `poison` most recent visit patterns still masking a hole from holding
/// a fox, most recent (`today`) first. An empty `poison_window` means
/// `poison == 0` — no masking beyond the immediate "a visited hole has no
/// fox left in it this instant" removal below.
///
/// Steps, mirroring the original solver's `calcMove`:
/// 1. Any fox sitting in a visited hole is caught — remove `today`'s holes
///    from the live game.
/// 2. Every surviving fox jumps to every hole its [`Topology`] entry allows.
/// 3. A fox cannot land in any hole visited within the poison window.
pub fn apply(game: BitBoard, today: BitBoard, topology: &Topology, poison_window: &[BitBoard]) -> BitBoard {
    let surviving = game & !today;

    let mut next = BitBoard::NONE;
    for hole in surviving {
        next |= topology.jump(hole);
    }

    for &visited in poison_window {
        next &= !visited;
    }

    next
}
