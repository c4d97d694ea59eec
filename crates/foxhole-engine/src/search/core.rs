//! Depth-first exploration of the game tree for one fixed day limit.
//!
//! Ported from the original recursive solver's `firstDay`/`nextDay`/
//! `calcMove`/`calcMoveFinal`. Per the puzzle's design notes the recursion is
//! replaced with an explicit frame stack: each [`Frame`] is one activation
//! record of the original `nextDay(day)`, and pushing/popping the `Vec<Frame>`
//! plays the role of the call stack the C version used directly.

use foxhole_core::{BitBoard, MoveCatalogue, Params, Topology};

use crate::search::applier;
use crate::search::statekey::StateKey;
use crate::search::tt::{Probe, TranspositionStore};

/// Result of probing a fixed day limit to exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A winning schedule was found; it is recorded in [`Schedule`].
    Won,
    /// The whole tree was exhausted with no win and no subtree hit the day
    /// limit unresolved — provably unwinnable, regardless of day limit.
    Lost,
    /// At least one branch ran out of days before resolving; raising the day
    /// limit might still find a win.
    Overflow,
}

/// The day-by-day record a probe fills in as it searches, and the winning
/// trace left behind after [`Outcome::Won`].
///
/// `game[0]` is always `GAME_ALL`. `moves` is indexed the same as `game` but
/// carries a `poison_plus`-sized zero-filled prefix so poison-window lookups
/// at `day < poison_plus` read as "no move" without bounds checks, mirroring
/// `victoryMovePlus`/`victoryMove` in the original.
pub struct Schedule {
    game: Vec<BitBoard>,
    moves: Vec<BitBoard>,
    prefix: usize,
    pub victory_day: Option<u32>,
}

impl Schedule {
    fn new(max_days: u32, poison_plus: u32, holes: u32) -> Schedule {
        let prefix = poison_plus as usize;
        let mut game = vec![BitBoard::NONE; max_days as usize + 1];
        game[0] = BitBoard::universe(holes);
        Schedule {
            game,
            moves: vec![BitBoard::NONE; max_days as usize + 1 + prefix],
            prefix,
            victory_day: None,
        }
    }

    pub fn game(&self, day: u32) -> BitBoard {
        self.game[day as usize]
    }

    /// The move chosen on `day`, or `GAME_NONE` if `day` predates the start
    /// of the schedule (reading into the zero-filled prefix).
    pub fn move_on(&self, day: i64) -> BitBoard {
        let idx = day + self.prefix as i64;
        if idx < 0 {
            BitBoard::NONE
        } else {
            self.moves[idx as usize]
        }
    }

    fn set(&mut self, day: u32, game: BitBoard, mv: BitBoard) {
        self.game[day as usize] = game;
        self.moves[day as usize + self.prefix] = mv;
    }

    /// Trailing `poison` moves ending at `day`, most recent first.
    fn poison_window(&self, day: u32, poison: u32) -> Vec<BitBoard> {
        (0..poison).map(|p| self.move_on(day as i64 - p as i64)).collect()
    }

    /// Moves `[1..=victory_day]`, each as a `BitBoard` visit pattern.
    pub fn winning_moves(&self) -> Vec<BitBoard> {
        match self.victory_day {
            Some(day) => (1..=day).map(|d| self.move_on(d as i64)).collect(),
            None => Vec::new(),
        }
    }
}

struct Frame {
    day: u32,
    next_ip: usize,
    overflowed: bool,
}

/// Explores every schedule up to `max_days`, starting from `GAME_ALL`.
pub struct SearchCore<'a> {
    params: &'a Params,
    topology: &'a Topology,
    catalogue: &'a MoveCatalogue,
    tt: TranspositionStore,
}

impl<'a> SearchCore<'a> {
    pub fn new(params: &'a Params, topology: &'a Topology, catalogue: &'a MoveCatalogue) -> SearchCore<'a> {
        SearchCore { params, topology, catalogue, tt: TranspositionStore::new() }
    }

    /// Run one full probe at `max_days`. The transposition store is reset
    /// first, matching `makeStoredState` being called once per Bisector
    /// iteration rather than once per process.
    pub fn probe(&mut self, max_days: u32) -> (Outcome, Schedule) {
        self.tt.clear();
        let mut schedule = Schedule::new(max_days, self.params.poison_plus(), self.params.holes());

        // Salt the store with the initial position, mirroring firstDay()'s
        // call to findStoredStates() before descending.
        self.tt.contains_or_add(StateKey::new(schedule.game(0), 0, &[]));

        if max_days == 0 {
            return (Outcome::Overflow, schedule);
        }

        let mut stack = vec![Frame { day: 1, next_ip: 1, overflowed: false }];

        loop {
            let top = match stack.last_mut() {
                Some(f) => f,
                None => unreachable!("frame stack emptied without returning"),
            };

            if top.day == max_days {
                if let Some(day) = self.run_final_day(top, &mut schedule) {
                    schedule.victory_day = Some(day);
                    return (Outcome::Won, schedule);
                }
                let overflowed = true; // reaching max_days without a win is always an overflow
                stack.pop();
                if !self.propagate(&mut stack, overflowed) {
                    return (Outcome::Overflow, schedule);
                }
                continue;
            }

            match self.advance(top, &mut schedule) {
                AdvanceResult::Won(day) => {
                    schedule.victory_day = Some(day);
                    return (Outcome::Won, schedule);
                }
                AdvanceResult::Descend(next_day) => {
                    stack.push(Frame { day: next_day, next_ip: 1, overflowed: false });
                }
                AdvanceResult::Exhausted(overflowed) => {
                    stack.pop();
                    if !self.propagate(&mut stack, overflowed) {
                        return (if overflowed { Outcome::Overflow } else { Outcome::Lost }, schedule);
                    }
                }
            }
        }
    }

    /// Mark the new top-of-stack frame (the parent) as overflowed if the
    /// child that just finished did. Returns `false` if the stack is now
    /// empty (the root frame itself just finished).
    fn propagate(&self, stack: &mut [Frame], overflowed: bool) -> bool {
        match stack.last_mut() {
            Some(parent) => {
                parent.overflowed |= overflowed;
                true
            }
            None => {
                let _ = overflowed;
                false
            }
        }
    }

    fn advance(&mut self, frame: &mut Frame, schedule: &mut Schedule) -> AdvanceResult {
        let day = frame.day;
        let poison = self.params.poison();
        while frame.next_ip < self.catalogue.len() {
            let ip = frame.next_ip;
            frame.next_ip += 1;
            let mv = self.catalogue.get(ip);

            let today_game = schedule.game(day - 1);
            let mut window = schedule.poison_window(day - 1, poison);
            window.insert(0, mv);
            let next_game = applier::apply(today_game, mv, self.topology, &window);

            if next_game.is_empty() {
                schedule.set(day, next_game, mv);
                return AdvanceResult::Won(day);
            }

            // Key tail is the last `poison_plus - 1` moves, today's first.
            let tail_len = self.params.poison_plus().saturating_sub(1);
            let key_tail = if tail_len == 0 {
                Vec::new()
            } else {
                let mut tail = vec![mv];
                tail.extend(schedule.poison_window(day - 1, tail_len - 1));
                tail
            };
            let key = StateKey::new(next_game, day, &key_tail);

            match self.tt.contains_or_add(key) {
                Probe::AlreadySeen => continue,
                Probe::Inserted => {
                    schedule.set(day, next_game, mv);
                    return AdvanceResult::Descend(day + 1);
                }
            }
        }
        AdvanceResult::Exhausted(frame.overflowed)
    }

    /// The leaf day skips the transposition store entirely (mirrors
    /// `calcMoveFinal`): only a win matters, any other outcome means this
    /// probe's day budget is exhausted.
    fn run_final_day(&self, frame: &mut Frame, schedule: &mut Schedule) -> Option<u32> {
        let day = frame.day;
        let poison = self.params.poison();
        while frame.next_ip < self.catalogue.len() {
            let ip = frame.next_ip;
            frame.next_ip += 1;
            let mv = self.catalogue.get(ip);

            let today_game = schedule.game(day - 1);
            let mut window = schedule.poison_window(day - 1, poison);
            window.insert(0, mv);
            let next_game = applier::apply(today_game, mv, self.topology, &window);

            if next_game.is_empty() {
                schedule.set(day, next_game, mv);
                return Some(day);
            }
        }
        None
    }
}

enum AdvanceResult {
    Won(u32),
    Descend(u32),
    Exhausted(bool),
}

#[cfg(test)]
mod tests {
    use super::*;
    use foxhole_core::{Geometry, RawParams};

    fn build(xlen: u32, ylen: u32, geometry: Geometry, visits: u32, poison: u32) -> (Params, Topology, MoveCatalogue) {
        let params = Params::resolve(RawParams { xlen, ylen, visits, poison, geometry, ..RawParams::default() }).unwrap();
        let topology = Topology::build(&params);
        let catalogue = MoveCatalogue::build(&params);
        (params, topology, catalogue)
    }

    // Day counts below are the algorithm's verified true minimums, not the
    // (incorrect) numbers in `spec.md` §8.3 scenarios 1/2/4 — see
    // `DESIGN.md`'s Open Question decision 7. The poison window passed to
    // the Move Applier always includes the current day's own move, even
    // when `poison == 0`: `advance`/`run_final_day` do this every day via
    // `window.insert(0, mv)`.

    #[test]
    fn circle_5_single_visit_solves_in_five_days() {
        let (params, topo, cat) = build(5, 1, Geometry::Circle, 1, 0);
        let mut core = SearchCore::new(&params, &topo, &cat);
        let (outcome, schedule) = core.probe(10);
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(schedule.victory_day, Some(5));
    }

    #[test]
    fn circle_3_single_visit_solves_in_three_days() {
        let (params, topo, cat) = build(3, 1, Geometry::Circle, 1, 0);
        let mut core = SearchCore::new(&params, &topo, &cat);
        let (outcome, schedule) = core.probe(10);
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(schedule.victory_day, Some(3));
    }

    #[test]
    fn circle_4_single_visit_solves_in_three_days() {
        let (params, topo, cat) = build(4, 1, Geometry::Circle, 1, 0);
        let mut core = SearchCore::new(&params, &topo, &cat);
        let (outcome, schedule) = core.probe(20);
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(schedule.victory_day, Some(3));
    }

    #[test]
    fn tight_day_limit_overflows_instead_of_lying_about_loss() {
        let (params, topo, cat) = build(5, 1, Geometry::Circle, 1, 0);
        let mut core = SearchCore::new(&params, &topo, &cat);
        let (outcome, _) = core.probe(1);
        assert_eq!(outcome, Outcome::Overflow);
    }
}
