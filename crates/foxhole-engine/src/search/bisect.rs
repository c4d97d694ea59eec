//! Iterative-deepening day-limit search: finds the minimum day count a
//! solution exists for, without ever probing more days than necessary.
//!
//! Ported field-for-field from the original solver's `Bisect` state struct
//! and `Bisector` function: an initial unbounded doubling phase finds *some*
//! working upper bound, then a classic bisection narrows it to the minimum.

/// Hard ceiling on probed day counts, matching the original's `MaxDays`.
pub const MAX_DAYS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initial,
    Unbounded,
    Bounded,
}

/// `{known_bad, known_good, current_max, increment, phase}` from `spec.md`'s
/// data model, directly.
#[derive(Debug, Clone)]
pub struct Bisector {
    phase: Phase,
    known_bad: u32,
    known_good: Option<u32>,
    current_max: u32,
    increment: u32,
    max: u32,
}

impl Bisector {
    /// `increment_seed` is the original's `(holes + visits - 1) / visits` —
    /// a day count guaranteed to make at least `holes` visits possible.
    pub fn new(increment_seed: u32) -> Bisector {
        Bisector {
            phase: Phase::Initial,
            known_bad: 0,
            known_good: None,
            current_max: 0,
            increment: increment_seed,
            max: MAX_DAYS,
        }
    }

    pub fn known_bad(&self) -> u32 {
        self.known_bad
    }

    pub fn known_good(&self) -> Option<u32> {
        self.known_good
    }

    /// Advance the state machine given the outcome of the last probe
    /// (`found = Some(day)` on a win, `None` otherwise), and report the next
    /// day limit to probe. `None` means bisection has converged: the
    /// innermost `known_good` (if any) is the minimum solvable day count.
    pub fn next(&mut self, found: Option<u32>) -> Option<u32> {
        match self.phase {
            Phase::Initial => {
                self.known_bad = 0;
                self.known_good = None;
                self.phase = Phase::Unbounded;
            }
            Phase::Unbounded => {
                if let Some(day) = found {
                    self.phase = Phase::Bounded;
                    self.known_good = Some(day);
                    self.increment = (day - self.known_bad + 1) / 2;
                } else {
                    self.known_bad = self.current_max;
                    self.increment *= 2;
                    let real_limit = self.max - self.known_bad;
                    self.increment = self.increment.min(real_limit);
                }
            }
            Phase::Bounded => {
                if let Some(day) = found {
                    self.known_good = Some(day);
                } else {
                    self.known_bad = self.current_max;
                }
                self.increment = (self.known_good.unwrap() - self.known_bad) / 2;
            }
        }

        if self.increment < 1 {
            None
        } else {
            self.current_max = self.known_bad + self.increment;
            Some(self.current_max)
        }
    }
}
