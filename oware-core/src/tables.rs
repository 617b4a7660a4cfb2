//! Precomputed lookup tables: sowing sequences and harvest chains. Built
//! once, from pure functions of the board geometry, and shared by
//! reference from `Rules`. See `DESIGN.md` for why `Reaper` (the
//! Grand-Slam forbidden-position table) does not appear here: capture
//! and Grand-Slam detection are resolved by direct simulation instead.

use lazy_static::lazy_static;

use crate::board::NUM_HOUSES;

/// Upper bound on seeds a single house can ever hold; also the length of
/// each `SowSeq` row, which is long enough to cover multiple laps around
/// the board without ever needing to wrap the table itself.
pub const MAX_SEEDS: usize = 48;

pub struct Tables {
    /// `sow_seq[house][k]` is the (k+1)-th pit visited when sowing from
    /// `house`, skipping `house` itself.
    pub sow_seq: [[usize; MAX_SEEDS]; NUM_HOUSES],
    /// `harvest[last]` is the chain of pits walked when gathering a
    /// capture that ended at `last`: `last, last-1, ..., row_start`.
    pub harvest: [Vec<usize>; NUM_HOUSES],
}

impl Tables {
    fn build() -> Tables {
        Tables {
            sow_seq: build_sow_seq(),
            harvest: build_harvest(),
        }
    }
}

lazy_static! {
    pub static ref TABLES: Tables = Tables::build();
}

fn build_sow_seq() -> [[usize; MAX_SEEDS]; NUM_HOUSES] {
    let mut table = [[0usize; MAX_SEEDS]; NUM_HOUSES];
    for house in 0..NUM_HOUSES {
        let mut pit = house;
        for k in 0..MAX_SEEDS {
            loop {
                pit = (pit + 1) % NUM_HOUSES;
                if pit != house {
                    break;
                }
            }
            table[house][k] = pit;
        }
    }
    table
}

fn build_harvest() -> [Vec<usize>; NUM_HOUSES] {
    let mut chains: [Vec<usize>; NUM_HOUSES] = Default::default();
    for h in 0..NUM_HOUSES {
        let row_start = if h < 6 { 0 } else { 6 };
        let mut chain = Vec::new();
        let mut p = h;
        loop {
            chain.push(p);
            if p == row_start {
                break;
            }
            p -= 1;
        }
        chains[h] = chain;
    }
    chains
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sow_seq_never_revisits_the_source_house() {
        for house in 0..NUM_HOUSES {
            assert!(TABLES.sow_seq[house].iter().all(|&pit| pit != house));
        }
    }

    #[test]
    fn sow_seq_only_visits_playable_houses() {
        for house in 0..NUM_HOUSES {
            assert!(TABLES.sow_seq[house].iter().all(|&pit| pit < NUM_HOUSES));
        }
    }

    #[test]
    fn harvest_chains_stay_within_one_row() {
        for h in 0..NUM_HOUSES {
            let chain = &TABLES.harvest[h];
            let row_start = if h < 6 { 0 } else { 6 };
            let row_end = if h < 6 { 6 } else { 12 };
            assert!(chain.iter().all(|&p| p >= row_start && p < row_end));
            assert_eq!(chain[0], h);
            assert_eq!(*chain.last().unwrap(), row_start);
        }
    }
}
