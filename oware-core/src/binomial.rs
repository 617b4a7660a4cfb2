//! Bijection between 14-tuples of non-negative integers summing to 48 and
//! integers in `[0, C(61,13))`, via the combinatorial number system on
//! multiset compositions (stars and bars). Not wired into `Tables`,
//! `Rules`, or `Game` — documentation-only, mirroring the position-hashing
//! utility the live engine never calls.

const ITEMS: i64 = 48;
const BOXES: i64 = 14;

fn binomial(n: i64, k: i64) -> u128 {
    if n < 0 || k < 0 || k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// Ranks a 14-tuple summing to `ITEMS` into a single integer.
pub fn rank(tuple: &[u32; 14]) -> u128 {
    let mut result: u128 = 0;
    let mut remaining_items = ITEMS;
    for (i, &value) in tuple.iter().enumerate().take(13) {
        let remaining_boxes = BOXES - i as i64 - 1;
        for v in 0..value as i64 {
            result += binomial(remaining_items - v - 1 + remaining_boxes, remaining_boxes);
        }
        remaining_items -= value as i64;
    }
    result
}

/// Inverse of [`rank`].
pub fn unrank(mut index: u128) -> [u32; 14] {
    let mut tuple = [0u32; 14];
    let mut remaining_items = ITEMS;
    for i in 0..13 {
        let remaining_boxes = BOXES - i as i64 - 1;
        let mut value: i64 = 0;
        loop {
            let count = binomial(remaining_items - value - 1 + remaining_boxes, remaining_boxes);
            if index < count || value >= remaining_items {
                break;
            }
            index -= count;
            value += 1;
        }
        tuple[i] = value as u32;
        remaining_items -= value;
    }
    tuple[13] = remaining_items as u32;
    tuple
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_of_initial_board_round_trips() {
        let tuple: [u32; 14] = [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 0, 0];
        let ranked = rank(&tuple);
        assert_eq!(unrank(ranked), tuple);
    }

    #[test]
    fn rank_of_zero_tuple_is_zero() {
        let mut tuple = [0u32; 14];
        tuple[13] = 48;
        assert_eq!(rank(&tuple), 0);
    }

    #[test]
    fn rank_is_within_bounds() {
        let tuple: [u32; 14] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 48];
        let upper_bound = binomial(61, 13);
        assert!(rank(&tuple) < upper_bound);
    }
}
