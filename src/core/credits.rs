//! Money to credit conversion
//!
//! Fixed bulk schedule: every 5 dollars buy 18 credits, each remaining pair
//! of dollars buys 7 and a single leftover dollar buys 3.

const HIGH_DENOMINATION: u64 = 5;
const HIGH_CREDITS: u64 = 18;
const MID_DENOMINATION: u64 = 2;
const MID_CREDITS: u64 = 7;
const UNIT_CREDITS: u64 = 3;

/// Credits bought by `dollars` whole dollars
pub fn dollars_to_credits(dollars: u64) -> u64 {
    let high = dollars / HIGH_DENOMINATION;
    let dollars = dollars % HIGH_DENOMINATION;
    let mid = dollars / MID_DENOMINATION;
    let dollars = dollars % MID_DENOMINATION;

    high.saturating_mul(HIGH_CREDITS)
        .saturating_add(mid * MID_CREDITS + dollars * UNIT_CREDITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule() {
        assert_eq!(dollars_to_credits(0), 0);
        assert_eq!(dollars_to_credits(1), 3);
        assert_eq!(dollars_to_credits(2), 7);
        assert_eq!(dollars_to_credits(3), 10);
        assert_eq!(dollars_to_credits(4), 14);
        assert_eq!(dollars_to_credits(5), 18);
        assert_eq!(dollars_to_credits(7), 25);
        assert_eq!(dollars_to_credits(8), 28);
        assert_eq!(dollars_to_credits(10), 36);
    }

    #[test]
    fn test_huge_deposit_saturates() {
        assert_eq!(dollars_to_credits(u64::MAX), u64::MAX);
    }
}
