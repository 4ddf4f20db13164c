/// Slots elapsed since the request, zero if the clock reads earlier.
pub fn slots_elapsed(request_slot: u64, current_slot: u64) -> u64 {
    current_slot.saturating_sub(request_slot)
}

/// A stalled request can be refunded once `refund_delay_slots` have passed.
pub fn refund_unlocked(request_slot: u64, current_slot: u64, refund_delay_slots: u64) -> bool {
    slots_elapsed(request_slot, current_slot) >= refund_delay_slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1_000, 1_000, 150, false)]
    #[case(1_000, 1_149, 150, false)]
    #[case(1_000, 1_150, 150, true)]
    #[case(1_000, 9_999, 150, true)]
    #[case(1_000, 500, 150, false)]
    #[case(0, u64::MAX, u64::MAX, true)]
    fn test_refund_unlocked(
        #[case] request_slot: u64,
        #[case] current_slot: u64,
        #[case] delay: u64,
        #[case] expected: bool,
    ) {
        assert_eq!(refund_unlocked(request_slot, current_slot, delay), expected);
    }

    #[test]
    fn test_unlock_is_monotonic_in_time() {
        let mut unlocked = false;
        for slot in 100..400 {
            let now = refund_unlocked(100, slot, 150);
            assert!(!unlocked || now, "refund relocked at slot {slot}");
            unlocked = now;
        }
        assert!(unlocked);
    }
}
