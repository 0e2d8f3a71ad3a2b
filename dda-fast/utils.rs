/// Utility functions for the FAST segment test

/// Check if there are at least `min_count` consecutive set bits in the circular
/// 16-bit mask, using rotations instead of a scan
pub fn has_consecutive_bits(mask: u16, min_count: usize) -> bool {
    if min_count > 16 || min_count == 0 {
        return false;
    }

    // For a run of length n: mask & rotl(mask, 1) & ... & rotl(mask, n - 1)
    let mut test_mask = mask;
    for i in 1..min_count {
        test_mask &= mask.rotate_left(i as u32);
        if test_mask == 0 {
            return false;
        }
    }

    test_mask != 0
}
