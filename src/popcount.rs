//! Population count helpers.

/// Number of set bits in `x`, computed with the classic SWAR reduction
/// (see <https://en.wikipedia.org/wiki/Hamming_weight>).
#[inline]
pub const fn set_bit_count(mut x: u64) -> u32 {
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x + (x >> 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    (x.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}

/// Number of set bits across a limb slice.
pub fn set_bit_count_of(limbs: &[u64]) -> u64 {
    limbs.iter().map(|&limb| set_bit_count(limb) as u64).sum()
}
