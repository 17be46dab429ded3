/// Bits in one limb.
pub const LIMB_BITS: u64 = u64::BITS as u64;

/// Largest number of limbs a single value may hold: `2^32` bits, about 512 MiB of limbs.
pub const MAX_LIMBS: usize = 1 << (32 - LIMB_BITS.trailing_zeros());

/// `log2(10)` scaled by 1024 and rounded up, used to bound the bit count of a decimal numeral.
pub const BITS_PER_DECIMAL_DIGIT: usize = 3402;

/// `log10(2)` scaled by 1024 and rounded up, used to bound the digit count of a binary value.
pub const DECIMAL_DIGITS_PER_BIT: usize = 309;

/// Decimal digits packed into one BCD byte.
pub const DIGITS_PER_BCD_BYTE: usize = 2;
