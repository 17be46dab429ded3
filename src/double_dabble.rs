//! Binary <-> decimal conversion kernels.
//!
//! Decimal digits live in a packed BCD buffer, two digits per byte, least significant byte
//! first. Binary values are little-endian limb slices holding a non-negative magnitude.

use log::trace;

use crate::big_integer_cache::{BCD_ADD3, BCD_SUB3};
use crate::big_integer_constants::*;

/// Number of bits from bit 0 up to and including the highest set bit.
pub fn magnitude_bit_length(magnitude: &[u64]) -> u64 {
    match magnitude.iter().rposition(|&limb| limb != 0) {
        Some(top) => top as u64 * LIMB_BITS + (LIMB_BITS - magnitude[top].leading_zeros() as u64),
        None => 0,
    }
}

/// Upper bound on the decimal digits of a value below `2^bits`.
pub fn max_decimal_digits(bits: u64) -> usize {
    ((bits as usize * DECIMAL_DIGITS_PER_BIT) >> 10) + 1
}

/// Upper bound on the bits of a numeral with `digits` decimal digits.
pub fn max_binary_bits(digits: usize) -> usize {
    ((digits * BITS_PER_DECIMAL_DIGIT) >> 10) + 1
}

/// Double dabble: shifts the magnitude into a BCD buffer one bit at a time, most significant
/// bit first, correcting every nibble `>= 5` before each shift.
pub fn binary_to_bcd(magnitude: &[u64]) -> Vec<u8> {
    let bits = magnitude_bit_length(magnitude);
    let digits = max_decimal_digits(bits);
    let mut bcd = vec![0_u8; digits.div_ceil(DIGITS_PER_BCD_BYTE)];
    trace!("double dabble: {} bits into {} BCD bytes", bits, bcd.len());

    // bytes above `used` are still zero and need neither correction nor shifting
    let mut used = 0;
    for bit in (0..bits).rev() {
        for byte in bcd[..used].iter_mut() {
            *byte = BCD_ADD3[*byte as usize];
        }
        let mut carry = ((magnitude[(bit / LIMB_BITS) as usize] >> (bit % LIMB_BITS)) & 1) as u8;
        for byte in bcd[..used].iter_mut() {
            let out = *byte >> 7;
            *byte = (*byte << 1) | carry;
            carry = out;
        }
        if carry != 0 {
            bcd[used] = carry;
            used += 1;
        }
    }
    bcd
}

/// Reverse double dabble: shifts the BCD buffer right once per output bit, collecting the
/// shifted-out bits least significant first and correcting every nibble `>= 8` after each shift.
///
/// The returned buffer has `limbs` limbs; the caller sizes it so the magnitude fits.
pub fn bcd_to_binary(mut bcd: Vec<u8>, bits: usize, limbs: usize) -> Vec<u64> {
    let mut binary = vec![0_u64; limbs];
    trace!("reverse double dabble: {} BCD bytes into {} limbs", bcd.len(), limbs);

    let mut used = bcd.len();
    for bit in 0..bits {
        while used > 0 && bcd[used - 1] == 0 {
            used -= 1;
        }
        if used == 0 {
            break;
        }
        let mut carry = 0_u8;
        for byte in bcd[..used].iter_mut().rev() {
            let out = *byte & 1;
            *byte = (*byte >> 1) | (carry << 7);
            carry = out;
        }
        binary[bit / LIMB_BITS as usize] |= (carry as u64) << (bit % LIMB_BITS as usize);
        for byte in bcd[..used].iter_mut() {
            *byte = BCD_SUB3[*byte as usize];
        }
    }
    debug_assert!(bcd.iter().all(|&byte| byte == 0), "BCD buffer not drained");
    binary
}

/// Packs ASCII decimal digits, most significant first, into a BCD buffer.
pub fn pack_digits(digits: &[u8]) -> Vec<u8> {
    let mut bcd = vec![0_u8; digits.len().div_ceil(DIGITS_PER_BCD_BYTE)];
    for (position, digit) in digits.iter().rev().enumerate() {
        let nibble = digit - b'0';
        bcd[position / DIGITS_PER_BCD_BYTE] |= nibble << (4 * (position % DIGITS_PER_BCD_BYTE));
    }
    bcd
}

/// Appends the digits of a BCD buffer to `s`, most significant first, without leading zeros.
pub fn unpack_digits(bcd: &[u8], s: &mut String) {
    let start = s.len();
    for byte in bcd.iter().rev() {
        for nibble in [byte >> 4, byte & 0x0f] {
            if nibble == 0 && s.len() == start {
                continue;
            }
            s.push(char::from(b'0' + nibble));
        }
    }
    if s.len() == start {
        s.push('0');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_digits(magnitude: &[u64]) -> String {
        let mut s = String::new();
        unpack_digits(&binary_to_bcd(magnitude), &mut s);
        s
    }

    #[test]
    fn test_binary_to_bcd() {
        assert_eq!(binary_to_bcd(&[0]), vec![0]);
        assert_eq!(binary_to_bcd(&[243]), vec![0x43, 0x02]);
        assert_eq!(to_digits(&[0]), "0");
        assert_eq!(to_digits(&[10]), "10");
        assert_eq!(to_digits(&[u64::MAX]), "18446744073709551615");
        assert_eq!(to_digits(&[0, 1]), "18446744073709551616");
        assert_eq!(to_digits(&[u64::MAX, u64::MAX, 0]), "340282366920938463463374607431768211455");
    }

    #[test]
    fn test_bcd_to_binary() {
        let digits = b"18446744073709551616";
        let bits = max_binary_bits(digits.len());
        assert_eq!(bcd_to_binary(pack_digits(digits), bits, 2), vec![0, 1]);
        assert_eq!(bcd_to_binary(pack_digits(b"10"), max_binary_bits(2), 1), vec![10]);
        assert_eq!(bcd_to_binary(pack_digits(b"0000"), max_binary_bits(4), 1), vec![0]);
    }

    #[test]
    fn test_pack_digits() {
        assert_eq!(pack_digits(b"1"), vec![0x01]);
        assert_eq!(pack_digits(b"243"), vec![0x43, 0x02]);
        assert_eq!(pack_digits(b"9870"), vec![0x70, 0x98]);
    }

    #[test]
    fn test_unpack_digits_skips_leading_zeros() {
        let mut s = String::from("-");
        unpack_digits(&[0x07, 0x00, 0x00], &mut s);
        assert_eq!(s, "-7");
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(magnitude_bit_length(&[0, 0]), 0);
        assert_eq!(magnitude_bit_length(&[1]), 1);
        assert_eq!(magnitude_bit_length(&[0, 1]), 65);
        assert!(max_decimal_digits(64) >= 20);
        assert!(max_binary_bits(20) >= 65);
    }
}
