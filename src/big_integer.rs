//! # BigInteger
//! A growable two's-complement integer. The value is a little-endian sequence of 64-bit limbs
//! whose top bit is the sign. A value that fits in one limb is kept inline, without a heap
//! allocation; wider values own a `Vec<u64>`.
//!
//! Addition, subtraction, negation and left shifts widen the value when the result no longer
//! fits, so they never overflow.
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "340282366920938463463374607431768211455".parse().unwrap();
//! let b = BigInteger::from(1);
//! let c = &a + &b;
//! assert_eq!(c.to_string(), "340282366920938463463374607431768211456");
//! assert_eq!(c.size(), 3);
//! assert_eq!((&c >> 127).to_string(), "2");
//! assert!(-&c < a);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};
use std::str::FromStr;

use log::{debug, trace};

use crate::big_integer_constants::*;
use crate::double_dabble;
use crate::error::BigIntegerError;
use crate::popcount::set_bit_count_of;

pub const ZERO: BigInteger = BigInteger { limbs: Limbs::Inline(0) };
pub const ONE: BigInteger = BigInteger { limbs: Limbs::Inline(1) };

/// `0` for a limb with a clear top bit, `u64::MAX` otherwise.
macro_rules! sign_extension_of {
    ($limb: expr) => {
        ((($limb) as i64) >> (LIMB_BITS - 1)) as u64
    };
}

/// Add with carry: `(sum, carry) = a + b + carry`.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> LIMB_BITS) as u64)
}

/// Subtract with borrow: `(difference, borrow) = a - b - borrow`.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128).wrapping_sub(b as u128).wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64)
}

#[derive(Debug, Clone)]
enum Limbs {
    Inline(u64),
    /// Always holds at least two limbs.
    Heap(Vec<u64>),
}

impl Limbs {
    fn from_vec(mut limbs: Vec<u64>) -> Limbs {
        debug_assert!(!limbs.is_empty());
        if limbs.len() == 1 {
            Limbs::Inline(limbs.pop().unwrap_or(0))
        } else {
            Limbs::Heap(limbs)
        }
    }

    fn into_vec(self, capacity: usize) -> Vec<u64> {
        match self {
            Limbs::Inline(limb) => {
                let mut limbs = Vec::with_capacity(capacity.max(1));
                limbs.push(limb);
                limbs
            }
            Limbs::Heap(limbs) => limbs,
        }
    }
}

impl Default for Limbs {
    fn default() -> Self {
        Limbs::Inline(0)
    }
}

/// Arbitrary-precision two's-complement integer.
#[derive(Debug, Clone, Default)]
pub struct BigInteger {
    limbs: Limbs,
}

// Storage
impl BigInteger {
    /// Builds a value from little-endian two's-complement limbs. The top bit of the last limb
    /// is the sign.
    pub fn from_limbs(limbs: Vec<u64>) -> Result<BigInteger, BigIntegerError> {
        if limbs.is_empty() {
            return Err(BigIntegerError::InvalidArgument(
                "a BigInteger needs at least one limb".to_string(),
            ));
        }
        if limbs.len() > MAX_LIMBS {
            return Err(BigIntegerError::CapacityOverflow);
        }
        Ok(BigInteger { limbs: Limbs::from_vec(limbs) })
    }

    const fn from_limb(limb: u64) -> BigInteger {
        BigInteger { limbs: Limbs::Inline(limb) }
    }

    /// The limbs, least significant first.
    pub fn limbs(&self) -> &[u64] {
        match &self.limbs {
            Limbs::Inline(limb) => std::slice::from_ref(limb),
            Limbs::Heap(limbs) => limbs,
        }
    }

    fn limbs_mut(&mut self) -> &mut [u64] {
        match &mut self.limbs {
            Limbs::Inline(limb) => std::slice::from_mut(limb),
            Limbs::Heap(limbs) => limbs,
        }
    }

    /// Number of limbs currently allocated.
    pub fn size(&self) -> usize {
        match &self.limbs {
            Limbs::Inline(_) => 1,
            Limbs::Heap(limbs) => limbs.len(),
        }
    }

    /// Whether the value is stored inline rather than on the heap.
    pub fn is_small_integer_optimized(&self) -> bool {
        matches!(self.limbs, Limbs::Inline(_))
    }

    fn top(&self) -> u64 {
        match &self.limbs {
            Limbs::Inline(limb) => *limb,
            Limbs::Heap(limbs) => limbs[limbs.len() - 1],
        }
    }

    fn sign_extension(&self) -> u64 {
        sign_extension_of!(self.top())
    }

    /// Limb `index`, reading past the end as the sign extension.
    #[inline]
    fn limb_or_extension(&self, index: usize) -> u64 {
        self.limbs().get(index).copied().unwrap_or_else(|| self.sign_extension())
    }

    /// Resizes to exactly `size` limbs, filling new high limbs with `fill`.
    fn resize_with(&mut self, size: usize, fill: u64) {
        let current = self.size();
        if size == current {
            return;
        }
        trace!("resize: {} -> {} limbs, fill = {:#x}", current, size, fill);
        let mut limbs = std::mem::take(&mut self.limbs).into_vec(size);
        limbs.resize(size, fill);
        self.limbs = Limbs::from_vec(limbs);
    }

    /// Resizes to exactly `size` limbs. New high limbs are zero-filled and shrinking drops the
    /// high limbs, so callers must keep the sign in mind on both paths.
    pub fn reserve(&mut self, size: usize) -> Result<(), BigIntegerError> {
        if size == 0 {
            return Err(BigIntegerError::InvalidArgument(
                "a BigInteger needs at least one limb".to_string(),
            ));
        }
        if size > MAX_LIMBS {
            return Err(BigIntegerError::CapacityOverflow);
        }
        self.resize_with(size, 0);
        Ok(())
    }

    /// Widens to `size` limbs by replicating the sign. Never shrinks.
    fn sign_extend_to(&mut self, size: usize) {
        if size > self.size() {
            let fill = self.sign_extension();
            self.resize_with(size, fill);
        }
    }

    /// Like [`sign_extend_to`](Self::sign_extend_to), but reports an allocation failure instead
    /// of aborting.
    fn try_sign_extend_to(&mut self, size: usize) -> Result<(), BigIntegerError> {
        let current = self.size();
        if size <= current {
            return Ok(());
        }
        if size > MAX_LIMBS {
            return Err(BigIntegerError::CapacityOverflow);
        }
        let fill = self.sign_extension();
        trace!("resize: {} -> {} limbs, fill = {:#x}", current, size, fill);
        let mut limbs = std::mem::take(&mut self.limbs).into_vec(1);
        if let Err(e) = limbs.try_reserve_exact(size - current) {
            debug!("cannot widen to {} limbs: {}", size, e);
            self.limbs = Limbs::from_vec(limbs);
            return Err(BigIntegerError::CapacityOverflow);
        }
        limbs.resize(size, fill);
        self.limbs = Limbs::from_vec(limbs);
        Ok(())
    }

    /// Smallest limb count that still holds the value.
    fn minimal_size(&self) -> usize {
        let limbs = self.limbs();
        let mut size = limbs.len();
        while size > 1 && limbs[size - 1] == sign_extension_of!(limbs[size - 2]) {
            size -= 1;
        }
        size
    }

    /// Drops high limbs that only repeat the sign.
    fn normalize(&mut self) {
        let size = self.minimal_size();
        self.resize_with(size, 0);
    }

    /// Sets every limb to zero, keeping the width.
    pub fn clear(&mut self) {
        self.limbs_mut().iter_mut().for_each(|limb| *limb = 0);
    }
}

// Queries
impl BigInteger {
    pub fn is_negative(&self) -> bool {
        self.top() >> (LIMB_BITS - 1) == 1
    }

    /// `true` for zero and every value above it.
    pub fn is_positive(&self) -> bool {
        !self.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs().iter().all(|&limb| limb == 0)
    }

    /// Bits needed to hold the value, excluding the sign bit. `0` and `-1` need none.
    pub fn bit_length(&self) -> u64 {
        let extension = self.sign_extension();
        let limbs = self.limbs();
        match limbs.iter().rposition(|&limb| limb != extension) {
            Some(top) => {
                let differing = limbs[top] ^ extension;
                top as u64 * LIMB_BITS + (LIMB_BITS - differing.leading_zeros() as u64)
            }
            None => 0,
        }
    }

    /// Set bits across every allocated limb, sign extension included.
    pub fn actual_set_bit_count(&self) -> u64 {
        set_bit_count_of(self.limbs())
    }
}

// Construction from machine integers
macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            BigInteger::from_limb(val as i64 as u64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            let val = val as u64;
            if val >> (LIMB_BITS - 1) == 0 {
                BigInteger::from_limb(val)
            } else {
                BigInteger { limbs: Limbs::Heap(vec![val, 0]) }
            }
        }
    }
    )*
    };
}
impl_signed_to_big_integer!(i8, i16, i32, i64, isize);
impl_unsigned_to_big_integer!(u8, u16, u32, u64, usize);

impl From<i128> for BigInteger {
    fn from(val: i128) -> Self {
        let mut big = BigInteger { limbs: Limbs::Heap(vec![val as u64, (val >> LIMB_BITS) as u64]) };
        big.normalize();
        big
    }
}

impl From<u128> for BigInteger {
    fn from(val: u128) -> Self {
        let mut big = BigInteger { limbs: Limbs::Heap(vec![val as u64, (val >> LIMB_BITS) as u64, 0]) };
        big.normalize();
        big
    }
}

// Decimal conversion
impl BigInteger {
    /// Renders the value in base 10, with a leading `-` when negative.
    pub fn to_decimal_string(&self) -> String {
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        self.push_magnitude_digits(&mut s);
        s
    }

    fn push_magnitude_digits(&self, s: &mut String) {
        if self.is_negative() {
            let magnitude = -self;
            double_dabble::unpack_digits(&double_dabble::binary_to_bcd(magnitude.limbs()), s);
        } else {
            double_dabble::unpack_digits(&double_dabble::binary_to_bcd(self.limbs()), s);
        }
    }

    /// Parses an optionally signed decimal numeral such as `"-12345"`.
    pub fn from_decimal_str(val: &str) -> Result<BigInteger, BigIntegerError> {
        let (negative, digits) = match val.as_bytes() {
            [b'-', rest @ ..] => (true, rest),
            [b'+', rest @ ..] => (false, rest),
            rest => (false, rest),
        };
        if digits.is_empty() {
            debug!("rejecting {:?}: no digits", val);
            return Err(BigIntegerError::InvalidFormat(format!("{:?} has no digits", val)));
        }
        if let Some(position) = digits.iter().position(|c| !c.is_ascii_digit()) {
            debug!("rejecting {:?}: non-digit at {}", val, position);
            return Err(BigIntegerError::InvalidFormat(format!(
                "{:?} has a non-digit character at byte {}",
                val,
                position + (val.len() - digits.len())
            )));
        }

        let bits = double_dabble::max_binary_bits(digits.len());
        // one more bit for the sign
        let limbs = (bits as u64 + 1).div_ceil(LIMB_BITS) as usize;
        if limbs > MAX_LIMBS {
            return Err(BigIntegerError::CapacityOverflow);
        }
        let binary = double_dabble::bcd_to_binary(double_dabble::pack_digits(digits), bits, limbs);

        let mut big = BigInteger { limbs: Limbs::from_vec(binary) };
        if negative {
            big.negate();
        }
        big.normalize();
        Ok(big)
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::new();
        self.push_magnitude_digits(&mut digits);
        f.pad_integral(self.is_positive(), "", &digits)
    }
}

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInteger::from_decimal_str(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = BigIntegerError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInteger::from_decimal_str(val)
    }
}

// Addition and subtraction
impl BigInteger {
    /// Appends `top` as a new limb unless it only repeats the current sign.
    fn push_if_significant(&mut self, top: u64) {
        if top != self.sign_extension() {
            trace!("overflow: widening to {} limbs", self.size() + 1);
            let size = self.size() + 1;
            self.resize_with(size, top);
        }
    }

    fn add_assign_impl(&mut self, rhs: &BigInteger) {
        let lhs_extension = self.sign_extension();
        let rhs_extension = rhs.sign_extension();
        self.sign_extend_to(rhs.size());

        let mut carry = 0;
        for (i, limb) in self.limbs_mut().iter_mut().enumerate() {
            let (sum, c) = adc(*limb, rhs.limb_or_extension(i), carry);
            *limb = sum;
            carry = c;
        }
        self.push_if_significant(lhs_extension.wrapping_add(rhs_extension).wrapping_add(carry));
    }

    fn sub_assign_impl(&mut self, rhs: &BigInteger) {
        let lhs_extension = self.sign_extension();
        let rhs_extension = rhs.sign_extension();
        self.sign_extend_to(rhs.size());

        let mut borrow = 0;
        for (i, limb) in self.limbs_mut().iter_mut().enumerate() {
            let (difference, b) = sbb(*limb, rhs.limb_or_extension(i), borrow);
            *limb = difference;
            borrow = b;
        }
        self.push_if_significant(lhs_extension.wrapping_sub(rhs_extension).wrapping_sub(borrow));
    }

    /// Two's-complement negation in place: complement every limb, then add one.
    fn negate(&mut self) {
        self.limbs_mut().iter_mut().for_each(|limb| *limb = !*limb);
        self.add_assign_impl(&ONE);
    }

    /// Adds one in place and returns `self`.
    pub fn increment(&mut self) -> &mut BigInteger {
        self.add_assign_impl(&ONE);
        self
    }

    /// Adds one in place and returns the previous value.
    pub fn post_increment(&mut self) -> BigInteger {
        let previous = self.clone();
        self.add_assign_impl(&ONE);
        previous
    }

    /// Subtracts one in place and returns `self`.
    pub fn decrement(&mut self) -> &mut BigInteger {
        self.sub_assign_impl(&ONE);
        self
    }

    /// Subtracts one in place and returns the previous value.
    pub fn post_decrement(&mut self) -> BigInteger {
        let previous = self.clone();
        self.sub_assign_impl(&ONE);
        previous
    }
}

// Multiplication, division and modulo
impl BigInteger {
    /// Reserved for multiplication; always fails with [`BigIntegerError::NotImplemented`].
    pub fn try_mul(&self, _rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Err(BigIntegerError::NotImplemented("multiplication"))
    }

    /// Reserved for truncating division; always fails with [`BigIntegerError::NotImplemented`].
    pub fn try_div(&self, _rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Err(BigIntegerError::NotImplemented("division"))
    }

    /// Reserved for the remainder; always fails with [`BigIntegerError::NotImplemented`].
    pub fn try_rem(&self, _rhs: &BigInteger) -> Result<BigInteger, BigIntegerError> {
        Err(BigIntegerError::NotImplemented("modulo"))
    }

    /// On error `self` is left untouched.
    pub fn try_mul_assign(&mut self, rhs: &BigInteger) -> Result<(), BigIntegerError> {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    pub fn try_div_assign(&mut self, rhs: &BigInteger) -> Result<(), BigIntegerError> {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    pub fn try_rem_assign(&mut self, rhs: &BigInteger) -> Result<(), BigIntegerError> {
        *self = self.try_rem(rhs)?;
        Ok(())
    }
}

// Bitwise operations
impl BigInteger {
    /// Applies `op` limb by limb. Both operands are read sign-extended to the wider width.
    fn bitwise_assign(&mut self, rhs: &BigInteger, op: impl Fn(u64, u64) -> u64) {
        self.sign_extend_to(rhs.size());
        for (i, limb) in self.limbs_mut().iter_mut().enumerate() {
            *limb = op(*limb, rhs.limb_or_extension(i));
        }
    }

    fn bitand_assign_impl(&mut self, rhs: &BigInteger) {
        self.bitwise_assign(rhs, |a, b| a & b);
    }

    fn bitor_assign_impl(&mut self, rhs: &BigInteger) {
        self.bitwise_assign(rhs, |a, b| a | b);
    }

    fn bitxor_assign_impl(&mut self, rhs: &BigInteger) {
        self.bitwise_assign(rhs, |a, b| a ^ b);
    }

    /// Logical negation: one-limb `1` when every limb is zero, one-limb `0` otherwise.
    pub fn logical_not(&self) -> BigInteger {
        if self.is_zero() {
            ONE
        } else {
            ZERO
        }
    }

    /// `true` when both values are non-zero.
    pub fn logical_and(&self, other: &BigInteger) -> bool {
        !self.is_zero() && !other.is_zero()
    }

    /// `true` when at least one value is non-zero.
    pub fn logical_or(&self, other: &BigInteger) -> bool {
        !self.is_zero() || !other.is_zero()
    }
}

// Shifts
impl BigInteger {
    /// Total width in bits.
    fn bit_width(&self) -> u64 {
        (self.size() as u64).saturating_mul(LIMB_BITS)
    }

    /// Left shift that widens the value so that no significant bit is lost.
    pub fn checked_shl(&self, shift: u64) -> Result<BigInteger, BigIntegerError> {
        let mut big = self.clone();
        big.shl_assign_impl(shift)?;
        Ok(big)
    }

    fn shl_assign_impl(&mut self, shift: u64) -> Result<(), BigIntegerError> {
        if shift == 0 || self.is_zero() {
            return Ok(());
        }
        let required_bits = (self.bit_length() + 1)
            .checked_add(shift)
            .ok_or(BigIntegerError::CapacityOverflow)?;
        let required = required_bits.div_ceil(LIMB_BITS);
        if required > MAX_LIMBS as u64 {
            return Err(BigIntegerError::CapacityOverflow);
        }
        self.try_sign_extend_to(required as usize)?;

        let large_shift = (shift / LIMB_BITS) as usize;
        let small_shift = (shift % LIMB_BITS) as u32;
        let limbs = self.limbs_mut();
        // most significant first, so every source limb is read before it is overwritten
        for i in (large_shift..limbs.len()).rev() {
            let src = i - large_shift;
            let high = limbs[src] << small_shift;
            let low = if small_shift != 0 && src > 0 {
                limbs[src - 1] >> (u64::BITS - small_shift)
            } else {
                0
            };
            limbs[i] = high | low;
        }
        limbs[..large_shift].iter_mut().for_each(|limb| *limb = 0);
        Ok(())
    }

    /// Arithmetic right shift. Shifting by the full width or more clears the value.
    fn shr_assign_impl(&mut self, shift: u64) {
        if shift >= self.bit_width() {
            self.clear();
            return;
        }
        if shift == 0 {
            return;
        }
        let extension = self.sign_extension();
        let large_shift = (shift / LIMB_BITS) as usize;
        let small_shift = (shift % LIMB_BITS) as u32;
        let limbs = self.limbs_mut();
        let len = limbs.len();
        // least significant first, so every source limb is read before it is overwritten
        for i in 0..len {
            let src = i + large_shift;
            let current = if src < len { limbs[src] } else { extension };
            limbs[i] = if small_shift == 0 {
                current
            } else {
                let above = if src + 1 < len { limbs[src + 1] } else { extension };
                (current >> small_shift) | (above << (u64::BITS - small_shift))
            };
        }
    }
}

// Comparison
impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => {
                let difference = self - other;
                if difference.is_zero() {
                    Ordering::Equal
                } else if difference.is_negative() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for BigInteger {}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs()[..self.minimal_size()].hash(state);
    }
}

// Operator traits
macro_rules! impl_binary_op {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident, $body: ident) => {
        impl $imp_assign<&BigInteger> for BigInteger {
            fn $method_assign(&mut self, rhs: &BigInteger) {
                self.$body(rhs);
            }
        }

        impl $imp_assign for BigInteger {
            fn $method_assign(&mut self, rhs: BigInteger) {
                self.$body(&rhs);
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: &BigInteger) -> Self::Output {
                self.$body(rhs);
                self
            }
        }

        impl $imp for BigInteger {
            type Output = BigInteger;

            fn $method(mut self, rhs: BigInteger) -> Self::Output {
                self.$body(&rhs);
                self
            }
        }

        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> Self::Output {
                let mut result = self.clone();
                result.$body(rhs);
                result
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> Self::Output {
                let mut result = self.clone();
                result.$body(&rhs);
                result
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_assign_impl);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_assign_impl);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand_assign_impl);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, bitor_assign_impl);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_assign_impl);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    /// One's complement of every limb.
    fn not(mut self) -> Self::Output {
        self.limbs_mut().iter_mut().for_each(|limb| *limb = !*limb);
        self
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

impl ShlAssign<u64> for BigInteger {
    /// # Panics
    /// When the widened value would exceed [`MAX_LIMBS`]; see [`BigInteger::checked_shl`].
    fn shl_assign(&mut self, shift: u64) {
        if let Err(e) = self.shl_assign_impl(shift) {
            panic!("{}", e);
        }
    }
}

impl Shl<u64> for BigInteger {
    type Output = BigInteger;

    fn shl(mut self, shift: u64) -> Self::Output {
        self <<= shift;
        self
    }
}

impl Shl<u64> for &BigInteger {
    type Output = BigInteger;

    fn shl(self, shift: u64) -> Self::Output {
        self.clone() << shift
    }
}

impl ShrAssign<u64> for BigInteger {
    fn shr_assign(&mut self, shift: u64) {
        self.shr_assign_impl(shift);
    }
}

impl Shr<u64> for BigInteger {
    type Output = BigInteger;

    fn shr(mut self, shift: u64) -> Self::Output {
        self.shr_assign_impl(shift);
        self
    }
}

impl Shr<u64> for &BigInteger {
    type Output = BigInteger;

    fn shr(self, shift: u64) -> Self::Output {
        self.clone() >> shift
    }
}
