//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: a growable two's-complement integer made of 64-bit limbs. Values that fit a
//!   single limb are stored inline, larger ones on the heap.
//! - [`BigIntegerError`]: the error returned by the fallible parts of the API.
//!
//! Multiplication, division and modulo are reserved extension points and currently fail with
//! [`BigIntegerError::NotImplemented`].

mod big_integer;
mod big_integer_cache;
mod big_integer_constants;
mod double_dabble;
mod error;
pub mod popcount;
#[cfg(feature = "serde")]
mod ser;

pub use big_integer::{BigInteger, ONE, ZERO};
pub use big_integer_constants::MAX_LIMBS;
pub use error::BigIntegerError;

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "-900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a << 10).to_string(), "10240000000000000");
        assert_eq!((&a >> 10).to_string(), "9765625000");
        assert_eq!((&b >> 10).to_string(), "-878906250");
        assert!(b < a);
    }
}
