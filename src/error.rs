use thiserror::Error;

/// Errors reported by the fallible parts of the [`BigInteger`](crate::BigInteger) API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntegerError {
    /// The text is not an optionally signed string of decimal digits.
    #[error("invalid decimal string: {0}")]
    InvalidFormat(String),

    /// A width or limb vector that cannot describe a value, such as zero limbs.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is a reserved extension point without an algorithm yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The result would need more than [`MAX_LIMBS`](crate::MAX_LIMBS) limbs or cannot be allocated.
    #[error("result exceeds the maximum representable width")]
    CapacityOverflow,
}
