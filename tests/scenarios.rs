use big_integer::{BigInteger, BigIntegerError, MAX_LIMBS, ZERO};

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn small_sum() {
    let sum = BigInteger::from(5) + BigInteger::from(3);
    assert_eq!(sum.to_decimal_string(), "8");
    assert!(sum.is_small_integer_optimized());
}

#[test]
fn opposite_values_cancel() {
    let sum = big("-123") + big("123");
    assert_eq!(sum.to_decimal_string(), "0");
    assert!(sum.is_zero());
}

#[test]
fn shift_into_second_limb() {
    let shifted = BigInteger::from(1) << 64;
    assert_eq!(shifted.size(), 2);
    assert_eq!(shifted.to_decimal_string(), "18446744073709551616");
}

#[test]
fn shift_by_full_width_keeps_value() {
    let negative = BigInteger::from_limbs(vec![0x0123_4567_89ab_cdef, 0x8000_0000_0000_0001]).unwrap();
    assert_eq!(negative.to_string(), "-170141183460469231713158574112958067217");
    let shifted = &negative << 128;
    assert!(shifted.is_negative());
    assert_eq!(shifted.size(), 4);
    assert_eq!(
        shifted.to_string(),
        "-57896044618658097705480492539022221248657746291855897840420085114810717437952"
    );
    assert_eq!(&shifted >> 128, negative);

    let positive = BigInteger::from_limbs(vec![5, 7]).unwrap();
    assert_eq!(positive.to_string(), "129127208515966861317");
    let shifted = &positive << 200;
    assert!(!shifted.is_zero());
    assert_eq!((&positive << 128).to_string(), "43939712147706765348551937797058357230033361148407082647552");
    assert_eq!(shifted >> 200, positive);

    let minus_one = BigInteger::from(-1) << 64;
    assert_eq!(minus_one.limbs(), &[0, u64::MAX]);
    assert_eq!(minus_one.to_string(), "-18446744073709551616");
}

#[test]
fn minus_one_is_all_ones() {
    let minus_one = big("-1");
    assert_eq!(minus_one.limbs(), &[u64::MAX]);
    assert_eq!(minus_one.to_decimal_string(), "-1");
    assert_eq!(minus_one.actual_set_bit_count(), 64);
}

#[test]
fn increment_past_two_to_the_128() {
    let mut value = big("340282366920938463463374607431768211455");
    value += BigInteger::from(1);
    assert_eq!(value.to_decimal_string(), "340282366920938463463374607431768211456");
    assert_eq!(value, BigInteger::from(1) << 128);
    assert_eq!(value.size(), 3);
}

#[test]
fn boundary_round_trips() {
    for s in [
        "0",
        "1",
        "-1",
        "9223372036854775807",
        "9223372036854775808",
        "-9223372036854775808",
        "-9223372036854775809",
        "18446744073709551615",
        "18446744073709551616",
        "-18446744073709551616",
        "170141183460469231731687303715884105727",
        "-170141183460469231731687303715884105728",
        "115792089237316195423570985008687907853269984665640564039457584007913129639936",
    ] {
        let value = big(s);
        assert_eq!(value.to_decimal_string(), s);
        assert_eq!(big(&value.to_string()), value);
    }
}

#[test]
fn machine_integer_boundaries() {
    assert_eq!(BigInteger::from(i64::MAX).to_string(), i64::MAX.to_string());
    assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigInteger::from(i32::MIN).to_string(), i32::MIN.to_string());
    assert_eq!(BigInteger::from(u32::MAX).to_string(), u32::MAX.to_string());
    assert_eq!(BigInteger::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigInteger::from(u128::MAX).to_string(), u128::MAX.to_string());
}

#[test]
fn arithmetic_shift_keeps_sign() {
    let value = big("-98765432109876543210987654321");
    for k in [1, 5, 63, 64, 65, 90, 127] {
        assert!((&value >> k).is_negative(), "shift by {}", k);
    }
    assert_eq!(&value >> (value.size() as u64 * 64), ZERO);
}

#[test]
fn left_then_right_shift_restores_value() {
    let value = big("123456789012345678901234567890");
    for k in [0, 1, 17, 64, 100, 257] {
        assert_eq!((&value << k) >> k, value, "shift by {}", k);
    }
}

#[test]
fn malformed_text_is_rejected() {
    assert!(matches!("".parse::<BigInteger>(), Err(BigIntegerError::InvalidFormat(_))));
    assert!(matches!("12_000".parse::<BigInteger>(), Err(BigIntegerError::InvalidFormat(_))));
    assert!(matches!("٣".parse::<BigInteger>(), Err(BigIntegerError::InvalidFormat(_))));
}

#[test]
fn oversized_shift_is_an_error() {
    assert_eq!(
        BigInteger::from(1).checked_shl(1_u64 << 62),
        Err(BigIntegerError::CapacityOverflow)
    );
    assert_eq!(
        BigInteger::from(-3).checked_shl(MAX_LIMBS as u64 * 64),
        Err(BigIntegerError::CapacityOverflow)
    );
    assert_eq!(ZERO.checked_shl(u64::MAX), Ok(ZERO));
}

#[test]
fn unimplemented_operations_fail_loudly() {
    let a = BigInteger::from(12);
    let b = BigInteger::from(4);
    assert_eq!(a.try_mul(&b), Err(BigIntegerError::NotImplemented("multiplication")));
    assert_eq!(a.try_div(&b), Err(BigIntegerError::NotImplemented("division")));
    assert_eq!(a.try_rem(&b), Err(BigIntegerError::NotImplemented("modulo")));
}

#[test]
fn error_messages() {
    assert_eq!(
        BigIntegerError::NotImplemented("division").to_string(),
        "division is not implemented"
    );
    assert_eq!(
        BigIntegerError::CapacityOverflow.to_string(),
        "result exceeds the maximum representable width"
    );
    let err = BigInteger::from_limbs(vec![]).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: a BigInteger needs at least one limb");
    let err = "1x".parse::<BigInteger>().unwrap_err();
    assert_eq!(err.to_string(), "invalid decimal string: \"1x\" has a non-digit character at byte 1");
}
