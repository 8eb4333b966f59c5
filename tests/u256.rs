use uint256::primitives::{U256, U256Error};

use num_bigint::BigUint;
use rand::{Rng, thread_rng};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(v: &U256) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

fn big(v: &U256) -> BigUint {
    BigUint::from_bytes_be(&v.to_bytes_be())
}

/// Random value, biased toward short encodings and all-zero/all-one limbs.
fn random_u256<R: Rng>(rng: &mut R) -> U256 {
    let mut limbs = [0u32; 8];
    for limb in limbs.iter_mut().take(rng.gen_range(0..=8)) {
        *limb = match rng.gen_range(0..4) {
            0 => 0,
            1 => u32::MAX,
            _ => rng.r#gen(),
        };
    }
    U256::from(limbs)
}

#[test]
fn u256_constants() {
    assert!(U256::ZERO.is_zero());
    assert_eq!(U256::ONE, U256::from_i32(1));
    assert_eq!(U256::MAX, U256::from([0xFFu8; 32]));
    assert_eq!(U256::BITS, 256);
    assert_eq!(U256::BYTES, 32);
    assert_eq!(U256::default(), U256::ZERO);
}

#[test]
fn u256_from_bytes_be_pads_on_the_left() {
    let v = U256::from_bytes_be(&[0x01, 0x02, 0x03, 0x04, 0x05]).unwrap();

    assert_eq!(v.limbs(), &[0x0203_0405, 0x01, 0, 0, 0, 0, 0, 0]);
    assert_eq!(v.significant_limbs(), 2);

    let mut expected = [0u8; 32];
    expected[27..].copy_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05]);
    assert_eq!(v.to_bytes_be(), expected);
}

#[test]
fn u256_from_bytes_be_empty_is_zero() {
    let v = U256::from_bytes_be(&[]).unwrap();

    assert!(v.is_zero());
    assert_eq!(v, U256::ZERO);
}

#[test]
fn u256_from_bytes_be_32_bytes_roundtrip() {
    let mut bytes = [0u8; 32];
    bytes[31] = 0x05;

    let v = U256::from_bytes_be(&bytes).unwrap();

    assert_eq!(v.to_bytes_be(), bytes);
    assert_eq!(v, U256::from_i32(5));
}

#[test]
fn u256_from_bytes_be_rejects_33_bytes() {
    let bytes = [0u8; 33];

    assert_eq!(
        U256::from_bytes_be(&bytes),
        Err(U256Error::InvalidLength { len: 33 })
    );
    assert!(U256::try_from(&bytes[..]).is_err());
    assert!(U256::try_from(&bytes[1..]).is_ok());
}

#[test]
fn u256_invalid_length_display() {
    let err = U256::from_bytes_be(&[0u8; 40]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid length: expected at most 32 bytes, got 40"
    );
}

#[test]
fn u256_bytes_roundtrip_patterns() {
    let patterns: [[u8; 32]; 4] = [
        [0u8; 32],
        [0xFFu8; 32],
        core::array::from_fn(|i| i as u8),
        core::array::from_fn(|i| if i == 0 { 0x80 } else { 0 }),
    ];

    for bytes in patterns {
        let v = U256::from(bytes);

        assert_eq!(U256::from_bytes_be(&v.to_bytes_be()).unwrap(), v);
        assert_eq!(<[u8; 32]>::from(v), bytes);
    }
}

#[test]
fn u256_bytes_roundtrip_random() {
    let mut rng = thread_rng();

    for _ in 0..2000 {
        let len = rng.gen_range(0..=32);
        let mut input = vec![0u8; len];
        rng.fill(input.as_mut_slice());

        let v = U256::from_bytes_be(&input).unwrap();
        let bytes = v.to_bytes_be();

        assert_eq!(bytes[..32 - len], vec![0u8; 32 - len][..]);
        assert_eq!(bytes[32 - len..], input[..]);
        assert_eq!(U256::from_bytes_be(&bytes).unwrap(), v);
        assert_eq!(U256::from(bytes), v);
    }
}

#[test]
fn u256_from_int_and_long() {
    assert_eq!(U256::from_i32(0), U256::ZERO);
    assert_eq!(U256::from_i64(0), U256::ZERO);

    let v = U256::from_i64(0x0123_4567_89AB_CDEF);
    assert_eq!(v.limbs()[..2], [0x89AB_CDEFu32, 0x0123_4567]);
    assert_eq!(v.long_value(), 0x0123_4567_89AB_CDEF);
    assert_eq!(v.int_value(), 0x89AB_CDEFu32 as i32);

    // Negative inputs keep their bit pattern in the low limbs only.
    let v = U256::from_i32(-1);
    assert_eq!(v.limbs(), &[u32::MAX, 0, 0, 0, 0, 0, 0, 0]);

    let v = U256::from_i64(-1);
    assert_eq!(v.limbs(), &[u32::MAX, u32::MAX, 0, 0, 0, 0, 0, 0]);

    assert_eq!(U256::from(7u32), U256::from_i32(7));
    assert_eq!(U256::from(u64::MAX), U256::from_i64(-1));
}

#[test]
fn u256_narrow_views_truncate() {
    let v = U256::MAX;

    assert_eq!(v.int_value(), -1);
    assert_eq!(v.long_value(), -1);
    assert!(u64::try_from(v).is_err());
    assert_eq!(u64::try_from(U256::from(42u64)), Ok(42));
}

#[test]
fn u256_from_limbs_truncates_and_pads() {
    let v = U256::from_limbs(&[1, 2, 3]);
    assert_eq!(v.limbs(), &[1, 2, 3, 0, 0, 0, 0, 0]);

    let v = U256::from_limbs(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(v.limbs(), &[1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(U256::from([9u32, 0, 0, 0, 0, 0, 0, 0]), U256::from_i32(9));
    assert_eq!(<[u32; 8]>::from(U256::from_limbs(&[4, 5])), [4, 5, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn u256_length_hint_does_not_affect_identity() {
    // Same value, three different significant lengths.
    let a = U256::from_i32(5);
    let b = U256::from_bytes_be(&[0u8, 0, 0, 0, 0, 0, 0, 5]).unwrap();
    let c = U256::from_limbs(&[5, 0, 0, 0, 0, 0, 0, 0]);

    assert_ne!(a.significant_limbs(), b.significant_limbs());
    assert_ne!(a.significant_limbs(), c.significant_limbs());

    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(hash_of(&a), hash_of(&c));
    assert_eq!(U256::compare(&a, &b), Ordering::Equal);
}

#[test]
fn u256_compare_boundaries() {
    let top_only_small = U256::from_limbs(&[0, 0, 0, 0, 0, 0, 0, 1]);
    let top_only_large = U256::from_limbs(&[0, 0, 0, 0, 0, 0, 0, 2]);
    let low_full = U256::from_limbs(&[u32::MAX; 7]);

    let values = [
        U256::ZERO,
        U256::ONE,
        low_full,
        top_only_small,
        top_only_large,
        U256::MAX,
    ];

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(U256::compare(a, b), i.cmp(&j), "{a} vs {b}");
            assert_eq!(U256::compare(a, b), U256::compare(b, a).reverse());
        }
    }
}

#[test]
fn u256_compare_matches_reference_random() {
    let mut rng = thread_rng();

    for _ in 0..2000 {
        let a = random_u256(&mut rng);
        let b = random_u256(&mut rng);

        assert_eq!(U256::compare(&a, &b), big(&a).cmp(&big(&b)), "{a} vs {b}");
        assert_eq!(a.cmp(&b), U256::compare(&a, &b));
        assert_eq!(a == b, U256::compare(&a, &b) == Ordering::Equal);
    }
}

#[test]
fn u256_compare_is_transitive() {
    let mut rng = thread_rng();

    for _ in 0..2000 {
        let mut triple = [
            random_u256(&mut rng),
            random_u256(&mut rng),
            random_u256(&mut rng),
        ];
        triple.sort_by(U256::compare);
        let [a, b, c] = triple;

        assert_ne!(U256::compare(&a, &b), Ordering::Greater);
        assert_ne!(U256::compare(&b, &c), Ordering::Greater);
        assert_ne!(U256::compare(&a, &c), Ordering::Greater, "{a} <= {b} <= {c}");
        assert!(big(&a) <= big(&b) && big(&b) <= big(&c));
    }
}

#[test]
fn u256_compare_is_unsigned() {
    let high_bit = U256::from_limbs(&[0, 0, 0, 0, 0, 0, 0, 0x8000_0000]);

    assert!(high_bit > U256::ONE);
    assert!(U256::from_i32(-1) > U256::from_i32(1));
}

#[test]
fn u256_sort_matches_byte_order() {
    let mut values: Vec<U256> = (0u8..32)
        .map(|i| {
            let mut bytes = [0u8; 32];
            bytes[i as usize] = 0xA5 ^ i;
            U256::from(bytes)
        })
        .collect();

    let mut bytes: Vec<[u8; 32]> = values.iter().map(|v| v.to_bytes_be()).collect();

    values.sort();
    bytes.sort();

    let sorted: Vec<[u8; 32]> = values.iter().map(|v| v.to_bytes_be()).collect();
    assert_eq!(sorted, bytes);
}

#[test]
fn u256_is_zero() {
    assert!(U256::ZERO.is_zero());
    assert!(!U256::ONE.is_zero());
    assert!(!U256::from_limbs(&[0, 0, 0, 0, 0, 0, 0, 1]).is_zero());
}

#[test]
fn u256_negate_and_sign() {
    let minus_one = U256::ONE.negate();

    assert_eq!(minus_one, U256::MAX);
    assert!(minus_one.is_negative());
    assert!(!U256::ONE.is_negative());
    assert_eq!(U256::ZERO.negate(), U256::ZERO);
    assert_eq!(minus_one.negate(), U256::ONE);
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::MAX.leading_zeros(), 0);
    assert_eq!(U256::from_limbs(&[0, 0, 0, 0x10]).leading_zeros(), 4 * 32 + 27);
}

#[test]
fn u256_display_and_debug() {
    let v = U256::from_i32(0x2a);

    let formatted = format!("{}", v);
    assert_eq!(formatted.len(), 66);
    assert!(formatted.starts_with("0x0000"));
    assert!(formatted.ends_with("002a"));

    assert_eq!(format!("{:x}", U256::MAX), "f".repeat(64));
    assert_eq!(format!("{:?}", U256::ZERO), format!("U256(0x{})", "0".repeat(64)));
}

#[test]
fn u256_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<U256>();
}

#[cfg(feature = "num-bigint")]
#[test]
fn u256_to_biguint() {
    use num_bigint::{BigInt, Sign};

    let top_bit = U256::from_limbs(&[0, 0, 0, 0, 0, 0, 0, 0x8000_0000]);
    let mut values = vec![U256::ZERO, U256::ONE, U256::MAX, top_bit];

    let mut rng = thread_rng();
    values.extend((0..500).map(|_| random_u256(&mut rng)));

    for v in values {
        let converted = v.to_biguint();

        assert_eq!(converted, big(&v), "{v}");
        assert_eq!(BigUint::from(v), converted);
        assert_ne!(BigInt::from(converted).sign(), Sign::Minus, "{v}");
    }

    assert_eq!(top_bit.to_biguint(), BigUint::from(1u8) << 255u32);
    assert_eq!(U256::MAX.to_biguint(), (BigUint::from(1u8) << 256u32) - 1u8);
}
