use bitseq::{Bit, BitVector, SplitSpec};
use num_bigint::BigUint;
use proptest::prelude::*;

/// Forgiving little-endian read: position `i` through the big-endian
/// interface, so positions above the stored length read as zero.
fn bit_at(v: &BitVector, i: usize) -> Bit {
    v.get(-(i as isize) - 1).unwrap()
}

/// Ripple-carry addition built on the public API.
fn add(x: &BitVector, y: &BitVector) -> BitVector {
    let width = x.len().max(y.len());
    let mut result = BitVector::new();
    let mut carry = Bit::Zero;
    for i in 0..width {
        let a = bit_at(x, i);
        let b = bit_at(y, i);
        result.set(-(i as isize) - 1, a ^ b ^ carry).unwrap();
        carry = (a & b) | (a & carry) | (b & carry);
    }
    result.set(-(width as isize) - 1, carry).unwrap();
    result
}

/// Shift-and-add multiplication.
fn mul(x: &BitVector, y: &BitVector) -> BitVector {
    let mut result = BitVector::new();
    let mut shifted = y.clone();
    for i in 0..x.len() {
        if x[i] == Bit::One {
            result = add(&result, &shifted);
        }
        shifted = shifted << 1;
    }
    result
}

/// Square-and-multiply exponentiation.
fn exp(x: &BitVector, y: &BitVector) -> BitVector {
    let mut result = BitVector::from_integer(1u8);
    let mut base = x.clone();
    for i in 0..y.len() {
        if y[i] == Bit::One {
            result = mul(&result, &base);
        }
        base = mul(&base, &base);
    }
    result
}

/// Restoring long division.
fn div(x: &BitVector, y: &BitVector) -> BitVector {
    if y > x {
        return BitVector::new();
    }
    let width = x.len();
    let mut divisor = y.clone() << width;
    let mut total = BitVector::new();
    let mut quotient = BitVector::new();
    let mut power = &BitVector::from_integer(1u8) << width;
    for _ in 0..=width {
        let candidate = add(&total, &divisor);
        if candidate <= *x {
            total = candidate;
            quotient = add(&quotient, &power);
        }
        divisor = divisor >> 1;
        power = power >> 1;
    }
    quotient
}

#[test]
fn addition_matches_integers() {
    for a in 0u32..50 {
        for b in 0u32..50 {
            let sum = add(&BitVector::from_integer(a), &BitVector::from_integer(b));
            assert_eq!(sum.to_integer(), BigUint::from(a + b), "{a} + {b}");
        }
    }
}

#[test]
fn multiplication_matches_integers() {
    for a in 0u32..30 {
        for b in 0u32..30 {
            let product = mul(&BitVector::from_integer(a), &BitVector::from_integer(b));
            assert_eq!(product.to_integer(), BigUint::from(a * b), "{a} * {b}");
        }
    }
}

#[test]
fn exponentiation_matches_integers() {
    for a in 0u32..10 {
        for b in 0u32..4 {
            let value = exp(&BitVector::from_integer(a), &BitVector::from_integer(b));
            assert_eq!(value.to_integer(), BigUint::from(a.pow(b)), "{a} ^ {b}");
        }
    }
}

#[test]
fn division_matches_integers() {
    for a in 0u32..12 {
        for b in 1u32..12 {
            let quotient = div(&BitVector::from_integer(a), &BitVector::from_integer(b));
            assert_eq!(quotient.to_integer(), BigUint::from(a / b), "{a} / {b}");
        }
    }
}

proptest! {
    #[test]
    fn integer_round_trip(n in any::<u128>()) {
        prop_assert_eq!(BitVector::from_integer(n).to_integer(), BigUint::from(n));
    }

    #[test]
    fn big_integer_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let n = BigUint::from_bytes_be(&bytes);
        prop_assert_eq!(BitVector::from_integer(n.clone()).to_integer(), n);
    }

    #[test]
    fn byte_round_trip(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assert_eq!(BitVector::from_bytes(&bytes).to_bytes(), bytes);
    }

    #[test]
    fn hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let v = BitVector::from_bytes(&bytes);
        prop_assert_eq!(BitVector::from_hex(&v.to_hex()).unwrap(), v);
    }

    #[test]
    fn bitstring_round_trip(s in "[01]{1,64}") {
        let v = BitVector::from_bitstring(&s).unwrap();
        prop_assert_eq!(v.to_string(), s);
    }

    #[test]
    fn shift_left_multiplies(s in "[01]{1,64}", n in 0usize..32) {
        let v = BitVector::from_bitstring(&s).unwrap();
        prop_assert_eq!((&v << n).to_integer(), v.to_integer() << n);
    }

    #[test]
    fn shift_right_divides(s in "[01]{1,64}", n in 0usize..80) {
        let v = BitVector::from_bitstring(&s).unwrap();
        prop_assert_eq!((&v >> n).to_integer(), v.to_integer() >> n);
    }

    #[test]
    fn split_then_join_is_identity(s in "[01]{1,64}", len in 1usize..16) {
        let v = BitVector::from_bitstring(&s).unwrap();
        let chunks = v.split(&SplitSpec::FixedSize(len)).unwrap();
        let joined: String = chunks.iter().map(ToString::to_string).collect();
        prop_assert_eq!(joined, v.to_string());
    }

    #[test]
    fn split_then_sum_rebuilds_value(s in "[01]{1,64}", len in 1usize..16) {
        let v = BitVector::from_bitstring(&s).unwrap();
        let chunks = v.split(&SplitSpec::FixedSize(len)).unwrap();
        let rebuilt = chunks
            .into_iter()
            .rev()
            .reduce(|low, high| &low + &high)
            .unwrap();
        prop_assert_eq!(rebuilt.to_integer(), v.to_integer());
    }

    #[test]
    fn concatenation_length_and_value(a in "[01]{1,32}", b in "[01]{1,32}") {
        let low = BitVector::from_bitstring(&a).unwrap();
        let high = BitVector::from_bitstring(&b).unwrap();
        let joined = &low + &high;
        prop_assert_eq!(joined.len(), low.len() + high.len());
        prop_assert_eq!(
            joined.to_integer(),
            low.to_integer() + (high.to_integer() << low.len())
        );
    }

    #[test]
    fn padding_never_changes_value(s in "[01]{1,32}", pad in 0usize..16) {
        let v = BitVector::from_bitstring(&s).unwrap();
        let padded = v.clone().with_length(v.len() + pad).unwrap();
        prop_assert_eq!(&padded, &v);
        prop_assert_eq!(padded.len(), v.len() + pad);
    }

    #[test]
    fn repetition_repeats_the_pattern(s in "[01]{1,16}", count in 0usize..8) {
        let v = BitVector::from_bitstring(&s).unwrap();
        let repeated = &v * count;
        if count == 0 {
            prop_assert_eq!(repeated, BitVector::new());
        } else {
            prop_assert_eq!(repeated.to_string(), s.repeat(count));
        }
    }
}
