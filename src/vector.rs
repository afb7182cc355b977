use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Add, Bound, Div, Index, IndexMut, Mul, RangeBounds, Shl, Shr};

use linear_deque::LinearDeque;
use num_bigint::BigUint;
use num_traits::Zero;

use crate::{parts, Bit, Error, SplitSpec};

mod fmt;

/// A variable-length sequence of bits stored least-significant bit first.
///
/// The vector is never empty: the value zero is the single-bit vector
/// reading `"0"`. Equality and ordering interpret the bits as an unsigned
/// integer, so high-order zero bits do not distinguish values:
///
/// ```
/// use bitseq::BitVector;
///
/// let a = BitVector::from_integer(123u32);
/// let b = BitVector::from_bitstring("0001111011").unwrap();
/// assert_eq!(a, b);
/// assert_ne!(a.len(), b.len());
/// ```
#[derive(Clone)]
pub struct BitVector {
    bits: LinearDeque<Bit>,
}

impl BitVector {
    /// Creates the single-bit zero vector.
    #[inline]
    pub fn new() -> Self {
        let mut bits = LinearDeque::new();
        bits.push_back(Bit::Zero);
        BitVector { bits }
    }

    /// Creates a vector holding the binary digits of a non-negative integer.
    ///
    /// The digits are stored in little-endian order, without leading zeros.
    /// Zero yields the single-bit vector.
    ///
    /// ```
    /// use bitseq::BitVector;
    ///
    /// assert_eq!(BitVector::from_integer(123u8).to_string(), "1111011");
    /// assert_eq!(BitVector::from_integer(0u8).to_string(), "0");
    /// ```
    pub fn from_integer<N: Into<BigUint>>(value: N) -> Self {
        let mut value = value.into();
        if value.is_zero() {
            return Self::new();
        }

        let one = BigUint::from(1u32);
        let mut bits = LinearDeque::new();
        while !value.is_zero() {
            bits.push_back(Bit::from(&value % 2u32 == one));
            value /= 2u32;
        }
        BitVector { bits }
    }

    /// Parses a non-empty string of `'0'`/`'1'` characters, most-significant
    /// digit first.
    pub fn from_bitstring(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::InvalidArgument("bit string must not be empty".into()));
        }

        let mut bits = LinearDeque::new();
        for ch in s.chars().rev() {
            match ch {
                '0' => bits.push_back(Bit::Zero),
                '1' => bits.push_back(Bit::One),
                other => {
                    return Err(Error::InvalidArgument(format!(
                        "invalid binary digit {other:?}"
                    )))
                }
            }
        }
        Ok(BitVector { bits })
    }

    /// Creates a vector from bytes, eight bits per byte.
    ///
    /// The first byte occupies the most-significant positions, with its own
    /// most-significant bit on top, so leading zero bits within each byte
    /// are preserved. An empty slice yields the zero vector.
    ///
    /// ```
    /// use bitseq::BitVector;
    ///
    /// assert_eq!(BitVector::from_bytes(&[123]).to_string(), "01111011");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::new();
        }

        let mut bits = LinearDeque::new();
        for byte in bytes.iter().rev() {
            for i in 0..u8::BITS {
                bits.push_back(Bit::from(byte >> i & 1 == 1));
            }
        }
        BitVector { bits }
    }

    /// Creates a vector from an already little-endian sequence of bits.
    ///
    /// An empty slice yields the zero vector.
    pub fn from_bits(bits: &[Bit]) -> Self {
        if bits.is_empty() {
            return Self::new();
        }

        let mut storage = LinearDeque::new();
        for &bit in bits {
            storage.push_back(bit);
        }
        BitVector { bits: storage }
    }

    /// Decodes a hex string into bytes and delegates to [`from_bytes`].
    ///
    /// Both digit cases are accepted. The empty string decodes to the empty
    /// byte sequence and therefore yields the zero vector.
    ///
    /// [`from_bytes`]: Self::from_bytes
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        if !hex.is_ascii() || hex.len() % 2 != 0 {
            return Err(Error::InvalidArgument(format!(
                "invalid hex string {hex:?}"
            )));
        }

        let mut bytes = Vec::with_capacity(hex.len() / 2);
        for i in (0..hex.len()).step_by(2) {
            let byte = u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| {
                Error::InvalidArgument(format!("invalid hex digits {:?}", &hex[i..i + 2]))
            })?;
            bytes.push(byte);
        }
        Ok(Self::from_bytes(&bytes))
    }

    /// Adjusts the vector to exactly `length` bits.
    ///
    /// Pads with zeros at the most-significant end when growing, truncates
    /// from the most-significant end when shrinking. The least-significant
    /// bits are never touched. A target of zero is rejected, since the
    /// vector must always hold at least one bit.
    pub fn with_length(mut self, length: usize) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::InvalidArgument(
                "target length must be positive".into(),
            ));
        }

        if length >= self.len() {
            self.grow_to(length);
            Ok(self)
        } else {
            Ok(Self::from_bits(&self.as_bits()[..length]))
        }
    }

    /// Returns the number of stored bits, including high-order zero padding.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always false; the zero value still stores one bit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the stored bits as a little-endian slice.
    #[inline]
    pub fn as_bits(&self) -> &[Bit] {
        &self.bits
    }

    #[inline]
    fn as_bits_mut(&mut self) -> &mut [Bit] {
        &mut self.bits
    }

    /// Reads the bit at `index`.
    ///
    /// Non-negative indices address little-endian: index 0 is the least
    /// significant bit, and reading at or beyond the length fails with
    /// [`Error::IndexOutOfRange`]. Negative indices address the same
    /// positions from the big-endian side: `-1` maps to the lowest digit of
    /// the canonical string, `-len` to its highest, and any magnitude beyond
    /// the length reads as [`Bit::Zero`] without error, modeling the
    /// implicit run of leading zeros above the stored bits.
    ///
    /// ```
    /// use bitseq::{Bit, BitVector};
    ///
    /// let v = BitVector::from_bitstring("1111011").unwrap();
    /// assert_eq!(v.get(2), Ok(Bit::Zero));
    /// assert_eq!(v.get(-1), Ok(Bit::One));
    /// assert_eq!(v.get(-100), Ok(Bit::Zero));
    /// assert!(v.get(7).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<Bit, Error> {
        if index >= 0 {
            let index = index as usize;
            self.as_bits()
                .get(index)
                .copied()
                .ok_or(Error::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
        } else {
            let position = index.unsigned_abs() - 1;
            Ok(self.as_bits().get(position).copied().unwrap_or(Bit::Zero))
        }
    }

    /// Writes the bit at `index`.
    ///
    /// Mirrors [`get`]: a non-negative index at or beyond the length fails
    /// (the vector never grows on the little-endian side), while a negative
    /// index whose magnitude exceeds the length grows the most-significant
    /// end to accommodate the written bit.
    ///
    /// [`get`]: Self::get
    pub fn set(&mut self, index: isize, bit: Bit) -> Result<(), Error> {
        let position = if index >= 0 {
            let index = index as usize;
            if index >= self.len() {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: self.len(),
                });
            }
            index
        } else {
            let position = index.unsigned_abs() - 1;
            self.grow_to(position + 1);
            position
        };

        self.as_bits_mut()[position] = bit;
        Ok(())
    }

    /// Pads the most-significant end with zeros up to `length`.
    ///
    /// Never shrinks; a `length` at or below the current length is a no-op.
    pub fn grow_to(&mut self, length: usize) {
        while self.bits.len() < length {
            self.bits.push_back(Bit::Zero);
        }
    }

    /// Appends a bit above the current most-significant end.
    #[inline]
    pub fn push_msb(&mut self, bit: Bit) {
        self.bits.push_back(bit);
    }

    /// Prepends a bit below the current least-significant end.
    #[inline]
    pub fn push_lsb(&mut self, bit: Bit) {
        self.bits.push_front(bit);
    }

    /// Returns the sub-vector at the little-endian positions in `range`.
    ///
    /// Consistent with single-index addressing: `v.slice(i..i + 1)` holds
    /// the bit `v.get(i)`. An empty range yields the zero vector; a bound
    /// beyond the length fails with [`Error::IndexOutOfRange`].
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Result<BitVector, Error> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end + 1,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };

        if end > len {
            return Err(Error::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Err(Error::InvalidArgument(format!(
                "slice start {start} is past end {end}"
            )));
        }
        Ok(Self::from_bits(&self.as_bits()[start..end]))
    }

    /// Interprets the stored bits as an unsigned integer.
    ///
    /// Bit `i` contributes `2^i`. This interpretation is the basis for
    /// equality, ordering and the byte/hex conversions.
    pub fn to_integer(&self) -> BigUint {
        let mut value = BigUint::zero();
        for &bit in self.as_bits().iter().rev() {
            value = value * 2u32 + bit.to_u8();
        }
        value
    }

    /// Packs the bits into bytes, most-significant bit first.
    ///
    /// Lengths that are not a multiple of eight are implicitly zero-padded
    /// at the most-significant end before grouping, so this never fails.
    ///
    /// ```
    /// use bitseq::BitVector;
    ///
    /// let v = BitVector::from_bytes(&[128, 129]);
    /// assert_eq!(v.to_bytes(), vec![128, 129]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let padded = self.len().div_ceil(8) * 8;
        let mut msb_first = vec![Bit::Zero; padded - self.len()];
        msb_first.extend(self.as_bits().iter().rev());

        let chunks =
            parts(&msb_first, &SplitSpec::FixedSize(8)).expect("chunk length 8 is valid");
        chunks
            .into_iter()
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| byte << 1 | bit.to_u8()))
            .collect()
    }

    /// Returns the lowercase hex encoding of [`to_bytes`].
    ///
    /// [`to_bytes`]: Self::to_bytes
    #[inline]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Divides the bits into sub-vectors per `spec`.
    ///
    /// Chunks are carved out of the canonical most-significant-first form
    /// and returned most-significant chunk first, so joining the chunks'
    /// canonical strings in order reproduces the original. Equivalently,
    /// folding the reversed list with `+` rebuilds the original value.
    ///
    /// ```
    /// use bitseq::{BitVector, SplitSpec};
    ///
    /// let v = BitVector::from_bitstring("11010001").unwrap();
    /// let chunks = v.split(&SplitSpec::FixedSize(4)).unwrap();
    /// assert_eq!(chunks[0].to_string(), "1101");
    /// assert_eq!(chunks[1].to_string(), "0001");
    /// ```
    pub fn split(&self, spec: &SplitSpec) -> Result<Vec<BitVector>, Error> {
        if let SplitSpec::ExplicitSizes(sizes) = spec {
            if sizes.iter().any(|&size| size == 0) {
                return Err(Error::InvalidArgument(
                    "chunk length must be positive".into(),
                ));
            }
        }

        let msb_first: Vec<Bit> = self.as_bits().iter().rev().copied().collect();
        let chunks = parts(&msb_first, spec)?;
        Ok(chunks
            .into_iter()
            .map(|chunk| {
                let little_endian: Vec<Bit> = chunk.into_iter().rev().collect();
                Self::from_bits(&little_endian)
            })
            .collect())
    }

    /// Creates an iterator over the bits in little-endian order.
    #[inline]
    pub fn iter(&self) -> Bits<'_> {
        Bits(self.as_bits().iter())
    }

    /// The stored bits up to and including the highest one bit.
    ///
    /// Empty for the zero value. Two vectors are equal exactly when these
    /// slices are equal.
    fn significant_bits(&self) -> &[Bit] {
        let bits = self.as_bits();
        let top = bits
            .iter()
            .rposition(|&bit| bit == Bit::One)
            .map_or(0, |position| position + 1);
        &bits[..top]
    }
}

impl Default for BitVector {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// ---------- Conversions ----------

impl From<&[Bit]> for BitVector {
    #[inline]
    fn from(bits: &[Bit]) -> Self {
        Self::from_bits(bits)
    }
}

impl From<&[u8]> for BitVector {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&str> for BitVector {
    type Error = Error;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Error> {
        Self::from_bitstring(s)
    }
}

impl From<&BitVector> for BigUint {
    #[inline]
    fn from(vector: &BitVector) -> Self {
        vector.to_integer()
    }
}

// ---------- Comparison ----------

impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.significant_bits() == other.significant_bits()
    }
}

impl Eq for BitVector {}

impl Ord for BitVector {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.significant_bits();
        let rhs = other.significant_bits();
        lhs.len()
            .cmp(&rhs.len())
            .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
    }
}

impl PartialOrd for BitVector {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BitVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_bits().hash(state);
    }
}

// ---------- Indexing ----------

impl Index<usize> for BitVector {
    type Output = Bit;

    /// Panicking little-endian access; [`get`](Self::get) is the checked form.
    #[inline]
    fn index(&self, index: usize) -> &Bit {
        &self.as_bits()[index]
    }
}

impl IndexMut<usize> for BitVector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Bit {
        &mut self.as_bits_mut()[index]
    }
}

// ---------- Operators ----------

impl Shl<usize> for &BitVector {
    type Output = BitVector;

    /// Prepends `n` zero bits at the least-significant end, multiplying the
    /// value by `2^n`.
    fn shl(self, n: usize) -> BitVector {
        let mut result = self.clone();
        for _ in 0..n {
            result.push_lsb(Bit::Zero);
        }
        result
    }
}

impl Shl<usize> for BitVector {
    type Output = BitVector;

    #[inline]
    fn shl(self, n: usize) -> BitVector {
        &self << n
    }
}

impl Shr<usize> for &BitVector {
    type Output = BitVector;

    /// Drops the `n` least-significant bits, dividing the value by `2^n`
    /// and discarding the remainder. Shifting the whole vector out yields
    /// the zero vector.
    fn shr(self, n: usize) -> BitVector {
        if n >= self.len() {
            return BitVector::new();
        }
        BitVector::from_bits(&self.as_bits()[n..])
    }
}

impl Shr<usize> for BitVector {
    type Output = BitVector;

    #[inline]
    fn shr(self, n: usize) -> BitVector {
        &self >> n
    }
}

impl Add for &BitVector {
    type Output = BitVector;

    /// Concatenation: the left operand occupies the low-order part, the
    /// right operand the high-order part above it. The canonical string of
    /// the result is the right operand's string followed by the left's.
    fn add(self, rhs: &BitVector) -> BitVector {
        let mut bits = LinearDeque::new();
        for &bit in self.as_bits() {
            bits.push_back(bit);
        }
        for &bit in rhs.as_bits() {
            bits.push_back(bit);
        }
        BitVector { bits }
    }
}

impl Add for BitVector {
    type Output = BitVector;

    #[inline]
    fn add(self, rhs: BitVector) -> BitVector {
        &self + &rhs
    }
}

impl Mul<usize> for &BitVector {
    type Output = BitVector;

    /// Bit-pattern repetition: the little-endian sequence concatenated with
    /// itself `count` times, repeat 0 in the lowest bits. This is not
    /// numeric multiplication. A count of zero yields the zero vector.
    fn mul(self, count: usize) -> BitVector {
        if count == 0 {
            return BitVector::new();
        }

        let mut bits = LinearDeque::new();
        for _ in 0..count {
            for &bit in self.as_bits() {
                bits.push_back(bit);
            }
        }
        BitVector { bits }
    }
}

impl Mul<usize> for BitVector {
    type Output = BitVector;

    #[inline]
    fn mul(self, count: usize) -> BitVector {
        &self * count
    }
}

impl Div<&SplitSpec> for &BitVector {
    type Output = Result<Vec<BitVector>, Error>;

    #[inline]
    fn div(self, spec: &SplitSpec) -> Self::Output {
        self.split(spec)
    }
}

impl Div<usize> for &BitVector {
    type Output = Result<Vec<BitVector>, Error>;

    /// Shorthand for splitting into fixed-size chunks.
    #[inline]
    fn div(self, length: usize) -> Self::Output {
        self.split(&SplitSpec::FixedSize(length))
    }
}

impl Div<usize> for BitVector {
    type Output = Result<Vec<BitVector>, Error>;

    #[inline]
    fn div(self, length: usize) -> Self::Output {
        &self / length
    }
}

// ---------- Iterator ----------

/// Iterator over the bits of a [`BitVector`], least significant first.
pub struct Bits<'a>(std::slice::Iter<'a, Bit>);

impl Iterator for Bits<'_> {
    type Item = Bit;

    #[inline]
    fn next(&mut self) -> Option<Bit> {
        self.0.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Bit> {
        self.0.next_back().copied()
    }
}

impl ExactSizeIterator for Bits<'_> {}
impl FusedIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = Bit;
    type IntoIter = Bits<'a>;

    #[inline]
    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}
