use std::fmt::{self, Display};
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::Error;

/// A single binary digit.
///
/// This is the element type of [`BitVector`](crate::BitVector). It carries
/// the usual bitwise operators so that callers can write bit-level
/// algorithms directly on vector elements.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    #[inline]
    pub fn to_bool(self) -> bool {
        match self {
            Bit::Zero => false,
            Bit::One => true,
        }
    }

    #[inline]
    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(value: bool) -> Self {
        match value {
            true => Self::One,
            false => Self::Zero,
        }
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit.to_bool()
    }
}

impl From<Bit> for u8 {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}

impl TryFrom<u8> for Bit {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            other => Err(Error::InvalidArgument(format!(
                "bit value must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl Not for Bit {
    type Output = Bit;

    #[inline]
    fn not(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl BitAnd for Bit {
    type Output = Bit;

    #[inline]
    fn bitand(self, rhs: Bit) -> Bit {
        Bit::from(self.to_bool() & rhs.to_bool())
    }
}

impl BitOr for Bit {
    type Output = Bit;

    #[inline]
    fn bitor(self, rhs: Bit) -> Bit {
        Bit::from(self.to_bool() | rhs.to_bool())
    }
}

impl BitXor for Bit {
    type Output = Bit;

    #[inline]
    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self.to_bool() ^ rhs.to_bool())
    }
}

impl Display for Bit {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bit::Zero => "0",
            Bit::One => "1",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Bit::{self, One, Zero};
    use crate::Error;

    #[test]
    fn conversions() {
        assert_eq!(Bit::from(false), Zero);
        assert_eq!(Bit::from(true), One);
        assert_eq!(Zero.to_u8(), 0);
        assert_eq!(One.to_u8(), 1);
        assert!(!Zero.to_bool());
        assert!(One.to_bool());
        assert!(bool::from(One));
        assert_eq!(u8::from(Zero), 0);
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(Bit::try_from(0u8), Ok(Zero));
        assert_eq!(Bit::try_from(1u8), Ok(One));
        assert!(matches!(Bit::try_from(2u8), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn operators() {
        assert_eq!(!Zero, One);
        assert_eq!(!One, Zero);
        assert_eq!(One & Zero, Zero);
        assert_eq!(One & One, One);
        assert_eq!(One | Zero, One);
        assert_eq!(Zero | Zero, Zero);
        assert_eq!(One ^ One, Zero);
        assert_eq!(One ^ Zero, One);
    }

    #[test]
    fn ordering() {
        assert!(Zero < One);
    }

    #[test]
    fn display() {
        assert_eq!(Zero.to_string(), "0");
        assert_eq!(One.to_string(), "1");
    }
}
