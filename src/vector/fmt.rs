use std::fmt::{Binary, Debug, Display, Formatter, LowerHex, Result, UpperHex, Write};

use crate::{Bit, BitVector};

impl Display for BitVector {
    /// The canonical form: binary digits, most significant first.
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Binary::fmt(self, f)
    }
}

impl Binary for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for &bit in self.as_bits().iter().rev() {
            f.write_char(match bit {
                Bit::Zero => '0',
                Bit::One => '1',
            })?;
        }
        Ok(())
    }
}

impl LowerHex for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl Debug for BitVector {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("BitVector(\"")?;
        Display::fmt(self, f)?;
        f.write_str("\")")
    }
}
