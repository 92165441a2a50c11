use core::fmt;

use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of DNA bases backed by
/// a single byte (u8). The mapping of variants to integers doubles as the
/// 2-bit wire code and is stable throughout the crate (A=0b00, C=0b01,
/// G=0b10, T=0b11). Use the convenience conversion functions to go between
/// bytes/chars and `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// Convert from the 2-bit code (0-3).
    #[inline(always)]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the compact 2-bit code (0-3).
    #[inline(always)]
    pub const fn to_code(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.to_code()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_from_code() {
        assert_eq!(Nucleotide::from_code(0), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_code(1), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_code(2), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_code(3), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_code(4), None);
        assert_eq!(Nucleotide::from_code(255), None);
    }

    #[test]
    fn test_nucleotide_to_code() {
        assert_eq!(Nucleotide::A.to_code(), 0b00);
        assert_eq!(Nucleotide::C.to_code(), 0b01);
        assert_eq!(Nucleotide::G.to_code(), 0b10);
        assert_eq!(Nucleotide::T.to_code(), 0b11);
    }

    #[test]
    fn test_nucleotide_from_ascii() {
        // Uppercase
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'C'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        // Lowercase
        assert_eq!(Nucleotide::from_ascii(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'c'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'g'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));

        // Invalid
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'X'), None);
        assert_eq!(Nucleotide::from_ascii(b'5'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_to_ascii() {
        assert_eq!(Nucleotide::A.to_ascii(), b'A');
        assert_eq!(Nucleotide::C.to_ascii(), b'C');
        assert_eq!(Nucleotide::G.to_ascii(), b'G');
        assert_eq!(Nucleotide::T.to_ascii(), b'T');
    }

    #[test]
    fn test_nucleotide_into_char() {
        let c: char = Nucleotide::A.into();
        assert_eq!(c, 'A');

        let c: char = Nucleotide::G.into();
        assert_eq!(c, 'G');
    }

    #[test]
    fn test_nucleotide_size() {
        // Ensure Nucleotide is exactly 1 byte
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
