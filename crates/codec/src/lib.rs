//! Nucleotide sequence packing codec.
//!
//! Transforms textual DNA sequences over {A, C, G, T} into a packed binary
//! representation at 2 bits per symbol and back. The pair
//! `(packed bytes, symbol count)` is the unit a record store persists; the
//! symbol count is what lets the decoder strip the final byte's padding.

mod error;
mod nucleotide;
mod packed;
mod parallel;

pub use error::CodecError as Error;
pub use error::CodecError;
pub use nucleotide::Nucleotide;
pub use packed::{decode, encode, PackedSequence};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let seq = "ACGTACGTTTGAC";
        let packed = encode(seq);
        let (bytes, count) = packed.into_parts();
        assert_eq!(decode(&bytes, count).expect("Decoding failed"), seq);
    }

    #[test]
    fn test_fixed_ratio() {
        // 4 symbols per byte, no headers, no parity
        let packed = encode(&"ACGT".repeat(1000));
        assert_eq!(packed.bytes().len(), 1000);
    }
}
