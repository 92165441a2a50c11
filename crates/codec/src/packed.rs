use crate::error::CodecError;
use crate::nucleotide::Nucleotide;
use crate::parallel;

/// Number of symbols above which encoding switches to the parallel packer.
const PARALLEL_THRESHOLD: usize = 1024 * 1024;

/// A nucleotide sequence packed at 2 bits per symbol.
///
/// Bits are concatenated in input order, most-significant-bit-first within
/// each byte, and the final byte is zero-padded on its low-order bits when
/// the symbol count is not a multiple of 4. `symbol_count` records how many
/// symbols are real data, which is what lets the decoder discard the
/// padding bits.
///
/// Invariant: `bytes.len() == symbol_count.div_ceil(4)`. Upheld by
/// construction; `PackedSequence` values only come out of [`encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedSequence {
    bytes: Vec<u8>,
    symbol_count: usize,
}

impl PackedSequence {
    /// Packed bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of symbols encoded (excludes padding bits).
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// True if no symbols were encoded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbol_count == 0
    }

    /// Consume into the `(bytes, symbol_count)` pair handed to a store.
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.bytes, self.symbol_count)
    }

    /// Reconstruct the sequence text this value was encoded from.
    pub fn to_text(&self) -> Result<String, CodecError> {
        decode(&self.bytes, self.symbol_count)
    }
}

/// Encode raw text into its packed representation.
///
/// Whitespace is stripped, remaining characters are uppercased, and any
/// character outside {A, C, G, T} is silently dropped: it contributes no
/// bits and does not count toward the symbol count. Tolerant filtering is
/// the contract here, not an error. An input with no valid symbols yields
/// an empty `PackedSequence`, which is a normal result.
pub fn encode(raw: &str) -> PackedSequence {
    let codes: Vec<u8> = raw
        .chars()
        .filter_map(|c| {
            if c.is_ascii() {
                Nucleotide::from_ascii(c as u8).map(Nucleotide::to_code)
            } else {
                None
            }
        })
        .collect();

    let bytes = if codes.len() >= PARALLEL_THRESHOLD {
        parallel::pack_codes_parallel(&codes)
    } else {
        pack_codes(&codes)
    };

    PackedSequence {
        bytes,
        symbol_count: codes.len(),
    }
}

/// Pack 2-bit codes into bytes, MSB-first, zero-padding the final byte.
pub(crate) fn pack_codes(codes: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(codes.len().div_ceil(4));

    let mut byte: u8 = 0;
    for (i, &code) in codes.iter().enumerate() {
        let shift = 2 * (3 - (i % 4));
        byte |= (code & 0x03) << shift;
        if (i + 1) % 4 == 0 {
            bytes.push(byte);
            byte = 0;
        }
    }
    if codes.len() % 4 != 0 {
        bytes.push(byte);
    }

    bytes
}

/// Decode packed bytes back into sequence text.
///
/// Reads exactly `symbol_count * 2` bits, MSB-first, and ignores whatever
/// trails them (the final byte's padding, or surplus bytes a sloppy caller
/// appended). A buffer with fewer bits than `symbol_count` requires is
/// rejected as [`CodecError::Truncated`] rather than silently producing a
/// short string. `symbol_count = 0` yields an empty string regardless of
/// `bytes`.
///
/// Fidelity is only guaranteed when `symbol_count` is the count produced by
/// the matching [`encode`] call over the same bytes.
pub fn decode(bytes: &[u8], symbol_count: usize) -> Result<String, CodecError> {
    let needed = symbol_count.div_ceil(4);
    if bytes.len() < needed {
        return Err(CodecError::Truncated {
            symbols: symbol_count,
            expected: needed,
            available: bytes.len(),
        });
    }

    let mut text = String::with_capacity(symbol_count);
    for i in 0..symbol_count {
        let shift = 2 * (3 - (i % 4));
        let code = (bytes[i / 4] >> shift) & 0x03;
        // code is masked to 2 bits, so the lookup always hits
        text.push(Nucleotide::from_code(code).unwrap_or(Nucleotide::A).to_char());
    }

    Ok(text)
}
