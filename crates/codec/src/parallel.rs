use rayon::prelude::*;

use crate::packed::pack_codes;

// Symbols per parallel chunk. Must stay a multiple of 4 so every chunk but
// the last packs to whole bytes and the concatenation is byte-identical to
// the sequential packer.
const CHUNK_SYMBOLS: usize = 256 * 1024;

/// Pack 2-bit codes in parallel chunks.
///
/// Each chunk is packed independently with the sequential packer; because
/// chunk boundaries fall on 4-symbol (whole-byte) boundaries, only the final
/// chunk can carry a padded byte, and the concatenated output is exactly
/// what the sequential packer would produce.
pub(crate) fn pack_codes_parallel(codes: &[u8]) -> Vec<u8> {
    debug_assert_eq!(CHUNK_SYMBOLS % 4, 0);

    let portions: Vec<Vec<u8>> = codes
        .par_chunks(CHUNK_SYMBOLS)
        .map(pack_codes)
        .collect();

    let total: usize = portions.iter().map(|p| p.len()).sum();
    let mut bytes = Vec::with_capacity(total);
    for portion in portions {
        bytes.extend_from_slice(&portion);
    }
    bytes
}
