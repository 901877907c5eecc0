//! Calldata compaction, compatible with solady's `LibZip` cd coding.
//!
//! Selective run-length encoding: a run of `0x00` (up to 128) or `0xff`
//! (up to 32) becomes `0x00` followed by a control byte; every other byte
//! passes through. Control byte: `run - 1` for zero runs (`0x00..=0x7f`),
//! `0x80 | (run - 1)` for `0xff` runs (`0x80..=0x9f`). The first four bytes
//! of the compressed output are bitwise-negated so compressed calldata can
//! never collide with a function selector.
//!
//! The bridge path compresses the target calldata before it crosses the
//! chain boundary; the on-chain side decompresses with the same scheme, so
//! this must stay bit-exact.

use thiserror::Error;

/// Longest zero run a single control byte can express.
const MAX_ZERO_RUN: usize = 0x80;
/// Longest `0xff` run a single control byte can express.
const MAX_FF_RUN: usize = 0x20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecompressError {
    #[error("run-length control byte missing at offset {0}")]
    TruncatedControl(usize),
}

/// Compress calldata with selective run-length encoding.
pub fn cd_compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 4);
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b == 0x00 || b == 0xff {
            let max = if b == 0x00 { MAX_ZERO_RUN } else { MAX_FF_RUN };
            let mut run = 1;
            while run < max && i + run < data.len() && data[i + run] == b {
                run += 1;
            }
            out.push(0x00);
            out.push((run as u8 - 1) | (b & 0x80));
            i += run;
        } else {
            out.push(b);
            i += 1;
        }
    }
    for byte in out.iter_mut().take(4) {
        *byte = !*byte;
    }
    out
}

/// Invert [`cd_compress`].
pub fn cd_decompress(data: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let read = |i: usize| -> u8 {
        // First four bytes were negated on the way in.
        if i < 4 { !data[i] } else { data[i] }
    };

    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;
    while i < data.len() {
        let b = read(i);
        i += 1;
        if b == 0x00 {
            if i >= data.len() {
                return Err(DecompressError::TruncatedControl(i));
            }
            let control = read(i);
            i += 1;
            let run = (control & 0x7f) as usize + 1;
            let fill = if control & 0x80 != 0 { 0xff } else { 0x00 };
            out.resize(out.len() + run, fill);
        } else {
            out.push(b);
        }
    }
    Ok(out)
}
