//! Stateless conversions over byte sequences: byte order, width, BCD digits, ASCII text.
//!
//! [`BufferBuilder`](crate::BufferBuilder) is built on top of these, but they are useful on their
//! own when picking apart a record that was received from somewhere else.

use alloc::string::String;
use alloc::vec::Vec;
use zerocopy::byteorder::{I32, LE, U16, U32};
use zerocopy::FromBytes;

use crate::error::{BufferError, Result};

/// The byte that replaces anything that cannot be represented in 7-bit ASCII.
pub const ASCII_REPLACEMENT: u8 = b'?';

/// Returns the bytes in reverse order.
///
/// This converts a little-endian representation into a big-endian one and back again; applying
/// it twice gives back the original sequence.
pub fn reverse_endianness(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

/// Returns exactly `len` bytes: the first `min(bytes.len(), len)` bytes of the input, followed by
/// zeroes if the input was shorter.
///
/// This is meant for shrinking a little-endian integer to a narrower field, e.g. dropping the
/// top byte of a `u32` to get a 24-bit field. Growing the input appends zeroes at the tail, which
/// is only correct for little-endian data.
pub fn resize(bytes: &[u8], len: usize) -> Vec<u8> {
    let keep = bytes.len().min(len);
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&bytes[..keep]);
    out.resize(len, 0);
    out
}

/// Packs the two lowest decimal digits of `value` into one byte: tens in the high nibble, ones in
/// the low nibble.
///
/// Values of 100 or more are truncated, not rejected: `encode_bcd(123) == 0x23` and
/// `encode_bcd(100) == 0x00`.
pub fn encode_bcd(value: u32) -> u8 {
    let mut n = value;
    let mut bcd: u8 = 0;
    for digit in 0..2 {
        let nibble = (n % 10) as u8;
        bcd |= nibble << (digit * 4);
        n /= 10;
    }
    bcd
}

/// Unpacks a BCD byte into its decimal value, `10 * high + low`.
///
/// This is defined for every byte. Bytes whose nibbles are not decimal digits produce values that
/// do not round-trip through [`encode_bcd`]; use [`decode_bcd_checked`] to reject them.
pub fn decode_bcd(byte: u8) -> u8 {
    10 * (byte >> 4) + (byte & 0x0f)
}

/// Like [`decode_bcd`], but returns `None` if either nibble is greater than 9.
pub fn decode_bcd_checked(byte: u8) -> Option<u8> {
    if byte >> 4 > 9 || byte & 0x0f > 9 {
        None
    } else {
        Some(decode_bcd(byte))
    }
}

/// Returns `bytes[start..=end]`.
///
/// Fails with [`BufferError::InvalidSlice`] if `start >= end` or `end >= bytes.len()`. A
/// one-byte slice therefore cannot be taken with this function.
pub fn slice(bytes: &[u8], start: usize, end: usize) -> Result<&[u8]> {
    if start >= end || end >= bytes.len() {
        return Err(BufferError::InvalidSlice {
            start,
            end,
            len: bytes.len(),
        });
    }
    Ok(&bytes[start..=end])
}

/// Returns everything from `start` through the last byte, with the same rules as [`slice`].
pub fn slice_to_end(bytes: &[u8], start: usize) -> Result<&[u8]> {
    match bytes.len().checked_sub(1) {
        Some(last) => slice(bytes, start, last),
        None => Err(BufferError::InvalidSlice {
            start,
            end: 0,
            len: 0,
        }),
    }
}

/// Encodes a string as ASCII, one byte per `char`. Characters outside of `0..=127` become
/// [`ASCII_REPLACEMENT`].
pub fn ascii_encode(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { ASCII_REPLACEMENT })
        .collect()
}

/// Decodes ASCII bytes into a `String`. Bytes of `0x80` and above become `?`.
pub fn ascii_decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                b as char
            } else {
                ASCII_REPLACEMENT as char
            }
        })
        .collect()
}

/// Views the bytes as a byte string, without copying or validating them.
#[cfg(feature = "bstr")]
pub fn ascii_decode_bstr(bytes: &[u8]) -> &bstr::BStr {
    bstr::BStr::new(bytes)
}

/// Narrows each `char` to its low 8 bits.
pub fn chars_to_bytes(chars: &[char]) -> Vec<u8> {
    chars.iter().map(|&c| c as u32 as u8).collect()
}

/// Returns the little-endian encoding of `value`.
pub fn u16_to_bytes(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Reads a little-endian `u16` from the start of `bytes`. Trailing bytes are ignored.
pub fn bytes_to_u16(bytes: &[u8]) -> Result<u16> {
    U16::<LE>::read_from_prefix(bytes)
        .map(|(n, _)| n.get())
        .map_err(|_| BufferError::NeedsMoreData)
}

/// Reads a little-endian `u32` from the start of `bytes`. Trailing bytes are ignored.
pub fn bytes_to_u32(bytes: &[u8]) -> Result<u32> {
    U32::<LE>::read_from_prefix(bytes)
        .map(|(n, _)| n.get())
        .map_err(|_| BufferError::NeedsMoreData)
}

/// Reads a little-endian `i32` from the start of `bytes`. Trailing bytes are ignored.
pub fn bytes_to_i32(bytes: &[u8]) -> Result<i32> {
    I32::<LE>::read_from_prefix(bytes)
        .map(|(n, _)| n.get())
        .map_err(|_| BufferError::NeedsMoreData)
}
