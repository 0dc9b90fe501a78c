use alloc::string::String;

use crate::builder::{check_width, Endianness};
use crate::codec;
use crate::error::{BufferError, Result};

/// Reads fields back out of a record produced by [`BufferBuilder`](crate::BufferBuilder).
///
/// The record carries no type information, so the caller reads fields in the same order and
/// with the same widths that were used to write them.
///
/// Each `read_*` method either consumes exactly the bytes of one field, or fails and leaves
/// `data` untouched.
pub struct BufferReader<'a> {
    /// The input data being parsed. Each time a value is parsed from `data`, `data` is reassigned
    /// to the remaining data.
    pub data: &'a [u8],
}

impl<'a> BufferReader<'a> {
    /// Constructor
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The number of bytes not read yet.
    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    /// Reads a single `u8` value.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        let (&value, rest) = self.data.split_first().ok_or(BufferError::NeedsMoreData)?;
        self.data = rest;
        Ok(value)
    }

    /// Reads a slice of bytes whose length is `len`. This function returns a slice reference
    /// to the bytes; it does not copy them.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.data.len() < len {
            Err(BufferError::NeedsMoreData)
        } else {
            let (lo, hi) = self.data.split_at(len);
            self.data = hi;
            Ok(lo)
        }
    }

    /// Reads a small array of bytes, with a constant length.
    #[inline(always)]
    pub fn read_cbytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let (lo, hi) = self
            .data
            .split_first_chunk::<N>()
            .ok_or(BufferError::NeedsMoreData)?;
        self.data = hi;
        Ok(*lo)
    }

    /// Reads an unsigned integer that is `byte_count` bytes wide.
    ///
    /// Fails with [`BufferError::InvalidWidth`] if `byte_count` is not in `1..=8`.
    pub fn read_uint(&mut self, byte_count: usize, endianness: Endianness) -> Result<u64> {
        check_width(0, byte_count)?;
        let field = self.read_bytes(byte_count)?;

        let mut le = [0u8; 8];
        match endianness {
            Endianness::Little => le[..byte_count].copy_from_slice(field),
            Endianness::Big => le[..byte_count].copy_from_slice(&codec::reverse_endianness(field)),
        }
        Ok(u64::from_le_bytes(le))
    }

    /// Reads one BCD byte and returns its decimal value. Invalid BCD bytes are decoded without
    /// complaint; see [`codec::decode_bcd`].
    pub fn read_bcd(&mut self) -> Result<u8> {
        Ok(codec::decode_bcd(self.read_u8()?))
    }

    /// Reads a BCD timestamp written by
    /// [`BufferBuilder::append_date`](crate::BufferBuilder::append_date) with the same flags.
    ///
    /// Returns the decoded fields in record order: year mod 100, month, day, hour, minute,
    /// second, millisecond mod 100. The millisecond is 0 if `include_millis` is not set.
    pub fn read_date(&mut self, include_millis: bool, reversed: bool) -> Result<[u8; 7]> {
        let count = if include_millis { 7 } else { 6 };
        let raw = self.read_bytes(count)?;

        let mut fields = [0u8; 7];
        for (i, &b) in raw.iter().enumerate() {
            let slot = if reversed { count - 1 - i } else { i };
            fields[slot] = codec::decode_bcd(b);
        }
        Ok(fields)
    }

    /// Reads `len` bytes of ASCII text. Bytes of `0x80` and above become `?`.
    pub fn read_ascii(&mut self, len: usize) -> Result<String> {
        Ok(codec::ascii_decode(self.read_bytes(len)?))
    }
}
