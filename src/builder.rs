use alloc::vec::Vec;

use crate::codec;
use crate::date::BcdDateTime;
use crate::error::{BufferError, Result};

/// Byte order used when appending or reading a multi-byte integer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Endianness {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

/// Accumulates a fixed-layout binary record, one field at a time.
///
/// Every `append_*` method returns `&mut Self` (or `Result<&mut Self>` when the argument can be
/// rejected), so a record can be written as one chain of calls:
///
/// ```
/// # use bcd_buffer::{BufferBuilder, Endianness};
/// let mut b = BufferBuilder::new();
/// b.append_u8(0x02)
///     .append_uint(0x1234, 2, Endianness::Big)?
///     .append_bcd(59)
///     .append_zeroes(2);
/// assert_eq!(b.snapshot(), [0x02, 0x12, 0x34, 0x59, 0x00, 0x00]);
/// # Ok::<(), bcd_buffer::BufferError>(())
/// ```
///
/// Arguments are always validated before anything is written. If an `append_*` method returns
/// `Err`, the builder is unchanged.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct BufferBuilder {
    pub(crate) out: Vec<u8>,
}

impl BufferBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Creates an empty builder with room for `len` bytes.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            out: Vec::with_capacity(len),
        }
    }

    /// Creates a builder that already contains a copy of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self { out: data.to_vec() }
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// True if nothing has been written, or the builder was cleared.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Borrows the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.out
    }

    /// Views the bytes written so far as a byte string. Useful for `Debug` output of records that
    /// are mostly ASCII.
    #[cfg(feature = "bstr")]
    pub fn as_bstr(&self) -> &bstr::BStr {
        bstr::BStr::new(&self.out)
    }

    /// Returns a copy of the bytes written so far.
    ///
    /// The copy is independent of the builder; later appends do not change it, and changing it
    /// does not change the builder. Calling this does not modify the builder.
    pub fn snapshot(&self) -> Vec<u8> {
        self.out.clone()
    }

    /// Extracts the inner buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }

    /// Discards everything written so far. The allocation is kept and reused by later appends.
    pub fn clear(&mut self) -> &mut Self {
        self.out.clear();
        self
    }

    /// Appends all of `bytes`.
    pub fn append_slice(&mut self, bytes: &[u8]) -> &mut Self {
        self.out.extend_from_slice(bytes);
        self
    }

    /// Appends a small, fixed-size array of bytes.
    pub fn append_cbytes<const N: usize>(&mut self, value: [u8; N]) -> &mut Self {
        self.append_slice(&value)
    }

    /// Appends a single byte.
    pub fn append_u8(&mut self, value: u8) -> &mut Self {
        self.out.push(value);
        self
    }

    /// Appends `value` as an unsigned integer that is exactly `byte_count` bytes wide.
    ///
    /// `byte_count` must be in `1..=8` and `value` must be at most `2^(8 * byte_count) - 1`;
    /// otherwise this fails with [`BufferError::InvalidWidth`] or [`BufferError::ValueTooWide`]
    /// and nothing is written. Widths that have no native Rust type (3, 5, 6, 7) are supported.
    pub fn append_uint(
        &mut self,
        value: u64,
        byte_count: usize,
        endianness: Endianness,
    ) -> Result<&mut Self> {
        check_width(value, byte_count)?;

        let field = codec::resize(&value.to_le_bytes(), byte_count);
        match endianness {
            Endianness::Little => self.append_slice(&field),
            Endianness::Big => self.append_slice(&codec::reverse_endianness(&field)),
        };
        Ok(self)
    }

    /// Appends the two lowest decimal digits of `value` as one BCD byte.
    ///
    /// Values of 100 and more are truncated to their two lowest digits; see
    /// [`codec::encode_bcd`].
    pub fn append_bcd(&mut self, value: u32) -> &mut Self {
        self.append_u8(codec::encode_bcd(value))
    }

    /// Appends `count` bytes of `src`, starting at `start`.
    ///
    /// A `count` of 0 means "everything from `start` to the end of `src`". Fails with
    /// [`BufferError::OutOfBounds`] if the range does not lie within `src`. Appending from an
    /// empty source with `start == 0` and `count == 0` does nothing.
    pub fn append_bytes(&mut self, src: &[u8], start: usize, count: usize) -> Result<&mut Self> {
        let out_of_bounds = BufferError::OutOfBounds {
            start,
            count,
            len: src.len(),
        };

        let Some(remaining) = src.len().checked_sub(start) else {
            return Err(out_of_bounds);
        };
        let count = if count == 0 { remaining } else { count };
        if count > remaining {
            return Err(out_of_bounds);
        }

        Ok(self.append_slice(&src[start..start + count]))
    }

    /// Appends `s` encoded as ASCII, without any length prefix or terminator. Characters that are
    /// not ASCII are written as `?`.
    pub fn append_ascii_str(&mut self, s: &str) -> &mut Self {
        self.append_slice(&codec::ascii_encode(s))
    }

    /// Appends `count` zero bytes.
    pub fn append_zeroes(&mut self, count: usize) -> &mut Self {
        self.out.resize(self.out.len() + count, 0);
        self
    }

    /// Appends a BCD timestamp, one byte per field.
    ///
    /// The fields are year mod 100, month, day, hour, minute, second and, if `include_millis` is
    /// set, millisecond (of which only the two lowest decimal digits survive). If `reversed` is
    /// set the fields are written in the opposite order, i.e. starting with the second (or
    /// millisecond) and ending with the year.
    pub fn append_date(
        &mut self,
        dt: &BcdDateTime,
        include_millis: bool,
        reversed: bool,
    ) -> &mut Self {
        let all = dt.fields();
        let fields = if include_millis { &all[..] } else { &all[..6] };

        if reversed {
            fields.iter().rev().for_each(|&f| {
                self.append_bcd(f);
            });
        } else {
            fields.iter().for_each(|&f| {
                self.append_bcd(f);
            });
        }
        self
    }
}

/// Checks that `value` can be represented in `byte_count` bytes.
pub(crate) fn check_width(value: u64, byte_count: usize) -> Result<()> {
    match byte_count {
        8 => Ok(()),
        1..=7 if value >> (8 * byte_count) == 0 => Ok(()),
        1..=7 => {
            tracing::trace!(value, byte_count, "value does not fit in field");
            Err(BufferError::ValueTooWide { value, byte_count })
        }
        _ => Err(BufferError::InvalidWidth { byte_count }),
    }
}

impl AsRef<[u8]> for BufferBuilder {
    fn as_ref(&self) -> &[u8] {
        &self.out
    }
}

impl From<Vec<u8>> for BufferBuilder {
    fn from(out: Vec<u8>) -> Self {
        Self { out }
    }
}

impl From<BufferBuilder> for Vec<u8> {
    fn from(b: BufferBuilder) -> Self {
        b.out
    }
}

impl Extend<u8> for BufferBuilder {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.out.extend(iter);
    }
}

#[cfg(feature = "std")]
impl std::io::Write for BufferBuilder {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
