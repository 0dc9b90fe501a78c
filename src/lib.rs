//! Builds and reads fixed-layout binary records, of the kind used by legacy devices and file
//! formats: integers of any width from 1 to 8 bytes in either byte order, BCD-encoded digits and
//! timestamps, raw byte ranges, and ASCII strings.
//!
//! [`BufferBuilder`] accumulates a record, [`BufferReader`] picks one apart, and [`codec`] holds
//! the stateless conversions both are built on. The record layout itself is entirely up to the
//! caller; nothing here knows or checks a schema.
//!
//! # Features
//! * `std` (default): stream ingestion with [`BufferBuilder::ingest_from`] and [`BinaryFile`].
//!   Without it, this crate is `no_std` and only needs `alloc`.
//! * `bstr` (default): byte-string views of records and ASCII data.
//! * `tokio`: `BufferBuilder::ingest_from_async`, over `tokio::io::AsyncRead`.
//! * `chrono`: `BcdDateTime::from_chrono`.
//!
//! The async and `chrono` tests only build with their features; CI runs the suite with
//! `--all-features` as well as with default and no default features.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod builder;
pub mod codec;
mod date;
mod error;
#[cfg(feature = "std")]
mod file;
#[cfg(feature = "std")]
mod ingest;
mod reader;


pub use builder::{BufferBuilder, Endianness};
pub use date::BcdDateTime;
pub use error::{BufferError, Result};
#[cfg(feature = "std")]
pub use file::BinaryFile;
pub use reader::BufferReader;
