//! The pieces of `std::io` the stream reader and writer are built on.
//!
//! Parsing from `&str` and `&[u8]` and printing to `String` need nothing
//! from here, so this module only exists when the `std` feature is enabled.

pub use std::io::{Bytes, Error, ErrorKind, Read, Result, Write};
