//! # knotnum
//!
//! Exact, arbitrary-precision signed integers for knot and braid invariant
//! computations.
//!
//! Every higher-level numeric type of the toolkit (rational numbers,
//! polynomial coefficients, matrix entries) is built on [`BigInt`]. The
//! engine stores magnitudes as base-65536 limbs and implements schoolbook
//! addition, subtraction and multiplication, Knuth's normalized long
//! division, binary GCD, and decimal text conversion.
//!
//! # Arithmetic
//!
//! ```
//! use knotnum::BigInt;
//!
//! let a = BigInt::from(100000);
//! let b = BigInt::from(3);
//!
//! assert_eq!(&a / &b, BigInt::from(33333));
//! assert_eq!(&a % &b, BigInt::from(1));
//! assert_eq!(knotnum::gcd(&BigInt::from(48), &BigInt::from(18)), BigInt::from(6));
//! ```
//!
//! Division by zero panics through the `/` and `%` operators, exactly like
//! Rust's primitive integers. Code that prefers to handle it uses
//! [`BigInt::checked_div`], [`BigInt::checked_rem`] or [`BigInt::div_rem`],
//! which return a [`Result`].
//!
//! # Text
//!
//! ```
//! use knotnum::BigInt;
//!
//! let x: BigInt = " -42".parse().unwrap();
//! assert_eq!(x, BigInt::from(-42));
//!
//! let square = BigInt::from(65536) * BigInt::from(65536);
//! assert_eq!(square.to_string(), "4294967296");
//! assert_eq!(square.limbs(), &[0, 0, 1]);
//! ```
//!
//! Several numbers separated by whitespace can be read one at a time with a
//! [`StreamDeserializer`]:
//!
//! ```
//! use knotnum::{BigInt, Deserializer};
//!
//! let stream = Deserializer::from_str("1 -2\n+3").into_iter();
//! let values: Vec<BigInt> = stream.map(Result::unwrap).collect();
//! assert_eq!(values, [BigInt::from(1), BigInt::from(-2), BigInt::from(3)]);
//! ```
//!
//! # Generic numeric code
//!
//! Algorithms that must work over several numeric representations are
//! written against the [`Scalar`] trait and instantiated with the concrete
//! type the caller picks.

#![doc(html_root_url = "https://docs.rs/knotnum/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::many_single_char_names,
    clippy::needless_range_loop,
    clippy::suspicious_arithmetic_impl,
    clippy::suspicious_op_assign_impl
)]
// Ignored clippy_pedantic lints
#![allow(
    // limb arithmetic moves between widths on purpose
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "knotnum requires that either `std` (default) or `alloc` feature is enabled"
}

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

#[macro_use]
mod macros;

pub mod bigint;
pub mod de;
pub mod error;
pub mod read;
pub mod scalar;
pub mod ser;

#[cfg(feature = "std")]
mod io;
#[cfg(feature = "std")]
mod iter;

#[doc(inline)]
pub use crate::bigint::{gcd, lcm, BigInt, Limb};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::de::from_reader;
#[doc(inline)]
pub use crate::de::{from_slice, from_str, Deserializer, StreamDeserializer};
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::scalar::Scalar;
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::ser::to_writer;
#[doc(inline)]
pub use crate::ser::{to_string, to_vec};
