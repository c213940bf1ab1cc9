//! Core type system for compile-time SI dimension algebra.
//!
//! `dimal-core` models physical dimensions entirely in the type system:
//!
//! - A *dimension* is a zero-sized marker type implementing [`Dimension`],
//!   carrying the exponents of the seven SI base quantities (time, length,
//!   mass, current, temperature, amount, intensity) as scaled integers.
//! - The canonical form is [`Dim`], parameterized by up to seven `i32` axis
//!   values with trailing defaults of zero.
//! - Exponents are fixed-point rationals: a stored axis value denotes the
//!   exponent divided by [`DIM_UNIT`] (60), so exponents like `1/2` or `2/3`
//!   stay exact while all arithmetic remains in integers.
//! - The `*`, `/`, `+`, `-` and `==` operators combine marker values
//!   following the rules of dimensional analysis, checked entirely at
//!   compile time.
//!
//! Most users should depend on `dimal` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions: code mixing incompatible
//!   dimensions does not type-check, rather than failing at runtime.
//! - Zero runtime cost: markers are zero-sized, operators reduce to nothing.
//! - Rational exponents (square roots and the like) without floating point,
//!   via the fixed-point scaling scheme.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion or any runtime representation of magnitudes; there is
//!   no `f64` anywhere in the model.
//! - Parsing of unit strings.
//! - Exponents outside the fixed-denominator scheme (denominators that do
//!   not divide [`DIM_UNIT`] cannot be represented exactly).
//!
//! # Quick start
//!
//! ```rust
//! use dimal_core::si::{Force, Length, Mass, Pressure, Time};
//!
//! let t = Time::default();
//! let l = Length::default();
//! let m = Mass::default();
//!
//! // Exponents add under `*` and subtract under `/`.
//! let f = m * (l / (t * t));
//! assert!(f == Force::default());
//! assert!(f / (l * l) == Pressure::default());
//! ```
//!
//! # Incorrect usage (type error)
//!
//! Addition and subtraction exist only between identical dimensions; a
//! mismatch is rejected by the compiler, not reported at runtime:
//!
//! ```compile_fail
//! use dimal_core::Dim;
//!
//! let _ = Dim::<1>::default() + Dim::<-1>::default();
//! ```
//!
//! ```compile_fail
//! use dimal_core::Dim;
//!
//! let _ = Dim::<1>::default() - Dim::<-1>::default();
//! ```
//!
//! Operands that are not dimensions fail the [`Dimension`] bound:
//!
//! ```compile_fail
//! use dimal_core::si::Length;
//!
//! let _ = Length::default() * 2.0; // `f64` is not a dimension
//! ```
//!
//! # Panics and errors
//!
//! This crate defines no error type and has no runtime failure path. Every
//! contract violation — mismatched dimensions under `+`/`-`, a non-dimension
//! operand, a hand-rolled type posing as a dimension — is a compile-time
//! rejection.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod dimension;
mod display;
mod ops;

pub use dimension::{identical, Dim, Dimension, Prod, Quot, DIM_UNIT};

pub mod si;
