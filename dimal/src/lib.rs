//! Compile-time dimensional analysis over the seven SI base quantities.
//!
//! `dimal` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimal-core`: the canonical [`Dim`] marker, the [`Dimension`]
//! capability trait, the composite [`Prod`]/[`Quot`] forms, and the named
//! dimensions under [`si`].
//!
//! The core idea is: a dimension is a zero-sized type, and the arithmetic of
//! dimensional analysis is carried out by the compiler during type checking.
//! There is nothing to execute at runtime.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add a length to a
//!   time — the expression does not compile).
//! - Tracks exponent arithmetic under `*` and `/` at the type level,
//!   including rational exponents via the fixed-point [`DIM_UNIT`] scheme.
//! - Gives downstream quantity libraries a capability bound ([`Dimension`])
//!   and a compile-time identity check ([`identical`]) to build on.
//!
//! # What this crate does not try to solve
//!
//! - Unit conversion, runtime magnitudes, or parsing of unit strings.
//! - Arbitrary-precision exponents: denominators must divide [`DIM_UNIT`].
//!
//! # Quick start
//!
//! ```rust
//! use dimal::si::{Energy, Force, Length, Power, Time};
//!
//! let work = Force::default() * Length::default();
//! assert!(work == Energy::default());
//! assert!(work / Time::default() == Power::default());
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimal::si::{Length, Mass};
//!
//! let _ = Length::default() + Mass::default(); // cannot add different dimensions
//! ```
//!
//! # Panics and errors
//!
//! This crate defines no error type and has no runtime failure path; every
//! misuse is rejected during compilation.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use dimal_core::{identical, Dim, Dimension, Prod, Quot, DIM_UNIT};

pub use dimal_core::si;
