//! Infix operators over dimension markers.
//!
//! All five operators are evaluated at the type level; the method bodies move
//! zero-sized values around and compile to nothing.
//!
//! - `+` and `-` exist only between *identical* dimension types. Adding
//!   quantities of two different dimensions is not a runtime error, it simply
//!   has no impl:
//!
//! ```compile_fail
//! use dimal_core::si::{Length, Time};
//!
//! let _ = Length::default() + Time::default(); // no `Add<Time>` for `Length`
//! ```
//!
//! - `*` and `/` accept any pair of dimensions and produce the [`Prod`] /
//!   [`Quot`] composite whose axes are the sum / difference of the operands'.
//! - `==` compares the seven axis values and is usable across canonical and
//!   composite forms.
//!
//! Applying an operator to a non-dimension operand fails the `Dimension`
//! bound:
//!
//! ```compile_fail
//! use dimal_core::si::Length;
//!
//! let _ = Length::default() * 2.0; // f64 is not a Dimension
//! ```

use core::ops::{Add, Div, Mul, Sub};

use crate::dimension::{identical, Dim, Dimension, Prod, Quot};

// ===== Canonical form =====

impl<
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Add for Dim<T, L, M, I, TH, N, J>
{
    type Output = Self;

    /// Addition of like dimensions leaves the dimension unchanged.
    #[inline]
    fn add(self, _rhs: Self) -> Self {
        self
    }
}

impl<
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Sub for Dim<T, L, M, I, TH, N, J>
{
    type Output = Self;

    #[inline]
    fn sub(self, _rhs: Self) -> Self {
        self
    }
}

impl<
        R: Dimension,
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Mul<R> for Dim<T, L, M, I, TH, N, J>
{
    type Output = Prod<Self, R>;

    /// Multiplying dimensions adds their exponents.
    #[inline]
    fn mul(self, _rhs: R) -> Self::Output {
        Prod::default()
    }
}

impl<
        R: Dimension,
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Div<R> for Dim<T, L, M, I, TH, N, J>
{
    type Output = Quot<Self, R>;

    /// Dividing dimensions subtracts their exponents.
    #[inline]
    fn div(self, _rhs: R) -> Self::Output {
        Quot::default()
    }
}

impl<
        R: Dimension,
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > PartialEq<R> for Dim<T, L, M, I, TH, N, J>
{
    #[inline]
    fn eq(&self, _other: &R) -> bool {
        identical::<Self, R>()
    }
}

impl<
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Eq for Dim<T, L, M, I, TH, N, J>
{
}

// ===== Product form =====

impl<A: Dimension, B: Dimension> Add for Prod<A, B> {
    type Output = Self;

    #[inline]
    fn add(self, _rhs: Self) -> Self {
        self
    }
}

impl<A: Dimension, B: Dimension> Sub for Prod<A, B> {
    type Output = Self;

    #[inline]
    fn sub(self, _rhs: Self) -> Self {
        self
    }
}

impl<A: Dimension, B: Dimension, R: Dimension> Mul<R> for Prod<A, B> {
    type Output = Prod<Self, R>;

    #[inline]
    fn mul(self, _rhs: R) -> Self::Output {
        Prod::default()
    }
}

impl<A: Dimension, B: Dimension, R: Dimension> Div<R> for Prod<A, B> {
    type Output = Quot<Self, R>;

    #[inline]
    fn div(self, _rhs: R) -> Self::Output {
        Quot::default()
    }
}

impl<A: Dimension, B: Dimension, R: Dimension> PartialEq<R> for Prod<A, B> {
    #[inline]
    fn eq(&self, _other: &R) -> bool {
        identical::<Self, R>()
    }
}

impl<A: Dimension, B: Dimension> Eq for Prod<A, B> {}

// ===== Quotient form =====

impl<A: Dimension, B: Dimension> Add for Quot<A, B> {
    type Output = Self;

    #[inline]
    fn add(self, _rhs: Self) -> Self {
        self
    }
}

impl<A: Dimension, B: Dimension> Sub for Quot<A, B> {
    type Output = Self;

    #[inline]
    fn sub(self, _rhs: Self) -> Self {
        self
    }
}

impl<A: Dimension, B: Dimension, R: Dimension> Mul<R> for Quot<A, B> {
    type Output = Prod<Self, R>;

    #[inline]
    fn mul(self, _rhs: R) -> Self::Output {
        Prod::default()
    }
}

impl<A: Dimension, B: Dimension, R: Dimension> Div<R> for Quot<A, B> {
    type Output = Quot<Self, R>;

    #[inline]
    fn div(self, _rhs: R) -> Self::Output {
        Quot::default()
    }
}

impl<A: Dimension, B: Dimension, R: Dimension> PartialEq<R> for Quot<A, B> {
    #[inline]
    fn eq(&self, _other: &R) -> bool {
        identical::<Self, R>()
    }
}

impl<A: Dimension, B: Dimension> Eq for Quot<A, B> {}

#[cfg(test)]
mod tests {
    use crate::dimension::{Dim, Dimension, Prod, Quot};

    #[test]
    fn mul_and_div_chain_across_composite_forms() {
        let a: Dim<1, 2> = Dim::default();
        let b: Dim<0, 1, 3> = Dim::default();
        let c: Dim<-1> = Dim::default();

        let chained = a * b / c * a;
        let flat: Dim<3, 5, 3> = Dim::default();
        assert!(chained == flat);
    }

    #[test]
    fn composite_forms_support_add_sub_with_themselves() {
        let p = Dim::<1>::default() * Dim::<1>::default();
        assert!(p + p == p);
        assert!(p - p == p);

        let q = Dim::<3>::default() / Dim::<2>::default();
        assert!(q + q == q);
        assert!(q - q == q);
    }

    #[test]
    fn equality_is_axiswise_not_nominal() {
        // The same dimension reached through different operator trees.
        type ViaProd = Prod<Dim<1>, Dim<2>>;
        type ViaQuot = Quot<Dim<4>, Dim<1>>;
        assert!(ViaProd::default() == ViaQuot::default());
        assert!(ViaProd::default() == Dim::<3>::default());
        assert!(ViaProd::default() != Dim::<4>::default());
    }

    #[test]
    fn operator_results_expose_axis_constants() {
        type P = Prod<Dim<1, 2, 3, 5, 8, 13, 21>, Dim<1, -1, 2, -2, 3, -3, 4>>;
        assert_eq!(P::SCALED, [2, 1, 5, 3, 11, 10, 25]);
    }
}
