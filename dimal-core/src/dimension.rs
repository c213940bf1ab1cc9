//! Dimension markers and the capability trait.

use core::marker::PhantomData;

/// Fixed-point scaling denominator for axis exponents.
///
/// A stored axis value `s` denotes the true exponent `s / DIM_UNIT`. With
/// `DIM_UNIT = 60`, every rational exponent with denominator 2, 3, 4, 5 or 6
/// is represented exactly while all arithmetic on the representation stays in
/// integers. Downstream code that needs the exponent of an axis must divide
/// the stored value by this constant.
///
/// ```rust
/// use dimal_core::{Dimension, DIM_UNIT};
/// use dimal_core::si::Length;
///
/// // Length is L^1, stored scaled by DIM_UNIT.
/// assert_eq!(<Length as Dimension>::LENGTH / DIM_UNIT, 1);
/// ```
pub const DIM_UNIT: i32 = 60;

mod sealed {
    pub trait Sealed {}
}

/// Capability trait for **dimensions**: points in the 7-axis space of SI base
/// quantity exponents.
///
/// Every implementor exposes its seven scaled axis values as associated
/// constants, by name, in the fixed order time, length, mass, current,
/// temperature, amount, intensity. Values are integers scaled by
/// [`DIM_UNIT`]; divide by [`DIM_UNIT`] to recover the true (possibly
/// rational) exponent.
///
/// Downstream generic code constrains itself to valid dimensions with an
/// ordinary bound:
///
/// ```rust
/// use dimal_core::Dimension;
///
/// fn exponent_of_time<D: Dimension>() -> i32 {
///     D::TIME
/// }
/// ```
///
/// The trait is sealed. Its only implementors are the canonical [`Dim`]
/// marker and the composite forms [`Prod`] and [`Quot`] produced by the `*`
/// and `/` operators, so a type either *is* one of those markers or it is not
/// a dimension at all. A hand-written look-alike that merely exposes seven
/// constants is rejected where it is defined:
///
/// ```compile_fail
/// use dimal_core::Dimension;
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// struct Counterfeit;
///
/// // error: the `Sealed` supertrait is not nameable outside `dimal-core`
/// impl Dimension for Counterfeit {
///     const TIME: i32 = 0;
///     const LENGTH: i32 = 0;
///     const MASS: i32 = 0;
///     const CURRENT: i32 = 0;
///     const TEMPERATURE: i32 = 0;
///     const AMOUNT: i32 = 0;
///     const INTENSITY: i32 = 0;
/// }
/// ```
pub trait Dimension: sealed::Sealed + Copy + Default + core::fmt::Debug + 'static {
    /// Scaled exponent of time.
    const TIME: i32;
    /// Scaled exponent of length.
    const LENGTH: i32;
    /// Scaled exponent of mass.
    const MASS: i32;
    /// Scaled exponent of electric current.
    const CURRENT: i32;
    /// Scaled exponent of thermodynamic temperature.
    const TEMPERATURE: i32;
    /// Scaled exponent of amount of substance.
    const AMOUNT: i32;
    /// Scaled exponent of luminous intensity.
    const INTENSITY: i32;

    /// All seven scaled axis values, in canonical order.
    const SCALED: [i32; 7] = [
        Self::TIME,
        Self::LENGTH,
        Self::MASS,
        Self::CURRENT,
        Self::TEMPERATURE,
        Self::AMOUNT,
        Self::INTENSITY,
    ];
}

/// The canonical dimension marker.
///
/// The seven const parameters are the scaled axis values in the order time,
/// length, mass, current, temperature, amount, intensity. Trailing parameters
/// default to zero, so omitted axes are dimensionless: `Dim<{ DIM_UNIT }>` is
/// the dimension of time and plain `Dim` is the dimensionless quantity.
///
/// `Dim` is a zero-sized unit struct. Two `Dim` types are the same Rust type
/// exactly when all seven axis values coincide, so dimension identity is
/// structural and decided by the type system. Default-constructed values
/// exist only to drive operator overload resolution; they carry no data.
///
/// ```rust
/// use core::mem::size_of;
/// use dimal_core::Dim;
///
/// let velocity: Dim<-60, 60> = Dim::default();
/// let same: Dim<-60, 60> = Dim::default();
/// assert!(velocity == same);
/// assert_eq!(size_of::<Dim<-60, 60>>(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Dim<
    const T: i32 = 0,
    const L: i32 = 0,
    const M: i32 = 0,
    const I: i32 = 0,
    const TH: i32 = 0,
    const N: i32 = 0,
    const J: i32 = 0,
>;

impl<
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > sealed::Sealed for Dim<T, L, M, I, TH, N, J>
{
}

impl<
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Dimension for Dim<T, L, M, I, TH, N, J>
{
    const TIME: i32 = T;
    const LENGTH: i32 = L;
    const MASS: i32 = M;
    const CURRENT: i32 = I;
    const TEMPERATURE: i32 = TH;
    const AMOUNT: i32 = N;
    const INTENSITY: i32 = J;
}

/// Dimension formed by multiplying two dimensions: `A * B`.
///
/// Each axis is the sum of the corresponding operand axes, computed in the
/// associated constants of the [`Dimension`] impl. Values of this type are
/// produced by the `*` operator; like [`Dim`], it is a zero-sized marker.
///
/// `Prod<A, B>` and the canonical `Dim` with the same axes are distinct Rust
/// types but the *same dimension*: [`identical`] and `==` treat them as
/// equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct Prod<A: Dimension, B: Dimension>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> sealed::Sealed for Prod<A, B> {}

impl<A: Dimension, B: Dimension> Dimension for Prod<A, B> {
    const TIME: i32 = A::TIME + B::TIME;
    const LENGTH: i32 = A::LENGTH + B::LENGTH;
    const MASS: i32 = A::MASS + B::MASS;
    const CURRENT: i32 = A::CURRENT + B::CURRENT;
    const TEMPERATURE: i32 = A::TEMPERATURE + B::TEMPERATURE;
    const AMOUNT: i32 = A::AMOUNT + B::AMOUNT;
    const INTENSITY: i32 = A::INTENSITY + B::INTENSITY;
}

/// Dimension formed by dividing two dimensions: `A / B`.
///
/// Each axis is the difference of the corresponding operand axes. Produced by
/// the `/` operator; zero-sized.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quot<A: Dimension, B: Dimension>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> sealed::Sealed for Quot<A, B> {}

impl<A: Dimension, B: Dimension> Dimension for Quot<A, B> {
    const TIME: i32 = A::TIME - B::TIME;
    const LENGTH: i32 = A::LENGTH - B::LENGTH;
    const MASS: i32 = A::MASS - B::MASS;
    const CURRENT: i32 = A::CURRENT - B::CURRENT;
    const TEMPERATURE: i32 = A::TEMPERATURE - B::TEMPERATURE;
    const AMOUNT: i32 = A::AMOUNT - B::AMOUNT;
    const INTENSITY: i32 = A::INTENSITY - B::INTENSITY;
}

/// Compile-time dimension identity: `true` iff all seven scaled axis values
/// of `A` and `B` coincide.
///
/// This is the `==` operator in const-evaluable form; it compares structure,
/// not Rust types, so a composite form and its canonical [`Dim`] compare
/// equal.
///
/// ```rust
/// use dimal_core::{identical, Dim, Prod};
///
/// const _: () = assert!(identical::<Prod<Dim<1>, Dim<2>>, Dim<3>>());
/// const _: () = assert!(!identical::<Dim<2>, Dim<3>>());
/// ```
pub const fn identical<A: Dimension, B: Dimension>() -> bool {
    A::TIME == B::TIME
        && A::LENGTH == B::LENGTH
        && A::MASS == B::MASS
        && A::CURRENT == B::CURRENT
        && A::TEMPERATURE == B::TEMPERATURE
        && A::AMOUNT == B::AMOUNT
        && A::INTENSITY == B::INTENSITY
}
