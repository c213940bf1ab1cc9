//! Integration tests for the dimension algebra exposed by the `dimal`
//! facade.
//!
//! Mismatched `+`/`-` operands and counterfeit `Dimension` impls are covered
//! by `compile_fail` doctests in the library crates; everything here is
//! expected to type-check.

use core::mem::size_of;

use dimal::si::{Dimensionless, Length, Time, Velocity};
use dimal::{identical, Dim, Dimension, Prod, Quot, DIM_UNIT};

#[test]
fn equality_is_reflexive_and_structural() {
    assert!(Dim::<1>::default() == Dim::<1>::default());
    assert!(Dim::<-4>::default() == Dim::<-4>::default());
    assert!(Dim::<1, 2, 3, 4, 5, 6, 7>::default() == Dim::<1, 2, 3, 4, 5, 6, 7>::default());
}

#[test]
fn differing_on_any_axis_breaks_equality() {
    assert!(Dim::<2>::default() != Dim::<3>::default());
    assert!(Dim::<1, 2, 3, 4, 5, 6, 7>::default() != Dim::<1, 2, 3, 4, 5, 6, 0>::default());

    const _: () = assert!(!identical::<Dim<2>, Dim<3>>());
}

#[test]
fn adding_like_dimensions_preserves_the_dimension() {
    let d: Dim<1, -1, 2, -3, 5, -8, 13> = Dim::default();
    assert!(d + d == d);
    assert!(d - d == d);

    let one: Dim<1> = Dim::default();
    assert!(one + one == one);
    assert!(one - one == one);
}

#[test]
fn omitted_trailing_axes_default_to_zero() {
    let full: Dim<6, 5, 4, 3, 2, 1, 0> = Dim::default();
    let short: Dim<6, 5, 4, 3, 2, 1> = Dim::default();
    // Same type; addition compiles and yields the common dimension.
    assert!(full + short == full);
}

#[test]
fn multiplication_sums_each_axis() {
    let a: Dim<1, 2, 3, 5, 8, 13, 21> = Dim::default();
    let b: Dim<1, -1, 2, -2, 3, -3, 4> = Dim::default();
    let product: Dim<2, 1, 5, 3, 11, 10, 25> = Dim::default();
    assert!(a * b == product);

    assert!(Dim::<1>::default() * Dim::<2>::default() == Dim::<3>::default());
}

#[test]
fn division_subtracts_each_axis() {
    assert!(Dim::<3>::default() / Dim::<2>::default() == Dim::<1>::default());

    // Dimensionless divided by a dimension negates its axes.
    let inverted = Dimensionless::default() / Dim::<5>::default();
    assert!(inverted == Dim::<-5>::default());
}

#[test]
fn operators_compose_with_named_dimensions() {
    let v = Length::default() / Time::default();
    assert!(v == Velocity::default());
    assert!(v * Time::default() == Length::default());

    const _: () = assert!(identical::<
        Prod<Quot<Length, Time>, Time>,
        Length,
    >());
}

#[test]
fn markers_carry_no_runtime_data() {
    const _: () = assert!(size_of::<Dim<1, 2, 3, 4, 5, 6, 7>>() == 0);
    const _: () = assert!(size_of::<Prod<Length, Time>>() == 0);
    const _: () = assert!(size_of::<Quot<Velocity, Time>>() == 0);
}

#[test]
fn axes_are_readable_by_name_through_the_capability_trait() {
    assert_eq!(<Velocity as Dimension>::TIME, -DIM_UNIT);
    assert_eq!(<Velocity as Dimension>::LENGTH, DIM_UNIT);
    assert_eq!(<Velocity as Dimension>::MASS, 0);
    assert_eq!(
        <Quot<Length, Time> as Dimension>::SCALED,
        <Velocity as Dimension>::SCALED
    );
}
