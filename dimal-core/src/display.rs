//! Human-readable formatting of dimension markers.
//!
//! Non-zero axes print as ISO 80000 dimension symbols with their exponent in
//! lowest terms (`T`, `L^-1`, `M^(1/2)`, …); the dimensionless dimension
//! prints as `1`. Formatting reads only the associated constants, so the
//! output is fully determined by the marker type.

use core::fmt::{self, Display, Formatter};

use crate::dimension::{Dim, Dimension, Prod, Quot, DIM_UNIT};

/// Dimension symbols in canonical axis order (`Th` stands in for theta).
const SYMBOLS: [&str; 7] = ["T", "L", "M", "I", "Th", "N", "J"];

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    if a == 0 {
        1
    } else {
        a
    }
}

/// Reduce the scaled axis value `scaled` to the exponent `scaled / DIM_UNIT`
/// in lowest terms, as `(numerator, denominator)` with a positive
/// denominator.
pub(crate) const fn reduce(scaled: i32) -> (i32, i32) {
    if scaled == 0 {
        return (0, 1);
    }
    let g = gcd(scaled.unsigned_abs(), DIM_UNIT as u32) as i32;
    (scaled / g, DIM_UNIT / g)
}

fn fmt_axes(f: &mut Formatter<'_>, axes: [i32; 7]) -> fmt::Result {
    let mut first = true;
    for (symbol, &scaled) in SYMBOLS.iter().zip(axes.iter()) {
        if scaled == 0 {
            continue;
        }
        if !first {
            f.write_str(" ")?;
        }
        first = false;

        let (num, den) = reduce(scaled);
        if num == 1 && den == 1 {
            f.write_str(symbol)?;
        } else if den == 1 {
            write!(f, "{symbol}^{num}")?;
        } else {
            write!(f, "{symbol}^({num}/{den})")?;
        }
    }
    if first {
        f.write_str("1")?;
    }
    Ok(())
}

impl<
        const T: i32,
        const L: i32,
        const M: i32,
        const I: i32,
        const TH: i32,
        const N: i32,
        const J: i32,
    > Display for Dim<T, L, M, I, TH, N, J>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_axes(f, <Self as Dimension>::SCALED)
    }
}

impl<A: Dimension, B: Dimension> Display for Prod<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_axes(f, <Self as Dimension>::SCALED)
    }
}

impl<A: Dimension, B: Dimension> Display for Quot<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_axes(f, <Self as Dimension>::SCALED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Dimensionless, Energy, Pressure, Velocity};
    use proptest::prelude::*;
    use std::format;
    use std::string::ToString;

    #[test]
    fn dimensionless_prints_as_one() {
        assert_eq!(Dimensionless::default().to_string(), "1");
    }

    #[test]
    fn unit_exponents_print_bare_symbols() {
        assert_eq!(Velocity::default().to_string(), "T^-1 L");
        assert_eq!(Pressure::default().to_string(), "T^-2 L^-1 M");
        assert_eq!(Energy::default().to_string(), "T^-2 L^2 M");
    }

    #[test]
    fn rational_exponents_print_reduced_fractions() {
        // Square root of length: stored DIM_UNIT / 2.
        let sqrt_len: Dim<0, { DIM_UNIT / 2 }> = Dim::default();
        assert_eq!(sqrt_len.to_string(), "L^(1/2)");

        let cbrt_time: Dim<{ DIM_UNIT / 3 }> = Dim::default();
        assert_eq!(cbrt_time.to_string(), "T^(1/3)");

        let odd: Dim<0, 0, 0, 0, 0, 0, -90> = Dim::default();
        assert_eq!(odd.to_string(), "J^(-3/2)");
    }

    #[test]
    fn composite_forms_format_like_their_canonical_dimension() {
        let v = Dim::<0, { DIM_UNIT }>::default() / Dim::<{ DIM_UNIT }>::default();
        assert_eq!(format!("{v}"), Velocity::default().to_string());
    }

    #[test]
    fn reduce_handles_exact_multiples() {
        assert_eq!(reduce(0), (0, 1));
        assert_eq!(reduce(DIM_UNIT), (1, 1));
        assert_eq!(reduce(-2 * DIM_UNIT), (-2, 1));
        assert_eq!(reduce(30), (1, 2));
        assert_eq!(reduce(-45), (-3, 4));
    }

    proptest! {
        #[test]
        fn reduce_preserves_value_in_lowest_terms(scaled in -100_000i32..=100_000) {
            let (num, den) = reduce(scaled);
            // Denominator is positive and divides the scaling unit.
            prop_assert!(den > 0);
            prop_assert_eq!(DIM_UNIT % den, 0);
            // Fraction is fully reduced and equals scaled / DIM_UNIT.
            prop_assert_eq!(gcd(num.unsigned_abs(), den as u32), 1);
            prop_assert_eq!(num as i64 * DIM_UNIT as i64, scaled as i64 * den as i64);
        }
    }
}
