//! Named SI dimensions.
//!
//! Base and derived dimensions as aliases of the canonical [`Dim`] form, all
//! scaled by [`DIM_UNIT`]. Because every alias expands to the canonical
//! marker, two aliases that denote the same dimension are the same Rust type
//! and may be added and subtracted freely; a composite operator result such
//! as `Quot<Length, Time>` is a different type from `Velocity` but compares
//! equal to it.
//!
//! ```rust
//! use dimal_core::si::{Length, Time, Velocity};
//!
//! let v = Length::default() / Time::default();
//! assert!(v == Velocity::default());
//! ```

use crate::dimension::{identical, Dim, Prod, Quot, DIM_UNIT};

// ===== Base dimensions =====

/// The dimensionless quantity: all seven axes zero.
pub type Dimensionless = Dim;

/// Time, `T`.
pub type Time = Dim<{ DIM_UNIT }>;

/// Length, `L`.
pub type Length = Dim<0, { DIM_UNIT }>;

/// Mass, `M`.
pub type Mass = Dim<0, 0, { DIM_UNIT }>;

/// Electric current, `I`.
pub type Current = Dim<0, 0, 0, { DIM_UNIT }>;

/// Thermodynamic temperature, `Th`.
pub type Temperature = Dim<0, 0, 0, 0, { DIM_UNIT }>;

/// Amount of substance, `N`.
pub type Amount = Dim<0, 0, 0, 0, 0, { DIM_UNIT }>;

/// Luminous intensity, `J`.
pub type Intensity = Dim<0, 0, 0, 0, 0, 0, { DIM_UNIT }>;

// ===== Derived dimensions =====

/// Area, `L^2`.
pub type Area = Dim<0, { 2 * DIM_UNIT }>;

/// Volume, `L^3`.
pub type Volume = Dim<0, { 3 * DIM_UNIT }>;

/// Frequency, `T^-1`.
pub type Frequency = Dim<{ -DIM_UNIT }>;

/// Velocity, `L T^-1`.
pub type Velocity = Dim<{ -DIM_UNIT }, { DIM_UNIT }>;

/// Acceleration, `L T^-2`.
pub type Acceleration = Dim<{ -2 * DIM_UNIT }, { DIM_UNIT }>;

/// Force, `M L T^-2`.
pub type Force = Dim<{ -2 * DIM_UNIT }, { DIM_UNIT }, { DIM_UNIT }>;

/// Pressure, `M L^-1 T^-2`.
pub type Pressure = Dim<{ -2 * DIM_UNIT }, { -DIM_UNIT }, { DIM_UNIT }>;

/// Energy, `M L^2 T^-2`.
pub type Energy = Dim<{ -2 * DIM_UNIT }, { 2 * DIM_UNIT }, { DIM_UNIT }>;

/// Power, `M L^2 T^-3`.
pub type Power = Dim<{ -3 * DIM_UNIT }, { 2 * DIM_UNIT }, { DIM_UNIT }>;

/// Mass density, `M L^-3`.
pub type Density = Dim<0, { -3 * DIM_UNIT }, { DIM_UNIT }>;

/// Electric charge, `I T`.
pub type Charge = Dim<{ DIM_UNIT }, 0, 0, { DIM_UNIT }>;

/// Electric potential, `M L^2 T^-3 I^-1`.
pub type Voltage = Dim<{ -3 * DIM_UNIT }, { 2 * DIM_UNIT }, { DIM_UNIT }, { -DIM_UNIT }>;

/// Entropy, `M L^2 T^-2 Th^-1`.
pub type Entropy =
    Dim<{ -2 * DIM_UNIT }, { 2 * DIM_UNIT }, { DIM_UNIT }, 0, { -DIM_UNIT }>;

/// Molar concentration, `N L^-3`.
pub type MolarConcentration = Dim<0, { -3 * DIM_UNIT }, 0, 0, 0, { DIM_UNIT }>;

/// Illuminance, `J L^-2`.
pub type Illuminance = Dim<0, { -2 * DIM_UNIT }, 0, 0, 0, 0, { DIM_UNIT }>;

// Cross-checks between the alias table and the operator algebra.
const _: () = assert!(identical::<Velocity, Quot<Length, Time>>());
const _: () = assert!(identical::<Acceleration, Quot<Velocity, Time>>());
const _: () = assert!(identical::<Force, Prod<Mass, Acceleration>>());
const _: () = assert!(identical::<Pressure, Quot<Force, Area>>());
const _: () = assert!(identical::<Energy, Prod<Force, Length>>());
const _: () = assert!(identical::<Power, Quot<Energy, Time>>());
const _: () = assert!(identical::<Density, Quot<Mass, Volume>>());
const _: () = assert!(identical::<Charge, Prod<Current, Time>>());
const _: () = assert!(identical::<Voltage, Quot<Power, Current>>());
const _: () = assert!(identical::<Entropy, Quot<Energy, Temperature>>());
const _: () = assert!(identical::<Frequency, Quot<Dimensionless, Time>>());
