/*!
This library provides the [`Fraction`] type, an exact rational number stored
as a numerator and a denominator of some primitive signed integer type, along
with a conversion from floats that finds the best rational approximation
within a given accuracy.

```rust
use fraction::{frac32, Frac32};

let f = (frac32!(1/3) - frac32!(1/4)) / (frac32!(1/8) + frac32!(1/2));
assert_eq!(f, frac32!(2/15));

assert_eq!(Frac32::from(0.263157894737_f32), frac32!(5/19));
assert_eq!(frac32!(1/2), 0.5_f32);
```

## Representation

`Fraction<I, F>` is generic over two primitive types:
* `I`, the signed integer holding the numerator and denominator
  (`i8` through `i128`).
* `F`, the float type it converts to and from (`f32` or `f64`). It is only a
  marker and takes no space.

[`Frac32`] and [`Frac64`] name the two most common pairings.

Values are always kept in **canonical form**:
1. the denominator is positive, so the sign lives in the numerator;
2. the numerator and denominator are coprime;
3. zero is `0/1`.

Every constructor and every arithmetic operation reduces its result, so no
operation ever exposes a value that is not canonical. This makes equality a
plain comparison of numerators and denominators.

## Behavior

**Arithmetic** works on a fixed-width integer and cross-multiplies before
reducing. Operations are available in a checked form (`try_add`, `try_div`,
...) returning a [`FractionErr`], and through the usual operators, which panic
on failure like integer operators do. Primitive integers (of type `I`) and
floats (of type `F`) can be used on either side of an operator.

**Fractions of different representations** compare equal when their canonical
forms are equal, but are never combined implicitly. [`Fraction::cast`]
converts between representations and fails if the value doesn't fit.

**Ordering** is total and never overflows.

## Float conversions

The algorithm for converting a float to a fraction walks the convergents of
its continued fraction expansion until one is within the requested accuracy
(`1e-19` by default) or the expansion ends. The size of the integer type bounds
how far it can go: by default it settles for the last convergent that fits,
which makes the conversion total for finite floats. See [`Approximation`] and
[`OverflowPolicy`] to change either behavior.

```rust
use fraction::Fraction;

let pi = std::f64::consts::PI;

assert_eq!(Fraction::<i8, f64>::from(pi), Fraction::<i8, f64>::new(22, 7).unwrap());
assert_eq!(Fraction::<i16, f64>::from(pi), Fraction::<i16, f64>::new(355, 113).unwrap());
```

NaN and infinities can't be converted.
*/

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("float math needs either the `std` or the `libm` feature");

use core::fmt;

mod approx;
mod fraction;
mod prim;

pub use self::approx::{decimal_to_fraction, Approximation, OverflowPolicy};
pub use self::fraction::{reciprocal, Frac32, Frac64, Fraction};
pub use self::prim::{gcd, Float, Integer};

/// An error which can be returned by fraction operations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionErr {
	/// A denominator was zero.
	///
	/// Among other causes, this variant will be returned when taking the
	/// reciprocal of zero or dividing by zero.
	DivideByZero,

	/// A result or an intermediate product does not fit in the integer type.
	Overflow,

	/// The float being converted is NaN or infinite.
	NotFinite,
}

impl fmt::Display for FractionErr {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			FractionErr::DivideByZero =>
				f.write_str("division by zero"),

			FractionErr::Overflow =>
				f.write_str("numbers are too large to fit in the integer type"),

			FractionErr::NotFinite =>
				f.write_str("cannot convert NaN or infinity to a fraction"),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for FractionErr {}

/// Convenience macro for `Frac32` literals.
#[macro_export]
macro_rules! frac32 {
	($numer:literal) => { $crate::frac32!($numer / 1) };
	($numer:literal / $denom:literal) => {
		$crate::Frac32::new($numer, $denom).expect("invalid `Frac32` literal")
	};
}

/// Convenience macro for `Frac64` literals.
#[macro_export]
macro_rules! frac64 {
	($numer:literal) => { $crate::frac64!($numer / 1) };
	($numer:literal / $denom:literal) => {
		$crate::Frac64::new($numer, $denom).expect("invalid `Frac64` literal")
	};
}
