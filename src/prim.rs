//! Capabilities required from the primitive representations of a fraction.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use gcd::Gcd;
use num_traits::{CheckedNeg, Euclid, PrimInt, Signed};

/// A signed primitive integer usable as the numerator and denominator of a
/// [`Fraction`](crate::Fraction).
pub trait Integer:
	PrimInt + Signed + CheckedNeg + Euclid + Hash + Debug + Display
{
	/// The unsigned integer of the same width.
	type Unsigned: Gcd + PrimInt;

	/// Computes the absolute value without overflowing.
	fn unsigned_abs(self) -> Self::Unsigned;

	/// Reinterprets an unsigned value of the same width. Values above
	/// `Self::MAX` wrap around.
	fn from_unsigned(v: Self::Unsigned) -> Self;
}

/// A primitive floating-point type used for conversions and comparisons.
pub trait Float: num_traits::Float + Debug + Display {
	/// Default accuracy used when approximating a float as a fraction.
	const ACCURACY: Self;
}

macro_rules! impl_integer {
	($($int:ident $uint:ident),*) => {$(
		impl Integer for $int {
			type Unsigned = $uint;

			#[inline]
			fn unsigned_abs(self) -> $uint {
				<$int>::unsigned_abs(self)
			}

			#[inline]
			fn from_unsigned(v: $uint) -> $int {
				v as $int
			}
		}
	)*}
}

impl_integer! { i8 u8, i16 u16, i32 u32, i64 u64, i128 u128 }

impl Float for f32 {
	const ACCURACY: f32 = 1e-19;
}

impl Float for f64 {
	const ACCURACY: f64 = 1e-19;
}

/// Greatest common divisor of `a` and `b`, using Euclid's algorithm on their
/// absolute values.
///
/// `gcd(0, x)` is `|x|`, and the result is at least 1 whenever either
/// argument is nonzero. `gcd(0, 0)` is 0.
///
/// The result is always representable except for `gcd(MIN, MIN)` and
/// `gcd(MIN, 0)`, where it wraps around to `MIN`. Reduction never hits that
/// case since denominators are positive.
#[inline]
pub fn gcd<I: Integer>(a: I, b: I) -> I {
	I::from_unsigned(a.unsigned_abs().gcd_euclid(b.unsigned_abs()))
}
