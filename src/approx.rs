//! Best rational approximation of floats.
//!
//! The approximation walks the convergents of the continued fraction of the
//! input. Given `x = |value|`:
//!
//! ```txt
//! z₁ = x,  d₀ = 0,  d₁ = 1
//! zᵢ₊₁ = 1 / (zᵢ - ⌊zᵢ⌋)
//! dᵢ₊₁ = dᵢ·⌊zᵢ₊₁⌋ + dᵢ₋₁
//! nᵢ₊₁ = round(x·dᵢ₊₁)
//! ```
//!
//! and stops at the first convergent `nᵢ₊₁/dᵢ₊₁` within the requested
//! accuracy of `x`, or when `zᵢ` becomes a whole number (the expansion
//! terminated). Denominators grow at least as fast as the Fibonacci numbers,
//! so the walk ends within a few dozen steps for `f64`.
//!
//! Every convergent has to fit in the integer type. When one doesn't, the
//! [`OverflowPolicy`] decides between keeping the previous convergent (the
//! best approximation the integer type can hold) and failing.

use num_traits::cast;

use crate::fraction::Fraction;
use crate::prim::{Float, Integer};
use crate::FractionErr;

/// What to do when the next convergent no longer fits in the integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
	/// Keep the last convergent that fit. Whole numbers out of range
	/// saturate to `±I::MAX`. The result may then be further from the input
	/// than the requested accuracy.
	Truncate,

	/// Fail with [`FractionErr::Overflow`].
	Reject,
}

impl Default for OverflowPolicy {
	fn default() -> Self {
		OverflowPolicy::Truncate
	}
}

/// Settings for approximating a float as a fraction.
///
/// ```rust
/// use fraction::{Approximation, Fraction, OverflowPolicy, FractionErr};
///
/// let pi = std::f64::consts::PI;
///
/// let f: Fraction<i64, f64> = Approximation::new(1e-6).approximate(pi).unwrap();
/// assert_eq!((f.n(), f.d()), (355, 113));
///
/// let strict = Approximation::default().overflow(OverflowPolicy::Reject);
/// assert_eq!(strict.approximate::<i8>(pi), Err(FractionErr::Overflow));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximation<F> {
	/// Largest accepted distance between the input and the fraction.
	pub accuracy: F,

	/// Behaviour when the integer type runs out of range.
	pub overflow: OverflowPolicy,
}

impl<F: Float> Default for Approximation<F> {
	/// An accuracy of `1e-19` and [`OverflowPolicy::Truncate`].
	fn default() -> Self {
		Approximation::new(F::ACCURACY)
	}
}

impl<F: Float> Approximation<F> {
	/// Creates settings with the given accuracy and the truncating overflow
	/// policy.
	///
	/// A negative or NaN accuracy is never met, so the result is the closest
	/// convergent the integer type can hold.
	pub fn new(accuracy: F) -> Self {
		Approximation {
			accuracy,
			overflow: OverflowPolicy::default(),
		}
	}

	/// Sets the overflow policy.
	pub fn overflow(self, overflow: OverflowPolicy) -> Self {
		Approximation { overflow, ..self }
	}

	/// Returns the first convergent of the continued fraction of `value` that
	/// lies within `accuracy` of it.
	///
	/// Fails with [`FractionErr::NotFinite`] for NaN and infinities, and
	/// with [`FractionErr::Overflow`] only under [`OverflowPolicy::Reject`].
	pub fn approximate<I: Integer>(&self, value: F)
	-> Result<Fraction<I, F>, FractionErr> {
		if !value.is_finite() {
			return Err(FractionErr::NotFinite);
		}

		let negative = value < F::zero();
		let magnitude = value.abs();

		if magnitude == magnitude.floor() {
			return self.whole(magnitude, negative);
		}

		let mut z = magnitude;
		let mut d_prev = F::zero();
		let mut d_cur = F::one();

		// last convergent known to fit in `I`
		let mut best = (I::zero(), I::one());

		loop {
			// the expansion ended, so the previous convergent is exact
			if z == z.floor() {
				return signed(best, negative);
			}

			let z_next = (z - z.floor()).recip();
			let d_next = d_cur * z_next.floor() + d_prev;
			let n_next = (magnitude * d_next).round();

			let next = match (cast::<F, I>(n_next), cast::<F, I>(d_next)) {
				(Some(n), Some(d)) => (n, d),
				_ => return self.out_of_range(value, best, negative),
			};

			tracing::trace!(numerator = %next.0, denominator = %next.1, "convergent");

			if (magnitude - n_next / d_next).abs() <= self.accuracy {
				return signed(next, negative);
			}

			best = next;
			d_prev = d_cur;
			d_cur = d_next;
			z = z_next;
		}
	}

	fn whole<I: Integer>(&self, magnitude: F, negative: bool)
	-> Result<Fraction<I, F>, FractionErr> {
		match cast::<F, I>(magnitude) {
			Some(n) => signed((n, I::one()), negative),
			None => {
				tracing::debug!(%magnitude, "whole number out of integer range");

				match self.overflow {
					OverflowPolicy::Truncate =>
						signed((I::max_value(), I::one()), negative),
					OverflowPolicy::Reject =>
						Err(FractionErr::Overflow),
				}
			}
		}
	}

	fn out_of_range<I: Integer>(&self, value: F, best: (I, I), negative: bool)
	-> Result<Fraction<I, F>, FractionErr> {
		match self.overflow {
			OverflowPolicy::Truncate => {
				tracing::debug!(
					%value,
					numerator = %best.0,
					denominator = %best.1,
					"convergent out of integer range, keeping the previous one"
				);
				signed(best, negative)
			}
			OverflowPolicy::Reject => {
				tracing::debug!(%value, "convergent out of integer range");
				Err(FractionErr::Overflow)
			}
		}
	}
}

/// Builds the fraction for a convergent of the magnitude. Both parts are in
/// range and nonnegative, so only the reduction can change them.
fn signed<I: Integer, F: Float>((n, d): (I, I), negative: bool)
-> Result<Fraction<I, F>, FractionErr> {
	Fraction::new(if negative { -n } else { n }, d)
}

/// Approximates `value` within `accuracy`, keeping the last convergent that
/// fits in `I` if the integer type runs out of range first.
///
/// Shorthand for `Approximation::new(accuracy).approximate(value)`.
#[inline]
pub fn decimal_to_fraction<I: Integer, F: Float>(value: F, accuracy: F)
-> Result<Fraction<I, F>, FractionErr> {
	Approximation::new(accuracy).approximate(value)
}
