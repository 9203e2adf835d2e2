use core::fmt::{self, Write as _};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

use gcd::Gcd;
use num_traits::{cast, checked_pow, One, Zero};

use crate::approx::Approximation;
use crate::prim::{Float, Integer};
use crate::FractionErr;

/// An exact rational number `n/d` stored over the integer type `I`.
///
/// `F` is the floating-point type the fraction converts to and from. It takes
/// no space in the value.
///
/// A fraction is always kept in canonical form: the denominator is positive,
/// the numerator and denominator are coprime, and zero is stored as `0/1`.
/// Because of this, equality is a plain comparison of the two fields.
///
/// Sums and products are computed by cross-multiplication in `I` before being
/// reduced, so an operation fails with [`FractionErr::Overflow`] as soon as an
/// intermediate product leaves the range of `I`, even when the reduced result
/// would fit. With `i32`, adding two fractions is only guaranteed to succeed
/// when both denominators and numerators stay below 2<sup>15</sup>.
#[derive(Clone, Copy)]
pub struct Fraction<I = i32, F = f32> {
	n: I,
	d: I,
	float: PhantomData<F>,
}

/// A fraction over `i32` converting to and from `f32`.
pub type Frac32 = Fraction<i32, f32>;

/// A fraction over `i64` converting to and from `f64`.
pub type Frac64 = Fraction<i64, f64>;

/// Gives `magnitude` the requested sign, if the result fits in `I`.
fn with_sign<I: Integer>(magnitude: I::Unsigned, negative: bool)
-> Result<I, FractionErr> {
	if magnitude <= I::max_value().unsigned_abs() {
		let v = I::from_unsigned(magnitude);
		Ok(if negative { -v } else { v })
	} else if negative && magnitude == I::min_value().unsigned_abs() {
		Ok(I::min_value())
	} else {
		Err(FractionErr::Overflow)
	}
}

#[inline]
fn to_float<I: Integer, F: Float>(v: I) -> F {
	cast::<I, F>(v).unwrap_or_else(F::nan)
}

impl<I: Integer, F: Float> Fraction<I, F> {
	/// Wraps parts that are already in canonical form.
	#[inline]
	pub(crate) fn from_canonical(n: I, d: I) -> Fraction<I, F> {
		debug_assert!(d.is_positive());
		Fraction { n, d, float: PhantomData }
	}

	/// Creates a fraction from a numerator and a denominator, reducing it to
	/// canonical form.
	///
	/// Fails with [`FractionErr::DivideByZero`] when `d` is zero, and with
	/// [`FractionErr::Overflow`] when the canonical form does not fit in `I`
	/// (e.g. `1/MIN`, whose denominator would be `-MIN`).
	pub fn new(n: I, d: I) -> Result<Fraction<I, F>, FractionErr> {
		if d.is_zero() {
			return Err(FractionErr::DivideByZero);
		}

		if n.is_zero() {
			return Ok(Fraction::zero());
		}

		// the sign lives entirely in the numerator
		let negative = n.is_negative() != d.is_negative();
		let n = n.unsigned_abs();
		let d = d.unsigned_abs();

		let gcd = n.gcd_euclid(d);

		Ok(Fraction::from_canonical(
			with_sign(n / gcd, negative)?,
			with_sign(d / gcd, false)?,
		))
	}

	/// Creates the fraction `n/1`.
	#[inline]
	pub fn from_int(n: I) -> Fraction<I, F> {
		Fraction::from_canonical(n, I::one())
	}

	/// Approximates a float with the default [`Approximation`].
	///
	/// Fails with [`FractionErr::NotFinite`] for NaN and infinities. Finite
	/// values always succeed: values out of the range of `I` saturate.
	#[inline]
	pub fn try_from_float(value: F) -> Result<Fraction<I, F>, FractionErr> {
		Approximation::default().approximate(value)
	}

	/// Approximates a float with the default [`Approximation`].
	///
	/// # Panics
	///
	/// Panics when `value` is NaN or infinite.
	pub fn from_float(value: F) -> Fraction<I, F> {
		Fraction::try_from_float(value)
			.expect("cannot convert a non-finite float to a fraction")
	}

	/// Returns the numerator. Carries the sign of the fraction.
	#[inline]
	pub fn n(self) -> I {
		self.n
	}

	/// Returns the denominator. Always positive.
	#[inline]
	pub fn d(self) -> I {
		self.d
	}

	/// Returns `n / d` computed in the floating-point type.
	#[inline]
	pub fn value(self) -> F {
		to_float::<I, F>(self.n) / to_float::<I, F>(self.d)
	}

	/// Converts to another representation.
	///
	/// This is the only way fractions of different representations are mixed
	/// in arithmetic. Fails with [`FractionErr::Overflow`] when the numerator
	/// or denominator does not fit in `I2`.
	pub fn cast<I2: Integer, F2: Float>(self)
	-> Result<Fraction<I2, F2>, FractionErr> {
		match (cast::<I, I2>(self.n), cast::<I, I2>(self.d)) {
			(Some(n), Some(d)) => Ok(Fraction::from_canonical(n, d)),
			_ => Err(FractionErr::Overflow),
		}
	}

	/// Returns `true` if the fraction is a whole number.
	#[inline]
	pub fn is_integer(self) -> bool {
		self.d.is_one()
	}

	/// Returns `true` if `self` is greater than zero.
	#[inline]
	pub fn is_positive(self) -> bool {
		self.n.is_positive()
	}

	/// Returns `true` if `self` is less than zero.
	#[inline]
	pub fn is_negative(self) -> bool {
		self.n.is_negative()
	}

	/// Computes the absolute value of `self`.
	///
	/// # Panics
	///
	/// Panics when the numerator is `I::MIN`.
	#[inline]
	pub fn abs(self) -> Fraction<I, F> {
		if self.is_negative() {
			-self
		} else {
			self
		}
	}

	/// Returns a number that represents the sign of `self`.
	///
	/// * `1` if the number is positive
	/// * `-1` if the number is negative
	/// * `0` if the number is `0`
	#[inline]
	pub fn signum(self) -> Fraction<I, F> {
		Fraction::from_int(self.n.signum())
	}

	/// Checked negation. Fails when the numerator is `I::MIN`.
	#[inline]
	pub fn try_neg(self) -> Result<Fraction<I, F>, FractionErr> {
		self.n.checked_neg()
			.map(|n| Fraction::from_canonical(n, self.d))
			.ok_or(FractionErr::Overflow)
	}

	/// Checked reciprocal. Computes `1/self`, failing with
	/// [`FractionErr::DivideByZero`] when `self` is zero.
	pub fn try_recip(self) -> Result<Fraction<I, F>, FractionErr> {
		if self.n.is_zero() {
			return Err(FractionErr::DivideByZero);
		}

		// swapping coprime parts keeps them coprime
		if self.n.is_negative() {
			let d = self.n.checked_neg().ok_or(FractionErr::Overflow)?;
			Ok(Fraction::from_canonical(-self.d, d))
		} else {
			Ok(Fraction::from_canonical(self.d, self.n))
		}
	}

	/// Takes the reciprocal (inverse) of a number, `1/x`.
	///
	/// # Panics
	///
	/// Panics when the numerator is zero.
	#[inline]
	pub fn recip(self) -> Fraction<I, F> {
		self.try_recip().expect("attempt to divide by zero")
	}

	/// Checked addition. Computes `self + rhs`, failing if an intermediate
	/// product overflows.
	pub fn try_add(self, rhs: Fraction<I, F>)
	-> Result<Fraction<I, F>, FractionErr> {
		// a/b + c/d = (ad + cb)/bd
		let ad = self.n.checked_mul(&rhs.d).ok_or(FractionErr::Overflow)?;
		let cb = rhs.n.checked_mul(&self.d).ok_or(FractionErr::Overflow)?;
		let n = ad.checked_add(&cb).ok_or(FractionErr::Overflow)?;
		let d = self.d.checked_mul(&rhs.d).ok_or(FractionErr::Overflow)?;

		Fraction::new(n, d)
	}

	/// Checked subtraction. Computes `self + (-rhs)`.
	///
	/// Negating `rhs` comes first, so this fails with
	/// [`FractionErr::Overflow`] whenever the numerator of `rhs` is `I::MIN`,
	/// even if the difference itself would fit (e.g. `-1 - MIN`).
	#[inline]
	pub fn try_sub(self, rhs: Fraction<I, F>)
	-> Result<Fraction<I, F>, FractionErr> {
		self.try_add(rhs.try_neg()?)
	}

	/// Checked multiplication. Computes `self * rhs`, failing if an
	/// intermediate product overflows.
	pub fn try_mul(self, rhs: Fraction<I, F>)
	-> Result<Fraction<I, F>, FractionErr> {
		// a/b * c/d = ac/bd
		let n = self.n.checked_mul(&rhs.n).ok_or(FractionErr::Overflow)?;
		let d = self.d.checked_mul(&rhs.d).ok_or(FractionErr::Overflow)?;

		Fraction::new(n, d)
	}

	/// Checked division. Computes `self * rhs.recip()`, failing with
	/// [`FractionErr::DivideByZero`] when `rhs` is zero.
	#[inline]
	pub fn try_div(self, rhs: Fraction<I, F>)
	-> Result<Fraction<I, F>, FractionErr> {
		self.try_mul(rhs.try_recip()?)
	}

	/// Checked exponentiation. Negative exponents raise the reciprocal.
	pub fn try_pow(self, exp: i32) -> Result<Fraction<I, F>, FractionErr> {
		if exp == 0 {
			return Ok(Fraction::one());
		}

		let base = if exp < 0 { self.try_recip()? } else { self };
		let exp = exp.unsigned_abs() as usize;

		// powers of coprime numbers stay coprime
		match (checked_pow(base.n, exp), checked_pow(base.d, exp)) {
			(Some(n), Some(d)) => Ok(Fraction::from_canonical(n, d)),
			_ => Err(FractionErr::Overflow),
		}
	}

	/// Raises a number to an integer power.
	///
	/// # Panics
	///
	/// Panics on overflow, or when raising zero to a negative power.
	pub fn pow(self, exp: i32) -> Fraction<I, F> {
		match self.try_pow(exp) {
			Ok(v) => v,
			Err(FractionErr::DivideByZero) => panic!("attempt to divide by zero"),
			Err(_) => panic!("attempt to multiply with overflow"),
		}
	}

	/// Raises the value of `self` to a floating-point power.
	///
	/// To raise a float to a fractional power instead, use
	/// `base.powf(f.value())`.
	#[inline]
	pub fn powf(self, exp: F) -> F {
		self.value().powf(exp)
	}
}

/// Computes `1/f`, failing with [`FractionErr::DivideByZero`] when `f` is
/// zero.
#[inline]
pub fn reciprocal<I: Integer, F: Float>(f: Fraction<I, F>)
-> Result<Fraction<I, F>, FractionErr> {
	f.try_recip()
}

impl<I: Integer, F: Float> Default for Fraction<I, F> {
	#[inline]
	fn default() -> Self {
		Fraction::zero()
	}
}

impl<I: Integer, F: Float> Zero for Fraction<I, F> {
	#[inline]
	fn zero() -> Self {
		Fraction::from_canonical(I::zero(), I::one())
	}

	#[inline]
	fn is_zero(&self) -> bool {
		self.n.is_zero()
	}
}

impl<I: Integer, F: Float> One for Fraction<I, F> {
	#[inline]
	fn one() -> Self {
		Fraction::from_int(I::one())
	}
}

/// Fixed buffer holding a formatted fraction, large enough for two `i128`s
/// and the slash.
struct FmtBuf {
	bytes: [u8; 96],
	len: usize,
}

impl fmt::Write for FmtBuf {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		let end = self.len + s.len();
		self.bytes.get_mut(self.len..end)
			.ok_or(fmt::Error)?
			.copy_from_slice(s.as_bytes());
		self.len = end;
		Ok(())
	}
}

impl<I: Integer, F> fmt::Display for Fraction<I, F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if f.width().is_none() {
			fmt::Display::fmt(&self.n, f)?;

			if !self.d.is_one() {
				write!(f, "/{}", self.d)?;
			}

			return Ok(());
		}

		// padding applies to the whole fraction
		let mut buf = FmtBuf { bytes: [0; 96], len: 0 };
		if self.d.is_one() {
			write!(buf, "{}", self.n)?;
		} else {
			write!(buf, "{}/{}", self.n, self.d)?;
		}

		let s = core::str::from_utf8(&buf.bytes[..buf.len]).map_err(|_| fmt::Error)?;
		f.pad(s)
	}
}

impl<I: Integer, F> fmt::Debug for Fraction<I, F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}/{}", self.n, self.d)
	}
}

impl<I, F, I2, F2> PartialEq<Fraction<I2, F2>> for Fraction<I, F>
where
	I: Integer,
	I2: Integer,
{
	fn eq(&self, other: &Fraction<I2, F2>) -> bool {
		// both sides are canonical, and every supported integer fits in i128
		self.n.to_i128() == other.n.to_i128()
		&& self.d.to_i128() == other.d.to_i128()
	}
}

impl<I: Integer, F> Eq for Fraction<I, F> {}

impl<I: Integer, F> Hash for Fraction<I, F> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.n.hash(state);
		self.d.hash(state);
	}
}

impl<I: Integer, F> Ord for Fraction<I, F> {
	fn cmp(&self, other: &Self) -> Ordering {
		// compares a/b and c/d term by term of their continued fractions, so
		// nothing is ever multiplied.
		let mut terms = (self.n, self.d, other.n, other.d);

		loop {
			let (a, b, c, d) = terms;

			let (q1, r1) = (a.div_euclid(&b), a.rem_euclid(&b));
			let (q2, r2) = (c.div_euclid(&d), c.rem_euclid(&d));

			if q1 != q2 {
				return q1.cmp(&q2);
			}

			if r1.is_zero() || r2.is_zero() {
				return r1.cmp(&r2);
			}

			// r1/b < r2/d exactly when d/r2 < b/r1
			terms = (d, r2, b, r1);
		}
	}
}

impl<I: Integer, F> PartialOrd for Fraction<I, F> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<I: Integer, F: Float> Neg for Fraction<I, F> {
	type Output = Fraction<I, F>;

	fn neg(self) -> Self::Output {
		self.try_neg().expect("attempt to negate with overflow")
	}
}

impl<I: Integer, F: Float> Add for Fraction<I, F> {
	type Output = Fraction<I, F>;

	fn add(self, other: Fraction<I, F>) -> Self::Output {
		self.try_add(other).expect("attempt to add with overflow")
	}
}

impl<I: Integer, F: Float> AddAssign for Fraction<I, F> {
	fn add_assign(&mut self, other: Fraction<I, F>) {
		*self = *self + other
	}
}

impl<I: Integer, F: Float> Sub for Fraction<I, F> {
	type Output = Fraction<I, F>;

	fn sub(self, other: Fraction<I, F>) -> Self::Output {
		self.try_sub(other).expect("attempt to subtract with overflow")
	}
}

impl<I: Integer, F: Float> SubAssign for Fraction<I, F> {
	fn sub_assign(&mut self, other: Fraction<I, F>) {
		*self = *self - other
	}
}

impl<I: Integer, F: Float> Mul for Fraction<I, F> {
	type Output = Fraction<I, F>;

	fn mul(self, other: Fraction<I, F>) -> Self::Output {
		self.try_mul(other).expect("attempt to multiply with overflow")
	}
}

impl<I: Integer, F: Float> MulAssign for Fraction<I, F> {
	fn mul_assign(&mut self, other: Fraction<I, F>) {
		*self = *self * other
	}
}

impl<I: Integer, F: Float> Div for Fraction<I, F> {
	type Output = Fraction<I, F>;

	fn div(self, other: Fraction<I, F>) -> Self::Output {
		match self.try_div(other) {
			Ok(v) => v,
			Err(FractionErr::DivideByZero) => panic!("attempt to divide by zero"),
			Err(_) => panic!("attempt to divide with overflow"),
		}
	}
}

impl<I: Integer, F: Float> DivAssign for Fraction<I, F> {
	fn div_assign(&mut self, other: Fraction<I, F>) {
		*self = *self / other
	}
}

/// Arithmetic between a fraction and a primitive operand on either side. The
/// primitive is first turned into a fraction with `From`.
macro_rules! impl_operand {
	(<$p:ident: $bound:ident> $frac:ty, $prim:ty) => {
		impl_operand! { @op <$p: $bound> $frac, $prim, Add add AddAssign add_assign }
		impl_operand! { @op <$p: $bound> $frac, $prim, Sub sub SubAssign sub_assign }
		impl_operand! { @op <$p: $bound> $frac, $prim, Mul mul MulAssign mul_assign }
		impl_operand! { @op <$p: $bound> $frac, $prim, Div div DivAssign div_assign }
	};
	(@op <$p:ident: $bound:ident> $frac:ty, $prim:ty,
		$op:ident $method:ident $op_assign:ident $method_assign:ident) => {
		impl<$p: $bound> $op<$prim> for $frac {
			type Output = $frac;

			#[inline]
			fn $method(self, other: $prim) -> $frac {
				$op::$method(self, <$frac>::from(other))
			}
		}

		impl<$p: $bound> $op<$frac> for $prim {
			type Output = $frac;

			#[inline]
			fn $method(self, other: $frac) -> $frac {
				$op::$method(<$frac>::from(self), other)
			}
		}

		impl<$p: $bound> $op_assign<$prim> for $frac {
			#[inline]
			fn $method_assign(&mut self, other: $prim) {
				*self = $op::$method(*self, other)
			}
		}
	};
}

macro_rules! impl_int_operand {
	($($int:ident)*) => {$(
		impl<F: Float> From<$int> for Fraction<$int, F> {
			#[inline]
			fn from(v: $int) -> Self {
				Fraction::from_int(v)
			}
		}

		impl<F: Float> PartialEq<$int> for Fraction<$int, F> {
			#[inline]
			fn eq(&self, other: &$int) -> bool {
				self.d == 1 && self.n == *other
			}
		}

		impl<F: Float> PartialEq<Fraction<$int, F>> for $int {
			#[inline]
			fn eq(&self, other: &Fraction<$int, F>) -> bool {
				other == self
			}
		}

		impl_operand! { <F: Float> Fraction<$int, F>, $int }
	)*}
}

macro_rules! impl_float_operand {
	($($float:ident)*) => {$(
		impl<I: Integer> From<$float> for Fraction<I, $float> {
			#[inline]
			fn from(v: $float) -> Self {
				Fraction::from_float(v)
			}
		}

		impl<I: Integer> From<Fraction<I, $float>> for $float {
			#[inline]
			fn from(r: Fraction<I, $float>) -> $float {
				r.value()
			}
		}

		impl<I: Integer> PartialEq<$float> for Fraction<I, $float> {
			/// Compares against the fraction approximating `other`. NaN and
			/// infinities are never equal to a fraction.
			fn eq(&self, other: &$float) -> bool {
				Fraction::<I, $float>::try_from_float(*other)
					.map_or(false, |other| *self == other)
			}
		}

		impl<I: Integer> PartialEq<Fraction<I, $float>> for $float {
			#[inline]
			fn eq(&self, other: &Fraction<I, $float>) -> bool {
				other == self
			}
		}

		impl_operand! { <I: Integer> Fraction<I, $float>, $float }
	)*}
}

impl_int_operand! { i8 i16 i32 i64 i128 }
impl_float_operand! { f32 f64 }

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{frac32, frac64};

	#[test]
	fn new() {
		let f = Frac32::new(2, 4).unwrap();
		assert_eq!((f.n(), f.d()), (1, 2));

		let f = Frac32::new(1, -2).unwrap();
		assert_eq!((f.n(), f.d()), (-1, 2));

		let f = Frac32::new(10, 45).unwrap();
		assert_eq!((f.n(), f.d()), (2, 9));

		let f = Frac32::new(-3, -6).unwrap();
		assert_eq!((f.n(), f.d()), (1, 2));

		let f = Frac32::from(-2);
		assert_eq!((f.n(), f.d()), (-2, 1));
	}

	#[test]
	fn new_zero() {
		let f = Frac32::default();
		assert_eq!((f.n(), f.d()), (0, 1));

		let f = Frac32::new(0, -5).unwrap();
		assert_eq!((f.n(), f.d()), (0, 1));

		let f = Frac64::new(0, 12).unwrap();
		assert_eq!((f.n(), f.d()), (0, 1));
	}

	#[test]
	fn new_zero_denominator() {
		assert_eq!(Frac32::new(0, 0), Err(FractionErr::DivideByZero));
		assert_eq!(Frac32::new(1, 0), Err(FractionErr::DivideByZero));
		assert_eq!(Frac64::new(-7, 0), Err(FractionErr::DivideByZero));
	}

	#[test]
	fn new_extremes() {
		type Frac8 = Fraction<i8, f32>;

		assert_eq!(Frac8::new(1, i8::MIN), Err(FractionErr::Overflow));
		assert_eq!(Frac8::new(i8::MIN, -1), Err(FractionErr::Overflow));
		assert_eq!(Frac8::new(i8::MIN, 1).unwrap().n(), i8::MIN);
		assert_eq!(Frac8::new(i8::MIN, 2).unwrap(), Frac8::from(-64));
		assert_eq!(Frac8::new(i8::MIN, i8::MIN).unwrap(), Frac8::one());
		assert_eq!(Frac8::new(2, i8::MIN).unwrap(), Frac8::new(-1, 64).unwrap());
	}

	#[test]
	fn canonical_form() {
		for n in -30..=30 {
			for d in (-30..=30).filter(|&d| d != 0) {
				let f = Frac32::new(n, d).unwrap();

				assert!(f.d() > 0);
				if f.n() == 0 {
					assert_eq!(f.d(), 1);
				} else {
					assert_eq!(crate::gcd(f.n(), f.d()), 1);
				}

				// reducing again changes nothing
				assert_eq!(Frac32::new(f.n(), f.d()).unwrap(), f);
			}
		}
	}

	#[test]
	fn int_round_trip() {
		for k in -1000_i64..1000 {
			let f = Frac64::from(k);
			assert_eq!(f.value(), k as f64);
			assert_eq!(f.d(), 1);
			assert!(f.is_integer());
		}
	}

	#[test]
	fn value() {
		assert_eq!(frac32!(1/2).value(), 0.5);
		assert_eq!(frac32!(-3/4).value(), -0.75);
		assert_eq!(f64::from(frac64!(1/8)), 0.125);
	}

	#[test]
	fn eq() {
		let f1 = frac32!(1/2);
		let f2 = Frac32::from(0.5_f32);

		assert_eq!(f1, f2);
		assert_ne!(f1, 1);
		assert_eq!(f1, 0.5_f32);
		assert_eq!(0.5_f32, f1);
		assert_ne!(f1, f32::NAN);

		assert_eq!(f1, Fraction::<i64, f64>::new(1, 2).unwrap());
		assert_eq!(f2, Fraction::<i64, f32>::new(1, 2).unwrap());
		assert_ne!(f2, Fraction::<i8, f64>::new(1, 3).unwrap());
	}

	#[test]
	fn eq_int() {
		assert_eq!(Frac32::from(3), 3);
		assert_eq!(3, Frac32::from(3));
		assert_ne!(frac32!(3/2), 1);
		assert_eq!(frac64!(6/3), 2_i64);
	}

	#[test]
	fn neg() {
		assert_eq!(-frac32!( 0), frac32!( 0));
		assert_eq!(-frac32!( 1), frac32!(-1));
		assert_eq!(-frac32!(-1), frac32!( 1));

		let f = -frac32!(1/2);
		assert_eq!((f.n(), f.d()), (-1, 2));
	}

	#[test]
	fn try_neg() {
		assert_eq!(Frac32::from(i32::MIN).try_neg(), Err(FractionErr::Overflow));
	}

	#[test]
	fn recip() {
		assert_eq!(reciprocal(Frac32::from(0)), Err(FractionErr::DivideByZero));

		let f = reciprocal(frac32!(-1/2)).unwrap();
		assert_eq!((f.n(), f.d()), (-2, 1));

		assert_eq!(frac32!(5).recip(), frac32!(1/5));
		assert_eq!(frac32!(5/2).recip(), frac32!(2/5));
		assert_eq!(frac32!(-5/2).recip(), frac32!(-2/5));
		assert_eq!(frac32!(1).recip(), frac32!(1));
	}

	#[test] #[should_panic]
	fn recip_zero() {
		let _ = Frac32::zero().recip();
	}

	#[test]
	fn abs() {
		assert_eq!(frac32!(0).abs(), frac32!(0));
		assert_eq!(frac32!(1/2).abs(), frac32!(1/2));
		assert_eq!(frac32!(-1/2).abs(), frac32!(1/2));
	}

	#[test]
	fn signum() {
		assert_eq!(frac32!(0).signum(), frac32!(0));
		assert_eq!(frac32!(2/3).signum(), frac32!(1));
		assert_eq!(frac32!(-2/3).signum(), frac32!(-1));
	}

	#[test]
	fn identities() {
		let samples = [
			frac64!(0), frac64!(1), frac64!(-1), frac64!(1/3), frac64!(-7/9),
			frac64!(22/7), frac64!(-355/113), frac64!(1/1000000),
		];

		for &a in samples.iter() {
			assert_eq!(a + (-a), Frac64::zero());
			assert_eq!(a - a, Frac64::zero());

			if !a.is_zero() {
				assert_eq!(a * reciprocal(a).unwrap(), Frac64::one());
				assert_eq!(a / a, Frac64::one());
			}
		}
	}

	#[test]
	fn composition() {
		let f1 = (frac32!(1/3) - frac32!(1/4)) / (frac32!(1/8) + frac32!(1/2));
		assert_eq!(f1, frac32!(2/15));
	}

	#[test]
	fn add() {
		assert_eq!(frac32!(0) + frac32!(0), frac32!(0));
		assert_eq!(frac32!(1) + frac32!(-1), frac32!(0));
		assert_eq!(frac32!(-1) + frac32!(-1), frac32!(-2));

		assert_eq!(frac32!(1/2)  + frac32!(3/4),  frac32!(5/4));
		assert_eq!(frac32!(1/2)  + frac32!(-3/4), frac32!(-1/4));
		assert_eq!(frac32!(-1/2) + frac32!(3/4),  frac32!(1/4));
	}

	#[test]
	fn add_operands() {
		let mut f1 = frac32!(1/2);
		assert_eq!(f1 + frac32!(1/2), Frac32::from(1));
		assert_eq!(0.5_f32 + f1, 1);
		assert_eq!(f1 + 1, 1.5_f32);

		f1 += 1;
		assert_eq!(f1, 1.5_f32);

		f1 += Fraction::<i64, f32>::from(1_i64).cast::<i32, f32>().unwrap();
		assert_eq!(f1, 2.5_f32);

		f1 += 0.25_f32;
		assert_eq!(f1, frac32!(11/4));
	}

	#[test]
	fn sub_operands() {
		let mut f1 = frac32!(1/2);
		assert_eq!(f1 - frac32!(1/2), Frac32::zero());
		assert_eq!(-0.5_f32 + f1, 0);
		assert_eq!(f1 - 1, -0.5_f32);
		assert_eq!(1 - f1, 0.5_f32);

		f1 -= 1;
		assert_eq!(f1, -0.5_f32);

		f1 -= Fraction::<i64, f32>::from(1_i64).cast::<i32, f32>().unwrap();
		assert_eq!(f1, -1.5_f32);
	}

	#[test]
	fn mul_operands() {
		let mut f1 = frac32!(1/2);
		assert_eq!(f1 * frac32!(1/2), frac32!(1/4));
		assert_eq!(0.5_f32 * f1, 0.25_f32);
		assert_eq!(f1 * 1, 0.5_f32);

		f1 *= 2;
		assert_eq!(f1, 1);

		f1 *= frac32!(2);
		assert_eq!(f1, 2.0_f32);
	}

	#[test]
	fn div_operands() {
		let mut f1 = frac32!(1/2);
		assert_eq!(f1 / frac32!(1/2), frac32!(1/1));
		assert_eq!(0.5_f32 / f1, 1);
		assert_eq!(f1 / 2, 0.25_f32);
		assert_eq!(2 / f1, 4);

		f1 /= 2;
		assert_eq!(f1, 0.25_f32);

		f1 /= Fraction::<i64, f32>::from(2_i64).cast::<i32, f32>().unwrap();
		assert_eq!(f1, 0.125_f32);
	}

	#[test]
	fn mul() {
		assert_eq!(frac32!(0) * frac32!(1), frac32!(0));
		assert_eq!(frac32!(-1) * frac32!(-1), frac32!(1));
		assert_eq!(frac32!(-1/2) * frac32!(1/2), frac32!(-1/4));
		assert_eq!(frac32!(2/3) * frac32!(2/3), frac32!(4/9));
		assert_eq!(frac32!(3/2) * frac32!(2/3), frac32!(1));
	}

	#[test]
	fn div() {
		assert_eq!(frac32!(0) / frac32!(2), frac32!(0));
		assert_eq!(frac32!(-1) / frac32!(1), frac32!(-1));
		assert_eq!(frac32!(1) / frac32!(-1), frac32!(-1));
		assert_eq!(frac32!(1) / frac32!(2), frac32!(1/2));
		assert_eq!(frac32!(2/3) / frac32!(-4/9), frac32!(-3/2));
	}

	#[test]
	fn try_div_zero() {
		assert_eq!(frac32!(1).try_div(frac32!(0)), Err(FractionErr::DivideByZero));
	}

	#[test] #[should_panic(expected = "attempt to divide by zero")]
	fn div_zero() {
		let _ = frac32!(1) / frac32!(0);
	}

	#[test]
	fn overflow() {
		let big = Frac32::new(1, 1 << 16).unwrap();
		assert_eq!(big.try_mul(big), Err(FractionErr::Overflow));
		assert_eq!(big.try_add(frac32!(1/3)), Ok(Frac32::new(65539, 196608).unwrap()));
		assert_eq!(Frac32::from(i32::MAX).try_add(frac32!(1)), Err(FractionErr::Overflow));
	}

	#[test] #[should_panic]
	fn add_invalid() {
		let _ = Frac32::from(i32::MAX) + Frac32::from(i32::MAX);
	}

	#[test] #[should_panic]
	fn mul_invalid() {
		let _ = Frac32::from(1 << 30) * Frac32::from(4);
	}

	#[test]
	fn pow() {
		assert_eq!(frac32!(0).pow(0), frac32!(1));
		assert_eq!(frac32!(1/4).pow(0), 1);

		assert_eq!(frac32!(3).pow( 2),   frac32!(9));
		assert_eq!(frac32!(3).pow(-2),   frac32!(1/9));
		assert_eq!(frac32!(-3).pow( 2),  frac32!(9));
		assert_eq!(frac32!(-3).pow(-2),  frac32!(1/9));

		assert_eq!(frac32!(1/2).pow( 3),  frac32!(1/8));
		assert_eq!(frac32!(1/2).pow(-3),  frac32!(8));
		assert_eq!(frac32!(-2).pow(-3),   frac32!(-1/8));
		assert_eq!(frac32!(-1/2).pow(-3), frac32!(-8));

		assert_eq!(frac32!(1/4).pow(2), 0.0625_f32);
	}

	#[test]
	fn try_pow() {
		assert_eq!(frac32!(3).try_pow(30), Err(FractionErr::Overflow));
		assert_eq!(frac32!(0).try_pow(-1), Err(FractionErr::DivideByZero));
	}

	#[test]
	fn powf() {
		let f = frac32!(1/4);
		assert!((f.powf(0.5) - 0.5).abs() < 1e-6);
		assert!((0.0625_f32.powf(f.value()) - 0.5).abs() < 1e-6);
		assert!((0.0625_f64.powf(f64::from(frac64!(1/2))) - 0.25).abs() < 1e-12);
	}

	#[test]
	fn cmp() {
		assert!(frac32!(0) == frac32!(0));

		assert!(frac32!(0) < frac32!(1));
		assert!(frac32!(2) < frac32!(3));
		assert!(frac32!(0) > -frac32!(1));
		assert!(frac32!(2) > -frac32!(3));

		assert!(frac32!(1/3) < frac32!(1/2));
		assert!(frac32!(-1/2) < frac32!(1/3));
		assert!(frac32!(-1/2) < frac32!(-1/3));
		assert!(frac32!(355/113) > frac32!(333/106));
		assert!(frac32!(7/3) > frac32!(2));
		assert_eq!(frac32!(2/4).cmp(&frac32!(1/2)), Ordering::Equal);
	}

	#[test]
	fn cmp_extremes() {
		let a = Frac64::new(i64::MAX, i64::MAX - 1).unwrap();
		let b = Frac64::new(i64::MAX - 1, i64::MAX - 2).unwrap();
		assert!(a < b);

		assert!(Frac64::from(i64::MIN) < Frac64::new(i64::MIN + 1, i64::MAX).unwrap());
	}

	#[test]
	fn cast() {
		let f = frac64!(-22/7).cast::<i8, f32>().unwrap();
		assert_eq!((f.n(), f.d()), (-22, 7));

		assert_eq!(Frac64::new(1, 1000).unwrap().cast::<i8, f32>(), Err(FractionErr::Overflow));
	}

	#[test]
	fn display() {
		assert_eq!(std::format!("{}", frac32!(5)), "5");
		assert_eq!(std::format!("{}", frac32!(0)), "0");
		assert_eq!(std::format!("{}", Frac32::new(1, -5).unwrap()), "-1/5");
		assert_eq!(std::format!("{:?}", frac32!(5)), "5/1");
	}

	#[test]
	fn display_padding() {
		assert_eq!(std::format!("[{:>6}]", frac32!(1/2)), "[   1/2]");
		assert_eq!(std::format!("[{:<4}]", frac32!(-5)), "[-5  ]");
		assert_eq!(std::format!("[{:*^7}]", frac32!(-1/3)), "[*-1/3**]");
		assert_eq!(std::format!("[{:2}]", frac32!(22/7)), "[22/7]");

		let min = Fraction::<i128, f64>::new(i128::MIN, i128::MAX).unwrap();
		let s = std::format!("{:>90}", min);
		assert_eq!(s.len(), 90);
		assert!(s.trim_start().starts_with("-170141183460469231731687303715884105728/"));
	}

	#[test]
	fn sub_min_numerator() {
		let min = Frac32::from(i32::MIN);
		assert_eq!(Frac32::from(-1).try_sub(min), Err(FractionErr::Overflow));
		assert_eq!(min.try_sub(Frac32::from(-1)), Ok(Frac32::from(i32::MIN + 1)));
	}
}
