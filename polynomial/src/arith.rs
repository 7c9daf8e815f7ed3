//! Arithmetic on trigonometric polynomials.
//!
//! Polynomials of different lengths combine as if the shorter one were zero-extended, so none of
//! these operators can fail. Operators taking `&TrigPoly` never touch the borrowed buffers;
//! operators taking `TrigPoly` by value may reuse the buffer they were handed.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use itertools::{EitherOrBoth, Itertools};
use num_complex::Complex64;
use tp_dft::{FourierDft, RustFftDft};
use tracing::instrument;

use crate::TrigPoly;
use crate::poly::ZERO;

impl TrigPoly {
    /// Multiplies two polynomials through sample space.
    ///
    /// Both operands are zero-padded to `self.len() + other.len()` coefficients, which is enough
    /// room for every frequency of the product, so evaluating on that grid, multiplying pointwise
    /// and interpolating back is exact up to rounding. The two operands are evaluated as one
    /// batch of equal-length columns.
    #[instrument(level = "debug", skip_all, fields(lhs_len = self.len(), rhs_len = other.len()))]
    pub fn mul_with<Dft: FourierDft>(&self, dft: &Dft, other: &Self) -> Self {
        let len = self.len() + other.len();
        let cols = vec![
            self.zero_padded(len).sample_column(),
            other.zero_padded(len).sample_column(),
        ];
        let evals = dft.idft_batch(cols);
        let product: Vec<Complex64> = evals[0]
            .iter()
            .zip(&evals[1])
            .map(|(a, b)| a * b)
            .collect();
        Self::interpolate_with(dft, &product)
    }

    fn add_constant(&mut self, c: Complex64) {
        match self.coeffs.first_mut() {
            Some(constant) => *constant += c,
            None => self.coeffs.push(c),
        }
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Complex64, Complex64) -> Complex64) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(&other.coeffs)
            .map(|pair| match pair {
                EitherOrBoth::Both(&a, &b) => f(a, b),
                EitherOrBoth::Left(&a) => f(a, ZERO),
                EitherOrBoth::Right(&b) => f(ZERO, b),
            })
            .collect();
        Self::new(coeffs)
    }
}

impl Add for &TrigPoly {
    type Output = TrigPoly;

    fn add(self, rhs: Self) -> TrigPoly {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for &TrigPoly {
    type Output = TrigPoly;

    fn sub(self, rhs: Self) -> TrigPoly {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for &TrigPoly {
    type Output = TrigPoly;

    fn mul(self, rhs: Self) -> TrigPoly {
        self.mul_with(&RustFftDft::default(), rhs)
    }
}

impl Neg for &TrigPoly {
    type Output = TrigPoly;

    fn neg(self) -> TrigPoly {
        TrigPoly::new(self.coeffs.iter().map(|&c| -c).collect())
    }
}

impl Neg for TrigPoly {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.coeffs.iter_mut().for_each(|c| *c = -*c);
        self
    }
}

impl AddAssign<&TrigPoly> for TrigPoly {
    fn add_assign(&mut self, rhs: &TrigPoly) {
        if rhs.len() > self.len() {
            self.coeffs.resize(rhs.len(), ZERO);
        }
        for (a, &b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a += b;
        }
    }
}

impl SubAssign<&TrigPoly> for TrigPoly {
    fn sub_assign(&mut self, rhs: &TrigPoly) {
        if rhs.len() > self.len() {
            self.coeffs.resize(rhs.len(), ZERO);
        }
        for (a, &b) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *a -= b;
        }
    }
}

impl MulAssign<&TrigPoly> for TrigPoly {
    fn mul_assign(&mut self, rhs: &TrigPoly) {
        *self = &*self * rhs;
    }
}

/// Forwards the owned and mixed-ownership forms of a polynomial-by-polynomial operator to the
/// by-reference implementation, and the owned `*Assign` form to the borrowed one.
macro_rules! forward_poly_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for TrigPoly {
            type Output = TrigPoly;

            #[inline]
            fn $method(mut self, rhs: TrigPoly) -> TrigPoly {
                <TrigPoly as $assign_trait<&TrigPoly>>::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $trait<&TrigPoly> for TrigPoly {
            type Output = TrigPoly;

            #[inline]
            fn $method(mut self, rhs: &TrigPoly) -> TrigPoly {
                <TrigPoly as $assign_trait<&TrigPoly>>::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $trait<TrigPoly> for &TrigPoly {
            type Output = TrigPoly;

            #[inline]
            fn $method(self, rhs: TrigPoly) -> TrigPoly {
                <&TrigPoly as $trait<&TrigPoly>>::$method(self, &rhs)
            }
        }

        impl $assign_trait for TrigPoly {
            #[inline]
            fn $assign_method(&mut self, rhs: TrigPoly) {
                <TrigPoly as $assign_trait<&TrigPoly>>::$assign_method(self, &rhs);
            }
        }
    };
}

forward_poly_op!(Add, add, AddAssign, add_assign);
forward_poly_op!(Sub, sub, SubAssign, sub_assign);
forward_poly_op!(Mul, mul, MulAssign, mul_assign);

/// Scalar arithmetic. Adding or subtracting a scalar only touches the constant term (creating
/// it if the polynomial is empty); multiplying or dividing scales every coefficient.
macro_rules! scalar_ops {
    (@binary $scalar:ty, $trait:ident, $method:ident, $assign_method:ident) => {
        impl $trait<$scalar> for TrigPoly {
            type Output = TrigPoly;

            #[inline]
            fn $method(mut self, rhs: $scalar) -> TrigPoly {
                self.$assign_method(rhs);
                self
            }
        }

        impl $trait<$scalar> for &TrigPoly {
            type Output = TrigPoly;

            #[inline]
            fn $method(self, rhs: $scalar) -> TrigPoly {
                // Copy first: the caller still holds `self`.
                self.clone().$method(rhs)
            }
        }
    };
    ($scalar:ty) => {
        impl AddAssign<$scalar> for TrigPoly {
            #[inline]
            fn add_assign(&mut self, rhs: $scalar) {
                self.add_constant(Complex64::from(rhs));
            }
        }

        impl SubAssign<$scalar> for TrigPoly {
            #[inline]
            fn sub_assign(&mut self, rhs: $scalar) {
                self.add_constant(-Complex64::from(rhs));
            }
        }

        impl MulAssign<$scalar> for TrigPoly {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                self.coeffs.iter_mut().for_each(|c| *c *= rhs);
            }
        }

        impl DivAssign<$scalar> for TrigPoly {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                self.coeffs.iter_mut().for_each(|c| *c /= rhs);
            }
        }

        scalar_ops!(@binary $scalar, Add, add, add_assign);
        scalar_ops!(@binary $scalar, Sub, sub, sub_assign);
        scalar_ops!(@binary $scalar, Mul, mul, mul_assign);
        scalar_ops!(@binary $scalar, Div, div, div_assign);

        impl Add<TrigPoly> for $scalar {
            type Output = TrigPoly;

            #[inline]
            fn add(self, rhs: TrigPoly) -> TrigPoly {
                rhs + self
            }
        }

        impl Add<&TrigPoly> for $scalar {
            type Output = TrigPoly;

            #[inline]
            fn add(self, rhs: &TrigPoly) -> TrigPoly {
                rhs + self
            }
        }

        impl Sub<TrigPoly> for $scalar {
            type Output = TrigPoly;

            #[inline]
            fn sub(self, rhs: TrigPoly) -> TrigPoly {
                -rhs + self
            }
        }

        impl Sub<&TrigPoly> for $scalar {
            type Output = TrigPoly;

            #[inline]
            fn sub(self, rhs: &TrigPoly) -> TrigPoly {
                -rhs + self
            }
        }

        impl Mul<TrigPoly> for $scalar {
            type Output = TrigPoly;

            #[inline]
            fn mul(self, rhs: TrigPoly) -> TrigPoly {
                rhs * self
            }
        }

        impl Mul<&TrigPoly> for $scalar {
            type Output = TrigPoly;

            #[inline]
            fn mul(self, rhs: &TrigPoly) -> TrigPoly {
                rhs * self
            }
        }
    };
}

scalar_ops!(Complex64);
scalar_ops!(f64);

impl Sum for TrigPoly {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a TrigPoly> for TrigPoly {
    fn sum<I: Iterator<Item = &'a TrigPoly>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}
