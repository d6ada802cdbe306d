use crate::{AffinePoint, Curve, CurveError};
use ecdh_modular::{modulo_div, modulo_multiply, modulo_pow};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use std::fmt;
use std::sync::Arc;

/// An element of the group of points of a [`Curve`].
///
/// Every point holds a shared handle to its curve, the curve itself is never
/// copied. The point at infinity has no coordinates.
#[derive(Debug, Clone)]
pub enum Point {
    Finite(AffinePoint),
    Infinity(Arc<Curve>),
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Finite(point) => write!(f, "{}", point),
            Self::Infinity(_) => write!(f, "Point at infinity"),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(lhs), Self::Finite(rhs)) => lhs == rhs,
            (Self::Infinity(lhs), Self::Infinity(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for Point {}

impl From<AffinePoint> for Point {
    fn from(point: AffinePoint) -> Self {
        Self::Finite(point)
    }
}

impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl std::ops::Neg for &Point {
    type Output = Point;
    fn neg(self) -> Self::Output {
        match self {
            Point::Finite(point) => Point::Finite(point.negate()),
            Point::Infinity(curve) => Point::Infinity(Arc::clone(curve)),
        }
    }
}

impl Point {
    /// Validated construction, `x` and `y` are reduced modulo the field size.
    pub fn new(
        curve: &Arc<Curve>,
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        label: &str,
    ) -> Result<Self, CurveError> {
        AffinePoint::new(curve, x.into(), y.into(), label.to_owned()).map(Self::Finite)
    }

    pub fn infinity(curve: &Arc<Curve>) -> Self {
        Self::Infinity(Arc::clone(curve))
    }

    pub fn curve(&self) -> &Arc<Curve> {
        match self {
            Self::Finite(point) => point.curve(),
            Self::Infinity(curve) => curve,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Infinity(_))
    }

    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Finite(point) => point.curve().contains(point.x(), point.y()),
            Self::Infinity(_) => true,
        }
    }

    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Self::Finite(point) => Some(point.x()),
            Self::Infinity(_) => None,
        }
    }

    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Self::Finite(point) => Some(point.y()),
            Self::Infinity(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Finite(point) => point.label(),
            Self::Infinity(_) => "",
        }
    }

    /// Attaches a display label. The point at infinity carries no label.
    pub fn with_label(mut self, label: &str) -> Self {
        if let Self::Finite(point) = &mut self {
            point.set_label(label.to_owned());
        }
        self
    }

    pub fn double(&self) -> Result<Self, CurveError> {
        self.geometric_add(self)
    }

    /// Chord-and-tangent addition.
    ///
    /// Only fails when a slope denominator is not invertible, which cannot
    /// happen over a prime field, or when the operands live on different
    /// curves.
    pub fn geometric_add(&self, rhs: &Self) -> Result<Self, CurveError> {
        if self.curve() != rhs.curve() {
            return Err(CurveError::CurveMismatch);
        }

        let (lhs, rhs) = match (self, rhs) {
            (Self::Infinity(_), _) => return Ok(rhs.clone()),
            (_, Self::Infinity(_)) => return Ok(self.clone()),
            (Self::Finite(lhs), Self::Finite(rhs)) => (lhs, rhs),
        };

        let curve = lhs.curve();
        let field = curve.field();
        let (x_1, y_1, x_2, y_2) = (lhs.x(), lhs.y(), rhs.x(), rhs.y());

        let slope = if x_1 == x_2 && y_1 == y_2 {
            // vertical tangent
            if y_1.is_zero() {
                return Ok(Self::infinity(curve));
            }
            let x_squared = modulo_pow(x_1, &BigInt::from(2), field)?;
            let numerator =
                (modulo_multiply(&BigInt::from(3), &x_squared, field)? + curve.a()).mod_floor(field);
            let denominator = modulo_multiply(&BigInt::from(2), y_1, field)?;
            modulo_div(&numerator, &denominator, field)?
        } else {
            // vertical chord through P and -P
            if x_1 == x_2 {
                return Ok(Self::infinity(curve));
            }
            let numerator = (y_2 - y_1).mod_floor(field);
            let denominator = (x_2 - x_1).mod_floor(field);
            modulo_div(&numerator, &denominator, field)?
        };

        let x_3 = (modulo_pow(&slope, &BigInt::from(2), field)? - x_2 - x_1).mod_floor(field);
        let y_3 =
            (modulo_multiply(&slope, &(&x_3 - x_1).mod_floor(field), field)? + y_1).mod_floor(field);

        Self::new(curve, x_3, -y_3, "")
    }

    /// Double-and-add over the bits of `scalar`, least significant first.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Result<Self, CurveError> {
        if scalar.is_negative() {
            return (-self).scalar_mul(&-scalar);
        }
        if scalar.is_zero() {
            return Ok(Self::infinity(self.curve()));
        }

        let mut doubled = self.clone();
        let mut sum = if scalar.bit(0) {
            self.clone()
        } else {
            Self::infinity(self.curve())
        };
        for i in 1..scalar.bits() {
            doubled = doubled.double()?;
            if scalar.bit(i) {
                sum = doubled.geometric_add(&sum)?;
            }
        }
        Ok(sum)
    }
}
