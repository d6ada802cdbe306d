use crate::CurveError;
use ecdh_modular::{modulo_multiply, modulo_pow};

use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use std::fmt;
use std::sync::OnceLock;

/// Short Weierstrass curve `y^2 = x^3 + ax + b` over the prime field `F(p)`.
///
/// The discriminant is checked at construction. The on-curve coordinates are
/// only enumerated when [`Curve::coordinates`] or [`Curve::order`] is first
/// called, and then cached for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    field: BigInt,
    discriminant: BigInt,
    coordinates: OnceLock<Vec<(BigInt, BigInt)>>,
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "y^2 = x^3 + {}x + {} on finite field F({}).",
            self.a, self.b, self.field
        )
    }
}

// NOTE curves are compared by coefficients only, the field is ignored
impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl Eq for Curve {}

impl Curve {
    pub fn new(
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        field: impl Into<BigInt>,
    ) -> Result<Self, CurveError> {
        let (a, b, field) = (a.into(), b.into(), field.into());
        if field.is_negative() {
            return Err(CurveError::NonPositiveField(field));
        }

        // -16 * (4a^3 + 27b^2)
        let a3 = modulo_pow(&a, &BigInt::from(3), &field)?;
        let b2 = modulo_pow(&b, &BigInt::from(2), &field)?;
        let sum = modulo_multiply(&BigInt::from(4), &a3, &field)?
            + modulo_multiply(&BigInt::from(27), &b2, &field)?;
        let discriminant = modulo_multiply(&BigInt::from(-16), &sum, &field)?;

        debug!(
            "curve y^2 = x^3 + {}x + {} over F({}) has discriminant {}",
            a, b, field, discriminant
        );

        let curve = Self {
            a,
            b,
            field,
            discriminant,
            coordinates: OnceLock::new(),
        };

        if curve.is_group() {
            Ok(curve)
        } else {
            Err(CurveError::NotAGroup {
                a: curve.a,
                b: curve.b,
                field: curve.field,
            })
        }
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn field(&self) -> &BigInt {
        &self.field
    }

    pub fn discriminant(&self) -> &BigInt {
        &self.discriminant
    }

    /// A non-zero discriminant is necessary for the chord-and-tangent law to
    /// define a group on the curve.
    pub fn is_group(&self) -> bool {
        !self.discriminant.is_zero()
    }

    /// Left hand side of the curve equation, `y^2 mod p`.
    pub fn evaluate_lhs(&self, y: &BigInt) -> BigInt {
        let y = y.mod_floor(&self.field);
        (&y * &y).mod_floor(&self.field)
    }

    /// Right hand side of the curve equation, `x^3 + ax + b mod p`.
    pub fn evaluate_rhs(&self, x: &BigInt) -> BigInt {
        let x = x.mod_floor(&self.field);
        (x.pow(3) + &self.a * &x + &self.b).mod_floor(&self.field)
    }

    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        self.evaluate_lhs(y) == self.evaluate_rhs(x)
    }

    /// Affine coordinates found by scanning every `x` in the field.
    ///
    /// A coordinate is recorded only when the reduced right hand side is a
    /// perfect square over the integers. This is not a modular square root
    /// search, so most curves have on-curve points that are not listed here.
    pub fn coordinates(&self) -> &[(BigInt, BigInt)] {
        self.coordinates.get_or_init(|| self.find_coordinates())
    }

    /// Number of enumerated coordinates plus the point at infinity.
    pub fn order(&self) -> usize {
        self.coordinates().len() + 1
    }

    fn find_coordinates(&self) -> Vec<(BigInt, BigInt)> {
        let mut coordinates = Vec::new();
        let mut x = BigInt::zero();
        while x < self.field {
            // rhs is reduced into [0, p) so the square root is defined
            let rhs = self.evaluate_rhs(&x);
            let root = rhs.sqrt();
            if &root * &root == rhs {
                let y = root.mod_floor(&self.field);
                let neg_y = (-root).mod_floor(&self.field);
                let distinct = y != neg_y;
                coordinates.push((x.clone(), y));
                if distinct {
                    coordinates.push((x.clone(), neg_y));
                }
            }
            x += 1u32;
        }

        trace!("found {} coordinates on {}", coordinates.len(), self);
        coordinates
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ModularError;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn reference_curve() {
        let _ = env_logger::try_init();
        let curve = Curve::new(7, 3, 37).unwrap();
        assert!(curve.is_group());
        assert_eq!(curve.discriminant(), &big(23));
        assert_eq!(curve.a(), &big(7));
        assert_eq!(curve.b(), &big(3));
        assert_eq!(curve.field(), &big(37));
        assert_eq!(
            curve.to_string(),
            "y^2 = x^3 + 7x + 3 on finite field F(37)."
        );
    }

    #[test]
    fn singular_curves() {
        assert_eq!(
            Curve::new(0, 0, 37).unwrap_err(),
            CurveError::NotAGroup {
                a: big(0),
                b: big(0),
                field: big(37)
            }
        );
        // 4 * (-3)^3 + 27 * 2^2 == 0
        assert!(matches!(
            Curve::new(-3, 2, 37),
            Err(CurveError::NotAGroup { .. })
        ));
        // 4 + 27 == 31 vanishes only modulo 31
        assert!(Curve::new(1, 1, 37).is_ok());
        assert!(matches!(
            Curve::new(1, 1, 31),
            Err(CurveError::NotAGroup { .. })
        ));
    }

    #[test]
    fn invalid_field() {
        assert_eq!(
            Curve::new(7, 3, 0).unwrap_err(),
            CurveError::Modular(ModularError::DivideByZero)
        );
        assert_eq!(
            Curve::new(7, 3, -37).unwrap_err(),
            CurveError::NonPositiveField(big(-37))
        );
    }

    #[test]
    fn curve_equation() {
        let curve = Curve::new(7, 3, 37).unwrap();
        assert_eq!(curve.evaluate_lhs(&big(5)), big(25));
        assert_eq!(curve.evaluate_rhs(&big(2)), big(25));
        assert_eq!(curve.evaluate_lhs(&big(-5)), big(25));
        assert_eq!(curve.evaluate_rhs(&big(39)), big(25));
        assert!(curve.contains(&big(2), &big(5)));
        assert!(curve.contains(&big(2), &big(32)));
        assert!(!curve.contains(&big(2), &big(6)));
    }

    #[test]
    fn coordinates() {
        let curve = Curve::new(7, 3, 37).unwrap();
        let expected = [
            (2, 5),
            (2, 32),
            (7, 5),
            (7, 32),
            (8, 4),
            (8, 33),
            (10, 0),
            (18, 2),
            (18, 35),
            (22, 1),
            (22, 36),
            (24, 3),
            (24, 34),
            (25, 2),
            (25, 35),
            (26, 1),
            (26, 36),
            (28, 5),
            (28, 32),
            (31, 2),
            (31, 35),
        ]
        .iter()
        .map(|&(x, y)| (big(x), big(y)))
        .collect::<Vec<_>>();

        assert_eq!(curve.coordinates(), expected.as_slice());
        assert_eq!(curve.order(), 22);
        for (x, y) in curve.coordinates() {
            assert!(curve.contains(x, y));
        }
        // computed once, then cached
        assert_eq!(curve.coordinates().as_ptr(), curve.coordinates().as_ptr());
    }

    #[test]
    fn equality_ignores_field() {
        let curve = Curve::new(7, 3, 37).unwrap();
        assert_eq!(curve, Curve::new(7, 3, 37).unwrap());
        assert_eq!(curve, Curve::new(7, 3, 41).unwrap());
        assert_ne!(curve, Curve::new(7, 4, 37).unwrap());
        assert_ne!(curve, Curve::new(6, 3, 37).unwrap());
    }
}
