use crate::ModularError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a * x + b * y == g` where `g` is the
/// greatest common divisor of `a` and `b`. Quotients are floored, so `g`
/// may come out negative for negative inputs.
pub fn egcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (g, x, y) = egcd(&b.mod_floor(a), a);
    let quotient = b.div_floor(a);
    let coeff_a = y - &quotient * &x;
    (g, coeff_a, x)
}

/// Multiplicative inverse of `b` modulo `n`, reduced into `[0, n)`.
pub fn mulinv(b: &BigInt, n: &BigInt) -> Result<BigInt, ModularError> {
    if n.is_zero() {
        return Err(ModularError::DivideByZero);
    }

    // g is +-1 exactly when b and n are coprime
    let (g, x, _) = egcd(&b.mod_floor(n), n);
    if g.abs().is_one() {
        Ok((x * g).mod_floor(n))
    } else {
        Err(ModularError::NoModularInverse {
            value: b.clone(),
            modulus: n.clone(),
        })
    }
}
