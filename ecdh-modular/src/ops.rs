use crate::{mulinv, ModularError};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Evaluates `a * b mod modulus`.
///
/// Operands are reduced before multiplying. The result follows floored
/// division, so it lies in `[0, modulus)` for a positive modulus even when
/// `a` or `b` is negative.
pub fn modulo_multiply(a: &BigInt, b: &BigInt, modulus: &BigInt) -> Result<BigInt, ModularError> {
    if modulus.is_zero() {
        return Err(ModularError::DivideByZero);
    }
    Ok((a.mod_floor(modulus) * b.mod_floor(modulus)).mod_floor(modulus))
}

/// Evaluates `base ^ exponent mod modulus` by square-and-multiply.
pub fn modulo_pow(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, ModularError> {
    if modulus.is_zero() {
        return Err(ModularError::DivideByZero);
    }
    if exponent.is_negative() {
        return Err(ModularError::NegativeExponent(exponent.clone()));
    }

    let mut result = BigInt::one().mod_floor(modulus);
    let mut square = base.mod_floor(modulus);
    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = modulo_multiply(&result, &square, modulus)?;
        }
        square = modulo_multiply(&square, &square, modulus)?;
    }
    Ok(result)
}

/// Evaluates `a / b mod modulus` as `a * b^-1 mod modulus`.
pub fn modulo_div(a: &BigInt, b: &BigInt, modulus: &BigInt) -> Result<BigInt, ModularError> {
    modulo_multiply(a, &mulinv(b, modulus)?, modulus)
}
