#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod euclid;
mod ops;

pub use euclid::{egcd, mulinv};
pub use ops::{modulo_div, modulo_multiply, modulo_pow};

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModularError {
    #[error("divide by zero: modulus is zero")]
    DivideByZero,
    #[error("exponent {0} is negative")]
    NegativeExponent(BigInt),
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    NoModularInverse { value: BigInt, modulus: BigInt },
}
