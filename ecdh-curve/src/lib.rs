#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod affine_point;
mod curve;
mod point;

pub use affine_point::AffinePoint;
pub use curve::Curve;
pub use ecdh_modular::ModularError;
pub use num_bigint::BigInt;
pub use point::Point;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("field size {0} is not positive")]
    NonPositiveField(BigInt),
    #[error("y^2 = x^3 + {a}x + {b} is singular over F({field}) and does not form a group")]
    NotAGroup { a: BigInt, b: BigInt, field: BigInt },
    #[error("the point ({x}, {y}) is not on the curve {curve}")]
    PointNotOnCurve { x: BigInt, y: BigInt, curve: String },
    #[error("points are defined over different curves")]
    CurveMismatch,
    #[error(transparent)]
    Modular(#[from] ModularError),
}
