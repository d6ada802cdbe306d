#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod keypair;
mod params;

pub use ecdh_curve::{BigInt, Curve, CurveError, Point};
pub use keypair::Keypair;
pub use params::{CurveConfig, CurveParams};

use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgreementError {
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error("invalid integer {0:?} in curve parameters")]
    InvalidParameter(String),
    #[error("private key must be non-zero")]
    ZeroPrivateKey,
}

/// Builds the curve and generator described by `params` and returns
/// `private_key * G`.
pub fn generate_public_key(
    params: &CurveParams,
    private_key: &BigInt,
) -> Result<Point, AgreementError> {
    let generator = params.generator()?;
    let public = generator.scalar_mul(private_key)?;
    debug!("generated public key {} on {}", public, generator.curve());
    Ok(public)
}

/// `private_key * counterpart_public`, which both parties arrive at
/// independently.
pub fn shared_secret(counterpart_public: &Point, private_key: &BigInt) -> Result<Point, AgreementError> {
    let secret = counterpart_public.scalar_mul(private_key)?;
    debug!("derived shared secret from {}", counterpart_public);
    Ok(secret)
}
