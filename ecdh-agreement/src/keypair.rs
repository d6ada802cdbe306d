use crate::{shared_secret, AgreementError};
use ecdh_curve::{BigInt, Point};

use log::debug;
use num_bigint::RandBigInt;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

use std::fmt;

/// A private scalar together with the public point it publishes.
pub struct Keypair {
    private: BigInt,
    public: Point,
}

// the private scalar is never printed
impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl Keypair {
    pub fn new(generator: &Point, private: BigInt) -> Result<Self, AgreementError> {
        if private.is_zero() {
            return Err(AgreementError::ZeroPrivateKey);
        }
        let public = generator.scalar_mul(&private)?;
        debug!("new keypair with public key {}", public);
        Ok(Self { private, public })
    }

    /// Samples the private scalar uniformly from `[1, p)`.
    pub fn random<R: RngCore + CryptoRng>(
        rng: &mut R,
        generator: &Point,
    ) -> Result<Self, AgreementError> {
        let private = rng.gen_bigint_range(&BigInt::one(), generator.curve().field());
        Self::new(generator, private)
    }

    pub fn private(&self) -> &BigInt {
        &self.private
    }

    pub fn public(&self) -> &Point {
        &self.public
    }

    pub fn shared_secret(&self, counterpart_public: &Point) -> Result<Point, AgreementError> {
        shared_secret(counterpart_public, &self.private)
    }
}
