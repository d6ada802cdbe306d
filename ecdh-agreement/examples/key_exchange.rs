//! Alice and Bob agree on a shared point over `y^2 = x^3 + 7x + 3 (mod 37)`.
//!
//! Run with `RUST_LOG=debug` to trace the group operations.

use ecdh_agreement::{BigInt, CurveParams, Keypair};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let params = CurveParams::demo();
    let curve = params.curve()?;
    let generator = params.generator()?;
    println!("{}", curve);
    println!("{}", generator);

    let alice = Keypair::new(&generator, BigInt::from(4))?;
    let bob = Keypair::new(&generator, BigInt::from(7))?;
    println!("{}", alice.public().clone().with_label("Alice Public Key"));
    println!("{}", bob.public().clone().with_label("Bob Public Key"));

    let secret_alice = alice.shared_secret(bob.public())?;
    let secret_bob = bob.shared_secret(alice.public())?;
    assert_eq!(secret_alice, secret_bob);
    println!("{}", secret_alice.with_label("Shared Secret"));

    println!(
        "{} of {} candidate points listed for plotting",
        curve.coordinates().len(),
        curve.order()
    );
    Ok(())
}
