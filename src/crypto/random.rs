//! Cryptographically secure random generation.
//!
//! Raw bytes come straight from the operating system (`OsRng`); typed
//! values use rand's thread-local CSPRNG, which is reseeded from the OS.

use rand::distr::{Distribution, StandardUniform};
use rand_core::{OsRng, RngCore};

/// Fill `buf` with bytes from the OS CSPRNG.
///
/// May block briefly if the system entropy pool is not yet initialized.
pub fn fill_random(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

/// Return `len` random bytes.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    fill_random(&mut buf);
    buf
}

/// Return a random value of any type the standard distribution supports
/// (integers, `bool`, byte arrays, ...).
pub fn random<T>() -> T
where
    StandardUniform: Distribution<T>,
{
    rand::random()
}
