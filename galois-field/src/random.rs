use crate::Error;
use rand::RngCore;

/// Source of uniformly random bytes for polynomial coefficients.
///
/// Implemented for every [`rand::CryptoRng`], so `rand::rng()` can be passed directly.
pub trait RandomBytes {
    fn random_bytes(&mut self, n: usize) -> Vec<u8>;
}

impl<R: rand::CryptoRng + ?Sized> RandomBytes for R {
    fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n];
        self.fill_bytes(&mut bytes);
        bytes
    }
}

/// A polynomial of the given degree with constant term `intercept` and random higher coefficients.
///
/// The leading coefficient may come out as zero, in which case the true degree is lower.
pub fn make_polynomial<R: RandomBytes + ?Sized>(intercept: u8, degree: isize, rng: &mut R) -> Result<Vec<u8>, Error> {
    let degree = usize::try_from(degree).map_err(|_| Error::NegativeDegree(degree))?;

    let mut coefficients = Vec::with_capacity(degree + 1);
    coefficients.push(intercept);
    coefficients.extend(rng.random_bytes(degree));
    Ok(coefficients)
}
