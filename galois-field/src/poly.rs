//! Polynomials over the field, stored as coefficient slices with the constant term first:
//!
//! ```text
//! f(x) = coefficients[0] + coefficients[1]·x + coefficients[2]·x² + ...
//! ```

use crate::{Error, Field};

impl Field {
    /// Evaluates the polynomial at `x` using Horner's method.
    ///
    /// `x = 0` is rejected: sharing schemes built on this field keep `f(0)` for the secret, so only
    /// nonzero points are ever handed out.
    pub fn evaluate(&self, coefficients: &[u8], x: u8) -> Result<u8, Error> {
        let (&highest, rest) = coefficients.split_last().ok_or(Error::EmptyPolynomial)?;
        if x == 0 {
            return Err(Error::InvalidEvaluationPoint);
        }

        Ok(rest
            .iter()
            .rev()
            .fold(highest, |acc, &coefficient| self.add(self.mul(acc, x), coefficient)))
    }

    /// Product of two polynomials; `deg(a·b) = deg(a) + deg(b)`.
    pub fn mul_polynomials(&self, a: &[u8], b: &[u8]) -> Vec<u8> {
        if a.is_empty() || b.is_empty() {
            return vec![];
        }

        let mut result = vec![0u8; a.len() + b.len() - 1];
        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                result[i + j] = self.add(result[i + j], self.mul(ai, bj));
            }
        }
        result
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn scale_polynomial(&self, scalar: u8, coefficients: &[u8]) -> Vec<u8> {
        coefficients.iter().map(|&c| self.mul(scalar, c)).collect()
    }
}

/// Sum of two polynomials. Missing high order terms count as zero.
pub fn add_polynomials(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = longer.to_vec();
    for (r, &s) in result.iter_mut().zip(shorter) {
        *r ^= s;
    }
    result
}

/// Index of the highest nonzero coefficient, or `None` for the zero polynomial.
pub fn degree(coefficients: &[u8]) -> Option<usize> {
    coefficients.iter().rposition(|&c| c != 0)
}
