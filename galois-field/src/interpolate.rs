//! Lagrange interpolation over the field.

use crate::{Error, Field};

impl Field {
    /// Value at `x` of the lowest degree polynomial passing through every `(x, y)` in `samples`.
    ///
    /// Sample x-coordinates must be pairwise distinct. This is not checked up front; a repeated
    /// coordinate makes one of the basis denominators zero and surfaces as
    /// [`Error::DivisionByZero`]. Unlike [`Field::evaluate`], `x = 0` is allowed, which is how a
    /// secret stored at `f(0)` is recovered.
    pub fn interpolate(&self, samples: &[(u8, u8)], x: u8) -> Result<u8, Error> {
        if samples.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut result = 0u8;
        for (i, &(xi, yi)) in samples.iter().enumerate() {
            let mut basis = 1u8;
            for (j, &(xj, _)) in samples.iter().enumerate() {
                if i == j {
                    continue;
                }
                // (x - xj) / (xi - xj), subtraction being XOR
                basis = self.mul(basis, self.div(self.add(x, xj), self.add(xi, xj))?);
            }
            result = self.add(result, self.mul(yi, basis));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_polynomial;
    use rand::SeedableRng;

    #[test]
    fn test_empty() {
        assert_eq!(Field::default().interpolate(&[], 1), Err(Error::EmptyInput));
    }

    #[test]
    fn test_single_sample() {
        let field = Field::default();
        for x in [0, 1, 77, 255] {
            assert_eq!(field.interpolate(&[(3, 0xAB)], x), Ok(0xAB));
        }
    }

    #[test]
    fn test_duplicate_x() {
        let field = Field::default();
        assert_eq!(
            field.interpolate(&[(1, 4), (2, 5), (1, 6)], 9),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_line() {
        let field = Field::default();
        // f(x) = 1 + 2x + 3x^2
        let samples = [(1, 0), (2, 9), (3, field.evaluate(&[1, 2, 3], 3).unwrap())];
        assert_eq!(field.interpolate(&samples, 0), Ok(1));
        assert_eq!(field.interpolate(&samples, 4), field.evaluate(&[1, 2, 3], 4));
    }

    #[test]
    fn test_lagrange_delta() {
        let field = Field::default();
        let xs = [3u8, 17, 99, 200, 254];
        for (k, &xk) in xs.iter().enumerate() {
            let samples: Vec<(u8, u8)> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| (x, (i == k) as u8))
                .collect();
            for &x in &xs {
                let expected = if x == xk { 1 } else { 0 };
                assert_eq!(field.interpolate(&samples, x), Ok(expected));
            }
        }
    }

    #[test]
    fn test_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0x11B);
        for field in [Field::AES, Field::REED_SOLOMON] {
            for degree in 0..10isize {
                let secret = degree as u8 * 13;
                let polynomial = make_polynomial(secret, degree, &mut rng).unwrap();
                let samples: Vec<(u8, u8)> = (1..=degree as u8 + 1)
                    .map(|x| (x, field.evaluate(&polynomial, x).unwrap()))
                    .collect();

                for &(x, y) in &samples {
                    assert_eq!(field.interpolate(&samples, x), Ok(y));
                }
                for x in 100..=255u8 {
                    assert_eq!(field.interpolate(&samples, x), field.evaluate(&polynomial, x));
                }
                assert_eq!(field.interpolate(&samples, 0), Ok(secret));
            }
        }
    }
}
