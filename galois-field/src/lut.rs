/// Carry-less multiplication of `a` and `b` reduced modulo `polynomial`.
///
/// Only used to build tables and search for generators; [`crate::Field::mul`] is the fast path.
pub const fn multiply_bytes(mut a: u8, mut b: u8, polynomial: u16) -> u8 {
    // The x^8 term is implied by the carry out of bit 7
    let reduction = polynomial as u8;
    let mut product = 0u8;

    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= reduction;
        }
        b >>= 1;
        i += 1;
    }

    product
}

/// Whether the powers of `candidate` visit all 255 nonzero elements modulo `polynomial`.
pub const fn is_generator(polynomial: u16, candidate: u8) -> bool {
    let mut seen = [false; 256];
    let mut x = 1u8;

    let mut i = 0;
    while i < 255 {
        x = multiply_bytes(x, candidate, polynomial);
        if seen[x as usize] {
            // Order is a proper divisor of 255
            return false;
        }
        seen[x as usize] = true;
        i += 1;
    }

    !seen[0]
}

/// Every generator of `polynomial` in `2..=254`, ascending.
pub fn find_all_generators(polynomial: u16) -> Vec<u8> {
    let generators: Vec<u8> = (2..=254u8)
        .filter(|&candidate| is_generator(polynomial, candidate))
        .collect();
    tracing::debug!(
        "Found {} generators for polynomial {polynomial:#05x}",
        generators.len()
    );
    generators
}

/// Returns `(exp, log)`. `generator` must already be known to satisfy [`is_generator`].
pub(crate) const fn build_tables(polynomial: u16, generator: u8) -> ([u8; 512], [u8; 256]) {
    let mut exp = [0u8; 512];
    // log[0] is undefined, leave as 0
    let mut log = [0u8; 256];
    let mut x = 1u8;

    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        log[x as usize] = i as u8;
        x = multiply_bytes(x, generator, polynomial);
        i += 1;
    }

    // Second copy so log[a] + log[b] (at most 508) can index directly
    let mut i = 0;
    while i <= 255 {
        exp[i + 255] = exp[i];
        i += 1;
    }

    (exp, log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators, polynomials};

    #[test]
    fn test_multiply_bytes() {
        assert_eq!(multiply_bytes(0x53, 0xCA, polynomials::AES), 0x01);
        assert_eq!(multiply_bytes(0x57, 0x83, polynomials::AES), 0xC1);
        assert_eq!(multiply_bytes(0x57, 0x13, polynomials::AES), 0xFE);
        assert_eq!(multiply_bytes(0x80, 0x02, polynomials::AES), 0x1B);
        assert_eq!(multiply_bytes(0x80, 0x02, polynomials::REED_SOLOMON), 0x1D);
        for a in 0..=255u8 {
            assert_eq!(multiply_bytes(a, 1, polynomials::AES), a);
            assert_eq!(multiply_bytes(a, 0, polynomials::AES), 0);
        }
    }

    #[test]
    fn test_is_generator() {
        assert!(is_generator(polynomials::AES, generators::AES));
        assert!(is_generator(polynomials::REED_SOLOMON, generators::REED_SOLOMON));
        assert!(is_generator(polynomials::REED_SOLOMON, generators::FAST));
        assert!(!is_generator(polynomials::AES, generators::FAST));
        for polynomial in [polynomials::AES, polynomials::REED_SOLOMON] {
            assert!(!is_generator(polynomial, 0));
            assert!(!is_generator(polynomial, 1));
        }
    }

    #[test]
    fn test_find_all_generators() {
        let aes = find_all_generators(polynomials::AES);
        // phi(255) = 128 generators in total; 0xFF is one of them but lies outside the search range
        assert_eq!(aes.len(), 127);
        assert!(is_generator(polynomials::AES, 0xFF));
        assert_eq!(&aes[..5], &[0x03, 0x05, 0x06, 0x09, 0x0B]);
        assert!(aes.windows(2).all(|w| w[0] < w[1]));
        assert!(aes.iter().all(|&g| is_generator(polynomials::AES, g)));

        let rs = find_all_generators(polynomials::REED_SOLOMON);
        assert_eq!(rs.len(), 128);
        assert_eq!(rs[0], generators::FAST);
        assert!(rs.contains(&generators::REED_SOLOMON));
    }

    #[test]
    fn test_reducible_polynomial_has_no_generators() {
        assert!(find_all_generators(0x100).is_empty());
        assert!(find_all_generators(0x101).is_empty());
    }

    #[test]
    fn test_build_tables() {
        let (exp, log) = build_tables(polynomials::REED_SOLOMON, generators::FAST);
        assert_eq!(&exp[..10], &[1, 2, 4, 8, 16, 32, 64, 128, 29, 58]);
        assert_eq!(exp[255], 1);
        assert_eq!(exp[510], 1);
        assert_eq!(log[2], 1);
        assert_eq!(log[29], 8);
    }
}
