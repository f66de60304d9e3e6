//! Arithmetic over GF(2^8) for an arbitrary irreducible polynomial and generator.
//!
//! A [`Field`] is built once from a `(polynomial, generator)` pair. Construction validates that the
//! generator walks all 255 nonzero elements and precomputes the exponent and logarithm tables that
//! every later operation reads. After that a field is never mutated, so a single instance can be
//! shared between threads freely.
//!
//! ```
//! use galois_field::{Field, generators, polynomials};
//!
//! let field = Field::new(polynomials::AES, generators::AES).unwrap();
//! assert_eq!(field.mul(0x53, 0xCA), 0x01);
//! assert_eq!(field.inv(0x53).unwrap(), 0xCA);
//! ```

pub mod checked;
mod interpolate;
mod lut;
pub mod poly;
mod random;

pub use lut::{find_all_generators, is_generator, multiply_bytes};
pub use poly::{add_polynomials, degree};
pub use random::{RandomBytes, make_polynomial};

/// Irreducible polynomials with their leading x^8 term included.
pub mod polynomials {
    /// x^8 + x^4 + x^3 + x + 1, as used by AES.
    pub const AES: u16 = 0x11B;
    /// x^8 + x^4 + x^3 + x^2 + 1, as used by most Reed-Solomon codecs (QR codes, RAID-6).
    pub const REED_SOLOMON: u16 = 0x11D;
}

/// Well known generators. Each one is only valid for the polynomial noted on it.
pub mod generators {
    /// Generator for [`super::polynomials::AES`].
    pub const AES: u8 = 0x03;
    /// Generator for [`super::polynomials::REED_SOLOMON`].
    pub const REED_SOLOMON: u8 = 0xE5;
    /// `x` itself; a generator for [`super::polynomials::REED_SOLOMON`] but not for AES.
    pub const FAST: u8 = 0x02;
}

pub const DEFAULT_POLYNOMIAL: u16 = polynomials::AES;
pub const DEFAULT_GENERATOR: u8 = generators::AES;

// Compile time check that the built in pairs really generate their fields
const _: () = assert!(lut::is_generator(polynomials::AES, generators::AES));
const _: () = assert!(lut::is_generator(polynomials::REED_SOLOMON, generators::REED_SOLOMON));
const _: () = assert!(lut::is_generator(polynomials::REED_SOLOMON, generators::FAST));

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{kind} value {value} is out of range")]
    OutOfRange { kind: &'static str, value: i64 },
    #[error("{generator:#04x} does not generate the multiplicative group of polynomial {polynomial:#05x}")]
    InvalidGenerator { polynomial: u16, generator: u8 },
    #[error("polynomial {polynomial:#05x} has no generator; it is not irreducible")]
    NoGenerator { polynomial: u16 },
    #[error("division by zero")]
    DivisionByZero,
    #[error("zero has no multiplicative inverse")]
    NoInverseForZero,
    #[error("zero has no discrete logarithm")]
    NoLogarithmForZero,
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,
    #[error("no sample points given")]
    EmptyInput,
    #[error("polynomials may only be evaluated at nonzero points")]
    InvalidEvaluationPoint,
    #[error("polynomial degree must not be negative, got {0}")]
    NegativeDegree(isize),
    #[error("unable to parse '{0}' as an integer")]
    Parse(String),
}

/// GF(2^8) defined by `polynomial`, with discrete logs taken base `generator`.
#[derive(Clone)]
pub struct Field {
    polynomial: u16,
    generator: u8,
    // Doubled so that log[a] + log[b] never needs reducing mod 255
    exp: [u8; 512],
    log: [u8; 256],
}

impl Field {
    pub const AES: Field = Field::build(polynomials::AES, generators::AES);
    pub const REED_SOLOMON: Field = Field::build(polynomials::REED_SOLOMON, generators::REED_SOLOMON);

    /// Builds the tables for `polynomial`, failing if `generator` does not have order 255.
    pub fn new(polynomial: u16, generator: u8) -> Result<Self, Error> {
        if !lut::is_generator(polynomial, generator) {
            return Err(Error::InvalidGenerator { polynomial, generator });
        }

        tracing::debug!("Built GF(2^8) tables for polynomial {polynomial:#05x}, generator {generator:#04x}");
        Ok(Self::build(polynomial, generator))
    }

    /// Builds the field using the smallest generator `polynomial` admits.
    pub fn with_polynomial(polynomial: u16) -> Result<Self, Error> {
        let generator = *lut::find_all_generators(polynomial)
            .first()
            .ok_or(Error::NoGenerator { polynomial })?;
        Self::new(polynomial, generator)
    }

    const fn build(polynomial: u16, generator: u8) -> Self {
        let (exp, log) = lut::build_tables(polynomial, generator);
        Self {
            polynomial,
            generator,
            exp,
            log,
        }
    }

    pub fn polynomial(&self) -> u16 {
        self.polynomial
    }

    pub fn generator(&self) -> u8 {
        self.generator
    }

    pub fn exp_table(&self) -> &[u8; 512] {
        &self.exp
    }

    /// `log_table()[0]` carries no meaning.
    pub fn log_table(&self) -> &[u8; 256] {
        &self.log
    }

    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        // Subtraction in GF(256) is the same as addition (XOR)
        a ^ b
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    #[inline]
    pub fn div(&self, a: u8, b: u8) -> Result<u8, Error> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        let mut diff = self.log[a as usize] as isize - self.log[b as usize] as isize;
        if diff < 0 {
            diff += 255;
        }
        Ok(self.exp[diff as usize])
    }

    #[inline]
    pub fn inv(&self, a: u8) -> Result<u8, Error> {
        if a == 0 {
            return Err(Error::NoInverseForZero);
        }
        Ok(self.exp[255 - self.log[a as usize] as usize])
    }

    /// `a` raised to the `n`th power, with `0^0 = 1`.
    pub fn pow(&self, a: u8, n: u32) -> u8 {
        if n == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let exponent = (self.log[a as usize] as u64 * n as u64) % 255;
        self.exp[exponent as usize]
    }

    /// The generator raised to the `i`th power.
    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % 255]
    }

    /// Discrete logarithm of `a`, base the generator.
    pub fn log(&self, a: u8) -> Result<u8, Error> {
        if a == 0 {
            return Err(Error::NoLogarithmForZero);
        }
        Ok(self.log[a as usize])
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::AES
    }
}

// The tables are fully determined by the polynomial and generator
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.polynomial == other.polynomial && self.generator == other.generator
    }
}

impl Eq for Field {}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("polynomial", &format_args!("{:#05x}", self.polynomial))
            .field("generator", &format_args!("{:#04x}", self.generator))
            .finish_non_exhaustive()
    }
}
