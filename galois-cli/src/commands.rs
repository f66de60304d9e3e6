use galois_field::{Field, checked};

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every generator of the polynomial
    Generators,
    /// Print the exponent and logarithm tables
    Tables,
    Add {
        #[arg(value_parser = checked::parse_element)]
        a: u8,
        #[arg(value_parser = checked::parse_element)]
        b: u8,
    },
    Mul {
        #[arg(value_parser = checked::parse_element)]
        a: u8,
        #[arg(value_parser = checked::parse_element)]
        b: u8,
    },
    Div {
        #[arg(value_parser = checked::parse_element)]
        a: u8,
        #[arg(value_parser = checked::parse_element)]
        b: u8,
    },
    Inv {
        #[arg(value_parser = checked::parse_element)]
        a: u8,
    },
    Pow {
        #[arg(value_parser = checked::parse_element)]
        a: u8,
        n: u32,
    },
    Log {
        #[arg(value_parser = checked::parse_element)]
        a: u8,
    },
    /// Evaluate a polynomial (constant term first) at x
    Eval {
        #[arg(value_parser = checked::parse_element)]
        x: u8,
        #[arg(value_parser = checked::parse_element)]
        coefficients: Vec<u8>,
    },
    /// Add two comma separated polynomials, e.g. `1,2,3 4,5`
    PolyAdd {
        #[arg(value_parser = parse_coefficients)]
        a: Coefficients,
        #[arg(value_parser = parse_coefficients)]
        b: Coefficients,
    },
    /// Multiply two comma separated polynomials
    PolyMul {
        #[arg(value_parser = parse_coefficients)]
        a: Coefficients,
        #[arg(value_parser = parse_coefficients)]
        b: Coefficients,
    },
    /// Interpolate the value at x from `x:y` samples
    Interpolate {
        #[arg(value_parser = checked::parse_element)]
        x: u8,
        #[arg(value_parser = parse_sample)]
        samples: Vec<(u8, u8)>,
    },
    /// Random polynomial with the given constant term
    Random {
        #[arg(value_parser = checked::parse_element)]
        intercept: u8,
        #[arg(allow_negative_numbers = true)]
        degree: isize,
    },
}

// One comma separated argument, so two polynomials can share a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coefficients(pub Vec<u8>);

fn parse_coefficients(text: &str) -> Result<Coefficients, galois_field::Error> {
    if text.trim().is_empty() {
        return Ok(Coefficients(vec![]));
    }
    text.split(',')
        .map(checked::parse_element)
        .collect::<Result<_, _>>()
        .map(Coefficients)
}

fn parse_sample(text: &str) -> Result<(u8, u8), galois_field::Error> {
    let (x, y) = text
        .split_once(':')
        .ok_or_else(|| galois_field::Error::Parse(text.to_owned()))?;
    Ok((checked::parse_element(x)?, checked::parse_element(y)?))
}

struct Printer {
    hex: bool,
}

impl Printer {
    fn element(&self, value: u8) -> String {
        if self.hex {
            format!("{value:#04x}")
        } else {
            value.to_string()
        }
    }

    fn polynomial(&self, coefficients: &[u8]) -> String {
        coefficients
            .iter()
            .map(|&c| self.element(c))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn table(&self, values: &[u8]) -> String {
        let width = if self.hex { 5 } else { 4 };
        values
            .chunks(16)
            .map(|row| row.iter().map(|&v| format!("{:>width$}", self.element(v))).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn run(field: &Field, command: &Command, hex: bool) -> Result<String, galois_field::Error> {
    let fmt = Printer { hex };

    let output = match command {
        Command::Generators => {
            let generators = galois_field::find_all_generators(field.polynomial());
            fmt.polynomial(&generators)
        }
        Command::Tables => format!(
            "exp:\n{}\nlog:\n{}",
            fmt.table(&field.exp_table()[..255]),
            fmt.table(field.log_table())
        ),
        Command::Add { a, b } => fmt.element(field.add(*a, *b)),
        Command::Mul { a, b } => fmt.element(field.mul(*a, *b)),
        Command::Div { a, b } => fmt.element(field.div(*a, *b)?),
        Command::Inv { a } => fmt.element(field.inv(*a)?),
        Command::Pow { a, n } => fmt.element(field.pow(*a, *n)),
        Command::Log { a } => fmt.element(field.log(*a)?),
        Command::Eval { x, coefficients } => fmt.element(field.evaluate(coefficients, *x)?),
        Command::PolyAdd { a, b } => fmt.polynomial(&galois_field::add_polynomials(&a.0, &b.0)),
        Command::PolyMul { a, b } => fmt.polynomial(&field.mul_polynomials(&a.0, &b.0)),
        Command::Interpolate { x, samples } => fmt.element(field.interpolate(samples, *x)?),
        Command::Random { intercept, degree } => {
            let polynomial = galois_field::make_polynomial(*intercept, *degree, &mut rand::rng())?;
            fmt.polynomial(&polynomial)
        }
    };

    Ok(output)
}
