fn main() -> Result<(), galois_config::Error> {
    let config = galois_config::FieldConfig {
        polynomial: galois_field::polynomials::REED_SOLOMON,
        generator: Some(galois_field::generators::REED_SOLOMON),
    };

    // Validate before printing so the example is always usable as is
    config.build()?;

    println!("{}", config.to_toml_string()?);

    Ok(())
}
