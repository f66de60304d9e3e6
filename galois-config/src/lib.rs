mod serdes;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to read config file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unable to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid field: {0}")]
    Field(#[from] galois_field::Error),
}

// Polynomial and generator accept integers, "0x" hex strings, or the preset names
// "aes"/"reed_solomon" (plus "fast" for the generator). Without a generator the smallest
// one the polynomial admits is used.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldConfig {
    #[serde(
        default = "default_polynomial",
        serialize_with = "serdes::serialize_polynomial",
        deserialize_with = "serdes::deserialize_polynomial"
    )]
    pub polynomial: u16,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serdes::serialize_generator",
        deserialize_with = "serdes::deserialize_generator"
    )]
    pub generator: Option<u8>,
}

fn default_polynomial() -> u16 {
    galois_field::DEFAULT_POLYNOMIAL
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            polynomial: galois_field::DEFAULT_POLYNOMIAL,
            generator: Some(galois_field::DEFAULT_GENERATOR),
        }
    }
}

impl FieldConfig {
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!("Loaded field config from {}", path.display());
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }

    /// Validates the pair and builds the field tables.
    pub fn build(&self) -> Result<galois_field::Field, Error> {
        let field = match self.generator {
            Some(generator) => galois_field::Field::new(self.polynomial, generator)?,
            None => galois_field::Field::with_polynomial(self.polynomial)?,
        };
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galois_field::{Field, generators, polynomials};

    #[test]
    fn test_default() {
        let config = FieldConfig::default();
        assert_eq!(config.build().unwrap(), Field::AES);
        assert_eq!(FieldConfig::from_toml_str("").unwrap().build().unwrap(), Field::AES);
    }

    #[test]
    fn test_presets() {
        let config = FieldConfig::from_toml_str(
            r#"
            polynomial = "reed_solomon"
            generator = "fast"
            "#,
        )
        .unwrap();
        assert_eq!(config.polynomial, polynomials::REED_SOLOMON);
        assert_eq!(config.generator, Some(generators::FAST));
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_integers_and_hex() {
        let config = FieldConfig::from_toml_str("polynomial = 285\ngenerator = \"0xE5\"").unwrap();
        assert_eq!(config.build().unwrap(), Field::REED_SOLOMON);
    }

    #[test]
    fn test_missing_generator() {
        let config = FieldConfig::from_toml_str("polynomial = \"0x11d\"").unwrap();
        assert_eq!(config.generator, None);
        assert_eq!(config.build().unwrap().generator(), generators::FAST);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            FieldConfig::from_toml_str("polynomial = 70000"),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            FieldConfig::from_toml_str("generator = 256"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_invalid_generator() {
        let config = FieldConfig::from_toml_str("polynomial = \"aes\"\ngenerator = 2").unwrap();
        assert!(matches!(
            config.build(),
            Err(Error::Field(galois_field::Error::InvalidGenerator { .. }))
        ));
    }

    #[test]
    fn test_serialize() {
        let text = FieldConfig::default().to_toml_string().unwrap();
        assert!(text.contains("polynomial = \"0x11b\""), "{text}");
        assert!(text.contains("generator = \"0x03\""), "{text}");
        assert_eq!(FieldConfig::from_toml_str(&text).unwrap(), FieldConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            FieldConfig::load("/nonexistent/galois.toml"),
            Err(Error::Io { .. })
        ));
    }
}
