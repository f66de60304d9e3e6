use galois_field::{checked, generators, polynomials};

// Integers may be written either as TOML integers or as strings, so "0x11b" works as well as 283
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawValue {
    Integer(i64),
    Text(String),
}

fn polynomial_from_raw(raw: RawValue) -> Result<u16, String> {
    match raw {
        RawValue::Integer(value) => checked::polynomial(value).map_err(|e| e.to_string()),
        RawValue::Text(text) => match text.to_ascii_lowercase().as_str() {
            "aes" => Ok(polynomials::AES),
            "reed_solomon" => Ok(polynomials::REED_SOLOMON),
            _ => checked::parse_polynomial(&text).map_err(|e| e.to_string()),
        },
    }
}

fn generator_from_raw(raw: RawValue) -> Result<u8, String> {
    match raw {
        RawValue::Integer(value) => checked::element(value).map_err(|e| e.to_string()),
        RawValue::Text(text) => match text.to_ascii_lowercase().as_str() {
            "aes" => Ok(generators::AES),
            "reed_solomon" => Ok(generators::REED_SOLOMON),
            "fast" => Ok(generators::FAST),
            _ => checked::parse_element(&text).map_err(|e| e.to_string()),
        },
    }
}

pub(crate) fn serialize_polynomial<S>(polynomial: &u16, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::Serialize;
    format!("{polynomial:#05x}").serialize(serializer)
}

pub(crate) fn deserialize_polynomial<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let raw = RawValue::deserialize(deserializer)?;
    polynomial_from_raw(raw).map_err(|e| serde::de::Error::custom(format!("invalid polynomial: {e}")))
}

pub(crate) fn serialize_generator<S>(generator: &Option<u8>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::Serialize;
    generator.map(|g| format!("{g:#04x}")).serialize(serializer)
}

pub(crate) fn deserialize_generator<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let raw = RawValue::deserialize(deserializer)?;
    generator_from_raw(raw)
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("invalid generator: {e}")))
}
