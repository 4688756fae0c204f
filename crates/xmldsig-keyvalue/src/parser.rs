//! Element tree → parameter set.
//!
//! Shape checks run on a plain record of located child elements before any
//! base64 is decoded, so a document missing a field or carrying half of the
//! `Seed`/`PgenCounter` pair is rejected without allocating big integers.

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::bigint::{decode_base64, decode_bytes};
use crate::config::CodecConfig;
use crate::error::{KeyValueError, KeyValueResult};
use crate::format::KeyValueFormat;
use crate::ns::{DSIG, node};
use crate::params::{DsaGeneration, DsaParameters, RsaParameters};
use crate::xml::Element;

/// Parses `KeyValue/<K::ALGORITHM_ELEMENT>` into `K`.
pub fn parse_key_value<K: KeyValueFormat>(
    element: Option<&Element>,
    config: &CodecConfig,
) -> KeyValueResult<K> {
    let element = element.ok_or(KeyValueError::InvalidArgument("element"))?;
    algorithm_element(element, K::ALGORITHM_ELEMENT)
        .and_then(|algorithm| K::from_element(algorithm, config))
        .inspect_err(|e| warn!(error = %e, element = K::ALGORITHM_ELEMENT, "rejected KeyValue"))
}

/// Parses a bare `DSAKeyValue` element.
pub fn parse_dsa_key_value(
    element: &Element,
    config: &CodecConfig,
) -> KeyValueResult<DsaParameters> {
    expect_element(element, node::DSA_KEY_VALUE)?;
    let fields = DsaFields::locate(element);
    fields.check_shape()?;

    let params = DsaParameters {
        p: decode_required(node::DSA_P, fields.p, config)?,
        q: decode_required(node::DSA_Q, fields.q, config)?,
        g: decode_required(node::DSA_G, fields.g, config)?,
        y: decode_required(node::DSA_Y, fields.y, config)?,
        j: fields
            .j
            .map(|j| decode_child(node::DSA_J, j, config))
            .transpose()?,
        generation: match (fields.seed, fields.pgen_counter) {
            (Some(seed), Some(counter)) => Some(DsaGeneration {
                seed: decode_bytes(node::DSA_SEED, &seed.text(), config)?,
                pgen_counter: decode_child(node::DSA_PGEN_COUNTER, counter, config)?,
            }),
            _ => None,
        },
    };

    debug!(
        has_j = params.j.is_some(),
        has_generation = params.generation.is_some(),
        "parsed DSAKeyValue"
    );
    Ok(params)
}

/// Parses a bare `RSAKeyValue` element.
pub fn parse_rsa_key_value(
    element: &Element,
    config: &CodecConfig,
) -> KeyValueResult<RsaParameters> {
    expect_element(element, node::RSA_KEY_VALUE)?;
    let modulus = element.child(DSIG, node::RSA_MODULUS);
    let exponent = element.child(DSIG, node::RSA_EXPONENT);

    let params = RsaParameters {
        modulus: decode_required(node::RSA_MODULUS, modulus, config)?,
        exponent: decode_required(node::RSA_EXPONENT, exponent, config)?,
    };

    debug!(key_size = params.key_size(), "parsed RSAKeyValue");
    Ok(params)
}

/// Checks `element` is `KeyValue` and returns its `name` child.
pub(crate) fn algorithm_element<'a>(
    element: &'a Element,
    name: &str,
) -> KeyValueResult<&'a Element> {
    expect_element(element, node::KEY_VALUE)?;
    element
        .child(DSIG, name)
        .ok_or_else(|| KeyValueError::MissingRequiredField(name.to_owned()))
}

pub(crate) fn expect_element(element: &Element, name: &str) -> KeyValueResult<()> {
    if element.is(DSIG, name) {
        return Ok(());
    }
    Err(KeyValueError::UnexpectedElement {
        expected: format!("{{{DSIG}}}{name}"),
        found: match element.namespace() {
            Some(ns) => format!("{{{ns}}}{}", element.local_name()),
            None => element.local_name().to_owned(),
        },
    })
}

/// Children of a `DSAKeyValue`, located but not yet decoded.
struct DsaFields<'a> {
    p: Option<&'a Element>,
    q: Option<&'a Element>,
    g: Option<&'a Element>,
    y: Option<&'a Element>,
    j: Option<&'a Element>,
    seed: Option<&'a Element>,
    pgen_counter: Option<&'a Element>,
}

impl<'a> DsaFields<'a> {
    fn locate(element: &'a Element) -> Self {
        Self {
            p: element.child(DSIG, node::DSA_P),
            q: element.child(DSIG, node::DSA_Q),
            g: element.child(DSIG, node::DSA_G),
            y: element.child(DSIG, node::DSA_Y),
            j: element.child(DSIG, node::DSA_J),
            seed: element.child(DSIG, node::DSA_SEED),
            pgen_counter: element.child(DSIG, node::DSA_PGEN_COUNTER),
        }
    }

    fn check_shape(&self) -> KeyValueResult<()> {
        let required = [
            (node::DSA_P, self.p),
            (node::DSA_Q, self.q),
            (node::DSA_G, self.g),
            (node::DSA_Y, self.y),
        ];
        if let Some((name, _)) = required.iter().find(|(_, e)| e.is_none()) {
            return Err(KeyValueError::MissingRequiredField((*name).to_owned()));
        }

        match (self.seed, self.pgen_counter) {
            (Some(_), None) => Err(KeyValueError::InconsistentOptionalPair {
                present: node::DSA_SEED,
                missing: node::DSA_PGEN_COUNTER,
            }),
            (None, Some(_)) => Err(KeyValueError::InconsistentOptionalPair {
                present: node::DSA_PGEN_COUNTER,
                missing: node::DSA_SEED,
            }),
            _ => Ok(()),
        }
    }
}

fn decode_required(
    name: &str,
    element: Option<&Element>,
    config: &CodecConfig,
) -> KeyValueResult<BigUint> {
    let element = element.ok_or_else(|| KeyValueError::MissingRequiredField(name.to_owned()))?;
    decode_child(name, element, config)
}

fn decode_child(name: &str, element: &Element, config: &CodecConfig) -> KeyValueResult<BigUint> {
    decode_base64(name, &element.text(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_dsa(element: Option<&Element>, config: &CodecConfig) -> KeyValueResult<DsaParameters> {
        parse_key_value(element, config)
    }

    fn parse_rsa(element: Option<&Element>, config: &CodecConfig) -> KeyValueResult<RsaParameters> {
        parse_key_value(element, config)
    }

    fn key_value(inner: &str) -> Element {
        Element::parse_str(&format!(
            r#"<KeyValue xmlns="http://www.w3.org/2000/09/xmldsig#"><DSAKeyValue>{inner}</DSAKeyValue></KeyValue>"#
        ))
        .unwrap()
    }

    const PQGY: &str = "<P>Fw==</P><Q>Cw==</Q><G>BA==</G><Y>CA==</Y>";

    #[test]
    fn test_required_only() {
        let params = parse_dsa(Some(&key_value(PQGY)), &CodecConfig::default()).unwrap();
        assert_eq!(params.p, BigUint::from(23u32));
        assert_eq!(params.y, BigUint::from(8u32));
        assert!(params.j.is_none());
        assert!(params.generation.is_none());
    }

    #[test]
    fn test_missing_required_field_is_named() {
        let element = key_value("<P>Fw==</P><Q>Cw==</Q><Y>CA==</Y>");
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert_eq!(err, KeyValueError::MissingRequiredField("G".into()));
    }

    #[test]
    fn test_seed_without_counter() {
        let element = key_value(&format!("{PQGY}<Seed>AQ==</Seed>"));
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert_eq!(
            err,
            KeyValueError::InconsistentOptionalPair {
                present: "Seed",
                missing: "PgenCounter"
            }
        );
    }

    #[test]
    fn test_counter_without_seed() {
        let element = key_value(&format!("{PQGY}<PgenCounter>AQ==</PgenCounter>"));
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            KeyValueError::InconsistentOptionalPair {
                present: "PgenCounter",
                ..
            }
        ));
    }

    #[test]
    fn test_shape_checked_before_decoding() {
        // Bad base64 in P, but the missing pair partner is reported first.
        let element = key_value("<P>!!</P><Q>Cw==</Q><G>BA==</G><Y>CA==</Y><Seed>AQ==</Seed>");
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, KeyValueError::InconsistentOptionalPair { .. }));
    }

    #[test]
    fn test_malformed_field_is_named() {
        let element = key_value("<P>Fw==</P><Q>Cw==</Q><G>BA==</G><Y>not base64!</Y>");
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, KeyValueError::MalformedValue { ref field, .. } if field == "Y"));
    }

    #[test]
    fn test_malformed_optional_fields_are_named() {
        for (inner, name) in [
            (format!("{PQGY}<J>%%</J>"), "J"),
            (format!("{PQGY}<Seed>%%</Seed><PgenCounter>AQ==</PgenCounter>"), "Seed"),
            (format!("{PQGY}<Seed>AQ==</Seed><PgenCounter>%%</PgenCounter>"), "PgenCounter"),
        ] {
            let err = parse_dsa(Some(&key_value(&inner)), &CodecConfig::default()).unwrap_err();
            assert!(
                matches!(err, KeyValueError::MalformedValue { ref field, .. } if field == name),
                "{name}: {err:?}"
            );
        }
    }

    #[test]
    fn test_seed_with_leading_zero_is_kept() {
        let seed = "AAECAwQFBgcICQoLDA0ODxAREhM=";
        let element = key_value(&format!(
            "{PQGY}<Seed>{seed}</Seed><PgenCounter>AQ==</PgenCounter>"
        ));
        let params = parse_dsa(Some(&element), &CodecConfig::default()).unwrap();
        assert_eq!(params.seed().map(<[u8]>::len), Some(20));

        let rebuilt = crate::builder::build_dsa_key_value(&params);
        assert_eq!(rebuilt.child(DSIG, "Seed").unwrap().text(), seed);
    }

    #[test]
    fn test_null_element() {
        let err = parse_dsa(None, &CodecConfig::default()).unwrap_err();
        assert_eq!(err, KeyValueError::InvalidArgument("element"));
    }

    #[test]
    fn test_root_must_be_key_value() {
        let element = Element::parse_str(
            r#"<KeyInfo xmlns="http://www.w3.org/2000/09/xmldsig#"><DSAKeyValue/></KeyInfo>"#,
        )
        .unwrap();
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, KeyValueError::UnexpectedElement { .. }));
    }

    #[test]
    fn test_wrong_namespace_is_not_matched() {
        let element = Element::parse_str(
            r#"<KeyValue xmlns="http://www.w3.org/2000/09/xmldsig#"><DSAKeyValue xmlns="urn:not-dsig"/></KeyValue>"#,
        )
        .unwrap();
        let err = parse_dsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert_eq!(err, KeyValueError::MissingRequiredField("DSAKeyValue".into()));
    }

    #[test]
    fn test_unknown_children_ignored() {
        let element = key_value(&format!("{PQGY}<X>AQ==</X>"));
        assert!(parse_dsa(Some(&element), &CodecConfig::default()).is_ok());
    }

    #[test]
    fn test_rsa() {
        let element = Element::parse_str(
            r#"<ds:KeyValue xmlns:ds="http://www.w3.org/2000/09/xmldsig#"><ds:RSAKeyValue><ds:Modulus>DKE=</ds:Modulus><ds:Exponent>AQAB</ds:Exponent></ds:RSAKeyValue></ds:KeyValue>"#,
        )
        .unwrap();
        let params = parse_rsa(Some(&element), &CodecConfig::default()).unwrap();
        assert_eq!(params.modulus, BigUint::from(3233u32));
        assert_eq!(params.exponent, BigUint::from(65537u32));
    }

    #[test]
    fn test_rsa_missing_exponent() {
        let element = Element::parse_str(
            r#"<KeyValue xmlns="http://www.w3.org/2000/09/xmldsig#"><RSAKeyValue><Modulus>DKE=</Modulus></RSAKeyValue></KeyValue>"#,
        )
        .unwrap();
        let err = parse_rsa(Some(&element), &CodecConfig::default()).unwrap_err();
        assert_eq!(err, KeyValueError::MissingRequiredField("Exponent".into()));
    }
}
