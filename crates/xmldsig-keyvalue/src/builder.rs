//! Parameter set → element tree.

use num_bigint::BigUint;
use tracing::debug;

use crate::bigint::{encode_base64, encode_bytes};
use crate::ns::node;
use crate::params::{DsaParameters, RsaParameters};
use crate::xml::Element;

/// Builds `DSAKeyValue` with children in schema order:
/// `P, Q, G, Y, J?, (Seed, PgenCounter)?`.
pub fn build_dsa_key_value(params: &DsaParameters) -> Element {
    let mut element = Element::dsig(node::DSA_KEY_VALUE);

    push_value(&mut element, node::DSA_P, &params.p);
    push_value(&mut element, node::DSA_Q, &params.q);
    push_value(&mut element, node::DSA_G, &params.g);
    push_value(&mut element, node::DSA_Y, &params.y);
    if let Some(j) = &params.j {
        push_value(&mut element, node::DSA_J, j);
    }
    if let Some(generation) = &params.generation {
        push_text(&mut element, node::DSA_SEED, encode_bytes(&generation.seed));
        push_value(&mut element, node::DSA_PGEN_COUNTER, &generation.pgen_counter);
    }

    debug!(
        children = element.child_elements().count(),
        "built DSAKeyValue"
    );
    element
}

pub fn build_rsa_key_value(params: &RsaParameters) -> Element {
    let mut element = Element::dsig(node::RSA_KEY_VALUE);
    push_value(&mut element, node::RSA_MODULUS, &params.modulus);
    push_value(&mut element, node::RSA_EXPONENT, &params.exponent);

    debug!(key_size = params.key_size(), "built RSAKeyValue");
    element
}

/// Wraps an algorithm element in its `KeyValue` parent.
pub fn wrap_key_value(algorithm: Element) -> Element {
    Element::dsig(node::KEY_VALUE).with_child(algorithm)
}

fn push_value(parent: &mut Element, name: &str, value: &BigUint) {
    push_text(parent, name, encode_base64(value));
}

fn push_text(parent: &mut Element, name: &str, text: String) {
    parent.push_child(Element::dsig(name).with_text(text));
}
