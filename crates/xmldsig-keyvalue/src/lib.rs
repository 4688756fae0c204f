//! xmldsig-keyvalue: XML Signature `KeyValue` codec
//!
//! Converts public-key parameters to and from the `KeyValue` subtree of an
//! XML-DSig `KeyInfo`:
//!
//! ```text
//! <KeyValue xmlns="http://www.w3.org/2000/09/xmldsig#">
//!   <DSAKeyValue>
//!     <P/><Q/><G/><Y/> <J/>? (<Seed/><PgenCounter/>)?
//!   </DSAKeyValue>
//! </KeyValue>
//! ```
//!
//! Integers travel as CryptoBinary: minimal big-endian bytes in base64.
//! Output is always minimal and input may be zero-padded, so
//! parse → build reproduces the original text for any well-formed signer.
//!
//! ## Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use xmldsig_keyvalue::{DsaKeyValue, DsaParameters, Element};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = DsaParameters::new(
//!     BigUint::from(23u32),
//!     BigUint::from(11u32),
//!     BigUint::from(4u32),
//!     BigUint::from(8u32),
//! );
//! let xml = DsaKeyValue::from_key(params.clone()).get_xml()?.to_xml_string()?;
//!
//! let mut loaded = DsaKeyValue::new();
//! loaded.load_xml(&Element::parse_str(&xml)?)?;
//! assert_eq!(loaded.key(), Some(&params));
//! # Ok(())
//! # }
//! ```

pub mod bigint;
pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod keyinfo;
pub mod keyvalue;
pub mod ns;
pub mod params;
pub mod parser;
pub mod xml;

pub use config::CodecConfig;
pub use error::{KeyValueError, KeyValueResult};
pub use format::KeyValueFormat;
pub use keyinfo::{KeyInfo, KeyInfoClause};
pub use keyvalue::{DsaKeyValue, KeyValue, RsaKeyValue, TypedKeyValue};
pub use params::{DsaGeneration, DsaParameters, RsaParameters};
pub use xml::{Element, Node};
