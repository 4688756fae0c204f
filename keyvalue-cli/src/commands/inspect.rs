use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use num_bigint::BigUint;
use serde::Serialize;
use xmldsig_keyvalue::bigint::{encode_base64, encode_bytes, to_crypto_binary};
use xmldsig_keyvalue::{KeyValue, KeyValueError};

use super::{Context, KeyParameters, key_value_elements, read_document};
use crate::output::{print_encoded, print_heading, print_info, print_json, print_number};

#[derive(Args)]
pub struct InspectArgs {
    /// KeyValue or KeyInfo XML file
    pub file: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Entry {
    Key(KeyParameters),
    Unsupported { unsupported: String },
}

pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let root = read_document(&args.file)?;

    let mut entries = Vec::new();
    for element in key_value_elements(&root)? {
        match KeyValue::from_xml(element, &ctx.codec) {
            Ok(kv) => {
                if let Some(params) = KeyParameters::from_key_value(&kv) {
                    entries.push(Entry::Key(params));
                }
            }
            Err(KeyValueError::UnsupportedKeyValue(names)) => {
                entries.push(Entry::Unsupported { unsupported: names })
            }
            Err(e) => return Err(e).with_context(|| format!("Invalid KeyValue in {}", args.file)),
        }
    }

    if ctx.json_output {
        return print_json(&entries);
    }

    if entries.is_empty() {
        print_info(format!("No KeyValue elements in {}", args.file));
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            println!();
        }
        match entry {
            Entry::Key(KeyParameters::Dsa(p)) => {
                print_heading("DSAKeyValue", None);
                print_value("P", &p.p, ctx.verbose);
                print_value("Q", &p.q, ctx.verbose);
                print_value("G", &p.g, ctx.verbose);
                print_value("Y", &p.y, ctx.verbose);
                if let Some(j) = &p.j {
                    print_value("J", j, ctx.verbose);
                }
                if let Some(generation) = &p.generation {
                    let seed = &generation.seed;
                    print_encoded("Seed", seed.len(), &encode_bytes(seed), ctx.verbose);
                    print_number("PgenCounter", &generation.pgen_counter);
                }
            }
            Entry::Key(KeyParameters::Rsa(p)) => {
                print_heading("RSAKeyValue", Some(format!("{} bit", p.modulus.bits())));
                print_value("Modulus", &p.modulus, ctx.verbose);
                print_number("Exponent", &p.exponent);
            }
            Entry::Unsupported { unsupported } => {
                println!("{} {unsupported}", "Unsupported KeyValue:".yellow());
            }
        }
    }

    Ok(())
}

fn print_value(name: &str, value: &BigUint, verbose: bool) {
    let len = to_crypto_binary(value).len();
    print_encoded(name, len, &encode_base64(value), verbose);
}
