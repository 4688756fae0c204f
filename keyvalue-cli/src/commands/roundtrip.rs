use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use xmldsig_keyvalue::ns::DSIG;
use xmldsig_keyvalue::{Element, KeyValue, KeyValueError};

use super::{Context, key_value_elements, read_document};
use crate::output::{print_error, print_info, print_json, print_success};

#[derive(Args)]
pub struct RoundtripArgs {
    /// KeyValue or KeyInfo XML file
    pub file: String,
}

#[derive(Serialize)]
struct FieldReport {
    name: String,
    identical: bool,
    original: String,
    rebuilt: String,
}

#[derive(Serialize)]
struct KeyReport {
    algorithm: String,
    fields: Vec<FieldReport>,
}

impl KeyReport {
    fn identical(&self) -> bool {
        self.fields.iter().all(|f| f.identical)
    }
}

pub fn run(args: RoundtripArgs, ctx: &Context) -> Result<()> {
    let root = read_document(&args.file)?;

    let mut reports = Vec::new();
    for element in key_value_elements(&root)? {
        let kv = match KeyValue::from_xml(element, &ctx.codec) {
            Ok(kv) => kv,
            Err(KeyValueError::UnsupportedKeyValue(names)) => {
                if !ctx.json_output {
                    print_info(format!("Skipping unsupported KeyValue ({names})"));
                }
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("Invalid KeyValue in {}", args.file)),
        };
        reports.push(compare(element, &kv.get_xml()?, kv.algorithm()));
    }

    let identical = reports.iter().all(KeyReport::identical);

    if ctx.json_output {
        print_json(&reports)?;
    } else {
        for report in &reports {
            println!("{}", report.algorithm.bold());
            for field in &report.fields {
                let mark = if field.identical {
                    "✓".green()
                } else {
                    "✗".red()
                };
                println!("  {mark} {}", field.name);
                if !field.identical || ctx.verbose {
                    println!("      {} {}", "original:".dimmed(), field.original);
                    println!("      {} {}", "rebuilt: ".dimmed(), field.rebuilt);
                }
            }
        }
        if identical {
            print_success(format!("{} round-trips byte-identically", args.file));
        } else {
            print_error(format!("{} does not round-trip", args.file));
        }
    }

    if !identical {
        anyhow::bail!("Round trip changed field text in {}", args.file);
    }
    Ok(())
}

/// Compares each field of the rebuilt algorithm element with the original's
/// text, ignoring whitespace in the original.
fn compare(original: &Element, rebuilt: &Element, algorithm: &str) -> KeyReport {
    let fields = match (
        original.child(DSIG, algorithm),
        rebuilt.child(DSIG, algorithm),
    ) {
        (Some(original), Some(rebuilt)) => rebuilt
            .child_elements()
            .map(|field| {
                let name = field.local_name();
                let text: String = original
                    .child(DSIG, name)
                    .map(|e| e.text())
                    .unwrap_or_default()
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let rebuilt = field.text();
                FieldReport {
                    name: name.to_owned(),
                    identical: text == rebuilt,
                    original: text,
                    rebuilt,
                }
            })
            .collect(),
        _ => Vec::new(),
    };

    KeyReport {
        algorithm: algorithm.to_owned(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmldsig_keyvalue::CodecConfig;

    fn report(xml: &str) -> KeyReport {
        let element = Element::parse_str(xml).unwrap();
        let kv = KeyValue::from_xml(&element, &CodecConfig::default()).unwrap();
        compare(&element, &kv.get_xml().unwrap(), kv.algorithm())
    }

    #[test]
    fn test_minimal_input_is_identical() {
        let report = report(&format!(
            r#"<KeyValue xmlns="{DSIG}"><RSAKeyValue><Modulus>DKE=</Modulus><Exponent>AQAB</Exponent></RSAKeyValue></KeyValue>"#
        ));
        assert_eq!(report.fields.len(), 2);
        assert!(report.identical());
    }

    #[test]
    fn test_padded_input_is_reported() {
        let report = report(&format!(
            r#"<KeyValue xmlns="{DSIG}"><RSAKeyValue><Modulus>AAyh</Modulus><Exponent>AQAB</Exponent></RSAKeyValue></KeyValue>"#
        ));
        assert!(!report.identical());
        let modulus = &report.fields[0];
        assert_eq!(modulus.original, "AAyh");
        assert_eq!(modulus.rebuilt, "DKE=");
    }
}
