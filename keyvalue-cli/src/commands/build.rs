use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::fs;
use tracing::debug;
use xmldsig_keyvalue::{KeyInfo, KeyValue};

use super::{Context, KeyParameters};
use crate::output::{print_json, print_success};

#[derive(Args)]
pub struct BuildArgs {
    /// JSON parameters: {"algorithm": "dsa" | "rsa", ...base64 fields}
    pub params: String,
    /// Output file (stdout if omitted)
    #[arg(long)]
    pub output: Option<String>,
    /// Wrap the KeyValue in a KeyInfo element
    #[arg(long)]
    pub key_info: bool,
}

pub fn run(args: BuildArgs, ctx: &Context) -> Result<()> {
    let json = fs::read_to_string(&args.params)
        .with_context(|| format!("Failed to read {}", args.params))?;
    let params: KeyParameters = serde_json::from_str(&json)
        .with_context(|| format!("Invalid key parameters in {}", args.params))?;

    let kv = KeyValue::from(params);
    let algorithm = kv.algorithm();
    let element = if args.key_info {
        let mut info = KeyInfo::new();
        info.add_clause(kv.into());
        info.get_xml()?
    } else {
        kv.get_xml()?
    };
    let xml = element.to_xml_string()?;
    debug!(algorithm, len = xml.len(), "built KeyValue XML");

    let Some(output_path) = args.output else {
        println!("{xml}");
        return Ok(());
    };

    fs::write(&output_path, &xml).with_context(|| format!("Failed to write {output_path}"))?;

    if ctx.json_output {
        #[derive(Serialize)]
        struct Output {
            input: String,
            output: String,
            algorithm: &'static str,
        }
        print_json(&Output {
            input: args.params,
            output: output_path,
            algorithm,
        })?;
    } else {
        print_success(format!(
            "Built {algorithm} {} → {output_path}",
            args.params
        ));
    }

    Ok(())
}
