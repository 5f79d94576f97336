//! `gsflow units` command

use anyhow::{Context, Result};

use crate::cli::{GlobalOptions, UnitsArgs};
use gsflow::ops::{format_units, load_units, summarize};

pub fn execute(args: UnitsArgs, global: &GlobalOptions) -> Result<()> {
    let opts = super::load_options(args.anchor, global);
    let registry = load_units(&args.name_file, &opts)?;
    let units = summarize(&registry);

    if args.json {
        let json = serde_json::to_string_pretty(&units).context("failed to serialize units")?;
        println!("{}", json);
    } else {
        print!("{}", format_units(&units));
    }

    Ok(())
}
