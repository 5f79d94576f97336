//! `gsflow find` command

use anyhow::{bail, Result};

use crate::cli::{FindArgs, GlobalOptions};
use gsflow::ops::{find_units, load_units};

pub fn execute(args: FindArgs, global: &GlobalOptions) -> Result<()> {
    let opts = super::load_options(args.anchor, global);
    let registry = load_units(&args.name_file, &opts)?;

    let mut missing = Vec::new();
    for (filetype, key) in find_units(&registry, &args.filetypes) {
        match key {
            Some(key) => println!("{} {}", filetype.to_uppercase(), key),
            None => missing.push(filetype),
        }
    }

    if !missing.is_empty() {
        bail!(
            "name file does not contain file of type {}",
            missing.join(", ")
        );
    }

    Ok(())
}
