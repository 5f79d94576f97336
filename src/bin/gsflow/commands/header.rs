//! `gsflow header` command

use anyhow::{Context, Result};

use crate::cli::HeaderArgs;
use gsflow::ops::load_header;

pub fn execute(args: HeaderArgs) -> Result<()> {
    let header = load_header(&args.name_file)?;

    if args.json {
        let json = serde_json::to_string_pretty(header.attributes())
            .context("failed to serialize header")?;
        println!("{}", json);
        return Ok(());
    }

    if header.is_empty() {
        tracing::info!("no header attributes in {}", args.name_file.display());
    }
    for (key, value) in header.attributes() {
        println!("{} = {}", key, value);
    }

    Ok(())
}
