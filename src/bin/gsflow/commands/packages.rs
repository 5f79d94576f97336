//! `gsflow packages` command

use anyhow::{Context, Result};

use crate::cli::PackagesArgs;
use gsflow::ops::list_packages;
use gsflow::util::config::global_config_path;

pub fn execute(args: PackagesArgs) -> Result<()> {
    let global = global_config_path();
    let packages = list_packages(&args.workspace, global.as_deref());

    if args.json {
        let json =
            serde_json::to_string_pretty(&packages).context("failed to serialize packages")?;
        println!("{}", json);
        return Ok(());
    }

    let width = packages.iter().map(|p| p.name.len()).max().unwrap_or(0).max(7);
    println!("{:<width$}  {:>5}  DESCRIPTION", "PACKAGE", "UNIT", width = width);
    for pkg in &packages {
        println!(
            "{:<width$}  {:>5}  {}",
            pkg.name.to_uppercase(),
            pkg.reserved_unit,
            pkg.description,
            width = width
        );
    }

    Ok(())
}
