//! Command implementations

pub mod completions;
pub mod find;
pub mod header;
pub mod packages;
pub mod units;

use gsflow::ops::LoadOptions;

use crate::cli::{AnchorArgs, GlobalOptions};

/// Build load options from anchor flags.
fn load_options(anchor: AnchorArgs, global: &GlobalOptions) -> LoadOptions {
    LoadOptions {
        workspace: anchor.workspace,
        control_file: anchor.control_file,
        verbose: global.quiet.then_some(false),
        global_config: None,
    }
}
