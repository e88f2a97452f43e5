//! Version command implementation

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub fn execute(output: &Output) -> Result<()> {
    output.header(&format!("{} v{}", crate::PKG_NAME, crate::VERSION));

    output.category("About");
    output.key_value("Description:", crate::PKG_DESCRIPTION, false);
    output.key_value("Repository:", env!("CARGO_PKG_REPOSITORY"), false);
    output.key_value("Runtime package:", crate::generator::RUNTIME_PACKAGE, true);

    output.category("Build Information");
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );
    output.blank_line();

    Ok(())
}
