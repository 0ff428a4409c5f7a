//! Revealers: hand the chosen folder back to the user

use super::error::{Result, UiError};
use super::traits::Revealer;
use super::types::RevealMode;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Prints the folder path on stdout
///
/// Intended for shell integration, e.g. `cd "$(goto-folder)"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintRevealer;

impl Revealer for PrintRevealer {
    fn reveal(&self, location: &Path) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", location.display())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Opens the folder in the system file manager
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenRevealer;

impl Revealer for OpenRevealer {
    fn reveal(&self, location: &Path) -> Result<()> {
        info!("Opening {} in file manager", location.display());
        open::that(location).map_err(|e| UiError::RevealError {
            path: location.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Build the revealer for a configured mode
#[must_use]
pub fn revealer_for(mode: RevealMode) -> Box<dyn Revealer> {
    match mode {
        RevealMode::Print => Box::new(PrintRevealer),
        RevealMode::Open => Box::new(OpenRevealer),
    }
}
