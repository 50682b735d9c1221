use crate::ports::CatalogStore;
use std::io::{BufRead, Write};

use super::error::Result;
use super::menu::Menu;

/// One run of the catalog manager
///
/// Loads the catalog from `store`, runs the menu until the user exits or input
/// ends, then saves the catalog back. The save is attempted even if the menu
/// stopped on a terminal error, so edits made so far are not lost.
pub fn run_session<S, R, W>(store: &S, input: R, mut output: W) -> Result<()>
where
    S: CatalogStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut catalog = store.load();
    tracing::info!(count = catalog.len(), "Session started");

    let outcome = Menu::new(input, &mut output).run(&mut catalog);

    if let Err(e) = store.save(&catalog) {
        tracing::error!(error = %e, "Catalog could not be saved");
        return Err(e.into());
    }
    outcome?;

    writeln!(output, "Data saved")?;
    Ok(())
}
