pub use fetch::*;
pub use legend::*;
pub use list::*;
pub use map::*;

mod fetch;
mod legend;
mod list;
mod map;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use eyre::Result;
use tracing::info;

/// Write `data` into `output` or on `stdout`.
///
pub(crate) fn write_output(output: Option<&Path>, data: &str) -> Result<()> {
    match output {
        Some(fname) => {
            info!("Writing into {:?}", fname);
            fs::write(fname, data)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
