//! Hand-off of a fully validated record

use anyhow::{Context, Result};

use super::types::Record;

/// Receives the record once the whole document has passed validation
///
/// An `Err` keeps the wizard on the last content step with the record
/// intact so the user can retry.
pub trait Submitter {
    fn submit(&mut self, record: &Record) -> Result<()>;
}

/// Writes the submitted record to the log as JSON
#[derive(Debug, Default, Clone)]
pub struct LogSubmitter {
    pub pretty: bool,
}

impl LogSubmitter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Submitter for LogSubmitter {
    fn submit(&mut self, record: &Record) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        }
        .context("Failed to serialize submitted record")?;

        log::info!("Record submitted: {}", json);
        Ok(())
    }
}

impl<F> Submitter for F
where
    F: FnMut(&Record) -> Result<()>,
{
    fn submit(&mut self, record: &Record) -> Result<()> {
        self(record)
    }
}
