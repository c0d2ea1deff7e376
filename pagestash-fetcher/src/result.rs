use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of one processed command-line address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub address: String,
    pub dir: PathBuf,
    pub root_file: String,
    pub references_found: usize,
    pub assets_saved: usize,
    pub errors: Vec<String>,
}

impl PageResult {
    pub fn new(address: String, dir: PathBuf, root_file: String) -> Self {
        Self {
            address,
            dir,
            root_file,
            references_found: 0,
            assets_saved: 0,
            errors: Vec::new(),
        }
    }

    /// True when every discovered reference was fetched cleanly.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// One-line human summary for progress output.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} ({} of {} assets)",
            self.address,
            self.dir.display(),
            self.assets_saved,
            self.references_found
        )
    }
}
