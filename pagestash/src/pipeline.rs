use colored::Colorize;
use pagestash_fetcher::{FetchError, Fetcher, PageResult, extract, resolve, store};
use std::path::Path;
use tracing::{debug, warn};

/// Process outcome, mapped to an integer only at the process boundary.
/// Ordered so that folding with `worst` keeps the highest-coded outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExitStatus {
    Normal,
    Usage,
    Other,
    DirCreate,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Normal => 0,
            ExitStatus::Usage => 1,
            ExitStatus::Other => 2,
            ExitStatus::DirCreate => 3,
        }
    }

    /// Fold two outcomes, keeping the worse one.
    pub fn worst(self, other: ExitStatus) -> ExitStatus {
        self.max(other)
    }

    /// Status an address-level failure maps to. Directory-creation
    /// failures get their dedicated code; everything else is the generic
    /// error status.
    pub fn for_error(err: &FetchError) -> ExitStatus {
        match err {
            FetchError::DirCreate { .. } => ExitStatus::DirCreate,
            _ => ExitStatus::Other,
        }
    }
}

/// Run the capture pipeline for one command-line address: create the
/// target directory, fetch the root resource, scan it for `src="`
/// references, and fetch each reference into the same directory.
///
/// A failure before the asset loop aborts the whole address. Inside the
/// loop each asset is an independent try: the failure is reported and
/// recorded, and the remaining assets are still attempted.
pub async fn process_address(
    fetcher: &Fetcher,
    parent: &Path,
    address: &str,
) -> Result<PageResult, FetchError> {
    let dir = store::create_target_dir(parent, address)?;
    let body = fetcher.fetch_root(&dir, address).await?;
    let references = extract::source_urls(&body);
    debug!("Found {} references in {}", references.len(), address);

    let root_file = resolve::local_filename(address)?.to_string();
    let mut result = PageResult::new(address.to_string(), dir.clone(), root_file);
    result.references_found = references.len();

    for reference in &references {
        match fetcher.fetch_asset(&dir, reference, address).await {
            Ok(()) => result.assets_saved += 1,
            Err(e) => {
                warn!("Asset fetch failed for {}: {}", reference, e);
                eprintln!("{} {}: {}", "warning:".yellow().bold(), reference, e);
                result.errors.push(format!("{}: {}", reference, e));
            }
        }
    }

    Ok(result)
}
