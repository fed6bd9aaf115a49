//! Input file locations for a pipeline run.
//!
//! Paths come either from a results directory laid out the way the assembly
//! workflow writes it, or from a JSON manifest:
//!
//! ```json
//! {
//!   "myloasm": {
//!     "headers": "myloasm_assembly_headers.txt",
//!     "checkm2": "checkm2/myloasm/quality_report.tsv",
//!     "gtdbtk_bacterial": "gtdbtk/myloasm/classify/gtdbtk.bac120.summary.tsv",
//!     "gtdbtk_archaeal": "gtdbtk/myloasm/classify/gtdbtk.ar53.summary.tsv"
//!   },
//!   "metamdbg": { ... }
//! }
//! ```
//!
//! Relative manifest paths are resolved against the manifest's own directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::Assembler;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The four files produced for one assembly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblerInputs {
    /// Header lines of the assembly FASTA
    pub headers: PathBuf,
    /// CheckM2 quality report
    pub checkm2: PathBuf,
    /// GTDB-Tk bacterial summary (bac120)
    pub gtdbtk_bacterial: PathBuf,
    /// GTDB-Tk archaeal summary (ar53)
    pub gtdbtk_archaeal: PathBuf,
}

impl AssemblerInputs {
    /// Conventional layout under a results directory
    #[must_use]
    pub fn in_results_dir(dir: &Path, assembler: Assembler) -> Self {
        let name = assembler.dir_name();
        let classify = dir.join("gtdbtk").join(name).join("classify");
        Self {
            headers: dir.join(format!("{name}_assembly_headers.txt")),
            checkm2: dir.join("checkm2").join(name).join("quality_report.tsv"),
            gtdbtk_bacterial: classify.join("gtdbtk.bac120.summary.tsv"),
            gtdbtk_archaeal: classify.join("gtdbtk.ar53.summary.tsv"),
        }
    }

    fn resolve_against(&mut self, base: &Path) {
        for path in [
            &mut self.headers,
            &mut self.checkm2,
            &mut self.gtdbtk_bacterial,
            &mut self.gtdbtk_archaeal,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Every input of a run, one set per assembler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaths {
    pub myloasm: AssemblerInputs,
    pub metamdbg: AssemblerInputs,
}

impl InputPaths {
    /// Inputs under a results directory with the conventional layout
    #[must_use]
    pub fn from_results_dir(dir: &Path) -> Self {
        Self {
            myloasm: AssemblerInputs::in_results_dir(dir, Assembler::Myloasm),
            metamdbg: AssemblerInputs::in_results_dir(dir, Assembler::MetaMdbg),
        }
    }

    /// Load a JSON manifest file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read or
    /// `ConfigError::Parse` if it is not a valid manifest.
    pub fn load_manifest(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut paths = Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        paths.myloasm.resolve_against(base);
        paths.metamdbg.resolve_against(base);
        Ok(paths)
    }

    /// Parse a manifest from a JSON string, leaving relative paths untouched
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed or incomplete manifests.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Inputs for one assembler
    #[must_use]
    pub fn get(&self, assembler: Assembler) -> &AssemblerInputs {
        match assembler {
            Assembler::Myloasm => &self.myloasm,
            Assembler::MetaMdbg => &self.metamdbg,
        }
    }
}
