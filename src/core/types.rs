use serde::{Deserialize, Serialize};

/// Assembler that produced a contig and its header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Assembler {
    /// myloasm: `>{id}_len-{n}_circular-{yes|no|possible}_depth-{x}`
    #[serde(rename = "myloasm")]
    Myloasm,
    /// metaMDBG: `>{id} length={n} coverage={x} circular={yes|no}`
    #[serde(rename = "metaMDBG")]
    MetaMdbg,
}

impl Assembler {
    /// All assemblers in aggregation order
    pub const ALL: [Assembler; 2] = [Assembler::Myloasm, Assembler::MetaMdbg];

    /// Directory name used for this assembler in a results tree
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Myloasm => "myloasm",
            Self::MetaMdbg => "metamdbg",
        }
    }
}

impl std::fmt::Display for Assembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Myloasm => write!(f, "myloasm"),
            Self::MetaMdbg => write!(f, "metaMDBG"),
        }
    }
}

/// Genome quality tier derived from completeness and contamination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityCategory {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}
