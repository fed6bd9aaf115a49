//! Extractors for assembler FASTA header lines.
//!
//! Each assembler encodes contig length, depth and circularity in its own way:
//!
//! | Assembler | Example header |
//! |-----------|----------------|
//! | myloasm   | `>u1_len-2345678_circular-possible_depth-35.2` |
//! | metaMDBG  | `>ctg12 length=812345 coverage=17 circular=yes` |
//!
//! myloasm fields appear in a fixed order joined by literal tags; a line that does
//! not have exactly that shape yields a row with every field missing. metaMDBG
//! fields are independent `key=value` tags (separator `=`, `_` or `:`) found
//! anywhere after the identifier.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::core::record::HeaderRecord;
use crate::core::types::Assembler;
use crate::parsing::{read_text, ParseError};
use crate::utils::validation::{parse_length, parse_measure};

static MYLOASM_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^>(?P<contig_id>.+?)_len-(?P<length>\d+)_circular-(?P<circular>\w+)_depth-(?P<coverage>[\d.]+)",
    )
    .expect("myloasm header pattern is valid")
});

static METAMDBG_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>(\S+)").expect("metaMDBG id pattern is valid"));

static METAMDBG_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"length[=_:](\d+)").expect("metaMDBG length pattern is valid"));

static METAMDBG_COVERAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"coverage[=_:]([\d.]+)").expect("metaMDBG coverage pattern is valid")
});

static METAMDBG_CIRCULAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"circular[=_:](\w+)").expect("metaMDBG circular pattern is valid")
});

/// Turns assembler header lines into [`HeaderRecord`]s.
pub trait HeaderExtractor {
    /// The assembler stamped on every extracted record
    fn assembler(&self) -> Assembler;

    /// Extract fields from one trimmed header line (including the leading `>`).
    ///
    /// Never fails: fields that cannot be found or parsed are `None`.
    fn extract_line(&self, line: &str) -> HeaderRecord;

    /// Extract every header line in `text`. Lines not starting with `>` are ignored.
    fn extract_text(&self, text: &str) -> Vec<HeaderRecord> {
        text.lines()
            .filter(|line| line.starts_with('>'))
            .map(|line| self.extract_line(line.trim()))
            .collect()
    }

    /// Read a header file and extract every header line.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be read.
    fn extract_file(&self, path: &Path) -> Result<Vec<HeaderRecord>, ParseError> {
        let text = read_text(path)?;
        let records = self.extract_text(&text);

        let unparsed = records.iter().filter(|r| r.contig_id.is_none()).count();
        if unparsed > 0 {
            warn!(
                "{unparsed} of {} {} header lines in {} did not match the expected format",
                records.len(),
                self.assembler(),
                path.display()
            );
        }
        debug!(
            "Extracted {} {} headers from {}",
            records.len(),
            self.assembler(),
            path.display()
        );

        Ok(records)
    }
}

/// Extractor for myloasm headers
#[derive(Debug, Clone, Copy, Default)]
pub struct MyloasmHeaders;

impl HeaderExtractor for MyloasmHeaders {
    fn assembler(&self) -> Assembler {
        Assembler::Myloasm
    }

    fn extract_line(&self, line: &str) -> HeaderRecord {
        let Some(caps) = MYLOASM_HEADER.captures(line) else {
            return HeaderRecord::unparsed(Assembler::Myloasm);
        };

        HeaderRecord {
            contig_id: Some(caps["contig_id"].to_string()),
            assembler: Assembler::Myloasm,
            length: parse_length(&caps["length"]),
            coverage: parse_measure(&caps["coverage"]),
            is_circular: matches!(&caps["circular"], "yes" | "possible"),
        }
    }
}

/// Extractor for metaMDBG headers
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaMdbgHeaders;

impl HeaderExtractor for MetaMdbgHeaders {
    fn assembler(&self) -> Assembler {
        Assembler::MetaMdbg
    }

    fn extract_line(&self, line: &str) -> HeaderRecord {
        HeaderRecord {
            contig_id: first_group(&METAMDBG_ID, line).map(str::to_string),
            assembler: Assembler::MetaMdbg,
            length: first_group(&METAMDBG_LENGTH, line).and_then(parse_length),
            coverage: first_group(&METAMDBG_COVERAGE, line).and_then(parse_measure),
            is_circular: first_group(&METAMDBG_CIRCULAR, line)
                .is_some_and(|s| s.eq_ignore_ascii_case("yes")),
        }
    }
}

fn first_group<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The extractor for an assembler's header format
#[must_use]
pub fn extractor_for(assembler: Assembler) -> &'static dyn HeaderExtractor {
    match assembler {
        Assembler::Myloasm => &MyloasmHeaders,
        Assembler::MetaMdbg => &MetaMdbgHeaders,
    }
}
