// ============================================================
// Layer 4 — Corpus Loader
// ============================================================
// Loads labelled samples from a tab-separated corpus file.
//
// File format, one sample per line:
//
//   <label><TAB><text>
//
//   1	great product would buy again
//   0	terrible quality broke after one day
//
// Blank lines and lines starting with '#' are skipped so a
// corpus file can carry comments. A line that is present but
// MALFORMED (no tab, non-numeric label) aborts the load with
// an error naming the offending line — a corrupt sample that
// slipped through silently would poison training and be
// near-impossible to trace back.
//
// Implements the CorpusSource trait from Layer 3, so the
// application layer never sees the file format.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading Files)

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::domain::sample::Sample;
use crate::domain::traits::CorpusSource;

/// Loads all samples from a single tab-separated corpus file.
pub struct TsvCorpusLoader {
    /// Path to the corpus file
    path: PathBuf,
}

impl TsvCorpusLoader {
    /// Create a new loader pointed at a corpus file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for TsvCorpusLoader {
    fn load_all(&self) -> Result<Vec<Sample>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read corpus file '{}'", self.path.display()))?;

        let mut samples = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip blank lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            samples.push(parse_line(line).with_context(|| {
                format!(
                    "Malformed sample at line {} of '{}'",
                    line_no + 1,
                    self.path.display()
                )
            })?);
        }

        tracing::info!(
            "Loaded {} samples from '{}'",
            samples.len(),
            self.path.display()
        );
        Ok(samples)
    }
}

/// Parse one `<label><TAB><text>` line into a Sample.
fn parse_line(line: &str) -> Result<Sample> {
    let Some((label_part, text_part)) = line.split_once('\t') else {
        bail!("expected '<label><TAB><text>', found no tab separator");
    };

    let label: usize = label_part
        .trim()
        .parse()
        .with_context(|| format!("label '{}' is not a non-negative integer", label_part.trim()))?;

    let text = text_part.trim();
    if text.is_empty() {
        bail!("sample text is empty");
    }

    Ok(Sample::new(text, label))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{content}").unwrap();
        f
    }

    #[test]
    fn test_loads_samples_in_file_order() {
        let f = write_corpus("1\tgreat stuff\n0\tawful stuff\n");
        let samples = TsvCorpusLoader::new(f.path()).load_all().unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].text, "great stuff");
        assert_eq!(samples[0].label, 1);
        assert_eq!(samples[1].label, 0);
    }

    #[test]
    fn test_skips_blank_lines_and_comments() {
        let f = write_corpus("# sentiment corpus\n\n1\tgood\n\n# more below\n0\tbad\n");
        let samples = TsvCorpusLoader::new(f.path()).load_all().unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_missing_tab_aborts_with_line_number() {
        let f = write_corpus("1\tgood\nno tab here\n");
        let err = TsvCorpusLoader::new(f.path()).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_non_numeric_label_aborts() {
        let f = write_corpus("positive\tgood\n");
        assert!(TsvCorpusLoader::new(f.path()).load_all().is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(TsvCorpusLoader::new("no/such/corpus.tsv").load_all().is_err());
    }
}
