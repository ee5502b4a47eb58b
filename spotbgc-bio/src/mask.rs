//! Hard masking of soft-masked FASTA files.
//!
//! Soft-masked regions are written in lowercase; hard masking replaces
//! every lowercase ASCII letter on a sequence line with the mask character.
//! Header lines and line terminators pass through byte-for-byte.

use crate::formats::{create_output, ensure_distinct_output, open_input};
use spotbgc_core::config::MaskConfig;
use spotbgc_core::{derive_output_path, SpotError, SpotResult};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOptions {
    mask_byte: u8,
    pub output_suffix: String,
}

impl MaskOptions {
    /// Fails with [`SpotError::Configuration`] unless `mask_char` is ASCII
    pub fn new(mask_char: char, output_suffix: impl Into<String>) -> SpotResult<Self> {
        if !mask_char.is_ascii() || mask_char.is_ascii_control() {
            return Err(SpotError::Configuration(format!(
                "mask character must be a printable ASCII character, got {:?}",
                mask_char
            )));
        }
        Ok(Self {
            mask_byte: mask_char as u8,
            output_suffix: output_suffix.into(),
        })
    }

    pub fn mask_char(&self) -> char {
        self.mask_byte as char
    }
}

impl TryFrom<&MaskConfig> for MaskOptions {
    type Error = SpotError;

    fn try_from(config: &MaskConfig) -> SpotResult<Self> {
        Self::new(config.mask_char, config.output_suffix.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskSummary {
    pub header_lines: usize,
    pub sequence_lines: usize,
    pub bases_masked: usize,
    pub output: Option<PathBuf>,
}

/// Copy `reader` to `writer`, masking lowercase letters outside header lines
pub fn hard_mask<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    mask_byte: u8,
) -> std::io::Result<MaskSummary> {
    let mut summary = MaskSummary::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if line.first() == Some(&b'>') {
            summary.header_lines += 1;
        } else {
            summary.sequence_lines += 1;
            for byte in line.iter_mut().filter(|b| b.is_ascii_lowercase()) {
                *byte = mask_byte;
                summary.bases_masked += 1;
            }
        }

        writer.write_all(&line)?;
    }

    Ok(summary)
}

/// Hard-mask `input` into `<stem><suffix>` inside `output_dir` (default: current directory)
pub fn hard_mask_file(
    input: &Path,
    output_dir: Option<&Path>,
    options: &MaskOptions,
) -> SpotResult<MaskSummary> {
    let reader = open_input(input)?;
    let output = derive_output_path(input, &options.output_suffix, output_dir)?;
    ensure_distinct_output(&output, &[input])?;

    let mut writer = create_output(&output)?;
    let mut summary = hard_mask(reader, &mut writer, options.mask_byte)?;
    writer.flush()?;

    info!(
        "Masked {} bases over {} sequence lines of {} -> {}",
        summary.bases_masked,
        summary.sequence_lines,
        input.display(),
        output.display()
    );

    summary.output = Some(output);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mask(text: &str) -> (String, MaskSummary) {
        let mut out = Vec::new();
        let summary = hard_mask(text.as_bytes(), &mut out, b'N').unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_lowercase_becomes_n() {
        let (out, summary) = mask(">chr1 assembled acgt\nACgtNn\nacgtACGT\n");
        assert_eq!(out, ">chr1 assembled acgt\nACNNNN\nNNNNACGT\n");
        assert_eq!(summary.header_lines, 1);
        assert_eq!(summary.sequence_lines, 2);
        assert_eq!(summary.bases_masked, 7);
    }

    #[test]
    fn test_line_endings_preserved() {
        let (out, _) = mask(">h\r\nac\r\nGT");
        assert_eq!(out, ">h\r\nNN\r\nGT");
    }

    #[test]
    fn test_non_letters_untouched() {
        let (out, summary) = mask("acg-t*.\n");
        assert_eq!(out, "NNN-N*.\n");
        assert_eq!(summary.bases_masked, 4);
    }

    #[test]
    fn test_custom_mask_character() {
        let mut out = Vec::new();
        hard_mask(">h\nacGT\n".as_bytes(), &mut out, b'X').unwrap();
        assert_eq!(out, b">h\nXXGT\n");
    }

    #[test]
    fn test_mask_options_reject_non_ascii() {
        assert!(MaskOptions::new('Ñ', "_hardMask.fasta").is_err());
        assert!(MaskOptions::new('\n', "_hardMask.fasta").is_err());
        assert_eq!(MaskOptions::new('N', "_x").unwrap().mask_char(), 'N');
    }
}
