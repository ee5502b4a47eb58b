//! Test fixtures and data generators
//!
//! Common BLAST, FASTA and path-listing inputs for use across the workspace.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test sequence with an optional description
#[derive(Debug, Clone)]
pub struct TestSequence {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl TestSequence {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            sequence: sequence.into(),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn header(&self) -> String {
        if self.description.is_empty() {
            format!(">{}", self.id)
        } else {
            format!(">{} {}", self.id, self.description)
        }
    }

    /// Convert to single-line FASTA
    pub fn to_fasta(&self) -> String {
        format!("{}\n{}\n", self.header(), self.sequence)
    }

    /// Convert to FASTA with the sequence wrapped at `width` characters
    pub fn to_wrapped_fasta(&self, width: usize) -> String {
        let mut out = self.header();
        out.push('\n');
        let bytes = self.sequence.as_bytes();
        for chunk in bytes.chunks(width.max(1)) {
            out.push_str(&String::from_utf8_lossy(chunk));
            out.push('\n');
        }
        out
    }
}

/// Concatenate the single-line FASTA form of `sequences`
pub fn create_test_fasta(sequences: &[TestSequence]) -> String {
    sequences.iter().map(TestSequence::to_fasta).collect()
}

/// Generate assembler-style contigs (`k141_<i> flag=1 multi=2.0 len=<n>`)
pub fn generate_contigs(count: usize, length: usize) -> Vec<TestSequence> {
    let mut rng = StdRng::seed_from_u64(42); // Deterministic for tests
    let bases = ['A', 'T', 'G', 'C'];

    (0..count)
        .map(|i| {
            let sequence: String = (0..length).map(|_| bases[rng.gen_range(0..4)]).collect();
            TestSequence::new(format!("k141_{}", i), sequence)
                .with_description(format!("flag=1 multi=2.0 len={}", length))
        })
        .collect()
}

/// One `-outfmt 6` row for `query` with the given alignment length
pub fn blast_row(query: &str, alignment_length: u64) -> String {
    format!(
        "{query}\tNC_000001.11\t98.500\t{len}\t2\t0\t1\t{len}\t10001\t{send}\t1.2e-50\t{score}",
        query = query,
        len = alignment_length,
        send = 10000 + alignment_length,
        score = alignment_length * 2,
    )
}

/// A BLAST table with one row per `(query, alignment_length)` pair
pub fn blast_table(hits: &[(&str, u64)]) -> String {
    hits.iter()
        .map(|(query, length)| format!("{}\n", blast_row(query, *length)))
        .collect()
}

/// Soft-masked genome fragment with mixed-case sequence lines
pub fn soft_masked_genome() -> String {
    ">chr21 soft-masked\nACGTacgtNNNN\nttttGGGGcccc\n>chrM\nGATCACAGgtct\n".to_string()
}

/// Raw-data listing as produced by `ls */*/*` inside resources/RawData
pub fn raw_data_listing() -> String {
    "Cohort1/S01/S01_1.fastq.gz\n\
     Cohort1/S01/S01_2.fastq.gz\n\
     Cohort2/S07/S07.fastq.gz\n"
        .to_string()
}

/// Pipeline output paths as listed by a Snakemake rule
pub fn pipeline_output_paths() -> String {
    "results/DataNonHuman/BBNorm_Reads/Cohort1/S01_norm.1.fq\n\
     results/DataNonHuman/BBNorm_Reads/Cohort1/S01_norm.2.fq\n\
     results/DataNonHuman/BBNorm_Reads/Cohort2/S07_norm.fq\n\
     results/DataNonHuman/BBNorm_Reads/Cohort2/S07_norm.log\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blast_row_has_twelve_columns() {
        let row = blast_row("k141_3", 150);
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], "k141_3");
        assert_eq!(fields[3], "150");
    }

    #[test]
    fn test_generate_contigs_deterministic() {
        let a = generate_contigs(5, 30);
        let b = generate_contigs(5, 30);
        assert_eq!(a.len(), 5);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.sequence, y.sequence);
            assert_eq!(x.sequence.len(), 30);
        }
    }

    #[test]
    fn test_wrapped_fasta() {
        let seq = TestSequence::new("s", "ACGTACGTAC");
        assert_eq!(seq.to_wrapped_fasta(4), ">s\nACGT\nACGT\nAC\n");
    }
}
