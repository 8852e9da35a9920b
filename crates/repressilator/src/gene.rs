/// One of the three genes in the repression cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    LacI,
    TetR,
    CI,
}

impl Gene {
    /// All genes, in state and output order.
    pub const ALL: [Gene; 3] = [Gene::LacI, Gene::TetR, Gene::CI];

    /// Position of the gene in the state and in the output columns.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Gene::LacI => 0,
            Gene::TetR => 1,
            Gene::CI => 2,
        }
    }

    /// The gene whose protein represses this gene's transcription.
    #[must_use]
    pub const fn repressor(self) -> Gene {
        match self {
            Gene::LacI => Gene::CI,
            Gene::TetR => Gene::LacI,
            Gene::CI => Gene::TetR,
        }
    }

    /// Column name used in the output table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Gene::LacI => "LacI",
            Gene::TetR => "TetR",
            Gene::CI => "cI",
        }
    }
}

/// Transcript and protein concentrations of one gene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeneUnit {
    pub mrna: f64,
    pub protein: f64,
}

/// Time derivative of a [`GeneUnit`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeneRate {
    pub d_mrna: f64,
    pub d_protein: f64,
}
