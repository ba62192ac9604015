// crates/scaffold_project/src/report.rs

use std::path::PathBuf;

/// What happened to one extraction step. I/O faults are not represented
/// here; they abort the whole run through error propagation instead.
#[derive(Debug)]
pub enum StepOutcome {
    /// The labeled block matched and its body was written to this path.
    Written(PathBuf),
    /// The document has no block for this label/fence combination; the
    /// destination was never created.
    LabelNotFound {
        document: &'static str,
        label: &'static str,
    },
}

/// Ordered outcomes of a full plan run.
#[derive(Debug, Default)]
pub struct SetupReport {
    pub outcomes: Vec<StepOutcome>,
}

impl SetupReport {
    pub fn record(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of files written.
    pub fn written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, StepOutcome::Written(_)))
            .count()
    }

    /// Number of steps skipped because their label never matched.
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}
