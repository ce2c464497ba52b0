use pk_core::chain::{
    AutoSolveOutcome, ChainError, EncodingChain, EncodingStep, StepMethod, DEFAULT_MAX_ITERATIONS,
};
use tracing::{debug, info, warn};

/// One user's interactive encoding chain.
///
/// Owns the chain exclusively; every operation runs to completion and leaves
/// the chain either fully updated or untouched.
pub struct ChainSession {
    chain: EncodingChain,
    max_iterations: usize,
}

impl Default for ChainSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl ChainSession {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            chain: EncodingChain::default(),
            max_iterations,
        }
    }

    pub fn chain(&self) -> &EncodingChain {
        &self.chain
    }

    pub fn steps(&self) -> &[EncodingStep] {
        self.chain.steps()
    }

    /// Starts over from `input`. Blank input is kept as-is; it is still a valid root.
    pub fn set_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        debug!(len = input.len(), "chain input replaced");
        self.chain.set_root(input);
    }

    pub fn clear(&mut self) {
        self.chain.clear();
    }

    #[tracing::instrument(
        name = "usecase.chain_session.apply",
        skip(self),
        fields(step = self.chain.len())
    )]
    pub fn apply(&mut self, method: StepMethod) -> Result<&EncodingStep, ChainError> {
        match self.chain.apply_step(method) {
            Ok(step) => {
                debug!(out_len = step.value.len(), "step appended");
                Ok(step)
            }
            Err(e) => {
                warn!(error = %e, "step rejected, chain unchanged");
                Err(e)
            }
        }
    }

    /// Keeps steps up to and including `index`.
    pub fn truncate_at(&mut self, index: usize) -> Result<(), ChainError> {
        self.chain.truncate_at(index)?;
        debug!(len = self.chain.len(), "chain truncated");
        Ok(())
    }

    /// Removes step `index` and everything derived from it.
    ///
    /// The input step cannot be removed; use [`ChainSession::clear`].
    pub fn remove_step(&mut self, index: usize) -> Result<(), ChainError> {
        if index == 0 {
            return Err(ChainError::NotATransform(StepMethod::Input));
        }
        self.truncate_at(index - 1)
    }

    #[tracing::instrument(
        name = "usecase.chain_session.auto_solve",
        skip(self),
        fields(max_iterations = self.max_iterations)
    )]
    pub fn auto_solve(&mut self) -> AutoSolveOutcome {
        let outcome = self.chain.auto_solve(self.max_iterations);
        match &outcome {
            AutoSolveOutcome::Peeled { appended } => {
                info!(appended, "auto-solve peeled nested encodings")
            }
            AutoSolveOutcome::NoNestedEncoding => info!("no nested encoding detected"),
        }
        outcome
    }
}
