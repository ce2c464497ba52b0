//! Encoding chain: an ordered history of decode steps over one piece of text.
//!
//! ## Model
//!
//! - Step 0 is always [`StepMethod::Input`] and holds the raw text.
//! - Step *i* (*i* > 0) holds the result of decoding step *i-1* with step *i*'s method.
//! - The chain only grows at the end and only shrinks by dropping a suffix.
//!
//! Every mutating operation either fully succeeds or leaves the chain as it was.

mod auto_solve;
mod error;
mod step;

pub use auto_solve::{peel, peel_layer, DEFAULT_MAX_ITERATIONS};
pub use error::ChainError;
pub use step::{EncodingStep, StepMethod};

use serde::{Deserialize, Serialize};

/// Result of [`EncodingChain::auto_solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoSolveOutcome {
    /// This many steps were appended, in one update.
    Peeled { appended: usize },
    /// Nothing recognisable; the chain was not touched.
    NoNestedEncoding,
}

/// Serialized as its step list. Deserializing checks that the list starts
/// with the only `Input` step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EncodingStep>", into = "Vec<EncodingStep>")]
pub struct EncodingChain {
    steps: Vec<EncodingStep>,
}

impl TryFrom<Vec<EncodingStep>> for EncodingChain {
    type Error = ChainError;

    fn try_from(steps: Vec<EncodingStep>) -> Result<Self, Self::Error> {
        let Some((first, rest)) = steps.split_first() else {
            return Err(ChainError::MisplacedInput);
        };
        if first.method != StepMethod::Input
            || rest.iter().any(|step| step.method == StepMethod::Input)
        {
            return Err(ChainError::MisplacedInput);
        }
        Ok(Self { steps })
    }
}

impl From<EncodingChain> for Vec<EncodingStep> {
    fn from(chain: EncodingChain) -> Self {
        chain.steps
    }
}

impl Default for EncodingChain {
    fn default() -> Self {
        Self::new("")
    }
}

impl EncodingChain {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            steps: vec![EncodingStep::input(root)],
        }
    }

    pub fn steps(&self) -> &[EncodingStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a chain holds at least its input step.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn root(&self) -> &EncodingStep {
        &self.steps[0]
    }

    pub fn last(&self) -> &EncodingStep {
        self.steps
            .last()
            .unwrap_or_else(|| unreachable!("chain always holds its input step"))
    }

    pub fn current_value(&self) -> &str {
        &self.last().value
    }

    /// Replaces the input and drops every derived step.
    pub fn set_root(&mut self, value: impl Into<String>) {
        self.steps.clear();
        self.steps.push(EncodingStep::input(value));
    }

    /// Resets to a single empty input step.
    pub fn clear(&mut self) {
        self.set_root("");
    }

    /// Decodes the current value with `method` and appends the result.
    ///
    /// On failure nothing is appended and the error names the codec.
    pub fn apply_step(&mut self, method: StepMethod) -> Result<&EncodingStep, ChainError> {
        let codec = method.codec().ok_or(ChainError::NotATransform(method))?;
        let value = codec.decode(self.current_value())?;

        #[cfg(feature = "tracing")]
        tracing::debug!(method = %method, step = self.steps.len(), "appending chain step");

        self.steps.push(EncodingStep::new(method, value));
        Ok(self.last())
    }

    /// Keeps steps `0..=index`, discarding everything after.
    pub fn truncate_at(&mut self, index: usize) -> Result<(), ChainError> {
        if index >= self.steps.len() {
            return Err(ChainError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.steps.truncate(index + 1);
        Ok(())
    }

    /// Drops the last derived step. Returns `false` when only the input is left.
    pub fn undo(&mut self) -> bool {
        if self.steps.len() > 1 {
            self.steps.pop();
            true
        } else {
            false
        }
    }

    /// Peels nested encodings off the current value.
    ///
    /// All discovered steps are appended together, or none at all.
    pub fn auto_solve(&mut self, max_iterations: usize) -> AutoSolveOutcome {
        let peeled = peel(self.current_value(), max_iterations);
        if peeled.is_empty() {
            return AutoSolveOutcome::NoNestedEncoding;
        }

        let appended = peeled.len();

        #[cfg(feature = "tracing")]
        tracing::debug!(appended, from_step = self.steps.len() - 1, "auto-solve peeled layers");

        self.steps.extend(peeled);
        AutoSolveOutcome::Peeled { appended }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{CodecKind, DecodeError};

    #[test]
    fn deserialize_rejects_chain_without_input_step() {
        assert!(serde_json::from_str::<EncodingChain>("[]").is_err());

        let no_input = r#"[{"method":"base64_decode","value":"x"}]"#;
        assert!(serde_json::from_str::<EncodingChain>(no_input).is_err());

        let second_input = r#"[{"method":"input","value":"a"},{"method":"input","value":"b"}]"#;
        assert!(serde_json::from_str::<EncodingChain>(second_input).is_err());
    }

    #[test]
    fn serde_keeps_steps() {
        let mut chain = EncodingChain::new("JTQx");
        chain.apply_step(StepMethod::Base64Decode).unwrap();

        let json = serde_json::to_string(&chain).unwrap();
        let back: EncodingChain = serde_json::from_str(&json).unwrap();

        assert_eq!(back, chain);
        assert_eq!(back.current_value(), "%41");
    }

    #[test]
    fn default_chain_is_single_empty_input() {
        let chain = EncodingChain::default();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.root(), &EncodingStep::input(""));
    }

    #[test]
    fn apply_step_appends_decoded_value() {
        let mut chain = EncodingChain::new("aGVsbG8gd29ybGQ=");
        let step = chain.apply_step(StepMethod::Base64Decode).unwrap().clone();

        assert_eq!(step, EncodingStep::new(StepMethod::Base64Decode, "hello world"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.current_value(), "hello world");
    }

    #[test]
    fn failed_step_leaves_chain_untouched() {
        let mut chain = EncodingChain::new("not-valid-base64!!");
        let before = chain.clone();

        let err = chain.apply_step(StepMethod::Base64Decode).unwrap_err();

        assert!(matches!(
            err,
            ChainError::Decode(DecodeError::Malformed {
                codec: CodecKind::Base64,
                ..
            })
        ));
        assert_eq!(chain, before);
    }

    #[test]
    fn input_is_not_applicable() {
        let mut chain = EncodingChain::new("abc");
        assert_eq!(
            chain.apply_step(StepMethod::Input).unwrap_err(),
            ChainError::NotATransform(StepMethod::Input)
        );
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn steps_link_to_their_predecessor() {
        let mut chain = EncodingChain::new("%36%31%36%32");
        chain.apply_step(StepMethod::UrlDecode).unwrap();
        chain.apply_step(StepMethod::HexDecode).unwrap();

        for pair in chain.steps().windows(2) {
            let codec = pair[1].method.codec().unwrap();
            assert_eq!(codec.decode(&pair[0].value).unwrap(), pair[1].value);
        }
        assert_eq!(chain.current_value(), "ab");
    }

    #[test]
    fn truncate_keeps_prefix() {
        let mut chain = EncodingChain::new("JTQxJTQy");
        chain.apply_step(StepMethod::Base64Decode).unwrap();
        chain.apply_step(StepMethod::UrlDecode).unwrap();
        assert_eq!(chain.len(), 3);

        chain.truncate_at(1).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.current_value(), "%41%42");

        chain.truncate_at(0).unwrap();
        assert_eq!(chain.steps(), &[EncodingStep::input("JTQxJTQy")]);
    }

    #[test]
    fn truncate_out_of_range_is_rejected() {
        let mut chain = EncodingChain::new("x");
        assert_eq!(
            chain.truncate_at(1).unwrap_err(),
            ChainError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn undo_never_removes_input() {
        let mut chain = EncodingChain::new("JTQx");
        chain.apply_step(StepMethod::Base64Decode).unwrap();
        assert!(chain.undo());
        assert!(!chain.undo());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn set_root_discards_history() {
        let mut chain = EncodingChain::new("JTQx");
        chain.apply_step(StepMethod::Base64Decode).unwrap();
        chain.set_root("new");
        assert_eq!(chain.steps(), &[EncodingStep::input("new")]);

        chain.clear();
        assert_eq!(chain, EncodingChain::default());
    }

    #[test]
    fn auto_solve_commits_all_layers() {
        let mut chain = EncodingChain::new("JTdCJTIydG9rZW4lMjIlM0ElMjJhYmMxMjMlMjIlN0Q=");
        let outcome = chain.auto_solve(DEFAULT_MAX_ITERATIONS);

        assert_eq!(outcome, AutoSolveOutcome::Peeled { appended: 2 });
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.current_value(), r#"{"token":"abc123"}"#);
    }

    #[test]
    fn auto_solve_without_layers_reports_and_keeps_chain() {
        let mut chain = EncodingChain::new("just words");
        let before = chain.clone();

        assert_eq!(
            chain.auto_solve(DEFAULT_MAX_ITERATIONS),
            AutoSolveOutcome::NoNestedEncoding
        );
        assert_eq!(chain, before);
    }

    #[test]
    fn auto_solve_continues_from_last_step() {
        let mut chain = EncodingChain::new("JTQxJTQy");
        chain.apply_step(StepMethod::Base64Decode).unwrap();

        assert_eq!(
            chain.auto_solve(DEFAULT_MAX_ITERATIONS),
            AutoSolveOutcome::Peeled { appended: 1 }
        );
        assert_eq!(chain.current_value(), "AB");
    }
}
