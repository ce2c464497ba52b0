//! Regular expression tester.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::InspectError;

/// Upper bound on reported matches for one run.
pub const MAX_MATCHES: usize = 1000;

/// Parsed flag letters.
///
/// `g` reports every match instead of the first one. `i`, `m` and `s` map to
/// case-insensitive, multi-line and dot-matches-newline. `u` is accepted and
/// ignored since patterns are always Unicode-aware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    pub global: bool,
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_all: bool,
}

impl RegexFlags {
    /// # Errors
    ///
    /// [`InspectError::InvalidRegexFlag`] for a letter outside `gimsu` or
    /// one given twice.
    pub fn parse(flags: &str) -> Result<Self, InspectError> {
        let mut parsed = Self::default();
        let mut unicode = false;
        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.case_insensitive,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'u' => &mut unicode,
                other => return Err(InspectError::InvalidRegexFlag(other)),
            };
            if *slot {
                return Err(InspectError::InvalidRegexFlag(c));
            }
            *slot = true;
        }
        Ok(parsed)
    }

    fn build(&self, pattern: &str) -> Result<Regex, InspectError> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_all)
            .build()
            .map_err(|e| InspectError::InvalidRegex(e.to_string()))
    }
}

/// One match. Offsets are byte offsets into the tested text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegexMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Capture groups 1.., `None` where a group did not participate.
    pub groups: Vec<Option<String>>,
}

/// Runs `pattern` with `flags` over `text`.
///
/// An empty pattern reports no matches. At most [`MAX_MATCHES`] are
/// returned.
///
/// # Errors
///
/// [`InspectError::InvalidRegexFlag`] for a bad flag string and
/// [`InspectError::InvalidRegex`] when the pattern does not compile.
///
/// # Examples
///
/// ```
/// use pk_core::inspect::test_regex;
///
/// let found = test_regex(r"(\w)(\d)", "gi", "a1 B2").unwrap();
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].start, 3);
/// assert_eq!(found[1].groups, vec![Some("B".to_string()), Some("2".to_string())]);
/// ```
pub fn test_regex(pattern: &str, flags: &str, text: &str) -> Result<Vec<RegexMatch>, InspectError> {
    let flags = RegexFlags::parse(flags)?;
    let re = flags.build(pattern)?;

    if pattern.is_empty() {
        return Ok(Vec::new());
    }

    let limit = if flags.global { MAX_MATCHES } else { 1 };
    let found = re
        .captures_iter(text)
        .take(limit)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(RegexMatch {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|g| g.map(|m| m.as_str().to_string()))
                    .collect(),
            })
        })
        .collect();
    Ok(found)
}
