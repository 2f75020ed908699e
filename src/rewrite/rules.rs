//! Transformation rules
//!
//! A rule is either a literal substring replacement or a regex substitution
//! whose replacement may use `$1` / `${name}` back-references. Rules are
//! applied in order by [`crate::rewrite::transform`].

use fancy_regex::Regex;
use once_cell::sync::Lazy;
use std::borrow::Cow;

use crate::core::error::{Result, RewriteError};

/// Closing tag the spacing rule looks for
pub const CLOSING_TAG: &str = "</span>";

/// Built-in rule set, compiled once on first use
pub static DEFAULT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new()
        .with(TransformationRule::literal(
            "gray-shading",
            "bg-gray-50",
            "bg-gray-100",
        ))
        .with(TransformationRule::literal(
            "hover-accent",
            "hover:bg-orange-50",
            "hover:bg-blue-50",
        ))
        .with(
            // Lookahead keeps the following character unconsumed, so
            // back-to-back closing tags are each spaced in a single pass.
            // The information separators U+001C..U+001F count as whitespace.
            TransformationRule::regex(
                "span-spacing",
                &format!(r"{}(?=[^\s\x1c-\x1f])", CLOSING_TAG),
                format!("{} ", CLOSING_TAG),
            )
            .expect("Invalid span-spacing regex"),
        )
});

#[derive(Debug, Clone)]
enum RuleKind {
    Literal { from: String, to: String },
    Regex { regex: Regex, replacement: String },
}

/// A single named rewrite step
#[derive(Debug, Clone)]
pub struct TransformationRule {
    name: String,
    kind: RuleKind,
}

impl TransformationRule {
    /// Literal substring replacement. An empty `from` never matches.
    pub fn literal(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RuleKind::Literal {
                from: from.into(),
                to: to.into(),
            },
        }
    }

    /// Regex substitution over all non-overlapping matches
    pub fn regex(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| RewriteError::Pattern {
            rule: name.clone(),
            source: Box::new(e),
        })?;

        Ok(Self {
            name,
            kind: RuleKind::Regex {
                regex,
                replacement: replacement.into(),
            },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the rule to `text`, returning the new text and the number of
    /// replacements made. Text is borrowed unchanged when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Result<(Cow<'t, str>, usize)> {
        match &self.kind {
            RuleKind::Literal { from, to } => {
                if from.is_empty() {
                    return Ok((Cow::Borrowed(text), 0));
                }
                let count = text.matches(from.as_str()).count();
                if count == 0 {
                    Ok((Cow::Borrowed(text), 0))
                } else {
                    Ok((Cow::Owned(text.replace(from.as_str(), to)), count))
                }
            }
            RuleKind::Regex { regex, replacement } => {
                let mut count = 0;
                for found in regex.find_iter(text) {
                    found.map_err(|e| self.pattern_error(e))?;
                    count += 1;
                }
                if count == 0 {
                    return Ok((Cow::Borrowed(text), 0));
                }
                let replaced = regex
                    .try_replacen(text, 0, replacement.as_str())
                    .map_err(|e| self.pattern_error(e))?;
                Ok((replaced, count))
            }
        }
    }

    fn pattern_error(&self, source: fancy_regex::Error) -> RewriteError {
        RewriteError::Pattern {
            rule: self.name.clone(),
            source: Box::new(source),
        }
    }
}

/// Ordered list of rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<TransformationRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule (builder style)
    pub fn with(mut self, rule: TransformationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformationRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The hard-coded rule set used by the CLI
pub fn default_rules() -> &'static RuleSet {
    &DEFAULT_RULES
}
