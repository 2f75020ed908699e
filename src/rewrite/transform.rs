//! Applies a rule set to text, each rule seeing the previous rule's output

use std::borrow::Cow;

use crate::core::error::Result;
use crate::core::model::RuleHit;
use crate::rewrite::rules::RuleSet;

/// Output of a transform pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,

    /// Rules that fired, in application order
    pub hits: Vec<RuleHit>,
}

/// Run every rule of `rules` over `input` in order
pub fn transform(rules: &RuleSet, input: &str) -> Result<Transformed> {
    let mut current: Cow<'_, str> = Cow::Borrowed(input);
    let mut hits = Vec::new();

    for rule in rules.iter() {
        let (next, count) = rule.apply(&current)?;
        if count == 0 {
            continue;
        }
        let next = next.into_owned();
        current = Cow::Owned(next);
        hits.push(RuleHit {
            rule: rule.name().to_string(),
            count,
        });
    }

    Ok(Transformed {
        text: current.into_owned(),
        hits,
    })
}
