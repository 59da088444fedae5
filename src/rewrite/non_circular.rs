use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::framework::Framework;
use crate::literal::Literal;
use crate::rule::Rule;

/// Metadata about a non-circular rewrite, reported alongside the rewritten
/// framework (see the report assembler, C7).
#[derive(Debug, Clone, Serialize)]
pub struct NonCircularMetadata {
    /// `k = |L \ A|`, the number of non-assumption literals being leveled.
    pub k: usize,
    pub non_assumptions: Vec<Literal>,
    pub original_language_size: usize,
    pub transformed_language_size: usize,
    pub original_rules_count: usize,
    pub transformed_rules_count: usize,
}

/// Applies the D∘ construction (§4.3): for each non-assumption literal `s`
/// and each level `j ∈ {1..k}`, introduces a fresh assumption `s_j` so that
/// the rule-dependency graph restricted to non-assumption literals in the
/// output is acyclic.
///
/// `k = 0` (no non-assumption literals) is the identity: nothing is added.
///
/// A rule whose conclusion is itself an assumption is not level-indexed (the
/// construction is only defined for conclusions in `N`) and is carried
/// through unchanged; this only arises for frameworks that break the usual
/// ABA convention of never concluding an assumption via a rule.
pub fn non_circularize(framework: &Framework) -> (Framework, NonCircularMetadata) {
    let non_assumptions = framework.non_assumption_literals();
    let k = non_assumptions.len();
    let non_assumption_set: HashSet<&Literal> = non_assumptions.iter().collect();

    let mut new_language: HashSet<Literal> = framework.language().iter().cloned().collect();
    let mut new_assumptions: HashSet<Literal> = framework.assumptions().iter().cloned().collect();
    let mut new_contraries: HashMap<Literal, Literal> = framework.contraries().clone();

    for s in &non_assumptions {
        for j in 1..=k {
            let leveled = s.leveled(j);
            new_language.insert(leveled.clone());
            new_assumptions.insert(leveled.clone());
            let contrary = framework.raw_contrary(s).cloned().unwrap_or_else(|| s.clone());
            new_contraries.insert(leveled, contrary);
        }
    }

    let mut new_rules = vec![];
    for rule in framework.rules() {
        if !non_assumption_set.contains(&rule.conclusion) {
            new_rules.push(rule.clone());
            continue;
        }
        if rule.is_fact() {
            for j in 1..=k {
                new_rules.push(Rule::fact(
                    format!("{}_{}", rule.name, j),
                    rule.conclusion.leveled(j),
                ));
            }
        } else {
            for j in 2..=k {
                let new_premises: Vec<Literal> = rule
                    .premises
                    .iter()
                    .map(|p| {
                        if framework.is_assumption(p) {
                            p.clone()
                        } else {
                            p.leveled(j - 1)
                        }
                    })
                    .collect();
                new_rules.push(Rule::new(
                    format!("{}_{}", rule.name, j),
                    rule.conclusion.leveled(j),
                    new_premises,
                ));
            }
        }
    }

    let preferences: HashSet<(Literal, Literal)> = framework.preferences().iter().cloned().collect();
    let original_rules_count = framework.rules().len();
    let original_language_size = framework.language().len();

    let metadata = NonCircularMetadata {
        k,
        non_assumptions,
        original_language_size,
        transformed_language_size: new_language.len(),
        original_rules_count,
        transformed_rules_count: new_rules.len(),
    };

    let transformed = Framework::from_parts_unchecked(
        new_language,
        new_assumptions,
        new_contraries,
        new_rules,
        preferences,
    );

    (transformed, metadata)
}
