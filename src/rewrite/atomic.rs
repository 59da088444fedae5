use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::framework::Framework;
use crate::literal::Literal;
use crate::rule::Rule;

/// Metadata about an atomic rewrite, reported alongside the rewritten
/// framework (see the report assembler, C7).
#[derive(Debug, Clone, Serialize)]
pub struct AtomicMetadata {
    pub original_language_size: usize,
    pub atomic_language_size: usize,
    pub original_assumptions_count: usize,
    pub atomic_assumptions_count: usize,
    pub original_rules_count: usize,
    pub atomic_rules_count: usize,
    pub new_assumptions: Vec<Literal>,
}

/// Rewrites `framework` so that every rule premise is an assumption (§4.4).
///
/// For each non-assumption literal `ℓ` that appears in some rule body, two
/// fresh assumptions are introduced: `ℓ_d` ("derived"), whose contrary is
/// `ℓ_nd`, and `ℓ_nd` ("non-derived"), whose contrary is `ℓ` itself. No rule
/// `ℓ_d ← ℓ` is emitted — see the design notes on the source's conflicting
/// drafts; this follows the majority variant, confirmed against the
/// original prototype's `convert_to_atomic`.
pub fn atomize(framework: &Framework) -> (Framework, AtomicMetadata) {
    let mut body_literals: HashSet<Literal> = HashSet::new();
    for rule in framework.rules() {
        for premise in &rule.premises {
            if !framework.is_assumption(premise) {
                body_literals.insert(premise.clone());
            }
        }
    }
    let mut non_assumption_bodies: Vec<Literal> = body_literals.into_iter().collect();
    non_assumption_bodies.sort();

    let mut new_language: HashSet<Literal> = framework.language().iter().cloned().collect();
    let mut new_assumptions: HashSet<Literal> = framework.assumptions().iter().cloned().collect();
    let mut new_contraries: HashMap<Literal, Literal> = framework.contraries().clone();
    let mut introduced = vec![];

    for l in &non_assumption_bodies {
        let derived = l.derived();
        let non_derived = l.non_derived();
        new_language.insert(derived.clone());
        new_language.insert(non_derived.clone());
        new_assumptions.insert(derived.clone());
        new_assumptions.insert(non_derived.clone());
        new_contraries.insert(derived.clone(), non_derived.clone());
        new_contraries.insert(non_derived.clone(), l.clone());
        introduced.push(derived);
        introduced.push(non_derived);
    }

    let new_rules: Vec<Rule> = framework
        .rules()
        .iter()
        .map(|rule| {
            let premises = rule
                .premises
                .iter()
                .map(|p| {
                    if framework.is_assumption(p) {
                        p.clone()
                    } else {
                        p.derived()
                    }
                })
                .collect();
            Rule::new(format!("atom_{}", rule.name), rule.conclusion.clone(), premises)
        })
        .collect();

    let preferences: HashSet<(Literal, Literal)> = framework.preferences().iter().cloned().collect();

    let metadata = AtomicMetadata {
        original_language_size: framework.language().len(),
        atomic_language_size: new_language.len(),
        original_assumptions_count: framework.assumptions().len(),
        atomic_assumptions_count: new_assumptions.len(),
        original_rules_count: framework.rules().len(),
        atomic_rules_count: new_rules.len(),
        new_assumptions: introduced,
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

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    fn lit(s: &str) -> Literal {
        Literal::new(s)
    }

    fn build_s1() -> Framework {
        let language: HashSet<Literal> = [lit("a"), lit("b"), lit("p"), lit("q")]
            .into_iter()
            .collect();
        let assumptions: HashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let contraries: HashMap<Literal, Literal> =
            [(lit("a"), lit("p")), (lit("b"), lit("q"))].into_iter().collect();
        let rules = vec![
            Rule::new("r1", lit("p"), vec![lit("b")]),
            Rule::new("r2", lit("q"), vec![lit("a")]),
        ];
        let preferences: HashSet<(Literal, Literal)> =
            [(lit("a"), lit("b"))].into_iter().collect();
        Framework::new(language, assumptions, contraries, rules, preferences).unwrap()
    }

    #[test]
    fn test_every_premise_becomes_an_assumption() {
        let fw = build_s1();
        let (atomic, _meta) = atomize(&fw);
        for rule in atomic.rules() {
            for premise in &rule.premises {
                assert!(atomic.is_assumption(premise), "{} not an assumption", premise);
            }
        }
    }

    #[test]
    fn test_no_derivation_rule_is_emitted_for_derived_assumption() {
        let fw = build_s1();
        let (atomic, _meta) = atomize(&fw);
        // No rule should conclude p_d or q_d.
        for rule in atomic.rules() {
            assert_ne!(rule.conclusion, lit("p_d"));
            assert_ne!(rule.conclusion, lit("q_d"));
        }
    }

    #[test]
    fn test_contrary_chain() {
        let fw = build_s1();
        let (atomic, _meta) = atomize(&fw);
        assert_eq!(atomic.contrary_of(&lit("p_d")).unwrap(), &lit("p_nd"));
        assert_eq!(atomic.contrary_of(&lit("p_nd")).unwrap(), &lit("p"));
    }
}
