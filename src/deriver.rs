use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::argument::Argument;
use crate::error::AbaError;
use crate::framework::Framework;
use crate::literal::Literal;

/// The fixed-point iteration cap (§4.5). A correct implementation over a
/// finite language always converges well before this; hitting it means the
/// derivation has a bug, not that the input framework is unusually large.
const MAX_ITERATIONS: usize = 100;

/// Derives the full argument set of `framework` by least-fixed-point closure
/// under rule application (§4.5), starting from the base arguments `{(a,
/// {a}) : a ∈ A}`.
///
/// `framework` is expected to already be atomic (every rule premise is an
/// assumption), which is what lets a single pass over each rule's premises
/// match them against existing arguments by claim alone.
///
/// `cancelled` is polled once per outer round; if set, derivation stops and
/// [`AbaError::Cancelled`] is returned with no partial argument set.
pub fn derive_arguments(
    framework: &Framework,
    cancelled: &Arc<AtomicBool>,
) -> Result<Vec<Argument>, AbaError> {
    let mut arguments: Vec<Argument> = framework
        .assumptions()
        .iter()
        .map(|a| Argument::base(a.clone()))
        .collect();
    let mut seen: HashSet<(Literal, Vec<Literal>)> = arguments
        .iter()
        .map(|arg| (arg.claim.clone(), arg.support.clone()))
        .collect();

    for _ in 0..MAX_ITERATIONS {
        if cancelled.load(Ordering::SeqCst) {
            return Err(AbaError::Cancelled);
        }

        let mut changed = false;
        for rule in framework.rules() {
            for candidate in candidates_for(rule, &arguments) {
                let new_arg = Argument::derive(rule.conclusion.clone(), &candidate);
                let key = (new_arg.claim.clone(), new_arg.support.clone());
                if seen.insert(key) {
                    arguments.push(new_arg);
                    changed = true;
                }
            }
        }

        if !changed {
            return Ok(arguments);
        }
    }

    Err(AbaError::DerivationOverflow)
}

/// Enumerates every tuple of existing arguments whose claims match `rule`'s
/// premises in order, one tuple per combination of matching arguments per
/// premise slot.
fn candidates_for<'a>(
    rule: &crate::rule::Rule,
    arguments: &'a [Argument],
) -> Vec<Vec<&'a Argument>> {
    if rule.is_fact() {
        return vec![vec![]];
    }

    let mut tuples: Vec<Vec<&'a Argument>> = vec![vec![]];
    for premise in &rule.premises {
        let matches: Vec<&Argument> = arguments.iter().filter(|a| &a.claim == premise).collect();
        if matches.is_empty() {
            return vec![];
        }
        let mut next = Vec::with_capacity(tuples.len() * matches.len());
        for partial in &tuples {
            for m in &matches {
                let mut extended = partial.clone();
                extended.push(*m);
                next.push(extended);
            }
        }
        tuples = next;
    }
    tuples
}
