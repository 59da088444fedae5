use serde::Serialize;

use crate::literal::Literal;

/// Index of an [`Argument`] within a derivation's argument set.
///
/// Arguments are addressed by index rather than by value everywhere attacks
/// are computed, since supports are cloned frequently and comparing them by
/// value on every lookup would be quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ArgumentId(pub usize);

/// An argument `(claim, support)`: `support ⊆ A` derives `claim` via zero or
/// more rule applications.
///
/// `support` is kept sorted and deduplicated so that two arguments built by
/// different derivation paths but with the same claim and the same
/// underlying assumption set compare equal and hash identically — this is
/// what makes the deriver's fixed point a genuine fixed point rather than an
/// ever-growing multiset of syntactically distinct derivations of the same
/// thing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Argument {
    pub claim: Literal,
    pub support: Vec<Literal>,
}

impl Argument {
    /// A base argument `(a, {a})` for an assumption `a`.
    pub fn base(assumption: Literal) -> Argument {
        Argument {
            support: vec![assumption.clone()],
            claim: assumption,
        }
    }

    /// Combines the supports of `premises` (in rule-application order) into
    /// a new argument for `conclusion`.
    pub fn derive(conclusion: Literal, premises: &[&Argument]) -> Argument {
        let mut support: Vec<Literal> = premises.iter().flat_map(|p| p.support.clone()).collect();
        support.sort();
        support.dedup();
        Argument {
            claim: conclusion,
            support,
        }
    }
}
