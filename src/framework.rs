use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::AbaError;
use crate::literal::Literal;
use crate::rule::Rule;

/// How two assumptions compare under the strict partial preference `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// `x` is strictly preferred to `y`: `(x, y) ∈ P`.
    Greater,
    /// `y` is strictly preferred to `x`: `(y, x) ∈ P`.
    Less,
    /// Neither pair is in `P`.
    Incomparable,
}

/// The immutable 5-tuple `(L, A, C, R, P)` of an ABA+ framework.
///
/// Constructed once via [`Framework::new`], which runs the full validation
/// pass described in the data model's invariants 1-4. Rewrites (atomic,
/// non-circular) produce *new* `Framework` values; there is no mutation API.
#[derive(Debug, Clone, Serialize)]
pub struct Framework {
    language: Vec<Literal>,
    assumptions: Vec<Literal>,
    contraries: HashMap<Literal, Literal>,
    rules: Vec<Rule>,
    preferences: Vec<(Literal, Literal)>,

    #[serde(skip)]
    assumption_set: HashSet<Literal>,
}

impl Framework {
    /// Validates and constructs a framework from its five components.
    ///
    /// Checks, in order: every literal mentioned in a rule or in `contraries`
    /// belongs to `language` ([`AbaError::UnknownLiteral`]); every assumption
    /// has a contrary ([`AbaError::UndefinedContrary`]); every preference
    /// pair names only assumptions and is irreflexive
    /// ([`AbaError::PreferenceDomainError`]).
    pub fn new(
        language: HashSet<Literal>,
        assumptions: HashSet<Literal>,
        contraries: HashMap<Literal, Literal>,
        rules: Vec<Rule>,
        preferences: HashSet<(Literal, Literal)>,
    ) -> Result<Framework, AbaError> {
        for rule in &rules {
            if !language.contains(&rule.conclusion) {
                return Err(AbaError::UnknownLiteral(rule.conclusion.clone()));
            }
            for premise in &rule.premises {
                if !language.contains(premise) {
                    return Err(AbaError::UnknownLiteral(premise.clone()));
                }
            }
        }
        for (a, c) in &contraries {
            if !language.contains(a) {
                return Err(AbaError::UnknownLiteral(a.clone()));
            }
            if !language.contains(c) {
                return Err(AbaError::UnknownLiteral(c.clone()));
            }
        }
        for a in &assumptions {
            if !contraries.contains_key(a) {
                return Err(AbaError::UndefinedContrary(a.clone()));
            }
        }
        for (b, w) in &preferences {
            if b == w {
                return Err(AbaError::PreferenceDomainError(b.clone()));
            }
            if !assumptions.contains(b) {
                return Err(AbaError::PreferenceDomainError(b.clone()));
            }
            if !assumptions.contains(w) {
                return Err(AbaError::PreferenceDomainError(w.clone()));
            }
        }

        Ok(Framework::from_parts_unchecked(
            language,
            assumptions,
            contraries,
            rules,
            preferences,
        ))
    }

    /// Builds a framework without re-running validation.
    ///
    /// Used internally by the rewrites (C3, C4), which construct
    /// already-consistent data by their own separately-argued correctness;
    /// re-validating every rewrite output would be quadratic in framework
    /// size for no benefit.
    pub(crate) fn from_parts_unchecked(
        language: HashSet<Literal>,
        assumptions: HashSet<Literal>,
        contraries: HashMap<Literal, Literal>,
        rules: Vec<Rule>,
        preferences: HashSet<(Literal, Literal)>,
    ) -> Framework {
        let mut language: Vec<Literal> = language.into_iter().collect();
        language.sort();
        let mut assumption_vec: Vec<Literal> = assumptions.iter().cloned().collect();
        assumption_vec.sort();
        let mut preferences: Vec<(Literal, Literal)> = preferences.into_iter().collect();
        preferences.sort();

        Framework {
            language,
            assumptions: assumption_vec,
            contraries,
            rules,
            preferences,
            assumption_set: assumptions,
        }
    }

    pub fn language(&self) -> &[Literal] {
        &self.language
    }

    /// Assumptions, in sorted order (used everywhere a deterministic
    /// enumeration of `A` is required).
    pub fn assumptions(&self) -> &[Literal] {
        &self.assumptions
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn preferences(&self) -> &[(Literal, Literal)] {
        &self.preferences
    }

    pub fn is_assumption(&self, l: &Literal) -> bool {
        self.assumption_set.contains(l)
    }

    pub fn non_assumption_literals(&self) -> Vec<Literal> {
        self.language
            .iter()
            .filter(|l| !self.assumption_set.contains(l))
            .cloned()
            .collect()
    }

    /// Looks up `C(a)`. Fails with [`AbaError::UndefinedContrary`] if `a` is
    /// not an assumption.
    pub fn contrary_of(&self, a: &Literal) -> Result<&Literal, AbaError> {
        self.contraries
            .get(a)
            .ok_or_else(|| AbaError::UndefinedContrary(a.clone()))
    }

    /// Looks up an entry in the contrariness map without requiring `a` to be
    /// an assumption. Used by the non-circular rewrite (C3), whose fresh
    /// level-indexed literals inherit a contrary from the original literal
    /// "if defined" regardless of whether that original literal was itself
    /// an assumption.
    pub fn raw_contrary(&self, a: &Literal) -> Option<&Literal> {
        self.contraries.get(a)
    }

    pub fn contraries(&self) -> &HashMap<Literal, Literal> {
        &self.contraries
    }

    /// Compares two assumptions under the strict preference relation.
    pub fn prefer(&self, x: &Literal, y: &Literal) -> Preference {
        if self.preferences.iter().any(|(b, w)| b == x && w == y) {
            Preference::Greater
        } else if self.preferences.iter().any(|(b, w)| b == y && w == x) {
            Preference::Less
        } else {
            Preference::Incomparable
        }
    }
}
