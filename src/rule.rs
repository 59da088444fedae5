use serde::Serialize;

use crate::literal::Literal;

/// An inference rule `name: conclusion <- premises`.
///
/// A rule with an empty `premises` list is a *fact*. `name` is carried for
/// traceability only; it plays no part in argument deduplication, which
/// keys solely on (claim, support).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: String,
    pub conclusion: Literal,
    pub premises: Vec<Literal>,
}

impl Rule {
    pub fn new(name: impl Into<String>, conclusion: Literal, premises: Vec<Literal>) -> Rule {
        Rule {
            name: name.into(),
            conclusion,
            premises,
        }
    }

    pub fn fact(name: impl Into<String>, conclusion: Literal) -> Rule {
        Rule::new(name, conclusion, vec![])
    }

    pub fn is_fact(&self) -> bool {
        self.premises.is_empty()
    }
}
