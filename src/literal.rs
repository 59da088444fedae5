use std::fmt;
use std::sync::Arc;

/// An opaque symbol drawn from a finite language.
///
/// Equality and ordering are by the identity of the underlying string; a
/// `Literal` carries no structure beyond the naming conventions the rewrites
/// introduce (`_d`, `_nd`, and level suffixes like `_2`). Cloning is cheap
/// (an `Arc` bump) since the same literal is copied into many arguments'
/// supports during derivation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(Arc<str>);

impl Literal {
    pub fn new(s: impl Into<Arc<str>>) -> Literal {
        Literal(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the "derived" assumption introduced by the atomic rewrite for `self`.
    pub fn derived(&self) -> Literal {
        Literal::new(format!("{}_d", self.0))
    }

    /// Builds the "non-derived" assumption introduced by the atomic rewrite for `self`.
    pub fn non_derived(&self) -> Literal {
        Literal::new(format!("{}_nd", self.0))
    }

    /// Builds the level-`j` literal introduced by the non-circular rewrite for `self`.
    pub fn leveled(&self, j: usize) -> Literal {
        Literal::new(format!("{}_{}", self.0, j))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Literal {
        Literal::new(s)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Literal {
        Literal::new(s)
    }
}

impl serde::Serialize for Literal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
