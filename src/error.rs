use thiserror::Error;

use crate::literal::Literal;

/// Every way a request into the engine can fail.
///
/// Validation errors (everything except [`AbaError::DerivationOverflow`] and
/// [`AbaError::Cancelled`]) are detected before any derivation work starts;
/// the engine never returns a partial [`crate::report::Report`] alongside an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbaError {
    /// The text format reader could not make sense of a line.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A rule body or preference references an assumption with no entry in `C`.
    #[error("assumption '{0}' has no contrary defined")]
    UndefinedContrary(Literal),

    /// A rule or preference references a literal outside the language `L`.
    #[error("literal '{0}' does not belong to the language")]
    UnknownLiteral(Literal),

    /// A preference pair names something that is not an assumption.
    #[error("preference references '{0}', which is not an assumption")]
    PreferenceDomainError(Literal),

    /// The argument-derivation fixed point did not converge within the
    /// iteration cap. A correct implementation over a finite language always
    /// converges, so this signals an implementation bug, not a user error.
    #[error("argument derivation did not converge within the iteration cap")]
    DerivationOverflow,

    /// The caller's cancellation flag was observed to be set.
    #[error("request was cancelled")]
    Cancelled,
}
