//! Error types used in the library.
//!
//! - Errors here are *recoverable* input errors, e.g. an attempt to add a formula to a knowledge base which has no clausal form.
//! - Violations of preconditions (null identifiers, a modal formula given to an objective solver, a query with free variables, etc.) are not errors, and panic.
//! - Inconsistency of a solver is an ordinary (boolean) outcome, and so is not an error either.
//!
//! Names of the error enums for the most part overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The union of all errors of the library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    KnowledgeBase(KnowledgeBaseError),
    TermDB(TermDBError),
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// All possible keys have been used.
    StorageExhausted,

    /// A key which does not index a stored clause.
    InvalidKey,

    /// Removal of a clause other than the most recently stored clause.
    NotLast,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the option.
    OutOfBounds,
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors when adding to a knowledge base.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KnowledgeBaseError {
    /// The formula has no representation as a (universally quantified) clause.
    NotClausal,

    /// Some function term has an argument which is neither a name nor a variable, or some literal compares two function terms.
    NotQuasiPrimitive,

    /// Knowledge, or the antecedent or consequent of a conditional belief, contained a modal operator.
    NotObjective,
}

impl From<KnowledgeBaseError> for ErrorKind {
    fn from(e: KnowledgeBaseError) -> Self {
        ErrorKind::KnowledgeBase(e)
    }
}

/// Errors in the term database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermDBError {
    /// A function symbol was applied to the wrong number of arguments.
    ArityMismatch,

    /// There are no more fresh identifiers of some kind.
    IdsExhausted,
}

impl From<TermDBError> for ErrorKind {
    fn from(e: TermDBError) -> Self {
        ErrorKind::TermDB(e)
    }
}
