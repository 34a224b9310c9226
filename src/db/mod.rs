//! Databases for holding information relevant to reasoning.
//!
//! - The [term database](crate::db::term) holds sorts, names, variables, function symbols and applications.
//! - The [clause database](crate::db::clause) holds ground clauses, and is used by each [setup](crate::solver::setup).

pub mod clause;
pub mod keys;
pub mod term;

pub use keys::ClauseKey;
