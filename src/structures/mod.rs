//! Abstract structures of the library: identifiers, terms, literals, clauses, and formulas.
//!
//! Identifiers and terms are small copyable handles.
//! Whatever is needed to interpret a term (its sort, its arguments, etc.) is held in the [term database](crate::db::term).

pub mod clause;
pub mod formula;
pub mod literal;
pub mod symbol;
pub mod term;
