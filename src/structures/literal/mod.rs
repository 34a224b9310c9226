//! Literals, i.e. (in)equalities between a term and a name.
//!
//! Literals are anything which has methods for the relations used to normalize clauses and propagate units.
//! There are two implementations:
//! - [Lit], a ground literal `f = n` or `f ≠ n` for a [primitive term](crate::structures::symbol::Fun) `f` and name `n`, packed into a single [u64].
//! - [TermLiteral], a literal over arbitrary [terms](crate::structures::term::Term), as found in quantified clauses and queries.
//!
//! The relations are:
//! - *valid*, the literal holds in every model: `t = t` or `n₁ ≠ n₂` for distinct names.
//! - *unsatisfiable*, the literal holds in no model: `t ≠ t` or `n₁ = n₂` for distinct names.
//! - A *valid pair*, the disjunction of two literals holds in every model: `t = n` and `t ≠ n`, or `t ≠ n₁` and `t ≠ n₂`.
//! - *Complementary* literals, the conjunction of two literals holds in no model: `t = n` and `t ≠ n`, or `t = n₁` and `t = n₂`.
//! - *Proper subsumption*, the literal `t = n₁` entails the distinct literal `t ≠ n₂`.
//!
//! ```rust
//! # use otter_belief::structures::literal::{Lit, Literal};
//! # use otter_belief::structures::symbol::{Fun, Name};
//! let f = Fun::from_id(1);
//! let (n, m) = (Name::from_id(1), Name::from_id(2));
//!
//! assert!(Lit::complementary(&Lit::equality(f, n), &Lit::equality(f, m)));
//! assert!(Lit::valid_pair(&Lit::inequality(f, n), &Lit::inequality(f, m)));
//! assert!(Lit::equality(f, n).subsumes(&Lit::inequality(f, m)));
//! ```
//!
//! The null literal is valid and is used to mark a valid clause.

mod lit;
pub use lit::Lit;

mod term_literal;
pub use term_literal::TermLiteral;

/// Something which has methods for the relations between literals.
pub trait Literal: Copy + Ord + std::hash::Hash + std::fmt::Debug {
    /// The null literal.
    fn null() -> Self;

    fn is_null(&self) -> bool;

    /// True for `=` and false for `≠`.
    fn polarity(&self) -> bool;

    /// The literal with the opposite polarity.
    fn flip(&self) -> Self;

    /// Whether the literal holds in every model.
    fn valid(&self) -> bool;

    /// Whether the literal holds in no model.
    fn unsatisfiable(&self) -> bool;

    /// Whether the disjunction of the literals holds in every model.
    fn valid_pair(&self, other: &Self) -> bool;

    /// Whether the conjunction of the literals holds in no model.
    fn complementary(&self, other: &Self) -> bool;

    /// Whether the literal entails the other, distinct, literal.
    fn properly_subsumes(&self, other: &Self) -> bool;

    /// Whether the literal entails the other literal.
    fn subsumes(&self, other: &Self) -> bool {
        self == other || self.properly_subsumes(other)
    }
}
