//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause is always *normalized* on construction:
//! - Unsatisfiable literals are dropped.
//! - A literal which entails another literal of the clause is dropped, as is any repeat of a literal.
//! - A valid literal, or a valid pair of literals, collapses the clause to the *valid clause*, a unit clause of the null literal.
//! - The remaining literals are sorted.
//!
//! So, the empty clause is (the only representation of) falsum, and the valid clause is (the only representation of) verum, unless the clause was built with the promise that it is not valid (see [Clause::new_not_valid]).
//!
//! ```rust
//! # use otter_belief::structures::clause::Clause;
//! # use otter_belief::structures::literal::{Lit, Literal};
//! # use otter_belief::structures::symbol::{Fun, Name};
//! let f = Fun::from_id(1);
//! let (n, m) = (Name::from_id(1), Name::from_id(2));
//!
//! let clause = Clause::new([Lit::equality(f, n), Lit::inequality(f, m), Lit::inequality(f, m)]);
//! assert_eq!(clause.literals(), &[Lit::inequality(f, m)]);
//!
//! let clause = Clause::new([Lit::equality(f, n), Lit::inequality(f, n)]);
//! assert!(clause.valid());
//! ```

mod term_clause;

use crate::structures::literal::{Lit, Literal};

/// A normalized clause.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause<L: Literal = Lit> {
    literals: Vec<L>,
}

/// The result of propagating a unit literal through a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationResult {
    /// No literal of the clause was complementary to the unit.
    Unchanged,

    /// Some literals complementary to the unit were removed.
    Propagated,

    /// The unit entails the clause, which is left as it was.
    Subsumed,
}

impl<L: Literal> Clause<L> {
    /// A normalized clause of the given literals.
    pub fn new(literals: impl IntoIterator<Item = L>) -> Self {
        Clause::normalize(literals.into_iter().collect(), true)
    }

    /// A normalized clause of the given literals, on the promise that no two literals form a valid pair.
    ///
    /// Valid literals still collapse the clause.
    pub fn new_not_valid(literals: impl IntoIterator<Item = L>) -> Self {
        Clause::normalize(literals.into_iter().collect(), false)
    }

    /// The empty clause, i.e. falsum.
    pub fn bottom() -> Self {
        Clause {
            literals: Vec::default(),
        }
    }

    /// The valid clause, i.e. verum.
    pub fn top() -> Self {
        Clause {
            literals: vec![L::null()],
        }
    }

    pub fn unit(literal: L) -> Self {
        Clause::new([literal])
    }

    fn normalize(input: Vec<L>, check_valid: bool) -> Self {
        let mut kept: Vec<L> = Vec::with_capacity(input.len());

        for (index, literal) in input.iter().enumerate() {
            if literal.valid() {
                return Clause::top();
            }
            if literal.unsatisfiable() {
                continue;
            }
            if kept.iter().any(|other| literal.subsumes(other)) {
                continue;
            }
            if input[index + 1..].iter().any(|later| literal.properly_subsumes(later)) {
                continue;
            }
            if check_valid && kept.iter().any(|other| literal.valid_pair(other)) {
                return Clause::top();
            }

            let position = kept.partition_point(|other| other < literal);
            kept.insert(position, *literal);
        }

        Clause { literals: kept }
    }

    /// The literals of the clause, in order.
    pub fn literals(&self) -> &[L] {
        &self.literals
    }

    pub fn iter(&self) -> impl Iterator<Item = &L> {
        self.literals.iter()
    }

    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Whether the clause holds in every model.
    pub fn valid(&self) -> bool {
        match self.literals.as_slice() {
            [literal] => literal.is_null(),
            literals => literals
                .iter()
                .enumerate()
                .any(|(index, a)| literals[index + 1..].iter().any(|b| a.valid_pair(b))),
        }
    }

    /// Whether the clause holds in no model, i.e. whether the clause is empty.
    pub fn unsatisfiable(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the clause entails the other clause.
    ///
    /// That is, whether every literal of the clause subsumes some literal of the other clause.
    /// Any clause subsumes a valid clause, and the empty clause subsumes any clause.
    pub fn subsumes(&self, other: &Self) -> bool {
        if other.valid() {
            return true;
        }
        self.literals
            .iter()
            .all(|a| other.literals.iter().any(|b| a.subsumes(b)))
    }

    /// Propagates the unit literal through the clause.
    ///
    /// If the unit subsumes some literal the clause is left as it was, and otherwise each literal complementary to the unit is removed.
    pub fn propagate_unit(&mut self, unit: L) -> PropagationResult {
        if self.literals.iter().any(|literal| unit.subsumes(literal)) {
            return PropagationResult::Subsumed;
        }

        let before = self.literals.len();
        self.literals.retain(|literal| !unit.complementary(literal));
        match self.literals.len() < before {
            true => PropagationResult::Propagated,
            false => PropagationResult::Unchanged,
        }
    }

    /// Propagates each of the units through the clause, stopping early if some unit subsumes the clause.
    pub fn propagate_units<'u>(&mut self, units: impl IntoIterator<Item = &'u L>) -> PropagationResult
    where
        L: 'u,
    {
        let mut result = PropagationResult::Unchanged;
        for unit in units {
            match self.propagate_unit(*unit) {
                PropagationResult::Subsumed => return PropagationResult::Subsumed,
                PropagationResult::Propagated => result = PropagationResult::Propagated,
                PropagationResult::Unchanged => {}
            }
        }
        result
    }

    /// The clause of the literals of both clauses.
    pub fn union(&self, other: &Self) -> Self {
        Clause::new(self.literals.iter().chain(other.literals.iter()).copied())
    }

    /// The normalized clause of the image of each literal.
    pub fn map<M: Literal>(&self, f: impl FnMut(&L) -> M) -> Clause<M> {
        Clause::new(self.literals.iter().map(f))
    }
}

impl<L: Literal> std::fmt::Debug for Clause<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.literals)
    }
}

impl<L: Literal> From<L> for Clause<L> {
    fn from(literal: L) -> Self {
        Clause::unit(literal)
    }
}
