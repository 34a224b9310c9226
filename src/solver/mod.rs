/*!
Objective solvers, which decide (limited) entailment and consistency of objective formulas.

Each sphere of a [knowledge base](crate::kb) is an objective solver, as is the real world.
The knowledge base only interacts with a solver through the [ObjectiveSolver] trait, and the canonical implementation of the trait is the [LimitedSolver].

# Limited belief

Entailment at split level *k* is sound but incomplete, and tractable for fixed *k*:
- At level 0, a clause is entailed only if unit propagation and subsumption establish the clause.
- At level *k + 1*, some term may be split: if for every relevant name *n* the setup extended with *term = n* entails the query at level *k*, the query is entailed.

Consistency at split level *l* is witnessed: a query is consistent at level *l* if the setup is consistent and, after fixing at most *l* terms to names, the query is established without further splits.
*/

pub mod grounder;
mod limited;
pub mod query;
pub mod setup;

pub use limited::LimitedSolver;

use crate::{
    config::Config,
    db::term::TermDB,
    solver::grounder::NamePool,
    structures::{clause::Clause, formula::Formula, formula::SplitLevel, literal::TermLiteral, symbol::Sort, term::Term},
    types::err::ErrorKind,
};

/// Something which decides entailment and consistency of objective formulas from a collection of clauses.
pub trait ObjectiveSolver {
    /// A solver with no clauses, configured by `config`.
    fn from_config(config: &Config) -> Self;

    /// Adds a quasi-primitive clause, whose variables are read universally.
    fn add_clause(&mut self, terms: &mut TermDB, clause: Clause<TermLiteral>) -> Result<(), ErrorKind>;

    /// Whether the clauses entail the closed objective formula at split level `k`.
    ///
    /// With `assume_consistent`, splits may be restricted to terms relevant to the formula.
    fn entails(
        &mut self,
        terms: &mut TermDB,
        k: SplitLevel,
        formula: &Formula,
        assume_consistent: bool,
    ) -> Result<bool, ErrorKind>;

    /// Whether the closed objective formula is consistent with the clauses at split level `l`.
    fn consistent(
        &mut self,
        terms: &mut TermDB,
        l: SplitLevel,
        formula: &Formula,
        assume_consistent: bool,
    ) -> Result<bool, ErrorKind>;

    /// A name of the sort, not used by the solver until [returned](ObjectiveSolver::return_name).
    fn create_name(&mut self, terms: &mut TermDB, sort: Sort) -> Result<Term, ErrorKind>;

    /// Returns a name obtained by [create_name](ObjectiveSolver::create_name), for reuse.
    fn return_name(&mut self, terms: &TermDB, name: Term);

    /// Names mentioned by no clause or query of the solver, for the solver to use before making fresh names.
    fn adopt_names(&mut self, names: NamePool);

    /// The names made or adopted by the solver for its own use, such as plus names.
    ///
    /// None of the names are mentioned by a clause of the solver, so the names may be [adopted](ObjectiveSolver::adopt_names) by a solver which replaces this solver.
    fn into_names(self) -> NamePool;
}
