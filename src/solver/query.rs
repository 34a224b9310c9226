//! Ground queries, i.e. closed objective formulas grounded over the relevant names of a solver.
//!
//! A ground query is an and/or tree over ground clauses, with negation pushed into the literals of the clauses.
//! Existential quantifiers become disjunctions over the relevant names of the sort of the quantified variable, and universal quantifiers conjunctions.
//! Disjunctions of clauses are merged into a single clause.

use std::collections::BTreeSet;

use crate::{
    db::term::TermDB,
    solver::grounder::Grounder,
    solver::setup::Setup,
    structures::{
        clause::Clause,
        formula::Formula,
        literal::{Lit, Literal},
        symbol::Fun,
    },
};

/// A ground query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroundQuery {
    Clause(Clause<Lit>),
    And(Vec<GroundQuery>),
    Or(Vec<GroundQuery>),
}

impl GroundQuery {
    /// The ground query of a closed objective formula.
    pub fn from_formula(formula: &Formula, terms: &mut TermDB, grounder: &Grounder) -> Self {
        GroundQuery::ground(formula, true, terms, grounder)
    }

    fn ground(formula: &Formula, positive: bool, terms: &mut TermDB, grounder: &Grounder) -> Self {
        match formula {
            Formula::Clause(clause) => {
                assert!(clause.is_ground(terms) || clause.valid(), "{clause:?} is not ground");
                match positive {
                    true => GroundQuery::Clause(clause.to_lits(terms)),
                    false => GroundQuery::and(
                        clause
                            .iter()
                            .map(|literal| GroundQuery::Clause(Clause::unit(literal.flip()).to_lits(terms)))
                            .collect(),
                    ),
                }
            }

            Formula::Not(alpha) => GroundQuery::ground(alpha, !positive, terms, grounder),

            Formula::Or(alpha, beta) => {
                let parts = vec![
                    GroundQuery::ground(alpha, positive, terms, grounder),
                    GroundQuery::ground(beta, positive, terms, grounder),
                ];
                match positive {
                    true => GroundQuery::or(parts),
                    false => GroundQuery::and(parts),
                }
            }

            Formula::Exists(variable, alpha) => {
                let mut parts = Vec::default();
                for name in grounder.names_of(terms.sort_of(*variable)) {
                    let instance = alpha.substitute_free(terms, *variable, name);
                    parts.push(GroundQuery::ground(&instance, positive, terms, grounder));
                }
                match positive {
                    true => GroundQuery::or(parts),
                    false => GroundQuery::and(parts),
                }
            }

            Formula::Know(..) | Formula::Cons(..) | Formula::Bel { .. } | Formula::Guarantee(_) => {
                panic!("modal formula {formula:?} given to an objective solver")
            }
        }
    }

    pub fn top() -> Self {
        GroundQuery::Clause(Clause::top())
    }

    pub fn bottom() -> Self {
        GroundQuery::Clause(Clause::bottom())
    }

    pub fn valid(&self) -> bool {
        matches!(self, GroundQuery::Clause(clause) if clause.valid())
    }

    pub fn unsatisfiable(&self) -> bool {
        matches!(self, GroundQuery::Clause(clause) if clause.unsatisfiable())
    }

    /// The conjunction of the parts, flattened and simplified.
    pub fn and(parts: Vec<GroundQuery>) -> Self {
        let mut conjuncts = Vec::default();
        for part in parts {
            match part {
                GroundQuery::And(inner) => conjuncts.extend(inner),
                part if part.valid() => {}
                part if part.unsatisfiable() => return GroundQuery::bottom(),
                part => conjuncts.push(part),
            }
        }
        match conjuncts.len() {
            0 => GroundQuery::top(),
            1 => conjuncts.remove(0),
            _ => GroundQuery::And(conjuncts),
        }
    }

    /// The disjunction of the parts, flattened and simplified, with all clauses merged.
    pub fn or(parts: Vec<GroundQuery>) -> Self {
        let mut disjuncts = Vec::default();
        let mut merged = Clause::bottom();
        for part in parts {
            match part {
                GroundQuery::Clause(clause) => merged = merged.union(&clause),
                GroundQuery::Or(inner) => {
                    for part in inner {
                        match part {
                            GroundQuery::Clause(clause) => merged = merged.union(&clause),
                            part => disjuncts.push(part),
                        }
                    }
                }
                part => disjuncts.push(part),
            }
        }

        if merged.valid() {
            return GroundQuery::top();
        }
        if !merged.unsatisfiable() {
            disjuncts.push(GroundQuery::Clause(merged));
        }
        match disjuncts.len() {
            0 => GroundQuery::bottom(),
            1 => disjuncts.remove(0),
            _ => GroundQuery::Or(disjuncts),
        }
    }

    /// The functions of the query.
    pub fn funs(&self) -> BTreeSet<Fun> {
        let mut funs = BTreeSet::default();
        self.collect_funs(&mut funs);
        funs
    }

    fn collect_funs(&self, funs: &mut BTreeSet<Fun>) {
        match self {
            GroundQuery::Clause(clause) => {
                funs.extend(clause.iter().filter(|literal| !literal.is_null()).map(|literal| literal.fun()))
            }
            GroundQuery::And(parts) | GroundQuery::Or(parts) => {
                for part in parts {
                    part.collect_funs(funs);
                }
            }
        }
    }

    /// Whether the setup entails the query without splitting.
    ///
    /// A clause must be subsumed by the setup, a conjunction needs each part, and a disjunction some part.
    pub fn holds_in(&self, setup: &mut Setup) -> bool {
        match self {
            GroundQuery::Clause(clause) => setup.subsumes(clause),
            GroundQuery::And(parts) => parts.iter().all(|part| part.holds_in(setup)),
            GroundQuery::Or(parts) => parts.iter().any(|part| part.holds_in(setup)),
        }
    }
}
