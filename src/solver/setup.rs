/*!
A setup, i.e. a set of ground clauses closed under unit propagation.

Clauses of a setup are stored in a [ClauseDB].
Units, whether given or derived by propagation, are stored as clauses too, and a list of the unit literals is kept alongside the database.

Splitting a term adds a unit clause to the setup and, once the split has been explored, the setup is restored by truncating the database to the length recorded in a [checkpoint](Setup::checkpoint).

Entailment by a setup is sound but incomplete: a clause is entailed if the setup is inconsistent, if some unit subsumes a literal of the clause, or if some clause of the setup, after propagation of the units, subsumes the clause.
*/

use std::collections::BTreeSet;

use crate::{
    config::Config,
    db::clause::{ClauseDB, ClauseSource},
    misc::log::targets,
    structures::{
        clause::{Clause, PropagationResult},
        literal::{Lit, Literal},
        symbol::{Fun, Name},
    },
    types::err,
};

/// A record of the state of a setup, to which the setup may be [rolled back](Setup::rollback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupMark {
    clauses: usize,
    units: usize,
    inconsistent: bool,
}

/// A set of ground clauses, closed under unit propagation.
pub struct Setup {
    clause_db: ClauseDB,

    /// The unit literals of the setup, in order of addition.
    units: Vec<Lit>,

    /// Whether unit propagation derived the empty clause.
    inconsistent: bool,
}

impl Setup {
    pub fn new(config: &Config) -> Self {
        Setup {
            clause_db: ClauseDB::new(config),
            units: Vec::default(),
            inconsistent: false,
        }
    }

    /// Whether unit propagation derived the empty clause.
    pub fn inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// The unit literals of the setup.
    pub fn units(&self) -> &[Lit] {
        &self.units
    }

    /// The number of clauses of the setup.
    pub fn len(&self) -> usize {
        self.clause_db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clause_db.is_empty()
    }

    /// Adds a clause to the setup and propagates units to a fixpoint.
    pub fn add_clause(&mut self, clause: &Clause<Lit>, source: ClauseSource) -> Result<(), err::ClauseDBError> {
        if self.inconsistent || clause.valid() {
            return Ok(());
        }
        if clause.unsatisfiable() {
            log::trace!(target: targets::SETUP, "Empty clause from {source:?}");
            self.inconsistent = true;
            return Ok(());
        }

        self.clause_db.store(clause, source)?;
        if let [unit] = clause.literals() {
            self.assert_unit(*unit);
        }
        self.propagate()
    }

    /// Adds a unit clause to the setup and propagates units to a fixpoint.
    pub fn add_unit(&mut self, literal: Lit, source: ClauseSource) -> Result<(), err::ClauseDBError> {
        self.add_clause(&Clause::unit(literal), source)
    }

    /// Records a unit literal, noting inconsistency if the literal is complementary to some other unit.
    fn assert_unit(&mut self, literal: Lit) {
        if self.units.iter().any(|unit| unit.complementary(&literal)) {
            log::trace!(target: targets::SETUP, "{literal:?} conflicts with a unit");
            self.inconsistent = true;
        } else if !self.units.iter().any(|unit| unit.subsumes(&literal)) {
            self.units.push(literal);
        }
    }

    /// Propagates the units through all clauses, storing each derived unit, until no further unit is derived.
    fn propagate(&mut self) -> Result<(), err::ClauseDBError> {
        while !self.inconsistent {
            let mut derived: Vec<Lit> = Vec::default();

            for literals in self.clause_db.clauses().filter(|literals| literals.len() > 1) {
                let mut clause = Clause::new_not_valid(literals.iter().copied());
                if clause.propagate_units(&self.units) == PropagationResult::Subsumed {
                    continue;
                }
                match clause.literals() {
                    [] => {
                        log::trace!(target: targets::SETUP, "Propagation falsified {literals:?}");
                        self.inconsistent = true;
                        return Ok(());
                    }
                    [unit] => {
                        if !derived.contains(unit) {
                            derived.push(*unit)
                        }
                    }
                    _ => {}
                }
            }

            if derived.is_empty() {
                return Ok(());
            }

            for literal in derived {
                self.clause_db.store(&Clause::unit(literal), ClauseSource::Propagation)?;
                self.assert_unit(literal);
            }
        }
        Ok(())
    }

    /// Whether the setup entails the clause, without splitting.
    pub fn subsumes(&mut self, clause: &Clause<Lit>) -> bool {
        if self.inconsistent || clause.valid() {
            return true;
        }
        if clause.unsatisfiable() {
            return false;
        }
        if self
            .units
            .iter()
            .any(|unit| clause.iter().any(|literal| unit.subsumes(literal)))
        {
            return true;
        }

        // Clauses which subsumed earlier queries are tried first.
        let subsuming = self.clause_db.keys_by_activity().into_iter().find(|key| {
            let Ok(literals) = self.clause_db.get(*key) else {
                return false;
            };
            if literals.len() <= 1 {
                return false;
            }
            let mut stored = Clause::new_not_valid(literals.iter().copied());
            stored.propagate_units(&self.units) != PropagationResult::Subsumed && stored.subsumes(clause)
        });

        match subsuming {
            Some(key) => {
                let _ = self.clause_db.bump_activity(key);
                true
            }
            None => false,
        }
    }

    /// The name the setup fixes the function to, if any.
    pub fn determines(&self, fun: Fun) -> Option<Name> {
        self.units
            .iter()
            .find(|unit| unit.pos() && unit.fun() == fun)
            .map(|unit| unit.name())
    }

    /// The functions mentioned in the setup.
    pub fn funs(&self) -> BTreeSet<Fun> {
        self.clause_db
            .clauses()
            .flat_map(|literals| literals.iter().map(|literal| literal.fun()))
            .collect()
    }

    /// The functions connected to the given functions by some chain of shared clauses, excluding those the setup determines.
    pub fn relevant_funs(&self, seeds: impl IntoIterator<Item = Fun>) -> BTreeSet<Fun> {
        let mut relevant = BTreeSet::default();
        let mut queue: Vec<Fun> = seeds.into_iter().collect();

        while let Some(fun) = queue.pop() {
            if !relevant.insert(fun) {
                continue;
            }
            for literals in self.clause_db.clauses() {
                if literals.iter().any(|literal| literal.fun() == fun) {
                    queue.extend(
                        literals
                            .iter()
                            .map(|literal| literal.fun())
                            .filter(|other| !relevant.contains(other)),
                    );
                }
            }
        }

        relevant.retain(|fun| self.determines(*fun).is_none());
        relevant
    }

    /// A record of the current state of the setup.
    pub fn checkpoint(&self) -> SetupMark {
        SetupMark {
            clauses: self.clause_db.len(),
            units: self.units.len(),
            inconsistent: self.inconsistent,
        }
    }

    /// Restores the setup to the state of the mark.
    ///
    /// Marks must be used in the reverse order they were made.
    pub fn rollback(&mut self, mark: SetupMark) {
        self.clause_db.truncate(mark.clauses);
        self.units.truncate(mark.units);
        self.inconsistent = mark.inconsistent;
    }

    pub fn decay_activity(&mut self) {
        self.clause_db.decay_activity();
    }
}
