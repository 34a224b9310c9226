/*!
Grounding of quantified clauses.

A grounder keeps the (quasi-primitive, possibly quantified) clauses of a solver, and the names relevant to the clauses and to queries.
The ground setup of the clauses instantiates each variable of each clause with each relevant name of the sort of the variable.

Relevant names are:
- Names mentioned by some clause or query.
- *Plus names*, names which are not mentioned anywhere, and which stand in for every other name of the sort.

The number of plus names of a sort is the largest requirement of any clause or query:
- A clause requires as many plus names of a sort as it has variables of the sort, and one more for each sort it mentions.
- A query requires as many plus names of a sort as the largest number of variables of the sort in any clause of the query, and at least the configured minimum for each sort it mentions.

The ground setup is cached, and only rebuilt when some clause or name is added.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    config::Config,
    db::{clause::ClauseSource, term::TermDB},
    misc::log::targets,
    solver::setup::Setup,
    structures::{
        clause::Clause,
        formula::Formula,
        literal::TermLiteral,
        symbol::{Name, Sort},
        term::Term,
    },
    types::err::ErrorKind,
};

/// Names, grouped by sort.
pub type SortedNames = BTreeMap<Sort, BTreeSet<Term>>;

/// Names mentioned by nothing, grouped by sort.
pub type NamePool = BTreeMap<Sort, Vec<Term>>;

/// Grounds clauses over the relevant names.
pub struct Grounder {
    config: Config,

    clauses: Vec<Clause<TermLiteral>>,

    /// Names mentioned by clauses and queries.
    names: SortedNames,

    /// Plus names, owned by the grounder.
    plus_names: NamePool,

    /// Names adopted from elsewhere, used before any fresh name is made.
    spare: NamePool,

    /// The ground setup of the clauses, if up to date.
    setup: Option<Setup>,
}

impl Grounder {
    pub fn new(config: &Config) -> Self {
        Grounder {
            config: config.clone(),
            clauses: Vec::default(),
            names: SortedNames::default(),
            plus_names: NamePool::default(),
            spare: NamePool::default(),
            setup: None,
        }
    }

    /// Adds a quasi-primitive clause, whose variables are read universally.
    pub fn add_clause(&mut self, terms: &mut TermDB, clause: Clause<TermLiteral>) -> Result<(), ErrorKind> {
        let mut required: BTreeMap<Sort, usize> = BTreeMap::default();
        clause.traverse_terms(terms, &mut |term| {
            required.entry(terms.sort_of(term)).or_insert(1);
        });
        for variable in clause.variables(terms) {
            *required.entry(terms.sort_of(variable)).or_insert(1) += 1;
        }

        self.mention(terms, clause.names(terms));
        for (sort, count) in required {
            self.ensure_plus_names(terms, sort, count)?;
        }

        log::trace!(target: targets::GROUNDER, "Clause {clause:?}");
        self.clauses.push(clause);
        self.setup = None;
        Ok(())
    }

    /// Ensures the names of the query, and enough plus names for the query, are relevant.
    pub fn prepare_for_query(&mut self, terms: &mut TermDB, query: &Formula) -> Result<(), ErrorKind> {
        let mut required: BTreeMap<Sort, usize> = BTreeMap::default();
        let minimum = self.config.plus_names.value;

        query.traverse_clauses(&mut |clause, bound| {
            for variable in bound {
                required.entry(terms.sort_of(*variable)).or_insert(minimum);
            }
            clause.traverse_terms(terms, &mut |term| {
                required.entry(terms.sort_of(term)).or_insert(minimum);
            });

            let mut per_clause: BTreeMap<Sort, usize> = BTreeMap::default();
            for variable in clause.variables(terms) {
                *per_clause.entry(terms.sort_of(variable)).or_default() += 1;
            }
            for (sort, count) in per_clause {
                let entry = required.entry(sort).or_insert(minimum);
                *entry = (*entry).max(count);
            }
        });

        self.mention(terms, query.names(terms));
        for (sort, count) in required {
            self.ensure_plus_names(terms, sort, count)?;
        }
        Ok(())
    }

    /// Records mentioned names, invalidating the setup if any name is new.
    fn mention(&mut self, terms: &TermDB, names: BTreeSet<Term>) {
        for name in names {
            if self.names.entry(terms.sort_of(name)).or_default().insert(name) {
                self.setup = None;
            }
        }
    }

    fn ensure_plus_names(&mut self, terms: &mut TermDB, sort: Sort, count: usize) -> Result<(), ErrorKind> {
        while self.plus_names.get(&sort).map_or(0, Vec::len) < count {
            let name = self.unused_name(terms, sort)?;
            log::trace!(target: targets::GROUNDER, "Plus name {name:?} of sort {}", sort.id());
            self.plus_names.entry(sort).or_default().push(name);
            self.setup = None;
        }
        Ok(())
    }

    /// A name mentioned by nothing, taken from the spare names if possible.
    pub fn unused_name(&mut self, terms: &mut TermDB, sort: Sort) -> Result<Term, ErrorKind> {
        match self.spare.get_mut(&sort).and_then(|spare| spare.pop()) {
            Some(name) => Ok(name),
            None => Ok(terms.fresh_name(sort)?),
        }
    }

    /// Adds names mentioned by nothing to the spare names.
    pub fn adopt_names(&mut self, names: NamePool) {
        for (sort, names) in names {
            self.spare.entry(sort).or_default().extend(names);
        }
    }

    /// The plus names and spare names, leaving the grounder with neither.
    pub fn take_unused_names(&mut self) -> NamePool {
        let mut names = std::mem::take(&mut self.spare);
        for (sort, plus_names) in std::mem::take(&mut self.plus_names) {
            names.entry(sort).or_default().extend(plus_names);
        }
        self.setup = None;
        names
    }

    /// The relevant names of the sort, mentioned names first.
    pub fn names_of(&self, sort: Sort) -> Vec<Term> {
        let mentioned = self.names.get(&sort).into_iter().flatten();
        let plus = self.plus_names.get(&sort).into_iter().flatten();
        mentioned.chain(plus).copied().collect()
    }

    /// The mentioned names.
    pub fn mentioned_names(&self) -> &SortedNames {
        &self.names
    }

    /// The relevant names of the sort, as identifiers of ground literals.
    pub fn ground_names_of(&self, sort: Sort) -> Vec<Name> {
        self.names_of(sort).iter().filter_map(|name| name.as_name()).collect()
    }

    pub fn clauses(&self) -> &[Clause<TermLiteral>] {
        &self.clauses
    }

    /// The ground setup of the clauses, grounding the clauses if the setup is not up to date.
    pub fn setup(&mut self, terms: &mut TermDB) -> Result<&mut Setup, ErrorKind> {
        let setup = match self.setup.take() {
            Some(setup) => setup,
            None => self.ground(terms)?,
        };
        Ok(self.setup.insert(setup))
    }

    fn ground(&self, terms: &mut TermDB) -> Result<Setup, ErrorKind> {
        let mut setup = Setup::new(&self.config);
        let mut instances = Vec::default();

        for clause in &self.clauses {
            let variables: Vec<Term> = clause.variables(terms).into_iter().collect();
            self.instantiate(terms, clause, &variables, &mut instances);
        }

        log::debug!(target: targets::GROUNDER, "{} ground instances of {} clauses", instances.len(), self.clauses.len());
        for instance in instances {
            setup.add_clause(&instance.to_lits(terms), ClauseSource::Original)?;
        }
        Ok(setup)
    }

    /// Pushes each instance of the clause, for every assignment of relevant names to the variables.
    fn instantiate(
        &self,
        terms: &mut TermDB,
        clause: &Clause<TermLiteral>,
        variables: &[Term],
        instances: &mut Vec<Clause<TermLiteral>>,
    ) {
        match variables.split_first() {
            None => instances.push(clause.clone()),
            Some((variable, rest)) => {
                for name in self.names_of(terms.sort_of(*variable)) {
                    let instance = clause.substitute(terms, *variable, name);
                    if !instance.valid() {
                        self.instantiate(terms, &instance, rest, instances);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_names_of_clauses() {
        let mut terms = TermDB::default();
        let person = terms.fresh_sort().unwrap();
        let alice = terms.fresh_name(person).unwrap();
        let x = terms.fresh_variable(person).unwrap();
        let y = terms.fresh_variable(person).unwrap();
        let father = terms.fresh_function(person, 1).unwrap();
        let father_x = terms.apply(father, [x]).unwrap();

        let mut grounder = Grounder::new(&Config::default());
        let clause = Clause::new([TermLiteral::equality(father_x, y), TermLiteral::inequality(x, alice)]);
        assert!(grounder.add_clause(&mut terms, clause).is_ok());

        // two variables, and one more for the sort
        assert_eq!(grounder.names_of(person).len(), 1 + 3);
        assert_eq!(grounder.names_of(person)[0], alice);
    }

    #[test]
    fn grounding() {
        let mut terms = TermDB::default();
        let person = terms.fresh_sort().unwrap();
        let alice = terms.fresh_name(person).unwrap();
        let x = terms.fresh_variable(person).unwrap();
        let happy = terms.fresh_function(person, 1).unwrap();
        let happy_x = terms.apply(happy, [x]).unwrap();
        let happy_alice = terms.apply(happy, [alice]).unwrap();

        let mut grounder = Grounder::new(&Config::default());
        let clause = Clause::unit(TermLiteral::equality(happy_x, alice));
        assert!(grounder.add_clause(&mut terms, clause).is_ok());

        let ground = Clause::unit(TermLiteral::equality(happy_alice, alice)).to_lits(&terms);
        let setup = grounder.setup(&mut terms).unwrap();
        assert!(setup.subsumes(&ground));
        // alice and the two plus names
        assert_eq!(setup.units().len(), 3);
    }

    #[test]
    fn adopted_names_are_plus_names() {
        let mut terms = TermDB::default();
        let person = terms.fresh_sort().unwrap();
        let alice = terms.fresh_name(person).unwrap();
        let x = terms.fresh_variable(person).unwrap();
        let happy = terms.fresh_function(person, 1).unwrap();
        let happy_x = terms.apply(happy, [x]).unwrap();
        let clause = Clause::unit(TermLiteral::equality(happy_x, alice));

        let mut first = Grounder::new(&Config::default());
        assert!(first.add_clause(&mut terms, clause.clone()).is_ok());
        let plus_names = first.names_of(person)[1..].to_vec();
        let count = terms.name_count();

        let mut second = Grounder::new(&Config::default());
        second.adopt_names(first.take_unused_names());
        assert!(second.add_clause(&mut terms, clause).is_ok());

        assert_eq!(terms.name_count(), count);
        let mut adopted = second.names_of(person)[1..].to_vec();
        adopted.sort();
        let mut expected = plus_names;
        expected.sort();
        assert_eq!(adopted, expected);
    }
}
