use crate::{
    config::Config,
    db::{clause::ClauseSource, term::TermDB},
    misc::log::targets,
    solver::{
        grounder::{Grounder, NamePool},
        query::GroundQuery,
        setup::Setup,
        ObjectiveSolver,
    },
    structures::{
        clause::Clause,
        formula::{Formula, SplitLevel},
        literal::{Lit, TermLiteral},
        symbol::{Fun, Name, Sort},
        term::Term,
    },
    types::err::{self, ErrorKind},
};

/// The terms which may be split, each with the names it may be split on.
struct Splits(Vec<(Fun, Vec<Name>)>);

impl Splits {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An objective solver for limited belief, grounding its clauses over the relevant names.
pub struct LimitedSolver {
    config: Config,

    grounder: Grounder,

    /// Names returned for reuse, by sort.
    name_pool: NamePool,
}

impl LimitedSolver {
    /// The clauses of the solver.
    pub fn clauses(&self) -> &[Clause<TermLiteral>] {
        self.grounder.clauses()
    }

    /// Grounds the query, and collects the terms to split on.
    ///
    /// On return the setup of the grounder is up to date.
    fn prepare(
        &mut self,
        terms: &mut TermDB,
        formula: &Formula,
        assume_consistent: bool,
    ) -> Result<(GroundQuery, Splits), ErrorKind> {
        assert!(formula.objective(), "{formula:?} is not objective");
        assert!(formula.free_vars(terms).is_empty(), "{formula:?} has free variables");

        self.grounder.prepare_for_query(terms, formula)?;
        let query = GroundQuery::from_formula(formula, terms, &self.grounder);

        let restrict = assume_consistent && self.config.relevant_split_terms.value;
        let setup = self.grounder.setup(terms)?;
        let funs = match restrict {
            true => setup.relevant_funs(query.funs()),
            false => {
                let mut funs = setup.funs();
                funs.extend(query.funs());
                funs
            }
        };

        let splits = funs
            .into_iter()
            .map(|fun| (fun, self.grounder.ground_names_of(terms.sort_of_fun(fun))))
            .collect();

        Ok((query, Splits(splits)))
    }
}

/// Whether the setup entails the query at split level `k`.
///
/// Conjunctions are split into their parts first, so each part may be split on differently.
fn entails(
    setup: &mut Setup,
    splits: &Splits,
    k: SplitLevel,
    query: &GroundQuery,
    eager: bool,
) -> Result<bool, err::ClauseDBError> {
    if setup.inconsistent() {
        return Ok(true);
    }
    match query {
        GroundQuery::And(parts) => {
            for part in parts {
                if !entails(setup, splits, k, part, eager)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => split(setup, splits, k, query, eager),
    }
}

fn split(
    setup: &mut Setup,
    splits: &Splits,
    k: SplitLevel,
    query: &GroundQuery,
    eager: bool,
) -> Result<bool, err::ClauseDBError> {
    if setup.inconsistent() {
        return Ok(true);
    }
    if (k == 0 || eager || splits.is_empty()) && query.holds_in(setup) {
        return Ok(true);
    }
    if k == 0 {
        return Ok(false);
    }

    for (fun, names) in &splits.0 {
        let mut all = true;
        for name in names {
            let mark = setup.checkpoint();
            setup.add_unit(Lit::equality(*fun, *name), ClauseSource::Split)?;
            let entailed = split(setup, splits, k - 1, query, eager)?;
            setup.rollback(mark);
            if !entailed {
                all = false;
                break;
            }
        }
        if all {
            log::trace!(target: targets::SOLVER, "Split on {fun} entails {query:?}");
            return Ok(true);
        }
    }
    Ok(false)
}

/// Whether some assignment of names to at most `l` terms leaves the setup consistent and establishes the query.
fn consistent(
    setup: &mut Setup,
    splits: &Splits,
    l: SplitLevel,
    query: &GroundQuery,
) -> Result<bool, err::ClauseDBError> {
    if setup.inconsistent() {
        return Ok(false);
    }
    if query.holds_in(setup) {
        return Ok(true);
    }
    if l == 0 {
        return Ok(false);
    }

    for (fun, names) in &splits.0 {
        for name in names {
            let mark = setup.checkpoint();
            setup.add_unit(Lit::equality(*fun, *name), ClauseSource::Split)?;
            let witnessed = consistent(setup, splits, l - 1, query)?;
            setup.rollback(mark);
            if witnessed {
                log::trace!(target: targets::SOLVER, "{fun} = {name} witnesses {query:?}");
                return Ok(true);
            }
        }
    }
    Ok(false)
}

impl ObjectiveSolver for LimitedSolver {
    fn from_config(config: &Config) -> Self {
        LimitedSolver {
            config: config.clone(),
            grounder: Grounder::new(config),
            name_pool: NamePool::default(),
        }
    }

    fn add_clause(&mut self, terms: &mut TermDB, clause: Clause<TermLiteral>) -> Result<(), ErrorKind> {
        self.grounder.add_clause(terms, clause)
    }

    fn entails(
        &mut self,
        terms: &mut TermDB,
        k: SplitLevel,
        formula: &Formula,
        assume_consistent: bool,
    ) -> Result<bool, ErrorKind> {
        let (query, splits) = self.prepare(terms, formula, assume_consistent)?;
        let eager = self.config.eager_sound_check.value;

        let setup = self.grounder.setup(terms)?;
        let result = entails(setup, &splits, k, &query, eager)?;
        setup.decay_activity();

        log::debug!(target: targets::SOLVER, "Entails({k}, {formula:?}) = {result}");
        Ok(result)
    }

    fn consistent(
        &mut self,
        terms: &mut TermDB,
        l: SplitLevel,
        formula: &Formula,
        assume_consistent: bool,
    ) -> Result<bool, ErrorKind> {
        let (query, splits) = self.prepare(terms, formula, assume_consistent)?;

        let setup = self.grounder.setup(terms)?;
        let result = consistent(setup, &splits, l, &query)?;

        log::debug!(target: targets::SOLVER, "Consistent({l}, {formula:?}) = {result}");
        Ok(result)
    }

    fn create_name(&mut self, terms: &mut TermDB, sort: Sort) -> Result<Term, ErrorKind> {
        let name = match self.name_pool.get_mut(&sort).and_then(|pool| pool.pop()) {
            Some(name) => name,
            None => self.grounder.unused_name(terms, sort)?,
        };
        log::trace!(target: targets::NAMES, "Acquired {name:?}");
        Ok(name)
    }

    fn return_name(&mut self, terms: &TermDB, name: Term) {
        log::trace!(target: targets::NAMES, "Returned {name:?}");
        self.name_pool.entry(terms.sort_of(name)).or_default().push(name);
    }

    fn adopt_names(&mut self, names: NamePool) {
        self.grounder.adopt_names(names);
    }

    fn into_names(mut self) -> NamePool {
        let mut names = self.grounder.take_unused_names();
        for (sort, pooled) in self.name_pool {
            names.entry(sort).or_default().extend(pooled);
        }
        names
    }
}
