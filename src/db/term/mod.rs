/*!
A database of sorts, names, variables, function symbols, and (interned) function applications.

The database is the explicit context for all [terms](crate::structures::term).
Anything which builds, inspects, or substitutes terms takes a reference to the database.

```rust
# use otter_belief::db::term::TermDB;
let mut terms = TermDB::default();
let person = terms.fresh_sort().unwrap();
let alice = terms.fresh_name(person).unwrap();
let x = terms.fresh_variable(person).unwrap();
let father = terms.fresh_function(person, 1).unwrap();

let father_x = terms.apply(father, [x]).unwrap();
let father_alice = terms.apply(father, [alice]).unwrap();

assert!(terms.is_quasi_primitive(father_x));
assert!(!terms.is_primitive(father_x));
assert!(terms.is_primitive(father_alice));
assert_eq!(terms.substitute(father_x, x, alice), father_alice);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets,
    structures::{
        symbol::{Fun, Sort},
        term::{FunctionSymbol, Term, TermKind, TERM_INDEX_MAX},
    },
    types::err,
};

/// A function symbol applied to some arguments.
#[derive(Clone, PartialEq, Eq, Hash)]
struct Application {
    symbol: FunctionSymbol,
    arguments: Box<[Term]>,
}

/// The database of terms.
///
/// Index 0 of each table is a placeholder, as the index 0 is reserved for null terms.
pub struct TermDB {
    sort_count: u32,

    /// The sort of each name, indexed by name.
    name_sorts: Vec<Sort>,

    /// The sort of each variable, indexed by variable.
    variable_sorts: Vec<Sort>,

    /// Function symbols, indexed by id.
    symbols: Vec<FunctionSymbol>,

    /// Applications, indexed by the index of their term.
    applications: Vec<Application>,

    /// The index of each application.
    application_indices: HashMap<Application, u32>,
}

impl Default for TermDB {
    fn default() -> Self {
        let placeholder = FunctionSymbol {
            id: 0,
            sort: Sort::from_id(0),
            arity: 0,
        };
        TermDB {
            sort_count: 0,
            name_sorts: vec![Sort::from_id(0)],
            variable_sorts: vec![Sort::from_id(0)],
            symbols: vec![placeholder],
            applications: vec![Application {
                symbol: placeholder,
                arguments: Box::default(),
            }],
            application_indices: HashMap::default(),
        }
    }
}

/// Checks a fresh index is available, given the current length of a table.
fn next_index(table_length: usize) -> Result<u32, err::TermDBError> {
    match u32::try_from(table_length) {
        Ok(index) if index <= TERM_INDEX_MAX => Ok(index),
        _ => {
            log::error!(target: targets::TERM_DB, "Identifiers exhausted");
            Err(err::TermDBError::IdsExhausted)
        }
    }
}

impl TermDB {
    pub fn fresh_sort(&mut self) -> Result<Sort, err::TermDBError> {
        match self.sort_count.checked_add(1) {
            Some(count) => {
                self.sort_count = count;
                Ok(Sort::from_id(count))
            }
            None => Err(err::TermDBError::IdsExhausted),
        }
    }

    /// A name of the given sort, distinct from all other names.
    pub fn fresh_name(&mut self, sort: Sort) -> Result<Term, err::TermDBError> {
        let index = next_index(self.name_sorts.len())?;
        self.name_sorts.push(sort);
        log::trace!(target: targets::TERM_DB, "Name n{index} of sort {}", sort.id());
        Ok(Term::new(TermKind::Name, index))
    }

    /// A variable of the given sort, distinct from all other variables.
    pub fn fresh_variable(&mut self, sort: Sort) -> Result<Term, err::TermDBError> {
        let index = next_index(self.variable_sorts.len())?;
        self.variable_sorts.push(sort);
        Ok(Term::new(TermKind::Variable, index))
    }

    /// A function symbol of the given sort and arity, distinct from all other symbols.
    pub fn fresh_function(&mut self, sort: Sort, arity: u8) -> Result<FunctionSymbol, err::TermDBError> {
        let id = next_index(self.symbols.len())?;
        let symbol = FunctionSymbol { id, sort, arity };
        self.symbols.push(symbol);
        Ok(symbol)
    }

    /// The term of the symbol applied to the arguments.
    ///
    /// The arguments may be arbitrary terms, though clauses and queries only make use of functions applied to names and variables.
    pub fn apply(
        &mut self,
        symbol: FunctionSymbol,
        arguments: impl IntoIterator<Item = Term>,
    ) -> Result<Term, err::TermDBError> {
        let arguments: Box<[Term]> = arguments.into_iter().collect();
        if arguments.len() != symbol.arity as usize {
            log::error!(target: targets::TERM_DB, "{} arguments given to a symbol of arity {}", arguments.len(), symbol.arity);
            return Err(err::TermDBError::ArityMismatch);
        }
        assert!(arguments.iter().all(|argument| !argument.is_null()), "null argument");
        self.intern(Application { symbol, arguments })
    }

    fn intern(&mut self, application: Application) -> Result<Term, err::TermDBError> {
        if let Some(index) = self.application_indices.get(&application) {
            return Ok(Term::new(TermKind::Function, *index));
        }
        let index = next_index(self.applications.len())?;
        self.applications.push(application.clone());
        self.application_indices.insert(application, index);
        Ok(Term::new(TermKind::Function, index))
    }

    /// The number of names in the database.
    pub fn name_count(&self) -> usize {
        self.name_sorts.len() - 1
    }

    /// The number of applications in the database.
    pub fn application_count(&self) -> usize {
        self.applications.len() - 1
    }

    /// The sort of a (non-null) term.
    pub fn sort_of(&self, term: Term) -> Sort {
        match term.kind() {
            Some(TermKind::Name) => self.name_sorts[term.index() as usize],
            Some(TermKind::Variable) => self.variable_sorts[term.index() as usize],
            Some(TermKind::Function) => self.applications[term.index() as usize].symbol.sort,
            None => panic!("the null term has no sort"),
        }
    }

    /// The sort of a primitive term, by identifier.
    pub fn sort_of_fun(&self, fun: Fun) -> Sort {
        self.sort_of(Term::from_fun(fun))
    }

    /// The arguments of a function term, and otherwise an empty slice.
    pub fn arguments(&self, term: Term) -> &[Term] {
        match term.is_function() {
            true => &self.applications[term.index() as usize].arguments,
            false => &[],
        }
    }

    /// The symbol of a function term.
    pub fn symbol_of(&self, term: Term) -> Option<FunctionSymbol> {
        match term.is_function() {
            true => Some(self.applications[term.index() as usize].symbol),
            false => None,
        }
    }

    /// Whether the term contains no variables.
    pub fn is_ground(&self, term: Term) -> bool {
        match term.kind() {
            Some(TermKind::Name) => true,
            Some(TermKind::Variable) | None => false,
            Some(TermKind::Function) => self.arguments(term).iter().all(|a| self.is_ground(*a)),
        }
    }

    /// Whether the term is a function applied to names only.
    pub fn is_primitive(&self, term: Term) -> bool {
        term.is_function() && self.arguments(term).iter().all(|a| a.is_name())
    }

    /// Whether the term is a function applied to names and variables only.
    pub fn is_quasi_primitive(&self, term: Term) -> bool {
        term.is_function()
            && self
                .arguments(term)
                .iter()
                .all(|a| a.is_name() || a.is_variable())
    }

    /// Calls `f` on the term and each of its subterms, outermost first.
    pub fn traverse(&self, term: Term, f: &mut impl FnMut(Term)) {
        f(term);
        for argument in self.arguments(term) {
            self.traverse(*argument, &mut *f);
        }
    }

    /// The term with each instance of `from` replaced by `to`.
    pub fn substitute(&mut self, term: Term, from: Term, to: Term) -> Term {
        if term == from {
            return to;
        }
        if !term.is_function() {
            return term;
        }

        let application = &self.applications[term.index() as usize];
        let symbol = application.symbol;
        let arguments = application.arguments.clone();
        let substituted: Box<[Term]> = arguments
            .iter()
            .map(|argument| self.substitute(*argument, from, to))
            .collect();

        if substituted == arguments {
            return term;
        }
        match self.intern(Application {
            symbol,
            arguments: substituted,
        }) {
            Ok(term) => term,
            Err(e) => panic!("{e:?} while substituting {from:?} by {to:?} in {term:?}"),
        }
    }
}
