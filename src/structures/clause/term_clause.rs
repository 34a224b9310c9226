//! Methods for clauses of [term literals](TermLiteral), which rely on a [TermDB] to interpret terms.

use std::collections::{BTreeSet, HashMap};

use crate::{
    db::term::TermDB,
    structures::{
        clause::Clause,
        literal::{Lit, Literal, TermLiteral},
        term::Term,
    },
    types::err,
};

/// Whether the literal compares a function of names and variables, or a variable, to a name or variable.
fn quasi_primitive_literal(terms: &TermDB, literal: &TermLiteral) -> bool {
    let lhs = literal.lhs();
    let rhs = literal.rhs();
    (terms.is_quasi_primitive(lhs) || lhs.is_variable() || lhs.is_name()) && (rhs.is_name() || rhs.is_variable())
}

impl Clause<TermLiteral> {
    /// Calls `f` on every term and subterm of the clause.
    pub fn traverse_terms(&self, terms: &TermDB, f: &mut impl FnMut(Term)) {
        for literal in self.iter().filter(|literal| !literal.is_null()) {
            terms.traverse(literal.lhs(), &mut *f);
            terms.traverse(literal.rhs(), &mut *f);
        }
    }

    /// The variables of the clause.
    pub fn variables(&self, terms: &TermDB) -> BTreeSet<Term> {
        let mut variables = BTreeSet::default();
        self.traverse_terms(terms, &mut |term| {
            if term.is_variable() {
                variables.insert(term);
            }
        });
        variables
    }

    /// The names of the clause.
    pub fn names(&self, terms: &TermDB) -> BTreeSet<Term> {
        let mut names = BTreeSet::default();
        self.traverse_terms(terms, &mut |term| {
            if term.is_name() {
                names.insert(term);
            }
        });
        names
    }

    /// The function terms of the clause, outermost only.
    pub fn functions(&self) -> impl Iterator<Item = Term> + '_ {
        self.iter()
            .flat_map(|literal| [literal.lhs(), literal.rhs()])
            .filter(|term| term.is_function())
    }

    pub fn is_ground(&self, terms: &TermDB) -> bool {
        self.iter()
            .filter(|literal| !literal.is_null())
            .all(|literal| terms.is_ground(literal.lhs()) && terms.is_ground(literal.rhs()))
    }

    /// Whether every literal compares a function of names and variables, or a variable, to a name or variable.
    pub fn is_quasi_primitive(&self, terms: &TermDB) -> bool {
        self.iter()
            .filter(|literal| !literal.is_null())
            .all(|literal| quasi_primitive_literal(terms, literal))
    }

    /// A quasi-primitive clause equivalent to the clause under universal quantification of the returned variables.
    ///
    /// Each nested function term `t` is replaced by a fresh variable `v` together with the literal `t ≠ v`, so `f(g) = n` becomes `g ≠ v ∨ f(v) = n`.
    /// Of two function terms compared by a literal, the term of lesser arity is replaced.
    /// Where the clause already has a literal `t ≠ x` for some variable `x`, other instances of `t` are replaced by `x`.
    pub fn flatten(&self, terms: &mut TermDB) -> Result<(Self, Vec<Term>), err::TermDBError> {
        let mut replacements: HashMap<Term, Term> = self
            .iter()
            .filter(|literal| !literal.polarity() && literal.lhs().is_function() && literal.rhs().is_variable())
            .map(|literal| (literal.lhs(), literal.rhs()))
            .collect();
        let mut fresh = Vec::default();

        let mut queue: Vec<TermLiteral> = self.literals().to_vec();
        let mut kept = Vec::with_capacity(queue.len());

        while let Some(literal) = queue.pop() {
            if literal.is_null() || quasi_primitive_literal(terms, &literal) {
                kept.push(literal);
                continue;
            }

            let (lhs, rhs) = (literal.lhs(), literal.rhs());
            let nested = match rhs.is_function() {
                true => match terms.arguments(lhs).len() < terms.arguments(rhs).len() {
                    true => lhs,
                    false => rhs,
                },
                false => match terms.arguments(lhs).iter().find(|argument| argument.is_function()) {
                    Some(argument) => *argument,
                    None => {
                        kept.push(literal);
                        continue;
                    }
                },
            };

            let variable = match replacements.get(&nested) {
                Some(variable) => *variable,
                None => {
                    let sort = terms.sort_of(nested);
                    let variable = terms.fresh_variable(sort)?;
                    replacements.insert(nested, variable);
                    fresh.push(variable);
                    variable
                }
            };

            let lhs = terms.substitute(lhs, nested, variable);
            let rhs = terms.substitute(rhs, nested, variable);
            queue.push(TermLiteral::new(literal.polarity(), lhs, rhs));
            queue.push(TermLiteral::inequality(nested, variable));
        }

        Ok((Clause::new(kept), fresh))
    }

    /// The normalized clause with each instance of `from` replaced by `to`.
    pub fn substitute(&self, terms: &mut TermDB, from: Term, to: Term) -> Self {
        Clause::new(self.iter().map(|literal| match literal.is_null() {
            true => *literal,
            false => TermLiteral::new(
                literal.polarity(),
                terms.substitute(literal.lhs(), from, to),
                terms.substitute(literal.rhs(), from, to),
            ),
        }))
    }

    /// The ground clause of a clause whose literals each compare a primitive term to a name.
    ///
    /// Literals between names are already settled by normalization, so any other literal is a violation of a precondition.
    pub fn to_lits(&self, terms: &TermDB) -> Clause<Lit> {
        if self.valid() {
            return Clause::top();
        }
        Clause::new(self.iter().map(|literal| {
            assert!(
                terms.is_primitive(literal.lhs()) && literal.rhs().is_name(),
                "{literal:?} is not primitive"
            );
            Lit::from_term_literal(*literal)
        }))
    }
}

impl From<&Clause<Lit>> for Clause<TermLiteral> {
    fn from(clause: &Clause<Lit>) -> Self {
        match clause.valid() {
            true => Clause::top(),
            false => clause.map(|literal| TermLiteral::from(*literal)),
        }
    }
}
