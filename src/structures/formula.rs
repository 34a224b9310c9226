/*!
Formulas of the (limited) epistemic and doxastic logic.

A [Formula] is a closed sum type:
- [Clause](Formula::Clause), a disjunction of [term literals](TermLiteral), possibly with free variables.
- [Not](Formula::Not), [Or](Formula::Or), and [Exists](Formula::Exists), the (objective) connectives.
- [Know](Formula::Know) and [Cons](Formula::Cons), for knowledge and consistency at some split level.
- [Bel](Formula::Bel), for conditional belief.
  A conditional belief stores the antecedent together with `¬antecedent ∨ consequent`, as both are needed to reduce the belief.
- [Guarantee](Formula::Guarantee), which marks that consistency of the inner formula may be assumed.

Conjunction, implication, and universal quantification are derived:
- `α ∧ β` is `¬(¬α ∨ ¬β)`.
- `α → β` is `¬α ∨ β`.
- `∀x α` is `¬∃x ¬α`.

```rust
# use otter_belief::db::term::TermDB;
# use otter_belief::structures::formula::Formula;
# use otter_belief::structures::literal::TermLiteral;
let mut terms = TermDB::default();
let sort = terms.fresh_sort().unwrap();
let t = terms.fresh_name(sort).unwrap();
let rain = terms.fresh_function(sort, 0).unwrap();
let rain = terms.apply(rain, []).unwrap();

let raining = Formula::literal(TermLiteral::equality(rain, t));
let query = Formula::know(0, raining.clone() | !raining);
assert!(!query.objective());
```
*/

use std::collections::{BTreeSet, HashMap};

use crate::{
    db::term::TermDB,
    structures::{clause::Clause, literal::TermLiteral, term::Term},
    types::err,
};

/// The number of splits permitted when testing entailment or consistency.
pub type SplitLevel = u8;

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    Clause(Clause<TermLiteral>),
    Not(Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Exists(Term, Box<Formula>),
    Know(SplitLevel, Box<Formula>),
    Cons(SplitLevel, Box<Formula>),
    Bel {
        k: SplitLevel,
        l: SplitLevel,
        antecedent: Box<Formula>,
        not_antecedent_or_consequent: Box<Formula>,
    },
    Guarantee(Box<Formula>),
}

impl Formula {
    pub fn clause(clause: Clause<TermLiteral>) -> Self {
        Formula::Clause(clause)
    }

    pub fn literal(literal: TermLiteral) -> Self {
        Formula::Clause(Clause::unit(literal))
    }

    pub fn top() -> Self {
        Formula::Clause(Clause::top())
    }

    pub fn bottom() -> Self {
        Formula::Clause(Clause::bottom())
    }

    pub fn or(alpha: Formula, beta: Formula) -> Self {
        Formula::Or(Box::new(alpha), Box::new(beta))
    }

    pub fn and(alpha: Formula, beta: Formula) -> Self {
        !Formula::or(!alpha, !beta)
    }

    pub fn implies(alpha: Formula, beta: Formula) -> Self {
        Formula::or(!alpha, beta)
    }

    pub fn exists(variable: Term, alpha: Formula) -> Self {
        assert!(variable.is_variable(), "{variable:?} is not a variable");
        Formula::Exists(variable, Box::new(alpha))
    }

    pub fn forall(variable: Term, alpha: Formula) -> Self {
        !Formula::exists(variable, !alpha)
    }

    pub fn know(k: SplitLevel, alpha: Formula) -> Self {
        Formula::Know(k, Box::new(alpha))
    }

    pub fn cons(l: SplitLevel, alpha: Formula) -> Self {
        Formula::Cons(l, Box::new(alpha))
    }

    /// The conditional belief of `consequent` given `antecedent`.
    pub fn bel(k: SplitLevel, l: SplitLevel, antecedent: Formula, consequent: Formula) -> Self {
        let not_antecedent_or_consequent = Formula::or(!antecedent.clone(), consequent);
        Formula::Bel {
            k,
            l,
            antecedent: Box::new(antecedent),
            not_antecedent_or_consequent: Box::new(not_antecedent_or_consequent),
        }
    }

    pub fn guarantee(alpha: Formula) -> Self {
        Formula::Guarantee(Box::new(alpha))
    }
}

impl std::ops::Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        Formula::Not(Box::new(self))
    }
}

impl std::ops::BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        Formula::or(self, rhs)
    }
}

impl std::ops::BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        Formula::and(self, rhs)
    }
}

impl From<Clause<TermLiteral>> for Formula {
    fn from(clause: Clause<TermLiteral>) -> Self {
        Formula::Clause(clause)
    }
}

impl From<TermLiteral> for Formula {
    fn from(literal: TermLiteral) -> Self {
        Formula::literal(literal)
    }
}

impl Formula {
    /// Whether the formula is free of modal operators.
    pub fn objective(&self) -> bool {
        match self {
            Formula::Clause(_) => true,
            Formula::Not(alpha) | Formula::Exists(_, alpha) => alpha.objective(),
            Formula::Or(alpha, beta) => alpha.objective() && beta.objective(),
            Formula::Know(..) | Formula::Cons(..) | Formula::Bel { .. } | Formula::Guarantee(_) => false,
        }
    }

    /// Whether the formula is valid, by inspection of its structure only.
    pub fn trivially_valid(&self) -> bool {
        match self {
            Formula::Clause(clause) => clause.valid(),
            Formula::Not(alpha) => alpha.trivially_invalid(),
            Formula::Or(alpha, beta) => alpha.trivially_valid() || beta.trivially_valid(),
            Formula::Exists(_, alpha) => alpha.trivially_valid(),
            Formula::Know(..) | Formula::Cons(..) | Formula::Bel { .. } | Formula::Guarantee(_) => false,
        }
    }

    /// Whether the formula is unsatisfiable, by inspection of its structure only.
    pub fn trivially_invalid(&self) -> bool {
        match self {
            Formula::Clause(clause) => clause.unsatisfiable(),
            Formula::Not(alpha) => alpha.trivially_valid(),
            Formula::Or(alpha, beta) => alpha.trivially_invalid() && beta.trivially_invalid(),
            Formula::Exists(_, alpha) => alpha.trivially_invalid(),
            Formula::Know(..) | Formula::Cons(..) | Formula::Bel { .. } | Formula::Guarantee(_) => false,
        }
    }

    /// Calls `f` on each clause of the formula, together with the variables bound at the clause.
    pub fn traverse_clauses<'a>(&'a self, f: &mut impl FnMut(&'a Clause<TermLiteral>, &[Term])) {
        fn walk<'a>(
            formula: &'a Formula,
            bound: &mut Vec<Term>,
            f: &mut impl FnMut(&'a Clause<TermLiteral>, &[Term]),
        ) {
            match formula {
                Formula::Clause(clause) => f(clause, bound),
                Formula::Not(alpha) | Formula::Know(_, alpha) | Formula::Cons(_, alpha) | Formula::Guarantee(alpha) => {
                    walk(alpha, bound, f)
                }
                Formula::Or(alpha, beta)
                | Formula::Bel {
                    antecedent: alpha,
                    not_antecedent_or_consequent: beta,
                    ..
                } => {
                    walk(alpha, bound, f);
                    walk(beta, bound, f);
                }
                Formula::Exists(variable, alpha) => {
                    bound.push(*variable);
                    walk(alpha, bound, f);
                    bound.pop();
                }
            }
        }
        walk(self, &mut Vec::default(), f)
    }

    /// Calls `f` on every term and subterm of the formula, except the variables of quantifiers.
    pub fn traverse_terms(&self, terms: &TermDB, f: &mut impl FnMut(Term)) {
        self.traverse_clauses(&mut |clause, _| clause.traverse_terms(terms, &mut *f));
    }

    /// The free variables of the formula.
    pub fn free_vars(&self, terms: &TermDB) -> BTreeSet<Term> {
        let mut free = BTreeSet::default();
        self.traverse_clauses(&mut |clause, bound| {
            for variable in clause.variables(terms) {
                if !bound.contains(&variable) {
                    free.insert(variable);
                }
            }
        });
        free
    }

    /// The names of the formula.
    pub fn names(&self, terms: &TermDB) -> BTreeSet<Term> {
        let mut names = BTreeSet::default();
        self.traverse_terms(terms, &mut |term| {
            if term.is_name() {
                names.insert(term);
            }
        });
        names
    }

    /// The formula with each free instance of `from` replaced by `to`.
    ///
    /// If `from` is a variable, instances bound by a quantifier are left as they are.
    pub fn substitute_free(&self, terms: &mut TermDB, from: Term, to: Term) -> Formula {
        match self {
            Formula::Clause(clause) => Formula::Clause(clause.substitute(terms, from, to)),
            Formula::Not(alpha) => !alpha.substitute_free(terms, from, to),
            Formula::Or(alpha, beta) => {
                let alpha = alpha.substitute_free(terms, from, to);
                Formula::or(alpha, beta.substitute_free(terms, from, to))
            }
            Formula::Exists(variable, _) if *variable == from => self.clone(),
            Formula::Exists(variable, alpha) => {
                Formula::Exists(*variable, Box::new(alpha.substitute_free(terms, from, to)))
            }
            Formula::Know(k, alpha) => Formula::know(*k, alpha.substitute_free(terms, from, to)),
            Formula::Cons(l, alpha) => Formula::cons(*l, alpha.substitute_free(terms, from, to)),
            Formula::Bel {
                k,
                l,
                antecedent,
                not_antecedent_or_consequent,
            } => {
                let antecedent = antecedent.substitute_free(terms, from, to);
                Formula::Bel {
                    k: *k,
                    l: *l,
                    antecedent: Box::new(antecedent),
                    not_antecedent_or_consequent: Box::new(not_antecedent_or_consequent.substitute_free(terms, from, to)),
                }
            }
            Formula::Guarantee(alpha) => Formula::guarantee(alpha.substitute_free(terms, from, to)),
        }
    }

    /// The normal form of the formula, in which every literal is quasi-primitive.
    ///
    /// The formula is [rectified](Formula::rectify), [normalized](Formula::normalize), [flattened](Formula::flatten), and normalized again.
    pub fn normal_form(&self, terms: &mut TermDB) -> Result<Formula, err::TermDBError> {
        let rectified = self.rectify(terms)?;
        let flat = rectified.normalize(terms).flatten(terms)?;
        Ok(flat.normalize(terms))
    }

    /// An equivalent formula in which no quantifier binds a variable that is free in the formula, or bound by a quantifier to the left.
    pub fn rectify(&self, terms: &mut TermDB) -> Result<Formula, err::TermDBError> {
        let mut renaming: HashMap<Term, Term> = self.free_vars(terms).into_iter().map(|x| (x, x)).collect();
        self.rectify_with(terms, &mut renaming)
    }

    fn rectify_with(&self, terms: &mut TermDB, renaming: &mut HashMap<Term, Term>) -> Result<Formula, err::TermDBError> {
        let formula = match self {
            Formula::Clause(clause) => {
                let mut clause = clause.clone();
                for variable in clause.variables(terms) {
                    match renaming.get(&variable) {
                        Some(renamed) if *renamed != variable => clause = clause.substitute(terms, variable, *renamed),
                        _ => {}
                    }
                }
                Formula::Clause(clause)
            }

            Formula::Not(alpha) => !alpha.rectify_with(terms, renaming)?,

            Formula::Or(alpha, beta) => {
                let alpha = alpha.rectify_with(terms, renaming)?;
                let beta = beta.rectify_with(terms, renaming)?;
                Formula::or(alpha, beta)
            }

            Formula::Exists(variable, alpha) => match renaming.get(variable).copied() {
                Some(previous) => {
                    let sort = terms.sort_of(*variable);
                    let renamed = terms.fresh_variable(sort)?;
                    renaming.insert(*variable, renamed);
                    let alpha = alpha.rectify_with(terms, renaming);
                    renaming.insert(*variable, previous);
                    Formula::Exists(renamed, Box::new(alpha?))
                }
                None => {
                    renaming.insert(*variable, *variable);
                    Formula::Exists(*variable, Box::new(alpha.rectify_with(terms, renaming)?))
                }
            },

            Formula::Know(k, alpha) => Formula::know(*k, alpha.rectify_with(terms, renaming)?),
            Formula::Cons(l, alpha) => Formula::cons(*l, alpha.rectify_with(terms, renaming)?),
            Formula::Bel {
                k,
                l,
                antecedent,
                not_antecedent_or_consequent,
            } => Formula::Bel {
                k: *k,
                l: *l,
                antecedent: Box::new(antecedent.rectify_with(terms, renaming)?),
                not_antecedent_or_consequent: Box::new(not_antecedent_or_consequent.rectify_with(terms, renaming)?),
            },
            Formula::Guarantee(alpha) => Formula::guarantee(alpha.rectify_with(terms, renaming)?),
        };
        Ok(formula)
    }

    /// An equivalent formula in which every literal is quasi-primitive.
    ///
    /// Each clause is [flattened](Clause::flatten), and the fresh variables are quantified universally.
    /// Beneath an odd number of negations, a unit clause `f(g) = n` becomes `∃v (g = v ∧ f(v) = n)`, so that the negation of the result remains clausal.
    pub fn flatten(&self, terms: &mut TermDB) -> Result<Formula, err::TermDBError> {
        self.flatten_with(terms, false)
    }

    fn flatten_with(&self, terms: &mut TermDB, negated: bool) -> Result<Formula, err::TermDBError> {
        use crate::structures::literal::Literal;

        let formula = match self {
            Formula::Clause(clause) if clause.is_quasi_primitive(terms) => Formula::Clause(clause.clone()),

            Formula::Clause(clause) if negated && clause.is_unit() => {
                let flipped = Clause::unit(clause.literals()[0].flip());
                let (flat, fresh) = flipped.flatten(terms)?;
                fresh
                    .into_iter()
                    .rev()
                    .fold(!Formula::Clause(flat), |alpha, variable| Formula::exists(variable, alpha))
            }

            Formula::Clause(clause) => {
                let (flat, fresh) = clause.flatten(terms)?;
                fresh
                    .into_iter()
                    .rev()
                    .fold(Formula::Clause(flat), |alpha, variable| Formula::forall(variable, alpha))
            }

            Formula::Not(alpha) => !alpha.flatten_with(terms, !negated)?,

            Formula::Or(alpha, beta) => {
                let alpha = alpha.flatten_with(terms, negated)?;
                let beta = beta.flatten_with(terms, negated)?;
                Formula::or(alpha, beta)
            }

            Formula::Exists(variable, alpha) => Formula::Exists(*variable, Box::new(alpha.flatten_with(terms, negated)?)),

            Formula::Know(k, alpha) => Formula::know(*k, alpha.flatten_with(terms, false)?),
            Formula::Cons(l, alpha) => Formula::cons(*l, alpha.flatten_with(terms, false)?),
            Formula::Bel {
                k,
                l,
                antecedent,
                not_antecedent_or_consequent,
            } => Formula::Bel {
                k: *k,
                l: *l,
                antecedent: Box::new(antecedent.flatten_with(terms, false)?),
                not_antecedent_or_consequent: Box::new(not_antecedent_or_consequent.flatten_with(terms, false)?),
            },
            Formula::Guarantee(alpha) => Formula::guarantee(alpha.flatten_with(terms, negated)?),
        };
        Ok(formula)
    }

    /// An equivalent formula, simplified.
    ///
    /// - Double negations are removed.
    /// - The negation of a unit clause is the unit clause of the flipped literal.
    /// - Disjunctions of clauses are merged into a single clause.
    /// - Valid and unsatisfiable parts of disjunctions are folded.
    /// - Quantifiers without an instance of their variable are dropped.
    pub fn normalize(&self, terms: &TermDB) -> Formula {
        use crate::structures::literal::Literal;

        match self {
            Formula::Clause(clause) => Formula::Clause(clause.clone()),

            Formula::Not(alpha) => match alpha.normalize(terms) {
                Formula::Not(beta) => *beta,
                Formula::Clause(clause) if clause.valid() => Formula::bottom(),
                Formula::Clause(clause) if clause.unsatisfiable() => Formula::top(),
                Formula::Clause(clause) if clause.is_unit() => Formula::literal(clause.literals()[0].flip()),
                beta => !beta,
            },

            Formula::Or(alpha, beta) => {
                let alpha = alpha.normalize(terms);
                let beta = beta.normalize(terms);
                if alpha.trivially_valid() || beta.trivially_valid() {
                    return Formula::top();
                }
                if alpha.trivially_invalid() {
                    return beta;
                }
                if beta.trivially_invalid() {
                    return alpha;
                }
                match (alpha, beta) {
                    (Formula::Clause(a), Formula::Clause(b)) => Formula::Clause(a.union(&b)),
                    (alpha, beta) => Formula::or(alpha, beta),
                }
            }

            Formula::Exists(variable, alpha) => {
                let alpha = alpha.normalize(terms);
                match alpha.free_vars(terms).contains(variable) {
                    true => Formula::Exists(*variable, Box::new(alpha)),
                    false => alpha,
                }
            }

            Formula::Know(k, alpha) => Formula::know(*k, alpha.normalize(terms)),
            Formula::Cons(l, alpha) => Formula::cons(*l, alpha.normalize(terms)),
            Formula::Bel {
                k,
                l,
                antecedent,
                not_antecedent_or_consequent,
            } => Formula::Bel {
                k: *k,
                l: *l,
                antecedent: Box::new(antecedent.normalize(terms)),
                not_antecedent_or_consequent: Box::new(not_antecedent_or_consequent.normalize(terms)),
            },
            Formula::Guarantee(alpha) => Formula::guarantee(alpha.normalize(terms)),
        }
    }

    /// The clause the formula expresses, with free variables read universally, if there is one.
    ///
    /// Clauses, universal quantifications of clauses, negations of literals, and disjunctions of these have a clause.
    pub fn as_univ_clause(&self) -> Option<Clause<TermLiteral>> {
        use crate::structures::literal::Literal;

        match self {
            Formula::Clause(clause) => Some(clause.clone()),
            Formula::Or(alpha, beta) => Some(alpha.as_univ_clause()?.union(&beta.as_univ_clause()?)),
            Formula::Not(alpha) => match alpha.as_ref() {
                Formula::Not(beta) => beta.as_univ_clause(),
                Formula::Exists(_, beta) => (!beta.as_ref().clone()).as_univ_clause(),
                Formula::Clause(clause) if clause.valid() => Some(Clause::bottom()),
                Formula::Clause(clause) if clause.unsatisfiable() => Some(Clause::top()),
                Formula::Clause(clause) if clause.is_unit() => Some(Clause::unit(clause.literals()[0].flip())),
                _ => None,
            },
            Formula::Exists(..) | Formula::Know(..) | Formula::Cons(..) | Formula::Bel { .. } | Formula::Guarantee(_) => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{literal::Literal, term::FunctionSymbol};

    struct Fixture {
        terms: TermDB,
        x: Term,
        n: Term,
        m: Term,
        f: Term,
        fx: Term,
        f1: FunctionSymbol,
    }

    fn fixture() -> Fixture {
        let mut terms = TermDB::default();
        let sort = terms.fresh_sort().unwrap();
        let n = terms.fresh_name(sort).unwrap();
        let m = terms.fresh_name(sort).unwrap();
        let x = terms.fresh_variable(sort).unwrap();
        let f0 = terms.fresh_function(sort, 0).unwrap();
        let f1 = terms.fresh_function(sort, 1).unwrap();
        let f = terms.apply(f0, []).unwrap();
        let fx = terms.apply(f1, [x]).unwrap();
        Fixture { terms, x, n, m, f, fx, f1 }
    }

    #[test]
    fn double_negation() {
        let fixture = fixture();
        let alpha = Formula::literal(TermLiteral::equality(fixture.f, fixture.n))
            | Formula::literal(TermLiteral::equality(fixture.fx, fixture.m));
        let twice = !!alpha.clone();
        assert_eq!(twice.normalize(&fixture.terms), alpha.normalize(&fixture.terms));
    }

    #[test]
    fn clauses_merge() {
        let fixture = fixture();
        let alpha = Formula::literal(TermLiteral::equality(fixture.f, fixture.n))
            | !Formula::literal(TermLiteral::equality(fixture.f, fixture.m));
        let expected = Clause::new([
            TermLiteral::equality(fixture.f, fixture.n),
            TermLiteral::inequality(fixture.f, fixture.m),
        ]);
        assert_eq!(alpha.normalize(&fixture.terms), Formula::Clause(expected));
    }

    #[test]
    fn free_variables() {
        let fixture = fixture();
        let body = Formula::literal(TermLiteral::equality(fixture.fx, fixture.n));
        assert!(body.free_vars(&fixture.terms).contains(&fixture.x));

        let closed = Formula::exists(fixture.x, body.clone());
        assert!(closed.free_vars(&fixture.terms).is_empty());
        assert!(Formula::know(0, closed).free_vars(&fixture.terms).is_empty());
    }

    #[test]
    fn substitution_respects_binding() {
        let mut fixture = fixture();
        let body = Formula::literal(TermLiteral::equality(fixture.fx, fixture.n));
        let bound = Formula::exists(fixture.x, body.clone());

        assert_eq!(bound.substitute_free(&mut fixture.terms, fixture.x, fixture.m), bound);
        let ground = body.substitute_free(&mut fixture.terms, fixture.x, fixture.m);
        assert!(ground.free_vars(&fixture.terms).is_empty());
        assert!(ground.names(&fixture.terms).contains(&fixture.m));
    }

    #[test]
    fn universal_clauses() {
        let fixture = fixture();
        let literal = TermLiteral::equality(fixture.fx, fixture.n);
        let universal = Formula::forall(fixture.x, Formula::literal(literal) | !Formula::literal(TermLiteral::equality(fixture.f, fixture.m)));

        let expected = Clause::new([literal, TermLiteral::inequality(fixture.f, fixture.m)]);
        assert_eq!(universal.normalize(&fixture.terms).as_univ_clause(), Some(expected));

        let existential = Formula::exists(fixture.x, Formula::literal(literal));
        assert_eq!(existential.as_univ_clause(), None);
        assert_eq!(Formula::and(Formula::literal(literal), Formula::literal(literal)).as_univ_clause(), None);
    }

    #[test]
    fn rectification() {
        let mut fixture = fixture();
        let alpha = Formula::exists(fixture.x, Formula::literal(TermLiteral::equality(fixture.fx, fixture.n)));
        let beta = Formula::exists(fixture.x, Formula::literal(TermLiteral::equality(fixture.fx, fixture.m)));

        let Formula::Or(alpha, beta) = (alpha | beta).rectify(&mut fixture.terms).unwrap() else {
            panic!("rectification changed the connective");
        };
        let (Formula::Exists(y, _), Formula::Exists(z, beta)) = (*alpha, *beta) else {
            panic!("rectification dropped a quantifier");
        };
        assert_eq!(y, fixture.x);
        assert_ne!(z, fixture.x);
        assert_eq!(beta.free_vars(&fixture.terms), BTreeSet::from([z]));

        let free = Formula::literal(TermLiteral::equality(fixture.fx, fixture.n));
        let shadowed = free.clone() | Formula::exists(fixture.x, free.clone());
        let rectified = shadowed.rectify(&mut fixture.terms).unwrap();
        assert_eq!(rectified.free_vars(&fixture.terms), BTreeSet::from([fixture.x]));
        let Formula::Or(_, beta) = rectified else {
            panic!("rectification changed the connective");
        };
        assert!(matches!(*beta, Formula::Exists(z, _) if z != fixture.x));
    }

    #[test]
    fn flattening() {
        let mut fixture = fixture();
        let nested = fixture.terms.apply(fixture.f1, [fixture.f]).unwrap();
        let alpha = Formula::literal(TermLiteral::equality(nested, fixture.n));
        assert!(!matches!(&alpha, Formula::Clause(clause) if clause.is_quasi_primitive(&fixture.terms)));

        let flat = alpha.normal_form(&mut fixture.terms).unwrap();
        assert!(flat.free_vars(&fixture.terms).is_empty());
        flat.traverse_clauses(&mut |clause, bound| {
            assert!(clause.is_quasi_primitive(&fixture.terms));
            assert_eq!(bound.len(), 1);
        });
        let clause = flat.as_univ_clause().unwrap();
        assert_eq!(clause.literals().len(), 2);
        assert!(clause.literals().contains(&TermLiteral::inequality(fixture.f, bound_variable(&flat))));
    }

    #[test]
    fn flattening_beneath_negation() {
        let mut fixture = fixture();
        let nested = fixture.terms.apply(fixture.f1, [fixture.f]).unwrap();
        let none = !Formula::exists(fixture.x, Formula::literal(TermLiteral::equality(nested, fixture.x)));

        let flat = none.normal_form(&mut fixture.terms).unwrap();
        flat.traverse_clauses(&mut |clause, _| assert!(clause.is_quasi_primitive(&fixture.terms)));
        let clause = flat.as_univ_clause().unwrap();
        assert_eq!(clause.literals().len(), 2);
        assert!(clause.iter().all(|literal| !literal.polarity()));
    }

    #[test]
    fn flat_formulas_are_unchanged() {
        let mut fixture = fixture();
        let alpha = Formula::know(1, Formula::literal(TermLiteral::equality(fixture.fx, fixture.n)));
        assert_eq!(alpha.flatten(&mut fixture.terms).unwrap(), alpha);
        assert_eq!(alpha.rectify(&mut fixture.terms).unwrap(), alpha);
    }

    fn bound_variable(formula: &Formula) -> Term {
        let mut variables = Vec::default();
        formula.traverse_clauses(&mut |_, bound| variables.extend_from_slice(bound));
        variables[0]
    }

    #[test]
    fn trivial() {
        let fixture = fixture();
        assert!(Formula::top().trivially_valid());
        assert!((!Formula::bottom()).trivially_valid());
        assert!(Formula::bottom().trivially_invalid());
        assert!(Formula::literal(TermLiteral::equality(fixture.n, fixture.n)).trivially_valid());
        assert!(!Formula::literal(TermLiteral::equality(fixture.f, fixture.n)).trivially_valid());
    }
}
