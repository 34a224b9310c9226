/*!
Reduction of modal formulas to objective formulas.

Each modal subformula is replaced, innermost first, by an objective formula which holds exactly when the modal subformula holds:
- `Know(k, φ)` by the result of testing entailment of φ at split level `k` in the least plausible sphere.
- `Cons(l, φ)` by the result of testing consistency of φ at split level `l` in the least plausible sphere.
- `Bel(k, l, A ⇒ C)` by the conjunction over spheres *p* of `cons_0 ∨ … ∨ cons_{p-1} ∨ ent_p`, where `cons_q` is the test of `A` at `l` in sphere *q* and `ent_p` the test of `¬A ∨ C` at `k` in sphere *p*.
  Spheres after the first sphere whose test of `A` is trivially valid are skipped.
- `Guarantee(φ)` by the reduction of φ, assuming consistency for each test within φ.

A test of a formula with a free variable *x* of sort *s* is split on the value of *x*, with one case for each known name *n* of *s*:

```text
x ≠ n ∨ RES(φ[x/n])
```

and a case for every other name, for which a fresh name *n₀* stands in:

```text
x = n₁ ∨ … ∨ x = nₘ ∨ RES(φ[x/n₀])[n₀/x]
```

The reduction of the formula is the conjunction of the cases.
Here, the known names are those mentioned by the knowledge base, together with those of the formula and any fresh names of enclosing cases.
*/

use crate::{
    misc::log::targets,
    solver::{grounder::SortedNames, ObjectiveSolver},
    structures::{
        clause::Clause,
        formula::{Formula, SplitLevel},
        literal::TermLiteral,
        symbol::Sort,
        term::Term,
    },
    types::err::ErrorKind,
};

use super::GenericKnowledgeBase;

/// The test made of a sphere, once a formula is closed.
#[derive(Clone, Copy, Debug)]
enum SphereTest {
    Entails(SplitLevel),
    Consistent(SplitLevel),
}

fn from_bool(value: bool) -> Formula {
    match value {
        true => Formula::top(),
        false => Formula::bottom(),
    }
}

impl<S: ObjectiveSolver> GenericKnowledgeBase<S> {
    /// The objective formula equivalent to the (normalized) formula, given the current spheres.
    ///
    /// The spheres must be up to date.
    pub(super) fn reduce_modalities(&mut self, formula: &Formula, assume_consistent: bool) -> Result<Formula, ErrorKind> {
        match formula {
            Formula::Clause(_) => Ok(formula.clone()),

            Formula::Not(alpha) => Ok(!self.reduce_modalities(alpha, assume_consistent)?),

            Formula::Or(alpha, beta) => {
                let alpha = self.reduce_modalities(alpha, assume_consistent)?;
                let beta = self.reduce_modalities(beta, assume_consistent)?;
                Ok(Formula::or(alpha, beta))
            }

            Formula::Exists(variable, alpha) => {
                let alpha = self.reduce_modalities(alpha, assume_consistent)?;
                Ok(Formula::Exists(*variable, Box::new(alpha)))
            }

            Formula::Know(k, alpha) => {
                let phi = self.reduce_modalities(alpha, assume_consistent)?.normalize(&self.terms);
                let reduced = self.res(self.least_plausible(), SphereTest::Entails(*k), &phi, assume_consistent)?;
                log::debug!(target: targets::REDUCTION, "Know({k}, {phi:?}) reduced to {reduced:?}");
                Ok(reduced)
            }

            Formula::Cons(l, alpha) => {
                let phi = self.reduce_modalities(alpha, assume_consistent)?.normalize(&self.terms);
                let reduced = self.res(self.least_plausible(), SphereTest::Consistent(*l), &phi, assume_consistent)?;
                log::debug!(target: targets::REDUCTION, "Cons({l}, {phi:?}) reduced to {reduced:?}");
                Ok(reduced)
            }

            Formula::Bel {
                k,
                l,
                antecedent,
                not_antecedent_or_consequent,
            } => {
                let antecedent = self
                    .reduce_modalities(antecedent, assume_consistent)?
                    .normalize(&self.terms);
                let not_antecedent_or_consequent = self
                    .reduce_modalities(not_antecedent_or_consequent, assume_consistent)?
                    .normalize(&self.terms);

                let mut consistent = Vec::default();
                let mut entails = Vec::default();
                for p in 0..self.spheres.len() {
                    let c = self.res(p, SphereTest::Consistent(*l), &antecedent, assume_consistent)?;
                    let e = self.res(p, SphereTest::Entails(*k), &not_antecedent_or_consequent, assume_consistent)?;
                    let last = c.trivially_valid();
                    consistent.push(c);
                    entails.push(e);
                    if last {
                        break;
                    }
                }
                log::trace!(target: targets::REDUCTION, "{} of {} spheres relevant to belief", entails.len(), self.spheres.len());

                let reduced = entails
                    .into_iter()
                    .enumerate()
                    .map(|(p, e)| consistent[..p].iter().fold(e, |phi, c| Formula::or(c.clone(), phi)))
                    .reduce(Formula::and)
                    .unwrap_or_else(Formula::top);
                log::debug!(target: targets::REDUCTION, "Bel({k}, {l}, {antecedent:?}) reduced to {reduced:?}");
                Ok(reduced)
            }

            Formula::Guarantee(alpha) => self.reduce_modalities(alpha, true),
        }
    }

    fn least_plausible(&self) -> usize {
        assert!(!self.spheres.is_empty(), "no spheres");
        self.spheres.len() - 1
    }

    /// The result of the test of sphere `p` on the objective formula, with free variables eliminated by case split.
    fn res(&mut self, p: usize, test: SphereTest, phi: &Formula, assume_consistent: bool) -> Result<Formula, ErrorKind> {
        let mut names = self.names.clone();
        for name in phi.names(&self.terms) {
            names.entry(self.terms.sort_of(name)).or_default().insert(name);
        }
        self.res_with(p, test, phi, &mut names, assume_consistent)
    }

    fn res_with(
        &mut self,
        p: usize,
        test: SphereTest,
        phi: &Formula,
        names: &mut SortedNames,
        assume_consistent: bool,
    ) -> Result<Formula, ErrorKind> {
        let Some(variable) = phi.free_vars(&self.terms).first().copied() else {
            let sphere = &mut self.spheres[p];
            let result = match test {
                SphereTest::Entails(k) => sphere.entails(&mut self.terms, k, phi, assume_consistent)?,
                SphereTest::Consistent(l) => sphere.consistent(&mut self.terms, l, phi, assume_consistent)?,
            };
            return Ok(from_bool(result));
        };

        let sort = self.terms.sort_of(variable);
        let mut psi = self.res_other_name(p, test, phi, variable, names, assume_consistent)?;

        let known: Vec<Term> = names.get(&sort).into_iter().flatten().copied().collect();
        for name in known {
            let xi = self.res_name(p, test, phi, variable, name, names, assume_consistent)?;
            psi = Formula::and(xi, psi);
        }
        Ok(psi)
    }

    /// `x ≠ n ∨ RES(φ[x/n])`
    #[allow(clippy::too_many_arguments)]
    fn res_name(
        &mut self,
        p: usize,
        test: SphereTest,
        phi: &Formula,
        variable: Term,
        name: Term,
        names: &mut SortedNames,
        assume_consistent: bool,
    ) -> Result<Formula, ErrorKind> {
        let instance = phi.substitute_free(&mut self.terms, variable, name);
        let reduced = self.res_with(p, test, &instance, names, assume_consistent)?;
        Ok(Formula::or(
            Formula::literal(TermLiteral::inequality(variable, name)),
            reduced,
        ))
    }

    /// `x = n₁ ∨ … ∨ x = nₘ ∨ RES(φ[x/n₀])[n₀/x]`, for a fresh name `n₀`.
    fn res_other_name(
        &mut self,
        p: usize,
        test: SphereTest,
        phi: &Formula,
        variable: Term,
        names: &mut SortedNames,
        assume_consistent: bool,
    ) -> Result<Formula, ErrorKind> {
        let sort = self.terms.sort_of(variable);

        let mut fresh = self.fresh_name(p, sort)?;
        let name = fresh.name;
        let instance = phi.substitute_free(&mut fresh.terms, variable, name);

        names.entry(sort).or_default().insert(name);
        let reduced = fresh.res_with(p, test, &instance, names, assume_consistent);
        names.entry(sort).or_default().remove(&name);

        let reduced = reduced?.substitute_free(&mut fresh.terms, name, variable);
        let others = names
            .get(&sort)
            .into_iter()
            .flatten()
            .map(|known| TermLiteral::equality(variable, *known));
        Ok(Formula::or(Formula::clause(Clause::new(others)), reduced))
    }

    /// A fresh name of the sort from sphere `p`, returned to the sphere when dropped.
    fn fresh_name(&mut self, p: usize, sort: Sort) -> Result<FreshName<'_, S>, ErrorKind> {
        let name = self.spheres[p].create_name(&mut self.terms, sort)?;
        Ok(FreshName { kb: self, p, name })
    }
}

/// A fresh name held on behalf of a sphere, with access to the knowledge base while held.
struct FreshName<'kb, S: ObjectiveSolver> {
    kb: &'kb mut GenericKnowledgeBase<S>,
    p: usize,
    name: Term,
}

impl<S: ObjectiveSolver> std::ops::Deref for FreshName<'_, S> {
    type Target = GenericKnowledgeBase<S>;

    fn deref(&self) -> &Self::Target {
        self.kb
    }
}

impl<S: ObjectiveSolver> std::ops::DerefMut for FreshName<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.kb
    }
}

impl<S: ObjectiveSolver> Drop for FreshName<'_, S> {
    fn drop(&mut self) {
        let kb = &mut *self.kb;
        kb.spheres[self.p].return_name(&kb.terms, self.name);
    }
}
