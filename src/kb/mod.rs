/*!
The knowledge base, to which knowledge and conditional beliefs are added and against which queries are made.

Strictly, a [GenericKnowledgeBase] and a [KnowledgeBase].
The generic knowledge base is parameterised by an [objective solver](crate::solver::ObjectiveSolver), and a knowledge base uses the [LimitedSolver](crate::solver::LimitedSolver).

# Spheres

Conditional beliefs `Bel(A ⇒ C)` are arranged into a *system of spheres*, a sequence of objective solvers ordered from most plausible to least plausible.
Each sphere holds the hard clauses of the knowledge base, together with the clauses `¬A ∨ C` of those beliefs which are not yet *assigned* to a more plausible sphere.

Spheres are built in rounds:
- A candidate sphere is formed from the hard clauses and the clauses of every unassigned belief.
- A belief is assigned to the round if the candidate sphere does not entail the negation of its antecedent.
- The candidate is kept if every antecedent of the previous round was consistent with its sphere, or if no belief was assigned in the round.
- Rounds continue so long as some belief is assigned.

There is always at least one sphere, and the least plausible sphere of a knowledge base whose beliefs are all assigned holds only the hard clauses.
Spheres are rebuilt, as a whole, before the first query after any addition to the knowledge base.

# Queries

Queries are reduced to objective formulas:
- `Know(k, α)` is entailment of α at split level `k` in the least plausible sphere.
- `Cons(l, α)` is consistency of α at split level `l` in the least plausible sphere.
- `Bel(k, l, A ⇒ C)` holds if, for every sphere *p*, either `A` is consistent with some more plausible sphere, or `¬A ∨ C` is entailed by *p*.
  As consistency is witnessed, an antecedent which the knowledge base leaves open is usually consistent only at `l > 0`.
  Spheres beyond the first with which `A` is (trivially) consistent are ignored.

Free variables of the argument of a modal operator are eliminated by case split over names, and the reduced query is decided by the real world at split level 0.

# Example

```rust
# use otter_belief::config::Config;
# use otter_belief::kb::KnowledgeBase;
# use otter_belief::structures::formula::Formula;
# use otter_belief::structures::literal::TermLiteral;
let mut kb = KnowledgeBase::from_config(Config::default());
let boolean = kb.terms.fresh_sort().unwrap();
let t = kb.terms.fresh_name(boolean).unwrap();
let bird = kb.terms.fresh_function(boolean, 0).unwrap();
let bird = kb.terms.apply(bird, []).unwrap();
let flies = kb.terms.fresh_function(boolean, 0).unwrap();
let flies = kb.terms.apply(flies, []).unwrap();

let is_bird = Formula::literal(TermLiteral::equality(bird, t));
let does_fly = Formula::literal(TermLiteral::equality(flies, t));

assert!(kb.add(&Formula::bel(1, 1, is_bird.clone(), does_fly.clone())).is_ok());

assert_eq!(kb.entails(&Formula::bel(1, 1, is_bird.clone(), does_fly.clone())), Ok(true));
assert_eq!(kb.entails(&Formula::bel(1, 1, is_bird, !does_fly)), Ok(false));
```
*/

mod generic;
pub use generic::GenericKnowledgeBase;
mod reduction;
mod specific;
pub use specific::KnowledgeBase;
mod spheres;

use crate::structures::{
    clause::Clause,
    formula::{Formula, SplitLevel},
    literal::TermLiteral,
};

/// A conditional belief, as stored in a knowledge base.
#[derive(Clone, Debug)]
pub struct Belief {
    /// The split level of the entailment test of the belief.
    pub k: SplitLevel,

    /// The split level of the consistency test of the belief.
    pub l: SplitLevel,

    pub antecedent: Formula,

    /// The clause of `¬antecedent ∨ consequent`.
    pub not_antecedent_or_consequent: Clause<TermLiteral>,

    /// Whether the belief was added under a guarantee of consistency.
    pub assume_consistent: bool,
}
