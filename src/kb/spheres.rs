/*!
Construction of the system of spheres.

Spheres are built in rounds, from most plausible.
Each round forms a candidate sphere of the hard clauses and the clauses of each belief not yet assigned to a sphere.

For each unassigned belief, in the order added:
- If the candidate does not entail the negation of the antecedent at the belief's `k`, the antecedent is possibly consistent with the candidate and the belief is assigned to the round.
- For an assigned belief, if the antecedent is not consistent with the candidate at the belief's `l`, the *next* round is not plausibility consistent.

A candidate is kept if its round is plausibility consistent, or if no belief was assigned during the round.
Rounds end after the first round without an assignment, and the candidate of that round is always kept, so the least plausible sphere holds the hard clauses and the clauses of any belief whose antecedent is never possibly consistent.
*/

use crate::{
    misc::log::targets,
    solver::{grounder::NamePool, ObjectiveSolver},
    types::err::ErrorKind,
};

use super::GenericKnowledgeBase;

impl<S: ObjectiveSolver> GenericKnowledgeBase<S> {
    /// Rebuilds the spheres, if some clause or belief has been added since the last build.
    ///
    /// The spheres are rebuilt as a whole, and remain stale if the rebuild fails.
    pub(super) fn update_spheres(&mut self) -> Result<(), ErrorKind> {
        if !self.spheres_stale {
            return Ok(());
        }

        for (p, sphere) in self.spheres.drain(..).enumerate() {
            stash_names(&mut self.spare_names, p, sphere.into_names());
        }
        let mut assigned = vec![false; self.beliefs.len()];
        let mut assigned_count = 0;
        let mut plausibility_consistent = true;

        for round in 0.. {
            let last_assigned_count = assigned_count;
            let p = self.spheres.len();
            let names = self.spare_names.get_mut(p).map(std::mem::take).unwrap_or_default();
            let mut sphere = self.candidate_sphere(&assigned, names)?;
            let mut next_plausibility_consistent = true;

            for (index, belief) in self.beliefs.iter().enumerate() {
                if assigned[index] {
                    continue;
                }

                let not_antecedent = !belief.antecedent.clone();
                let entailed = sphere.entails(&mut self.terms, belief.k, &not_antecedent, belief.assume_consistent)?;
                if entailed {
                    continue;
                }

                assigned[index] = true;
                assigned_count += 1;

                let consistent =
                    sphere.consistent(&mut self.terms, belief.l, &belief.antecedent, belief.assume_consistent)?;
                if !consistent {
                    log::debug!(target: targets::SPHERES, "{:?} is possibly but not necessarily consistent", belief.antecedent);
                    next_plausibility_consistent = false;
                }
            }

            let stalled = assigned_count == last_assigned_count;
            log::debug!(
                target: targets::SPHERES,
                "Round {round}: {} of {} beliefs assigned, plausibility consistent: {plausibility_consistent}",
                assigned_count,
                self.beliefs.len()
            );

            if plausibility_consistent || stalled {
                self.spheres.push(sphere);
            } else {
                stash_names(&mut self.spare_names, p, sphere.into_names());
            }
            plausibility_consistent = next_plausibility_consistent;

            if stalled {
                break;
            }
        }

        log::info!(target: targets::SPHERES, "{} spheres from {} beliefs", self.spheres.len(), self.beliefs.len());
        self.spheres_stale = false;
        Ok(())
    }

    /// A sphere of the hard clauses, and the clauses of each unassigned belief.
    fn candidate_sphere(&mut self, assigned: &[bool], names: NamePool) -> Result<S, ErrorKind> {
        let mut sphere = S::from_config(&self.config);
        sphere.adopt_names(names);

        for clause in &self.knowledge {
            sphere.add_clause(&mut self.terms, clause.clone())?;
        }

        let unassigned = self.beliefs.iter().zip(assigned).filter(|(_, assigned)| !**assigned);
        for (belief, _) in unassigned {
            sphere.add_clause(&mut self.terms, belief.not_antecedent_or_consequent.clone())?;
        }

        Ok(sphere)
    }
}

/// Keeps the names of the sphere at index `p`, for the sphere at the same index in the next build.
fn stash_names(spare_names: &mut Vec<NamePool>, p: usize, names: NamePool) {
    if spare_names.len() <= p {
        spare_names.resize_with(p + 1, NamePool::default);
    }
    for (sort, names) in names {
        spare_names[p].entry(sort).or_default().extend(names);
    }
}
