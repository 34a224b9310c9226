use crate::{
    config::Config,
    db::term::TermDB,
    misc::log::targets,
    solver::{
        grounder::{NamePool, SortedNames},
        ObjectiveSolver,
    },
    structures::{
        clause::Clause,
        formula::{Formula, SplitLevel},
        literal::TermLiteral,
        term::Term,
    },
    types::err::{self, ErrorKind},
};

use super::Belief;

/// A generic knowledge base, parameterised to an objective solver.
///
/// The solver is used for each sphere, and for the real world.
///
/// # Example
///
/// ```rust
/// # use otter_belief::kb::KnowledgeBase;
/// # use otter_belief::config::Config;
/// let kb = KnowledgeBase::from_config(Config::default());
/// ```
pub struct GenericKnowledgeBase<S: ObjectiveSolver> {
    /// The configuration of the knowledge base, shared with each solver.
    pub config: Config,

    /// The term database.
    /// See [db::term](crate::db::term) for details.
    pub terms: TermDB,

    /// Hard clauses, held by every sphere.
    pub(super) knowledge: Vec<Clause<TermLiteral>>,

    /// Conditional beliefs, in the order added.
    pub(super) beliefs: Vec<Belief>,

    /// Names mentioned by knowledge, beliefs, and real-world facts.
    pub(super) names: SortedNames,

    /// The system of spheres, from most to least plausible.
    pub(super) spheres: Vec<S>,

    /// The solver of facts about the real world.
    pub(super) real_world: S,

    /// Names of the spheres of the last build, by index, for reuse by the next build.
    pub(super) spare_names: Vec<NamePool>,

    /// Whether the spheres need to be rebuilt before a query.
    pub(super) spheres_stale: bool,
}

impl<S: ObjectiveSolver> GenericKnowledgeBase<S> {
    /// Adds a hard clause, whose free variables are read universally.
    ///
    /// The clause must be quasi-primitive, else [NotQuasiPrimitive](err::KnowledgeBaseError::NotQuasiPrimitive) is returned.
    pub fn add_clause(&mut self, clause: Clause<TermLiteral>) -> Result<(), ErrorKind> {
        if !clause.is_quasi_primitive(&self.terms) {
            log::error!(target: targets::KNOWLEDGE_BASE, "{clause:?} is not quasi-primitive");
            return Err(err::KnowledgeBaseError::NotQuasiPrimitive.into());
        }

        log::trace!(target: targets::KNOWLEDGE_BASE, "Knowledge {clause:?}");
        self.mention(clause.names(&self.terms));
        self.knowledge.push(clause);
        self.spheres_stale = true;
        Ok(())
    }

    /// Adds a fact about the real world.
    ///
    /// Facts about the real world are not known, and so only matter to the objective parts of a query.
    pub fn add_real(&mut self, literal: TermLiteral) -> Result<(), ErrorKind> {
        let clause = Clause::unit(literal);
        if !clause.is_quasi_primitive(&self.terms) {
            log::error!(target: targets::KNOWLEDGE_BASE, "{literal:?} is not quasi-primitive");
            return Err(err::KnowledgeBaseError::NotQuasiPrimitive.into());
        }

        log::trace!(target: targets::KNOWLEDGE_BASE, "Real {literal:?}");
        self.mention(clause.names(&self.terms));
        self.real_world.add_clause(&mut self.terms, clause)
    }

    /// Adds a formula to the knowledge base.
    ///
    /// The (normal form of the) formula must be one of:
    /// - An objective formula expressing a universally quantified clause.
    /// - [Know](Formula::Know) of such a formula, in which case the split level is ignored.
    /// - [Bel](Formula::Bel) of an objective antecedent, such that `¬antecedent ∨ consequent` expresses a universally quantified clause.
    /// - [Guarantee](Formula::Guarantee) of such a conditional belief, in which case the consistency of the antecedent is assumed when building spheres.
    ///
    /// Otherwise, [NotClausal](err::KnowledgeBaseError::NotClausal) or [NotObjective](err::KnowledgeBaseError::NotObjective) is returned.
    ///
    /// Free variables of the antecedent of a conditional belief are read existentially, and the belief is placed in the most plausible sphere with which some instance of the antecedent is possibly consistent.
    pub fn add(&mut self, formula: &Formula) -> Result<(), ErrorKind> {
        let (formula, assume_consistent) = match formula.normal_form(&mut self.terms)? {
            Formula::Guarantee(alpha) => (*alpha, true),
            formula => (formula, false),
        };

        match formula {
            Formula::Bel {
                k,
                l,
                antecedent,
                not_antecedent_or_consequent,
            } => {
                if !antecedent.objective() || !not_antecedent_or_consequent.objective() {
                    log::error!(target: targets::KNOWLEDGE_BASE, "Belief with a modal part");
                    return Err(err::KnowledgeBaseError::NotObjective.into());
                }
                match not_antecedent_or_consequent.as_univ_clause() {
                    Some(clause) => self.add_belief(k, l, *antecedent, clause, assume_consistent),
                    None => {
                        log::error!(target: targets::KNOWLEDGE_BASE, "{not_antecedent_or_consequent:?} is not clausal");
                        Err(err::KnowledgeBaseError::NotClausal.into())
                    }
                }
            }

            formula if assume_consistent => {
                log::error!(target: targets::KNOWLEDGE_BASE, "Guarantee of {formula:?}, which is not a belief");
                Err(err::KnowledgeBaseError::NotClausal.into())
            }

            Formula::Know(_, alpha) if !alpha.objective() => {
                log::error!(target: targets::KNOWLEDGE_BASE, "Knowledge of {alpha:?}, which is not objective");
                Err(err::KnowledgeBaseError::NotObjective.into())
            }

            Formula::Know(_, alpha) => self.add_univ_clause(&alpha),

            formula => self.add_univ_clause(&formula),
        }
    }

    fn add_univ_clause(&mut self, formula: &Formula) -> Result<(), ErrorKind> {
        match formula.as_univ_clause() {
            Some(clause) => self.add_clause(clause),
            None => {
                log::error!(target: targets::KNOWLEDGE_BASE, "{formula:?} is not clausal");
                Err(err::KnowledgeBaseError::NotClausal.into())
            }
        }
    }

    fn add_belief(
        &mut self,
        k: SplitLevel,
        l: SplitLevel,
        antecedent: Formula,
        not_antecedent_or_consequent: Clause<TermLiteral>,
        assume_consistent: bool,
    ) -> Result<(), ErrorKind> {
        if !not_antecedent_or_consequent.is_quasi_primitive(&self.terms) {
            log::error!(target: targets::KNOWLEDGE_BASE, "{not_antecedent_or_consequent:?} is not quasi-primitive");
            return Err(err::KnowledgeBaseError::NotQuasiPrimitive.into());
        }

        let antecedent = antecedent
            .free_vars(&self.terms)
            .into_iter()
            .fold(antecedent, |alpha, variable| Formula::exists(variable, alpha));

        log::trace!(target: targets::KNOWLEDGE_BASE, "Belief {antecedent:?} ⇒ {not_antecedent_or_consequent:?}");
        self.mention(antecedent.names(&self.terms));
        self.mention(not_antecedent_or_consequent.names(&self.terms));
        self.beliefs.push(Belief {
            k,
            l,
            antecedent,
            not_antecedent_or_consequent,
            assume_consistent,
        });
        self.spheres_stale = true;
        Ok(())
    }

    fn mention(&mut self, names: impl IntoIterator<Item = Term>) {
        for name in names {
            self.names.entry(self.terms.sort_of(name)).or_default().insert(name);
        }
    }
}

impl<S: ObjectiveSolver> GenericKnowledgeBase<S> {
    /// Whether the knowledge base entails the formula.
    ///
    /// Modal operators of the formula are reduced against the spheres of the knowledge base, and the resulting objective formula is tested against the real world at split level 0.
    ///
    /// The formula must be closed.
    pub fn entails(&mut self, formula: &Formula) -> Result<bool, ErrorKind> {
        assert!(
            formula.free_vars(&self.terms).is_empty(),
            "{formula:?} has free variables"
        );
        self.update_spheres()?;

        let formula = formula.normal_form(&mut self.terms)?;
        let mut quasi_primitive = true;
        formula.traverse_clauses(&mut |clause, _| {
            quasi_primitive &= clause.is_quasi_primitive(&self.terms)
        });
        if !quasi_primitive {
            log::error!(target: targets::KNOWLEDGE_BASE, "{formula:?} is not quasi-primitive");
            return Err(err::KnowledgeBaseError::NotQuasiPrimitive.into());
        }

        let reduced = self.reduce_modalities(&formula, false)?.normalize(&self.terms);
        assert!(reduced.objective(), "{reduced:?} is not objective");

        let result = self.real_world.entails(&mut self.terms, 0, &reduced, false)?;
        log::info!(target: targets::REDUCTION, "{formula:?} is {result}");
        Ok(result)
    }

    /// A count of spheres, rebuilding the spheres if required.
    pub fn n_spheres(&mut self) -> Result<usize, ErrorKind> {
        self.update_spheres()?;
        Ok(self.spheres.len())
    }

    /// Whether sphere `p` entails the closed objective formula at split level `k`.
    ///
    /// Spheres are indexed from most plausible, and `p` must be less than the count of spheres.
    pub fn sphere_entails(&mut self, p: usize, k: SplitLevel, formula: &Formula) -> Result<bool, ErrorKind> {
        self.update_spheres()?;
        self.spheres[p].entails(&mut self.terms, k, formula, false)
    }

    /// Whether the closed objective formula is consistent with sphere `p` at split level `l`.
    pub fn sphere_consistent(&mut self, p: usize, l: SplitLevel, formula: &Formula) -> Result<bool, ErrorKind> {
        self.update_spheres()?;
        self.spheres[p].consistent(&mut self.terms, l, formula, false)
    }

    /// The names mentioned by knowledge, beliefs, and real-world facts, by sort.
    pub fn mentioned_names(&self) -> &SortedNames {
        &self.names
    }
}
