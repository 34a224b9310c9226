use crate::{
    config::Config,
    db::term::TermDB,
    solver::{grounder::SortedNames, LimitedSolver, ObjectiveSolver},
};

use super::GenericKnowledgeBase;

/// A knowledge base which uses [LimitedSolver]s for its spheres and the real world.
pub type KnowledgeBase = GenericKnowledgeBase<LimitedSolver>;

impl KnowledgeBase {
    /// Creates a knowledge base from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            real_world: LimitedSolver::from_config(&config),
            config,

            terms: TermDB::default(),
            knowledge: Vec::default(),
            beliefs: Vec::default(),
            names: SortedNames::default(),

            spheres: Vec::default(),
            spare_names: Vec::default(),
            spheres_stale: true,
        }
    }
}
