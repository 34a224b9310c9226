/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [term database](crate::db::term)
    pub const TERM_DB: &str = "term_db";

    /// Logs related to [grounding](crate::solver::grounder)
    pub const GROUNDER: &str = "grounder";

    /// Logs related to unit propagation and subsumption within a [setup](crate::solver::setup)
    pub const SETUP: &str = "setup";

    /// Logs related to entailment and consistency tests of an [objective solver](crate::solver)
    pub const SOLVER: &str = "solver";

    /// Logs related to additions to a [knowledge base](crate::kb)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to the construction of [spheres](crate::kb)
    pub const SPHERES: &str = "spheres";

    /// Logs related to the reduction of modal queries
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the acquisition and release of fresh names
    pub const NAMES: &str = "names";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";
}
