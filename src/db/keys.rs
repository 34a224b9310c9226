use crate::{misc::log::targets, types::err};

/// The index to a clause of a [ClauseDB](crate::db::clause::ClauseDB).
pub type ClauseIndex = u32;

/// A key to access a clause stored in the clause database.
///
/// Keys are opaque indices to the headers of the database, and remain valid so long as the clause is not removed, regardless of any growth of the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(ClauseIndex);

impl ClauseKey {
    /// The key at the given position of the database, if there are keys to spare.
    pub(crate) fn from_position(position: usize) -> Result<Self, err::ClauseDBError> {
        match ClauseIndex::try_from(position) {
            Ok(index) if index < ClauseIndex::MAX => Ok(ClauseKey(index)),
            _ => {
                log::error!(target: targets::CLAUSE_DB, "Clause keys exhausted at {position}");
                Err(err::ClauseDBError::StorageExhausted)
            }
        }
    }

    /// Extracts the index from a key.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clause({})", self.0)
    }
}
