/*!
A database of ground clauses.

The database is an arena: a vector of fixed size [headers](ClauseHeader) and a separate buffer of the literals of every clause, where the header of a clause records where in the buffer the literals of the clause are.
Clauses are accessed through [keys](ClauseKey), which are indices to the headers.

Clauses are only ever appended.
And, only the most recently stored clause may be removed, so [setups](crate::solver::setup) may backtrack by truncating the database to an earlier length.

```rust
# use otter_belief::db::clause::{ClauseDB, ClauseSource};
# use otter_belief::config::Config;
# use otter_belief::structures::clause::Clause;
# use otter_belief::structures::literal::Lit;
# use otter_belief::structures::symbol::{Fun, Name};
let mut clause_db = ClauseDB::new(&Config::default());
let (f, n) = (Fun::from_id(1), Name::from_id(1));

let key = clause_db.store(&Clause::unit(Lit::equality(f, n)), ClauseSource::Original).unwrap();
assert_eq!(clause_db.get(key), Ok(&[Lit::equality(f, n)][..]));

assert!(clause_db.pop_last().is_ok());
assert!(clause_db.get(key).is_err());
```

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

use crate::{
    config::{Activity, Config},
    db::keys::ClauseKey,
    misc::log::targets,
    structures::{clause::Clause, literal::Lit},
    types::err,
};

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A ground instance of a clause added to a solver.
    Original,

    /// A unit clause fixing the value of a term during a split.
    Split,

    /// A unit clause obtained through unit propagation.
    Propagation,
}

impl ClauseSource {
    /// Whether clauses from the source are learnt, rather than original.
    pub fn learnt(&self) -> bool {
        !matches!(self, ClauseSource::Original)
    }
}

/// The header of a stored clause.
#[derive(Clone, Debug)]
pub struct ClauseHeader {
    /// The index of the first literal of the clause in the literal buffer.
    start: usize,

    /// The number of literals of the clause.
    length: usize,

    /// Whether the clause was learnt.
    pub learnt: bool,

    /// The activity of the clause.
    pub activity: Activity,
}

/// A database of ground clauses.
pub struct ClauseDB {
    headers: Vec<ClauseHeader>,

    literals: Vec<Lit>,

    /// The multiplier applied to activity on decay.
    activity_decay: Activity,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            headers: Vec::default(),
            literals: Vec::default(),
            activity_decay: config.activity_decay.value,
        }
    }

    /// Stores a clause, returning the key to the clause.
    pub fn store(&mut self, clause: &Clause<Lit>, source: ClauseSource) -> Result<ClauseKey, err::ClauseDBError> {
        let key = ClauseKey::from_position(self.headers.len())?;

        self.headers.push(ClauseHeader {
            start: self.literals.len(),
            length: clause.size(),
            learnt: source.learnt(),
            activity: Activity::default(),
        });
        self.literals.extend_from_slice(clause.literals());

        log::trace!(target: targets::CLAUSE_DB, "{key}: {clause:?} from {source:?}");
        Ok(key)
    }

    /// The literals of the clause of the key.
    pub fn get(&self, key: ClauseKey) -> Result<&[Lit], err::ClauseDBError> {
        let header = self.header(key)?;
        Ok(&self.literals[header.start..header.start + header.length])
    }

    /// The header of the clause of the key.
    pub fn header(&self, key: ClauseKey) -> Result<&ClauseHeader, err::ClauseDBError> {
        match self.headers.get(key.index()) {
            Some(header) => Ok(header),
            None => {
                log::error!(target: targets::CLAUSE_DB, "No clause for {key}");
                Err(err::ClauseDBError::InvalidKey)
            }
        }
    }

    /// The number of stored clauses.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// The key of the most recently stored clause.
    pub fn last_key(&self) -> Option<ClauseKey> {
        self.headers.len().checked_sub(1).and_then(|position| ClauseKey::from_position(position).ok())
    }

    /// An iterator over all keys of the database, in order of storage.
    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> {
        (0..self.headers.len() as u32).filter_map(|position| ClauseKey::from_position(position as usize).ok())
    }

    /// The keys of the database, most active first, and in order of storage among clauses of equal activity.
    pub fn keys_by_activity(&self) -> Vec<ClauseKey> {
        let mut keys: Vec<ClauseKey> = self.keys().collect();
        keys.sort_by(|a, b| {
            let (a, b) = (&self.headers[a.index()], &self.headers[b.index()]);
            b.activity.total_cmp(&a.activity)
        });
        keys
    }

    /// An iterator over the literals of all clauses of the database, in order of storage.
    pub fn clauses(&self) -> impl Iterator<Item = &[Lit]> {
        self.headers
            .iter()
            .map(|header| &self.literals[header.start..header.start + header.length])
    }

    /// Removes the clause of the key, which must be the most recently stored clause.
    pub fn remove(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        match self.last_key() {
            Some(last) if last == key => self.pop_last(),
            _ => {
                log::error!(target: targets::CLAUSE_DB, "Removal of {key}, which is not the last clause");
                Err(err::ClauseDBError::NotLast)
            }
        }
    }

    /// Removes the most recently stored clause.
    pub fn pop_last(&mut self) -> Result<(), err::ClauseDBError> {
        match self.headers.pop() {
            Some(header) => {
                self.literals.truncate(header.start);
                Ok(())
            }
            None => Err(err::ClauseDBError::InvalidKey),
        }
    }

    /// Removes clauses, most recent first, until `length` clauses remain.
    pub fn truncate(&mut self, length: usize) {
        while self.headers.len() > length {
            let _ = self.pop_last();
        }
    }

    /// Bumps the activity of the clause of the key.
    pub fn bump_activity(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        match self.headers.get_mut(key.index()) {
            Some(header) => {
                header.activity += 1.0;
                Ok(())
            }
            None => Err(err::ClauseDBError::InvalidKey),
        }
    }

    /// Multiplies the activity of every clause by the decay of the database.
    pub fn decay_activity(&mut self) {
        for header in &mut self.headers {
            header.activity *= self.activity_decay;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::symbol::{Fun, Name};

    fn lit(polarity: bool, f: u32, n: u32) -> Lit {
        Lit::new(polarity, Fun::from_id(f), Name::from_id(n))
    }

    #[test]
    fn keys_survive_growth() {
        let mut clause_db = ClauseDB::new(&Config::default());
        let first = Clause::new([lit(true, 1, 1), lit(false, 2, 2)]);
        let first_key = clause_db.store(&first, ClauseSource::Original).unwrap();

        for f in 2..100 {
            let _ = clause_db.store(&Clause::new([lit(true, f, 1), lit(true, f + 1, 2)]), ClauseSource::Original);
        }

        assert_eq!(clause_db.get(first_key).unwrap(), first.literals());
        assert_eq!(clause_db.len(), 99);
    }

    #[test]
    fn stack_discipline() {
        let mut clause_db = ClauseDB::new(&Config::default());
        let a = clause_db.store(&Clause::unit(lit(true, 1, 1)), ClauseSource::Original).unwrap();
        let b = clause_db.store(&Clause::unit(lit(true, 2, 1)), ClauseSource::Split).unwrap();

        assert_eq!(clause_db.remove(a), Err(err::ClauseDBError::NotLast));
        assert!(clause_db.header(b).unwrap().learnt);
        assert!(!clause_db.header(a).unwrap().learnt);

        assert!(clause_db.remove(b).is_ok());
        assert_eq!(clause_db.last_key(), Some(a));
        assert_eq!(clause_db.get(b), Err(err::ClauseDBError::InvalidKey));

        let c = clause_db.store(&Clause::unit(lit(false, 3, 1)), ClauseSource::Propagation).unwrap();
        assert_eq!(c, b);
        assert_eq!(clause_db.get(c).unwrap(), &[lit(false, 3, 1)]);

        clause_db.truncate(0);
        assert!(clause_db.is_empty());
    }

    #[test]
    fn activity() {
        let mut clause_db = ClauseDB::new(&Config::default());
        let key = clause_db.store(&Clause::unit(lit(true, 1, 1)), ClauseSource::Original).unwrap();

        assert!(clause_db.bump_activity(key).is_ok());
        clause_db.decay_activity();
        assert!((clause_db.header(key).unwrap().activity - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn activity_order() {
        let mut clause_db = ClauseDB::new(&Config::default());
        let keys: Vec<ClauseKey> = (1..=3)
            .map(|f| clause_db.store(&Clause::unit(lit(true, f, 1)), ClauseSource::Original).unwrap())
            .collect();
        assert_eq!(clause_db.keys_by_activity(), keys);

        assert!(clause_db.bump_activity(keys[2]).is_ok());
        assert!(clause_db.bump_activity(keys[2]).is_ok());
        assert!(clause_db.bump_activity(keys[1]).is_ok());
        clause_db.decay_activity();
        assert_eq!(clause_db.keys_by_activity(), vec![keys[2], keys[1], keys[0]]);
    }
}
