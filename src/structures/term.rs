/*!
Terms, as handles into a [TermDB](crate::db::term::TermDB).

A [Term] is a [u32] whose lowest two bits give the [kind](TermKind) of the term and whose remaining bits give an index:

| bits  | kind                  | index                                     |
|-------|-----------------------|-------------------------------------------|
| `00`  | null                  | 0                                         |
| `01`  | [name](Name)          | the id of the name                        |
| `10`  | variable              | the id of the variable                    |
| `11`  | function application  | the id of the (interned) application      |

Applications are interned by the term database, so two terms are equal exactly when their handles are equal.
Further, the index of a primitive application (a function symbol applied to names only) is the id of the [Fun] of the term, and the index of a name is the id of the name.
So, moving between terms and the identifiers of ground literals is arithmetic.
*/

use crate::structures::symbol::{Fun, Name, Sort};

/// The number of bits given to the kind of a term.
const KIND_BITS: u32 = 2;

const KIND_MASK: u32 = (1 << KIND_BITS) - 1;

/// The largest index of any term.
pub const TERM_INDEX_MAX: u32 = u32::MAX >> KIND_BITS;

/// The kinds of (non-null) term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermKind {
    Name = 1,
    Variable = 2,
    Function = 3,
}

/// A term.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Term(u32);

impl Term {
    /// The null term.
    pub const NULL: Term = Term(0);

    pub(crate) fn new(kind: TermKind, index: u32) -> Self {
        assert!(index != 0 && index <= TERM_INDEX_MAX, "term index {index} out of range");
        Term((index << KIND_BITS) | kind as u32)
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// The kind of the term, or None if the term is null.
    pub fn kind(&self) -> Option<TermKind> {
        match self.0 & KIND_MASK {
            1 => Some(TermKind::Name),
            2 => Some(TermKind::Variable),
            3 => Some(TermKind::Function),
            _ => None,
        }
    }

    /// The index of the term, within the table of its kind.
    pub fn index(&self) -> u32 {
        self.0 >> KIND_BITS
    }

    pub fn is_name(&self) -> bool {
        self.0 & KIND_MASK == TermKind::Name as u32
    }

    pub fn is_variable(&self) -> bool {
        self.0 & KIND_MASK == TermKind::Variable as u32
    }

    pub fn is_function(&self) -> bool {
        self.0 & KIND_MASK == TermKind::Function as u32
    }

    pub fn from_name(name: Name) -> Self {
        Term::new(TermKind::Name, name.id())
    }

    pub fn as_name(&self) -> Option<Name> {
        match self.is_name() {
            true => Some(Name::from_id(self.index())),
            false => None,
        }
    }

    /// The term of a primitive function identifier.
    pub fn from_fun(fun: Fun) -> Self {
        Term::new(TermKind::Function, fun.id())
    }

    /// The function identifier of an application.
    ///
    /// Whether the application is primitive is not checked, see [TermDB::is_primitive](crate::db::term::TermDB::is_primitive).
    pub fn as_fun(&self) -> Option<Fun> {
        match self.is_function() {
            true => Some(Fun::from_id(self.index())),
            false => None,
        }
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            None => write!(f, "null"),
            Some(TermKind::Name) => write!(f, "n{}", self.index()),
            Some(TermKind::Variable) => write!(f, "x{}", self.index()),
            Some(TermKind::Function) => write!(f, "f{}", self.index()),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A function symbol, together with its sort and arity.
///
/// Function symbols are obtained from a [TermDB](crate::db::term::TermDB), and applied to arguments through the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionSymbol {
    pub(crate) id: u32,
    pub(crate) sort: Sort,
    pub(crate) arity: u8,
}

impl FunctionSymbol {
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The sort of terms built from the symbol.
    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn arity(&self) -> u8 {
        self.arity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_encoded() {
        let name = Term::from_name(Name::from_id(5));
        assert!(name.is_name() && !name.is_variable() && !name.is_function());
        assert_eq!(name.as_name(), Some(Name::from_id(5)));
        assert_eq!(name.as_fun(), None);

        let app = Term::from_fun(Fun::from_id(9));
        assert_eq!(app.kind(), Some(TermKind::Function));
        assert_eq!(app.as_fun(), Some(Fun::from_id(9)));

        let var = Term::new(TermKind::Variable, 2);
        assert!(var.is_variable());
        assert_eq!(var.index(), 2);

        assert!(Term::NULL.is_null());
        assert_eq!(Term::NULL.kind(), None);
    }
}
