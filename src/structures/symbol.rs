/*!
Identifiers of sorts, (primitive) functions, and names.

Each identifier is a [u32] and the identifier `0` is reserved as *null*.
Constructing a [Fun] or [Name] from `0` is a violation of a precondition, and panics.

- A [Name] is a standard name, i.e. a constant which denotes itself, so distinct names denote distinct objects.
- A [Fun] identifies a *primitive* term, i.e. a function symbol applied to names only.
  Primitive terms are what a ground literal compares to a name.
- A [Sort] partitions names, variables, and function symbols.
*/

/// The largest identifier a [Name] may take, as a name shares space with a polarity bit in a [Lit](crate::structures::literal::Lit).
pub const NAME_MAX: u32 = (1 << 31) - 1;

/// The sort of a name, variable, or function symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sort(u32);

impl Sort {
    pub fn from_id(id: u32) -> Self {
        Sort(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// The identifier of a primitive term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fun(u32);

impl Fun {
    /// A function identifier from a non-null id.
    pub fn from_id(id: u32) -> Self {
        assert!(id != 0, "null function identifier");
        Fun(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Fun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// The identifier of a standard name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(u32);

impl Name {
    /// A name from a non-null id no greater than [NAME_MAX].
    pub fn from_id(id: u32) -> Self {
        assert!(id != 0, "null name identifier");
        assert!(id <= NAME_MAX, "name identifier {id} exceeds {NAME_MAX}");
        Name(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic]
    fn null_name() {
        Name::from_id(0);
    }

    #[test]
    #[should_panic]
    fn null_fun() {
        Fun::from_id(0);
    }

    #[test]
    #[should_panic]
    fn oversized_name() {
        Name::from_id(NAME_MAX + 1);
    }
}
