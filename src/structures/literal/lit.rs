use crate::{
    generic::bits::{deinterleave, interleave, HI_MASK},
    structures::{
        literal::{Literal, TermLiteral},
        symbol::{Fun, Name},
        term::Term,
    },
};

/// A ground literal, packed into a [u64].
///
/// The id of the function is spread over the odd bits and `(name << 1) | polarity` over the even bits.
/// So, the polarity is bit 0, and two literals are about the same function exactly when their XOR has no bits in [HI_MASK].
/// All relations between literals are then a single XOR and a few masks.
///
/// The derived order is the order of the packed ids, and is only used to keep clauses sorted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Lit(u64);

impl Lit {
    /// The literal `fun = name` if `polarity`, and `fun ≠ name` otherwise.
    pub fn new(polarity: bool, fun: Fun, name: Name) -> Self {
        Lit(interleave(fun.id(), (name.id() << 1) | polarity as u32))
    }

    /// The literal `fun = name`.
    pub fn equality(fun: Fun, name: Name) -> Self {
        Lit::new(true, fun, name)
    }

    /// The literal `fun ≠ name`.
    pub fn inequality(fun: Fun, name: Name) -> Self {
        Lit::new(false, fun, name)
    }

    /// The packed representation of the literal.
    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn pos(&self) -> bool {
        self.0 & 1 == 1
    }

    pub fn neg(&self) -> bool {
        !self.pos()
    }

    /// The function of the literal.
    ///
    /// Panics on the null literal.
    pub fn fun(&self) -> Fun {
        Fun::from_id(deinterleave(self.0).0)
    }

    /// The name of the literal.
    ///
    /// Panics on the null literal.
    pub fn name(&self) -> Name {
        Name::from_id(deinterleave(self.0).1 >> 1)
    }

    /// The ground literal of a term literal between a primitive term and a name.
    ///
    /// Whether the arguments of the function term are names is not checked here, see [TermDB::is_primitive](crate::db::term::TermDB::is_primitive).
    pub fn from_term_literal(literal: TermLiteral) -> Self {
        let (Some(fun), Some(name)) = (literal.lhs().as_fun(), literal.rhs().as_name()) else {
            panic!("{literal:?} does not compare a function term to a name");
        };
        Lit::new(literal.polarity(), fun, name)
    }
}

impl Literal for Lit {
    fn null() -> Self {
        Lit(0)
    }

    fn is_null(&self) -> bool {
        self.0 == 0
    }

    fn polarity(&self) -> bool {
        self.pos()
    }

    /// Flipping the null literal does not give a meaningful literal.
    fn flip(&self) -> Self {
        Lit(self.0 ^ 1)
    }

    fn valid(&self) -> bool {
        self.is_null()
    }

    fn unsatisfiable(&self) -> bool {
        false
    }

    fn valid_pair(&self, other: &Self) -> bool {
        let x = self.0 ^ other.0;
        x == 1 || (x != 0 && self.neg() && other.neg() && x & HI_MASK == 0)
    }

    fn complementary(&self, other: &Self) -> bool {
        let x = self.0 ^ other.0;
        x == 1 || (x != 0 && self.pos() && other.pos() && x & HI_MASK == 0)
    }

    fn properly_subsumes(&self, other: &Self) -> bool {
        let x = self.0 ^ other.0;
        x != 1 && x & 1 == 1 && self.pos() && x & HI_MASK == 0
    }

    fn subsumes(&self, other: &Self) -> bool {
        let x = self.0 ^ other.0;
        x == 0 || (x != 1 && x & 1 == 1 && self.pos() && x & HI_MASK == 0)
    }
}

impl From<Lit> for TermLiteral {
    fn from(literal: Lit) -> Self {
        TermLiteral::new(
            literal.pos(),
            Term::from_fun(literal.fun()),
            Term::from_name(literal.name()),
        )
    }
}

impl std::fmt::Debug for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_null() {
            true => write!(f, "⊤"),
            false => match self.pos() {
                true => write!(f, "{} = {}", self.fun(), self.name()),
                false => write!(f, "{} ≠ {}", self.fun(), self.name()),
            },
        }
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
