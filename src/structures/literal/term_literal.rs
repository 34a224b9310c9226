use crate::structures::{literal::Literal, term::Term};

/// A literal `lhs = rhs` or `lhs ≠ rhs` between two terms.
///
/// The sides are oriented on construction: functions before variables before names, and otherwise the greater term on the left.
/// So, `n = f(x)` and `f(x) = n` are the same literal, and whenever a literal involves a function term, the function term is on the left.
///
/// The null literal is `null = null`, which is valid.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermLiteral {
    lhs: Term,
    rhs: Term,
    pos: bool,
}

impl TermLiteral {
    pub fn new(polarity: bool, lhs: Term, rhs: Term) -> Self {
        let (lhs, rhs) = match (lhs.kind(), lhs) < (rhs.kind(), rhs) {
            true => (rhs, lhs),
            false => (lhs, rhs),
        };
        TermLiteral {
            lhs,
            rhs,
            pos: polarity,
        }
    }

    /// The literal `lhs = rhs`.
    pub fn equality(lhs: Term, rhs: Term) -> Self {
        TermLiteral::new(true, lhs, rhs)
    }

    /// The literal `lhs ≠ rhs`.
    pub fn inequality(lhs: Term, rhs: Term) -> Self {
        TermLiteral::new(false, lhs, rhs)
    }

    pub fn lhs(&self) -> Term {
        self.lhs
    }

    pub fn rhs(&self) -> Term {
        self.rhs
    }

    /// Whether both sides are names, in which case the literal is either valid or unsatisfiable.
    fn between_names(&self) -> bool {
        self.lhs.is_name() && self.rhs.is_name()
    }

    /// Whether the literals share a left side and have distinct names on their right sides.
    fn distinct_names_of_same_term(&self, other: &Self) -> bool {
        self.lhs == other.lhs && self.rhs != other.rhs && self.rhs.is_name() && other.rhs.is_name()
    }
}

impl Literal for TermLiteral {
    fn null() -> Self {
        TermLiteral {
            lhs: Term::NULL,
            rhs: Term::NULL,
            pos: true,
        }
    }

    fn is_null(&self) -> bool {
        self.lhs.is_null()
    }

    fn polarity(&self) -> bool {
        self.pos
    }

    fn flip(&self) -> Self {
        TermLiteral {
            pos: !self.pos,
            ..*self
        }
    }

    fn valid(&self) -> bool {
        match self.lhs == self.rhs {
            true => self.pos,
            false => !self.pos && self.between_names(),
        }
    }

    fn unsatisfiable(&self) -> bool {
        match self.lhs == self.rhs {
            true => !self.pos,
            false => self.pos && self.between_names(),
        }
    }

    fn valid_pair(&self, other: &Self) -> bool {
        (self.lhs == other.lhs && self.rhs == other.rhs && self.pos != other.pos)
            || (!self.pos && !other.pos && self.distinct_names_of_same_term(other))
    }

    fn complementary(&self, other: &Self) -> bool {
        (self.lhs == other.lhs && self.rhs == other.rhs && self.pos != other.pos)
            || (self.pos && other.pos && self.distinct_names_of_same_term(other))
    }

    fn properly_subsumes(&self, other: &Self) -> bool {
        self.pos && !other.pos && self.distinct_names_of_same_term(other)
    }
}

impl std::fmt::Debug for TermLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pos {
            true => write!(f, "{:?} = {:?}", self.lhs, self.rhs),
            false => write!(f, "{:?} ≠ {:?}", self.lhs, self.rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{
        symbol::{Fun, Name},
        term::TermKind,
    };

    fn name(id: u32) -> Term {
        Term::from_name(Name::from_id(id))
    }

    #[test]
    fn orientation() {
        let f = Term::from_fun(Fun::from_id(1));
        let x = Term::new(TermKind::Variable, 1);
        let n = name(1);

        assert_eq!(TermLiteral::equality(n, f), TermLiteral::equality(f, n));
        assert_eq!(TermLiteral::equality(n, f).lhs(), f);
        assert_eq!(TermLiteral::inequality(n, x).lhs(), x);
        assert_eq!(TermLiteral::equality(name(2), name(1)), TermLiteral::equality(name(1), name(2)));
    }

    #[test]
    fn names() {
        let (n, m) = (name(1), name(2));

        assert!(TermLiteral::equality(n, n).valid());
        assert!(TermLiteral::inequality(n, m).valid());
        assert!(TermLiteral::inequality(n, n).unsatisfiable());
        assert!(TermLiteral::equality(n, m).unsatisfiable());

        assert!(TermLiteral::null().valid());
        assert!(TermLiteral::null().is_null());
    }

    #[test]
    fn relations() {
        let x = Term::new(TermKind::Variable, 1);
        let (n, m) = (name(1), name(2));

        assert!(TermLiteral::inequality(x, n).valid_pair(&TermLiteral::inequality(x, m)));
        assert!(TermLiteral::equality(x, n).complementary(&TermLiteral::equality(x, m)));
        assert!(TermLiteral::equality(x, n).properly_subsumes(&TermLiteral::inequality(x, m)));
        assert!(!TermLiteral::equality(x, n).valid());
        assert!(!TermLiteral::equality(x, n).unsatisfiable());
    }
}
