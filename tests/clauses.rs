use otter_belief::{
    config::Config,
    db::{
        clause::{ClauseDB, ClauseSource},
        term::TermDB,
    },
    structures::{
        clause::Clause,
        literal::{Lit, Literal, TermLiteral},
        symbol::{Fun, Name},
    },
    types::err,
};

use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_clause(rng: &mut impl Rng) -> Clause {
    let size = rng.gen_range(0..6);
    Clause::new((0..size).map(|_| {
        let fun = Fun::from_id(rng.gen_range(1..=3));
        let name = Name::from_id(rng.gen_range(1..=3));
        Lit::new(rng.gen_bool(0.5), fun, name)
    }))
}

mod normalization {
    use super::*;

    #[test]
    fn idempotent() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let clause = random_clause(&mut rng);
            assert_eq!(Clause::new(clause.literals().iter().copied()), clause);
        }
    }

    #[test]
    fn sorted_without_redundancy() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let clause = random_clause(&mut rng);
            if clause.valid() {
                continue;
            }
            let literals = clause.literals();
            assert!(literals.windows(2).all(|pair| pair[0] < pair[1]));
            for a in literals {
                for b in literals {
                    if a != b {
                        assert!(!a.subsumes(b));
                    }
                }
            }
        }
    }

    #[test]
    fn names_settle_literals() {
        let mut terms = TermDB::default();
        let sort = terms.fresh_sort().unwrap();
        let n = terms.fresh_name(sort).unwrap();
        let m = terms.fresh_name(sort).unwrap();

        assert!(Clause::unit(TermLiteral::equality(n, n)).valid());
        assert!(Clause::unit(TermLiteral::inequality(n, n)).unsatisfiable());
        assert!(Clause::unit(TermLiteral::inequality(n, m)).valid());
        assert!(Clause::unit(TermLiteral::equality(n, m)).unsatisfiable());
    }

    #[test]
    fn valid_pairs_collapse() {
        let f = Fun::from_id(1);
        let (n, m) = (Name::from_id(1), Name::from_id(2));

        assert!(Clause::new([Lit::equality(f, n), Lit::inequality(f, n)]).valid());
        assert!(Clause::new([Lit::inequality(f, n), Lit::inequality(f, m)]).valid());
        assert!(!Clause::new([Lit::equality(f, n), Lit::equality(f, m)]).valid());
    }

    #[test]
    fn entailing_literals_are_dropped() {
        let f = Fun::from_id(1);
        let (n, m) = (Name::from_id(1), Name::from_id(2));

        // f = n entails f ≠ m, and so adds nothing to the disjunction.
        let clause = Clause::new([Lit::equality(f, n), Lit::inequality(f, m)]);
        assert_eq!(clause.literals(), &[Lit::inequality(f, m)]);
    }
}

mod subsumption {
    use super::*;

    #[test]
    fn unit_of_distinct_names() {
        let f = Fun::from_id(1);
        let (n1, n2) = (Name::from_id(1), Name::from_id(2));

        let equality = Clause::unit(Lit::equality(f, n1));
        let inequality = Clause::unit(Lit::inequality(f, n2));
        assert!(equality.subsumes(&inequality));
        assert!(!inequality.subsumes(&equality));
    }

    #[test]
    fn reflexive() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            let clause = random_clause(&mut rng);
            assert!(clause.subsumes(&clause));
        }
    }

    #[test]
    fn transitive() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut checked = 0;
        while checked < 200 {
            let a = random_clause(&mut rng);
            let b = random_clause(&mut rng);
            let c = random_clause(&mut rng);
            if a.subsumes(&b) && b.subsumes(&c) {
                assert!(a.subsumes(&c), "{a:?} ⊑ {b:?} ⊑ {c:?}");
                checked += 1;
            }
        }
    }

    #[test]
    fn bottom_and_top() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..200 {
            let clause = random_clause(&mut rng);
            assert!(Clause::bottom().subsumes(&clause));
            assert!(clause.subsumes(&Clause::top()));
        }
    }
}

mod clause_db {
    use super::*;

    #[test]
    fn stack_discipline() {
        let mut db = ClauseDB::new(&Config::default());
        let f = Fun::from_id(1);
        let (n, m) = (Name::from_id(1), Name::from_id(2));

        let first = db
            .store(&Clause::new([Lit::equality(f, n), Lit::equality(f, m)]), ClauseSource::Original)
            .unwrap();
        let second = db.store(&Clause::unit(Lit::inequality(f, n)), ClauseSource::Propagation).unwrap();

        assert_eq!(db.get(first), Ok([Lit::equality(f, n), Lit::equality(f, m)].as_slice()));
        assert!(!db.header(first).unwrap().learnt);
        assert!(db.header(second).unwrap().learnt);

        assert_eq!(db.remove(first), Err(err::ClauseDBError::NotLast));
        assert_eq!(db.remove(second), Ok(()));
        assert_eq!(db.get(second), Err(err::ClauseDBError::InvalidKey));
        assert_eq!(db.len(), 1);

        // Keys stay valid as the database grows.
        for _ in 0..100 {
            db.store(&Clause::unit(Lit::equality(f, m)), ClauseSource::Split).unwrap();
        }
        assert_eq!(db.get(first), Ok([Lit::equality(f, n), Lit::equality(f, m)].as_slice()));

        db.truncate(1);
        assert_eq!(db.len(), 1);
        assert_eq!(db.last_key(), Some(first));
    }
}
