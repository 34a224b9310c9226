use otter_belief::{
    config::Config,
    kb::KnowledgeBase,
    structures::{formula::Formula, literal::TermLiteral, term::Term},
    types::err::{ErrorKind, KnowledgeBaseError},
};

fn knowledge_base() -> (KnowledgeBase, Term) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut kb = KnowledgeBase::from_config(Config::default());
    let boolean = kb.terms.fresh_sort().unwrap();
    let t = kb.terms.fresh_name(boolean).unwrap();
    (kb, t)
}

/// A fresh nullary function of the sort of `t`, as the formula `f = t`.
fn atom(kb: &mut KnowledgeBase, t: Term) -> Formula {
    let sort = kb.terms.sort_of(t);
    let symbol = kb.terms.fresh_function(sort, 0).unwrap();
    let term = kb.terms.apply(symbol, []).unwrap();
    Formula::literal(TermLiteral::equality(term, t))
}

mod objective {
    use super::*;

    #[test]
    fn know_and_cons() {
        let (mut kb, t) = knowledge_base();
        let a = atom(&mut kb, t);
        let b = atom(&mut kb, t);
        assert!(kb.add(&Formula::know(0, a.clone())).is_ok());

        assert_eq!(kb.entails(&Formula::know(0, a.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::know(0, b.clone())), Ok(false));
        assert_eq!(kb.entails(&Formula::know(0, a.clone() | b.clone())), Ok(true));

        assert_eq!(kb.entails(&Formula::cons(0, b.clone())), Ok(false));
        assert_eq!(kb.entails(&Formula::cons(1, b.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::cons(1, !a.clone())), Ok(false));
        assert_eq!(kb.entails(&!Formula::know(1, b)), Ok(true));
    }

    #[test]
    fn case_reasoning_needs_a_split() {
        let (mut kb, t) = knowledge_base();
        let a = atom(&mut kb, t);
        let b = atom(&mut kb, t);
        assert!(kb.add(&(a.clone() | b.clone())).is_ok());
        assert!(kb.add(&(!a | b.clone())).is_ok());

        assert_eq!(kb.entails(&Formula::know(0, b.clone())), Ok(false));
        assert_eq!(kb.entails(&Formula::know(1, b)), Ok(true));
    }

    #[test]
    fn double_negation() {
        let (mut kb, t) = knowledge_base();
        let a = atom(&mut kb, t);
        let b = atom(&mut kb, t);
        assert!(kb.add(&Formula::know(0, a.clone())).is_ok());

        for query in [Formula::know(0, a.clone()), Formula::know(0, b.clone()), Formula::cons(1, !a)] {
            let expected = kb.entails(&query);
            assert!(expected.is_ok());
            assert_eq!(kb.entails(&!!query), expected);
        }
    }

    #[test]
    fn real_facts_are_not_known() {
        let (mut kb, t) = knowledge_base();
        let a = atom(&mut kb, t);
        let Formula::Clause(clause) = &a else { panic!() };
        assert!(kb.add_real(clause.literals()[0]).is_ok());

        assert_eq!(kb.entails(&a), Ok(true));
        assert_eq!(kb.entails(&Formula::know(0, a.clone())), Ok(false));
        assert_eq!(kb.entails(&(a.clone() & !Formula::know(0, a))), Ok(true));
    }

    #[test]
    fn quantifying_into_knowledge() {
        let (mut kb, t) = knowledge_base();
        let person = kb.terms.fresh_sort().unwrap();
        let alice = kb.terms.fresh_name(person).unwrap();
        let x = kb.terms.fresh_variable(person).unwrap();
        let boolean = kb.terms.sort_of(t);
        let p = kb.terms.fresh_function(boolean, 1).unwrap();
        let p_alice = kb.terms.apply(p, [alice]).unwrap();
        let p_x = kb.terms.apply(p, [x]).unwrap();

        assert!(kb.add(&Formula::know(0, Formula::literal(TermLiteral::equality(p_alice, t)))).is_ok());

        let knows_p_x = Formula::know(0, Formula::literal(TermLiteral::equality(p_x, t)));
        assert_eq!(kb.entails(&Formula::exists(x, knows_p_x.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::forall(x, knows_p_x.clone())), Ok(false));

        // Fresh names are returned after each case split, and so repeated queries make no new names.
        let count = kb.terms.name_count();
        assert_eq!(kb.entails(&Formula::exists(x, knows_p_x.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::forall(x, knows_p_x)), Ok(false));
        assert_eq!(kb.terms.name_count(), count);
    }
}

mod additions {
    use super::*;

    #[test]
    fn clausal_forms_only() {
        let (mut kb, t) = knowledge_base();
        let a = atom(&mut kb, t);
        let b = atom(&mut kb, t);
        let not_clausal = Err(ErrorKind::from(KnowledgeBaseError::NotClausal));
        let not_objective = Err(ErrorKind::from(KnowledgeBaseError::NotObjective));

        assert_eq!(kb.add(&Formula::cons(0, a.clone())), not_clausal);
        assert_eq!(kb.add(&(a.clone() & b.clone())), not_clausal);
        assert_eq!(kb.add(&Formula::guarantee(a.clone())), not_clausal);
        assert_eq!(kb.add(&Formula::know(0, Formula::know(0, a.clone()))), not_objective);
        assert_eq!(kb.add(&Formula::bel(1, 1, Formula::cons(0, a.clone()), b.clone())), not_objective);
        assert_eq!(kb.add(&Formula::bel(1, 1, a.clone(), Formula::know(0, b.clone()))), not_objective);

        assert!(kb.add(&(!!a | b)).is_ok());
    }

    #[test]
    fn existential_knowledge() {
        let (mut kb, t) = knowledge_base();
        let thing = kb.terms.fresh_sort().unwrap();
        let x = kb.terms.fresh_variable(thing).unwrap();
        let boolean = kb.terms.sort_of(t);
        let p = kb.terms.fresh_function(boolean, 1).unwrap();
        let p_x = kb.terms.apply(p, [x]).unwrap();

        let some = Formula::exists(x, Formula::literal(TermLiteral::equality(p_x, t)));
        assert_eq!(kb.add(&some), Err(ErrorKind::from(KnowledgeBaseError::NotClausal)));

        let all = Formula::forall(x, Formula::literal(TermLiteral::equality(p_x, t)));
        assert!(kb.add(&all).is_ok());
    }

    #[test]
    fn nested_terms() {
        let (mut kb, t) = knowledge_base();
        let boolean = kb.terms.sort_of(t);
        let f = kb.terms.fresh_function(boolean, 1).unwrap();
        let g = kb.terms.fresh_function(boolean, 0).unwrap();
        let g = kb.terms.apply(g, []).unwrap();
        let f_g = kb.terms.apply(f, [g]).unwrap();
        let nested = Formula::literal(TermLiteral::equality(f_g, t));

        assert_eq!(kb.entails(&Formula::know(0, nested.clone())), Ok(false));
        assert!(kb.add(&nested).is_ok());
        assert_eq!(kb.entails(&Formula::know(0, nested.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::know(0, !nested)), Ok(false));
    }

    #[test]
    fn nested_terms_from_universal_knowledge() {
        let (mut kb, t) = knowledge_base();
        let boolean = kb.terms.sort_of(t);
        let f = kb.terms.fresh_function(boolean, 1).unwrap();
        let g = kb.terms.fresh_function(boolean, 0).unwrap();
        let g = kb.terms.apply(g, []).unwrap();
        let f_g = kb.terms.apply(f, [g]).unwrap();
        let x = kb.terms.fresh_variable(boolean).unwrap();
        let f_x = kb.terms.apply(f, [x]).unwrap();

        let all = Formula::forall(x, Formula::literal(TermLiteral::equality(f_x, t)));
        assert!(kb.add(&all).is_ok());

        let nested = Formula::literal(TermLiteral::equality(f_g, t));
        assert_eq!(kb.entails(&Formula::know(0, nested.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::cons(0, !nested)), Ok(false));
    }
}

mod beliefs {
    use super::*;

    #[test]
    fn penguins() {
        let (mut kb, t) = knowledge_base();
        let bird = atom(&mut kb, t);
        let penguin = atom(&mut kb, t);
        let flies = atom(&mut kb, t);

        assert!(kb.add(&Formula::bel(1, 1, bird.clone(), flies.clone())).is_ok());
        assert!(kb.add(&Formula::bel(1, 1, penguin.clone(), bird.clone())).is_ok());
        assert!(kb.add(&Formula::bel(1, 1, penguin.clone(), !flies.clone())).is_ok());

        assert_eq!(kb.n_spheres(), Ok(3));
        assert_eq!(kb.entails(&Formula::bel(1, 1, bird.clone(), flies.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::bel(1, 1, penguin.clone(), !flies.clone())), Ok(true));
        assert_eq!(kb.entails(&Formula::bel(1, 1, penguin.clone(), flies.clone())), Ok(false));

        // Without further information, there are no penguins, though flight is left open.
        assert_eq!(kb.entails(&Formula::bel(1, 1, Formula::top(), !penguin)), Ok(true));
        assert_eq!(kb.entails(&Formula::bel(1, 1, Formula::top(), !flies.clone())), Ok(false));
        assert_eq!(kb.entails(&Formula::bel(1, 1, Formula::top(), flies)), Ok(false));
    }

    struct Dinner {
        kb: KnowledgeBase,
        italian_false: Formula,
        veggie_false: Formula,
    }

    /// An Australian or Italian guest, who is believed to eat kangaroo if Australian, though kangaroo is meat and vegetarians eat no meat.
    fn dinner(guarantee: bool) -> Dinner {
        let (mut kb, t) = knowledge_base();
        let boolean = kb.terms.sort_of(t);
        let food = kb.terms.fresh_sort().unwrap();
        let roo = kb.terms.fresh_name(food).unwrap();
        let x = kb.terms.fresh_variable(food).unwrap();

        let aussie = atom(&mut kb, t);
        let italian = atom(&mut kb, t);
        let veggie = atom(&mut kb, t);

        let eats = kb.terms.fresh_function(boolean, 1).unwrap();
        let meat = kb.terms.fresh_function(boolean, 1).unwrap();
        let eats_roo = kb.terms.apply(eats, [roo]).unwrap();
        let meat_roo = kb.terms.apply(meat, [roo]).unwrap();
        let eats_x = kb.terms.apply(eats, [x]).unwrap();
        let meat_x = kb.terms.apply(meat, [x]).unwrap();

        let vegetarians_eat_no_meat = Formula::forall(
            x,
            Formula::implies(
                veggie.clone() & Formula::literal(TermLiteral::equality(meat_x, t)),
                Formula::literal(TermLiteral::inequality(eats_x, t)),
            ),
        );

        let beliefs = [
            (aussie.clone(), !italian.clone()),
            (italian.clone(), !aussie.clone()),
            (aussie.clone(), Formula::literal(TermLiteral::equality(eats_roo, t))),
            (Formula::top(), italian.clone() | veggie.clone()),
            (!italian.clone(), aussie),
            (Formula::literal(TermLiteral::inequality(meat_roo, t)), Formula::bottom()),
            (!vegetarians_eat_no_meat, Formula::bottom()),
        ];

        for (antecedent, consequent) in beliefs {
            let belief = Formula::bel(1, 1, antecedent, consequent);
            let belief = match guarantee {
                true => Formula::guarantee(belief),
                false => belief,
            };
            assert!(kb.add(&belief).is_ok());
        }

        Dinner {
            kb,
            italian_false: !italian,
            veggie_false: !veggie,
        }
    }

    fn check_dinner(guarantee: bool) {
        let Dinner {
            mut kb,
            italian_false,
            veggie_false,
        } = dinner(guarantee);

        for (k, l, expected) in [(0, 0, false), (0, 1, false), (1, 0, false), (1, 1, true)] {
            let query = Formula::bel(k, l, italian_false.clone(), veggie_false.clone());
            let query = match guarantee {
                true => Formula::guarantee(query),
                false => query,
            };
            assert_eq!(kb.entails(&query), Ok(expected), "Bel({k}, {l}, ...)");
        }
    }

    #[test]
    fn dinner_guest() {
        check_dinner(false);
    }

    #[test]
    fn dinner_guest_guaranteed() {
        check_dinner(true);
    }
}
