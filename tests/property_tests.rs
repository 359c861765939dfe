use gspanel::catalog::{AttributeCatalog, Element, EquipmentSlot, StatKind};
use gspanel::model::{Affix, BaseStats, Item};
use gspanel::scorer::basis::sort_weights;
use gspanel::scorer::{Rank, RuleBook, Scorer, WeightRule};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_kind() -> impl Strategy<Value = StatKind> {
    let kinds: Vec<StatKind> = StatKind::iter().collect();
    proptest::sample::select(kinds)
}

fn arb_slot() -> impl Strategy<Value = EquipmentSlot> {
    let slots: Vec<EquipmentSlot> = EquipmentSlot::iter().collect();
    proptest::sample::select(slots)
}

fn arb_element() -> impl Strategy<Value = Element> {
    let elements: Vec<Element> = Element::iter().collect();
    proptest::sample::select(elements)
}

prop_compose! {
    fn arb_rule()(
        weights in proptest::collection::btree_map(arb_kind(), 0u32..=100, 0..8)
    ) -> WeightRule {
        WeightRule { name: "prop".to_string(), weights }
    }
}

prop_compose! {
    fn arb_affix()(kind in arb_kind(), value in 0.0..60.0f64) -> Affix {
        Affix::new(kind, value)
    }
}

// Values stay within what the game can produce
prop_compose! {
    fn arb_item()(
        slot in arb_slot(),
        main in arb_affix(),
        subs in proptest::collection::vec(arb_affix(), 0..=4),
        level in 0u8..=20
    ) -> Item {
        Item::new(slot, main, subs).with_level(level)
    }
}

prop_compose! {
    fn arb_base()(
        health in 800.0..16000.0f64,
        attack in 80.0..400.0f64,
        defense in 50.0..1000.0f64
    ) -> BaseStats {
        BaseStats::new(health, attack, defense)
    }
}

proptest! {
    #[test]
    fn prop_weights_sorted_descending(rule in arb_rule()) {
        let sorted = sort_weights(&rule);
        prop_assert_eq!(sorted.len(), rule.weights.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn prop_score_is_finite_and_ranked(
        rule in arb_rule(),
        item in arb_item(),
        element in arb_element(),
        base in arb_base()
    ) {
        let scorer = Scorer::default();
        let basis = scorer.basis(&rule, Some(&base));
        let result = scorer.score_item(&basis, &item, element);

        prop_assert!(result.score.is_finite());
        prop_assert!(result.score >= 0.0);
        prop_assert_eq!(result.rank, Rank::from_score(result.score));
        prop_assert!((50.0..=100.0).contains(&result.main_penalty_pct));
        prop_assert!(result.off_stat_rolls <= (item.level / 4) as usize);
    }

    #[test]
    fn prop_fixed_main_never_scores(
        rule in arb_rule(),
        subs in proptest::collection::vec(arb_affix(), 0..=4),
        main_value in 0.0..5000.0f64
    ) {
        let scorer = Scorer::default();
        let basis = scorer.basis(&rule, None);
        for slot in [EquipmentSlot::Flower, EquipmentSlot::Feather] {
            let item = Item::new(slot, Affix::new(StatKind::CritDamage, main_value), subs.clone());
            let result = scorer.score_item(&basis, &item, Element::Pyro);
            prop_assert_eq!(result.main_score, 0.0);
            prop_assert_eq!(result.main_penalty_pct, 100.0);
        }
    }

    #[test]
    fn prop_sub_score_grows_with_value(
        rule in arb_rule(),
        kind in arb_kind(),
        low in 0.0..30.0f64,
        extra in 0.0..30.0f64
    ) {
        let scorer = Scorer::default();
        let basis = scorer.basis(&rule, None);
        let score_of = |value: f64| {
            let item = Item::new(
                EquipmentSlot::Flower,
                Affix::new(StatKind::Hp, 4780.0),
                vec![Affix::new(kind, value)],
            );
            scorer.score_item(&basis, &item, Element::Pyro).subs[0].score
        };
        prop_assert!(score_of(low + extra) >= score_of(low));
    }

    #[test]
    fn prop_ceilings_follow_catalog(rule in arb_rule()) {
        let catalog = AttributeCatalog::standard();
        let scorer = Scorer::default();
        let basis = scorer.basis(&rule, None);
        for slot in EquipmentSlot::iter() {
            let max = basis.slot_max(slot);
            prop_assert!(max.total >= max.main * 2.0);
            match max.main_affix {
                Some(kind) => prop_assert!(catalog.main_stat_pool(slot).contains(&kind)),
                None => prop_assert_eq!(max.main, 0.0),
            }
        }
    }

    #[test]
    fn prop_scoring_is_deterministic(
        first in arb_rule(),
        second in arb_rule(),
        items in proptest::collection::vec(arb_item(), 0..=5),
        base in arb_base(),
        element in arb_element()
    ) {
        let single = Scorer::default();
        let basis = single.basis(&first, Some(&base));
        for item in &items {
            let a = serde_json::to_string(&single.score_item(&basis, item, element)).unwrap();
            let b = serde_json::to_string(&single.score_item(&basis, item, element)).unwrap();
            prop_assert_eq!(a, b);
        }

        // Variants are scored in parallel; the pick must not depend on scheduling
        let mut rules = RuleBook::new();
        let variants = vec![
            WeightRule { name: "first".to_string(), ..first.clone() },
            WeightRule { name: "second".to_string(), ..second },
            WeightRule { name: "again".to_string(), ..first },
        ];
        rules.insert("Tester", variants);
        let scorer = Scorer { rules, ..Default::default() };
        let a = serde_json::to_string(&scorer.rank_loadout("Tester", &items, element, Some(&base))).unwrap();
        let b = serde_json::to_string(&scorer.rank_loadout("Tester", &items, element, Some(&base))).unwrap();
        prop_assert_eq!(a, b);
    }
}
