use gspanel::catalog::{AttributeCatalog, EquipmentSlot, StatKind};
use gspanel::config::ScoringParams;
use gspanel::model::BaseStats;
use gspanel::scorer::{basis::sort_weights, ScoreBasis, WeightRule};
use rstest::rstest;

const EPS: f64 = 1e-9;

fn build(rule: &WeightRule, base: Option<&BaseStats>) -> ScoreBasis {
    ScoreBasis::build(
        &AttributeCatalog::standard(),
        &ScoringParams::default(),
        rule,
        base,
    )
}

#[test]
fn test_default_rule_order() {
    let sorted = sort_weights(&WeightRule::default_rule());
    assert_eq!(
        sorted,
        vec![
            (StatKind::CritDamage, 100),
            (StatKind::CritRate, 100),
            (StatKind::AtkPercent, 75),
        ]
    );
}

#[test]
fn test_crit_rate_yields_on_ties() {
    let rule = WeightRule::new(
        "em",
        [(StatKind::CritRate, 50), (StatKind::ElementalMastery, 50)],
    );
    let sorted = sort_weights(&rule);
    assert_eq!(sorted[0].0, StatKind::ElementalMastery);
    assert_eq!(sorted[1].0, StatKind::CritRate);
}

#[test]
fn test_crit_rate_leads_percent_stats_on_ties() {
    let rule = WeightRule::new(
        "mixed",
        [
            (StatKind::AtkPercent, 50),
            (StatKind::HpPercent, 50),
            (StatKind::CritRate, 50),
            (StatKind::Atk, 50),
        ],
    );
    let kinds: Vec<StatKind> = sort_weights(&rule).into_iter().map(|(k, _)| k).collect();
    assert_eq!(kinds[0], StatKind::CritRate);
    assert_eq!(kinds[3], StatKind::Atk);
}

#[test]
fn test_weight_dominates_tie_break() {
    let rule = WeightRule::new(
        "hp",
        [
            (StatKind::HpPercent, 100),
            (StatKind::CritDamage, 90),
            (StatKind::Hp, 100),
        ],
    );
    let kinds: Vec<StatKind> = sort_weights(&rule).into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        kinds,
        vec![StatKind::HpPercent, StatKind::Hp, StatKind::CritDamage]
    );
}

#[test]
fn test_point_marks() {
    let basis = build(&WeightRule::default_rule(), None);
    assert!((basis.point_mark(StatKind::CritDamage) - 100.0 / 7.77).abs() < EPS);
    assert!((basis.point_mark(StatKind::CritRate) - 100.0 / 3.89).abs() < EPS);
    assert!((basis.point_mark(StatKind::AtkPercent) - 75.0 / 5.83).abs() < EPS);
    assert_eq!(basis.point_mark(StatKind::ElementalMastery), 0.0);
    assert_eq!(basis.point_mark(StatKind::Unknown), 0.0);
}

#[rstest]
#[case(None, 1020.0)]
#[case(Some(BaseStats::new(15552.0, 106.4, 876.0)), 106.4)]
#[case(Some(BaseStats::new(15552.0, 0.0, 876.0)), 1020.0)]
#[case(Some(BaseStats::new(15552.0, f64::NAN, 876.0)), 1020.0)]
fn test_flat_attack_mark(#[case] base: Option<BaseStats>, #[case] used_base: f64) {
    let basis = build(&WeightRule::default_rule(), base.as_ref());
    let expected = 75.0 / 5.83 / used_base * 100.0;
    assert!((basis.point_mark(StatKind::Atk) - expected).abs() < EPS);
    // Only weighted percent stats derive a flat mark
    assert_eq!(basis.point_mark(StatKind::Hp), 0.0);
    assert_eq!(basis.point_mark(StatKind::Def), 0.0);
}

#[rstest]
#[case(EquipmentSlot::Flower, 0.0, 775.0, None)]
#[case(EquipmentSlot::Feather, 0.0, 775.0, None)]
#[case(EquipmentSlot::Sands, 75.0, 850.0, Some(StatKind::AtkPercent))]
#[case(EquipmentSlot::Goblet, 75.0, 850.0, Some(StatKind::AtkPercent))]
#[case(EquipmentSlot::Circlet, 100.0, 875.0, Some(StatKind::CritDamage))]
fn test_default_rule_ceilings(
    #[case] slot: EquipmentSlot,
    #[case] main: f64,
    #[case] total: f64,
    #[case] main_affix: Option<StatKind>,
) {
    let basis = build(&WeightRule::default_rule(), None);
    let max = basis.slot_max(slot);
    assert_eq!(max.main, main, "main ceiling of {}", slot);
    assert_eq!(max.total, total, "total ceiling of {}", slot);
    assert_eq!(max.main_affix, main_affix);
}

#[test]
fn test_goblet_prefers_elemental_bonus() {
    let rule = WeightRule::new(
        "dps",
        [
            (StatKind::CritRate, 100),
            (StatKind::CritDamage, 100),
            (StatKind::ElementalDmgBonus, 100),
            (StatKind::AtkPercent, 75),
        ],
    );
    let basis = build(&rule, None);
    let goblet = basis.slot_max(EquipmentSlot::Goblet);
    assert_eq!(goblet.main_affix, Some(StatKind::ElementalDmgBonus));
    // 2 * 100 main, then CD x6 + CR + ATK%
    assert_eq!(goblet.total, 200.0 + 600.0 + 100.0 + 75.0);
}

#[test]
fn test_flower_excludes_fixed_main_from_subs() {
    let rule = WeightRule::new(
        "hp",
        [(StatKind::HpPercent, 100), (StatKind::Hp, 100)],
    );
    let basis = build(&rule, None);
    // Flat HP cannot roll on a Flower, so HP% takes the six rolls
    assert_eq!(basis.slot_max(EquipmentSlot::Flower).total, 600.0);
    assert_eq!(basis.slot_max(EquipmentSlot::Feather).total, 700.0);
}

#[test]
fn test_unweighted_rule_has_zero_ceilings() {
    let basis = build(&WeightRule::new("empty", Vec::<(StatKind, u32)>::new()), None);
    assert!(basis.point_marks.is_empty());
    for max in basis.max_marks {
        assert_eq!(max.main, 0.0);
        assert_eq!(max.total, 0.0);
    }
}
