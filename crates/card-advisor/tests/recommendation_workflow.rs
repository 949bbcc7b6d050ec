use card_advisor::advisor::CardAdvisor;
use card_advisor::catalog::CardCatalog;
use card_advisor::preferences::{PreferenceForm, PreferenceRecord};
use card_advisor::ranking::FilterPass;
use card_advisor::scoring::ScoringRubric;
use std::sync::Arc;

fn advisor() -> CardAdvisor {
    let data = include_bytes!("../Credit_card_details.csv");
    let catalog = CardCatalog::from_reader(&data[..]).expect("dataset imports");
    CardAdvisor::new(Arc::new(catalog), ScoringRubric::standard())
}

fn fuel_form() -> PreferenceForm {
    PreferenceForm {
        spending_category: Some("Fuel".to_string()),
        repayment_behavior: Some("delay".to_string()),
        fee_comfort: Some("500".to_string()),
        reward_type: Some("cashback".to_string()),
        min_credit_limit: Some("50000".to_string()),
        intl: Some("no".to_string()),
        emi: Some("no".to_string()),
        digital_pref: Some("digital".to_string()),
    }
}

fn fuel_preferences() -> PreferenceRecord {
    fuel_form().validate().expect("valid answers")
}

#[test]
fn fuel_commuter_gets_fuel_card_first() {
    let views = advisor()
        .recommend(&fuel_preferences(), 5)
        .expect("recommendations");

    let names: Vec<_> = views.iter().map(|view| view.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Axis Bank Indian Oil",
            "IDFC FIRST Bank Wealth",
            "SBI Card BPCL Octane",
            "ICICI Bank Amazon Pay",
            "HDFC Bank Regalia",
        ]
    );

    let top = &views[0];
    assert_eq!(top.score, 6.5);
    assert_eq!(top.reasons.len(), 5);
    assert_eq!(
        top.reasons[0],
        "Excellent match for your fuel spending with fuel cashback."
    );
    assert_eq!(top.features.bank_type.as_deref(), Some("Private Sector Bank"));

    let ranks: Vec<_> = views.iter().map(|view| view.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    assert!(views
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn equal_scores_keep_dataset_order() {
    let views = advisor()
        .recommend(&fuel_preferences(), 12)
        .expect("recommendations");
    assert_eq!(views.len(), 12);

    let three_point_cards: Vec<_> = views
        .iter()
        .filter(|view| view.score == 3.0)
        .map(|view| view.name.as_str())
        .collect();
    assert_eq!(
        three_point_cards,
        vec![
            "HDFC Bank Regalia",
            "SBI Card SimplyCLICK",
            "ICICI Bank Sapphiro",
            "Punjab National Bank RuPay Select",
            "Kotak Mahindra Bank 811 Dream Different",
        ]
    );
}

#[test]
fn every_score_stays_under_the_ceiling() {
    let advisor = advisor();
    let views = advisor
        .recommend(&fuel_preferences(), 100)
        .expect("recommendations");
    assert!(views
        .iter()
        .all(|view| view.score >= 0.0 && view.score <= advisor.max_score()));
    assert!(views.iter().all(|view| !view.rationale.is_empty()));
}

#[test]
fn shortlist_falls_back_to_relaxed_pass() {
    let preferences = PreferenceRecord {
        min_credit_limit: 20000.0,
        ..fuel_preferences()
    };
    let view = advisor().shortlist(&preferences, 5).expect("shortlist");

    assert_eq!(view.pass, FilterPass::Relaxed);
    assert_eq!(view.strict_matches, 1);
    let names: Vec<_> = view.cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Axis Bank Indian Oil",
            "Punjab National Bank RuPay Select",
            "ICICI Bank Amazon Pay",
        ]
    );
}

#[test]
fn shortlist_excludes_cards_whose_limit_floor_is_below_the_minimum() {
    // Every cheap cashback card starts below 50,000 even though each can reach it.
    let view = advisor()
        .shortlist(&fuel_preferences(), 5)
        .expect("shortlist");

    assert_eq!(view.strict_matches, 0);
    assert!(view.cards.is_empty());
}

#[test]
fn incomplete_answers_are_reported_together() {
    let form = PreferenceForm {
        reward_type: Some("gold".to_string()),
        min_credit_limit: Some("-100".to_string()),
        ..fuel_form()
    };
    let error = advisor()
        .recommend_form(&form, 5)
        .expect_err("invalid answers");
    let message = error.to_string();
    assert!(message.contains("reward_type"));
    assert!(message.contains("min_credit_limit"));
}
