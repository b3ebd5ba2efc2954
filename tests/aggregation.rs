//! Integration tests for aggregation: outcome count, distinct winners, error propagation.

use fight_predictor::{
    predict_outcomes, AggregationMode, MatchupBracket, PredictionError, PredictionReport, Roster,
    StatisticsRecord, StatisticsTable,
};

const MODES: [AggregationMode; 2] = [AggregationMode::Memoized, AggregationMode::Exhaustive];

fn card(records: &[(&str, f64, &str)]) -> (Roster, MatchupBracket, StatisticsTable) {
    let roster = Roster::new(records.iter().map(|(name, _, _)| *name));
    let bracket = MatchupBracket::from_roster(&roster);
    let stats = records
        .iter()
        .map(|(name, slpm, acc)| StatisticsRecord::new(*name, *slpm, *acc))
        .collect();
    (roster, bracket, stats)
}

fn predict(
    records: &[(&str, f64, &str)],
    mode: AggregationMode,
) -> Result<PredictionReport, PredictionError> {
    let (roster, bracket, stats) = card(records);
    predict_outcomes(&roster, &bracket, &stats, mode)
}

#[test]
fn single_matchup_picks_higher_adjusted_output() {
    for mode in MODES {
        let report = predict(&[("A", 5.0, "50%"), ("B", 3.0, "90%")], mode).unwrap();
        assert_eq!(report.total_outcomes, 2);
        assert_eq!(report.winners, vec!["B".to_string()]);
    }
}

#[test]
fn two_matchups_give_four_outcomes_and_one_winner_each() {
    let records = [
        ("A", 5.0, "50%"),
        ("B", 3.0, "90%"),
        ("C", 4.5, "60%"),
        ("D", 2.0, "40%"),
    ];
    for mode in MODES {
        let report = predict(&records, mode).unwrap();
        assert_eq!(report.total_outcomes, 4);
        assert_eq!(report.winners, vec!["B".to_string(), "C".to_string()]);
    }
}

#[test]
fn modes_agree_on_larger_card() {
    let records: Vec<(String, f64, String)> = (0..12)
        .map(|i| (format!("F{i}"), 1.0 + (i * 7 % 5) as f64, format!("{}%", 30 + i * 3)))
        .collect();
    let borrowed: Vec<(&str, f64, &str)> = records
        .iter()
        .map(|(n, s, a)| (n.as_str(), *s, a.as_str()))
        .collect();
    let memoized = predict(&borrowed, AggregationMode::Memoized).unwrap();
    let exhaustive = predict(&borrowed, AggregationMode::Exhaustive).unwrap();
    assert_eq!(memoized, exhaustive);
    assert_eq!(memoized.total_outcomes, 64);
    assert_eq!(memoized.winners.len(), 6);
}

#[test]
fn empty_card_has_one_outcome_and_no_winners() {
    for mode in MODES {
        let report = predict(&[], mode).unwrap();
        assert_eq!(report.total_outcomes, 1);
        assert!(report.winners.is_empty());
    }
}

#[test]
fn unpaired_fighter_is_ignored() {
    for mode in MODES {
        let report = predict(&[("A", 5.0, "50%"), ("B", 3.0, "90%"), ("C", 9.0, "99%")], mode)
            .unwrap();
        assert_eq!(report.total_outcomes, 2);
        assert_eq!(report.winners, vec!["B".to_string()]);
    }
}

#[test]
fn repeated_winner_is_listed_once() {
    // Same pairing twice on the card.
    let roster = Roster::new(["A", "B", "A", "B"]);
    let bracket = MatchupBracket::from_roster(&roster);
    let stats: StatisticsTable = [
        StatisticsRecord::new("A", 5.0, "60%"),
        StatisticsRecord::new("B", 3.0, "50%"),
    ]
    .into_iter()
    .collect();
    for mode in MODES {
        let report = predict_outcomes(&roster, &bracket, &stats, mode).unwrap();
        assert_eq!(report.total_outcomes, 4);
        assert_eq!(report.winners, vec!["A".to_string()]);
    }
}

#[test]
fn missing_statistics_abort_the_run() {
    let roster = Roster::new(["A", "B", "C", "D"]);
    let bracket = MatchupBracket::from_roster(&roster);
    let stats: StatisticsTable = [
        StatisticsRecord::new("A", 5.0, "50%"),
        StatisticsRecord::new("B", 3.0, "90%"),
        StatisticsRecord::new("C", 3.0, "90%"),
    ]
    .into_iter()
    .collect();
    for mode in MODES {
        let err = predict_outcomes(&roster, &bracket, &stats, mode).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::MissingStatistic { ref name, attribute: None } if name == "D"
        ));
    }
}

#[test]
fn malformed_accuracy_aborts_the_run() {
    for mode in MODES {
        let err = predict(&[("A", 5.0, "50%"), ("B", 3.0, "ninety")], mode).unwrap_err();
        assert!(matches!(err, PredictionError::MalformedPercentage { .. }));
    }
}

#[test]
fn memoized_mode_rejects_uncountable_card() {
    let roster = Roster::new((0..128).map(|i| format!("F{i}")));
    let bracket = MatchupBracket::from_roster(&roster);
    let stats: StatisticsTable = roster
        .names
        .iter()
        .map(|n| StatisticsRecord::new(n.as_str(), 1.0, "50%"))
        .collect();
    let err = predict_outcomes(&roster, &bracket, &stats, AggregationMode::Memoized).unwrap_err();
    assert_eq!(err, PredictionError::OutcomeCountOverflow { matchups: 64 });
}

#[test]
fn report_renders_as_text_panel() {
    let report = PredictionReport {
        total_outcomes: 4,
        winners: vec!["B".to_string(), "C".to_string()],
    };
    assert_eq!(
        report.to_string(),
        "Total number of outcomes: 4\nFight 1 Winner: B\nFight 2 Winner: C\n"
    );
}
