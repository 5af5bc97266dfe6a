use {
    std::fs,
    stroke::{
        Condition, Metric, MetricsBundle, Phase, RuleTable, StrokeError, Verdict,
        rules::{
            CLEARER_CLIP_NOTICE, CONTACT_EARLY, NOT_FOREHAND_NOTICE, STANCE_NARROW, TURN_BIG,
        },
    },
};

const CUSTOM_TABLE: &str = r#"{
    "rules": [
        {
            "phase": "contact",
            "metric": "contact_height_rel",
            "bands": [
                { "when": { "below": 0.4 }, "verdict": "work_on", "message": "Get under the ball." },
                { "when": { "between": [0.4, 0.8] }, "verdict": "doing_well", "message": "Good height." },
                { "when": { "above": 0.8 }, "verdict": "work_on", "message": "Too high." }
            ]
        }
    ]
}"#;

#[test]
fn test_condition_bounds() {
    assert!(Condition::Below(0.07).matches(0.069));
    assert!(!Condition::Below(0.07).matches(0.07));
    assert!(Condition::Above(0.16).matches(0.161));
    assert!(!Condition::Above(0.16).matches(0.16));
    assert!(Condition::Between(0.07, 0.16).matches(0.07));
    assert!(Condition::Between(0.07, 0.16).matches(0.16));
    assert!(!Condition::Between(0.07, 0.16).matches(f64::NAN));
}

#[test]
fn test_forehand_table_covers_every_metric() {
    let table = RuleTable::forehand();
    let keys: Vec<_> = table.rules.iter().map(|rule| (rule.phase, rule.metric)).collect();
    assert_eq!(
        keys,
        vec![
            (Phase::Ready, Metric::StanceWidth),
            (Phase::Ready, Metric::FrontKneeAngleDeg),
            (Phase::UnitTurn, Metric::ShoulderTurnDeg),
            (Phase::Contact, Metric::FrontKneeAngleDeg),
            (Phase::Contact, Metric::ContactHeightRel),
            (Phase::Contact, Metric::ContactLateness),
            (Phase::FollowThrough, Metric::ShoulderTurnDeg),
        ]
    );
    assert!(table.rules.iter().all(|rule| rule.bands.len() == 3));
    assert!(table.validate().is_ok());
    assert_eq!(RuleTable::default(), table);
}

#[test]
fn test_forehand_sentences_read_as_single_lines() {
    let table = RuleTable::forehand();
    assert_eq!(table.rules[0].bands[0].message, STANCE_NARROW);
    assert_eq!(table.rules[2].bands[2].message, TURN_BIG);
    assert_eq!(table.rules[5].bands[2].message, CONTACT_EARLY);
    assert_eq!(
        CONTACT_EARLY,
        concat!(
            "You're contacting the ball very far in front; ",
            "make sure you're not overreaching and losing balance."
        )
    );
    let messages = table.rules.iter().flat_map(|rule| &rule.bands).map(|band| &band.message);
    for message in messages.chain([&table.not_forehand_notice, &table.clearer_clip_notice]) {
        assert!(!message.contains('\n') && !message.contains("  "), "{message:?}");
        assert!(message.ends_with('.'), "{message:?}");
    }
}

#[test]
fn test_rule_evaluate() {
    let table = RuleTable::forehand();
    let height = &table.rules[4];
    let outcome = height.evaluate(0.5).unwrap();
    assert_eq!(outcome.verdict, Verdict::DoingWell);
    assert_eq!(outcome.message, "Nice comfortable contact height on your forehand.");
    assert_eq!(height.evaluate(0.2).unwrap().verdict, Verdict::WorkOn);
}

#[test]
fn test_load_custom_table() {
    let table = RuleTable::from_json(CUSTOM_TABLE).unwrap();
    assert_eq!(table.rules.len(), 1);
    assert_eq!(table.not_forehand_notice, NOT_FOREHAND_NOTICE);
    assert_eq!(table.clearer_clip_notice, CLEARER_CLIP_NOTICE);

    let mut metrics = MetricsBundle::default();
    metrics.insert(Phase::Contact, Metric::ContactHeightRel, 0.35);
    metrics.insert(Phase::Ready, Metric::StanceWidth, 0.01);
    let feedback = table.evaluate(&metrics, "forehand");
    assert_eq!(feedback.work_on, vec!["Get under the ball."]);
    assert!(feedback.doing_well.is_empty());
}

#[test]
fn test_custom_notices() {
    let json = r#"{ "rules": [], "not_forehand_notice": "Forehands only.", "clearer_clip_notice": "Try again." }"#;
    let table = RuleTable::from_json(json).unwrap();
    let metrics = MetricsBundle::default();
    assert_eq!(table.evaluate(&metrics, "volley").work_on, vec!["Forehands only."]);
    assert_eq!(table.evaluate(&metrics, "forehand").work_on, vec!["Try again."]);
}

#[test]
fn test_rule_without_bands_is_rejected() {
    let json = r#"{ "rules": [ { "phase": "ready", "metric": "stance_width", "bands": [] } ] }"#;
    match RuleTable::from_json(json) {
        Err(StrokeError::Parse(msg)) => assert!(msg.contains("ready.stance_width")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_inverted_range_is_rejected() {
    let json = r#"{ "rules": [ { "phase": "ready", "metric": "stance_width", "bands": [
        { "when": { "between": [0.2, 0.1] }, "verdict": "doing_well", "message": "x" }
    ] } ] }"#;
    assert!(matches!(RuleTable::from_json(json), Err(StrokeError::Parse(_))));
}

#[test]
fn test_nan_range_is_rejected() {
    for (low, high) in [(f64::NAN, 0.1), (0.1, f64::NAN)] {
        let mut table = RuleTable::forehand();
        table.rules[0].bands[1].when = Condition::Between(low, high);
        assert!(matches!(table.validate(), Err(StrokeError::Parse(_))));
    }
    let mut point = RuleTable::forehand();
    point.rules[0].bands[1].when = Condition::Between(0.1, 0.1);
    assert!(point.validate().is_ok());
}

#[test]
fn test_unknown_metric_is_rejected() {
    let json = r#"{ "rules": [ { "phase": "ready", "metric": "racket_speed", "bands": [] } ] }"#;
    assert!(matches!(RuleTable::from_json(json), Err(StrokeError::Parse(_))));
}

#[test]
fn test_from_json_file() {
    let path = std::env::temp_dir().join(format!("stroke-rules-test-{}.json", std::process::id()));
    fs::write(&path, CUSTOM_TABLE).unwrap();
    let table = RuleTable::from_json_file(&path).unwrap();
    assert_eq!(table.rules[0].metric, Metric::ContactHeightRel);
    fs::remove_file(&path).ok();
}

#[test]
fn test_from_missing_file() {
    let result = RuleTable::from_json_file("/nonexistent/stroke/rules.json");
    assert!(matches!(result, Err(StrokeError::Io(_))));
}
