//! Tests for the cross validator

use super::metrics::{round4, round_half_up};
use super::{CrossValidator, UNKNOWN_LABEL};
use crate::error::AyudanteError;
use approx::assert_abs_diff_eq;

const LABELS: [&str; 3] = ["urgent", "normal", "spam"];

/// (truth, guess, repetitions) of the reference scenario
const SCENARIO: [(&str, &str, usize); 9] = [
    ("urgent", "urgent", 8),
    ("normal", "urgent", 10),
    ("spam", "urgent", 1),
    ("urgent", "normal", 5),
    ("normal", "normal", 60),
    ("spam", "normal", 50),
    ("urgent", "spam", 3),
    ("normal", "spam", 30),
    ("spam", "spam", 200),
];

fn scenario_validator() -> CrossValidator {
    let mut cv = CrossValidator::new(LABELS).unwrap();
    for (truth, guess, times) in SCENARIO {
        for _ in 0..times {
            assert!(cv.evaluate(truth, guess));
        }
    }
    cv
}

#[test]
fn test_construction_requires_two_labels() {
    assert_eq!(
        CrossValidator::new(Vec::<String>::new()).unwrap_err(),
        AyudanteError::InsufficientLabels { count: 0 }
    );
    assert_eq!(
        CrossValidator::new(["only"]).unwrap_err(),
        AyudanteError::InsufficientLabels { count: 1 }
    );
    assert!(CrossValidator::new(["a", "b"]).is_ok());
}

#[test]
fn test_construction_rejects_duplicates() {
    let err = CrossValidator::new(["a", "b", "a"]).unwrap_err();
    assert_eq!(err, AyudanteError::DuplicateLabel { label: "a".into() });
}

#[test]
fn test_from_value_requires_array() {
    let err = CrossValidator::from_value(&serde_json::json!("spam")).unwrap_err();
    assert!(matches!(err, AyudanteError::InvalidArgument { .. }));

    let err = CrossValidator::from_value(&serde_json::json!({ "a": 1 })).unwrap_err();
    assert!(matches!(err, AyudanteError::InvalidArgument { .. }));

    let err = CrossValidator::from_value(&serde_json::json!(["a", 2])).unwrap_err();
    assert!(matches!(err, AyudanteError::InvalidArgument { .. }));

    let err = CrossValidator::from_value(&serde_json::json!(["a"])).unwrap_err();
    assert_eq!(err, AyudanteError::InsufficientLabels { count: 1 });

    let cv = CrossValidator::from_value(&serde_json::json!(["a", "b"])).unwrap();
    assert_eq!(cv.labels(), ["a", "b"]);
}

#[test]
fn test_labels_keep_order() {
    let cv = CrossValidator::new(LABELS).unwrap();
    assert_eq!(cv.labels(), LABELS);
    assert_eq!(cv.unknown_label(), UNKNOWN_LABEL);
}

#[test]
fn test_metrics_none_before_evaluate() {
    let cv = CrossValidator::new(LABELS).unwrap();
    assert!(!cv.is_evaluated());
    assert!(cv.metrics().is_none());
    assert!(cv.confusion_matrix().is_zero());
}

#[test]
fn test_diagonal_increment() {
    let mut cv = CrossValidator::new(LABELS).unwrap();
    assert!(cv.evaluate("spam", "spam"));

    let cm = cv.confusion_matrix();
    assert_eq!(cm.get("spam", "spam"), Some(1));
    assert_eq!(cm.total(), 1);
}

#[test]
fn test_miss_is_recorded_guess_first() {
    let mut cv = CrossValidator::new(LABELS).unwrap();
    assert!(cv.evaluate("spam", "urgent"));

    let cm = cv.confusion_matrix();
    assert_eq!(cm.get("urgent", "spam"), Some(1));
    assert_eq!(cm.get("spam", "urgent"), Some(0));
    assert_eq!(cm.total(), 1);
}

#[test]
fn test_rejected_evaluations_leave_state_alone() {
    let mut cv = CrossValidator::new(LABELS).unwrap();

    assert!(!cv.evaluate("spam", UNKNOWN_LABEL));
    assert!(!cv.evaluate("pam", "sam"));
    assert!(!cv.evaluate("pam", "spam"));
    assert!(!cv.evaluate("spam", "sam"));

    assert!(!cv.is_evaluated());
    assert!(cv.confusion_matrix().is_zero());
    assert!(cv.metrics().is_none());
}

#[test]
fn test_custom_unknown_label() {
    let mut cv = CrossValidator::with_unknown(["a", "b"], "?").unwrap();
    assert!(!cv.evaluate("a", "?"));
    // The default sentinel is just another unknown label here
    assert!(!cv.evaluate("a", UNKNOWN_LABEL));
    assert!(cv.evaluate("a", "b"));
}

#[test]
fn test_reference_scenario() {
    let cv = scenario_validator();
    let m = cv.metrics().unwrap();

    assert_eq!(m.avg_precision, 0.6004);
    assert_eq!(m.avg_recall, 0.6323);
    assert_eq!(m.avg_f_measure, 0.6139);
}

#[test]
fn test_reference_scenario_details() {
    let m = scenario_validator().metrics().unwrap();
    let d = &m.details;

    assert_eq!(d.confusion_matrix["urgent"]["urgent"], 8);
    assert_eq!(d.confusion_matrix["urgent"]["normal"], 10);
    assert_eq!(d.confusion_matrix["normal"]["spam"], 50);
    assert_eq!(d.confusion_matrix["spam"]["normal"], 30);
    assert_eq!(d.confusion_matrix["spam"]["spam"], 200);

    assert_abs_diff_eq!(d.precision["urgent"], 0.4211, epsilon = 1e-12);
    assert_abs_diff_eq!(d.precision["normal"], 0.5217, epsilon = 1e-12);
    assert_abs_diff_eq!(d.precision["spam"], 0.8584, epsilon = 1e-12);

    assert_abs_diff_eq!(d.recall["urgent"], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(d.recall["normal"], 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(d.recall["spam"], 0.7968, epsilon = 1e-12);

    assert_abs_diff_eq!(d.fmeasure["urgent"], 0.4572, epsilon = 1e-12);
    assert_abs_diff_eq!(d.fmeasure["normal"], 0.5581, epsilon = 1e-12);
    assert_abs_diff_eq!(d.fmeasure["spam"], 0.8265, epsilon = 1e-12);

    let order: Vec<_> = d.precision.keys().map(String::as_str).collect();
    assert_eq!(order, LABELS);
}

#[test]
fn test_reset_then_single_miss() {
    let mut cv = scenario_validator();
    cv.reset();

    assert!(cv.metrics().is_none());
    assert!(cv.confusion_matrix().is_zero());
    assert_eq!(cv.labels(), LABELS);

    assert!(!cv.evaluate("spam", "unknown"));
    assert!(!cv.evaluate("pam", "sam"));
    assert!(cv.evaluate("spam", "urgent"));

    let m = cv.metrics().unwrap();
    assert_eq!(m.avg_precision, 0.0);
    assert_eq!(m.avg_recall, 0.0);
    assert_eq!(m.avg_f_measure, 0.0);
    assert!(m.details.fmeasure.values().all(|&f| f == 0.0));
}

#[test]
fn test_metrics_idempotent() {
    let cv = scenario_validator();
    let a = cv.metrics().unwrap();
    let b = cv.metrics().unwrap();

    assert_eq!(a, b);
    assert_eq!(a.avg_precision.to_bits(), b.avg_precision.to_bits());
    assert_eq!(a.avg_f_measure.to_bits(), b.avg_f_measure.to_bits());
}

#[test]
fn test_perfect_predictions() {
    let mut cv = CrossValidator::new(["a", "b"]).unwrap();
    assert_eq!(cv.evaluate_all([("a", "a"), ("b", "b"), ("b", "b")]), 3);

    let m = cv.metrics().unwrap();
    assert_eq!(m.avg_precision, 1.0);
    assert_eq!(m.avg_recall, 1.0);
    assert_eq!(m.avg_f_measure, 1.0);
}

#[test]
fn test_unseen_label_scores_zero() {
    let mut cv = CrossValidator::new(["a", "b", "c"]).unwrap();
    cv.evaluate("a", "a");
    cv.evaluate("b", "b");

    let m = cv.metrics().unwrap();
    assert_eq!(m.details.precision["c"], 0.0);
    assert_eq!(m.details.recall["c"], 0.0);
    assert_eq!(m.details.fmeasure["c"], 0.0);
    assert_abs_diff_eq!(m.avg_precision, 0.6667, epsilon = 1e-12);
}

#[test]
fn test_evaluate_all_counts_accepted() {
    let mut cv = CrossValidator::new(LABELS).unwrap();
    let accepted = cv.evaluate_all([("spam", "spam"), ("spam", "unknown"), ("x", "spam")]);
    assert_eq!(accepted, 1);
}

#[test]
fn test_metrics_serialize_camel_case() {
    let m = scenario_validator().metrics().unwrap();
    let json = serde_json::to_value(&m).unwrap();

    assert_eq!(json["avgPrecision"], 0.6004);
    assert_eq!(json["avgRecall"], 0.6323);
    assert_eq!(json["avgFMeasure"], 0.6139);
    assert_eq!(json["details"]["confusionMatrix"]["urgent"]["normal"], 10);
    assert_eq!(json["details"]["fmeasure"]["spam"], 0.8265);
}

#[test]
fn test_report_lists_labels() {
    let report = scenario_validator().metrics().unwrap().to_string();

    assert!(report.contains("precision"));
    assert!(report.contains("urgent"));
    assert!(report.contains("macro avg"));
    assert!(report.contains("0.6004"));
}

#[test]
fn test_confusion_matrix_totals() {
    let cv = scenario_validator();
    let cm = cv.confusion_matrix();

    assert_eq!(cm.row_total("urgent"), Some(19));
    assert_eq!(cm.column_total("urgent"), Some(16));
    assert_eq!(cm.row_total("nope"), None);
    assert_eq!(cm.total(), 367);
    assert!(cm.contains("spam"));
    assert!(cm.to_string().starts_with("Confusion Matrix:"));
}

// =============================================================================
// Rounding
// =============================================================================

#[test]
fn test_round_uses_exact_binary_value() {
    // (value, rounded): values stored just below or above a 4-decimal tie
    let cases = [
        (3.0 / 160.0, 0.0187),
        (7.0 / 160.0, 0.0437),
        (9.0 / 160.0, 0.0563),
        (11.0 / 160.0, 0.0688),
        (1.0 / 32.0, 0.0313),
        (0.0007 / 2.0, 0.0003),
        (1.0 / 3.0, 0.3333),
        (2.0 / 3.0, 0.6667),
        (0.625, 0.625),
        (1.0, 1.0),
        (0.0, 0.0),
    ];

    for (value, expected) in cases {
        assert_eq!(round4(value), expected, "round4({value:e})");
    }
}

#[test]
fn test_round_half_up_carries() {
    assert_eq!(round_half_up(0.99995, 4), 1.0);
    assert_eq!(round_half_up(9.96, 1), 10.0);
    assert_eq!(round_half_up(2.5, 0), 3.0);
    assert_eq!(round_half_up(-2.5, 0), -3.0);
    assert!(round_half_up(f64::NAN, 4).is_nan());
}

/// Precision of `a` after `hits` (a, a) and `misses` (b, a) outcomes
fn precision_of_a(hits: usize, misses: usize) -> f64 {
    let mut cv = CrossValidator::new(["a", "b"]).unwrap();
    for _ in 0..hits {
        cv.evaluate("a", "a");
    }
    for _ in 0..misses {
        cv.evaluate("b", "a");
    }
    cv.metrics().unwrap().details.precision["a"]
}

/// Recall of `a` after `hits` (a, a) and `misses` (a, b) outcomes
fn recall_of_a(hits: usize, misses: usize) -> f64 {
    let mut cv = CrossValidator::new(["a", "b"]).unwrap();
    for _ in 0..hits {
        cv.evaluate("a", "a");
    }
    for _ in 0..misses {
        cv.evaluate("a", "b");
    }
    cv.metrics().unwrap().details.recall["a"]
}

#[test]
fn test_label_ratios_table() {
    // (hits, misses, hits / (hits + misses) rounded)
    let table = [
        (3, 157, 0.0187),
        (7, 153, 0.0437),
        (9, 151, 0.0563),
        (1, 31, 0.0313),
        (1, 2, 0.3333),
        (2, 1, 0.6667),
        (5, 3, 0.625),
    ];

    for (hits, misses, expected) in table {
        assert_eq!(precision_of_a(hits, misses), expected, "precision {hits}/{misses}");
        assert_eq!(recall_of_a(hits, misses), expected, "recall {hits}/{misses}");
    }
}

#[test]
fn test_tie_below_half_rounds_down() {
    let mut cv = CrossValidator::new(["a", "b"]).unwrap();
    for _ in 0..3 {
        cv.evaluate("a", "a");
    }
    for _ in 0..157 {
        cv.evaluate("b", "a");
    }
    let m = cv.metrics().unwrap();

    assert_eq!(m.details.precision["a"], 0.0187);
    assert_eq!(m.details.recall["a"], 1.0);
    assert_eq!(m.details.fmeasure["a"], 0.0367);
    assert_eq!(m.avg_precision, 0.0094);
    assert_eq!(m.avg_recall, 0.5);
    assert_eq!(m.avg_f_measure, 0.0184);
}

#[test]
fn test_small_fmeasure_rounding() {
    // a: precision 1/1429 -> 0.0007, recall 1/476 -> 0.0021
    let mut cv = CrossValidator::new(["a", "b"]).unwrap();
    cv.evaluate("a", "a");
    for _ in 0..1428 {
        cv.evaluate("b", "a");
    }
    for _ in 0..475 {
        cv.evaluate("a", "b");
    }
    let m = cv.metrics().unwrap();

    assert_eq!(m.details.precision["a"], 0.0007);
    assert_eq!(m.details.recall["a"], 0.0021);
    assert_eq!(m.details.fmeasure["a"], 0.001);
    assert_eq!(m.avg_precision, 0.0003);
    assert_eq!(m.avg_recall, 0.001);
    assert_eq!(m.avg_f_measure, 0.0005);
}
