//! Classifier behavior against a scripted interpreter.

use haven_core::effects::InterpreterError;
use haven_core::{InterpreterResponse, ObservationRecord};
use haven_effects::ScriptedInterpreter;
use haven_query::{
    ImageSource, ImageUrlResolver, ObservationEntry, QueryClassifier, QueryError,
};
use proptest::prelude::*;
use std::sync::Arc;

const PUBLIC_BASE: &str = "https://store.example.co";

fn classifier(interpreter: &ScriptedInterpreter) -> QueryClassifier {
    QueryClassifier::new(
        Arc::new(interpreter.clone()),
        ImageUrlResolver::new(PUBLIC_BASE),
    )
}

fn observation(name: &str, authorized: bool, image_url: Option<&str>) -> ObservationRecord {
    ObservationRecord {
        name: name.to_string(),
        timestamp: "2025-01-01T10:00:00Z".to_string(),
        authorized,
        image_url: image_url.map(str::to_string),
    }
}

#[tokio::test]
async fn success_response_is_partitioned_and_enriched() {
    let interpreter = ScriptedInterpreter::new();
    interpreter.push(Ok(InterpreterResponse::Success {
        data: vec![
            observation("Amir", true, Some("a.jpg")),
            observation("X", false, None),
        ],
    }));

    let groups = classifier(&interpreter)
        .submit("who was here today")
        .await
        .unwrap();

    assert_eq!(groups.authorized.len(), 1);
    assert_eq!(groups.non_authorized.len(), 1);

    match &groups.authorized[0] {
        ObservationEntry::Observation(entry) => {
            assert_eq!(entry.name, "Amir");
            assert!(entry.authorized);
            assert_eq!(
                entry.image,
                ImageSource::Remote(format!(
                    "{PUBLIC_BASE}/storage/v1/object/public/authorized_faces/a.jpg"
                ))
            );
        }
        ObservationEntry::Notice { .. } => panic!("expected observation"),
    }

    match &groups.non_authorized[0] {
        ObservationEntry::Observation(entry) => {
            assert_eq!(entry.name, "X");
            assert!(!entry.authorized);
            assert_eq!(entry.image, ImageSource::Placeholder);
        }
        ObservationEntry::Notice { .. } => panic!("expected observation"),
    }
}

#[tokio::test]
async fn non_success_status_becomes_single_notice() {
    let interpreter = ScriptedInterpreter::new();
    interpreter.push(Ok(InterpreterResponse::Failure {
        message: "no data".to_string(),
    }));

    let groups = classifier(&interpreter).submit("anything").await.unwrap();

    assert!(groups.authorized.is_empty());
    assert_eq!(
        groups.non_authorized,
        vec![ObservationEntry::Notice {
            message: "no data".to_string()
        }]
    );
}

#[tokio::test]
async fn transport_failure_is_normalized_never_propagated() {
    let interpreter = ScriptedInterpreter::new();
    interpreter.push(Err(InterpreterError::Status { status: 500 }));

    let groups = classifier(&interpreter).submit("anything").await.unwrap();

    assert!(groups.authorized.is_empty());
    match &groups.non_authorized[0] {
        ObservationEntry::Notice { message } => {
            assert!(message.contains("500"), "got: {message}");
        }
        ObservationEntry::Observation(_) => panic!("expected notice"),
    }
}

#[tokio::test]
async fn empty_query_fails_fast_without_a_network_call() {
    let interpreter = ScriptedInterpreter::new();
    let result = classifier(&interpreter).submit("   ").await;

    assert!(matches!(result, Err(QueryError::EmptyQuery)));
    assert!(interpreter.received().is_empty());
}

#[tokio::test]
async fn query_text_is_trimmed_before_submission() {
    let interpreter = ScriptedInterpreter::new();
    interpreter.push(Ok(InterpreterResponse::Success { data: vec![] }));

    classifier(&interpreter)
        .submit("  who rang the bell  ")
        .await
        .unwrap();
    assert_eq!(interpreter.received(), vec!["who rang the bell"]);
}

fn arbitrary_records() -> impl Strategy<Value = Vec<ObservationRecord>> {
    prop::collection::vec(
        (any::<u8>(), any::<bool>(), any::<Option<u8>>()).prop_map(
            |(n, authorized, image)| ObservationRecord {
                name: format!("person-{n}"),
                timestamp: "2025-01-01T10:00:00Z".to_string(),
                authorized,
                image_url: image.map(|i| format!("face-{i}.jpg")),
            },
        ),
        0..32,
    )
}

proptest! {
    /// Partition is total and disjoint: group sizes sum to the input length
    /// and every entry sits in the group matching its verdict.
    #[test]
    fn partition_is_total_and_disjoint(records in arbitrary_records()) {
        let interpreter = ScriptedInterpreter::new();
        let classifier = classifier(&interpreter);

        let expected_authorized = records.iter().filter(|r| r.authorized).count();
        let groups = classifier.classify(records.clone());

        prop_assert_eq!(groups.authorized.len(), expected_authorized);
        prop_assert_eq!(
            groups.authorized.len() + groups.non_authorized.len(),
            records.len()
        );

        for entry in &groups.authorized {
            match entry {
                ObservationEntry::Observation(o) => prop_assert!(o.authorized),
                ObservationEntry::Notice { .. } => prop_assert!(false, "notice in partition"),
            }
        }
        for entry in &groups.non_authorized {
            match entry {
                ObservationEntry::Observation(o) => prop_assert!(!o.authorized),
                ObservationEntry::Notice { .. } => prop_assert!(false, "notice in partition"),
            }
        }
    }
}
