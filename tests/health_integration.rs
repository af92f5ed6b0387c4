//! End-to-end checks of the evaluator through the public API.

mod common;

use common::{make_checker, synced_node, InstrumentedSource};
use galera_healthcheck::health::{HealthCheckConfig, MISSING_VALUE, MSG_NOT_PRIMARY, MSG_READ_ONLY};
use galera_healthcheck::status::{StaticStatusSource, StatusError, StatusField};
use std::sync::atomic::Ordering;

fn policy(donor: bool, read_only: bool) -> HealthCheckConfig {
    HealthCheckConfig {
        available_when_donor: donor,
        available_when_read_only: read_only,
    }
}

#[tokio::test]
async fn test_synced_primary_writable_is_healthy_under_any_policy() {
    for donor in [true, false] {
        for read_only in [true, false] {
            let result = make_checker(synced_node(), policy(donor, read_only))
                .check()
                .await;
            assert!(result.healthy);
            assert!(result.messages.is_empty());
        }
    }
}

#[tokio::test]
async fn test_any_single_lookup_error_yields_one_message() {
    for field in StatusField::ALL {
        let source = synced_node().with_error(field, StatusError::Query("test error".to_string()));
        let result = make_checker(source, policy(true, true)).check().await;

        assert!(!result.healthy, "{}", field);
        assert_eq!(
            result.messages,
            vec![format!("Could not get {} value: test error", field.name())]
        );
    }
}

#[tokio::test]
async fn test_every_field_is_looked_up_even_after_errors() {
    let source = InstrumentedSource::new(
        synced_node()
            .with_error(StatusField::WsrepLocalState, StatusError::Timeout(1))
            .with_error(StatusField::WsrepClusterStatus, StatusError::Timeout(1)),
    );
    let calls = source.call_count();

    let result = make_checker(source, policy(true, false)).check().await;

    assert_eq!(calls.load(Ordering::SeqCst), StatusField::ALL.len());
    assert_eq!(result.messages.len(), 2);
    assert_eq!(result.read_only, "OFF");
}

#[tokio::test]
async fn test_joining_is_unhealthy_without_message() {
    let source = synced_node().with_value(StatusField::WsrepLocalState, "1");
    let result = make_checker(source, policy(true, true)).check().await;

    assert!(!result.healthy);
    assert!(result.messages.is_empty());
}

#[tokio::test]
async fn test_donor_rejected_by_policy_regardless_of_other_fields() {
    let variants = [
        ("Primary", "OFF"),
        ("Primary", "ON"),
        ("Non-Primary", "OFF"),
        ("Non-Primary", "ON"),
    ];
    for (cluster_status, read_only) in variants {
        let source = synced_node()
            .with_value(StatusField::WsrepLocalState, "2")
            .with_value(StatusField::WsrepClusterStatus, cluster_status)
            .with_value(StatusField::ReadOnly, read_only);
        let result = make_checker(source, policy(false, true)).check().await;

        assert!(!result.healthy);
        assert!(result.messages.is_empty());
    }
}

#[tokio::test]
async fn test_donor_read_only_policies() {
    let donor = || {
        synced_node()
            .with_value(StatusField::WsrepLocalState, "2")
            .with_value(StatusField::ReadOnly, "ON")
    };

    let result = make_checker(donor(), policy(true, true)).check().await;
    assert!(result.healthy);
    assert!(result.messages.is_empty());

    let result = make_checker(donor(), policy(true, false)).check().await;
    assert!(!result.healthy);
    assert_eq!(result.messages, vec![MSG_READ_ONLY.to_string()]);
}

#[tokio::test]
async fn test_non_primary_message() {
    let source = synced_node().with_value(StatusField::WsrepClusterStatus, "Non-Primary");
    let result = make_checker(source, policy(true, false)).check().await;

    assert!(!result.healthy);
    assert_eq!(result.messages, vec![MSG_NOT_PRIMARY.to_string()]);
}

#[tokio::test]
async fn test_server_without_wsrep_reports_placeholders() {
    // A plain MySQL server has read_only but no wsrep_* status
    let source = StaticStatusSource::new().with_value(StatusField::ReadOnly, "OFF");
    let result = make_checker(source, policy(true, false)).check().await;

    assert!(!result.healthy);
    assert!(result.messages.is_empty());
    assert_eq!(result.local_state, MISSING_VALUE);
    assert_eq!(result.cluster_status, MISSING_VALUE);
    assert_eq!(result.ready, MISSING_VALUE);
    assert_eq!(result.read_only, "OFF");
}

#[tokio::test]
async fn test_repeated_checks_are_identical() {
    let checker = make_checker(
        synced_node()
            .with_value(StatusField::WsrepClusterStatus, "Non-Primary")
            .with_error(StatusField::WsrepReady, StatusError::Query("x".to_string())),
        policy(true, false),
    );

    let first = checker.check().await;
    for _ in 0..5 {
        assert_eq!(checker.check().await, first);
    }
}
