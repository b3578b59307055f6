mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use therapy_admin_console::application::services::{AnalyticsService, StatisticsService};
use therapy_admin_console::application::view::{ViewPhase, ViewState};
use therapy_admin_console::domain::entities::ReportingPeriod;
use therapy_admin_console::infrastructure::http::HttpAnalyticsGateway;
use therapy_admin_console::infrastructure::StaticCredentials;

use common::StubState;

fn gateway(base_url: &str) -> Arc<HttpAnalyticsGateway> {
    Arc::new(
        HttpAnalyticsGateway::new(
            base_url,
            Duration::from_secs(5),
            Arc::new(StaticCredentials::new("test-token")),
        )
        .unwrap(),
    )
}

#[tokio::test]
async fn test_partial_failure_discards_whole_snapshot() {
    // Appointments succeed, engagement fails: the view must land in the error
    // phase with no partial data.
    let state = StubState::new();
    state.fail_engagement_once();
    let base_url = common::spawn_stub(state.clone()).await;

    let service = AnalyticsService::new(gateway(&base_url));
    let mut view = ViewState::new();

    let cycle = service.begin_cycle();
    let outcome = service.fetch_snapshot(ReportingPeriod::Month).await;
    view.apply(cycle, outcome);

    assert!(matches!(view.phase(), ViewPhase::Error(_)));
    assert!(view.data().is_none());

    // Both requests were issued; the successful one was still discarded.
    assert_eq!(state.appointment_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.engagement_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_retry_reissues_both_requests() {
    let state = StubState::new();
    state.fail_engagement_once();
    let base_url = common::spawn_stub(state.clone()).await;

    let service = AnalyticsService::new(gateway(&base_url));
    let mut view = ViewState::new();

    // First cycle fails.
    let cycle = service.begin_cycle();
    let outcome = service.fetch_snapshot(ReportingPeriod::Month).await;
    view.apply(cycle, outcome);
    assert!(matches!(view.phase(), ViewPhase::Error(_)));

    // Retry re-runs the identical cycle: both endpoints are hit again.
    let cycle = service.begin_cycle();
    let outcome = service.fetch_snapshot(ReportingPeriod::Month).await;
    view.apply(cycle, outcome);

    let snapshot = view.data().expect("retry should produce a snapshot");
    assert_eq!(snapshot.appointments.total_appointments, 15);
    assert_eq!(state.appointment_calls.load(Ordering::SeqCst), 2);
    assert_eq!(state.engagement_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_successful_cycle_assembles_both_halves() {
    let state = StubState::new();
    let base_url = common::spawn_stub(state).await;

    let service = AnalyticsService::new(gateway(&base_url));
    let mut view = ViewState::new();

    let cycle = service.begin_cycle();
    let outcome = service.fetch_snapshot(ReportingPeriod::Quarter).await;
    view.apply(cycle, outcome);

    let snapshot = view.data().expect("cycle should succeed");
    assert_eq!(snapshot.period, ReportingPeriod::Quarter);
    assert_eq!(snapshot.appointments.daily_breakdown.len(), 3);
    assert_eq!(snapshot.engagement.chat_engagement.len(), 2);
}

#[tokio::test]
async fn test_superseded_cycle_cannot_overwrite_newer_data() {
    let state = StubState::new();
    let base_url = common::spawn_stub(state).await;

    let service = AnalyticsService::new(gateway(&base_url));
    let mut view = ViewState::new();

    // The user switches period before the first cycle's result is applied.
    let older = service.begin_cycle();
    let older_outcome = service.fetch_snapshot(ReportingPeriod::Week).await;

    let newer = service.begin_cycle();
    let newer_outcome = service.fetch_snapshot(ReportingPeriod::Year).await;

    // Newer completes first; the older result arrives late and is discarded.
    assert!(view.apply(newer, newer_outcome));
    assert!(!view.apply(older, older_outcome));

    assert_eq!(view.data().unwrap().period, ReportingPeriod::Year);
}

#[tokio::test]
async fn test_statistics_cycle() {
    let state = StubState::new();
    let base_url = common::spawn_stub(state.clone()).await;

    let service = StatisticsService::new(gateway(&base_url));
    let mut view = ViewState::new();

    let cycle = service.begin_cycle();
    let outcome = service.fetch_summary().await;
    view.apply(cycle, outcome);

    let summary = view.data().expect("statistics cycle should succeed");
    assert_eq!(summary.appointments.total, 200);
    assert_eq!(state.statistics_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_statistics_auth_failure_reaches_error_phase() {
    let state = StubState::new();
    state.reject_all_auth();
    let base_url = common::spawn_stub(state).await;

    let service = StatisticsService::new(gateway(&base_url));
    let mut view = ViewState::new();

    let cycle = service.begin_cycle();
    let outcome = service.fetch_summary().await;
    view.apply(cycle, outcome);

    match view.phase() {
        ViewPhase::Error(message) => assert!(message.contains("authentication failed")),
        other => panic!("expected error phase, got {other:?}"),
    }
}
