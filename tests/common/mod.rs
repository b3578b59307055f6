#![allow(dead_code)]

//! Stub admin API backend for gateway and fetch-cycle tests.
//!
//! Serves canned payloads on the three admin endpoints, records the bearer
//! headers and periods it sees, and can be told to fail requests so tests can
//! drive the error/retry paths.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared stub state, cloneable into handlers and inspectable from tests.
#[derive(Clone, Default)]
pub struct StubState {
    pub appointment_calls: Arc<AtomicUsize>,
    pub engagement_calls: Arc<AtomicUsize>,
    pub statistics_calls: Arc<AtomicUsize>,
    /// Raw `Authorization` header of every request, in arrival order.
    pub seen_auth_headers: Arc<Mutex<Vec<String>>>,
    /// `period` query value of every appointments request.
    pub seen_periods: Arc<Mutex<Vec<String>>>,
    /// Remaining engagement requests to fail with a 500.
    pub engagement_failures: Arc<AtomicUsize>,
    /// When set, every request is rejected with a 401.
    pub reject_auth: Arc<AtomicBool>,
}

impl StubState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_engagement_once(&self) {
        self.engagement_failures.store(1, Ordering::SeqCst);
    }

    pub fn reject_all_auth(&self) {
        self.reject_auth.store(true, Ordering::SeqCst);
    }

    pub fn auth_headers(&self) -> Vec<String> {
        self.seen_auth_headers.lock().unwrap().clone()
    }

    pub fn periods(&self) -> Vec<String> {
        self.seen_periods.lock().unwrap().clone()
    }

    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        self.seen_auth_headers.lock().unwrap().push(value);
    }
}

/// Binds the stub on an ephemeral port and returns its API base URL.
pub async fn spawn_stub(state: StubState) -> String {
    let app = Router::new()
        .route("/api/admin/analytics/appointments", get(appointments))
        .route("/api/admin/analytics/engagement", get(engagement))
        .route("/api/admin/statistics", get(statistics))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

async fn appointments(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.appointment_calls.fetch_add(1, Ordering::SeqCst);
    state.record_auth(&headers);
    state
        .seen_periods
        .lock()
        .unwrap()
        .push(params.get("period").cloned().unwrap_or_default());

    if state.reject_auth.load(Ordering::SeqCst) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Json(appointments_body()))
}

async fn engagement(
    State(state): State<StubState>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.engagement_calls.fetch_add(1, Ordering::SeqCst);
    state.record_auth(&headers);

    if state.reject_auth.load(Ordering::SeqCst) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let failures = &state.engagement_failures;
    if failures
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
    {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    Ok(Json(engagement_body()))
}

async fn statistics(
    State(state): State<StubState>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    state.statistics_calls.fetch_add(1, Ordering::SeqCst);
    state.record_auth(&headers);

    if state.reject_auth.load(Ordering::SeqCst) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Json(statistics_body()))
}

pub fn appointments_body() -> Value {
    json!({
        "dailyBreakdown": [
            {"_id": {"date": "2024-03-01"}, "count": 4},
            {"_id": {"date": "2024-03-02"}, "count": 9},
            {"_id": {"date": "2024-03-03"}, "count": 2}
        ],
        "therapistPerformance": [
            {"therapistName": "Dr. Smith", "totalAppointments": 10,
             "completedAppointments": 8, "completionRate": 80.0},
            {"therapistName": "Dr. Jones", "totalAppointments": 5,
             "completedAppointments": 5}
        ],
        "totalAppointments": 15
    })
}

pub fn engagement_body() -> Value {
    json!({
        "userRegistrationTrends": [
            {"_id": {"year": 2024, "month": 2}, "count": 13},
            {"_id": {"year": 2024, "month": 3}, "count": 21}
        ],
        "activeUsers": 64,
        "userActivityStats": [
            {"name": "Alice", "appointmentCount": 5,
             "lastAppointment": "2024-03-05T10:00:00Z"},
            {"name": "Bob", "appointmentCount": 3}
        ],
        "chatEngagement": [
            {"userName": "alice", "chatSessions": 4, "totalMessages": 120},
            {"userName": "bob", "chatSessions": 2, "totalMessages": 35}
        ]
    })
}

pub fn statistics_body() -> Value {
    json!({
        "statistics": {
            "users": {"total": 120, "newThisMonth": 14},
            "therapists": {
                "total": 18,
                "active": 12,
                "topPerformers": [
                    {"therapistName": "Dr. Smith", "specialization": ["CBT", "EMDR"],
                     "totalAppointments": 40, "completedAppointments": 36,
                     "completionRate": 90.0}
                ]
            },
            "appointments": {
                "total": 200,
                "thisMonth": 42,
                "statusBreakdown": [
                    {"_id": "completed", "count": 150},
                    {"_id": "cancelled", "count": 50}
                ],
                "sessionTypeBreakdown": [
                    {"_id": "video", "count": 120},
                    {"_id": "chat", "count": 80}
                ]
            },
            "chat": {"totalMessages": 3200, "messagesThisMonth": 410},
            "reminders": {"total24h": 30, "total1h": 28, "total15min": 25},
            "systemHealth": {
                "databaseConnections": "healthy",
                "reminderScheduler": {"24h": {}, "1h": {}, "15min": {}},
                "emailService": "operational",
                "lastBackup": "2024-03-01T00:00:00Z"
            },
            "recentActivity": {
                "appointments": [
                    {"userId": {"name": "Alice"}, "therapistId": {"name": "Dr. Smith"},
                     "status": "confirmed", "startDateTime": "2024-03-06T09:00:00Z"}
                ],
                "users": [
                    {"name": "Carol", "email": "carol@example.com",
                     "createdAt": "2024-03-04T12:00:00Z"}
                ]
            }
        }
    })
}
