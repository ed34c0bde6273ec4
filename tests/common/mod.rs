// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use twotoo::config::Config;
use twotoo::domain::models::{
    ApproveChallengeRequest, BeforeChallengeState, Challenge, ChallengeDetail, CheerRequest,
    Commit, CommitRequest, CreateChallengeRequest, HomeView, Notification, StingRequest, User,
};
use twotoo::domain::repository::{
    ChallengeRepository, CommitRepository, NotificationRepository, ViewRepository,
};
use twotoo::error::{AppError, Result};

/// Challenge number the stub backend knows about.
#[allow(dead_code)]
pub const KNOWN_CHALLENGE: u64 = 3;

#[allow(dead_code)]
pub fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("valid test date")
}

// ─── Stub backend ────────────────────────────────────────────────────────────

/// Counts requests that reached the stub backend and keeps the last JSON body.
#[derive(Clone, Default)]
pub struct Hits {
    count: Arc<AtomicUsize>,
    last_body: Arc<Mutex<Option<Value>>>,
}

#[allow(dead_code)]
impl Hits {
    fn record(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn record_body(&self, body: Value) {
        self.record();
        *self.last_body.lock().unwrap() = Some(body);
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {}", Config::default().access_token);
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "invalid token").into_response()
}

#[allow(dead_code)]
pub fn commit_json(no: u64, user_no: u64, created_at: &str, cheer: Option<&str>) -> Value {
    json!({
        "commitNo": no,
        "userNo": user_no,
        "text": format!("proof {}", no),
        "photoUrl": format!("https://img.twotoo.test/{}.jpg", no),
        "partnerComment": cheer,
        "createdAt": created_at,
    })
}

#[allow(dead_code)]
pub fn challenge_json(no: u64) -> Value {
    json!({
        "challengeNo": no,
        "name": "Morning run",
        "description": "5km before work",
        "startDate": "2023-05-01T00:00:00.000Z",
        "endDate": "2023-05-03T00:00:00.000Z",
        "isFinished": true,
        "user1": {"userNo": 1, "nickname": "sun", "partnerNo": 2},
        "user2": {"userNo": 2, "nickname": "moon", "partnerNo": 1},
    })
}

#[allow(dead_code)]
pub fn detail_json() -> Value {
    json!({
        "challenge": challenge_json(KNOWN_CHALLENGE),
        "myCommits": [commit_json(10, 1, "2023-05-01T08:00:00.000Z", Some("nice"))],
        "partnerCommits": [commit_json(20, 2, "2023-05-02T21:15:00.000Z", None)],
    })
}

/// Router mimicking the Twotoo REST backend.
fn stub_router(hits: Hits) -> Router {
    let h = hits.clone();
    let get_challenge = move |headers: HeaderMap, Path(no): Path<u64>| {
        let h = h.clone();
        async move {
            h.record();
            if !authorized(&headers) {
                return unauthorized();
            }
            if no != KNOWN_CHALLENGE {
                return (StatusCode::NOT_FOUND, "challenge not found").into_response();
            }
            Json(detail_json()).into_response()
        }
    };

    let h = hits.clone();
    let delete_challenge = move |Path(no): Path<u64>| {
        let h = h.clone();
        async move {
            h.record();
            Json(no)
        }
    };

    let h = hits.clone();
    let create_commit = move |headers: HeaderMap, body: Bytes| {
        let h = h.clone();
        async move {
            h.record();
            let multipart = headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("multipart/form-data"));
            let body = String::from_utf8_lossy(&body);
            if !multipart || !body.contains("challengeNo") || !body.contains("name=\"img\"") {
                return (StatusCode::BAD_REQUEST, "malformed commit").into_response();
            }
            Json(commit_json(30, 1, "2023-05-03T07:00:00.000Z", None)).into_response()
        }
    };

    let h = hits.clone();
    let cheer = move |Path(no): Path<u64>, Json(body): Json<Value>| {
        let h = h.clone();
        async move {
            h.record();
            let text = body["text"].as_str().unwrap_or_default().to_string();
            Json(commit_json(no, 2, "2023-05-02T21:15:00.000Z", Some(text.as_str())))
        }
    };

    let h = hits.clone();
    let sting = move || {
        let h = h.clone();
        async move {
            h.record();
            (StatusCode::INTERNAL_SERVER_ERROR, "sting service down")
        }
    };

    let h = hits.clone();
    let create_challenge = move |Json(body): Json<Value>| {
        let h = h.clone();
        async move {
            let mut created = challenge_json(5);
            created["name"] = body["name"].clone();
            created["startDate"] = body["startDate"].clone();
            created["endDate"] = body["endDate"].clone();
            created["isFinished"] = json!(false);
            h.record_body(body);
            Json(created)
        }
    };

    let h = hits.clone();
    let all_challenges = move || {
        let h = h.clone();
        async move {
            h.record();
            Json(json!([challenge_json(KNOWN_CHALLENGE)]))
        }
    };

    let h = hits.clone();
    let approve = move |Path(no): Path<u64>, Json(body): Json<Value>| {
        let h = h.clone();
        async move {
            h.record_body(body);
            let mut approved = challenge_json(no);
            approved["isFinished"] = json!(false);
            Json(approved)
        }
    };

    let h = hits.clone();
    let finish = move |Path(no): Path<u64>| {
        let h = h.clone();
        async move {
            h.record();
            Json(challenge_json(no))
        }
    };

    let h = hits.clone();
    let get_commit = move |Path(no): Path<u64>| {
        let h = h.clone();
        async move {
            h.record();
            Json(commit_json(no, 2, "2023-05-02T21:15:00.000Z", Some("cheers")))
        }
    };

    let h = hits;
    let home = move || {
        let h = h.clone();
        async move {
            h.record();
            Json(json!({
                "beforeChallengeState": "RESPONSE",
                "myCommitCount": 0,
                "partnerCommitCount": 0,
                "challengeCount": 0,
                "stingCount": 3,
            }))
        }
    };

    Router::new()
        .route("/challenge", get(all_challenges).post(create_challenge))
        .route("/challenge/{no}", get(get_challenge).delete(delete_challenge))
        .route("/challenge/{no}/approve", post(approve))
        .route("/challenge/{no}/finish", post(finish))
        .route("/commit", post(create_commit))
        .route("/commit/{no}", get(get_commit))
        .route("/commit/{no}/cheer", post(cheer))
        .route("/notification/sting", post(sting))
        .route("/view/home", get(home))
}

/// Serve the stub backend on an ephemeral port.
///
/// Returns a config pointed at it and the request counter.
#[allow(dead_code)]
pub async fn spawn_backend() -> (Config, Hits) {
    let hits = Hits::default();
    let app = stub_router(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub backend stopped");
    });

    (Config::default().with_api_url(format!("http://{}", addr)), hits)
}

// ─── In-memory repository ────────────────────────────────────────────────────

#[allow(dead_code)]
pub fn user(no: u64, nickname: &str) -> User {
    User {
        user_no: no,
        nickname: nickname.to_string(),
        partner_no: Some(if no == 1 { 2 } else { 1 }),
    }
}

#[allow(dead_code)]
pub fn challenge(no: u64, start: &str, end: &str, is_finished: bool) -> Challenge {
    Challenge {
        challenge_no: no,
        name: "Morning run".to_string(),
        description: "5km before work".to_string(),
        start_date: date(start),
        end_date: date(end),
        is_finished,
        user1: user(1, "sun"),
        user2: user(2, "moon"),
    }
}

#[allow(dead_code)]
pub fn commit(no: u64, user_no: u64, day: &str) -> Commit {
    Commit {
        commit_no: no,
        user_no: Some(user_no),
        text: format!("proof {}", no),
        image_url: format!("https://img.twotoo.test/{}.jpg", no),
        created_date: date(day),
        cheer_text: None,
    }
}

#[allow(dead_code)]
pub fn home_view(ongoing: Option<Challenge>) -> HomeView {
    HomeView {
        ongoing,
        before_state: BeforeChallengeState::Empty,
        my_commit: None,
        partner_commit: None,
        my_commit_count: 0,
        partner_commit_count: 0,
        challenge_count: 1,
        sting_count: 3,
    }
}

#[derive(Default)]
pub struct FakeState {
    pub detail: Option<ChallengeDetail>,
    pub home: Option<HomeView>,
    /// Every write call fails with an API error
    pub fail_writes: bool,
    /// Names of the repository calls made so far
    pub calls: Vec<String>,
}

/// In-memory repository; clones share state so tests can inspect calls.
#[derive(Clone, Default)]
pub struct FakeRepo(Arc<Mutex<FakeState>>);

#[allow(dead_code)]
impl FakeRepo {
    pub fn with(setup: impl FnOnce(&mut FakeState)) -> Self {
        let repo = Self::default();
        repo.update(setup);
        repo
    }

    pub fn update(&self, change: impl FnOnce(&mut FakeState)) {
        let mut state = self.0.lock().unwrap();
        change(&mut *state);
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().calls.clone()
    }

    fn read<T>(&self, call: &str, pick: impl FnOnce(&FakeState) -> Option<T>) -> Result<T> {
        let mut state = self.0.lock().unwrap();
        state.calls.push(call.to_string());
        pick(&*state).ok_or_else(|| AppError::NotFound(call.to_string()))
    }

    fn write<T>(&self, call: &str, value: T) -> Result<T> {
        let mut state = self.0.lock().unwrap();
        state.calls.push(call.to_string());
        if state.fail_writes {
            return Err(AppError::Api("HTTP 500 Internal Server Error: boom".to_string()));
        }
        Ok(value)
    }
}

impl ChallengeRepository for FakeRepo {
    async fn create_challenge(&self, request: &CreateChallengeRequest) -> Result<Challenge> {
        let mut created = challenge(99, "2023-05-01", "2023-05-01", false);
        created.name = request.name.clone();
        created.start_date = request.start_date;
        created.end_date = request.end_date;
        self.write("create_challenge", created)
    }

    async fn get_all_challenges(&self) -> Result<Vec<Challenge>> {
        self.read("get_all_challenges", |s| {
            Some(s.detail.iter().map(|d| d.challenge.clone()).collect())
        })
    }

    async fn get_challenge_detail(&self, challenge_no: u64) -> Result<ChallengeDetail> {
        self.read("get_challenge_detail", |s| {
            s.detail
                .clone()
                .filter(|d| d.challenge.challenge_no == challenge_no)
        })
    }

    async fn quit_challenge(&self, challenge_no: u64) -> Result<u64> {
        self.write("quit_challenge", challenge_no)
    }

    async fn approve_challenge(
        &self,
        challenge_no: u64,
        _request: &ApproveChallengeRequest,
    ) -> Result<Challenge> {
        self.write(
            "approve_challenge",
            challenge(challenge_no, "2023-05-01", "2023-05-22", false),
        )
    }

    async fn finish_challenge(&self, challenge_no: u64) -> Result<Challenge> {
        self.write(
            "finish_challenge",
            challenge(challenge_no, "2023-05-01", "2023-05-22", true),
        )
    }
}

impl CommitRepository for FakeRepo {
    async fn create_commit(&self, request: &CommitRequest) -> Result<Commit> {
        let mut created = commit(50, 1, "2023-05-03");
        created.text = request.text.clone();
        self.write("create_commit", created)
    }

    async fn get_commit(&self, commit_no: u64) -> Result<Commit> {
        self.read("get_commit", |s| {
            s.detail.as_ref().and_then(|d| {
                d.my_commits
                    .iter()
                    .chain(&d.partner_commits)
                    .find(|c| c.commit_no == commit_no)
                    .cloned()
            })
        })
    }

    async fn cheer(&self, commit_no: u64, request: &CheerRequest) -> Result<Commit> {
        let mut cheered = commit(commit_no, 2, "2023-05-03");
        cheered.cheer_text = Some(request.text.clone());
        self.write("cheer", cheered)
    }
}

impl NotificationRepository for FakeRepo {
    async fn sting(&self, request: &StingRequest) -> Result<Notification> {
        let notification = Notification {
            notification_no: 7,
            receiver_no: 2,
            message: request.message.clone(),
            created_at: "2023-05-03T10:00:00".to_string(),
        };
        self.write("sting", notification)
    }
}

impl ViewRepository for FakeRepo {
    async fn get_home_view(&self) -> Result<HomeView> {
        self.read("get_home_view", |s| s.home.clone())
    }
}
