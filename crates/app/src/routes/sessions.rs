//! Drill session endpoints.
//!
//! A prompt travels as `{ "word": .. }` and an answer as
//! `{ "word": .., "session_id": .. }`; `POST /word` echoes both back.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use drill_core::model::{BankId, DrillSummary, SessionId, WordPair};
use services::SessionProgress;

use crate::response::AppError;
use crate::state::AppState;

/// A prompt shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInput {
    pub word: String,
}

impl From<&WordPair> for WordInput {
    fn from(pair: &WordPair) -> Self {
        Self {
            word: pair.prompt().to_owned(),
        }
    }
}

/// An answer as submitted for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOutput {
    pub word: String,
    pub session_id: SessionId,
}

/// Outcome of `POST /word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    pub success: bool,
    pub word_input: WordInput,
    pub word_output: WordOutput,
    pub hint: String,
    pub next_word: Option<WordInput>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct CreateSessionRequest {
    bank_id: Option<BankId>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreateSessionResponse {
    session_id: SessionId,
    prompt: WordInput,
}

/// Raw submission; the id is parsed by hand so a bad id is a 400 with our
/// error body rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub(super) struct SubmitWordRequest {
    session_id: String,
    word: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SessionView {
    session_id: SessionId,
    finished: bool,
    prompt: Option<WordInput>,
    progress: SessionProgress,
    accuracy: f64,
    summary: Option<DrillSummary>,
}

fn parse_session_id(raw: &str) -> Result<SessionId, AppError> {
    raw.trim()
        .parse()
        .map_err(|err| AppError::bad_request("INVALID_SESSION_ID", format!("{err}")))
}

pub(super) async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateSessionResponse>), AppError> {
    // Only an absent body means "default bank"; anything sent must parse.
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        CreateSessionRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|err| AppError::bad_request("INVALID_REQUEST", err.to_string()))?
    };
    let start = state.registry().create_session(request.bank_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: start.session_id,
            prompt: WordInput::from(&start.prompt),
        }),
    ))
}

pub(super) async fn submit_word(
    State(state): State<AppState>,
    payload: Result<Json<SubmitWordRequest>, JsonRejection>,
) -> Result<Json<WordResult>, AppError> {
    let Json(request) = payload?;
    let session_id = parse_session_id(&request.session_id)?;
    let outcome = state.registry().submit(session_id, &request.word)?;
    let result = outcome.result;

    Ok(Json(WordResult {
        success: result.correct,
        word_input: WordInput::from(result.attempt.pair()),
        word_output: WordOutput {
            word: request.word,
            session_id,
        },
        hint: result.hint,
        next_word: result.next_prompt.as_ref().map(WordInput::from),
    }))
}

pub(super) async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionView>, AppError> {
    let session_id = parse_session_id(&id)?;
    let snapshot = state.registry().snapshot(session_id)?;

    Ok(Json(SessionView {
        session_id,
        finished: snapshot.progress.is_complete,
        prompt: snapshot.current_prompt.as_ref().map(WordInput::from),
        accuracy: snapshot.progress.accuracy(),
        progress: snapshot.progress,
        summary: snapshot.summary,
    }))
}

pub(super) async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let session_id = parse_session_id(&id)?;
    if state.registry().discard(session_id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(
            "SESSION_NOT_FOUND",
            format!("unknown session {session_id}"),
        ))
    }
}
