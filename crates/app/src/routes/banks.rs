use axum::Json;
use axum::extract::State;
use serde::Serialize;

use storage::repository::BankEntry;

use crate::response::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub(super) struct BankList {
    banks: Vec<BankEntry>,
}

pub(super) async fn list_banks(State(state): State<AppState>) -> Result<Json<BankList>, AppError> {
    let banks = state.banks().list_banks().await?;
    Ok(Json(BankList { banks }))
}
