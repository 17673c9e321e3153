use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, ThisError)]
pub enum Error {
  #[error("affiliate not found")]
  AffiliateNotFound,
  #[error("withdrawal request not found")]
  WithdrawalNotFound,
  #[error("{0}")]
  InvalidArgs(String),
  #[error(transparent)]
  Db(#[from] DbErr),
}

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Self::AffiliateNotFound | Self::WithdrawalNotFound => {
        StatusCode::NOT_FOUND
      }
      Self::InvalidArgs(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Db(err) => {
        tracing::error!("database error: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
      }
    };

    (status, Json(ErrorBody { error: self.to_string() })).into_response()
  }
}
