use axum::{
  Json,
  extract::{Path, State},
};
use serde::Deserialize;

use crate::{
  entity::{affiliate, referred_customer, withdrawal_request},
  prelude::*,
  state::AppState,
  sv,
  sv::{
    dashboard::DashboardSummary, order::OrderOutcome, referral::ReferralCheck,
    settings::CommissionRates,
  },
};

pub async fn health() -> Json<json::Value> {
  Json(json::json!({
    "status": "ok",
    "timestamp": Utc::now().to_rfc3339(),
  }))
}

#[derive(Deserialize)]
pub struct ValidateReferralReq {
  pub referral_code: String,
}

pub async fn validate_referral(
  State(app): State<Arc<AppState>>,
  Json(req): Json<ValidateReferralReq>,
) -> Result<Json<ReferralCheck>> {
  let check = sv::Referral::new(&app.db).validate(&req.referral_code).await?;
  Ok(Json(check))
}

#[derive(Deserialize)]
pub struct ConfirmOrderReq {
  pub user_id: String,
  pub affiliate_id: String,
  pub order_amount: f64,
  pub recurring: bool,
}

pub async fn confirm_order(
  State(app): State<Arc<AppState>>,
  Json(req): Json<ConfirmOrderReq>,
) -> Result<Json<OrderOutcome>> {
  let outcome = sv::Order::new(&app.db)
    .confirm(&req.user_id, &req.affiliate_id, req.order_amount, req.recurring)
    .await?;
  Ok(Json(outcome))
}

pub async fn list_affiliates(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<affiliate::Model>>> {
  Ok(Json(sv::Dashboard::new(&app.db).all_affiliates().await?))
}

pub async fn pending_withdrawals(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<withdrawal_request::Model>>> {
  Ok(Json(sv::Withdrawal::new(&app.db).pending().await?))
}

#[derive(Deserialize)]
pub struct ApproveWithdrawalReq {
  pub id: String,
  pub payment_proof_url: Option<String>,
}

pub async fn approve_withdrawal(
  State(app): State<Arc<AppState>>,
  Json(req): Json<ApproveWithdrawalReq>,
) -> Result<Json<withdrawal_request::Model>> {
  let request = sv::Withdrawal::new(&app.db)
    .approve(&req.id, req.payment_proof_url)
    .await?;
  info!("withdrawal {} approved", request.id);
  Ok(Json(request))
}

#[derive(Deserialize)]
pub struct DeclineWithdrawalReq {
  pub id: String,
}

pub async fn decline_withdrawal(
  State(app): State<Arc<AppState>>,
  Json(req): Json<DeclineWithdrawalReq>,
) -> Result<Json<withdrawal_request::Model>> {
  let request = sv::Withdrawal::new(&app.db).decline(&req.id).await?;
  info!("withdrawal {} declined", request.id);
  Ok(Json(request))
}

pub async fn get_settings(
  State(app): State<Arc<AppState>>,
) -> Result<Json<CommissionRates>> {
  Ok(Json(sv::Settings::new(&app.db).get().await?))
}

#[derive(Deserialize)]
pub struct UpdateSettingsReq {
  pub recurring_percentage: f64,
  pub one_time_percentage: f64,
}

pub async fn update_settings(
  State(app): State<Arc<AppState>>,
  Json(req): Json<UpdateSettingsReq>,
) -> Result<Json<CommissionRates>> {
  let rates = sv::Settings::new(&app.db)
    .update(req.recurring_percentage, req.one_time_percentage)
    .await?;
  Ok(Json(rates))
}

pub async fn affiliate_dashboard(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<DashboardSummary>> {
  Ok(Json(sv::Dashboard::new(&app.db).summary(&id).await?))
}

pub async fn affiliate_referrals(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<referred_customer::Model>>> {
  Ok(Json(sv::Order::new(&app.db).referrals(&id).await?))
}

pub async fn affiliate_withdrawals(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<withdrawal_request::Model>>> {
  Ok(Json(sv::Withdrawal::new(&app.db).for_affiliate(&id).await?))
}

#[derive(Deserialize)]
pub struct CreateWithdrawalReq {
  pub affiliate_id: String,
  pub amount: f64,
}

pub async fn create_withdrawal(
  State(app): State<Arc<AppState>>,
  Json(req): Json<CreateWithdrawalReq>,
) -> Result<Json<withdrawal_request::Model>> {
  let request =
    sv::Withdrawal::new(&app.db).create(&req.affiliate_id, req.amount).await?;
  Ok(Json(request))
}
