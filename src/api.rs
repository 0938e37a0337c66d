// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Blocking client for the expense tracking backend.

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::engine::Period;
use crate::errors::ApiError;
use crate::ingest::{Ingested, decode_records};
use crate::models::{
    Account, Category, CategoryLimit, CategorySpending, ContributionReport, Credentials,
    GoalRequest, HistoryFilter, LoginResponse, NewAccount, NewCategory, NewCategoryLimit,
    NewTransaction, SavedGoal, SavedTransaction, SavingsGoal, Transaction, TransactionPatch,
};
use crate::session::Session;

const UA: &str = concat!("spendwise/", env!("CARGO_PKG_VERSION"));

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Option<Session>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(UA)
            .build()?;
        Ok(ApiClient {
            http,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}api/{}", self.base_url, path)
    }

    fn user_id(&self) -> ApiResult<i64> {
        self.session
            .as_ref()
            .map(|s| s.user_id)
            .ok_or(ApiError::NotLoggedIn)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "request");
        let rb = self.http.request(method, url);
        match self.session {
            Some(ref s) => rb.bearer_auth(&s.access_token),
            None => rb,
        }
    }

    fn send(&self, rb: RequestBuilder) -> ApiResult<String> {
        let resp = rb.send()?;
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            debug!(status = status.as_u16(), "request failed");
            return Err(ApiError::classify(status.as_u16(), &body));
        }
        Ok(body)
    }

    fn send_json<T: DeserializeOwned>(&self, rb: RequestBuilder) -> ApiResult<T> {
        let body = self.send(rb)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn send_list<T: DeserializeOwned>(&self, rb: RequestBuilder) -> ApiResult<Ingested<T>> {
        let value: Value = self.send_json(rb)?;
        decode_records(value).map_err(|e| ApiError::Shape(e.to_string()))
    }

    // Auth

    pub fn register(&self, account: &NewAccount) -> ApiResult<()> {
        self.send(self.request(Method::POST, "register/").json(account))?;
        info!(username = %account.username, "registered");
        Ok(())
    }

    pub fn login(&self, creds: &Credentials) -> ApiResult<Session> {
        let resp: LoginResponse = self.send_json(self.request(Method::POST, "login/").json(creds))?;
        Ok(Session::from_login(resp))
    }

    // Account

    pub fn account(&self) -> ApiResult<Account> {
        self.send_json(self.request(Method::GET, "account/"))
    }

    pub fn update_income(&self, income: Decimal) -> ApiResult<Account> {
        self.send_json(
            self.request(Method::PATCH, "account/")
                .json(&json!({ "income": income })),
        )
    }

    pub fn activate_premium(&self) -> ApiResult<Account> {
        self.send_json(
            self.request(Method::PATCH, "account/")
                .json(&json!({ "is_premium": true })),
        )
    }

    // Categories

    pub fn categories(&self) -> ApiResult<Ingested<Category>> {
        let user_id = self.user_id()?;
        self.send_list(
            self.request(Method::GET, "getCategories/")
                .query(&[("user_id", user_id)]),
        )
    }

    pub fn create_category(&self, name: &str, description: &str) -> ApiResult<Category> {
        let body = NewCategory {
            name: name.to_string(),
            user_id: self.user_id()?,
            description: description.to_string(),
        };
        self.send_json(self.request(Method::POST, "createCategory/").json(&body))
    }

    // Transactions

    pub fn transactions(&self, period: Period) -> ApiResult<Ingested<Transaction>> {
        let user_id = self.user_id()?;
        self.send_list(self.request(Method::GET, "transactions/").query(&[
            ("user_id", user_id.to_string()),
            ("date", period.month_index().to_string()),
        ]))
    }

    pub fn transaction_history(&self, filter: &HistoryFilter) -> ApiResult<Ingested<Transaction>> {
        let user_id = self.user_id()?;
        self.send_list(
            self.request(Method::GET, "history/")
                .query(&filter.query_pairs(user_id)),
        )
    }

    pub fn transaction(&self, id: i64) -> ApiResult<Transaction> {
        self.send_json(self.request(Method::GET, &format!("transactions/{}/", id)))
    }

    pub fn create_transaction(&self, tx: &NewTransaction) -> ApiResult<SavedTransaction> {
        self.send_json(self.request(Method::POST, "createTransaction/").json(tx))
    }

    pub fn update_transaction(&self, id: i64, patch: &TransactionPatch) -> ApiResult<Transaction> {
        self.send_json(
            self.request(Method::PATCH, &format!("transactions/{}/", id))
                .json(patch),
        )
    }

    pub fn delete_transaction(&self, id: i64) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("transactions/{}/", id)))?;
        Ok(())
    }

    // Category limits (premium)

    /// Non-premium accounts get an empty list rather than an error.
    pub fn category_limits(&self) -> ApiResult<Ingested<CategoryLimit>> {
        match self.send_list(self.request(Method::GET, "category-limits/")) {
            Err(ApiError::Forbidden(msg)) => {
                debug!(%msg, "category limits unavailable");
                Ok(Ingested {
                    records: Vec::new(),
                    rejected: Vec::new(),
                })
            }
            other => other,
        }
    }

    pub fn set_category_limit(&self, limit: &NewCategoryLimit) -> ApiResult<CategoryLimit> {
        self.send_json(self.request(Method::POST, "category-limits/").json(limit))
    }

    pub fn update_category_limit(&self, id: i64, limit_amount: Decimal) -> ApiResult<CategoryLimit> {
        self.send_json(
            self.request(Method::PATCH, &format!("category-limits/{}/", id))
                .json(&json!({ "limit_amount": limit_amount })),
        )
    }

    pub fn delete_category_limit(&self, id: i64) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("category-limits/{}/", id)))?;
        Ok(())
    }

    /// `None` when the lookup is refused for a non-premium account.
    pub fn category_spending(&self, category_id: i64) -> ApiResult<Option<CategorySpending>> {
        match self.send_json(self.request(Method::GET, &format!("category-spending/{}/", category_id))) {
            Ok(s) => Ok(Some(s)),
            Err(ApiError::Forbidden(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // Savings goals (premium)

    pub fn savings_goals(&self) -> ApiResult<Ingested<SavingsGoal>> {
        self.send_list(self.request(Method::GET, "savings-goals/"))
    }

    pub fn savings_goal(&self, id: i64) -> ApiResult<SavingsGoal> {
        self.send_json(self.request(Method::GET, &format!("savings-goals/{}/", id)))
    }

    pub fn create_savings_goal(&self, goal: &GoalRequest) -> ApiResult<SavedGoal> {
        self.send_json(self.request(Method::POST, "savings-goals/").json(goal))
    }

    pub fn update_savings_goal(&self, id: i64, goal: &GoalRequest) -> ApiResult<SavingsGoal> {
        self.send_json(
            self.request(Method::PATCH, &format!("savings-goals/{}/", id))
                .json(goal),
        )
    }

    pub fn delete_savings_goal(&self, id: i64) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, &format!("savings-goals/{}/", id)))?;
        Ok(())
    }

    pub fn process_contributions(&self) -> ApiResult<ContributionReport> {
        self.send_json(self.request(Method::POST, "savings-goals/process-contributions/"))
    }

    pub fn force_contributions(&self) -> ApiResult<ContributionReport> {
        self.send_json(self.request(Method::POST, "savings-goals/force-contributions/"))
    }
}
