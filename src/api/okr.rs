use super::error::{ApiError, Result};
use super::models::{
    ApiResponse, AuthResponse, ErrorResponse, JournalEntry, JournalList, JournalQuery, JournalRequest, LoginRequest,
    PlanResponse, ScoreTrendResponse, ScoreUpdate, Task, TaskList, TaskQuery, TaskRequest, TaskStatus, TimeRange, User,
    SCORE_RANGE,
};
use super::Session;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::config::Config;
use crate::libs::time_ref::{self, TimeInterval, TimeRefError, TimeScale};
use chrono::NaiveDateTime;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const TOKEN_FILE: &str = ".okr_token";
const LOGIN_URL: &str = "auth/login";
const LOGOUT_URL: &str = "users/logout";
const ME_URL: &str = "users/me";
const TASKS_URL: &str = "tasks";
const JOURNALS_URL: &str = "journals";
const JOURNALS_BY_TIME_URL: &str = "journals/by-time";
const PLAN_URL: &str = "plan";
const SCORE_TREND_URL: &str = "stats/score-trend-ref";

/// Turns a non-2xx response body into the most specific error available.
pub fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { message: Some(message), .. }) if !message.is_empty() => ApiError::Api(message),
        Ok(ErrorResponse { error: Some(error), .. }) if !error.is_empty() => ApiError::Api(error),
        _ => ApiError::Http(status),
    }
}

fn check_score(score: Option<i32>) -> Result<()> {
    let (min, max) = SCORE_RANGE;
    match score {
        Some(score) if score < min || score > max => Err(ApiError::InvalidScore { score, min, max }),
        _ => Ok(()),
    }
}

fn check_reference(reference: &str, scale: TimeScale) -> Result<()> {
    if !time_ref::validate(reference, scale) {
        return Err(TimeRefError::Format {
            reference: reference.to_string(),
            scale,
        }
        .into());
    }
    Ok(())
}

/// Keeps local validation errors as they are and wraps server-side failures.
fn wrap(err: ApiError, wrapper: fn(String) -> ApiError) -> ApiError {
    match err {
        ApiError::TimeRef(_) | ApiError::InvalidScore { .. } | ApiError::NotLoggedIn => err,
        other => wrapper(other.to_string()),
    }
}

pub struct OkrClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    clock: Arc<dyn Clock>,
}

impl Session for OkrClient {
    fn token_file(&self) -> &str {
        TOKEN_FILE
    }
}

impl OkrClient {
    /// Client for the configured server, picking up a previously stored token.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout())).build()?;
        let mut okr = Self {
            client,
            base_url: config.api_url(),
            token: None,
            clock: Arc::new(SystemClock),
        };
        okr.token = okr.load_token();
        debug!(base_url = %okr.base_url, authenticated = okr.token.is_some(), "okr client ready");
        Ok(okr)
    }

    /// Client for `base_url` without a stored token.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            token: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current instant according to the client's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Joins `endpoint` onto the base URL with exactly one slash between them.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.trim_start_matches('/'))
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url(endpoint);
        debug!(%method, %url, "sending request");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn read_body(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }
        warn!(%status, "request failed");
        if status == StatusCode::UNAUTHORIZED && self.token.is_none() {
            return Err(ApiError::NotLoggedIn);
        }
        Err(error_from_body(status, &body))
    }

    /// Unwraps the `data` envelope, which may legitimately be `null`.
    async fn send_optional<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Option<T>> {
        let body = self.read_body(builder).await?;
        let envelope: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|e| ApiError::Api(format!("unexpected response: {}", e)))?;
        if envelope.success == Some(false) {
            return Err(ApiError::Api(envelope.message.unwrap_or_else(|| "request was not successful".into())));
        }
        Ok(envelope.data)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        self.send_optional(builder)
            .await?
            .ok_or_else(|| ApiError::Api("response carried no data".into()))
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.read_body(builder).await.map(|_| ())
    }

    // === AUTH ===

    /// Logs in and stores the returned token for later runs.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<AuthResponse> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.send(self.request(Method::POST, LOGIN_URL).json(&credentials)).await?;
        self.store_token(&auth.token).map_err(|e| ApiError::Storage(e.to_string()))?;
        self.token = Some(auth.token.clone());
        info!(user = %auth.user.username, "logged in");
        Ok(auth)
    }

    /// Ends the server session. The stored token is removed even if the call fails.
    pub async fn logout(&mut self) -> Result<()> {
        let result = self.send_empty(self.request(Method::POST, LOGOUT_URL)).await;
        self.token = None;
        self.clear_token().map_err(|e| ApiError::Storage(e.to_string()))?;
        result
    }

    pub async fn current_user(&self) -> Result<User> {
        self.send(self.request(Method::GET, ME_URL)).await
    }

    // === TASKS ===

    pub async fn tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let list: TaskList = self.send(self.request(Method::GET, TASKS_URL).query(&query.params())).await?;
        Ok(list.tasks)
    }

    pub async fn task(&self, task_id: &str) -> Result<Task> {
        self.send(self.request(Method::GET, &format!("{}/{}", TASKS_URL, task_id))).await
    }

    pub async fn create_task(&self, request: &TaskRequest) -> Result<Task> {
        check_score(request.score)?;
        let task: Task = self.send(self.request(Method::POST, TASKS_URL).json(request)).await?;
        info!(id = %task.id, "task created");
        Ok(task)
    }

    pub async fn update_task(&self, task_id: &str, request: &TaskRequest) -> Result<Task> {
        check_score(request.score)?;
        self.send(self.request(Method::PUT, &format!("{}/{}", TASKS_URL, task_id)).json(request))
            .await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &format!("{}/{}", TASKS_URL, task_id)))
            .await
    }

    /// Marks a task completed, keeping every other field unchanged.
    pub async fn complete_task(&self, task_id: &str) -> Result<Task> {
        let task = self.task(task_id).await?;
        let request = TaskRequest {
            status: TaskStatus::Completed,
            ..TaskRequest::from(&task)
        };
        self.update_task(task_id, &request).await
    }

    pub async fn update_task_score(&self, task_id: &str, score: i32) -> Result<Task> {
        check_score(Some(score))?;
        self.send(
            self.request(Method::PUT, &format!("{}/{}/score", TASKS_URL, task_id))
                .json(&ScoreUpdate { score }),
        )
        .await
    }

    pub async fn task_children(&self, task_id: &str) -> Result<Vec<Task>> {
        let children: Option<Vec<Task>> = self
            .send_optional(self.request(Method::GET, &format!("{}/{}/children", TASKS_URL, task_id)))
            .await?;
        Ok(children.unwrap_or_default())
    }

    async fn create_task_in(
        &self,
        title: &str,
        description: Option<String>,
        scale: TimeScale,
        interval: Result<TimeInterval>,
        score: Option<i32>,
    ) -> Result<Task> {
        let range = TimeRange::from(interval?);
        let request = TaskRequest {
            score,
            ..TaskRequest::for_range(title, description, scale, range)
        };
        self.create_task(&request).await.map_err(|e| wrap(e, ApiError::TaskCreation))
    }

    /// Creates a task covering the current period of `scale`.
    pub async fn create_current_task(
        &self,
        scale: TimeScale,
        title: &str,
        description: Option<String>,
        score: Option<i32>,
    ) -> Result<Task> {
        let interval = time_ref::current_interval(scale, self.now()).map_err(ApiError::from);
        self.create_task_in(title, description, scale, interval, score).await
    }

    /// Creates a task covering the period named by `reference`.
    pub async fn create_task_for_reference(
        &self,
        title: &str,
        scale: TimeScale,
        reference: &str,
        description: Option<String>,
    ) -> Result<Task> {
        let interval = time_ref::resolve(reference, scale).map_err(ApiError::from);
        self.create_task_in(title, description, scale, interval, None).await
    }

    pub async fn create_quarter_task(
        &self,
        title: &str,
        year: i32,
        quarter: u32,
        description: Option<String>,
    ) -> Result<Task> {
        let interval = time_ref::quarter_interval(year, quarter).map_err(ApiError::from);
        self.create_task_in(title, description, TimeScale::Quarter, interval, None).await
    }

    pub async fn create_month_task(&self, title: &str, year: i32, month: u32, description: Option<String>) -> Result<Task> {
        let interval = time_ref::month_interval(year, month).map_err(ApiError::from);
        self.create_task_in(title, description, TimeScale::Month, interval, None).await
    }

    pub async fn create_week_task(&self, title: &str, year: i32, week: u32, description: Option<String>) -> Result<Task> {
        let interval = time_ref::week_interval(year, week).map_err(ApiError::from);
        self.create_task_in(title, description, TimeScale::Week, interval, None).await
    }

    // === PLAN & STATS ===

    /// Plan view for the period `time_ref` of `scale`.
    ///
    /// The reference is validated before any request is made.
    pub async fn plan_view(&self, scale: TimeScale, time_ref: &str) -> Result<PlanResponse> {
        check_reference(time_ref, scale)?;
        let params = [("scale", scale.as_str()), ("time_ref", time_ref)];
        self.send(self.request(Method::GET, PLAN_URL).query(&params))
            .await
            .map_err(|e| wrap(e, ApiError::PlanView))
    }

    /// Score trend for the period `time_ref` of `scale`.
    pub async fn score_trend(&self, scale: TimeScale, time_ref: &str) -> Result<ScoreTrendResponse> {
        check_reference(time_ref, scale)?;
        let params = [("scale", scale.as_str()), ("time_ref", time_ref)];
        self.send(self.request(Method::GET, SCORE_TREND_URL).query(&params))
            .await
            .map_err(|e| wrap(e, ApiError::ScoreTrend))
    }

    pub async fn plan_view_for_quarter(&self, year: i32, quarter: u32) -> Result<PlanResponse> {
        let reference = time_ref::reference_for(TimeScale::Quarter, year, quarter)?;
        self.plan_view(TimeScale::Quarter, &reference).await
    }

    pub async fn plan_view_for_month(&self, year: i32, month: u32) -> Result<PlanResponse> {
        let reference = time_ref::reference_for(TimeScale::Month, year, month)?;
        self.plan_view(TimeScale::Month, &reference).await
    }

    pub async fn quarterly_score_trend(&self, year: i32, quarter: u32) -> Result<ScoreTrendResponse> {
        let reference = time_ref::reference_for(TimeScale::Quarter, year, quarter)?;
        self.score_trend(TimeScale::Quarter, &reference).await
    }

    pub async fn monthly_score_trend(&self, year: i32, month: u32) -> Result<ScoreTrendResponse> {
        let reference = time_ref::reference_for(TimeScale::Month, year, month)?;
        self.score_trend(TimeScale::Month, &reference).await
    }

    /// Reference of the current period of `scale`, according to the client's clock.
    pub fn current_reference(&self, scale: TimeScale) -> String {
        time_ref::current_reference(scale, self.now())
    }

    pub async fn current_plan_view(&self, scale: TimeScale) -> Result<PlanResponse> {
        self.plan_view(scale, &self.current_reference(scale)).await
    }

    pub async fn current_score_trend(&self, scale: TimeScale) -> Result<ScoreTrendResponse> {
        self.score_trend(scale, &self.current_reference(scale)).await
    }

    // === JOURNALS ===

    pub async fn journals(&self, query: &JournalQuery) -> Result<Vec<JournalEntry>> {
        let list: JournalList = self
            .send(self.request(Method::GET, JOURNALS_URL).query(&query.params()))
            .await?;
        Ok(list.journals)
    }

    pub async fn journal(&self, journal_id: &str) -> Result<JournalEntry> {
        self.send(self.request(Method::GET, &format!("{}/{}", JOURNALS_URL, journal_id)))
            .await
    }

    pub async fn create_journal(&self, request: &JournalRequest) -> Result<JournalEntry> {
        if let Some(reference) = &request.time_reference {
            check_reference(reference, request.time_scale)?;
        }
        self.send(self.request(Method::POST, JOURNALS_URL).json(request)).await
    }

    pub async fn update_journal(&self, journal_id: &str, request: &JournalRequest) -> Result<JournalEntry> {
        self.send(
            self.request(Method::PUT, &format!("{}/{}", JOURNALS_URL, journal_id))
                .json(request),
        )
        .await
    }

    pub async fn delete_journal(&self, journal_id: &str) -> Result<()> {
        self.send_empty(self.request(Method::DELETE, &format!("{}/{}", JOURNALS_URL, journal_id)))
            .await
    }

    pub async fn journals_by_time(&self, time_reference: &str, time_scale: TimeScale) -> Result<Vec<JournalEntry>> {
        check_reference(time_reference, time_scale)?;
        let params = [("time_reference", time_reference), ("time_scale", time_scale.as_str())];
        self.send(self.request(Method::GET, JOURNALS_BY_TIME_URL).query(&params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_local_errors() {
        let err = wrap(ApiError::NotLoggedIn, ApiError::PlanView);
        assert!(matches!(err, ApiError::NotLoggedIn));

        let err = wrap(ApiError::Api("boom".into()), ApiError::PlanView);
        assert!(matches!(err, ApiError::PlanView(message) if message == "API error: boom"));
    }

    #[test]
    fn test_check_score_bounds() {
        assert!(check_score(None).is_ok());
        assert!(check_score(Some(0)).is_ok());
        assert!(check_score(Some(10)).is_ok());
        assert!(matches!(check_score(Some(11)), Err(ApiError::InvalidScore { score: 11, .. })));
        assert!(matches!(check_score(Some(-1)), Err(ApiError::InvalidScore { score: -1, .. })));
    }
}
