use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AccomplishmentReport, AdminFlagUpdate, AppError, AuthResponse, ForgotPasswordRequest,
    Notification, Order, OtpTokenResponse, ProfileUpdate, Receipt, ResetPasswordRequest,
    SalesReport, Schedule, SignInRequest, SignUpRequest, User, VerifyOtpRequest,
    GENERIC_FAILURE_MESSAGE,
};

use crate::resource::ApiResource;

/// Thin JSON client for the dashboard REST API.
///
/// Cheap to clone; every view builds one from context with the current token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Percent-encode one path segment.
fn seg(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach (or clear) the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "API request failed to send");
            AppError::transport()
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "API returned an error status");
            return Err(AppError::from_status(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, AppError> {
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(error = %e, "API response body did not match the expected shape");
            AppError::server(GENERIC_FAILURE_MESSAGE)
        })
    }

    /// For endpoints whose body is irrelevant (deletes, acknowledgements).
    async fn empty(&self, builder: RequestBuilder) -> Result<(), AppError> {
        self.execute(builder).await.map(|_| ())
    }

    // --- Auth ---

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn sign_in(&self, req: &SignInRequest) -> Result<AuthResponse, AppError> {
        self.json(self.request(Method::POST, "/auth/signin").json(req))
            .await
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn sign_up(&self, req: &SignUpRequest) -> Result<(), AppError> {
        self.empty(self.request(Method::POST, "/auth/signup").json(req))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AppError> {
        self.empty(self.request(Method::POST, "/auth/signout")).await
    }

    /// Resend the account verification code.
    #[tracing::instrument(skip(self))]
    pub async fn send_otp(&self, email: &str) -> Result<OtpTokenResponse, AppError> {
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.json(self.request(Method::POST, "/auth/send-otp").json(&body))
            .await
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn forgot_password(
        &self,
        req: &ForgotPasswordRequest,
    ) -> Result<OtpTokenResponse, AppError> {
        self.json(self.request(Method::POST, "/auth/forgot-password").json(req))
            .await
    }

    #[tracing::instrument(skip(self, token, req))]
    pub async fn verify_otp(&self, token: &str, req: &VerifyOtpRequest) -> Result<(), AppError> {
        let path = format!("/auth/verify-otp/{}", seg(token));
        self.empty(self.request(Method::POST, &path).json(req)).await
    }

    #[tracing::instrument(skip(self, token, req))]
    pub async fn reset_password(
        &self,
        token: &str,
        req: &ResetPasswordRequest,
    ) -> Result<(), AppError> {
        let path = format!("/auth/reset-password/{}", seg(token));
        self.empty(self.request(Method::POST, &path).json(req)).await
    }

    // --- Users ---

    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.json(self.request(Method::GET, "/users")).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let path = format!("/users/{}", seg(id));
        self.json(self.request(Method::GET, &path)).await
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> Result<User, AppError> {
        let path = format!("/users/{}", seg(id));
        self.json(self.request(Method::PUT, &path).json(update))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_admin_flag(&self, id: &str, is_admin: bool) -> Result<User, AppError> {
        let path = format!("/users/{}", seg(id));
        self.json(
            self.request(Method::PUT, &path)
                .json(&AdminFlagUpdate { is_admin }),
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let path = format!("/users/{}", seg(id));
        self.empty(self.request(Method::DELETE, &path)).await
    }

    // --- Generic resources ---

    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn list<R: ApiResource>(&self) -> Result<Vec<R>, AppError> {
        self.json(self.request(Method::GET, R::PATH)).await
    }

    #[tracing::instrument(skip(self, body), fields(resource = R::PATH))]
    pub async fn create<R: ApiResource, B: Serialize>(&self, body: &B) -> Result<R, AppError> {
        self.json(self.request(Method::POST, R::PATH).json(body))
            .await
    }

    #[tracing::instrument(skip(self, body), fields(resource = R::PATH))]
    pub async fn update<R: ApiResource, B: Serialize>(
        &self,
        id: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let path = format!("{}/{}", R::PATH, seg(id));
        self.json(self.request(Method::PUT, &path).json(body)).await
    }

    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn delete<R: ApiResource>(&self, id: &str) -> Result<(), AppError> {
        let path = format!("{}/{}", R::PATH, seg(id));
        self.empty(self.request(Method::DELETE, &path)).await
    }

    // --- Per-user lookups ---

    #[tracing::instrument(skip(self))]
    pub async fn orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        let path = format!("/orders/user/{}", seg(user_id));
        self.json(self.request(Method::GET, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn order_receipt(&self, order_id: &str) -> Result<Receipt, AppError> {
        let path = format!("/orders/{}/receipt", seg(order_id));
        self.json(self.request(Method::GET, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn schedules_for_user(&self, user_id: &str) -> Result<Vec<Schedule>, AppError> {
        let path = format!("/schedules/user/{}", seg(user_id));
        self.json(self.request(Method::GET, &path)).await
    }

    // --- Reports ---

    #[tracing::instrument(skip(self))]
    pub async fn accomplishment_report(&self) -> Result<AccomplishmentReport, AppError> {
        self.json(self.request(Method::GET, "/reports/accomplishment"))
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn sales_report(&self) -> Result<SalesReport, AppError> {
        self.json(self.request(Method::GET, "/reports/sales")).await
    }

    // --- Notifications ---

    #[tracing::instrument(skip(self))]
    pub async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        let path = format!("/notifications/{}", seg(user_id));
        self.json(self.request(Method::GET, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_notification_read(&self, id: &str) -> Result<(), AppError> {
        let path = format!("/notifications/{}/read", seg(id));
        self.empty(self.request(Method::PUT, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_all_notifications_read(&self, user_id: &str) -> Result<(), AppError> {
        let path = format!("/notifications/{}/read-all", seg(user_id));
        self.empty(self.request(Method::PUT, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_notification(&self, id: &str) -> Result<(), AppError> {
        let path = format!("/notifications/{}", seg(id));
        self.empty(self.request(Method::DELETE, &path)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_read_notifications(&self, user_id: &str) -> Result<(), AppError> {
        let path = format!("/notifications/{}/read", seg(user_id));
        self.empty(self.request(Method::DELETE, &path)).await
    }
}
