use async_trait::async_trait;
use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;
use web_sys::{FormData, RequestCredentials};

use crate::shared::api_utils::{ensure_ok, read_json};
use crate::shared::config::AppConfig;
use crate::shared::error::ApiError;

#[async_trait(?Send)]
pub trait AuthGateway {
    /// Login with email, password and the role the user signs in as
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Create an account
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// Registration endpoint, for diagnostics
    fn register_url(&self) -> &str;
}

pub struct HttpAuthGateway {
    base: String,
    register_url: String,
}

impl HttpAuthGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base(),
            register_url: config.api.register_url.clone(),
        }
    }
}

#[async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&format!("{}/auth/login", self.base))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        read_json(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        for (name, value) in request.form_fields() {
            form.append_with_str(name, value)
                .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        }

        let response = Request::post(&self.register_url)
            .credentials(RequestCredentials::Include)
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        ensure_ok(response).await?;
        Ok(())
    }

    fn register_url(&self) -> &str {
        &self.register_url
    }
}
