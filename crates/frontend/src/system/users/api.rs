use async_trait::async_trait;
use contracts::system::users::{UpdateUserDto, UserRecord, UsersListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{ensure_ok, read_json};
use crate::shared::config::AppConfig;
use crate::shared::error::ApiError;

/// Admin endpoints for user accounts.
#[async_trait(?Send)]
pub trait UsersGateway {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError>;
    async fn update_user(&self, id: &str, dto: &UpdateUserDto) -> Result<(), ApiError>;
    async fn delete_user(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpUsersGateway {
    base: String,
}

impl HttpUsersGateway {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base(),
        }
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/admin/users/{}", self.base, id)
    }
}

#[async_trait(?Send)]
impl UsersGateway for HttpUsersGateway {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let response = Request::get(&format!("{}/admin/users", self.base))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let body: UsersListResponse = read_json(response).await?;
        Ok(body.user)
    }

    async fn update_user(&self, id: &str, dto: &UpdateUserDto) -> Result<(), ApiError> {
        let response = Request::put(&self.user_url(id))
            .json(dto)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        ensure_ok(response).await?;
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.user_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        ensure_ok(response).await?;
        Ok(())
    }
}
