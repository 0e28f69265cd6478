//! Service façade: one method per backend operation.
//!
//! Each method maps to exactly one HTTP call and returns the decoded body
//! unchanged. Grouping follows the backend routers (`auth`, `tasks`,
//! `points`, `users`); the groups borrow the client, so they are free to
//! create per call:
//!
//! ```ignore
//! let tasks = client.tasks().list(&TaskFilterParams::default()).await?;
//! ```

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::types::{
    ChangePasswordRequest, CreateTaskRequest, LeaderboardParams, LeaderboardUser, LoginResponse,
    PointHistoryParams, PointRecord, PointSummary, ProfileUpdate, RegisterRequest, Task,
    TaskCompletionRequest, TaskCompletionResponse, TaskFilterParams, TaskParticipation,
    UpdateTaskRequest, User,
};

/// Percent-encode one dynamic path segment. Empty and dot segments would
/// change which endpoint the path names, so they are rejected.
fn segment(id: &str) -> Result<String, ApiError> {
    if matches!(id, "" | "." | "..") {
        return Err(ApiError::InvalidUrl(format!("invalid path segment {id:?}")));
    }
    Ok(urlencoding::encode(id).into_owned())
}

impl ApiClient {
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService { client: self }
    }

    #[must_use]
    pub fn tasks(&self) -> TasksService<'_> {
        TasksService { client: self }
    }

    #[must_use]
    pub fn points(&self) -> PointsService<'_> {
        PointsService { client: self }
    }

    #[must_use]
    pub fn users(&self) -> UsersService<'_> {
        UsersService { client: self }
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl AuthService<'_> {
    /// `POST /login` as an OAuth2 password form; the email goes in `username`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the body is not a token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.client
            .post_form("/login", &[("username", email), ("password", password)])
            .await
    }

    /// `POST /register`. The response shape is backend-defined and returned
    /// as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.client.post_json("/register", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails or the body is not a user.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.client.get("/user/me", &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.post_empty::<Value>("/logout").await.map(|_| ())
    }
}

// =============================================================================
// TASKS
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct TasksService<'a> {
    client: &'a ApiClient,
}

impl TasksService<'_> {
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn list(&self, params: &TaskFilterParams) -> Result<Vec<Task>, ApiError> {
        self.client.get("/tasks", &params.to_query()).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        self.client.get(&format!("/tasks/{}", segment(id)?), &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn create(&self, request: &CreateTaskRequest) -> Result<Task, ApiError> {
        self.client.post_json("/tasks", request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn update(&self, id: &str, request: &UpdateTaskRequest) -> Result<Task, ApiError> {
        self.client.put_json(&format!("/tasks/{}", segment(id)?), request).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&format!("/tasks/{}", segment(id)?)).await
    }

    /// Join a task as the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn participate(&self, id: &str) -> Result<TaskParticipation, ApiError> {
        self.client.post_empty(&format!("/tasks/{}/participate", segment(id)?)).await
    }

    /// Mark a task complete, optionally attaching evidence.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn complete(
        &self,
        id: &str,
        request: Option<&TaskCompletionRequest>,
    ) -> Result<TaskCompletionResponse, ApiError> {
        let path = format!("/tasks/{}/complete", segment(id)?);
        match request {
            Some(body) => self.client.post_json(&path, body).await,
            None => self.client.post_empty(&path).await,
        }
    }
}

// =============================================================================
// POINTS
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct PointsService<'a> {
    client: &'a ApiClient,
}

impl PointsService<'_> {
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn history(&self, params: &PointHistoryParams) -> Result<Vec<PointRecord>, ApiError> {
        self.client.get("/points/history", &params.to_query()).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn leaderboard(&self, params: &LeaderboardParams) -> Result<Vec<LeaderboardUser>, ApiError> {
        self.client.get("/points/leaderboard", &params.to_query()).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn summary(&self) -> Result<PointSummary, ApiError> {
        self.client.get("/points/summary", &[]).await
    }
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct UsersService<'a> {
    client: &'a ApiClient,
}

impl UsersService<'_> {
    /// Profile of `user_id`, or of the current user when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn profile(&self, user_id: Option<&str>) -> Result<User, ApiError> {
        let path = match user_id {
            Some(id) => format!("/users/{}/profile", segment(id)?),
            None => "/users/profile".to_owned(),
        };
        self.client.get(&path, &[]).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client.put_json("/users/profile", update).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let body = ChangePasswordRequest {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        self.client
            .post_json::<_, Value>("/users/change-password", &body)
            .await
            .map(|_| ())
    }
}
