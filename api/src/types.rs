//! Wire DTOs mirrored from the platform API.
//!
//! DESIGN
//! ======
//! These records carry no local invariants. The backend omits fields freely
//! (the login endpoint returns a trimmed user, task rows use `points`/`date`),
//! so everything beyond identity decodes with `#[serde(default)]` and aliases
//! instead of failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Account role assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
}

impl UserRole {
    /// Human-readable label shown on the profile page.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Manager",
            Self::User => "Member",
        }
    }
}

/// A platform account as returned by `/user/me` and `/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    /// Cumulative points. `/user/me` names this `points`.
    #[serde(default, alias = "points")]
    pub points_total: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl User {
    /// Full name when present, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Single-character avatar initial, `U` when no name is known.
    #[must_use]
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Body of `POST /login` on success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub user: Option<User>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// JSON body of `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub department: String,
}

/// Registration form input, including the confirmation field that never
/// leaves the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
    pub department: String,
}

impl From<RegistrationForm> for RegisterRequest {
    fn from(form: RegistrationForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
            full_name: form.full_name,
            department: form.department,
        }
    }
}

/// Editable profile fields for `PUT /users/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Body of `POST /users/change-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// =============================================================================
// TASKS
// =============================================================================

/// ESG pillar a task belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Environmental,
    Social,
    Governance,
    #[default]
    #[serde(other)]
    Other,
}

impl TaskCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
            Self::Other => "Other",
        }
    }

    /// Wire name, also used as the CSS modifier for category badges.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Environmental => "environmental",
            Self::Social => "social",
            Self::Governance => "governance",
            Self::Other => "other",
        }
    }
}

/// Strict parse for user input: only the three ESG pillars are accepted.
/// Decoding API payloads stays lenient through `#[serde(other)]`.
impl std::str::FromStr for TaskCategory {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "environmental" => Ok(Self::Environmental),
            "social" => Ok(Self::Social),
            "governance" => Ok(Self::Governance),
            other => Err(format!("unknown task category: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Draft,
    Published,
    Completed,
    Archived,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Individual,
    Team,
    Department,
    Company,
}

/// Where the current user stands on a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationStatus {
    #[default]
    NotStarted,
    Participating,
    Completed,
    Rejected,
}

impl ParticipationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Pending",
            Self::Participating => "In progress",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Participating => "participating",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

/// A task row. Accepts both the full task contract and the backend's
/// `points`/`date` columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: TaskCategory,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(default, alias = "points")]
    pub points_reward: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, alias = "date")]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /tasks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub category: TaskCategory,
    pub points_reward: i64,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Partial body of `PUT /tasks/{id}`; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<TaskCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_reward: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskParticipation {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
    #[serde(default)]
    pub status: ParticipationStatus,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub points_earned: Option<i64>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Optional body of `POST /tasks/{id}/complete`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCompletionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskCompletionResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub points_earned: i64,
    #[serde(default)]
    pub participation: Option<TaskParticipation>,
}

/// Query parameters for `GET /tasks`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilterParams {
    pub status: Option<TaskStatus>,
    pub category: Option<TaskCategory>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TaskFilterParams {
    /// Present parameters as query pairs; absent ones are omitted.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_owned()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        push_paging(&mut pairs, self.page, self.limit);
        pairs
    }
}

// =============================================================================
// POINTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSourceType {
    TaskCompletion,
    AdminAdjustment,
    SystemReward,
    Bonus,
}

/// One entry of the point ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub points: i64,
    pub source_type: PointSourceType,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSummary {
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub points_this_month: i64,
    #[serde(default)]
    pub points_this_week: i64,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub department_rank: u32,
}

/// Leaderboard row as rendered by the ranking view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(alias = "points_total")]
    pub points: i64,
    pub rank: u32,
    #[serde(default)]
    pub tasks_completed: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    #[default]
    All,
    Year,
    Month,
    Week,
    Day,
}

impl LeaderboardPeriod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }
}

impl std::str::FromStr for LeaderboardPeriod {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            other => Err(format!("unknown leaderboard period: {other}")),
        }
    }
}

/// Query parameters for `GET /points/leaderboard`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardParams {
    pub period: Option<LeaderboardPeriod>,
    pub department: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl LeaderboardParams {
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(period) = self.period {
            pairs.push(("period", period.as_str().to_owned()));
        }
        if let Some(department) = self.department.as_deref().filter(|d| !d.is_empty()) {
            pairs.push(("department", department.to_owned()));
        }
        push_paging(&mut pairs, self.page, self.limit);
        pairs
    }
}

/// Query parameters for `GET /points/history`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointHistoryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub source_type: Option<PointSourceType>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PointHistoryParams {
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = &self.start_date {
            pairs.push(("start_date", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("end_date", end.clone()));
        }
        if let Some(source) = self.source_type {
            let raw = match source {
                PointSourceType::TaskCompletion => "task_completion",
                PointSourceType::AdminAdjustment => "admin_adjustment",
                PointSourceType::SystemReward => "system_reward",
                PointSourceType::Bonus => "bonus",
            };
            pairs.push(("source_type", raw.to_owned()));
        }
        push_paging(&mut pairs, self.page, self.limit);
        pairs
    }
}

fn push_paging(pairs: &mut Vec<(&'static str, String)>, page: Option<u32>, limit: Option<u32>) {
    if let Some(page) = page {
        pairs.push(("page", page.to_string()));
    }
    if let Some(limit) = limit {
        pairs.push(("limit", limit.to_string()));
    }
}
