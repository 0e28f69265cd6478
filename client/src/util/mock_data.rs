//! Static stand-ins for the dashboard, task and leaderboard pages.
//!
//! These pages do not call the API yet; they render these fixtures after a
//! simulated delay of [`MOCK_LATENCY`].

#[cfg(test)]
#[path = "mock_data_test.rs"]
mod mock_data_test;

use std::time::Duration;

use esg_api::{LeaderboardUser, ParticipationStatus, Task, TaskCategory, User};

/// Simulated API latency for mocked pages.
pub const MOCK_LATENCY: Duration = Duration::from_secs(1);

/// A task paired with the viewer's participation status.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskEntry {
    pub task: Task,
    pub participation: ParticipationStatus,
}

fn task(id: &str, title: &str, description: &str, category: TaskCategory, points: i64, date: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        points_reward: points,
        start_date: Some(date.to_owned()),
        ..Task::default()
    }
}

pub fn tasks() -> Vec<TaskEntry> {
    vec![
        TaskEntry {
            task: task(
                "1",
                "Carbon reduction training",
                "Complete the company's carbon reduction awareness course",
                TaskCategory::Environmental,
                50,
                "2025-06-15",
            ),
            participation: ParticipationStatus::NotStarted,
        },
        TaskEntry {
            task: task(
                "2",
                "Community volunteering",
                "Join a company-organized community volunteer event",
                TaskCategory::Social,
                80,
                "2025-06-20",
            ),
            participation: ParticipationStatus::Participating,
        },
        TaskEntry {
            task: task(
                "3",
                "Compliance training",
                "Finish the annual compliance and business ethics training",
                TaskCategory::Governance,
                60,
                "2025-06-25",
            ),
            participation: ParticipationStatus::Completed,
        },
    ]
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Points shown when the user has none recorded yet.
pub const FALLBACK_TOTAL_POINTS: i64 = 750;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_points: i64,
    pub completed_tasks: u32,
    pub department_rank: u32,
    pub points_this_month: i64,
}

pub fn dashboard_stats(user: Option<&User>) -> DashboardStats {
    let total_points = user
        .map(|u| u.points_total)
        .filter(|points| *points != 0)
        .unwrap_or(FALLBACK_TOTAL_POINTS);
    DashboardStats { total_points, completed_tasks: 12, department_rank: 3, points_this_month: 120 }
}

// =============================================================================
// LEADERBOARD
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardFilter {
    #[default]
    All,
    MyDepartment,
}

fn ranked(rank: u32, id: &str, username: &str, full_name: &str, department: &str, points: i64) -> LeaderboardUser {
    LeaderboardUser {
        id: id.to_owned(),
        username: username.to_owned(),
        full_name: full_name.to_owned(),
        department: department.to_owned(),
        profile_image: None,
        points,
        rank,
        tasks_completed: 0,
    }
}

pub fn leaderboard() -> Vec<LeaderboardUser> {
    vec![
        ranked(1, "1", "zhangwei", "Zhang Wei", "Engineering", 1250),
        ranked(2, "2", "liuming", "Liu Ming", "Marketing", 980),
        ranked(3, "3", "wangjing", "Wang Jing", "Human Resources", 840),
        ranked(4, "4", "chenjia", "Chen Jia", "Engineering", 820),
        ranked(5, "5", "zhaolei", "Zhao Lei", "Finance", 790),
        ranked(6, "6", "yanglin", "Yang Lin", "Marketing", 760),
        ranked(7, "7", "sunyi", "Sun Yi", "Engineering", 740),
        ranked(8, "8", "huxiaojing", "Hu Xiaojing", "Human Resources", 720),
        ranked(9, "9", "chengtao", "Cheng Tao", "Finance", 690),
        ranked(10, "10", "liuqian", "Liu Qian", "Marketing", 650),
    ]
}

/// Rows visible under `filter`. The department view needs a signed-in user
/// with a department; without one it is empty.
pub fn filter_leaderboard(
    rows: &[LeaderboardUser],
    filter: LeaderboardFilter,
    viewer: Option<&User>,
) -> Vec<LeaderboardUser> {
    match filter {
        LeaderboardFilter::All => rows.to_vec(),
        LeaderboardFilter::MyDepartment => {
            let Some(department) = viewer.and_then(|u| u.department.as_deref()) else {
                return Vec::new();
            };
            rows.iter().filter(|row| row.department == department).cloned().collect()
        }
    }
}
