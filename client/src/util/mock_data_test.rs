use super::*;

fn viewer(department: Option<&str>, points_total: i64) -> User {
    User {
        id: "4".to_owned(),
        username: "chenjia".to_owned(),
        department: department.map(ToOwned::to_owned),
        points_total,
        ..User::default()
    }
}

#[test]
fn tasks_cover_each_category_and_status() {
    let entries = tasks();
    assert_eq!(entries.len(), 3);
    let categories: Vec<_> = entries.iter().map(|e| e.task.category).collect();
    assert_eq!(
        categories,
        vec![TaskCategory::Environmental, TaskCategory::Social, TaskCategory::Governance]
    );
    assert_eq!(entries[1].participation, ParticipationStatus::Participating);
    assert_eq!(entries[0].task.points_reward, 50);
}

#[test]
fn stats_use_user_points_when_present() {
    let stats = dashboard_stats(Some(&viewer(None, 1320)));
    assert_eq!(stats.total_points, 1320);
    assert_eq!(stats.completed_tasks, 12);
    assert_eq!(stats.department_rank, 3);
    assert_eq!(stats.points_this_month, 120);
}

#[test]
fn stats_fall_back_without_points() {
    assert_eq!(dashboard_stats(None).total_points, 750);
    assert_eq!(dashboard_stats(Some(&viewer(None, 0))).total_points, 750);
}

#[test]
fn leaderboard_is_ranked_by_points() {
    let rows = leaderboard();
    assert_eq!(rows.len(), 10);
    assert!(rows.windows(2).all(|w| w[0].points > w[1].points));
    assert!(rows.iter().enumerate().all(|(i, r)| r.rank as usize == i + 1));
}

#[test]
fn department_filter_keeps_colleagues_only() {
    let rows = leaderboard();
    let me = viewer(Some("Engineering"), 820);
    let filtered = filter_leaderboard(&rows, LeaderboardFilter::MyDepartment, Some(&me));
    let names: Vec<_> = filtered.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["zhangwei", "chenjia", "sunyi"]);
}

#[test]
fn department_filter_without_viewer_is_empty() {
    let rows = leaderboard();
    assert!(filter_leaderboard(&rows, LeaderboardFilter::MyDepartment, None).is_empty());
    let no_department = viewer(None, 0);
    assert!(filter_leaderboard(&rows, LeaderboardFilter::MyDepartment, Some(&no_department)).is_empty());
}

#[test]
fn all_filter_returns_everyone() {
    let rows = leaderboard();
    assert_eq!(filter_leaderboard(&rows, LeaderboardFilter::All, None), rows);
}
