use super::*;

#[test]
fn exact_route_is_active() {
    assert!(is_active("/tasks", "/tasks"));
}

#[test]
fn child_route_is_active() {
    assert!(is_active("/tasks/42", "/tasks"));
}

#[test]
fn sibling_prefix_is_not_active() {
    assert!(!is_active("/tasks-archive", "/tasks"));
    assert!(!is_active("/dashboard", "/tasks"));
}

#[test]
fn nav_covers_every_authenticated_page() {
    let hrefs: Vec<_> = NAV_ITEMS.iter().map(|(href, _, _)| *href).collect();
    assert_eq!(hrefs, vec!["/dashboard", "/tasks", "/leaderboard", "/profile", "/settings"]);
}
