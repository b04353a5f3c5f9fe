use super::*;

fn user(id: &str, role: &str) -> UserSummary {
    UserSummary {
        id: id.to_owned(),
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        role: role.to_owned(),
    }
}

#[test]
fn selected_role_defaults_to_current_role() {
    assert_eq!(selected_role(&user("1", "Creator"), &HashMap::new()), Some(Role::Creator));
}

#[test]
fn selected_role_prefers_pending_draft() {
    let drafts = HashMap::from([("1".to_owned(), Role::Admin)]);
    assert_eq!(selected_role(&user("1", "Viewer"), &drafts), Some(Role::Admin));
    assert_eq!(selected_role(&user("2", "Viewer"), &drafts), Some(Role::Viewer));
}

#[test]
fn selected_role_unknown_without_draft() {
    assert_eq!(selected_role(&user("1", "Owner"), &HashMap::new()), None);
}

#[test]
fn role_updated_message_names_role() {
    assert_eq!(role_updated_message(Role::Creator), "User role updated to Creator");
}
