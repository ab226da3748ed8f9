use super::*;

#[test]
fn display_username_uses_session_user() {
    let user = User {
        username: "analyst7".to_owned(),
        email: "analyst7@bank.test".to_owned(),
    };
    assert_eq!(display_username(Some(&user)), "analyst7");
}

#[test]
fn display_username_falls_back_before_user_is_known() {
    assert_eq!(display_username(None), "ratingmanager");
}
