mod support;

use qurban_tracker::application::dto::CreateUserRequest;
use qurban_tracker::domain::value_objects::UserRole;
use qurban_tracker::shared::errors::AppError;

use support::test_app;

fn user_request(name: &str, email: &str, role: UserRole) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        role,
    }
}

#[tokio::test]
async fn creates_a_user_with_generated_id() {
    let t = test_app();

    let user = t
        .app
        .users
        .create_user(user_request("Budi", "budi@example.com", UserRole::Admin))
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.email, "budi@example.com");
    assert!(user.is_admin());
}

#[tokio::test]
async fn duplicate_email_conflicts_and_creates_no_row() {
    let t = test_app();

    t.app
        .users
        .create_user(user_request("Budi", "budi@example.com", UserRole::Admin))
        .await
        .unwrap();

    let err = t
        .app
        .users
        .create_user(user_request(
            "Other Budi",
            "budi@example.com",
            UserRole::Participant,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)), "got {:?}", err);
    assert_eq!(t.app.users.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn rejects_malformed_email_and_empty_name() {
    let t = test_app();

    let err = t
        .app
        .users
        .create_user(user_request("Budi", "not-an-email", UserRole::Admin))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let err = t
        .app
        .users
        .create_user(user_request("   ", "budi@example.com", UserRole::Admin))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    assert!(t.app.users.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_participants_filters_by_role() {
    let t = test_app();

    t.app
        .users
        .create_user(user_request("Admin", "admin@example.com", UserRole::Admin))
        .await
        .unwrap();
    t.app
        .users
        .create_user(user_request("Siti", "siti@example.com", UserRole::Participant))
        .await
        .unwrap();
    t.app
        .users
        .create_user(user_request("Joko", "joko@example.com", UserRole::Participant))
        .await
        .unwrap();

    let participants = t.app.users.list_participants().await.unwrap();
    assert_eq!(participants.len(), 2);
    assert!(participants.iter().all(|u| u.role == UserRole::Participant));

    let admins = t
        .app
        .users
        .list_users_by_role(UserRole::Admin)
        .await
        .unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].name, "Admin");
}
