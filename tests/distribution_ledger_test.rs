mod support;

use qurban_tracker::application::dto::{
    CreateUserRequest, RecordDistributionRequest, RegisterAnimalRequest,
};
use qurban_tracker::domain::value_objects::{
    AnimalType, DistributionStatus, RecipientCategory, UserRole,
};
use qurban_tracker::shared::errors::AppError;

use support::{bd, test_app, TestApp};

async fn seed(t: &TestApp) -> (i32, i32) {
    let admin = t
        .app
        .users
        .create_user(CreateUserRequest {
            name: "Committee".to_string(),
            email: "committee@example.com".to_string(),
            phone: None,
            role: UserRole::Admin,
        })
        .await
        .unwrap();

    let animal = t
        .app
        .animals
        .register_animal(RegisterAnimalRequest {
            animal_type: AnimalType::Goat,
            owner_id: admin.id,
            weight: Some(bd("32.00")),
            notes: None,
        })
        .await
        .unwrap();

    (admin.id, animal.id)
}

fn distribution(animal_id: i32, by: i32, weight: &str) -> RecordDistributionRequest {
    RecordDistributionRequest {
        animal_id,
        recipient_category: RecipientCategory::Resident,
        recipient_name: Some("Pak RT".to_string()),
        weight_distributed: bd(weight),
        distributed_by: by,
        notes: None,
    }
}

#[tokio::test]
async fn records_are_created_completed_with_timestamp() {
    let t = test_app();
    let (admin_id, animal_id) = seed(&t).await;

    let record = t
        .app
        .distributions
        .record_distribution(distribution(animal_id, admin_id, "2.5"))
        .await
        .unwrap();

    assert_eq!(record.status, DistributionStatus::Completed);
    assert!(record.distributed_at.is_some());
    assert_eq!(record.distributed_by, Some(admin_id));
    assert_eq!(record.weight_distributed, bd("2.50"));
}

#[tokio::test]
async fn unknown_animal_fails_not_found_and_creates_no_row() {
    let t = test_app();
    let (admin_id, _) = seed(&t).await;

    let err = t
        .app
        .distributions
        .record_distribution(distribution(42, admin_id, "2.50"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
    assert!(t
        .app
        .distributions
        .list_distributions()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn unknown_distributor_fails_not_found() {
    let t = test_app();
    let (_, animal_id) = seed(&t).await;

    let err = t
        .app
        .distributions
        .record_distribution(distribution(animal_id, 42, "2.50"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn non_positive_weight_is_rejected() {
    let t = test_app();
    let (admin_id, animal_id) = seed(&t).await;

    for weight in ["0.00", "-1.25"] {
        let err = t
            .app
            .distributions
            .record_distribution(distribution(animal_id, admin_id, weight))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    assert!(t
        .app
        .distributions
        .list_distributions()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn listing_by_unknown_animal_returns_empty_list() {
    let t = test_app();
    seed(&t).await;

    let records = t
        .app
        .distributions
        .list_distributions_by_animal(999)
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn records_are_scoped_per_animal() {
    let t = test_app();
    let (admin_id, first) = seed(&t).await;

    let second = t
        .app
        .animals
        .register_animal(RegisterAnimalRequest {
            animal_type: AnimalType::Cow,
            owner_id: admin_id,
            weight: None,
            notes: None,
        })
        .await
        .unwrap()
        .id;

    t.app
        .distributions
        .record_distribution(distribution(first, admin_id, "2.00"))
        .await
        .unwrap();
    t.app
        .distributions
        .record_distribution(distribution(first, admin_id, "3.00"))
        .await
        .unwrap();
    t.app
        .distributions
        .record_distribution(distribution(second, admin_id, "5.00"))
        .await
        .unwrap();

    assert_eq!(
        t.app
            .distributions
            .list_distributions_by_animal(first)
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        t.app
            .distributions
            .list_distributions_by_animal(second)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        t.app.distributions.list_distributions().await.unwrap().len(),
        3
    );
}
