use super::*;

/// Tests finding an existing user by platform ID.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_id(db, "987654321").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_platform_id("987654321").await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.display_name, created.display_name);

    Ok(())
}

/// Tests looking up a platform ID that has never booked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_platform_id("does-not-exist").await?;

    assert!(result.is_none());

    Ok(())
}
