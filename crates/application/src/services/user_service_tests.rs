//! 用户服务单元测试

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use domain::{DomainError, PasswordHash, UserId, UserRepository};
use uuid::Uuid;

use crate::clock::FixedClock;
use crate::error::ApplicationError;
use crate::memory::InMemoryUserRepository;
use crate::password::{PasswordHasher, PasswordHasherError};
use crate::services::{AuthenticateUserRequest, RegisterUserRequest, UserService, UserServiceDependencies};

/// 可逆的明文"哈希"，让断言能看出密码没有被原样存储。
struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError> {
        PasswordHash::new(format!("hashed:{plaintext}"))
            .map_err(|err| PasswordHasherError::hash_error(err.to_string()))
    }

    async fn verify(
        &self,
        plaintext: &str,
        hashed: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(hashed.as_str() == format!("hashed:{plaintext}"))
    }
}

fn create_test_user_service() -> (UserService, Arc<InMemoryUserRepository>) {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let clock = Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap(),
    ));
    let service = UserService::new(UserServiceDependencies {
        user_repository: user_repository.clone(),
        password_hasher: Arc::new(PlainPasswordHasher),
        clock,
    });
    (service, user_repository)
}

fn create_test_register_request() -> RegisterUserRequest {
    RegisterUserRequest {
        name: "John Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        password: "123456".to_string(),
    }
}

#[tokio::test]
async fn test_register_user() {
    let (service, _) = create_test_user_service();

    let user = service.register(create_test_register_request()).await.unwrap();

    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email.as_str(), "johndoe@example.com");
    assert_eq!(
        user.created_at,
        Utc.with_ymd_and_hms(2022, 1, 20, 8, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_password_is_hashed_upon_registration() {
    let (service, repository) = create_test_user_service();

    let user = service.register(create_test_register_request()).await.unwrap();

    let stored = repository.find_by_id(user.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash.as_str(), "123456");
    assert!(PlainPasswordHasher
        .verify("123456", &stored.password_hash)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_register_with_duplicate_email() {
    let (service, _) = create_test_user_service();

    service.register(create_test_register_request()).await.unwrap();

    let result = service.register(create_test_register_request()).await;
    match result {
        Err(ApplicationError::EmailAlreadyInUse) => {}
        other => panic!("Expected EmailAlreadyInUse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let (service, _) = create_test_user_service();

    let result = service
        .register(RegisterUserRequest {
            name: "John Doe".to_string(),
            email: "not-an-email".to_string(),
            password: "123456".to_string(),
        })
        .await;

    match result {
        Err(ApplicationError::Domain(DomainError::InvalidArgument { field, .. })) => {
            assert_eq!(field, "email");
        }
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticate_user() {
    let (service, _) = create_test_user_service();
    service.register(create_test_register_request()).await.unwrap();

    let user = service
        .authenticate(AuthenticateUserRequest {
            email: "johndoe@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.email.as_str(), "johndoe@example.com");
}

#[tokio::test]
async fn test_authenticate_with_unknown_email() {
    let (service, _) = create_test_user_service();

    let result = service
        .authenticate(AuthenticateUserRequest {
            email: "johndoe@example.com".to_string(),
            password: "123456".to_string(),
        })
        .await;

    match result {
        Err(ApplicationError::InvalidCredentials) => {}
        other => panic!("Expected InvalidCredentials, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authenticate_with_wrong_password() {
    let (service, _) = create_test_user_service();
    service.register(create_test_register_request()).await.unwrap();

    let result = service
        .authenticate(AuthenticateUserRequest {
            email: "johndoe@example.com".to_string(),
            password: "654321".to_string(),
        })
        .await;

    match result {
        Err(ApplicationError::InvalidCredentials) => {}
        other => panic!("Expected InvalidCredentials, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_profile() {
    let (service, _) = create_test_user_service();
    let user = service.register(create_test_register_request()).await.unwrap();

    let profile = service.get_profile(user.id).await.unwrap();

    assert_eq!(profile.id, user.id);
    assert_eq!(profile.name, "John Doe");
}

#[tokio::test]
async fn test_get_profile_with_unknown_id() {
    let (service, _) = create_test_user_service();

    let result = service.get_profile(UserId::new(Uuid::new_v4())).await;

    match result {
        Err(ApplicationError::Domain(DomainError::ResourceNotFound { resource_type, .. })) => {
            assert_eq!(resource_type, "user");
        }
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}
