use chrono::{NaiveDate, NaiveTime, Utc};
use mockall::mock;
use mockall::predicate::*;
use uuid::Uuid;

use resume_api::entities::message::{ContactMessage, MessageInsert, MessageStatus, NewContactForm};
use resume_api::errors::AppError;
use resume_api::use_cases::contact::ContactHandler;

mock! {
    pub MessageRepo {}

    #[async_trait::async_trait]
    impl resume_api::repositories::message::MessageRepository for MessageRepo {
        async fn create_message(&self, msg: &MessageInsert) -> Result<ContactMessage, AppError>;
        async fn list_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
        async fn mark_message_read(&self, id: &Uuid) -> Result<ContactMessage, AppError>;
        async fn delete_message(&self, id: &Uuid) -> Result<(), AppError>;
        async fn count_messages(&self) -> Result<i64, AppError>;
    }
}

fn stored_message(insert: &MessageInsert) -> ContactMessage {
    ContactMessage {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        email: insert.email.clone(),
        subject: insert.subject.clone(),
        message: insert.message.clone(),
        date: insert.date.clone(),
        time: insert.time.clone(),
        status: MessageStatus::Unread,
        created_at: Utc::now(),
    }
}

fn valid_form() -> NewContactForm {
    NewContactForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "I would like to discuss a project.".to_string(),
    }
}

#[tokio::test]
async fn create_stamps_date_time_and_unread_status() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message()
        .returning(|insert| Ok(stored_message(insert)));

    let handler = ContactHandler::new(repo);

    let created = handler.create_contact_message(valid_form()).await.unwrap();

    assert_eq!(created.status, MessageStatus::Unread);
    assert!(NaiveDate::parse_from_str(&created.date, "%Y-%m-%d").is_ok());
    assert!(NaiveTime::parse_from_str(&created.time, "%I:%M %p").is_ok());
}

#[tokio::test]
async fn create_rejects_blank_required_fields() {
    let blank_variants = [
        NewContactForm { name: "".into(), ..valid_form() },
        NewContactForm { email: "".into(), ..valid_form() },
        NewContactForm { subject: "".into(), ..valid_form() },
        NewContactForm { message: "".into(), ..valid_form() },
    ];

    for form in blank_variants {
        let mut repo = MockMessageRepo::new();
        repo.expect_create_message().never();

        let handler = ContactHandler::new(repo);
        let result = handler.create_contact_message(form).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}

#[tokio::test]
async fn create_rejects_invalid_email() {
    let mut repo = MockMessageRepo::new();
    repo.expect_create_message().never();

    let handler = ContactHandler::new(repo);
    let form = NewContactForm { email: "not-an-email".into(), ..valid_form() };

    let result = handler.create_contact_message(form).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn mark_read_passes_parsed_id_to_repository() {
    let id = Uuid::new_v4();
    let mut repo = MockMessageRepo::new();
    repo.expect_mark_message_read()
        .with(eq(id))
        .returning(|id| {
            Ok(ContactMessage {
                id: *id,
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: "Hi".into(),
                message: "Hello".into(),
                date: "2024-05-01".into(),
                time: "03:45 PM".into(),
                status: MessageStatus::Read,
                created_at: Utc::now(),
            })
        });

    let handler = ContactHandler::new(repo);
    let message = handler.mark_message_read(&id.to_string()).await.unwrap();

    assert_eq!(message.id, id);
    assert_eq!(message.status, MessageStatus::Read);
}

#[tokio::test]
async fn mark_read_rejects_malformed_id() {
    let mut repo = MockMessageRepo::new();
    repo.expect_mark_message_read().never();

    let handler = ContactHandler::new(repo);
    let result = handler.mark_message_read("not-a-uuid").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn delete_missing_message_is_not_found() {
    let mut repo = MockMessageRepo::new();
    repo.expect_delete_message()
        .returning(|_| Err(AppError::NotFound("Message not found".into())));

    let handler = ContactHandler::new(repo);
    let result = handler.delete_message(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn list_returns_repository_order() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let mut repo = MockMessageRepo::new();
    repo.expect_list_messages().returning(move || {
        Ok(vec![
            ContactMessage {
                id: first,
                name: "Newest".into(),
                email: "new@example.com".into(),
                subject: "a".into(),
                message: "b".into(),
                date: "2024-05-02".into(),
                time: "09:00 AM".into(),
                status: MessageStatus::Unread,
                created_at: Utc::now(),
            },
            ContactMessage {
                id: second,
                name: "Older".into(),
                email: "old@example.com".into(),
                subject: "c".into(),
                message: "d".into(),
                date: "2024-05-01".into(),
                time: "09:00 AM".into(),
                status: MessageStatus::Read,
                created_at: Utc::now(),
            },
        ])
    });

    let handler = ContactHandler::new(repo);
    let messages = handler.list_messages().await.unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, first);
    assert_eq!(messages[1].id, second);
}
