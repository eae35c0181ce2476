use mockall::mock;
use mockall::predicate::*;
use mockall::Sequence;

use resume_api::errors::AppError;
use resume_api::use_cases::analytics::AnalyticsHandler;

mock! {
    pub MetricRepo {}

    #[async_trait::async_trait]
    impl resume_api::repositories::metric::MetricRepository for MetricRepo {
        async fn increment_metric(&self, key: &str) -> Result<i64, AppError>;
        async fn get_metric(&self, key: &str) -> Result<Option<i64>, AppError>;
        async fn check_connection(&self) -> Result<(), AppError>;
    }
}

#[tokio::test]
async fn record_profile_view_uses_profile_views_key() {
    let mut repo = MockMetricRepo::new();
    repo.expect_increment_metric()
        .with(eq("profile_views"))
        .returning(|_| Ok(1));

    let handler = AnalyticsHandler::new(repo);
    assert_eq!(handler.record_profile_view().await.unwrap(), 1);
}

#[tokio::test]
async fn consecutive_views_return_increasing_totals() {
    let mut repo = MockMetricRepo::new();
    let mut seq = Sequence::new();

    repo.expect_increment_metric()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(41));
    repo.expect_increment_metric()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(42));

    let handler = AnalyticsHandler::new(repo);

    let before = handler.record_profile_view().await.unwrap();
    let after = handler.record_profile_view().await.unwrap();

    assert_eq!(after, before + 1);
}

#[tokio::test]
async fn profile_views_is_zero_before_first_increment() {
    let mut repo = MockMetricRepo::new();
    repo.expect_get_metric().returning(|_| Ok(None));

    let handler = AnalyticsHandler::new(repo);
    assert_eq!(handler.profile_views().await.unwrap(), 0);
}

#[tokio::test]
async fn profile_views_returns_stored_total() {
    let mut repo = MockMetricRepo::new();
    repo.expect_get_metric()
        .with(eq("profile_views"))
        .returning(|_| Ok(Some(1234)));

    let handler = AnalyticsHandler::new(repo);
    assert_eq!(handler.profile_views().await.unwrap(), 1234);
}
