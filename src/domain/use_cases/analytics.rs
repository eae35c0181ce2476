use crate::{
    constants::PROFILE_VIEWS_KEY,
    errors::AppError,
    repositories::metric::MetricRepository,
};

pub struct AnalyticsHandler<R>
where
    R: MetricRepository,
{
    pub metric_repo: R,
}

impl<R> AnalyticsHandler<R>
where
    R: MetricRepository,
{
    pub fn new(metric_repo: R) -> Self {
        AnalyticsHandler { metric_repo }
    }

    /// Records one profile view and returns the new total. The
    /// increment-or-create is a single atomic statement in the repository,
    /// so concurrent views never lose counts.
    pub async fn record_profile_view(&self) -> Result<i64, AppError> {
        self.metric_repo.increment_metric(PROFILE_VIEWS_KEY).await
    }

    /// Current profile view total; zero when the counter has never
    /// been incremented.
    pub async fn profile_views(&self) -> Result<i64, AppError> {
        Ok(self
            .metric_repo
            .get_metric(PROFILE_VIEWS_KEY)
            .await?
            .unwrap_or(0))
    }
}
