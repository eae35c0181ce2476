use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileViewResponse {
    pub success: bool,
    pub value: i64,
}

/// Aggregate counts shown on the admin dashboard.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub projects: i64,
    pub certificates: i64,
    pub messages: i64,
    pub profile_views: i64,
}
