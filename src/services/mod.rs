pub mod analytics_service;
pub mod dashboard_service;

pub use analytics_service::AnalyticsService;
pub use dashboard_service::DashboardService;
