//! Application services

mod dashboard_service;
mod dashboard_state;
mod dashboard_view;

pub use dashboard_service::DashboardService;
pub use dashboard_state::{DashboardError, DashboardState, RequestTicket};
pub use dashboard_view::{
    DailyView, DashboardView, DetailsView, HeaderView, HourlyView, PollenSlotView, PollenView,
};
