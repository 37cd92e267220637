pub mod notification_badge;
pub mod status_select;
