pub mod dashboard;
pub mod serve;

pub use dashboard::{DashboardArgs, dashboard};
pub use serve::serve;
