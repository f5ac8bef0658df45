pub mod daily_log;
pub mod route_source;
pub mod trip;
