mod gracefullshutdown;
mod logs;
mod metrics;
mod operation;
mod patch;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::operation::OperationContext;
pub use self::patch::present;
