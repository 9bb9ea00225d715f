use crate::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{error, info};

/// Wall-clock span of one service call, closed by [`OperationContext::finish`].
pub struct OperationContext {
    pub name: &'static str,
    pub start_time: Instant,
}

impl OperationContext {
    pub fn start(name: &'static str) -> Self {
        info!("Starting operation: {name}");
        Self {
            name,
            start_time: Instant::now(),
        }
    }

    pub fn finish(&self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();

        let status = if is_success {
            info!("✅ Operation completed successfully: {message}");
            Status::Success
        } else {
            error!("❌ Operation failed: {message}");
            Status::Error
        };

        metrics.record(method, status, elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::{encoding::text::encode, registry::Registry};
    use testresult::TestResult;

    #[test]
    fn finish_records_one_sample_with_the_outcome() -> TestResult {
        let mut registry = Registry::default();
        let metrics = Metrics::registered(&mut registry, "demo_service", "DemoService");

        OperationContext::start("demo_ok").finish(&metrics, Method::Get, true, "ok");
        OperationContext::start("demo_err").finish(&metrics, Method::Delete, false, "missing");

        let mut buffer = String::new();
        encode(&mut buffer, &registry)?;

        assert!(buffer.contains("method=\"Get\",status=\"Success\""));
        assert!(buffer.contains("method=\"Delete\",status=\"Error\""));
        Ok(())
    }
}
