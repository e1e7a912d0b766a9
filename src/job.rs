//! # Job Handle
//!
//! Submission-side view of one transfer job: a name, the configuration the
//! engine will propagate to its tasks, and (once the engine has reported
//! progress) a counters snapshot.

use crate::config::JobConfiguration;
use crate::counters::Counters;
use crate::error::{ConfigError, ConfigResult};

/// Read-only view of a job's configuration.
///
/// Getters that only need to read properties take `&impl JobContext`, so
/// they work against a full [`Job`] handle or any engine-side context type
/// that exposes its configuration.
pub trait JobContext {
    fn configuration(&self) -> &JobConfiguration;
}

/// A transfer job awaiting or undergoing execution.
#[derive(Debug, Clone)]
pub struct Job {
    name: String,
    configuration: JobConfiguration,
    counters: Option<Counters>,
}

impl Job {
    /// Create a job with an empty configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            configuration: JobConfiguration::new(),
            counters: None,
        }
    }

    /// Create a job over an existing configuration.
    pub fn with_configuration(name: impl Into<String>, configuration: JobConfiguration) -> Self {
        Self {
            name: name.into(),
            configuration,
            counters: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mutable access to the job's configuration.
    pub fn configuration_mut(&mut self) -> &mut JobConfiguration {
        &mut self.configuration
    }

    /// The counters snapshot the engine attached to this job.
    ///
    /// Fails with [`ConfigError::CountersUnavailable`] until the engine has
    /// reported one, which callers must treat like any other retrieval
    /// failure.
    pub fn counters(&self) -> ConfigResult<&Counters> {
        self.counters
            .as_ref()
            .ok_or_else(|| ConfigError::counters_unavailable(&self.name))
    }

    /// Attach a counters snapshot. Engine-side population hook; replaces
    /// any earlier snapshot.
    pub fn attach_counters(&mut self, counters: Counters) {
        self.counters = Some(counters);
    }
}

impl JobContext for Job {
    fn configuration(&self) -> &JobConfiguration {
        &self.configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_has_empty_configuration() {
        let job = Job::new("import-orders");
        assert_eq!(job.name(), "import-orders");
        assert!(job.configuration().is_empty());
    }

    #[test]
    fn test_counters_unavailable_before_attach() {
        let job = Job::new("import-orders");
        let err = job.counters().unwrap_err();
        assert!(matches!(err, ConfigError::CountersUnavailable { .. }));
    }

    #[test]
    fn test_attach_counters() {
        let mut job = Job::new("import-orders");
        let mut counters = Counters::new();
        counters.record("g", "c", 7);
        job.attach_counters(counters);
        assert_eq!(job.counters().unwrap().find_counter("g", "c"), Some(7));
    }

    #[test]
    fn test_with_configuration_preserves_properties() {
        let mut conf = JobConfiguration::new();
        conf.set("gridpump.jdbc.input.table.name", "orders");
        let job = Job::with_configuration("import-orders", conf);
        assert_eq!(
            job.configuration().get("gridpump.jdbc.input.table.name"),
            Some("orders")
        );
    }
}
