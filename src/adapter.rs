//! # Configuration Adapter
//!
//! Named, one-line access to the job configuration properties and counters
//! the transfer pipeline cares about. Keeping every property read/write and
//! counter lookup behind a function here means an engine-side rename or
//! accessor change lands in exactly one file.
//!
//! Every function is a stateless, synchronous forward: no validation, no
//! retries, no caching. Failures from counter retrieval and generic option
//! parsing surface unmodified.

use crate::config::JobConfiguration;
use crate::constants;
use crate::db;
use crate::error::{ConfigError, ConfigResult};
use crate::job::{Job, JobContext};
use crate::options;

/// Set the hinted number of map tasks for a job.
pub fn set_job_num_map_tasks(job: &mut Job, num_map_tasks: i64) {
    job.configuration_mut()
        .set_i64(constants::PROP_JOB_MAP_TASKS, num_map_tasks);
}

/// Get the hinted number of map tasks for a job. Defaults to 1.
pub fn job_num_map_tasks(context: &impl JobContext) -> i64 {
    context
        .configuration()
        .get_i64(constants::PROP_JOB_MAP_TASKS, constants::DEFAULT_MAP_TASKS)
}

/// Get the hinted number of map tasks from a raw configuration. Defaults to 1.
pub fn conf_num_map_tasks(conf: &JobConfiguration) -> i64 {
    conf.get_i64(constants::PROP_JOB_MAP_TASKS, constants::DEFAULT_MAP_TASKS)
}

/// Number of records emitted by a job's map tasks, from its counters.
pub fn num_map_output_records(job: &Job) -> ConfigResult<u64> {
    find_task_counter(job, constants::COUNTER_MAP_OUTPUT_RECORDS)
}

/// Number of records consumed by a job's map tasks, from its counters.
pub fn num_map_input_records(job: &Job) -> ConfigResult<u64> {
    find_task_counter(job, constants::COUNTER_MAP_INPUT_RECORDS)
}

fn find_task_counter(job: &Job, counter: &str) -> ConfigResult<u64> {
    job.counters()?
        .find_counter(constants::COUNTER_GROUP_TASK, counter)
        .ok_or_else(|| ConfigError::counter_not_found(constants::COUNTER_GROUP_TASK, counter))
}

/// Set the mapper speculative execution property for a job.
pub fn set_job_map_speculative_execution(job: &mut Job, enabled: bool) {
    job.configuration_mut()
        .set_bool(constants::PROP_MAP_SPECULATIVE_EXEC, enabled);
}

/// Set the reducer speculative execution property for a job.
pub fn set_job_reduce_speculative_execution(job: &mut Job, enabled: bool) {
    job.configuration_mut()
        .set_bool(constants::PROP_REDUCE_SPECULATIVE_EXEC, enabled);
}

/// Set the job tracker address on a configuration.
pub fn set_job_tracker_address(conf: &mut JobConfiguration, addr: &str) {
    conf.set(constants::PROP_JOB_TRACKER_ADDRESS, addr);
}

/// Property naming the record type the DB connector materializes input into.
pub fn db_input_class_property() -> &'static str {
    db::INPUT_CLASS_PROPERTY
}

/// Property naming the DB username.
pub fn db_username_property() -> &'static str {
    db::USERNAME_PROPERTY
}

/// Property naming the DB password.
pub fn db_password_property() -> &'static str {
    db::PASSWORD_PROPERTY
}

/// Property naming the DB connect string.
pub fn db_url_property() -> &'static str {
    db::URL_PROPERTY
}

/// Property naming the DB input table.
pub fn db_input_table_name_property() -> &'static str {
    db::INPUT_TABLE_NAME_PROPERTY
}

/// Property naming the WHERE conditions for the DB input table.
pub fn db_input_conditions_property() -> &'static str {
    db::INPUT_CONDITIONS_PROPERTY
}

/// Parse engine-standard generic options out of `args`, merging them into
/// `conf`, and return the application-specific remainder.
///
/// See [`crate::options::parse_generic_options`] for the grammar and the
/// error contract.
pub fn parse_generic_options<I, S>(conf: &mut JobConfiguration, args: I) -> ConfigResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    options::parse_generic_options(conf, args)
}
