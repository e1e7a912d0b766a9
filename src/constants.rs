//! # Engine Property Names
//!
//! Well-known configuration keys and counter names owned by the grid engine.
//! Keeping these in one place allows the rest of the codebase to survive
//! engine-side renames with a single edit.

/// Hinted number of map tasks for a transfer job.
pub const PROP_JOB_MAP_TASKS: &str = "gridpump.job.map.tasks";

/// Whether the engine may run speculative duplicate map task attempts.
pub const PROP_MAP_SPECULATIVE_EXEC: &str = "gridpump.map.tasks.speculative.execution";

/// Whether the engine may run speculative duplicate reduce task attempts.
pub const PROP_REDUCE_SPECULATIVE_EXEC: &str = "gridpump.reduce.tasks.speculative.execution";

/// Address of the job tracker a submitted job reports to.
pub const PROP_JOB_TRACKER_ADDRESS: &str = "gridpump.job.tracker.address";

/// Counter group holding per-task record counters.
pub const COUNTER_GROUP_TASK: &str = "gridpump.task.counters";

/// Records emitted by all map tasks of a job.
pub const COUNTER_MAP_OUTPUT_RECORDS: &str = "MAP_OUTPUT_RECORDS";

/// Records consumed by all map tasks of a job.
pub const COUNTER_MAP_INPUT_RECORDS: &str = "MAP_INPUT_RECORDS";

/// Map task count assumed when a job never set a hint.
pub const DEFAULT_MAP_TASKS: i64 = 1;
