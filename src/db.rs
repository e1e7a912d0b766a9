//! # Database Connector Property Names
//!
//! Configuration keys consumed by the JDBC-style input connector. These
//! strings are compatibility surface: connector-side code resolves its
//! credentials, connect string, and input scoping from exactly these keys,
//! so their values are regression-tested literally.

/// Record type the connector materializes input rows into.
pub const INPUT_CLASS_PROPERTY: &str = "gridpump.jdbc.input.class";

/// Database username.
pub const USERNAME_PROPERTY: &str = "gridpump.jdbc.username";

/// Database password.
pub const PASSWORD_PROPERTY: &str = "gridpump.jdbc.password";

/// Database connect string.
pub const URL_PROPERTY: &str = "gridpump.jdbc.url";

/// Table the connector reads from.
pub const INPUT_TABLE_NAME_PROPERTY: &str = "gridpump.jdbc.input.table.name";

/// WHERE conditions restricting the input table scan.
pub const INPUT_CONDITIONS_PROPERTY: &str = "gridpump.jdbc.input.conditions";
