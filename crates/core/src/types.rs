/// All database primary keys are PostgreSQL UUIDs (`gen_random_uuid()`).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without a time component (progress update / issue dates).
pub type DateOnly = chrono::NaiveDate;
