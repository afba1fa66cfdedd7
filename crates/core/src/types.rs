/// All database primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Stock quantities are stored as SQLite `INTEGER` and may be zero or negative.
pub type Quantity = i64;
