// Inclusive range of integer targets searched for
pub const TARGET_MIN: i64 = 1;
pub const TARGET_MAX: i64 = 10;
