//! Label value space - every tunable number of the label rules in one place

/// Lowest value a label (base or effective) can hold
pub const MIN_VALUE: i32 = -3;

/// Highest value a label (base or effective) can hold
pub const MAX_VALUE: i32 = 4;

/// Width of the value space, used to scale values onto the graph radius
pub const VALUE_RANGE: i32 = MAX_VALUE - MIN_VALUE;

/// Amount a marked condition subtracts from its label
pub const CONDITION_PENALTY: i32 = 2;

/// Editable base range when shifting labels (one step inside the extremes)
pub const SHIFT_MIN: i32 = -2;
pub const SHIFT_MAX: i32 = 3;

/// Clamp any integer into the label value space
pub fn clamp_value(value: i64) -> i32 {
    value.clamp(MIN_VALUE as i64, MAX_VALUE as i64) as i32
}
