/// Failures of the programmatic row API. Gesture handling itself never
/// fails; degenerate gestures resolve to a cancel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    RowOutOfRange { row: usize, count: usize },
    RowNotVisible { row: usize },
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::RowOutOfRange { row, count } => {
                write!(f, "row {row} out of range; list has {count} rows")
            }
            SwipeError::RowNotVisible { row } => write!(f, "row {row} is not laid out"),
        }
    }
}

impl std::error::Error for SwipeError {}
