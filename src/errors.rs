use thiserror::Error;

/// Raised when a column or lane index falls outside the fixed dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("column index {index} is out of range for a matrix with {count} columns")]
    Column { index: usize, count: usize },

    #[error("lane index {index} is out of range for a vector with {count} lanes")]
    Lane { index: usize, count: usize },
}

pub(crate) fn check_column(index: usize, count: usize) -> Result<(), IndexError> {
    if index < count {
        return Ok(());
    }
    tracing::debug!(index, count, "rejected out-of-range column index");
    Err(IndexError::Column { index, count })
}

pub(crate) fn check_lane(index: usize, count: usize) -> Result<(), IndexError> {
    if index < count {
        return Ok(());
    }
    tracing::debug!(index, count, "rejected out-of-range lane index");
    Err(IndexError::Lane { index, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_tracing;
    use test_case::test_case;

    #[test_case(0, 3)]
    #[test_case(2, 3)]
    #[test_case(3, 4)]
    fn in_range_indices_pass(index: usize, count: usize) {
        init_tracing();
        assert_eq!(check_column(index, count), Ok(()));
        assert_eq!(check_lane(index, count), Ok(()));
    }

    #[test_case(3, 3)]
    #[test_case(4, 2)]
    #[test_case(usize::MAX, 4)]
    fn out_of_range_indices_report_index_and_bound(index: usize, count: usize) {
        init_tracing();
        assert_eq!(
            check_column(index, count),
            Err(IndexError::Column { index, count })
        );
        assert_eq!(
            check_lane(index, count),
            Err(IndexError::Lane { index, count })
        );
    }

    #[test]
    fn messages_name_the_index_and_the_bound() {
        let err = IndexError::Column { index: 3, count: 3 };
        assert_eq!(
            err.to_string(),
            "column index 3 is out of range for a matrix with 3 columns"
        );
        let err = IndexError::Lane { index: 5, count: 2 };
        assert_eq!(
            err.to_string(),
            "lane index 5 is out of range for a vector with 2 lanes"
        );
    }
}
