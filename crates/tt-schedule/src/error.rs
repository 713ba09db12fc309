use thiserror::Error;

use tt_core::{FormatError, Station, TrainId};
use tt_network::NetworkError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("train {train}: no segment between {from} and {to}")]
    MissingSegment {
        train: TrainId,
        from:  Station,
        to:    Station,
    },

    #[error("requests row {row}: {source}")]
    Row {
        row:    usize,
        #[source]
        source: FormatError,
    },

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("requests parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
