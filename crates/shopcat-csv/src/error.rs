use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open {path} for appending: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write rows to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}
