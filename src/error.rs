use thiserror::Error;

/// Errors reported by a k-means run and by the accessors of its data model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// More clusters were requested than there are points to seed them with.
    #[error("invalid configuration: k ({k}) is larger than the amount of points ({sample_cnt})")]
    TooManyClusters { k: usize, sample_cnt: usize },
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange { what: &'static str, index: usize, len: usize },
}

/// Errors produced while reading a dataset.
#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing header (expected: total_points total_values K max_iterations has_name)")]
    MissingHeader,
    #[error("invalid header field `{field}`: {token}")]
    InvalidHeader { field: &'static str, token: String },
    #[error("unexpected end of input while reading point {point}")]
    UnexpectedEof { point: usize },
    #[error("invalid value `{token}` in point {point}")]
    InvalidValue { point: usize, token: String },
}
