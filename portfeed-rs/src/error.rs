use snafu::{Location, Snafu};
use std::num::ParseIntError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ParseStringError {
    #[snafu(display("String was unexpectedly empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ParseImoNumberError {
    #[snafu(display("ImoNumber string was empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
    #[snafu(display("Failed to parse ImoNumber '{value}'"))]
    Parse {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: ParseIntError,
    },
    #[snafu(display("ImoNumber must be positive, got '{value}'"))]
    NonPositive {
        #[snafu(implicit)]
        location: Location,
        value: i64,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("IO error"))]
    Io {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Json error"))]
    Json {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("Invalid glob pattern '{pattern}'"))]
    Pattern {
        #[snafu(implicit)]
        location: Location,
        pattern: String,
        #[snafu(source)]
        error: glob::PatternError,
    },
    #[snafu(display("Failed to read glob entry"))]
    Glob {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: glob::GlobError,
    },
}
