use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ExtractionError {
    #[snafu(display("Failed to load raw data files"))]
    Load {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: portfeed_rs::Error,
    },
    #[snafu(display("Failed to process extracted records"))]
    Process {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: harbor_core::InsertError,
    },
}
