use snafu::{Location, Snafu};

/// Opaque failure of the persistence side of an inbound port. The adapter
/// owning the underlying store logs the concrete cause before converting.
#[derive(Debug, Snafu)]
#[snafu(display("an error occurred during data insertion"), visibility(pub))]
pub struct InsertError {
    #[snafu(implicit)]
    location: Location,
}

#[derive(Debug, Snafu)]
#[snafu(display("an error occurred during data retrieval"), visibility(pub))]
pub struct QueryError {
    #[snafu(implicit)]
    location: Location,
}
