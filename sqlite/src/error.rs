use harbor_core::{InsertError, InsertSnafu, QueryError, QuerySnafu};
use snafu::{Location, Snafu};
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to connect to the sqlite database"))]
    Connection {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("Failed to apply the database schema"))]
    Schema {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("A query failed"))]
    Query {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("A transaction failed"))]
    Transaction {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
}

// The port error types are opaque; log the concrete sqlite failure before it
// crosses the boundary.
impl From<Error> for InsertError {
    fn from(e: Error) -> Self {
        error!("sqlite insertion failed: {e:?}");
        InsertSnafu.build()
    }
}

impl From<Error> for QueryError {
    fn from(e: Error) -> Self {
        error!("sqlite query failed: {e:?}");
        QuerySnafu.build()
    }
}
