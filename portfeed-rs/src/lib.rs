#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a library for reading raw maritime activity batches from the
//! port authority JSON feed

mod data_dir;
mod deserialize_utils;
mod error;
mod models;
mod string_new_types;

pub use data_dir::*;
pub use error::{Error, ParseImoNumberError, ParseStringError, Result};
pub use models::*;
pub use string_new_types::NonEmptyString;
