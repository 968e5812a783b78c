#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod settings;
pub mod startup;

pub use settings::*;
pub use startup::*;
