//! Precise ephemerides parsing: SP3 orbits and Clock RINEX biases.
#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]
extern crate gnss_rs as gnss;

use thiserror::Error;

#[cfg(test)]
mod tests;

mod clock;
mod constellation;
mod position;
mod reader;
mod series;
mod sp3;
mod time;

pub mod prelude {
    pub use crate::clock::parse_clockfile;
    pub use crate::constellation::Fleet;
    pub use crate::series::{ClockSeries, OrbitSeries, PrnArray, Series};
    pub use crate::sp3::parse_sp3;
    pub use crate::time::epoch_to_gpst_millis;
    pub use crate::{Error, ParsingError};
    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Epoch, TimeScale};
}

pub use clock::parse_clockfile;
pub use sp3::parse_sp3;

/// Errors that abort a parse run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found \"{0}\"")]
    FileNotFound(String),
    #[error("no support exists for constellation \"{0}\"")]
    UnsupportedConstellation(String),
    #[error("parsing error")]
    Parsing(#[from] ParsingError),
    #[error("file i/o error")]
    IoError(#[from] std::io::Error),
}

/// Record level parsing errors. Fatal for the whole parse run:
/// no partial store escapes.
#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("failed to parse epoch year from \"{0}\"")]
    EpochYear(String),
    #[error("failed to parse epoch month from \"{0}\"")]
    EpochMonth(String),
    #[error("failed to parse epoch day from \"{0}\"")]
    EpochDay(String),
    #[error("failed to parse epoch hours from \"{0}\"")]
    EpochHours(String),
    #[error("failed to parse epoch minutes from \"{0}\"")]
    EpochMinutes(String),
    #[error("failed to parse epoch seconds from \"{0}\"")]
    EpochSeconds(String),
    #[error("malformed epoch header \"{0}\"")]
    MalformedEpochHeader(String),
    #[error("failed to build hifitime::Epoch")]
    Epoch,
    #[error("failed to parse sv from \"{0}\"")]
    SV(String),
    #[error("failed to parse (x, y or z) coordinate from \"{0}\"")]
    Coordinates(String),
    #[error("failed to parse clock bias from \"{0}\"")]
    ClockBias(String),
    #[error("malformed clock record \"{0}\"")]
    MalformedClockRecord(String),
    #[error("missing \"{0}\" header marker")]
    MissingHeaderMarker(&'static str),
    #[error("position record ahead of any epoch header")]
    NoEpochContext,
}
