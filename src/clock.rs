//! Clock RINEX (.clk) file parsing.
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use hifitime::{Epoch, TimeScale};

use crate::{
    constellation::Fleet,
    prelude::{ClockSeries, PrnArray},
    reader::BufferedReader,
    time::epoch_to_gpst_millis,
    Error, ParsingError,
};

/// Solution satellites declaration, last meaningful header field
const SOLN_SATS_MARKER: &str = "OF SOLN SATS";

/// Header terminator
const END_OF_HEADER_MARKER: &str = "END OF HEADER";

/// Satellite clock record tag. `AR` (receiver) and other
/// record types are left aside.
fn is_sv_clock_entry(line: &str) -> bool {
    line.starts_with("AS")
}

/// One `AS` record, resolved against the requested fleet.
struct ClockEntry {
    prn: u8,
    utc: Epoch,
    bias_s: f64,
}

impl ClockEntry {
    /// Parses one satellite clock record. Records belonging to another
    /// fleet resolve to `None` without touching their numeric fields.
    fn parse(line: &str, fleet: &Fleet) -> Result<Option<Self>, ParsingError> {
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();

        let designator = *fields
            .get(1)
            .ok_or_else(|| ParsingError::MalformedClockRecord(line.to_string()))?;
        if !designator.starts_with(fleet.code) {
            return Ok(None);
        }

        if fields.len() < 10 {
            return Err(ParsingError::MalformedClockRecord(line.to_string()));
        }

        let prn = u8::from_str(&designator[1..])
            .or(Err(ParsingError::SV(designator.to_string())))?;

        let y = i32::from_str(fields[2]).or(Err(ParsingError::EpochYear(fields[2].to_string())))?;
        let m = u8::from_str(fields[3]).or(Err(ParsingError::EpochMonth(fields[3].to_string())))?;
        let d = u8::from_str(fields[4]).or(Err(ParsingError::EpochDay(fields[4].to_string())))?;
        let hh = u8::from_str(fields[5]).or(Err(ParsingError::EpochHours(fields[5].to_string())))?;
        let mm =
            u8::from_str(fields[6]).or(Err(ParsingError::EpochMinutes(fields[6].to_string())))?;
        let ss =
            f64::from_str(fields[7]).or(Err(ParsingError::EpochSeconds(fields[7].to_string())))?;

        // fields[8] is the data value count, unused here
        let bias_s =
            f64::from_str(fields[9]).or(Err(ParsingError::ClockBias(fields[9].to_string())))?;

        let utc = Epoch::maybe_from_gregorian(y, m, d, hh, mm, ss as u8, 0, TimeScale::UTC)
            .or(Err(ParsingError::Epoch))?;

        Ok(Some(Self { prn, utc, bias_s }))
    }
}

/// Parses a Clock RINEX file and resolves its satellite clock bias
/// records into one time-ordered series per satellite of the requested
/// constellation.
///
/// Returns a [PrnArray] dimensioned to the fleet, indexed by PRN#.
/// Records interleaved from other constellations are left aside.
/// ```
/// use peph::prelude::*;
///
/// let clkdata = parse_clockfile("test_resources/CLK/igu21906_00.clk", "gps")
///     .unwrap();
/// for (prn, series) in clkdata.iter() {
///     for (utc, gpst_millis, bias_s) in series.biases() {
///         println!("G{:02} {} ({}) : {:.3E} s", prn, utc, gpst_millis, bias_s);
///     }
/// }
/// ```
pub fn parse_clockfile(
    path: impl AsRef<Path>,
    constellation: &str,
) -> Result<PrnArray<ClockSeries>, Error> {
    let fleet = Fleet::from_name(constellation)?;

    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let reader = BufferedReader::new(path)?;

    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()?;

    // Two linear scans delimit the record section: the preamble runs up
    // to the solution satellites declaration (that line is retained),
    // records start right after the header terminator.
    let soln_sats = lines
        .iter()
        .position(|line| line.contains(SOLN_SATS_MARKER))
        .ok_or(ParsingError::MissingHeaderMarker(SOLN_SATS_MARKER))?;

    let body = lines[soln_sats..]
        .iter()
        .position(|line| line.contains(END_OF_HEADER_MARKER))
        .map(|offset| soln_sats + offset + 1)
        .ok_or(ParsingError::MissingHeaderMarker(END_OF_HEADER_MARKER))?;

    let mut clkdata = PrnArray::new(fleet.max_satellites, ClockSeries::new(fleet.constellation));

    for line in &lines[body..] {
        let line = line.trim();
        if !is_sv_clock_entry(line) {
            continue;
        }
        let entry = match ClockEntry::parse(line, fleet)? {
            Some(entry) => entry,
            None => continue,
        };
        let gpst_millis = epoch_to_gpst_millis(entry.utc, false);
        match clkdata.get_mut(entry.prn) {
            Some(series) => series.push(entry.utc, gpst_millis, entry.bias_s),
            None => {
                warn!(
                    "clk: PRN#{} outside {} fleet dimension, record dropped",
                    entry.prn, fleet.name
                );
            },
        }
    }

    let unpopulated = clkdata.unpopulated_prns();
    if unpopulated.len() == usize::from(fleet.max_satellites) {
        warn!("no clk data found for PRNs {:?}", unpopulated);
    }
    debug!(
        "clk: \"{}\": {}/{} {} satellites populated",
        path.display(),
        usize::from(fleet.max_satellites) - unpopulated.len(),
        fleet.max_satellites,
        fleet.name
    );

    Ok(clkdata)
}
