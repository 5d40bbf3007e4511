//! SP3 precise orbit file parsing.
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use hifitime::{Epoch, TimeScale};

use crate::{
    constellation::Fleet,
    position::{is_position_entry, PositionEntry},
    prelude::{OrbitSeries, PrnArray},
    reader::BufferedReader,
    time::epoch_to_gpst_millis,
    Error, ParsingError,
};

fn is_epoch_header(line: &str) -> bool {
    line.starts_with('*')
}

/// Parses the `* yyyy mm dd hh mm ss.ssss` epoch header into a UTC [Epoch].
/// Sub-second precision is deliberately discarded: SP3 products are sampled
/// on whole seconds.
fn parse_epoch_header(line: &str) -> Result<Epoch, ParsingError> {
    let fields: Vec<&str> = line.split_ascii_whitespace().collect();
    if fields.len() < 7 {
        return Err(ParsingError::MalformedEpochHeader(line.to_string()));
    }

    let y = i32::from_str(fields[1]).or(Err(ParsingError::EpochYear(fields[1].to_string())))?;
    let m = u8::from_str(fields[2]).or(Err(ParsingError::EpochMonth(fields[2].to_string())))?;
    let d = u8::from_str(fields[3]).or(Err(ParsingError::EpochDay(fields[3].to_string())))?;
    let hh = u8::from_str(fields[4]).or(Err(ParsingError::EpochHours(fields[4].to_string())))?;
    let mm = u8::from_str(fields[5]).or(Err(ParsingError::EpochMinutes(fields[5].to_string())))?;
    let ss = f64::from_str(fields[6]).or(Err(ParsingError::EpochSeconds(fields[6].to_string())))?;

    Epoch::maybe_from_gregorian(y, m, d, hh, mm, ss as u8, 0, TimeScale::UTC)
        .or(Err(ParsingError::Epoch))
}

/// Parses an SP3 file and resolves its position records into one
/// time-ordered series per satellite of the requested constellation.
///
/// Returns a [PrnArray] dimensioned to the fleet, indexed by PRN#.
/// Records interleaved from other constellations are left aside.
/// ```
/// use peph::prelude::*;
///
/// let sp3data = parse_sp3("test_resources/SP3/igu21906_00.sp3", "gps")
///     .unwrap();
/// for (prn, series) in sp3data.iter() {
///     for (utc, gpst_millis, (x_m, y_m, z_m)) in series.positions() {
///         println!("G{:02} {} ({}) : {} {} {}", prn, utc, gpst_millis, x_m, y_m, z_m);
///     }
/// }
/// ```
pub fn parse_sp3(
    path: impl AsRef<Path>,
    constellation: &str,
) -> Result<PrnArray<OrbitSeries>, Error> {
    let fleet = Fleet::from_name(constellation)?;

    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let reader = BufferedReader::new(path)?;

    let mut sp3data = PrnArray::new(fleet.max_satellites, OrbitSeries::new(fleet.constellation));

    // Epoch context carried across position records.
    // Undefined until the first epoch header is seen.
    let mut epoch_context: Option<(Epoch, i64)> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if is_epoch_header(line) {
            let utc = parse_epoch_header(line)?;
            epoch_context = Some((utc, epoch_to_gpst_millis(utc, false)));
            continue;
        }

        if is_position_entry(line) {
            let entry = match PositionEntry::parse(line, fleet)? {
                Some(entry) => entry,
                None => continue,
            };
            let (utc, gpst_millis) = epoch_context.ok_or(ParsingError::NoEpochContext)?;
            match sp3data.get_mut(entry.sv.prn) {
                Some(series) => series.push(
                    utc,
                    gpst_millis,
                    entry.x_km * 1.0E3,
                    entry.y_km * 1.0E3,
                    entry.z_km * 1.0E3,
                ),
                None => {
                    warn!(
                        "sp3: PRN#{} outside {} fleet dimension, record dropped",
                        entry.sv.prn, fleet.name
                    );
                },
            }
        }
        // any other line type: tolerated and ignored
    }

    let unpopulated = sp3data.unpopulated_prns();
    if unpopulated.len() == usize::from(fleet.max_satellites) {
        warn!("no sp3 data found for PRNs {:?}", unpopulated);
    }
    debug!(
        "sp3: \"{}\": {}/{} {} satellites populated",
        path.display(),
        usize::from(fleet.max_satellites) - unpopulated.len(),
        fleet.max_satellites,
        fleet.name
    );

    Ok(sp3data)
}

#[cfg(test)]
mod test {
    use super::parse_epoch_header;
    use crate::ParsingError;
    use hifitime::Epoch;

    #[test]
    fn epoch_header_parsing() {
        assert_eq!(
            parse_epoch_header("* 2022 6 1 0 0 0.00000000").unwrap(),
            Epoch::from_gregorian_utc(2022, 6, 1, 0, 0, 0, 0),
        );
        // sub-second content is truncated away
        assert_eq!(
            parse_epoch_header("*  2021 1 1 12 30 15.99999999").unwrap(),
            Epoch::from_gregorian_utc(2021, 1, 1, 12, 30, 15, 0),
        );
    }

    #[test]
    fn malformed_epoch_headers() {
        assert!(matches!(
            parse_epoch_header("* 2022 6 1 0 0"),
            Err(ParsingError::MalformedEpochHeader(_))
        ));
        assert!(matches!(
            parse_epoch_header("* 2022 six 1 0 0 0.0"),
            Err(ParsingError::EpochMonth(_))
        ));
        assert!(matches!(
            parse_epoch_header("* 2022 13 1 0 0 0.0"),
            Err(ParsingError::Epoch)
        ));
    }
}
