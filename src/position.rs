//! SP3 position record parsing.
use std::str::FromStr;

use crate::{constellation::Fleet, ParsingError};
use gnss::prelude::SV;

pub(crate) fn is_position_entry(line: &str) -> bool {
    line.starts_with('P')
}

/// One `P` record, resolved against the requested fleet.
pub(crate) struct PositionEntry {
    pub sv: SV,
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl PositionEntry {
    /// Parses one position record. Records belonging to another fleet
    /// resolve to `None` without touching their numeric fields, since
    /// multi-constellation files routinely interleave them.
    pub(crate) fn parse(line: &str, fleet: &Fleet) -> Result<Option<Self>, ParsingError> {
        let fields: Vec<&str> = line.split_ascii_whitespace().collect();

        let designator = fields[0];
        if designator.chars().nth(1) != Some(fleet.code) {
            return Ok(None);
        }

        let prn = u8::from_str(&designator[2..])
            .or(Err(ParsingError::SV(designator.to_string())))?;

        if fields.len() < 4 {
            return Err(ParsingError::Coordinates(line.to_string()));
        }

        let x_km = f64::from_str(fields[1])
            .or(Err(ParsingError::Coordinates(fields[1].to_string())))?;
        let y_km = f64::from_str(fields[2])
            .or(Err(ParsingError::Coordinates(fields[2].to_string())))?;
        let z_km = f64::from_str(fields[3])
            .or(Err(ParsingError::Coordinates(fields[3].to_string())))?;

        Ok(Some(Self {
            sv: SV::new(fleet.constellation, prn),
            x_km,
            y_km,
            z_km,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::PositionEntry;
    use crate::constellation::Fleet;
    use crate::ParsingError;

    #[test]
    fn position_entry_parsing() {
        let gps = Fleet::from_name("gps").unwrap();
        for (content, prn, x_km, y_km, z_km) in [
            (
                "PG01  11111.111 22222.222 33333.333    123.456789",
                1,
                11111.111,
                22222.222,
                33333.333,
            ),
            (
                "PG32 -22335.782004 -14656.280389  -1218.238499   -176.397152",
                32,
                -22335.782004,
                -14656.280389,
                -1218.238499,
            ),
        ] {
            let entry = PositionEntry::parse(content, gps).unwrap().unwrap();
            assert_eq!(entry.sv.prn, prn);
            assert_eq!(entry.sv.constellation, gps.constellation);
            assert_eq!(entry.x_km, x_km);
            assert_eq!(entry.y_km, y_km);
            assert_eq!(entry.z_km, z_km);
        }
    }

    #[test]
    fn foreign_fleet_is_skipped() {
        let gps = Fleet::from_name("gps").unwrap();
        // even with rotten numeric fields
        for content in [
            "PE01   1000.000000   2000.000000   3000.000000     11.111111",
            "PR24  xxxx.xxxxxx   5000.000000   6000.000000",
        ] {
            assert!(PositionEntry::parse(content, gps).unwrap().is_none());
        }
    }

    #[test]
    fn malformed_entries() {
        let gps = Fleet::from_name("gps").unwrap();
        assert!(matches!(
            PositionEntry::parse("PGxx  1.0 2.0 3.0", gps),
            Err(ParsingError::SV(_))
        ));
        assert!(matches!(
            PositionEntry::parse("PG01  1.0 junk 3.0", gps),
            Err(ParsingError::Coordinates(_))
        ));
        assert!(matches!(
            PositionEntry::parse("PG01  1.0 2.0", gps),
            Err(ParsingError::Coordinates(_))
        ));
    }
}
