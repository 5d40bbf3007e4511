//! Supported constellations and their fleet dimensions.
use crate::Error;
use gnss::prelude::Constellation;

/// Registry entry describing one supported fleet: its lookup key,
/// the identification letter used in SP3 / Clock RINEX satellite
/// designators, and the highest PRN# allocated to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fleet {
    /// Lookup key, lowercase constellation name
    pub name: &'static str,
    /// Designator letter, like 'G' in "G01"
    pub code: char,
    /// Resolved [Constellation]
    pub constellation: Constellation,
    /// Highest PRN# allocated to this fleet.
    /// Valid PRNs range over [1, max_satellites].
    pub max_satellites: u8,
}

static FLEETS: [Fleet; 5] = [
    Fleet {
        name: "gps",
        code: 'G',
        constellation: Constellation::GPS,
        max_satellites: 32,
    },
    Fleet {
        name: "galileo",
        code: 'E',
        constellation: Constellation::Galileo,
        max_satellites: 36,
    },
    Fleet {
        name: "beidou",
        code: 'C',
        constellation: Constellation::BeiDou,
        max_satellites: 46,
    },
    Fleet {
        name: "glonass",
        code: 'R',
        constellation: Constellation::Glonass,
        max_satellites: 24,
    },
    Fleet {
        name: "qzss",
        code: 'J',
        constellation: Constellation::QZSS,
        max_satellites: 3,
    },
];

impl Fleet {
    /// Resolves a constellation name to its registry entry.
    /// ```
    /// use peph::prelude::*;
    ///
    /// let gps = Fleet::from_name("gps").unwrap();
    /// assert_eq!(gps.code, 'G');
    /// assert_eq!(gps.max_satellites, 32);
    /// assert!(Fleet::from_name("mars").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<&'static Fleet, Error> {
        FLEETS
            .iter()
            .find(|fleet| fleet.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnsupportedConstellation(name.to_string()))
    }
}
