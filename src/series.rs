//! Per-satellite sample series and PRN-indexed storage.
use std::ops::Index;

use gnss::prelude::Constellation;
use hifitime::Epoch;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common behavior of per-satellite sample series.
pub trait Series {
    /// Number of observations gathered by this satellite.
    fn len(&self) -> usize;
    /// True if this satellite gathered no observation.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One satellite's trajectory parsed from an SP3 file.
///
/// The five sequences are parallel: sample `i` of each describes the
/// same observation, and they only ever grow together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitSeries {
    /// Fleet this satellite belongs to
    pub constellation: Constellation,
    /// Sampling instants, UTC
    pub utc_time: Vec<Epoch>,
    /// Sampling instants, milliseconds on the GPST timeline
    pub gpst_millis: Vec<i64>,
    /// ECEF x coordinate [m]
    pub x_ecef_m: Vec<f64>,
    /// ECEF y coordinate [m]
    pub y_ecef_m: Vec<f64>,
    /// ECEF z coordinate [m]
    pub z_ecef_m: Vec<f64>,
}

impl OrbitSeries {
    pub(crate) fn new(constellation: Constellation) -> Self {
        Self {
            constellation,
            utc_time: Vec::new(),
            gpst_millis: Vec::new(),
            x_ecef_m: Vec::new(),
            y_ecef_m: Vec::new(),
            z_ecef_m: Vec::new(),
        }
    }

    /// Appends one observation: the five sequences advance together.
    pub(crate) fn push(&mut self, utc: Epoch, gpst_millis: i64, x_m: f64, y_m: f64, z_m: f64) {
        self.utc_time.push(utc);
        self.gpst_millis.push(gpst_millis);
        self.x_ecef_m.push(x_m);
        self.y_ecef_m.push(y_m);
        self.z_ecef_m.push(z_m);
    }

    /// Iterates this satellite's samples as `(utc, gpst_millis, (x, y, z))`,
    /// coordinates in meters ECEF.
    pub fn positions(&self) -> impl Iterator<Item = (Epoch, i64, (f64, f64, f64))> + '_ {
        self.utc_time
            .iter()
            .zip(self.gpst_millis.iter())
            .zip(self.x_ecef_m.iter())
            .zip(self.y_ecef_m.iter())
            .zip(self.z_ecef_m.iter())
            .map(|((((t, millis), x), y), z)| (*t, *millis, (*x, *y, *z)))
    }
}

impl Series for OrbitSeries {
    fn len(&self) -> usize {
        self.gpst_millis.len()
    }
}

/// One satellite's clock bias series parsed from a Clock RINEX file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockSeries {
    /// Fleet this satellite belongs to
    pub constellation: Constellation,
    /// Sampling instants, UTC
    pub utc_time: Vec<Epoch>,
    /// Sampling instants, milliseconds on the GPST timeline
    pub gpst_millis: Vec<i64>,
    /// Onboard clock bias [s]
    pub clock_bias_s: Vec<f64>,
}

impl ClockSeries {
    pub(crate) fn new(constellation: Constellation) -> Self {
        Self {
            constellation,
            utc_time: Vec::new(),
            gpst_millis: Vec::new(),
            clock_bias_s: Vec::new(),
        }
    }

    /// Appends one observation: the three sequences advance together.
    pub(crate) fn push(&mut self, utc: Epoch, gpst_millis: i64, bias_s: f64) {
        self.utc_time.push(utc);
        self.gpst_millis.push(gpst_millis);
        self.clock_bias_s.push(bias_s);
    }

    /// Iterates this satellite's samples as `(utc, gpst_millis, bias_s)`.
    pub fn biases(&self) -> impl Iterator<Item = (Epoch, i64, f64)> + '_ {
        self.utc_time
            .iter()
            .zip(self.gpst_millis.iter())
            .zip(self.clock_bias_s.iter())
            .map(|((t, millis), bias)| (*t, *millis, *bias))
    }
}

impl Series for ClockSeries {
    fn len(&self) -> usize {
        self.gpst_millis.len()
    }
}

/// Fixed-size per-satellite storage, indexed by PRN#.
///
/// Holds `max_satellites + 1` slots. Slot 0 is a permanent placeholder,
/// since PRN numbering starts at 1: it is allocated but never written.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrnArray<T> {
    slots: Vec<T>,
}

impl<T: Clone> PrnArray<T> {
    pub(crate) fn new(max_satellites: u8, template: T) -> Self {
        Self {
            slots: vec![template; usize::from(max_satellites) + 1],
        }
    }
}

impl<T> PrnArray<T> {
    /// Highest PRN# this store was dimensioned for.
    pub fn max_satellites(&self) -> u8 {
        (self.slots.len() - 1) as u8
    }

    /// Returns the series for given PRN#, if within the fleet dimension.
    pub fn get(&self, prn: u8) -> Option<&T> {
        self.slots.get(usize::from(prn))
    }

    /// Mutable slot access. PRN 0 does not exist: slot 0 is never handed out.
    pub(crate) fn get_mut(&mut self, prn: u8) -> Option<&mut T> {
        if prn == 0 {
            return None;
        }
        self.slots.get_mut(usize::from(prn))
    }

    /// Iterates `(prn, series)` over PRNs 1..=max_satellites.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .skip(1)
            .map(|(prn, series)| (prn as u8, series))
    }
}

impl<T: Series> PrnArray<T> {
    /// PRNs that gathered no observation at all.
    pub fn unpopulated_prns(&self) -> Vec<u8> {
        self.iter()
            .filter(|(_, series)| series.is_empty())
            .map(|(prn, _)| prn)
            .collect()
    }
}

impl<T> Index<u8> for PrnArray<T> {
    type Output = T;
    fn index(&self, prn: u8) -> &T {
        &self.slots[usize::from(prn)]
    }
}
