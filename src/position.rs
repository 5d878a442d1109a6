//! Sky-position record returned by the composite-info fetch.
//!
//! ExoFOP reports coordinates at Julian epoch J2015.5 (the TIC reference
//! epoch), so every [`SkyPosition`] carries that epoch implicitly and can be
//! linearly propagated to another epoch via its proper motion.

use crate::distance::Distance;
use crate::{ExofopError, ExofopResult};

/// Julian date of epoch J2015.5 (TESS Input Catalog reference epoch).
pub const J2015_5_JD: f64 = 2457206.375;

const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
const MAS_PER_DEGREE: f64 = 3_600_000.0;

/// An ICRS sky position with distance and proper motion, fixed at J2015.5.
///
/// Immutable once constructed; each catalog fetch builds a fresh record and
/// hands ownership to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyPosition {
    ra_deg: f64,
    dec_deg: f64,
    distance: Distance,
    pm_ra_masyr: f64,
    pm_dec_masyr: f64,
}

impl SkyPosition {
    /// Builds a position from catalog fields.
    ///
    /// `pm_ra_masyr` is the cos-dec-corrected rate (μα·cos δ) as reported by
    /// the catalog, in milliarcseconds per year.
    ///
    /// # Errors
    /// Returns `ExofopError::Validation` if RA is outside [0°, 360°), Dec is
    /// outside [-90°, +90°], or any field is non-finite.
    pub fn new(
        ra_deg: f64,
        dec_deg: f64,
        distance: Distance,
        pm_ra_masyr: f64,
        pm_dec_masyr: f64,
    ) -> ExofopResult<Self> {
        if !ra_deg.is_finite() || !(0.0..360.0).contains(&ra_deg) {
            return Err(ExofopError::validation(format!(
                "right ascension must be within [0, 360), got {}",
                ra_deg
            )));
        }
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(ExofopError::validation(format!(
                "declination must be within [-90, 90], got {}",
                dec_deg
            )));
        }
        if !pm_ra_masyr.is_finite() || !pm_dec_masyr.is_finite() {
            return Err(ExofopError::validation(format!(
                "proper motion must be finite, got ({}, {})",
                pm_ra_masyr, pm_dec_masyr
            )));
        }
        Ok(Self {
            ra_deg,
            dec_deg,
            distance,
            pm_ra_masyr,
            pm_dec_masyr,
        })
    }

    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Proper motion in RA (μα·cos δ), milliarcseconds per year.
    pub fn pm_ra_masyr(&self) -> f64 {
        self.pm_ra_masyr
    }

    /// Proper motion in Dec, milliarcseconds per year.
    pub fn pm_dec_masyr(&self) -> f64 {
        self.pm_dec_masyr
    }

    /// Julian date of the reference epoch. Always [`J2015_5_JD`].
    pub fn epoch_jd(&self) -> f64 {
        J2015_5_JD
    }

    /// False when the catalog had no distance and the near-zero placeholder
    /// was substituted.
    pub fn has_measured_distance(&self) -> bool {
        !self.distance.is_fallback()
    }

    /// Linearly propagates the position from J2015.5 to `epoch_jd`.
    ///
    /// Returns `(ra_deg, dec_deg)` at the requested epoch. The RA rate is
    /// de-projected by cos δ before being applied.
    pub fn propagate_to(&self, epoch_jd: f64) -> (f64, f64) {
        let dt_years = (epoch_jd - J2015_5_JD) / DAYS_PER_JULIAN_YEAR;

        let dec_obs = self.dec_deg + self.pm_dec_masyr * dt_years / MAS_PER_DEGREE;
        let cos_dec = libm::cos(self.dec_deg.to_radians());
        let ra_obs = self.ra_deg + self.pm_ra_masyr * dt_years / MAS_PER_DEGREE / cos_dec;

        (ra_obs, dec_obs)
    }
}

impl std::fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ICRS(RA={:.6}°, Dec={:.6}°, d={}, PM=({:+.2}, {:+.2}) mas/yr @ J2015.5)",
            self.ra_deg, self.dec_deg, self.distance, self.pm_ra_masyr, self.pm_dec_masyr
        )
    }
}
