//! Rashi (zodiac sign) placement and DMS formatting.
//!
//! The ecliptic is cut into 12 equal signs of 30 degrees, starting from
//! Mesha (Aries) at 0 degrees. A longitude exactly on a boundary belongs to
//! the sign that starts there.

use std::fmt::{Display, Formatter};

use crate::util::normalize_360;

/// Span of one sign in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (index 0 = Mesha).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western sign name, the label shown to users.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 1-based sign number (Mesha = 1 .. Meena = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:04.1}″", self.degrees, self.minutes, self.seconds)
    }
}

/// Decimal degrees to DMS; the sign of the input is dropped.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let remainder = (d - degrees) * 60.0;
    let minutes = remainder.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (remainder - minutes) * 60.0,
    }
}

/// DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Where a longitude falls among the 12 signs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignPlacement {
    pub rashi: Rashi,
    /// 1-based sign number (1 = Aries).
    pub sign_index: u8,
    /// Western sign name.
    pub sign_name: &'static str,
    /// Decimal degrees into the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub dms: Dms,
}

impl SignPlacement {
    /// Longitude reconstructed from sign and offset.
    pub fn longitude(&self) -> f64 {
        (self.sign_index - 1) as f64 * RASHI_SPAN + self.degrees_in_sign
    }
}

impl Display for SignPlacement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}) {} ({:.4}° in sign)",
            self.sign_name, self.sign_index, self.dms, self.degrees_in_sign
        )
    }
}

/// Sign Mapper: longitude (any real value) → sign placement.
///
/// `sign_index = floor(L / 30) + 1`, `degrees_in_sign = L − (sign_index − 1)·30`.
pub fn sign_from_longitude(lon_deg: f64) -> SignPlacement {
    let lon = normalize_360(lon_deg);
    let idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    let degrees_in_sign = (lon - idx as f64 * RASHI_SPAN).max(0.0);
    let rashi = ALL_RASHIS[idx as usize];

    SignPlacement {
        rashi,
        sign_index: idx + 1,
        sign_name: rashi.name(),
        degrees_in_sign,
        dms: deg_to_dms(degrees_in_sign),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.number() as usize, i + 1);
        }
    }

    #[test]
    fn names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.sanskrit_name().is_empty());
        }
    }

    #[test]
    fn dms_known() {
        // 23.853 deg = 23°51′10.8″
        let d = deg_to_dms(23.853);
        assert_eq!(d.degrees, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 0.01);
        assert!((dms_to_deg(&d) - 23.853).abs() < 1e-10);
    }

    #[test]
    fn dms_display() {
        assert_eq!(deg_to_dms(10.5).to_string(), "10°30′00.0″");
    }

    #[test]
    fn boundary_zero_is_aries() {
        let p = sign_from_longitude(0.0);
        assert_eq!(p.rashi, Rashi::Mesha);
        assert_eq!(p.sign_index, 1);
        assert_eq!(p.sign_name, "Aries");
        assert_eq!(p.degrees_in_sign, 0.0);
    }

    #[test]
    fn boundaries_belong_to_next_sign() {
        for i in 0..12u8 {
            let p = sign_from_longitude(i as f64 * 30.0);
            assert_eq!(p.sign_index, i + 1, "boundary at {} deg", i as f64 * 30.0);
            assert!(p.degrees_in_sign.abs() < 1e-12);
        }
    }

    #[test]
    fn last_sign() {
        let p = sign_from_longitude(359.999);
        assert_eq!(p.rashi, Rashi::Meena);
        assert_eq!(p.sign_index, 12);
        assert!((p.degrees_in_sign - 29.999).abs() < 1e-9);
    }

    #[test]
    fn mid_sign() {
        let p = sign_from_longitude(45.5);
        assert_eq!(p.rashi, Rashi::Vrishabha);
        assert!((p.degrees_in_sign - 15.5).abs() < 1e-12);
        assert_eq!(p.dms.degrees, 15);
        assert_eq!(p.dms.minutes, 30);
    }

    #[test]
    fn negative_wraps() {
        let p = sign_from_longitude(-10.0);
        assert_eq!(p.rashi, Rashi::Meena);
        assert!((p.degrees_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn longitude_reconstructs() {
        for &lon in &[0.0, 12.345, 89.999, 180.0, 271.25, 359.5] {
            let p = sign_from_longitude(lon);
            assert!((p.longitude() - lon).abs() < 1e-9, "lon {lon}");
        }
    }
}
