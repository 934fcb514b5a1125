/// Rainfall intensity classification.
///
/// Maps a millimetre total onto one of nine ordered severity bands, each
/// with a display color. Band ranges are lower-exclusive and
/// upper-inclusive, so a total sitting exactly on a shared edge belongs to
/// the lower band; `No Rain` matches exactly zero and `Extreme` is
/// unbounded above. Together the bands cover `[0, +inf)` with no gaps or
/// overlaps.
use crate::error::{RaincalError, Result};
use serde::Serialize;

/// A named severity band with its numeric range and display color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityBand {
    pub label: &'static str,
    /// RGB hex color for rendering, e.g. "#FFD700"
    pub color: &'static str,
    /// Exclusive lower bound in millimetres
    pub lower_mm: f64,
    /// Inclusive upper bound in millimetres; infinite for the last band
    pub upper_mm: f64,
}

/// The nine canonical bands, ascending.
pub static BANDS: [IntensityBand; 9] = [
    IntensityBand {
        label: "No Rain",
        color: "#D3D3D3",
        lower_mm: 0.0,
        upper_mm: 0.0,
    },
    IntensityBand {
        label: "Trace",
        color: "#ADD8E6",
        lower_mm: 0.0,
        upper_mm: 0.04,
    },
    IntensityBand {
        label: "Very Light",
        color: "#A0C4FF",
        lower_mm: 0.04,
        upper_mm: 2.4,
    },
    IntensityBand {
        label: "Light",
        color: "#7FB77E",
        lower_mm: 2.4,
        upper_mm: 7.5,
    },
    IntensityBand {
        label: "Moderate",
        color: "#FFD700",
        lower_mm: 7.5,
        upper_mm: 35.5,
    },
    IntensityBand {
        label: "Rather Heavy",
        color: "#FF8C00",
        lower_mm: 35.5,
        upper_mm: 64.4,
    },
    IntensityBand {
        label: "Heavy",
        color: "#FF4500",
        lower_mm: 64.4,
        upper_mm: 124.4,
    },
    IntensityBand {
        label: "Very Heavy",
        color: "#DC143C",
        lower_mm: 124.4,
        upper_mm: 244.4,
    },
    IntensityBand {
        label: "Extreme",
        color: "#8B0000",
        lower_mm: 244.4,
        upper_mm: f64::INFINITY,
    },
];

/// Classify a rainfall total into its intensity band.
///
/// Negative and non-finite inputs are rejected; bucket totals are sums of
/// validated non-negative samples, so a negative here means caller error.
pub fn classify(total_mm: f64) -> Result<&'static IntensityBand> {
    if !total_mm.is_finite() || total_mm < 0.0 {
        return Err(RaincalError::InvalidValue(total_mm));
    }
    if total_mm == 0.0 {
        return Ok(&BANDS[0]);
    }
    // first band is the exact-zero case handled above
    for band in &BANDS[1..] {
        if total_mm > band.lower_mm && total_mm <= band.upper_mm {
            return Ok(band);
        }
    }
    // unreachable: the last band is unbounded above
    Ok(&BANDS[BANDS.len() - 1])
}

/// The full band table in ascending order, for display.
pub fn legend() -> &'static [IntensityBand; 9] {
    &BANDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_exactness() {
        assert_eq!(classify(0.0).unwrap().label, "No Rain");
        assert_eq!(classify(0.04).unwrap().label, "Trace");
        assert_eq!(classify(0.0400001).unwrap().label, "Very Light");
        assert_eq!(classify(2.4).unwrap().label, "Very Light");
        assert_eq!(classify(2.5).unwrap().label, "Light");
        assert_eq!(classify(7.5).unwrap().label, "Light");
        assert_eq!(classify(35.5).unwrap().label, "Moderate");
        assert_eq!(classify(64.4).unwrap().label, "Rather Heavy");
        assert_eq!(classify(124.4).unwrap().label, "Heavy");
        assert_eq!(classify(244.4).unwrap().label, "Very Heavy");
        assert_eq!(classify(244.40001).unwrap().label, "Extreme");
    }

    #[test]
    fn test_moderate_color() {
        let band = classify(24.0).unwrap();
        assert_eq!(band.label, "Moderate");
        assert_eq!(band.color, "#FFD700");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            classify(-1.0),
            Err(RaincalError::InvalidValue(v)) if v == -1.0
        ));
        assert!(classify(f64::NAN).is_err());
        assert!(classify(f64::INFINITY).is_err());
    }

    #[test]
    fn test_bands_partition_non_negative_reals() {
        assert_eq!(BANDS.len(), 9);
        // each band's upper bound is the next band's lower bound
        for pair in BANDS.windows(2) {
            assert_eq!(pair[0].upper_mm, pair[1].lower_mm);
        }
        assert_eq!(BANDS[0].lower_mm, 0.0);
        assert!(BANDS[8].upper_mm.is_infinite());
    }

    #[test]
    fn test_legend_is_ascending() {
        let bands = legend();
        for pair in bands.windows(2) {
            assert!(pair[0].upper_mm <= pair[1].upper_mm);
        }
        assert_eq!(bands[0].label, "No Rain");
        assert_eq!(bands[8].label, "Extreme");
    }
}
