//! Calibration: nudges the score by code-type and score-band bias.

use codematch_core::config::CalibrationConfig;
use codematch_core::models::{CalibrationInfo, CodeType, ConfidenceScore};

/// Calibration quality is not measured yet; every calibration reports this.
pub const CALIBRATION_QUALITY: f64 = 0.8;

fn type_bias(code_type: CodeType) -> f64 {
    match code_type {
        CodeType::Naics => 1.05,
        CodeType::Sic => 1.0,
        CodeType::Mcc => 0.95,
        CodeType::Other => 1.0,
    }
}

/// Score bands as (lower edge, bias), ascending. Extreme scores are pulled
/// toward the middle.
const BANDS: [(f64, f64); 4] = [(0.0, 1.03), (0.3, 1.0), (0.8, 0.99), (0.9, 0.97)];

/// `raw` scaled by its band bias, held at the value just below each band edge
/// it has crossed so the result never decreases as `raw` grows.
fn banded(raw: f64) -> f64 {
    let mut value = raw * BANDS[0].1;
    let mut floor = 0.0_f64;
    for pair in BANDS.windows(2) {
        let (edge, bias) = pair[1];
        if raw < edge {
            break;
        }
        floor = floor.max(edge * pair[0].1);
        value = raw * bias;
    }
    value.max(floor)
}

pub fn apply(score: &mut ConfidenceScore, code_type: CodeType, config: &CalibrationConfig) {
    let raw = score.overall();
    let band = banded(raw);
    let band_factor = if raw > 0.0 { band / raw } else { BANDS[0].1 };
    let factor = type_bias(code_type) * band_factor;
    let calibrated = (type_bias(code_type) * band).clamp(0.0, 1.0);
    let applied = CALIBRATION_QUALITY >= config.quality_threshold;
    if applied {
        score.set_overall(calibrated);
    }
    score.calibration = Some(CalibrationInfo {
        raw_score: raw,
        calibrated_score: calibrated,
        calibration_factor: factor,
        calibration_quality: CALIBRATION_QUALITY,
        applied,
    });
}
