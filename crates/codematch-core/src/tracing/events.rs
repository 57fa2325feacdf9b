//! Structured log events for key scoring and ranking operations.
//!
//! Each function emits a `tracing` event with an `event` field and structured data.

/// Log a completed scoring call.
pub fn candidate_scored(code: &str, code_type: &str, overall: f64, level: &str, status: &str) {
    ::tracing::debug!(
        event = "candidate_scored",
        code = %code,
        code_type = %code_type,
        overall = overall,
        level = %level,
        status = %status,
        "candidate scored"
    );
}

/// Log a factor falling back to its base value after a metadata miss.
pub fn metadata_degraded(code: &str, version: &str, reason: &str) {
    ::tracing::debug!(
        event = "metadata_degraded",
        code = %code,
        version = %version,
        reason = %reason,
        "metadata unavailable, using base heuristics"
    );
}

/// Log a score that sits outside the historical distribution.
pub fn statistical_outlier(code: &str, z_score: f64, sample_size: usize) {
    ::tracing::info!(
        event = "statistical_outlier",
        code = %code,
        z_score = z_score,
        sample_size = sample_size,
        "score deviates from history"
    );
}

/// Log a benchmark-driven score adjustment.
pub fn benchmark_adjusted(code: &str, performance: &str, before: f64, after: f64) {
    ::tracing::debug!(
        event = "benchmark_adjusted",
        code = %code,
        performance = %performance,
        before = before,
        after = after,
        "score adjusted against benchmark"
    );
}

/// Log a candidate the ranking engine could not score.
pub fn candidate_skipped(code: &str, reason: &str) {
    ::tracing::warn!(
        event = "candidate_skipped",
        code = %code,
        reason = %reason,
        "candidate skipped during ranking"
    );
}

/// Log a completed ranking call.
pub fn ranking_completed(strategy: &str, total: usize, survivors: usize, duration_us: u128) {
    ::tracing::info!(
        event = "ranking_completed",
        strategy = %strategy,
        total = total,
        survivors = survivors,
        duration_us = duration_us as u64,
        "ranking completed"
    );
}
