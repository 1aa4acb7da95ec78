//! Buffer size recommendation aggregated from device profile submissions.

use super::{
    attribute::{AttributeValue, Item},
    entity::DEFAULT_BUFFER_MS,
    error::EntityError,
    value_object::{Model, Platform},
};

/// Upper bound on the number of profiles read for one recommendation
pub const RECOMMENDATION_SAMPLE_LIMIT: usize = 100;

/// Recommended buffer size for a (model, platform) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferRecommendation {
    pub model: Model,
    pub platform: Platform,
    /// Floor of the mean of the matching submissions (milliseconds)
    pub recommended_buffer_ms: i64,
    /// Number of submissions that matched the platform
    pub sample_count: usize,
}

impl BufferRecommendation {
    /// Recommendation used when nothing is known about the model.
    pub fn fallback(model: Model, platform: Platform) -> Self {
        Self {
            model,
            platform,
            recommended_buffer_ms: DEFAULT_BUFFER_MS,
            sample_count: 0,
        }
    }

    /// Aggregate the profiles stored for `model`.
    ///
    /// Profiles of other platforms are skipped. A profile without
    /// `recommendedBufferMs` counts as [`DEFAULT_BUFFER_MS`]. When no profile
    /// matches the platform the mean is taken over the single default value,
    /// while `sample_count` stays 0.
    ///
    /// # Errors
    ///
    /// Returns `EntityError::InvalidAttribute` if a matching profile's
    /// `recommendedBufferMs` has no integer reading.
    pub fn from_profiles(
        model: Model,
        platform: Platform,
        profiles: &[Item],
    ) -> Result<Self, EntityError> {
        if profiles.is_empty() {
            return Ok(Self::fallback(model, platform));
        }

        let samples = profiles
            .iter()
            .filter(|profile| {
                profile.get("platform").and_then(AttributeValue::as_str) == Some(platform.as_str())
            })
            .map(buffer_ms_of)
            .collect::<Result<Vec<i64>, EntityError>>()?;

        let sample_count = samples.len();
        let values = if samples.is_empty() {
            vec![DEFAULT_BUFFER_MS]
        } else {
            samples
        };

        Ok(Self {
            model,
            platform,
            recommended_buffer_ms: floor_mean(&values),
            sample_count,
        })
    }
}

fn buffer_ms_of(profile: &Item) -> Result<i64, EntityError> {
    match profile.get("recommendedBufferMs") {
        None => Ok(DEFAULT_BUFFER_MS),
        Some(value) => value
            .as_truncated_i64()
            .ok_or_else(|| EntityError::InvalidAttribute {
                field: "recommendedBufferMs".to_string(),
                value: value.to_string(),
            }),
    }
}

/// Floor division of the sum by the count. `values` must be non-empty.
fn floor_mean(values: &[i64]) -> i64 {
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let count = values.len() as i128;
    // the mean of i64 values is itself within i64 range
    sum.div_euclid(count) as i64
}
