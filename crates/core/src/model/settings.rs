use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckSettingsError {
    #[error("pass threshold must be between 0 and 100, got {value}")]
    InvalidPassThreshold { value: u32 },

    #[error("toast duration must be > 0")]
    InvalidToastDuration,
}

/// Tunables for a study deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSettings {
    pass_threshold_percent: u8,
    toast_duration_ms: u64,
}

impl DeckSettings {
    pub const DEFAULT_PASS_THRESHOLD: u8 = 70;
    pub const DEFAULT_TOAST_DURATION_MS: u64 = 4_000;

    /// # Errors
    ///
    /// Returns `DeckSettingsError` if the threshold exceeds 100 or the toast duration is zero.
    pub fn new(pass_threshold_percent: u32, toast_duration_ms: u64) -> Result<Self, DeckSettingsError> {
        let pass_threshold_percent = u8::try_from(pass_threshold_percent)
            .ok()
            .filter(|value| *value <= 100)
            .ok_or(DeckSettingsError::InvalidPassThreshold {
                value: pass_threshold_percent,
            })?;
        if toast_duration_ms == 0 {
            return Err(DeckSettingsError::InvalidToastDuration);
        }

        Ok(Self {
            pass_threshold_percent,
            toast_duration_ms,
        })
    }

    #[must_use]
    pub fn pass_threshold_percent(&self) -> u8 {
        self.pass_threshold_percent
    }

    #[must_use]
    pub fn toast_duration_ms(&self) -> u64 {
        self.toast_duration_ms
    }
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            pass_threshold_percent: Self::DEFAULT_PASS_THRESHOLD,
            toast_duration_ms: Self::DEFAULT_TOAST_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quiz_rules() {
        let settings = DeckSettings::default();
        assert_eq!(settings.pass_threshold_percent(), 70);
        assert_eq!(settings.toast_duration_ms(), 4_000);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            DeckSettings::new(101, 1_000).unwrap_err(),
            DeckSettingsError::InvalidPassThreshold { value: 101 }
        );
        assert_eq!(
            DeckSettings::new(50, 0).unwrap_err(),
            DeckSettingsError::InvalidToastDuration
        );
        assert!(DeckSettings::new(0, 1).is_ok());
        assert!(DeckSettings::new(100, 1).is_ok());
    }
}
