use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Named work/break pairs offered by the timer, plus `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// 25 min work / 5 min break.
    #[serde(rename = "25/5")]
    Short,
    /// 50 min work / 10 min break.
    #[serde(rename = "50/10")]
    Medium,
    /// 90 min work / 20 min break.
    #[serde(rename = "90/20")]
    Long,
    #[serde(rename = "custom")]
    Custom,
}

impl Preset {
    /// `(work_secs, break_secs)` from the preset table. `None` for `Custom`.
    pub fn durations(self) -> Option<(u64, u64)> {
        match self {
            Preset::Short => Some((25 * 60, 5 * 60)),
            Preset::Medium => Some((50 * 60, 10 * 60)),
            Preset::Long => Some((90 * 60, 20 * 60)),
            Preset::Custom => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Short => "25/5 (Pomodoro)",
            Preset::Medium => "50/10 (Extended)",
            Preset::Long => "90/20 (Deep Work)",
            Preset::Custom => "Custom",
        }
    }

    pub fn all() -> [Preset; 4] {
        [Preset::Short, Preset::Medium, Preset::Long, Preset::Custom]
    }
}

impl std::str::FromStr for Preset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" | "25/5" | "pomodoro" => Ok(Preset::Short),
            "medium" | "50/10" | "extended" => Ok(Preset::Medium),
            "long" | "90/20" | "deep" => Ok(Preset::Long),
            "custom" => Ok(Preset::Custom),
            other => Err(ValidationError::InvalidValue {
                field: "preset".into(),
                message: format!("unknown preset '{other}'"),
            }),
        }
    }
}

/// Work/break durations for the timer.
///
/// The JSON form matches the record the dashboard has always stored under
/// `pomodoroSettings`: `{"workTime": 3000, "breakTime": 600, "preset": "50/10"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    #[serde(rename = "workTime")]
    pub work_duration_secs: u64,
    #[serde(rename = "breakTime")]
    pub break_duration_secs: u64,
    pub preset: Preset,
}

impl TimerSettings {
    /// Settings for a table preset. `Custom` falls back to the default pair.
    pub fn from_preset(preset: Preset) -> Self {
        match preset.durations() {
            Some((work, brk)) => Self {
                work_duration_secs: work,
                break_duration_secs: brk,
                preset,
            },
            None => Self {
                preset: Preset::Custom,
                ..Self::default()
            },
        }
    }

    pub fn custom(work_duration_secs: u64, break_duration_secs: u64) -> Self {
        Self {
            work_duration_secs,
            break_duration_secs,
            preset: Preset::Custom,
        }
    }

    /// Both durations must be positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.work_duration_secs == 0 || self.break_duration_secs == 0 {
            return Err(ValidationError::InvalidSettings {
                work_secs: self.work_duration_secs,
                break_secs: self.break_duration_secs,
            });
        }
        Ok(())
    }

    /// Snap table presets back to their table durations.
    pub fn normalized(self) -> Self {
        match self.preset.durations() {
            Some(_) => Self::from_preset(self.preset),
            None => self,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::from_preset(Preset::Medium)
    }
}

/// Range the input surface allows for custom durations, in minutes.
///
/// The engine accepts any positive duration; this is the check a UI runs
/// before handing values over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomBounds {
    pub work_min: (u64, u64),
    pub break_min: (u64, u64),
}

impl Default for CustomBounds {
    fn default() -> Self {
        Self {
            work_min: (5, 120),
            break_min: (1, 30),
        }
    }
}

impl CustomBounds {
    /// Build custom settings from minute values, rejecting anything outside the bounds.
    pub fn settings_from_minutes(
        &self,
        work_minutes: u64,
        break_minutes: u64,
    ) -> Result<TimerSettings, ValidationError> {
        check_range("work minutes", work_minutes, self.work_min)?;
        check_range("break minutes", break_minutes, self.break_min)?;
        Ok(TimerSettings::custom(work_minutes * 60, break_minutes * 60))
    }
}

fn check_range(field: &str, value: u64, (min, max): (u64, u64)) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field: field.into(),
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifty_ten() {
        let s = TimerSettings::default();
        assert_eq!(s.work_duration_secs, 3000);
        assert_eq!(s.break_duration_secs, 600);
        assert_eq!(s.preset, Preset::Medium);
    }

    #[test]
    fn json_uses_dashboard_field_names() {
        let json = serde_json::to_value(TimerSettings::from_preset(Preset::Short)).unwrap();
        assert_eq!(json["workTime"], 1500);
        assert_eq!(json["breakTime"], 300);
        assert_eq!(json["preset"], "25/5");
    }

    #[test]
    fn parses_stored_custom_record() {
        let s: TimerSettings =
            serde_json::from_str(r#"{"workTime":2700,"breakTime":420,"preset":"custom"}"#).unwrap();
        assert_eq!(s, TimerSettings::custom(2700, 420));
    }

    #[test]
    fn normalized_snaps_table_presets() {
        let drifted = TimerSettings {
            work_duration_secs: 10,
            break_duration_secs: 10,
            preset: Preset::Long,
        };
        assert_eq!(drifted.normalized(), TimerSettings::from_preset(Preset::Long));

        let custom = TimerSettings::custom(10, 10);
        assert_eq!(custom.normalized(), custom);
    }

    #[test]
    fn validate_rejects_zero_durations() {
        assert!(TimerSettings::custom(0, 60).validate().is_err());
        assert!(TimerSettings::custom(60, 0).validate().is_err());
        assert!(TimerSettings::custom(1, 1).validate().is_ok());
    }

    #[test]
    fn custom_bounds() {
        let bounds = CustomBounds::default();
        assert_eq!(
            bounds.settings_from_minutes(45, 7).unwrap(),
            TimerSettings::custom(2700, 420)
        );
        assert!(matches!(
            bounds.settings_from_minutes(4, 7),
            Err(ValidationError::OutOfRange { min: 5, max: 120, .. })
        ));
        assert!(bounds.settings_from_minutes(45, 31).is_err());
    }

    #[test]
    fn preset_from_str_accepts_names_and_ratios() {
        assert_eq!("short".parse::<Preset>().unwrap(), Preset::Short);
        assert_eq!("90/20".parse::<Preset>().unwrap(), Preset::Long);
        assert!("hourly".parse::<Preset>().is_err());
    }
}
