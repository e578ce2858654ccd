use serde::Deserialize;

/// Parsed content of the configuration file. Every section is optional and
/// falls back to the defaults of the classic tomato clock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    #[serde(default)]
    pub duration: DurationSection,
    #[serde(default)]
    pub timer: TimerSection,
    #[serde(default)]
    pub notification: NotificationSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationSection {
    pub work: u64,
    pub rest: u64,
}

impl Default for DurationSection {
    fn default() -> Self {
        Self {
            work: 1500,
            rest: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerSection {
    pub tick_millis: u64,
}

impl Default for TimerSection {
    fn default() -> Self {
        Self { tick_millis: 200 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationSection {
    pub enabled: bool,
    pub work: MessageSection,
    pub rest: MessageSection,
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            enabled: true,
            work: MessageSection {
                summary: "Work Time Over".to_owned(),
                body: Some("Well done! Time for a short rest.".to_owned()),
            },
            rest: MessageSection {
                summary: "Rest Time Over".to_owned(),
                body: Some("Feel refreshed? Let's get back to work.".to_owned()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    pub summary: String,
    pub body: Option<String>,
}
