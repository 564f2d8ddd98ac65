use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder rendered for any string field missing from the event.
pub const UNKNOWN: &str = "未知";

/// Termination event cursor-agent pipes to a stop hook on stdin.
///
/// Only the fields the notification renders are modeled; everything else in
/// the payload is ignored so newer cursor-agent builds don't break the hook.
/// All fields are optional — defaults are applied by the accessors, in one
/// place, instead of at every use site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopEvent {
    status: Option<String>,
    conversation_id: Option<String>,
    model: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    loop_count: Option<u64>,
    user_email: Option<String>,
}

/// Accept any JSON value for `loop_count`; anything that isn't a
/// non-negative integer falls back to the default instead of failing
/// the whole event.
fn lenient_count<'de, D>(de: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(v.as_u64())
}

impl StopEvent {
    /// Parse the raw stdin text. Fails when the input is not valid JSON or
    /// the top-level value is not an object.
    pub fn parse(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    pub fn conversation_id(&self) -> &str {
        self.conversation_id.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn loop_count(&self) -> u64 {
        self.loop_count.unwrap_or(0)
    }

    pub fn user_email(&self) -> &str {
        self.user_email.as_deref().unwrap_or(UNKNOWN)
    }
}
