use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Provider team identifier as it appears in fixture and event payloads
pub type ProviderTeamId = i64;

/// One play-by-play record as returned by the provider's events endpoint.
///
/// Every field is optional and read leniently: a missing or mistyped field
/// becomes `None` without costing the rest of the event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    #[serde(deserialize_with = "lenient_object")]
    pub time: Option<RawTime>,
    #[serde(deserialize_with = "lenient_object")]
    pub team: Option<RawTeamRef>,
    #[serde(deserialize_with = "lenient_object")]
    pub player: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_object")]
    pub assist: Option<RawPerson>,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub event_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub detail: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTime {
    #[serde(deserialize_with = "lenient_i64")]
    pub elapsed: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub extra: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTeamRef {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<ProviderTeamId>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPerson {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// Integer from a JSON number or a numeric string
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    if parsed.is_none() && !value.is_null() {
        debug!(%value, "dropping unreadable integer field");
    }
    Ok(parsed)
}

/// String from a JSON string, or the text of a number
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Null => Ok(None),
        other => {
            debug!(value = %other, "dropping unreadable text field");
            Ok(None)
        }
    }
}

/// Nested object; anything that is not a readable object becomes `None`
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(&value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            debug!(%value, "dropping unreadable nested field: {}", e);
            Ok(None)
        }
    }
}

impl RawEvent {
    pub fn elapsed(&self) -> Option<i64> {
        self.time.as_ref().and_then(|t| t.elapsed)
    }

    pub fn extra(&self) -> Option<i64> {
        self.time.as_ref().and_then(|t| t.extra)
    }

    pub fn team_id(&self) -> Option<ProviderTeamId> {
        self.team.as_ref().and_then(|t| t.id)
    }

    pub fn player_name(&self) -> &str {
        person_name(self.player.as_ref())
    }

    pub fn assist_name(&self) -> &str {
        person_name(self.assist.as_ref())
    }

    pub fn type_str(&self) -> &str {
        self.event_type.as_deref().unwrap_or("")
    }

    pub fn detail_str(&self) -> &str {
        self.detail.as_deref().unwrap_or("")
    }
}

fn person_name(person: Option<&RawPerson>) -> &str {
    person.and_then(|p| p.name.as_deref()).unwrap_or("")
}

/// One element of the provider's fixtures response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFixture {
    pub fixture: RawFixtureInfo,
    pub league: RawLeague,
    pub teams: RawTeams,
    pub goals: RawGoals,
    pub score: RawScore,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFixtureInfo {
    pub id: Option<i64>,
    pub date: Option<String>,
    pub venue: Option<RawVenue>,
    pub status: Option<RawStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVenue {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawStatus {
    pub long: Option<String>,
    pub short: Option<String>,
    pub elapsed: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLeague {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub round: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTeams {
    pub home: RawTeamRef,
    pub away: RawTeamRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawGoals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawScore {
    pub halftime: Option<RawGoals>,
    pub fulltime: Option<RawGoals>,
}
