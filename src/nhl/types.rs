use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};


/// Integer value of `73` or `73.0`; `None` for anything with a fractional part.
fn whole_number(n: &Number) -> Option<i64> {
    match n.as_i64() {
        Some(i) => Some(i),
        None => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64),
    }
}

/// Numbers come as `73` or `73.0` depending on the endpoint; anything with a
/// fractional part or outside the target range is rejected.
fn de_opt_whole_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw: Option<Number> = Deserialize::deserialize(deserializer)?;
    let Some(n) = raw else {
        return Ok(None);
    };

    let whole = whole_number(&n)
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, got {n}")))?;

    T::try_from(whole)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("number {whole} out of range")))
}

/// Whole numbers, whole floats and numeric strings. Any other value reads as
/// absent so the record survives and is rejected on load.
fn de_lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => whole_number(&n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Strings pass through and numbers are rendered (`"jersey": 9` reads as
/// `"9"`). Any other value reads as absent.
fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A missing `position` is no position; `null` or a non-object fails the entry.
fn de_position<'de, D>(deserializer: D) -> Result<Option<RawPosition>, D::Error>
where
    D: Deserializer<'de>,
{
    RawPosition::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawPosition {
    #[serde(
        rename = "displayName",
        default,
        deserialize_with = "de_lenient_string"
    )]
    pub display_name: Option<String>,
}

/// One entry of `team.athletes`. Every field is optional. Only structural
/// problems fail the whole entry: an entry that is not an object, a
/// `position` that is not an object, or a height that is not a whole number
/// of inches. Other scalars are coerced where possible.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawAthlete {
    #[serde(rename = "fullName", default, deserialize_with = "de_lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub age: Option<i64>,
    /// Inches.
    #[serde(default, deserialize_with = "de_opt_whole_number")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub weight: Option<i64>,
    #[serde(default, deserialize_with = "de_position")]
    pub position: Option<RawPosition>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub jersey: Option<String>,
}

/// Flat, transformed player. Absent source values stay `null` so the store
/// can reject them on load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerRecord {
    pub full_name: Option<String>,
    pub age: Option<i64>,
    /// `F' I"` or `N/A`.
    pub height: String,
    pub weight: Option<i64>,
    pub position: Option<String>,
    pub jersey_number: Option<String>,
}

impl From<RawAthlete> for PlayerRecord {
    fn from(raw: RawAthlete) -> Self {
        Self {
            full_name: raw.full_name,
            age: raw.age,
            height: super::transform::convert_height(raw.height),
            weight: raw.weight,
            position: raw.position.and_then(|p| p.display_name),
            jersey_number: raw.jersey,
        }
    }
}
