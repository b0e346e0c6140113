use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column order of the feature wire format accepted by the predict endpoint.
const FEATURE_COLUMNS: [&str; 6] = [
    "year",
    "rainfall",
    "pesticides",
    "avgTemp",
    "country",
    "item",
];

/// Structured inputs for one yield prediction. Immutable once constructed;
/// shape validation happens at the boundary, never inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub year: i32,
    pub rainfall_mm: f64,
    pub pesticides_tonnes: f64,
    pub avg_temp_c: f64,
    pub country: String,
    pub item: String,
}

impl FeatureVector {
    /// Parse the positional wire shape `[year, rainfall, pesticides,
    /// avgTemp, country, item]` used by the existing clients.
    pub fn from_values(values: &[Value]) -> Result<Self, InputShapeError> {
        if values.len() != FEATURE_COLUMNS.len() {
            return Err(InputShapeError::WrongArity {
                actual: values.len(),
            });
        }

        Ok(Self {
            year: number_at(values, 0)? as i32,
            rainfall_mm: number_at(values, 1)?,
            pesticides_tonnes: number_at(values, 2)?,
            avg_temp_c: number_at(values, 3)?,
            country: text_at(values, 4)?,
            item: text_at(values, 5)?,
        })
    }
}

fn number_at(values: &[Value], index: usize) -> Result<f64, InputShapeError> {
    values[index].as_f64().ok_or(InputShapeError::InvalidField {
        column: FEATURE_COLUMNS[index],
        expected: "number",
    })
}

fn text_at(values: &[Value], index: usize) -> Result<String, InputShapeError> {
    // Categorical codes are opaque to the engine; numeric encodings from
    // older clients are carried through as their string rendering.
    match &values[index] {
        Value::String(text) => Ok(text.clone()),
        Value::Number(code) => Ok(code.to_string()),
        _ => Err(InputShapeError::InvalidField {
            column: FEATURE_COLUMNS[index],
            expected: "string",
        }),
    }
}

/// Rejection raised at the boundary when a feature payload is malformed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputShapeError {
    #[error("expected 6 features: [year, rainfall, pesticides, avgTemp, country, item], got {actual}")]
    WrongArity { actual: usize },
    #[error("feature '{column}' must be a {expected}")]
    InvalidField {
        column: &'static str,
        expected: &'static str,
    },
}

/// Model output treated as an opaque scalar by the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// Predicted yield in the model's native unit.
    pub value: f64,
    /// Percentage confidence, 0-100.
    pub confidence: u8,
}

/// One chat exchange as seen by the intent router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Originator of a conversation turn. Older clients label the assistant
/// side `bot`; both spellings deserialize to [`Speaker::Assistant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    #[serde(alias = "bot")]
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_positional_feature_array() {
        let values = vec![
            json!(2024),
            json!(850.5),
            json!(1.2),
            json!(22.4),
            json!("Kenya"),
            json!("Maize"),
        ];

        let features = FeatureVector::from_values(&values).expect("six well-typed features");
        assert_eq!(features.year, 2024);
        assert_eq!(features.rainfall_mm, 850.5);
        assert_eq!(features.country, "Kenya");
        assert_eq!(features.item, "Maize");
    }

    #[test]
    fn rejects_wrong_arity() {
        let values = vec![json!(2024), json!(850.5)];
        let err = FeatureVector::from_values(&values).expect_err("two features rejected");
        assert_eq!(err, InputShapeError::WrongArity { actual: 2 });
    }

    #[test]
    fn rejects_non_numeric_rainfall() {
        let values = vec![
            json!(2024),
            json!("heavy"),
            json!(1.2),
            json!(22.4),
            json!("Kenya"),
            json!("Maize"),
        ];
        let err = FeatureVector::from_values(&values).expect_err("text rainfall rejected");
        assert!(matches!(err, InputShapeError::InvalidField { column, .. } if column == "rainfall"));
    }

    #[test]
    fn numeric_category_codes_are_carried_as_text() {
        let values = vec![
            json!(2024),
            json!(850.5),
            json!(1.2),
            json!(22.4),
            json!(102),
            json!(7),
        ];
        let features = FeatureVector::from_values(&values).expect("numeric codes accepted");
        assert_eq!(features.country, "102");
        assert_eq!(features.item, "7");
    }

    #[test]
    fn speaker_accepts_bot_alias() {
        let turn: ConversationTurn =
            serde_json::from_value(json!({ "speaker": "bot", "text": "hello" }))
                .expect("bot alias deserializes");
        assert_eq!(turn.speaker, Speaker::Assistant);
    }
}
