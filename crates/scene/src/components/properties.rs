use serde::{Deserialize, Serialize};

/// A single dynamic property value attached to a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Number(_) => "number",
            PropertyValue::Text(_) => "text",
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    Missing {
        name: String,
    },
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyError::Missing { name } => write!(f, "missing property: {name}"),
            PropertyError::TypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "property {name}: expected {expected}, found {found}"),
        }
    }
}

impl std::error::Error for PropertyError {}

/// Ordered property bag read off a scene object.
///
/// Lookups are linear; bags are small. When a name repeats, the first pair wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProperties {
    pub pairs: Vec<(String, PropertyValue)>,
}

impl ComponentProperties {
    pub fn new(pairs: Vec<(String, PropertyValue)>) -> Self {
        Self { pairs }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn text(&self, name: &str) -> Result<&str, PropertyError> {
        match self.get(name) {
            Some(PropertyValue::Text(s)) => Ok(s.as_str()),
            Some(other) => Err(PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: "text",
                found: other.type_name(),
            }),
            None => Err(PropertyError::Missing {
                name: name.to_string(),
            }),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64, PropertyError> {
        match self.get(name) {
            Some(PropertyValue::Number(n)) => Ok(*n),
            Some(other) => Err(PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: "number",
                found: other.type_name(),
            }),
            None => Err(PropertyError::Missing {
                name: name.to_string(),
            }),
        }
    }

    /// Reads an optional text property: absent is `Ok(None)`, wrong type is an error.
    pub fn optional_text(&self, name: &str) -> Result<Option<&str>, PropertyError> {
        if !self.contains(name) {
            return Ok(None);
        }
        self.text(name).map(Some)
    }

    /// Reads an optional number property: absent is `Ok(None)`, wrong type is an error.
    pub fn optional_number(&self, name: &str) -> Result<Option<f64>, PropertyError> {
        if !self.contains(name) {
            return Ok(None);
        }
        self.number(name).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::{ComponentProperties, PropertyError, PropertyValue};

    #[test]
    fn typed_reads() {
        let bag = ComponentProperties::default()
            .with("opportunity_id", "OPP1")
            .with("incidence_deg", 32.5);
        assert_eq!(bag.text("opportunity_id"), Ok("OPP1"));
        assert_eq!(bag.number("incidence_deg"), Ok(32.5));
    }

    #[test]
    fn reports_missing_and_mismatch() {
        let bag = ComponentProperties::default().with("incidence_deg", "steep");
        assert_eq!(
            bag.text("opportunity_id"),
            Err(PropertyError::Missing {
                name: "opportunity_id".to_string()
            })
        );
        assert_eq!(
            bag.number("incidence_deg"),
            Err(PropertyError::TypeMismatch {
                name: "incidence_deg".to_string(),
                expected: "number",
                found: "text",
            })
        );
    }

    #[test]
    fn optional_reads_distinguish_absent_from_wrong_type() {
        let bag = ComponentProperties::default().with("run_id", true);
        assert_eq!(bag.optional_text("pass_direction"), Ok(None));
        assert!(bag.optional_text("run_id").is_err());
    }

    #[test]
    fn first_pair_wins_on_duplicate_names() {
        let bag = ComponentProperties::default()
            .with("target_id", "T1")
            .with("target_id", "T2");
        assert_eq!(bag.get("target_id"), Some(&PropertyValue::from("T1")));
    }

    #[test]
    fn untagged_json_values() {
        let v: Vec<PropertyValue> = serde_json::from_str(r#"["a", 1.5, true]"#).unwrap();
        assert_eq!(
            v,
            vec![
                PropertyValue::from("a"),
                PropertyValue::Number(1.5),
                PropertyValue::Bool(true)
            ]
        );
    }
}
