//! iCalendar parameter types (RFC 5545 §3.2).

use super::error::{TreeError, TreeResult, is_name_token, is_param_safe};

/// A single iCalendar property parameter.
///
/// Parameters modify or provide metadata for a property value.
/// For example: `DTSTART;TZID=America/New_York:20260123T120000`
///
/// The `TZID` is a parameter with name `TZID` and value `America/New_York`.
///
/// Repeated assignments (`MEMBER=a;MEMBER=b`) and comma-separated lists
/// (`MEMBER=a,b`) both collapse into the same ordered `values` sequence,
/// which always holds at least one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    values: Vec<String>,
}

impl Parameter {
    /// Creates a new parameter with a single value.
    ///
    /// ## Errors
    ///
    /// Returns an error if the name is not a token or the value holds a
    /// double quote or control character.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> TreeResult<Self> {
        Self::with_values(name, vec![value.into()])
    }

    /// Creates a new parameter with multiple values.
    ///
    /// ## Errors
    ///
    /// Returns an error if the name is not a token, `values` is empty, or a
    /// value holds a double quote or control character.
    pub fn with_values(name: impl Into<String>, values: Vec<String>) -> TreeResult<Self> {
        let name = name.into();
        if !is_name_token(&name) {
            return Err(TreeError::InvalidParameterName(name));
        }

        let param = Self::from_parsed(name, values);
        if param.values.is_empty() {
            return Err(TreeError::EmptyParameter(param.name));
        }
        if let Some(bad) = param.values.iter().find(|v| !is_param_safe(v)) {
            return Err(TreeError::InvalidParameterValue {
                value: bad.clone(),
                name: param.name,
            });
        }

        Ok(param)
    }

    /// Builds a parameter from tokenized text without validation.
    pub(crate) fn from_parsed(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Parameter name (always uppercase).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values in order of appearance.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the first (and usually only) value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    pub(crate) fn extend_values(&mut self, values: impl IntoIterator<Item = String>) {
        self.values.extend(values);
    }

    /// Creates a TZID parameter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the value cannot be written as a parameter value.
    pub fn tzid(tzid: impl Into<String>) -> TreeResult<Self> {
        Self::new("TZID", tzid)
    }

    /// Creates a VALUE parameter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the value cannot be written as a parameter value.
    pub fn value_type(value_type: impl Into<String>) -> TreeResult<Self> {
        Self::new("VALUE", value_type)
    }

    /// Creates a CN (common name) parameter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the value cannot be written as a parameter value.
    pub fn cn(name: impl Into<String>) -> TreeResult<Self> {
        Self::new("CN", name)
    }

    /// Creates a PARTSTAT (participation status) parameter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the value cannot be written as a parameter value.
    pub fn partstat(status: impl Into<String>) -> TreeResult<Self> {
        Self::new("PARTSTAT", status)
    }

    /// Creates a ROLE parameter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the value cannot be written as a parameter value.
    pub fn role(role: impl Into<String>) -> TreeResult<Self> {
        Self::new("ROLE", role)
    }
}
