//! iCalendar property and content line types (RFC 5545 §3.1, §3.8).

use super::Parameter;
use super::error::{TreeError, TreeResult, is_name_token};

/// Looks up a parameter by name (case-insensitive).
fn find_param<'a>(params: &'a [Parameter], name: &str) -> Option<&'a Parameter> {
    params.iter().find(|p| p.name().eq_ignore_ascii_case(name))
}

/// Appends values under `name`, merging into an existing entry of that name.
fn push_param(params: &mut Vec<Parameter>, param: Parameter) {
    if let Some(existing) = params.iter_mut().find(|p| p.name() == param.name()) {
        existing.extend_values(param.values().iter().cloned());
    } else {
        params.push(param);
    }
}

/// Returns whether `name` opens or closes a component.
fn is_marker(name: &str) -> bool {
    name.eq_ignore_ascii_case(names::BEGIN) || name.eq_ignore_ascii_case(names::END)
}

/// A raw content line as tokenized from iCalendar text.
///
/// This is the low-level representation before the value is unescaped.
/// `BEGIN`/`END` markers are also content lines at this stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of first appearance, one entry per name.
    pub params: Vec<Parameter>,
    /// Raw value string (after unfolding, before unescaping).
    pub raw_value: String,
}

impl ContentLine {
    /// Creates a new content line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            raw_value: value.into(),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        find_param(&self.params, name)
    }

    /// Adds a parameter, merging values into an existing entry of the same name.
    pub fn add_param(&mut self, param: Parameter) {
        push_param(&mut self.params, param);
    }
}

/// A single `NAME[;PARAMS]:VALUE` record inside a component.
///
/// The value is held unescaped; escaping happens on serialization.
/// `BEGIN` and `END` are never property names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    params: Vec<Parameter>,
    value: String,
}

impl Property {
    /// Creates a property with no parameters.
    ///
    /// ## Errors
    ///
    /// Returns an error if the name is not a token or is `BEGIN`/`END`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> TreeResult<Self> {
        let name = name.into();
        if !is_name_token(&name) {
            return Err(TreeError::InvalidPropertyName(name));
        }
        if is_marker(&name) {
            return Err(TreeError::ReservedPropertyName(name.to_ascii_uppercase()));
        }
        Ok(Self::with_known_name(name, value))
    }

    /// Creates a property whose name the caller has already checked.
    pub(crate) fn with_known_name(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Converts a tokenized non-marker line, unescaping its raw value.
    pub(crate) fn from_parsed(cl: ContentLine) -> Self {
        Self {
            name: cl.name,
            params: cl.params,
            value: crate::rfc::ical::parse::unescape_text(&cl.raw_value),
        }
    }

    /// Builder form of [`Property::add_param`].
    #[must_use]
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.add_param(param);
        self
    }

    /// Property name (always uppercase).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unescaped value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parameters in order of first appearance, one entry per name.
    #[must_use]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        find_param(&self.params, name)
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns every value of a parameter, or an empty slice if absent.
    #[must_use]
    pub fn get_param_values(&self, name: &str) -> &[String] {
        self.get_param(name).map_or(&[][..], Parameter::values)
    }

    /// Adds a parameter. Values for a name already present are appended
    /// to that entry rather than creating a second one.
    pub fn add_param(&mut self, param: Parameter) {
        push_param(&mut self.params, param);
    }

    /// Appends `values` under `name`.
    ///
    /// ## Errors
    ///
    /// Returns an error under the same rules as [`Parameter::with_values`];
    /// the property is left unchanged.
    pub fn add_param_values<I, S>(&mut self, name: impl Into<String>, values: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.add_param(Parameter::with_values(name, values)?);
        Ok(())
    }
}

impl TryFrom<ContentLine> for Property {
    type Error = TreeError;

    /// Converts a tokenized line, unescaping its raw value.
    fn try_from(cl: ContentLine) -> TreeResult<Self> {
        if is_marker(&cl.name) {
            return Err(TreeError::ReservedPropertyName(cl.name));
        }
        Ok(Self::from_parsed(cl))
    }
}

/// Common property names as constants.
pub mod names {
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";

    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const SUMMARY: &str = "SUMMARY";
    pub const UID: &str = "UID";
}
