//! Form validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::SiteError;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").ok());

/// Input type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Password,
    Select,
}

/// A form field as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormField {
    pub name: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    /// A required field.
    pub fn required(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: None,
            kind,
            required: true,
            value: value.into(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Name used in error messages: the placeholder, else the field name.
    pub fn label(&self) -> &str {
        match self.placeholder.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ if !self.name.is_empty() => self.name.as_str(),
            _ => "Field",
        }
    }
}

/// A field that failed validation.
#[derive(Debug)]
pub struct FieldError {
    pub field: String,
    pub error: SiteError,
}

/// Check an email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Check a phone number: ten digits once spaces, dashes and parentheses
/// are removed.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    PHONE_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(&digits))
}

/// Validate one field. Optional fields always pass.
pub fn validate_field(field: &FormField) -> Result<(), SiteError> {
    if !field.required {
        return Ok(());
    }
    if field.value.trim().is_empty() {
        return Err(SiteError::RequiredField(field.label().to_string()));
    }
    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => Err(SiteError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(&field.value) => Err(SiteError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Validate every field, returning the failures in form order.
pub fn validate_form(fields: &[FormField]) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            validate_field(field).err().map(|error| FieldError {
                field: field.name.clone(),
                error,
            })
        })
        .collect()
}
