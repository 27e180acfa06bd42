//! Required-field checks shared by the builders.

/// A record that knows which of its fields must be set before it is sent.
///
/// Only string fields can be unset: a required string is missing when it
/// is empty. Implementations list their required fields explicitly and
/// report them by their wire names.
pub trait Validate {
    /// Names of every required field that is currently unset.
    fn missing_fields(&self) -> Vec<String>;

    /// Returns `true` if no required field is unset.
    fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Collect the names of the empty values among `fields`.
pub(crate) fn missing<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<String> {
    fields
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Prefix nested field names with the name of the field that holds them.
pub(crate) fn nested(parent: &str, fields: Vec<String>) -> impl Iterator<Item = String> + '_ {
    fields
        .into_iter()
        .map(move |field| format!("{}.{}", parent, field))
}

/// Turn the missing fields of `value` into a build result.
pub(crate) fn check<T: Validate>(entity: &'static str, value: T) -> crate::Result<T> {
    let fields = value.missing_fields();
    if fields.is_empty() {
        Ok(value)
    } else {
        Err(crate::Error::Validation { entity, fields })
    }
}
