//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// Returns the original string unchanged if no `${}` patterns are
/// present. Bare `$VAR` syntax is not expanded (only `${VAR}` with
/// braces), so keys and URLs containing a literal `$` survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let expanded = shellexpand::env_with_context(value, |var| {
        std::env::var(var).map(Some).map_err(|_| MissingVar {
            name: var.to_owned(),
        })
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} is not set", e.cause.name),
    })?;

    Ok(expanded.into_owned())
}

/// Lookup failure carrying the variable name for the error message.
struct MissingVar {
    name: String,
}
