pub mod json;
pub mod path;
pub mod query;
pub mod validated;

use schemars::{schema_for, JsonSchema};

use crate::error::{ErrorVerbosity, InternalServerError};

/// Gives access to the value an extractor produced.
pub trait Extractor {
    type Extracted;

    fn extracted(&self) -> &Self::Extracted;
}

/// Renders the JSON schema of `T` as YAML, to be attached to rejections.
pub(crate) fn expected_schema<T: JsonSchema>(
    verbosity: ErrorVerbosity,
) -> Result<String, InternalServerError> {
    serde_yaml::to_string(&schema_for!(T))
        .map_err(|err| InternalServerError::from_generic_error(verbosity, err))
}
