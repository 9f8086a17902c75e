//! Default output path derivation.

use crate::error::PipelineError;
use std::path::PathBuf;

/// Suffix appended in place of the input's extension.
const DEFAULT_SUFFIX: &str = "_new.phy";

/// Derive the default output path from an input path.
///
/// Truncates the file name at its last `.` and appends `_new.phy`, so
/// `scene.phy` becomes `scene_new.phy` and `a.b.phy` becomes `a.b_new.phy`.
/// Only the file name is searched; a dot in a directory component does not
/// count as an extension. An input whose file name has no `.` is refused
/// rather than guessed at.
pub fn derive_output_path(input: &str) -> Result<PathBuf, PipelineError> {
    let name_start = input.rfind(['/', '\\']).map_or(0, |sep| sep + 1);
    match input[name_start..].rfind('.') {
        Some(dot) => Ok(PathBuf::from(format!(
            "{}{DEFAULT_SUFFIX}",
            &input[..name_start + dot]
        ))),
        None => Err(PipelineError::InvalidInputPath(input.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension_with_suffix() {
        let out = derive_output_path("scene.phy").unwrap();
        assert_eq!(out, PathBuf::from("scene_new.phy"));
    }

    #[test]
    fn truncates_at_last_dot_only() {
        let out = derive_output_path("a.b.phy").unwrap();
        assert_eq!(out, PathBuf::from("a.b_new.phy"));
    }

    #[test]
    fn keeps_directory_components() {
        let out = derive_output_path("levels/forest/scene.phy").unwrap();
        assert_eq!(out, PathBuf::from("levels/forest/scene_new.phy"));
    }

    #[test]
    fn extensionless_input_is_an_error() {
        let result = derive_output_path("scene");
        assert!(matches!(result, Err(PipelineError::InvalidInputPath(p)) if p == "scene"));
    }

    #[test]
    fn dot_in_directory_is_not_an_extension() {
        let result = derive_output_path("builds.v2/scene");
        assert!(matches!(result, Err(PipelineError::InvalidInputPath(_))));

        let out = derive_output_path("builds.v2/scene.phy").unwrap();
        assert_eq!(out, PathBuf::from("builds.v2/scene_new.phy"));
    }
}
