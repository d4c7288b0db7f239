//! Typed views of the generator metadata
//!
//! Each struct models only the fields the extractor consumes; the
//! generator emits plenty more, and serde ignores the rest.

use crate::error::ExtractError;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Relevant slice of `structs_and_enums.json`
#[derive(Debug, Deserialize)]
pub struct StructsAndEnums {
    /// Enum prefix to ordered member list
    pub enums: IndexMap<String, Vec<EnumMemberInfo>>,
    /// Symbol to `header:line` location, as recorded by the generator
    pub locations: IndexMap<String, String>,
    /// Struct name to field list (only the names are consumed)
    pub structs: IndexMap<String, serde_json::Value>,
    /// Instantiated template structs; absent from older metadata
    #[serde(default)]
    pub templated_structs: IndexMap<String, serde_json::Value>,
}

/// One enum member as spelled in the metadata
#[derive(Debug, Deserialize)]
pub struct EnumMemberInfo {
    /// Member flag name
    pub name: String,
}

/// `typedefs_dict.json`: alias name to aliased type text
pub type TypedefsDict = IndexMap<String, String>;

/// `definitions.json` / `impl_definitions.json`: overload key to
/// definition list
pub type Definitions = IndexMap<String, Vec<Definition>>;

/// One function definition
#[derive(Debug, Deserialize)]
pub struct Definition {
    /// Owning struct name; empty for free functions
    #[serde(default)]
    pub stname: String,
    /// Function name without the cimgui wrapper prefix
    pub funcname: String,
    /// `header:line` location
    #[serde(default)]
    pub location: String,
    /// Typed argument list; only populated in backend metadata
    #[serde(default, rename = "argsT")]
    pub args: Vec<ArgType>,
}

/// One typed argument of a definition
#[derive(Debug, Deserialize)]
pub struct ArgType {
    /// Type text as spelled in the signature
    #[serde(rename = "type")]
    pub ty: String,
}

/// Load and deserialize one metadata file.
///
/// # Errors
/// Fails if the file is missing, unreadable, or malformed JSON.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ExtractError> {
    let file = File::open(path).map_err(|e| ExtractError::io_error(path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| ExtractError::json_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structs_and_enums_parses_partial_fields() {
        let json = r#"{
            "enums": {
                "ImGuiDir_": [
                    {"calc_value": -1, "name": "ImGuiDir_None", "value": "-1"},
                    {"calc_value": 0, "name": "ImGuiDir_Left", "value": "0"}
                ]
            },
            "locations": {"ImGuiDir_": "imgui:280", "ImVec2": "imgui:270"},
            "structs": {"ImVec2": [{"name": "x", "type": "float"}]},
            "enumtypes": {}
        }"#;

        let parsed: StructsAndEnums = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.enums["ImGuiDir_"].len(), 2);
        assert_eq!(parsed.enums["ImGuiDir_"][0].name, "ImGuiDir_None");
        assert_eq!(parsed.locations["ImVec2"], "imgui:270");
        assert!(parsed.templated_structs.is_empty());
    }

    #[test]
    fn definitions_parse_with_args() {
        let json = r#"{
            "ImGui_ImplGlfw_InitForOpenGL": [{
                "stname": "",
                "funcname": "ImGui_ImplGlfw_InitForOpenGL",
                "location": "imgui_impl_glfw:30",
                "argsT": [
                    {"name": "window", "type": "GLFWwindow*"},
                    {"name": "install_callbacks", "type": "bool"}
                ]
            }]
        }"#;

        let parsed: Definitions = serde_json::from_str(json).unwrap();
        let def = &parsed["ImGui_ImplGlfw_InitForOpenGL"][0];
        assert!(def.stname.is_empty());
        assert_eq!(def.args[0].ty, "GLFWwindow*");
    }

    #[test]
    fn definitions_default_missing_args() {
        let json = r#"{"igBegin": [{"stname": "", "funcname": "Begin", "location": "imgui:330"}]}"#;
        let parsed: Definitions = serde_json::from_str(json).unwrap();
        assert!(parsed["igBegin"][0].args.is_empty());
    }
}
