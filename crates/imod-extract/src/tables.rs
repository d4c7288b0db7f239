//! Static classification tables
//!
//! Every exception the extractor applies lives here so the open set of
//! special cases stays auditable in one place.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Candidate headers for substring attribution, in priority order:
/// a symbol belongs to the first header whose text contains it.
pub const CANDIDATE_HEADERS: &[(&str, &str)] = &[
    ("imgui", "cimgui/imgui/imgui.h"),
    ("imgui_internal", "cimgui/imgui/imgui_internal.h"),
    ("imgui_freetype", "cimgui/imgui/misc/freetype/imgui_freetype.h"),
];

/// Generator metadata files, relative to the working directory
pub const STRUCTS_AND_ENUMS_JSON: &str = "cimgui/generator/output/structs_and_enums.json";
/// Type alias metadata
pub const TYPEDEFS_JSON: &str = "cimgui/generator/output/typedefs_dict.json";
/// Function definition metadata
pub const DEFINITIONS_JSON: &str = "cimgui/generator/output/definitions.json";
/// Backend function definition metadata
pub const IMPL_DEFINITIONS_JSON: &str = "cimgui/generator/output/impl_definitions.json";

/// Structs nested inside other structs. They are exported implicitly
/// by the parent struct and must not be forwarded on their own.
pub const NESTED_STRUCTS: &[&str] = &["ImGuiTextRange"];

/// Functions living in the `ImGui` namespace despite starting with
/// `Im`. The generator does not record namespace membership, so it is
/// inferred from the name prefix; these are the exceptions.
pub const NAMESPACE_FUNC_EXCEPTIONS: &[&str] = &["ImageWithBg", "Image", "ImageButton", "ImageButtonEx"];

/// Built-in C/C++ type names excluded from the backend type catalog
pub static PRIMITIVE_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bool",
        "int",
        "float",
        "double",
        "void",
        "char",
        "unsigned char",
        "short",
        "unsigned short",
        "long",
        "unsigned long",
        "long long",
        "unsigned long long",
        "size_t",
        "uint8_t",
        "uint16_t",
        "uint32_t",
        "uint64_t",
        "int8_t",
        "int16_t",
        "int32_t",
        "int64_t",
        "unsigned",
    ]
    .into_iter()
    .collect()
});

/// Reduces a backend argument's type text to its bare identifier:
/// strips leading `const`/`struct` qualifiers and a trailing pointer.
pub static TYPE_IDENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:const\s+)?(?:struct\s+)?([A-Za-z_][A-Za-z0-9_]*)\*?").expect("valid regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ident_strips_qualifiers() {
        let caps = TYPE_IDENT_RE.captures("const struct GLFWwindow*").unwrap();
        assert_eq!(&caps[1], "GLFWwindow");
    }

    #[test]
    fn type_ident_plain_name() {
        let caps = TYPE_IDENT_RE.captures("ImDrawData*").unwrap();
        assert_eq!(&caps[1], "ImDrawData");
    }

    #[test]
    fn type_ident_unsigned_char_stops_at_first_word() {
        let caps = TYPE_IDENT_RE.captures("unsigned char").unwrap();
        assert_eq!(&caps[1], "unsigned");
        assert!(PRIMITIVE_TYPES.contains("unsigned"));
    }

    #[test]
    fn type_ident_rejects_varargs() {
        assert!(TYPE_IDENT_RE.captures("...").is_none());
    }

    #[test]
    fn namespace_exceptions_all_start_with_im() {
        for name in NAMESPACE_FUNC_EXCEPTIONS {
            assert!(name.starts_with("Im"), "{name} would not need an exception");
        }
    }
}
