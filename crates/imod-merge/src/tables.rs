//! Fixed emission constants
//!
//! The guard macros, the root-header special content, and the path
//! conventions, kept together so the non-generalizable cases stay
//! auditable in one place.

/// Conditional-compilation marker selecting docking-only declarations
pub const DOCK_GUARD: &str = "IMGUI_HAS_DOCK";

/// Marker guarding the hand-bridged math operator forwardings
pub const MATH_OPERATORS_GUARD: &str = "IMGUI_DEFINE_MATH_OPERATORS";

/// The library's root header. Its unit seeds the operator forwardings
/// instead of a self re-export, and its namespace section ends with
/// the version-check wrapper.
pub const ROOT_LOCATION: &str = "imgui";

/// Namespace the namespaced functions are forwarded through
pub const NAMESPACE: &str = "ImGui";

/// Operators bridged by hand: the generator never emits operator
/// symbols, so the root unit forwards them explicitly.
pub const MATH_OPERATORS: &[&str] = &["+", "-", "*", "/", "+=", "-=", "*=", "/=", "==", "!="];

/// IMGUI_CHECKVERSION() expands to a macro, not a linkable symbol, so
/// the root unit exports a function wrapping the invocation instead.
pub const CHECK_VERSION_WRAPPER: &str = r"
    /**
     * @brief Use this for the replacement of <tt>IMGUI_CHECKVERSION()</tt>.
     */
    void CheckVersion() { IMGUI_CHECKVERSION(); };
";

/// Catalog directory of the main branch
pub const MAIN_DIR: &str = "main";
/// Catalog directory of the docking branch
pub const DOCKING_DIR: &str = "docking";
/// Output directory for primary interface units
pub const OUTPUT_DIR: &str = "generated";
/// Output directory for backend extension units
pub const BACKEND_OUTPUT_DIR: &str = "generated/backends";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_list_covers_compound_assignment() {
        for op in ["+=", "-=", "*=", "/="] {
            assert!(MATH_OPERATORS.contains(&op));
        }
    }

    #[test]
    fn check_version_wrapper_invokes_the_macro() {
        assert!(CHECK_VERSION_WRAPPER.contains("IMGUI_CHECKVERSION();"));
        assert!(CHECK_VERSION_WRAPPER.ends_with(";\n"));
    }
}
