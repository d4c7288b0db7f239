//! Full extraction over a miniature checkout

use imod_catalog::{BranchCatalogs, Location};
use imod_extract::Extractor;
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fake_checkout(root: &Path) {
    write(
        root,
        "cimgui/imgui/imgui.h",
        "struct ImVec2 { float x, y; };\n\
         typedef unsigned int ImGuiID;\n\
         struct ImVector_ImWchar;\n\
         enum ImGuiDir_ { ImGuiDir_None, ImGuiDir_Left };\n",
    );
    write(
        root,
        "cimgui/imgui/imgui_internal.h",
        "struct ImRect { };\ntypedef int ImGuiLayoutType;\n",
    );
    write(root, "cimgui/imgui/misc/freetype/imgui_freetype.h", "\n");

    write(
        root,
        "cimgui/generator/output/structs_and_enums.json",
        r#"{
            "enums": {
                "ImGuiDir_": [
                    {"name": "ImGuiDir_None", "value": "-1"},
                    {"name": "ImGuiDir_Left", "value": "0"}
                ]
            },
            "locations": {
                "ImGuiDir_": "imgui:280",
                "ImVec2": "imgui:270",
                "ImGuiTextRange": "imgui:2480",
                "ImRect": "imgui_internal:510"
            },
            "structs": {
                "ImVec2": [],
                "ImGuiTextRange": [],
                "ImRect": []
            },
            "templated_structs": {
                "ImVector_ImWchar": []
            }
        }"#,
    );
    write(
        root,
        "cimgui/generator/output/typedefs_dict.json",
        r#"{
            "ImGuiID": "unsigned int",
            "ImVec2": "struct ImVec2",
            "ImGuiLayoutType": "int"
        }"#,
    );
    write(
        root,
        "cimgui/generator/output/definitions.json",
        r#"{
            "igBegin": [{"stname": "", "funcname": "Begin", "location": "imgui:330"}],
            "igImage": [{"stname": "", "funcname": "Image", "location": "imgui:520"}],
            "igImHashData": [{"stname": "", "funcname": "ImHashData", "location": "imgui_internal:40"}],
            "ImVec2_zero": [{"stname": "ImVec2", "funcname": "zero", "location": "imgui:270"}]
        }"#,
    );
    write(
        root,
        "cimgui/generator/output/impl_definitions.json",
        r#"{
            "ImGui_ImplGlfw_InitForOpenGL": [{
                "stname": "",
                "funcname": "ImGui_ImplGlfw_InitForOpenGL",
                "location": "imgui_impl_glfw:30",
                "argsT": [
                    {"name": "window", "type": "GLFWwindow*"},
                    {"name": "install_callbacks", "type": "bool"}
                ]
            }]
        }"#,
    );
}

#[test]
fn test_extraction_covers_all_categories() {
    let dir = tempfile::tempdir().unwrap();
    fake_checkout(dir.path());

    let catalogs = Extractor::new(dir.path()).run().unwrap();

    let imgui = Location::new("imgui");
    let internal = Location::new("imgui_internal");
    let glfw = Location::new("imgui_impl_glfw");

    assert_eq!(catalogs.enums[&imgui][0].prefix, "ImGuiDir_");
    assert_eq!(
        catalogs.enums[&imgui][0].members,
        vec!["ImGuiDir_None", "ImGuiDir_Left"]
    );

    assert!(catalogs.structs[&imgui].contains("ImVec2"));
    assert!(catalogs.structs[&imgui].contains("ImVector_ImWchar"));
    assert!(!catalogs.structs[&imgui].contains("ImGuiTextRange"));
    assert!(catalogs.structs[&internal].contains("ImRect"));

    assert!(catalogs.aliases[&imgui].contains("ImGuiID"));
    assert!(!catalogs.aliases[&imgui].contains("ImVec2"));
    assert!(catalogs.aliases[&internal].contains("ImGuiLayoutType"));

    assert!(catalogs.funcs_in_namespace[&imgui].contains("Begin"));
    assert!(catalogs.funcs_in_namespace[&imgui].contains("Image"));
    assert!(catalogs.funcs[&internal].contains("ImHashData"));

    assert!(catalogs.impl_types[&glfw].contains("GLFWwindow"));
    assert!(!catalogs.impl_types[&glfw].contains("bool"));
    assert!(catalogs.impl_funcs[&glfw].contains("ImGui_ImplGlfw_InitForOpenGL"));
}

#[test]
fn test_extraction_round_trips_through_store() {
    let dir = tempfile::tempdir().unwrap();
    fake_checkout(dir.path());

    let catalogs = Extractor::new(dir.path()).run().unwrap();
    let branch_dir = dir.path().join("main");
    catalogs.save(&branch_dir).unwrap();

    let loaded = BranchCatalogs::load(&branch_dir).unwrap();
    assert_eq!(loaded, catalogs);
}

#[test]
fn test_missing_metadata_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fake_checkout(dir.path());
    fs::remove_file(dir.path().join("cimgui/generator/output/typedefs_dict.json")).unwrap();

    assert!(Extractor::new(dir.path()).run().is_err());
}
