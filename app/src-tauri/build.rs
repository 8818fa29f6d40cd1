//! FILENAME: app/src-tauri/build.rs
// PURPOSE: Tauri build step. Only the commands listed here get permissions,
// and capabilities/default.json grants them to the bundled page.

fn main() {
    tauri_build::try_build(tauri_build::Attributes::new().app_manifest(
        tauri_build::AppManifest::new().commands(&[
            "get_all_entries",
            "create_entry",
            "update_entry",
            "delete_entry",
            "log_frontend",
            "log_frontend_atomic",
            "get_next_seq",
        ]),
    ))
    .expect("failed to run tauri-build");
}
