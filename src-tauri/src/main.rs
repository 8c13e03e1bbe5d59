#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    ai_studio_tauri::run()
}
