mod commands;
mod error;
pub mod generator;
pub mod session;

pub use error::StudioError;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::generate::generate_image,
            commands::session::save_session,
            commands::session::load_session,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
