use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tauri::{Emitter, Manager, State};
use tauri_plugin_dialog::DialogExt;
use crate::core::{
    alerts::{model::{AlertKind, AlertState}, store::{AlertRecord, AlertStore}},
    api::{
        client::ApiClient,
        model::{
            CubicalHomologyRequest, CubicalHomologyResponse, GenerateDataQuery, PointCloud,
            ShapeType, VietorisRipsRequest, VietorisRipsResponse,
        },
    },
    bundler::I18nOptions,
    config::{ConfigManager, Environment, RuntimeConfig, Settings},
    i18n::Catalog,
};

/// How often the backend reachability probe runs
const BACKEND_POLL_INTERVAL: Duration = Duration::from_secs(10);

struct AppState {
    alerts: Mutex<AlertStore>,
    settings: Mutex<Settings>,
    config_manager: ConfigManager,
    runtime: RuntimeConfig,
    api: Mutex<ApiClient>,
    catalog: Catalog,
}

/// Publish the banner snapshot so the webview re-renders
fn emit_alert(app: &tauri::AppHandle, snapshot: &AlertState) {
    let _ = app.emit("alert-changed", snapshot.clone());
}

// ============================================
// Alert Commands
// ============================================
// Each command is the action side of the banner slice: it forwards to the
// store mutation and publishes the new snapshot.

#[tauri::command]
fn show_info(message: Option<String>, state: State<'_, AppState>, app: tauri::AppHandle) {
    let snapshot = state.alerts.lock().unwrap().raise(AlertKind::Info, message);
    emit_alert(&app, &snapshot);
}

#[tauri::command]
fn show_success(message: Option<String>, state: State<'_, AppState>, app: tauri::AppHandle) {
    let snapshot = state.alerts.lock().unwrap().raise(AlertKind::Success, message);
    emit_alert(&app, &snapshot);
}

#[tauri::command]
fn show_error(message: Option<String>, state: State<'_, AppState>, app: tauri::AppHandle) {
    let snapshot = state.alerts.lock().unwrap().raise(AlertKind::Error, message);
    emit_alert(&app, &snapshot);
}

#[tauri::command]
fn show_warning(message: Option<String>, state: State<'_, AppState>, app: tauri::AppHandle) {
    let snapshot = state.alerts.lock().unwrap().raise(AlertKind::Warning, message);
    emit_alert(&app, &snapshot);
}

#[tauri::command]
fn clear_alert(state: State<'_, AppState>, app: tauri::AppHandle) {
    let snapshot = state.alerts.lock().unwrap().clear();
    emit_alert(&app, &snapshot);
}

#[tauri::command]
fn get_alert(state: State<'_, AppState>) -> AlertState {
    state.alerts.lock().unwrap().current().clone()
}

#[tauri::command]
fn get_alert_history(state: State<'_, AppState>) -> Vec<AlertRecord> {
    state.alerts.lock().unwrap().history().to_vec()
}

// ============================================
// Configuration Commands
// ============================================

#[tauri::command]
fn get_runtime_config(state: State<'_, AppState>) -> RuntimeConfig {
    state.runtime.clone()
}

#[tauri::command]
fn get_settings(state: State<'_, AppState>) -> Settings {
    state.settings.lock().unwrap().clone()
}

#[tauri::command]
fn save_settings(settings: Settings, state: State<'_, AppState>) -> Result<(), String> {
    {
        let mut current = state.settings.lock().unwrap();
        *current = settings.clone();
    }
    state.config_manager.save(&settings).map_err(|e| e.to_string())?;

    // Hot-reload: repoint the client when the effective API path changed
    let api_path = state.runtime.effective_api_path(&settings);
    let mut api = state.api.lock().unwrap();
    if api.base_url() != api_path {
        println!("API path changed to {}", api_path);
        *api = ApiClient::new(api_path);
    }
    Ok(())
}

// ============================================
// Computation Commands
// ============================================

#[tauri::command]
async fn generate_data(
    shape: ShapeType,
    n: Option<u32>,
    error: Option<f64>,
    seed: Option<u64>,
    state: State<'_, AppState>,
) -> Result<PointCloud, String> {
    let defaults = GenerateDataQuery::default();
    let query = GenerateDataQuery {
        shape,
        n: n.unwrap_or(defaults.n),
        error: error.unwrap_or(defaults.error),
        seed: seed.unwrap_or(defaults.seed),
    };
    let api = state.api.lock().unwrap().clone();
    api.generate_data(&query).await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn cubical_homology(
    request: CubicalHomologyRequest,
    state: State<'_, AppState>,
) -> Result<CubicalHomologyResponse, String> {
    let api = state.api.lock().unwrap().clone();
    api.cubical_homology(&request).await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn vietoris_rips_homology(
    request: VietorisRipsRequest,
    state: State<'_, AppState>,
) -> Result<VietorisRipsResponse, String> {
    let api = state.api.lock().unwrap().clone();
    api.vietoris_rips_homology(&request).await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn export_point_cloud(
    cloud: PointCloud,
    app: tauri::AppHandle,
) -> Result<Option<PathBuf>, String> {
    // Run blocking dialog on a separate thread to avoid freezing the UI
    let picked = tauri::async_runtime::spawn_blocking(move || {
        app.dialog().file().blocking_save_file()
    }).await.map_err(|e| e.to_string())?;

    match picked {
        Some(file_path) => {
            let path = file_path.into_path().map_err(|e| e.to_string())?;
            let content = serde_json::to_string_pretty(&cloud).map_err(|e| e.to_string())?;
            std::fs::write(&path, content).map_err(|e| e.to_string())?;
            println!("Exported point cloud to {:?}", path);
            Ok(Some(path))
        }
        None => Ok(None),
    }
}

pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let handle = app.handle().clone();

            // Initialize Config
            let config_dir = app.path().app_config_dir().unwrap_or(PathBuf::from("."));
            let config_manager = ConfigManager::new(config_dir);
            let settings = config_manager.load();

            let environment = Environment::detect();
            let runtime = RuntimeConfig::for_env(environment);
            let api_path = runtime.effective_api_path(&settings);
            println!("Environment: {:?}, API at {}", environment, api_path);

            // Host-side messages follow the locale the user picked
            let i18n = I18nOptions {
                locale: settings.locale.clone(),
                ..I18nOptions::default()
            };
            let resource_dir = app.path().resource_dir().unwrap_or(PathBuf::from("."));
            let catalog = Catalog::load(&resource_dir, &i18n);

            app.manage(AppState {
                alerts: Mutex::new(AlertStore::new()),
                settings: Mutex::new(settings),
                config_manager,
                runtime,
                api: Mutex::new(ApiClient::new(api_path)),
                catalog,
            });

            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            app.handle().plugin(tauri_plugin_dialog::init())?;

            // Poll the backend and surface reachability flips as a banner
            tauri::async_runtime::spawn(async move {
                let mut online: Option<bool> = None;
                loop {
                    let api = {
                        let app_state = handle.state::<AppState>();
                        let api = app_state.api.lock().unwrap();
                        api.clone()
                    };

                    let reachable = api.ping().await;
                    if online != Some(reachable) {
                        log::info!(
                            "Backend at {} is {}",
                            api.base_url(),
                            if reachable { "reachable" } else { "unreachable" }
                        );
                        let _ = handle.emit(
                            "backend-status",
                            serde_json::json!({ "online": reachable }),
                        );

                        if !reachable {
                            let app_state = handle.state::<AppState>();
                            let message = app_state
                                .catalog
                                .message_or(
                                    "alert.backend_unreachable",
                                    "Computation backend is unreachable",
                                )
                                .to_string();
                            let snapshot = app_state
                                .alerts
                                .lock()
                                .unwrap()
                                .raise(AlertKind::Warning, Some(message));
                            emit_alert(&handle, &snapshot);
                        }
                        online = Some(reachable);
                    }

                    tokio::time::sleep(BACKEND_POLL_INTERVAL).await;
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            show_info,
            show_success,
            show_error,
            show_warning,
            clear_alert,
            get_alert,
            get_alert_history,
            get_runtime_config,
            get_settings,
            save_settings,
            generate_data,
            cubical_homology,
            vietoris_rips_homology,
            export_point_cloud
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
