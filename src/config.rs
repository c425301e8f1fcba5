use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};

use crate::schemas::AppState;
use crate::seed::seed_defaults;
use crate::store::Store;

/// Bind address used when neither `--bind-address` nor `BIND_ADDRESS` is given
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";

/// Load `.env` into the process environment if the file exists
pub fn load_env() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(_) => debug!("No .env file found"),
    }
}

/// Initialize application state, optionally seeded with the welcome records
pub async fn initialize_app_state(seed: bool) -> Result<AppState> {
    let store = Store::new();

    if seed {
        let today = Utc::now().date_naive();
        info!("Seeding default records relative to {}", today);
        seed_defaults(&store, today).await;
    } else {
        info!("Starting with an empty store");
    }

    Ok(AppState::new(store))
}
