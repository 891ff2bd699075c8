use reportdesk::ClientConfig;

/// Bundled config for mobile builds
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

fn load_bundled_config() {
    for item in dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes()) {
        let Ok((key, value)) = item else {
            continue;
        };
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = ClientConfig::from_env()?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .try_init();
    tracing::info!(server = %config.server_url, "starting report desk");

    reportdesk::ui::launch(config)?;
    Ok(())
}
