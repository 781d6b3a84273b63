// Main entry point - Print the authenticated user's profile, vehicles and devices
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use xee_sdk::infrastructure::config::load_sdk_config;
use xee_sdk::{ApiErrors, HttpTransport, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = load_sdk_config()?;
    if config.api.access_token.is_none() {
        tracing::warn!("No access token configured, user routes will be rejected");
    }

    // Create transport (infrastructure layer) and session (application layer)
    let transport = Arc::new(HttpTransport::from_settings(&config.api)?);
    let session = Session::new(transport);
    let users = session.users();

    let (user, vehicles, devices) =
        futures::join!(users.me(), users.me_vehicles(), users.me_devices());

    match user {
        Ok(user) => tracing::info!("Signed in as {} ({})", user.display_name(), user.id),
        Err(errors) => report("profile", &errors),
    }

    match vehicles {
        Ok(vehicles) => {
            tracing::info!("{} vehicle(s)", vehicles.len());
            for vehicle in vehicles {
                tracing::info!(
                    "  {} {} {}",
                    vehicle.id,
                    vehicle.name.as_deref().unwrap_or("-"),
                    vehicle.license_plate.as_deref().unwrap_or("")
                );
            }
        }
        Err(errors) => report("vehicles", &errors),
    }

    match devices {
        Ok(devices) => {
            tracing::info!("{} device(s)", devices.len());
            for device in devices {
                tracing::info!("  {} {}", device.id, device.name.as_deref().unwrap_or("-"));
            }
        }
        Err(errors) => report("devices", &errors),
    }

    Ok(())
}

fn report(what: &str, errors: &ApiErrors) {
    for error in errors.iter() {
        match &error.tip {
            Some(tip) => tracing::error!("Failed to fetch {}: {} ({})", what, error, tip),
            None => tracing::error!("Failed to fetch {}: {}", what, error),
        }
    }
}
