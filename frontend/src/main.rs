//! Wellness journey frontend - Dioxus app.
//! Default: web (dx serve). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() -> anyhow::Result<()> {
    use journey_frontend::app::App;

    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journey_frontend=debug,journey_core=debug".into()),
        )
        .init();

    tracing::info!("starting desktop window");
    dioxus::launch(App);
    Ok(())
}

#[cfg(all(feature = "web", not(feature = "desktop"), target_arch = "wasm32"))]
fn main() {
    dioxus::launch(journey_frontend::app::App);
}

// `cargo run` on the host cannot open the survey in a browser by itself: the
// gallery, local storage and the relay timer only exist in the wasm build.
// Delegate to `dx serve`, which builds that target and serves `/` and `/form`.
#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    const NO_REFERENCE_TYPES: &str = "-C target-feature=-reference-types";

    // wasm-bindgen rejects reference-types, which newer toolchains enable by default.
    let rustflags = match std::env::var("RUSTFLAGS") {
        Ok(existing) if !existing.trim().is_empty() => format!("{} {}", existing, NO_REFERENCE_TYPES),
        _ => NO_REFERENCE_TYPES.to_string(),
    };
    let script = format!(
        "export RUSTFLAGS='{}'; exec dx serve",
        rustflags.replace('\'', "'\"'\"'")
    );
    match std::process::Command::new("sh").args(["-c", &script]).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("wellness journey: could not start `dx serve`: {}", e);
            eprintln!("Install the Dioxus CLI (cargo install dioxus-cli) or run the desktop build:");
            eprintln!("  cargo run -p journey-frontend --features desktop");
            std::process::exit(1);
        }
    }
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() {
    eprintln!("Build with --features web or --features desktop");
}
