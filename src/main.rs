//! Browser entry point. Built with `trunk` and the `csr` feature.

#[cfg(feature = "csr")]
fn main() {
    use evalboard::app::App;
    use evalboard::config::ClientConfig;

    console_error_panic_hook::set_once();

    // Config parsing may warn, so the logger starts wide open and is narrowed after.
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = ClientConfig::from_build_env();
    log::set_max_level(config.log_level.to_level_filter());
    log::info!("evalboard starting against {}", config.api_base_url);

    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("evalboard is a browser client; build it with `trunk serve --features csr`.");
}
