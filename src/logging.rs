use env_logger::Env;

/// Installs the global logger. `RUST_LOG` overrides the default `warn`
/// filter; the default stays quiet so the TUI screen is not disturbed.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
