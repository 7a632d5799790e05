use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Theme applied when a surface opens without a saved preference.
    #[config(env = "SQLPANE_DEFAULT_THEME", default = "light")]
    pub default_theme: String,
    /// Markup emitted by the highlighter when the query text is empty.
    #[config(env = "SQLPANE_EMPTY_PLACEHOLDER", default = "")]
    pub empty_placeholder: String,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
