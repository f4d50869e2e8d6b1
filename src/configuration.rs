#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub webdriver: WebDriverSettings,
    pub scrape: ScrapeSettings,
    pub output: OutputSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebDriverSettings {
    /// WebDriver endpoint, e.g. a local chromedriver or a Selenium hub.
    pub url: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ScrapeSettings {
    /// Pause after the initial site load while client-side rendering settles.
    pub settle_secs: u64,
    /// Upper bound on the wait for listing elements after a page navigation.
    pub wait_timeout_secs: u64,
    pub wait_poll_ms: u64,
    /// Percent-encode the keyword in page URLs. Off reproduces the site URL
    /// with the keyword spliced in literally.
    pub encode_keyword: bool,
    /// Treat diverging company/record counts as an error instead of padding
    /// the CSV rows with empty cells.
    pub strict_pairing: bool,
}

#[derive(serde::Deserialize, Clone)]
pub struct OutputSettings {
    pub results_dir: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("webdriver.url", "http://localhost:9515")?
        .set_default("scrape.settle_secs", 5)?
        .set_default("scrape.wait_timeout_secs", 10)?
        .set_default("scrape.wait_poll_ms", 250)?
        .set_default("scrape.encode_keyword", true)?
        .set_default("scrape.strict_pairing", false)?
        .set_default("output.results_dir", "./results")?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
