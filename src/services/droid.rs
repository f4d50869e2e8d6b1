use thirtyfour::{error::WebDriverResult, DesiredCapabilities, WebDriver};

use crate::configuration::WebDriverSettings;

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new(settings: &WebDriverSettings) -> WebDriverResult<Self> {
        let caps = DesiredCapabilities::chrome();

        let driver = WebDriver::new(&settings.url, caps).await?;
        driver.maximize_window().await?;

        Ok(Droid { driver })
    }

    /// Releases the OS-level browser resource. Called once at the end of the
    /// run, success or failure.
    pub async fn quit(self) -> WebDriverResult<()> {
        self.driver.quit().await
    }
}
