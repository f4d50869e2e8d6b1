use anyhow::Result;
use thirtyfour::{By, WebDriver, WebElement};

/// Class/name lookups plus navigation on the live results page. Everything
/// the controller and extractor touch in the browser goes through here, so
/// both can run against a fake session in tests.
#[allow(async_fn_in_trait)]
pub trait DomQuery {
    type Elem: DomElement;

    async fn goto(&self, url: &str) -> Result<()>;
    async fn find_by_class(&self, class: &str) -> Result<Vec<Self::Elem>>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Self::Elem>>;
}

#[allow(async_fn_in_trait)]
pub trait DomElement: Sized {
    async fn text(&self) -> Result<String>;
    async fn find_by_class(&self, class: &str) -> Result<Vec<Self>>;
    async fn click(&self) -> Result<()>;
    async fn clear(&self) -> Result<()>;
    async fn send_text(&self, text: &str) -> Result<()>;
}

impl DomQuery for WebDriver {
    type Elem = WebElement;

    async fn goto(&self, url: &str) -> Result<()> {
        self.handle.goto(url).await?;
        Ok(())
    }

    async fn find_by_class(&self, class: &str) -> Result<Vec<WebElement>> {
        Ok(self.handle.find_all(By::ClassName(class)).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<WebElement>> {
        Ok(self.handle.find_all(By::Name(name)).await?)
    }
}

impl DomElement for WebElement {
    async fn text(&self) -> Result<String> {
        Ok(WebElement::text(self).await?)
    }

    async fn find_by_class(&self, class: &str) -> Result<Vec<WebElement>> {
        Ok(WebElement::find_all(self, By::ClassName(class)).await?)
    }

    async fn click(&self) -> Result<()> {
        Ok(WebElement::click(self).await?)
    }

    async fn clear(&self) -> Result<()> {
        Ok(WebElement::clear(self).await?)
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        Ok(WebElement::send_keys(self, text).await?)
    }
}
