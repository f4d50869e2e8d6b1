use std::time::Duration;

use url::Url;

use crate::configuration::ScrapeSettings;
use crate::domain::{ResultSet, SearchSession, FEATURED_NAME_CLASS, STANDARD_NAME_CLASS};
use crate::error::ScrapeError;
use crate::services::dom::{DomElement, DomQuery};
use crate::services::extractor::extract_page;

pub const SEARCH_URL: &str = "https://tenshoku.mynavi.jp/search/";

pub(crate) const KEYWORD_BOX_NAME: &str = "srFreeSearchKeyword";
pub(crate) const RESULT_COUNT_CLASS: &str = "js__searchRecruit--count";
const PRIMARY_BUTTON_CLASS: &str = "btnPrimaryL";
const FALLBACK_BUTTON_CLASS: &str = "btnSearch";
const POPUP_CLOSE_CLASS: &str = "karte-close";

/// Opens the search page and waits out the client-side rendering, then closes
/// the marketing popup when one is shown.
pub async fn access_site<D: DomQuery>(
    dom: &D,
    settings: &ScrapeSettings,
) -> Result<(), ScrapeError> {
    dom.goto(SEARCH_URL).await?;

    log::info!("loading...");
    println!("\nデータをロード中です・・・");
    tokio::time::sleep(Duration::from_secs(settings.settle_secs)).await;

    if let Some(popup) = dom.find_by_class(POPUP_CLOSE_CLASS).await?.into_iter().next() {
        popup.click().await?;
    }

    Ok(())
}

/// Interactive search loop. Prompts for a keyword, submits it and reads the
/// reported result count; a zero count loops back to the prompt, a non-zero
/// count produces the session. Missing search controls abort the loop.
/// `prompt` returning `None` (closed stdin) ends the loop with no session.
pub async fn search_by_keyword<D: DomQuery>(
    dom: &D,
    mut prompt: impl FnMut() -> Option<String>,
) -> Result<Option<SearchSession>, ScrapeError> {
    loop {
        // The keyword box is re-located every cycle: after a search the
        // browser sits on the results page, which has its own copy.
        let keyword_box = dom
            .find_by_name(KEYWORD_BOX_NAME)
            .await?
            .into_iter()
            .next()
            .ok_or(ScrapeError::SearchElementNotFound(KEYWORD_BOX_NAME))?;
        keyword_box.clear().await?;

        log::info!("enter the keywords you are interested in...");
        let Some(keyword) = prompt() else {
            return Ok(None);
        };
        keyword_box.send_text(&keyword).await?;

        match dom
            .find_by_class(PRIMARY_BUTTON_CLASS)
            .await?
            .into_iter()
            .next()
        {
            Some(button) => button.click().await?,
            None => {
                dom.find_by_class(FALLBACK_BUTTON_CLASS)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(ScrapeError::SearchElementNotFound(FALLBACK_BUTTON_CLASS))?
                    .click()
                    .await?
            }
        }

        let count_text = dom
            .find_by_class(RESULT_COUNT_CLASS)
            .await?
            .into_iter()
            .next()
            .ok_or(ScrapeError::SearchElementNotFound(RESULT_COUNT_CLASS))?
            .text()
            .await?;
        let result_count: u32 = count_text
            .trim()
            .parse()
            .map_err(|_| ScrapeError::InvalidResultCount(count_text.clone()))?;

        log::info!("{} jobs were found", result_count);
        println!("\n{}件の求人情報がヒットしました。", result_count);

        if result_count == 0 {
            log::info!("There are no jobs available for {}", keyword);
            println!("{}の求人情報はありません。\n", keyword);
            log::info!("Try searching again with a different keyword.");
            println!("\n別のキーワードで検索しなおしてね。");
            continue;
        }

        let session = SearchSession::new(keyword, result_count);
        log::info!("There are {} pages", session.page_count);
        println!("{}ページあります。\n", session.page_count);
        return Ok(Some(session));
    }
}

/// Walks every result page of the session and accumulates what each one
/// yields. A single-page session reuses the results page already shown;
/// otherwise pages 1..=N are loaded through the list URL.
pub async fn visit_pages<D: DomQuery>(
    dom: &D,
    session: &SearchSession,
    settings: &ScrapeSettings,
) -> Result<ResultSet, ScrapeError> {
    let mut results = ResultSet::default();

    if session.page_count == 1 {
        log::info!("getting information...");
        println!("情報を取得中です・・・");

        results.absorb(extract_page(dom).await?);
        return Ok(results);
    }

    for page in 1..=session.page_count {
        dom.goto(&page_url(&session.keyword, page, settings.encode_keyword))
            .await?;
        wait_for_listings(dom, settings).await?;

        log::info!("getting information for page {} now...", page);
        println!("{}ページ目の情報を取得中です・・・", page);

        results.absorb(extract_page(dom).await?);
    }

    Ok(results)
}

pub fn page_url(keyword: &str, page: u32, encode_keyword: bool) -> String {
    let raw = format!(
        "https://tenshoku.mynavi.jp/list/kw{keyword}/pg{page}/?jobsearchType=4&searchType=8"
    );
    if !encode_keyword {
        return raw;
    }

    match Url::parse(&raw) {
        Ok(url) => url.to_string(),
        Err(_) => raw,
    }
}

/// Polls until a listing name shows up, bounded by the configured timeout.
/// On timeout the page is extracted anyway; a sparse page then just yields
/// nothing.
async fn wait_for_listings<D: DomQuery>(
    dom: &D,
    settings: &ScrapeSettings,
) -> Result<(), ScrapeError> {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(settings.wait_timeout_secs);

    loop {
        for class in [FEATURED_NAME_CLASS, STANDARD_NAME_CLASS] {
            if !dom.find_by_class(class).await?.is_empty() {
                return Ok(());
            }
        }

        if tokio::time::Instant::now() >= deadline {
            log::warn!(
                "No listings appeared within {}s, extracting anyway",
                settings.wait_timeout_secs
            );
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(settings.wait_poll_ms)).await;
    }
}
