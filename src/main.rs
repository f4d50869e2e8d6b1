use std::io::{self, BufRead, Write};

use env_logger::Env;
use thirtyfour::WebDriver;

use tenshoku::{
    configuration::{get_configuration, Settings},
    services::{access_site, search_by_keyword, visit_pages, write_results, Droid},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    log::info!("start scraping");
    println!("開始します。");

    let configuration = get_configuration().expect("Failed to read configuration.");

    log::info!("booting...");
    println!("\n起動しています・・・");
    let droid = Droid::new(&configuration.webdriver).await?;

    let outcome = run(&droid.driver, &configuration).await;

    // The browser goes down whether the run succeeded or not; a failing
    // teardown is not recovered from.
    droid.quit().await?;
    outcome?;

    log::info!("done");
    println!("\n完了しました。");
    Ok(())
}

async fn run(driver: &WebDriver, configuration: &Settings) -> anyhow::Result<()> {
    access_site(driver, &configuration.scrape).await?;

    log::info!("ready");
    println!("\n準備が整いました！");

    let Some(session) = search_by_keyword(driver, prompt_keyword).await? else {
        log::info!("no keyword entered, nothing to do");
        return Ok(());
    };

    let results = visit_pages(driver, &session, &configuration.scrape).await?;

    let path = write_results(
        &results,
        &session.keyword,
        &configuration.output.results_dir,
        configuration.scrape.strict_pairing,
    )?;

    log::info!("saved results to {}", path.display());
    println!("\n{} に保存しました。", path.display());

    Ok(())
}

fn prompt_keyword() -> Option<String> {
    let mut line = String::new();

    loop {
        print!("\n気になるキーワードを入力してください！\n\n");
        let _ = io::stdout().flush();

        line.clear();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {
                let keyword = line.trim();
                if !keyword.is_empty() {
                    return Some(keyword.to_string());
                }
            }
        }
    }
}
