use anyhow::Result;

use crate::domain::{
    clean_company_name, CardVariant, DetailRecord, PageExtract, DETAIL_BODY_CLASS,
    FEATURED_NAME_CLASS, STANDARD_NAME_CLASS,
};
use crate::services::dom::{DomElement, DomQuery};

/// Pulls everything one loaded results page holds: company names first
/// (featured cards before standard ones), then detail records in fixed
/// variant order.
pub async fn extract_page<D: DomQuery>(dom: &D) -> Result<PageExtract> {
    let company_names = extract_company_names(dom).await?;
    let records = extract_detail_records(dom).await;

    log::info!(
        "Extracted {} company names and {} detail records",
        company_names.len(),
        records.len()
    );

    Ok(PageExtract {
        company_names,
        records,
    })
}

async fn extract_company_names<D: DomQuery>(dom: &D) -> Result<Vec<String>> {
    let mut names = vec![];

    for class in [FEATURED_NAME_CLASS, STANDARD_NAME_CLASS] {
        for elem in dom.find_by_class(class).await? {
            names.push(clean_company_name(&elem.text().await?));
        }
    }

    Ok(names)
}

/// One pass per card variant. A failing variant is logged and skipped; the
/// remaining variants still run, and cards already collected from the failed
/// variant are kept.
async fn extract_detail_records<D: DomQuery>(dom: &D) -> Vec<DetailRecord> {
    let mut records = vec![];

    for variant in CardVariant::ALL {
        if let Err(e) = extract_variant(dom, variant, &mut records).await {
            log::error!(
                "Failed to extract {} cards: {:?}",
                variant.card_class(),
                e
            );
        }
    }

    records
}

async fn extract_variant<D: DomQuery>(
    dom: &D,
    variant: CardVariant,
    out: &mut Vec<DetailRecord>,
) -> Result<()> {
    for card in dom.find_by_class(variant.card_class()).await? {
        let mut fields = vec![];
        for cell in card.find_by_class(DETAIL_BODY_CLASS).await? {
            fields.push(cell.text().await?);
        }
        out.push(DetailRecord::from_raw(fields));
    }

    Ok(())
}
