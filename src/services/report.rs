use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::{ResultSet, DETAIL_FIELD_COUNT};
use crate::error::ScrapeError;

pub const CSV_HEADER: [&str; 5] = ["会社名", "仕事内容", "対象となる方", "勤務地", "給与"];

/// Renders the aggregated sequences as CSV. The name and record sequences are
/// built independently and may differ in length; by default the shorter side
/// is padded with empty cells, with `strict_pairing` any divergence is an
/// error instead.
pub fn render_csv(results: &ResultSet, strict_pairing: bool) -> Result<String, ScrapeError> {
    let names = &results.company_names;
    let records = &results.records;

    if strict_pairing && names.len() != records.len() {
        return Err(ScrapeError::RowCountMismatch {
            names: names.len(),
            records: records.len(),
        });
    }

    let mut out = String::new();
    write_row(&mut out, &CSV_HEADER);

    for i in 0..names.len().max(records.len()) {
        let mut cells: Vec<&str> = Vec::with_capacity(1 + DETAIL_FIELD_COUNT);
        cells.push(names.get(i).map(String::as_str).unwrap_or(""));

        let fields = records.get(i).map(|r| r.fields.as_slice()).unwrap_or(&[]);
        for j in 0..DETAIL_FIELD_COUNT.max(fields.len()) {
            cells.push(fields.get(j).map(String::as_str).unwrap_or(""));
        }

        write_row(&mut out, &cells);
    }

    Ok(out)
}

pub fn results_file_name(keyword: &str, at: DateTime<Local>) -> String {
    format!(
        "mynavi_search_results_by_{}_{}.csv",
        keyword,
        at.format("%Y_%m%d_%H%M")
    )
}

/// Writes the dated results file into `results_dir`, creating the directory
/// when missing.
pub fn write_results(
    results: &ResultSet,
    keyword: &str,
    results_dir: &str,
    strict_pairing: bool,
) -> Result<PathBuf, ScrapeError> {
    let csv = render_csv(results, strict_pairing)?;

    fs::create_dir_all(results_dir)?;
    let path = Path::new(results_dir).join(results_file_name(keyword, Local::now()));
    fs::write(&path, csv)?;

    Ok(path)
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row(out: &mut String, cells: &[&str]) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        } else {
            first = false;
        }

        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::{render_csv, results_file_name};
    use crate::domain::{DetailRecord, ResultSet};
    use crate::error::ScrapeError;

    fn record(fields: &[&str]) -> DetailRecord {
        DetailRecord::from_raw(fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn renders_one_row_per_listing() {
        let results = ResultSet {
            company_names: vec!["Acme Corp".to_string()],
            records: vec![record(&["desc", "target", "loc", "salary"])],
        };

        let csv = render_csv(&results, false).unwrap();

        assert_eq!(
            csv,
            "会社名,仕事内容,対象となる方,勤務地,給与\nAcme Corp,desc,target,loc,salary\n"
        );
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let results = ResultSet {
            company_names: vec!["Acme, Inc".to_string()],
            records: vec![record(&["a \"big\" job", "line\nbreak", "loc", "salary"])],
        };

        let csv = render_csv(&results, false).unwrap();

        assert!(csv.contains("\"Acme, Inc\""));
        assert!(csv.contains("\"a \"\"big\"\" job\""));
        assert!(csv.contains("\"line\nbreak\""));
    }

    #[test]
    fn diverging_sequences_are_padded_with_empty_cells() {
        let results = ResultSet {
            company_names: vec!["Acme Corp".to_string(), "Beta Inc".to_string()],
            records: vec![record(&["desc", "target", "loc", "salary"])],
        };

        let csv = render_csv(&results, false).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Beta Inc,,,,");
    }

    #[test]
    fn short_records_still_fill_four_columns() {
        let results = ResultSet {
            company_names: vec!["Acme Corp".to_string()],
            records: vec![record(&["desc", "target"])],
        };

        let csv = render_csv(&results, false).unwrap();

        assert!(csv.ends_with("Acme Corp,desc,target,,\n"));
    }

    #[test]
    fn strict_pairing_rejects_divergence() {
        let results = ResultSet {
            company_names: vec!["Acme Corp".to_string(), "Beta Inc".to_string()],
            records: vec![record(&["desc", "target", "loc", "salary"])],
        };

        let result = render_csv(&results, true);

        assert!(matches!(
            result,
            Err(ScrapeError::RowCountMismatch {
                names: 2,
                records: 1
            })
        ));
    }

    #[test]
    fn file_name_carries_keyword_and_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 8, 30, 14, 5, 0).unwrap();

        assert_eq!(
            results_file_name("engineer", at),
            "mynavi_search_results_by_engineer_2026_0830_1405.csv"
        );
    }
}
