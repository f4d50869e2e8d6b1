/// Name element of "featured" listing cards.
pub const FEATURED_NAME_CLASS: &str = "cassetteRecruitRecommend__name";
/// Name element of standard listing cards.
pub const STANDARD_NAME_CLASS: &str = "cassetteRecruit__name";
/// Detail-field cells nested inside every card variant.
pub const DETAIL_BODY_CLASS: &str = "tableCondition__body";

/// Fields kept per record: job description, target candidate, location, salary.
pub const DETAIL_FIELD_COUNT: usize = 4;

/// The five markup shapes a listing card may use. Same logical fields, five
/// different container classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Featured,
    Standard,
    M,
    L,
    Ll,
}

impl CardVariant {
    /// Fixed processing order: featured, standard, M, L, LL.
    pub const ALL: [CardVariant; 5] = [
        CardVariant::Featured,
        CardVariant::Standard,
        CardVariant::M,
        CardVariant::L,
        CardVariant::Ll,
    ];

    pub fn card_class(self) -> &'static str {
        match self {
            CardVariant::Featured => "cassetteRecruitRecommend__main",
            CardVariant::Standard => "cassetteRecruit__main",
            CardVariant::M => "cassetteRecruit__mainM",
            CardVariant::L => "cassetteRecruit__mainL",
            CardVariant::Ll => "cassetteRecruit__mainLL",
        }
    }
}

/// Normalized detail fields of one listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub fields: Vec<String>,
}

impl DetailRecord {
    /// Some cards carry an extra "first-year income" cell in fifth position;
    /// it is removed so every card lines up on the same four columns. Short
    /// field lists are kept as-is.
    pub fn from_raw(mut fields: Vec<String>) -> Self {
        if fields.len() > DETAIL_FIELD_COUNT {
            fields.remove(DETAIL_FIELD_COUNT);
        }
        DetailRecord { fields }
    }
}

/// Company names carry trailing catch copy after a `|` separator.
pub fn clean_company_name(raw: &str) -> String {
    raw.split('|').next().unwrap_or(raw).trim().to_string()
}

/// What one results page yields: names and records, both in extraction order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageExtract {
    pub company_names: Vec<String>,
    pub records: Vec<DetailRecord>,
}

/// Accumulates every page's extract across the run. Append-only; the two
/// sequences are built independently and their lengths may diverge on
/// malformed pages.
#[derive(Debug, Default, Clone)]
pub struct ResultSet {
    pub company_names: Vec<String>,
    pub records: Vec<DetailRecord>,
}

impl ResultSet {
    pub fn absorb(&mut self, page: PageExtract) {
        self.company_names.extend(page.company_names);
        self.records.extend(page.records);
    }
}

#[cfg(test)]
mod tests {
    use super::{clean_company_name, DetailRecord};

    fn raw(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn record_with_five_fields_drops_first_year_income() {
        let record = DetailRecord::from_raw(raw(&["desc", "target", "loc", "salary", "income"]));
        assert_eq!(record.fields, raw(&["desc", "target", "loc", "salary"]));
    }

    #[test]
    fn record_with_four_fields_is_unchanged() {
        let record = DetailRecord::from_raw(raw(&["desc", "target", "loc", "salary"]));
        assert_eq!(record.fields, raw(&["desc", "target", "loc", "salary"]));
    }

    #[test]
    fn short_record_is_not_padded() {
        let record = DetailRecord::from_raw(raw(&["desc", "target"]));
        assert_eq!(record.fields, raw(&["desc", "target"]));
    }

    #[test]
    fn oversized_record_only_loses_the_fifth_field() {
        // Mirrors the single positional delete the site data has always
        // survived on; a six-cell card keeps its sixth cell.
        let record =
            DetailRecord::from_raw(raw(&["desc", "target", "loc", "salary", "income", "extra"]));
        assert_eq!(record.fields, raw(&["desc", "target", "loc", "salary", "extra"]));
    }

    #[test]
    fn company_name_is_cut_at_separator_and_trimmed() {
        assert_eq!(clean_company_name("Acme Corp | Tokyo"), "Acme Corp");
        assert_eq!(clean_company_name("  Acme Corp  "), "Acme Corp");
        assert_eq!(clean_company_name("Acme Corp"), "Acme Corp");
    }
}
