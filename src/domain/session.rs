/// Listings shown per result page on the site.
pub const RESULTS_PER_PAGE: u32 = 50;

/// One successful keyword search. Created after the site reports a non-zero
/// result count and read-only from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub keyword: String,
    pub result_count: u32,
    pub page_count: u32,
}

impl SearchSession {
    pub fn new(keyword: String, result_count: u32) -> Self {
        SearchSession {
            keyword,
            result_count,
            page_count: page_count_for(result_count),
        }
    }
}

pub fn page_count_for(result_count: u32) -> u32 {
    match result_count {
        0 => 0,
        n if n <= RESULTS_PER_PAGE => 1,
        n => n.div_ceil(RESULTS_PER_PAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::page_count_for;

    #[test]
    fn page_count_zero_results() {
        assert_eq!(page_count_for(0), 0);
    }

    #[test]
    fn page_count_single_page() {
        assert_eq!(page_count_for(1), 1);
        assert_eq!(page_count_for(50), 1);
    }

    #[test]
    fn page_count_multiple_pages() {
        assert_eq!(page_count_for(51), 2);
        assert_eq!(page_count_for(120), 3);
        assert_eq!(page_count_for(150), 3);
    }
}
