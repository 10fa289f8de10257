use crate::wallet::record_tags::RecordTags;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchFilter {
    /// Matches records carrying every given tag with an equal value.
    TagFilter(RecordTags),
}

impl SearchFilter {
    pub fn matches(&self, tags: &RecordTags) -> bool {
        match self {
            SearchFilter::TagFilter(query) => query.is_subset_of(tags),
        }
    }
}

impl From<RecordTags> for SearchFilter {
    fn from(tags: RecordTags) -> Self {
        SearchFilter::TagFilter(tags)
    }
}
