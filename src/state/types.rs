//! Core value types used by newsdeck state.

use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use super::error::AppError;

/// One news article as reported by the search service.
///
/// Field names follow the service's JSON schema exactly so a record can be
/// sent back verbatim when requesting a spreadsheet export.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewsRecord {
    /// Headline text.
    pub title: String,
    /// Canonical article URL.
    pub link: String,
    /// Publishing outlet name (e.g., "Reuters").
    pub source: String,
    /// Publication timestamp as the service sent it; kept as a string
    /// because the service mixes formats.
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    /// Sentiment label when the service computed one (e.g., "positive").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

impl NewsRecord {
    /// Stable per-load identity derived from title, link, and publication
    /// timestamp. Records that agree on all three share a key.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.title.hash(&mut hasher);
        self.link.hash(&mut hasher);
        self.published_at.hash(&mut hasher);
        RecordKey(hasher.finish())
    }

    /// Display class for this record's sentiment label.
    #[must_use]
    pub fn sentiment_class(&self) -> Sentiment {
        Sentiment::from_label(self.sentiment.as_deref())
    }
}

/// Opaque identity for a [`NewsRecord`] within one loaded result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(u64);

/// Coarse sentiment class used for badges in the results list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    /// Label recognized as positive.
    Positive,
    /// Label recognized as negative.
    Negative,
    /// Anything else, including a missing label.
    Neutral,
}

impl Sentiment {
    /// Map a service-provided label onto a display class.
    ///
    /// The service emits Chinese labels; English ones are accepted as well
    /// for robustness. Unrecognized or absent labels read as neutral.
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("正面") => Self::Positive,
            Some("負面") => Self::Negative,
            Some(other) => match other.to_ascii_lowercase().as_str() {
                "positive" => Self::Positive,
                "negative" => Self::Negative,
                _ => Self::Neutral,
            },
            None => Self::Neutral,
        }
    }

    /// Single-character badge shown next to each result row.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
            Self::Neutral => "~",
        }
    }
}

/// Direction of the date ordering applied to the results list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest articles first.
    #[default]
    DateDesc,
    /// Oldest articles first.
    DateAsc,
}

impl SortOrder {
    /// The opposite direction, used when the user flips the ordering.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::DateDesc => Self::DateAsc,
            Self::DateAsc => Self::DateDesc,
        }
    }

    /// Stable key used in the configuration file.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::DateDesc => "date_desc",
            Self::DateAsc => "date_asc",
        }
    }

    /// Parse a configuration key (with a couple of aliases) back into a
    /// direction; `None` when unrecognized.
    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "date_desc" | "newest" | "desc" => Some(Self::DateDesc),
            "date_asc" | "oldest" | "asc" => Some(Self::DateAsc),
            _ => None,
        }
    }

    /// Short label for the status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DateDesc => "newest first",
            Self::DateAsc => "oldest first",
        }
    }
}

/// Count of loaded articles attributed to one outlet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceCount {
    /// Outlet name exactly as it appears on the records.
    pub name: String,
    /// Number of loaded records from that outlet.
    pub count: usize,
}

/// A search request handed to the search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Keyword text exactly as typed.
    pub keyword: String,
    /// Keyword combination mode, forwarded verbatim ("AND" or "OR").
    pub logic: String,
    /// Inclusive window start (YYYY-MM-DD).
    pub start_date: String,
    /// Inclusive window end (YYYY-MM-DD).
    pub end_date: String,
}

/// Reply from the search worker for one [`QueryInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReply {
    /// Identifier of the query this reply answers.
    pub id: u64,
    /// Loaded records, or the error that prevented loading them.
    pub outcome: Result<Vec<NewsRecord>, AppError>,
}

/// A spreadsheet export job handed to the export worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    /// Records to include, already narrowed to the downloadable batch.
    pub records: Vec<NewsRecord>,
    /// Destination file path, including the generated file name.
    pub dest: PathBuf,
}

/// Reply from the export worker for one [`ExportRequest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReply {
    /// Where the file landed and how many rows it holds, or the error.
    pub outcome: Result<ExportDone, AppError>,
}

/// Details of a completed export, used to build the success notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportDone {
    /// Path the spreadsheet was written to.
    pub path: PathBuf,
    /// Number of rows written.
    pub count: usize,
}

/// One-line feedback shown in the status pane. At most one notice is
/// visible at a time; setting a new one replaces the old.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Green confirmation text.
    Success(String),
    /// Red failure text.
    Error(String),
}

/// Which pane currently receives key input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The query form (keyword, logic, date window).
    #[default]
    Query,
    /// The source filter list.
    Sources,
    /// The results list.
    Results,
}

/// Which line of the query form the cursor sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    /// Keyword text input.
    #[default]
    Keyword,
    /// AND/OR combination toggle.
    Logic,
    /// Window start date input.
    StartDate,
    /// Window end date input.
    EndDate,
}

impl FormField {
    /// Field below this one, wrapping at the bottom.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Keyword => Self::Logic,
            Self::Logic => Self::StartDate,
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::Keyword,
        }
    }

    /// Field above this one, wrapping at the top.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Keyword => Self::EndDate,
            Self::Logic => Self::Keyword,
            Self::StartDate => Self::Logic,
            Self::EndDate => Self::StartDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, NewsRecord, Sentiment, SortOrder};

    fn record(title: &str, link: &str, published_at: &str) -> NewsRecord {
        NewsRecord {
            title: title.into(),
            link: link.into(),
            source: "Wire".into(),
            published_at: published_at.into(),
            sentiment: None,
        }
    }

    #[test]
    /// What: SortOrder config key mapping roundtrip and alias handling
    ///
    /// - Input: Known keys and aliases; unknown key
    /// - Output: Correct mapping to enum variants; None for unknown
    fn state_sortorder_config_roundtrip_and_aliases() {
        assert_eq!(SortOrder::DateDesc.as_config_key(), "date_desc");
        assert_eq!(
            SortOrder::from_config_key("date_desc"),
            Some(SortOrder::DateDesc)
        );
        assert_eq!(
            SortOrder::from_config_key("newest"),
            Some(SortOrder::DateDesc)
        );
        assert_eq!(
            SortOrder::from_config_key("date_asc"),
            Some(SortOrder::DateAsc)
        );
        assert_eq!(
            SortOrder::from_config_key(" OLDEST "),
            Some(SortOrder::DateAsc)
        );
        assert_eq!(SortOrder::from_config_key("unknown"), None);
        assert_eq!(SortOrder::DateDesc.flipped(), SortOrder::DateAsc);
        assert_eq!(SortOrder::DateAsc.flipped(), SortOrder::DateDesc);
    }

    #[test]
    /// What: Sentiment label mapping covers service labels and fallbacks
    ///
    /// - Input: Chinese and English labels, junk, and absence
    /// - Output: Positive/negative recognized; everything else neutral
    fn state_sentiment_label_mapping() {
        assert_eq!(Sentiment::from_label(Some("正面")), Sentiment::Positive);
        assert_eq!(Sentiment::from_label(Some("負面")), Sentiment::Negative);
        assert_eq!(Sentiment::from_label(Some("中性")), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(Some("Positive")), Sentiment::Positive);
        assert_eq!(
            Sentiment::from_label(Some(" negative ")),
            Sentiment::Negative
        );
        assert_eq!(Sentiment::from_label(Some("upbeat")), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(None), Sentiment::Neutral);
    }

    #[test]
    /// What: Record keys are stable for equal content and differ otherwise
    ///
    /// - Input: Two records with identical identity fields; one that differs
    /// - Output: Equal keys for the pair, a distinct key for the third
    fn state_record_key_identity() {
        let a = record("Title", "https://a.example/x", "2026-08-20 10:00:00");
        let b = record("Title", "https://a.example/x", "2026-08-20 10:00:00");
        let c = record("Title", "https://a.example/y", "2026-08-20 10:00:00");
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    #[test]
    /// What: Form field cursor wraps in both directions
    ///
    /// - Input: next() from the last field, prev() from the first
    /// - Output: Wraps to the first and last fields respectively
    fn state_form_field_wraps() {
        assert_eq!(FormField::EndDate.next(), FormField::Keyword);
        assert_eq!(FormField::Keyword.prev(), FormField::EndDate);
        assert_eq!(FormField::Keyword.next(), FormField::Logic);
    }
}
