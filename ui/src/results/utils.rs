use api::HistoryRecord;
use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

pub(crate) fn parse_timestamp(record: &HistoryRecord) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(record.created_at.as_str(), &Rfc3339).ok()
}

/// `Mar 2, 2025 · 09:15`, or the raw stamp when it doesn't parse.
pub(crate) fn format_record_date(record: &HistoryRecord) -> String {
    match parse_timestamp(record) {
        Some(date) => format!("{} · {}", format_date_badge(date), format_time_badge(date)),
        None => record.created_at.clone(),
    }
}

pub(crate) fn format_date_badge(date: OffsetDateTime) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

pub(crate) fn format_time_badge(date: OffsetDateTime) -> String {
    date.format(&format_description!("[hour]:[minute]"))
        .unwrap_or_else(|_| "—".to_string())
}
