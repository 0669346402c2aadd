use time::macros::format_description;
use time::OffsetDateTime;

type FormatDescription<'a> = &'a [time::format_description::BorrowedFormatItem<'a>];

pub const DATETIME_FORMAT: FormatDescription =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

pub fn format_datetime(datetime: OffsetDateTime) -> String {
    datetime.format(DATETIME_FORMAT).unwrap_or_default()
}
