pub mod error_banner;
pub mod modal;
pub mod number_format;
pub mod page_header;
pub mod stat_card;
