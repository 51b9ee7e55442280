pub mod card_rating;
pub mod draft_pack;
pub mod metric;
pub mod sort_key;
