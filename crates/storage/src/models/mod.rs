mod alias;
pub mod decimal_text;
pub mod event;
pub mod record;
pub mod result_type;
pub mod result_value;

pub use event::{Event, EventId};
pub use record::{LeaderboardRecord, NewRecord};
pub use result_type::ResultType;
pub use result_value::{
    compare_sort_keys, format_time_display, is_well_formed_result, result_sort_key,
};
