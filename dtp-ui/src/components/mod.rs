//! Dioxus RSX components making up the date picker.

mod arrow_icon;
mod calendar_body;
mod calendar_header;
mod date_time_picker;
mod picker_input;

pub use arrow_icon::ArrowIcon;
pub use calendar_body::CalendarBody;
pub use calendar_header::CalendarHeader;
pub use date_time_picker::DateTimePicker;
pub use picker_input::PickerInput;
