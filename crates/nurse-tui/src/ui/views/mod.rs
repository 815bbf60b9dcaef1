pub mod date_picker;
pub mod nursing_form;

pub use date_picker::render_date_picker;
pub use nursing_form::render_nursing_form;
