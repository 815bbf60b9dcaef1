pub mod field;
pub mod record;

pub use field::{FormField, InputMode};
pub use record::{NursingRecord, SoapNote, Vitals};
