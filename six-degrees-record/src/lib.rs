pub mod constants;

pub mod decode_error;
pub use decode_error::*;

pub mod film;
pub use film::*;

pub mod layout;
pub use layout::*;

pub mod record_view;
pub use record_view::*;

pub mod records;
pub use records::*;
