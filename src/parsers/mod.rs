pub mod html;

pub use html::{extract_text, page_title};
