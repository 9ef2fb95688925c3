//! Response Formatters
//!
//! Transform advice outcomes into presentation formats.

mod html;

pub use html::{
    render_page, PageOutcome, PageView, EMPTY_INPUT_WARNING, FAILURE_NOTICE,
};
