//! UI layer
//!
//! - **`ratatui_adapter`** - the interactive picker
//! - **`output`** - line output for one-shot commands and for printing the
//!   selection after the picker exits

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::RatatuiPicker;
