mod notify;
mod view;

pub use notify::NotifyService;
pub use view::{render, TerminalView};
