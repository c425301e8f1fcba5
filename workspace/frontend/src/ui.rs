//! Page-facing pieces of the controller: the page surface it writes to,
//! transient notifications and date formatting for cards.

pub mod date;
pub mod document;
pub mod notification;
pub mod page;

pub use document::HtmlPage;
pub use notification::{Notification, NotificationCenter, NotificationKind, NotificationPhase, NotificationTimings};
pub use page::{MemoryPage, ModalView, Page, PageEvent};
