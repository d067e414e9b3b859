pub mod event;
pub mod event_kind;
pub mod session;
pub mod theme;

pub use event::HistoryEntry;
pub use event_kind::EventKind;
pub use session::{SavedCreds, Session, StoredUser};
pub use theme::Theme;
