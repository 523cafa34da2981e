pub mod alert;
pub mod badge;
pub mod card;
pub mod page_header;

// Re-exports for convenience
pub use alert::*;
pub use badge::*;
pub use card::*;
pub use page_header::*;
