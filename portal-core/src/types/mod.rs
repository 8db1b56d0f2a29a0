//! 类型定义模块

mod card;
mod catalog;
mod config;
mod content;
mod session;
mod sidebar;

pub use card::{CardState, DisabledReason, ResolvedCard};
pub use catalog::{Catalog, CatalogEntry};
pub use config::{AccountRecord, PortalConfig, ThemePreference};
pub use content::PortalContent;
pub use session::{Identity, SessionStatus};
pub use sidebar::{AlertItem, AlertKind, DocumentLink};
