pub mod agent_log;
pub mod card_preview;
pub mod floating_bubble;
pub mod product_card;
pub mod search_sidebar;
pub mod tryon_dialog;

pub use agent_log::AgentLogView;
pub use card_preview::{CardPreview, FocusedField};
pub use floating_bubble::FloatingBubble;
pub use product_card::{CardIntent, ProductCardState};
pub use search_sidebar::{SearchSidebar, PREFERENCES};
pub use tryon_dialog::TryOnDialog;
