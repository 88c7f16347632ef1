use crate::components::search_sidebar::SearchSidebar;
use crate::context::AppContext;
use crate::nav::Route;

/// The launcher in the corner of the landing page. Opening it mounts the
/// search sidebar.
#[derive(Debug)]
pub struct FloatingBubble {
    open: bool,
    sidebar: SearchSidebar,
}

impl FloatingBubble {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            open: false,
            sidebar: SearchSidebar::new(ctx),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub async fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.sidebar.mount().await;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn sidebar(&self) -> &SearchSidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut SearchSidebar {
        &mut self.sidebar
    }

    /// Runs the sidebar search, closes the panel and routes to the cart.
    pub async fn start_shopping(&mut self) -> Route {
        let route = self.sidebar.start_shopping().await;
        self.close();
        route
    }
}
