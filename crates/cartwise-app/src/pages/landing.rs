use crate::components::FloatingBubble;
use crate::context::AppContext;

pub const HEADLINE: &str = "Welcome to Agentic Commerce";
pub const TAGLINE: &str =
    "Click the floating bubble to start your AI-powered shopping experience.";

#[derive(Debug)]
pub struct LandingPage {
    bubble: FloatingBubble,
}

impl LandingPage {
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            bubble: FloatingBubble::new(ctx),
        }
    }

    #[must_use]
    pub fn bubble(&self) -> &FloatingBubble {
        &self.bubble
    }

    pub fn bubble_mut(&mut self) -> &mut FloatingBubble {
        &mut self.bubble
    }
}
