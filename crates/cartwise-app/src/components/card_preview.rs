use cartwise_core::CardFace;

/// Payment form field that currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Number,
    Holder,
    Expiry,
    Cvc,
}

/// Live preview of the card being typed into the payment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPreview {
    focused: Option<FocusedField>,
}

impl CardPreview {
    pub fn focus(&mut self, field: FocusedField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusedField> {
        self.focused
    }

    /// Card face for the given raw input. The card shows its back while the
    /// CVC field has focus.
    #[must_use]
    pub fn face(&self, number: &str, holder: &str, expiry: &str, cvc: &str) -> CardFace {
        CardFace::new(
            number,
            holder,
            expiry,
            cvc,
            self.focused == Some(FocusedField::Cvc),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_only_while_cvc_focused() {
        let mut preview = CardPreview::default();
        preview.focus(FocusedField::Cvc);
        assert!(preview.face("4242", "A", "12/30", "123").flipped);

        preview.focus(FocusedField::Number);
        assert!(!preview.face("4242", "A", "12/30", "123").flipped);

        preview.blur();
        assert!(preview.focused().is_none());
    }
}
