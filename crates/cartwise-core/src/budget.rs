//! Wallet/budget model and the purchase-decision protocol.
//!
//! The budget service answers a purchase proposal with a free-text message.
//! Two sentinels drive the UI:
//!
//! ```text
//! [BUDGET_EXCEEDED] item='Cart (3 items)' price=200.0 balance=150.0 currency='USD'
//! [WALLET_CONFIRMATION_REQUIRED] item='Cart (3 items)' price=200.0 currency='USD'
//! ```
//!
//! [`PurchaseDecision::from_message`] is the only place that looks at the
//! raw text; everything downstream matches on the enum.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const BUDGET_EXCEEDED: &str = "[BUDGET_EXCEEDED]";
pub const WALLET_CONFIRMATION_REQUIRED: &str = "[WALLET_CONFIRMATION_REQUIRED]";

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"item='([^']*)'").expect("valid item regex"));
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"price=(-?\d+(?:\.\d+)?)").expect("valid price regex"));
static BALANCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"balance=(-?\d+(?:\.\d+)?)").expect("valid balance regex"));
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"currency='([^']*)'").expect("valid currency regex"));

/// Wallet state as reported by the budget service.
///
/// Balance and limit are fetched independently and can go stale; the
/// backend is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub user_id: String,
    pub budget_limit: Option<f64>,
    pub wallet_balance: f64,
    pub currency: String,
}

/// Figures the budget service attached to a proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub item_name: Option<String>,
    pub price: Option<f64>,
    /// Only present on `[BUDGET_EXCEEDED]` responses.
    pub balance: Option<f64>,
    pub currency: Option<String>,
}

/// Outcome of proposing a purchase to the budget service.
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseDecision {
    /// No confirmation needed; go straight to checkout.
    Approved,
    /// Price is above the wallet balance; the user must explicitly accept.
    ExceedsBudget(Quote),
    /// Within budget, but the wallet debit must be confirmed.
    NeedsConfirmation(Quote),
}

impl PurchaseDecision {
    /// Classifies a proposal message. `[BUDGET_EXCEEDED]` wins when both
    /// sentinels are present; a message with neither is `Approved`.
    #[must_use]
    pub fn from_message(message: &str) -> Self {
        if message.contains(BUDGET_EXCEEDED) {
            Self::ExceedsBudget(Quote::parse(message))
        } else if message.contains(WALLET_CONFIRMATION_REQUIRED) {
            Self::NeedsConfirmation(Quote::parse(message))
        } else {
            Self::Approved
        }
    }

    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        !matches!(self, Self::Approved)
    }
}

impl Quote {
    /// The item name is free text echoed by the backend, so the numeric
    /// fields are read from the message with the `item='…'` span removed.
    fn parse(message: &str) -> Self {
        let item_name = ITEM_RE
            .captures(message)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());
        let fields = ITEM_RE.replace(message, "");

        let capture = |re: &Regex| {
            re.captures(&fields)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };
        let number = |re: &Regex| capture(re).and_then(|s| s.parse::<f64>().ok());

        Self {
            item_name,
            price: number(&PRICE_RE),
            balance: number(&BALANCE_RE),
            currency: capture(&CURRENCY_RE).filter(|c| !c.is_empty()),
        }
    }
}

/// Snapshot shown before a wallet debit is confirmed.
///
/// Built fresh for every proposal outcome and dropped when the dialog
/// closes. `after` is always `before - price`; both are `None` when the
/// wallet balance is unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationDialog {
    pub title: String,
    pub message: String,
    pub before: Option<f64>,
    pub price: f64,
    pub after: Option<f64>,
    pub currency: String,
}

impl ConfirmationDialog {
    /// Builds the dialog for a decision that needs confirmation.
    ///
    /// `before` prefers the balance the service quoted, then the last known
    /// wallet balance. `fallback_price` (the cart subtotal) is used when the
    /// message carries no price. Returns `None` for [`PurchaseDecision::Approved`].
    #[must_use]
    pub fn for_decision(
        decision: &PurchaseDecision,
        known_status: Option<&BudgetStatus>,
        fallback_price: f64,
    ) -> Option<Self> {
        let (quote, title) = match decision {
            PurchaseDecision::Approved => return None,
            PurchaseDecision::ExceedsBudget(q) => (q, "Budget exceeded"),
            PurchaseDecision::NeedsConfirmation(q) => (q, "Confirm wallet purchase"),
        };

        let price = quote.price.unwrap_or(fallback_price);
        let before = quote
            .balance
            .or_else(|| known_status.map(|s| s.wallet_balance));
        let currency = quote
            .currency
            .clone()
            .or_else(|| known_status.map(|s| s.currency.clone()))
            .unwrap_or_else(|| "USD".to_string());
        let item = quote.item_name.as_deref().unwrap_or("this purchase");

        let message = match (decision, before) {
            (PurchaseDecision::ExceedsBudget(_), Some(before)) => format!(
                "{item} costs {price:.2} {currency}, more than your wallet balance of {before:.2} {currency}. Continue anyway?"
            ),
            (PurchaseDecision::ExceedsBudget(_), None) => format!(
                "{item} costs {price:.2} {currency}, more than your wallet balance. Continue anyway?"
            ),
            _ => format!("Debit {price:.2} {currency} from your wallet for {item}?"),
        };

        Some(Self {
            title: title.to_string(),
            message,
            before,
            price,
            after: before.map(|b| b - price),
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(balance: f64) -> BudgetStatus {
        BudgetStatus {
            user_id: "demo".into(),
            budget_limit: Some(500.0),
            wallet_balance: balance,
            currency: "USD".into(),
        }
    }

    #[test]
    fn plain_message_is_approved() {
        assert_eq!(
            PurchaseDecision::from_message("Balance: 150.0 USD."),
            PurchaseDecision::Approved
        );
    }

    #[test]
    fn parses_budget_exceeded_quote() {
        let msg = "[BUDGET_EXCEEDED] item='Cart (2 items)' price=200.0 balance=150.0 currency='USD'";
        let PurchaseDecision::ExceedsBudget(quote) = PurchaseDecision::from_message(msg) else {
            panic!("expected ExceedsBudget");
        };
        assert_eq!(quote.item_name.as_deref(), Some("Cart (2 items)"));
        assert_eq!(quote.price, Some(200.0));
        assert_eq!(quote.balance, Some(150.0));
        assert_eq!(quote.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn parses_confirmation_required_without_balance() {
        let msg = "[WALLET_CONFIRMATION_REQUIRED] item='Tee' price=25 currency='EUR'";
        let PurchaseDecision::NeedsConfirmation(quote) = PurchaseDecision::from_message(msg) else {
            panic!("expected NeedsConfirmation");
        };
        assert_eq!(quote.price, Some(25.0));
        assert!(quote.balance.is_none());
    }

    #[test]
    fn exceeded_wins_over_confirmation() {
        let msg = "[WALLET_CONFIRMATION_REQUIRED] [BUDGET_EXCEEDED] price=1";
        assert!(matches!(
            PurchaseDecision::from_message(msg),
            PurchaseDecision::ExceedsBudget(_)
        ));
    }

    #[test]
    fn dialog_balances_before_minus_price() {
        let msg = "[BUDGET_EXCEEDED] item='Cart' price=200.0 balance=150.0 currency='USD'";
        let decision = PurchaseDecision::from_message(msg);
        let dialog = ConfirmationDialog::for_decision(&decision, None, 0.0).unwrap();
        let (before, after) = (dialog.before.unwrap(), dialog.after.unwrap());
        assert!((before - 150.0).abs() < f64::EPSILON);
        assert!((dialog.price - 200.0).abs() < f64::EPSILON);
        assert!((after - -50.0).abs() < f64::EPSILON);
        assert!((before - dialog.price - after).abs() < f64::EPSILON);
    }

    #[test]
    fn dialog_falls_back_to_known_balance_and_subtotal() {
        let decision = PurchaseDecision::from_message("[WALLET_CONFIRMATION_REQUIRED]");
        let dialog = ConfirmationDialog::for_decision(&decision, Some(&status(300.0)), 120.0)
            .unwrap();
        assert!((dialog.before.unwrap() - 300.0).abs() < f64::EPSILON);
        assert!((dialog.price - 120.0).abs() < f64::EPSILON);
        assert!((dialog.after.unwrap() - 180.0).abs() < f64::EPSILON);
        assert_eq!(dialog.currency, "USD");
    }

    #[test]
    fn item_name_cannot_shadow_quoted_figures() {
        let msg = "[BUDGET_EXCEEDED] item='Gift price=5 balance=9 card' price=200.0 balance=150.0 currency='USD'";
        let PurchaseDecision::ExceedsBudget(quote) = PurchaseDecision::from_message(msg) else {
            panic!("expected ExceedsBudget");
        };
        assert_eq!(quote.item_name.as_deref(), Some("Gift price=5 balance=9 card"));
        assert_eq!(quote.price, Some(200.0));
        assert_eq!(quote.balance, Some(150.0));
    }

    #[test]
    fn unknown_balance_leaves_before_and_after_empty() {
        let msg = "[WALLET_CONFIRMATION_REQUIRED] item='Cart' price=150.0 currency='USD'";
        let decision = PurchaseDecision::from_message(msg);
        let dialog = ConfirmationDialog::for_decision(&decision, None, 0.0).unwrap();
        assert!((dialog.price - 150.0).abs() < f64::EPSILON);
        assert!(dialog.before.is_none());
        assert!(dialog.after.is_none());
    }

    #[test]
    fn only_approved_skips_confirmation() {
        assert!(!PurchaseDecision::Approved.requires_confirmation());
        assert!(PurchaseDecision::from_message("[BUDGET_EXCEEDED]").requires_confirmation());
        assert!(
            PurchaseDecision::from_message("[WALLET_CONFIRMATION_REQUIRED]").requires_confirmation()
        );
    }

    #[test]
    fn approved_has_no_dialog() {
        assert!(ConfirmationDialog::for_decision(&PurchaseDecision::Approved, None, 1.0).is_none());
    }
}
