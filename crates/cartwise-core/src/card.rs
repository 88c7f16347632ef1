//! Payment card display helpers for the checkout form.
//!
//! Nothing here validates a card; the checkout is demo-only. These functions
//! format what the user typed and pick the brand label for the card preview.

use std::fmt;

const MAX_CARD_DIGITS: usize = 16;
const MAX_EXPIRY_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Visa => write!(f, "Visa"),
            CardType::Mastercard => write!(f, "Mastercard"),
            CardType::Amex => write!(f, "Amex"),
            CardType::Discover => write!(f, "Discover"),
        }
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn prefix(digits: &str, len: usize) -> &str {
    &digits[..digits.len().min(len)]
}

/// Detects the card brand from the leading digits.
///
/// Ranges are compared as strings against the typed prefix, so a partially
/// typed number is classified as soon as it is unambiguous. Fewer than two
/// digits yields `None`.
#[must_use]
pub fn card_type(card_number: &str) -> Option<CardType> {
    let digits = digits_only(card_number);
    if digits.len() < 2 {
        return None;
    }

    let two = prefix(&digits, 2);
    let three = prefix(&digits, 3);
    let four = prefix(&digits, 4);
    let six = prefix(&digits, 6);

    if digits.starts_with('4') {
        Some(CardType::Visa)
    } else if two == "34" || two == "37" {
        Some(CardType::Amex)
    } else if ("51"..="55").contains(&two) || ("2221"..="2720").contains(&six) {
        Some(CardType::Mastercard)
    } else if four == "6011"
        || two == "65"
        || ("644"..="649").contains(&three)
        || ("622126"..="622925").contains(&six)
    {
        Some(CardType::Discover)
    } else {
        None
    }
}

/// Keeps up to 16 digits and groups them in fours: `"4242 4242 42"`.
#[must_use]
pub fn format_card_number(value: &str) -> String {
    let digits: Vec<char> = digits_only(value)
        .chars()
        .take(MAX_CARD_DIGITS)
        .collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps up to 4 digits and renders `MM / YY` once the month is complete.
#[must_use]
pub fn format_expiry(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(MAX_EXPIRY_DIGITS).collect();
    if digits.len() >= 2 {
        format!("{} / {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// What the card preview shows for the current form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace {
    pub number: String,
    pub holder: String,
    pub expiry: String,
    pub cvc: String,
    pub brand_label: String,
    /// The back of the card faces the user while the CVC is being typed.
    pub flipped: bool,
}

impl CardFace {
    #[must_use]
    pub fn new(number: &str, holder: &str, expiry: &str, cvc: &str, flipped: bool) -> Self {
        let or_placeholder = |value: String, placeholder: &str| {
            if value.is_empty() {
                placeholder.to_string()
            } else {
                value
            }
        };

        Self {
            number: or_placeholder(format_card_number(number), "•••• •••• •••• ••••"),
            holder: or_placeholder(holder.to_string(), "CARDHOLDER NAME"),
            expiry: or_placeholder(format_expiry(expiry), "MM / YY"),
            cvc: or_placeholder(cvc.to_string(), "•••"),
            brand_label: card_type(number).map_or_else(|| "Card".to_string(), |t| t.to_string()),
            flipped,
        }
    }
}
