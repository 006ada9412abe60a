//! Parsed user intents.
//!
//! Button presses arrive from the transport as short payload strings and slash
//! commands arrive as message text. Both are parsed here, once, at the
//! transport boundary; everything past this module works with the typed
//! [`Action`] and [`Command`] enums and matches over them exhaustively, so an
//! unrecognized payload is a parse-time error rather than a runtime
//! string-prefix fallthrough.
//!
//! # Wire shapes
//!
//! ```text
//! menu             - back to the category list
//! cat:<key>        - open a category
//! item:<id>        - open an item card
//! add:<id>         - add an item to the cart
//! cart:view        - open the cart
//! cart:clear       - empty the cart
//! cart:checkout    - place the order
//! ```

use crate::types::{CategoryKey, ItemId, KeyError};

/// Errors that can occur when parsing a button payload.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    /// The payload string is empty.
    #[error("payload cannot be empty")]
    Empty,
    /// The payload does not match any documented shape.
    #[error("unrecognized payload shape: {0:?}")]
    UnknownShape(String),
    /// The payload argument is not a valid key.
    #[error("invalid key in payload: {0}")]
    InvalidKey(#[from] KeyError),
}

/// Errors that can occur when parsing a slash command.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// The message text does not start with `/`.
    #[error("not a command")]
    NotACommand,
    /// The command name is not one the shop understands.
    #[error("unknown command: {0}")]
    Unknown(String),
}

/// A parsed button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Return to the category list.
    OpenMenu,
    /// Open the item list of a category.
    SelectCategory(CategoryKey),
    /// Open a single item card.
    ViewItem(ItemId),
    /// Add one unit of an item to the cart.
    AddToCart(ItemId),
    /// Open the cart.
    ViewCart,
    /// Remove everything from the cart.
    ClearCart,
    /// Place the order.
    Checkout,
}

impl Action {
    /// Parse a button payload into an action.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionParseError`] if the payload is empty, has an
    /// unrecognized shape, or carries an invalid key argument.
    pub fn parse(payload: &str) -> Result<Self, ActionParseError> {
        if payload.is_empty() {
            return Err(ActionParseError::Empty);
        }
        if payload == "menu" {
            return Ok(Self::OpenMenu);
        }
        let Some((prefix, arg)) = payload.split_once(':') else {
            return Err(ActionParseError::UnknownShape(payload.to_owned()));
        };
        match prefix {
            "cat" => Ok(Self::SelectCategory(CategoryKey::parse(arg)?)),
            "item" => Ok(Self::ViewItem(ItemId::parse(arg)?)),
            "add" => Ok(Self::AddToCart(ItemId::parse(arg)?)),
            "cart" => match arg {
                "view" => Ok(Self::ViewCart),
                "clear" => Ok(Self::ClearCart),
                "checkout" => Ok(Self::Checkout),
                _ => Err(ActionParseError::UnknownShape(payload.to_owned())),
            },
            _ => Err(ActionParseError::UnknownShape(payload.to_owned())),
        }
    }

    /// Encode the action back into its button payload.
    ///
    /// This is the inverse of [`Action::parse`]; the renderer uses it to label
    /// buttons, so every payload the shop emits is guaranteed to parse.
    #[must_use]
    pub fn payload(&self) -> String {
        match self {
            Self::OpenMenu => "menu".to_owned(),
            Self::SelectCategory(key) => format!("cat:{key}"),
            Self::ViewItem(id) => format!("item:{id}"),
            Self::AddToCart(id) => format!("add:{id}"),
            Self::ViewCart => "cart:view".to_owned(),
            Self::ClearCart => "cart:clear".to_owned(),
            Self::Checkout => "cart:checkout".to_owned(),
        }
    }
}

/// A parsed top-level slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` - first contact, greet and show the menu.
    Start,
    /// `/help` - static capability summary.
    Help,
    /// `/menu` - show the category list.
    Menu,
    /// `/cart` - show the cart.
    Cart,
}

impl Command {
    /// Parse message text into a command.
    ///
    /// Tolerates a `@botname` suffix on the command token and ignores any
    /// trailing arguments, matching how chat transports deliver commands in
    /// group conversations.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError::NotACommand`] for plain text and
    /// [`CommandParseError::Unknown`] for commands the shop does not handle.
    pub fn parse(text: &str) -> Result<Self, CommandParseError> {
        let trimmed = text.trim();
        if !trimmed.starts_with('/') {
            return Err(CommandParseError::NotACommand);
        }
        let token = trimmed.split_whitespace().next().unwrap_or(trimmed);
        let name = token.split('@').next().unwrap_or(token);
        match name {
            "/start" => Ok(Self::Start),
            "/help" => Ok(Self::Help),
            "/menu" => Ok(Self::Menu),
            "/cart" => Ok(Self::Cart),
            _ => Err(CommandParseError::Unknown(name.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu() {
        assert_eq!(Action::parse("menu").unwrap(), Action::OpenMenu);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(
            Action::parse("cat:chocolate").unwrap(),
            Action::SelectCategory(CategoryKey::parse("chocolate").unwrap())
        );
    }

    #[test]
    fn test_parse_item_and_add() {
        assert_eq!(
            Action::parse("item:dark_truffle").unwrap(),
            Action::ViewItem(ItemId::parse("dark_truffle").unwrap())
        );
        assert_eq!(
            Action::parse("add:dark_truffle").unwrap(),
            Action::AddToCart(ItemId::parse("dark_truffle").unwrap())
        );
    }

    #[test]
    fn test_parse_cart_actions() {
        assert_eq!(Action::parse("cart:view").unwrap(), Action::ViewCart);
        assert_eq!(Action::parse("cart:clear").unwrap(), Action::ClearCart);
        assert_eq!(Action::parse("cart:checkout").unwrap(), Action::Checkout);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Action::parse(""), Err(ActionParseError::Empty));
    }

    #[test]
    fn test_parse_unknown_shapes() {
        assert!(matches!(
            Action::parse("nonsense"),
            Err(ActionParseError::UnknownShape(_))
        ));
        assert!(matches!(
            Action::parse("cart:explode"),
            Err(ActionParseError::UnknownShape(_))
        ));
        assert!(matches!(
            Action::parse("buy:milk_chocolate"),
            Err(ActionParseError::UnknownShape(_))
        ));
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(matches!(
            Action::parse("cat:"),
            Err(ActionParseError::InvalidKey(KeyError::Empty))
        ));
        assert!(matches!(
            Action::parse("item:Шоколад"),
            Err(ActionParseError::InvalidKey(KeyError::InvalidChar { .. }))
        ));
    }

    #[test]
    fn test_payload_roundtrip() {
        let actions = [
            Action::OpenMenu,
            Action::SelectCategory(CategoryKey::parse("caramel").unwrap()),
            Action::ViewItem(ItemId::parse("salted_caramel").unwrap()),
            Action::AddToCart(ItemId::parse("salted_caramel").unwrap()),
            Action::ViewCart,
            Action::ClearCart,
            Action::Checkout,
        ];
        for action in actions {
            assert_eq!(Action::parse(&action.payload()).unwrap(), action);
        }
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("/start").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help").unwrap(), Command::Help);
        assert_eq!(Command::parse("/menu").unwrap(), Command::Menu);
        assert_eq!(Command::parse("/cart").unwrap(), Command::Cart);
    }

    #[test]
    fn test_command_parse_with_bot_suffix_and_args() {
        assert_eq!(Command::parse("/menu@bonbon_bot").unwrap(), Command::Menu);
        assert_eq!(Command::parse("/start deep-link-arg").unwrap(), Command::Start);
        assert_eq!(Command::parse("  /cart  ").unwrap(), Command::Cart);
    }

    #[test]
    fn test_command_parse_plain_text() {
        assert_eq!(
            Command::parse("хочу конфет"),
            Err(CommandParseError::NotACommand)
        );
    }

    #[test]
    fn test_command_parse_unknown() {
        assert_eq!(
            Command::parse("/order"),
            Err(CommandParseError::Unknown("/order".to_owned()))
        );
    }
}
