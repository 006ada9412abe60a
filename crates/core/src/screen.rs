//! Rendered screens and transient notices.
//!
//! A [`Screen`] is what the transport should display: message text plus an
//! ordered grid of buttons. A [`Notice`] is ephemeral feedback (a toast) that
//! never alters the displayed screen or any stored state. The router answers
//! every dispatch with a [`RenderInstruction`] combining the two; a `None`
//! screen means "leave whatever is on display unchanged".

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::types::{CategoryKey, ItemId};

/// A single inline button: visible label plus the action payload sent back
/// when the user presses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Text shown on the button.
    pub label: String,
    /// Encoded action payload (see [`Action::payload`]).
    pub payload: String,
}

impl Button {
    /// Create a button wired to an action.
    #[must_use]
    pub fn new(label: impl Into<String>, action: &Action) -> Self {
        Self {
            label: label.into(),
            payload: action.payload(),
        }
    }
}

/// An ordered grid of buttons; outer vec = rows, inner vec = buttons per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Keyboard {
    /// Button rows, top to bottom.
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// An empty keyboard (text-only screen).
    #[must_use]
    pub const fn none() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a row of buttons.
    pub fn push_row(&mut self, row: Vec<Button>) {
        self.rows.push(row);
    }

    /// Whether the keyboard has no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A fully rendered screen: message text plus button grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Message body, plain text in the shop's fixed locale.
    pub text: String,
    /// Inline buttons under the message.
    pub keyboard: Keyboard,
}

impl Screen {
    /// Create a screen.
    #[must_use]
    pub const fn new(text: String, keyboard: Keyboard) -> Self {
        Self { text, keyboard }
    }
}

/// Ephemeral feedback shown as a toast, distinct from the screen body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// An item was added to the cart.
    AddedToCart,
    /// The requested item does not exist in the catalogue.
    ItemNotFound,
    /// Checkout was attempted with an empty cart.
    CartEmpty,
    /// The button payload did not parse into any known action.
    UnknownAction,
    /// The slash command (or plain text) was not recognized.
    UnknownCommand,
}

impl Notice {
    /// User-facing message for the notice.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::AddedToCart => "Добавлено в корзину",
            Self::ItemNotFound => "Товар не найден",
            Self::CartEmpty => "Корзина пуста",
            Self::UnknownAction => "Неизвестная команда",
            Self::UnknownCommand => {
                "Я пока не знаю такой команды. Используйте /menu, чтобы выбрать сладости."
            }
        }
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// The router's answer to a dispatched action or command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderInstruction {
    /// Screen to display, or `None` to leave the current screen unchanged.
    pub screen: Option<Screen>,
    /// Transient notice to surface alongside.
    pub notice: Option<Notice>,
}

impl RenderInstruction {
    /// Display a new screen, no notice.
    #[must_use]
    pub const fn screen(screen: Screen) -> Self {
        Self {
            screen: Some(screen),
            notice: None,
        }
    }

    /// Keep the current screen, surface a notice.
    #[must_use]
    pub const fn notice(notice: Notice) -> Self {
        Self {
            screen: None,
            notice: Some(notice),
        }
    }

    /// Display a new screen and surface a notice.
    #[must_use]
    pub const fn screen_with_notice(screen: Screen, notice: Notice) -> Self {
        Self {
            screen: Some(screen),
            notice: Some(notice),
        }
    }
}

/// The logical screen a session is currently looking at.
///
/// This is the state the action router transitions between. A fresh session
/// starts at the category list; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavigationTarget {
    /// The category list.
    #[default]
    Categories,
    /// The item list of one category (also covers the unknown-category
    /// rendering, which shows an empty list with a back button).
    Items(CategoryKey),
    /// A single item card.
    Item(ItemId),
    /// The cart view.
    Cart,
    /// The post-checkout confirmation.
    OrderPlaced,
}
