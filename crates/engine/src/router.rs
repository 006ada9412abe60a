//! The action router.
//!
//! A state machine over navigation targets, long-lived per session: every
//! incoming action or command is matched exhaustively, the session's cart and
//! current screen are updated under the session lock, and a
//! [`RenderInstruction`] goes back to the transport. All user-facing error
//! conditions are absorbed here and become rendered screens or transient
//! notices; nothing propagates an error out of a dispatch.

use bonbon_core::{Action, Command, NavigationTarget, Notice, RenderInstruction, SessionId};

use crate::catalogue::Catalogue;
use crate::render;
use crate::sessions::{SessionState, SessionStore};

/// The conversational storefront core: catalogue + sessions + routing.
#[derive(Debug, Default)]
pub struct ShopEngine {
    catalogue: Catalogue,
    sessions: SessionStore,
}

impl ShopEngine {
    /// Create an engine over a catalogue.
    #[must_use]
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            catalogue,
            sessions: SessionStore::new(),
        }
    }

    /// Create an engine over the built-in sweets assortment.
    #[must_use]
    pub fn sweet_shop() -> Self {
        Self::new(Catalogue::sweet_shop())
    }

    /// The catalogue this engine serves.
    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The per-session state store.
    #[must_use]
    pub const fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Dispatch a button press.
    ///
    /// The whole read-decide-mutate-render sequence runs under the session's
    /// lock, so same-session actions never interleave.
    pub fn handle_action(&self, session: SessionId, action: &Action) -> RenderInstruction {
        tracing::debug!(%session, ?action, "dispatching action");
        self.sessions
            .with_state(session, |state| self.apply(session, state, action))
    }

    /// Dispatch a top-level command.
    ///
    /// `user_name` personalizes the `/start` greeting when the transport
    /// supplies a display name; it is ignored by every other command.
    pub fn handle_command(
        &self,
        session: SessionId,
        command: &Command,
        user_name: Option<&str>,
    ) -> RenderInstruction {
        tracing::debug!(%session, ?command, "dispatching command");
        self.sessions.with_state(session, |state| match command {
            Command::Start => {
                state.screen = NavigationTarget::Categories;
                RenderInstruction::screen(render::greeting(&self.catalogue, user_name))
            }
            Command::Menu => {
                state.screen = NavigationTarget::Categories;
                RenderInstruction::screen(render::categories(&self.catalogue))
            }
            Command::Cart => {
                state.screen = NavigationTarget::Cart;
                RenderInstruction::screen(render::cart(&self.catalogue, &state.cart))
            }
            // Help is informational only; the navigation target is untouched.
            Command::Help => RenderInstruction::screen(render::help()),
        })
    }

    /// Respond to command text that parsed to nothing the shop understands.
    ///
    /// No state is touched.
    #[must_use]
    pub fn unknown_command(&self, session: SessionId, text: &str) -> RenderInstruction {
        tracing::debug!(%session, text, "unrecognized command");
        RenderInstruction::notice(Notice::UnknownCommand)
    }

    /// Respond to a button payload that parsed to no known action.
    ///
    /// No state is touched.
    #[must_use]
    pub fn unknown_action(&self, session: SessionId, payload: &str) -> RenderInstruction {
        tracing::debug!(%session, payload, "unrecognized payload");
        RenderInstruction::notice(Notice::UnknownAction)
    }

    fn apply(
        &self,
        session: SessionId,
        state: &mut SessionState,
        action: &Action,
    ) -> RenderInstruction {
        match action {
            Action::OpenMenu => {
                state.screen = NavigationTarget::Categories;
                RenderInstruction::screen(render::categories(&self.catalogue))
            }
            Action::SelectCategory(key) => {
                // Unknown and empty categories render the same back-only
                // screen; the target still moves so the session can navigate
                // back out.
                state.screen = NavigationTarget::Items(key.clone());
                RenderInstruction::screen(render::items(&self.catalogue, key))
            }
            Action::ViewItem(id) => match self.catalogue.find_item(id) {
                Some(item) => {
                    state.screen = NavigationTarget::Item(id.clone());
                    RenderInstruction::screen(render::item(item))
                }
                None => RenderInstruction::notice(Notice::ItemNotFound),
            },
            Action::AddToCart(id) => match self.catalogue.find_item(id) {
                Some(item) => {
                    state.cart.add(id);
                    state.screen = NavigationTarget::Item(id.clone());
                    RenderInstruction::screen_with_notice(render::item(item), Notice::AddedToCart)
                }
                None => RenderInstruction::notice(Notice::ItemNotFound),
            },
            Action::ViewCart => {
                state.screen = NavigationTarget::Cart;
                RenderInstruction::screen(render::cart(&self.catalogue, &state.cart))
            }
            Action::ClearCart => {
                state.cart.clear();
                state.screen = NavigationTarget::Cart;
                RenderInstruction::screen(render::cart(&self.catalogue, &state.cart))
            }
            Action::Checkout => {
                if state.cart.is_empty() {
                    return RenderInstruction::notice(Notice::CartEmpty);
                }
                tracing::info!(%session, lines = state.cart.line_count(), "order placed");
                state.cart.clear();
                state.screen = NavigationTarget::OrderPlaced;
                RenderInstruction::screen(render::order_placed(&self.catalogue))
            }
        }
    }
}
