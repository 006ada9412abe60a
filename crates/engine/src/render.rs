//! Pure screen construction.
//!
//! One function per navigation target, each mapping (catalogue, cart,
//! target) to a [`Screen`]. Nothing here mutates state; the router owns all
//! side effects.

use bonbon_core::{Action, Button, CategoryKey, Keyboard, Price, Screen};

use crate::cart::Cart;
use crate::catalogue::{Catalogue, Item};

/// The category list.
#[must_use]
pub fn categories(catalogue: &Catalogue) -> Screen {
    Screen::new("Выбирайте сладости:".to_owned(), categories_keyboard(catalogue))
}

/// The `/start` greeting, personalized when the transport supplies a name.
#[must_use]
pub fn greeting(catalogue: &Catalogue, user_name: Option<&str>) -> Screen {
    let name = user_name.unwrap_or("гость");
    let text = format!(
        "Привет, {name}! 👋\n\
         Добро пожаловать в Bonbon — наш уютный магазин сладостей.\n\n\
         Выбирайте категорию, чтобы посмотреть ассортимент, или откройте \
         корзину, чтобы оформить заказ."
    );
    Screen::new(text, categories_keyboard(catalogue))
}

/// The item list of a category.
///
/// An unknown key and an empty category render the same way: no item buttons,
/// just a back button.
#[must_use]
pub fn items(catalogue: &Catalogue, key: &CategoryKey) -> Screen {
    let mut keyboard = Keyboard::none();
    let Some(category) = catalogue.category(key) else {
        keyboard.push_row(vec![back_to_menu()]);
        return Screen::new(
            "Категория не найдена или в ней пока пусто.".to_owned(),
            keyboard,
        );
    };
    for item in &category.items {
        keyboard.push_row(vec![Button::new(
            format!("{} — {}", item.name, item.price),
            &Action::ViewItem(item.id.clone()),
        )]);
    }
    keyboard.push_row(vec![back_to_menu()]);
    Screen::new(format!("Категория: {}", category.title), keyboard)
}

/// A single item card.
#[must_use]
pub fn item(item: &Item) -> Screen {
    let text = format!(
        "{}\nЦена: {}\n\n{}",
        item.name, item.price, item.description
    );
    let mut keyboard = Keyboard::none();
    keyboard.push_row(vec![Button::new(
        "Добавить в корзину",
        &Action::AddToCart(item.id.clone()),
    )]);
    keyboard.push_row(vec![
        Button::new("🛒 Открыть корзину", &Action::ViewCart),
        back_to_menu(),
    ]);
    Screen::new(text, keyboard)
}

/// The cart view.
///
/// Entries whose id no longer resolves in the catalogue are skipped, as are
/// entries observed with a non-positive quantity; both are logged.
#[must_use]
pub fn cart(catalogue: &Catalogue, cart: &Cart) -> Screen {
    if cart.is_empty() {
        let mut keyboard = Keyboard::none();
        keyboard.push_row(vec![back_to_items()]);
        return Screen::new(
            "Ваша корзина пока пуста. Загляните в меню и добавьте что-нибудь вкусное!"
                .to_owned(),
            keyboard,
        );
    }

    let mut lines = vec!["🛒 Ваша корзина:".to_owned()];
    let mut line_totals = Vec::with_capacity(cart.line_count());
    for (id, quantity) in cart.entries() {
        if quantity == 0 {
            tracing::warn!(item = %id, "dropping cart entry with non-positive quantity");
            continue;
        }
        let Some(item) = catalogue.find_item(id) else {
            tracing::warn!(item = %id, "skipping stale cart entry");
            continue;
        };
        let line_total = item.price.times(quantity);
        line_totals.push(line_total);
        lines.push(format!(
            "• {} — {} шт. × {} = {}",
            item.name, quantity, item.price, line_total
        ));
    }
    lines.push(String::new());
    lines.push(format!("Итого к оплате: {}", Price::total(line_totals)));
    lines.push(
        "Для завершения заказа нажмите «Оформить заказ», и наш менеджер свяжется с вами."
            .to_owned(),
    );

    let mut keyboard = Keyboard::none();
    keyboard.push_row(vec![
        Button::new("Очистить", &Action::ClearCart),
        Button::new("Оформить заказ", &Action::Checkout),
    ]);
    keyboard.push_row(vec![back_to_items()]);
    Screen::new(lines.join("\n"), keyboard)
}

/// The post-checkout confirmation; buttons return the user to browsing.
#[must_use]
pub fn order_placed(catalogue: &Catalogue) -> Screen {
    let text = "Спасибо за заказ! 🎉\n\
                Наш менеджер свяжется с вами в ближайшее время для уточнения \
                деталей доставки и оплаты."
        .to_owned();
    Screen::new(text, categories_keyboard(catalogue))
}

/// The `/help` capability summary. Text only, no buttons.
#[must_use]
pub fn help() -> Screen {
    let text = "Я бот-магазин сладостей. Вот что я умею:\n\
                • /menu — показать доступные категории сладостей.\n\
                • /cart — показать вашу корзину.\n\
                • /help — показать это сообщение.\n\n\
                Используйте кнопки под сообщениями, чтобы добавлять товары в \
                корзину и оформлять заказ."
        .to_owned();
    Screen::new(text, Keyboard::none())
}

fn categories_keyboard(catalogue: &Catalogue) -> Keyboard {
    let mut keyboard = Keyboard::none();
    for category in catalogue.categories() {
        keyboard.push_row(vec![Button::new(
            category.title.clone(),
            &Action::SelectCategory(category.key.clone()),
        )]);
    }
    keyboard.push_row(vec![Button::new("🛒 Корзина", &Action::ViewCart)]);
    keyboard
}

fn back_to_menu() -> Button {
    Button::new("⬅️ Назад", &Action::OpenMenu)
}

fn back_to_items() -> Button {
    Button::new("⬅️ К товарам", &Action::OpenMenu)
}
