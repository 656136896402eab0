//! Editor form fields
//!
//! Title, amount and date inputs plus field focus. Category selection lives
//! on [`super::ItemEditor`] since it drives the tab state.

use chrono::{Local, NaiveDate};

use crate::models::{Item, ItemDraft, Money};
use crate::tui::widgets::input::TextInput;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which part of the editor has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    Tabs,
    #[default]
    Category,
    Title,
    Amount,
    Date,
}

impl EditorField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Tabs => Self::Category,
            Self::Category => Self::Title,
            Self::Title => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Tabs,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Tabs => Self::Date,
            Self::Category => Self::Tabs,
            Self::Title => Self::Category,
            Self::Amount => Self::Title,
            Self::Date => Self::Amount,
        }
    }

    /// Whether the field is a text input
    pub fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Amount | Self::Date)
    }
}

/// Text inputs of the item editor
#[derive(Debug, Clone)]
pub struct ItemForm {
    pub focused_field: EditorField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    pub date_input: TextInput,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemForm {
    /// Empty form dated today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut form = Self {
            focused_field: EditorField::default(),
            title_input: TextInput::new()
                .label("Title")
                .placeholder("What was it?"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format(DATE_FORMAT).to_string()),
        };
        form.update_focus();
        form
    }

    /// Form prefilled from an existing item
    pub fn from_item(item: &Item) -> Self {
        let mut form = Self::new();
        form.title_input = TextInput::new().label("Title").content(&item.title);
        form.amount_input = TextInput::new()
            .label("Amount")
            .content(item.amount.to_decimal_string());
        form.date_input = TextInput::new()
            .label("Date")
            .content(item.date.format(DATE_FORMAT).to_string());
        form.update_focus();
        form
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    pub fn set_focus(&mut self, field: EditorField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.title_input.focused = self.focused_field == EditorField::Title;
        self.amount_input.focused = self.focused_field == EditorField::Amount;
        self.date_input.focused = self.focused_field == EditorField::Date;
    }

    /// The focused text input, if a text field has focus
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EditorField::Title => Some(&mut self.title_input),
            EditorField::Amount => Some(&mut self.amount_input),
            EditorField::Date => Some(&mut self.date_input),
            EditorField::Tabs | EditorField::Category => None,
        }
    }

    /// Validate the inputs and build a draft
    pub fn build(&self) -> Result<ItemDraft, String> {
        let title = self.title_input.value().trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }

        let amount = Money::parse(self.amount_input.value())
            .map_err(|_| "Invalid amount. Use a number like 12.50".to_string())?;
        if !amount.is_positive() {
            return Err("Amount must be greater than zero".to_string());
        }

        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), DATE_FORMAT)
            .map_err(|_| "Invalid date format. Use YYYY-MM-DD".to_string())?;

        let draft = ItemDraft {
            title: title.to_string(),
            amount,
            date,
        };
        draft.validate().map_err(|e| e.to_string())?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    fn filled(title: &str, amount: &str, date: &str) -> ItemForm {
        let mut form = ItemForm::new();
        form.title_input = TextInput::new().content(title);
        form.amount_input = TextInput::new().content(amount);
        form.date_input = TextInput::new().content(date);
        form
    }

    #[test]
    fn test_build_valid_draft() {
        let draft = filled(" Lunch ", "12.5", "2024-03-01").build().unwrap();
        assert_eq!(draft.title, "Lunch");
        assert_eq!(draft.amount.cents(), 1250);
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_build_rejects_bad_fields() {
        assert!(filled("", "1", "2024-03-01").build().is_err());
        assert!(filled("Lunch", "abc", "2024-03-01").build().is_err());
        assert!(filled("Lunch", "0", "2024-03-01").build().is_err());
        assert!(filled("Lunch", "-4", "2024-03-01").build().is_err());
        assert!(filled("Lunch", "4", "03/01/2024").build().is_err());
    }

    #[test]
    fn test_build_rejects_out_of_range_amount() {
        assert_eq!(
            filled("Lunch", "99999999999999999", "2024-03-01").build(),
            Err("Invalid amount. Use a number like 12.50".to_string())
        );
        assert!(filled("Lunch", "abc12", "2024-03-01").build().is_err());
    }

    #[test]
    fn test_from_item_prefills() {
        let item = Item::new(
            ItemDraft {
                title: "Rent".into(),
                amount: Money::from_cents(95000),
                date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            },
            CategoryId::new(),
        );
        let form = ItemForm::from_item(&item);
        assert_eq!(form.title_input.value(), "Rent");
        assert_eq!(form.amount_input.value(), "950.00");
        assert_eq!(form.date_input.value(), "2024-02-01");
        assert_eq!(form.build().unwrap(), ItemDraft::from(&item));
    }

    #[test]
    fn test_focus_cycles() {
        let mut form = ItemForm::new();
        assert_eq!(form.focused_field, EditorField::Category);
        assert!(form.focused_input().is_none());
        form.next_field();
        assert!(form.title_input.focused);
        form.prev_field();
        form.prev_field();
        assert_eq!(form.focused_field, EditorField::Tabs);
        form.prev_field();
        assert_eq!(form.focused_field, EditorField::Date);
    }
}
