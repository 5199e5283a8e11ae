//! Fixed instruction sent with every model-backed extraction request.

use inventra_core::ChatMessage;

/// Field the model is asked to pull out of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ResponsiblePerson,
    StoragePlace,
}

impl Field {
    /// Request label as it appears in the worked examples.
    #[must_use]
    pub const fn query(&self) -> &'static str {
        match self {
            Self::ResponsiblePerson => "ответственное лицо",
            Self::StoragePlace => "кабинет",
        }
    }
}

pub const SYSTEM_PROMPT: &str = r#"Ты извлекаешь данные из коротких строк на русском языке, описывающих местонахождение инвентарного объекта. Бери только то, что написано в тексте: ничего не придумывай и не достраивай.

Правила ответа:
1. Выведи только найденный фрагмент текста, который отвечает на запрос.
2. Если подходящего фрагмента нет, выведи Null.
3. Никаких пояснений, комментариев и лишнего текста: ответ читает другая программа.

Примеры:
1. Текст: "к.301 Кравченко А.В. расписка, Невского, ИЛ"
Запрос: "ответственное лицо"
Ответ: Кравченко А.В.
2. Текст: "к.128 Интернет"
Запрос: "кабинет"
Ответ: к.128
3. Текст: "к.209 ИПМИ Кузьменко (399?)"
Запрос: "кабинет"
Ответ: к.209
4. Текст: "к.123 Психдиспансер"
Запрос: "ответственное лицо"
Ответ: Null"#;

/// `[system, user]` conversation for one extraction call.
#[must_use]
pub fn build_messages(text: &str, field: Field) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Текст: \"{text}\"\nЗапрос: \"{}\"",
            field.query()
        )),
    ]
}
