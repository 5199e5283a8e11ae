//! Column names of the legacy inventory export and the transformed table.

pub const NAME: &str = "Наименование";
pub const INVENTORY_NUMBER: &str = "Инвентарный номер";
pub const PERSON_AND_PLACE: &str = "МОЛ/Место хранения";
pub const LOCATION: &str = "Местонахождение";
pub const CARD_DATE: &str = "Дата инвентарной карточки";
pub const GROUP_ACCOUNTING: &str = "Групповой учет";
pub const CODE: &str = "Код";
pub const CONDITION: &str = "Состояние";
pub const ACCOUNTING_ACCOUNT: &str = "Счет учета";
pub const KFO: &str = "КФО";
pub const KPS: &str = "КПС";
pub const PROPERTY_TYPE: &str = "Вид имущества";
pub const DEPARTMENT: &str = "Подразделение";
pub const CARD_NUMBER: &str = "Номер инвентарной карточки";
pub const LINK: &str = "Ссылка";

pub const MOL: &str = "МОЛ";
pub const STORAGE_PLACE: &str = "Место хранения";
pub const RESPONSIBLE_PERSON: &str = "Ответственное лицо";
pub const NOTE: &str = "Заметка";

/// Delimiter inside the "МОЛ/Место хранения" column.
pub const COMPOSITE_DELIMITER: &str = " - ";

pub const OLD_TABLE_STRUCTURE: [&str; 15] = [
    NAME,
    INVENTORY_NUMBER,
    PERSON_AND_PLACE,
    LOCATION,
    CARD_DATE,
    GROUP_ACCOUNTING,
    CODE,
    CONDITION,
    ACCOUNTING_ACCOUNT,
    KFO,
    KPS,
    PROPERTY_TYPE,
    DEPARTMENT,
    CARD_NUMBER,
    LINK,
];

pub const NEW_TABLE_STRUCTURE: [&str; 17] = [
    NAME,
    INVENTORY_NUMBER,
    MOL,
    STORAGE_PLACE,
    LOCATION,
    RESPONSIBLE_PERSON,
    CARD_DATE,
    GROUP_ACCOUNTING,
    CODE,
    CONDITION,
    ACCOUNTING_ACCOUNT,
    KFO,
    KPS,
    PROPERTY_TYPE,
    DEPARTMENT,
    CARD_NUMBER,
    NOTE,
];
