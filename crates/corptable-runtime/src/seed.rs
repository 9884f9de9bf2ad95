//! Initial record set for the store.

use std::path::Path;

use corptable_engine::validation::validate_draft;
use corptable_types::{Address, CompanyDraft, CompanyId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Result;

/// A company as read from seed data; the id is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    #[serde(flatten)]
    pub company: CompanyDraft,
}

// (company, manager, phone, city, street, house)
const SAMPLE: [(&str, &str, &str, &str, &str, u32); 25] = [
    ("ООО \"Ромашка\"", "Иванов Иван Иванович", "+7 (999) 123-45-67", "Москва", "Ленина", 1),
    ("АО \"Вектор\"", "Петрова Анна Сергеевна", "+7 (912) 345-67-89", "Санкт-Петербург", "Невский проспект", 28),
    ("ООО \"СтройМонтаж\"", "Сидоров Олег Николаевич", "+7 (903) 111-22-33", "Казань", "Баумана", 15),
    ("ИП Кузнецов", "Кузнецов Алексей Петрович", "+7 (916) 222-33-44", "Новосибирск", "Красный проспект", 44),
    ("ООО \"ТехноСервис\"", "Смирнова Елена Викторовна", "+7 (921) 333-44-55", "Екатеринбург", "Малышева", 51),
    ("ЗАО \"Северный ветер\"", "Ёлкин Дмитрий Андреевич", "+7 (911) 444-55-66", "Архангельск", "Троицкий проспект", 7),
    ("ООО \"Альфа Логистик\"", "Морозова Ольга Ивановна", "+7 (925) 555-66-77", "Нижний Новгород", "Большая Покровская", 12),
    ("АО \"Уралмаш-Инвест\"", "Волков Сергей Михайлович", "+7 (343) 666-77-88", "Екатеринбург", "Культуры", 3),
    ("ООО \"Зелёный город\"", "Лебедева Мария Александровна", "+7 (917) 777-88-99", "Самара", "Куйбышева", 90),
    ("ООО \"Балтика Трейд\"", "Козлов Артём Игоревич", "+7 (901) 888-99-00", "Калининград", "Театральная", 30),
    ("ООО \"Сибирские сети\"", "Новикова Татьяна Юрьевна", "+7 (913) 999-00-11", "Омск", "Маркса", 18),
    ("АО \"ВолгаТранс\"", "Иваненко Павел Олегович", "+7 (927) 101-20-30", "Волгоград", "Мира", 5),
    ("ООО \"Медицина плюс\"", "Соколова Ирина Владимировна", "+7 (905) 202-30-40", "Ростов-на-Дону", "Большая Садовая", 71),
    ("ИП Фёдоров", "Фёдоров Николай Степанович", "+7 (914) 303-40-50", "Хабаровск", "Муравьёва-Амурского", 22),
    ("ООО \"Кедр\"", "Михайлов Андрей Васильевич", "+7 (923) 404-50-60", "Томск", "Ленина", 96),
    ("ООО \"Профиль\"", "Андреева Светлана Павловна", "+7 (918) 505-60-70", "Краснодар", "Красная", 109),
    ("АО \"ЭнергоПром\"", "Алексеев Виктор Геннадьевич", "+7 (902) 606-70-80", "Пермь", "Комсомольский проспект", 34),
    ("ООО \"Иваново Текстиль\"", "Белова Наталья Олеговна", "+7 (920) 707-80-90", "Иваново", "Шереметевский проспект", 9),
    ("ООО \"Йошкар-Строй\"", "Яковлев Роман Ильич", "+7 (919) 808-90-01", "Йошкар-Ола", "Советская", 14),
    ("ЗАО \"Полюс\"", "Егорова Людмила Аркадьевна", "+7 (924) 909-01-12", "Якутск", "Ленина", 40),
    ("ООО \"Тверская мануфактура\"", "Иванова Дарья Максимовна", "+7 (904) 010-12-23", "Тверь", "Трёхсвятская", 6),
    ("ООО \"Орион\"", "Григорьев Константин Львович", "+7 (910) 121-23-34", "Воронеж", "Плехановская", 53),
    ("АО \"Арктика\"", "Захарова Валентина Петровна", "+7 (908) 232-34-45", "Мурманск", "Ленина", 82),
    ("ООО \"Южный порт\"", "Павлов Евгений Дмитриевич", "+7 (988) 343-45-56", "Новороссийск", "Советов", 19),
    ("ООО \"Цифровые решения\"", "Орлова Ксения Романовна", "+7 (999) 454-56-67", "Москва", "Тверская", 13),
];

/// Built-in sample data set, ids 1 to 25.
pub fn sample_companies() -> Vec<SeedRecord> {
    SAMPLE
        .iter()
        .zip(1u64..)
        .map(|(&(name, manager, phone, city, street, house), id)| SeedRecord {
            id: Some(CompanyId::new(id)),
            company: CompanyDraft {
                name: name.to_string(),
                manager_name: manager.to_string(),
                phone_number: phone.to_string(),
                address: Address::new(city, street, house),
            },
        })
        .collect()
}

/// Read a JSON array of companies. Records that would not pass the form's
/// validation are kept but logged.
pub fn load_seed(path: &Path) -> Result<Vec<SeedRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<SeedRecord> = serde_json::from_str(&content)?;

    for record in &records {
        let issues = validate_draft(&record.company);
        if !issues.is_empty() {
            let summary = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(id = ?record.id, name = %record.company.name, %summary, "seed record fails validation");
        }
    }

    debug!(path = %path.display(), count = records.len(), "seed loaded");
    Ok(records)
}
