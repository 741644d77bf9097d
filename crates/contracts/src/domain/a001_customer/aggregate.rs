use serde::{Deserialize, Serialize};

/// Клиент студии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    /// Уникален в пределах таблицы
    pub phone: Option<String>,
}

impl Customer {
    /// Имя для отображения в отчётах: "Фамилия Имя"
    pub fn display_name(&self) -> String {
        let surname = self.surname.as_deref().unwrap_or("");
        let name = self.name.as_deref().unwrap_or("");
        format!("{} {}", surname, name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(surname: Option<&str>, name: Option<&str>) -> Customer {
        Customer {
            id: 1,
            surname: surname.map(Into::into),
            name: name.map(Into::into),
            patronymic: Some("Петрович".into()),
            phone: None,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(customer(Some("Иванов"), Some("Пётр")).display_name(), "Иванов Пётр");
        assert_eq!(customer(None, Some("Пётр")).display_name(), "Пётр");
        assert_eq!(customer(Some("Иванов"), None).display_name(), "Иванов");
        assert_eq!(customer(None, None).display_name(), "");
    }
}
