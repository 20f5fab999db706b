use crate::core::menu::MenuChoice;
use crate::core::Record;
use crate::utils::error::NotebookError;
use serde::{Deserialize, Serialize};

/// Fixed console message sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Text the shell prints before each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Choice,
    Surname,
    Birthdate,
    Phone,
    DeleteSurname,
    SearchSurname,
    SearchPhone,
    SearchBirthdate,
}

impl Locale {
    pub fn menu_label(self, choice: MenuChoice) -> &'static str {
        match (self, choice) {
            (Locale::En, MenuChoice::Add) => "Add record",
            (Locale::En, MenuChoice::Delete) => "Delete record",
            (Locale::En, MenuChoice::SearchBySurname) => "Search by surname",
            (Locale::En, MenuChoice::SearchByPhone) => "Search by phone",
            (Locale::En, MenuChoice::SearchByBirthdate) => "Search by birthdate",
            (Locale::En, MenuChoice::ListAll) => "List all records",
            (Locale::En, MenuChoice::Exit) => "Exit",
            (Locale::Ru, MenuChoice::Add) => "Добавить запись",
            (Locale::Ru, MenuChoice::Delete) => "Удалить запись",
            (Locale::Ru, MenuChoice::SearchBySurname) => "Поиск по фамилии",
            (Locale::Ru, MenuChoice::SearchByPhone) => "Поиск по телефону",
            (Locale::Ru, MenuChoice::SearchByBirthdate) => "Поиск по дате рождения",
            (Locale::Ru, MenuChoice::ListAll) => "Показать все записи",
            (Locale::Ru, MenuChoice::Exit) => "Выход",
        }
    }

    pub fn prompt(self, prompt: Prompt) -> &'static str {
        match (self, prompt) {
            (Locale::En, Prompt::Choice) => "Choose an action: ",
            (Locale::En, Prompt::Surname) => "Enter surname: ",
            (Locale::En, Prompt::Birthdate) => "Enter birthdate (DD-MM-YYYY): ",
            (Locale::En, Prompt::Phone) => "Enter phone: ",
            (Locale::En, Prompt::DeleteSurname) => "Enter surname to delete: ",
            (Locale::En, Prompt::SearchSurname) => "Enter surname to search: ",
            (Locale::En, Prompt::SearchPhone) => "Enter phone to search: ",
            (Locale::En, Prompt::SearchBirthdate) => "Enter birthdate to search (DD-MM-YYYY): ",
            (Locale::Ru, Prompt::Choice) => "Выберите действие: ",
            (Locale::Ru, Prompt::Surname) => "Введите фамилию: ",
            (Locale::Ru, Prompt::Birthdate) => "Введите дату рождения (ДД-ММ-ГГГГ): ",
            (Locale::Ru, Prompt::Phone) => "Введите телефон: ",
            (Locale::Ru, Prompt::DeleteSurname) => "Введите фамилию для удаления: ",
            (Locale::Ru, Prompt::SearchSurname) => "Введите фамилию для поиска: ",
            (Locale::Ru, Prompt::SearchPhone) => "Введите телефон для поиска: ",
            (Locale::Ru, Prompt::SearchBirthdate) => {
                "Введите дату рождения для поиска (ДД-ММ-ГГГГ): "
            }
        }
    }

    pub fn invalid_choice(self) -> &'static str {
        match self {
            Locale::En => "Invalid choice. Please try again.",
            Locale::Ru => "Неверный выбор. Пожалуйста, попробуйте снова.",
        }
    }

    pub fn exiting(self) -> &'static str {
        match self {
            Locale::En => "Exiting...",
            Locale::Ru => "Выход...",
        }
    }

    pub fn record_added(self) -> &'static str {
        match self {
            Locale::En => "Record added.",
            Locale::Ru => "Запись добавлена.",
        }
    }

    pub fn records_deleted(self, surname: &str, count: usize) -> String {
        match self {
            Locale::En => format!("Deleted {} record(s) with surname {}.", count, surname),
            Locale::Ru => format!("Запись(и) с фамилией {} удалены: {}.", surname, count),
        }
    }

    pub fn record_line(self, record: &Record) -> String {
        match self {
            Locale::En => record.to_string(),
            Locale::Ru => format!(
                "Фамилия: {}, Дата рождения: {}, Телефон: {}",
                record.surname, record.birthdate, record.phone
            ),
        }
    }

    /// `Error: <message>` line for a failed command.
    pub fn error_line(self, error: &NotebookError) -> String {
        let (marker, message) = match self {
            Locale::En => ("Error", error.to_string()),
            Locale::Ru => {
                let message = match error {
                    NotebookError::EmptyField { .. } => "все поля должны быть заполнены".to_string(),
                    NotebookError::InvalidDateFormat { .. } => {
                        "дата должна быть в формате ДД-ММ-ГГГГ".to_string()
                    }
                    NotebookError::NotFound { .. } => "запись не найдена".to_string(),
                    NotebookError::EmptyStore => "записей нет".to_string(),
                    other => other.to_string(),
                };
                ("Ошибка", message)
            }
        };
        format!("{}: {}", marker, message)
    }
}
