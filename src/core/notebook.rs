use crate::core::{Record, RecordStore};
use crate::utils::error::{NotebookError, Result};
use crate::utils::validation::{validate_birthdate, validate_required_field};
use std::collections::BTreeMap;

/// In-memory address book: surname -> records in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Notebook {
    records: BTreeMap<String, Vec<Record>>,
    count: usize,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values().flatten()
    }

    fn not_found(query: &str) -> NotebookError {
        NotebookError::NotFound {
            query: query.to_string(),
        }
    }
}

impl RecordStore for Notebook {
    fn add(&mut self, surname: &str, birthdate: &str, phone: &str) -> Result<()> {
        validate_required_field("surname", surname)?;
        validate_required_field("birthdate", birthdate)?;
        validate_required_field("phone", phone)?;
        validate_birthdate(birthdate)?;

        self.records
            .entry(surname.to_string())
            .or_default()
            .push(Record::new(surname, birthdate, phone));
        self.count += 1;

        tracing::info!("Added record for '{}' ({} total)", surname, self.count);
        Ok(())
    }

    fn delete(&mut self, surname: &str) -> Result<usize> {
        let removed = self
            .records
            .remove(surname)
            .ok_or_else(|| Self::not_found(surname))?;
        self.count -= removed.len();

        tracing::info!(
            "Deleted {} record(s) for '{}' ({} left)",
            removed.len(),
            surname,
            self.count
        );
        Ok(removed.len())
    }

    fn search_by_surname(&self, surname: &str) -> Result<&[Record]> {
        self.records
            .get(surname)
            .map(Vec::as_slice)
            .ok_or_else(|| Self::not_found(surname))
    }

    fn search_by_phone(&self, phone: &str) -> Result<&Record> {
        self.iter()
            .find(|record| record.phone == phone)
            .ok_or_else(|| Self::not_found(phone))
    }

    fn search_by_birthdate(&self, birthdate: &str) -> Result<&Record> {
        self.iter()
            .find(|record| record.birthdate == birthdate)
            .ok_or_else(|| Self::not_found(birthdate))
    }

    fn list_all(&self) -> Result<Vec<&Record>> {
        if self.count == 0 {
            return Err(NotebookError::EmptyStore);
        }
        Ok(self.iter().collect())
    }

    fn len(&self) -> usize {
        self.count
    }
}
