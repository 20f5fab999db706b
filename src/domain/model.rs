use std::fmt;

/// One address-book entry. Field values are not checked here; stores
/// validate them in `RecordStore::add` before keeping a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub surname: String,
    pub birthdate: String,
    pub phone: String,
}

impl Record {
    pub(crate) fn new(surname: &str, birthdate: &str, phone: &str) -> Self {
        Self {
            surname: surname.to_string(),
            birthdate: birthdate.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surname: {}, Birthdate: {}, Phone: {}",
            self.surname, self.birthdate, self.phone
        )
    }
}
