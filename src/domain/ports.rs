use crate::domain::model::Record;
use crate::utils::error::Result;

/// Multi-keyed record collection. Keys are surnames and may repeat.
///
/// Iteration order for `search_by_phone`, `search_by_birthdate` and
/// `list_all` is key order, then insertion order within a key.
pub trait RecordStore {
    /// Validates and appends a record under `surname`.
    fn add(&mut self, surname: &str, birthdate: &str, phone: &str) -> Result<()>;

    /// Removes every record under `surname`, returning how many went.
    fn delete(&mut self, surname: &str) -> Result<usize>;

    fn search_by_surname(&self, surname: &str) -> Result<&[Record]>;

    /// First match only.
    fn search_by_phone(&self, phone: &str) -> Result<&Record>;

    /// First match only, exact string comparison.
    fn search_by_birthdate(&self, birthdate: &str) -> Result<&Record>;

    fn list_all(&self) -> Result<Vec<&Record>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
