/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    SearchBySurname,
    SearchByPhone,
    SearchByBirthdate,
    ListAll,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::Delete,
        MenuChoice::SearchBySurname,
        MenuChoice::SearchByPhone,
        MenuChoice::SearchByBirthdate,
        MenuChoice::ListAll,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Delete => 2,
            MenuChoice::SearchBySurname => 3,
            MenuChoice::SearchByPhone => 4,
            MenuChoice::SearchByBirthdate => 5,
            MenuChoice::ListAll => 6,
            MenuChoice::Exit => 0,
        }
    }

    pub fn from_number(n: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| i64::from(choice.number()) == n)
    }

    /// Parses a menu token. Non-numeric tokens and out-of-range numbers
    /// yield `None` and are reported as an invalid choice.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse::<i64>().ok().and_then(Self::from_number)
    }
}
