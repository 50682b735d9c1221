/// Menu command table
///
/// Printed in `ALL` order before each prompt. The catalog never sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddBook,
    RemoveBook,
    SearchBooks,
    ListBooks,
    ChangeStatus,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::AddBook,
        MenuCommand::RemoveBook,
        MenuCommand::SearchBooks,
        MenuCommand::ListBooks,
        MenuCommand::ChangeStatus,
        MenuCommand::Exit,
    ];

    /// Number the user types to pick this command
    pub fn number(self) -> u8 {
        match self {
            MenuCommand::AddBook => 1,
            MenuCommand::RemoveBook => 2,
            MenuCommand::SearchBooks => 3,
            MenuCommand::ListBooks => 4,
            MenuCommand::ChangeStatus => 5,
            MenuCommand::Exit => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddBook => "Add book",
            MenuCommand::RemoveBook => "Remove book",
            MenuCommand::SearchBooks => "Search books",
            MenuCommand::ListBooks => "List all books",
            MenuCommand::ChangeStatus => "Change book status",
            MenuCommand::Exit => "Exit",
        }
    }
}

impl std::str::FromStr for MenuCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        MenuCommand::ALL
            .into_iter()
            .find(|command| choice.parse::<u8>().ok() == Some(command.number()))
            .ok_or_else(|| format!("Invalid choice: {}", choice))
    }
}
