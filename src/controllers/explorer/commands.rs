use crate::core::navigation::NavigationCommand;

/// Everything the input side can ask of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerCommand {
    Navigate(NavigationCommand),
    /// Write the current escape data to a new file.
    Export,
    Quit,
}

impl From<NavigationCommand> for ExplorerCommand {
    fn from(command: NavigationCommand) -> Self {
        Self::Navigate(command)
    }
}
