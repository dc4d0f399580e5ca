//! Key hints for each input context.

/// Where keyboard input is currently directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// The dataset is still loading.
    Loading,
    /// The table has focus.
    Table,
    /// The pager has focus.
    Pager,
    /// The load failed.
    Error,
    /// The help overlay is open.
    Help,
}

/// Get the hint line for a context.
///
/// Keys are written in brackets so the help bar can style them.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Loading => "[q] quit",
        KeyContext::Table => {
            "[←/h] previous  [→/l] next  [g/G] first/last  [0-9 Enter] go to page  [Tab] pager  [?] help  [q] quit"
        }
        KeyContext::Pager => "[←/→] select page  [Enter] open  [Tab/Esc] table  [q] quit",
        KeyContext::Error => "[q] quit",
        KeyContext::Help => "[?/Esc] close help",
    }
}
