//! Tab commands.

/// @package Tabs
/// @command open_tab
/// @description Opens a tab.
pub fn open_tab() {}

/// @package Tabs
/// @broadcast tab_opened
/// @description Sent when a tab opens. Contact admin@example.com.
pub fn tab_opened<'a>(name: &'a str) -> &'a str {
    name
}
