//! # Menus
//!
//! Static menu definitions. Every screen has a fixed, ordered list of
//! items that is decided at compile time and never edited at runtime.
//!
//! Items carry an explicit [`MenuItem`] identifier, so transitions never
//! depend on the label text.

/// One distinct menu level in the navigation hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    SubMenu,
}

impl Screen {
    /// Header shown above the list for this screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::MainMenu => "CozyCode",
            Screen::SubMenu => "Sub Menu",
        }
    }

    /// The ordered items loaded into the list when this screen is active.
    pub fn items(self) -> Vec<Item> {
        let ids: &[MenuItem] = match self {
            Screen::MainMenu => &[MenuItem::StartCoding, MenuItem::AddApiKeys, MenuItem::Exit],
            Screen::SubMenu => &[MenuItem::GroqLlm],
        };
        ids.iter().copied().map(Item::new).collect()
    }
}

/// Identifier of every selectable entry the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    StartCoding,
    AddApiKeys,
    Exit,
    GroqLlm,
    /// Returns to the main menu. No screen lists it yet.
    Back,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::StartCoding => "Start prompting and building (Coding)",
            MenuItem::AddApiKeys => "Add API keys for new agents (LLMs)",
            MenuItem::Exit => "Exit (See ya)",
            MenuItem::GroqLlm => "Groq LLM",
            MenuItem::Back => "Back",
        }
    }
}

/// An immutable selectable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: MenuItem,
}

impl Item {
    pub fn new(id: MenuItem) -> Self {
        Self { id }
    }

    pub fn title(&self) -> &'static str {
        self.id.label()
    }

    /// Always empty: menu entries carry no secondary text.
    pub fn description(&self) -> &'static str {
        ""
    }

    pub fn filter_value(&self) -> &'static str {
        self.id.label()
    }
}
