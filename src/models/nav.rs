//! Sidebar navigation entries.

/// A static sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown next to the icon.
    pub name: &'static str,
    /// Icon asset path.
    pub icon: &'static str,
    /// Location path the link navigates to.
    pub href: &'static str,
}

impl NavItem {
    pub const fn new(name: &'static str, icon: &'static str, href: &'static str) -> Self {
        Self { name, icon, href }
    }
}
