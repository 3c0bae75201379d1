// SPDX-License-Identifier: MPL-2.0
//! Section enumeration for storefront navigation.

/// Top-level sections the visitor can switch between.
///
/// Exactly one section is presented at a time; any section is reachable
/// from any other and there is no history or back-stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Portfolio,
    Contact,
}

impl Section {
    /// All sections in navbar display order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Localization key for the nav label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Services => "nav-services",
            Section::Portfolio => "nav-portfolio",
            Section::Contact => "nav-contact",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn all_lists_each_section_once() {
        for section in Section::ALL {
            assert_eq!(
                Section::ALL.iter().filter(|s| **s == section).count(),
                1
            );
        }
    }
}
