//! TSX and project file templates
//!
//! This module provides:
//! - Screen templates (basic, list, form, detail)
//! - Component templates (presentational, container)
//! - Static files written once by `setup`

use std::fmt;

const NAME_PLACEHOLDER: &str = "{{name}}";

/// Kind of screen to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScreenKind {
    /// Simple screen with title
    #[default]
    Basic,
    /// FlatList with items
    List,
    /// Input form with submission
    Form,
    /// Detail view with data display
    Detail,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 4] = [
        ScreenKind::Basic,
        ScreenKind::List,
        ScreenKind::Form,
        ScreenKind::Detail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenKind::Basic => "basic",
            ScreenKind::List => "list",
            ScreenKind::Form => "form",
            ScreenKind::Detail => "detail",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScreenKind::Basic => "Simple screen with title",
            ScreenKind::List => "FlatList with items",
            ScreenKind::Form => "Input form with submission",
            ScreenKind::Detail => "Detail view with data display",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            ScreenKind::Basic => include_str!("../../templates/screens/basic.tsx"),
            ScreenKind::List => include_str!("../../templates/screens/list.tsx"),
            ScreenKind::Form => include_str!("../../templates/screens/form.tsx"),
            ScreenKind::Detail => include_str!("../../templates/screens/detail.tsx"),
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of component to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ComponentKind {
    /// Stateless view with optional title
    #[default]
    Presentational,
    /// Stateful wrapper with loading and error state
    Container,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 2] = [ComponentKind::Presentational, ComponentKind::Container];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Presentational => "presentational",
            ComponentKind::Container => "container",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComponentKind::Presentational => "Stateless view with optional title",
            ComponentKind::Container => "Stateful wrapper with loading and error state",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            ComponentKind::Presentational => {
                include_str!("../../templates/components/presentational.tsx")
            }
            ComponentKind::Container => include_str!("../../templates/components/container.tsx"),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a screen module for `name`
pub fn screen_template(name: &str, kind: ScreenKind) -> String {
    kind.source().replace(NAME_PLACEHOLDER, name)
}

/// Render a component module for `name`
pub fn component_template(name: &str, kind: ComponentKind) -> String {
    kind.source().replace(NAME_PLACEHOLDER, name)
}

/// Barrel line re-exporting the default export of `name`
pub fn index_export_line(name: &str) -> String {
    format!("export {{ default as {name} }} from './{name}';\n")
}

/// Files `setup` writes into a fresh project, relative to the project root
pub const SETUP_FILES: &[(&str, &str)] = &[
    (
        "src/types/assets.d.ts",
        include_str!("../../templates/setup/assets.d.ts"),
    ),
    (
        "src/utils/responsive-screen.ts",
        include_str!("../../templates/setup/responsive-screen.ts"),
    ),
    (
        "src/services/api/client.ts",
        include_str!("../../templates/setup/api-client.ts"),
    ),
    ("RNSUP.md", include_str!("../../templates/setup/RNSUP.md")),
];

/// `babel.config.js` with module-resolver aliases for the standard folders
pub const BABEL_CONFIG: &str = include_str!("../../templates/setup/babel.config.js");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_screen_kind_uses_the_name() {
        for kind in ScreenKind::ALL {
            let source = screen_template("HomeScreen", kind);
            assert!(source.contains("const HomeScreen = () =>"), "{kind}");
            assert!(source.contains("export default HomeScreen;"), "{kind}");
            assert!(!source.contains(NAME_PLACEHOLDER), "{kind}");
        }
    }

    #[test]
    fn test_screen_kinds_differ() {
        assert!(screen_template("A", ScreenKind::List).contains("FlatList"));
        assert!(screen_template("A", ScreenKind::Form).contains("TextInput"));
        assert!(screen_template("A", ScreenKind::Detail).contains("useRoute"));
    }

    #[test]
    fn test_component_templates() {
        for kind in ComponentKind::ALL {
            let source = component_template("Card", kind);
            assert!(source.contains("const Card: React.FC<Props>"), "{kind}");
            assert!(!source.contains(NAME_PLACEHOLDER), "{kind}");
        }
        assert!(component_template("Card", ComponentKind::Container).contains("useState<State>"));
    }

    #[test]
    fn test_index_export_line() {
        assert_eq!(
            index_export_line("Button"),
            "export { default as Button } from './Button';\n"
        );
    }

    #[test]
    fn test_babel_config_has_alias_block() {
        assert!(BABEL_CONFIG.contains("alias: {"));
        assert!(BABEL_CONFIG.contains("'@components': './src/components'"));
    }
}
