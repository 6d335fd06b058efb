#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// CSS background for the page and the picker swatch.
    pub gradient: &'static str,
    pub accent: &'static str,
    pub is_dark: bool,
}

pub static THEMES: [Theme; 5] = [
    Theme {
        id: "midnight",
        name: "Midnight",
        gradient: "linear-gradient(135deg, #0f172a 0%, #1e3a8a 50%, #000000 100%)",
        accent: "#3b82f6",
        is_dark: true,
    },
    Theme {
        id: "aurora",
        name: "Aurora",
        gradient: "linear-gradient(135deg, #134e4a 0%, #581c87 50%, #312e81 100%)",
        accent: "#2dd4bf",
        is_dark: true,
    },
    Theme {
        id: "crimson",
        name: "Crimson",
        gradient: "linear-gradient(135deg, #450a0a 0%, #881337 50%, #000000 100%)",
        accent: "#f43f5e",
        is_dark: true,
    },
    Theme {
        id: "golden",
        name: "Golden",
        gradient: "linear-gradient(135deg, #451a03 0%, #713f12 50%, #1c1917 100%)",
        accent: "#f59e0b",
        is_dark: true,
    },
    Theme {
        id: "oled",
        name: "OLED",
        gradient: "linear-gradient(135deg, #000000 0%, #09090b 50%, #000000 100%)",
        accent: "#ffffff",
        is_dark: true,
    },
];

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

pub fn theme_by_id(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

pub struct ThemeDefinition {
    pub css: String,
    pub root_class: &'static str,
}

pub fn theme_definition(theme: &Theme) -> ThemeDefinition {
    let (text_primary, text_muted) = if theme.is_dark {
        ("#ffffff", "rgba(255, 255, 255, 0.4)")
    } else {
        ("#000000", "rgba(0, 0, 0, 0.5)")
    };
    let css = format!(
        r#"
:root {{
    --color-bg-gradient: {gradient};
    --color-accent: {accent};
    --color-text-primary: {text_primary};
    --color-text-muted: {text_muted};
}}
body {{ background: #000000; color: var(--color-text-primary); }}
"#,
        gradient = theme.gradient,
        accent = theme.accent,
    );
    ThemeDefinition {
        css,
        root_class: if theme.is_dark {
            "app-root dark"
        } else {
            "app-root"
        },
    }
}
