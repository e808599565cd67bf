//! Resolved component instances placed on a demo page.

use serde::Serialize;
use vitrine_model::{
    AvatarShape, AvatarSize, BadgeSize, BadgeVariant, ButtonVariant,
    CardPadding, CardVariant, ControlSize, NavLink, PresenceStatus,
};

use crate::carousel::CarouselView;
use crate::navbar::{NavbarAppearance, NavbarState};
use crate::pagination::PaginationView;
use crate::select::{SelectOption, SelectState};
use crate::styles::{
    AvatarStyle, BadgeStyle, ButtonStyle, CardStyle, avatar_style,
    badge_style, button_style, card_style, display_name, initials,
};
use crate::table::ListView;
use crate::theme::{Color, ThemeTokens};

/// One component with its props and the style resolved from the tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Button {
        label: String,
        variant: ButtonVariant,
        size: ControlSize,
        disabled: bool,
        loading: bool,
        full_width: bool,
        style: ButtonStyle,
    },
    Badge {
        label: String,
        variant: BadgeVariant,
        size: BadgeSize,
        style: BadgeStyle,
    },
    Avatar {
        name: String,
        initials: String,
        size: AvatarSize,
        shape: AvatarShape,
        status: Option<PresenceStatus>,
        style: AvatarStyle,
    },
    Card {
        title: String,
        body: Option<String>,
        variant: CardVariant,
        padding: CardPadding,
        style: CardStyle,
    },
    Input {
        placeholder: String,
        value: String,
    },
    Select {
        display_text: String,
        open: bool,
        disabled: bool,
        options: Vec<SelectOption>,
    },
    Navbar {
        title: String,
        links: Vec<NavLink>,
        appearance: NavbarAppearance,
    },
    Carousel {
        view: CarouselView,
    },
    Pagination {
        /// `None` when the variant renders nothing for this page count.
        view: Option<PaginationView>,
    },
    List {
        view: ListView,
    },
    Swatch {
        group: &'static str,
        token: &'static str,
        color: Color,
    },
    Text {
        text: String,
    },
}

impl Widget {
    pub fn button(
        tokens: &ThemeTokens,
        label: impl Into<String>,
        variant: ButtonVariant,
        size: ControlSize,
    ) -> Self {
        Widget::Button {
            label: label.into(),
            variant,
            size,
            disabled: false,
            loading: false,
            full_width: false,
            style: button_style(tokens, variant, size),
        }
    }

    pub fn badge(
        tokens: &ThemeTokens,
        label: impl Into<String>,
        variant: BadgeVariant,
        size: BadgeSize,
        dot: bool,
    ) -> Self {
        Widget::Badge {
            label: label.into(),
            variant,
            size,
            style: badge_style(tokens, variant, size, dot),
        }
    }

    pub fn avatar(
        tokens: &ThemeTokens,
        name: &str,
        size: AvatarSize,
        shape: AvatarShape,
        status: Option<PresenceStatus>,
    ) -> Self {
        let name = display_name(Some(name), None);
        Widget::Avatar {
            name: name.to_string(),
            initials: initials(name),
            size,
            shape,
            status,
            style: avatar_style(tokens, size, shape, status),
        }
    }

    pub fn card(
        tokens: &ThemeTokens,
        title: impl Into<String>,
        body: Option<String>,
        variant: CardVariant,
        padding: CardPadding,
    ) -> Self {
        Widget::Card {
            title: title.into(),
            body,
            variant,
            padding,
            style: card_style(tokens, variant, padding),
        }
    }

    pub fn input(placeholder: impl Into<String>) -> Self {
        Widget::Input {
            placeholder: placeholder.into(),
            value: String::new(),
        }
    }

    pub fn select(state: &SelectState) -> Self {
        Widget::Select {
            display_text: state.display_text().to_string(),
            open: state.is_open(),
            disabled: state.is_disabled(),
            options: state.options().to_vec(),
        }
    }

    pub fn navbar(
        tokens: &ThemeTokens,
        title: impl Into<String>,
        links: Vec<NavLink>,
        state: &NavbarState,
    ) -> Self {
        Widget::Navbar {
            title: title.into(),
            links,
            appearance: state.appearance(tokens),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Widget::Text { text: text.into() }
    }

    /// Mark a button disabled / loading / full width. Other widgets are
    /// returned unchanged.
    #[must_use]
    pub fn with_button_state(
        mut self,
        is_disabled: bool,
        is_loading: bool,
        is_full_width: bool,
    ) -> Self {
        if let Widget::Button {
            disabled,
            loading,
            full_width,
            ..
        } = &mut self
        {
            *disabled = is_disabled;
            *loading = is_loading;
            *full_width = is_full_width;
        }
        self
    }

    pub fn to_text(&self) -> String {
        match self {
            Widget::Button {
                label,
                variant,
                disabled,
                loading,
                ..
            } => {
                let mut text = format!("[{label}]({variant})");
                if *disabled {
                    text.push_str(" disabled");
                }
                if *loading {
                    text.push_str(" loading");
                }
                text
            }
            Widget::Badge { label, style, .. } => match style.dot {
                Some(_) => format!("(• {label})"),
                None => format!("({label})"),
            },
            Widget::Avatar {
                initials, status, ..
            } => match status {
                Some(status) => format!("<{initials}:{status}>"),
                None => format!("<{initials}>"),
            },
            Widget::Card { title, body, .. } => match body {
                Some(body) => format!("▢ {title}: {body}"),
                None => format!("▢ {title}"),
            },
            Widget::Input { placeholder, value } => {
                if value.is_empty() {
                    format!("[ {placeholder} ]")
                } else {
                    format!("[ {value} ]")
                }
            }
            Widget::Select {
                display_text, open, ..
            } => {
                format!("[{display_text} {}]", if *open { "▴" } else { "▾" })
            }
            Widget::Navbar { title, links, .. } => {
                let labels: Vec<&str> =
                    links.iter().map(|link| link.label.as_str()).collect();
                format!("{title} | {}", labels.join(" · "))
            }
            Widget::Carousel { view } => view.to_text(),
            Widget::Pagination { view } => match view {
                Some(view) => view.to_text(),
                None => "(hidden)".to_string(),
            },
            Widget::List { view } => view.to_text(),
            Widget::Swatch {
                group,
                token,
                color,
            } => format!("{group}.{token} {color}"),
            Widget::Text { text } => text.clone(),
        }
    }
}

/// A labelled group of widgets inside a section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demo {
    pub label: String,
    pub widgets: Vec<Widget>,
}

impl Demo {
    pub fn new(label: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            label: label.into(),
            widgets,
        }
    }

    fn to_text(&self) -> String {
        let inline = self.widgets.iter().all(|widget| {
            !matches!(
                widget,
                Widget::List { .. }
                    | Widget::Card { .. }
                    | Widget::Swatch { .. }
            )
        });
        let parts: Vec<String> =
            self.widgets.iter().map(Widget::to_text).collect();
        if inline {
            format!("  {}: {}", self.label, parts.join("  "))
        } else {
            let body: Vec<String> = parts
                .iter()
                .flat_map(|part| part.lines())
                .map(|line| format!("    {line}"))
                .collect();
            format!("  {}:\n{}", self.label, body.join("\n"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub demos: Vec<Demo>,
}

impl Section {
    pub fn new(title: impl Into<String>, demos: Vec<Demo>) -> Self {
        Self {
            title: title.into(),
            demos,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("## {}", self.title);
        for demo in &self.demos {
            out.push('\n');
            out.push_str(&demo.to_text());
        }
        out
    }
}
