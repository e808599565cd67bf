//! The component gallery page.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};
use vitrine_config::{PaginationDisplay, ShowcaseConfig};
use vitrine_model::{
    AvatarShape, AvatarSize, BadgeSize, BadgeVariant, ButtonVariant,
    CardPadding, CardVariant, CellAlign, CellValue, ColumnSpec, ControlSize,
    ListVariant, LoopMode, NavLink, PaginationVariant, PresenceStatus, Slide,
    SortDirection, UserStatus,
};

use super::data_table::DataTableDemo;
use super::widgets::{Demo, Section, Widget};
use crate::carousel::{Carousel, CarouselOptions};
use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::navbar::NavbarState;
use crate::pagination::{PaginationController, PaginationView};
use crate::select::{SelectOption, SelectState};
use crate::table::{
    ListOptions, ListView, SelectionSet, SortState, TableRow, sort_rows,
};
use crate::theme::{FontSize, Radius, ThemeTokens, TransitionSpeed};

pub const PAGE_TITLE: &str = "Linear Design System Components";

/// Badge shown in the status column of the user tables.
pub fn status_badge(tokens: &ThemeTokens, status: UserStatus) -> Widget {
    let variant = match status {
        UserStatus::Active => BadgeVariant::Success,
        UserStatus::Inactive => BadgeVariant::Default,
    };
    Widget::badge(tokens, status.to_string(), variant, BadgeSize::Medium, true)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentsPage {
    pub title: String,
    pub sections: Vec<Section>,
}

impl ComponentsPage {
    /// Assemble every gallery section. The autoplaying carousels need a
    /// tokio runtime.
    pub fn assemble(
        provider: &dyn CatalogProvider,
        config: &ShowcaseConfig,
        tokens: &ThemeTokens,
    ) -> Result<Self> {
        let sections = vec![
            buttons(tokens),
            inputs(),
            selects(),
            cards(tokens),
            badges(tokens),
            avatars(tokens),
            carousels()?,
            navigation(tokens),
            team_list(tokens),
            pagination(config, tokens),
            Section::new(
                "List with Pagination Example",
                vec![Demo::new(
                    "Complete Data Table with Pagination",
                    DataTableDemo::new(provider, &config.table)?
                        .widgets(tokens),
                )],
            ),
            theme_overview(tokens),
            combined(tokens),
        ];

        info!(sections = sections.len(), "components page assembled");
        Ok(Self {
            title: PAGE_TITLE.to_string(),
            sections,
        })
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("# {}", self.title);
        for section in &self.sections {
            out.push_str("\n\n");
            out.push_str(&section.to_text());
        }
        out
    }
}

fn buttons(tokens: &ThemeTokens) -> Section {
    let button = |label: &str, variant: ButtonVariant, size: ControlSize| {
        Widget::button(tokens, label, variant, size)
    };
    let medium = ControlSize::Medium;

    Section::new(
        "Buttons",
        vec![
            Demo::new(
                "Button Variants",
                ButtonVariant::ALL
                    .iter()
                    .map(|variant| {
                        let label = capitalize(variant.as_str());
                        button(&label, *variant, medium)
                    })
                    .collect(),
            ),
            Demo::new(
                "Button Sizes",
                ControlSize::ALL
                    .iter()
                    .map(|size| {
                        let label = capitalize(size.as_str());
                        button(&label, ButtonVariant::Primary, *size)
                    })
                    .collect(),
            ),
            Demo::new(
                "Button States",
                vec![
                    button("Disabled", ButtonVariant::Primary, medium)
                        .with_button_state(true, false, false),
                    button("Loading", ButtonVariant::Primary, medium)
                        .with_button_state(false, true, false),
                    button("Full Width", ButtonVariant::Primary, medium)
                        .with_button_state(false, false, true),
                ],
            ),
        ],
    )
}

fn inputs() -> Section {
    Section::new(
        "Inputs",
        vec![
            Demo::new("Basic Input", vec![Widget::input("Enter text...")]),
            Demo::new(
                "Input with Label",
                vec![Widget::input("user@example.com")],
            ),
            Demo::new(
                "Input with Icons",
                vec![Widget::input("Search..."), Widget::input("Password")],
            ),
        ],
    )
}

fn select_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("option1", "Option 1"),
        SelectOption::new("option2", "Option 2"),
        SelectOption::new("option3", "Option 3").disabled(),
        SelectOption::new("option4", "Option 4"),
    ]
}

fn selects() -> Section {
    let basic = SelectState::new(select_options())
        .with_placeholder("Choose an option")
        .on_change(|value| debug!(value, "select changed"));
    let labelled =
        SelectState::new(select_options()).with_placeholder("Select one");
    let disabled = SelectState::new(select_options())
        .with_placeholder("Disabled select")
        .disabled(true);

    Section::new(
        "Select",
        vec![
            Demo::new("Basic Select", vec![Widget::select(&basic)]),
            Demo::new("Select with Label", vec![Widget::select(&labelled)]),
            Demo::new("Disabled Select", vec![Widget::select(&disabled)]),
        ],
    )
}

fn cards(tokens: &ThemeTokens) -> Section {
    let card = |title: &str, body: &str, variant: CardVariant| {
        Widget::card(
            tokens,
            title,
            Some(body.to_string()),
            variant,
            CardPadding::Medium,
        )
    };
    Section::new(
        "Cards",
        vec![Demo::new(
            "Card Variants",
            vec![
                card(
                    "Default Card",
                    "This is a default card with medium padding.",
                    CardVariant::Default,
                ),
                card(
                    "Elevated Card",
                    "This card has a subtle shadow effect.",
                    CardVariant::Elevated,
                ),
                card(
                    "Outlined Card",
                    "This card has a transparent background with border.",
                    CardVariant::Outlined,
                ),
            ],
        )],
    )
}

fn badges(tokens: &ThemeTokens) -> Section {
    let badge = |label: &str, variant, size, dot| {
        Widget::badge(tokens, label, variant, size, dot)
    };
    Section::new(
        "Badges",
        vec![
            Demo::new(
                "Badge Variants",
                BadgeVariant::ALL
                    .iter()
                    .map(|variant| {
                        let label = capitalize(variant.as_str());
                        badge(&label, *variant, BadgeSize::Medium, false)
                    })
                    .collect(),
            ),
            Demo::new(
                "Badge Sizes",
                vec![
                    badge(
                        "Small",
                        BadgeVariant::Default,
                        BadgeSize::Small,
                        false,
                    ),
                    badge(
                        "Medium",
                        BadgeVariant::Default,
                        BadgeSize::Medium,
                        false,
                    ),
                ],
            ),
            Demo::new(
                "Badges with Dot",
                vec![
                    badge(
                        "Active",
                        BadgeVariant::Success,
                        BadgeSize::Medium,
                        true,
                    ),
                    badge(
                        "Pending",
                        BadgeVariant::Warning,
                        BadgeSize::Medium,
                        true,
                    ),
                    badge(
                        "Error",
                        BadgeVariant::Danger,
                        BadgeSize::Medium,
                        true,
                    ),
                ],
            ),
        ],
    )
}

fn avatars(tokens: &ThemeTokens) -> Section {
    let avatar = |name: &str, size, shape, status| {
        Widget::avatar(tokens, name, size, shape, status)
    };
    Section::new(
        "Avatars",
        vec![
            Demo::new(
                "Avatar Sizes",
                AvatarSize::ALL
                    .iter()
                    .map(|size| {
                        avatar("John Doe", *size, AvatarShape::Circle, None)
                    })
                    .collect(),
            ),
            Demo::new(
                "Avatar Shapes",
                AvatarShape::ALL
                    .iter()
                    .map(|shape| {
                        avatar("Jane Smith", AvatarSize::Large, *shape, None)
                    })
                    .collect(),
            ),
            Demo::new(
                "Avatar with Status",
                [
                    ("User Online", PresenceStatus::Online),
                    ("User Away", PresenceStatus::Away),
                    ("User Busy", PresenceStatus::Busy),
                    ("User Offline", PresenceStatus::Offline),
                ]
                .into_iter()
                .map(|(name, status)| {
                    avatar(
                        name,
                        AvatarSize::Large,
                        AvatarShape::Circle,
                        Some(status),
                    )
                })
                .collect(),
            ),
        ],
    )
}

fn carousel_widget(
    keys: &[&str],
    options: CarouselOptions,
) -> Result<Widget> {
    let slides = keys
        .iter()
        .map(|key| Slide::new(*key, ()))
        .collect::<Vec<_>>();
    let carousel = Carousel::mount(slides, options)?;
    Ok(Widget::Carousel {
        view: carousel.view(),
    })
}

fn carousels() -> Result<Section> {
    let basic = carousel_widget(
        &["1", "2", "3"],
        CarouselOptions::default()
            .autoplay(Duration::from_millis(4_000))
            .loop_mode(LoopMode::Infinite)
            .height("300px"),
    )?;
    let images = carousel_widget(
        &["img1", "img2", "img3"],
        CarouselOptions::default().height("400px"),
    )?;
    let content = carousel_widget(
        &["content1", "content2"],
        CarouselOptions {
            show_indicators: false,
            show_arrows: false,
            ..CarouselOptions::default()
                .autoplay(Duration::from_millis(3_000))
                .loop_mode(LoopMode::Infinite)
                .height("250px")
        },
    )?;

    Ok(Section::new(
        "Carousel",
        vec![
            Demo::new("Basic Carousel with Auto Play", vec![basic]),
            Demo::new("Image Carousel", vec![images]),
            Demo::new("Content Carousel without Controls", vec![content]),
        ],
    ))
}

fn navigation(tokens: &ThemeTokens) -> Section {
    let mut home = NavLink::new("Home", "/");
    home.active = true;
    let mut pricing = NavLink::new("Pricing", "/pricing");
    pricing.badge = Some("New".to_string());

    let mut scrolled = NavbarState::new(true, true);
    scrolled.on_scroll(120.0);

    Section::new(
        "Navigation",
        vec![
            Demo::new(
                "Default Navbar",
                vec![
                    Widget::navbar(
                        tokens,
                        "Linear",
                        vec![
                            home,
                            NavLink::new("Features", "/features"),
                            pricing,
                            NavLink::new("Docs", "/docs"),
                        ],
                        &NavbarState::default(),
                    ),
                    Widget::button(
                        tokens,
                        "Sign In",
                        ButtonVariant::Ghost,
                        ControlSize::Small,
                    ),
                    Widget::button(
                        tokens,
                        "Get Started",
                        ButtonVariant::Primary,
                        ControlSize::Small,
                    ),
                ],
            ),
            Demo::new(
                "Transparent Navbar (becomes solid on scroll)",
                vec![
                    Widget::navbar(
                        tokens,
                        "StartupOS",
                        vec![
                            NavLink::new("Product", "/product"),
                            NavLink::new("Solutions", "/solutions"),
                            NavLink::new("Resources", "/resources"),
                        ],
                        &scrolled,
                    ),
                    Widget::button(
                        tokens,
                        "Try Free",
                        ButtonVariant::Primary,
                        ControlSize::Small,
                    ),
                ],
            ),
        ],
    )
}

/// Row of the sortable team list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TeamMember {
    id: u32,
    name: &'static str,
    email: &'static str,
    role: &'static str,
    status: UserStatus,
    join_date: &'static str,
}

impl TableRow for TeamMember {
    type Key = u32;

    fn row_key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column: &str) -> CellValue {
        match column {
            "name" => self.name.into(),
            "email" => self.email.into(),
            "role" => self.role.into(),
            "status" => self.status.to_string().into(),
            "join_date" => self.join_date.into(),
            _ => CellValue::Empty,
        }
    }
}

fn team() -> Vec<TeamMember> {
    let member = |id, name, email, role, status, join_date| TeamMember {
        id,
        name,
        email,
        role,
        status,
        join_date,
    };
    vec![
        member(
            1,
            "John Doe",
            "john@example.com",
            "Admin",
            UserStatus::Active,
            "2024-01-15",
        ),
        member(
            2,
            "Jane Smith",
            "jane@example.com",
            "Developer",
            UserStatus::Active,
            "2024-02-20",
        ),
        member(
            3,
            "Bob Johnson",
            "bob@example.com",
            "Designer",
            UserStatus::Inactive,
            "2024-03-10",
        ),
        member(
            4,
            "Alice Brown",
            "alice@example.com",
            "Manager",
            UserStatus::Active,
            "2024-01-05",
        ),
        member(
            5,
            "Charlie Wilson",
            "charlie@example.com",
            "Developer",
            UserStatus::Active,
            "2024-04-01",
        ),
    ]
}

fn team_list(tokens: &ThemeTokens) -> Section {
    let columns = vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("email", "Email").sortable(),
        ColumnSpec::new("role", "Role").sortable(),
        ColumnSpec::new("status", "Status"),
        ColumnSpec::new("join_date", "Join Date").aligned(CellAlign::Right),
    ];
    let sort = SortState::by("name", SortDirection::Ascending);
    let mut rows = team();
    sort_rows(&mut rows, &sort);

    let build = |rows: &[TeamMember], variant: ListVariant| {
        ListView::build(
            &columns,
            rows,
            &sort,
            &SelectionSet::new(),
            &ListOptions {
                variant,
                selectable: variant == ListVariant::Default,
                ..ListOptions::default()
            },
            tokens,
        )
    };

    let statuses = rows
        .iter()
        .map(|member| status_badge(tokens, member.status))
        .collect();

    Section::new(
        "List & Data Display",
        vec![
            Demo::new(
                "Table List with Sorting and Selection",
                vec![Widget::List {
                    view: build(&rows, ListVariant::Default),
                }],
            ),
            Demo::new("Status Badges", statuses),
            Demo::new(
                "Striped List",
                vec![Widget::List {
                    view: build(&rows, ListVariant::Striped),
                }],
            ),
            Demo::new(
                "Empty List",
                vec![Widget::List {
                    view: build(&[], ListVariant::Bordered),
                }],
            ),
        ],
    )
}

fn pagination(config: &ShowcaseConfig, tokens: &ThemeTokens) -> Section {
    let defaults = &config.pagination;
    let bar = |controller: PaginationController,
               variant: PaginationVariant,
               size: ControlSize,
               display: PaginationDisplay| {
        Widget::Pagination {
            view: PaginationView::build(
                &controller,
                variant,
                size,
                &display,
                tokens,
            ),
        }
    };
    let base = |total_pages: usize| {
        PaginationController::from_config(defaults, total_pages)
    };
    let plain = defaults.display;

    Section::new(
        "Pagination",
        vec![
            Demo::new(
                "Default Pagination",
                vec![bar(
                    base(20)
                        .with_total_items(195)
                        .on_items_per_page_change(|size| {
                            debug!(size, "page size changed");
                        }),
                    PaginationVariant::Default,
                    ControlSize::Medium,
                    PaginationDisplay {
                        show_items_per_page: true,
                        ..plain
                    },
                )],
            ),
            Demo::new(
                "Compact Pagination",
                vec![bar(
                    base(10).with_total_items(100).with_current_page(5),
                    PaginationVariant::Compact,
                    ControlSize::Medium,
                    PaginationDisplay {
                        show_page_info: true,
                        ..plain
                    },
                )],
            ),
            Demo::new(
                "Minimal Pagination",
                vec![bar(
                    base(8).with_current_page(3),
                    PaginationVariant::Minimal,
                    ControlSize::Medium,
                    plain,
                )],
            ),
            Demo::new(
                "Small Size",
                vec![bar(
                    base(15),
                    PaginationVariant::Default,
                    ControlSize::Small,
                    plain,
                )],
            ),
            Demo::new(
                "Large Size",
                vec![bar(
                    base(12),
                    PaginationVariant::Default,
                    ControlSize::Large,
                    plain,
                )],
            ),
            Demo::new(
                "Limited Visible Pages",
                vec![bar(
                    base(50).with_current_page(10).with_max_visible_pages(5),
                    PaginationVariant::Default,
                    ControlSize::Medium,
                    plain,
                )],
            ),
        ],
    )
}

fn theme_overview(tokens: &ThemeTokens) -> Section {
    let swatches = tokens
        .palette
        .swatches()
        .into_iter()
        .map(|(group, token, color)| Widget::Swatch {
            group,
            token,
            color,
        })
        .collect();

    let sizes = [
        ("micro", FontSize::Micro),
        ("mini", FontSize::Mini),
        ("small", FontSize::Small),
        ("regular", FontSize::Regular),
        ("large", FontSize::Large),
        ("title", FontSize::Title),
    ]
    .into_iter()
    .map(|(name, size)| {
        Widget::text(format!("{name} {}", tokens.font_sizes.css(size)))
    })
    .collect();

    let radii = Radius::ALL
        .iter()
        .map(|radius| Widget::text(radius.css()))
        .collect();

    let transitions = [
        ("quick", TransitionSpeed::Quick),
        ("regular", TransitionSpeed::Regular),
        ("slow", TransitionSpeed::Slow),
    ]
    .into_iter()
    .map(|(name, speed)| {
        Widget::text(format!("{name} {}", tokens.transitions.css(speed)))
    })
    .collect();

    Section::new(
        "Theme Information",
        vec![
            Demo::new("Colors", swatches),
            Demo::new("Font Sizes", sizes),
            Demo::new("Radii", radii),
            Demo::new("Transitions", transitions),
        ],
    )
}

fn combined(tokens: &ThemeTokens) -> Section {
    let action = |label: &str, variant| {
        Widget::button(tokens, label, variant, ControlSize::Medium)
            .with_button_state(false, false, true)
    };
    Section::new(
        "Combined Examples",
        vec![
            Demo::new(
                "Profile",
                vec![
                    Widget::avatar(
                        tokens,
                        "Alex Johnson",
                        AvatarSize::Medium,
                        AvatarShape::Circle,
                        Some(PresenceStatus::Online),
                    ),
                    Widget::badge(
                        tokens,
                        "Active",
                        BadgeVariant::Success,
                        BadgeSize::Small,
                        true,
                    ),
                    Widget::input("Type a message..."),
                ],
            ),
            Demo::new(
                "Quick Actions",
                vec![
                    action("Create New Project", ButtonVariant::Primary),
                    action("View Dashboard", ButtonVariant::Secondary),
                    action("Settings", ButtonVariant::Ghost),
                ],
            ),
        ],
    )
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
