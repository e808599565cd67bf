//! Closed variant tags used by the component style tables.
//!
//! Every component exposes its visual options as small enums instead of free
//! strings. Each enum round-trips through the lowercase tag used in configs
//! and on the command line.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag ),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $tag => Ok($name::$variant), )+
                    other => Err(ModelError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

variant_enum! {
    /// Three-step size scale shared by buttons, pagination and lists.
    ControlSize ("size") {
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
    }
}

variant_enum! {
    ButtonVariant ("button") {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Ghost => "ghost",
        Danger => "danger",
    }
}

variant_enum! {
    BadgeVariant ("badge") {
        #[default]
        Default => "default",
        Primary => "primary",
        Success => "success",
        Warning => "warning",
        Danger => "danger",
        Info => "info",
    }
}

variant_enum! {
    BadgeSize ("badge size") {
        Small => "small",
        #[default]
        Medium => "medium",
    }
}

variant_enum! {
    AvatarSize ("avatar size") {
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
        XLarge => "xlarge",
    }
}

variant_enum! {
    AvatarShape ("avatar shape") {
        #[default]
        Circle => "circle",
        Square => "square",
    }
}

variant_enum! {
    /// Presence dot shown on an avatar.
    PresenceStatus ("presence") {
        #[default]
        Online => "online",
        Offline => "offline",
        Busy => "busy",
        Away => "away",
    }
}

variant_enum! {
    CardVariant ("card") {
        #[default]
        Default => "default",
        Elevated => "elevated",
        Outlined => "outlined",
    }
}

variant_enum! {
    CardPadding ("card padding") {
        None => "none",
        Small => "small",
        #[default]
        Medium => "medium",
        Large => "large",
    }
}

variant_enum! {
    PaginationVariant ("pagination") {
        #[default]
        Default => "default",
        Compact => "compact",
        Minimal => "minimal",
    }
}

variant_enum! {
    ListVariant ("list") {
        #[default]
        Default => "default",
        Striped => "striped",
        Bordered => "bordered",
        Cards => "cards",
    }
}

variant_enum! {
    FooterVariant ("footer") {
        #[default]
        Default => "default",
        Minimal => "minimal",
        Centered => "centered",
    }
}

variant_enum! {
    /// Named token scale presets.
    ScalePreset ("scale preset") {
        Compact => "compact",
        #[default]
        Default => "default",
        Large => "large",
        Huge => "huge",
    }
}

impl ScalePreset {
    pub fn scale_factor(self) -> f32 {
        match self {
            ScalePreset::Compact => 0.8,
            ScalePreset::Default => 1.0,
            ScalePreset::Large => 1.2,
            ScalePreset::Huge => 1.5,
        }
    }
}
