//! Shared UI toolkit for the CRM front end.
//!
//! The crate owns the Leptos primitives (buttons, fields, cards, app bar, drawer, avatar), a
//! centralized icon API, and the stable `data-ui-*` DOM contract consumed by the stylesheet.
//! Pages and shells compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppBar, Avatar, Button, ButtonColor, ButtonSize, ButtonType, ButtonVariant, Card, CardActions,
    CardContent, CardHeader, Chip, CircularProgress, Cluster, Divider, Drawer, Elevation, Grid,
    Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, NavItem, NavList, Notice,
    Stack, Text, TextArea, TextField, TextRole, TextTone,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppBar, Avatar, Button, ButtonColor, ButtonSize, ButtonType, ButtonVariant, Card,
        CardActions, CardContent, CardHeader, Chip, CircularProgress, Cluster, Divider, Drawer,
        Elevation, Grid, Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify,
        LayoutPadding, NavItem, NavList, Notice, Stack, Text, TextArea, TextField, TextRole,
        TextTone,
    };
}
