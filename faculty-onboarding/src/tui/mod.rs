//! Terminal front end for the wizard
//!
//! Draws the current [`State`](crate::wizard::State) with ratatui and turns
//! key presses into wizard messages. Nothing here changes the record
//! directly; edits go through [`Wizard::dispatch`](crate::wizard::Wizard::dispatch).

pub mod fields;
pub mod input;
pub mod runtime;
pub mod theme;
pub mod view;
pub mod widgets;

pub use fields::{FieldKind, FieldSpec, FormItem, items_for_step};
pub use input::{EntryAnchor, ViewState};
pub use runtime::run;
pub use theme::Theme;
pub use view::ViewOptions;
pub use widgets::TextInputState;
