//! Key handling for the wizard view
//!
//! Keys are translated into wizard [`Msg`]s. The only state kept here is
//! presentation state: which row has focus, where the text cursor is and
//! which option of a checkbox group is highlighted.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

use crate::form::{FieldPath, FieldValue, Record};
use crate::wizard::{Msg, State};

use super::fields::{FieldKind, FieldSpec, FormItem, items_for_step};
use super::widgets::TextInputState;

#[derive(Debug, Default)]
pub struct ViewState {
    /// Index into `items_for_step`
    pub focused: usize,
    /// Highlighted option inside a checkbox group
    pub option_cursor: usize,
    pub text: TextInputState,
    step: usize,
}

/// Focused row inside a list entry, pinned to the entry's key
///
/// Taken before a message is dispatched so focus can follow the entry when
/// earlier entries are removed, instead of staying on the same row index.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryAnchor {
    step: usize,
    list: FieldPath,
    key: Uuid,
    index: usize,
    offset: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the focused row to its list entry, if it belongs to one
    pub fn anchor(&self, state: &State) -> Option<EntryAnchor> {
        let items = items_for_step(state);
        let (list, index) = items.get(self.focused)?.entry()?;
        let start = entry_start(&items, &list, index)?;
        Some(EntryAnchor {
            step: state.current_step,
            key: entry_key(state, &list, index)?,
            list,
            index,
            offset: self.focused - start,
        })
    }

    /// Move focus back onto the anchored entry after the list changed
    ///
    /// If the entry is gone, focus lands on the entry that took its place,
    /// or on the last row when it was the last entry.
    pub fn restore(&mut self, state: &State, anchor: &EntryAnchor) {
        if anchor.step != state.current_step {
            return;
        }
        let items = items_for_step(state);
        let target = match entry_position(state, &anchor.list, anchor.key) {
            Some(index) => entry_start(&items, &anchor.list, index).map(|start| start + anchor.offset),
            None => entry_start(&items, &anchor.list, anchor.index),
        };
        let target = target
            .filter(|&index| items.get(index).is_some_and(FormItem::is_focusable))
            .or_else(|| items.iter().rposition(FormItem::is_focusable));

        match target {
            Some(index) if index != self.focused => self.set_focus(state, &items, index),
            _ => {}
        }
    }

    /// Reset focus when the wizard moved to a different step
    pub fn sync_step(&mut self, state: &State) {
        if self.step != state.current_step {
            self.step = state.current_step;
            self.focused = 0;
            self.option_cursor = 0;
            self.focus_first(state);
        }
        let items = items_for_step(state);
        if self.focused >= items.len() {
            self.focused = items.len().saturating_sub(1);
        }
    }

    /// Move focus to the row bound to `path`
    pub fn focus_path(&mut self, state: &State, path: &FieldPath) {
        self.step = state.current_step;
        let items = items_for_step(state);
        if let Some(index) = items.iter().position(|i| i.path() == Some(path)) {
            self.set_focus(state, &items, index);
        }
    }

    fn focus_first(&mut self, state: &State) {
        let items = items_for_step(state);
        if let Some(index) = items.iter().position(FormItem::is_focusable) {
            self.set_focus(state, &items, index);
        }
    }

    fn set_focus(&mut self, state: &State, items: &[FormItem], index: usize) {
        self.focused = index;
        self.option_cursor = 0;
        if let Some(FormItem::Field(spec)) = items.get(index) {
            let value = current_text(state, &spec.path);
            self.text.set_cursor_to_end(&value);
        }
    }

    fn move_focus(&mut self, state: &State, forward: bool) {
        let items = items_for_step(state);
        if items.is_empty() {
            return;
        }
        let len = items.len();
        let mut index = self.focused.min(len - 1);
        for _ in 0..len {
            index = if forward { (index + 1) % len } else { (index + len - 1) % len };
            if items[index].is_focusable() {
                self.set_focus(state, &items, index);
                return;
            }
        }
    }

    /// Translate a key press into a wizard message
    pub fn handle_key(&mut self, state: &State, key: KeyEvent) -> Option<Msg> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('n') => Some(Msg::Next),
                KeyCode::Char('b') => Some(Msg::Back),
                _ => None,
            };
        }

        if state.is_complete() {
            return match key.code {
                KeyCode::Esc | KeyCode::PageUp => Some(Msg::Back),
                KeyCode::Enter | KeyCode::Char('q') => Some(Msg::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(state, true);
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(state, false);
                return None;
            }
            KeyCode::PageDown => return Some(Msg::Next),
            KeyCode::PageUp => return Some(Msg::Back),
            KeyCode::Esc => {
                return Some(if state.banner.is_some() { Msg::DismissBanner } else { Msg::Back });
            }
            _ => {}
        }

        let items = items_for_step(state);
        match items.get(self.focused) {
            Some(FormItem::Field(spec)) => self.handle_field_key(state, spec, key.code),
            Some(FormItem::SameAddress) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::ToggleSameAddress),
                _ => None,
            },
            Some(FormItem::Action { msg, .. }) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Some(msg.clone()),
                _ => None,
            },
            Some(FormItem::Heading(_)) | None => match key.code {
                KeyCode::Enter => Some(Msg::Next),
                _ => None,
            },
        }
    }

    fn handle_field_key(&mut self, state: &State, spec: &FieldSpec, code: KeyCode) -> Option<Msg> {
        if code == KeyCode::Enter {
            return Some(Msg::Next);
        }
        if spec.disabled {
            return None;
        }

        let value = state.record.field(&spec.path).ok()?;
        let set = |value: FieldValue| Some(Msg::SetField(spec.path.clone(), value));

        match (spec.kind, value) {
            (kind, FieldValue::Text(current)) if kind.is_textual() => {
                let updated = self.text.handle_key(code, &current, kind.max_length())?;
                set(FieldValue::Text(updated))
            }
            (FieldKind::Select(options), FieldValue::Text(current)) => {
                let step: isize = match code {
                    KeyCode::Right | KeyCode::Char(' ') => 1,
                    KeyCode::Left => -1,
                    _ => return None,
                };
                set(FieldValue::Text(cycle(options, &current, step).to_string()))
            }
            (FieldKind::Checkbox, FieldValue::Flag(checked)) => match code {
                KeyCode::Char(' ') => set(FieldValue::Flag(!checked)),
                _ => None,
            },
            (FieldKind::MultiChoice(options), FieldValue::Choices(selected)) => match code {
                KeyCode::Left => {
                    self.option_cursor = self.option_cursor.saturating_sub(1);
                    None
                }
                KeyCode::Right => {
                    self.option_cursor = (self.option_cursor + 1).min(options.len().saturating_sub(1));
                    None
                }
                KeyCode::Char(' ') => {
                    let option = options.get(self.option_cursor)?;
                    set(FieldValue::Choices(toggle_choice(options, &selected, option)))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

/// First row of entry `index` in `list`
fn entry_start(items: &[FormItem], list: &FieldPath, index: usize) -> Option<usize> {
    items
        .iter()
        .position(|item| item.entry().is_some_and(|(l, i)| l == *list && i == index))
}

fn entry_key(state: &State, list: &FieldPath, index: usize) -> Option<Uuid> {
    if *list == Record::education_path() {
        state.record.education.key_at(index)
    } else {
        state.record.dependents.children.key_at(index)
    }
}

fn entry_position(state: &State, list: &FieldPath, key: Uuid) -> Option<usize> {
    if *list == Record::education_path() {
        state.record.education.position(key)
    } else {
        state.record.dependents.children.position(key)
    }
}

fn current_text(state: &State, path: &FieldPath) -> String {
    match state.record.field(path) {
        Ok(FieldValue::Text(s)) => s,
        _ => String::new(),
    }
}

/// Next option in `options` after `current`; an empty or unknown value
/// starts at the first (or last, going left) option
fn cycle<'a>(options: &[&'a str], current: &str, step: isize) -> &'a str {
    let len = options.len() as isize;
    let next = match options.iter().position(|o| *o == current) {
        Some(i) => (i as isize + step).rem_euclid(len),
        None if step < 0 => len - 1,
        None => 0,
    };
    options[next as usize]
}

/// Add or remove `option`, keeping the selection in option order
fn toggle_choice(options: &[&str], selected: &[String], option: &str) -> Vec<String> {
    let was_selected = selected.iter().any(|s| s == option);
    options
        .iter()
        .filter(|o| {
            if **o == option {
                !was_selected
            } else {
                selected.iter().any(|s| s == *o)
            }
        })
        .map(|o| o.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Banner;
    use crossterm::event::KeyEvent;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn test_typing_sets_field() {
        let state = State::new();
        let mut view = ViewState::new();
        view.sync_step(&state);

        let msg = view.handle_key(&state, press(KeyCode::Char('P')));
        assert_eq!(
            msg,
            Some(Msg::SetField(path("personalSchema.qualification"), FieldValue::text("P")))
        );
    }

    #[test]
    fn test_tab_moves_focus_and_wraps() {
        let state = State::new();
        let mut view = ViewState::new();
        view.sync_step(&state);

        view.handle_key(&state, press(KeyCode::Tab));
        assert_eq!(view.focused, 1);
        view.handle_key(&state, press(KeyCode::BackTab));
        view.handle_key(&state, press(KeyCode::BackTab));
        assert_eq!(view.focused, items_for_step(&state).len() - 1);
    }

    #[test]
    fn test_focus_skips_headings() {
        let mut state = State::new();
        state.current_step = 4;
        state.record.education.append_default();
        let mut view = ViewState::new();
        view.sync_step(&state);
        assert_eq!(view.focused, 1);
    }

    #[test]
    fn test_select_cycles_options() {
        let mut state = State::new();
        let mut view = ViewState::new();
        view.focus_path(&state, &path("personalSchema.prefix"));

        let msg = view.handle_key(&state, press(KeyCode::Right));
        assert_eq!(msg, Some(Msg::SetField(path("personalSchema.prefix"), FieldValue::text("Mr"))));

        state.record.personal.prefix = "Mr".into();
        let msg = view.handle_key(&state, press(KeyCode::Left));
        assert_eq!(msg, Some(Msg::SetField(path("personalSchema.prefix"), FieldValue::text("Dr"))));
    }

    #[test]
    fn test_checkbox_group_toggles_in_option_order() {
        let mut state = State::new();
        state.current_step = 2;
        state.record.personal.languages_to_speak = vec!["Hindi".into()];
        let mut view = ViewState::new();
        view.focus_path(&state, &path("personalSchema.languagesToSpeak"));

        let msg = view.handle_key(&state, press(KeyCode::Char(' ')));
        assert_eq!(
            msg,
            Some(Msg::SetField(
                path("personalSchema.languagesToSpeak"),
                FieldValue::Choices(vec!["English".into(), "Hindi".into()])
            ))
        );
    }

    #[test]
    fn test_disabled_field_ignores_edits() {
        let mut state = State::new();
        state.current_step = 1;
        state.same_address = true;
        let mut view = ViewState::new();
        view.focus_path(&state, &path("personalSchema.correspondenceAddressLine1"));

        assert_eq!(view.handle_key(&state, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_actions_and_navigation_keys() {
        let mut state = State::new();
        state.current_step = 4;
        let mut view = ViewState::new();
        view.sync_step(&state);

        assert_eq!(view.handle_key(&state, press(KeyCode::Enter)), Some(Msg::AddEducation));
        assert_eq!(view.handle_key(&state, press(KeyCode::PageDown)), Some(Msg::Next));
        assert_eq!(view.handle_key(&state, press(KeyCode::Esc)), Some(Msg::Back));

        state.banner = Some(Banner::Error("nope".into()));
        assert_eq!(view.handle_key(&state, press(KeyCode::Esc)), Some(Msg::DismissBanner));

        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(view.handle_key(&state, quit), Some(Msg::Quit));
    }

    #[test]
    fn test_focus_path_targets_first_error() {
        let state = State::new();
        let mut view = ViewState::new();
        view.focus_path(&state, &path("personalSchema.emailId"));
        assert_eq!(view.focused, 5);
    }

    fn education_state(entries: usize) -> State {
        let mut state = State::new();
        state.current_step = 4;
        for _ in 0..entries {
            state.record.education.append_default();
        }
        state
    }

    fn focused_item(view: &ViewState, state: &State) -> FormItem {
        items_for_step(state).remove(view.focused)
    }

    #[test]
    fn test_removing_focused_entry_moves_to_the_next_entry() {
        let mut state = education_state(3);
        let mut view = ViewState::new();
        view.sync_step(&state);
        let remove = items_for_step(&state)
            .iter()
            .position(|i| *i == FormItem::Action { label: "Remove".into(), msg: Msg::RemoveEducation(1) })
            .unwrap();
        view.focused = remove;

        let anchor = view.anchor(&state).unwrap();
        crate::wizard::update(&mut state, Msg::RemoveEducation(1));
        view.sync_step(&state);
        view.restore(&state, &anchor);

        assert_eq!(focused_item(&view, &state).path(), Some(&path("educationSchema[1].class")));
    }

    #[test]
    fn test_focus_follows_entry_when_earlier_one_is_removed() {
        let mut state = education_state(3);
        let mut view = ViewState::new();
        view.focus_path(&state, &path("educationSchema[2].usn"));

        let anchor = view.anchor(&state).unwrap();
        crate::wizard::update(&mut state, Msg::RemoveEducation(0));
        view.sync_step(&state);
        view.restore(&state, &anchor);

        assert_eq!(focused_item(&view, &state).path(), Some(&path("educationSchema[1].usn")));
    }

    #[test]
    fn test_removing_last_entry_focuses_add() {
        let mut state = education_state(1);
        let mut view = ViewState::new();
        view.focus_path(&state, &path("educationSchema[0].passClass"));

        let anchor = view.anchor(&state).unwrap();
        crate::wizard::update(&mut state, Msg::RemoveEducation(0));
        view.sync_step(&state);
        view.restore(&state, &anchor);

        assert_eq!(
            focused_item(&view, &state),
            FormItem::Action { label: "+ Add Education".into(), msg: Msg::AddEducation }
        );
    }

    #[test]
    fn test_rows_outside_lists_have_no_anchor() {
        let state = State::new();
        let mut view = ViewState::new();
        view.sync_step(&state);
        assert!(view.anchor(&state).is_none());
    }

    #[test]
    fn test_cycle_wraps() {
        let opts = ["A", "B", "C"];
        assert_eq!(cycle(&opts, "C", 1), "A");
        assert_eq!(cycle(&opts, "A", -1), "C");
        assert_eq!(cycle(&opts, "", -1), "C");
    }
}
