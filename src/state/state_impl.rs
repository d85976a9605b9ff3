use crate::app::SpinEventSender;
use crate::config::{Config, DEFAULT_UPPER_BOUND};
use crate::events::spin::Event as SpinEvent;
use log::*;
use rand::Rng;

use super::entries::{Entry, EntryList};
use super::navigation::{Focus, View};
use super::spin::SpinState;

/// Houses data representative of application state.
///
pub struct State {
    spin_sender: Option<SpinEventSender>,
    entries: EntryList,
    spin: SpinState,
    upper_bound: f32,
    current_view: View,
    current_focus: Focus,
    name_input: String,
    entry_index: usize, // selection in the editing list
    slice_index: usize, // selection on the wheel
    show_log: bool,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            spin_sender: None,
            entries: EntryList::new(),
            spin: SpinState::default(),
            upper_bound: DEFAULT_UPPER_BOUND,
            current_view: View::Editing,
            current_focus: Focus::Input,
            name_input: String::new(),
            entry_index: 0,
            slice_index: 0,
            show_log: false,
        }
    }
}

impl State {
    /// Return a new instance wired to the spin worker channel and tuned
    /// according to the given configuration.
    ///
    pub fn new(spin_sender: SpinEventSender, config: &Config) -> State {
        State {
            spin_sender: Some(spin_sender),
            upper_bound: config.upper_bound,
            ..State::default()
        }
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        &self.current_view
    }

    /// Switch between the editing screen and the wheel screen.
    ///
    pub fn toggle_view(&mut self) {
        self.current_view = self.current_view.toggled();
        debug!("Switched to view '{:?}'.", self.current_view);
    }

    /// Return the current focus within the editing view.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Move focus to the name input.
    ///
    pub fn focus_input(&mut self) {
        self.current_focus = Focus::Input;
    }

    /// Move focus to the entries list.
    ///
    pub fn focus_entries(&mut self) {
        self.current_focus = Focus::Entries;
    }

    /// Switch focus between the name input and the entries list.
    ///
    pub fn toggle_focus(&mut self) {
        self.current_focus = match self.current_focus {
            Focus::Input => Focus::Entries,
            Focus::Entries => Focus::Input,
        };
    }

    /// Return whether keystrokes should currently be routed to the name
    /// input buffer.
    ///
    pub fn is_name_input_mode(&self) -> bool {
        self.current_view == View::Editing && self.current_focus == Focus::Input
    }

    /// Return the current contents of the name input buffer.
    ///
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Append a character to the name input buffer.
    ///
    pub fn add_input_char(&mut self, c: char) {
        self.name_input.push(c);
    }

    /// Remove the last character from the name input buffer.
    ///
    pub fn remove_input_char(&mut self) {
        self.name_input.pop();
    }

    /// Submit the name input buffer to the entry list, splitting on commas.
    /// Empty and duplicate candidates are silently skipped; the buffer is
    /// cleared either way.
    ///
    pub fn submit_name_input(&mut self) {
        let input = std::mem::take(&mut self.name_input);
        let added = self.entries.add(&input);
        if added > 0 {
            info!("Added {} entries from input.", added);
        }
        self.clamp_selection();
    }

    /// Return a view of all entries in order.
    ///
    pub fn entries(&self) -> &[Entry] {
        self.entries.entries()
    }

    /// Return the index of the selected entry in the editing list.
    ///
    pub fn selected_entry_index(&self) -> usize {
        self.entry_index
    }

    /// Return the selected entry in the editing list, if any.
    ///
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.entry_index)
    }

    /// Move the editing list selection down, wrapping at the end.
    ///
    pub fn next_entry(&mut self) {
        if !self.entries.is_empty() {
            self.entry_index = (self.entry_index + 1) % self.entries.len();
        }
    }

    /// Move the editing list selection up, wrapping at the start.
    ///
    pub fn previous_entry(&mut self) {
        if !self.entries.is_empty() {
            self.entry_index = self
                .entry_index
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }

    /// Remove all entries sharing the selected entry's name, matching the
    /// list view's batch-remove-by-name semantics.
    ///
    pub fn remove_selected_entry(&mut self) {
        if let Some(entry) = self.entries.get(self.entry_index) {
            let name = entry.name.clone();
            let removed = self.entries.remove(&name);
            debug!("Removed {} entries named '{}'.", removed, name);
            self.clamp_selection();
        }
    }

    /// Return the index of the selected slice on the wheel.
    ///
    pub fn selected_slice_index(&self) -> usize {
        self.slice_index
    }

    /// Move the wheel slice selection forward, wrapping around.
    ///
    pub fn next_slice(&mut self) {
        if !self.entries.is_empty() {
            self.slice_index = (self.slice_index + 1) % self.entries.len();
        }
    }

    /// Move the wheel slice selection backward, wrapping around.
    ///
    pub fn previous_slice(&mut self) {
        if !self.entries.is_empty() {
            self.slice_index = self
                .slice_index
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }

    /// Remove the selected slice by position, matching the wheel view's
    /// remove-at-index semantics.
    ///
    pub fn remove_selected_slice(&mut self) {
        if let Some(entry) = self.entries.remove_at(self.slice_index) {
            debug!("Removed slice '{}' from the wheel.", entry.name);
            self.clamp_selection();
        }
    }

    /// Return whether a spin run is in progress.
    ///
    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    /// Return the current rotation angle of the wheel in degrees.
    ///
    pub fn spin_angle(&self) -> f32 {
        self.spin.angle()
    }

    /// Begin a spin run towards a random target and hand the animation to
    /// the spin worker. Triggering while a run is in progress is a no-op.
    ///
    pub fn trigger_spin(&mut self) {
        if self.spin.is_spinning() {
            debug!("Ignoring spin trigger while a run is in progress.");
            return;
        }
        let target = rand::thread_rng().gen_range(0.0..self.upper_bound);
        if self.spin.start(target) {
            info!("Starting spin towards target angle {:.1}...", target);
            self.dispatch(SpinEvent::Spin);
        }
    }

    /// Return the target magnitude of the current or most recent run.
    ///
    pub fn spin_target(&self) -> f32 {
        self.spin.target()
    }

    /// Apply one animation step to the current run. Returns true once the
    /// run is over.
    ///
    pub fn advance_spin(&mut self) -> bool {
        self.spin.advance()
    }

    /// Return whether the log pane is visible.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Show or hide the log pane.
    ///
    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    /// Send an event to the spin worker thread.
    ///
    fn dispatch(&self, event: SpinEvent) {
        if let Some(sender) = &self.spin_sender {
            if let Err(e) = sender.send(event) {
                error!("Failed to dispatch spin event: {}", e);
            }
        }
    }

    /// Keep both selection indices within the list bounds after a
    /// structural mutation.
    ///
    fn clamp_selection(&mut self) {
        let last = self.entries.len().saturating_sub(1);
        self.entry_index = self.entry_index.min(last);
        self.slice_index = self.slice_index.min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_entries(raw: &str) -> State {
        let mut state = State::default();
        for c in raw.chars() {
            state.add_input_char(c);
        }
        state.submit_name_input();
        state
    }

    #[test]
    fn submit_name_input_adds_entries_and_clears_buffer() {
        let state = state_with_entries("Alice,Bob");
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.name_input(), "");
    }

    #[test]
    fn submit_duplicate_leaves_list_unchanged() {
        let mut state = state_with_entries("Alice");
        state.add_input_char('A');
        state.add_input_char('l');
        state.add_input_char('i');
        state.add_input_char('c');
        state.add_input_char('e');
        state.submit_name_input();
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn remove_selected_entry_removes_by_name() {
        let mut state = state_with_entries("Alice,Bob,Carol");
        state.focus_entries();
        state.next_entry();
        let name = state.selected_entry().unwrap().name.clone();
        state.remove_selected_entry();
        assert_eq!(state.entries().len(), 2);
        assert!(state.entries().iter().all(|e| e.name != name));
    }

    #[test]
    fn remove_selected_slice_removes_by_position() {
        let mut state = state_with_entries("Alice,Bob,Carol");
        state.next_slice();
        state.remove_selected_slice();
        // Entries are newest-first: Carol, Bob, Alice. Index 1 is Bob.
        let names: Vec<&str> = state.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice"]);
    }

    #[test]
    fn selection_is_clamped_after_removal() {
        let mut state = state_with_entries("Alice,Bob");
        state.next_entry();
        state.remove_selected_entry();
        assert_eq!(state.selected_entry_index(), 0);
        state.remove_selected_entry();
        assert_eq!(state.selected_entry_index(), 0);
        assert!(state.entries().is_empty());
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state_with_entries("Alice,Bob,Carol");
        state.previous_entry();
        assert_eq!(state.selected_entry_index(), 2);
        state.next_entry();
        assert_eq!(state.selected_entry_index(), 0);
        state.previous_slice();
        assert_eq!(state.selected_slice_index(), 2);
        state.next_slice();
        assert_eq!(state.selected_slice_index(), 0);
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut state = State::default();
        state.next_entry();
        state.previous_entry();
        state.next_slice();
        state.previous_slice();
        state.remove_selected_entry();
        state.remove_selected_slice();
        assert_eq!(state.selected_entry_index(), 0);
        assert_eq!(state.selected_slice_index(), 0);
    }

    #[test]
    fn toggle_view_twice_returns_to_original() {
        let mut state = State::default();
        assert_eq!(*state.current_view(), View::Editing);
        state.toggle_view();
        assert_eq!(*state.current_view(), View::Wheel);
        state.toggle_view();
        assert_eq!(*state.current_view(), View::Editing);
    }

    #[test]
    fn toggle_focus_switches_between_input_and_entries() {
        let mut state = State::default();
        assert!(state.is_name_input_mode());
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Entries);
        assert!(!state.is_name_input_mode());
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Input);
    }

    #[test]
    fn input_mode_only_applies_to_editing_view() {
        let mut state = State::default();
        state.toggle_view();
        assert!(!state.is_name_input_mode());
    }

    #[test]
    fn trigger_spin_starts_a_run() {
        let mut state = State::default();
        state.trigger_spin();
        assert!(state.is_spinning());
        assert_eq!(state.spin_angle(), 0.0);
    }

    #[test]
    fn trigger_spin_while_spinning_is_noop() {
        let mut state = State::default();
        state.trigger_spin();
        state.advance_spin();
        state.advance_spin();
        let angle = state.spin_angle();
        state.trigger_spin();
        assert_eq!(state.spin_angle(), angle);
        assert!(state.is_spinning());
    }

    #[test]
    fn spin_run_completes_within_upper_bound_steps() {
        let mut state = State::default();
        state.trigger_spin();
        let mut steps = 0;
        while !state.advance_spin() {
            steps += 1;
            assert!(steps <= DEFAULT_UPPER_BOUND as usize + 1);
        }
        assert!(!state.is_spinning());
    }

    #[test]
    fn toggle_log_flips_visibility() {
        let mut state = State::default();
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
        state.toggle_log();
        assert!(!state.is_log_visible());
    }
}
