//! UI events and handler registration
//!
//! Hosts report raw [`DomEvent`]s (which element, what happened, any payload).
//! [`Bindings`] maps each registered trigger to a semantic [`UiEvent`] for the
//! controller. Unregistered triggers resolve to nothing.

use biblioteca_core::FormInput;

/// Elements that carry listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Document,
    LivroForm,
    CancelBtn,
    SearchInput,
    SearchBtn,
    ClearSearchBtn,
    FilterDisponiveis,
    /// Edit button on a card; the record id travels in the detail
    EditAction,
    /// Delete button on a card; the record id travels in the detail
    DeleteAction,
    ConfirmModal,
    ModalContent,
    ConfirmDelete,
    CancelDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DomContentLoaded,
    Submit,
    Click,
    Change,
    Input,
    KeyPress,
}

/// Payload accompanying a raw event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventDetail {
    #[default]
    None,
    /// Form field values at submit time
    Form(FormInput),
    /// Checkbox state after a change
    Checked(bool),
    /// Text field contents after input
    Value(String),
    /// Key name of a key press
    Key(String),
    /// Innermost element that was clicked
    Target(ElementId),
    /// Record id on a card action
    Record(i64),
}

/// What the host observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub element: ElementId,
    pub kind: EventKind,
    pub detail: EventDetail,
}

impl DomEvent {
    pub fn new(element: ElementId, kind: EventKind) -> Self {
        Self {
            element,
            kind,
            detail: EventDetail::None,
        }
    }

    pub fn with_detail(mut self, detail: EventDetail) -> Self {
        self.detail = detail;
        self
    }

    pub fn loaded() -> Self {
        Self::new(ElementId::Document, EventKind::DomContentLoaded)
    }

    pub fn click(element: ElementId) -> Self {
        Self::new(element, EventKind::Click)
    }

    pub fn submit(form: FormInput) -> Self {
        Self::new(ElementId::LivroForm, EventKind::Submit).with_detail(EventDetail::Form(form))
    }

    pub fn key_press(key: impl Into<String>) -> Self {
        Self::new(ElementId::SearchInput, EventKind::KeyPress)
            .with_detail(EventDetail::Key(key.into()))
    }

    pub fn search_input(value: impl Into<String>) -> Self {
        Self::new(ElementId::SearchInput, EventKind::Input)
            .with_detail(EventDetail::Value(value.into()))
    }

    pub fn filter_change(checked: bool) -> Self {
        Self::new(ElementId::FilterDisponiveis, EventKind::Change)
            .with_detail(EventDetail::Checked(checked))
    }

    pub fn edit(id: i64) -> Self {
        Self::click(ElementId::EditAction).with_detail(EventDetail::Record(id))
    }

    pub fn delete(id: i64) -> Self {
        Self::click(ElementId::DeleteAction).with_detail(EventDetail::Record(id))
    }

    /// Click on the modal overlay whose innermost target is `target`
    pub fn modal_click(target: ElementId) -> Self {
        Self::click(ElementId::ConfirmModal).with_detail(EventDetail::Target(target))
    }
}

/// Semantic events handled by [`crate::App`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Ready,
    SubmitForm(FormInput),
    CancelEdit,
    SearchInput(String),
    Search,
    ClearSearch,
    FilterChanged(bool),
    EditRequested(i64),
    DeleteRequested(i64),
    ConfirmDelete,
    CloseModal,
}

type Handler = fn(&DomEvent) -> Option<UiEvent>;

/// A registered (element, kind) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trigger {
    pub element: ElementId,
    pub kind: EventKind,
}

/// Registry of listeners
#[derive(Clone, Default)]
pub struct Bindings {
    handlers: Vec<(Trigger, Handler)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Later registrations for the same trigger are
    /// consulted after earlier ones.
    pub fn on(&mut self, element: ElementId, kind: EventKind, handler: Handler) -> &mut Self {
        self.handlers.push((Trigger { element, kind }, handler));
        self
    }

    /// The listeners the page wires up at startup
    pub fn standard() -> Self {
        let mut bindings = Self::new();
        bindings
            .on(ElementId::Document, EventKind::DomContentLoaded, |_| {
                Some(UiEvent::Ready)
            })
            .on(ElementId::LivroForm, EventKind::Submit, |e| match &e.detail {
                EventDetail::Form(form) => Some(UiEvent::SubmitForm(form.clone())),
                _ => None,
            })
            .on(ElementId::CancelBtn, EventKind::Click, |_| {
                Some(UiEvent::CancelEdit)
            })
            .on(ElementId::SearchBtn, EventKind::Click, |_| Some(UiEvent::Search))
            .on(ElementId::ClearSearchBtn, EventKind::Click, |_| {
                Some(UiEvent::ClearSearch)
            })
            .on(ElementId::FilterDisponiveis, EventKind::Change, |e| {
                match e.detail {
                    EventDetail::Checked(checked) => Some(UiEvent::FilterChanged(checked)),
                    _ => None,
                }
            })
            .on(ElementId::SearchInput, EventKind::Input, |e| match &e.detail {
                EventDetail::Value(value) => Some(UiEvent::SearchInput(value.clone())),
                _ => None,
            })
            .on(ElementId::SearchInput, EventKind::KeyPress, |e| match &e.detail {
                EventDetail::Key(key) if key == "Enter" => Some(UiEvent::Search),
                _ => None,
            })
            .on(ElementId::EditAction, EventKind::Click, |e| match e.detail {
                EventDetail::Record(id) => Some(UiEvent::EditRequested(id)),
                _ => None,
            })
            .on(ElementId::DeleteAction, EventKind::Click, |e| match e.detail {
                EventDetail::Record(id) => Some(UiEvent::DeleteRequested(id)),
                _ => None,
            })
            .on(ElementId::CancelDelete, EventKind::Click, |_| {
                Some(UiEvent::CloseModal)
            })
            .on(ElementId::ConfirmModal, EventKind::Click, |e| match e.detail {
                // only a click on the overlay itself, not on the dialog body
                EventDetail::Target(ElementId::ConfirmModal) => Some(UiEvent::CloseModal),
                _ => None,
            })
            .on(ElementId::ConfirmDelete, EventKind::Click, |_| {
                Some(UiEvent::ConfirmDelete)
            });
        bindings
    }

    /// Resolve a raw event through the first matching listener that produces
    /// an event
    pub fn resolve(&self, event: &DomEvent) -> Option<UiEvent> {
        self.handlers
            .iter()
            .filter(|(trigger, _)| trigger.element == event.element && trigger.kind == event.kind)
            .find_map(|(_, handler)| handler(event))
    }

    /// Registered triggers, in registration order
    pub fn triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        self.handlers.iter().map(|(trigger, _)| *trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_key_searches_other_keys_ignored() {
        let bindings = Bindings::standard();
        assert_eq!(bindings.resolve(&DomEvent::key_press("Enter")), Some(UiEvent::Search));
        assert_eq!(bindings.resolve(&DomEvent::key_press("a")), None);
    }

    #[test]
    fn test_outside_click_closes_modal_inside_click_does_not() {
        let bindings = Bindings::standard();
        assert_eq!(
            bindings.resolve(&DomEvent::modal_click(ElementId::ConfirmModal)),
            Some(UiEvent::CloseModal)
        );
        assert_eq!(bindings.resolve(&DomEvent::modal_click(ElementId::ModalContent)), None);
    }

    #[test]
    fn test_card_actions_carry_id() {
        let bindings = Bindings::standard();
        assert_eq!(bindings.resolve(&DomEvent::edit(4)), Some(UiEvent::EditRequested(4)));
        assert_eq!(bindings.resolve(&DomEvent::delete(4)), Some(UiEvent::DeleteRequested(4)));
    }

    #[test]
    fn test_unregistered_trigger_resolves_to_nothing() {
        let bindings = Bindings::standard();
        let event = DomEvent::new(ElementId::SearchBtn, EventKind::Change);
        assert_eq!(bindings.resolve(&event), None);
        assert!(Bindings::new().resolve(&DomEvent::loaded()).is_none());
    }

    #[test]
    fn test_standard_registers_each_trigger_once() {
        let triggers: Vec<_> = Bindings::standard().triggers().collect();
        let unique: std::collections::HashSet<_> = triggers.iter().collect();
        assert_eq!(triggers.len(), unique.len());
        assert_eq!(triggers.len(), 13);
    }

    #[test]
    fn test_filter_change_and_submit() {
        let bindings = Bindings::standard();
        assert_eq!(
            bindings.resolve(&DomEvent::filter_change(true)),
            Some(UiEvent::FilterChanged(true))
        );
        let form = FormInput {
            titulo: "A".to_string(),
            ..FormInput::default()
        };
        assert_eq!(
            bindings.resolve(&DomEvent::submit(form.clone())),
            Some(UiEvent::SubmitForm(form))
        );
    }
}
