use contracts::domain::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::{DeleteOutcome, FormController, FormEntity, FormState, SubmitOutcome};
use crate::shared::api::ApiClient;
use crate::shared::feedback::{BrowserConfirm, Notifier};

/// Reactive wrapper that runs a [`FormController`] behind a modal.
///
/// `on_changed` runs after every successful save or delete, typically to
/// reload the list.
pub struct FormHandle<E: FormEntity, A: ApiClient, N: Notifier> {
    controller: StoredValue<FormController<E, A, N>>,
    state: RwSignal<FormState<E::Draft>>,
    on_changed: Callback<()>,
}

impl<E: FormEntity, A: ApiClient, N: Notifier> Clone for FormHandle<E, A, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: FormEntity, A: ApiClient, N: Notifier> Copy for FormHandle<E, A, N> {}

impl<E: FormEntity, A: ApiClient, N: Notifier> FormHandle<E, A, N> {
    pub fn new(api: A, notifier: N, on_changed: Callback<()>) -> Self {
        Self {
            controller: StoredValue::new(FormController::new(api, notifier)),
            state: RwSignal::new(FormState::default()),
            on_changed,
        }
    }

    pub fn state(&self) -> RwSignal<FormState<E::Draft>> {
        self.state
    }

    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_open()))
    }

    pub fn update_draft(&self, change: impl FnOnce(&mut E::Draft)) {
        self.state.update(|s| change(&mut s.draft));
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    /// Loads the record first; the modal opens only if that succeeds
    pub fn open_edit(&self, id: EntityId) {
        let controller = self.controller.get_value();
        let state = self.state;
        spawn_local(async move {
            if let Some(draft) = controller.load_for_edit(id).await {
                state.update(|s| s.open_edit(id, draft));
            }
        });
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn submit(&self) {
        let Some((mode, draft)) = self.state.try_update(|s| {
            if s.submitting {
                return None;
            }
            let mode = s.mode?;
            s.submitting = true;
            Some((mode, s.draft.clone()))
        }).flatten() else {
            return;
        };

        let controller = self.controller.get_value();
        let state = self.state;
        let on_changed = self.on_changed;
        spawn_local(async move {
            match controller.submit(mode, draft).await {
                SubmitOutcome::Saved => {
                    state.update(|s| s.close());
                    on_changed.run(());
                }
                SubmitOutcome::Rejected(_) => state.update(|s| s.submitting = false),
            }
        });
    }

    pub fn delete(&self, id: EntityId) {
        let controller = self.controller.get_value();
        let on_changed = self.on_changed;
        spawn_local(async move {
            if controller.delete(id, &BrowserConfirm).await == DeleteOutcome::Deleted {
                on_changed.run(());
            }
        });
    }
}
