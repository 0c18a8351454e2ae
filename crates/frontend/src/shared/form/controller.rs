use std::fmt::Debug;
use std::marker::PhantomData;

use contracts::domain::EntityId;
use serde::Serialize;

use crate::shared::api::{execute, fetch_one, ApiClient, ApiError, ApiRequest};
use crate::shared::feedback::{AlertLevel, Confirmer, Notifier};
use crate::shared::list::ListEntity;

/// A listed record that can also be created, edited and deleted
pub trait FormEntity: ListEntity {
    /// Flat form record submitted as the request body
    type Draft: Serialize + Default + Clone + PartialEq + Debug + Send + Sync + 'static;

    /// Singular name in messages ("category")
    const LABEL: &'static str;
    const DELETE_PROMPT: &'static str;

    fn to_draft(&self) -> Self::Draft;

    /// Fills derived fields right before submission
    fn finalize(draft: Self::Draft) -> Self::Draft {
        draft
    }

    fn saved_message(mode: FormMode) -> String {
        match mode {
            FormMode::Create => format!("{} added successfully!", capitalize(Self::LABEL)),
            FormMode::Edit(_) => format!("{} updated successfully!", capitalize(Self::LABEL)),
        }
    }

    fn rejected_message(_mode: FormMode, server_message: &str) -> String {
        server_message.to_string()
    }

    fn failed_message(mode: FormMode, error: &ApiError) -> String {
        match mode {
            FormMode::Create => format!("Error adding {}: {}", Self::LABEL, error),
            FormMode::Edit(_) => format!("Error updating {}: {}", Self::LABEL, error),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// Modal form state: `None` mode means the modal is closed
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    pub mode: Option<FormMode>,
    pub draft: D,
    pub submitting: bool,
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self {
            mode: None,
            draft: D::default(),
            submitting: false,
        }
    }
}

impl<D: Default> FormState<D> {
    pub fn open_create(&mut self) {
        self.mode = Some(FormMode::Create);
        self.draft = D::default();
        self.submitting = false;
    }

    pub fn open_edit(&mut self, id: EntityId, draft: D) {
        self.mode = Some(FormMode::Edit(id));
        self.draft = draft;
        self.submitting = false;
    }

    /// Closes the modal and resets the form
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed,
}

/// Talks to the backend for one entity's form and reports to the user
pub struct FormController<E: FormEntity, A: ApiClient, N: Notifier> {
    api: A,
    notifier: N,
    _entity: PhantomData<fn() -> E>,
}

impl<E: FormEntity, A: ApiClient, N: Notifier> Clone for FormController<E, A, N> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            notifier: self.notifier.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: FormEntity, A: ApiClient, N: Notifier> FormController<E, A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            _entity: PhantomData,
        }
    }

    /// `POST /{resource}` or `PUT /{resource}/{id}` with the finalized draft
    pub async fn submit(&self, mode: FormMode, draft: E::Draft) -> SubmitOutcome {
        let draft = E::finalize(draft);
        let request = match mode {
            FormMode::Create => ApiRequest::post(E::collection_path(), &draft),
            FormMode::Edit(id) => ApiRequest::put(E::item_path(id), &draft),
        };

        let result = match request {
            Ok(request) => execute(&self.api, request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(_) => {
                log::info!("Saved {} ({:?})", E::LABEL, mode);
                self.notifier
                    .notify(AlertLevel::Success, E::saved_message(mode));
                SubmitOutcome::Saved
            }
            Err(ApiError::Rejected(message)) => {
                let message = E::rejected_message(mode, &message);
                self.notifier.notify(AlertLevel::Danger, message.clone());
                SubmitOutcome::Rejected(message)
            }
            Err(e) => {
                log::error!("Saving {} failed: {}", E::LABEL, e);
                let message = E::failed_message(mode, &e);
                self.notifier.notify(AlertLevel::Danger, message.clone());
                SubmitOutcome::Rejected(message)
            }
        }
    }

    /// Fetches the record and returns its draft; `None` keeps the modal closed
    pub async fn load_for_edit(&self, id: EntityId) -> Option<E::Draft> {
        match fetch_one::<E, A>(&self.api, E::item_path(id)).await {
            Ok(record) => Some(record.to_draft()),
            Err(ApiError::Rejected(message)) => {
                self.notifier.notify(AlertLevel::Danger, message);
                None
            }
            Err(e) => {
                log::error!("Loading {} {} failed: {}", E::LABEL, id, e);
                self.notifier.notify(
                    AlertLevel::Danger,
                    format!("Error loading {}: {}", E::LABEL, e),
                );
                None
            }
        }
    }

    /// Deletes after explicit confirmation; a declined prompt sends nothing
    pub async fn delete(&self, id: EntityId, confirmer: &impl Confirmer) -> DeleteOutcome {
        if !confirmer.confirm(E::DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match execute(&self.api, ApiRequest::delete(E::item_path(id))).await {
            Ok(_) => {
                log::info!("Deleted {} {}", E::LABEL, id);
                self.notifier.notify(
                    AlertLevel::Success,
                    format!("{} deleted successfully!", capitalize(E::LABEL)),
                );
                DeleteOutcome::Deleted
            }
            Err(ApiError::Rejected(message)) => {
                self.notifier.notify(AlertLevel::Danger, message);
                DeleteOutcome::Failed
            }
            Err(e) => {
                log::error!("Deleting {} {} failed: {}", E::LABEL, id, e);
                self.notifier.notify(
                    AlertLevel::Danger,
                    format!("Error deleting {}: {}", E::LABEL, e),
                );
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{Envelope, Method};
    use crate::shared::testing::{FixedConfirm, MockApi, RecordingNotifier, Widget};
    use futures::executor::block_on;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct WidgetDraft {
        name: String,
        note: Option<String>,
    }

    impl FormEntity for Widget {
        type Draft = WidgetDraft;

        const LABEL: &'static str = "widget";
        const DELETE_PROMPT: &'static str = "Are you sure you want to delete this widget?";

        fn to_draft(&self) -> WidgetDraft {
            WidgetDraft {
                name: self.name.clone(),
                note: self.note.clone(),
            }
        }
    }

    fn controller() -> (FormController<Widget, MockApi, RecordingNotifier>, MockApi, RecordingNotifier) {
        let api = MockApi::new();
        let notifier = RecordingNotifier::new();
        (FormController::new(api.clone(), notifier.clone()), api, notifier)
    }

    #[test]
    fn test_create_posts_draft_and_notifies() {
        let (form, api, notifier) = controller();
        api.respond(Method::Post, "/widgets", Envelope::ok(json!({"widget_id": 5})));

        let draft = WidgetDraft {
            name: "Gear".to_string(),
            note: None,
        };
        assert_eq!(block_on(form.submit(FormMode::Create, draft)), SubmitOutcome::Saved);

        let request = &api.requests()[0];
        assert_eq!(request.path, "/widgets");
        assert_eq!(request.body, Some(json!({"name": "Gear", "note": null})));
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Success, "Widget added successfully!".to_string()))
        );
    }

    #[test]
    fn test_edit_puts_to_item_path() {
        let (form, api, notifier) = controller();
        api.respond(Method::Put, "/widgets/5", Envelope::ok(json!(null)));

        block_on(form.submit(FormMode::Edit(5), WidgetDraft::default()));
        assert_eq!(api.requests()[0].method, Method::Put);
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Success, "Widget updated successfully!".to_string()))
        );
    }

    #[test]
    fn test_rejected_submit_reports_server_message() {
        let (form, api, notifier) = controller();
        api.respond(Method::Post, "/widgets", Envelope::failure("Name already exists"));

        let outcome = block_on(form.submit(FormMode::Create, WidgetDraft::default()));
        assert_eq!(outcome, SubmitOutcome::Rejected("Name already exists".to_string()));
        assert_eq!(notifier.last().map(|(level, _)| level), Some(AlertLevel::Danger));
    }

    #[test]
    fn test_transport_failure_message() {
        let (form, api, notifier) = controller();
        api.fail(Method::Post, "/widgets", ApiError::Transport("Failed to fetch".into()));

        block_on(form.submit(FormMode::Create, WidgetDraft::default()));
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Danger, "Error adding widget: Failed to fetch".to_string()))
        );
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let (form, api, notifier) = controller();
        let confirm = FixedConfirm::decline();

        assert_eq!(block_on(form.delete(9, &confirm)), DeleteOutcome::Cancelled);
        assert!(api.requests().is_empty());
        assert!(notifier.messages().is_empty());
        assert_eq!(
            confirm.prompts(),
            vec!["Are you sure you want to delete this widget?".to_string()]
        );
    }

    #[test]
    fn test_confirmed_delete() {
        let (form, api, notifier) = controller();
        api.respond(Method::Delete, "/widgets/9", Envelope::ok(json!(null)));

        assert_eq!(block_on(form.delete(9, &FixedConfirm::accept())), DeleteOutcome::Deleted);
        assert_eq!(api.requests_with(Method::Delete).len(), 1);
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Success, "Widget deleted successfully!".to_string()))
        );
    }

    #[test]
    fn test_load_for_edit_failure_keeps_modal_closed() {
        let (form, api, notifier) = controller();
        api.respond(Method::Get, "/widgets/4", Envelope::failure("Widget not found"));

        assert_eq!(block_on(form.load_for_edit(4)), None);
        assert_eq!(
            notifier.last(),
            Some((AlertLevel::Danger, "Widget not found".to_string()))
        );
    }

    #[test]
    fn test_form_state_close_resets_draft() {
        let mut state = FormState::<WidgetDraft>::default();
        state.open_edit(
            3,
            WidgetDraft {
                name: "Cog".to_string(),
                note: None,
            },
        );
        assert!(state.is_open());
        assert_eq!(state.mode, Some(FormMode::Edit(3)));

        state.close();
        assert_eq!(state, FormState::default());
    }
}
