use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::{fetch_page, ListController, LoadTicket};
use super::entity::ListEntity;
use super::pagination::PageLink;
use super::render::RowDescriptor;
use crate::shared::api::ApiClient;
use crate::shared::export::export_rows_to_csv;

/// Outcome of a successful load that was applied to the table
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<F> {
    pub token: u64,
    pub filters: F,
    pub total: u64,
}

/// Reactive wrapper that runs a [`ListController`] inside a page.
///
/// Responses are applied through `complete_load`, so overlapping loads
/// resolve to the last one issued.
pub struct ListHandle<E: ListEntity, A: ApiClient> {
    state: RwSignal<ListController<E>>,
    api: StoredValue<A>,
    after_load: Option<Callback<LoadedPage<E::Filter>>>,
}

impl<E: ListEntity, A: ApiClient> Clone for ListHandle<E, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ListEntity, A: ApiClient> Copy for ListHandle<E, A> {}

impl<E: ListEntity, A: ApiClient> ListHandle<E, A> {
    pub fn new(api: A) -> Self {
        Self {
            state: RwSignal::new(ListController::new()),
            api: StoredValue::new(api),
            after_load: None,
        }
    }

    /// Runs `callback` after each applied successful load
    pub fn with_after_load(mut self, callback: Callback<LoadedPage<E::Filter>>) -> Self {
        self.after_load = Some(callback);
        self
    }

    pub fn state(&self) -> RwSignal<ListController<E>> {
        self.state
    }

    pub fn rows(&self) -> Signal<Vec<RowDescriptor>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.rows()))
    }

    pub fn page_links(&self) -> Signal<Vec<PageLink>> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.page_links()))
    }

    pub fn total(&self) -> Signal<u64> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.total()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|c| c.is_loading()))
    }

    /// Downloads the rows currently shown as a CSV file
    pub fn export_csv(&self, filename: &str) {
        let rows = self.state.with_untracked(|c| c.rows());
        if let Err(e) = export_rows_to_csv(E::headers(), &rows, filename) {
            log::warn!("CSV export of {} failed: {}", E::RESOURCE, e);
        }
    }

    pub fn filters(&self) -> E::Filter {
        self.state.with_untracked(|c| c.filters().clone())
    }

    pub fn load(&self, page: u32, filters: E::Filter) {
        let ticket = self.state.try_update(|c| c.begin_load(page, filters));
        self.dispatch(ticket);
    }

    pub fn reload(&self) {
        let ticket = self.state.try_update(|c| c.reload());
        self.dispatch(ticket);
    }

    pub fn apply_filters(&self, filters: E::Filter) {
        let ticket = self.state.try_update(|c| c.apply_filters(filters));
        self.dispatch(ticket);
    }

    /// Changes the current filters in place and reloads from page 1
    pub fn update_filters(&self, change: impl FnOnce(&mut E::Filter)) {
        let mut filters = self.filters();
        change(&mut filters);
        self.apply_filters(filters);
    }

    pub fn go_to_page(&self, page: u32) {
        let ticket = self.state.try_update(|c| c.go_to_page(page)).flatten();
        self.dispatch(ticket);
    }

    fn dispatch(&self, ticket: Option<LoadTicket<E::Filter>>) {
        let Some(ticket) = ticket else {
            return;
        };
        let api = self.api.get_value();
        let state = self.state;
        let after_load = self.after_load;

        spawn_local(async move {
            let result = fetch_page::<E, A>(&api, &ticket).await;
            let loaded = result.as_ref().ok().map(|collection| LoadedPage {
                token: ticket.token,
                filters: ticket.filters.clone(),
                total: collection.total,
            });
            let applied = state
                .try_update(|c| c.complete_load(ticket.token, result))
                .unwrap_or(false);

            if let (true, Some(callback), Some(loaded)) = (applied, after_load, loaded) {
                callback.run(loaded);
            }
        });
    }
}
