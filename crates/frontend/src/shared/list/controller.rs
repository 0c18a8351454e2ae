use contracts::shared::api_response::Paginated;
use serde::Serialize;

use super::entity::ListEntity;
use super::pagination::{page_links, PageLink};
use super::render::{error_row, loading_row, render, RowDescriptor};
use crate::shared::api::{fetch_data, ApiClient, ApiError, ApiRequest};
use crate::shared::api_utils::{encode_query, with_query};

#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    Idle,
    Loading,
    Rendered,
    Errored(String),
}

/// One issued load: the request token plus what was asked for
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket<F> {
    pub token: u64,
    pub page: u32,
    pub per_page: u32,
    pub filters: F,
}

impl<F: Serialize> LoadTicket<F> {
    /// `/{resource}?page=..&per_page=..&<filters>`
    pub fn path(&self, resource: &str) -> Result<String, ApiError> {
        let base = format!("/{}?page={}&per_page={}", resource, self.page, self.per_page);
        let query = encode_query(&self.filters).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(with_query(&base, &query))
    }
}

/// State of one list page.
///
/// Every load gets a new token; a response is applied only if its token is
/// the latest issued one and the controller is still loading, so the final
/// state always matches the last request made.
#[derive(Debug, Clone)]
pub struct ListController<E: ListEntity> {
    phase: ListPhase,
    page: u32,
    per_page: u32,
    filters: E::Filter,
    collection: Option<Paginated<E>>,
    latest_token: u64,
}

impl<E: ListEntity> Default for ListController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ListEntity> ListController<E> {
    pub fn new() -> Self {
        Self::with_per_page(E::PER_PAGE)
    }

    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            phase: ListPhase::Idle,
            page: 1,
            per_page: per_page.max(1),
            filters: E::Filter::default(),
            collection: None,
            latest_token: 0,
        }
    }

    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn filters(&self) -> &E::Filter {
        &self.filters
    }

    pub fn collection(&self) -> Option<&Paginated<E>> {
        self.collection.as_ref()
    }

    pub fn items(&self) -> &[E] {
        self.collection
            .as_ref()
            .map(|c| c.items.as_slice())
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Enter `Loading` for `page` with `filters` and issue a new token
    pub fn begin_load(&mut self, page: u32, filters: E::Filter) -> LoadTicket<E::Filter> {
        self.latest_token += 1;
        self.phase = ListPhase::Loading;
        self.page = page.max(1);
        self.filters = filters;

        LoadTicket {
            token: self.latest_token,
            page: self.page,
            per_page: self.per_page,
            filters: self.filters.clone(),
        }
    }

    pub fn reload(&mut self) -> LoadTicket<E::Filter> {
        self.begin_load(self.page, self.filters.clone())
    }

    /// New filters always start from the first page
    pub fn apply_filters(&mut self, filters: E::Filter) -> LoadTicket<E::Filter> {
        self.begin_load(1, filters)
    }

    /// `None` when `page` is outside `[1, total_pages]`
    pub fn go_to_page(&mut self, page: u32) -> Option<LoadTicket<E::Filter>> {
        let total_pages = self.collection.as_ref().map_or(0, |c| c.total_pages);
        if page < 1 || page > total_pages {
            log::debug!("Ignoring page {} of {} for {}", page, total_pages, E::RESOURCE);
            return None;
        }
        Some(self.begin_load(page, self.filters.clone()))
    }

    /// Apply the outcome of the load identified by `token`.
    ///
    /// Returns `false` when the response was stale and discarded.
    pub fn complete_load(
        &mut self,
        token: u64,
        result: Result<Paginated<E>, ApiError>,
    ) -> bool {
        if token != self.latest_token || self.phase != ListPhase::Loading {
            log::warn!(
                "Discarding stale {} response (token {}, latest {})",
                E::RESOURCE,
                token,
                self.latest_token
            );
            return false;
        }

        match result {
            Ok(collection) => {
                log::debug!(
                    "Loaded {} {} (page {}/{})",
                    collection.items.len(),
                    E::RESOURCE,
                    collection.page,
                    collection.total_pages
                );
                if collection.total_pages > 0 {
                    self.page = collection.page;
                }
                self.collection = Some(collection);
                self.phase = ListPhase::Rendered;
            }
            Err(e) => {
                log::error!("Error loading {}: {}", E::NOUN, e);
                self.collection = None;
                self.phase = ListPhase::Errored(e.to_string());
            }
        }
        true
    }

    pub fn rows(&self) -> Vec<RowDescriptor> {
        match &self.phase {
            ListPhase::Idle | ListPhase::Loading => vec![loading_row::<E>()],
            ListPhase::Rendered => render(self.items()),
            ListPhase::Errored(message) => vec![error_row::<E>(message)],
        }
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        match &self.collection {
            Some(c) => page_links(c.page, c.total_pages),
            None => Vec::new(),
        }
    }

    /// Total matching records of the last successful load
    pub fn total(&self) -> u64 {
        self.collection.as_ref().map_or(0, |c| c.total)
    }

    /// `begin_load`, one fetch, `complete_load`
    pub async fn load<A: ApiClient>(&mut self, api: &A, page: u32, filters: E::Filter) -> bool {
        let ticket = self.begin_load(page, filters);
        let result = fetch_page::<E, A>(api, &ticket).await;
        self.complete_load(ticket.token, result)
    }
}

pub async fn fetch_page<E, A>(
    api: &A,
    ticket: &LoadTicket<E::Filter>,
) -> Result<Paginated<E>, ApiError>
where
    E: ListEntity,
    A: ApiClient,
{
    let path = ticket.path(E::RESOURCE)?;
    let (items, meta) = fetch_data::<Vec<E>, A>(api, ApiRequest::get(path)).await?;
    Ok(Paginated::from_parts(items, meta, ticket.per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{Envelope, Method};
    use crate::shared::list::render::DataRow;
    use crate::shared::testing::{widget, MockApi, Widget, WidgetFilter};
    use contracts::shared::api_response::PaginationMeta;
    use futures::executor::block_on;
    use serde_json::json;

    fn filter(search: &str) -> WidgetFilter {
        WidgetFilter {
            search: search.to_string(),
        }
    }

    fn page_of(items: Vec<Widget>, page: u32, total: u64) -> Paginated<Widget> {
        let meta = PaginationMeta::compute(page, 20, total);
        Paginated::from_parts(items, Some(meta), 20)
    }

    #[test]
    fn test_ticket_path_carries_filters() {
        let mut controller = ListController::<Widget>::new();
        let ticket = controller.begin_load(2, filter("bolt"));
        assert_eq!(ticket.path("widgets").unwrap(), "/widgets?page=2&per_page=20&search=bolt");

        let ticket = controller.apply_filters(WidgetFilter::default());
        assert_eq!(ticket.path("widgets").unwrap(), "/widgets?page=1&per_page=20");
    }

    #[test]
    fn test_loading_shows_placeholder_row() {
        let mut controller = ListController::<Widget>::new();
        controller.begin_load(1, WidgetFilter::default());
        assert!(controller.is_loading());
        assert_eq!(controller.rows(), vec![RowDescriptor::Loading { colspan: 3 }]);
    }

    #[test]
    fn test_last_issued_request_wins() {
        let mut controller = ListController::<Widget>::new();
        let first = controller.begin_load(1, filter("a"));
        let second = controller.begin_load(1, filter("b"));

        assert!(controller.complete_load(second.token, Ok(page_of(vec![widget(2, "b")], 1, 1))));
        assert!(!controller.complete_load(first.token, Ok(page_of(vec![widget(1, "a")], 1, 1))));

        assert_eq!(controller.filters(), &filter("b"));
        assert_eq!(controller.items(), &[widget(2, "b")]);
    }

    #[test]
    fn test_stale_response_arriving_first_is_ignored() {
        let mut controller = ListController::<Widget>::new();
        let first = controller.begin_load(1, filter("a"));
        let second = controller.begin_load(1, filter("b"));

        assert!(!controller.complete_load(first.token, Ok(page_of(vec![widget(1, "a")], 1, 1))));
        assert!(controller.is_loading());

        assert!(controller.complete_load(second.token, Err(ApiError::Transport("offline".into()))));
        assert_eq!(controller.phase(), &ListPhase::Errored("offline".to_string()));
        assert_eq!(
            controller.rows(),
            vec![RowDescriptor::Error {
                message: "Error loading widgets: offline".to_string(),
                colspan: 3,
            }]
        );
    }

    #[test]
    fn test_response_applied_once() {
        let mut controller = ListController::<Widget>::new();
        let ticket = controller.begin_load(1, WidgetFilter::default());
        assert!(controller.complete_load(ticket.token, Ok(page_of(Vec::new(), 1, 0))));
        assert!(!controller.complete_load(ticket.token, Ok(page_of(vec![widget(1, "x")], 1, 1))));
        assert!(controller.items().is_empty());
    }

    #[test]
    fn test_go_to_page_stays_in_range() {
        let mut controller = ListController::<Widget>::new();
        let ticket = controller.begin_load(1, filter("nut"));
        controller.complete_load(ticket.token, Ok(page_of(vec![widget(1, "nut")], 1, 45)));

        assert!(controller.go_to_page(0).is_none());
        assert!(controller.go_to_page(4).is_none());

        let ticket = controller.go_to_page(3).unwrap();
        assert_eq!(ticket.page, 3);
        assert_eq!(ticket.filters, filter("nut"));
    }

    #[test]
    fn test_load_drives_fetch_and_render() {
        let api = MockApi::new();
        api.respond(
            Method::Get,
            "/widgets",
            Envelope::ok(json!([
                {"widget_id": 1, "name": "Bolt", "note": null},
                {"widget_id": 2, "name": "Nut", "note": "M6"}
            ]))
            .with_pagination(PaginationMeta::compute(1, 20, 2)),
        );

        let mut controller = ListController::<Widget>::new();
        assert!(block_on(controller.load(&api, 1, filter("o"))));

        assert_eq!(controller.phase(), &ListPhase::Rendered);
        assert_eq!(controller.total(), 2);
        assert_eq!(
            api.requests()[0].path,
            "/widgets?page=1&per_page=20&search=o"
        );
        let rows = controller.rows();
        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[1], RowDescriptor::Data(DataRow { id: 2, .. })));
        assert_eq!(controller.page_links().len(), 3);
    }

    #[test]
    fn test_reload_keeps_page_and_filters() {
        let mut controller = ListController::<Widget>::new();
        let ticket = controller.begin_load(2, filter("x"));
        controller.complete_load(ticket.token, Ok(page_of(vec![widget(1, "x")], 2, 30)));

        let again = controller.reload();
        assert_eq!(again.page, 2);
        assert_eq!(again.filters, filter("x"));
        assert!(again.token > ticket.token);
    }
}
