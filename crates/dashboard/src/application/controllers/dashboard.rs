//! Dashboard Controller - search, filter and pagination state machine
//!
//! Framework-free. Each network operation is split in two halves: a
//! `begin_*` call that marks the operation in flight and returns a ticket
//! describing the request, and a `complete_*` call that applies the
//! response. Views run the request in between; the async helpers at the
//! bottom do the same against a `PlayerService` directly.
//!
//! Searches are sequenced: only the completion of the most recently issued
//! search is applied. A local reset (clearing the form, or editing it down
//! to no filters) also invalidates any search still in flight.

use scoutdesk_domain::{
    export_file_name, page_slice, page_window, total_pages, Player, PlayerFilters,
    PlayerListResult, CSV_CONTENT_TYPE, DEFAULT_PAGE_SIZE,
};

use crate::application::services::PlayerService;
use crate::application::ServiceError;
use crate::ports::outbound::PlatformPort;

pub const EXPORT_FAILED_ALERT: &str = "Could not download the CSV file";

/// Raw values of the three search inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name: String,
    pub club: String,
    pub position: String,
}

impl SearchForm {
    pub fn filters(&self) -> PlayerFilters {
        PlayerFilters::from_form(&self.name, &self.club, &self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Club,
    Position,
}

#[derive(Debug)]
#[must_use]
pub struct LoadTicket(());

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct SearchTicket {
    seq: u64,
    pub filters: PlayerFilters,
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ExportTicket {
    pub filters: PlayerFilters,
}

/// What a form change asks the view to do next
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum FilterAction {
    /// Filters are empty; the full list is already shown, nothing to fetch
    ShowAll,
    /// Run this search and hand the result to `complete_search`
    Search(SearchTicket),
}

#[derive(Debug, Clone)]
pub struct DashboardController {
    form: SearchForm,
    all_players: Vec<Player>,
    filtered_players: Vec<Player>,
    current_page: usize,
    page_size: usize,
    in_flight: usize,
    latest_search: u64,
    error: Option<String>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DashboardController {
    pub fn new(page_size: usize) -> Self {
        Self {
            form: SearchForm::default(),
            all_players: Vec::new(),
            filtered_players: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            in_flight: 0,
            latest_search: 0,
            error: None,
        }
    }

    // ---------------------------------------------------------------------
    // Read side
    // ---------------------------------------------------------------------

    pub fn form(&self) -> &SearchForm {
        &self.form
    }

    pub fn all_players(&self) -> &[Player] {
        &self.all_players
    }

    pub fn filtered_players(&self) -> &[Player] {
        &self.filtered_players
    }

    pub fn displayed_players(&self) -> &[Player] {
        page_slice(&self.filtered_players, self.current_page, self.page_size)
    }

    pub fn total_results(&self) -> usize {
        self.filtered_players.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_players.len(), self.page_size)
    }

    pub fn page_window(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ---------------------------------------------------------------------
    // Initial load
    // ---------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.in_flight += 1;
        LoadTicket(())
    }

    pub fn complete_load(
        &mut self,
        _ticket: LoadTicket,
        result: Result<PlayerListResult, ServiceError>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(list) => {
                tracing::debug!(count = list.len(), "Loaded players");
                self.all_players = list.data;
                self.filtered_players = self.all_players.clone();
                self.current_page = 1;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error loading players: {}", e);
                self.error = Some(
                    e.user_message()
                        .unwrap_or_else(|| "Could not load players".into()),
                );
            }
        }
    }

    // ---------------------------------------------------------------------
    // Filtering
    // ---------------------------------------------------------------------

    pub fn set_field(&mut self, field: SearchField, value: &str) -> FilterAction {
        let slot = match field {
            SearchField::Name => &mut self.form.name,
            SearchField::Club => &mut self.form.club,
            SearchField::Position => &mut self.form.position,
        };
        *slot = value.to_string();
        self.reevaluate()
    }

    /// Recompute the filters from the form and decide what to fetch.
    pub fn reevaluate(&mut self) -> FilterAction {
        let filters = self.form.filters();
        if filters.is_empty() {
            self.show_all();
            return FilterAction::ShowAll;
        }
        self.latest_search += 1;
        self.in_flight += 1;
        FilterAction::Search(SearchTicket {
            seq: self.latest_search,
            filters,
        })
    }

    /// Apply a search result. Returns false when the result was stale or
    /// failed and nothing changed.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<PlayerListResult, ServiceError>,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.seq != self.latest_search {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_search,
                "Dropping stale search result"
            );
            return false;
        }
        match result {
            Ok(list) => {
                self.filtered_players = list.data;
                self.current_page = 1;
                self.error = None;
                true
            }
            Err(e) => {
                tracing::error!("Search error: {}", e);
                self.error = Some(e.user_message().unwrap_or_else(|| "Search failed".into()));
                false
            }
        }
    }

    /// Reset the form and show the full list again. No network.
    pub fn clear_filters(&mut self) {
        self.form = SearchForm::default();
        self.show_all();
    }

    fn show_all(&mut self) {
        // Invalidate any search still in flight.
        self.latest_search += 1;
        self.filtered_players = self.all_players.clone();
        self.current_page = 1;
    }

    // ---------------------------------------------------------------------
    // Pagination
    // ---------------------------------------------------------------------

    /// No-op unless `1 <= page <= total_pages`.
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        if let Some(page) = self.current_page.checked_sub(1) {
            self.go_to_page(page);
        }
    }

    // ---------------------------------------------------------------------
    // Export
    // ---------------------------------------------------------------------

    /// Export uses the current filter criteria, never the current page.
    pub fn begin_export(&mut self) -> ExportTicket {
        self.in_flight += 1;
        ExportTicket {
            filters: self.form.filters(),
        }
    }

    /// Hand the CSV to the user as `players_<date>.csv`, or alert on failure.
    pub fn complete_export(
        &mut self,
        _ticket: ExportTicket,
        result: Result<Vec<u8>, ServiceError>,
        platform: &dyn PlatformPort,
    ) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Error downloading CSV: {}", e);
                platform.alert(EXPORT_FAILED_ALERT);
                return false;
            }
        };
        let file_name = export_file_name(platform.today());
        match platform.save_download(&file_name, CSV_CONTENT_TYPE, &bytes) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving {}: {:#}", file_name, e);
                platform.alert(EXPORT_FAILED_ALERT);
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Async helpers
    // ---------------------------------------------------------------------

    /// Load the full list.
    pub async fn activate(&mut self, players: &PlayerService) {
        let ticket = self.begin_load();
        let result = players.list_all().await;
        self.complete_load(ticket, result);
    }

    /// Re-evaluate the form and run the search it calls for, if any.
    pub async fn apply_filters(&mut self, players: &PlayerService) {
        if let FilterAction::Search(ticket) = self.reevaluate() {
            let result = players.search(&ticket.filters).await;
            self.complete_search(ticket, result);
        }
    }

    pub async fn export(&mut self, players: &PlayerService, platform: &dyn PlatformPort) -> bool {
        let ticket = self.begin_export();
        let result = players.export_csv(&ticket.filters).await;
        self.complete_export(ticket, result, platform)
    }
}
