//! Viewer presentation state (`log_state.json`).
//!
//! Derived purely from the distinct client names of a run. Per-client maps
//! serialize in client first-appearance order, not sorted.

use serde::{ser::SerializeMap, Serialize, Serializer};

const FILTER_LOGIC: &str = "OR";
const HIGHLIGHT_SLOTS: usize = 4;

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    pub registered_client_names: Vec<String>,
    #[serde(serialize_with = "serialize_ordered_map")]
    pub registered_clients: Vec<(String, RegisteredClient)>,
    pub persist_state: PersistState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredClient {
    pub name: String,
    pub view_id: Option<String>,
    pub central_logger_name_prefix: String,
    pub display_name: String,
}

/// Per-level visibility toggles. `LocalOnly` exists only on client toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelToggles {
    #[serde(rename = "Error")]
    pub error: bool,
    #[serde(rename = "Warn")]
    pub warn: bool,
    #[serde(rename = "Info")]
    pub info: bool,
    #[serde(rename = "Log")]
    pub log: bool,
    #[serde(rename = "Debug")]
    pub debug: bool,
    #[serde(rename = "Verbose")]
    pub verbose: bool,
    #[serde(rename = "LocalOnly", skip_serializing_if = "Option::is_none")]
    pub local_only: Option<bool>,
}

impl LevelToggles {
    pub fn all_visible() -> Self {
        Self {
            error: true,
            warn: true,
            info: true,
            log: true,
            debug: true,
            verbose: true,
            local_only: None,
        }
    }

    /// Default toggles for a newly shown client: `Info` hidden, local only.
    pub fn initial_client() -> Self {
        Self {
            info: false,
            local_only: Some(true),
            ..Self::all_visible()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub logic: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            logic: FILTER_LOGIC.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub field: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightString {
    pub str: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientState {
    pub console: LevelToggles,
    pub dev: LevelToggles,
    pub system: LevelToggles,
    pub perf: LevelToggles,
    pub client_channel: String,
    pub show_advanced_view_filters: bool,
    pub wrap_log: bool,
    pub show_stack_strace_in_log: bool,
    pub filter: Filter,
    pub show_time_elapsed_from_startup: bool,
    pub client_list_visible: bool,
    pub col_defs: Vec<ColumnDef>,
    pub window_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistState {
    pub log_state: LevelToggles,
    pub plain_text_console: bool,
    pub filter_highlights: bool,
    pub highlight_string: Vec<HighlightString>,
    pub hide_inactive_state: bool,
    pub current_category: String,
    pub dev_mode_state: bool,
    pub system_mode_state: bool,
    pub perf_mode_state: bool,
    pub initial_client_state_default: LevelToggles,
    pub show_advanced_view_filters: bool,
    pub wrap_log: bool,
    pub show_stack_strace_in_log: bool,
    pub filter: Filter,
    pub show_time_elapsed_from_startup: bool,
    pub col_defs: Vec<ColumnDef>,
    pub visible_cols: Vec<String>,
    pub client_list_visible: bool,
    pub is_persisted: bool,
    #[serde(serialize_with = "serialize_ordered_map")]
    pub client_state: Vec<(String, ClientState)>,
    #[serde(serialize_with = "serialize_ordered_map")]
    pub show_client_state: Vec<(String, bool)>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct ViewerStateBuilder {
    client_names: Vec<String>,
}

impl ViewerStateBuilder {
    /// `client_names` must already be distinct, in first-appearance order
    /// (see [`RunOutput::client_names`](crate::pipeline::RunOutput::client_names)).
    pub fn new(client_names: Vec<String>) -> Self {
        Self { client_names }
    }

    pub fn build(self) -> ViewerState {
        let initial = LevelToggles::initial_client();

        let registered_clients = self
            .client_names
            .iter()
            .map(|name| {
                let client = RegisteredClient {
                    name: name.clone(),
                    view_id: None,
                    central_logger_name_prefix: String::new(),
                    display_name: name.clone(),
                };
                (name.clone(), client)
            })
            .collect();

        let client_state = self
            .client_names
            .iter()
            .map(|name| {
                let state = ClientState {
                    console: initial,
                    dev: initial,
                    system: initial,
                    perf: initial,
                    client_channel: name.clone(),
                    show_advanced_view_filters: false,
                    wrap_log: false,
                    show_stack_strace_in_log: false,
                    filter: Filter::default(),
                    show_time_elapsed_from_startup: true,
                    client_list_visible: true,
                    col_defs: default_columns(),
                    window_name: name.clone(),
                };
                (name.clone(), state)
            })
            .collect();

        let show_client_state = self
            .client_names
            .iter()
            .map(|name| (name.clone(), true))
            .collect();

        let persist_state = PersistState {
            log_state: LevelToggles::all_visible(),
            plain_text_console: true,
            filter_highlights: true,
            highlight_string: (0..HIGHLIGHT_SLOTS)
                .map(|_| HighlightString { str: String::new() })
                .collect(),
            hide_inactive_state: false,
            current_category: crate::types::SYSTEM_CATEGORY.to_string(),
            dev_mode_state: true,
            system_mode_state: true,
            perf_mode_state: true,
            initial_client_state_default: initial,
            show_advanced_view_filters: false,
            wrap_log: false,
            show_stack_strace_in_log: false,
            filter: Filter::default(),
            show_time_elapsed_from_startup: true,
            col_defs: default_columns(),
            visible_cols: vec!["timeElapsedFromStartup".to_string()],
            client_list_visible: true,
            is_persisted: true,
            client_state,
            show_client_state,
        };

        ViewerState {
            registered_client_names: self.client_names,
            registered_clients,
            persist_state,
        }
    }
}

fn default_columns() -> Vec<ColumnDef> {
    [
        ("timeElapsedFromStartup", "Time"),
        ("previousRowTimeDelta", "Row Delta"),
        ("category", "Category"),
    ]
    .into_iter()
    .map(|(field, name)| ColumnDef {
        field: field.to_string(),
        name: name.to_string(),
    })
    .collect()
}

fn serialize_ordered_map<S, V>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (k, v) in entries {
        map.serialize_entry(k, v)?;
    }
    map.end()
}
