//! One request in, one response out.
//!
//! ```text
//! request ─▶ ensure session ─▶ visible context ─▶ parse (text only)
//!         ─▶ confidence gate ─▶ dispatch ─▶ update ─▶ client view
//! ```
//!
//! A text parse below the execute threshold is returned for confirmation
//! without touching state, unless the request already carries `confirm`.

use std::sync::Arc;

use ashvale_engine::{Command, Dispatcher, Event, GameState, Registry, Verb, effective_stats};
use ashvale_foundation::{RandomSource, Result, SeededRandom, SessionId, StatsDelta};
use ashvale_parser::{ParseInput, ParseService, ParsedCommand, ParserKind};
use ashvale_world::{Catalog, MapGenerator, RoomGraphCache};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{AshvaleConfig, NluConfig};
use crate::session::SessionManager;
use crate::store::MemoryStore;
use crate::view::ClientView;

/// Returned when a request carries neither text nor a command.
pub const EMPTY_REQUEST: &str = "Provide text or command payload";

/// A player's request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Free text to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// A structured command; wins over `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// Execute even a low-confidence parse.
    #[serde(default)]
    pub confirm: bool,
}

impl CommandRequest {
    /// A free-text request.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A structured request.
    #[must_use]
    pub fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            ..Self::default()
        }
    }

    /// Marks the request as confirmed.
    #[must_use]
    pub fn confirmed(mut self) -> Self {
        self.confirm = true;
        self
    }
}

/// How the text of a request was understood.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NluReport {
    /// The command the text resolved to.
    pub canonical: Command,
    /// Parser confidence.
    pub confidence: f64,
    /// Which parser answered.
    pub parser: ParserKind,
    /// The text as typed.
    pub raw_text: String,
    /// Why the parser chose this command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl NluReport {
    fn new(parsed: ParsedCommand, raw_text: &str) -> Self {
        Self {
            canonical: parsed.command,
            confidence: parsed.confidence,
            parser: parsed.parser,
            raw_text: raw_text.to_string(),
            rationale: parsed.rationale,
        }
    }
}

/// The outcome of a request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    /// Narrative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_text: Option<String>,
    /// Events that were applied.
    #[serde(default)]
    pub events: Vec<Event>,
    /// The state after the events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GameState>,
    /// Parse details for text requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nlu: Option<NluReport>,
    /// The parse needs the player's confirmation; nothing was executed.
    #[serde(default)]
    pub needs_confirm: bool,
    /// The client projection after the events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientView>,
    /// A malformed request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    fn rejected(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn confirm(report: NluReport) -> Self {
        Self {
            nlu: Some(report),
            needs_confirm: true,
            ..Self::default()
        }
    }
}

/// Whether a verb can change effective stats.
fn reports_stat_delta(verb: Verb) -> bool {
    matches!(verb, Verb::Equip | Verb::Unequip | Verb::Use)
}

/// Runs requests against sessions.
pub struct CommandProcessor {
    sessions: SessionManager,
    dispatcher: Dispatcher,
    parser: ParseService,
    thresholds: NluConfig,
    random: Mutex<Box<dyn RandomSource + Send>>,
}

impl std::fmt::Debug for CommandProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandProcessor")
            .field("sessions", &self.sessions)
            .field("parser", &self.parser)
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

impl CommandProcessor {
    /// Assembles a processor from its parts.
    #[must_use]
    pub fn new(sessions: SessionManager, dispatcher: Dispatcher, parser: ParseService, thresholds: NluConfig) -> Self {
        Self {
            sessions,
            dispatcher,
            parser,
            thresholds,
            random: Mutex::new(Box::new(SeededRandom::from_entropy())),
        }
    }

    /// Builds the standard stack: static catalog, seeded generator, shared
    /// graph cache, complete registry, in-memory store, rule parser.
    ///
    /// # Errors
    ///
    /// Returns configuration faults from the catalog or the registry.
    pub fn from_config(config: &AshvaleConfig) -> Result<Self> {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    /// Like [`from_config`](Self::from_config) with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns configuration faults from the catalog or the registry.
    pub fn from_config_with_clock(config: &AshvaleConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let catalog = Arc::new(Catalog::standard()?);
        let generator = MapGenerator::new(Arc::clone(&catalog)).with_max_attempts(config.generation.max_attempts);
        let graphs = Arc::new(RoomGraphCache::new(generator));
        let dispatcher = Dispatcher::new(Registry::standard()?, Arc::clone(&graphs));
        let store = Arc::new(MemoryStore::new(config.store.clone()));
        let sessions = SessionManager::new(store, graphs, clock);
        let parser = ParseService::new(catalog).with_cache_ttl(config.nlu.cache_ttl_ms);
        info!(
            execute_threshold = config.nlu.execute_threshold,
            confirm_threshold = config.nlu.confirm_threshold,
            max_sessions = config.store.max_sessions,
            "command processor ready"
        );
        Ok(Self::new(sessions, dispatcher, parser, config.nlu.clone()))
    }

    /// Replaces the entropy used by handlers.
    #[must_use]
    pub fn with_random(mut self, random: Box<dyn RandomSource + Send>) -> Self {
        self.random = Mutex::new(random);
        self
    }

    /// The session manager.
    #[must_use]
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// The dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The parse service.
    #[must_use]
    pub fn parser(&self) -> &ParseService {
        &self.parser
    }

    /// Builds the client view for a stored session.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSession`, or a generation fault.
    pub fn client_view(&self, session: &SessionId) -> Result<ClientView> {
        let state = self.sessions.require(session)?;
        let graph = self.sessions.graphs().get(session)?;
        Ok(ClientView::build(&state, &graph, self.dispatcher.catalog()))
    }

    /// Executes one request.
    ///
    /// # Errors
    ///
    /// Only generation faults and states that point off the map are errors.
    /// A request with neither text nor command is answered with `error` set.
    /// Requests for the same session run one at a time.
    pub fn execute(&self, session: &SessionId, request: &CommandRequest) -> Result<CommandResponse> {
        let text = request.text.as_deref().filter(|text| !text.trim().is_empty());
        if text.is_none() && request.command.is_none() {
            return Ok(CommandResponse::rejected(EMPTY_REQUEST));
        }
        self.sessions
            .exclusive(session, || self.execute_locked(session, request, text))
    }

    fn execute_locked(
        &self,
        session: &SessionId,
        request: &CommandRequest,
        text: Option<&str>,
    ) -> Result<CommandResponse> {
        let state = self.sessions.ensure(session);
        let now_ms = self.sessions.clock().now_ms();

        let (command, report) = match (&request.command, text) {
            (Some(command), _) => {
                let report = text.map(|raw| {
                    NluReport::new(ParsedCommand::new(command.clone(), 1.0, ParserKind::Rule), raw)
                });
                (command.clone(), report)
            }
            (None, Some(raw)) => {
                let visible = self.dispatcher.visible_context(&state)?;
                let verbs = self.dispatcher.registry().verbs();
                let parsed = self
                    .parser
                    .parse(&ParseInput::new(raw, &visible, &verbs).at(now_ms));
                let report = NluReport::new(parsed, raw);
                if !request.confirm && report.confidence < self.thresholds.execute_threshold {
                    info!(
                        session = %session,
                        command = %report.canonical,
                        confidence = report.confidence,
                        guess = report.confidence < self.thresholds.confirm_threshold,
                        "parse needs confirmation"
                    );
                    return Ok(CommandResponse::confirm(report));
                }
                (report.canonical.clone(), Some(report))
            }
            (None, None) => return Ok(CommandResponse::rejected(EMPTY_REQUEST)),
        };

        let before = effective_stats(&state, self.dispatcher.catalog());
        let result = {
            let mut random = self.random.lock();
            self.dispatcher.dispatch(&state, &command, &mut **random, now_ms)?
        };
        let next = self.sessions.update(session, &state, &result.events);

        let graph = self.sessions.graphs().get(session)?;
        let mut client = ClientView::build(&next, &graph, self.dispatcher.catalog());
        if reports_stat_delta(command.verb) {
            let after = effective_stats(&next, self.dispatcher.catalog());
            client = client.with_stat_delta(after.delta_from(&before));
        }
        debug!(session = %session, command = %command, events = result.events.len(), "request executed");

        Ok(CommandResponse {
            result_text: Some(result.text),
            events: result.events,
            state: Some(next),
            nlu: report,
            needs_confirm: false,
            client: Some(client),
            error: None,
        })
    }

    /// Shorthand for executing a structured command.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn run(&self, session: &SessionId, command: Command) -> Result<CommandResponse> {
        self.execute(session, &CommandRequest::command(command))
    }

    /// The stat change of an equip, unequip, or use, if that verb ran.
    #[must_use]
    pub fn stat_delta(response: &CommandResponse) -> Option<StatsDelta> {
        response.client.as_ref().and_then(|client| client.stat_delta)
    }
}
