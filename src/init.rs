use crate::backend::{NativeConfiguration, TelemetryBackend};
use crate::event::{LogEventMapper, UserInfo};
use crate::instrumentation::{ErrorTracking, Instrumentation, UserInteractionTracking};
use crate::logger::Logger;
use crate::rum::Rum;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

/// Snapshot of everything the embedding application decides at startup.
///
/// Captured once by [`Sdk::initialize`]; later calls with a different
/// configuration are ignored entirely.
///
/// **Fields**
/// - `client_token`, `env`, `application_id`: forwarded verbatim to the
///   native layer. Validation is the native layer's job.
/// - `track_interactions`, `track_errors`: switch the automatic
///   instrumentation features on. Both default to `false`.
/// - `log_event_mapper`: optional user callback run over every log event
///   before delivery (see [`crate::mapper::apply_log_event_mapper`]).
#[derive(Clone)]
pub struct SdkConfiguration {
    pub client_token: String,
    pub env: String,
    pub application_id: String,
    pub track_interactions: bool,
    pub track_errors: bool,
    pub log_event_mapper: Option<LogEventMapper>,
}

impl SdkConfiguration {
    pub fn new(
        client_token: impl Into<String>,
        env: impl Into<String>,
        application_id: impl Into<String>,
    ) -> Self {
        Self {
            client_token: client_token.into(),
            env: env.into(),
            application_id: application_id.into(),
            track_interactions: false,
            track_errors: false,
            log_event_mapper: None,
        }
    }

    fn to_native(&self) -> NativeConfiguration {
        NativeConfiguration {
            client_token: self.client_token.clone(),
            env: self.env.clone(),
            application_id: self.application_id.clone(),
        }
    }
}

impl fmt::Debug for SdkConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfiguration")
            .field("client_token", &self.client_token)
            .field("env", &self.env)
            .field("application_id", &self.application_id)
            .field("track_interactions", &self.track_interactions)
            .field("track_errors", &self.track_errors)
            .field("log_event_mapper", &self.log_event_mapper.is_some())
            .finish()
    }
}

/// Errors surfaced by the SDK facade.
#[derive(thiserror::Error, Debug)]
pub enum SdkError {
    #[error("native SDK initialization failed: {0}")]
    Initialize(#[source] Box<dyn Error + Send + Sync>),

    #[error("telemetry delivery failed: {0}")]
    Backend(#[source] Box<dyn Error + Send + Sync>),

    #[error("the SDK has not been initialized")]
    NotInitialized,
}

/// The SDK bootstrapper: owns the native backend handle, the one-way
/// initialization guard, and the state shared by the logging and RUM
/// facades.
///
/// Most applications use the process-global instance through
/// [`initialize`]; tests construct their own with a mock backend.
pub struct Sdk {
    backend: Arc<dyn TelemetryBackend>,
    user_interaction_tracking: Arc<dyn Instrumentation>,
    error_tracking: Arc<dyn Instrumentation>,
    initialized: AtomicBool,
    user_info: Arc<RwLock<UserInfo>>,
    log_event_mapper: RwLock<Option<LogEventMapper>>,
}

impl Sdk {
    pub fn new(backend: Arc<dyn TelemetryBackend>) -> Self {
        Self::with_instrumentation(
            backend,
            Arc::new(UserInteractionTracking::default()),
            Arc::new(ErrorTracking::default()),
        )
    }

    /// Like [`Sdk::new`], with the instrumentation starters injected.
    pub fn with_instrumentation(
        backend: Arc<dyn TelemetryBackend>,
        user_interaction_tracking: Arc<dyn Instrumentation>,
        error_tracking: Arc<dyn Instrumentation>,
    ) -> Self {
        Self {
            backend,
            user_interaction_tracking,
            error_tracking,
            initialized: AtomicBool::new(false),
            user_info: Arc::new(RwLock::new(UserInfo::default())),
            log_event_mapper: RwLock::new(None),
        }
    }

    /// Initialize the SDK.
    ///
    /// On the first call, forwards the normalized configuration to the
    /// native backend, captures the event mapper, and starts the
    /// instrumentation features enabled by the configuration flags. Every
    /// later call resolves immediately without touching the backend or the
    /// features, whatever configuration it carries.
    ///
    /// The guard is claimed with an atomic compare-and-set before the
    /// native call, so concurrent initialization from several tasks is
    /// well-defined: exactly one forwards, the rest are no-ops. The guard
    /// is one-way; a backend failure propagates as
    /// [`SdkError::Initialize`] but does not release it.
    pub async fn initialize(&self, configuration: &SdkConfiguration) -> Result<(), SdkError> {
        if self
            .initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }

        self.backend
            .initialize(&configuration.to_native())
            .await
            .map_err(SdkError::Initialize)?;

        if let Ok(mut slot) = self.log_event_mapper.write() {
            *slot = configuration.log_event_mapper.clone();
        }
        self.enable_features(configuration);
        Ok(())
    }

    fn enable_features(&self, configuration: &SdkConfiguration) {
        if configuration.track_interactions {
            self.user_interaction_tracking.start_tracking();
        }
        if configuration.track_errors {
            self.error_tracking.start_tracking();
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Replace the identity snapshot attached to subsequent events.
    pub fn set_user(&self, user: UserInfo) {
        if let Ok(mut slot) = self.user_info.write() {
            *slot = user;
        }
    }

    /// Build a [`Logger`] wired to this SDK's backend, mapper and identity
    /// snapshot.
    pub fn logger(&self) -> Logger {
        Logger::new(
            Arc::clone(&self.backend),
            self.log_event_mapper(),
            Arc::clone(&self.user_info),
        )
    }

    /// Build a [`Rum`] facade wired to this SDK's backend.
    pub fn rum(&self) -> Rum {
        Rum::new(Arc::clone(&self.backend))
    }

    fn log_event_mapper(&self) -> Option<LogEventMapper> {
        self.log_event_mapper
            .read()
            .map(|slot| slot.clone())
            .unwrap_or(None)
    }
}

static GLOBAL_SDK: OnceLock<Sdk> = OnceLock::new();

/// Initialize the process-global SDK.
///
/// The backend from the *first* call is kept for the lifetime of the
/// process; later calls ignore both their backend and their configuration
/// and resolve immediately, per [`Sdk::initialize`].
pub async fn initialize(
    backend: Arc<dyn TelemetryBackend>,
    configuration: &SdkConfiguration,
) -> Result<(), SdkError> {
    let sdk = GLOBAL_SDK.get_or_init(|| Sdk::new(backend));
    sdk.initialize(configuration).await
}

/// Access the process-global SDK, once initialized.
pub fn global() -> Result<&'static Sdk, SdkError> {
    GLOBAL_SDK
        .get()
        .filter(|sdk| sdk.is_initialized())
        .ok_or(SdkError::NotInitialized)
}
