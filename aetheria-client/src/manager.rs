//! Conversation manager orchestrating one career-guidance session
//!
//! The manager owns the transcript and settings of a single session. Each
//! call to [`ConversationManager::submit`] runs one turn: the prompt is
//! appended, the transcript is trimmed to the token budget, off-topic prompts
//! are answered with a canned refusal, and everything else is forwarded to the
//! completion service together with the whole transcript.

use crate::config::Config;
use crate::document::{DocumentExtractor, PdfExtractor};
use crate::domain::DomainClassifier;
use crate::settings::Settings;
use aetheria_context::{BudgetEnforcer, TiktokenTokenizer, TokenCounter, Tokenizer};
use aetheria_core::{Error, Message, Model, Provider, Request};
use aetheria_state::Transcript;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Persona and refusal instructions a new session starts with
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a supportive and kind career guidance assistant. Your role is to review and provide feedback on curriculum vitae, cover letters, job applications, and any career-related inquiries. You respond with encouragement, constructive advice, and helpful insights to boost the user's confidence and preparedness. However, if a user's question is not related to career or job topics, you should respond with, 'I'm sorry.' Always aim to be friendly, patient, and uplifting in your guidance.";

/// Reply given to prompts the domain classifier rejects
pub const CAREER_REFUSAL: &str = "I apologize, but I can only assist with career-related questions and topics. Please feel free to ask me about resumes, job applications, interviews, or any other career guidance you need.";

/// Where a session is in its turn protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Ready for the next prompt
    Idle,
    /// A completion request is in flight
    AwaitingCompletion,
}

/// Result of a single turn
#[derive(Debug)]
pub enum TurnOutcome {
    /// The completion service answered; the answer is in the transcript
    Answered(String),
    /// The prompt was off-topic; the canned refusal is in the transcript
    Refused(String),
    /// No response is available; the user turn stays unanswered
    NoResponse(Error),
}

impl TurnOutcome {
    /// The reply shown to the user, if there is one
    pub fn text(&self) -> Option<&str> {
        match self {
            TurnOutcome::Answered(text) | TurnOutcome::Refused(text) => Some(text),
            TurnOutcome::NoResponse(_) => None,
        }
    }

    /// Whether the completion service produced the reply
    pub fn is_answered(&self) -> bool {
        matches!(self, TurnOutcome::Answered(_))
    }
}

/// A single career-guidance session
///
/// `submit` takes `&mut self`: one turn must finish before the next starts.
///
/// # Examples
///
/// ```no_run
/// use aetheria_client::{Config, ConversationManager};
/// use aetheria_providers::OpenAI;
///
/// # async fn example() -> Result<(), aetheria_core::Error> {
/// let config = Config::from_env()?;
/// let provider = OpenAI::from_config(config.provider_config())?;
/// let mut session = ConversationManager::from_config(provider, &config)?;
///
/// let outcome = session.submit("How do I tailor my resume for ATS?").await;
/// if let Some(reply) = outcome.text() {
///     println!("{}", reply);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConversationManager<P: Provider> {
    provider: P,
    settings: Settings,
    enforcer: BudgetEnforcer,
    classifier: DomainClassifier,
    tokenizer: Arc<dyn Tokenizer>,
    counter: Option<Arc<dyn TokenCounter>>,
    extractor: Arc<dyn DocumentExtractor>,
    system_instruction: String,
    transcript: Transcript,
    state: TurnState,
    session_id: Uuid,
}

impl<P: Provider> ConversationManager<P> {
    /// Create a session with the career classifier and default persona
    pub fn new(provider: P, settings: Settings, token_budget: usize) -> Result<Self, Error> {
        let session_id = Uuid::new_v4();
        debug!(%session_id, model = settings.model(), token_budget, "starting session");

        Ok(Self {
            provider,
            settings,
            enforcer: BudgetEnforcer::new(token_budget),
            classifier: DomainClassifier::career()?,
            tokenizer: Arc::new(TiktokenTokenizer),
            counter: None,
            extractor: Arc::new(PdfExtractor),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            transcript: Transcript::new(DEFAULT_SYSTEM_INSTRUCTION),
            state: TurnState::Idle,
            session_id,
        })
    }

    /// Create a session from startup configuration
    pub fn from_config(provider: P, config: &Config) -> Result<Self, Error> {
        Self::new(provider, config.settings()?, config.token_budget)
    }

    /// Replace the token counting backend
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self.counter = None;
        self
    }

    /// Replace the domain classifier
    pub fn with_classifier(mut self, classifier: DomainClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the document extractor used by [`Self::submit_document`]
    pub fn with_extractor(mut self, extractor: Arc<dyn DocumentExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Start from a different system instruction
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.set_system_instruction(instruction);
        self
    }

    /// Run one turn
    ///
    /// Completion service faults are logged and reported as
    /// [`TurnOutcome::NoResponse`]; the user message is kept either way.
    #[instrument(skip_all, fields(session = %self.session_id))]
    pub async fn submit(&mut self, prompt: impl Into<String>) -> TurnOutcome {
        let prompt = prompt.into();
        if self.state == TurnState::AwaitingCompletion {
            warn!("previous turn was abandoned before its completion arrived");
        }

        let counter = match self.counter() {
            Ok(counter) => counter,
            Err(e) => {
                error!(error = %e, "token counter unavailable");
                return TurnOutcome::NoResponse(e);
            }
        };

        let in_domain = self.classifier.is_in_domain(&prompt);
        self.transcript.push_user(prompt);
        self.enforcer.enforce(&mut self.transcript, counter.as_ref());

        if !in_domain {
            info!("prompt is outside the career domain, refusing");
            self.transcript.push_assistant(CAREER_REFUSAL);
            self.state = TurnState::Idle;
            return TurnOutcome::Refused(CAREER_REFUSAL.to_string());
        }

        let request = Request {
            messages: self.transcript.messages().to_vec(),
            model: Model::new(self.settings.model()),
            parameters: self.settings.parameters(),
        };

        self.state = TurnState::AwaitingCompletion;
        debug!(
            model = self.settings.model(),
            messages = request.messages.len(),
            "requesting completion"
        );
        let result = self.provider.request(request).await;
        self.state = TurnState::Idle;

        match result {
            Ok(response) => {
                if let Some(usage) = &response.metadata.usage {
                    debug!(
                        prompt_tokens = usage.prompt_tokens,
                        completion_tokens = usage.completion_tokens,
                        "completion received"
                    );
                }
                self.transcript.push_assistant(response.content.clone());
                TurnOutcome::Answered(response.content)
            }
            Err(e) => {
                error!(error = %e, "error generating response");
                TurnOutcome::NoResponse(e)
            }
        }
    }

    /// Ask a question about an uploaded document
    ///
    /// The document's text is embedded in the prompt. An empty question or an
    /// unreadable document is returned as an error and leaves the transcript
    /// untouched.
    pub async fn submit_document(
        &mut self,
        document: &[u8],
        question: &str,
    ) -> Result<TurnOutcome, Error> {
        if question.trim().is_empty() {
            return Err(Error::Validation(
                "Please enter a question about the file first".to_string(),
            ));
        }

        let content = self.extractor.extract(document)?;
        let prompt = format!(
            "Here is the file content:\n{}\n\nQuestion: {}",
            content, question
        );
        Ok(self.submit(prompt).await)
    }

    /// Drop the conversation, keeping only the system instruction
    pub fn reset(&mut self) {
        self.transcript.reset(self.system_instruction.clone());
        self.state = TurnState::Idle;
    }

    /// Replace the system instruction and reset the conversation
    pub fn set_system_instruction(&mut self, instruction: impl Into<String>) {
        self.system_instruction = instruction.into();
        self.reset();
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// The whole transcript, system message first
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The conversation for display, without the system message
    pub fn history(&self) -> &[Message] {
        self.transcript.history()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the settings surface
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn token_budget(&self) -> usize {
        self.enforcer.budget()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Current transcript size in tokens of the active model
    pub fn total_tokens(&mut self) -> Result<usize, Error> {
        let counter = self.counter()?;
        Ok(counter.count_messages(self.transcript.messages()))
    }

    fn counter(&mut self) -> Result<Arc<dyn TokenCounter>, Error> {
        if let Some(counter) = &self.counter {
            if counter.model_name() == self.settings.model() {
                return Ok(Arc::clone(counter));
            }
        }

        let counter = self.tokenizer.counter(self.settings.model())?;
        debug!(model = self.settings.model(), "built token counter");
        self.counter = Some(Arc::clone(&counter));
        Ok(counter)
    }
}
