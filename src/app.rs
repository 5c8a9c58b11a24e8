//! Application state and key handling for the demo

use crate::host::FormHost;
use crate::platform::SHORTCUT_MODIFIER;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use schema_form::{resolve, CurrencyLocale, EngineConfig, FieldSchema, FormValues, Transform};
use std::time::Duration;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Form state host
    pub host: FormHost,
    /// Index of the focused field
    pub active_field: usize,
    /// Highlighted option in the focused choice field
    pub option_cursor: usize,
    /// Raw text being typed into the focused text field
    draft: String,
    /// Status bar message
    pub status_message: Option<String>,
    /// Simulated submission latency
    submit_delay: Duration,
    submit_tx: mpsc::UnboundedSender<FormValues>,
    submit_rx: mpsc::UnboundedReceiver<FormValues>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Default simulated submission latency
    pub const SUBMIT_DELAY: Duration = Duration::from_millis(600);

    /// Create a new App instance
    pub fn new(fields: Vec<FieldSchema>, config: &EngineConfig) -> Self {
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            host: FormHost::new(fields, config),
            active_field: 0,
            option_cursor: 0,
            draft: String::new(),
            status_message: None,
            submit_delay: Self::SUBMIT_DELAY,
            submit_tx,
            submit_rx,
            quit: false,
        };
        app.focus(0);
        app
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn active(&self) -> Option<&FieldSchema> {
        self.host.fields().get(self.active_field)
    }

    fn active_name(&self) -> Option<String> {
        self.active().map(|f| f.name.clone())
    }

    /// Move focus, seeding the edit buffer from the stored value
    fn focus(&mut self, index: usize) {
        self.active_field = index;
        self.option_cursor = 0;
        self.draft = match self.active() {
            Some(field) => {
                let stored = self.host.value(&field.name);
                edit_seed(
                    resolve(&field.kind).transform,
                    stored.as_text(),
                    self.host.transforms().locale(),
                )
            }
            None => String::new(),
        };
    }

    fn blur_active(&mut self) {
        if let Some(name) = self.active_name() {
            self.host.blur(&name);
        }
    }

    pub fn next_field(&mut self) {
        let count = self.host.fields().len();
        if count == 0 {
            return;
        }
        self.blur_active();
        self.focus((self.active_field + 1) % count);
    }

    pub fn prev_field(&mut self) {
        let count = self.host.fields().len();
        if count == 0 {
            return;
        }
        self.blur_active();
        let index = if self.active_field == 0 {
            count - 1
        } else {
            self.active_field - 1
        };
        self.focus(index);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(field) = self.active().cloned() else {
            if key.code == KeyCode::Esc {
                self.quit = true;
            }
            return Ok(());
        };
        let dispatch = resolve(&field.kind);
        let is_choice = dispatch.requires_options;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down if !is_choice || key.code == KeyCode::Tab => {
                self.next_field()
            }
            KeyCode::BackTab | KeyCode::Up if !is_choice || key.code == KeyCode::BackTab => {
                self.prev_field()
            }
            KeyCode::Char('s') if key.modifiers.contains(SHORTCUT_MODIFIER) => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(SHORTCUT_MODIFIER) => {
                self.host.reset();
                self.focus(self.active_field);
                self.status_message = Some("Formulário limpo".to_string());
            }
            // Choice fields
            KeyCode::Left | KeyCode::Up if is_choice => {
                self.option_cursor = self.option_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Down if is_choice => {
                if self.option_cursor + 1 < field.options.len() {
                    self.option_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter if is_choice => {
                if let Some(option) = field.options.get(self.option_cursor) {
                    self.host.choose(&field.name, &option.value);
                }
            }
            KeyCode::Backspace | KeyCode::Delete if is_choice => self.host.clear(&field.name),
            // Text fields
            KeyCode::Char(c) if !is_choice && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if dispatch.transform == Transform::Currency {
                    let locale = self.host.transforms().locale();
                    if !(c.is_ascii_digit() || c == locale.decimal_separator || c == '-') {
                        return Ok(());
                    }
                }
                self.draft.push(c);
                self.apply_draft(&field);
            }
            KeyCode::Backspace => {
                self.draft.pop();
                self.apply_draft(&field);
            }
            KeyCode::Enter => self.next_field(),
            _ => {}
        }
        Ok(())
    }

    /// Push the edit buffer through the host and keep the buffer in sync
    fn apply_draft(&mut self, field: &FieldSchema) {
        let is_currency = resolve(&field.kind).transform == Transform::Currency;
        if is_currency {
            self.draft = clamp_fraction(&self.draft, self.host.transforms().locale());
        }
        self.host.change(&field.name, &self.draft);
        if !is_currency {
            self.draft = self.host.value(&field.name).as_text().to_string();
        }
    }

    /// Validate and, when valid, start the simulated submission
    pub fn submit(&mut self) {
        self.blur_active();
        let Some(values) = self.host.begin_submit() else {
            if self.host.is_submitting() {
                self.status_message = Some("Envio em andamento".to_string());
            } else {
                self.status_message = Some(format!(
                    "{} campo(s) com erro",
                    self.host.error_count()
                ));
            }
            return;
        };

        self.status_message = Some("Enviando...".to_string());
        let tx = self.submit_tx.clone();
        let delay = self.submit_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the app; a send error means we are shutting down
            let _ = tx.send(values);
        });
    }

    /// Collect finished submissions. Returns true when one completed.
    pub fn poll_submissions(&mut self) -> bool {
        let mut completed = false;
        while let Ok(values) = self.submit_rx.try_recv() {
            match serde_json::to_string(&values) {
                Ok(json) => tracing::info!("form submitted: {json}"),
                Err(err) => tracing::warn!("submitted values could not be encoded: {err}"),
            }
            self.host.finish_submit();
            self.focus(self.active_field);
            self.status_message = Some("Enviado!".to_string());
            completed = true;
        }
        completed
    }
}

/// Text to resume editing from.
///
/// Currency values drop trailing fraction zeros so that typing continues the
/// amount instead of being rounded away.
fn edit_seed(transform: Transform, stored: &str, locale: &CurrencyLocale) -> String {
    if transform != Transform::Currency {
        return stored.to_string();
    }
    match stored.rsplit_once(locale.decimal_separator) {
        Some((int_part, frac_part)) => {
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                int_part.to_string()
            } else {
                format!("{int_part}{}{frac_part}", locale.decimal_separator)
            }
        }
        None => stored.to_string(),
    }
}

/// Drop fraction digits the locale cannot store
fn clamp_fraction(draft: &str, locale: &CurrencyLocale) -> String {
    match draft.split_once(locale.decimal_separator) {
        Some((int_part, _)) if locale.precision == 0 => int_part.to_string(),
        Some((int_part, frac_part)) => {
            let frac_part: String = frac_part.chars().take(locale.precision as usize).collect();
            format!("{int_part}{}{frac_part}", locale.decimal_separator)
        }
        None => draft.to_string(),
    }
}
