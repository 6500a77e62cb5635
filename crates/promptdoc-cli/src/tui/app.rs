//! Application state and main event loop.

use std::fs;
use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use promptdoc_core::{
    render_with, Config, Edit, InputRecord, Mode, OutputConfig, PromptStats, RenderOptions,
    Section,
};

use super::event::{Event, EventHandler};
use super::ui;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(2);

/// The selected tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectedTab {
    #[default]
    Inputs,
    Preview,
}

impl SelectedTab {
    pub fn toggle(self) -> Self {
        match self {
            Self::Inputs => Self::Preview,
            Self::Preview => Self::Inputs,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Inputs => "Inputs",
            Self::Preview => "Preview Prompt",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Inputs => 0,
            Self::Preview => 1,
        }
    }
}

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// A free-text field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Focus,
    Description,
    Files,
    OldDocs,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Focus => "Domain / Subsystem Name",
            Field::Description => "High-Level Description",
            Field::Files => "Files, Snippets & Tree",
            Field::OldDocs => "Existing Documentation (Optional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Focus => "e.g. Auth Layer, Payment Gateway, Job Scheduler",
            Field::Description => "Briefly describe what this project or component does...",
            Field::Files => "Paste directory tree, important class files, or types here...",
            Field::OldDocs => "Paste old or outdated docs here to help align style...",
        }
    }

    /// Enter inserts a newline instead of finishing the edit.
    pub fn multiline(self) -> bool {
        !matches!(self, Field::Focus)
    }

    pub fn value(self, record: &InputRecord) -> &str {
        match self {
            Field::Focus => &record.domain_focus,
            Field::Description => &record.description,
            Field::Files => &record.files,
            Field::OldDocs => &record.old_docs,
        }
    }

    fn edit(self, text: String) -> Edit {
        match self {
            Field::Focus => Edit::SetDomainFocus(text),
            Field::Description => Edit::SetDescription(text),
            Field::Files => Edit::SetFiles(text),
            Field::OldDocs => Edit::SetOldDocs(text),
        }
    }

    /// Fields shown in `mode`; the focus field only exists for Domain.
    pub fn for_mode(mode: Mode) -> &'static [Field] {
        match mode {
            Mode::Domain => &[Field::Focus, Field::Description, Field::Files, Field::OldDocs],
            Mode::Readme => &[Field::Description, Field::Files, Field::OldDocs],
        }
    }
}

/// A row the cursor can sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(Field),
    Section(&'static Section),
}

/// A transient message in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    shown_at: Instant,
}

impl StatusMessage {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }
}

/// Main application state.
pub struct App {
    /// Current form contents
    pub record: InputRecord,
    /// Last render of `record`
    pub prompt: String,
    /// Currently selected tab
    pub selected_tab: SelectedTab,
    /// Current input mode
    pub input_mode: InputMode,
    /// Index into `rows()`
    pub cursor: usize,
    /// Scroll offset for the preview
    pub preview_scroll: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<StatusMessage>,
    options: RenderOptions,
    output: OutputConfig,
}

impl App {
    /// Create a new app instance.
    pub fn new(config: Config) -> Self {
        let record = config.initial_record();
        let options = config.render_options();
        let prompt = render_with(&record, &options);

        Self {
            record,
            prompt,
            selected_tab: SelectedTab::Inputs,
            input_mode: InputMode::Normal,
            cursor: 0,
            preview_scroll: 0,
            should_quit: false,
            status_message: None,
            options,
            output: config.output,
        }
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut events = EventHandler::new();

        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Paste(text) => self.handle_paste(&text),
                    Event::Tick => self.expire_status(),
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// All cursor rows: text fields, then the sections of the current catalog.
    pub fn rows(&self) -> Vec<FormRow> {
        Field::for_mode(self.record.mode)
            .iter()
            .copied()
            .map(FormRow::Field)
            .chain(self.record.mode.catalog().iter().map(FormRow::Section))
            .collect()
    }

    /// The row under the cursor.
    pub fn current_row(&self) -> Option<FormRow> {
        self.rows().get(self.cursor).copied()
    }

    /// The field being edited or hovered, if the cursor is on a field.
    pub fn current_field(&self) -> Option<Field> {
        match self.current_row() {
            Some(FormRow::Field(field)) => Some(field),
            _ => None,
        }
    }

    pub fn stats(&self) -> PromptStats {
        PromptStats::of(&self.record, &self.prompt)
    }

    /// Applies an edit and re-renders the prompt.
    fn update(&mut self, edit: Edit) {
        let record = std::mem::take(&mut self.record);
        self.record = record.apply(edit);
        self.prompt = render_with(&self.record, &self.options);

        let rows = self.rows().len();
        if self.cursor >= rows {
            self.cursor = rows.saturating_sub(1);
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage::new(text));
    }

    fn expire_status(&mut self) {
        if self
            .status_message
            .as_ref()
            .is_some_and(|m| m.shown_at.elapsed() >= STATUS_TTL)
        {
            self.status_message = None;
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode_key(key),
            InputMode::Editing => self.handle_editing_mode_key(key),
        }
    }

    /// Handle key in normal mode.
    fn handle_normal_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.selected_tab = self.selected_tab.toggle();
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('i') | KeyCode::Enter if self.selected_tab == SelectedTab::Inputs => {
                if self.current_field().is_some() {
                    self.input_mode = InputMode::Editing;
                } else {
                    self.toggle_current_section();
                }
            }
            KeyCode::Char(' ') if self.selected_tab == SelectedTab::Inputs => {
                self.toggle_current_section();
            }
            KeyCode::Char('a') => self.update(Edit::ToggleAll),
            KeyCode::Char('m') => {
                let mode = self.record.mode.other();
                self.update(Edit::SetMode(mode));
                self.cursor = 0;
                self.set_status(format!("Mode: {}", mode.button_label()));
            }
            KeyCode::Char('u') => {
                let next = self.record.constraints.audience.next();
                self.update(Edit::SetAudience(next));
            }
            KeyCode::Char('t') => {
                let next = self.record.constraints.tone.next();
                self.update(Edit::SetTone(next));
            }
            KeyCode::Char('d') => {
                let next = self.record.constraints.length.next();
                self.update(Edit::SetDepth(next));
            }
            KeyCode::Char('c') => {
                let on = !self.record.constraints.include_commands;
                self.update(Edit::SetIncludeCommands(on));
            }
            KeyCode::Char('e') => {
                let on = !self.record.constraints.include_env_details;
                self.update(Edit::SetIncludeEnvDetails(on));
            }
            KeyCode::Char('s') => self.save_prompt(),
            _ => {}
        }
    }

    /// Handle key in editing mode.
    fn handle_editing_mode_key(&mut self, key: KeyEvent) {
        let Some(field) = self.current_field() else {
            self.input_mode = InputMode::Normal;
            return;
        };

        let mut text = field.value(&self.record).to_string();
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Enter if field.multiline() => text.push('\n'),
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return;
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                return;
            }
            KeyCode::Char(c) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => return,
        }
        self.update(field.edit(text));
    }

    /// Appends pasted text to the field being edited.
    ///
    /// Line breaks become spaces in single-line fields.
    pub fn handle_paste(&mut self, pasted: &str) {
        if self.input_mode != InputMode::Editing {
            return;
        }
        if let Some(field) = self.current_field() {
            let mut text = field.value(&self.record).to_string();
            if field.multiline() {
                text.push_str(pasted);
            } else {
                text.push_str(&pasted.lines().collect::<Vec<_>>().join(" "));
            }
            self.update(field.edit(text));
        }
    }

    fn toggle_current_section(&mut self) {
        if let Some(FormRow::Section(section)) = self.current_row() {
            self.update(Edit::ToggleSection(section.id.to_string()));
        }
    }

    fn move_down(&mut self) {
        match self.selected_tab {
            SelectedTab::Inputs => {
                if self.cursor + 1 < self.rows().len() {
                    self.cursor += 1;
                }
            }
            SelectedTab::Preview => {
                self.preview_scroll = self.preview_scroll.saturating_add(1);
            }
        }
    }

    fn move_up(&mut self) {
        match self.selected_tab {
            SelectedTab::Inputs => self.cursor = self.cursor.saturating_sub(1),
            SelectedTab::Preview => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
        }
    }

    /// Writes the current prompt verbatim to the configured output path.
    fn save_prompt(&mut self) {
        let path = self.output.prompt_path();
        let result = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|_| fs::write(&path, &self.prompt));

        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved prompt");
                let at = chrono::Local::now().format("%H:%M:%S");
                self.set_status(format!("Saved to {} at {}", path.display(), at));
            }
            Err(e) => self.set_status(format!("Failed to save prompt: {}", e)),
        }
    }
}
